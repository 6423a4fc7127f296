// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Persistence round-trip tests over the in-memory and file stores.

use workout_map_log::db::{keys, FileStore, KeyValueStore, MemoryStore, WorkoutRepository};
use workout_map_log::models::{Coords, Workout, WorkoutKind};
use workout_map_log::services::{WorkoutFactory, WorkoutStore};

fn sample_history(factory: &WorkoutFactory) -> Vec<Workout> {
    vec![
        factory
            .create(WorkoutKind::Running, Coords::new(40.0, -3.7), 5.0, 30.0, 160.0)
            .unwrap(),
        factory
            .create(WorkoutKind::Cycling, Coords::new(40.1, -3.6), 20.0, 60.0, 300.0)
            .unwrap(),
        factory
            .create(WorkoutKind::Cycling, Coords::new(-33.9, 151.2), 42.5, 95.0, -120.0)
            .unwrap(),
        factory
            .create(WorkoutKind::Running, Coords::new(51.5, -0.12), 10.2, 55.3, 172.0)
            .unwrap(),
    ]
}

#[test]
fn test_restore_reproduces_saved_history() {
    let factory = WorkoutFactory::new();
    let kv = MemoryStore::new();
    let history = sample_history(&factory);

    let mut store = WorkoutStore::new(WorkoutRepository::new(kv.clone()));
    for w in &history {
        store.append(w.clone()).unwrap();
    }

    let mut reopened = WorkoutStore::new(WorkoutRepository::new(kv));
    assert!(reopened.is_empty());
    assert_eq!(reopened.restore().unwrap(), history.len());

    assert_eq!(reopened.all(), history.as_slice());
    let kinds: Vec<WorkoutKind> = reopened.all().iter().map(Workout::kind).collect();
    assert_eq!(
        kinds,
        vec![
            WorkoutKind::Running,
            WorkoutKind::Cycling,
            WorkoutKind::Cycling,
            WorkoutKind::Running
        ]
    );
}

#[test]
fn test_find_by_id_after_restore() {
    let factory = WorkoutFactory::new();
    let kv = MemoryStore::new();
    let history = sample_history(&factory);

    let mut repo = WorkoutRepository::new(kv.clone());
    repo.save(&history).unwrap();

    let mut store = WorkoutStore::new(WorkoutRepository::new(kv));
    store.restore().unwrap();

    for w in &history {
        assert_eq!(store.find_by_id(w.id()), Some(w));
    }
    assert_eq!(store.find_by_id(&"0123456789abcdef".into()), None);
}

#[test]
fn test_usage_count_not_persisted() {
    let factory = WorkoutFactory::new();
    let kv = MemoryStore::new();
    let w = sample_history(&factory).remove(0);
    let id = w.id().clone();

    let mut store = WorkoutStore::new(WorkoutRepository::new(kv.clone()));
    store.append(w).unwrap();
    store.record_activation(&id);
    assert_eq!(store.find_by_id(&id).unwrap().usage_count(), 1);
    // Force a save after the activation.
    store
        .append(
            factory
                .create(WorkoutKind::Running, Coords::new(0.0, 0.0), 1.0, 5.0, 150.0)
                .unwrap(),
        )
        .unwrap();

    let mut reopened = WorkoutStore::new(WorkoutRepository::new(kv));
    reopened.restore().unwrap();
    assert_eq!(reopened.find_by_id(&id).unwrap().usage_count(), 0);
}

#[test]
fn test_stored_metrics_are_trusted() {
    let mut kv = MemoryStore::new();
    kv.set(
        keys::WORKOUTS,
        r#"[{"id":"legacy","createdAt":"2024-05-01T07:30:00.000Z","coords":[40,-3.7],
            "distanceKm":5,"durationMin":30,"type":"running","cadenceSpm":160,"paceMinPerKm":5.5}]"#,
    )
    .unwrap();

    let mut store = WorkoutStore::new(WorkoutRepository::new(kv));
    store.restore().unwrap();

    assert_eq!(store.all()[0].pace_min_per_km(), Some(5.5));
}

#[test]
fn test_corrupt_history_loads_empty() {
    let mut kv = MemoryStore::new();
    kv.set(keys::WORKOUTS, "[{\"id\": 1,").unwrap();

    let mut store = WorkoutStore::new(WorkoutRepository::new(kv));
    assert_eq!(store.restore().unwrap(), 0);
    assert!(store.all().is_empty());
}

#[test]
fn test_load_on_empty_store() {
    let repo = WorkoutRepository::new(MemoryStore::new());
    assert!(repo.load().unwrap().is_empty());
}

#[test]
fn test_file_store_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let factory = WorkoutFactory::new();
    let history = sample_history(&factory);

    {
        let kv = FileStore::open(dir.path()).unwrap();
        let mut store = WorkoutStore::new(WorkoutRepository::new(kv));
        for w in &history {
            store.append(w.clone()).unwrap();
        }
    }

    let kv = FileStore::open(dir.path()).unwrap();
    let mut store = WorkoutStore::new(WorkoutRepository::new(kv));
    store.restore().unwrap();
    assert_eq!(store.all(), history.as_slice());
}

#[test]
fn test_extreme_input_never_loses_history() {
    let factory = WorkoutFactory::new();
    let kv = MemoryStore::new();
    let mut store = WorkoutStore::new(WorkoutRepository::new(kv.clone()));

    store
        .append(
            factory
                .create(WorkoutKind::Running, Coords::new(40.0, -3.7), 5.0, 30.0, 160.0)
                .unwrap(),
        )
        .unwrap();

    // Overflowing speed is refused before it can reach storage.
    assert!(factory
        .create(WorkoutKind::Cycling, Coords::new(0.0, 0.0), 1e308, 1e-3, 0.0)
        .is_err());

    // Extreme but finite values still round-trip exactly.
    for (kind, distance, duration) in [
        (WorkoutKind::Cycling, 1e300, 1e300),
        (WorkoutKind::Running, 1e-300, 1e-300),
        (WorkoutKind::Cycling, 1e-9, 1e6),
        (WorkoutKind::Running, 1e6, 1e-3),
    ] {
        let w = factory
            .create(kind, Coords::new(0.0, 0.0), distance, duration, 170.0)
            .unwrap();
        store.append(w).unwrap();
    }

    let mut reopened = WorkoutStore::new(WorkoutRepository::new(kv));
    assert_eq!(reopened.restore().unwrap(), store.len());
    assert_eq!(reopened.all(), store.all());
}
