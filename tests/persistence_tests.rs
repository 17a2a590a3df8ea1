//! Persistence behavior: write-through on mutation, record removal on
//! close, restore in a fresh process, and corrupted-record recovery.

mod common;

use common::{INITIAL, SharedStore, SpyHost, VIEWPORT, manager_with};
use oriel::{
    FileSessionStore, PointPx, PointerSample, SizePx, TargetId, WindowManager,
};

#[test]
fn test_every_visible_mutation_writes_through() {
    let store = SharedStore::new();
    let mut m = manager_with(store.clone(), SpyHost::default());

    m.open(TargetId::from("proj-42"), Some("Dossier 42"));
    let record = store.record().expect("record after open");
    assert_eq!(record.target_id, TargetId::from("proj-42"));
    assert_eq!(record.target_label.as_deref(), Some("Dossier 42"));
    assert!(!record.saved_at.is_empty());

    // A mid-drag move is already persisted, not only the release.
    m.begin_drag(PointerSample::new(INITIAL.left, INITIAL.top));
    m.pointer_moved(PointerSample::new(INITIAL.left + 30.0, INITIAL.top + 20.0));
    let record = store.record().unwrap();
    assert_eq!(
        record.window.position,
        PointPx::new(INITIAL.left + 30.0, INITIAL.top + 20.0)
    );
    m.pointer_released();

    m.toggle_maximize();
    let record = store.record().unwrap();
    assert!(record.window.maximized);
    assert_eq!(record.window.saved_size, INITIAL.size());
}

#[test]
fn test_close_removes_the_record() {
    let store = SharedStore::new();
    let mut m = manager_with(store.clone(), SpyHost::default());
    m.open(TargetId::from("a"), None);
    assert!(store.record().is_some());
    m.close();
    assert!(store.record().is_none());
}

#[test]
fn test_fresh_process_restores_exactly() {
    let store = SharedStore::new();
    {
        let mut m = manager_with(store.clone(), SpyHost::default());
        m.open(TargetId::from("proj-42"), Some("Dossier 42"));
        m.begin_drag(PointerSample::new(INITIAL.left, INITIAL.top));
        m.pointer_moved(PointerSample::new(200.0, 150.0));
        m.pointer_released();
        m.toggle_minimize();
    }

    // "Reload": a new manager over the same store.
    let m = manager_with(store.clone(), SpyHost::default());
    let state = m.state();
    assert!(state.visible);
    assert!(state.minimized);
    assert_eq!(state.target_id, Some(TargetId::from("proj-42")));
    assert_eq!(state.target_label.as_deref(), Some("Dossier 42"));
    assert_eq!(state.position, PointPx::new(200.0, 150.0));
    assert_eq!(state.size, INITIAL.size());
}

#[test]
fn test_embedded_process_never_restores() {
    let store = SharedStore::new();
    {
        let mut m = manager_with(store.clone(), SpyHost::default());
        m.open(TargetId::from("a"), None);
    }
    let m = manager_with(store.clone(), SpyHost::embedded());
    assert!(!m.state().visible);
    // The record is left for a non-embedded process to pick up.
    assert!(store.record().is_some());
}

#[test]
fn test_file_store_round_trip_across_managers() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");

    {
        let mut m = WindowManager::new(
            "view",
            VIEWPORT,
            INITIAL,
            Box::new(FileSessionStore::at(path.clone())),
            Box::new(SpyHost::default()),
        );
        m.open(TargetId::from("proj-42"), Some("Dossier 42"));
        m.begin_resize(
            oriel::ResizeDirection::SouthEast,
            PointerSample::new(INITIAL.right(), INITIAL.bottom()),
        );
        m.pointer_moved(PointerSample::new(
            INITIAL.right() + 60.0,
            INITIAL.bottom() + 40.0,
        ));
        m.pointer_released();
        assert!(path.exists());
    }

    let m = WindowManager::new(
        "view",
        VIEWPORT,
        INITIAL,
        Box::new(FileSessionStore::at(path.clone())),
        Box::new(SpyHost::default()),
    );
    assert!(m.state().visible);
    assert_eq!(
        m.state().size,
        SizePx::new(INITIAL.width + 60.0, INITIAL.height + 40.0)
    );

    // Closing from the restored process removes the file.
    let mut m = m;
    m.close();
    assert!(!path.exists());
}

#[test]
fn test_corrupted_record_discarded_and_deleted() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");
    std::fs::write(&path, "{ this is not a record").unwrap();

    let m = WindowManager::new(
        "view",
        VIEWPORT,
        INITIAL,
        Box::new(FileSessionStore::at(path.clone())),
        Box::new(SpyHost::default()),
    );

    // Defaults, and the bad file is gone so the failure cannot repeat.
    assert!(!m.state().visible);
    assert_eq!(m.state().position, INITIAL.position());
    assert!(!path.exists());
}

#[test]
fn test_record_json_schema_is_stable() {
    let store = SharedStore::new();
    let mut m = manager_with(store.clone(), SpyHost::default());
    m.open(TargetId::from("proj-42"), Some("Dossier 42"));

    let record = store.record().unwrap();
    let json = serde_json::to_value(&record).unwrap();
    assert_eq!(json["target_id"], "proj-42");
    assert_eq!(json["target_label"], "Dossier 42");
    assert!(json["window"]["position"]["x"].is_number());
    assert!(json["window"]["size"]["width"].is_number());
    assert_eq!(json["window"]["maximized"], false);
    // Transient state never reaches the store.
    assert!(json.get("visible").is_none());
    assert!(json["window"].get("visible").is_none());
}
