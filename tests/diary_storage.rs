//! Diary persistence through the file blob store, the worker, and back into
//! the Diary view.

use sommelier::domain::DiaryEntry;
use sommelier::storage::{DiaryStore, JsonFileStore, DIARY_KEY};
use sommelier::ui::BodyView;
use sommelier::worker::{DiaryWorker, WorkerMessage, WorkerResponse};
use sommelier::{handle_event, initialize, Config, Event, Tab};

fn entries() -> Vec<DiaryEntry> {
    vec![
        DiaryEntry {
            id: "1".to_string(),
            date: "2024-05-01T20:15:00Z".to_string(),
            wine_name: "Barolo Cannubi".to_string(),
            content: "Roses, tar, firm tannins.".to_string(),
        },
        DiaryEntry {
            id: "2".to_string(),
            date: "last summer".to_string(),
            wine_name: "Txakoli".to_string(),
            content: "Salty and bright.".to_string(),
        },
    ]
}

fn file_store(dir: &tempfile::TempDir) -> JsonFileStore {
    JsonFileStore::new(dir.path().join("data")).unwrap()
}

#[test]
fn saved_diary_is_read_back_by_a_new_store() {
    let dir = tempfile::tempdir().unwrap();

    let mut store = DiaryStore::new(Box::new(file_store(&dir)));
    store.save(&entries()).unwrap();

    let reopened = DiaryStore::new(Box::new(file_store(&dir)));
    assert_eq!(reopened.load_all(), entries());
}

#[test]
fn diary_file_uses_camel_case_fields() {
    let dir = tempfile::tempdir().unwrap();
    let store = file_store(&dir);
    let path = store.path_for(DIARY_KEY);

    DiaryStore::new(Box::new(store)).save(&entries()).unwrap();

    let raw = std::fs::read_to_string(path).unwrap();
    assert!(raw.contains("\"wineName\""));
    assert!(!raw.contains("wine_name"));
}

#[test]
fn corrupt_or_missing_diary_loads_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store = file_store(&dir);
    let path = store.path_for(DIARY_KEY);
    let diary = DiaryStore::new(Box::new(store));

    assert!(diary.load_all().is_empty());

    std::fs::write(&path, "{ not a diary").unwrap();
    assert!(diary.load_all().is_empty());
    assert!(diary.try_load_all().is_err());
}

#[test]
fn worker_round_trip_feeds_diary_view() {
    let dir = tempfile::tempdir().unwrap();
    let mut worker = DiaryWorker::with_store(Box::new(file_store(&dir)));

    let saved = worker.handle_message(WorkerMessage::save_diary(entries()));
    assert_eq!(saved, WorkerResponse::DiarySaved { count: 2 });

    let payload = serde_json::to_string(&WorkerMessage::load_diary()).unwrap();
    let reply = worker.handle_payload(&payload).unwrap();
    let response: WorkerResponse = serde_json::from_str(&reply).unwrap();

    let mut state = initialize(&Config::default());
    handle_event(&mut state, &Event::SelectTab(Tab::Diary)).unwrap();
    let (render, _) = handle_event(&mut state, &Event::WorkerResponse(response)).unwrap();
    assert!(render);

    let BodyView::Diary(view) = state.compute_viewmodel(30, 80).body else {
        panic!("expected the diary view");
    };
    assert!(view.empty_state.is_none());
    assert_eq!(view.rows.len(), 2);
    assert_eq!(view.rows[0].date, "2024-05-01");
    assert_eq!(view.rows[1].date, "last summer");
    assert!(view.rows[0].is_selected);
}
