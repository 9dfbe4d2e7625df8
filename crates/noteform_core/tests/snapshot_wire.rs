use noteform_core::{NoteSnapshot, NotebookId, ScrollState};
use serde_json::json;

fn snapshot(notebook_id: NotebookId) -> NoteSnapshot {
    NoteSnapshot {
        title: "Unnamed".to_string(),
        content: "- [x] a".to_string(),
        notebook_id,
        tags: vec!["b".to_string(), "a".to_string(), "b".to_string()],
        task_all: 1,
        task_completed: 1,
    }
}

#[test]
fn snapshot_serializes_with_camel_case_keys() {
    let value = serde_json::to_value(snapshot(NotebookId::Id(4))).expect("serializable");
    assert_eq!(
        value,
        json!({
            "title": "Unnamed",
            "content": "- [x] a",
            "notebookId": 4,
            "tags": ["b", "a", "b"],
            "taskAll": 1,
            "taskCompleted": 1
        })
    );
}

#[test]
fn not_a_number_notebook_serializes_as_null() {
    let value = serde_json::to_value(snapshot(NotebookId::NotANumber)).expect("serializable");
    assert!(value["notebookId"].is_null());
}

#[test]
fn scroll_state_serializes_for_reactive_binding() {
    let value = serde_json::to_value(ScrollState {
        stuck: true,
        applied_offset: 298,
    })
    .expect("serializable");
    assert_eq!(value, json!({ "stuck": true, "appliedOffset": 298 }));
}
