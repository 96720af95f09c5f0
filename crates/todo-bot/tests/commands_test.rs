//! Integration tests driving the bot with chat text against a real directory.

use std::collections::HashSet;
use std::path::Path;

use tempfile::tempdir;
use todo_bot::{dispatch, handle_todo, TodoCommand};
use todo_models::TodoId;
use todo_persistence::{RecordingSink, Reply, TodoStore};

fn lines(sink: &RecordingSink) -> Vec<String> {
    sink.take().iter().map(|r| r.to_string()).collect()
}

fn ids_in(dir: &Path) -> HashSet<String> {
    std::fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect()
}

#[tokio::test]
async fn test_conversation_round_trip() {
    let dir = tempdir().unwrap();
    let todos = dir.path().join("todos");
    let store = TodoStore::new(&todos);
    let sink = RecordingSink::new();

    assert!(dispatch(&store, &sink, "show my todo list").await);
    assert_eq!(lines(&sink), vec!["The list is empty!".to_string()]);

    assert!(dispatch(&store, &sink, "add buy milk to my todo list").await);
    assert_eq!(
        lines(&sink),
        vec!["OK! I added buy milk to the todo list".to_string()]
    );

    assert!(dispatch(&store, &sink, "Show my todo list").await);
    let listed = lines(&sink);
    assert_eq!(listed.len(), 1);
    let id = listed[0]
        .strip_suffix(": buy milk")
        .expect("listed line should end with the content")
        .to_string();
    assert!(TodoId::parse(&id).is_some());

    assert!(dispatch(&store, &sink, &format!("{} is done", id)).await);
    assert_eq!(lines(&sink), vec![format!("OK! Removed {}", id)]);

    assert!(dispatch(&store, &sink, "show my todo list").await);
    assert_eq!(lines(&sink), vec!["The list is empty!".to_string()]);
}

#[tokio::test]
async fn test_unknown_id_is_not_found() {
    let dir = tempdir().unwrap();
    let todos = dir.path().join("todos");
    let store = TodoStore::new(&todos);
    let sink = RecordingSink::new();

    dispatch(&store, &sink, "add walk the dog to my todo list").await;
    sink.take();
    let before = ids_in(&todos);

    let id = "7c9e6679-7425-40de-944b-e07fc1f90ae7";
    assert!(dispatch(&store, &sink, &format!("{} is done", id)).await);

    assert_eq!(lines(&sink), vec![format!("Couldn't find {}", id)]);
    assert_eq!(ids_in(&todos), before);
}

#[tokio::test]
async fn test_unrecognized_text_gets_no_reply() {
    let dir = tempdir().unwrap();
    let store = TodoStore::new(dir.path().join("todos"));
    let sink = RecordingSink::new();

    assert!(!dispatch(&store, &sink, "what's the weather like?").await);
    assert!(!dispatch(&store, &sink, "not-a-uuid is done").await);
    assert!(sink.replies().is_empty());
}

#[tokio::test]
async fn test_many_adds_list_each_once() {
    let dir = tempdir().unwrap();
    let todos = dir.path().join("todos");
    let store = TodoStore::new(&todos);
    let sink = RecordingSink::new();

    for i in 0..5 {
        handle_todo(&store, &sink, TodoCommand::Add(format!("task {}", i))).await;
    }
    sink.take();

    handle_todo(&store, &sink, TodoCommand::List).await;
    let replies = sink.take();

    assert_eq!(replies.len(), 5);
    let mut contents: Vec<_> = replies
        .iter()
        .map(|r| match r {
            Reply::Item(item) => item.content.clone(),
            other => panic!("unexpected reply: {:?}", other),
        })
        .collect();
    contents.sort();
    assert_eq!(
        contents,
        (0..5).map(|i| format!("task {}", i)).collect::<Vec<_>>()
    );
    assert_eq!(ids_in(&todos).len(), 5);
}

#[tokio::test]
async fn test_list_fails_when_storage_is_a_file() {
    let dir = tempdir().unwrap();
    let todos = dir.path().join("todos");
    std::fs::write(&todos, "not a directory").unwrap();
    let store = TodoStore::new(&todos);
    let sink = RecordingSink::new();

    dispatch(&store, &sink, "show my todo list").await;

    assert_eq!(sink.take(), vec![Reply::ListFailed]);
}
