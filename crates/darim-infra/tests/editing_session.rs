//! End-to-end editing sessions against the in-memory post API.

use std::sync::Arc;
use std::time::Duration;

use darim_core::domain::{Credential, PostDraft, parse_datetime};
use darim_core::editor::{
    Candidates, DeleteOutcome, Field, PostEditor, SaveReport, SaveStatus, SkipReason, ViewFrame,
    ViewMode,
};
use darim_infra::{InMemoryPostApi, PlainTextPreview};

fn owner() -> Credential {
    Credential::new(1)
}

fn draft(title: &str, date: &str, content: &str) -> PostDraft {
    PostDraft {
        title: title.to_string(),
        date: parse_datetime(date).unwrap(),
        content: content.to_string(),
    }
}

#[tokio::test]
async fn test_write_new_post_then_edit_it() {
    let api = Arc::new(InMemoryPostApi::new());
    let editor = PostEditor::new_post(api.clone(), owner());

    editor.blur(Field::Title, "Hello").await;
    editor.blur(Field::Date, "2024-01-01").await;
    let report = editor.blur(Field::Content, "World").await;
    assert_eq!(report, SaveReport::Settled(SaveStatus::Success));

    let id = editor.post_id().await.unwrap();
    assert_eq!(
        api.get(id).await.unwrap().draft(),
        draft("Hello", "2024-01-01", "World")
    );

    editor.blur(Field::Content, "World, revised").await;
    assert_eq!(api.get(id).await.unwrap().content, "World, revised");
    assert_eq!(api.len().await, 1);
}

#[tokio::test]
async fn test_reopen_persisted_post() {
    let api = Arc::new(InMemoryPostApi::new());
    let id = api
        .insert(&owner(), draft("Stored", "2023-06-01T08:15:00", "Body"))
        .await;

    let editor = PostEditor::open(api.clone(), owner(), id).await.unwrap();

    assert_eq!(editor.state().await.view_mode, ViewMode::Preview);
    assert_eq!(editor.fields().await.date, "2023-06-01");
    assert_eq!(
        editor
            .attempt_save(Candidates::all(&editor.fields().await))
            .await,
        SaveReport::Skipped(SkipReason::Clean)
    );
}

#[tokio::test]
async fn test_other_users_post_cannot_be_opened() {
    let api = Arc::new(InMemoryPostApi::new());
    let id = api.insert(&owner(), draft("Mine", "2024-01-01", "x")).await;

    let result = PostEditor::open(api, Credential::new(2), id).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_transient_failure_and_retry() {
    let api = Arc::new(InMemoryPostApi::new());
    let id = api.insert(&owner(), draft("Hello", "2024-01-01", "World")).await;
    let editor = PostEditor::open(api.clone(), owner(), id).await.unwrap();

    api.fail_next(1);
    let report = editor.blur(Field::Title, "Hello there").await;
    assert_eq!(report, SaveReport::Settled(SaveStatus::Failure));
    assert_eq!(api.get(id).await.unwrap().title, "Hello");

    assert_eq!(editor.retry().await, Ok(SaveStatus::Success));
    assert_eq!(api.get(id).await.unwrap().title, "Hello there");
}

#[tokio::test]
async fn test_overlapping_blurs_with_latency() {
    let api = Arc::new(InMemoryPostApi::new().with_latency(Duration::from_millis(20)));
    let id = api.insert(&owner(), draft("Hello", "2024-01-01", "World")).await;
    let editor = PostEditor::open(api.clone(), owner(), id).await.unwrap();

    let (first, second) = tokio::join!(editor.blur(Field::Title, "A"), async {
        tokio::time::sleep(Duration::from_millis(5)).await;
        editor.blur(Field::Content, "B").await
    });

    assert_eq!(first, SaveReport::Settled(SaveStatus::Success));
    assert_eq!(second, SaveReport::Coalesced);

    let stored = api.get(id).await.unwrap();
    assert_eq!(stored.title, "A");
    assert_eq!(stored.content, "B");
    assert_eq!(editor.snapshot().await, Some(stored.draft()));
}

#[tokio::test]
async fn test_preview_and_delete() {
    let api = Arc::new(InMemoryPostApi::new());
    let id = api.insert(&owner(), draft("Hello", "2024-01-01", "a < b")).await;
    let editor = PostEditor::open(api.clone(), owner(), id).await.unwrap();

    match editor.frame(&PlainTextPreview).await {
        ViewFrame::Preview { title, html, .. } => {
            assert_eq!(title, "Hello");
            assert_eq!(html, "<p>a &lt; b</p>\n");
        }
        other => panic!("expected preview, got {other:?}"),
    }

    assert_eq!(
        editor.delete(&|_: &str| true).await,
        Ok(DeleteOutcome::Deleted)
    );
    assert!(api.get(id).await.is_none());
    assert!(editor.state().await.closed);
    assert_eq!(editor.post_id().await, Some(id));
}
