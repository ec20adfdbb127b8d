mod common;

use chrono::NaiveDate;
use common::{shared_server, unique_path, TEST_LOCK};
use journal_planner::context::DARK_MARKER;
use journal_planner::errors::ClientError;
use journal_planner::forms::NewEntryForm;
use journal_planner::models::{CreateEntryRequest, UpdateEntryRequest};
use journal_planner::preferences::{PreferenceStore, Preferences};
use journal_planner::{ApiClient, ClientConfig, EntryContext};

fn request(title: &str, description: &str) -> CreateEntryRequest {
    CreateEntryRequest {
        title: Some(title.to_string()),
        description: Some(description.to_string()),
        scheduled_date: Some("2024-12-10".into()),
        ..Default::default()
    }
}

async fn context(base_url: &str) -> EntryContext {
    let config = ClientConfig {
        api_base_url: base_url.to_string(),
        preferences_path: unique_path("journal_planner_prefs", "json"),
    };
    EntryContext::connect(&config).await.unwrap()
}

#[tokio::test]
async fn context_init_loads_all_entries_once() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let api = ApiClient::new(&server.base_url);
    api.create_entry(&request("Preloaded", "Exists before init")).await.unwrap();

    let ctx = context(&server.base_url).await;
    let remote = api.list_entries().await.unwrap();
    assert_eq!(ctx.entries(), remote.as_slice());
}

#[tokio::test]
async fn context_save_appends_created_entry() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let mut ctx = context(&server.base_url).await;
    let before = ctx.entries().len();

    let saved = ctx.save_entry(&request("Saved", "Through the context")).await.unwrap().clone();

    assert_eq!(ctx.entries().len(), before + 1);
    assert_eq!(ctx.entries().last(), Some(&saved));
    assert_eq!(ctx.entry(&saved.id).map(|entry| entry.title.as_str()), Some("Saved"));
}

#[tokio::test]
async fn context_rejected_save_leaves_list_alone() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let mut ctx = context(&server.base_url).await;
    let before = ctx.entries().to_vec();

    let err = ctx.save_entry(&request("", "No title")).await.unwrap_err();
    assert!(matches!(err, ClientError::Api { status: 500, ref msg } if msg == "Error creating entry"));
    assert_eq!(ctx.entries(), before.as_slice());
}

#[tokio::test]
async fn context_update_overwrites_local_copy_on_success() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let mut ctx = context(&server.base_url).await;
    let id = ctx.save_entry(&request("Before", "Unchanged")).await.unwrap().id.clone();

    ctx.update_entry(
        &id,
        &UpdateEntryRequest {
            title: Some("After".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    let local = ctx.entry(&id).unwrap();
    assert_eq!(local.title, "After");
    assert_eq!(local.description, "Unchanged");
    let remote = ApiClient::new(&server.base_url).get_entry(&id).await.unwrap();
    assert_eq!(local, &remote);
}

#[tokio::test]
async fn context_failed_update_and_delete_keep_local_state() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let mut ctx = context(&server.base_url).await;
    let id = ctx.save_entry(&request("Kept", "Survives failures")).await.unwrap().id.clone();
    let before = ctx.entries().to_vec();

    let err = ctx
        .update_entry(
            &id,
            &UpdateEntryRequest {
                scheduled_date: Some("not-a-date".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::Api { ref msg, .. } if msg == "Error updating"));

    let err = ctx.delete_entry("nonexistent-id").await.unwrap_err();
    assert!(matches!(err, ClientError::Api { ref msg, .. } if msg == "Error deleting entry"));

    assert_eq!(ctx.entries(), before.as_slice());
}

#[tokio::test]
async fn context_delete_removes_entry_on_success() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let mut ctx = context(&server.base_url).await;
    let doomed = ctx.save_entry(&request("Doomed", "Goes away")).await.unwrap().id.clone();
    let kept = ctx.save_entry(&request("Kept", "Stays")).await.unwrap().id.clone();

    ctx.delete_entry(&doomed).await.unwrap();

    assert!(ctx.entry(&doomed).is_none());
    assert!(ctx.entry(&kept).is_some());

    ctx.refresh().await.unwrap();
    assert!(ctx.entry(&doomed).is_none());
    assert!(ctx.entry(&kept).is_some());
}

#[tokio::test]
async fn context_dark_mode_is_persisted_and_marked() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let prefs_path = unique_path("journal_planner_dark", "json");

    let mut ctx = EntryContext::init(
        ApiClient::new(&server.base_url),
        PreferenceStore::new(&prefs_path),
    )
    .await
    .unwrap();
    assert!(!ctx.dark_mode());
    assert!(!ctx.theme().contains(DARK_MARKER));

    assert!(ctx.toggle_dark_mode().await.unwrap());
    assert!(ctx.theme().contains(DARK_MARKER));
    assert_eq!(
        PreferenceStore::new(&prefs_path).load().await,
        Preferences { dark_mode: true }
    );

    let reopened = EntryContext::init(
        ApiClient::new(&server.base_url),
        PreferenceStore::new(&prefs_path),
    )
    .await
    .unwrap();
    assert!(reopened.dark_mode());
    assert!(reopened.theme().contains(DARK_MARKER));

    assert!(!ctx.toggle_dark_mode().await.unwrap());
    assert!(!ctx.theme().contains(DARK_MARKER));
    let _ = std::fs::remove_file(prefs_path);
}

#[tokio::test]
async fn form_submit_resets_draft_and_restores_on_failure() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let mut ctx = context(&server.base_url).await;
    let today = chrono::Local::now().date_naive();

    let mut form = NewEntryForm::new(today);
    form.set_field("title", "From the form").unwrap();
    form.set_field("description", "Typed by hand").unwrap();
    form.set_field("scheduled_date", "2024-12-10").unwrap();

    let saved = form.submit(&mut ctx).await.unwrap();
    assert_eq!(saved.title, "From the form");
    assert_eq!(saved.scheduled_date.date_naive(), NaiveDate::from_ymd_opt(2024, 12, 10).unwrap());
    assert!(form.draft().title.is_empty());
    assert!(form.draft().description.is_empty());

    form.set_field("title", "Missing description").unwrap();
    assert!(form.submit(&mut ctx).await.is_err());
    assert_eq!(form.draft().title, "Missing description");
}
