mod common;

use axum::http::{Method, StatusCode};
use chrono::{FixedOffset, Utc};
use common::{client, dead_origin, FakeBackend, ScriptedDialogs};
use socialdash_client::actions::{self, ActionOutcome, Refresh};

#[tokio::test]
async fn add_account_refreshes_accounts() {
    let backend = FakeBackend::default();
    backend.respond(
        Method::POST,
        "/accounts/add-platform",
        StatusCode::OK,
        r#"{"msg":"Account linked successfully","account_id":7}"#,
    );
    let origin = backend.start().await;
    let (api, _) = client(&origin, Some("tok"));
    let dialogs = ScriptedDialogs::accepting();

    let outcome = actions::add_account(&api, &dialogs, "twitter", "alice").await;

    assert_eq!(outcome, ActionOutcome::Completed(Refresh::ACCOUNTS));
    assert_eq!(dialogs.alerts(), vec!["Account added successfully!"]);
    let req = &backend.requests()[0];
    let body: serde_json::Value = serde_json::from_str(&req.body).unwrap();
    assert_eq!(
        body,
        serde_json::json!({"platform": "twitter", "username": "alice"})
    );
}

#[tokio::test]
async fn add_account_surfaces_server_detail() {
    let backend = FakeBackend::default();
    backend.respond(
        Method::POST,
        "/accounts/add-platform",
        StatusCode::BAD_REQUEST,
        r#"{"detail":"Account with username 'alice' on platform 'twitter' already exists for this user."}"#,
    );
    let origin = backend.start().await;
    let (api, _) = client(&origin, Some("tok"));
    let dialogs = ScriptedDialogs::accepting();

    let outcome = actions::add_account(&api, &dialogs, "twitter", "alice").await;

    assert_eq!(outcome, ActionOutcome::Failed);
    assert_eq!(
        dialogs.alerts(),
        vec!["Error: Account with username 'alice' on platform 'twitter' already exists for this user."]
    );
}

#[tokio::test]
async fn declined_delete_sends_nothing() {
    let backend = FakeBackend::default();
    let origin = backend.start().await;
    let (api, _) = client(&origin, Some("tok"));
    let dialogs = ScriptedDialogs::declining();

    let outcome = actions::delete_account(&api, &dialogs, "twitter", "alice").await;

    assert_eq!(outcome, ActionOutcome::Cancelled);
    assert_eq!(
        *dialogs.confirms.borrow(),
        vec!["Are you sure you want to delete @alice (twitter)?"]
    );
    assert!(backend.requests().is_empty());
}

#[tokio::test]
async fn confirmed_delete_refreshes_accounts() {
    let backend = FakeBackend::default();
    backend.respond(
        Method::DELETE,
        "/accounts/twitter/alice",
        StatusCode::OK,
        r#"{"msg":"Account disconnected successfully"}"#,
    );
    let origin = backend.start().await;
    let (api, _) = client(&origin, Some("tok"));
    let dialogs = ScriptedDialogs::accepting();

    let outcome = actions::delete_account(&api, &dialogs, "twitter", "alice").await;

    assert_eq!(outcome, ActionOutcome::Completed(Refresh::ACCOUNTS));
    assert_eq!(dialogs.alerts(), vec!["Account @alice deleted successfully"]);
}

#[tokio::test]
async fn failed_delete_uses_generic_message() {
    let backend = FakeBackend::default();
    backend.respond(
        Method::DELETE,
        "/accounts/twitter/alice",
        StatusCode::INTERNAL_SERVER_ERROR,
        "Internal Server Error",
    );
    let origin = backend.start().await;
    let (api, _) = client(&origin, Some("tok"));
    let dialogs = ScriptedDialogs::accepting();

    let outcome = actions::delete_account(&api, &dialogs, "twitter", "alice").await;

    assert_eq!(outcome, ActionOutcome::Failed);
    assert_eq!(
        dialogs.alerts(),
        vec!["Error deleting account: Failed to delete account"]
    );
}

#[tokio::test]
async fn schedule_requires_both_fields() {
    let backend = FakeBackend::default();
    let origin = backend.start().await;
    let (api, _) = client(&origin, Some("tok"));

    for (content, time) in [("", "2025-03-01T14:30"), ("hello", ""), ("", "")] {
        let dialogs = ScriptedDialogs::accepting();
        let outcome = actions::schedule_post_in(&api, &dialogs, content, time, &Utc).await;
        assert_eq!(outcome, ActionOutcome::Rejected);
        assert_eq!(dialogs.alerts(), vec!["Please fill out both fields"]);
    }
    assert!(backend.requests().is_empty());
}

#[tokio::test]
async fn schedule_sends_utc_and_refreshes_posts() {
    let backend = FakeBackend::default();
    backend.respond(
        Method::POST,
        "/accounts/schedule",
        StatusCode::OK,
        r#"{"msg":"Post scheduled successfully","scheduled_time":"2025-03-01T13:30:00+00:00"}"#,
    );
    let origin = backend.start().await;
    let (api, _) = client(&origin, Some("tok"));
    let dialogs = ScriptedDialogs::accepting();
    let tz = FixedOffset::east_opt(3600).unwrap();

    let outcome =
        actions::schedule_post_in(&api, &dialogs, "launch day", "2025-03-01T14:30", &tz).await;

    assert_eq!(outcome, ActionOutcome::Completed(Refresh::POSTS));
    let body: serde_json::Value = serde_json::from_str(&backend.requests()[0].body).unwrap();
    assert_eq!(
        body,
        serde_json::json!({"content": "launch day", "scheduled_time": "2025-03-01T13:30:00.000Z"})
    );
    assert_eq!(
        dialogs.alerts(),
        vec!["Post scheduled successfully (Scheduled at 3/1/2025, 2:30:00 PM)"]
    );
}

#[tokio::test]
async fn schedule_with_unreadable_time_still_succeeds() {
    let backend = FakeBackend::default();
    backend.respond(
        Method::POST,
        "/accounts/schedule",
        StatusCode::OK,
        r#"{"msg":"Post scheduled","scheduled_time":"pending"}"#,
    );
    let origin = backend.start().await;
    let (api, _) = client(&origin, Some("tok"));
    let dialogs = ScriptedDialogs::accepting();
    let tz = FixedOffset::east_opt(3600).unwrap();

    let outcome =
        actions::schedule_post_in(&api, &dialogs, "launch day", "2025-03-01T14:30", &tz).await;

    assert_eq!(outcome, ActionOutcome::Completed(Refresh::POSTS));
    assert_eq!(
        dialogs.alerts(),
        vec!["Post scheduled (Scheduled at Invalid Date)"]
    );
    assert_eq!(backend.requests().len(), 1);
}

#[tokio::test]
async fn schedule_rejection_shows_validation_message() {
    let backend = FakeBackend::default();
    backend.respond(
        Method::POST,
        "/accounts/schedule",
        StatusCode::UNPROCESSABLE_ENTITY,
        r#"{"detail":[{"loc":["body","scheduled_time"],"msg":"Scheduled time must be in the future","type":"value_error"}]}"#,
    );
    let origin = backend.start().await;
    let (api, _) = client(&origin, Some("tok"));
    let dialogs = ScriptedDialogs::accepting();

    let outcome =
        actions::schedule_post_in(&api, &dialogs, "hi", "2020-01-01T00:00", &Utc).await;

    assert_eq!(outcome, ActionOutcome::Failed);
    assert_eq!(
        dialogs.alerts(),
        vec!["Error: Scheduled time must be in the future"]
    );
}

#[tokio::test]
async fn schedule_network_failure_is_generic() {
    let origin = dead_origin().await;
    let (api, _) = client(&origin, Some("tok"));
    let dialogs = ScriptedDialogs::accepting();

    let outcome =
        actions::schedule_post_in(&api, &dialogs, "hi", "2030-01-01T00:00", &Utc).await;

    assert_eq!(outcome, ActionOutcome::Failed);
    assert_eq!(dialogs.alerts(), vec!["Error scheduling post"]);
}

#[tokio::test]
async fn unfollow_refreshes_both_connection_lists() {
    let backend = FakeBackend::default();
    backend.respond(
        Method::DELETE,
        "/accounts/following/bob",
        StatusCode::OK,
        "{}",
    );
    let origin = backend.start().await;
    let (api, _) = client(&origin, Some("tok"));
    let dialogs = ScriptedDialogs::accepting();

    let outcome = actions::unfollow(&api, &dialogs, "bob").await;

    assert_eq!(outcome, ActionOutcome::Completed(Refresh::CONNECTIONS));
    assert_eq!(
        *dialogs.confirms.borrow(),
        vec!["Are you sure you want to unfollow @bob?"]
    );
    assert_eq!(dialogs.alerts(), vec!["Unfollowed @bob"]);
}
