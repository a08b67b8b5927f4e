//! Settings → clip flow over real adapters.
//!
//! Settings live in a temp file, clips go to a mockito endpoint.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use influss_app::usecases::{ClipUrl, GetSettings, HandleTrigger, UpdateSettings};
use influss_app::CachedSettings;
use influss_core::clip::ClipResult;
use influss_core::ports::{FeedbackPort, SettingsObserverPort, SettingsPort};
use influss_core::settings::Settings;
use influss_core::trigger::{ClipTrigger, ContextMenuClick};
use influss_infra::{FileSettingsRepository, HttpClipTransport, ObservableSettings};
use mockito::Matcher;
use tempfile::TempDir;

#[derive(Default)]
struct CollectingFeedback(Mutex<Vec<ClipResult>>);

impl FeedbackPort for CollectingFeedback {
    fn notify(&self, _source: &str, result: &ClipResult) {
        self.0.lock().unwrap().push(result.clone());
    }
}

struct Harness {
    _dir: TempDir,
    settings: Arc<CachedSettings>,
    handler: HandleTrigger,
    feedback: Arc<CollectingFeedback>,
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}

fn harness() -> Harness {
    init_tracing();
    let dir = tempfile::tempdir().unwrap();
    let observable = Arc::new(ObservableSettings::new(FileSettingsRepository::new(
        dir.path().join("settings.json"),
    )));
    let settings = Arc::new(CachedSettings::new(observable.clone()));
    settings.spawn_refresh(observable.subscribe());

    let transport = Arc::new(HttpClipTransport::new(Duration::from_secs(5)).unwrap());
    let feedback = Arc::new(CollectingFeedback::default());
    let handler = HandleTrigger::new(
        ClipUrl::new(settings.clone(), transport),
        feedback.clone(),
    );

    Harness {
        _dir: dir,
        settings,
        handler,
        feedback,
    }
}

#[tokio::test]
async fn fresh_install_reports_not_configured() {
    let h = harness();

    let settings = GetSettings::new(h.settings.clone()).execute().await.unwrap();
    assert_eq!(settings, Settings::default());

    let result = h
        .handler
        .execute(ClipTrigger::ToolbarClick {
            tab_url: "https://example.com/article".into(),
        })
        .await
        .unwrap();

    assert!(!result.success);
    assert_eq!(result.message, "endpoint not configured");
    assert_eq!(h.feedback.0.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn saved_settings_are_used_by_the_next_clip() {
    let h = harness();
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/clips")
        .match_header("authorization", "Basic YWxpY2U6c2VjcmV0")
        .match_body(Matcher::Json(serde_json::json!({
            "url": "https://b.example/linked"
        })))
        .with_status(200)
        .create_async()
        .await;

    UpdateSettings::new(h.settings.clone())
        .execute(Settings::new(
            format!("{}/clips", server.url()),
            "alice",
            "secret",
        ))
        .await
        .unwrap();

    let result = h
        .handler
        .execute(ClipTrigger::ContextMenu(ContextMenuClick::clip(
            Some("https://a.example".into()),
            Some("https://b.example/linked".into()),
        )))
        .await
        .unwrap();

    assert!(result.success, "{result:?}");
    mock.assert_async().await;
}

#[tokio::test]
async fn endpoint_rejection_is_reported_with_status() {
    let h = harness();
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/")
        .with_status(403)
        .expect(1)
        .create_async()
        .await;

    h.settings
        .save(&Settings::new(server.url(), "", ""))
        .await
        .unwrap();

    let result = h
        .handler
        .execute(ClipTrigger::PopupMessage {
            url: "https://example.com".into(),
        })
        .await
        .unwrap();

    assert!(!result.success);
    assert!(result.message.contains("403"), "{}", result.message);
    mock.assert_async().await;
}
