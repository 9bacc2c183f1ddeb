//! Integration tests for the MT5 dashboard client against a mocked backend.

use mt5_dashboard::{
    common::enums::{AccountType, ConnectionStatus},
    session::{Notice, SessionController},
    CredentialStore, FileCredentialStore, Mt5DashboardConfig, Mt5Error, Mt5HttpClient,
};
use serde_json::json;
use tempfile::TempDir;
use wiremock::{
    matchers::{body_json, method, path},
    Mock, MockServer, ResponseTemplate,
};

struct Harness {
    server: MockServer,
    dir: TempDir,
}

impl Harness {
    async fn start() -> Self {
        Self {
            server: MockServer::start().await,
            dir: tempfile::tempdir().unwrap(),
        }
    }

    fn config(&self) -> Mt5DashboardConfig {
        Mt5DashboardConfig {
            credentials_dir: Some(self.dir.path().to_path_buf()),
            ..Mt5DashboardConfig::with_base_url(format!("{}/api", self.server.uri()))
        }
    }

    fn store(&self) -> FileCredentialStore {
        FileCredentialStore::from_config(&self.config()).unwrap()
    }

    fn session(&self) -> SessionController<Mt5HttpClient, FileCredentialStore> {
        let client = Mt5HttpClient::new(&self.config()).unwrap();
        SessionController::new(client, self.store())
    }

    async fn mock_status(&self, connected: bool) {
        Mock::given(method("GET"))
            .and(path("/api/mt5/status"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "mt5_available": true,
                "initialized": connected,
                "connected": connected,
            })))
            .mount(&self.server)
            .await;
    }

    async fn mock_initialize(&self) {
        Mock::given(method("POST"))
            .and(path("/api/mt5/initialize"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"status": "success", "message": "MT5 initialized"})),
            )
            .mount(&self.server)
            .await;
    }

    async fn mock_account(&self) {
        Mock::given(method("GET"))
            .and(path("/api/mt5/account"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "login": 7,
                "balance": 10000.0,
                "equity": 10025.5,
                "profit": 25.5,
                "margin_level": 0.0,
                "currency": "USD",
            })))
            .mount(&self.server)
            .await;
    }
}

#[tokio::test]
async fn test_login_persists_record_and_fetches_account() {
    let harness = Harness::start().await;
    harness.mock_status(false).await;
    harness.mock_initialize().await;
    harness.mock_account().await;
    Mock::given(method("POST"))
        .and(path("/api/mt5/login"))
        .and(body_json(json!({"login": 7, "password": "pw", "server": "MetaQuotes-Demo"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "success"})))
        .expect(1)
        .mount(&harness.server)
        .await;

    let mut session = harness.session();
    session.mount().await;
    assert_eq!(session.state().status(), ConnectionStatus::Disconnected);

    let form = session.form_mut();
    form.login = "7".to_string();
    form.password = "pw".to_string();
    session.set_save_credentials(true).unwrap();
    session.set_persist_password(false);
    session.login().await.unwrap();

    assert_eq!(session.state().status(), ConnectionStatus::Connected);
    let info = session.state().account_info().unwrap();
    assert_eq!(info.balance_display(), "$10000.00");
    assert_eq!(info.profit_display(), "$25.50");

    let raw = harness.store().load().unwrap().unwrap();
    assert_eq!(
        serde_json::from_str::<serde_json::Value>(&raw).unwrap(),
        json!({
            "login": 7,
            "server": "MetaQuotes-Demo",
            "accountType": "demo",
            "persistPassword": false,
        })
    );
}

#[tokio::test]
async fn test_rejected_login_reports_backend_detail() {
    let harness = Harness::start().await;
    harness.mock_status(false).await;
    harness.mock_initialize().await;
    Mock::given(method("POST"))
        .and(path("/api/mt5/login"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"detail": "Invalid credentials"})),
        )
        .mount(&harness.server)
        .await;

    let mut session = harness.session();
    session.mount().await;
    session.form_mut().login = "7".to_string();
    session.set_save_credentials(true).unwrap();

    let err = session.login().await.unwrap_err();

    assert!(matches!(err, Mt5Error::LoginFailed(_)));
    assert_eq!(err.to_string(), "Invalid credentials");
    assert_eq!(session.state().status(), ConnectionStatus::Disconnected);
    assert_eq!(
        session.state().notice,
        Some(Notice::Error("Invalid credentials".to_string()))
    );
    assert_eq!(harness.store().load().unwrap(), None);
}

#[tokio::test]
async fn test_failed_initialize_without_detail_uses_generic_message() {
    let harness = Harness::start().await;
    harness.mock_status(false).await;
    Mock::given(method("POST"))
        .and(path("/api/mt5/initialize"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&harness.server)
        .await;

    let mut session = harness.session();
    session.mount().await;

    let err = session.login().await.unwrap_err();
    assert_eq!(err.to_string(), "Failed to connect to MT5");
}

#[tokio::test]
async fn test_restart_restores_saved_credentials() {
    let harness = Harness::start().await;
    harness.mock_status(false).await;

    let mut store = harness.store();
    store
        .save(
            &json!({
                "login": 31337,
                "password": "kept",
                "server": "Broker-Custom",
                "accountType": "real",
                "persistPassword": true,
            })
            .to_string(),
        )
        .unwrap();

    let mut session = harness.session();
    session.mount().await;

    let state = session.state();
    assert_eq!(state.form.login, "31337");
    assert_eq!(state.form.password, "kept");
    assert_eq!(state.form.server, "Broker-Custom");
    assert_eq!(state.account_type, AccountType::Real);
    assert!(state.consent.save_credentials);
    assert!(state.consent.persist_password);
}

#[tokio::test]
async fn test_corrupt_saved_record_is_removed_on_start() {
    let harness = Harness::start().await;
    harness.mock_status(false).await;
    harness.store().save("{definitely not json").unwrap();

    let mut session = harness.session();
    session.mount().await;

    assert_eq!(session.state().form.login, "");
    assert_eq!(session.state().form.server, "MetaQuotes-Demo");
    assert!(!session.state().consent.save_credentials);
    assert_eq!(harness.store().load().unwrap(), None);
}

#[tokio::test]
async fn test_existing_backend_session_is_adopted_and_disconnected() {
    let harness = Harness::start().await;
    harness.mock_status(true).await;
    harness.mock_account().await;
    Mock::given(method("POST"))
        .and(path("/api/mt5/shutdown"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"status": "success", "message": "MT5 connection closed"})),
        )
        .expect(1)
        .mount(&harness.server)
        .await;

    let mut session = harness.session();
    session.mount().await;
    assert!(session.state().is_connected());
    assert_eq!(session.state().account_info().unwrap().login, Some(7));

    session.disconnect().await.unwrap();

    assert_eq!(session.state().status(), ConnectionStatus::Disconnected);
    assert!(session.state().account_info().is_none());
    assert_eq!(
        session.state().notice,
        Some(Notice::Success("Disconnected from MT5".to_string()))
    );
}

#[test]
fn test_config_default() {
    let config = Mt5DashboardConfig::default();
    assert_eq!(config.base_url, "http://localhost:8000/api");
    assert_eq!(config.http_timeout_secs, None);
    assert_eq!(config.proxy, None);
}
