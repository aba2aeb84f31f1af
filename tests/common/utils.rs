use std::net::TcpListener;
use once_cell::sync::Lazy;
use serde_json::Value;

use team_allocator::run;
use team_allocator::config::allocation::AllocationSettings;
use team_allocator::config::settings::get_config;
use team_allocator::telemetry::{get_subscriber, init_subscriber};

// Ensure that the `tracing` stack is only initialised once using `once_cell`
static TRACING: Lazy<()> = Lazy::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();

    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber(
            subscriber_name,
            default_filter_level,
            std::io::stdout
        );
        init_subscriber(subscriber);
    } else {
        let subscriber = get_subscriber(
            subscriber_name,
            default_filter_level,
            std::io::sink
        );
        init_subscriber(subscriber);
    }
});

pub struct TestApp {
    pub address: String,
}

impl TestApp {
    pub async fn post_allocation(&self, body: String) -> reqwest::Response {
        reqwest::Client::new()
            .post(&format!("{}/allocate_teams", self.address))
            .header("Content-Type", "application/json")
            .body(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }
}

pub async fn spawn_app() -> TestApp {
    let configuration = get_config().expect("Failed to read configuration.");
    spawn_app_with(configuration.allocation).await
}

pub async fn spawn_app_with(allocation_settings: AllocationSettings) -> TestApp {
    // The first time `initialize` is invoked the code in `TRACING` is executed.
    // All other invocations will instead skip execution.
    Lazy::force(&TRACING);

    let listener = TcpListener::bind("127.0.0.1:0")
        .expect("Failed to bind random port");
    // Get port assigned by the OS
    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);

    let server = run(listener, allocation_settings)
        .expect("Failed to bind address");
    // Launch the server as a background task
    let _ = tokio::spawn(server);

    TestApp { address }
}

/// (key, team) pairs from an allocation response body, in roster order
pub fn teams_by_key(body: &Value) -> Vec<(String, String)> {
    body["data"]["allocations"]
        .as_array()
        .expect("allocations should be a list")
        .iter()
        .map(|row| {
            (
                row["key"].as_str().unwrap().to_string(),
                row["team"].as_str().unwrap().to_string(),
            )
        })
        .collect()
}
