use once_cell::sync::Lazy;
use sqlx::{Connection, Executor, PgConnection, PgPool};
use uuid::Uuid;

use kanbun::configuration::{DatabaseSettings, get_configuration};
use kanbun::startup::Application;
use kanbun::telemetry::{get_subscriber, init_subscriber};

// Ensure that the `tracing` stack is only initialised once
static TRACING: Lazy<()> = Lazy::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();
    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::stdout);
        init_subscriber(subscriber);
    } else {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::sink);
        init_subscriber(subscriber);
    }
});

pub struct TestApp {
    pub address: String,
    pub db_pool: PgPool,
    pub api_client: reqwest::Client,
}

impl TestApp {
    pub async fn post_subscribe(&self, body: &serde_json::Value) -> reqwest::Response {
        self.api_client
            .post(format!("{}/api/subscribe", self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn get_stats(&self, by_language: bool) -> reqwest::Response {
        let mut url = format!("{}/api/subscribe", self.address);
        if by_language {
            url.push_str("?by_language=true");
        }
        self.api_client
            .get(url)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    /// GET an arbitrary path without following redirects.
    pub async fn get_path(&self, path: &str) -> reqwest::Response {
        self.api_client
            .get(format!("{}{}", self.address, path))
            .send()
            .await
            .expect("Failed to execute request.")
    }
}

pub async fn spawn_app() -> TestApp {
    Lazy::force(&TRACING);

    // Randomise configuration to ensure test isolation
    let configuration = {
        let mut c = get_configuration().expect("Failed to read configuration.");
        // Use a different database for each test case
        c.database.database_name = Uuid::new_v4().to_string();
        // Use a random OS port
        c.application.port = 0;
        c
    };

    let db_pool = configure_database(&configuration.database).await;

    let application = Application::build(configuration.clone())
        .await
        .expect("Failed to build application.");
    let address = format!("http://127.0.0.1:{}", application.port());

    #[allow(clippy::let_underscore_future)]
    let _ = tokio::spawn(application.run_until_stopped(configuration));

    // Redirects are left to the tests: several of them assert on the 307s
    // issued by the locale middleware.
    let api_client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .user_agent("kanbun-tests")
        .build()
        .expect("Failed to build reqwest client.");

    TestApp {
        address,
        db_pool,
        api_client,
    }
}

pub async fn configure_database(config: &DatabaseSettings) -> PgPool {
    // Create the throwaway database via the maintenance database
    let maintenance_settings = DatabaseSettings {
        database_name: "postgres".to_string(),
        ..config.clone()
    };
    let mut connection = PgConnection::connect_with(&maintenance_settings.connect_options())
        .await
        .expect("Failed to connect to Postgres");
    connection
        .execute(format!(r#"CREATE DATABASE "{}";"#, config.database_name).as_str())
        .await
        .expect("Failed to create database.");
    // Migrate it
    let connection_pool = PgPool::connect_with(config.connect_options())
        .await
        .expect("Failed to connect to Postgres.");
    sqlx::migrate!("./migrations")
        .run(&connection_pool)
        .await
        .expect("Failed to migrate the database");
    connection_pool
}
