use axum::Router;
use axum::routing::{get, post};
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::net::TcpListener;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::configuration::{DatabaseSettings, Settings};
use crate::i18n::locale_redirect;
use crate::routes::{
    blog_page, health_check, landing_page, not_found, privacy_page, subscribe, subscriber_stats,
};

pub fn get_connection_pool(db_configuration: &DatabaseSettings) -> PgPool {
    PgPoolOptions::new().connect_lazy_with(db_configuration.connect_options())
}

// We need a wrapper type to retrieve the URL in handlers: state extraction
// is type-based and a raw `String` would be ambiguous.
#[derive(Clone)]
pub struct ApplicationBaseUrl(pub String);

#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub base_url: ApplicationBaseUrl,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health_check::health_check,
        crate::routes::subscriptions::subscribe,
        crate::routes::subscriptions::subscriber_stats,
    ),
    components(schemas(
        crate::routes::subscriptions::SubscribeRequest,
        crate::routes::subscriptions::SubscribeResponse,
        crate::routes::subscriptions::SubscriberStats,
        crate::routes::subscriptions::ErrorResponse,
    )),
    tags(
        (name = "waitlist", description = "Pre-launch waitlist endpoints"),
        (name = "health", description = "Service health"),
    )
)]
struct ApiDoc;

pub struct Application {
    port: u16,
    listener: TcpListener,
}

impl Application {
    pub async fn build(configuration: Settings) -> Result<Self, anyhow::Error> {
        let address = format!(
            "{}:{}",
            configuration.application.host, configuration.application.port
        );
        let listener = TcpListener::bind(address)?;
        listener.set_nonblocking(true)?;
        let port = listener.local_addr()?.port();

        Ok(Self { port, listener })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self, configuration: Settings) -> Result<(), std::io::Error> {
        let connection_pool = get_connection_pool(&configuration.database);
        let app_state = AppState {
            db: connection_pool,
            base_url: ApplicationBaseUrl(configuration.application.base_url),
        };

        let app = router(app_state);
        let listener = tokio::net::TcpListener::from_std(self.listener)?;
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;
        Ok(())
    }
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/health_check", get(health_check))
        .route("/api/subscribe", post(subscribe).get(subscriber_stats))
        .route("/{lang}", get(landing_page))
        .route("/{lang}/blog", get(blog_page))
        .route("/{lang}/privacy", get(privacy_page))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .fallback(not_found)
        .with_state(app_state)
        .layer(axum::middleware::from_fn(locale_redirect))
        .layer(TraceLayer::new_for_http())
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl-C handler");
    tracing::info!("Shutdown signal received, stopping server");
}
