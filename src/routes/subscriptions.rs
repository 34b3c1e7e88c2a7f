use axum::Json;
use axum::extract::{Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum_extra::TypedHeader;
use axum_extra::headers::UserAgent;
use chrono::Utc;
use sqlx::{PgPool, Row};
use std::collections::HashMap;
use uuid::Uuid;

use crate::domain::{NewSubscriber, SubscriberEmail};
use crate::i18n::{Locale, get_dictionary};
use crate::routes::constants::ERROR_SOMETHING_WENT_WRONG;
use crate::startup::AppState;

#[derive(serde::Deserialize, utoipa::ToSchema)]
pub struct SubscribeRequest {
    /// Email address to register on the waitlist
    pub email: String,
    /// Preferred display language (defaults to the site default)
    pub language: Option<String>,
}

impl TryFrom<SubscribeRequest> for NewSubscriber {
    type Error = String;

    fn try_from(value: SubscribeRequest) -> Result<Self, Self::Error> {
        let email = SubscriberEmail::parse(value.email)?;
        let language = match value.language {
            Some(language) => Locale::parse(&language)?,
            None => Locale::DEFAULT,
        };
        Ok(Self { email, language })
    }
}

#[derive(serde::Serialize, utoipa::ToSchema)]
pub struct SubscribeResponse {
    pub success: bool,
    /// Confirmation message in the subscriber's language
    pub message: String,
    /// Total number of waitlist subscribers, including this one
    pub subscriber_count: i64,
}

#[derive(serde::Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

fn error_chain_fmt(
    e: &impl std::error::Error,
    f: &mut std::fmt::Formatter<'_>,
) -> std::fmt::Result {
    writeln!(f, "{}\n", e)?;
    let mut current = e.source();
    while let Some(cause) = current {
        writeln!(f, "Caused by:\n\t{}", cause)?;
        current = cause.source();
    }
    Ok(())
}

#[derive(thiserror::Error)]
pub enum SubscribeError {
    #[error("{0}")]
    ValidationError(String),
    #[error("The email address is already on the waitlist.")]
    DuplicateEmail(Locale),
    #[error(transparent)]
    UnexpectedError(#[from] anyhow::Error),
}

impl std::fmt::Debug for SubscribeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl IntoResponse for SubscribeError {
    fn into_response(self) -> Response {
        match self {
            SubscribeError::ValidationError(error) => {
                (StatusCode::BAD_REQUEST, Json(ErrorResponse { error })).into_response()
            }
            SubscribeError::DuplicateEmail(language) => {
                let dictionary = get_dictionary(language);
                (
                    StatusCode::CONFLICT,
                    Json(ErrorResponse {
                        error: dictionary.email_cta.already_subscribed.into(),
                    }),
                )
                    .into_response()
            }
            SubscribeError::UnexpectedError(_) => {
                // Log the full source chain, return an opaque body
                tracing::error!(error = ?self, "Failed to process subscription");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse {
                        error: ERROR_SOMETHING_WENT_WRONG.into(),
                    }),
                )
                    .into_response()
            }
        }
    }
}

/// Register a new waitlist subscriber
///
/// Validates the email address, rejects duplicates and stores the
/// subscriber together with basic request metadata.
#[utoipa::path(
    post,
    path = "/api/subscribe",
    tag = "waitlist",
    request_body = SubscribeRequest,
    responses(
        (status = 200, description = "Subscriber registered", body = SubscribeResponse),
        (status = 400, description = "Malformed email or unsupported language", body = ErrorResponse),
        (status = 409, description = "Email address already subscribed", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[tracing::instrument(
    name = "Adding a new subscriber",
    skip(state, headers, body),
    fields(subscriber_email = %body.email)
)]
pub async fn subscribe(
    State(state): State<AppState>,
    user_agent: Option<TypedHeader<UserAgent>>,
    headers: HeaderMap,
    Json(body): Json<SubscribeRequest>,
) -> Result<Json<SubscribeResponse>, SubscribeError> {
    let new_subscriber: NewSubscriber =
        body.try_into().map_err(SubscribeError::ValidationError)?;
    let language = new_subscriber.language;
    let user_agent = user_agent.map(|TypedHeader(agent)| agent.as_str().to_owned());
    let ip_address = client_ip(&headers);

    insert_subscriber(
        &state.db,
        &new_subscriber,
        user_agent.as_deref(),
        ip_address.as_deref(),
    )
    .await
    .map_err(|e| {
        if is_unique_violation(&e) {
            SubscribeError::DuplicateEmail(language)
        } else {
            SubscribeError::UnexpectedError(
                anyhow::Error::from(e).context("Failed to insert a new subscriber"),
            )
        }
    })?;

    let subscriber_count = count_subscribers(&state.db).await.map_err(|e| {
        SubscribeError::UnexpectedError(
            anyhow::Error::from(e).context("Failed to count subscribers"),
        )
    })?;

    let dictionary = get_dictionary(language);
    Ok(Json(SubscribeResponse {
        success: true,
        message: dictionary.email_cta.success_message.into(),
        subscriber_count,
    }))
}

#[derive(Debug, serde::Deserialize, utoipa::IntoParams)]
pub struct StatsParameters {
    /// Include a per-language breakdown in the response
    #[serde(default)]
    pub by_language: bool,
}

#[derive(serde::Serialize, utoipa::ToSchema)]
pub struct SubscriberStats {
    pub count: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub by_language: Option<HashMap<String, i64>>,
}

/// Aggregate waitlist counts
#[utoipa::path(
    get,
    path = "/api/subscribe",
    tag = "waitlist",
    params(StatsParameters),
    responses(
        (status = 200, description = "Aggregate subscriber counts", body = SubscriberStats),
        (status = 500, description = "Internal server error"),
    )
)]
#[tracing::instrument(name = "Fetching subscriber stats", skip(state))]
pub async fn subscriber_stats(
    State(state): State<AppState>,
    Query(parameters): Query<StatsParameters>,
) -> Result<Json<SubscriberStats>, StatusCode> {
    let count = count_subscribers(&state.db).await.map_err(|e| {
        tracing::error!("Failed to count subscribers: {:?}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })?;
    let by_language = if parameters.by_language {
        let breakdown = count_subscribers_by_language(&state.db).await.map_err(|e| {
            tracing::error!("Failed to count subscribers by language: {:?}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        })?;
        Some(breakdown)
    } else {
        None
    };

    Ok(Json(SubscriberStats { count, by_language }))
}

#[tracing::instrument(
    name = "Saving new subscriber details in the database",
    skip(pool, new_subscriber)
)]
async fn insert_subscriber(
    pool: &PgPool,
    new_subscriber: &NewSubscriber,
    user_agent: Option<&str>,
    ip_address: Option<&str>,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO subscribers (id, email, language, user_agent, ip_address, subscribed_at)
        VALUES ($1, $2, $3, $4, $5, $6)
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(new_subscriber.email.as_ref())
    .bind(new_subscriber.language.as_str())
    .bind(user_agent)
    .bind(ip_address)
    .bind(Utc::now())
    .execute(pool)
    .await?;
    Ok(())
}

#[tracing::instrument(name = "Counting subscribers", skip(pool))]
async fn count_subscribers(pool: &PgPool) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM subscribers")
        .fetch_one(pool)
        .await
}

#[tracing::instrument(name = "Counting subscribers by language", skip(pool))]
async fn count_subscribers_by_language(
    pool: &PgPool,
) -> Result<HashMap<String, i64>, sqlx::Error> {
    let rows = sqlx::query(
        r#"
        SELECT language, COUNT(*) AS count
        FROM subscribers
        GROUP BY language
        "#,
    )
    .fetch_all(pool)
    .await?;

    rows.into_iter()
        .map(|row| Ok((row.try_get("language")?, row.try_get("count")?)))
        .collect()
}

fn is_unique_violation(error: &sqlx::Error) -> bool {
    error
        .as_database_error()
        .is_some_and(|db_error| db_error.is_unique_violation())
}

/// First hop of `X-Forwarded-For`, falling back to `X-Real-Ip` when the
/// header is absent or its first hop is blank.
fn client_ip(headers: &HeaderMap) -> Option<String> {
    let header_value = |name: &str| {
        headers
            .get(name)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.split(',').next())
            .map(str::trim)
            .filter(|value| !value.is_empty())
    };
    header_value("x-forwarded-for")
        .or_else(|| header_value("x-real-ip"))
        .map(str::to_owned)
}
