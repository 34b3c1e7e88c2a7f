use axum::extract::Request;
use axum::http::header;
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::CookieJar;

use crate::i18n::{LOCALE_COOKIE_NAME, Locale, negotiate_locale};

/// Redirect page requests that carry no locale prefix to `/{locale}{path}`.
///
/// API routes, the health check, the OpenAPI endpoints and asset-like paths
/// (anything containing a `.`) pass through untouched, as do paths that
/// already start with a supported locale segment.
pub async fn locale_redirect(jar: CookieJar, request: Request, next: Next) -> Response {
    let path = request.uri().path();
    if is_exempt(path) || has_locale_prefix(path) {
        return next.run(request).await;
    }

    let cookie = jar.get(LOCALE_COOKIE_NAME).map(|c| c.value().to_owned());
    let accept_language = request
        .headers()
        .get(header::ACCEPT_LANGUAGE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);
    let locale = negotiate_locale(cookie.as_deref(), accept_language.as_deref());

    let target = if path == "/" {
        format!("/{}", locale)
    } else {
        format!("/{}{}", locale, path)
    };
    tracing::debug!(%locale, %target, "Redirecting locale-less request");
    Redirect::temporary(&target).into_response()
}

fn is_exempt(path: &str) -> bool {
    path.starts_with("/api/")
        || path == "/health_check"
        || path.starts_with("/swagger-ui")
        || path.starts_with("/api-docs")
        || path.contains('.')
}

fn has_locale_prefix(path: &str) -> bool {
    Locale::ALL
        .iter()
        .any(|locale| path == format!("/{}", locale) || path.starts_with(&format!("/{}/", locale)))
}
