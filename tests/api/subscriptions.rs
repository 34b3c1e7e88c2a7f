use sqlx::Row;

use crate::helpers::spawn_app;
use kanbun::i18n::{Locale, get_dictionary};

#[tokio::test]
async fn subscribe_returns_a_200_for_a_valid_email() {
    // Arrange
    let test_app = spawn_app().await;
    let body = serde_json::json!({
        "email": "ursula_le_guin@gmail.com",
        "language": "fr"
    });

    // Act
    let response = test_app.post_subscribe(&body).await;

    // Assert
    assert_eq!(200, response.status().as_u16());
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["success"], serde_json::json!(true));
    assert_eq!(body["subscriber_count"], serde_json::json!(1));
    assert_eq!(
        body["message"],
        serde_json::json!(get_dictionary(Locale::Fr).email_cta.success_message)
    );
}

#[tokio::test]
async fn subscribe_persists_the_new_subscriber() {
    // Arrange
    let test_app = spawn_app().await;
    let body = serde_json::json!({
        // Mixed case on purpose: addresses are stored lowercased
        "email": "Ursula_Le_Guin@Gmail.Com",
        "language": "ko"
    });

    // Act
    test_app.post_subscribe(&body).await;

    // Assert
    let saved = sqlx::query(
        "SELECT email, language, user_agent, ip_address FROM subscribers",
    )
    .fetch_one(&test_app.db_pool)
    .await
    .expect("Failed to fetch saved subscriber.");

    assert_eq!(saved.get::<String, _>("email"), "ursula_le_guin@gmail.com");
    assert_eq!(saved.get::<String, _>("language"), "ko");
    assert_eq!(
        saved.get::<Option<String>, _>("user_agent").as_deref(),
        Some("kanbun-tests")
    );
    // Direct localhost request, no proxy headers
    assert_eq!(saved.get::<Option<String>, _>("ip_address"), None);
}

#[tokio::test]
async fn subscribe_without_a_language_uses_the_default_locale() {
    // Arrange
    let test_app = spawn_app().await;
    let body = serde_json::json!({ "email": "ursula_le_guin@gmail.com" });

    // Act
    let response = test_app.post_subscribe(&body).await;

    // Assert
    assert_eq!(200, response.status().as_u16());
    let saved = sqlx::query("SELECT language FROM subscribers")
        .fetch_one(&test_app.db_pool)
        .await
        .expect("Failed to fetch saved subscriber.");
    assert_eq!(
        saved.get::<String, _>("language"),
        Locale::DEFAULT.as_str()
    );
}

#[tokio::test]
async fn subscribe_returns_a_400_when_the_email_is_malformed() {
    // Arrange
    let test_app = spawn_app().await;
    let test_cases = vec![
        ("", "empty email"),
        ("ursuladomain.com", "missing the @ symbol"),
        ("@domain.com", "missing the subject"),
        ("definitely not an email", "whitespace all over"),
    ];

    for (invalid_email, description) in test_cases {
        // Act
        let body = serde_json::json!({ "email": invalid_email });
        let response = test_app.post_subscribe(&body).await;

        // Assert
        assert_eq!(
            400,
            response.status().as_u16(),
            "The API did not return a 400 when the email was {}.",
            description
        );
        let body: serde_json::Value = response.json().await.expect("Failed to parse response");
        assert!(body["error"].is_string());
    }
}

#[tokio::test]
async fn subscribe_returns_a_client_error_when_the_email_is_missing() {
    // Arrange
    let test_app = spawn_app().await;

    // Act
    let response = test_app
        .post_subscribe(&serde_json::json!({ "language": "en" }))
        .await;

    // Assert
    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn subscribe_returns_a_400_for_an_unsupported_language() {
    // Arrange
    let test_app = spawn_app().await;
    let body = serde_json::json!({
        "email": "ursula_le_guin@gmail.com",
        "language": "de"
    });

    // Act
    let response = test_app.post_subscribe(&body).await;

    // Assert
    assert_eq!(400, response.status().as_u16());
}

#[tokio::test]
async fn subscribing_twice_returns_a_409() {
    // Arrange
    let test_app = spawn_app().await;
    let body = serde_json::json!({
        "email": "ursula_le_guin@gmail.com",
        "language": "en"
    });
    test_app.post_subscribe(&body).await;

    // Act
    let response = test_app.post_subscribe(&body).await;

    // Assert
    assert_eq!(409, response.status().as_u16());
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(
        body["error"],
        serde_json::json!(get_dictionary(Locale::En).email_cta.already_subscribed)
    );
}

#[tokio::test]
async fn duplicate_detection_is_case_insensitive() {
    // Arrange
    let test_app = spawn_app().await;
    test_app
        .post_subscribe(&serde_json::json!({ "email": "ursula_le_guin@gmail.com" }))
        .await;

    // Act
    let response = test_app
        .post_subscribe(&serde_json::json!({ "email": "URSULA_LE_GUIN@GMAIL.COM" }))
        .await;

    // Assert
    assert_eq!(409, response.status().as_u16());
}

#[tokio::test]
async fn subscribe_fails_if_there_is_a_fatal_database_error() {
    // Arrange
    let test_app = spawn_app().await;
    // Sabotage the database
    sqlx::query("ALTER TABLE subscribers DROP COLUMN email;")
        .execute(&test_app.db_pool)
        .await
        .expect("Failed to sabotage the database.");

    // Act
    let response = test_app
        .post_subscribe(&serde_json::json!({ "email": "ursula_le_guin@gmail.com" }))
        .await;

    // Assert
    assert_eq!(500, response.status().as_u16());
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    // Opaque body: the failure details only go to the logs
    assert_eq!(
        body["error"],
        serde_json::json!(kanbun::routes::constants::ERROR_SOMETHING_WENT_WRONG)
    );
}

#[tokio::test]
async fn each_new_subscriber_increments_the_count() {
    // Arrange
    let test_app = spawn_app().await;

    // Act
    let first = test_app
        .post_subscribe(&serde_json::json!({ "email": "first@example.com" }))
        .await;
    let second = test_app
        .post_subscribe(&serde_json::json!({ "email": "second@example.com" }))
        .await;

    // Assert
    let first: serde_json::Value = first.json().await.expect("Failed to parse response");
    let second: serde_json::Value = second.json().await.expect("Failed to parse response");
    assert_eq!(first["subscriber_count"], serde_json::json!(1));
    assert_eq!(second["subscriber_count"], serde_json::json!(2));
}

#[tokio::test]
async fn stats_report_the_total_subscriber_count() {
    // Arrange
    let test_app = spawn_app().await;

    // Act & Assert: empty waitlist
    let response = test_app.get_stats(false).await;
    assert_eq!(200, response.status().as_u16());
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["count"], serde_json::json!(0));
    assert!(body.get("by_language").is_none());

    // Act & Assert: after a signup
    test_app
        .post_subscribe(&serde_json::json!({ "email": "first@example.com" }))
        .await;
    let response = test_app.get_stats(false).await;
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["count"], serde_json::json!(1));
}

#[tokio::test]
async fn stats_can_be_broken_down_by_language() {
    // Arrange
    let test_app = spawn_app().await;
    for (email, language) in [
        ("first@example.com", "fr"),
        ("second@example.com", "fr"),
        ("third@example.com", "en"),
    ] {
        let response = test_app
            .post_subscribe(&serde_json::json!({ "email": email, "language": language }))
            .await;
        assert_eq!(200, response.status().as_u16());
    }

    // Act
    let response = test_app.get_stats(true).await;

    // Assert
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["count"], serde_json::json!(3));
    assert_eq!(body["by_language"]["fr"], serde_json::json!(2));
    assert_eq!(body["by_language"]["en"], serde_json::json!(1));
}
