use validator::ValidateEmail;

#[derive(Debug, Clone, serde::Serialize)]
pub struct SubscriberEmail(String);

impl SubscriberEmail {
    /// Returns an instance of `SubscriberEmail` if the input satisfies our
    /// validation constraints on email addresses, an error message otherwise.
    ///
    /// The address is normalized (trimmed and lowercased) so that the unique
    /// index on `subscribers.email` is effectively case-insensitive.
    pub fn parse(s: String) -> Result<SubscriberEmail, String> {
        let normalized = s.trim().to_lowercase();
        if normalized.validate_email() {
            Ok(Self(normalized))
        } else {
            Err(format!("{} is not a valid subscriber email.", s))
        }
    }
}

impl AsRef<str> for SubscriberEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SubscriberEmail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
