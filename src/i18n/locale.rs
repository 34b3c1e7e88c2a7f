use serde::{Deserialize, Serialize};

/// Name of the cookie that pins a visitor to a display language.
///
/// Set whenever a localized page is served, read back by the locale
/// redirect middleware on the next locale-less request.
pub const LOCALE_COOKIE_NAME: &str = "locale";

/// One of the fixed set of display languages supported by the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    En,
    Fr,
    Zh,
    Ko,
}

impl Locale {
    pub const ALL: [Locale; 4] = [Locale::En, Locale::Fr, Locale::Zh, Locale::Ko];
    pub const DEFAULT: Locale = Locale::En;

    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Fr => "fr",
            Locale::Zh => "zh",
            Locale::Ko => "ko",
        }
    }

    /// Open Graph locale tag for page metadata.
    pub fn og_locale(&self) -> &'static str {
        match self {
            Locale::En => "en_US",
            Locale::Fr => "fr_FR",
            Locale::Zh => "zh_CN",
            Locale::Ko => "ko_KR",
        }
    }

    pub fn parse(s: &str) -> Result<Locale, String> {
        match s {
            "en" => Ok(Locale::En),
            "fr" => Ok(Locale::Fr),
            "zh" => Ok(Locale::Zh),
            "ko" => Ok(Locale::Ko),
            other => Err(format!("{} is not a supported locale.", other)),
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Locale::parse(s)
    }
}

/// Pick the locale to serve for a locale-less request.
///
/// Resolution order: the locale cookie if it names a supported language,
/// then the first `Accept-Language` entry that matches a supported language
/// (exactly or by primary subtag, e.g. `fr-CA` matches `fr`), then the
/// site default. Quality weights are ignored, entries are considered in
/// the order the client sent them.
pub fn negotiate_locale(cookie: Option<&str>, accept_language: Option<&str>) -> Locale {
    if let Some(locale) = cookie.and_then(|value| Locale::parse(value).ok()) {
        return locale;
    }
    if let Some(locale) = accept_language.and_then(best_accept_language_match) {
        return locale;
    }
    Locale::DEFAULT
}

fn best_accept_language_match(header: &str) -> Option<Locale> {
    header
        .split(',')
        .filter_map(|entry| entry.split(';').next())
        .map(|tag| tag.trim().to_lowercase())
        .find_map(|tag| {
            Locale::parse(&tag)
                .or_else(|_| {
                    let primary = tag.split('-').next().unwrap_or(&tag);
                    Locale::parse(primary)
                })
                .ok()
        })
}
