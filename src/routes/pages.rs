use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Html;
use axum_extra::extract::CookieJar;
use axum_extra::extract::cookie::Cookie;
use std::fmt::Write;

use crate::i18n::{Dictionary, LOCALE_COOKIE_NAME, Locale, get_dictionary};
use crate::startup::AppState;

/// Localized landing page.
///
/// Also pins the served locale in the locale cookie so that later
/// locale-less requests keep the language the visitor ended up on.
#[tracing::instrument(name = "Serving landing page", skip(state, jar))]
pub async fn landing_page(
    State(state): State<AppState>,
    Path(locale): Path<Locale>,
    jar: CookieJar,
) -> (CookieJar, Html<String>) {
    let dictionary = get_dictionary(locale);
    let jar = jar.add(Cookie::build((LOCALE_COOKIE_NAME, locale.as_str())).path("/"));
    (
        jar,
        Html(render_landing(dictionary, locale, &state.base_url.0)),
    )
}

/// Localized blog page, a placeholder until the first articles land.
#[tracing::instrument(name = "Serving blog page", skip(jar))]
pub async fn blog_page(Path(locale): Path<Locale>, jar: CookieJar) -> (CookieJar, Html<String>) {
    let dictionary = get_dictionary(locale);
    let jar = jar.add(Cookie::build((LOCALE_COOKIE_NAME, locale.as_str())).path("/"));
    (jar, Html(render_blog(dictionary, locale)))
}

/// Localized privacy page.
#[tracing::instrument(name = "Serving privacy page", skip(jar))]
pub async fn privacy_page(Path(locale): Path<Locale>, jar: CookieJar) -> (CookieJar, Html<String>) {
    let dictionary = get_dictionary(locale);
    let jar = jar.add(Cookie::build((LOCALE_COOKIE_NAME, locale.as_str())).path("/"));
    (jar, Html(render_privacy(dictionary, locale)))
}

/// Fallback for paths no route matches.
pub async fn not_found() -> StatusCode {
    StatusCode::NOT_FOUND
}

fn language_switcher(current: Locale) -> String {
    let mut links = String::new();
    for locale in Locale::ALL {
        if locale == current {
            let _ = write!(links, r#"<span class="lang current">{}</span>"#, locale);
        } else {
            let _ = write!(
                links,
                r#"<a class="lang" href="/{locale}" hreflang="{locale}">{locale}</a>"#,
                locale = locale
            );
        }
    }
    links
}

fn page_head(dictionary: &Dictionary, locale: Locale, canonical: &str) -> String {
    format!(
        r#"<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<meta name="description" content="{description}">
<meta property="og:title" content="{title}">
<meta property="og:description" content="{description}">
<meta property="og:locale" content="{og_locale}">
<link rel="canonical" href="{canonical}">
<style>
body {{ font-family: sans-serif; margin: 0; color: #1a1a1a; }}
header, section, footer {{ max-width: 48rem; margin: 0 auto; padding: 2rem 1rem; }}
.lang {{ margin-right: 0.5rem; text-transform: uppercase; }}
.lang.current {{ font-weight: bold; }}
.badge {{ color: #dc2626; font-weight: bold; }}
.highlight {{ color: #dc2626; }}
</style>
</head>"#,
        title = dictionary.meta.title,
        description = dictionary.meta.description,
        og_locale = locale.og_locale(),
        canonical = canonical,
    )
}

fn subscribe_form(form_id: &str, placeholder: &str, button: &str, locale: Locale) -> String {
    format!(
        r#"<form class="waitlist-form" id="{form_id}" data-language="{locale}">
<input type="email" name="email" placeholder="{placeholder}" required>
<button type="submit">{button}</button>
<p class="form-message"></p>
</form>"#
    )
}

// Progressive enhancement for the waitlist forms: posts the address as JSON
// and prints the localized message from the API response.
const SUBSCRIBE_SCRIPT: &str = r#"<script>
document.querySelectorAll('.waitlist-form').forEach((form) => {
  form.addEventListener('submit', async (event) => {
    event.preventDefault();
    const message = form.querySelector('.form-message');
    try {
      const response = await fetch('/api/subscribe', {
        method: 'POST',
        headers: { 'Content-Type': 'application/json' },
        body: JSON.stringify({
          email: form.email.value,
          language: form.dataset.language,
        }),
      });
      const data = await response.json();
      message.textContent = response.ok ? data.message : data.error;
      if (response.ok) { form.email.value = ''; }
    } catch (error) {
      message.textContent = '';
    }
  });
});
</script>"#;

fn render_landing(dictionary: &Dictionary, locale: Locale, base_url: &str) -> String {
    let canonical = format!("{}/{}", base_url, locale);

    let mut feature_items = String::new();
    for feature in dictionary.features.list {
        let _ = write!(
            feature_items,
            "<li><strong>{}</strong><p>{}</p></li>",
            feature.title, feature.description
        );
    }

    format!(
        r#"<!DOCTYPE html>
<html lang="{locale}">
{head}
<body>
<header>
<nav>{language_switcher}</nav>
<p class="badge">{badge}</p>
<h1>{hero_title} <span class="highlight">{hero_highlight}</span></h1>
<p>{hero_subtitle}</p>
{hero_form}
<p><small>{hero_privacy}</small></p>
</header>
<section id="features">
<h2>{features_title}</h2>
<p>{features_subtitle}</p>
<ul>{feature_items}</ul>
</section>
<section id="testimonial">
<blockquote>{testimonial_quote}</blockquote>
<p>{testimonial_name}, {testimonial_role}</p>
</section>
<section id="waitlist">
<h2>{cta_title}</h2>
<p>{cta_subtitle}</p>
{cta_form}
</section>
<footer>
<p>{footer_description}</p>
<p><a href="/{locale}/blog">{footer_blog}</a> <a href="/{locale}/privacy">{footer_privacy}</a></p>
<p>{footer_copyright}</p>
</footer>
{script}
</body>
</html>"#,
        locale = locale,
        head = page_head(dictionary, locale, &canonical),
        language_switcher = language_switcher(locale),
        badge = dictionary.hero.badge,
        hero_title = dictionary.hero.title,
        hero_highlight = dictionary.hero.title_highlight,
        hero_subtitle = dictionary.hero.subtitle,
        hero_form = subscribe_form(
            "hero-form",
            dictionary.hero.email_placeholder,
            dictionary.hero.cta_button,
            locale
        ),
        hero_privacy = dictionary.hero.privacy_text,
        features_title = dictionary.features.title,
        features_subtitle = dictionary.features.subtitle,
        feature_items = feature_items,
        testimonial_quote = dictionary.testimonial.quote,
        testimonial_name = dictionary.testimonial.name,
        testimonial_role = dictionary.testimonial.role,
        cta_title = dictionary.email_cta.title,
        cta_subtitle = dictionary.email_cta.subtitle,
        cta_form = subscribe_form(
            "cta-form",
            dictionary.email_cta.email_placeholder,
            dictionary.email_cta.cta_button,
            locale
        ),
        footer_description = dictionary.footer.description,
        footer_blog = dictionary.footer.blog,
        footer_privacy = dictionary.footer.privacy,
        footer_copyright = dictionary.footer.copyright,
        script = SUBSCRIBE_SCRIPT,
    )
}

fn render_blog(dictionary: &Dictionary, locale: Locale) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="{locale}">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title} - Kanbun</title>
<meta name="description" content="{subtitle}">
</head>
<body>
<header>
<p><a href="/{locale}">&larr; {back_to_home}</a></p>
</header>
<main>
<h1>{title}</h1>
<p>{subtitle}</p>
<section id="coming-soon">
<h2>{coming_soon_title}</h2>
<p>{coming_soon_description}</p>
<p><a href="/{locale}#waitlist">{coming_soon_cta}</a></p>
</section>
</main>
</body>
</html>"#,
        locale = locale,
        title = dictionary.blog.title,
        subtitle = dictionary.blog.subtitle,
        back_to_home = dictionary.blog.back_to_home,
        coming_soon_title = dictionary.blog.coming_soon_title,
        coming_soon_description = dictionary.blog.coming_soon_description,
        coming_soon_cta = dictionary.blog.coming_soon_cta,
    )
}

fn render_privacy(dictionary: &Dictionary, locale: Locale) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="{locale}">
<head>
<meta charset="utf-8">
<title>{title} - Kanbun</title>
</head>
<body>
<main>
<p><a href="/{locale}">Kanbun</a></p>
<h1>{title}</h1>
<p>{body}</p>
</main>
</body>
</html>"#,
        locale = locale,
        title = dictionary.privacy.title,
        body = dictionary.privacy.body,
    )
}
