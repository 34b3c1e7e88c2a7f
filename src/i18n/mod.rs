mod dictionary;
mod locale;
mod middleware;

pub use dictionary::{Dictionary, get_dictionary};
pub use locale::{LOCALE_COOKIE_NAME, Locale, negotiate_locale};
pub use middleware::locale_redirect;
