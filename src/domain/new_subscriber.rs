use crate::domain::SubscriberEmail;
use crate::i18n::Locale;

#[derive(Debug)]
pub struct NewSubscriber {
    pub email: SubscriberEmail,
    pub language: Locale,
}
