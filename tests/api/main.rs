mod helpers;

mod subscriptions;
