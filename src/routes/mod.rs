pub mod constants;
pub mod health_check; // Public for OpenAPI annotations
pub mod pages;
pub mod subscriptions; // Public for OpenAPI annotations

pub use health_check::*;
pub use pages::*;
pub use subscriptions::*;
