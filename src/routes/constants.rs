//! Common constants used across route handlers

/// Generic error message for internal server errors
pub const ERROR_SOMETHING_WENT_WRONG: &str = "Something went wrong";
