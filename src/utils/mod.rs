//! Shared helpers

pub mod identity;
pub mod paths;

pub use identity::login_name;
pub use paths::{normalize_path, normalize_relative};
