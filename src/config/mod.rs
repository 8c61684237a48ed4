//! Settings loading
//!
//! Settings come from an optional config file (explicit or auto-discovered)
//! layered under CLI flags: CLI > File > Defaults.

pub mod loader;

pub use loader::load_config;
