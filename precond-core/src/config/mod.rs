//! Configuration for the `Guard` facade.
//! TOML-based, 3-layer resolution: env > file > defaults.

pub mod guard_config;

pub use guard_config::GuardConfig;
