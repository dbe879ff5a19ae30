//! Port trait definitions (Hexagonal Architecture)
//!
//! - `ConfigSource`: where the raw agent config document comes from
//!
//! Validation logic depends only on these traits, so tests can swap in
//! in-memory sources without touching the filesystem.

pub mod config_source;

pub use config_source::ConfigSource;
