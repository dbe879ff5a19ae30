//! Infrastructure adapters for external systems.

pub mod filesystem;

pub use filesystem::FileConfigSource;
