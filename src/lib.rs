pub mod catalog;
pub mod config;
pub mod engine;
pub mod speech;
pub mod store;
pub mod suggest;

// Re-export the session types for convenient access
pub use engine::session::{Session, Turn};
