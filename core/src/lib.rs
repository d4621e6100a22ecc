// Core premstats functionality:
// - Client for the stats backend
// - Request/response data structures and reply decoding
// - Configuration loading
// - Shared error types
// - Caller-side query history and example questions

// Export client module - Client for the stats backend
pub mod client;
pub use client::*;

// Export types module - Request/response data structures
pub mod types;
pub use types::*;

// Export reply module - Maps an HTTP status and body onto a typed result
pub mod reply;
pub use reply::decode_reply;

// Export config module - Configuration loading
pub mod config;
pub use config::*;

// Export errors module - Shared error types
pub mod errors;
pub use errors::*;

pub mod history;
pub use history::QueryHistory;

pub mod suggestions;
pub use suggestions::{suggestion, SUGGESTIONS};
