pub mod config;
pub mod error;
pub mod intent;
pub mod message;
pub mod reply;
pub mod search;

// Re-export common error type
pub use error::VigilError;
