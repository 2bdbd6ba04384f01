// Public modules
pub mod bootstrap;
pub mod delegate;
pub mod environment;
pub mod error;

// Re-export common types for convenience
pub use bootstrap::{bootstrap, Bootstrap, BootstrapText};
pub use delegate::Delegate;
pub use environment::{EnvironmentConfiguration, EnvironmentText};
pub use error::{Error, ErrorCode, Result};
