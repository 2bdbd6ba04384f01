//! The bootstrap sequence: validate `HOME_DIR`, derive the project
//! environment, then hand control to the delegate.
//!
//! Two phases, no retries. [`prepare`] either fails (unset `HOME_DIR`) or
//! yields a [`Bootstrap`] ready to delegate; [`Bootstrap::delegate`] blocks
//! until the delegate exits and returns its exit code.

use std::ffi::OsString;

use serde::Serialize;

use crate::delegate::Delegate;
use crate::environment::{EnvironmentConfiguration, EnvironmentText};
use crate::error::Result;

/// A validated bootstrap, ready to delegate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bootstrap {
    pub config: EnvironmentConfiguration,
    pub delegate: Delegate,
}

/// UTF-8 view of a [`Bootstrap`] for JSON output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BootstrapText {
    #[serde(flatten)]
    pub config: EnvironmentText,
    pub delegate: Delegate,
}

impl Bootstrap {
    pub fn new(config: EnvironmentConfiguration) -> Self {
        let delegate = Delegate::for_config(&config);
        Self { config, delegate }
    }

    /// Fails with `env.invalid_unicode` when `HOME_DIR` is not UTF-8.
    pub fn to_text(&self) -> Result<BootstrapText> {
        Ok(BootstrapText {
            config: self.config.to_text()?,
            delegate: self.delegate.clone(),
        })
    }

    /// Run the delegate and return its exit code.
    pub fn delegate(self) -> Result<i32> {
        let path = self.delegate.path.display();
        log_status!("bootstrap", "Delegating to {}", path);
        let code = self.delegate.run(&self.config)?;
        log_status!("bootstrap", "{} exited with {}", path, code);
        Ok(code)
    }
}

/// Validate and derive from an arbitrary variable lookup.
pub fn prepare<F>(lookup: F) -> Result<Bootstrap>
where
    F: Fn(&str) -> Option<OsString>,
{
    let config = EnvironmentConfiguration::from_lookup(lookup)?;
    Ok(Bootstrap::new(config))
}

/// Full bootstrap against the process environment.
pub fn bootstrap() -> Result<i32> {
    Bootstrap::new(EnvironmentConfiguration::from_env()?).delegate()
}
