//! Derived environment for the bgs-dm-proxy-srv project.
//!
//! Everything here is a pure function of `HOME_DIR`. The bootstrapper never
//! writes its own environment table: the derived values travel to the delegate
//! through [`EnvironmentConfiguration::exports`].
//!
//! Values are kept as `OsString` so any defined `HOME_DIR` reaches the
//! delegate byte for byte. UTF-8 is only required by [`EnvironmentConfiguration::to_text`].

use std::ffi::{OsStr, OsString};

use serde::Serialize;

use crate::error::{Error, Result};

pub const HOME_DIR: &str = "HOME_DIR";
pub const ROOT_DIR: &str = "ROOT_DIR";
pub const PROJECT: &str = "PROJECT";
pub const PROJECT_DIR: &str = "PROJECT_DIR";

/// Fixed project name exported as `PROJECT`.
pub const PROJECT_NAME: &str = "bgs-dm-proxy-srv";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvironmentConfiguration {
    home_dir: OsString,
    root_dir: OsString,
    project_name: OsString,
    project_dir: OsString,
}

/// UTF-8 view of an [`EnvironmentConfiguration`] for text output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentText {
    pub home_dir: String,
    pub root_dir: String,
    pub project_name: String,
    pub project_dir: String,
}

impl EnvironmentConfiguration {
    /// Derive the configuration from a `HOME_DIR` value.
    ///
    /// Plain concatenation: an empty `home_dir` gives `/bgs-dm-proxy-srv`.
    pub fn derive(home_dir: impl Into<OsString>) -> Self {
        let home_dir = home_dir.into();
        let root_dir = home_dir.clone();

        let mut project_dir = root_dir.clone();
        project_dir.push("/");
        project_dir.push(PROJECT_NAME);

        Self {
            home_dir,
            root_dir,
            project_name: OsString::from(PROJECT_NAME),
            project_dir,
        }
    }

    /// Validate and derive using `lookup` to read variables.
    ///
    /// Only definedness is checked. A defined but empty (or non-UTF-8)
    /// `HOME_DIR` is accepted.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<OsString>,
    {
        let home_dir = lookup(HOME_DIR).ok_or_else(|| Error::env_missing_variable(HOME_DIR))?;
        Ok(Self::derive(home_dir))
    }

    /// Validate and derive from the current process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var_os(key))
    }

    pub fn home_dir(&self) -> &OsStr {
        &self.home_dir
    }

    pub fn root_dir(&self) -> &OsStr {
        &self.root_dir
    }

    pub fn project_name(&self) -> &OsStr {
        &self.project_name
    }

    pub fn project_dir(&self) -> &OsStr {
        &self.project_dir
    }

    /// Variables handed to child processes, in export order.
    pub fn exports(&self) -> [(&'static str, &OsStr); 4] {
        [
            (HOME_DIR, self.home_dir.as_os_str()),
            (ROOT_DIR, self.root_dir.as_os_str()),
            (PROJECT, self.project_name.as_os_str()),
            (PROJECT_DIR, self.project_dir.as_os_str()),
        ]
    }

    /// UTF-8 rendering for JSON and shell output.
    pub fn to_text(&self) -> Result<EnvironmentText> {
        let text = |value: &OsStr| {
            value
                .to_str()
                .map(str::to_string)
                .ok_or_else(|| Error::env_invalid_unicode(HOME_DIR))
        };

        Ok(EnvironmentText {
            home_dir: text(self.home_dir.as_os_str())?,
            root_dir: text(self.root_dir.as_os_str())?,
            project_name: text(self.project_name.as_os_str())?,
            project_dir: text(self.project_dir.as_os_str())?,
        })
    }
}
