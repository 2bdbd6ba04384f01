//! Delegate execution - runs `<project_dir>/bin/show.sh` with the derived environment.

use std::ffi::OsString;
use std::io;
use std::path::PathBuf;
use std::process::{Command, ExitStatus, Stdio};

use serde::Serialize;

use crate::environment::EnvironmentConfiguration;
use crate::error::{Error, Result};

/// Delegate location relative to `PROJECT_DIR`.
pub const DELEGATE_RELATIVE_PATH: &str = "bin/show.sh";

/// The downstream executable invoked after bootstrapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Delegate {
    pub path: PathBuf,
}

impl Delegate {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Resolve the delegate for a configuration by concatenation,
    /// mirroring how `PROJECT_DIR` itself is built.
    pub fn for_config(config: &EnvironmentConfiguration) -> Self {
        let mut path = OsString::from(config.project_dir());
        path.push("/");
        path.push(DELEGATE_RELATIVE_PATH);
        Self::new(path)
    }

    /// Run the delegate with no arguments and inherited stdio, waiting for it
    /// to finish. Returns the delegate's exit code.
    ///
    /// The rest of the environment is inherited; `config.exports()` is layered
    /// on top. A non-zero exit is passed through, not treated as an error.
    pub fn run(&self, config: &EnvironmentConfiguration) -> Result<i32> {
        let status = Command::new(&self.path)
            .envs(config.exports())
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| self.launch_error(e))?;

        Ok(exit_code_of(status))
    }

    fn launch_error(&self, err: io::Error) -> Error {
        let path = self.path.to_string_lossy();
        match err.kind() {
            io::ErrorKind::NotFound => Error::delegate_not_found(path),
            _ => Error::delegate_launch_failed(path, err.to_string()),
        }
    }
}

/// Map an exit status to a shell-style exit code.
///
/// Signal termination on Unix becomes `128 + signal`.
pub fn exit_code_of(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }

    1
}
