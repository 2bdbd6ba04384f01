//! CLI response formatting and output.
//!
//! Provides the JSON envelope, human-readable diagnostics, and exit code mapping.

use std::io::{self, Write};

use bgs_bootstrap::error::Hint;
use bgs_bootstrap::{Error, Result};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct CliResponse<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<CliError>,
}

#[derive(Debug, Serialize)]
pub struct CliError {
    pub code: String,
    pub message: String,
    pub details: serde_json::Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hints: Option<Vec<Hint>>,
}

impl<T: Serialize> CliResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            Error::internal_json(e.to_string(), Some("serialize response".to_string()))
        })
    }
}

impl CliResponse<()> {
    pub fn from_error(err: &Error) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(CliError {
                code: err.code.as_str().to_string(),
                message: err.message.clone(),
                details: err.details.clone(),
                hints: if err.hints.is_empty() {
                    None
                } else {
                    Some(err.hints.clone())
                },
            }),
        }
    }
}

/// Write one line to stdout, treating a closed pipe as success.
pub fn write_stdout_line(line: &str) -> Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    if let Err(e) = writeln!(handle, "{}", line) {
        if e.kind() == io::ErrorKind::BrokenPipe {
            return Ok(()); // Exit gracefully on SIGPIPE
        }
        return Err(Error::internal_io(
            e.to_string(),
            Some("write stdout".to_string()),
        ));
    }
    Ok(())
}

fn print_response<T: Serialize>(response: &CliResponse<T>) -> Result<()> {
    write_stdout_line(&response.to_json()?)
}

pub fn print_success<T: Serialize>(data: T) -> Result<()> {
    print_response(&CliResponse::success(data))
}

pub fn print_json_result(result: Result<serde_json::Value>) -> Result<()> {
    match result {
        Ok(data) => print_success(data),
        Err(err) => print_response(&CliResponse::<()>::from_error(&err)),
    }
}

pub fn map_cmd_result_to_json<T: Serialize>(
    result: Result<(T, i32)>,
) -> (Result<serde_json::Value>, i32) {
    match result {
        Ok((data, exit_code)) => match serde_json::to_value(data) {
            Ok(value) => (Ok(value), exit_code),
            Err(err) => (
                Err(Error::internal_json(
                    err.to_string(),
                    Some("serialize response".to_string()),
                )),
                1,
            ),
        },
        Err(err) => {
            let exit_code = err.exit_code();
            (Err(err), exit_code)
        }
    }
}

/// Render an error for a human reading stderr.
///
/// ```text
/// Error: HOME_DIR environment variable is not set
///   hint: Export HOME_DIR before running, e.g. 'export HOME_DIR=/opt/app'
/// ```
pub fn format_diagnostic(err: &Error) -> String {
    let mut text = format!("Error: {}", err.message);

    if let Some(path) = err.details.get("path").and_then(|v| v.as_str()) {
        text.push_str(&format!("\n  path: {}", path));
    }
    if let Some(cause) = err.details.get("error").and_then(|v| v.as_str()) {
        text.push_str(&format!("\n  cause: {}", cause));
    }
    for hint in &err.hints {
        text.push_str(&format!("\n  hint: {}", hint.message));
    }

    text
}

pub fn print_diagnostic(err: &Error) {
    eprintln!("{}", format_diagnostic(err));
}

#[cfg(test)]
mod tests {
    use super::*;
    use bgs_bootstrap::ErrorCode;

    #[test]
    fn missing_variable_maps_to_exit_code_1() {
        let err = Error::env_missing_variable("HOME_DIR");
        let (value, exit_code) = map_cmd_result_to_json::<serde_json::Value>(Err(err));

        assert!(value.is_err());
        assert_eq!(exit_code, 1);
    }

    #[test]
    fn delegate_not_found_maps_to_exit_code_127() {
        let err = Error::delegate_not_found("/opt/app/bgs-dm-proxy-srv/bin/show.sh");
        let (_value, exit_code) = map_cmd_result_to_json::<serde_json::Value>(Err(err));

        assert_eq!(exit_code, 127);
    }

    #[test]
    fn error_envelope_carries_code_and_hints() {
        let err = Error::env_missing_variable("HOME_DIR");
        let json = CliResponse::<()>::from_error(&err).to_json().unwrap();

        assert!(json.contains("\"success\": false"));
        assert!(json.contains("\"code\": \"env.missing_variable\""));
        assert!(json.contains("\"variable\": \"HOME_DIR\""));
        assert!(json.contains("\"hints\""));
        assert!(!json.contains("\"data\""));
    }

    #[test]
    fn success_envelope_omits_error() {
        let json = CliResponse::success(serde_json::json!({ "projectName": "bgs-dm-proxy-srv" }))
            .to_json()
            .unwrap();

        assert!(json.contains("\"success\": true"));
        assert!(!json.contains("\"error\""));
    }

    #[test]
    fn diagnostic_mentions_variable_and_hint() {
        let text = format_diagnostic(&Error::env_missing_variable("HOME_DIR"));

        assert!(text.starts_with("Error: HOME_DIR environment variable is not set"));
        assert!(text.contains("hint: Export HOME_DIR"));
    }

    #[test]
    fn diagnostic_includes_delegate_path_and_cause() {
        let err = Error::delegate_launch_failed("/srv/bgs-dm-proxy-srv/bin/show.sh", "Permission denied");
        let text = format_diagnostic(&err);

        assert_eq!(err.code, ErrorCode::DelegateLaunchFailed);
        assert!(text.contains("path: /srv/bgs-dm-proxy-srv/bin/show.sh"));
        assert!(text.contains("cause: Permission denied"));
    }
}
