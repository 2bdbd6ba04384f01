use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    EnvMissingVariable,
    EnvInvalidUnicode,

    DelegateNotFound,
    DelegateLaunchFailed,

    InternalIoError,
    InternalJsonError,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::EnvMissingVariable => "env.missing_variable",
            ErrorCode::EnvInvalidUnicode => "env.invalid_unicode",

            ErrorCode::DelegateNotFound => "delegate.not_found",
            ErrorCode::DelegateLaunchFailed => "delegate.launch_failed",

            ErrorCode::InternalIoError => "internal.io_error",
            ErrorCode::InternalJsonError => "internal.json_error",
        }
    }

    /// Process exit status reported when an error of this kind ends the run.
    pub fn exit_code(&self) -> i32 {
        match self {
            ErrorCode::EnvMissingVariable => 1,

            ErrorCode::EnvInvalidUnicode => 2,

            // Shell conventions for "not executable" and "command not found"
            ErrorCode::DelegateLaunchFailed => 126,
            ErrorCode::DelegateNotFound => 127,

            ErrorCode::InternalIoError | ErrorCode::InternalJsonError => 1,
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Hint {
    pub message: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvVariableDetails {
    pub variable: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DelegateDetails {
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InternalErrorDetails {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Error {
    pub code: ErrorCode,
    pub message: String,
    pub details: Value,
    pub hints: Vec<Hint>,
}

pub type Result<T> = std::result::Result<T, Error>;

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Error {}

fn to_details<T: Serialize>(details: T) -> Value {
    serde_json::to_value(details).unwrap_or_else(|_| Value::Object(serde_json::Map::new()))
}

impl Error {
    pub fn new(code: ErrorCode, message: impl Into<String>, details: Value) -> Self {
        Self {
            code,
            message: message.into(),
            details,
            hints: Vec::new(),
        }
    }

    pub fn env_missing_variable(variable: impl Into<String>) -> Self {
        let variable = variable.into();
        Self::new(
            ErrorCode::EnvMissingVariable,
            format!("{} environment variable is not set", variable),
            to_details(EnvVariableDetails {
                variable: variable.clone(),
            }),
        )
        .with_hint(format!("Export {} before running, e.g. 'export {}=/opt/app'", variable, variable))
    }

    pub fn env_invalid_unicode(variable: impl Into<String>) -> Self {
        let variable = variable.into();
        Self::new(
            ErrorCode::EnvInvalidUnicode,
            format!("{} environment variable is not valid UTF-8", variable),
            to_details(EnvVariableDetails { variable }),
        )
    }

    pub fn delegate_not_found(path: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::DelegateNotFound,
            "Delegate executable not found",
            to_details(DelegateDetails {
                path: path.into(),
                error: None,
            }),
        )
        .with_hint("Check that HOME_DIR points at the directory containing bgs-dm-proxy-srv")
    }

    pub fn delegate_launch_failed(path: impl Into<String>, error: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::DelegateLaunchFailed,
            "Failed to launch delegate executable",
            to_details(DelegateDetails {
                path: path.into(),
                error: Some(error.into()),
            }),
        )
        .with_hint("Make sure the delegate is a regular file with execute permission")
    }

    pub fn internal_io(error: impl Into<String>, context: Option<String>) -> Self {
        Self::new(
            ErrorCode::InternalIoError,
            "IO error",
            to_details(InternalErrorDetails {
                error: error.into(),
                context,
            }),
        )
    }

    pub fn internal_json(error: impl Into<String>, context: Option<String>) -> Self {
        Self::new(
            ErrorCode::InternalJsonError,
            "JSON error",
            to_details(InternalErrorDetails {
                error: error.into(),
                context,
            }),
        )
    }

    pub fn with_hint(mut self, message: impl Into<String>) -> Self {
        self.hints.push(Hint {
            message: message.into(),
        });
        self
    }

    pub fn exit_code(&self) -> i32 {
        self.code.exit_code()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_variable_names_the_variable() {
        let err = Error::env_missing_variable("HOME_DIR");
        assert_eq!(err.code, ErrorCode::EnvMissingVariable);
        assert!(err.message.contains("HOME_DIR"));
        assert_eq!(err.details["variable"], "HOME_DIR");
        assert_eq!(err.exit_code(), 1);
        assert!(!err.hints.is_empty());
    }

    #[test]
    fn delegate_errors_are_distinct_from_missing_variable() {
        let not_found = Error::delegate_not_found("/opt/app/bgs-dm-proxy-srv/bin/show.sh");
        let launch = Error::delegate_launch_failed("/tmp/show.sh", "Permission denied");

        assert_ne!(not_found.code, ErrorCode::EnvMissingVariable);
        assert_eq!(not_found.code.as_str(), "delegate.not_found");
        assert_eq!(not_found.exit_code(), 127);
        assert!(not_found.details.get("error").is_none());

        assert_eq!(launch.exit_code(), 126);
        assert_eq!(launch.details["error"], "Permission denied");
    }

    #[test]
    fn display_uses_message() {
        let err = Error::internal_io("disk full", Some("write stdout".to_string()));
        assert_eq!(err.to_string(), "IO error");
        assert_eq!(err.details["error"], "disk full");
        assert_eq!(err.details["context"], "write stdout");
    }

    #[test]
    fn invalid_unicode_exits_2() {
        let err = Error::env_invalid_unicode("HOME_DIR");
        assert_eq!(err.code.as_str(), "env.invalid_unicode");
        assert_eq!(err.exit_code(), 2);
    }
}
