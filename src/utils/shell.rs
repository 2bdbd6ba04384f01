//! Shell escaping and quoting utilities.

/// Escape a value for use inside single quotes.
/// Replaces `'` with `'\''` (end quote, escaped quote, start quote).
pub fn escape_single_quote_content(value: &str) -> String {
    value.replace('\'', "'\\''")
}

/// Quote a single argument for shell evaluation.
/// - Empty strings become `''`
/// - Strings with shell metacharacters are wrapped in single quotes
/// - Embedded single quotes are escaped
pub fn quote_arg(arg: &str) -> String {
    if arg.is_empty() {
        return "''".to_string();
    }

    // Characters that require quoting
    const SHELL_META: &[char] = &[
        ' ', '\t', '\n', '\'', '"', '\\', '$', '`', '!', '*', '?', '[', ']', '(', ')', '{', '}',
        '<', '>', '|', '&', ';', '#', '~',
    ];

    if !arg.contains(SHELL_META) {
        return arg.to_string();
    }

    format!("'{}'", escape_single_quote_content(arg))
}

/// Render a POSIX `export NAME=value` line with the value quoted.
pub fn export_line(name: &str, value: &str) -> String {
    format!("export {}={}", name, quote_arg(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quote_arg_simple() {
        assert_eq!(quote_arg("/opt/app"), "/opt/app");
        assert_eq!(quote_arg("bgs-dm-proxy-srv"), "bgs-dm-proxy-srv");
    }

    #[test]
    fn quote_arg_with_spaces() {
        assert_eq!(quote_arg("/opt/my app"), "'/opt/my app'");
    }

    #[test]
    fn quote_arg_with_single_quote() {
        assert_eq!(quote_arg("it's"), "'it'\\''s'");
    }

    #[test]
    fn quote_arg_empty() {
        assert_eq!(quote_arg(""), "''");
    }

    #[test]
    fn quote_arg_with_expansion_characters() {
        assert_eq!(quote_arg("$HOME/app"), "'$HOME/app'");
        assert_eq!(quote_arg("~/app"), "'~/app'");
    }

    #[test]
    fn export_line_plain_value() {
        assert_eq!(
            export_line("PROJECT", "bgs-dm-proxy-srv"),
            "export PROJECT=bgs-dm-proxy-srv"
        );
    }

    #[test]
    fn export_line_empty_value() {
        assert_eq!(export_line("ROOT_DIR", ""), "export ROOT_DIR=''");
    }

    #[test]
    fn export_line_quotes_metacharacters() {
        assert_eq!(
            export_line("HOME_DIR", "/srv/a b;rm"),
            "export HOME_DIR='/srv/a b;rm'"
        );
    }
}
