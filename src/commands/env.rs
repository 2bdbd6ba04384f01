use clap::{Args, ValueEnum};
use serde::Serialize;

use bgs_bootstrap::environment::{HOME_DIR, PROJECT, PROJECT_DIR, ROOT_DIR};
use bgs_bootstrap::shell;
use bgs_bootstrap::{Bootstrap, BootstrapText, EnvironmentConfiguration, EnvironmentText};

use super::CmdResult;

#[derive(Args, Debug)]
pub struct EnvArgs {
    /// Output format
    #[arg(long, value_enum, default_value_t = EnvFormat::Json)]
    pub format: EnvFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum EnvFormat {
    /// JSON envelope with the derived configuration
    Json,
    /// `export NAME=value` lines for `eval`
    Shell,
}

#[derive(Debug, Serialize)]
pub struct ExportEntry {
    pub name: &'static str,
    pub value: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvOutput {
    pub command: &'static str,
    #[serde(flatten)]
    pub bootstrap: BootstrapText,
    pub exports: Vec<ExportEntry>,
}

impl EnvOutput {
    fn new(bootstrap: BootstrapText) -> Self {
        let exports = text_exports(&bootstrap.config)
            .into_iter()
            .map(|(name, value)| ExportEntry {
                name,
                value: value.to_string(),
            })
            .collect();

        Self {
            command: "env",
            bootstrap,
            exports,
        }
    }
}

/// Exports in the same order as `EnvironmentConfiguration::exports`.
fn text_exports(text: &EnvironmentText) -> [(&'static str, &str); 4] {
    [
        (HOME_DIR, text.home_dir.as_str()),
        (ROOT_DIR, text.root_dir.as_str()),
        (PROJECT, text.project_name.as_str()),
        (PROJECT_DIR, text.project_dir.as_str()),
    ]
}

fn prepare() -> bgs_bootstrap::Result<Bootstrap> {
    EnvironmentConfiguration::from_env().map(Bootstrap::new)
}

pub fn run_json(_args: EnvArgs) -> CmdResult<EnvOutput> {
    let text = prepare()?.to_text()?;
    Ok((EnvOutput::new(text), 0))
}

pub fn shell_lines(config: &EnvironmentConfiguration) -> bgs_bootstrap::Result<Vec<String>> {
    let text = config.to_text()?;
    Ok(text_exports(&text)
        .iter()
        .map(|&(name, value)| shell::export_line(name, value))
        .collect())
}

pub fn run_shell(_args: EnvArgs) -> bgs_bootstrap::Result<i32> {
    let bootstrap = prepare()?;
    let lines = shell_lines(&bootstrap.config)?;

    if crate::tty::is_stdout_tty() {
        crate::tty::status("# apply with: eval \"$(bgs-bootstrap env --format shell)\"");
    }

    for line in lines {
        crate::output::write_stdout_line(&line)?;
    }

    Ok(0)
}
