use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Copy)]
enum ResponseMode {
    Json,
    Raw(RawOutputMode),
}

#[derive(Debug, Clone, Copy)]
enum RawOutputMode {
    InteractivePassthrough,
    Shell,
}

mod commands;
mod output;
mod tty;

use commands::{env, run};

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "bgs-bootstrap")]
#[command(version = VERSION)]
#[command(about = "Derive the bgs-dm-proxy-srv environment from HOME_DIR and run bin/show.sh")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate HOME_DIR and run the project's bin/show.sh (default)
    Run(run::RunArgs),
    /// Print the derived environment without running anything
    Env(env::EnvArgs),
}

fn response_mode(command: &Commands) -> ResponseMode {
    match command {
        Commands::Run(_) => ResponseMode::Raw(RawOutputMode::InteractivePassthrough),
        Commands::Env(args) if args.format == env::EnvFormat::Shell => {
            ResponseMode::Raw(RawOutputMode::Shell)
        }
        Commands::Env(_) => ResponseMode::Json,
    }
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Commands::Run(run::RunArgs::default()));

    let exit_code = match (response_mode(&command), command) {
        (ResponseMode::Json, Commands::Env(args)) => {
            let (json_result, exit_code) = commands::run_json(args);
            match output::print_json_result(json_result) {
                Ok(()) => exit_code,
                Err(err) => {
                    output::print_diagnostic(&err);
                    err.exit_code()
                }
            }
        }
        (_, command) => commands::run_raw(command),
    };

    std::process::ExitCode::from(exit_code_to_u8(exit_code))
}

fn exit_code_to_u8(code: i32) -> u8 {
    if code < 0 {
        1
    } else if code >= 255 {
        255
    } else {
        code as u8
    }
}
