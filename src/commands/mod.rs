pub type CmdResult<T> = bgs_bootstrap::Result<(T, i32)>;

pub mod env;
pub mod run;

/// Dispatch `env` in JSON mode. Other commands own stdout.
pub(crate) fn run_json(args: env::EnvArgs) -> (bgs_bootstrap::Result<serde_json::Value>, i32) {
    crate::output::map_cmd_result_to_json(env::run_json(args))
}

/// Dispatch commands that own stdout. Errors become a stderr diagnostic.
pub(crate) fn run_raw(command: crate::Commands) -> i32 {
    let result = match command {
        crate::Commands::Run(args) => run::run(args),
        crate::Commands::Env(args) => env::run_shell(args),
    };

    match result {
        Ok(exit_code) => exit_code,
        Err(err) => {
            crate::output::print_diagnostic(&err);
            err.exit_code()
        }
    }
}
