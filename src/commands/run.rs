use clap::Args;

#[derive(Args, Debug, Default)]
pub struct RunArgs {}

/// Validate `HOME_DIR`, then run `show.sh` and return its exit code.
pub fn run(_args: RunArgs) -> bgs_bootstrap::Result<i32> {
    bgs_bootstrap::bootstrap()
}
