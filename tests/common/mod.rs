#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

// Writing an executable while another thread forks can fail with ETXTBSY.
static SPAWN_LOCK: Mutex<()> = Mutex::new(());

/// Unrelated variable used to check that the delegate sees the caller's environment.
pub const MARKER_VAR: &str = "BGS_BOOTSTRAP_TEST_MARKER";

pub fn spawn_lock() -> MutexGuard<'static, ()> {
    SPAWN_LOCK.lock().unwrap_or_else(|e| e.into_inner())
}

/// Records the environment it sees into `<project_dir>/env.out`, then exits
/// with the given code. Lines: HOME_DIR, ROOT_DIR, PROJECT, PROJECT_DIR,
/// argument count, marker.
pub fn recording_script(exit_code: i32) -> String {
    format!(
        "#!/bin/sh\n\
         out=\"$(dirname \"$0\")/../env.out\"\n\
         printf '%s\\n' \"$HOME_DIR\" \"$ROOT_DIR\" \"$PROJECT\" \"$PROJECT_DIR\" \"$#\" \"${}\" > \"$out\"\n\
         exit {}\n",
        MARKER_VAR, exit_code
    )
}

/// Create `<home>/bgs-dm-proxy-srv/bin/show.sh` with the given body.
pub fn install_delegate(home: &Path, body: &str, executable: bool) -> PathBuf {
    let bin = home.join("bgs-dm-proxy-srv").join("bin");
    std::fs::create_dir_all(&bin).unwrap();

    let script = bin.join("show.sh");
    std::fs::write(&script, body).unwrap();

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mode = if executable { 0o755 } else { 0o644 };
        std::fs::set_permissions(&script, std::fs::Permissions::from_mode(mode)).unwrap();
    }

    script
}

pub fn recorded_env_bytes(home: &Path) -> Vec<Vec<u8>> {
    let out = home.join("bgs-dm-proxy-srv").join("env.out");
    std::fs::read(out)
        .unwrap()
        .split(|&b| b == b'\n')
        .map(|line| line.to_vec())
        .collect()
}

pub fn recorded_env(home: &Path) -> Vec<String> {
    let out = home.join("bgs-dm-proxy-srv").join("env.out");
    std::fs::read_to_string(out)
        .unwrap()
        .lines()
        .map(|l| l.to_string())
        .collect()
}
