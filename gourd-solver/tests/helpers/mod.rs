//! Runs the `gourd-solver` binary for the command line tests.
#![allow(
    dead_code,
    reason = "is used in integration tests but unable to find a way to silence these warnings"
)]

use std::fs::File;
use std::path::PathBuf;
use std::process::Command;
use std::process::ExitStatus;
use std::process::Stdio;
use std::time::Duration;

use wait_timeout::ChildExt;

const TEST_TIMEOUT: Duration = Duration::from_secs(60);

#[derive(Debug)]
pub(crate) struct Run {
    pub(crate) status: ExitStatus,
    pub(crate) stdout: String,
    pub(crate) stderr: String,
}

impl Run {
    pub(crate) fn succeeded(&self) -> bool {
        self.status.success()
    }

    pub(crate) fn exit_code(&self) -> Option<i32> {
        self.status.code()
    }
}

/// Runs the solver with the given arguments; `name` distinguishes the output files of concurrent
/// tests.
pub(crate) fn run_solver(name: &str, args: &[&str]) -> Run {
    let solver = PathBuf::from(env!("CARGO_BIN_EXE_gourd-solver"));
    let output_dir = PathBuf::from(env!("CARGO_TARGET_TMPDIR"));

    let log_file_path = output_dir.join(format!("{name}.log"));
    let err_file_path = output_dir.join(format!("{name}.err"));

    let mut child = Command::new(solver)
        .args(args)
        .stdout(File::create(&log_file_path).expect("Failed to create log file."))
        .stderr(File::create(&err_file_path).expect("Failed to create error file."))
        .stdin(Stdio::null())
        .spawn()
        .expect("Failed to run solver.");

    let status = match child.wait_timeout(TEST_TIMEOUT) {
        Ok(None) => {
            let _ = child.kill();
            panic!("solver took more than {} seconds", TEST_TIMEOUT.as_secs())
        }
        Ok(Some(status)) => status,
        Err(e) => panic!("error starting solver: {e}"),
    };

    let stdout = std::fs::read_to_string(&log_file_path).expect("Failed to read log file.");
    let stderr = std::fs::read_to_string(&err_file_path).expect("Failed to read error file.");
    let _ = std::fs::remove_file(log_file_path);
    let _ = std::fs::remove_file(err_file_path);

    Run {
        status,
        stdout,
        stderr,
    }
}
