// Spawns pytest and reports raw output + exit status.
// No parsing. No interpretation. No retries.

use std::path::Path;
use std::process::Command;

use crate::error::Error;

#[derive(Debug, Clone)]
pub struct RunOutcome {
    /// Process exit status; -1 when the child was killed by a signal.
    pub status: i32,
    /// Combined stdout + stderr, unparsed.
    pub output: String,
}

impl RunOutcome {
    pub fn passed(&self) -> bool {
        self.status == 0
    }
}

/// Runs `pytest <target> -v` and waits for it to finish. The child gets no
/// timeout: a hung test run hangs the workflow (accepted limitation).
pub fn run_tests(target: &Path) -> Result<RunOutcome, Error> {
    let output = Command::new("pytest")
        .arg(target)
        .arg("-v")
        .output()
        .map_err(|source| Error::ProcessSpawn {
            command: format!("pytest {} -v", target.display()),
            source,
        })?;

    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    let mut combined = String::new();
    combined.push_str(stdout.trim());
    if !stderr.trim().is_empty() {
        if !combined.is_empty() {
            combined.push('\n');
        }
        combined.push_str(stderr.trim());
    }

    Ok(RunOutcome {
        status: output.status.code().unwrap_or(-1),
        output: combined,
    })
}
