use std::path::Path;

use assert_cmd::Command;

/// A taskdash command pointed at an isolated data directory.
pub fn taskdash_cmd(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("taskdash").expect("binary");
    cmd.env_remove("TASKDASH_DIR");
    cmd.arg("--dir").arg(dir);
    cmd
}
