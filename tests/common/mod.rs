use assert_cmd::Command;
use std::path::PathBuf;

pub fn memories_cmd() -> Command {
    let mut cmd = Command::cargo_bin("little-memories").unwrap();
    cmd.env_remove("LITTLE_MEMORIES_DIR");
    cmd.env_remove("RUST_LOG");
    cmd
}

#[allow(dead_code)]
pub fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}
