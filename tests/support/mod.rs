use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Get a Command for graphroute with an isolated config directory
pub fn graphroute() -> Command {
    let mut cmd = cargo_bin_cmd!("graphroute");
    cmd.env("GRAPHROUTE_CONFIG_DIR", std::env::temp_dir().join("graphroute-tests-no-config"))
        .env_remove("GRAPHROUTE_CONFIG")
        .env_remove("GRAPHROUTE_LOG")
        .env_remove("RUST_LOG");
    cmd
}

/// Write a file into a fresh temp dir and return both
pub fn write_file(name: &str, content: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    (dir, path)
}

/// A square a-b-c-d-a with one heavy side
#[allow(dead_code)]
pub const SQUARE: &str = r#"
vertices = 4

[[labels]]
id = 0
label = "A"

[[labels]]
id = 1
label = "B"

[[labels]]
id = 2
label = "C"

[[labels]]
id = 3
label = "D"

[[edges]]
from = 0
to = 1
weight = 2

[[edges]]
from = 1
to = 2
weight = 2

[[edges]]
from = 2
to = 3
weight = 2

[[edges]]
from = 3
to = 0
weight = 9
"#;
