use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::{Path, PathBuf};

/// Get a Command for citynet with the global config isolated in `dir`
pub fn citynet(dir: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("citynet");
    cmd.env("CITYNET_CONFIG_DIR", dir)
        .env_remove("CITYNET_NETWORK")
        .env_remove("CITYNET_LOG")
        .env_remove("RUST_LOG");
    cmd
}

/// Write a network file named `name` into `dir` and return its path
pub fn write_network(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

/// A, B, C in a line plus an isolated D
pub const LINE_NETWORK: &str = r#"
cities = ["A", "B", "C", "D"]

[[roads]]
from = "A"
to = "B"
distance = 5

[[roads]]
from = "B"
to = "C"
distance = 3
"#;
