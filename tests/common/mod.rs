#![allow(dead_code)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub struct TestEnv {
    _tmp: TempDir,
    pub dir: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let dir = tmp.path().to_path_buf();
        Self { _tmp: tmp, dir }
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("decision-brief");
        cmd.env_remove("DECISION_BRIEF_LOG").current_dir(&self.dir);
        cmd
    }

    pub fn write_request(&self, name: &str, request: &Value) -> PathBuf {
        self.write_raw(name, &request.to_string())
    }

    pub fn write_raw(&self, name: &str, raw: &str) -> PathBuf {
        let path = self.dir.join(name);
        fs::write(&path, raw).expect("write request");
        path
    }

    pub fn run_stdout(&self, input: &PathBuf, args: &[&str]) -> String {
        let out = self
            .cmd()
            .arg("--input")
            .arg(input)
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        String::from_utf8(out).expect("utf8 stdout")
    }

    pub fn run_json(&self, request: &Value) -> Value {
        let input = self.write_request("request.json", request);
        let out = self.run_stdout(&input, &["--format", "json"]);
        serde_json::from_str(&out).expect("valid json output")
    }
}

pub fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}
