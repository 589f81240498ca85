//! Smoke tests driving the `namingng` binary.

use serde_json::Value;
use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

const CONFIG: &str = r#"{
    "RE_GLOBAL_VARNAME": ["[a-z][a-z0-9_]*\\Z"],
    "include_guard": {
        "input": "basename",
        "prefix": "",
        "suffix": "",
        "case": "upper",
        "max_linenr": 5,
        "RE_HEADERFILE": ".*\\.h\\Z",
        "required": true
    }
}"#;

const DUMP: &str = r##"{
    "files": [
        {"path": "good.h", "lines": ["#ifndef GOOD_H", "#define GOOD_H", "int _bad;", "#endif"]},
        {"path": "bare.h", "lines": ["int ok;"]}
    ],
    "variables": [
        {"name": "_bad", "type": "int", "scope": "global",
         "location": {"file": "good.h", "line": 3, "column": 5}},
        {"name": "ok", "type": "int", "scope": "global",
         "location": {"file": "bare.h", "line": 1, "column": 5}}
    ]
}"##;

struct Workspace {
    dir: TempDir,
    global: TempDir,
}

impl Workspace {
    fn new() -> Self {
        let ws = Self {
            dir: TempDir::new().unwrap(),
            global: TempDir::new().unwrap(),
        };
        fs::write(ws.path().join("namingng.json"), CONFIG).unwrap();
        fs::create_dir(ws.path().join("dumps")).unwrap();
        fs::write(ws.path().join("dumps/unit.c.dump.json"), DUMP).unwrap();
        ws
    }

    fn path(&self) -> &Path {
        self.dir.path()
    }

    fn run(&self, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_namingng"))
            .current_dir(self.path())
            .env("NAMINGNG_CONFIG_DIR", self.global.path())
            .env_remove("RUST_LOG")
            .args(args)
            .output()
            .expect("binary should run")
    }
}

fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn check_prints_template_lines() {
    let ws = Workspace::new();
    let output = ws.run(&["check", "dumps"]);
    assert!(output.status.success(), "{output:?}");
    assert_eq!(
        stdout_lines(&output),
        [
            "good.h:3:5: style: Global variable _bad violates naming convention [namingng-namingConvention]",
            "bare.h:0:0: style: Missing include guard [namingng-includeGuardMissing]",
        ]
    );
}

#[test]
fn fail_on_style_sets_exit_status() {
    let ws = Workspace::new();
    let output = ws.run(&["check", "--fail-on", "style", "dumps"]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn naming_preset_skips_include_guards() {
    let ws = Workspace::new();
    let output = ws.run(&["check", "--preset", "naming", "--format", "standalone", "dumps"]);
    assert!(output.status.success());
    assert_eq!(
        stdout_lines(&output),
        ["[good.h:3] (style) Global variable _bad violates naming convention"]
    );
}

#[test]
fn json_output_is_structured() {
    let ws = Workspace::new();
    let output = ws.run(&["check", "--format", "json", "dumps/unit.c.dump.json"]);
    assert!(output.status.success());

    let report: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["summary"]["units"], 1);
    assert_eq!(report["summary"]["styles"], 2);
    assert_eq!(report["summary"]["errors"], 0);
    let violations = report["units"][0]["violations"].as_array().unwrap();
    assert_eq!(violations.len(), 2);
    assert_eq!(violations[0]["rule_id"], "namingng-namingConvention");
    assert_eq!(violations[1]["location"]["line"], 0);
}

#[test]
fn unknown_config_key_fails_the_run() {
    let ws = Workspace::new();
    fs::write(
        ws.path().join("bad.json"),
        r#"{"RE_VAR_NAME": ["[a-z]+\\Z"], "RE_VARNAME": true}"#,
    )
    .unwrap();

    let output = ws.run(&["--config", "bad.json", "check", "dumps"]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("config error: unknown config key 'RE_VAR_NAME'"));
    assert!(stderr.contains("config error: RE_VARNAME must be str, list or dict (not bool), or not set"));
}

#[test]
fn unreadable_dump_fails_the_run() {
    let ws = Workspace::new();
    fs::write(ws.path().join("dumps/broken.c.dump.json"), "{ not json").unwrap();
    let output = ws.run(&["check", "dumps"]);
    assert_eq!(output.status.code(), Some(1));
    // The healthy dump is still reported.
    assert_eq!(stdout_lines(&output).len(), 2);
}

#[test]
fn validate_config_accepts_project_config() {
    let ws = Workspace::new();
    let output = ws.run(&["validate-config"]);
    assert!(output.status.success());
    let lines = stdout_lines(&output);
    assert!(lines.contains(&"Active rules: RE_GLOBAL_VARNAME".to_string()));
    assert_eq!(lines.last().map(String::as_str), Some("Config OK"));
}

#[test]
fn validate_config_rejects_bad_shapes() {
    let ws = Workspace::new();
    fs::write(ws.path().join("namingng.json"), r#"{"var_prefixes": []}"#).unwrap();
    let output = ws.run(&["validate-config"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout_lines(&output)
        .contains(&"config error: var_prefixes must be dict (not list), or not set".to_string()));
}

#[test]
fn init_refuses_to_overwrite() {
    let ws = Workspace::new();
    fs::remove_file(ws.path().join("namingng.json")).unwrap();

    assert!(ws.run(&["init"]).status.success());
    assert!(ws.path().join("namingng.json").exists());

    assert!(!ws.run(&["init"]).status.success());
    assert!(ws.run(&["init", "--force"]).status.success());
}

#[test]
fn list_rules_names_every_id() {
    let ws = Workspace::new();
    let output = ws.run(&["list-rules"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    for id in [
        "namingng-namingConvention",
        "namingng-includeGuardMissing",
        "namingng-includeGuardName",
        "namingng-includeGuardInvalid",
    ] {
        assert!(stdout.contains(id), "missing {id}");
    }
}

#[test]
fn toml_project_config_is_used() {
    let ws = Workspace::new();
    fs::remove_file(ws.path().join("namingng.json")).unwrap();
    fs::write(
        ws.path().join("namingng.toml"),
        "RE_GLOBAL_VARNAME = ['[a-z][a-z0-9_]*\\Z']\n",
    )
    .unwrap();

    let output = ws.run(&["check", "dumps"]);
    assert!(output.status.success());
    assert_eq!(
        stdout_lines(&output),
        ["good.h:3:5: style: Global variable _bad violates naming convention [namingng-namingConvention]"]
    );
}

#[test]
fn missing_config_flag_path_is_fatal() {
    let ws = Workspace::new();
    let output = ws.run(&["--config", "absent.json", "check", "dumps"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to read config"));
}
