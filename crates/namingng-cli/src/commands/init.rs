//! Init command implementation.

use anyhow::{bail, Context, Result};
use std::path::Path;

const CONFIG_NAME: &str = "namingng.json";

const DEFAULT_CONFIG: &str = r#"{
    "_comment": "Keys starting with '_' are ignored. Patterns must match the whole name.",
    "RE_FILE": ["[^/]*[a-z][a-z0-9_]*[a-z0-9]\\.(c|h|cpp)\\Z"],
    "RE_NAMESPACE": ["[a-z][a-z0-9_]*[a-z0-9]\\Z"],
    "RE_VARNAME": ["[a-z][a-z0-9_]*[a-z0-9]\\Z"],
    "RE_PRIVATE_MEMBER_VARIABLE": {
        ".*_tmp\\Z": [true, "illegal suffix _tmp"]
    },
    "RE_PUBLIC_MEMBER_VARIABLE": null,
    "RE_GLOBAL_VARNAME": ["g_[a-z][a-z0-9_]*\\Z"],
    "RE_FUNCTIONNAME": ["[a-z][a-z0-9_]*[a-z0-9]\\Z"],
    "RE_CLASS_NAME": ["[A-Z][a-zA-Z0-9]*\\Z"],
    "include_guard": {
        "input": "basename",
        "prefix": "",
        "suffix": "",
        "case": "upper",
        "max_linenr": 5,
        "RE_HEADERFILE": "[^/].*\\.h\\Z",
        "required": true
    },
    "var_prefixes": {},
    "function_prefixes": {},
    "skip_one_char_variables": false
}
"#;

/// Runs the init command.
pub fn run(force: bool) -> Result<()> {
    let config_path = Path::new(CONFIG_NAME);

    if config_path.exists() && !force {
        bail!(
            "Configuration file already exists at {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    std::fs::write(config_path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;

    println!("Created {CONFIG_NAME}");
    println!("\nNext steps:");
    println!("  1. Edit {CONFIG_NAME} to match your conventions");
    println!("  2. Run: namingng validate-config");
    println!("  3. Run: namingng check path/to/dumps");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use namingng_core::{RawConfig, RuleKey};

    #[test]
    fn starter_config_validates_cleanly() {
        let (config, errors) = RawConfig::parse_json(DEFAULT_CONFIG)
            .unwrap()
            .validate()
            .into_parts();
        assert!(errors.is_empty(), "{errors:?}");
        assert!(config.rule(RuleKey::VarName).is_some());
        assert!(config.rule(RuleKey::PublicMemberVariable).is_none());
        assert_eq!(
            config
                .include_guard()
                .unwrap()
                .expected_guard("src/my_api.h".as_ref()),
            "MY_API_H"
        );
    }
}
