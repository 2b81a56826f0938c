//! Tests for TOML parsing and validation during load.

use std::path::Path;

use crate::config::loader::{ConfigLoader, parse_config};
use crate::config::{FileConfigLoader, PolicyKind};
use crate::error::LangStatsError;

use super::mock_fs::MockFileSystem;

#[test]
fn parses_explicit_path() {
    let content = r#"
[account]
user = "octocat"
exclude = ["dotfiles"]

[chart]
policy = "threshold"
min_percent = 5.0
"#;
    let fs = MockFileSystem::new().with_file("/cfg/custom.toml", content);

    let result = FileConfigLoader::with_fs(fs)
        .load_from_path(Path::new("/cfg/custom.toml"))
        .unwrap();

    assert_eq!(result.config.account.user.as_deref(), Some("octocat"));
    assert_eq!(result.config.account.exclude, vec!["dotfiles"]);
    assert_eq!(result.config.chart.policy, Some(PolicyKind::Threshold));
}

#[test]
fn malformed_toml_is_parse_error() {
    let err = parse_config("[chart\nstyle = ").unwrap_err();
    assert!(matches!(err, LangStatsError::TomlParse(_)));
}

#[test]
fn out_of_range_value_fails_validation() {
    let err = parse_config("[chart]\ntop_n = 0\n").unwrap_err();
    assert!(matches!(err, LangStatsError::Config(_)));
}

#[test]
fn discovered_invalid_config_is_reported() {
    let fs = MockFileSystem::new().with_file("/project/.lang-stats.toml", "[api]\ntimeout_secs = 0\n");

    let result = FileConfigLoader::with_fs(fs).load();

    assert!(result.is_err());
}
