use tempfile::TempDir;

use super::*;
use crate::config::{Config, parse_config};
use crate::output::ColorMode;
use crate::EXIT_CONFIG_ERROR;

#[test]
fn template_contains_every_section() {
    let template = generate_config_template();
    assert!(template.contains("[account]"));
    assert!(template.contains("[chart]"));
    assert!(template.contains("[api]"));
    assert!(template.contains("output = \"language_stats.svg\""));
}

#[test]
fn template_parses_to_default_config() {
    let config = parse_config(&generate_config_template()).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn run_init_creates_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join(".lang-stats.toml");
    let args = InitArgs {
        output: config_path.clone(),
        force: false,
    };

    run_init_impl(&args).unwrap();

    let content = std::fs::read_to_string(&config_path).unwrap();
    assert_eq!(content, generate_config_template());
}

#[test]
fn run_init_refuses_to_overwrite() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join(".lang-stats.toml");
    std::fs::write(&config_path, "# mine").unwrap();
    let args = InitArgs {
        output: config_path.clone(),
        force: false,
    };

    let err = run_init_impl(&args).unwrap_err();

    assert!(err.to_string().contains("already exists"));
    assert_eq!(std::fs::read_to_string(&config_path).unwrap(), "# mine");
}

#[test]
fn run_init_force_overwrites() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join(".lang-stats.toml");
    std::fs::write(&config_path, "# mine").unwrap();
    let args = InitArgs {
        output: config_path.clone(),
        force: true,
    };

    run_init_impl(&args).unwrap();

    assert!(std::fs::read_to_string(&config_path).unwrap().contains("[chart]"));
}

#[test]
fn run_init_existing_file_exits_with_config_error() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join(".lang-stats.toml");
    std::fs::write(&config_path, "").unwrap();
    let args = InitArgs {
        output: config_path,
        force: false,
    };

    let code = run_init(&args, &ErrorOutput::new(ColorMode::Never));

    assert_eq!(code, EXIT_CONFIG_ERROR);
}
