use std::path::PathBuf;

use clap::CommandFactory;

use super::*;

#[test]
fn cli_definition_is_valid() {
    Cli::command().debug_assert();
}

#[test]
fn cli_defaults() {
    let cli = Cli::parse_from(["langstat"]);
    assert!(cli.overrides.is_empty());
    assert!(cli.input.is_none());
    assert!(cli.taxonomy.is_none());
    assert_eq!(cli.log, "info");
    assert!(!cli.quiet);
    assert!(!cli.no_config);
    assert!(cli.format.is_none());
    assert!(cli.policy.is_none());
    assert!(matches!(cli.color, ColorChoice::Auto));
}

#[test]
fn cli_positional_overrides() {
    let cli = Cli::parse_from(["langstat", "lock:skip", "tpl:HTML"]);
    assert_eq!(cli.overrides, vec!["lock:skip", "tpl:HTML"]);
}

#[test]
fn cli_paths() {
    let cli = Cli::parse_from([
        "langstat",
        "--input",
        "history.txt",
        "--taxonomy",
        "languages.yml",
        "--config",
        "custom.toml",
        "--output-bar",
        "bar.svg",
        "--output-pie",
        "pie.svg",
    ]);
    assert_eq!(cli.input, Some(PathBuf::from("history.txt")));
    assert_eq!(cli.taxonomy, Some(PathBuf::from("languages.yml")));
    assert_eq!(cli.config, Some(PathBuf::from("custom.toml")));
    assert_eq!(cli.output_bar, Some(PathBuf::from("bar.svg")));
    assert_eq!(cli.output_pie, Some(PathBuf::from("pie.svg")));
}

#[test]
fn cli_format_json() {
    let cli = Cli::parse_from(["langstat", "--format", "json"]);
    assert_eq!(cli.format, Some(OutputFormat::Json));
}

#[test]
fn cli_rejects_unknown_format() {
    assert!(Cli::try_parse_from(["langstat", "--format", "xml"]).is_err());
}

#[test]
fn cli_ranking_options() {
    let cli = Cli::parse_from([
        "langstat",
        "--policy",
        "threshold",
        "--threshold",
        "0.02",
        "--top",
        "5",
    ]);
    assert_eq!(cli.policy, Some(PolicyKind::Threshold));
    assert_eq!(cli.threshold, Some(0.02));
    assert_eq!(cli.top, Some(5));
}

#[test]
fn cli_policy_names() {
    for (name, kind) in [
        ("top-n", PolicyKind::TopN),
        ("threshold", PolicyKind::Threshold),
        ("all", PolicyKind::All),
    ] {
        let cli = Cli::parse_from(["langstat", "--policy", name]);
        assert_eq!(cli.policy, Some(kind));
    }
}

#[test]
fn cli_quiet_and_log() {
    let cli = Cli::parse_from(["langstat", "-q", "--log", "debug", "--color", "never"]);
    assert!(cli.quiet);
    assert_eq!(cli.log, "debug");
    assert!(matches!(cli.color, ColorChoice::Never));
}
