use super::*;

#[test]
fn defaults_match_ranking_constants() {
    let config = Config::default();
    assert_eq!(config.ranking.policy, PolicyKind::TopN);
    assert_eq!(config.ranking.top, 15);
    assert!((config.ranking.threshold - 0.005).abs() < f64::EPSILON);
    assert_eq!(config.output.format, OutputFormat::Text);
    assert!(config.taxonomy.is_none());
    assert!(config.validate().is_ok());
}

#[test]
fn parses_full_config() {
    let config: Config = toml::from_str(
        r#"
taxonomy = "data/languages.yml"
overrides = ["lock:skip", "tpl:HTML"]
ignore = ["Text"]

[ranking]
policy = "threshold"
threshold = 0.01

[output]
format = "json"
bar_svg = "out/bar.svg"
pie_svg = "out/pie.svg"
"#,
    )
    .unwrap();

    assert_eq!(config.taxonomy, Some(PathBuf::from("data/languages.yml")));
    assert_eq!(config.overrides, vec!["lock:skip", "tpl:HTML"]);
    assert_eq!(config.ignore, vec!["Text"]);
    assert_eq!(config.ranking.policy, PolicyKind::Threshold);
    assert_eq!(config.ranking.top, 15);
    assert_eq!(config.output.format, OutputFormat::Json);
    assert_eq!(config.output.pie_svg, Some(PathBuf::from("out/pie.svg")));
    assert_eq!(
        config.ranking.bucket_policy(),
        BucketPolicy::Threshold(0.01)
    );
}

#[test]
fn partial_ranking_keeps_defaults() {
    let config: Config = toml::from_str("[ranking]\ntop = 5\n").unwrap();
    assert_eq!(config.ranking.policy, PolicyKind::TopN);
    assert_eq!(config.ranking.bucket_policy(), BucketPolicy::TopN(5));
}

#[test]
fn all_policy_parses() {
    let config: Config = toml::from_str("[ranking]\npolicy = \"all\"\n").unwrap();
    assert_eq!(config.ranking.bucket_policy(), BucketPolicy::All);
}

#[test]
fn unknown_keys_are_rejected() {
    assert!(toml::from_str::<Config>("colour = true\n").is_err());
    assert!(toml::from_str::<Config>("[ranking]\nmax = 3\n").is_err());
}

#[test]
fn zero_top_is_invalid() {
    let mut config = Config::default();
    config.ranking.top = 0;
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("ranking.top"));
}

#[test]
fn threshold_must_be_a_fraction() {
    for bad in [0.0, 1.0, -0.5, 2.0, f64::NAN] {
        let mut config = Config::default();
        config.ranking.threshold = bad;
        assert!(config.validate().is_err(), "threshold {bad} accepted");
    }
}

#[test]
fn override_without_colon_is_invalid() {
    let config = Config {
        overrides: vec!["py:Python".to_string(), "oops".to_string()],
        ..Config::default()
    };
    let err = config.validate().unwrap_err();
    assert!(matches!(err, LangstatError::Config(_)));
    assert!(err.to_string().contains("'oops'"));
}
