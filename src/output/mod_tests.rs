use super::*;

#[test]
fn output_format_from_str() {
    assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
    assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
    assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
}

#[test]
fn output_format_rejects_unknown() {
    let err = "png".parse::<OutputFormat>().unwrap_err();
    assert_eq!(err, "Unknown output format: png");
}

#[test]
fn output_format_default_is_text() {
    assert_eq!(OutputFormat::default(), OutputFormat::Text);
}

#[test]
fn output_format_deserializes_lowercase() {
    #[derive(Deserialize)]
    struct Wrapper {
        format: OutputFormat,
    }
    let w: Wrapper = toml::from_str("format = \"json\"").unwrap();
    assert_eq!(w.format, OutputFormat::Json);
}

#[test]
fn write_file_creates_chart() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("chart.svg");
    write_file(&path, "<svg></svg>\n").unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "<svg></svg>\n");
}

#[test]
fn write_file_creates_parent_directories() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("charts").join("pie.svg");
    write_file(&path, "<svg/>").unwrap();
    assert!(path.exists());
}

#[test]
fn write_file_reports_path_on_failure() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("chart.svg");
    std::fs::create_dir(&path).unwrap();
    let err = write_file(&path, "x").unwrap_err();
    assert!(matches!(err, LangstatError::FileAccess { .. }));
    assert!(err.to_string().contains("chart.svg"));
}
