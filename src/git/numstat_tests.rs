use super::*;

fn record(added: u64, path: &str) -> ParsedLine {
    ParsedLine::Record(ChangeRecord {
        added,
        path: path.to_string(),
    })
}

#[test]
fn parses_standard_numstat_line() {
    assert_eq!(parse_line("12\t3\tsrc/main.rs", 1).unwrap(), record(12, "src/main.rs"));
}

#[test]
fn removed_field_is_ignored() {
    assert_eq!(parse_line("10\t-\tREADME.md", 1).unwrap(), record(10, "README.md"));
    assert_eq!(parse_line("0\t250\told.rs", 1).unwrap(), record(0, "old.rs"));
}

#[test]
fn binary_placeholder_drops_record() {
    assert_eq!(parse_line("-\t-\tfoo.png", 1).unwrap(), ParsedLine::Binary);
}

#[test]
fn blank_lines_are_separators() {
    assert_eq!(parse_line("", 3).unwrap(), ParsedLine::Blank);
    assert_eq!(parse_line("  \n", 3).unwrap(), ParsedLine::Blank);
}

#[test]
fn trailing_newline_and_spaces_are_trimmed() {
    assert_eq!(
        parse_line("5\t1\t{old.txt => new.py}\n", 1).unwrap(),
        record(5, "{old.txt => new.py}")
    );
}

#[test]
fn two_field_line_uses_last_field_as_path() {
    assert_eq!(parse_line("3\tbuild", 1).unwrap(), record(3, "build"));
}

#[test]
fn line_without_tab_is_malformed() {
    let err = parse_line("garbage", 4).unwrap_err();
    assert!(matches!(err, LangstatError::MalformedRecord { line: 4, .. }));
}

#[test]
fn non_numeric_count_is_malformed() {
    let err = parse_line("abc\t1\tx.rs", 9).unwrap_err();
    match err {
        LangstatError::MalformedRecord { line, content } => {
            assert_eq!(line, 9);
            assert_eq!(content, "abc\t1\tx.rs");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn negative_count_is_malformed() {
    assert!(parse_line("-5\t0\tx.rs", 1).is_err());
}
