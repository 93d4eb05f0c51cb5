use std::{fs, path::Path};

use tempfile::{TempDir, tempdir};

use caret::Catalog;
use caret_cli::{Args, CaretError, Command, config::ConfigError, run};

fn write_file(dir: &TempDir, name: &str, content: &str) -> String {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("Failed to write test file");
    path.to_string_lossy().to_string()
}

fn args(command: Command, config: Option<String>) -> Args {
    Args {
        command,
        config,
        log_level: "off".to_string(),
    }
}

fn raise(input: String, at: usize, code: &str, params: &[&str], recover: bool) -> Command {
    Command::Raise {
        input,
        at,
        code: code.to_string(),
        params: params.iter().map(|p| p.to_string()).collect(),
        plugins: Vec::new(),
        error_code: None,
        recover,
    }
}

fn run_to_string(args: &Args) -> Result<String, CaretError> {
    let mut out = Vec::new();
    run(args, &mut out)?;
    Ok(String::from_utf8(out).expect("CLI output is UTF-8"))
}

fn parse_messages(err: &CaretError) -> Vec<String> {
    match err {
        CaretError::Parse { err, .. } => err
            .diagnostics()
            .iter()
            .map(|d| d.message().to_string())
            .collect(),
        other => panic!("Expected Parse error, got {other}"),
    }
}

#[test]
fn test_locate_prints_positions() {
    let dir = tempdir().expect("Failed to create temp directory");
    let input = write_file(&dir, "input.js", "let a;\r\nlet b;");

    let output = run_to_string(&args(
        Command::Locate {
            input,
            offsets: vec![0, 7, 8, 14, 20],
        },
        None,
    ))
    .unwrap();

    assert_eq!(output, "0 1:0\n7 2:0\n8 2:0\n14 2:6\n20 2:12\n");
}

#[test]
fn test_locate_missing_input() {
    let err = run_to_string(&args(
        Command::Locate {
            input: "no/such/input.js".to_string(),
            offsets: vec![0],
        },
        None,
    ))
    .unwrap_err();

    assert!(matches!(err, CaretError::Io(_)));
}

#[test]
fn test_raise_strict_reports_one_diagnostic() {
    let dir = tempdir().expect("Failed to create temp directory");
    let input = write_file(&dir, "input.js", "let a;\nlet a;\n");

    let err = run_to_string(&args(
        raise(input, 11, "VarRedeclaration", &["a"], false),
        None,
    ))
    .unwrap_err();

    assert_eq!(
        parse_messages(&err),
        vec!["Identifier 'a' has already been declared (2:4)"]
    );
}

#[test]
fn test_raise_recovering_from_config() {
    let dir = tempdir().expect("Failed to create temp directory");
    let input = write_file(&dir, "input.js", "x\n  y");
    let config = write_file(&dir, "config.toml", "[parser]\nerror_recovery = true\n");

    let err = run_to_string(&args(
        raise(input, 4, "UnexpectedReservedWord", &[], false),
        Some(config),
    ))
    .unwrap_err();

    assert_eq!(
        parse_messages(&err),
        vec!["Unexpected reserved word '<missing>' (2:2)"]
    );
}

#[test]
fn test_raise_with_plugins_and_code() {
    let dir = tempdir().expect("Failed to create temp directory");
    let input = write_file(&dir, "input.js", "@dec export class A {}");

    let err = run_to_string(&args(
        Command::Raise {
            input,
            at: 0,
            code: "DecoratorExportClass".to_string(),
            params: Vec::new(),
            plugins: vec!["decorators".to_string()],
            error_code: Some("BABEL_PARSER_SYNTAX_ERROR".to_string()),
            recover: true,
        },
        None,
    ))
    .unwrap_err();

    let CaretError::Parse { err, .. } = err else {
        panic!("Expected Parse error");
    };
    let diag = &err.diagnostics()[0];
    assert_eq!(diag.code(), Some("BABEL_PARSER_SYNTAX_ERROR"));
    assert_eq!(diag.missing_plugin(), Some(&["decorators".to_string()][..]));
}

#[test]
fn test_raise_unknown_code() {
    let dir = tempdir().expect("Failed to create temp directory");
    let input = write_file(&dir, "input.js", "x");

    let err = run_to_string(&args(raise(input, 0, "NoSuchCode", &[], false), None)).unwrap_err();

    match err {
        CaretError::UnknownCode(unknown) => assert_eq!(unknown.name(), "NoSuchCode"),
        other => panic!("Expected UnknownCode error, got {other}"),
    }
}

#[test]
fn test_raise_missing_config() {
    let dir = tempdir().expect("Failed to create temp directory");
    let input = write_file(&dir, "input.js", "x");
    let missing = dir.path().join("missing.toml");

    let err = run_to_string(&args(
        raise(input, 0, "VarRedeclaration", &["x"], false),
        Some(missing.to_string_lossy().to_string()),
    ))
    .unwrap_err();

    match err {
        CaretError::Config(ConfigError::MissingFile(path)) => {
            assert_eq!(path, Path::new(&missing));
        }
        other => panic!("Expected Config error, got {other}"),
    }
}

#[test]
fn test_explain_single_code() {
    let output = run_to_string(&args(
        Command::Explain {
            code: Some("VarRedeclaration".to_string()),
        },
        None,
    ))
    .unwrap();

    assert_eq!(output, "Identifier '%0' has already been declared\n");
}

#[test]
fn test_explain_lists_catalog() {
    let output = run_to_string(&args(Command::Explain { code: None }, None)).unwrap();

    assert_eq!(output.lines().count(), Catalog::len());
    assert!(output.contains("VarRedeclaration: Identifier '%0' has already been declared\n"));

    // A multi-line template stays on one line and unescapes to the raw text.
    let line = output
        .lines()
        .find(|line| line.starts_with("UnexpectedPrivateField: "))
        .expect("UnexpectedPrivateField is listed");
    let listed = line
        .trim_start_matches("UnexpectedPrivateField: ")
        .replace("\\n", "\n");
    assert_eq!(listed, Catalog::lookup("UnexpectedPrivateField").unwrap().format());
}

#[test]
fn test_explain_single_code_keeps_line_breaks() {
    let output = run_to_string(&args(
        Command::Explain {
            code: Some("UnexpectedPrivateField".to_string()),
        },
        None,
    ))
    .unwrap();

    assert_eq!(output.lines().count(), 2);
    assert!(output.starts_with("Private names can only be used"));
}
