use clap::Parser;
use loki::cli::Args;
use std::ffi::OsString;

fn make_args(args: &[&str]) -> Vec<OsString> {
    let mut res = vec![OsString::from("loki")];
    res.extend(args.iter().map(OsString::from));
    res
}

#[test]
fn test_basic_args() {
    let args = make_args(&["-a", "John Doe", "-o", "script.sh"]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert_eq!(parsed.author.as_deref(), Some("John Doe"));
    assert_eq!(parsed.output.as_deref(), Some("script.sh"));
    assert_eq!(parsed.description, "");
    assert_eq!(parsed.language, "");
    assert_eq!(parsed.font, "");
    assert!(!parsed.time);
    assert!(!parsed.print);
    assert!(!parsed.interactive);
    assert!(!parsed.verbose);
}

#[test]
fn test_all_flags() {
    let args = make_args(&[
        "--author",
        "Jane Smith",
        "--output",
        "script",
        "--description",
        "Python script",
        "--language",
        "python",
        "--font",
        "standard",
        "--time",
        "--print",
        "--verbose",
    ]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert_eq!(parsed.description, "Python script");
    assert_eq!(parsed.language, "python");
    assert_eq!(parsed.font, "standard");
    assert!(parsed.time);
    assert!(parsed.print);
    assert!(parsed.verbose);
}

#[test]
fn test_short_flags() {
    let args = make_args(&["-a", "A", "-o", "x", "-d", "D", "-l", "bash", "-f", "mini", "-t", "-p"]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert_eq!(parsed.language, "bash");
    assert_eq!(parsed.font, "mini");
    assert!(parsed.time);
    assert!(parsed.print);
}

#[test]
fn test_missing_author() {
    let args = make_args(&["-o", "script.sh"]);
    let err = Args::try_parse_from(args).unwrap_err();
    assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
}

#[test]
fn test_missing_output() {
    let args = make_args(&["-a", "John Doe"]);
    assert!(Args::try_parse_from(args).is_err());
}

#[test]
fn test_interactive_needs_no_fields() {
    let args = make_args(&["-i"]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert!(parsed.interactive);
    assert!(parsed.author.is_none());
    assert!(parsed.output.is_none());
}

#[test]
fn test_list_languages_needs_no_fields() {
    let args = make_args(&["--list-languages"]);
    assert!(Args::try_parse_from(args).unwrap().list_languages);
}

#[test]
fn test_positional_args_rejected() {
    let args = make_args(&["-a", "A", "-o", "x.sh", "extra"]);
    assert!(Args::try_parse_from(args).is_err());
}
