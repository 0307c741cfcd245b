use super::*;
use std::path::Path;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(args).unwrap()
}

#[test]
fn cli_parse_no_args() {
    let cli = parse(&["urload"]);
    assert!(cli.files.is_empty());
}

#[test]
fn cli_parse_batch_files_in_order() {
    let cli = parse(&["urload", "first.txt", "second.txt"]);
    assert_eq!(cli.files, vec![PathBuf::from("first.txt"), PathBuf::from("second.txt")]);
}

#[test]
fn cli_parse_config_flag() {
    let cli = parse(&["urload", "--config", "/tmp/u.toml", "cmds"]);
    assert_eq!(cli.config.as_deref(), Some(Path::new("/tmp/u.toml")));
    assert_eq!(cli.files, vec![PathBuf::from("cmds")]);
}

#[test]
fn cli_rejects_unknown_flag() {
    assert!(Cli::try_parse_from(["urload", "--bogus"]).is_err());
}

#[test]
fn batch_exit_skips_prompt_and_later_files() {
    let dir = tempfile::tempdir().unwrap();
    let first = dir.path().join("a.txt");
    let second = dir.path().join("b.txt");
    std::fs::write(&first, "add http://x/\nexit\nadd http://y/\n").unwrap();
    std::fs::write(&second, "add http://z/\n").unwrap();

    let session = Session::start(dir.path()).unwrap();
    let fetcher = commands::test_support::FakeFetcher::new();
    let mut shell = Shell::new(config::Settings::default(), session, Box::new(fetcher), Vec::new());
    run_shell(&mut shell, &[first, second]).unwrap();

    let urls: Vec<&str> = shell.records().iter().map(|r| r.url.as_str()).collect();
    assert_eq!(urls, vec!["http://x/"]);
    let out = String::from_utf8(shell.output().clone()).unwrap();
    assert!(out.starts_with("Welcome to URLoad!"));
    assert!(out.ends_with("Goodbye!\n"));
}
