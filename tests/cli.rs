use clap::Parser;
use envprofile::cli::{Cli, Command};

#[test]
fn parses_create() {
    let cli = Cli::try_parse_from(["envprofile", "create", "dev"]).expect("cli parse should work");
    match cli.command {
        Command::Create(create) => assert_eq!(create.profile, "dev"),
        _ => panic!("expected create command"),
    }
}

#[test]
fn parses_delete() {
    let cli = Cli::try_parse_from(["envprofile", "delete", "dev"]).expect("cli parse should work");
    match cli.command {
        Command::Delete(delete) => assert_eq!(delete.profile, "dev"),
        _ => panic!("expected delete command"),
    }
}

#[test]
fn parses_add() {
    let cli = Cli::try_parse_from(["envprofile", "add", "dev", "DB_HOST", "localhost"])
        .expect("cli parse should work");
    match cli.command {
        Command::Add(add) => {
            assert_eq!(add.profile, "dev");
            assert_eq!(add.key, "DB_HOST");
            assert_eq!(add.value, "localhost");
        }
        _ => panic!("expected add command"),
    }
}

#[test]
fn parses_add_with_value_containing_spaces_and_quotes() {
    let cli = Cli::try_parse_from(["envprofile", "add", "dev", "API_KEY", "a b'c"])
        .expect("cli parse should work");
    match cli.command {
        Command::Add(add) => assert_eq!(add.value, "a b'c"),
        _ => panic!("expected add command"),
    }
}

#[test]
fn parses_remove() {
    let cli = Cli::try_parse_from(["envprofile", "remove", "dev", "DB_HOST"])
        .expect("cli parse should work");
    match cli.command {
        Command::Remove(remove) => {
            assert_eq!(remove.profile, "dev");
            assert_eq!(remove.key, "DB_HOST");
        }
        _ => panic!("expected remove command"),
    }
}

#[test]
fn parses_list() {
    let cli = Cli::try_parse_from(["envprofile", "list"]).expect("cli parse should work");
    assert!(matches!(cli.command, Command::List));
}

#[test]
fn parses_show() {
    let cli = Cli::try_parse_from(["envprofile", "show", "dev"]).expect("cli parse should work");
    match cli.command {
        Command::Show(show) => assert_eq!(show.profile, "dev"),
        _ => panic!("expected show command"),
    }
}

#[test]
fn parses_load() {
    let cli = Cli::try_parse_from(["envprofile", "load", "dev"]).expect("cli parse should work");
    match cli.command {
        Command::Load(load) => assert_eq!(load.profile, "dev"),
        _ => panic!("expected load command"),
    }
}

#[test]
fn parses_global_file_override() {
    let cli = Cli::try_parse_from(["envprofile", "list", "--file", "/tmp/custom.json"])
        .expect("cli parse should work");
    assert_eq!(
        cli.file.as_deref(),
        Some(std::path::Path::new("/tmp/custom.json"))
    );
}

#[test]
fn parses_global_json_flag() {
    let cli = Cli::try_parse_from(["envprofile", "--json", "show", "dev"])
        .expect("cli parse should work");
    assert!(cli.json);
}

#[test]
fn rejects_add_without_value() {
    let result = Cli::try_parse_from(["envprofile", "add", "dev", "DB_HOST"]);
    assert!(result.is_err());
}

#[test]
fn rejects_missing_subcommand() {
    let result = Cli::try_parse_from(["envprofile"]);
    assert!(result.is_err());
}
