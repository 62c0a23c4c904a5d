#![allow(non_snake_case)]

use super::*;
use clap::CommandFactory;

fn parse_build(args: &[&str]) -> BuildArgs {
    let cli = Cli::try_parse_from(["rant", "msg", "build"].iter().chain(args)).unwrap();
    match cli.command {
        Commands::Msg {
            command: MsgCommands::Build(args),
        } => args,
        _ => panic!("expected build command"),
    }
}

#[test]
fn Cli___debug_assert___is_consistent() {
    Cli::command().debug_assert();
}

#[test]
fn BuildArgs___defaults___current_dir_recursive() {
    let args = parse_build(&[]);

    assert_eq!(args.path, PathBuf::from("."));
    assert!(args.is_recursive());
    assert!(args.output.is_none());
    assert!(args.config.is_none());
}

#[test]
fn BuildArgs___no_recursive___disables_recursion() {
    let args = parse_build(&["proj", "--no-recursive"]);

    assert_eq!(args.path, PathBuf::from("proj"));
    assert!(!args.is_recursive());
}

#[test]
fn BuildArgs___last_recursion_flag___wins() {
    assert!(parse_build(&["--no-recursive", "--recursive"]).is_recursive());
    assert!(!parse_build(&["--recursive", "--no-recursive"]).is_recursive());
}

#[test]
fn BuildArgs___apply___no_flags_keeps_config() {
    let args = parse_build(&[]);
    let mut config = CompilerConfig::new().with_python(true).with_max_concurrent(2);
    let before = config.clone();

    args.apply(&mut config);

    assert_eq!(config, before);
}

#[test]
fn BuildArgs___apply___overrides_targets_and_limits() {
    let args = parse_build(&["--no-csharp", "--python", "-v", "--max-concurrent", "3"]);
    let mut config = CompilerConfig::default();

    args.apply(&mut config);

    assert!(!config.targets.csharp);
    assert!(config.targets.python);
    assert!(config.verbose);
    assert_eq!(config.max_concurrent_subtrees, Some(3));
}

#[test]
fn BuildArgs___apply___no_python_overrides_file() {
    let args = parse_build(&["--no-python"]);
    let mut config = CompilerConfig::new().with_python(true);

    args.apply(&mut config);

    assert!(!config.targets.python);
}

#[test]
fn CheckArgs___parse___collects_languages() {
    let cli =
        Cli::try_parse_from(["rant", "msg", "check", "a.msg", "-l", "csharp", "-l", "py", "-p"])
            .unwrap();

    let Commands::Msg {
        command: MsgCommands::Check(args),
    } = cli.command
    else {
        panic!("expected check command");
    };
    assert_eq!(args.file, PathBuf::from("a.msg"));
    assert_eq!(args.lang, vec!["csharp", "py"]);
    assert!(args.print);
}

#[test]
fn CheckArgs___missing_file___is_rejected() {
    assert!(Cli::try_parse_from(["rant", "msg", "check"]).is_err());
}
