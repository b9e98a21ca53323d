//! Hanyu CLI entry point.

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use hanyu_runtime::{DEMOS, Document, demos, load_from_file, realise_sentence};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Exit code for bad arguments.
const USAGE: u8 = 2;

/// What to realise.
#[derive(Debug, Default)]
enum Source {
    #[default]
    None,
    Demo(String),
    File(PathBuf),
}

/// CLI configuration parsed from arguments.
#[derive(Debug, Default)]
struct CliConfig {
    source: Source,
    list: bool,
    tokens: bool,
    show_help: bool,
    show_version: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args: Vec<String> = env::args().collect();
    let config = match parse_args(&args) {
        Ok(config) => config,
        Err(message) => {
            eprintln!("\x1b[31mError: {message}\x1b[0m");
            eprintln!("Run 'hanyu --help' for usage.");
            return ExitCode::from(USAGE);
        }
    };

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn parse_args(args: &[String]) -> Result<CliConfig, String> {
    let mut config = CliConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "-l" | "--list" => config.list = true,
            "-t" | "--tokens" => config.tokens = true,
            "-d" | "--demo" => {
                i += 1;
                let Some(name) = args.get(i) else {
                    return Err("--demo requires a name".into());
                };
                set_source(&mut config, Source::Demo(name.clone()))?;
            }
            arg if arg.starts_with('-') => {
                return Err(format!("unknown option: {arg}"));
            }
            path => set_source(&mut config, Source::File(PathBuf::from(path)))?,
        }
        i += 1;
    }

    let wants_output = config.show_help || config.show_version || config.list;
    if matches!(config.source, Source::None) && !wants_output {
        return Err("nothing to realise: give --demo NAME, --list, or a FILE".into());
    }
    Ok(config)
}

fn set_source(config: &mut CliConfig, source: Source) -> Result<(), String> {
    if !matches!(config.source, Source::None) {
        return Err("give only one of --demo NAME or FILE".into());
    }
    config.source = source;
    Ok(())
}

fn run(config: &CliConfig) -> hanyu_foundation::Result<()> {
    if config.show_help {
        print_help();
        return Ok(());
    }

    if config.show_version {
        println!("hanyu {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    if config.list {
        for demo in DEMOS {
            println!("{:<14} {}", demo.name, demo.description);
        }
        return Ok(());
    }

    let mut document: Document = match &config.source {
        Source::Demo(name) => demos::find(name)?.document()?,
        Source::File(path) => load_from_file(path)?,
        Source::None => return Ok(()),
    };

    let sentence = realise_sentence(&mut document.tree, document.root);
    if config.tokens {
        for token in &sentence.tokens {
            println!("{token}");
        }
    } else {
        println!("{sentence}");
    }
    Ok(())
}

fn print_help() {
    println!(
        "\x1b[1mHanyu\x1b[0m - Mandarin surface realiser

\x1b[1mUSAGE:\x1b[0m
    hanyu [OPTIONS] [FILE]

\x1b[1mARGUMENTS:\x1b[0m
    [FILE]    MessagePack tree document to realise

\x1b[1mOPTIONS:\x1b[0m
    -h, --help         Print help information
    -V, --version      Print version information
    -l, --list         List the built-in demos
    -d, --demo NAME    Realise a built-in demo
    -t, --tokens       Print one token per line instead of the sentence

\x1b[1mEXAMPLES:\x1b[0m
    hanyu --list                 Show demo names
    hanyu --demo passive         Realise the passive demo
    hanyu tree.msgpack --tokens  Print the tokens of a saved tree

Set RUST_LOG (e.g. RUST_LOG=hanyu_syntax=debug) to trace realisation."
    );
}
