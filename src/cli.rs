// src/cli.rs
use anyhow::{Context, Result};
use clap::builder::PossibleValuesParser;
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::{env, path::PathBuf};

use crate::commands::{self, generate::GenerateOptions};
use crate::core::discovery::Per;
use crate::infra::{i18n, logging, t};

/// Pre-parses the command line arguments to find the language setting.
/// This allows i18n to be initialized before the full CLI is built.
/// It looks for a `--lang <VALUE>` or `--lang=<VALUE>` argument.
fn pre_parse_language() -> Option<String> {
    let args: Vec<String> = env::args().collect();
    if let Some(value) = args.iter().find_map(|arg| arg.strip_prefix("--lang=")) {
        return Some(value.to_string());
    }
    args.iter()
        .position(|arg| arg == "--lang")
        .and_then(|pos| args.get(pos + 1))
        .cloned()
}

pub fn build_cli(locale: &str) -> Command {
    Command::new("build-job-matrix")
        .version(env!("CARGO_PKG_VERSION"))
        .about(t!("cli_about", locale = locale).to_string())
        .subcommand_negates_reqs(true)
        .arg(
            Arg::new("lang")
                .long("lang")
                .help(t!("cli_lang", locale = locale).to_string())
                .value_name("LANGUAGE")
                .global(true)
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("per")
                .long("per")
                .help(t!("arg_per", locale = locale).to_string())
                .value_name("PER")
                .required(true)
                .value_parser(PossibleValuesParser::new(Per::NAMES))
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help(t!("arg_verbose", locale = locale).to_string())
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("root")
                .long("root")
                .help(t!("arg_root", locale = locale).to_string())
                .value_name("ROOT")
                .default_value(".")
                .value_parser(clap::value_parser!(PathBuf))
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("defaults")
                .long("defaults")
                .help(t!("arg_defaults", locale = locale).to_string())
                .value_name("DEFAULTS")
                .value_parser(clap::value_parser!(PathBuf))
                .action(ArgAction::Set),
        )
        .subcommand(
            Command::new("init")
                .about(t!("cmd_init_about", locale = locale).to_string())
                .arg(
                    Arg::new("non-interactive")
                        .long("non-interactive")
                        .help(t!("arg_non_interactive", locale = locale).to_string())
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("root")
                        .long("root")
                        .help(t!("arg_root", locale = locale).to_string())
                        .value_name("ROOT")
                        .default_value(".")
                        .value_parser(clap::value_parser!(PathBuf))
                        .action(ArgAction::Set),
                ),
        )
}

fn generate_options(matches: &ArgMatches) -> Result<GenerateOptions> {
    let per = matches
        .get_one::<String>("per")
        .context("--per is required")?
        .parse::<Per>()?;
    let root = matches
        .get_one::<PathBuf>("root")
        .cloned()
        .unwrap_or_else(|| PathBuf::from("."));

    Ok(GenerateOptions {
        per,
        root,
        defaults: matches.get_one::<PathBuf>("defaults").cloned(),
        verbose: matches.get_flag("verbose"),
    })
}

pub fn run() -> Result<()> {
    // Pre-parse language and initialize i18n first.
    let language = i18n::init(pre_parse_language().as_deref());

    let matches = build_cli(&language).get_matches();

    match matches.subcommand() {
        Some(("init", init_matches)) => {
            let non_interactive = init_matches.get_flag("non-interactive");
            let root = init_matches
                .get_one::<PathBuf>("root")
                .cloned()
                .unwrap_or_else(|| PathBuf::from("."));

            // Show language detection message if it was auto-detected
            if !non_interactive && env::args().all(|arg| !arg.starts_with("--lang")) {
                println!(
                    "{}",
                    t!("system_language_detected", locale = &language, lang = &language)
                );
            }
            commands::init::run_init_wizard(&root, non_interactive, &language)?;
        }
        _ => {
            let options = generate_options(&matches)?;
            logging::init_logging(options.verbose);
            commands::generate::execute(&options)?;
        }
    }
    Ok(())
}
