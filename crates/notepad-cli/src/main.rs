//! Notepad CLI - text utilities with password-based encryption
//!
//! Command-line front end over `notepad-core`: the same operations a host
//! app reaches through the bridge, plus config and completions.

mod app;
mod cli;
mod commands;
mod config;
mod constants;
mod errors;
mod helpers;
mod logging;
mod ui;

use clap::Parser;
use notepad_core::{Action, VERSION};

use crate::app::AppContext;
use crate::cli::{Cli, Commands, ConfigSubcommand};
use crate::commands::{crypto, exec, misc, text};
use crate::ui::{header, hint, print, print_error};

fn main() {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);
    let ctx = AppContext::new(&cli);

    if let Err(e) = run(&ctx, &cli) {
        let ui_ctx = ctx.ui_context();

        let full = format!("{}", e);
        let (message, hint) = split_error_hint(&full);
        print_error(&ui_ctx, message, hint.as_deref());
        std::process::exit(errors::exit_code_for(&e));
    }
}

/// Split an error into its first line and a hint, either the one carried
/// after a newline or a contextual one for common failures.
fn split_error_hint(error: &str) -> (&str, Option<String>) {
    if let Some(idx) = error.find('\n') {
        let carried = error[idx + 1..].trim();
        if !carried.is_empty() {
            return (&error[..idx], Some(carried.to_string()));
        }
        return (&error[..idx], extract_error_hint(&error[..idx]));
    }
    (error, extract_error_hint(error))
}

fn extract_error_hint(error: &str) -> Option<String> {
    let error_lower = error.to_lowercase();

    if error_lower.contains("unknown action") {
        let names: Vec<&str> = Action::ALL.iter().map(|a| a.as_str()).collect();
        return Some(format!("Hint: Known actions: {}", names.join(", ")));
    }

    if error_lower.contains("decryption failed") {
        return Some(
            "Hint: Check the password. Set NOTEPAD_PASSWORD or pass --password.".to_string(),
        );
    }

    if error_lower.contains("invalid pattern") {
        return Some("Hint: Drop --regex to search for the literal text.".to_string());
    }

    None
}

fn run(ctx: &AppContext, cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Some(Commands::Encrypt(args)) => {
            crypto::handle_encrypt(ctx, args)?;
        }
        Some(Commands::Decrypt(args)) => {
            crypto::handle_decrypt(ctx, args)?;
        }
        Some(Commands::Hash(args)) => {
            crypto::handle_hash(ctx, args)?;
        }
        Some(Commands::Stats(args)) => {
            text::handle_stats(ctx, args)?;
        }
        Some(Commands::Detect(args)) => {
            text::handle_detect(ctx, args)?;
        }
        Some(Commands::Search(args)) => {
            text::handle_search(ctx, args)?;
        }
        Some(Commands::Replace(args)) => {
            text::handle_replace(ctx, args)?;
        }
        Some(Commands::Format(args)) => {
            text::handle_format(ctx, args)?;
        }
        Some(Commands::Exec(args)) => {
            exec::handle_exec(ctx, args)?;
        }
        Some(Commands::Config { command }) => match command {
            ConfigSubcommand::Init { force } => {
                commands::config::handle_init(ctx, *force)?;
            }
            ConfigSubcommand::Show => {
                commands::config::handle_show(ctx)?;
            }
        },
        Some(Commands::Completions(args)) => {
            misc::handle_completions(args)?;
        }
        None => {
            let ui = ctx.ui_context();
            print(&ui, &header(&ui, "quickstart", Some(VERSION)));
            print(&ui, "  echo 'secret' | notepad encrypt --json > note.json");
            print(&ui, "  notepad decrypt --payload - < note.json");
            print(&ui, "  notepad stats --text 'Hello world.'");
            print(&ui, "  notepad exec getTextStats '[\"Hello\"]'");
            print(&ui, &hint(&ui, "Run `notepad --help` for every command."));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_carried_hint_is_split_off() {
        let (message, hint) = split_error_hint("Config not found at /x\nHint: Run init.");
        assert_eq!(message, "Config not found at /x");
        assert_eq!(hint.as_deref(), Some("Hint: Run init."));
    }

    #[test]
    fn test_contextual_hint_for_unknown_action() {
        let (message, hint) = split_error_hint("Unknown action: nope");
        assert_eq!(message, "Unknown action: nope");
        assert!(hint.unwrap().contains("getTextStats"));
    }

    #[test]
    fn test_no_hint_for_unrecognized_errors() {
        assert_eq!(split_error_hint("boom"), ("boom", None));
    }
}
