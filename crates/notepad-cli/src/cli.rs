use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use notepad_core::VERSION;

/// Notepad - text utilities with password-based encryption and hashing
#[derive(Parser)]
#[command(name = "notepad")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the config file
    #[arg(long, global = true, env = "NOTEPAD_CONFIG")]
    pub config: Option<String>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Use ASCII symbols only
    #[arg(long, global = true)]
    pub ascii: bool,

    /// Log debug events to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Text source shared by text commands.
#[derive(Args)]
pub struct TextInput {
    /// Text to operate on (reads stdin when omitted; text commands drop one
    /// trailing newline from stdin, encrypt and hash keep it)
    #[arg(long)]
    pub text: Option<String>,
}

/// Arguments for the `encrypt` command
#[derive(Args)]
pub struct EncryptArgs {
    #[command(flatten)]
    pub input: TextInput,

    /// Password (falls back to NOTEPAD_PASSWORD, then a prompt)
    #[arg(long)]
    pub password: Option<String>,
}

/// Arguments for the `decrypt` command
#[derive(Args)]
pub struct DecryptArgs {
    /// Base64 ciphertext
    #[arg(long, value_name = "BASE64", required_unless_present = "payload")]
    pub data: Option<String>,

    /// Base64 IV (16 bytes)
    #[arg(long, value_name = "BASE64", required_unless_present = "payload")]
    pub iv: Option<String>,

    /// Base64 salt (16 bytes)
    #[arg(long, value_name = "BASE64", required_unless_present = "payload")]
    pub salt: Option<String>,

    /// JSON payload as printed by `encrypt --json` ("-" reads stdin)
    #[arg(long, value_name = "JSON", conflicts_with_all = ["data", "iv", "salt"])]
    pub payload: Option<String>,

    /// Password (falls back to NOTEPAD_PASSWORD, then a prompt)
    #[arg(long)]
    pub password: Option<String>,
}

/// Arguments for the `hash` command
#[derive(Args)]
pub struct HashArgs {
    #[command(flatten)]
    pub input: TextInput,

    /// Algorithm: MD5, SHA-256 or SHA-512 (anything else means SHA-256)
    #[arg(short, long)]
    pub algorithm: Option<String>,
}

/// Arguments for the `search` command
#[derive(Args)]
pub struct SearchArgs {
    /// Term to search for
    #[arg(value_name = "TERM")]
    pub term: String,

    #[command(flatten)]
    pub input: TextInput,

    /// Match case exactly
    #[arg(short = 'c', long)]
    pub case_sensitive: bool,

    /// Treat TERM as a regular expression
    #[arg(short = 'r', long)]
    pub regex: bool,

    /// Chars of context around each match
    #[arg(long, value_name = "N")]
    pub context: Option<usize>,
}

/// Arguments for the `replace` command
#[derive(Args)]
pub struct ReplaceArgs {
    /// Term to search for
    #[arg(value_name = "TERM")]
    pub term: String,

    /// Replacement text ($1 and ${name} insert groups, a backslash escapes the next char)
    #[arg(value_name = "REPLACEMENT")]
    pub replacement: String,

    #[command(flatten)]
    pub input: TextInput,

    /// Replace every match instead of the first
    #[arg(short, long)]
    pub all: bool,

    /// Match case exactly
    #[arg(short = 'c', long)]
    pub case_sensitive: bool,

    /// Treat TERM as a regular expression
    #[arg(short = 'r', long)]
    pub regex: bool,
}

/// Arguments for the `format` command
#[derive(Args)]
pub struct FormatArgs {
    #[command(flatten)]
    pub input: TextInput,

    /// Trim leading and trailing whitespace
    #[arg(long)]
    pub trim: bool,

    /// Collapse runs of spaces
    #[arg(long)]
    pub squeeze_spaces: bool,

    /// Replace line breaks with spaces
    #[arg(long)]
    pub join_lines: bool,

    /// Convert to UPPERCASE
    #[arg(long, group = "case")]
    pub upper: bool,

    /// Convert to lowercase
    #[arg(long, group = "case")]
    pub lower: bool,

    /// Convert to Title Case
    #[arg(long, group = "case")]
    pub title: bool,

    /// Convert to Sentence case
    #[arg(long, group = "case")]
    pub sentence: bool,

    /// Sort lines
    #[arg(long)]
    pub sort: bool,

    /// Remove duplicate lines, keeping the first
    #[arg(long)]
    pub dedup: bool,

    /// Reverse the text
    #[arg(long)]
    pub reverse: bool,
}

/// Arguments for the `exec` command
#[derive(Args)]
pub struct ExecArgs {
    /// Action name (e.g. getTextStats, encrypt, undo)
    #[arg(value_name = "ACTION", required_unless_present = "batch")]
    pub action: Option<String>,

    /// Positional arguments as a JSON array
    #[arg(value_name = "ARGS_JSON")]
    pub args: Option<String>,

    /// Run a JSON array of {"action", "args"} calls against one session ("-" reads stdin)
    #[arg(long, value_name = "FILE", conflicts_with = "action")]
    pub batch: Option<String>,
}

/// Arguments for the `completions` command
#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_name = "SHELL")]
    pub shell: Shell,
}

#[derive(Subcommand)]
pub enum ConfigSubcommand {
    /// Write a config file with the defaults
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Print the effective config
    Show,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Encrypt text with a password (AES-256-CBC, PBKDF2 key)
    Encrypt(EncryptArgs),

    /// Decrypt a payload produced by `encrypt`
    Decrypt(DecryptArgs),

    /// Hash text
    Hash(HashArgs),

    /// Show text statistics
    Stats(TextInput),

    /// Detect URLs, emails, phone numbers, hashtags, mentions and dates
    Detect(TextInput),

    /// Search text
    Search(SearchArgs),

    /// Replace matches in text
    Replace(ReplaceArgs),

    /// Apply formatting transforms
    Format(FormatArgs),

    /// Run a host bridge action and print its JSON result
    Exec(ExecArgs),

    /// Manage the config file
    Config {
        #[command(subcommand)]
        command: ConfigSubcommand,
    },

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_case_flags_are_exclusive() {
        let result = Cli::try_parse_from(["notepad", "format", "--upper", "--lower"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_decrypt_requires_fields_or_payload() {
        assert!(Cli::try_parse_from(["notepad", "decrypt", "--data", "x"]).is_err());
        assert!(Cli::try_parse_from(["notepad", "decrypt", "--payload", "{}"]).is_ok());
        assert!(
            Cli::try_parse_from(["notepad", "decrypt", "--data", "a", "--iv", "b", "--salt", "c"])
                .is_ok()
        );
    }

    #[test]
    fn test_exec_parses_action_and_args() {
        let cli = Cli::try_parse_from(["notepad", "exec", "hash", r#"["abc"]"#]).unwrap();
        match cli.command {
            Some(Commands::Exec(args)) => {
                assert_eq!(args.action.as_deref(), Some("hash"));
                assert_eq!(args.args.as_deref(), Some(r#"["abc"]"#));
            }
            _ => panic!("expected exec"),
        }
    }
}
