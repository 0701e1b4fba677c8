//! Application context for the Notepad CLI.
//!
//! Bundles the parsed arguments with the lazily loaded config.

use once_cell::unsync::OnceCell;

use crate::cli::Cli;
use crate::config::{load_config, resolve_config_path, ConfigLocation, NotepadConfig, OutputFormat};
use crate::ui::{Terminal, UiContext, UiFlags};

pub struct AppContext<'a> {
    cli: &'a Cli,
    location: OnceCell<ConfigLocation>,
    config: OnceCell<NotepadConfig>,
}

impl<'a> AppContext<'a> {
    pub fn new(cli: &'a Cli) -> Self {
        Self {
            cli,
            location: OnceCell::new(),
            config: OnceCell::new(),
        }
    }

    /// Where the config lives (or would live).
    pub fn config_location(&self) -> anyhow::Result<&ConfigLocation> {
        self.location
            .get_or_try_init(|| resolve_config_path(self.cli.config.as_deref()))
    }

    /// The effective config, loading it on first use.
    pub fn config(&self) -> anyhow::Result<&NotepadConfig> {
        self.config
            .get_or_try_init(|| self.config_location().and_then(load_config))
    }

    /// UI context from flags and the configured output format.
    ///
    /// Never fails: an unreadable config falls back to `auto`.
    pub fn ui_context(&self) -> UiContext {
        let format = self
            .config()
            .map(|config| config.output.format)
            .unwrap_or(OutputFormat::Auto);
        let flags = UiFlags {
            json: self.cli.json,
            no_color: self.cli.no_color,
            ascii: self.cli.ascii,
        };
        UiContext::resolve(flags, format, &Terminal::detect())
    }
}
