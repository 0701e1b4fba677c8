//! Resolved UI settings for one invocation.

use std::io::IsTerminal;

use super::mode::OutputMode;
use crate::config::OutputFormat;

const DEFAULT_WIDTH: usize = 80;

/// Global presentation flags from the command line.
#[derive(Debug, Clone, Copy, Default)]
pub struct UiFlags {
    pub json: bool,
    pub no_color: bool,
    pub ascii: bool,
}

/// What the process can see about its terminal.
#[derive(Debug, Clone, Default)]
pub struct Terminal {
    pub stdout_tty: bool,
    pub stdin_tty: bool,
    /// `TERM=dumb`
    pub dumb: bool,
    /// `NO_COLOR` is set
    pub no_color: bool,
    pub width: Option<usize>,
}

impl Terminal {
    pub fn detect() -> Self {
        Self {
            stdout_tty: std::io::stdout().is_terminal(),
            stdin_tty: std::io::stdin().is_terminal(),
            dumb: std::env::var("TERM").map(|v| v == "dumb").unwrap_or(false),
            no_color: std::env::var_os("NO_COLOR").is_some(),
            width: terminal_width(),
        }
    }

    fn is_styled(&self) -> bool {
        self.stdout_tty && !self.dumb
    }
}

/// Presentation settings shared by every command handler.
#[derive(Debug, Clone)]
pub struct UiContext {
    pub mode: OutputMode,
    pub color: bool,
    pub unicode: bool,
    pub width: usize,
    /// Password prompts are allowed
    pub interactive: bool,
}

impl UiContext {
    pub fn resolve(flags: UiFlags, format: OutputFormat, terminal: &Terminal) -> Self {
        let styled = terminal.is_styled();

        Self {
            mode: OutputMode::select(flags.json, format, styled),
            color: styled && !flags.no_color && !terminal.no_color,
            unicode: !flags.ascii,
            width: terminal.width.unwrap_or(DEFAULT_WIDTH),
            interactive: terminal.stdout_tty && terminal.stdin_tty,
        }
    }
}

/// `COLUMNS` first, then the stdout window size.
fn terminal_width() -> Option<usize> {
    if let Some(width) = std::env::var("COLUMNS")
        .ok()
        .and_then(|cols| cols.parse::<usize>().ok())
        .filter(|width| *width > 0)
    {
        return Some(width);
    }

    #[cfg(unix)]
    {
        use std::mem::MaybeUninit;

        let mut winsize = MaybeUninit::<libc::winsize>::uninit();
        // SAFETY: TIOCGWINSZ only writes into the provided winsize
        let result =
            unsafe { libc::ioctl(libc::STDOUT_FILENO, libc::TIOCGWINSZ, winsize.as_mut_ptr()) };
        if result == 0 {
            let ws = unsafe { winsize.assume_init() };
            if ws.ws_col > 0 {
                return Some(ws.ws_col as usize);
            }
        }
    }

    None
}
