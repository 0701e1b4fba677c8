//! Rendering primitives for CLI output.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::{ASCII_MARKDOWN, UTF8_FULL};
use comfy_table::{ContentArrangement, Table as ComfyTable};
use serde::Serialize;

use super::context::UiContext;
use super::mode::OutputMode;
use super::theme::{styled, styles, Badge};

/// Render a header line for a command.
///
/// Pretty mode: "Notepad · command (context)"
/// Plain mode: "notepad command"
pub fn header(ctx: &UiContext, command: &str, context: Option<&str>) -> String {
    match ctx.mode {
        OutputMode::Pretty => {
            let title = styled("Notepad", styles::bold(), ctx.color);
            let command = styled(command, styles::accent(), ctx.color);
            match context {
                Some(c) => format!("{} \u{00B7} {} ({})", title, command, c),
                None => format!("{} \u{00B7} {}", title, command),
            }
        }
        OutputMode::Plain => format!("notepad {}", command),
        OutputMode::Json => String::new(),
    }
}

/// Render a badge with optional message.
pub fn badge(ctx: &UiContext, kind: Badge, message: &str) -> String {
    let colored_badge = styled(kind.display(ctx.unicode), kind.style(), ctx.color);
    if message.is_empty() {
        colored_badge
    } else {
        format!("{} {}", colored_badge, message)
    }
}

/// Render a key-value pair.
///
/// Pretty mode: "Key: value" with dim key
/// Plain mode: "key=value"
pub fn kv(ctx: &UiContext, key: &str, value: &str) -> String {
    if ctx.mode.is_pretty() {
        let styled_key = styled(&format!("{}:", key), styles::dim(), ctx.color);
        format!("{} {}", styled_key, value)
    } else {
        format!("{}={}", key.to_lowercase().replace(' ', "_"), value)
    }
}

/// Render a hint line.
pub fn hint(ctx: &UiContext, text: &str) -> String {
    if ctx.mode.is_pretty() {
        let label = styled("Hint:", styles::dim(), ctx.color);
        format!("{} {}", label, text)
    } else {
        format!("hint={}", text)
    }
}

/// Column definition for table rendering.
#[derive(Debug, Clone)]
pub struct Column {
    pub header: &'static str,
}

impl Column {
    pub const fn new(header: &'static str) -> Self {
        Self { header }
    }
}

/// Render a table.
///
/// Pretty mode: bordered comfy-table
/// Plain mode: tab-separated values, no header
pub fn table(ctx: &UiContext, columns: &[Column], rows: &[Vec<String>]) -> String {
    if ctx.mode.is_pretty() {
        let mut table = ComfyTable::new();
        if ctx.unicode {
            table
                .load_preset(UTF8_FULL)
                .apply_modifier(UTF8_ROUND_CORNERS);
        } else {
            table.load_preset(ASCII_MARKDOWN);
        }
        table.set_content_arrangement(ContentArrangement::Dynamic);
        table.set_width(ctx.width.min(u16::MAX as usize) as u16);
        table.set_header(columns.iter().map(|c| c.header).collect::<Vec<_>>());
        for row in rows {
            table.add_row(row);
        }
        table.to_string()
    } else {
        rows.iter()
            .map(|row| row.join("\t"))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Print a message to stdout unless in JSON mode.
pub fn print(ctx: &UiContext, message: &str) {
    if !ctx.mode.is_json() {
        println!("{}", message);
    }
}

/// Print `value` as pretty JSON.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Format an error message with optional hint.
///
/// Pretty mode: "[ERR] message" with optional "Hint: ..." on next line
/// Plain mode: "error=message" with optional "hint=suggestion"
pub fn error_message(ctx: &UiContext, message: &str, error_hint: Option<&str>) -> String {
    let mut lines = Vec::new();

    if ctx.mode.is_pretty() {
        lines.push(badge(ctx, Badge::Err, message));
        if let Some(h) = error_hint {
            lines.push(hint(ctx, h));
        }
    } else {
        lines.push(format!("error={}", message));
        if let Some(h) = error_hint {
            lines.push(format!("hint={}", h));
        }
    }

    lines.join("\n")
}

/// Print an error message to stderr with optional hint.
pub fn print_error(ctx: &UiContext, message: &str, error_hint: Option<&str>) {
    eprintln!("{}", error_message(ctx, message, error_hint));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain_ctx() -> UiContext {
        UiContext {
            interactive: false,
            color: false,
            unicode: false,
            width: 80,
            mode: OutputMode::Plain,
        }
    }

    fn pretty_ctx() -> UiContext {
        UiContext {
            interactive: true,
            color: false,
            unicode: true,
            width: 80,
            mode: OutputMode::Pretty,
        }
    }

    #[test]
    fn test_header_modes() {
        assert_eq!(header(&plain_ctx(), "hash", None), "notepad hash");
        let h = header(&pretty_ctx(), "search", Some("3 matches"));
        assert!(h.contains("Notepad"));
        assert!(h.contains("search (3 matches)"));
    }

    #[test]
    fn test_kv_plain_normalizes_key() {
        assert_eq!(kv(&plain_ctx(), "Word Count", "12"), "word_count=12");
    }

    #[test]
    fn test_kv_pretty() {
        let line = kv(&pretty_ctx(), "Algorithm", "SHA-256");
        assert_eq!(line, "Algorithm: SHA-256");
    }

    #[test]
    fn test_badge_ascii() {
        let b = badge(&plain_ctx(), Badge::Ok, "Done");
        assert_eq!(b, "[OK] Done");
    }

    #[test]
    fn test_table_plain_is_tab_separated() {
        let columns = [Column::new("Line"), Column::new("Match")];
        let rows = vec![
            vec!["1".to_string(), "cat".to_string()],
            vec!["4".to_string(), "Cat".to_string()],
        ];
        assert_eq!(table(&plain_ctx(), &columns, &rows), "1\tcat\n4\tCat");
    }

    #[test]
    fn test_table_pretty_has_headers() {
        let columns = [Column::new("Line"), Column::new("Match")];
        let rows = vec![vec!["1".to_string(), "cat".to_string()]];
        let t = table(&pretty_ctx(), &columns, &rows);
        assert!(t.contains("Line"));
        assert!(t.contains("Match"));
        assert!(t.contains("cat"));
    }

    #[test]
    fn test_error_message_modes() {
        let e = error_message(&pretty_ctx(), "Decryption failed", Some("Check the password"));
        assert!(e.contains("[\u{2717}]"));
        assert!(e.contains("Hint: Check the password"));

        let e = error_message(&plain_ctx(), "Decryption failed", None);
        assert_eq!(e, "error=Decryption failed");
    }
}
