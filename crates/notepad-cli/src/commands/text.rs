//! Text commands: `stats`, `detect`, `search`, `replace` and `format`.

use notepad_core::text::{
    detect_patterns, format_text, replace, search, text_stats, FormattingOptions, ReplaceOptions,
    SearchOptions, TextDetection,
};

use crate::app::AppContext;
use crate::cli::{FormatArgs, ReplaceArgs, SearchArgs, TextInput};
use crate::errors::CliError;
use crate::helpers::{read_text, TrailingNewline};
use crate::ui::{badge, header, kv, print, print_json, table, Badge, Column};

pub fn handle_stats(ctx: &AppContext, input: &TextInput) -> anyhow::Result<()> {
    let ui = ctx.ui_context();
    let text = read_text(input.text.as_deref(), TrailingNewline::Strip)?;
    let stats = text_stats(&text);

    if ui.mode.is_json() {
        return print_json(&stats);
    }

    let rows = vec![
        ("Characters", stats.character_count.to_string()),
        ("Characters No Spaces", stats.character_count_no_spaces.to_string()),
        ("Words", stats.word_count.to_string()),
        ("Unique Words", stats.unique_word_count.to_string()),
        ("Sentences", stats.sentence_count.to_string()),
        ("Paragraphs", stats.paragraph_count.to_string()),
        ("Lines", stats.line_count.to_string()),
        ("Average Word Length", format!("{:.2}", stats.average_word_length)),
        ("Reading Minutes", format!("{:.2}", stats.reading_time_minutes)),
        ("Speaking Minutes", format!("{:.2}", stats.speaking_time_minutes)),
    ];

    if ui.mode.is_pretty() {
        print(&ui, &header(&ui, "stats", None));
        let rows: Vec<Vec<String>> = rows
            .into_iter()
            .map(|(metric, value)| vec![metric.to_string(), value])
            .collect();
        print(&ui, &table(&ui, &[Column::new("Metric"), Column::new("Value")], &rows));
    } else {
        for (metric, value) in rows {
            print(&ui, &kv(&ui, metric, &value));
        }
    }
    Ok(())
}

/// Flatten a detection into `(kind, value)` pairs in display order.
fn detection_rows(detection: &TextDetection) -> Vec<(&'static str, &str)> {
    let groups: [(&'static str, &Vec<String>); 6] = [
        ("url", &detection.urls),
        ("email", &detection.emails),
        ("phone", &detection.phone_numbers),
        ("hashtag", &detection.hashtags),
        ("mention", &detection.mentions),
        ("date", &detection.dates),
    ];
    groups
        .into_iter()
        .flat_map(|(kind, values)| values.iter().map(move |v| (kind, v.as_str())))
        .collect()
}

pub fn handle_detect(ctx: &AppContext, input: &TextInput) -> anyhow::Result<()> {
    let ui = ctx.ui_context();
    let text = read_text(input.text.as_deref(), TrailingNewline::Strip)?;
    let detection = detect_patterns(&text);

    if ui.mode.is_json() {
        return print_json(&detection);
    }

    let rows = detection_rows(&detection);
    if ui.mode.is_pretty() {
        print(&ui, &header(&ui, "detect", None));
        if rows.is_empty() {
            print(&ui, &badge(&ui, Badge::Info, "No patterns found"));
            return Ok(());
        }
        let rows: Vec<Vec<String>> = rows
            .into_iter()
            .map(|(kind, value)| vec![kind.to_string(), value.to_string()])
            .collect();
        print(&ui, &table(&ui, &[Column::new("Kind"), Column::new("Value")], &rows));
    } else {
        for (kind, value) in rows {
            print(&ui, &kv(&ui, kind, value));
        }
    }
    Ok(())
}

pub fn handle_search(ctx: &AppContext, args: &SearchArgs) -> anyhow::Result<()> {
    let ui = ctx.ui_context();
    let config = ctx.config()?;
    let text = read_text(args.input.text.as_deref(), TrailingNewline::Strip)?;

    let options = SearchOptions {
        case_sensitive: args.case_sensitive || config.search.case_sensitive,
        is_regex: args.regex,
        context_chars: args.context.unwrap_or(config.search.context_chars),
    };
    let result = search(&text, &args.term, &options);
    if let Some(error) = result.error {
        return Err(CliError::invalid_input(error).into());
    }

    if ui.mode.is_json() {
        return print_json(&result);
    }

    let rows: Vec<Vec<String>> = result
        .matches
        .iter()
        .map(|m| {
            vec![
                m.line_number.to_string(),
                m.start.to_string(),
                m.matched_text.clone(),
                m.context.replace('\n', " "),
            ]
        })
        .collect();

    if ui.mode.is_pretty() {
        let summary = format!("{} match(es)", result.match_count);
        print(&ui, &header(&ui, "search", Some(&summary)));
        if rows.is_empty() {
            print(&ui, &badge(&ui, Badge::Info, "No matches"));
            return Ok(());
        }
    }
    if !rows.is_empty() {
        let columns = [
            Column::new("Line"),
            Column::new("Offset"),
            Column::new("Match"),
            Column::new("Context"),
        ];
        print(&ui, &table(&ui, &columns, &rows));
    }
    Ok(())
}

pub fn handle_replace(ctx: &AppContext, args: &ReplaceArgs) -> anyhow::Result<()> {
    let ui = ctx.ui_context();
    let config = ctx.config()?;
    let text = read_text(args.input.text.as_deref(), TrailingNewline::Strip)?;

    let options = ReplaceOptions {
        replace_all: args.all,
        case_sensitive: args.case_sensitive || config.search.case_sensitive,
        is_regex: args.regex,
    };
    let result = replace(&text, &args.term, &args.replacement, &options);
    if !result.success {
        let error = result.error.unwrap_or_else(|| "Replace failed".to_string());
        return Err(CliError::invalid_input(error).into());
    }

    if ui.mode.is_json() {
        return print_json(&result);
    }
    if ui.mode.is_pretty() {
        let message = format!("{} replacement(s)", result.replacement_count);
        eprintln!("{}", badge(&ui, Badge::Ok, &message));
    }
    println!("{}", result.result_text);
    Ok(())
}

impl From<&FormatArgs> for FormattingOptions {
    fn from(args: &FormatArgs) -> Self {
        Self {
            trim: args.trim,
            remove_extra_spaces: args.squeeze_spaces,
            remove_line_breaks: args.join_lines,
            to_upper_case: args.upper,
            to_lower_case: args.lower,
            to_title_case: args.title,
            to_sentence_case: args.sentence,
            sort_lines: args.sort,
            remove_duplicate_lines: args.dedup,
            reverse: args.reverse,
        }
    }
}

pub fn handle_format(ctx: &AppContext, args: &FormatArgs) -> anyhow::Result<()> {
    let ui = ctx.ui_context();
    let text = read_text(args.input.text.as_deref(), TrailingNewline::Strip)?;
    let result = format_text(&text, &FormattingOptions::from(args));

    if ui.mode.is_json() {
        return print_json(&result);
    }
    if ui.mode.is_pretty() {
        if result.changes_made.is_empty() {
            eprintln!("{}", badge(&ui, Badge::Warn, "No formatting options selected"));
        }
        for change in &result.changes_made {
            eprintln!("{}", badge(&ui, Badge::Ok, change));
        }
    }
    println!("{}", result.formatted_text);
    Ok(())
}
