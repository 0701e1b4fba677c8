//! `config init` and `config show`.

use crate::app::AppContext;
use crate::config::{write_config, NotepadConfig};
use crate::errors::CliError;
use crate::ui::{badge, header, kv, print, print_json, Badge};

pub fn handle_init(ctx: &AppContext, force: bool) -> anyhow::Result<()> {
    let location = ctx.config_location()?;
    if location.path.exists() && !force {
        return Err(CliError::invalid_input(format!(
            "Config already exists at {}\nHint: Use `notepad config init --force` to overwrite it.",
            location.path.display()
        ))
        .into());
    }

    write_config(&location.path, &NotepadConfig::initial())?;

    let ui = ctx.ui_context();
    let path = location.path.display().to_string();
    if ui.mode.is_json() {
        return print_json(&serde_json::json!({ "path": path, "created": true }));
    }
    print(&ui, &badge(&ui, Badge::Ok, "Config written"));
    print(&ui, &kv(&ui, "Path", &path));
    Ok(())
}

pub fn handle_show(ctx: &AppContext) -> anyhow::Result<()> {
    let ui = ctx.ui_context();
    let location = ctx.config_location()?;
    let config = ctx.config()?;

    if ui.mode.is_json() {
        return print_json(config);
    }

    let path = location.path.display().to_string();
    if ui.mode.is_pretty() {
        let source = if location.path.exists() { "file" } else { "defaults" };
        print(&ui, &header(&ui, "config", Some(source)));
    }
    print(&ui, &kv(&ui, "Path", &path));
    let contents =
        toml::to_string_pretty(config).map_err(|e| anyhow::anyhow!("TOML error: {}", e))?;
    print(&ui, contents.trim_end());
    Ok(())
}
