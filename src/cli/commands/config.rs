use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use std::path::Path;
use std::process::Command;

/// `$EDITOR`, then `$VISUAL`, then the platform default.
fn default_editor() -> String {
    std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| {
            if cfg!(target_os = "windows") {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        })
}

/// Open `path` with the requested editor, falling back to the default one.
fn edit(path: &Path, requested: Option<&str>) -> AppResult<()> {
    let fallback = default_editor();
    let mut candidates = vec![requested.map(str::to_string).unwrap_or_else(|| fallback.clone())];
    if !candidates.contains(&fallback) {
        candidates.push(fallback);
    }

    for editor in &candidates {
        match Command::new(editor).arg(path).status() {
            Ok(s) if s.success() => {
                success(format!("Configuration file edited with '{editor}'"));
                return Ok(());
            }
            _ => warning(format!("Editor '{editor}' failed or is not available")),
        }
    }

    Err(AppError::Config(format!(
        "could not open {} with {}",
        path.display(),
        candidates.join(" or ")
    )))
}

/// Handle the `config` subcommand
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        edit_config,
        editor,
    } = &cli.command
    {
        let path = cli.config.clone().unwrap_or_else(Config::config_file);

        if *print_config {
            println!("# {}", path.display());
            print!("{}", cfg.to_yaml()?);
        }

        if *edit_config {
            if !path.exists() {
                Config::init(&path, false)?;
            }
            edit(&path, editor.as_deref())?;
        }
    }

    Ok(())
}
