use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

pub fn handle(cli: &Cli) -> AppResult<()> {
    if let Commands::Init { force } = &cli.command {
        let path = cli.config.clone().unwrap_or_else(Config::config_file);

        if Config::init(&path, *force)? {
            success(format!("Config file: {}", path.display()));
        } else {
            info(format!(
                "Config file already exists: {} (use --force to overwrite)",
                path.display()
            ));
        }
    }
    Ok(())
}
