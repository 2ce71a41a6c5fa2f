use crate::cli::parser::Commands;
use crate::config::{Config, migrate};
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
    } = cmd
    {
        let path = Config::config_file();

        if *print_config {
            println!("📄 Current configuration ({}):\n", path.display());
            println!("{}", cfg.to_yaml()?);
        }

        if *check {
            if !path.exists() {
                warning(format!(
                    "No configuration file at {} (defaults in use). Run `coursedesk init`.",
                    path.display()
                ));
                return Ok(());
            }

            let added = migrate::check_and_fill(&path)?;
            if added.is_empty() {
                success("Configuration file is complete.");
            } else {
                info(format!("Added missing keys: {}", added.join(", ")));
            }
        }
    }

    Ok(())
}
