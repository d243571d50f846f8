//! Configuration management commands for CLI.

use clap::Subcommand;
use urgenda_core::Config;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print the active configuration
    Show,
    /// Update configuration values
    Set {
        /// Recompute period in seconds for the watch loop
        #[arg(long)]
        recompute_secs: Option<u64>,
    },
}

pub fn run(action: ConfigAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Show => {
            let config = Config::load()?;
            print!("{}", toml::to_string_pretty(&config)?);
        }
        ConfigAction::Set { recompute_secs } => {
            let mut config = Config::load()?;
            if let Some(secs) = recompute_secs {
                if secs == 0 {
                    return Err("recompute period must be at least 1 second".into());
                }
                config.recompute_secs = secs;
            }
            config.save()?;
            println!("Configuration updated");
        }
    }
    Ok(())
}
