use clap::{Args, Subcommand};
use std::fs;
use std::io::Write;
use std::path::PathBuf;

use super::OutputFormat;
use crate::config::Config;

#[derive(Args)]
pub struct ConfigCommand {
    #[command(subcommand)]
    pub command: ConfigSubcommand,
}

#[derive(Subcommand)]
pub enum ConfigSubcommand {
    /// Show current configuration values
    Show {
        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Initialize configuration file
    Init,
}

const DEFAULT_CONFIG: &str = r#"# caltrack configuration

# Directory holding tracker.automerge (default: platform data dir + caltrack)
# data_dir: ~/.local/share/caltrack

# Daily calorie limit used until one is set with `caltrack limit set`
default_limit: 2000
"#;

impl ConfigCommand {
    pub fn run(
        &self,
        config: &Config,
        cli_config_path: Option<PathBuf>,
    ) -> Result<(), Box<dyn std::error::Error>> {
        match &self.command {
            ConfigSubcommand::Show { format } => {
                match format {
                    OutputFormat::Json => {
                        println!("{}", serde_json::to_string_pretty(config)?);
                    }
                    OutputFormat::Text => {
                        println!("Configuration");
                        println!("=============\n");

                        if let Some(path) = &config.config_file {
                            println!("Config file: {}", path.display());
                        } else {
                            println!(
                                "Config file: {} (not found)",
                                Config::default_config_path().display()
                            );
                        }
                        println!();

                        println!("data_dir: {}", config.data_dir.value.display());
                        println!("  source: {}", config.data_dir.source);
                        println!();

                        println!("default_limit: {}", config.default_limit.value);
                        println!("  source: {}", config.default_limit.source);
                    }
                }
                Ok(())
            }

            ConfigSubcommand::Init => {
                let config_path = cli_config_path.unwrap_or_else(Config::default_config_path);

                if config_path.exists() {
                    println!("Config file already exists: {}", config_path.display());
                    println!("Use 'caltrack config show' to view current configuration.");
                    return Ok(());
                }

                if let Some(parent) = config_path.parent() {
                    fs::create_dir_all(parent)?;
                }

                let mut file = fs::File::create(&config_path)?;
                file.write_all(DEFAULT_CONFIG.as_bytes())?;

                println!("Created config file: {}", config_path.display());
                println!("\nEdit this file to customize your settings.");
                Ok(())
            }
        }
    }
}
