use clap::Subcommand;

/// Configuration management commands.
#[derive(Subcommand, Clone, PartialEq, Eq)]
pub enum ConfigCommands {
    /// Print JSON Schema for the configuration file
    Schema,

    /// Print the effective configuration as YAML
    Show,
}

impl ConfigCommands {
    pub fn run(&self) -> anyhow::Result<()> {
        match self {
            Self::Schema => {
                let schema = crate::shared::config::generate_schema();
                let json = serde_json::to_string_pretty(&schema)?;
                println!("{json}");
            }
            Self::Show => {
                let config = crate::shared::config::load_config()?;
                print!("{}", serde_yaml::to_string(&config)?);
            }
        }
        Ok(())
    }
}
