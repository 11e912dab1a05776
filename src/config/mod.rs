pub mod toml_config;

pub use toml_config::{BufferConfig, CartConfig, ScenarioConfig};

#[cfg(feature = "cli")]
use crate::core::ConfigProvider;
#[cfg(feature = "cli")]
use crate::utils::{error::Result, validation};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "scoped-kit")]
#[command(about = "Run scoped-buffer and fluent-cart scenarios")]
pub struct CliConfig {
    #[arg(long, help = "Scenario TOML file (built-in scenario when omitted)")]
    pub config: Option<String>,

    #[arg(long, value_delimiter = ',', help = "Labels to remove from the cart")]
    pub remove: Vec<String>,

    #[arg(long, help = "Print the reports as JSON")]
    pub json: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn config_path(&self) -> Option<&str> {
        self.config.as_deref()
    }

    fn removals(&self) -> &[String] {
        &self.remove
    }

    fn json_output(&self) -> bool {
        self.json
    }
}

#[cfg(feature = "cli")]
impl validation::Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.config {
            validation::validate_path("config", path)?;
        }
        for label in &self.remove {
            validation::validate_non_empty_string("remove", label)?;
        }
        Ok(())
    }
}
