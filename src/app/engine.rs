use crate::app::buffer_report::{self, BufferReport};
use crate::app::cart_runner::{self, CartReport};
use crate::config::ScenarioConfig;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioOutput {
    pub cart: Option<CartReport>,
    pub buffer: Option<BufferReport>,
}

impl ScenarioOutput {
    pub fn render(&self, json: bool) -> Result<String> {
        if json {
            return Ok(serde_json::to_string_pretty(self)?);
        }

        let mut sections = Vec::new();
        if let Some(cart) = &self.cart {
            sections.push(cart.receipt());
        }
        if let Some(buffer) = &self.buffer {
            sections.push(buffer.summary());
        }
        Ok(sections.join("\n\n"))
    }
}

pub struct ScenarioEngine<C: ConfigProvider> {
    config: C,
}

impl<C: ConfigProvider> ScenarioEngine<C> {
    pub fn new(config: C) -> Self {
        Self { config }
    }

    pub fn load_scenario(&self) -> Result<ScenarioConfig> {
        let scenario = match self.config.config_path() {
            Some(path) => {
                tracing::info!("📄 Loading scenario from {}", path);
                ScenarioConfig::from_file(path)?
            }
            None => {
                tracing::info!("Using built-in scenario");
                ScenarioConfig::default()
            }
        };
        scenario.validate()?;
        Ok(scenario)
    }

    pub fn run(&self) -> Result<ScenarioOutput> {
        let scenario = self.load_scenario()?;

        let cart = scenario
            .cart
            .as_ref()
            .map(|cart| cart_runner::run(cart, self.config.removals()));

        let buffer = match &scenario.buffer {
            Some(buffer) => Some(buffer_report::run(buffer)?),
            None => None,
        };

        Ok(ScenarioOutput { cart, buffer })
    }

    pub fn run_and_render(&self) -> Result<String> {
        self.run()?.render(self.config.json_output())
    }
}
