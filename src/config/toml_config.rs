use crate::domain::model::Entry;
use crate::utils::error::{KitError, Result};
use crate::utils::validation::{self, Validate};
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const MAX_DEMO_CAPACITY: usize = 1 << 20;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioConfig {
    pub cart: Option<CartConfig>,
    pub buffer: Option<BufferConfig>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartConfig {
    #[serde(default = "default_cart_name")]
    pub name: String,
    #[serde(default)]
    pub entries: Vec<Entry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BufferConfig {
    pub capacity: usize,
    #[serde(default)]
    pub values: Vec<i32>,
}

fn default_cart_name() -> String {
    "Shopping Cart".to_string()
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            cart: Some(CartConfig {
                name: default_cart_name(),
                entries: vec![
                    Entry::new("Apple", 1.50),
                    Entry::new("Banana", 0.75),
                    Entry::new("Orange", 1.25),
                ],
            }),
            buffer: Some(BufferConfig {
                capacity: 3,
                values: vec![10, 20, 30],
            }),
        }
    }
}

impl ScenarioConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(KitError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| KitError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${CART_NAME})，未設定的變數視為錯誤
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| KitError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let mut missing = Vec::new();
        let result = re.replace_all(content, |caps: &Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| {
                missing.push(var_name.to_string());
                String::new()
            })
        });

        if !missing.is_empty() {
            return Err(KitError::ConfigError {
                message: format!("Unset environment variables: {}", missing.join(", ")),
            });
        }

        Ok(result.into_owned())
    }
}

impl Validate for ScenarioConfig {
    fn validate(&self) -> Result<()> {
        if let Some(cart) = &self.cart {
            validation::validate_non_empty_string("cart.name", &cart.name)?;
            for (i, entry) in cart.entries.iter().enumerate() {
                validation::validate_non_empty_string(
                    &format!("cart.entries[{}].label", i),
                    &entry.label,
                )?;
                validation::validate_finite(&format!("cart.entries[{}].amount", i), entry.amount)?;
            }
        }

        if let Some(buffer) = &self.buffer {
            validation::validate_range("buffer.capacity", buffer.capacity, 1, MAX_DEMO_CAPACITY)?;
            validation::validate_max_len("buffer.values", buffer.values.len(), buffer.capacity)?;
        }

        Ok(())
    }
}
