pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use app::engine::{ScenarioEngine, ScenarioOutput};
pub use config::ScenarioConfig;
pub use core::{
    accumulator::FluentAccumulator,
    file::{FileMode, ScopedFile},
    resource::ScopedResource,
};
pub use domain::{model::Entry, ports::Release};
pub use utils::error::{KitError, Result};
