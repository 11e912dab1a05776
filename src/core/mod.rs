pub mod accumulator;
pub mod counter;
pub mod file;
pub mod resource;

pub use crate::domain::model::Entry;
pub use crate::domain::ports::{ConfigProvider, Release};
pub use crate::utils::error::Result;
