pub mod buffer_report;
pub mod cart_runner;
pub mod engine;
pub mod receipt;
