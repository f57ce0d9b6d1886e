//! Command handlers - kept out of main.rs for testability

pub mod generate;

pub use generate::{execute_generate, validate_base_dir};
