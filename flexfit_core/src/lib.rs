#![forbid(unsafe_code)]

//! Core domain model and plan generation for FlexFit.
//!
//! This crate provides:
//! - Domain types (muscle groups, exercises, scheduler input, plans)
//! - Exercise catalog management
//! - The plan generation pipeline (split, assignment, selection, naming)
//! - Configuration, logging and plan export

pub mod types;
pub mod error;
pub mod catalog;
pub mod config;
pub mod logging;
pub mod input;
pub mod split;
pub mod assign;
pub mod selector;
pub mod naming;
pub mod engine;
pub mod export;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use catalog::{build_default_catalog, default_catalog, load_catalog};
pub use config::Config;
pub use engine::{generate_plan, generate_plan_with_rng};
pub use export::{load_plan, save_plan, save_plan_in};
