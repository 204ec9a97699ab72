pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{cli::LocalStorage, CliConfig};
pub use crate::core::{engine::IndexEngine, render, template::Template};
pub use domain::model::{ProjectList, ProjectRecord};
pub use utils::error::{IndexError, Result};
