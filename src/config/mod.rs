pub mod cli;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_optional_path, validate_path, Validate};
use clap::Parser;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Parser)]
#[command(name = "project-index")]
#[command(about = "build an HTML index on STDOUT")]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct CliConfig {
    #[arg(
        value_name = "PROJECTS",
        allow_hyphen_values = true,
        help = "JSON file holding a list of projects"
    )]
    pub projects: PathBuf,

    #[arg(
        value_name = "TEMPLATE",
        allow_hyphen_values = true,
        help = "Page template with one %s placeholder"
    )]
    pub template: PathBuf,

    #[arg(short, long, value_name = "FILE", help = "Write the page to FILE instead of stdout")]
    pub output: Option<PathBuf>,

    #[arg(long, help = "Order entries by title instead of file order")]
    pub sort_by_title: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn projects_path(&self) -> &Path {
        &self.projects
    }

    fn template_path(&self) -> &Path {
        &self.template
    }

    fn sort_by_title(&self) -> bool {
        self.sort_by_title
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("PROJECTS", &self.projects)?;
        validate_path("TEMPLATE", &self.template)?;
        validate_optional_path("--output", self.output.as_deref())?;
        Ok(())
    }
}
