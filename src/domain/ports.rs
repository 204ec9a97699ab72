use crate::utils::error::Result;
use std::path::Path;

/// Where inputs come from and where the finished document goes.
pub trait Storage {
    fn read_text(&self, path: &Path) -> Result<String>;

    /// Called once per run, with the complete document.
    fn write_document(&self, document: &str) -> Result<()>;
}

pub trait ConfigProvider {
    fn projects_path(&self) -> &Path;
    fn template_path(&self) -> &Path;
    fn sort_by_title(&self) -> bool;
}
