pub mod engine;
pub mod render;
pub mod template;

pub use crate::domain::model::{ProjectList, ProjectRecord};
pub use crate::domain::ports::{ConfigProvider, Storage};
pub use crate::utils::error::Result;
