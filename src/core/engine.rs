use crate::core::render::render_document;
use crate::core::{ConfigProvider, ProjectList, Result, Storage};
use crate::utils::error::IndexError;

/// Runs one invocation: project list, then template, then render, then a
/// single write of the finished document.
pub struct IndexEngine<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> IndexEngine<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    pub fn load_projects(&self) -> Result<ProjectList> {
        let path = self.config.projects_path();
        tracing::debug!("📥 Reading projects from {}", path.display());

        let text = self.storage.read_text(path)?;
        let value: serde_json::Value =
            serde_json::from_str(&text).map_err(|source| IndexError::MalformedJsonError {
                path: path.to_path_buf(),
                source,
            })?;

        let mut projects = ProjectList::from_value(value)?;
        if self.config.sort_by_title() {
            projects.sort_by_title();
        }

        tracing::debug!("Loaded {} projects", projects.len());
        Ok(projects)
    }

    pub fn load_template(&self) -> Result<String> {
        let path = self.config.template_path();
        tracing::debug!("📥 Reading template from {}", path.display());
        self.storage.read_text(path)
    }

    /// Everything up to, but not including, the write.
    pub fn build(&self) -> Result<String> {
        let projects = self.load_projects()?;
        let template = self.load_template()?;

        let document = render_document(&projects, &template)?;
        tracing::debug!(
            "Rendered {} entries into {} bytes",
            projects.len(),
            document.len()
        );
        Ok(document)
    }

    pub fn run(&self) -> Result<usize> {
        let document = self.build()?;
        self.storage.write_document(&document)?;
        Ok(document.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::ErrorCategory;
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::path::{Path, PathBuf};

    #[derive(Default)]
    struct MemoryStorage {
        files: HashMap<PathBuf, String>,
        reads: RefCell<Vec<PathBuf>>,
        written: RefCell<Vec<String>>,
    }

    impl MemoryStorage {
        fn with(files: &[(&str, &str)]) -> Self {
            Self {
                files: files
                    .iter()
                    .map(|(path, text)| (PathBuf::from(path), text.to_string()))
                    .collect(),
                ..Default::default()
            }
        }
    }

    impl Storage for &MemoryStorage {
        fn read_text(&self, path: &Path) -> Result<String> {
            self.reads.borrow_mut().push(path.to_path_buf());
            self.files
                .get(path)
                .cloned()
                .ok_or_else(|| IndexError::FileAccessError {
                    path: path.to_path_buf(),
                    source: std::io::Error::new(
                        std::io::ErrorKind::NotFound,
                        "No such file or directory",
                    ),
                })
        }

        fn write_document(&self, document: &str) -> Result<()> {
            self.written.borrow_mut().push(document.to_string());
            Ok(())
        }
    }

    struct TestConfig {
        sort: bool,
    }

    impl ConfigProvider for TestConfig {
        fn projects_path(&self) -> &Path {
            Path::new("projects.json")
        }

        fn template_path(&self) -> &Path {
            Path::new("template.html")
        }

        fn sort_by_title(&self) -> bool {
            self.sort
        }
    }

    #[test]
    fn test_run_writes_document_once() {
        let storage = MemoryStorage::with(&[
            ("projects.json", r#"[{"title": "Foo"}]"#),
            ("template.html", "<html>%s</html>"),
        ]);
        let engine = IndexEngine::new(&storage, TestConfig { sort: false });

        let written = engine.run().unwrap();

        let documents = storage.written.borrow();
        assert_eq!(documents.len(), 1);
        assert_eq!(documents[0].len(), written);
        assert!(documents[0].starts_with("<html>\t\t<div class = \"index\">\n"));
        assert!(documents[0].contains("<span class = \"title\">Foo</span>"));
        assert!(documents[0].ends_with("\t\t</div></html>"));
    }

    #[test]
    fn test_schema_error_stops_before_template() {
        let storage = MemoryStorage::with(&[("projects.json", r#"{"a": 1}"#)]);
        let engine = IndexEngine::new(&storage, TestConfig { sort: false });

        let err = engine.run().unwrap_err();

        assert_eq!(err.category(), ErrorCategory::Schema);
        assert_eq!(*storage.reads.borrow(), vec![PathBuf::from("projects.json")]);
        assert!(storage.written.borrow().is_empty());
    }

    #[test]
    fn test_malformed_json_is_critical() {
        let storage = MemoryStorage::with(&[
            ("projects.json", "[{\"title\": "),
            ("template.html", "%s"),
        ]);
        let engine = IndexEngine::new(&storage, TestConfig { sort: false });

        let err = engine.run().unwrap_err();

        assert!(matches!(err, IndexError::MalformedJsonError { .. }));
        assert_eq!(err.exit_code(), 2);
        assert!(storage.written.borrow().is_empty());
    }

    #[test]
    fn test_missing_template_writes_nothing() {
        let storage = MemoryStorage::with(&[("projects.json", "[]")]);
        let engine = IndexEngine::new(&storage, TestConfig { sort: false });

        let err = engine.run().unwrap_err();

        assert_eq!(err.category(), ErrorCategory::Input);
        assert_eq!(err.exit_code(), 1);
        assert!(storage.written.borrow().is_empty());
    }

    #[test]
    fn test_template_error_writes_nothing() {
        let storage = MemoryStorage::with(&[
            ("projects.json", "[]"),
            ("template.html", "<html></html>"),
        ]);
        let engine = IndexEngine::new(&storage, TestConfig { sort: false });

        let err = engine.run().unwrap_err();

        assert_eq!(err.category(), ErrorCategory::Template);
        assert!(storage.written.borrow().is_empty());
    }

    #[test]
    fn test_sort_by_title() {
        let storage = MemoryStorage::with(&[
            (
                "projects.json",
                r#"[{"title": "zebra"}, {"title": "apple"}, {"title": "mango"}]"#,
            ),
            ("template.html", "%s"),
        ]);

        let unsorted = IndexEngine::new(&storage, TestConfig { sort: false })
            .build()
            .unwrap();
        let sorted = IndexEngine::new(&storage, TestConfig { sort: true })
            .build()
            .unwrap();

        assert!(unsorted.find("zebra").unwrap() < unsorted.find("apple").unwrap());
        let positions: Vec<_> = ["apple", "mango", "zebra"]
            .iter()
            .map(|title| sorted.find(title).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }
}
