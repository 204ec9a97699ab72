use crate::utils::error::{IndexError, Result};
use serde::Deserialize;
use serde_json::Value;
use std::borrow::Cow;
use std::collections::HashMap;

pub const REPOSITORY: &str = "repository";
pub const TITLE: &str = "title";
pub const DESCRIPTION: &str = "description";
pub const LOGO: &str = "logo";

/// One entry of the index. Keys other than the four rendered ones are kept
/// but never looked at.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct ProjectRecord {
    pub data: HashMap<String, Value>,
}

impl ProjectRecord {
    pub fn new(data: HashMap<String, Value>) -> Self {
        Self { data }
    }

    /// Text for `key`. Absent keys and `null` give an empty string, strings
    /// are returned as-is, anything else as compact JSON. Python-style
    /// `None`/`True` spellings are deliberately not reproduced.
    pub fn field(&self, key: &str) -> Cow<'_, str> {
        match self.data.get(key) {
            None | Some(Value::Null) => Cow::Borrowed(""),
            Some(Value::String(text)) => Cow::Borrowed(text.as_str()),
            Some(other) => Cow::Owned(other.to_string()),
        }
    }

    pub fn repository(&self) -> Cow<'_, str> {
        self.field(REPOSITORY)
    }

    pub fn title(&self) -> Cow<'_, str> {
        self.field(TITLE)
    }

    pub fn description(&self) -> Cow<'_, str> {
        self.field(DESCRIPTION)
    }

    pub fn logo(&self) -> Cow<'_, str> {
        self.field(LOGO)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for ProjectRecord {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::new(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectList {
    pub projects: Vec<ProjectRecord>,
}

impl ProjectList {
    pub fn new(projects: Vec<ProjectRecord>) -> Self {
        Self { projects }
    }

    /// Checks the shape of an already parsed document: the root must be an
    /// array and every element an object.
    pub fn from_value(value: Value) -> Result<Self> {
        let items = match value {
            Value::Array(items) => items,
            _ => return Err(IndexError::schema("Expected a list of projects.")),
        };

        let projects = items
            .into_iter()
            .enumerate()
            .map(|(index, item)| {
                if !item.is_object() {
                    return Err(IndexError::schema(format!(
                        "Expected project {} to be an object.",
                        index
                    )));
                }
                serde_json::from_value::<ProjectRecord>(item).map_err(|e| {
                    IndexError::schema(format!("Invalid project {}: {}", index, e))
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { projects })
    }

    /// Stable sort on the title text, missing titles first.
    pub fn sort_by_title(&mut self) {
        self.projects.sort_by(|a, b| a.title().cmp(&b.title()));
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ProjectRecord> {
        self.projects.iter()
    }
}

impl<'a> IntoIterator for &'a ProjectList {
    type Item = &'a ProjectRecord;
    type IntoIter = std::slice::Iter<'a, ProjectRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.projects.iter()
    }
}
