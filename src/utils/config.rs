use crate::csv_processor::tokenizer::split;
use crate::utils::errors::{CsvTableError, Result};
use serde::{Deserialize, Serialize};

pub const DEFAULT_DELIMITER: &str = ",";

/// Where a handle's field-name list comes from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldNames {
    /// Already split into names; may be empty.
    List(Vec<String>),
    /// One line of names joined by the handle's delimiter.
    Joined(String),
}

impl Default for FieldNames {
    fn default() -> Self {
        FieldNames::List(Vec::new())
    }
}

impl FieldNames {
    pub fn resolve(&self, delimiter: &str) -> Vec<String> {
        match self {
            FieldNames::List(names) => names.clone(),
            FieldNames::Joined(line) => split(line, delimiter),
        }
    }
}

impl From<Vec<String>> for FieldNames {
    fn from(names: Vec<String>) -> Self {
        FieldNames::List(names)
    }
}

impl From<Vec<&str>> for FieldNames {
    fn from(names: Vec<&str>) -> Self {
        FieldNames::List(names.into_iter().map(String::from).collect())
    }
}

impl From<&[&str]> for FieldNames {
    fn from(names: &[&str]) -> Self {
        FieldNames::List(names.iter().map(|s| s.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for FieldNames {
    fn from(names: [&str; N]) -> Self {
        FieldNames::List(names.iter().map(|s| s.to_string()).collect())
    }
}

impl From<&str> for FieldNames {
    fn from(line: &str) -> Self {
        FieldNames::Joined(line.to_string())
    }
}

impl From<String> for FieldNames {
    fn from(line: String) -> Self {
        FieldNames::Joined(line)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableOptions {
    pub delimiter: String,
    pub fieldnames: FieldNames,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER.to_string(),
            fieldnames: FieldNames::default(),
        }
    }
}

impl TableOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    pub fn fieldnames(mut self, fieldnames: impl Into<FieldNames>) -> Self {
        self.fieldnames = fieldnames.into();
        self
    }

    pub fn load_from_file(path: &str) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).map_err(|e| CsvTableError::ConfigError(e.to_string()))?;
        toml::from_str(&content).map_err(|e| CsvTableError::ConfigError(e.to_string()))
    }

    pub fn load_or_default(path: Option<&str>) -> Self {
        if let Some(p) = path {
            Self::load_from_file(p).unwrap_or_default()
        } else {
            Self::default()
        }
    }
}
