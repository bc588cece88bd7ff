//! Minimal user defaults store backed by a property list dictionary.

use anyhow::{Context, Result};
use plist::{Dictionary, Value};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Key of the "show background processes" preference.
pub const SHOW_ALL_KEY: &str = "showAll";

pub struct Defaults {
    path: PathBuf,
    values: Dictionary,
}

impl Defaults {
    /// Load the store; a missing or unreadable file yields an empty dictionary.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let values = match read_dictionary(&path) {
            Ok(values) => values,
            Err(e) => {
                if path.exists() {
                    tracing::warn!("Ignoring unreadable defaults {:?}: {:?}", path, e);
                }
                Dictionary::new()
            }
        };
        Self { path, values }
    }

    pub fn bool(&self, key: &str) -> Option<bool> {
        self.values.get(key).and_then(Value::as_boolean)
    }

    pub fn bool_or(&self, key: &str, default: bool) -> bool {
        self.bool(key).unwrap_or(default)
    }

    /// Store the value and write the whole dictionary back.
    pub fn set_bool(&mut self, key: &str, value: bool) -> Result<()> {
        self.values.insert(key.to_string(), Value::Boolean(value));
        self.save()
    }

    pub fn show_all(&self) -> bool {
        self.bool_or(SHOW_ALL_KEY, false)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {:?}", parent))?;
        }
        Value::Dictionary(self.values.clone())
            .to_file_binary(&self.path)
            .with_context(|| format!("Failed to write defaults {:?}", self.path))
    }
}

fn read_dictionary(path: &Path) -> Result<Dictionary> {
    let v = Value::from_file(path).context("Read plist")?;
    v.into_dictionary()
        .ok_or_else(|| anyhow::anyhow!("Defaults root is not a dictionary: {:?}", path))
}
