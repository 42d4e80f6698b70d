//! Template catalog loading.
//!
//! The builtin catalog is embedded at compile time; a user-supplied YAML
//! file can replace it wholesale so the shipped schedule content stays a
//! detail, not a dependency.

use std::collections::HashMap;
use std::path::Path;

use include_dir::{include_dir, Dir};
use serde::{Deserialize, Serialize};

use crate::error::{GauntletError, Result};

/// Embedded catalog assets.
static CATALOG_DIR: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/catalog");

/// One reference exercise row: a name plus a combined prescription text
/// (`"4 x 8"`, `"3 x 45 sec"`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateExercise {
    pub name: String,
    #[serde(default)]
    pub sets_reps: String,
}

/// The reference plan for one weekday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayTemplate {
    /// Training focus label ("Push", "Rest & recovery", ...).
    pub focus: String,
    #[serde(default)]
    pub exercises: Vec<TemplateExercise>,
}

/// Static weekly schedule keyed by weekday name, plus a motivational pool.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TemplateCatalog {
    #[serde(default)]
    pub days: HashMap<String, DayTemplate>,
    #[serde(default)]
    pub motivation: Vec<String>,
}

impl TemplateCatalog {
    /// Load the builtin catalog embedded in the binary.
    pub fn builtin() -> Result<Self> {
        let schedule = embedded_file("schedule.yml")?;
        let motivation = embedded_file("motivation.yml")?;

        let mut catalog: TemplateCatalog =
            serde_yaml::from_str(schedule).map_err(|e| GauntletError::CatalogParse {
                path: "catalog/schedule.yml".into(),
                message: e.to_string(),
            })?;

        let pool: MotivationFile =
            serde_yaml::from_str(motivation).map_err(|e| GauntletError::CatalogParse {
                path: "catalog/motivation.yml".into(),
                message: e.to_string(),
            })?;

        catalog.motivation = pool.lines;
        Ok(catalog)
    }

    /// Load a catalog from a user-supplied YAML file.
    ///
    /// The file carries the same shape as the builtin assets merged into one
    /// document: a `days` map and an optional `motivation` list.
    pub fn from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(GauntletError::CatalogNotFound {
                path: path.to_path_buf(),
            });
        }

        let content = std::fs::read_to_string(path)?;
        serde_yaml::from_str(&content).map_err(|e| GauntletError::CatalogParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// The reference plan for a weekday name, if the catalog has one.
    pub fn for_weekday(&self, weekday: &str) -> Option<&DayTemplate> {
        self.days.get(weekday)
    }

    /// A random line from the motivational pool.
    pub fn random_motivation(&self) -> Option<&str> {
        if self.motivation.is_empty() {
            return None;
        }

        let mut buf = [0u8; 4];
        getrandom::getrandom(&mut buf).expect("Failed to generate random bytes");
        let pick = u32::from_le_bytes(buf) as usize % self.motivation.len();
        Some(&self.motivation[pick])
    }
}

#[derive(Debug, Deserialize)]
struct MotivationFile {
    #[serde(default)]
    lines: Vec<String>,
}

fn embedded_file(name: &str) -> Result<&'static str> {
    let file = CATALOG_DIR
        .get_file(name)
        .ok_or_else(|| GauntletError::CatalogNotFound {
            path: format!("catalog/{}", name).into(),
        })?;

    file.contents_utf8().ok_or_else(|| GauntletError::CatalogParse {
        path: format!("catalog/{}", name).into(),
        message: "Invalid UTF-8".to_string(),
    })
}
