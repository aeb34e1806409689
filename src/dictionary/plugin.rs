//! Field dictionary loaded from a local plugin directory
//!
//! A plugin directory holds:
//! - `manifest.json` (optional): `plugin_id`, `name`, `version`, `description`
//! - `fields.json`: field definitions keyed by raw key, optionally wrapped in `{"fields": {...}}`
//! - `categories.json` (optional): `{"categories": {...}, "category_priority": [...]}`
//!
//! Plugin fields are flat: the lookup context is ignored.

use super::{fallback_metadata, DictionaryListing, DictionarySection, FieldMetadataLookup};
use crate::errors::{AppError, AppResult};
use crate::types::{CategoryDescriptor, ContextTag, FieldMetadata};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

const MANIFEST_FILE: &str = "manifest.json";
const FIELDS_FILE: &str = "fields.json";
const CATEGORIES_FILE: &str = "categories.json";

/// Plugin identity from `manifest.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PluginManifest {
    pub plugin_id: String,
    pub name: String,
    pub version: String,
    pub description: String,
}

#[derive(Debug, Default, Deserialize)]
struct RawManifest {
    plugin_id: Option<String>,
    name: Option<String>,
    version: Option<String>,
    description: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawFieldDefinition {
    full_name: Option<String>,
    #[serde(default = "default_category")]
    category: String,
    #[serde(default)]
    description: String,
    #[serde(default = "default_relevance")]
    ml_relevance: String,
}

#[derive(Debug, Deserialize)]
struct RawCategory {
    #[serde(default = "default_icon")]
    icon: String,
    #[serde(default = "default_color")]
    color: String,
    #[serde(default)]
    description: String,
}

#[derive(Debug, Default, Deserialize)]
struct RawCategories {
    #[serde(default)]
    categories: BTreeMap<String, RawCategory>,
    #[serde(default)]
    category_priority: Vec<String>,
}

fn default_category() -> String {
    super::UNKNOWN_CATEGORY.to_string()
}

fn default_relevance() -> String {
    "low".to_string()
}

fn default_icon() -> String {
    "📁".to_string()
}

fn default_color() -> String {
    "#8B5CF6".to_string()
}

/// Dictionary backed by plugin definition files
#[derive(Debug, Clone)]
pub struct PluginDictionary {
    manifest: PluginManifest,
    fields: BTreeMap<String, FieldMetadata>,
    categories: BTreeMap<String, CategoryDescriptor>,
    category_priority: Vec<String>,
}

impl PluginDictionary {
    /// Load plugin definitions from `dir`
    ///
    /// `fields.json` is required; the manifest and categories are optional.
    pub fn load(dir: &Path) -> AppResult<Self> {
        let dir_name = dir
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| dir.display().to_string());

        if !dir.is_dir() {
            return Err(AppError::Plugin {
                plugin: dir_name,
                reason: format!("{} is not a directory", dir.display()),
            });
        }

        let raw_manifest: RawManifest = match read_optional_json(dir, MANIFEST_FILE, &dir_name)? {
            Some(value) => parse_section(value, MANIFEST_FILE, &dir_name)?,
            None => RawManifest::default(),
        };
        let manifest = PluginManifest {
            plugin_id: raw_manifest.plugin_id.unwrap_or_else(|| dir_name.clone()),
            name: raw_manifest.name.unwrap_or_else(|| dir_name.clone()),
            version: raw_manifest.version.unwrap_or_else(|| "0.0.0".to_string()),
            description: raw_manifest.description.unwrap_or_default(),
        };

        let fields_value = read_optional_json(dir, FIELDS_FILE, &dir_name)?.ok_or_else(|| {
            AppError::Plugin {
                plugin: dir_name.clone(),
                reason: format!("missing {}", FIELDS_FILE),
            }
        })?;
        let fields = parse_fields(fields_value, &dir_name)?;

        let raw_categories: RawCategories =
            match read_optional_json(dir, CATEGORIES_FILE, &dir_name)? {
                Some(value) => parse_section(value, CATEGORIES_FILE, &dir_name)?,
                None => RawCategories::default(),
            };
        let categories = raw_categories
            .categories
            .into_iter()
            .map(|(name, raw)| {
                (
                    name,
                    CategoryDescriptor {
                        icon: raw.icon,
                        description: raw.description,
                        color: raw.color,
                    },
                )
            })
            .collect::<BTreeMap<_, _>>();

        info!(
            "Loaded plugin {} v{}: {} fields, {} categories",
            manifest.plugin_id,
            manifest.version,
            fields.len(),
            categories.len()
        );

        Ok(Self {
            manifest,
            fields,
            categories,
            category_priority: raw_categories.category_priority,
        })
    }

    pub fn manifest(&self) -> &PluginManifest {
        &self.manifest
    }

    /// Category names in the plugin's preferred display order
    pub fn category_priority(&self) -> &[String] {
        &self.category_priority
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl FieldMetadataLookup for PluginDictionary {
    fn lookup(&self, key: &str, _context: Option<ContextTag>) -> FieldMetadata {
        self.fields
            .get(key)
            .cloned()
            .unwrap_or_else(|| fallback_metadata(key))
    }

    fn category_info(&self, category: &str) -> Option<CategoryDescriptor> {
        self.categories.get(category).cloned()
    }

    fn listing(&self) -> DictionaryListing {
        DictionaryListing {
            source: format!("plugin:{}", self.manifest.plugin_id),
            sections: vec![DictionarySection {
                name: self.manifest.name.clone(),
                fields: self.fields.clone(),
            }],
            categories: self.categories.clone(),
        }
    }
}

fn read_optional_json(dir: &Path, file: &str, plugin: &str) -> AppResult<Option<Value>> {
    let path = dir.join(file);
    if !path.exists() {
        debug!("Plugin {} has no {}", plugin, file);
        return Ok(None);
    }
    let content = fs::read_to_string(&path)?;
    serde_json::from_str(&content)
        .map(Some)
        .map_err(|e| AppError::Plugin {
            plugin: plugin.to_string(),
            reason: format!("{}: {}", file, e),
        })
}

fn parse_section<T: serde::de::DeserializeOwned>(
    value: Value,
    file: &str,
    plugin: &str,
) -> AppResult<T> {
    serde_json::from_value(value).map_err(|e| AppError::Plugin {
        plugin: plugin.to_string(),
        reason: format!("{}: {}", file, e),
    })
}

fn parse_fields(value: Value, plugin: &str) -> AppResult<BTreeMap<String, FieldMetadata>> {
    let raw = match value {
        Value::Object(mut map) => match map.remove("fields") {
            Some(Value::Object(inner)) => inner,
            Some(_) => {
                return Err(AppError::Plugin {
                    plugin: plugin.to_string(),
                    reason: format!("{}: \"fields\" must be an object", FIELDS_FILE),
                })
            }
            None => map,
        },
        _ => {
            return Err(AppError::Plugin {
                plugin: plugin.to_string(),
                reason: format!("{}: expected a JSON object", FIELDS_FILE),
            })
        }
    };

    let mut fields = BTreeMap::new();
    for (key, definition) in raw {
        // Underscore keys carry file metadata, not fields
        if key.starts_with('_') {
            continue;
        }
        let def: RawFieldDefinition =
            parse_section(definition, &format!("{} ({})", FIELDS_FILE, key), plugin)?;
        fields.insert(
            key.clone(),
            FieldMetadata {
                name: def.full_name.unwrap_or_else(|| key.clone()),
                description: def.description,
                category: def.category,
                ml_relevance: def.ml_relevance,
            },
        );
    }
    Ok(fields)
}
