//! Category document store.

use std::fs;
use std::path::{Path, PathBuf};

use curio_core::config::{CategorySpec, CategoryTable};
use curio_core::errors::CorpusError;
use curio_core::question::{CategoryDocument, Question};
use serde_json::{json, Value};
use tracing::info;

/// File-backed store of per-category question documents.
///
/// All lookups go through the injected [`CategoryTable`]; the store never
/// derives filenames or prefixes on its own.
pub struct CorpusStore {
    data_dir: PathBuf,
    categories: CategoryTable,
}

impl CorpusStore {
    /// Open a store over `data_dir` with the stock category table.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self::with_table(data_dir, CategoryTable::default())
    }

    /// Open a store over `data_dir` with an operator-provided table.
    pub fn with_table(data_dir: impl Into<PathBuf>, categories: CategoryTable) -> Self {
        Self {
            data_dir: data_dir.into(),
            categories,
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn categories(&self) -> &CategoryTable {
        &self.categories
    }

    /// Resolve a category name through the table.
    pub fn spec(&self, category: &str) -> Result<&CategorySpec, CorpusError> {
        self.categories
            .get(category)
            .ok_or_else(|| CorpusError::UnknownCategory {
                name: category.to_string(),
            })
    }

    /// On-disk path of a category's document.
    pub fn path_for(&self, spec: &CategorySpec) -> PathBuf {
        self.data_dir.join(&spec.filename)
    }

    /// Whether the category's document exists on disk.
    pub fn exists(&self, category: &str) -> Result<bool, CorpusError> {
        Ok(self.path_for(self.spec(category)?).exists())
    }

    /// Load a category document as a raw JSON value.
    pub fn load_raw(&self, category: &str) -> Result<Value, CorpusError> {
        let path = self.path_for(self.spec(category)?);
        read_json(&path)
    }

    /// Load and shape-check a category document. Used by the ingestion
    /// side, which needs the header fields; the validation pipeline does
    /// its own graded parse instead.
    pub fn load_document(&self, category: &str) -> Result<CategoryDocument, CorpusError> {
        let path = self.path_for(self.spec(category)?);
        let raw = read_json(&path)?;
        document_from_value(&raw).map_err(|reason| CorpusError::MalformedDocument {
            path: path.display().to_string(),
            reason,
        })
    }

    /// All category document paths present in the data directory, sorted
    /// by filename.
    pub fn list_documents(&self) -> Result<Vec<PathBuf>, CorpusError> {
        let entries = fs::read_dir(&self.data_dir).map_err(|e| CorpusError::Io {
            path: self.data_dir.display().to_string(),
            source: e,
        })?;
        let mut paths: Vec<PathBuf> = entries
            .filter_map(|entry| {
                let path = entry.ok()?.path();
                path.extension()
                    .is_some_and(|ext| ext == "json")
                    .then_some(path)
            })
            .collect();
        paths.sort();
        Ok(paths)
    }

    /// Append accepted questions to an existing category document.
    pub fn append_questions(
        &self,
        category: &str,
        questions: &[Question],
    ) -> Result<(), CorpusError> {
        let spec = self.spec(category)?;
        let path = self.path_for(spec);
        let mut raw = read_json(&path)?;

        let obj = raw
            .as_object_mut()
            .ok_or_else(|| CorpusError::MalformedDocument {
                path: path.display().to_string(),
                reason: "document root is not an object".to_string(),
            })?;
        let list = obj
            .entry("questions")
            .or_insert_with(|| Value::Array(Vec::new()));
        let list = list
            .as_array_mut()
            .ok_or_else(|| CorpusError::MalformedDocument {
                path: path.display().to_string(),
                reason: "questions is not an array".to_string(),
            })?;

        for q in questions {
            // Serialization of a typed Question cannot fail.
            list.push(serde_json::to_value(q).unwrap_or(Value::Null));
        }
        let total = list.len();

        self.save_raw(&path, &raw)?;
        info!(
            category = %category,
            added = questions.len(),
            total,
            "category document updated"
        );
        Ok(())
    }

    /// Create an empty document for a category. Refuses to overwrite.
    pub fn create_category(&self, category: &str) -> Result<PathBuf, CorpusError> {
        let spec = self.spec(category)?;
        let path = self.path_for(spec);
        if path.exists() {
            return Err(CorpusError::FileExists {
                path: path.display().to_string(),
            });
        }
        let doc = json!({
            "category_en": spec.display_name,
            "category_zh": "",
            "questions": [],
        });
        self.save_raw(&path, &doc)?;
        Ok(path)
    }

    /// Write a document as 2-space-indented JSON with a trailing newline,
    /// through a temp file renamed into place.
    pub fn save_raw(&self, path: &Path, value: &Value) -> Result<(), CorpusError> {
        let text = serde_json::to_string_pretty(value).map_err(|e| {
            CorpusError::MalformedDocument {
                path: path.display().to_string(),
                reason: e.to_string(),
            }
        })?;
        write_atomic(path, &format!("{text}\n")).map_err(|e| CorpusError::Io {
            path: path.display().to_string(),
            source: e,
        })
    }
}

/// Shape-check a raw value into a `CategoryDocument`.
pub fn document_from_value(raw: &Value) -> Result<CategoryDocument, String> {
    let category_en = raw
        .get("category_en")
        .and_then(Value::as_str)
        .ok_or("missing category_en")?;
    let category_zh = raw
        .get("category_zh")
        .and_then(Value::as_str)
        .ok_or("missing category_zh")?;
    let questions = raw
        .get("questions")
        .and_then(Value::as_array)
        .ok_or("missing or invalid questions array")?;
    Ok(CategoryDocument {
        category_en: category_en.to_string(),
        category_zh: category_zh.to_string(),
        questions: questions.clone(),
    })
}

fn read_json(path: &Path) -> Result<Value, CorpusError> {
    if !path.exists() {
        return Err(CorpusError::FileNotFound {
            path: path.display().to_string(),
        });
    }
    let text = fs::read_to_string(path).map_err(|e| CorpusError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    serde_json::from_str(&text).map_err(|e| CorpusError::MalformedDocument {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}

/// Write `content` to a sibling temp file, then rename over `path`.
fn write_atomic(path: &Path, content: &str) -> std::io::Result<()> {
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, content)?;
    fs::rename(&tmp, path)
}
