//! # Cookbook Loader
//!
//! Reads technique records from YAML (or JSON) sources into a [`Catalog`].

use super::catalog::Catalog;
use super::types::EntryRecord;
use crate::errors::CookbookError;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};
use walkdir::WalkDir;

const SOURCE_EXTENSIONS: [&str; 3] = ["yaml", "yml", "json"];

/// Shape of a source document: either a bare list of records or a
/// mapping that also carries document-level metadata.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CatalogDocument {
    Records(Vec<EntryRecord>),
    Document(CatalogMapping),
}

#[derive(Debug, Deserialize)]
struct CatalogMapping {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    introduction: Option<String>,
    entries: Vec<EntryRecord>,
}

fn parser_error(detail: impl std::fmt::Display) -> CookbookError {
    CookbookError::ParserError(format!(
        "Cookbook source must be a list of technique records in YAML or JSON: {detail}"
    ))
}

/// Parse YAML by first reading the document shape, then deserializing
/// that shape alone, so errors keep their line and column.
fn parse_yaml(content: &str) -> Result<CatalogDocument, CookbookError> {
    let value: serde_yaml::Value = serde_yaml::from_str(content).map_err(parser_error)?;
    match value {
        serde_yaml::Value::Null => Ok(CatalogDocument::Records(Vec::new())),
        serde_yaml::Value::Sequence(_) => serde_yaml::from_str(content)
            .map(CatalogDocument::Records)
            .map_err(parser_error),
        serde_yaml::Value::Mapping(_) => serde_yaml::from_str(content)
            .map(CatalogDocument::Document)
            .map_err(parser_error),
        _ => Err(parser_error(
            "expected a sequence of records or a mapping with `entries`",
        )),
    }
}

/// Parse a source document, trying YAML first and falling back to JSON
fn parse_document(content: &str) -> Result<CatalogDocument, CookbookError> {
    if content.trim().is_empty() {
        return Ok(CatalogDocument::Records(Vec::new()));
    }

    let yaml_err = match parse_yaml(content) {
        Ok(document) => return Ok(document),
        Err(err) => err,
    };

    if let Ok(document) = serde_json::from_str::<CatalogDocument>(content) {
        return Ok(document);
    }

    Err(yaml_err)
}

/// Loads cookbook sources into catalogs
#[derive(Debug, Clone, Copy, Default)]
pub struct CatalogLoader;

impl CatalogLoader {
    pub fn new() -> Self {
        Self
    }

    /// Build a new catalog from a source document
    pub fn load(&self, content: &str) -> Result<Catalog, CookbookError> {
        let mut catalog = Catalog::new();
        self.load_into(&mut catalog, content)?;
        Ok(catalog)
    }

    /// Add every record of a source document to `catalog`, in source order.
    ///
    /// Stops at the first malformed or duplicate record; entries added
    /// before it stay in the catalog.
    pub fn load_into(&self, catalog: &mut Catalog, content: &str) -> Result<(), CookbookError> {
        let (title, introduction, records) = match parse_document(content)? {
            CatalogDocument::Records(records) => (None, None, records),
            CatalogDocument::Document(CatalogMapping {
                title,
                introduction,
                entries,
            }) => (title, introduction, entries),
        };

        if let Some(title) = title {
            if catalog.title().is_none() {
                catalog.set_title(title);
            } else if catalog.title() != Some(title.as_str()) {
                warn!("Ignoring title '{}', catalog is already titled", title);
            }
        }
        if let Some(introduction) = introduction {
            if catalog.introduction().is_none() {
                catalog.set_introduction(introduction);
            }
        }

        let count = records.len();
        for (i, record) in records.into_iter().enumerate() {
            catalog.add(record.into_entry(i + 1)?)?;
        }

        debug!("Loaded {} technique records", count);
        Ok(())
    }

    /// Build a catalog from a single source file
    pub fn load_file(&self, path: &Path) -> Result<Catalog, CookbookError> {
        let mut catalog = Catalog::new();
        self.load_file_into(&mut catalog, path)?;
        info!("Loaded {} techniques from {:?}", catalog.len(), path);
        Ok(catalog)
    }

    /// Build a catalog from every source file beneath `dir`, visiting
    /// files in file-name order so the result is deterministic.
    pub fn load_dir(&self, dir: &Path) -> Result<Catalog, CookbookError> {
        if !dir.is_dir() {
            return Err(CookbookError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("Cookbook directory not found: {}", dir.display()),
            )));
        }

        let mut catalog = Catalog::new();
        let mut loaded_files = 0;

        for entry in WalkDir::new(dir).sort_by_file_name() {
            let entry = entry?;
            let path = entry.path();
            if !entry.file_type().is_file() {
                continue;
            }

            let is_source = path
                .extension()
                .and_then(|s| s.to_str())
                .is_some_and(|ext| SOURCE_EXTENSIONS.contains(&ext));
            if !is_source {
                warn!("Skipping non-source file {:?}", path);
                continue;
            }

            self.load_file_into(&mut catalog, path)?;
            loaded_files += 1;
        }

        info!(
            "Loaded {} techniques from {} files in {:?}",
            catalog.len(),
            loaded_files,
            dir
        );
        Ok(catalog)
    }

    /// Load a file or a directory, whichever `path` names
    pub fn load_path(&self, path: &Path) -> Result<Catalog, CookbookError> {
        if path.is_dir() {
            self.load_dir(path)
        } else {
            self.load_file(path)
        }
    }

    fn load_file_into(&self, catalog: &mut Catalog, path: &Path) -> Result<(), CookbookError> {
        let content = fs::read_to_string(path)?;
        debug!("Loading cookbook source {:?}", path.file_name());
        self.load_into(catalog, &content)
    }
}

/// Build a catalog from a source document with the default loader
pub fn load(content: &str) -> Result<Catalog, CookbookError> {
    CatalogLoader::new().load(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cookbook::types::EntryField;

    const TWO_RECORDS: &str = r#"
- name: Extract Method
  rationale: A fragment can be grouped together.
  beforeCode: |
    void print() { printBanner(); std::cout << name; }
  afterCode: |
    void print() { printBanner(); printDetails(); }
  benefits:
    - Shorter methods
- name: Inline Method
  rationale: The body is as clear as the name.
  beforeCode: "int rating() { return more(); }"
  afterCode: "int rating() { return n > 5; }"
  benefits: [Less indirection, Fewer methods]
"#;

    #[test]
    fn test_load_list_document() {
        let catalog = load(TWO_RECORDS).unwrap();
        assert_eq!(catalog.names(), vec!["Extract Method", "Inline Method"]);
        assert_eq!(catalog.get("Inline Method").unwrap().benefits().len(), 2);
        assert!(catalog.title().is_none());
    }

    #[test]
    fn test_load_mapping_document_with_title() {
        let yaml = r#"
title: C++ Refactorings
introduction: Small before/after pairs.
entries:
  - name: Extract Class
    rationale: One class doing two jobs.
    beforeCode: "class A {};"
    afterCode: "class A {}; class B {};"
    benefits: [Reduces size]
"#;
        let catalog = load(yaml).unwrap();
        assert_eq!(catalog.title(), Some("C++ Refactorings"));
        assert_eq!(catalog.introduction(), Some("Small before/after pairs."));
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_load_json_document() {
        let json = r#"[{"name": "Extract Class", "rationale": "Too big.",
            "beforeCode": "class A {};", "afterCode": "class B {};",
            "benefits": ["Reduces size"]}]"#;
        let catalog = load(json).unwrap();
        assert!(catalog.contains("Extract Class"));
    }

    #[test]
    fn test_empty_source_gives_empty_catalog() {
        assert!(load("  \n").unwrap().is_empty());
    }

    #[test]
    fn test_unparseable_source() {
        let err = load("name: [unterminated").unwrap_err();
        assert!(matches!(err, CookbookError::ParserError(_)));
    }

    #[test]
    fn test_parse_errors_are_located() {
        let yaml = "- name: Extract Class\n  benefits: 42\n";
        let msg = load(yaml).unwrap_err().to_string();
        assert!(msg.contains("line 2"), "{msg}");
        assert!(!msg.contains("untagged"), "{msg}");

        let msg = load("title: Cookbook\n").unwrap_err().to_string();
        assert!(msg.contains("missing field `entries`"), "{msg}");

        let msg = load("42").unwrap_err().to_string();
        assert!(msg.contains("mapping with `entries`"), "{msg}");
    }

    #[test]
    fn test_skipped_files_are_logged_as_warnings() {
        let dir = tempfile::TempDir::new().unwrap();
        fs::write(dir.path().join("notes.txt"), "not a source").unwrap();
        fs::write(dir.path().join("a.yaml"), TWO_RECORDS).unwrap();

        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::WARN)
            .finish();

        let catalog = tracing::subscriber::with_default(subscriber, || {
            CatalogLoader::new().load_dir(dir.path()).unwrap()
        });
        assert_eq!(catalog.len(), 2);

        let output = logs.contents();
        assert!(output.contains("WARN"), "{output}");
        assert!(output.contains("notes.txt"), "{output}");
    }

    #[derive(Clone, Default)]
    struct CapturedLogs(std::sync::Arc<std::sync::Mutex<Vec<u8>>>);

    impl CapturedLogs {
        fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    impl std::io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_missing_field_is_malformed() {
        let yaml = r#"
- name: Extract Class
  rationale: Too big.
  afterCode: "class B {};"
  benefits: [Reduces size]
"#;
        match load(yaml) {
            Err(CookbookError::MalformedEntry { entry, field }) => {
                assert_eq!(entry, "Extract Class");
                assert_eq!(field, EntryField::BeforeCode);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_load_into_keeps_entries_before_failure() {
        let mut catalog = Catalog::new();
        let yaml = r#"
- name: Extract Class
  rationale: Too big.
  beforeCode: "class A {};"
  afterCode: "class B {};"
  benefits: [Reduces size]
- name: Inline Class
  rationale: Too small.
  beforeCode: "class A {};"
  afterCode: ""
  benefits: [Fewer classes]
"#;
        let err = CatalogLoader::new().load_into(&mut catalog, yaml).unwrap_err();
        assert!(matches!(
            err,
            CookbookError::MalformedEntry {
                field: EntryField::AfterCode,
                ..
            }
        ));
        assert_eq!(catalog.names(), vec!["Extract Class"]);
    }
}
