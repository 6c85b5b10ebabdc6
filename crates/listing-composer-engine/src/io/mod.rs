//! JSON import/export of articles and layouts.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::catalog::MAX_MOBILE_SUMMARY_LEN;
use crate::models::{ArticleData, LayoutTemplate};

/// Largest document accepted on import.
pub const MAX_IMPORT_BYTES: u64 = 10 * 1024 * 1024;

#[derive(Debug, thiserror::Error)]
pub enum ArticleIoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("{path} is {size} bytes, larger than the {limit} byte import limit", limit = MAX_IMPORT_BYTES)]
    TooLarge { path: PathBuf, size: u64 },
    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ArticleData {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let article: ArticleData = serde_json::from_str(json)?;
        let summary_len = article.mobile_summary.chars().count();
        if summary_len > MAX_MOBILE_SUMMARY_LEN {
            log::warn!(
                "mobile summary is {summary_len} characters; marketplaces may cut it at {MAX_MOBILE_SUMMARY_LEN}"
            );
        }
        Ok(article)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Reads an exported article.
pub fn read_article(path: &Path) -> Result<ArticleData, ArticleIoError> {
    let json = read_limited(path)?;
    ArticleData::from_json(&json).map_err(|source| ArticleIoError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Writes `article` as pretty JSON, creating parent directories.
pub fn write_article(path: &Path, article: &ArticleData) -> Result<(), ArticleIoError> {
    write_json(path, article)
}

pub fn read_layout(path: &Path) -> Result<LayoutTemplate, ArticleIoError> {
    let json = read_limited(path)?;
    serde_json::from_str(&json).map_err(|source| ArticleIoError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

pub fn write_layout(path: &Path, layout: &LayoutTemplate) -> Result<(), ArticleIoError> {
    write_json(path, layout)
}

/// Writes a rendered fragment, creating parent directories.
pub fn write_html(path: &Path, html: &str) -> Result<(), ArticleIoError> {
    ensure_parent(path)?;
    fs::write(path, html)?;
    Ok(())
}

fn read_limited(path: &Path) -> Result<String, ArticleIoError> {
    if !path.exists() {
        return Err(ArticleIoError::NotFound(path.to_path_buf()));
    }
    let size = fs::metadata(path)?.len();
    if size > MAX_IMPORT_BYTES {
        return Err(ArticleIoError::TooLarge {
            path: path.to_path_buf(),
            size,
        });
    }
    Ok(fs::read_to_string(path)?)
}

fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<(), ArticleIoError> {
    ensure_parent(path)?;
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json)?;
    Ok(())
}

fn ensure_parent(path: &Path) -> Result<(), ArticleIoError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::BlockType;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn article_survives_export_and_import() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested/article.json");
        let article = ArticleData::demo();

        write_article(&path, &article).unwrap();
        let loaded = read_article(&path).unwrap();

        assert_eq!(loaded, article);
    }

    #[test]
    fn exported_json_uses_pascal_case_and_numeric_types() {
        let json = ArticleData::demo().to_json().unwrap();

        assert!(json.contains("\"MobileSummary\""));
        assert!(json.contains("\"BlockContents\""));
        assert!(json.contains("\"Type\": 3"));
        assert!(json.contains("\"Column1Header\""));
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let article = ArticleData::from_json(r#"{"Title":"Only a title"}"#).unwrap();

        assert_eq!(article.title, "Only a title");
        assert_eq!(article.layout.id, "standard");
        assert!(article.block_contents.is_empty());
    }

    #[test]
    fn imports_document_with_embedded_layout() {
        let json = r##"{
            "Title": "Lamp",
            "Footer": "SKU: L1",
            "BlockContents": { "list": "Bulb\nShade", "stale": "ignored" },
            "Layout": {
                "Id": "mini",
                "Name": "Mini",
                "Colors": { "PrimaryColor": "#003366" },
                "Blocks": [ { "Id": "list", "Type": "CheckList", "Order": 0 } ]
            }
        }"##;

        let article = ArticleData::from_json(json).unwrap();

        assert_eq!(article.layout.name, "Mini");
        assert_eq!(article.layout.colors.primary_color, "#003366");
        assert_eq!(article.layout.colors.accent_color, "#f5c518");
        assert_eq!(article.layout.blocks[0].block_type, BlockType::CheckList);
        assert_eq!(article.unused_block_ids(), vec!["stale"]);
    }

    #[test]
    fn unknown_block_type_does_not_lose_the_article() {
        let json = r#"{
            "Title": "Lamp",
            "BlockContents": { "a": "Bulb", "b": "never shown" },
            "Layout": { "Blocks": [
                { "Id": "a", "Type": "CheckList", "Order": 0 },
                { "Id": "b", "Type": 6, "Order": 1 }
            ] }
        }"#;

        let article = ArticleData::from_json(json).unwrap();
        let html = crate::render(&article);

        assert_eq!(article.layout.blocks.len(), 1);
        assert!(html.contains("Bulb"));
        assert!(!html.contains("never shown"));
    }

    #[test]
    fn missing_file_is_reported() {
        let dir = TempDir::new().unwrap();
        let err = read_article(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, ArticleIoError::NotFound(_)));
    }

    #[test]
    fn malformed_file_reports_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{ not json").unwrap();

        let err = read_article(&path).unwrap_err();

        assert!(matches!(err, ArticleIoError::Parse { .. }));
        assert!(err.to_string().contains("broken.json"));
    }

    #[test]
    fn layout_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("layout.json");
        let layout = LayoutTemplate::standard().duplicate(true);

        write_layout(&path, &layout).unwrap();

        assert_eq!(read_layout(&path).unwrap(), layout);
    }

    #[test]
    fn html_is_written_verbatim() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out/listing.html");

        write_html(&path, "<div>x</div>").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "<div>x</div>");
    }
}
