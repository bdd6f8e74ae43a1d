//! Loading content items from JSON
//!
//! Accepts a single item object or an array of items, from a file or
//! from stdin when the path is `-`.

use crate::models::ContentItem;
use std::io::Read;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while reading input items
#[derive(Error, Debug)]
pub enum InputError {
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid content item JSON in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("No content items in {}", .0.display())]
    Empty(PathBuf),
}

pub type InputResult<T> = Result<T, InputError>;

/// Read items from `path`, or stdin for `-`
pub fn load_items(path: &Path) -> InputResult<Vec<ContentItem>> {
    let content = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .map_err(|source| InputError::Io {
                path: path.to_path_buf(),
                source,
            })?;
        buf
    } else {
        std::fs::read_to_string(path).map_err(|source| InputError::Io {
            path: path.to_path_buf(),
            source,
        })?
    };

    parse_items(&content, path)
}

/// Parse one item or an array of items
pub fn parse_items(content: &str, origin: &Path) -> InputResult<Vec<ContentItem>> {
    let value: serde_json::Value =
        serde_json::from_str(content).map_err(|source| InputError::Json {
            path: origin.to_path_buf(),
            source,
        })?;

    let items: Vec<ContentItem> = if value.is_array() {
        serde_json::from_value(value)
    } else {
        serde_json::from_value(value).map(|item| vec![item])
    }
    .map_err(|source| InputError::Json {
        path: origin.to_path_buf(),
        source,
    })?;

    if items.is_empty() {
        return Err(InputError::Empty(origin.to_path_buf()));
    }
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn origin() -> PathBuf {
        PathBuf::from("test.json")
    }

    #[test]
    fn test_single_object() {
        let items = parse_items(r#"{"seoTitle": "Hi"}"#, &origin()).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].seo_title.as_deref(), Some("Hi"));
    }

    #[test]
    fn test_array() {
        let items = parse_items(r#"[{"wordCount": 10}, {}]"#, &origin()).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].word_count, Some(10));
    }

    #[test]
    fn test_empty_array_is_an_error() {
        assert!(matches!(
            parse_items("[]", &origin()),
            Err(InputError::Empty(_))
        ));
    }

    #[test]
    fn test_bad_json() {
        let err = parse_items("{not json", &origin()).unwrap_err();
        assert!(matches!(err, InputError::Json { .. }));
        assert!(err.to_string().contains("test.json"));
    }

    #[test]
    fn test_wrong_shape() {
        assert!(parse_items(r#"{"wordCount": "many"}"#, &origin()).is_err());
        assert!(parse_items("42", &origin()).is_err());
    }

    #[test]
    fn test_missing_file() {
        let err = load_items(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, InputError::Io { .. }));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("item.json");
        std::fs::write(&path, r#"{"featuredImageId": "img"}"#).unwrap();
        let items = load_items(&path).unwrap();
        assert_eq!(items[0].featured_image(), Some("img"));
    }
}
