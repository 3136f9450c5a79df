//! Backends that hold template documents.
//!
//! Each template is one JSON document, `{ name, description, code }`,
//! addressed by an identifier such as `basic`. The document for `basic`
//! lives at `{base}/basic.json` for both backends.

use crate::error::{LoadError, LoadResult};
use crate::TemplateDefinition;
use async_trait::async_trait;
use reqwest::StatusCode;
use std::path::PathBuf;

/// A source of template documents.
#[async_trait]
pub trait TemplateStore: Send + Sync {
    /// Fetch and decode the document for `identifier`.
    async fn fetch(&self, identifier: &str) -> LoadResult<TemplateDefinition>;

    /// Where this store reads from, for messages.
    fn location(&self) -> String;
}

#[async_trait]
impl<T: TemplateStore + ?Sized> TemplateStore for Box<T> {
    async fn fetch(&self, identifier: &str) -> LoadResult<TemplateDefinition> {
        (**self).fetch(identifier).await
    }

    fn location(&self) -> String {
        (**self).location()
    }
}

/// Pick a backend for a configured location.
///
/// `http://` and `https://` locations are fetched over HTTP; anything else
/// is treated as a directory.
pub fn store_from_location(location: &str) -> Box<dyn TemplateStore> {
    if location.starts_with("http://") || location.starts_with("https://") {
        Box::new(HttpTemplateStore::new(location))
    } else {
        Box::new(DirTemplateStore::new(location))
    }
}

/// Templates served over HTTP.
#[derive(Debug, Clone)]
pub struct HttpTemplateStore {
    base_url: String,
    client: reqwest::Client,
}

impl HttpTemplateStore {
    /// Create a store rooted at `base_url`.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// The URL of the document for `identifier`.
    pub fn document_url(&self, identifier: &str) -> String {
        format!("{}/{}.json", self.base_url, identifier)
    }
}

#[async_trait]
impl TemplateStore for HttpTemplateStore {
    async fn fetch(&self, identifier: &str) -> LoadResult<TemplateDefinition> {
        check_identifier(identifier)?;
        let url = self.document_url(identifier);
        tracing::debug!(%url, "fetching template");

        let transport = |source| LoadError::Transport {
            identifier: identifier.to_string(),
            source,
        };

        let response = self.client.get(&url).send().await.map_err(transport)?;
        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(LoadError::NotFound {
                identifier: identifier.to_string(),
            });
        }
        if !status.is_success() {
            return Err(LoadError::Status {
                identifier: identifier.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(transport)?;
        decode(identifier, &body)
    }

    fn location(&self) -> String {
        self.base_url.clone()
    }
}

/// Templates stored as files in a local directory.
#[derive(Debug, Clone)]
pub struct DirTemplateStore {
    root: PathBuf,
}

impl DirTemplateStore {
    /// Create a store reading from `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The path of the document for `identifier`.
    pub fn document_path(&self, identifier: &str) -> PathBuf {
        self.root.join(format!("{}.json", identifier))
    }
}

#[async_trait]
impl TemplateStore for DirTemplateStore {
    async fn fetch(&self, identifier: &str) -> LoadResult<TemplateDefinition> {
        check_identifier(identifier)?;
        let path = self.document_path(identifier);
        tracing::debug!(path = %path.display(), "reading template");

        let body = tokio::fs::read_to_string(&path).await.map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                LoadError::NotFound {
                    identifier: identifier.to_string(),
                }
            } else {
                LoadError::Io {
                    identifier: identifier.to_string(),
                    source,
                }
            }
        })?;
        decode(identifier, &body)
    }

    fn location(&self) -> String {
        self.root.display().to_string()
    }
}

/// Identifiers name a single document; they never contain path segments.
fn check_identifier(identifier: &str) -> LoadResult<()> {
    let valid = !identifier.is_empty()
        && identifier
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if valid {
        Ok(())
    } else {
        Err(LoadError::NotFound {
            identifier: identifier.to_string(),
        })
    }
}

fn decode(identifier: &str, body: &str) -> LoadResult<TemplateDefinition> {
    serde_json::from_str(body).map_err(|e| LoadError::Decode {
        identifier: identifier.to_string(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;

    fn write_doc(dir: &std::path::Path, identifier: &str, body: &str) {
        fs::write(dir.join(format!("{identifier}.json")), body).unwrap();
    }

    #[tokio::test]
    async fn test_dir_store_fetch() {
        let dir = tempfile::tempdir().unwrap();
        write_doc(
            dir.path(),
            "basic",
            r#"{ "name": "Basic", "description": "d", "code": "<template/>" }"#,
        );

        let store = DirTemplateStore::new(dir.path());
        let definition = store.fetch("basic").await.unwrap();
        assert_eq!(
            definition,
            TemplateDefinition {
                name: "Basic".to_string(),
                description: "d".to_string(),
                code: "<template/>".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn test_dir_store_missing_document() {
        let dir = tempfile::tempdir().unwrap();
        let store = DirTemplateStore::new(dir.path());
        let err = store.fetch("nope").await.unwrap_err();
        assert!(matches!(err, LoadError::NotFound { .. }));
        assert_eq!(err.identifier(), "nope");
    }

    #[tokio::test]
    async fn test_dir_store_malformed_document() {
        let dir = tempfile::tempdir().unwrap();
        write_doc(dir.path(), "bad", r#"{ "name": "Bad" }"#);
        let store = DirTemplateStore::new(dir.path());
        let err = store.fetch("bad").await.unwrap_err();
        assert!(matches!(err, LoadError::Decode { .. }), "{err}");
    }

    #[tokio::test]
    async fn test_path_segments_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let store = DirTemplateStore::new(dir.path());
        let err = store.fetch("../secret").await.unwrap_err();
        assert!(matches!(err, LoadError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_http_store_unreachable() {
        let store = HttpTemplateStore::new("http://127.0.0.1:1/templates/");
        assert_eq!(
            store.document_url("card"),
            "http://127.0.0.1:1/templates/card.json"
        );
        let err = store.fetch("card").await.unwrap_err();
        assert!(matches!(err, LoadError::Transport { .. }), "{err}");
    }

    #[test]
    fn test_store_from_location() {
        assert_eq!(
            store_from_location("https://cdn.example.com/t/").location(),
            "https://cdn.example.com/t"
        );
        assert_eq!(store_from_location("./templates").location(), "./templates");
    }
}
