//! Static asset lookup
//!
//! Request paths map onto files below a single root directory. Anything
//! that would escape the root (`..`, absolute segments) is refused.

use std::path::{Component, Path, PathBuf};

use crate::error::CoreError;
use crate::Result;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Asset {
    pub path: PathBuf,
    pub mime: &'static str,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone)]
pub struct AssetResolver {
    root: PathBuf,
}

impl AssetResolver {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Whether a request path looks like a file rather than a page
    pub fn is_asset_path(path: &str) -> bool {
        let path = path.split(['?', '#']).next().unwrap_or("");
        path.starts_with("/images/") || mime_for(Path::new(path)).is_some()
    }

    /// File system location for `request_path`, without touching the disk
    pub fn locate(&self, request_path: &str) -> Result<PathBuf> {
        let clean = request_path.split(['?', '#']).next().unwrap_or("");
        let relative = clean.trim_start_matches('/');

        let mut path = self.root.clone();
        for component in Path::new(relative).components() {
            match component {
                Component::Normal(part) => path.push(part),
                Component::CurDir => {}
                _ => return Err(CoreError::ForbiddenAsset(request_path.to_string())),
            }
        }

        if path == self.root {
            return Err(CoreError::ForbiddenAsset(request_path.to_string()));
        }
        Ok(path)
    }

    pub fn resolve(&self, request_path: &str) -> Result<Asset> {
        let path = self.locate(request_path)?;
        let mime = mime_for(&path)
            .ok_or_else(|| CoreError::ForbiddenAsset(request_path.to_string()))?;

        let bytes = match std::fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(CoreError::NotFound(request_path.to_string()));
            }
            Err(e) => return Err(e.into()),
        };

        tracing::debug!(path = %path.display(), mime, size = bytes.len(), "Served asset");

        Ok(Asset { path, mime, bytes })
    }
}

/// MIME type for the file kinds the site ships
pub fn mime_for(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    let mime = match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "svg" => "image/svg+xml",
        "webp" => "image/webp",
        "gif" => "image/gif",
        "ico" => "image/x-icon",
        "avif" => "image/avif",
        "css" => "text/css; charset=utf-8",
        "woff2" => "font/woff2",
        _ => return None,
    };
    Some(mime)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("shelat-assets-{}-{name}", std::process::id()));
        std::fs::create_dir_all(dir.join("images")).unwrap();
        dir
    }

    #[test]
    fn test_mime_for() {
        assert_eq!(mime_for(Path::new("a/hero-image.PNG")), Some("image/png"));
        assert_eq!(mime_for(Path::new("stars-5.svg")), Some("image/svg+xml"));
        assert_eq!(mime_for(Path::new("notes.txt")), None);
        assert_eq!(mime_for(Path::new("aberdeen")), None);
    }

    #[test]
    fn test_locate_rejects_traversal() {
        let resolver = AssetResolver::new("/srv/public");
        assert_eq!(
            resolver.locate("/images/google-icon.svg").unwrap(),
            PathBuf::from("/srv/public/images/google-icon.svg")
        );
        assert!(matches!(
            resolver.locate("/images/../../etc/passwd"),
            Err(CoreError::ForbiddenAsset(_))
        ));
        assert!(resolver.locate("/").is_err());
    }

    #[test]
    fn test_is_asset_path() {
        assert!(AssetResolver::is_asset_path("/images/blob-pink.svg"));
        assert!(AssetResolver::is_asset_path("/favicon.ico?v=2"));
        assert!(!AssetResolver::is_asset_path("/aberdeen"));
        assert!(!AssetResolver::is_asset_path("/"));
    }

    #[test]
    fn test_resolve_reads_file() {
        let dir = scratch_dir("read");
        std::fs::write(dir.join("images/stars-5.svg"), b"<svg/>").unwrap();

        let resolver = AssetResolver::new(&dir);
        let asset = resolver.resolve("/images/stars-5.svg").unwrap();
        assert_eq!(asset.mime, "image/svg+xml");
        assert_eq!(asset.bytes, b"<svg/>");

        assert!(matches!(
            resolver.resolve("/images/missing.png"),
            Err(CoreError::NotFound(_))
        ));
        std::fs::remove_dir_all(dir).unwrap();
    }
}
