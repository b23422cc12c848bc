// Copyright 2025 the Hudkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Namespaced resource keys and the loaders that resolve them against a
//! client archive or an extracted asset tree.

use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::PathBuf;
use std::sync::Mutex;

use zip::ZipArchive;

use crate::error::FontError;

/// A `namespace:path` asset reference.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourceKey {
    /// Asset namespace, `minecraft` when unspecified.
    pub namespace: String,
    /// Path below the namespace root.
    pub path: String,
}

impl ResourceKey {
    /// Parse a key of the form `path` or `namespace:path`.
    pub fn parse(key: &str) -> Result<Self, FontError> {
        let mut parts = key.split(':');
        let first = parts.next().unwrap_or_default();
        let second = parts.next();
        if parts.next().is_some() {
            return Err(FontError::InvalidKey(key.to_owned()));
        }
        Ok(match second {
            Some(path) => Self {
                namespace: first.to_owned(),
                path: path.to_owned(),
            },
            None => Self {
                namespace: "minecraft".to_owned(),
                path: first.to_owned(),
            },
        })
    }
}

impl fmt::Display for ResourceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.namespace, self.path)
    }
}

/// Resolves resource keys to raw bytes.
///
/// A loader owns one path convention: font descriptors resolve below
/// `assets/<ns>/`, textures below `assets/<ns>/textures/`.
pub trait ResourceLoader {
    /// Read the resource behind a key.
    fn open(&self, key: &ResourceKey) -> Result<Vec<u8>, FontError>;
}

fn archive_path(kind: Option<&str>, key: &ResourceKey) -> String {
    match kind {
        Some(kind) => format!("assets/{}/{}/{}", key.namespace, kind, key.path),
        None => format!("assets/{}/{}", key.namespace, key.path),
    }
}

/// Reads resources out of a client archive.
pub struct ZipLoader {
    archive: Mutex<ZipArchive<File>>,
    kind: Option<String>,
}

impl ZipLoader {
    /// Open a loader over the archive at `path`.
    ///
    /// `kind` is an extra path segment between the namespace and the key
    /// path, `"textures"` for image resources.
    pub fn open(path: impl Into<PathBuf>, kind: Option<&str>) -> Result<Self, FontError> {
        let file = File::open(path.into())?;
        Ok(Self {
            archive: Mutex::new(ZipArchive::new(file)?),
            kind: kind.map(str::to_owned),
        })
    }
}

impl ResourceLoader for ZipLoader {
    fn open(&self, key: &ResourceKey) -> Result<Vec<u8>, FontError> {
        let path = archive_path(self.kind.as_deref(), key);
        let mut archive = self
            .archive
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let mut entry = match archive.by_name(&path) {
            Ok(entry) => entry,
            Err(zip::result::ZipError::FileNotFound) => {
                return Err(FontError::NotFound(key.to_string()));
            }
            Err(err) => return Err(err.into()),
        };
        let mut data = Vec::with_capacity(entry.size() as usize);
        entry.read_to_end(&mut data)?;
        Ok(data)
    }
}

/// Reads resources out of an extracted asset tree.
pub struct DirLoader {
    root: PathBuf,
    kind: Option<String>,
}

impl DirLoader {
    /// A loader rooted at the directory holding `assets/`.
    pub fn new(root: impl Into<PathBuf>, kind: Option<&str>) -> Self {
        Self {
            root: root.into(),
            kind: kind.map(str::to_owned),
        }
    }
}

impl ResourceLoader for DirLoader {
    fn open(&self, key: &ResourceKey) -> Result<Vec<u8>, FontError> {
        let path = self.root.join(archive_path(self.kind.as_deref(), key));
        if !path.is_file() {
            return Err(FontError::NotFound(key.to_string()));
        }
        Ok(std::fs::read(path)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_keys_default_to_minecraft() {
        let key = ResourceKey::parse("font/ascii.png").unwrap();
        assert_eq!(key.namespace, "minecraft");
        assert_eq!(key.path, "font/ascii.png");
        assert_eq!(key.to_string(), "minecraft:font/ascii.png");
    }

    #[test]
    fn explicit_namespace_is_kept() {
        let key = ResourceKey::parse("mypack:font/glyphs.png").unwrap();
        assert_eq!(key.namespace, "mypack");
        assert_eq!(key.path, "font/glyphs.png");
    }

    #[test]
    fn extra_separators_are_rejected() {
        assert!(matches!(
            ResourceKey::parse("a:b:c"),
            Err(FontError::InvalidKey(_))
        ));
    }

    #[test]
    fn kind_segment_sits_between_namespace_and_path() {
        let key = ResourceKey::parse("font/ascii.png").unwrap();
        assert_eq!(
            archive_path(Some("textures"), &key),
            "assets/minecraft/textures/font/ascii.png"
        );
        assert_eq!(archive_path(None, &key), "assets/minecraft/font/ascii.png");
    }
}
