//! Slide manifest
//!
//! The list of tiles in track order, as handed over by whatever loads the
//! images. Index `i` in the manifest is tile slot `i`.

use std::path::Path;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::{Error, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slide {
    /// Caption shown on the tile
    #[serde(default)]
    pub title: String,
    /// Page the tile links to
    pub url: Url,
    /// Source of the tile image
    #[serde(default, rename = "imageUrl", skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlideManifest {
    pub slides: Vec<Slide>,
}

impl SlideManifest {
    /// Parse a manifest from JSON text
    pub fn from_json(text: &str) -> Result<Self> {
        let manifest: Self = serde_json::from_str(text)?;
        if manifest.slides.is_empty() {
            return Err(Error::InvalidLayout {
                tile_count: 0,
                pitch: 0.0,
            });
        }
        Ok(manifest)
    }

    /// Load a manifest file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Numbered placeholder slides pointing at `base`
    pub fn placeholder(count: usize, base: &str) -> Result<Self> {
        let base = Url::parse(base)?;
        let slides = (0..count)
            .map(|i| -> Result<Slide> {
                Ok(Slide {
                    title: format!("Slide {}", i + 1),
                    url: base.join(&format!("slides/{}", i + 1))?,
                    image_url: None,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { slides })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Slide> {
        self.slides.get(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_manifest() {
        let manifest = SlideManifest::from_json(
            r#"{"slides": [
                {"title": "Dunes", "url": "https://example.com/dunes", "imageUrl": "/img/dunes.jpg"},
                {"url": "https://example.com/coast"}
            ]}"#,
        )
        .unwrap();
        assert_eq!(manifest.len(), 2);
        assert_eq!(manifest.get(0).unwrap().title, "Dunes");
        assert_eq!(
            manifest.get(0).unwrap().image_url.as_deref(),
            Some("/img/dunes.jpg")
        );
        assert_eq!(manifest.get(1).unwrap().url.path(), "/coast");
        assert!(manifest.get(2).is_none());
    }

    #[test]
    fn test_empty_manifest_is_invalid_layout() {
        let err = SlideManifest::from_json(r#"{"slides": []}"#).unwrap_err();
        assert!(matches!(err, Error::InvalidLayout { tile_count: 0, .. }));
    }

    #[test]
    fn test_bad_url_is_rejected() {
        let err = SlideManifest::from_json(r#"{"slides": [{"url": "not a url"}]}"#).unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn test_placeholder() {
        let manifest = SlideManifest::placeholder(3, "https://example.com/").unwrap();
        assert_eq!(manifest.len(), 3);
        assert_eq!(manifest.get(2).unwrap().title, "Slide 3");
        assert_eq!(
            manifest.get(2).unwrap().url.as_str(),
            "https://example.com/slides/3"
        );
    }
}
