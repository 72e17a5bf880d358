//! Filesystem guide source
//!
//! Reads `<root>/<faction>/<name>.json`, e.g.
//! `guides/alliance/1-6_northshire_human.json`.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;

use levelguide_domain::{Faction, ZoneGuide};

use crate::ports::outbound::{GuideSource, GuideSourceError};

#[derive(Debug, Clone)]
pub struct FsGuideSource {
    root: PathBuf,
}

impl FsGuideSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn document_path(&self, faction: Faction, name: &str) -> Option<PathBuf> {
        let is_plain_name = !name.is_empty()
            && !name.contains(['/', '\\'])
            && name != "."
            && name != "..";
        is_plain_name.then(|| {
            self.root
                .join(faction.path_segment())
                .join(format!("{name}.json"))
        })
    }
}

#[async_trait]
impl GuideSource for FsGuideSource {
    async fn fetch_guide(
        &self,
        faction: Faction,
        name: &str,
    ) -> Result<ZoneGuide, GuideSourceError> {
        let path = self
            .document_path(faction, name)
            .ok_or_else(|| GuideSourceError::NotFound {
                name: name.to_string(),
            })?;

        let data = tokio::fs::read_to_string(&path).await.map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                GuideSourceError::NotFound {
                    name: name.to_string(),
                }
            } else {
                GuideSourceError::Io {
                    name: name.to_string(),
                    message: e.to_string(),
                }
            }
        })?;

        let guide: ZoneGuide =
            serde_json::from_str(&data).map_err(|e| GuideSourceError::Malformed {
                name: name.to_string(),
                message: e.to_string(),
            })?;

        if guide.name != name {
            return Err(GuideSourceError::Malformed {
                name: name.to_string(),
                message: format!("document declares name {}", guide.name),
            });
        }

        tracing::debug!(path = ?path, steps = guide.steps.len(), "Read guide document");
        Ok(guide)
    }
}
