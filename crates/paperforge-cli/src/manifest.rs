//! Render manifests written alongside each rendered paper.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use paperforge_core::BlockSummary;

/// Operational metadata for one rendering run, saved as
/// `<stem>-manifest.json` next to the rendered documents.
///
/// The manifest records when and from what a rendering was produced. It is
/// never an input to rendering, so its per-run fields (id, timestamp) do
/// not touch the determinism of the paper and key bytes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderManifest {
    /// Unique identifier of this rendering run.
    pub id: Uuid,
    /// When the rendering was produced.
    pub created_at: DateTime<Utc>,
    /// Paper name from the quiz file.
    pub paper_name: String,
    /// The quiz file this rendering came from.
    pub source: PathBuf,
    /// Total question numbers consumed across all blocks.
    pub question_count: usize,
    /// Per-block numbering, in paper order.
    pub blocks: Vec<BlockSummary>,
    /// Validation warnings present at render time.
    pub warnings: usize,
}

impl RenderManifest {
    /// Save the manifest as pretty-printed JSON.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize manifest")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write manifest to {}", path.display()))?;
        Ok(())
    }
}
