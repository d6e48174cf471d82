//! Disk persistence for workspace indexes.
//!
//! A workspace is two files: `vectors.bin` (bincode entry data) and
//! `manifest.json` (model identity, counts, checksum). Both are written
//! with whole-file atomic replace; a sync always overwrites the previous
//! workspace state, never merges. The data file is written before the
//! manifest so a readable manifest always describes complete data.

use std::collections::BTreeSet;
use std::io::Write;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::VectorIndex;
use crate::config::WorkspaceConfig;
use crate::constants::INDEX_FORMAT_VERSION;
use crate::error::{Result, ScholarError};
use crate::types::IndexedChunk;

/// Similarity metric identifier recorded in every manifest.
pub const METRIC_COSINE: &str = "cosine";

/// Persisted description of one workspace index.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexManifest {
    pub format_version: u32,
    pub embedding_model: String,
    pub dimension: usize,
    pub metric: String,
    pub chunk_count: usize,
    /// Distinct source document names, sorted.
    pub sources: Vec<String>,
    pub created_at: DateTime<Utc>,
    /// Blake3 hex digest of `vectors.bin`.
    pub data_checksum: String,
}

fn bincode_config() -> impl bincode::config::Config {
    bincode::config::standard()
}

/// True if a persisted index exists for this workspace.
#[must_use]
pub fn exists(config: &WorkspaceConfig) -> bool {
    config.manifest_path().exists()
}

/// Persist the index, overwriting any previous workspace state.
pub fn save(index: &VectorIndex, config: &WorkspaceConfig) -> Result<()> {
    fs_err::create_dir_all(config.dir())?;

    let data = bincode::serde::encode_to_vec(index.entries(), bincode_config())?;
    let checksum = blake3::hash(&data).to_hex().to_string();
    write_atomic(&config.vectors_path(), &data)?;

    let sources: BTreeSet<String> = index
        .entries()
        .iter()
        .map(|entry| entry.chunk.source.clone())
        .collect();
    let manifest = IndexManifest {
        format_version: INDEX_FORMAT_VERSION,
        embedding_model: index.model_name().to_string(),
        dimension: index.dimension(),
        metric: METRIC_COSINE.to_string(),
        chunk_count: index.len(),
        sources: sources.into_iter().collect(),
        created_at: Utc::now(),
        data_checksum: checksum,
    };
    write_atomic(
        &config.manifest_path(),
        &serde_json::to_vec_pretty(&manifest)?,
    )?;

    tracing::info!(
        workspace = %config.workspace,
        chunks = index.len(),
        "workspace index persisted"
    );
    Ok(())
}

/// Load a persisted workspace index, verifying manifest/data agreement.
pub fn load(config: &WorkspaceConfig) -> Result<VectorIndex> {
    let manifest_path = config.manifest_path();
    if !manifest_path.exists() {
        return Err(ScholarError::WorkspaceNotFound {
            path: manifest_path,
        });
    }

    let manifest: IndexManifest = serde_json::from_slice(&fs_err::read(&manifest_path)?)?;
    if manifest.format_version != INDEX_FORMAT_VERSION {
        return Err(ScholarError::IndexCorrupt {
            path: manifest_path,
            reason: format!(
                "unsupported format version {} (expected {})",
                manifest.format_version, INDEX_FORMAT_VERSION
            ),
        });
    }

    let vectors_path = config.vectors_path();
    let data = fs_err::read(&vectors_path).map_err(|_| ScholarError::IndexCorrupt {
        path: vectors_path.clone(),
        reason: "manifest present but vector data missing".into(),
    })?;

    let checksum = blake3::hash(&data).to_hex().to_string();
    if checksum != manifest.data_checksum {
        return Err(ScholarError::IndexCorrupt {
            path: vectors_path,
            reason: "vector data checksum mismatch".into(),
        });
    }

    let (entries, _): (Vec<IndexedChunk>, usize) =
        bincode::serde::decode_from_slice(&data, bincode_config())?;
    if entries.len() != manifest.chunk_count {
        return Err(ScholarError::IndexCorrupt {
            path: vectors_path,
            reason: format!(
                "manifest lists {} chunks, data holds {}",
                manifest.chunk_count,
                entries.len()
            ),
        });
    }
    if let Some(bad) = entries
        .iter()
        .find(|entry| entry.embedding.len() != manifest.dimension)
    {
        return Err(ScholarError::IndexCorrupt {
            path: vectors_path,
            reason: format!(
                "entry for '{}' has dimension {} (manifest says {})",
                bad.chunk.source,
                bad.embedding.len(),
                manifest.dimension
            ),
        });
    }

    tracing::debug!(
        workspace = %config.workspace,
        chunks = entries.len(),
        model = %manifest.embedding_model,
        "workspace index loaded"
    );
    Ok(VectorIndex::from_parts(
        entries,
        manifest.embedding_model,
        manifest.dimension,
    ))
}

fn write_atomic(path: &std::path::Path, bytes: &[u8]) -> Result<()> {
    let mut file = atomic_write_file::AtomicWriteFile::open(path)?;
    file.write_all(bytes)?;
    file.commit()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::embed::Embedder;
    use crate::types::Chunk;
    use tempfile::tempdir;

    struct UnitEmbedder;

    impl Embedder for UnitEmbedder {
        fn model_name(&self) -> &str {
            "unit-test"
        }
        fn dimension(&self) -> usize {
            2
        }
        fn embed_query(&self, text: &str) -> Result<Vec<f32>> {
            let x = text.len() as f32;
            Ok(vec![x, 1.0])
        }
    }

    fn sample_index() -> VectorIndex {
        let chunks = vec![
            Chunk {
                source: "a.pdf".to_string(),
                page: 1,
                ordinal: 0,
                text: "alpha".to_string(),
            },
            Chunk {
                source: "b.pdf".to_string(),
                page: 2,
                ordinal: 0,
                text: "beta content".to_string(),
            },
        ];
        VectorIndex::build(chunks, &UnitEmbedder).expect("build")
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempdir().expect("tmp");
        let config = WorkspaceConfig::new(dir.path(), "General");

        assert!(!exists(&config));
        save(&sample_index(), &config).expect("save");
        assert!(exists(&config));

        let loaded = load(&config).expect("load");
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded.model_name(), "unit-test");
        assert_eq!(loaded.dimension(), 2);
        assert_eq!(loaded.entries()[1].chunk.source, "b.pdf");
    }

    #[test]
    fn missing_workspace_is_a_typed_error() {
        let dir = tempdir().expect("tmp");
        let config = WorkspaceConfig::new(dir.path(), "Nowhere");
        let err = load(&config).expect_err("must fail");
        assert!(matches!(err, ScholarError::WorkspaceNotFound { .. }));
    }

    #[test]
    fn save_overwrites_previous_state() {
        let dir = tempdir().expect("tmp");
        let config = WorkspaceConfig::new(dir.path(), "General");

        save(&sample_index(), &config).expect("first save");

        let replacement = VectorIndex::build(
            vec![Chunk {
                source: "c.pdf".to_string(),
                page: 1,
                ordinal: 0,
                text: "gamma".to_string(),
            }],
            &UnitEmbedder,
        )
        .expect("build");
        save(&replacement, &config).expect("second save");

        let loaded = load(&config).expect("load");
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded.entries()[0].chunk.source, "c.pdf");
    }

    #[test]
    fn tampered_data_is_detected_on_load() {
        let dir = tempdir().expect("tmp");
        let config = WorkspaceConfig::new(dir.path(), "General");
        save(&sample_index(), &config).expect("save");

        let mut data = fs_err::read(config.vectors_path()).expect("read");
        let last = data.len() - 1;
        data[last] ^= 0xFF;
        fs_err::write(config.vectors_path(), &data).expect("write");

        let err = load(&config).expect_err("must fail");
        assert!(matches!(
            err,
            ScholarError::IndexCorrupt { reason, .. } if reason.contains("checksum")
        ));
    }

    #[test]
    fn manifest_without_data_is_corrupt() {
        let dir = tempdir().expect("tmp");
        let config = WorkspaceConfig::new(dir.path(), "General");
        save(&sample_index(), &config).expect("save");
        fs_err::remove_file(config.vectors_path()).expect("remove");

        let err = load(&config).expect_err("must fail");
        assert!(matches!(
            err,
            ScholarError::IndexCorrupt { reason, .. } if reason.contains("data missing")
        ));
    }
}
