use crate::config::ClusterConfig;
use crate::error::Result;
use crate::pipeline::RunStats;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fs;
use std::path::Path;

/// Record of one clustering run: parameters, counters and output fingerprints
#[derive(Debug, Serialize, Deserialize)]
pub struct RunManifest {
    pub version: String,
    pub created_at: String,
    pub generator: String,
    pub input: String,
    pub params: ClusterConfig,
    pub stats: RunStats,
    pub outputs: Vec<OutputFile>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputFile {
    pub path: String,
    pub sha256: String,
}

impl OutputFile {
    pub fn new(path: &Path, contents: &[u8]) -> Self {
        Self {
            path: path.display().to_string(),
            sha256: sha256_hex(contents),
        }
    }
}

impl RunManifest {
    pub fn new(input: &Path, params: ClusterConfig, stats: RunStats) -> Self {
        Self {
            version: "1.0.0".to_string(),
            created_at: Utc::now().to_rfc3339(),
            generator: format!("tripcluster v{}", env!("CARGO_PKG_VERSION")),
            input: input.display().to_string(),
            params,
            stats,
            outputs: Vec::new(),
        }
    }

    pub fn add_output(&mut self, path: &Path, contents: &[u8]) {
        self.outputs.push(OutputFile::new(path, contents));
    }

    pub fn write_to_file(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(path, json)?;
        Ok(())
    }
}

/// Lowercase hex SHA-256 of `contents`
pub fn sha256_hex(contents: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(contents);
    hex::encode(hasher.finalize())
}
