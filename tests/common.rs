//! Shared test utilities for integration tests.
//!
//! Provides helpers for writing article fixtures into temporary
//! directories used across multiple test files.

#![allow(dead_code)]

use anyhow::Result;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Articles fixture covering every block construct and status.
pub const ARTICLES_JSON: &str = r###"[
  {
    "id": "2401.00001",
    "title": "Efficient Sparse Attention",
    "authors": ["Ada Lovelace", "Alan Turing", "Grace Hopper", "Edsger Dijkstra"],
    "publication_date": "2024-01-02",
    "abstract": "We propose a sparse attention mechanism.",
    "keywords": ["nlp", "transformers"],
    "source_url": "https://arxiv.org/abs/2401.00001",
    "processing_status": "completed",
    "simplified_text": "## What is it?\nA way to make models **faster**.\n- fewer comparisons\n- less memory\n\n1. read\n2. compare",
    "created_at": "2024-01-03T12:00:00Z"
  },
  {
    "id": "2402.00002",
    "title": "Quantum Routing",
    "authors": ["Barbara Liskov"],
    "publication_date": "2024-02-10",
    "abstract": "Routing on quantum networks.",
    "keywords": [],
    "source_url": "https://arxiv.org/abs/2402.00002",
    "processing_status": "pending"
  }
]"###;

/// Creates temporary directory containing an articles file.
///
/// # Returns
///
/// Temporary directory and path of the written articles file
///
/// # Errors
///
/// Returns error if directory creation or file write fails
pub fn create_articles_dir(json: &str) -> Result<(TempDir, PathBuf)> {
    let dir = TempDir::new()?;
    let input = write_file(dir.path(), "articles.json", json)?;
    Ok((dir, input))
}

/// Writes file under directory, creating parent directories as needed.
///
/// # Errors
///
/// Returns error if directory creation or file write fails
pub fn write_file(dir: &Path, path: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(path);
    if let Some(parent) = file_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&file_path, content)?;
    Ok(file_path)
}
