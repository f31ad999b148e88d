// Shared test helpers for integration tests
#![allow(dead_code)]

use job_matrix::discovery::Candidate;
use std::fs;
use std::path::Path;
use tempfile::{TempDir, tempdir};

/// Creates a temporary test root containing the given files (parents included).
/// Paths are relative and `/`-separated; every file is created empty.
///
/// 创建包含给定文件（包括父目录）的临时测试根目录。
pub fn create_tree(files: &[&str]) -> TempDir {
    let temp_dir = tempdir().expect("Failed to create temporary directory");
    for file in files {
        write_file(temp_dir.path(), file, "");
    }
    temp_dir
}

/// Writes `content` to `root/relative`, creating parent directories.
pub fn write_file(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("Failed to create parent directory");
    }
    fs::write(&path, content).expect("Failed to write file");
}

/// Writes a `config.toml` overlay into `dir` (relative to the root, `""` for the root).
pub fn write_overlay(root: &Path, dir: &str, content: &str) {
    let relative = if dir.is_empty() {
        "config.toml".to_string()
    } else {
        format!("{dir}/config.toml")
    };
    write_file(root, &relative, content);
}

/// Renders candidate paths with `/` separators for easy comparison.
pub fn candidate_paths(candidates: &[Candidate]) -> Vec<String> {
    candidates
        .iter()
        .map(|c| {
            c.path
                .components()
                .map(|part| part.as_os_str().to_string_lossy().into_owned())
                .collect::<Vec<_>>()
                .join("/")
        })
        .collect()
}

/// A small repository layout shared by several tests:
///
/// ```text
/// root/
/// ├── test_root.py
/// ├── blockchain/
/// │   ├── test_blocks.py
/// │   ├── test_mempool.py
/// │   └── helpers.py
/// ├── core/
/// │   ├── conftest.py
/// │   └── util/
/// │       └── test_bits.py
/// ├── _private/
/// │   └── test_hidden.py
/// └── .cache/
///     └── test_cached.py
/// ```
pub fn create_sample_repo() -> TempDir {
    create_tree(&[
        "test_root.py",
        "blockchain/test_blocks.py",
        "blockchain/test_mempool.py",
        "blockchain/helpers.py",
        "core/conftest.py",
        "core/util/test_bits.py",
        "_private/test_hidden.py",
        ".cache/test_cached.py",
    ])
}
