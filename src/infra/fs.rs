//! # File System Helpers Module / 文件系统辅助模块
//!
//! This module holds the naming conventions used during discovery: which file
//! names count as test sources, which path segments are private, and how a
//! relative path is rendered for the CI system.
//!
//! 此模块包含发现过程中使用的命名约定：哪些文件名算作测试源文件、
//! 哪些路径段是私有的，以及相对路径如何呈现给 CI 系统。

use anyhow::{Context, Result};
use std::fs;
use std::path::{Component, Path, PathBuf};

/// File name prefix of a test source file / 测试源文件的文件名前缀
pub const TEST_FILE_PREFIX: &str = "test_";
/// File name suffix of a test source file / 测试源文件的文件名后缀
pub const TEST_FILE_SUFFIX: &str = ".py";
/// Glob handed to the test runner for directory candidates / 传递给测试运行器的目录候选项通配符
pub const TEST_FILE_GLOB: &str = "test_*.py";
/// Leading characters that mark a path segment as hidden or private.
/// 将路径段标记为隐藏或私有的前导字符。
pub const EXCLUDED_PREFIXES: [char; 2] = ['_', '.'];

/// Returns `true` if `name` follows the `test_*.py` convention.
///
/// # Examples / 示例
/// ```
/// use job_matrix::infra::fs::is_test_file_name;
///
/// assert!(is_test_file_name("test_blocks.py"));
/// assert!(!is_test_file_name("conftest.py"));
/// assert!(!is_test_file_name("test_blocks.pyc"));
/// ```
pub fn is_test_file_name(name: &str) -> bool {
    name.len() >= TEST_FILE_PREFIX.len() + TEST_FILE_SUFFIX.len()
        && name.starts_with(TEST_FILE_PREFIX)
        && name.ends_with(TEST_FILE_SUFFIX)
}

/// Returns `true` if a single path segment starts with `_` or `.`.
/// 如果单个路径段以 `_` 或 `.` 开头，则返回 `true`。
pub fn is_excluded_segment(segment: &str) -> bool {
    segment.starts_with(EXCLUDED_PREFIXES)
}

/// Returns `true` if any normal segment of `relative` is excluded.
///
/// The check is applied to paths relative to the test root, so the location of
/// the root itself never hides its contents.
///
/// 如果 `relative` 的任何普通路径段被排除，则返回 `true`。
/// 该检查作用于相对测试根目录的路径，因此根目录本身的位置不会隐藏其内容。
pub fn is_excluded_path(relative: &Path) -> bool {
    relative.components().any(|component| match component {
        Component::Normal(segment) => is_excluded_segment(&segment.to_string_lossy()),
        _ => false,
    })
}

/// Checks (non-recursively) whether `dir` directly contains a test source file.
/// 检查（非递归）`dir` 是否直接包含测试源文件。
pub fn has_direct_test_file(dir: &Path) -> std::io::Result<bool> {
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let is_match = entry
            .file_name()
            .to_str()
            .is_some_and(is_test_file_name);
        if is_match && entry.path().is_file() {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Renders a relative path with `/` separators on every platform.
/// The empty path (the test root itself) renders as `.`.
///
/// 在所有平台上使用 `/` 分隔符呈现相对路径。
/// 空路径（测试根目录本身）呈现为 `.`。
pub fn to_slash(relative: &Path) -> String {
    let segments = normal_segments(relative);
    if segments.is_empty() {
        ".".to_string()
    } else {
        segments.join("/")
    }
}

/// Joins the normal segments of `relative` with `.`.
/// 使用 `.` 连接 `relative` 的普通路径段。
pub fn dotted(relative: &Path) -> String {
    normal_segments(relative).join(".")
}

fn normal_segments(relative: &Path) -> Vec<String> {
    relative
        .components()
        .filter_map(|component| match component {
            Component::Normal(segment) => Some(segment.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect()
}

/// Checks if a path exists and is a directory.
///
/// # Arguments
/// * `path` - Path to check
///
/// # Returns
/// `true` if the path exists and is a directory, `false` otherwise
pub fn is_directory(path: &Path) -> bool {
    path.exists() && path.is_dir()
}

/// Gets the absolute path from a potentially relative path.
///
/// # Arguments
/// * `path` - Path to canonicalize
///
/// # Returns
/// Canonicalized absolute path, or an error if the path doesn't exist
pub fn absolute_path(path: &Path) -> Result<PathBuf> {
    fs::canonicalize(path).with_context(|| format!("Failed to resolve path: {}", path.display()))
}
