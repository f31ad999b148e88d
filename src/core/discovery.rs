//! # Test Discovery Module / 测试发现模块
//!
//! This module walks the test root and collects the candidates that become
//! matrix entries: either every test source file, or every directory that
//! directly contains at least one test source file. Hidden and private paths
//! (any segment starting with `_` or `.`) are never reported.
//!
//! 此模块遍历测试根目录并收集将成为矩阵条目的候选项：
//! 要么是每个测试源文件，要么是直接包含至少一个测试源文件的每个目录。
//! 隐藏和私有路径（任何以 `_` 或 `.` 开头的路径段）永远不会被报告。

use crate::core::error::MatrixError;
use crate::infra::fs::{
    has_direct_test_file, is_excluded_path, is_excluded_segment, is_test_file_name, to_slash,
};
use crate::infra::t;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::debug;

/// Selects what a single matrix entry covers.
/// 选择单个矩阵条目覆盖的范围。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Per {
    /// One entry per directory holding test files / 每个包含测试文件的目录一个条目
    Directory,
    /// One entry per test file / 每个测试文件一个条目
    File,
}

impl Per {
    /// Every accepted spelling, in the order shown by `--help`.
    /// 所有可接受的写法，按 `--help` 中显示的顺序排列。
    pub const NAMES: [&'static str; 2] = ["directory", "file"];

    pub fn as_str(self) -> &'static str {
        match self {
            Per::Directory => "directory",
            Per::File => "file",
        }
    }
}

impl FromStr for Per {
    type Err = MatrixError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "directory" => Ok(Per::Directory),
            "file" => Ok(Per::File),
            other => Err(MatrixError::InvalidMode(other.to_string())),
        }
    }
}

impl fmt::Display for Per {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether a candidate is a directory or a single file.
/// 候选项是目录还是单个文件。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CandidateKind {
    Directory,
    File,
}

/// A discovered unit of test work, relative to the test root.
/// The root directory itself is represented by an empty path.
///
/// 一个已发现的测试工作单元，相对于测试根目录。
/// 根目录本身由空路径表示。
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Candidate {
    pub kind: CandidateKind,
    pub path: PathBuf,
}

impl Candidate {
    pub fn directory(path: impl Into<PathBuf>) -> Self {
        Self {
            kind: CandidateKind::Directory,
            path: path.into(),
        }
    }

    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self {
            kind: CandidateKind::File,
            path: path.into(),
        }
    }

    pub fn is_dir(&self) -> bool {
        self.kind == CandidateKind::Directory
    }

    /// The directory whose `config.toml` applies to this candidate, relative to the root.
    /// 其 `config.toml` 适用于此候选项的目录（相对于根目录）。
    pub fn owning_dir(&self) -> &Path {
        match self.kind {
            CandidateKind::Directory => &self.path,
            CandidateKind::File => self.path.parent().unwrap_or_else(|| Path::new("")),
        }
    }
}

/// Discovers the candidates below `root` for the given selection mode.
///
/// The result is sorted by path components, which makes the generated matrix
/// deterministic across runs and platforms. Any I/O error aborts the walk:
/// there is no partial result.
///
/// 为给定的选择模式发现 `root` 下的候选项。
/// 结果按路径组件排序，使生成的矩阵在多次运行和不同平台之间保持确定性。
/// 任何 I/O 错误都会中止遍历：不存在部分结果。
///
/// # Arguments / 参数
/// * `per` - Directory or file selection / 目录或文件选择
/// * `root` - The test root directory / 测试根目录
pub fn discover(per: Per, root: &Path) -> Result<Vec<Candidate>, MatrixError> {
    let mut candidates = Vec::new();
    walk(root, Path::new(""), per, &mut candidates)?;
    candidates.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(candidates)
}

fn walk(
    root: &Path,
    relative: &Path,
    per: Per,
    candidates: &mut Vec<Candidate>,
) -> Result<(), MatrixError> {
    let dir = root.join(relative);

    if per == Per::Directory {
        debug!("{}", t!("discovery_considering", path = to_slash(relative)));
        let has_tests = has_direct_test_file(&dir).map_err(|e| MatrixError::io(&dir, e))?;
        if has_tests {
            push(candidates, Candidate::directory(relative));
        } else {
            debug!("{}", t!("discovery_no_tests", path = to_slash(relative)));
        }
    }

    let entries = fs::read_dir(&dir).map_err(|e| MatrixError::io(&dir, e))?;
    for entry in entries {
        let entry = entry.map_err(|e| MatrixError::io(&dir, e))?;
        let file_name = entry.file_name();
        let name = file_name.to_string_lossy();
        if is_excluded_segment(&name) {
            continue;
        }

        let child = relative.join(&file_name);
        let file_type = entry
            .file_type()
            .map_err(|e| MatrixError::io(entry.path(), e))?;

        if file_type.is_dir() {
            walk(root, &child, per, candidates)?;
        } else if per == Per::File && is_test_file_name(&name) && entry.path().is_file() {
            push(candidates, Candidate::file(child));
        }
    }

    Ok(())
}

fn push(candidates: &mut Vec<Candidate>, candidate: Candidate) {
    debug_assert!(
        !is_excluded_path(&candidate.path),
        "excluded path reached discovery: {}",
        candidate.path.display()
    );
    candidates.push(candidate);
}
