//! # Error Module / 错误模块
//!
//! Domain errors raised while discovering candidates and resolving their
//! configuration. The CLI layer wraps these in `anyhow` with extra context.
//!
//! 发现候选项和解析其配置时产生的领域错误。
//! CLI 层使用 `anyhow` 包装这些错误并附加上下文。

use std::path::PathBuf;
use thiserror::Error;

/// Errors produced by discovery and configuration resolution.
/// 发现和配置解析过程中产生的错误。
#[derive(Error, Debug)]
pub enum MatrixError {
    /// The selection mode was neither `directory` nor `file`.
    /// 选择模式既不是 `directory` 也不是 `file`。
    #[error("Unrecognized per: {0:?} (expected \"directory\" or \"file\")")]
    InvalidMode(String),

    /// A required default key is missing from the merged configuration.
    /// 合并后的配置中缺少必需的默认键。
    #[error("Required configuration key `{key}` is missing after merge")]
    ConfigMerge { key: String },

    /// A configuration value has the wrong type for the field that reads it.
    /// 配置值的类型与读取它的字段不匹配。
    #[error("Configuration key `{key}` must be {expected}")]
    InvalidValue { key: String, expected: &'static str },

    #[error("Failed to parse directory config {}", path.display())]
    OverlayParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to parse default config {}", path.display())]
    DefaultsParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to access {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl MatrixError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        MatrixError::Io {
            path: path.into(),
            source,
        }
    }
}
