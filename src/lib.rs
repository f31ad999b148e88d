//! # Job Matrix Library / Job Matrix 库
//!
//! This library discovers test files or test directories below a test root,
//! merges each directory's `config.toml` overrides over the global defaults,
//! and produces the CI job matrix consumed by the `build-job-matrix` binary.
//!
//! 此库在测试根目录下发现测试文件或测试目录，
//! 将每个目录的 `config.toml` 覆盖项合并到全局默认值之上，
//! 并生成供 `build-job-matrix` 二进制文件使用的 CI 作业矩阵。
//!
//! ## Modules / 模块
//!
//! - `core` - Discovery, configuration merge and matrix entry derivation
//! - `infra` - File system helpers, logging and i18n support
//! - `commands` - The `generate` pipeline and the `init` wizard
//! - `cli` - Command-line interface
//!
//! - `core` - 发现、配置合并和矩阵条目推导
//! - `infra` - 文件系统辅助函数、日志和国际化支持
//! - `commands` - `generate` 流程和 `init` 向导
//! - `cli` - 命令行接口

pub mod cli;
pub mod commands;
pub mod core;
pub mod infra;

// Re-export commonly used items
pub use crate::core::config;
pub use crate::core::discovery;
pub use crate::core::matrix;

// Initialize i18n
rust_i18n::i18n!("locales", fallback = "en");
