//! # Core Module / 核心模块
//!
//! This module contains the core functionality of the job matrix generator:
//! candidate discovery, configuration merging and matrix entry derivation.
//!
//! 此模块包含作业矩阵生成器的核心功能：
//! 候选项发现、配置合并和矩阵条目推导。

pub mod config;
pub mod discovery;
pub mod error;
pub mod matrix;

// Re-exports
pub use config::{ResolvedConfig, TestConfig};
pub use discovery::{Candidate, CandidateKind, Per, discover};
pub use error::MatrixError;
pub use matrix::{MatrixEntry, build_matrix, resolve};
