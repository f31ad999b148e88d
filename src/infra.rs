//! # Infrastructure Module / 基础设施模块
//!
//! This module provides infrastructure services for the job matrix generator,
//! including file system helpers, logging set-up and i18n support.
//!
//! 此模块为作业矩阵生成器提供基础设施服务，
//! 包括文件系统辅助函数、日志设置和国际化支持。

pub mod fs;
pub mod i18n;
pub mod logging;

// Re-export i18n functions for easier access
pub use rust_i18n::t;
