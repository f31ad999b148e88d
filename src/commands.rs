//! # Commands Module / 命令模块
//!
//! - `generate` - Builds the job matrix and prints it as JSON
//! - `init` - Writes a `testconfig.toml` with the global defaults
//!
//! - `generate` - 构建作业矩阵并以 JSON 格式打印
//! - `init` - 写入包含全局默认值的 `testconfig.toml`

pub mod generate;
pub mod init;
