//! # Generate Command Module / 生成命令模块
//!
//! This module implements the default command of `build-job-matrix`: discover
//! the candidates below the test root, resolve their configuration and print
//! the matrix as a single line of JSON on stdout.
//!
//! 此模块实现 `build-job-matrix` 的默认命令：发现测试根目录下的候选项，
//! 解析其配置，并在标准输出上以单行 JSON 打印矩阵。

use anyhow::{Context, Result, bail};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::{
    core::{
        config::{DEFAULTS_FILE_NAME, TestConfig},
        discovery::Per,
        matrix::{MatrixEntry, build_matrix},
    },
    infra::{
        fs::{absolute_path, is_directory},
        t,
    },
};

/// Options of a single `generate` run / 单次 `generate` 运行的选项
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Directory or file selection / 目录或文件选择
    pub per: Per,
    /// The test root / 测试根目录
    pub root: PathBuf,
    /// Explicit defaults file; must exist when given.
    /// 显式指定的默认配置文件；指定时必须存在。
    pub defaults: Option<PathBuf>,
    /// Log the pretty-printed matrix / 记录格式化后的矩阵
    pub verbose: bool,
}

/// Executes the generate command and prints the matrix to stdout.
///
/// # Returns
/// A Result indicating success or failure of the command execution
pub fn execute(options: &GenerateOptions) -> Result<()> {
    let json = render_matrix(options)?;
    println!("{json}");
    Ok(())
}

/// Builds the matrix and returns it as compact JSON.
/// 构建矩阵并以紧凑 JSON 形式返回。
pub fn render_matrix(options: &GenerateOptions) -> Result<String> {
    let entries = collect_entries(options)?;

    let json =
        serde_json::to_string(&entries).context(t!("matrix_serialize_failed").to_string())?;

    if options.verbose {
        let pretty = serde_json::to_string_pretty(&entries)
            .context(t!("matrix_serialize_failed").to_string())?;
        for line in pretty.lines() {
            info!("{line}");
        }
    }
    info!(
        "{}",
        t!("matrix_generated", count = entries.len(), per = options.per)
    );

    Ok(json)
}

/// Loads the defaults and resolves every candidate below the root.
/// 加载默认值并解析根目录下的每个候选项。
pub fn collect_entries(options: &GenerateOptions) -> Result<Vec<MatrixEntry>> {
    let root = absolute_path(&options.root)
        .with_context(|| t!("root_not_found", path = options.root.display()).to_string())?;
    if !is_directory(&root) {
        bail!("{}", t!("root_not_directory", path = root.display()));
    }

    let defaults = load_defaults(&root, options.defaults.as_ref())?;

    build_matrix(options.per, &root, &defaults)
        .with_context(|| t!("matrix_build_failed", path = root.display()).to_string())
}

fn load_defaults(root: &Path, explicit: Option<&PathBuf>) -> Result<TestConfig> {
    let config = match explicit {
        Some(path) => TestConfig::load(path),
        None => TestConfig::load_or_default(&root.join(DEFAULTS_FILE_NAME)),
    };
    config.context(t!("defaults_load_failed").to_string())
}
