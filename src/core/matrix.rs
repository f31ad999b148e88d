//! # Matrix Entry Module / 矩阵条目模块
//!
//! Turns a discovered candidate plus its merged configuration into one job
//! descriptor of the CI matrix.
//!
//! 将已发现的候选项及其合并配置转换为 CI 矩阵中的一个作业描述。

use crate::core::config::{ResolvedConfig, TestConfig, load_overlay, merge};
use crate::core::discovery::{Candidate, Per, discover};
use crate::core::error::MatrixError;
use crate::infra::fs::{TEST_FILE_GLOB, dotted, to_slash};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Worker count used when `parallel` is on and no explicit count is given.
/// 当 `parallel` 开启且未给出显式数量时使用的工作进程数。
pub const DEFAULT_SHARD_COUNT: u64 = 4;

/// Flag that turns off the resource-usage monitor plugin / 关闭资源使用监控插件的标志
pub const DISABLE_MONITOR_FLAG: &str = "-p no:monitor";

/// One job of the CI matrix.
///
/// Fields are declared in alphabetical order so the serialized JSON object has
/// its keys sorted.
///
/// CI 矩阵中的一个作业。
/// 字段按字母顺序声明，因此序列化后的 JSON 对象的键是有序的。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatrixEntry {
    pub check_resource_usage: bool,
    pub checkout_blocks_and_plots: bool,
    pub disable_pytest_monitor: String,
    pub install_timelord: bool,
    pub job_timeout: u64,
    pub name: String,
    pub path: String,
    pub pytest_parallel_args: String,
}

/// Derives the shard directive.
///
/// An explicit `custom_parallel_n` always wins; otherwise `parallel` selects
/// between [`DEFAULT_SHARD_COUNT`] workers and no sharding.
///
/// 推导分片指令。显式的 `custom_parallel_n` 总是优先；
/// 否则由 `parallel` 在 [`DEFAULT_SHARD_COUNT`] 个工作进程和不分片之间选择。
pub fn shard_directive(custom_parallel_n: Option<u64>, parallel: bool) -> String {
    let workers = match custom_parallel_n {
        Some(n) => n,
        None if parallel => DEFAULT_SHARD_COUNT,
        None => 0,
    };
    format!("-n {workers}")
}

/// Returns the monitor-disabling flag, or an empty string when resource usage
/// is checked.
pub fn monitor_flag(check_resource_usage: bool) -> &'static str {
    if check_resource_usage {
        ""
    } else {
        DISABLE_MONITOR_FLAG
    }
}

/// The path argument handed to the test runner.
/// 传递给测试运行器的路径参数。
pub fn cli_path(candidate: &Candidate) -> String {
    let path = to_slash(&candidate.path);
    if candidate.is_dir() {
        format!("{path}/{TEST_FILE_GLOB}")
    } else {
        path
    }
}

/// Dotted display name: `a/b/test_c.py` becomes `a.b.test_c`.
///
/// The last extension is stripped for both kinds, so a directory `pkg/v1.2`
/// is named `pkg.v1`. The root renders as the empty string.
///
/// 点分显示名称：`a/b/test_c.py` 变为 `a.b.test_c`。
/// 两种候选项都会去掉最后一个扩展名，因此目录 `pkg/v1.2` 的名称为 `pkg.v1`。
pub fn display_name(candidate: &Candidate) -> String {
    dotted(&candidate.path.with_extension(""))
}

/// Builds the matrix entry of `candidate` from an already merged configuration.
/// 根据已合并的配置构建 `candidate` 的矩阵条目。
pub fn entry_from_config(
    candidate: &Candidate,
    config: &ResolvedConfig,
) -> Result<MatrixEntry, MatrixError> {
    let parallel = config.flag("parallel")?;
    let custom_parallel_n = config.optional_integer("custom_parallel_n")?;
    let check_resource_usage = config.flag("check_resource_usage")?;

    Ok(MatrixEntry {
        check_resource_usage,
        checkout_blocks_and_plots: config.flag("checkout_blocks_and_plots")?,
        disable_pytest_monitor: monitor_flag(check_resource_usage).to_string(),
        install_timelord: config.flag("install_timelord")?,
        job_timeout: config.integer("job_timeout")?,
        name: display_name(candidate),
        path: cli_path(candidate),
        pytest_parallel_args: shard_directive(custom_parallel_n, parallel),
    })
}

/// Resolves a single candidate: loads the overlay of its owning directory,
/// merges it over `defaults` and derives the matrix entry.
///
/// 解析单个候选项：加载其所属目录的覆盖配置，将其合并到 `defaults` 之上并推导矩阵条目。
pub fn resolve(
    candidate: &Candidate,
    root: &Path,
    defaults: &TestConfig,
) -> Result<MatrixEntry, MatrixError> {
    let overlay = load_overlay(&root.join(candidate.owning_dir()))?;
    let config = merge(defaults, overlay)?;
    entry_from_config(candidate, &config)
}

/// Discovers every candidate under `root` and resolves them in order.
/// 发现 `root` 下的所有候选项并按顺序解析它们。
pub fn build_matrix(
    per: Per,
    root: &Path,
    defaults: &TestConfig,
) -> Result<Vec<MatrixEntry>, MatrixError> {
    discover(per, root)?
        .iter()
        .map(|candidate| resolve(candidate, root, defaults))
        .collect()
}
