//! # Configuration Module / 配置模块
//!
//! Global defaults come from `testconfig.toml` at the test root (or built-in
//! values when that file is absent). Any directory may carry a `config.toml`
//! overlay whose keys win over the defaults for the candidates it owns.
//!
//! 全局默认值来自测试根目录下的 `testconfig.toml`（该文件不存在时使用内置值）。
//! 任何目录都可以包含一个 `config.toml` 覆盖文件，其键对该目录拥有的候选项优先于默认值。

use crate::core::error::MatrixError;
use crate::infra::t;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Name of the per-directory overlay file / 每个目录覆盖文件的名称
pub const OVERLAY_FILE_NAME: &str = "config.toml";
/// Name of the global defaults file at the test root / 测试根目录下全局默认文件的名称
pub const DEFAULTS_FILE_NAME: &str = "testconfig.toml";

/// Keys that must survive every merge / 每次合并后都必须存在的键
pub const REQUIRED_KEYS: [&str; 5] = [
    "parallel",
    "check_resource_usage",
    "job_timeout",
    "checkout_blocks_and_plots",
    "install_timelord",
];

/// A directory-local overlay: top-level keys of a `config.toml`.
/// 目录本地覆盖：`config.toml` 的顶层键。
pub type Overlay = Map<String, Value>;

/// The global default configuration, loaded once per run.
/// 全局默认配置，每次运行加载一次。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TestConfig {
    /// Shard the test run across workers / 将测试运行分片到多个工作进程
    pub parallel: bool,
    /// Explicit shard count; overrides `parallel` when set.
    /// 显式分片数量；设置后覆盖 `parallel`。
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_parallel_n: Option<u32>,
    /// Keep resource-usage monitoring enabled / 保持资源使用监控启用
    pub check_resource_usage: bool,
    /// Wall-clock budget of the CI job, in seconds / CI 作业的时间预算（秒）
    pub job_timeout: u64,
    /// The job needs the large block and plot fixtures / 作业需要大型区块和 plot 测试数据
    pub checkout_blocks_and_plots: bool,
    /// The job needs the timelord installed / 作业需要安装 timelord
    pub install_timelord: bool,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            parallel: false,
            custom_parallel_n: None,
            check_resource_usage: false,
            job_timeout: 30,
            checkout_blocks_and_plots: false,
            install_timelord: false,
        }
    }
}

impl TestConfig {
    /// Loads defaults from a TOML file. Keys missing from the file keep their
    /// built-in values.
    ///
    /// 从 TOML 文件加载默认值。文件中缺失的键保留其内置值。
    pub fn load(path: &Path) -> Result<Self, MatrixError> {
        let content = fs::read_to_string(path).map_err(|e| MatrixError::io(path, e))?;
        let config = toml::from_str(&content).map_err(|source| MatrixError::DefaultsParse {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("{}", t!("defaults_loaded", path = path.display()));
        Ok(config)
    }

    /// Like [`TestConfig::load`], but an absent file yields the built-in defaults.
    /// 与 [`TestConfig::load`] 相同，但文件不存在时返回内置默认值。
    pub fn load_or_default(path: &Path) -> Result<Self, MatrixError> {
        if path.is_file() {
            Self::load(path)
        } else {
            debug!("{}", t!("defaults_missing", path = path.display()));
            Ok(Self::default())
        }
    }

    /// The defaults as a flat key/value mapping. An unset `custom_parallel_n`
    /// is present as `null`.
    ///
    /// 以扁平键值映射表示的默认值。未设置的 `custom_parallel_n` 以 `null` 形式存在。
    pub fn to_map(&self) -> BTreeMap<String, Value> {
        let mut map = BTreeMap::new();
        map.insert("parallel".into(), Value::Bool(self.parallel));
        map.insert(
            "custom_parallel_n".into(),
            self.custom_parallel_n.map_or(Value::Null, Value::from),
        );
        map.insert(
            "check_resource_usage".into(),
            Value::Bool(self.check_resource_usage),
        );
        map.insert("job_timeout".into(), Value::from(self.job_timeout));
        map.insert(
            "checkout_blocks_and_plots".into(),
            Value::Bool(self.checkout_blocks_and_plots),
        );
        map.insert("install_timelord".into(), Value::Bool(self.install_timelord));
        map
    }
}

/// Loads the overlay of `dir`, if it has one.
///
/// A missing `config.toml` is the normal case and yields `Ok(None)`. Keys
/// starting with `_` are private to the file and are dropped.
///
/// 加载 `dir` 的覆盖配置（如果存在）。
/// 缺少 `config.toml` 是正常情况，返回 `Ok(None)`。以 `_` 开头的键是文件私有的，会被丢弃。
pub fn load_overlay(dir: &Path) -> Result<Option<Overlay>, MatrixError> {
    let path = dir.join(OVERLAY_FILE_NAME);
    if !path.is_file() {
        return Ok(None);
    }

    let content = fs::read_to_string(&path).map_err(|e| MatrixError::io(&path, e))?;
    let mut overlay: Overlay =
        toml::from_str(&content).map_err(|source| MatrixError::OverlayParse {
            path: path.clone(),
            source,
        })?;
    overlay.retain(|key, _| !key.starts_with('_'));

    debug!("{}", t!("overlay_loaded", path = path.display()));
    Ok(Some(overlay))
}

/// Merges an overlay over the defaults.
///
/// The merge is shallow: overlay keys are taken as-is, then every default key
/// the overlay does not define is copied in. Keys unknown to the defaults are
/// kept.
///
/// 将覆盖配置合并到默认值之上。
/// 合并是浅层的：覆盖键按原样保留，然后复制覆盖配置未定义的每个默认键。
/// 默认值中未知的键会被保留。
pub fn merge(
    defaults: &TestConfig,
    overlay: Option<Overlay>,
) -> Result<ResolvedConfig, MatrixError> {
    let mut values: BTreeMap<String, Value> = overlay.unwrap_or_default().into_iter().collect();
    for (key, value) in defaults.to_map() {
        values.entry(key).or_insert(value);
    }

    if let Some(missing) = REQUIRED_KEYS.iter().find(|key| !values.contains_key(**key)) {
        return Err(MatrixError::ConfigMerge {
            key: missing.to_string(),
        });
    }

    Ok(ResolvedConfig { values })
}

/// The merged configuration of one candidate.
/// 单个候选项的合并配置。
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    values: BTreeMap<String, Value>,
}

impl ResolvedConfig {
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    fn require(&self, key: &str) -> Result<&Value, MatrixError> {
        self.get(key).ok_or_else(|| MatrixError::ConfigMerge {
            key: key.to_string(),
        })
    }

    /// Reads a boolean option / 读取布尔选项
    pub fn flag(&self, key: &str) -> Result<bool, MatrixError> {
        self.require(key)?
            .as_bool()
            .ok_or_else(|| invalid(key, "a boolean"))
    }

    /// Reads a non-negative integer option / 读取非负整数选项
    pub fn integer(&self, key: &str) -> Result<u64, MatrixError> {
        self.require(key)?
            .as_u64()
            .ok_or_else(|| invalid(key, "a non-negative integer"))
    }

    /// Reads an integer option that may be absent or `null`.
    /// 读取可能不存在或为 `null` 的整数选项。
    pub fn optional_integer(&self, key: &str) -> Result<Option<u64>, MatrixError> {
        match self.get(key) {
            None | Some(Value::Null) => Ok(None),
            Some(value) => value
                .as_u64()
                .map(Some)
                .ok_or_else(|| invalid(key, "a non-negative integer")),
        }
    }
}

fn invalid(key: &str, expected: &'static str) -> MatrixError {
    MatrixError::InvalidValue {
        key: key.to_string(),
        expected,
    }
}
