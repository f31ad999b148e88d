//! # Defaults Initialization Module / 默认配置初始化模块
//!
//! This module writes a `testconfig.toml` at the test root, either with the
//! built-in defaults or with values collected by an interactive wizard.
//!
//! 此模块在测试根目录下写入 `testconfig.toml`，
//! 内容为内置默认值或通过交互式向导收集的值。
//!
//! ## Features / 功能特性
//!
//! - **Interactive Wizard**: One prompt per option, pre-filled with the built-in value
//! - **Overwrite Protection**: Confirmation prompt before replacing an existing file
//!
//! - **交互式向导**: 每个选项一个提示，预填内置值
//! - **覆盖保护**: 替换现有文件前的确认提示

use anyhow::{Context, Result, bail};
use colored::*;
use dialoguer::{Confirm, Input, theme::ColorfulTheme};
use std::fs;
use std::path::Path;

use crate::core::config::{DEFAULTS_FILE_NAME, TestConfig};
use crate::infra::i18n::message;
use crate::infra::t;

/// Runs the wizard (or its non-interactive shortcut) for the given test root.
///
/// In non-interactive mode an existing file is never replaced.
///
/// 为给定的测试根目录运行向导（或其非交互式快捷方式）。
/// 在非交互模式下，永远不会替换现有文件。
pub fn run_init_wizard(root: &Path, non_interactive: bool, language: &str) -> Result<()> {
    let config_path = root.join(DEFAULTS_FILE_NAME);
    let theme = ColorfulTheme::default();

    if non_interactive {
        if config_path.exists() {
            bail!(
                "{}",
                t!("init_exists", locale = language, path = config_path.display())
            );
        }
        return write_config(&config_path, &TestConfig::default(), language);
    }

    println!("\n{}", message("init_wizard_welcome", language).cyan().bold());
    println!("{}", message("init_wizard_description", language));

    if config_path.exists() {
        let confirmation = Confirm::with_theme(&theme)
            .with_prompt(t!(
                "init_overwrite_prompt",
                locale = language,
                path = config_path.display()
            ))
            .default(false)
            .interact()
            .context(message("init_user_confirmation_failed", language))?;
        if !confirmation {
            println!("{}", message("init_aborted", language));
            return Ok(());
        }
    }

    let config = prompt_config(&theme, language)?;
    write_config(&config_path, &config, language)
}

fn prompt_config(theme: &ColorfulTheme, language: &str) -> Result<TestConfig> {
    let baseline = TestConfig::default();
    let failed = || message("init_user_confirmation_failed", language);

    let parallel = Confirm::with_theme(theme)
        .with_prompt(message("init_parallel_prompt", language))
        .default(baseline.parallel)
        .interact()
        .with_context(failed)?;

    let custom_parallel_n: String = Input::with_theme(theme)
        .with_prompt(message("init_custom_parallel_prompt", language))
        .allow_empty(true)
        .validate_with(|input: &String| -> Result<(), String> {
            let trimmed = input.trim();
            if trimmed.is_empty() || trimmed.parse::<u32>().is_ok() {
                Ok(())
            } else {
                Err(message("init_custom_parallel_invalid", language))
            }
        })
        .interact_text()
        .with_context(failed)?;
    let custom_parallel_n = match custom_parallel_n.trim() {
        "" => None,
        value => Some(value.parse::<u32>()?),
    };

    let check_resource_usage = Confirm::with_theme(theme)
        .with_prompt(message("init_check_resource_usage_prompt", language))
        .default(baseline.check_resource_usage)
        .interact()
        .with_context(failed)?;

    let job_timeout: u64 = Input::with_theme(theme)
        .with_prompt(message("init_job_timeout_prompt", language))
        .default(baseline.job_timeout)
        .interact_text()
        .with_context(failed)?;

    let checkout_blocks_and_plots = Confirm::with_theme(theme)
        .with_prompt(message("init_checkout_blocks_and_plots_prompt", language))
        .default(baseline.checkout_blocks_and_plots)
        .interact()
        .with_context(failed)?;

    let install_timelord = Confirm::with_theme(theme)
        .with_prompt(message("init_install_timelord_prompt", language))
        .default(baseline.install_timelord)
        .interact()
        .with_context(failed)?;

    Ok(TestConfig {
        parallel,
        custom_parallel_n,
        check_resource_usage,
        job_timeout,
        checkout_blocks_and_plots,
        install_timelord,
    })
}

/// Serializes `config` the way it is written to `testconfig.toml`.
/// 按写入 `testconfig.toml` 的方式序列化 `config`。
pub fn render_config(config: &TestConfig) -> Result<String> {
    let body = toml::to_string_pretty(config)?;
    Ok(format!(
        "# Global defaults for build-job-matrix.\n# Any directory may override them with a config.toml.\n\n{body}"
    ))
}

fn write_config(path: &Path, config: &TestConfig, language: &str) -> Result<()> {
    let content = render_config(config)
        .context(message("init_serialize_failed", language))?;

    fs::write(path, content).with_context(|| {
        t!("init_write_failed", locale = language, path = path.display()).to_string()
    })?;

    println!(
        "\n{} {}",
        "✔".green(),
        t!("init_success_created", locale = language, path = path.display()).bold()
    );
    println!("{}", message("init_usage_hint", language));

    Ok(())
}
