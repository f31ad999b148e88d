//! # I18n Support Module / 国际化支持模块
//!
//! Locale selection for the user-facing messages. The translations live in
//! `locales/*.toml` and are compiled in by `rust_i18n::i18n!` in the crate root.
//!
//! 用户可见消息的区域设置选择。翻译位于 `locales/*.toml`，
//! 并通过 crate 根目录中的 `rust_i18n::i18n!` 编译进来。

use crate::infra::t;

/// The language used when nothing better matches / 没有更好匹配时使用的语言
pub const FALLBACK_LOCALE: &str = "en";

/// Picks the best available locale for `requested`.
///
/// It attempts to match the full locale (e.g., "zh-CN"), then just the
/// language code (e.g., "en" from "en-US"), and finally falls back to "en".
///
/// 为 `requested` 选择最佳可用区域设置。
/// 它首先尝试匹配完整区域设置（例如 "zh-CN"），然后仅匹配语言代码
/// （例如 "en-US" 中的 "en"），最后回退到 "en"。
pub fn resolve_locale(requested: &str, available: &[&str]) -> String {
    if available.contains(&requested) {
        return requested.to_string();
    }
    requested
        .split(['-', '_'])
        .next()
        .filter(|lang_code| available.contains(lang_code))
        .unwrap_or(FALLBACK_LOCALE)
        .to_string()
}

/// Returns every locale compiled into the binary / 返回编译进二进制文件的所有区域设置
pub fn available_locales() -> Vec<&'static str> {
    rust_i18n::available_locales!()
}

/// Detects the system locale, falling back to "en" if detection fails.
/// 检测系统区域设置，检测失败时回退到 "en"。
pub fn detect_locale() -> String {
    sys_locale::get_locale().unwrap_or_else(|| FALLBACK_LOCALE.to_string())
}

/// Initializes the application's locale from an explicit request or the system
/// locale, and returns the locale that was applied.
///
/// 根据显式请求或系统区域设置初始化应用程序的区域设置，并返回实际应用的区域设置。
pub fn init(requested: Option<&str>) -> String {
    let requested = requested.map_or_else(detect_locale, str::to_string);
    let locale = resolve_locale(&requested, &available_locales());
    rust_i18n::set_locale(&locale);
    locale
}

/// Looks up `key` in the given locale without touching the global locale.
/// 在给定区域设置中查找 `key`，不修改全局区域设置。
pub fn message(key: &str, locale: &str) -> String {
    t!(key, locale = locale).into_owned()
}
