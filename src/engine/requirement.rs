// ==========================================
// 保温参考与估算引擎 - 要求串格式化
// ==========================================
// 语法: "NR" | "R-<int>" | "R-<int>ci" | "R-<int>+<int>ci"
// 红线: 只做文本解析,不匹配语法时全部返回 None,不报错
// ==========================================

use crate::i18n::{t, t_with_args};
use serde::Serialize;

/// 解析后的要求串
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ParsedRequirement {
    /// 空腔保温 R 值
    pub cavity: Option<u32>,
    /// 连续保温 R 值
    pub continuous: Option<u32>,
    /// "NR": 无法定最低值
    pub is_not_required: bool,
}

impl ParsedRequirement {
    pub fn not_required() -> Self {
        Self {
            is_not_required: true,
            ..Self::default()
        }
    }

    /// 是否为无法识别的要求串
    pub fn is_malformed(&self) -> bool {
        !self.is_not_required && self.cavity.is_none() && self.continuous.is_none()
    }

    /// 名义 R 值: NR 为 0,否则取串中第一个整数
    pub fn nominal(&self) -> Option<u32> {
        if self.is_not_required {
            return Some(0);
        }
        self.cavity.or(self.continuous)
    }

    /// 空腔 + 连续保温合计
    pub fn total(&self) -> Option<u32> {
        if self.is_not_required {
            return Some(0);
        }
        match (self.cavity, self.continuous) {
            (None, None) => None,
            (cavity, continuous) => Some(cavity.unwrap_or(0) + continuous.unwrap_or(0)),
        }
    }
}

/// 解析要求串
///
/// # 示例
/// - "NR"        → is_not_required
/// - "R-30"      → cavity 30
/// - "R-10ci"    → continuous 10
/// - "R-20+5ci"  → cavity 20, continuous 5
pub fn parse_requirement(raw: &str) -> ParsedRequirement {
    let s = raw.trim();
    if s == "NR" {
        return ParsedRequirement::not_required();
    }

    let Some(body) = s.strip_prefix("R-") else {
        return ParsedRequirement::default();
    };

    if let Some((cavity, rest)) = body.split_once('+') {
        let continuous = rest.strip_suffix("ci").and_then(parse_int);
        return match (parse_int(cavity), continuous) {
            (Some(cavity), Some(continuous)) => ParsedRequirement {
                cavity: Some(cavity),
                continuous: Some(continuous),
                is_not_required: false,
            },
            _ => ParsedRequirement::default(),
        };
    }

    if let Some(value) = body.strip_suffix("ci") {
        return ParsedRequirement {
            continuous: parse_int(value),
            ..ParsedRequirement::default()
        };
    }

    ParsedRequirement {
        cavity: parse_int(body),
        ..ParsedRequirement::default()
    }
}

fn parse_int(s: &str) -> Option<u32> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

/// 要求串 → 展示文本;无法识别时原样返回
pub fn format_requirement(raw: &str) -> String {
    let parsed = parse_requirement(raw);
    if parsed.is_not_required {
        return t("requirement.not_required");
    }
    match (parsed.cavity, parsed.continuous) {
        (Some(cavity), Some(continuous)) => t_with_args(
            "requirement.cavity_plus_continuous",
            &[
                ("cavity", &cavity.to_string()),
                ("continuous", &continuous.to_string()),
            ],
        ),
        (Some(cavity), None) => {
            t_with_args("requirement.cavity", &[("value", &cavity.to_string())])
        }
        (None, Some(continuous)) => {
            t_with_args("requirement.continuous", &[("value", &continuous.to_string())])
        }
        (None, None) => raw.to_string(),
    }
}

/// 部位键 → 展示名;未知键原样返回
pub fn format_location_label(key: &str) -> String {
    let i18n_key = format!("location.{}", key);
    let label = t(&i18n_key);
    // rust-i18n 缺键时返回键本身(旧版本带 locale 前缀)
    if label.ends_with(&i18n_key) {
        key.to_string()
    } else {
        label
    }
}
