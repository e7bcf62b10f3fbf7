//! 控制台报告文本渲染模块。
//! 所有浮点数固定输出小数点后 6 位。

use crate::domain::comparison::{GroupComparison, PairComparison};

pub const BANNER_TITLE: &str = "角度计算工具 (输入'exit'退出)";
pub const FIRST_PROMPT: &str = "输入弧度值(多个用空格/逗号分隔): ";
pub const SECOND_PROMPT: &str = "第二组弧度值(与第一组数量相同): ";

const BANNER_RULE_WIDTH: usize = 35;
const SEPARATOR_WIDTH: usize = 40;

pub fn render_banner() -> Vec<String> {
    vec![BANNER_TITLE.to_string(), "-".repeat(BANNER_RULE_WIDTH)]
}

pub fn render_separator() -> String {
    "-".repeat(SEPARATOR_WIDTH)
}

/// `a, b, c` 形式，每项 6 位小数。
pub fn format_degrees(values: &[f64]) -> String {
    values
        .iter()
        .map(|v| format!("{v:.6}"))
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn render_normalized_line(degrees: &[f64]) -> String {
    format!("归一化角度: {}", format_degrees(degrees))
}

pub fn render_pair_line(pair: &PairComparison) -> String {
    format!(
        "角度差: {:.6}°, 是否超过±{}°: {}",
        pair.difference,
        pair.limit,
        display_bool(pair.over_limit)
    )
}

/// 多值比较的完整报告（结果块 + 越限警告或范围内确认）。
pub fn render_group_report(comparison: &GroupComparison) -> Vec<String> {
    let mut lines = vec![
        String::new(),
        "计算结果:".to_string(),
        format!("第一组角度: [{}]", format_degrees(&comparison.first)),
        format!("第二组角度: [{}]", format_degrees(&comparison.second)),
        format!("角度差异: [{}]", format_degrees(&comparison.differences)),
    ];

    if comparison.all_within_limit() {
        lines.push(format!("所有角度差均在±{}°范围内", comparison.limit));
    } else {
        let indices = comparison
            .over_limit_indices
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        lines.push(format!(
            "警告：以下位置角度差超过±{}°: {indices}",
            comparison.limit
        ));
    }

    lines
}

pub fn render_mismatch_line(message: &str) -> String {
    format!("错误：{message}")
}

pub fn render_input_error_line(message: &str) -> String {
    format!("输入错误: {message}")
}

// 控制台协议中布尔值输出为 True / False
fn display_bool(value: bool) -> &'static str {
    if value { "True" } else { "False" }
}
