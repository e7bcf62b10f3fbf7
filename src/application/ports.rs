//! 应用层依赖的端口（抽象接口）集合。

use anyhow::Result;

use crate::application::error::IterationError;
use crate::domain::comparison::{GroupComparison, PairComparison};

/// 按提示读取一行输入的端口。输入结束（EOF）时返回 `None`。
pub trait LineReader: Send + Sync {
    fn read_line(&self, prompt: &str) -> Result<Option<String>>;
}

/// 控制台文本生成端口。
pub trait ReportRenderer: Send + Sync {
    fn banner(&self) -> Vec<String>;
    fn first_prompt(&self) -> &str;
    fn second_prompt(&self) -> &str;
    fn separator(&self) -> String;
    fn render_normalized(&self, degrees: &[f64]) -> String;
    fn render_pair(&self, pair: &PairComparison) -> String;
    fn render_groups(&self, comparison: &GroupComparison) -> Vec<String>;
    fn render_error(&self, err: &IterationError) -> String;
}

/// 控制台输出抽象端口。
pub trait Reporter: Send + Sync {
    fn line(&self, text: &str);
    fn error(&self, text: &str);
}
