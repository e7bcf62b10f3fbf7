//! 报告渲染端口实现适配器。

use crate::application::error::IterationError;
use crate::application::ports::ReportRenderer;
use crate::domain::comparison::{GroupComparison, PairComparison};
use crate::infrastructure::render;

/// 纯文本控制台渲染器。
pub struct PlainTextRenderer;

impl ReportRenderer for PlainTextRenderer {
    fn banner(&self) -> Vec<String> {
        render::render_banner()
    }

    fn first_prompt(&self) -> &str {
        render::FIRST_PROMPT
    }

    fn second_prompt(&self) -> &str {
        render::SECOND_PROMPT
    }

    fn separator(&self) -> String {
        render::render_separator()
    }

    fn render_normalized(&self, degrees: &[f64]) -> String {
        render::render_normalized_line(degrees)
    }

    fn render_pair(&self, pair: &PairComparison) -> String {
        render::render_pair_line(pair)
    }

    fn render_groups(&self, comparison: &GroupComparison) -> Vec<String> {
        render::render_group_report(comparison)
    }

    fn render_error(&self, err: &IterationError) -> String {
        match err {
            IterationError::CountMismatch(mismatch) => {
                render::render_mismatch_line(&mismatch.to_string())
            }
            IterationError::Parse(parse) => render::render_input_error_line(&parse.to_string()),
            IterationError::Other(other) => render::render_input_error_line(&format!("{other:#}")),
        }
    }
}
