//! 一轮角度比较：解析第一组，按数量分支为单值/双值/多值流程。

use tracing::debug;

use crate::application::error::IterationError;
use crate::application::ports::{LineReader, ReportRenderer, Reporter};
use crate::domain::angle::normalize_group;
use crate::domain::comparison::{ComparisonLimits, compare_groups, compare_pair};
use crate::domain::input::parse_group;

/// 一轮处理结束后 REPL 应采取的动作。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IterationOutcome {
    /// 多值报告已输出，需要打印分隔线。
    Completed,
    /// 双值差值已输出，直接进入下一轮。
    PairReported,
    /// 第二组提示处输入结束。
    EndOfInput,
}

pub struct CompareAnglesUseCase<'a> {
    pub limits: ComparisonLimits,
    pub reader: &'a dyn LineReader,
    pub renderer: &'a dyn ReportRenderer,
    pub reporter: &'a dyn Reporter,
}

impl<'a> CompareAnglesUseCase<'a> {
    /// 以第一行输入执行一轮比较。需要第二组时通过 `reader` 读取。
    pub fn execute(&self, first_line: &str) -> Result<IterationOutcome, IterationError> {
        let first = parse_group(first_line)?;
        debug!(count = first.len(), "parsed first group");

        let degrees = normalize_group(&first);
        if !degrees.is_empty() {
            self.reporter.line(&self.renderer.render_normalized(&degrees));
        }

        if let [a, b] = first.as_slice() {
            let pair = compare_pair(*a, *b, &self.limits);
            debug!(difference = pair.difference, over_limit = pair.over_limit, "pair compared");
            self.reporter.line(&self.renderer.render_pair(&pair));
            return Ok(IterationOutcome::PairReported);
        }

        let Some(raw) = self.reader.read_line(self.renderer.second_prompt())? else {
            debug!("input closed at second prompt");
            return Ok(IterationOutcome::EndOfInput);
        };
        let second = parse_group(raw.trim())?;
        debug!(count = second.len(), "parsed second group");

        let comparison = compare_groups(&first, &second, &self.limits)?;
        for line in self.renderer.render_groups(&comparison) {
            self.reporter.line(&line);
        }

        Ok(IterationOutcome::Completed)
    }
}
