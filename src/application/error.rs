//! 单轮处理失败的分类。

use thiserror::Error;

use crate::domain::comparison::CountMismatch;
use crate::domain::input::ParseError;

/// 一轮输入处理中可恢复的错误。REPL 报告后继续下一轮。
#[derive(Debug, Error)]
pub enum IterationError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    CountMismatch(#[from] CountMismatch),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
