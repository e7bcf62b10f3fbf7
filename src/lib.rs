//! anglecalc library root.
//! 分层结构（domain / application / infrastructure / interface）对外公开。

use anyhow::Result;

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interface;

use interface::cli::{AppComposition, run_repl};

/// 以标准输入输出运行交互式会话。
pub fn run() -> Result<()> {
    let composition = AppComposition::default();
    run_repl(&composition)
}
