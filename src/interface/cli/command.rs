//! CLI 参数解析模块。

use clap::Parser;

/// 工具本身没有选项，仅提供 `--help` / `--version`。
#[derive(Debug, Parser)]
#[command(name = "anglecalc", version)]
#[command(about = "Normalize radian angles into [0°, 180°] and compare them interactively")]
pub struct Cli {}
