//! Interface layer
//! 命令行入口与交互式 REPL。

pub mod cli;
