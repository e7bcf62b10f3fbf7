//! CLI 接口模块集合。
//! 参数解析/REPL/行输入/组装集中在同一命名空间管理。

pub mod command;
pub mod composition;
pub mod repl;
pub mod repl_input;

pub use command::Cli;
pub use composition::AppComposition;
pub use repl::run_repl;
