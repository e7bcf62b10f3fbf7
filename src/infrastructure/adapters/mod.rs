//! 应用层端口到具体控制台实现的适配器。

mod report_renderer;
mod reporter;

pub use report_renderer::PlainTextRenderer;
pub use reporter::ConsoleReporter;
