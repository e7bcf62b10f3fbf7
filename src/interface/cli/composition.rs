//! 应用组装（composition root）模块。

use crate::application::ports::{LineReader, ReportRenderer, Reporter};
use crate::application::usecases::compare_angles::CompareAnglesUseCase;
use crate::domain::comparison::ComparisonLimits;
use crate::infrastructure::adapters::{ConsoleReporter, PlainTextRenderer};
use crate::interface::cli::repl_input::TerminalLineReader;

/// 运行时依赖集中组装的容器。
pub struct AppComposition {
    limits: ComparisonLimits,
    renderer: PlainTextRenderer,
    reader: Box<dyn LineReader>,
    reporter: Box<dyn Reporter>,
}

impl Default for AppComposition {
    fn default() -> Self {
        Self::with_io(Box::new(TerminalLineReader), Box::new(ConsoleReporter::new()))
    }
}

impl AppComposition {
    /// 从外部注入输入/输出适配器。
    pub fn with_io(reader: Box<dyn LineReader>, reporter: Box<dyn Reporter>) -> Self {
        Self {
            limits: ComparisonLimits::default(),
            renderer: PlainTextRenderer,
            reader,
            reporter,
        }
    }

    pub fn reader(&self) -> &dyn LineReader {
        self.reader.as_ref()
    }

    pub fn renderer(&self) -> &dyn ReportRenderer {
        &self.renderer
    }

    pub fn reporter(&self) -> &dyn Reporter {
        self.reporter.as_ref()
    }

    /// 单轮比较用例。
    pub fn compare_angles_usecase(&self) -> CompareAnglesUseCase<'_> {
        CompareAnglesUseCase {
            limits: self.limits,
            reader: self.reader.as_ref(),
            renderer: &self.renderer,
            reporter: self.reporter.as_ref(),
        }
    }
}
