//! 角度计算交互式 REPL。

use anyhow::Result;
use tracing::debug;

use crate::application::error::IterationError;
use crate::application::usecases::compare_angles::IterationOutcome;
use crate::interface::cli::composition::AppComposition;

const EXIT_KEYWORD: &str = "exit";

/// 逐轮读取输入直到 `exit` 或输入结束。单轮错误只报告，不终止循环。
pub fn run_repl(composition: &AppComposition) -> Result<()> {
    let renderer = composition.renderer();
    let reporter = composition.reporter();

    for line in renderer.banner() {
        reporter.line(&line);
    }

    loop {
        let Some(raw_input) = composition.reader().read_line(renderer.first_prompt())? else {
            debug!("input closed at first prompt");
            break;
        };
        let input = raw_input.trim();
        if input.eq_ignore_ascii_case(EXIT_KEYWORD) {
            break;
        }

        match composition.compare_angles_usecase().execute(input) {
            Ok(IterationOutcome::Completed) => reporter.line(&renderer.separator()),
            Ok(IterationOutcome::PairReported) => {}
            Ok(IterationOutcome::EndOfInput) => break,
            Err(err @ IterationError::CountMismatch(mismatch)) => {
                debug!(
                    first = mismatch.first,
                    second = mismatch.second,
                    "group sizes differ"
                );
                reporter.error(&renderer.render_error(&err));
            }
            Err(err) => {
                debug!(error = %err, "iteration failed");
                reporter.error(&renderer.render_error(&err));
                reporter.line(&renderer.separator());
            }
        }
    }

    Ok(())
}
