//! 控制台 Reporter 端口实现适配器。

use std::io::{self, IsTerminal};

use crate::application::ports::Reporter;

/// stdout 输出适配器。终端环境下错误行以红色显示。
pub struct ConsoleReporter {
    interactive: bool,
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleReporter {
    pub fn new() -> Self {
        Self {
            interactive: io::stdout().is_terminal(),
        }
    }
}

impl Reporter for ConsoleReporter {
    fn line(&self, text: &str) {
        println!("{text}");
    }

    fn error(&self, text: &str) {
        println!("{}", paint(text, "31", self.interactive));
    }
}

fn paint(text: &str, ansi: &str, interactive: bool) -> String {
    if interactive {
        format!("\x1b[{ansi}m{text}\x1b[0m")
    } else {
        text.to_string()
    }
}
