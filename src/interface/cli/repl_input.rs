//! REPL 行输入处理器。
//! 终端环境下使用行内编辑器，输入时实时以颜色提示能否解析。

use std::env;
use std::io::{self, IsTerminal, Write};

use anyhow::Result;
use crossterm::cursor::{self, MoveToColumn};
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use crossterm::terminal::{self, ClearType};
use crossterm::{execute, queue};
use tracing::warn;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::application::ports::LineReader;
use crate::domain::input::parse_group;

const ELLIPSIS: &str = "...";

/// 标准输入行读取适配器。
/// - TTY + 支持的终端: 行内编辑 + 实时解析提示
/// - 非 TTY/不支持的终端: 普通行输入
pub struct TerminalLineReader;

impl LineReader for TerminalLineReader {
    fn read_line(&self, prompt: &str) -> Result<Option<String>> {
        if !supports_interactive_input() {
            return read_line_fallback(prompt);
        }

        match read_line_interactive(prompt) {
            Ok(v) => Ok(v),
            Err(err) => {
                warn!(error = %err, "interactive input failed, falling back to plain input");
                read_line_fallback(prompt)
            }
        }
    }
}

fn supports_interactive_input() -> bool {
    if !io::stdin().is_terminal() || !io::stdout().is_terminal() {
        return false;
    }

    // dumb 终端不使用控制序列
    if let Ok(term) = env::var("TERM")
        && term.eq_ignore_ascii_case("dumb")
    {
        return false;
    }

    true
}

fn read_line_fallback(prompt: &str) -> Result<Option<String>> {
    print!("{prompt}");
    io::stdout().flush()?;

    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

/// 按字符（而非字节）编辑的单行缓冲区。
#[derive(Debug, Default)]
struct LineBuffer {
    chars: Vec<char>,
    cursor: usize,
}

impl LineBuffer {
    fn insert(&mut self, ch: char) {
        self.chars.insert(self.cursor, ch);
        self.cursor += 1;
    }

    fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            self.chars.remove(self.cursor);
        }
    }

    fn delete(&mut self) {
        if self.cursor < self.chars.len() {
            self.chars.remove(self.cursor);
        }
    }

    fn move_by(&mut self, step: isize) {
        self.cursor = self
            .cursor
            .saturating_add_signed(step)
            .min(self.chars.len());
    }

    fn clear(&mut self) {
        self.chars.clear();
        self.cursor = 0;
    }

    fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    fn text(&self) -> String {
        self.chars.iter().collect()
    }

    fn width_before_cursor(&self) -> usize {
        chars_width(&self.chars[..self.cursor])
    }
}

fn read_line_interactive(prompt: &str) -> Result<Option<String>> {
    let mut stdout = io::stdout();
    let _raw = RawMode::enable()?;
    let mut line = LineBuffer::default();

    loop {
        render_line(&mut stdout, prompt, &line)?;

        let key = match event::read()? {
            Event::Paste(text) => {
                text.chars().filter(|c| !c.is_control()).for_each(|ch| line.insert(ch));
                continue;
            }
            Event::Key(key) if key.kind == KeyEventKind::Press => key,
            _ => continue,
        };
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Enter => {
                end_line(&mut stdout)?;
                return Ok(Some(line.text()));
            }
            KeyCode::Char('c') if ctrl => {
                end_line(&mut stdout)?;
                return Ok(None);
            }
            KeyCode::Char('d') if ctrl && line.is_empty() => {
                end_line(&mut stdout)?;
                return Ok(None);
            }
            KeyCode::Char('d') if ctrl => line.delete(),
            KeyCode::Char('u') if ctrl => line.clear(),
            KeyCode::Char(ch) if !ctrl && !key.modifiers.contains(KeyModifiers::ALT) => {
                line.insert(ch);
            }
            KeyCode::Backspace => line.backspace(),
            KeyCode::Delete => line.delete(),
            KeyCode::Left => line.move_by(-1),
            KeyCode::Right => line.move_by(1),
            KeyCode::Home => line.cursor = 0,
            KeyCode::End => line.cursor = line.chars.len(),
            _ => {}
        }
    }
}

/// 输入内容的实时颜色：可解析为绿色，解析失败为红色。
fn input_color(input: &str) -> Color {
    if input.trim().eq_ignore_ascii_case("exit") {
        return Color::Yellow;
    }
    match parse_group(input) {
        Ok(values) if values.is_empty() => Color::Reset,
        Ok(_) => Color::Green,
        Err(_) => Color::Red,
    }
}

fn render_line(stdout: &mut io::Stdout, prompt: &str, line: &LineBuffer) -> Result<()> {
    let (w, _) = terminal::size().unwrap_or((120, 40));
    let width = (w as usize).max(20);
    let prompt_width = UnicodeWidthStr::width(prompt);
    // 最后一列留给光标，避免自动换行
    let available = width.saturating_sub(prompt_width + 1);
    let (shown, clipped) = fit_tail(&line.chars, available);

    queue!(
        stdout,
        MoveToColumn(0),
        terminal::Clear(ClearType::CurrentLine),
        Print(prompt),
        SetForegroundColor(input_color(&line.text())),
        Print(&shown),
        ResetColor
    )?;

    // 被截断时只显示尾部，光标停在末尾
    let offset = if clipped {
        UnicodeWidthStr::width(shown.as_str())
    } else {
        line.width_before_cursor()
    };
    let col = (prompt_width + offset).min(width - 1);
    queue!(stdout, MoveToColumn(col as u16), cursor::Show)?;
    stdout.flush()?;
    Ok(())
}

fn end_line(stdout: &mut io::Stdout) -> Result<()> {
    // raw mode 下换行需要显式回车
    write!(stdout, "\r\n")?;
    stdout.flush()?;
    Ok(())
}

/// 截取能放进 `max_width` 列的尾部，超出时以 `...` 开头。返回是否被截断。
fn fit_tail(chars: &[char], max_width: usize) -> (String, bool) {
    if chars_width(chars) <= max_width {
        return (chars.iter().collect(), false);
    }

    let budget = max_width.saturating_sub(ELLIPSIS.len());
    let mut used = 0;
    let mut start = chars.len();
    while start > 0 {
        let cw = chars[start - 1].width().unwrap_or(0);
        if used + cw > budget {
            break;
        }
        used += cw;
        start -= 1;
    }

    let mut shown = ELLIPSIS[..ELLIPSIS.len().min(max_width)].to_string();
    shown.extend(&chars[start..]);
    (shown, true)
}

fn chars_width(chars: &[char]) -> usize {
    chars.iter().map(|c| c.width().unwrap_or(0)).sum()
}

/// raw mode 作用域；离开时恢复终端。
struct RawMode;

impl RawMode {
    fn enable() -> Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawMode {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
        let mut stdout = io::stdout();
        let _ = execute!(stdout, ResetColor, cursor::Show);
    }
}
