//! 自由文本到弧度数值组的解析。

use thiserror::Error;

const FULLWIDTH_COMMA: char = '，';

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("无法将 '{token}' 解析为数值")]
    Invalid { token: String },
    #[error("数值必须是有限数: '{token}'")]
    NonFinite { token: String },
}

/// 一行输入拆分为弧度值序列。
/// - 全角逗号视同 ASCII 逗号
/// - 连续的逗号/空白视为一个分隔符，首尾分隔符产生的空串被丢弃
/// - inf / NaN 被拒绝
pub fn parse_group(line: &str) -> Result<Vec<f64>, ParseError> {
    let cleaned = line.replace(FULLWIDTH_COMMA, ",");
    cleaned
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(parse_token)
        .collect()
}

fn parse_token(token: &str) -> Result<f64, ParseError> {
    let value: f64 = token.parse().map_err(|_| ParseError::Invalid {
        token: token.to_string(),
    })?;

    if !value.is_finite() {
        return Err(ParseError::NonFinite {
            token: token.to_string(),
        });
    }

    Ok(value)
}
