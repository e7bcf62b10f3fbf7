//! Domain layer
//! 角度归一化、输入解析与比较规则，不依赖任何外部 I/O。

pub mod angle;
pub mod comparison;
pub mod input;
