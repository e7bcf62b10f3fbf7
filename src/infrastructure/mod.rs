//! Infrastructure layer
//! 控制台文本渲染与输出的具体实现。

pub mod adapters;
pub mod render;
