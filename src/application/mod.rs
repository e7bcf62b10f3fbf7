//! Application layer
//! 单轮比较流程（用例）定义于此，通过端口（抽象接口）使用输入输出。

pub mod error;
pub mod ports;
pub mod usecases;
