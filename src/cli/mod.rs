//! CLI 支持模块
//!
//! 命令行结果渲染

mod printer;

pub use printer::Printer;
