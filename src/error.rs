//! 错误类型定义

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("顶点重复: {0}")]
    DuplicateVertex(String),

    #[error("边重复: {0}")]
    DuplicateEdge(String),

    #[error("边端点未在顶点集中声明: {0}")]
    UnknownEndpoint(String),

    #[error("顶点不存在: {0}")]
    VertexNotFound(String),

    #[error("导入错误: {0}")]
    ImportError(String),

    #[error("解析错误: {0}")]
    ParseError(String),

    #[error("IO 错误: {0}")]
    IoError(#[from] std::io::Error),

    #[error("序列化错误: {0}")]
    SerializationError(String),
}
