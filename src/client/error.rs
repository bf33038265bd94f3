use thiserror::Error;

use crate::errors::Status;

#[derive(Debug, Error)]
pub enum ClientError {
    /// 服务端返回的错误状态
    #[error("RPC error: {0}")]
    Rpc(Status),

    /// 连接失败、超时等
    #[error("transport error: {0}")]
    Transport(String),

    /// 响应体无法解析
    #[error("decode error: {0}")]
    Decode(String),

    /// 命令行参数无法解析
    #[error("invalid argument {0}")]
    InvalidArgument(String),
}
