use thiserror::Error;
mod status;
pub use self::status::*;

/// 张量结构校验失败的原因。消息文本即对外返回的错误信息，需与既有客户端保持一致。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TensorError {
    // 请求中未携带张量
    #[error("tensor is required")]
    MissingTensor,
    // 形状为空
    #[error("shape is required")]
    MissingShape,
    #[error("shape[{index}] must be > 0")]
    InvalidDimension { index: usize },
    #[error("shape product overflow")]
    ShapeOverflow,
    #[error("invalid tensor: got {got} values, expected {expected} from shape")]
    ValueCountMismatch { got: i64, expected: i64 },
}
