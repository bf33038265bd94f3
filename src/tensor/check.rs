use super::{Tensor, element_count};
use crate::errors::TensorError;

impl Tensor {
    /// 校验`values`的个数是否等于`shape`各维度之乘积。
    /// 形状检查先于个数比较：空形状总是`MissingShape`，即便`values`同样为空。
    /// 校验通过则原样返回自身。
    pub fn check(self) -> Result<Self, TensorError> {
        let expected = element_count(&self.shape)?;
        // 长度不可能真正超出i64，饱和处理只为避免`as`截断
        let got = i64::try_from(self.values.len()).unwrap_or(i64::MAX);
        if got != expected {
            return Err(TensorError::ValueCountMismatch { got, expected });
        }
        Ok(self)
    }
}

/// `CheckTensor`的核心：请求里可能没有张量（`None`），此时返回`MissingTensor`；
/// 否则交由[`Tensor::check`]。纯函数，无副作用，可被任意多个请求并发调用。
pub fn check_tensor(tensor: Option<Tensor>) -> Result<Tensor, TensorError> {
    tensor.ok_or(TensorError::MissingTensor)?.check()
}
