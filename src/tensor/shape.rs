use super::Tensor;
use crate::errors::TensorError;

impl Tensor {
    /// 声明的形状，如`[2, 3]`；未经校验时可能为空或含非正数
    pub fn shape(&self) -> &[i64] {
        &self.shape
    }

    /// 张量的维（dim）数，即`shape()`的元素个数
    pub fn dims(&self) -> usize {
        self.shape.len()
    }
}

/// 计算形状对应的元素个数（各维度之乘积）。
///
/// 从左到右逐维检查：遇到首个`<= 0`的维度即返回`InvalidDimension`；
/// 乘法之前先用除法判断`expected > i64::MAX / dim`，乘积超出i64范围时返回`ShapeOverflow`，
/// 因此永远不会得到回绕后的错误结果。空形状返回`MissingShape`。
pub fn element_count(shape: &[i64]) -> Result<i64, TensorError> {
    if shape.is_empty() {
        return Err(TensorError::MissingShape);
    }

    let mut expected: i64 = 1;
    for (index, &dim) in shape.iter().enumerate() {
        if dim <= 0 {
            return Err(TensorError::InvalidDimension { index });
        }
        // 须先判断再相乘
        if expected > i64::MAX / dim {
            return Err(TensorError::ShapeOverflow);
        }
        expected *= dim;
    }
    Ok(expected)
}
