use serde::{Deserialize, Serialize};

mod check;
mod float_values;
mod shape;

pub use self::check::check_tensor;
pub use self::shape::element_count;

#[cfg(test)]
pub mod tests;

/// 定义张量的结构体：声明的形状`shape`加上按行展平后的数值`values`。
/// 注：本服务只校验结构，不做任何计算；校验通过的张量原样返回，不会被修改。
/// 序列化时缺失的字段按空序列处理（与proto3的repeated字段语义一致）；
/// NaN与无穷大按proto3 JSON的约定以字符串形式传输，见`float_values`。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Tensor {
    #[serde(default)]
    shape: Vec<i64>,
    #[serde(default, with = "float_values")]
    values: Vec<f64>,
}

impl Tensor {
    /// 创建一个张量，此时不做任何校验；
    /// 若要确认`values`的长度与`shape`中所有元素的乘积相等，请调用[`Tensor::check`]。
    pub fn new(values: &[f64], shape: &[i64]) -> Tensor {
        Tensor {
            shape: shape.to_vec(),
            values: values.to_vec(),
        }
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }
}
