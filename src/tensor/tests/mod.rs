
use crate::errors::TensorError;

#[derive(Debug)]
struct TensorCheck {
    pub shape: Vec<i64>,
    pub values_len: usize,
    pub expected: Result<i64, TensorError>, // Ok里为形状对应的元素个数
}

impl TensorCheck {
    fn values(&self) -> Vec<f64> {
        (0..self.values_len).map(|i| i as f64).collect()
    }
}
