use serde::{Deserialize, Serialize};

use crate::tensor::Tensor;

pub const HEALTH_OK: &str = "ok";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthRequest {}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    #[serde(default)]
    pub status: String,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: HEALTH_OK.to_string(),
        }
    }
}

/// `tensor`缺失或为`null`时即为“未携带张量”
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CheckTensorRequest {
    #[serde(default)]
    pub tensor: Option<Tensor>,
}

impl CheckTensorRequest {
    pub fn new(tensor: Tensor) -> Self {
        Self {
            tensor: Some(tensor),
        }
    }
}
