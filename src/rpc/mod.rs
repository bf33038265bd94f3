//! # RPC服务层
//!
//! 定义`TensorService`的请求/响应消息与服务接口。
//! 传输层（见[`crate::server`]）只负责编解码，具体逻辑全部经由[`TensorService`]这一接口分发。

mod messages;
pub use self::messages::*;

use tracing::{debug, trace};

use crate::errors::Status;
use crate::tensor::{Tensor, check_tensor};


/// 服务名，同时作为各方法路径的前缀
pub const SERVICE_NAME: &str = "tensor.v1.TensorService";
pub const HEALTH_PATH: &str = "/tensor.v1.TensorService/Health";
pub const CHECK_TENSOR_PATH: &str = "/tensor.v1.TensorService/CheckTensor";

/// 张量服务接口。实现者须无状态或自行保证线程安全：每个请求可能在不同线程上并发调用。
pub trait TensorService: Send + Sync + 'static {
    /// 存活探测
    fn health(&self, request: HealthRequest) -> Result<HealthResponse, Status>;

    /// 校验请求中的张量，通过则原样返回
    fn check_tensor(&self, request: CheckTensorRequest) -> Result<Tensor, Status>;
}

/// 默认实现，不持有任何状态
#[derive(Debug, Clone, Copy, Default)]
pub struct TensorServer;

impl TensorService for TensorServer {
    fn health(&self, _request: HealthRequest) -> Result<HealthResponse, Status> {
        trace!("health check");
        Ok(HealthResponse::ok())
    }

    fn check_tensor(&self, request: CheckTensorRequest) -> Result<Tensor, Status> {
        check_tensor(request.tensor).map_err(|err| {
            debug!(error = %err, "rejected tensor");
            Status::from(err)
        })
    }
}
