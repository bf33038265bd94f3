//! # Tensor Service
//!
//! 一个极简的张量形状校验服务：`Health`用于存活探测，`CheckTensor`校验张量的数值个数
//! 是否等于其形状各维度之乘积（同时检查非正维度与i64乘积溢出）。
//! 服务只做结构校验，从不读取数值本身。
//!
//! - 核心逻辑见[`tensor::check_tensor`]；
//! - 服务接口见[`rpc::TensorService`]；
//! - HTTP/JSON 传输层见[`server`]，客户端见[`client`]。
//!

pub mod client;
pub mod errors;
pub mod rpc;
pub mod server;
pub mod tensor;
pub mod utils;
