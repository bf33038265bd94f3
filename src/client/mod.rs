//! # 客户端
//!
//! 同步（阻塞）客户端，供命令行工具与集成测试使用

mod error;
pub use self::error::ClientError;

use std::fmt::Display;
use std::str::FromStr;
use std::time::Duration;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::errors::Status;
use crate::rpc::{CHECK_TENSOR_PATH, CheckTensorRequest, HEALTH_PATH, HealthRequest, HealthResponse};
use crate::tensor::Tensor;


const TIMEOUT: Duration = Duration::from_secs(30);

pub struct TensorClient {
    base_url: String,
    agent: ureq::Agent,
}

impl TensorClient {
    /// `addr`可以是`host:port`，也可以是完整的`http://`地址
    pub fn new(addr: &str) -> Self {
        Self {
            base_url: base_url(addr),
            agent: ureq::AgentBuilder::new().timeout(TIMEOUT).build(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn health(&self) -> Result<HealthResponse, ClientError> {
        self.call(HEALTH_PATH, &HealthRequest::default())
    }

    pub fn check_tensor(&self, shape: &[i64], values: &[f64]) -> Result<Tensor, ClientError> {
        self.call(
            CHECK_TENSOR_PATH,
            &CheckTensorRequest::new(Tensor::new(values, shape)),
        )
    }

    /// 以JSON形式POST到`path`。服务端返回非2xx时，响应体按[`Status`]解析。
    pub fn call<Req, Resp>(&self, path: &str, request: &Req) -> Result<Resp, ClientError>
    where
        Req: Serialize,
        Resp: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "rpc call");

        match self.agent.post(&url).send_json(request) {
            Ok(response) => response
                .into_json::<Resp>()
                .map_err(|err| ClientError::Decode(err.to_string())),
            Err(ureq::Error::Status(code, response)) => {
                let body = response.into_string().unwrap_or_default();
                Err(ClientError::Rpc(status_from_body(code, &body)))
            }
            Err(err) => Err(ClientError::Transport(err.to_string())),
        }
    }
}

fn base_url(addr: &str) -> String {
    let addr = addr.trim().trim_end_matches('/');
    if addr.starts_with("http://") || addr.starts_with("https://") {
        addr.to_string()
    } else {
        format!("http://{addr}")
    }
}

/// 响应体不是合法的状态时（如经过代理），保留原始文本
fn status_from_body(http_code: u16, body: &str) -> Status {
    serde_json::from_str::<Status>(body)
        .unwrap_or_else(|_| Status::internal(format!("HTTP {http_code}: {body}")))
}

/// 解析逗号分隔的整数，如`"2, 3"`；空白输入得到空序列
pub fn parse_ints(csv: &str) -> Result<Vec<i64>, ClientError> {
    parse_csv(csv)
}

/// 解析逗号分隔的浮点数，如`"1, 2.5"`；空白输入得到空序列
pub fn parse_floats(csv: &str) -> Result<Vec<f64>, ClientError> {
    parse_csv(csv)
}

fn parse_csv<T>(csv: &str) -> Result<Vec<T>, ClientError>
where
    T: FromStr,
    T::Err: Display,
{
    csv.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(|item| {
            item.parse::<T>()
                .map_err(|err| ClientError::InvalidArgument(format!("`{item}`: {err}")))
        })
        .collect()
}
