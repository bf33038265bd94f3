/*
 * @Description  : HTTP/JSON 传输层：把`TensorService`的两个方法挂到与 gRPC 相同的路径上，
 *                 负责消息编解码、状态码映射、监听与优雅退出
 */

mod config;
mod error;

pub use self::config::{DEFAULT_ADDR, ServerConfig};
pub use self::error::ServerError;

use std::future::Future;
use std::sync::Arc;

use axum::Json;
use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::extract::{DefaultBodyLimit, State};
use axum::http::{Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::Router;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio::net::TcpListener;
use tracing::{debug, error, info};

use crate::errors::Status;
use crate::rpc::{CHECK_TENSOR_PATH, HEALTH_PATH, TensorService};


/// 请求体上限，与gRPC默认的最大接收消息长度一致
pub const MAX_MESSAGE_SIZE: usize = 4 * 1024 * 1024;

/// 构建路由：每个RPC方法对应一个POST路径，其余路径一律返回`UNIMPLEMENTED`。
/// 所有失败（包括请求体过大、方法不是POST）都以JSON形式的[`Status`]返回。
pub fn router<S: TensorService>(service: S) -> Router {
    Router::new()
        .route(
            HEALTH_PATH,
            post(health_handler::<S>).fallback(method_not_allowed),
        )
        .route(
            CHECK_TENSOR_PATH,
            post(check_tensor_handler::<S>).fallback(method_not_allowed),
        )
        .fallback(unknown_method)
        .layer(DefaultBodyLimit::max(MAX_MESSAGE_SIZE))
        .with_state(Arc::new(service))
}

async fn health_handler<S: TensorService>(
    State(service): State<Arc<S>>,
    body: Result<Bytes, BytesRejection>,
) -> Response {
    match read_body(body) {
        Ok(body) => dispatch(HEALTH_PATH, &body, |request| service.health(request)),
        Err(status) => status_response(status),
    }
}

async fn check_tensor_handler<S: TensorService>(
    State(service): State<Arc<S>>,
    body: Result<Bytes, BytesRejection>,
) -> Response {
    match read_body(body) {
        Ok(body) => dispatch(CHECK_TENSOR_PATH, &body, |request| {
            service.check_tensor(request)
        }),
        Err(status) => status_response(status),
    }
}

/// 请求体读取失败：超出上限为`RESOURCE_EXHAUSTED`，其余为`INVALID_ARGUMENT`
pub(crate) fn read_body(body: Result<Bytes, BytesRejection>) -> Result<Bytes, Status> {
    body.map_err(|rejection| {
        let status = if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            Status::resource_exhausted(format!(
                "request body exceeds {MAX_MESSAGE_SIZE} bytes"
            ))
        } else {
            Status::invalid_argument(format!("malformed request: {}", rejection.body_text()))
        };
        debug!(code = %status.code, message = %status.message, "failed to read request body");
        status
    })
}

async fn method_not_allowed(method: Method, uri: Uri) -> Response {
    debug!(%method, path = uri.path(), "method not allowed");
    let status = Status::unimplemented(format!(
        "method {method} not allowed for {}, use POST",
        uri.path()
    ));
    (StatusCode::METHOD_NOT_ALLOWED, Json(status)).into_response()
}

async fn unknown_method(uri: Uri) -> Response {
    debug!(path = uri.path(), "unknown method");
    status_response(Status::unimplemented(format!(
        "unknown method {}",
        uri.path()
    )))
}

/// 解码请求 -> 调用服务 -> 编码响应。校验本身是纯计算，不会阻塞，因此直接在当前任务中执行。
pub(crate) fn dispatch<Req, Resp, F>(method: &str, body: &[u8], call: F) -> Response
where
    Req: DeserializeOwned + Default,
    Resp: Serialize,
    F: FnOnce(Req) -> Result<Resp, Status>,
{
    let result = decode::<Req>(body).and_then(call);
    match result {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(status) => {
            debug!(method, code = %status.code, message = %status.message, "request failed");
            status_response(status)
        }
    }
}

/// 空请求体视为默认消息（如`HealthRequest {}`）
pub(crate) fn decode<Req>(body: &[u8]) -> Result<Req, Status>
where
    Req: DeserializeOwned + Default,
{
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Req::default());
    }
    serde_json::from_slice(body)
        .map_err(|err| Status::invalid_argument(format!("malformed request: {err}")))
}

pub(crate) fn status_response(status: Status) -> Response {
    let http_status = StatusCode::from_u16(status.code.http_status())
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (http_status, Json(status)).into_response()
}

/// 绑定`config.addr`并持续服务，直到收到Ctrl+C。
/// 绑定失败或服务循环异常退出都会以`ServerError`返回，由调用方决定终止进程。
pub async fn serve<S: TensorService>(config: &ServerConfig, service: S) -> Result<(), ServerError> {
    let listener = TcpListener::bind(config.addr)
        .await
        .map_err(|source| ServerError::Bind {
            addr: config.addr,
            source,
        })?;
    serve_on(listener, service, shutdown_signal()).await
}

/// 在已绑定的`listener`上服务，`shutdown`完成时优雅退出
pub async fn serve_on<S, F>(listener: TcpListener, service: S, shutdown: F) -> Result<(), ServerError>
where
    S: TensorService,
    F: Future<Output = ()> + Send + 'static,
{
    let addr = listener.local_addr().map_err(ServerError::Serve)?;
    info!("listening on {addr}");

    axum::serve(listener, router(service))
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(ServerError::Serve)?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        // 无法监听信号时只能一直运行下去
        error!("failed to install Ctrl+C handler: {err}");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
