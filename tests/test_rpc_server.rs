/*
 * @Description  : 在临时端口上启动真实服务，用客户端走完整的 HTTP/JSON 往返
 */
use std::net::SocketAddr;

use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

use tensor_service::client::{ClientError, TensorClient};
use tensor_service::errors::{Code, Status};
use tensor_service::rpc::{CHECK_TENSOR_PATH, HealthRequest, HealthResponse, TensorServer};
use tensor_service::server::{MAX_MESSAGE_SIZE, ServerConfig, ServerError, serve, serve_on};
use tensor_service::tensor::Tensor;

struct TestServer {
    addr: SocketAddr,
    shutdown: oneshot::Sender<()>,
    handle: JoinHandle<Result<(), ServerError>>,
}

impl TestServer {
    async fn start() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (shutdown, rx) = oneshot::channel::<()>();
        let handle = tokio::spawn(serve_on(listener, TensorServer, async move {
            let _ = rx.await;
        }));
        Self {
            addr,
            shutdown,
            handle,
        }
    }

    fn client(&self) -> TensorClient {
        TensorClient::new(&self.addr.to_string())
    }

    async fn stop(self) {
        self.shutdown.send(()).unwrap();
        self.handle.await.unwrap().unwrap();
    }
}

/// ureq是阻塞的，放到阻塞线程池中执行
async fn blocking<T, F>(f: F) -> T
where
    T: Send + 'static,
    F: FnOnce() -> T + Send + 'static,
{
    tokio::task::spawn_blocking(f).await.unwrap()
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_health() {
    let server = TestServer::start().await;
    let client = server.client();

    let response = blocking(move || client.health()).await.unwrap();
    assert_eq!(response, HealthResponse::ok());

    server.stop().await;
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_check_tensor_round_trip() {
    let server = TestServer::start().await;
    let client = server.client();

    let tensor = blocking(move || client.check_tensor(&[2, 3], &[1., 2., 3., 4., 5., 6.5]))
        .await
        .unwrap();
    assert_eq!(tensor, Tensor::new(&[1., 2., 3., 4., 5., 6.5], &[2, 3]));

    server.stop().await;
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_check_tensor_non_finite_values() {
    let server = TestServer::start().await;
    let client = server.client();
    let values = [f64::NAN, f64::INFINITY, f64::NEG_INFINITY, 1.5];

    let tensor = blocking(move || client.check_tensor(&[2, 2], &values))
        .await
        .unwrap();
    assert_eq!(tensor.shape(), &[2, 2]);
    // NaN != NaN，按位比较
    let bits = tensor.values().iter().map(|v| v.to_bits()).collect::<Vec<_>>();
    let expected = values.iter().map(|v| v.to_bits()).collect::<Vec<_>>();
    assert_eq!(bits, expected);

    server.stop().await;
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_check_tensor_larger_than_two_megabytes() {
    let server = TestServer::start().await;
    let client = server.client();

    // 每个值编码为"0.0,"，共约2.8MB：超过axum默认的2MB，但低于上限
    let n = 700_000usize;
    assert!(n * 4 < MAX_MESSAGE_SIZE);
    let tensor = blocking(move || client.check_tensor(&[n as i64], &vec![0.; n]))
        .await
        .unwrap();
    assert_eq!(tensor.values().len(), n);

    server.stop().await;
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_get_on_method_path_returns_status_body() {
    let server = TestServer::start().await;
    let url = format!("http://{}{}", server.addr, CHECK_TENSOR_PATH);

    let result = blocking(move || match ureq::get(&url).call() {
        Err(ureq::Error::Status(code, response)) => (code, response.into_json::<Status>()),
        other => panic!("预期 405，实际得到 {other:?}"),
    })
    .await;
    let (code, status) = result;
    assert_eq!(code, 405);
    let status = status.unwrap();
    assert_eq!(status.code, Code::Unimplemented);
    assert!(status.message.contains("use POST"), "{}", status.message);

    server.stop().await;
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_check_tensor_invalid_argument() {
    let server = TestServer::start().await;

    let cases: Vec<(Vec<i64>, Vec<f64>, &str)> = vec![
        (vec![], vec![], "shape is required"),
        (vec![2, -1], vec![1., 2.], "shape[1] must be > 0"),
        (
            vec![4_000_000_000, 4_000_000_000],
            vec![1.],
            "shape product overflow",
        ),
        (
            vec![2, 2],
            vec![1., 2., 3.],
            "invalid tensor: got 3 values, expected 4 from shape",
        ),
    ];

    for (shape, values, message) in cases {
        let client = server.client();
        let result = blocking(move || client.check_tensor(&shape, &values)).await;
        match result {
            Err(ClientError::Rpc(status)) => {
                assert_eq!(status, Status::invalid_argument(message));
            }
            other => panic!("预期 RPC 错误 `{message}`，实际得到 {other:?}"),
        }
    }

    server.stop().await;
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_missing_tensor_over_http() {
    let server = TestServer::start().await;
    let client = server.client();

    let result = blocking(move || {
        client.call::<_, Tensor>(
            "/tensor.v1.TensorService/CheckTensor",
            &serde_json::json!({}),
        )
    })
    .await;
    match result {
        Err(ClientError::Rpc(status)) => {
            assert_eq!(status, Status::invalid_argument("tensor is required"));
        }
        other => panic!("预期 MissingTensor，实际得到 {other:?}"),
    }

    server.stop().await;
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_unknown_method_is_unimplemented() {
    let server = TestServer::start().await;
    let client = server.client();

    let result = blocking(move || {
        client.call::<_, HealthResponse>(
            "/tensor.v1.TensorService/Reshape",
            &HealthRequest::default(),
        )
    })
    .await;
    match result {
        Err(ClientError::Rpc(status)) => assert_eq!(status.code, Code::Unimplemented),
        other => panic!("预期 UNIMPLEMENTED，实际得到 {other:?}"),
    }

    server.stop().await;
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_concurrent_requests() {
    let server = TestServer::start().await;

    let mut handles = Vec::new();
    for n in 1..=16i64 {
        let client = server.client();
        handles.push(tokio::task::spawn_blocking(move || {
            let values = vec![0.; n as usize * 2];
            client.check_tensor(&[n, 2], &values)
        }));
    }
    for (i, handle) in handles.into_iter().enumerate() {
        let tensor = handle.await.unwrap().unwrap();
        assert_eq!(tensor.shape(), &[i as i64 + 1, 2]);
    }

    server.stop().await;
}

#[tokio::test]
async fn test_bind_failure_is_reported() {
    let taken = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = taken.local_addr().unwrap();

    let result = serve(&ServerConfig::new(addr), TensorServer).await;
    match result {
        Err(ServerError::Bind { addr: failed, .. }) => assert_eq!(failed, addr),
        other => panic!("预期绑定失败，实际得到 {other:?}"),
    }
}
