use std::net::SocketAddr;
use std::process::ExitCode;

use clap::Parser;
use tracing::error;

use tensor_service::rpc::TensorServer;
use tensor_service::server::{DEFAULT_ADDR, ServerConfig, serve};
use tensor_service::utils::logging::init_tracing;

/// 张量校验服务
#[derive(Parser, Debug)]
#[command(name = "tensor-server", version, about)]
struct Cli {
    /// 监听地址
    #[arg(long, env = "TENSOR_SERVICE_ADDR", default_value = DEFAULT_ADDR)]
    addr: SocketAddr,
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();
    let config = ServerConfig::new(cli.addr);

    let runtime = match tokio::runtime::Runtime::new() {
        Ok(runtime) => runtime,
        Err(err) => {
            error!("failed to create runtime: {err}");
            return ExitCode::FAILURE;
        }
    };

    // 监听失败或服务异常退出均不重试
    match runtime.block_on(serve(&config, TensorServer)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}
