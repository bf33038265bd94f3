use std::process::ExitCode;

use clap::{Parser, Subcommand};

use tensor_service::client::{ClientError, TensorClient, parse_floats, parse_ints};
use tensor_service::utils::logging::init_tracing;

/// 张量校验服务的命令行客户端
#[derive(Parser, Debug)]
#[command(name = "tensor-client", version, about)]
struct Cli {
    /// 服务地址
    #[arg(long, env = "TENSOR_CLIENT_ADDR", default_value = "localhost:50051")]
    addr: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// 调用 Health
    Health,
    /// 调用 CheckTensor
    Check {
        /// 逗号分隔的各维度，如 "2,2"
        #[arg(long, allow_hyphen_values = true)]
        shape: String,
        /// 逗号分隔的数值，如 "1,2,3,4"
        #[arg(long, allow_hyphen_values = true)]
        values: String,
    },
}

fn run(cli: &Cli) -> Result<(), ClientError> {
    let client = TensorClient::new(&cli.addr);
    match &cli.command {
        Command::Health => {
            let response = client.health()?;
            println!("{}", response.status);
        }
        Command::Check { shape, values } => {
            let shape = parse_ints(shape)?;
            let values = parse_floats(values)?;
            let tensor = client.check_tensor(&shape, &values)?;
            let json = serde_json::to_string_pretty(&tensor)
                .map_err(|err| ClientError::Decode(err.to_string()))?;
            println!("{json}");
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err @ ClientError::Rpc(_)) => {
            println!("{err}");
            ExitCode::FAILURE
        }
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
