use std::net::{Ipv4Addr, SocketAddr};

/// 默认监听地址
pub const DEFAULT_ADDR: &str = "0.0.0.0:50051";
const DEFAULT_PORT: u16 = 50051;

/// 服务端配置
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// 监听地址
    pub addr: SocketAddr,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from((Ipv4Addr::UNSPECIFIED, DEFAULT_PORT)),
        }
    }
}

impl ServerConfig {
    pub fn new(addr: SocketAddr) -> Self {
        Self { addr }
    }
}
