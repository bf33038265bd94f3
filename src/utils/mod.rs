//! # 常用接口模块
//!
//! 本模块提供日志初始化以及单元测试用的断言宏

pub mod logging;
