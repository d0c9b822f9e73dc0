//! 流量放置模块
//!
//! 把点到点流量需求按最短路径放到拓扑上，累加链路 load 并生成路由报告。

mod demand;
mod engine;

pub use demand::{Demand, InvalidDemandError};
pub use engine::{Route, RoutingResult, UNROUTABLE, apply_traffic, unroutable_count};
