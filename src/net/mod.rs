//! 网络拓扑模块
//!
//! 此模块包含拓扑的核心组件：节点/链路标识符、链路、拓扑本身以及最短路径路由。

// 子模块声明
mod error;
mod id;
mod link;
mod routing;
mod topology;

// 重新导出公共接口
pub use error::{InvalidLinkError, TopologyError};
pub use id::{LinkId, NodeId};
pub use link::Link;
pub use routing::{Path, shortest_path, shortest_path_between};
pub use topology::Topology;
