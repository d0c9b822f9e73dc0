//! 拓扑构建错误

use thiserror::Error;

/// 拓扑输入中格式错误的链路记录
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidLinkError {
    #[error("link {id}: capacity must be a positive number, got {capacity}")]
    NonPositiveCapacity { id: String, capacity: f64 },
    #[error("link {id}: weight must be a non-negative number, got {weight}")]
    InvalidWeight { id: String, weight: f64 },
    #[error("link {id}: self-loop on node {node}")]
    SelfLoop { id: String, node: String },
    #[error("link {id}: empty node id")]
    EmptyNode { id: String },
    #[error("link id {id} already used by link {existing_a}-{existing_b}")]
    DuplicateLinkId {
        id: String,
        existing_a: String,
        existing_b: String,
    },
}

/// 拓扑查询/变换错误
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TopologyError {
    #[error("no link between {a} and {b}")]
    UnknownLink { a: String, b: String },
    #[error("no link with index {0}")]
    UnknownLinkIndex(usize),
}
