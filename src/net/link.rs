//! 链路类型
//!
//! 无向、带容量与权重的链路。`capacity`/`weight` 是配置，`load` 是
//! 每一轮路由时累加的工作状态。

use super::id::NodeId;

/// 网络链路
#[derive(Debug, Clone, PartialEq)]
pub struct Link {
    /// 报告用的链路 ID（与端点无关，稳定且唯一）
    pub name: String,
    pub a: NodeId,
    pub b: NodeId,
    pub capacity: f64,
    pub weight: f64,
    pub load: f64,
}

impl Link {
    pub(crate) fn new(name: String, a: NodeId, b: NodeId, capacity: f64, weight: f64) -> Self {
        Self {
            name,
            a,
            b,
            capacity,
            weight,
            load: 0.0,
        }
    }

    /// 链路另一端；`node` 不是端点时返回 None
    pub fn other(&self, node: NodeId) -> Option<NodeId> {
        if node == self.a {
            Some(self.b)
        } else if node == self.b {
            Some(self.a)
        } else {
            None
        }
    }

    /// 利用率百分比：100 * load / capacity
    pub fn utilisation_percent(&self) -> f64 {
        100.0 * self.load / self.capacity
    }
}

/// 无向端点对的规范形式（小的在前）
pub(crate) fn endpoint_key(a: NodeId, b: NodeId) -> (NodeId, NodeId) {
    if a <= b { (a, b) } else { (b, a) }
}
