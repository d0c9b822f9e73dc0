//! 标识符类型
//!
//! 节点与链路在拓扑内部的索引句柄。对外报告使用的名字/链路 ID 存在
//! `Topology` 与 `Link` 上，句柄本身只在同一个拓扑（及其副本）内有意义。

/// 节点标识符（按首次出现顺序分配）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub usize);

/// 链路标识符（链路 arena 中的槽位，删除链路后不会复用）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LinkId(pub usize);
