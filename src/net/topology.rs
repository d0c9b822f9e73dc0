//! 网络拓扑
//!
//! 链路存放在 arena（`links`）中，按 `LinkId` 寻址；邻接表只是 arena 上的
//! 索引，避免“边”与“反向边”各存一份可变状态。节点在第一次被链路引用时
//! 隐式创建，之后不会删除。

use std::collections::HashMap;

use super::error::{InvalidLinkError, TopologyError};
use super::id::{LinkId, NodeId};
use super::link::{Link, endpoint_key};
use tracing::{debug, trace};

/// 无向、带权、带容量的网络拓扑
#[derive(Debug, Clone, Default)]
pub struct Topology {
    node_names: Vec<String>,
    node_index: HashMap<String, NodeId>,
    /// 删除的链路留下 None，保证 LinkId 稳定、遍历顺序即插入顺序
    links: Vec<Option<Link>>,
    edges: HashMap<(NodeId, NodeId), LinkId>,
    by_name: HashMap<String, LinkId>,
    adj: Vec<Vec<(NodeId, LinkId)>>,
}

impl Topology {
    pub fn new() -> Self {
        Self::default()
    }

    /// 插入（或覆盖）一条无向链路
    ///
    /// 同一端点对上重复添加时覆盖已有链路的 ID、容量和权重，并把 load 清零，
    /// 链路保留原来的遍历位置。
    pub fn add_link(
        &mut self,
        a: &str,
        b: &str,
        id: impl Into<String>,
        capacity: f64,
        weight: f64,
    ) -> Result<LinkId, InvalidLinkError> {
        let id = id.into();
        if a.is_empty() || b.is_empty() {
            return Err(InvalidLinkError::EmptyNode { id });
        }
        if a == b {
            return Err(InvalidLinkError::SelfLoop {
                id,
                node: a.to_string(),
            });
        }
        if !(capacity.is_finite() && capacity > 0.0) {
            return Err(InvalidLinkError::NonPositiveCapacity { id, capacity });
        }
        if !(weight.is_finite() && weight >= 0.0) {
            return Err(InvalidLinkError::InvalidWeight { id, weight });
        }

        let existing = match (self.node_index.get(a), self.node_index.get(b)) {
            (Some(&na), Some(&nb)) => self.edges.get(&endpoint_key(na, nb)).copied(),
            _ => None,
        };
        if let Some(&named) = self.by_name.get(&id) {
            if Some(named) != existing {
                let (existing_a, existing_b) = self.endpoint_names(named);
                return Err(InvalidLinkError::DuplicateLinkId {
                    id,
                    existing_a: existing_a.to_string(),
                    existing_b: existing_b.to_string(),
                });
            }
        }

        if let Some(lid) = existing {
            if let Some(link) = self.links[lid.0].as_mut() {
                if link.name != id {
                    self.by_name.remove(&link.name);
                    self.by_name.insert(id.clone(), lid);
                }
                debug!(link = %id, a, b, capacity, weight, "覆盖已有链路");
                link.name = id;
                link.capacity = capacity;
                link.weight = weight;
                link.load = 0.0;
            }
            return Ok(lid);
        }

        let na = self.intern(a);
        let nb = self.intern(b);
        let lid = LinkId(self.links.len());
        trace!(link = %id, a, b, capacity, weight, "添加链路");
        self.links.push(Some(Link::new(id.clone(), na, nb, capacity, weight)));
        self.edges.insert(endpoint_key(na, nb), lid);
        self.by_name.insert(id, lid);
        self.adj[na.0].push((nb, lid));
        self.adj[nb.0].push((na, lid));
        Ok(lid)
    }

    /// 返回删除 a-b 链路后的独立副本，原拓扑不受影响
    pub fn remove_link(&self, a: &str, b: &str) -> Result<Topology, TopologyError> {
        let lid = self
            .node(a)
            .zip(self.node(b))
            .and_then(|(na, nb)| self.link_between(na, nb))
            .ok_or_else(|| TopologyError::UnknownLink {
                a: a.to_string(),
                b: b.to_string(),
            })?;
        self.remove_link_by_id(lid)
    }

    /// 按索引删除链路，返回独立副本
    pub fn remove_link_by_id(&self, lid: LinkId) -> Result<Topology, TopologyError> {
        if self.link(lid).is_none() {
            return Err(TopologyError::UnknownLinkIndex(lid.0));
        }
        let mut variant = self.clone();
        variant.detach(lid);
        Ok(variant)
    }

    /// 所有链路 load 清零（每一轮路由之前调用）
    pub fn reset_loads(&mut self) {
        for link in self.links.iter_mut().flatten() {
            link.load = 0.0;
        }
    }

    /// 按插入顺序遍历所有链路
    pub fn edges(&self) -> impl Iterator<Item = (LinkId, &Link)> + '_ {
        self.links
            .iter()
            .enumerate()
            .filter_map(|(i, l)| l.as_ref().map(|l| (LinkId(i), l)))
    }

    pub fn link(&self, lid: LinkId) -> Option<&Link> {
        self.links.get(lid.0).and_then(Option::as_ref)
    }

    pub fn link_between(&self, a: NodeId, b: NodeId) -> Option<LinkId> {
        self.edges.get(&endpoint_key(a, b)).copied()
    }

    pub fn link_by_name(&self, name: &str) -> Option<LinkId> {
        self.by_name.get(name).copied()
    }

    pub fn node(&self, name: &str) -> Option<NodeId> {
        self.node_index.get(name).copied()
    }

    pub fn node_name(&self, node: NodeId) -> &str {
        &self.node_names[node.0]
    }

    /// 链路两端的节点名（按添加时的方向）
    pub fn endpoint_names(&self, lid: LinkId) -> (&str, &str) {
        match self.link(lid) {
            Some(link) => (self.node_name(link.a), self.node_name(link.b)),
            None => ("", ""),
        }
    }

    /// 节点的邻居及连接它们的链路，顺序为链路插入顺序
    pub fn neighbors(&self, node: NodeId) -> &[(NodeId, LinkId)] {
        self.adj.get(node.0).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn node_count(&self) -> usize {
        self.node_names.len()
    }

    pub fn link_count(&self) -> usize {
        self.edges.len()
    }

    pub fn total_load(&self) -> f64 {
        self.edges().map(|(_, l)| l.load).sum()
    }

    pub(crate) fn add_load(&mut self, lid: LinkId, volume: f64) {
        if let Some(link) = self.links.get_mut(lid.0).and_then(Option::as_mut) {
            link.load += volume;
        }
    }

    fn intern(&mut self, name: &str) -> NodeId {
        if let Some(&id) = self.node_index.get(name) {
            return id;
        }
        let id = NodeId(self.node_names.len());
        self.node_names.push(name.to_string());
        self.node_index.insert(name.to_string(), id);
        self.adj.push(Vec::new());
        id
    }

    fn detach(&mut self, lid: LinkId) {
        let Some(link) = self.links[lid.0].take() else {
            return;
        };
        self.edges.remove(&endpoint_key(link.a, link.b));
        self.by_name.remove(&link.name);
        self.adj[link.a.0].retain(|&(_, l)| l != lid);
        self.adj[link.b.0].retain(|&(_, l)| l != lid);
    }
}
