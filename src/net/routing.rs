//! 最短路径路由
//!
//! 按链路 `weight` 做 Dijkstra，只看权重不看 load。等价路径的选择必须
//! 可复现：节点按 (距离, 节点名) 的顺序出堆，前驱只在严格更短时更新，
//! 所以同样的拓扑与输入总是得到同一条路径。

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use super::id::{LinkId, NodeId};
use super::topology::Topology;

/// 一条解析出的路径
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    /// 从源到目的（含两端）的节点序列
    pub nodes: Vec<NodeId>,
    /// 依次经过的链路，`links.len() == nodes.len() - 1`
    pub links: Vec<LinkId>,
    pub cost: f64,
}

impl Path {
    /// 形如 `A -> B -> C` 的描述
    pub fn describe(&self, topo: &Topology) -> String {
        self.nodes
            .iter()
            .map(|&n| topo.node_name(n))
            .collect::<Vec<_>>()
            .join(" -> ")
    }
}

/// 按节点名查找最短路径；任一节点不在拓扑中或两点不连通时返回 None
pub fn shortest_path(topo: &Topology, source: &str, target: &str) -> Option<Path> {
    let src = topo.node(source)?;
    let dst = topo.node(target)?;
    shortest_path_between(topo, src, dst)
}

pub fn shortest_path_between(topo: &Topology, src: NodeId, dst: NodeId) -> Option<Path> {
    let n = topo.node_count();
    if src.0 >= n || dst.0 >= n {
        return None;
    }
    if src == dst {
        return Some(Path {
            nodes: vec![src],
            links: Vec::new(),
            cost: 0.0,
        });
    }

    let mut dist = vec![f64::INFINITY; n];
    let mut prev: Vec<Option<(NodeId, LinkId)>> = vec![None; n];
    let mut settled = vec![false; n];
    let mut heap = BinaryHeap::new();

    dist[src.0] = 0.0;
    heap.push(Candidate {
        cost: 0.0,
        name: topo.node_name(src),
        node: src,
    });

    while let Some(Candidate { cost, node, .. }) = heap.pop() {
        if settled[node.0] {
            continue;
        }
        settled[node.0] = true;
        if node == dst {
            break;
        }
        for &(next, lid) in topo.neighbors(node) {
            if settled[next.0] {
                continue;
            }
            let Some(link) = topo.link(lid) else {
                continue;
            };
            let next_cost = cost + link.weight;
            if next_cost < dist[next.0] {
                dist[next.0] = next_cost;
                prev[next.0] = Some((node, lid));
                heap.push(Candidate {
                    cost: next_cost,
                    name: topo.node_name(next),
                    node: next,
                });
            }
        }
    }

    if !settled[dst.0] {
        return None;
    }

    let mut nodes = vec![dst];
    let mut links = Vec::new();
    let mut at = dst;
    while let Some((from, lid)) = prev[at.0] {
        links.push(lid);
        nodes.push(from);
        at = from;
    }
    nodes.reverse();
    links.reverse();
    Some(Path {
        nodes,
        links,
        cost: dist[dst.0],
    })
}

/// 堆元素：BinaryHeap 是大顶堆，这里反转比较得到 (cost, name) 最小者优先
struct Candidate<'a> {
    cost: f64,
    name: &'a str,
    node: NodeId,
}

impl Ord for Candidate<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.name.cmp(self.name))
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for Candidate<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Candidate<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Candidate<'_> {}
