//! 流量引擎
//!
//! 每一轮：清零 load，按输入顺序逐个路由需求，把需求量加到路径上的
//! 每条链路。找不到路径的需求不贡献 load，但会在结果里显式记为 UNROUTABLE。

use super::demand::Demand;
use crate::net::{LinkId, Topology, shortest_path};
use tracing::{debug, trace};

/// 不可路由需求在报告中的描述
pub const UNROUTABLE: &str = "UNROUTABLE";

/// 单个需求的路由结果
#[derive(Debug, Clone, PartialEq)]
pub enum Route {
    Routed {
        nodes: Vec<String>,
        /// 路径经过的链路（只在产生它的拓扑内有意义）
        links: Vec<LinkId>,
        cost: f64,
    },
    Unroutable,
}

impl Route {
    pub fn is_routable(&self) -> bool {
        matches!(self, Route::Routed { .. })
    }

    pub fn nodes(&self) -> Option<&[String]> {
        match self {
            Route::Routed { nodes, .. } => Some(nodes),
            Route::Unroutable => None,
        }
    }

    /// `A -> B -> C`，或 `UNROUTABLE`
    pub fn describe(&self) -> String {
        match self {
            Route::Routed { nodes, .. } => nodes.join(" -> "),
            Route::Unroutable => UNROUTABLE.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RoutingResult {
    pub source: String,
    pub destination: String,
    pub volume: f64,
    pub route: Route,
}

/// 在 `topo` 上放置 `demands`，返回与输入同序的路由结果
///
/// 会原地修改链路 load；调用前不需要手动 `reset_loads()`。
#[tracing::instrument(skip_all, fields(links = topo.link_count(), demands = demands.len()))]
pub fn apply_traffic(topo: &mut Topology, demands: &[Demand]) -> Vec<RoutingResult> {
    topo.reset_loads();

    let mut results = Vec::with_capacity(demands.len());
    for demand in demands {
        let route = match shortest_path(topo, demand.source(), demand.destination()) {
            Some(path) => {
                for &lid in &path.links {
                    topo.add_load(lid, demand.volume());
                }
                trace!(
                    src = demand.source(),
                    dst = demand.destination(),
                    volume = demand.volume(),
                    hops = path.links.len(),
                    cost = path.cost,
                    "需求已放置"
                );
                Route::Routed {
                    nodes: path
                        .nodes
                        .iter()
                        .map(|&n| topo.node_name(n).to_string())
                        .collect(),
                    links: path.links,
                    cost: path.cost,
                }
            }
            None => {
                debug!(
                    src = demand.source(),
                    dst = demand.destination(),
                    volume = demand.volume(),
                    "需求不可路由"
                );
                Route::Unroutable
            }
        };
        results.push(RoutingResult {
            source: demand.source().to_string(),
            destination: demand.destination().to_string(),
            volume: demand.volume(),
            route,
        });
    }

    debug!(
        routed = results.len() - unroutable_count(&results),
        unroutable = unroutable_count(&results),
        total_load = topo.total_load(),
        "路由完成"
    );
    results
}

pub fn unroutable_count(results: &[RoutingResult]) -> usize {
    results.iter().filter(|r| !r.route.is_routable()).count()
}
