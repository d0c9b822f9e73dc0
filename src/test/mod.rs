mod pipeline;
mod routing;
mod traffic;

use crate::net::Topology;
use crate::traffic::Demand;

/// A-B (cap 10, w 1), B-C (cap 10, w 1), A-C (cap 5, w 5)
pub(crate) fn triangle() -> Topology {
    let mut topo = Topology::new();
    topo.add_link("A", "B", "1", 10.0, 1.0).expect("A-B");
    topo.add_link("B", "C", "2", 10.0, 1.0).expect("B-C");
    topo.add_link("A", "C", "3", 5.0, 5.0).expect("A-C");
    topo
}

pub(crate) fn demand(src: &str, dst: &str, volume: f64) -> Demand {
    Demand::new(src, dst, volume).expect("valid demand")
}

pub(crate) fn loads_by_name(topo: &Topology) -> Vec<(String, f64)> {
    topo.edges().map(|(_, l)| (l.name.clone(), l.load)).collect()
}
