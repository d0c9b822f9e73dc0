use super::{demand, triangle};
use crate::net::{Topology, shortest_path};
use crate::traffic::apply_traffic;

fn names(topo: &Topology, path: &crate::net::Path) -> Vec<String> {
    path.nodes
        .iter()
        .map(|&n| topo.node_name(n).to_string())
        .collect()
}

#[test]
fn shortest_path_prefers_lower_total_weight() {
    let topo = triangle();
    let path = shortest_path(&topo, "A", "C").expect("path A->C");
    assert_eq!(names(&topo, &path), vec!["A", "B", "C"]);
    assert_eq!(path.cost, 2.0);
    assert_eq!(path.links.len(), 2);
    assert_eq!(path.describe(&topo), "A -> B -> C");
}

#[test]
fn shortest_path_to_self_is_single_node() {
    let topo = triangle();
    let path = shortest_path(&topo, "B", "B").expect("self path");
    assert_eq!(names(&topo, &path), vec!["B"]);
    assert!(path.links.is_empty());
    assert_eq!(path.cost, 0.0);
}

#[test]
fn unknown_or_disconnected_nodes_have_no_path() {
    let mut topo = triangle();
    topo.add_link("X", "Y", "9", 1.0, 1.0).unwrap();

    assert!(shortest_path(&topo, "A", "Z").is_none());
    assert!(shortest_path(&topo, "Z", "A").is_none());
    assert!(shortest_path(&topo, "Z", "Z").is_none());
    assert!(shortest_path(&topo, "A", "X").is_none());
}

#[test]
fn node_isolated_by_removal_is_unreachable() {
    let mut topo = Topology::new();
    topo.add_link("A", "B", "1", 10.0, 1.0).unwrap();
    topo.add_link("B", "C", "2", 10.0, 1.0).unwrap();
    let variant = topo.remove_link("B", "C").unwrap();

    assert!(shortest_path(&variant, "A", "C").is_none());
    // isolated node still routes to itself
    assert!(shortest_path(&variant, "C", "C").is_some());
}

#[test]
fn equal_cost_ties_break_by_node_name() {
    // Square with two equal-cost routes A-B-D and A-C-D; C-side links added first.
    let mut topo = Topology::new();
    topo.add_link("A", "C", "1", 10.0, 1.0).unwrap();
    topo.add_link("C", "D", "2", 10.0, 1.0).unwrap();
    topo.add_link("A", "B", "3", 10.0, 1.0).unwrap();
    topo.add_link("B", "D", "4", 10.0, 1.0).unwrap();

    let path = shortest_path(&topo, "A", "D").unwrap();
    assert_eq!(names(&topo, &path), vec!["A", "B", "D"]);

    for _ in 0..10 {
        assert_eq!(shortest_path(&topo, "A", "D").unwrap(), path);
    }
}

#[test]
fn zero_weight_links_are_allowed() {
    let mut topo = Topology::new();
    topo.add_link("A", "B", "1", 10.0, 0.0).unwrap();
    topo.add_link("B", "C", "2", 10.0, 0.0).unwrap();
    topo.add_link("A", "C", "3", 10.0, 1.0).unwrap();

    let path = shortest_path(&topo, "A", "C").unwrap();
    assert_eq!(names(&topo, &path), vec!["A", "B", "C"]);
    assert_eq!(path.cost, 0.0);
}

#[test]
fn routing_ignores_current_load() {
    let mut topo = triangle();
    apply_traffic(&mut topo, &[demand("A", "C", 1000.0)]);
    let path = shortest_path(&topo, "A", "C").unwrap();
    assert_eq!(names(&topo, &path), vec!["A", "B", "C"]);
}
