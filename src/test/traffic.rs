use super::{demand, loads_by_name, triangle};
use crate::net::Topology;
use crate::traffic::{Demand, InvalidDemandError, Route, UNROUTABLE, apply_traffic, unroutable_count};

fn load_of(topo: &Topology, name: &str) -> f64 {
    let lid = topo.link_by_name(name).expect("link exists");
    topo.link(lid).unwrap().load
}

#[test]
fn triangle_demand_takes_cheaper_two_hop_path() {
    let mut topo = triangle();
    let results = apply_traffic(&mut topo, &[demand("A", "C", 8.0)]);

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].route.describe(), "A -> B -> C");
    assert_eq!(load_of(&topo, "1"), 8.0);
    assert_eq!(load_of(&topo, "2"), 8.0);
    assert_eq!(load_of(&topo, "3"), 0.0);
}

#[test]
fn unroutable_demand_is_recorded_and_adds_no_load() {
    let mut topo = triangle();
    let demands = [
        demand("A", "B", 2.0),
        demand("A", "Z", 50.0),
        demand("B", "C", 3.0),
    ];
    let results = apply_traffic(&mut topo, &demands);

    assert_eq!(results.len(), 3);
    assert_eq!(results[1].source, "A");
    assert_eq!(results[1].destination, "Z");
    assert_eq!(results[1].volume, 50.0);
    assert_eq!(results[1].route, Route::Unroutable);
    assert_eq!(results[1].route.describe(), UNROUTABLE);
    assert_eq!(unroutable_count(&results), 1);
    assert_eq!(topo.total_load(), 5.0);
}

#[test]
fn results_follow_input_order() {
    let mut topo = triangle();
    let demands = [
        demand("C", "A", 1.0),
        demand("A", "B", 1.0),
        demand("B", "C", 1.0),
    ];
    let results = apply_traffic(&mut topo, &demands);
    let pairs = results
        .iter()
        .map(|r| (r.source.as_str(), r.destination.as_str()))
        .collect::<Vec<_>>();
    assert_eq!(pairs, vec![("C", "A"), ("A", "B"), ("B", "C")]);
    assert_eq!(results[0].route.nodes().unwrap(), &["C", "B", "A"]);
}

#[test]
fn repeated_passes_are_identical() {
    let mut topo = triangle();
    topo.add_link("C", "D", "4", 4.0, 2.0).unwrap();
    topo.add_link("B", "D", "5", 4.0, 3.0).unwrap();
    let demands = [
        demand("A", "D", 3.0),
        demand("B", "C", 2.5),
        demand("D", "A", 1.0),
    ];

    let first = apply_traffic(&mut topo, &demands);
    let first_loads = loads_by_name(&topo);
    let second = apply_traffic(&mut topo, &demands);

    assert_eq!(first, second);
    assert_eq!(loads_by_name(&topo), first_loads);
}

#[test]
fn link_load_equals_sum_of_traversing_demands() {
    let mut topo = triangle();
    topo.add_link("C", "D", "4", 4.0, 2.0).unwrap();
    topo.add_link("B", "D", "5", 4.0, 3.0).unwrap();
    topo.add_link("D", "E", "6", 4.0, 1.0).unwrap();
    let demands = [
        demand("A", "E", 3.0),
        demand("B", "C", 2.5),
        demand("E", "A", 1.25),
        demand("C", "D", 0.5),
        demand("A", "A", 9.0),
    ];
    let results = apply_traffic(&mut topo, &demands);

    for (lid, link) in topo.edges() {
        let expected: f64 = results
            .iter()
            .filter_map(|r| match &r.route {
                Route::Routed { links, .. } if links.contains(&lid) => Some(r.volume),
                _ => None,
            })
            .sum();
        assert!(
            (link.load - expected).abs() < 1e-9,
            "link {} load {} != {}",
            link.name,
            link.load,
            expected
        );
    }
}

#[test]
fn self_demand_routes_without_load() {
    let mut topo = triangle();
    let results = apply_traffic(&mut topo, &[demand("A", "A", 9.0)]);
    assert_eq!(results[0].route.nodes().unwrap(), &["A"]);
    assert_eq!(topo.total_load(), 0.0);
}

#[test]
fn demand_rejects_non_positive_volume() {
    assert!(matches!(
        Demand::new("A", "B", 0.0),
        Err(InvalidDemandError::NonPositiveVolume { .. })
    ));
    assert!(matches!(
        Demand::new("A", "B", f64::NAN),
        Err(InvalidDemandError::NonPositiveVolume { .. })
    ));
    assert_eq!(Demand::new("", "B", 1.0), Err(InvalidDemandError::EmptyNode));
}
