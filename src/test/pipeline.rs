use super::{demand, triangle};
use crate::analysis::{AnalysisOptions, CancelFlag, analyse};

#[test]
fn analyse_runs_baseline_without_touching_input() {
    let topo = triangle();
    let demands = [demand("A", "C", 8.0)];
    let analysis = analyse(&topo, &demands, &AnalysisOptions::default()).unwrap();

    assert_eq!(topo.total_load(), 0.0);
    assert_eq!(analysis.loaded.total_load(), 16.0);
    assert_eq!(analysis.routing.len(), 1);
    assert_eq!(analysis.utilisation.len(), 3);
    assert!(analysis.failures.is_none());
}

#[test]
fn analyse_with_wcf_includes_ranked_failures() {
    let topo = triangle();
    let opts = AnalysisOptions {
        run_wcf: true,
        cancel: Some(CancelFlag::new()),
    };
    let analysis = analyse(&topo, &[demand("A", "C", 8.0)], &opts).unwrap();
    let failures = analysis.failures.expect("wcf requested");
    assert_eq!(failures.len(), 3);
    assert_eq!(failures[0].overloaded_links, 1);
}

#[test]
fn analyse_propagates_cancellation() {
    let topo = triangle();
    let cancel = CancelFlag::new();
    cancel.cancel();
    let opts = AnalysisOptions {
        run_wcf: true,
        cancel: Some(cancel),
    };
    assert!(analyse(&topo, &[demand("A", "C", 8.0)], &opts).is_err());
}
