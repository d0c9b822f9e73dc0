//! 终端用的纯文本表格

use std::fmt::Write;

use super::types::{FailureRow, RoutingRow, UtilisationRow};

pub fn render_routing(rows: &[RoutingRow]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:<12} {:<12} {:>10}  Path", "Source", "Destination", "Demand");
    for r in rows {
        let _ = writeln!(
            out,
            "{:<12} {:<12} {:>10}  {}",
            r.source, r.destination, r.demand, r.path
        );
    }
    out
}

pub fn render_utilisation(rows: &[UtilisationRow]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<8} {:<10} {:<10} {:>10} {:>10} {:>16}  Status",
        "LinkId", "From", "To", "Capacity", "Load", "Utilisation (%)"
    );
    for r in rows {
        let _ = writeln!(
            out,
            "{:<8} {:<10} {:<10} {:>10} {:>10} {:>16}  {}",
            r.link_id, r.from, r.to, r.capacity, r.load, r.utilisation_percent, r.status
        );
    }
    out
}

pub fn render_failures(rows: &[FailureRow]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<24} {:>16} {:>16} {:>20}",
        "Failed_Link", "Unroutable_Flows", "Links_Overloaded", "Max_Utilisation (%)"
    );
    for r in rows {
        let _ = writeln!(
            out,
            "{:<24} {:>16} {:>16} {:>20}",
            r.failed_link, r.unroutable_flows, r.links_overloaded, r.max_utilisation_percent
        );
    }
    out
}
