//! 链路利用率
//!
//! 利用率 = 100 * load / capacity。分级：<= 80 为 OK，(80, 100] 为 Critical，
//! > 100 为 Overloaded。

use std::cmp::Ordering;
use std::fmt;

use crate::net::{LinkId, Topology};
use serde::{Deserialize, Serialize};

pub const CRITICAL_THRESHOLD_PERCENT: f64 = 80.0;
pub const OVERLOAD_THRESHOLD_PERCENT: f64 = 100.0;

/// 链路健康状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LinkStatus {
    #[serde(rename = "OK")]
    Ok,
    Critical,
    Overloaded,
}

impl LinkStatus {
    pub fn classify(utilisation_percent: f64) -> Self {
        if utilisation_percent > OVERLOAD_THRESHOLD_PERCENT {
            LinkStatus::Overloaded
        } else if utilisation_percent > CRITICAL_THRESHOLD_PERCENT {
            LinkStatus::Critical
        } else {
            LinkStatus::Ok
        }
    }
}

impl fmt::Display for LinkStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LinkStatus::Ok => "OK",
            LinkStatus::Critical => "Critical",
            LinkStatus::Overloaded => "Overloaded",
        };
        f.write_str(s)
    }
}

/// 单条链路的利用率记录
#[derive(Debug, Clone, PartialEq)]
pub struct UtilisationRecord {
    pub link: LinkId,
    pub link_id: String,
    pub from: String,
    pub to: String,
    pub capacity: f64,
    pub load: f64,
    pub utilisation_percent: f64,
    pub status: LinkStatus,
}

/// 为已放置流量的拓扑生成利用率报告，按链路 ID 升序
pub fn utilisation_report(topo: &Topology) -> Vec<UtilisationRecord> {
    let mut records = topo
        .edges()
        .map(|(lid, link)| {
            let (from, to) = topo.endpoint_names(lid);
            let utilisation_percent = link.utilisation_percent();
            UtilisationRecord {
                link: lid,
                link_id: link.name.clone(),
                from: from.to_string(),
                to: to.to_string(),
                capacity: link.capacity,
                load: link.load,
                utilisation_percent,
                status: LinkStatus::classify(utilisation_percent),
            }
        })
        .collect::<Vec<_>>();
    records.sort_by(|a, b| compare_link_ids(&a.link_id, &b.link_id));
    records
}

/// 链路 ID 排序：两者都是无符号整数时按数值比较，否则按字符串；数值 ID 排在前面
pub fn compare_link_ids(a: &str, b: &str) -> Ordering {
    match (a.parse::<u64>(), b.parse::<u64>()) {
        (Ok(x), Ok(y)) => x.cmp(&y).then_with(|| a.cmp(b)),
        (Ok(_), Err(_)) => Ordering::Less,
        (Err(_), Ok(_)) => Ordering::Greater,
        (Err(_), Err(_)) => a.cmp(b),
    }
}
