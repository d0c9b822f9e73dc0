//! 最坏单链路故障（WCF）扫描
//!
//! 对原拓扑中的每条链路：复制拓扑并删掉该链路，重新放置全部需求，
//! 统计不可路由需求数、过载链路数和最大利用率。各场景互不共享可变状态，
//! 在 rayon 线程池上并行执行；全部完成后再统一排序。

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use super::utilisation::{LinkStatus, utilisation_report};
use crate::net::{LinkId, Topology};
use crate::traffic::{Demand, apply_traffic, unroutable_count};
use rayon::prelude::*;
use thiserror::Error;
use tracing::{debug, info};

/// 单个故障场景的影响汇总
#[derive(Debug, Clone, PartialEq)]
pub struct FailureImpactRecord {
    /// 故障链路的 ID
    pub failed_link: String,
    pub from: String,
    pub to: String,
    pub unroutable_demands: usize,
    pub overloaded_links: usize,
    /// 场景中没有剩余链路时为 0
    pub max_utilisation_percent: f64,
}

impl FailureImpactRecord {
    /// 形如 `A-B (ID 3)`
    pub fn descriptor(&self) -> String {
        format!("{}-{} (ID {})", self.from, self.to, self.failed_link)
    }
}

/// 场景边界处检查的取消标志，可跨线程克隆共享
#[derive(Debug, Clone, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("failure sweep cancelled after {completed} of {total} scenarios")]
pub struct SweepCancelled {
    pub completed: usize,
    pub total: usize,
}

/// 模拟单条链路故障；`lid` 不在拓扑中时返回 None
#[tracing::instrument(skip(topo, demands), fields(link = ?lid))]
pub fn simulate_failure(
    topo: &Topology,
    demands: &[Demand],
    lid: LinkId,
) -> Option<FailureImpactRecord> {
    let link = topo.link(lid)?;
    let (from, to) = topo.endpoint_names(lid);
    let mut variant = topo.remove_link_by_id(lid).ok()?;

    let routing = apply_traffic(&mut variant, demands);
    let utilisation = utilisation_report(&variant);
    if utilisation.is_empty() {
        debug!("场景中没有剩余链路，最大利用率记为 0");
    }

    let record = FailureImpactRecord {
        failed_link: link.name.clone(),
        from: from.to_string(),
        to: to.to_string(),
        unroutable_demands: unroutable_count(&routing),
        overloaded_links: utilisation
            .iter()
            .filter(|r| r.status == LinkStatus::Overloaded)
            .count(),
        max_utilisation_percent: utilisation
            .iter()
            .map(|r| r.utilisation_percent)
            .fold(0.0, f64::max),
    };
    info!(
        failed = %record.descriptor(),
        unroutable = record.unroutable_demands,
        overloaded = record.overloaded_links,
        max_util = record.max_utilisation_percent,
        "💥 链路故障场景完成"
    );
    Some(record)
}

/// 对每条链路做一次故障场景，返回按影响程度降序排列的记录
#[tracing::instrument(skip_all, fields(links = topo.link_count(), demands = demands.len()))]
pub fn worst_case_failure_analysis(
    topo: &Topology,
    demands: &[Demand],
) -> Vec<FailureImpactRecord> {
    let lids = topo.edges().map(|(lid, _)| lid).collect::<Vec<_>>();
    info!(scenarios = lids.len(), "▶️  开始 WCF 扫描");

    let outcomes: Vec<Option<FailureImpactRecord>> = lids
        .par_iter()
        .map(|&lid| simulate_failure(topo, demands, lid))
        .collect();
    let mut records = outcomes.into_iter().flatten().collect::<Vec<_>>();
    rank_failures(&mut records);

    info!(scenarios = records.len(), "✅ WCF 扫描完成");
    records
}

/// 可取消的 WCF 扫描；取消在场景之间生效，已经开始的场景会跑完
#[tracing::instrument(skip_all, fields(links = topo.link_count(), demands = demands.len()))]
pub fn worst_case_failure_analysis_cancellable(
    topo: &Topology,
    demands: &[Demand],
    cancel: &CancelFlag,
) -> Result<Vec<FailureImpactRecord>, SweepCancelled> {
    let lids = topo.edges().map(|(lid, _)| lid).collect::<Vec<_>>();
    let total = lids.len();
    info!(scenarios = total, "▶️  开始 WCF 扫描");

    let outcomes: Vec<Option<FailureImpactRecord>> = lids
        .par_iter()
        .map(|&lid| {
            if cancel.is_cancelled() {
                return None;
            }
            simulate_failure(topo, demands, lid)
        })
        .collect();
    let mut records = outcomes.into_iter().flatten().collect::<Vec<_>>();
    if records.len() < total {
        info!(completed = records.len(), total, "WCF 扫描已取消");
        return Err(SweepCancelled {
            completed: records.len(),
            total,
        });
    }
    rank_failures(&mut records);

    info!(scenarios = records.len(), "✅ WCF 扫描完成");
    Ok(records)
}

/// 按 (过载链路数, 最大利用率) 降序稳定排序，相同者保持链路遍历顺序
pub fn rank_failures(records: &mut [FailureImpactRecord]) {
    records.sort_by(|a, b| {
        b.overloaded_links
            .cmp(&a.overloaded_links)
            .then_with(|| b.max_utilisation_percent.total_cmp(&a.max_utilisation_percent))
    });
}
