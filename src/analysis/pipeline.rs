//! 整体分析流程：基线路由 → 利用率报告 →（可选）WCF 扫描

use super::failure::{
    CancelFlag, FailureImpactRecord, SweepCancelled, worst_case_failure_analysis,
    worst_case_failure_analysis_cancellable,
};
use super::utilisation::{UtilisationRecord, utilisation_report};
use crate::net::Topology;
use crate::traffic::{Demand, RoutingResult, apply_traffic};
use tracing::info;

#[derive(Debug, Clone, Default)]
pub struct AnalysisOptions {
    pub run_wcf: bool,
    pub cancel: Option<CancelFlag>,
}

/// 一次完整分析的结果
#[derive(Debug, Clone)]
pub struct Analysis {
    /// 放置了基线流量后的拓扑副本
    pub loaded: Topology,
    pub routing: Vec<RoutingResult>,
    pub utilisation: Vec<UtilisationRecord>,
    pub failures: Option<Vec<FailureImpactRecord>>,
}

pub fn analyse(
    topo: &Topology,
    demands: &[Demand],
    opts: &AnalysisOptions,
) -> Result<Analysis, SweepCancelled> {
    info!("正在运行基线流量仿真...");
    let mut loaded = topo.clone();
    let routing = apply_traffic(&mut loaded, demands);
    let utilisation = utilisation_report(&loaded);

    let failures = if opts.run_wcf {
        info!("正在运行最坏单链路故障（WCF）分析...");
        let records = match &opts.cancel {
            Some(cancel) => worst_case_failure_analysis_cancellable(topo, demands, cancel)?,
            None => worst_case_failure_analysis(topo, demands),
        };
        Some(records)
    } else {
        None
    };

    Ok(Analysis {
        loaded,
        routing,
        utilisation,
        failures,
    })
}
