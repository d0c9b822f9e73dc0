//! 分析模块
//!
//! 利用率分级、单链路故障（WCF）扫描，以及把两者串起来的整体流程。

mod failure;
mod pipeline;
mod utilisation;

pub use failure::{
    CancelFlag, FailureImpactRecord, SweepCancelled, rank_failures, simulate_failure,
    worst_case_failure_analysis, worst_case_failure_analysis_cancellable,
};
pub use pipeline::{Analysis, AnalysisOptions, analyse};
pub use utilisation::{
    CRITICAL_THRESHOLD_PERCENT, LinkStatus, OVERLOAD_THRESHOLD_PERCENT, UtilisationRecord,
    compare_link_ids, utilisation_report,
};
