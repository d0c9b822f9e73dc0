//! 场景输入
//!
//! 拓扑与流量需求记录的 JSON 形式，以及把记录装配成 `Topology` 和 `Demand`
//! 列表的加载器。

mod loader;
mod records;

pub use loader::{LoadedScenario, ScenarioError, build_demands, build_topology};
pub use records::{
    DemandRecord, Ident, LinkRecord, LoadPolicy, ScenarioDefaults, ScenarioMeta, ScenarioSpec,
};
