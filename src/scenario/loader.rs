use std::fs;
use std::path::{Path, PathBuf};

use super::records::{DemandRecord, LinkRecord, LoadPolicy, ScenarioSpec};
use crate::net::{InvalidLinkError, Topology};
use crate::traffic::{Demand, InvalidDemandError};
use thiserror::Error;
use tracing::{info, warn};

#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("failed to read scenario {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse scenario: {0}")]
    Json(#[from] serde_json::Error),
    #[error("link record {index}: {source}")]
    InvalidLink {
        index: usize,
        #[source]
        source: InvalidLinkError,
    },
    #[error("demand record {index}: {source}")]
    InvalidDemand {
        index: usize,
        #[source]
        source: InvalidDemandError,
    },
}

/// A scenario turned into core data structures.
#[derive(Debug, Clone)]
pub struct LoadedScenario {
    pub topology: Topology,
    pub demands: Vec<Demand>,
    /// Skipped link records, by position in the input.
    pub rejected_links: Vec<(usize, InvalidLinkError)>,
    /// Skipped demand records, by position in the input.
    pub rejected_demands: Vec<(usize, InvalidDemandError)>,
}

impl ScenarioSpec {
    pub fn from_json_str(raw: &str) -> Result<Self, ScenarioError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn from_path(path: &Path) -> Result<Self, ScenarioError> {
        let raw = fs::read_to_string(path).map_err(|source| ScenarioError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&raw)
    }

    /// Policy from `defaults.load_policy`, falling back to skip-invalid.
    pub fn load_policy(&self) -> LoadPolicy {
        self.defaults
            .as_ref()
            .and_then(|d| d.load_policy)
            .unwrap_or_default()
    }

    pub fn build(&self, policy: LoadPolicy) -> Result<LoadedScenario, ScenarioError> {
        let (topology, rejected_links) = build_topology(&self.links, policy)?;
        let (demands, rejected_demands) = build_demands(&self.demands, policy)?;
        info!(
            nodes = topology.node_count(),
            links = topology.link_count(),
            demands = demands.len(),
            rejected_links = rejected_links.len(),
            rejected_demands = rejected_demands.len(),
            "场景加载完成"
        );
        Ok(LoadedScenario {
            topology,
            demands,
            rejected_links,
            rejected_demands,
        })
    }
}

pub fn build_topology(
    records: &[LinkRecord],
    policy: LoadPolicy,
) -> Result<(Topology, Vec<(usize, InvalidLinkError)>), ScenarioError> {
    let mut topo = Topology::new();
    let mut rejected = Vec::new();
    for (index, rec) in records.iter().enumerate() {
        let a = rec.start_node.to_string();
        let b = rec.end_node.to_string();
        if let Err(source) = topo.add_link(&a, &b, rec.link_id.to_string(), rec.capacity, rec.weight)
        {
            if policy == LoadPolicy::Strict {
                return Err(ScenarioError::InvalidLink { index, source });
            }
            warn!(index, error = %source, "跳过无效链路记录");
            rejected.push((index, source));
        }
    }
    Ok((topo, rejected))
}

pub fn build_demands(
    records: &[DemandRecord],
    policy: LoadPolicy,
) -> Result<(Vec<Demand>, Vec<(usize, InvalidDemandError)>), ScenarioError> {
    let mut demands = Vec::with_capacity(records.len());
    let mut rejected = Vec::new();
    for (index, rec) in records.iter().enumerate() {
        match Demand::new(rec.source.to_string(), rec.destination.to_string(), rec.demand) {
            Ok(d) => demands.push(d),
            Err(source) if policy == LoadPolicy::Strict => {
                return Err(ScenarioError::InvalidDemand { index, source });
            }
            Err(source) => {
                warn!(index, error = %source, "跳过无效需求记录");
                rejected.push((index, source));
            }
        }
    }
    Ok((demands, rejected))
}
