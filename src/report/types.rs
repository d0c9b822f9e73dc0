use crate::analysis::{Analysis, FailureImpactRecord, LinkStatus, UtilisationRecord};
use crate::traffic::RoutingResult;
use serde::{Deserialize, Serialize};

/// 保留两位小数（只用于展示，分级与排序用原值）
pub fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

/// 路由报告的一行
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RoutingRow {
    #[serde(rename = "Source")]
    pub source: String,
    #[serde(rename = "Destination")]
    pub destination: String,
    #[serde(rename = "Demand")]
    pub demand: f64,
    /// `A -> B -> C` 或 `UNROUTABLE`
    #[serde(rename = "Path")]
    pub path: String,
}

impl From<&RoutingResult> for RoutingRow {
    fn from(r: &RoutingResult) -> Self {
        Self {
            source: r.source.clone(),
            destination: r.destination.clone(),
            demand: r.volume,
            path: r.route.describe(),
        }
    }
}

/// 利用率报告的一行
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UtilisationRow {
    #[serde(rename = "LinkId")]
    pub link_id: String,
    #[serde(rename = "From")]
    pub from: String,
    #[serde(rename = "To")]
    pub to: String,
    #[serde(rename = "Capacity")]
    pub capacity: f64,
    #[serde(rename = "Load")]
    pub load: f64,
    #[serde(rename = "Utilisation (%)")]
    pub utilisation_percent: f64,
    #[serde(rename = "Status")]
    pub status: LinkStatus,
}

impl From<&UtilisationRecord> for UtilisationRow {
    fn from(r: &UtilisationRecord) -> Self {
        Self {
            link_id: r.link_id.clone(),
            from: r.from.clone(),
            to: r.to.clone(),
            capacity: r.capacity,
            load: round2(r.load),
            utilisation_percent: round2(r.utilisation_percent),
            status: r.status,
        }
    }
}

/// 故障影响报告的一行
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FailureRow {
    /// `A-B (ID 3)`
    #[serde(rename = "Failed_Link")]
    pub failed_link: String,
    #[serde(rename = "Unroutable_Flows")]
    pub unroutable_flows: usize,
    #[serde(rename = "Links_Overloaded")]
    pub links_overloaded: usize,
    #[serde(rename = "Max_Utilisation (%)")]
    pub max_utilisation_percent: f64,
}

impl From<&FailureImpactRecord> for FailureRow {
    fn from(r: &FailureImpactRecord) -> Self {
        Self {
            failed_link: r.descriptor(),
            unroutable_flows: r.unroutable_demands,
            links_overloaded: r.overloaded_links,
            max_utilisation_percent: round2(r.max_utilisation_percent),
        }
    }
}

/// 三份报告的集合（JSON 输出）
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Report {
    pub routing: Vec<RoutingRow>,
    pub utilisation: Vec<UtilisationRow>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failures: Option<Vec<FailureRow>>,
}

impl From<&Analysis> for Report {
    fn from(a: &Analysis) -> Self {
        Self {
            routing: a.routing.iter().map(RoutingRow::from).collect(),
            utilisation: a.utilisation.iter().map(UtilisationRow::from).collect(),
            failures: a
                .failures
                .as_ref()
                .map(|f| f.iter().map(FailureRow::from).collect()),
        }
    }
}

impl Report {
    /// 每份报告一行的摘要
    pub fn summary_lines(&self) -> Vec<String> {
        let unroutable = self
            .routing
            .iter()
            .filter(|r| r.path == crate::traffic::UNROUTABLE)
            .count();
        let count_status = |s: LinkStatus| self.utilisation.iter().filter(|r| r.status == s).count();

        let mut lines = vec![
            format!(
                "routing routed={} unroutable={}",
                self.routing.len() - unroutable,
                unroutable
            ),
            format!(
                "utilisation links={} overloaded={} critical={}",
                self.utilisation.len(),
                count_status(LinkStatus::Overloaded),
                count_status(LinkStatus::Critical)
            ),
        ];
        if let Some(failures) = &self.failures {
            let worst = failures
                .first()
                .map(|f| f.failed_link.as_str())
                .unwrap_or("-");
            lines.push(format!("wcf scenarios={} worst={}", failures.len(), worst));
        }
        lines
    }
}
