//! 报告输出
//!
//! 把分析结果转成可序列化的行（路由报告、利用率报告、故障影响报告），
//! 供外部写入文件或渲染；另提供纯文本表格用于终端输出。

mod table;
mod types;

pub use table::{render_failures, render_routing, render_utilisation};
pub use types::{FailureRow, Report, RoutingRow, UtilisationRow, round2};
