//! Roadmap payload records as delivered by the API

use crate::canvas::{Node, NodeStatus};
use serde::{Deserialize, Serialize};

/// One roadmap as returned by `GET /roadmap/`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoadmapPayload {
    #[serde(default)]
    pub title: String,

    /// Planned duration of the whole roadmap
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_months: Option<f32>,

    #[serde(default)]
    pub items: Vec<RoadmapItem>,

    #[serde(default)]
    pub metrics: RoadmapMetrics,
}

/// A single milestone. Everything except `id` and `title` is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoadmapItem {
    pub id: u64,

    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// "completed", "current", "locked", "pending" (or aliases)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// Lower comes first
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_weeks: Option<f32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub importance: Option<f32>,
}

/// Aggregate progress numbers
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RoadmapMetrics {
    #[serde(default)]
    pub completion_percent: f32,

    #[serde(default)]
    pub points: u32,

    #[serde(default)]
    pub streak_days: u32,
}

fn status_name(status: NodeStatus) -> &'static str {
    match status {
        NodeStatus::Completed => "completed",
        NodeStatus::Current => "current",
        NodeStatus::Locked => "locked",
        NodeStatus::Pending => "pending",
    }
}

impl RoadmapPayload {
    /// Build a payload from already-resolved nodes, priority = sequence order
    pub fn from_nodes(title: impl Into<String>, nodes: &[Node], metrics: RoadmapMetrics) -> Self {
        let items = nodes
            .iter()
            .enumerate()
            .map(|(i, node)| RoadmapItem {
                id: node.id.0,
                title: node.title.clone(),
                description: Some(node.description.clone()).filter(|d| !d.is_empty()),
                status: Some(status_name(node.status).to_string()),
                priority: Some(i as u32 + 1),
                icon: Some(node.icon.clone()).filter(|i| !i.is_empty()),
                duration_weeks: None,
                importance: None,
            })
            .collect();

        Self {
            title: title.into(),
            total_months: None,
            items,
            metrics,
        }
    }
}
