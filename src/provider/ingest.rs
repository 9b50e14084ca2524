//! Payload -> node registry ingestion
//!
//! All defaulting happens here, once, so the render layer never has to
//! re-derive missing fields.

use super::model::{RoadmapItem, RoadmapPayload};
use crate::canvas::{Node, NodeId, NodeStatus, PathLayout};

/// Icon for items that don't name one
pub const DEFAULT_ICON: &str = "•";

/// Icon for the final milestone when it doesn't name one
pub const FINAL_ICON: &str = "🏆";

/// Resolve a payload into a positioned node sequence
pub fn ingest(payload: &RoadmapPayload, layout: &PathLayout) -> Vec<Node> {
    let mut items: Vec<&RoadmapItem> = payload.items.iter().collect();
    // Stable: ties and missing priorities keep provider order
    items.sort_by_key(|item| item.priority.unwrap_or(u32::MAX));

    let total = items.len();
    let completed = completed_count(payload.metrics.completion_percent, total);

    let mut nodes: Vec<Node> = items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let is_final = index + 1 == total;
            let status = item
                .status
                .as_deref()
                .and_then(NodeStatus::parse)
                .unwrap_or_else(|| derived_status(index, completed));

            let description = non_blank(item.description.as_deref())
                .map(str::to_string)
                .unwrap_or_else(|| format!("Step {} of {}: {}", index + 1, total, item.title));

            let icon = non_blank(item.icon.as_deref())
                .unwrap_or(if is_final { FINAL_ICON } else { DEFAULT_ICON });

            let mut node = Node::new(NodeId(item.id), item.title.trim())
                .with_status(status)
                .with_description(description)
                .with_icon(icon);
            node.is_final = is_final;
            node
        })
        .collect();

    layout.apply(&mut nodes);
    log::debug!(
        "Ingested {} items ({} completed by metrics)",
        nodes.len(),
        completed
    );
    nodes
}

/// How many leading items the completion percentage covers
fn completed_count(percent: f32, total: usize) -> usize {
    let percent = if percent.is_finite() { percent.clamp(0.0, 100.0) } else { 0.0 };
    ((percent * total as f32 / 100.0).round() as usize).min(total)
}

fn derived_status(index: usize, completed: usize) -> NodeStatus {
    if index < completed {
        NodeStatus::Completed
    } else if index == completed {
        NodeStatus::Current
    } else {
        NodeStatus::Locked
    }
}

fn non_blank(s: Option<&str>) -> Option<&str> {
    s.map(str::trim).filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use crate::provider::model::RoadmapMetrics;

    fn item(id: u64, title: &str, priority: Option<u32>) -> RoadmapItem {
        RoadmapItem {
            id,
            title: title.to_string(),
            priority,
            ..Default::default()
        }
    }

    #[test]
    fn test_orders_by_priority() {
        let payload = RoadmapPayload {
            items: vec![item(1, "c", None), item(2, "b", Some(2)), item(3, "a", Some(1))],
            ..Default::default()
        };
        let nodes = ingest(&payload, &PathLayout::default());
        let ids: Vec<u64> = nodes.iter().map(|n| n.id.0).collect();
        assert_eq!(ids, vec![3, 2, 1]);
        assert!(nodes[2].is_final);
        assert!(!nodes[0].is_final);
    }

    #[test]
    fn test_defaults() {
        let mut first = item(1, "Learn Rust", Some(1));
        first.description = Some("   ".to_string());
        let payload = RoadmapPayload {
            items: vec![first, item(2, "Ship it", Some(2))],
            ..Default::default()
        };
        let nodes = ingest(&payload, &PathLayout::default());
        assert_eq!(nodes[0].description, "Step 1 of 2: Learn Rust");
        assert_eq!(nodes[0].icon, DEFAULT_ICON);
        assert_eq!(nodes[1].icon, FINAL_ICON);
    }

    #[test]
    fn test_status_derived_from_completion() {
        let payload = RoadmapPayload {
            items: (1..=5).map(|i| item(i, "step", Some(i as u32))).collect(),
            metrics: RoadmapMetrics {
                completion_percent: 40.0,
                ..Default::default()
            },
            ..Default::default()
        };
        let statuses: Vec<NodeStatus> = ingest(&payload, &PathLayout::default())
            .iter()
            .map(|n| n.status)
            .collect();
        assert_eq!(
            statuses,
            vec![
                NodeStatus::Completed,
                NodeStatus::Completed,
                NodeStatus::Current,
                NodeStatus::Locked,
                NodeStatus::Locked,
            ]
        );
    }

    #[test]
    fn test_explicit_status_wins() {
        let payload = fixtures::sample_payload();
        let nodes = ingest(&payload, &PathLayout::default());
        let expected: Vec<NodeStatus> = fixtures::sample_nodes().iter().map(|n| n.status).collect();
        assert_eq!(nodes.iter().map(|n| n.status).collect::<Vec<_>>(), expected);
        assert_eq!(nodes[2].size, 90.0);
        assert_eq!(nodes[6].size, 110.0);
    }

    #[test]
    fn test_empty_payload() {
        assert!(ingest(&RoadmapPayload::default(), &PathLayout::default()).is_empty());
        assert_eq!(completed_count(f32::NAN, 3), 0);
        assert_eq!(completed_count(250.0, 3), 3);
    }
}
