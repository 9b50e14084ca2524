//! Sample roadmap used by the demo binary and tests

use crate::canvas::{Node, NodeStatus};
use crate::provider::model::{RoadmapMetrics, RoadmapPayload};

/// Seven-step career roadmap spanning x = 25..1000
pub fn sample_nodes() -> Vec<Node> {
    vec![
        Node::new(1, "Set Goals")
            .with_position(25.0, 195.0)
            .with_size(50.0)
            .with_status(NodeStatus::Completed)
            .with_icon("🎯")
            .with_description("Define your career goal and direction."),
        Node::new(2, "Self Assessment")
            .with_position(175.0, 195.0)
            .with_size(50.0)
            .with_status(NodeStatus::Completed)
            .with_icon("📝")
            .with_description("Analyze your strengths and weaknesses and find what to improve."),
        Node::new(3, "Skill Building")
            .with_position(310.0, 180.0)
            .with_size(90.0)
            .with_status(NodeStatus::Current)
            .with_icon("💼")
            .with_description("Develop the core skills the role needs and gain hands-on experience."),
        Node::new(4, "Networking")
            .with_position(485.0, 195.0)
            .with_size(50.0)
            .with_status(NodeStatus::Locked)
            .with_icon("🤝")
            .with_description("Build a network with people in the industry."),
        Node::new(5, "Interview Prep")
            .with_position(635.0, 195.0)
            .with_size(50.0)
            .with_status(NodeStatus::Locked)
            .with_icon("🎤")
            .with_description("Prepare for real interviews."),
        Node::new(6, "Apply")
            .with_position(785.0, 195.0)
            .with_size(50.0)
            .with_status(NodeStatus::Locked)
            .with_icon("🚀")
            .with_description("Apply to the companies you want and take the challenge."),
        Node::new(7, "Goal Reached")
            .with_position(890.0, 165.0)
            .with_size(110.0)
            .with_status(NodeStatus::Locked)
            .with_icon("🏆")
            .with_description("Congratulations! You reached your career goal!")
            .final_node(),
    ]
}

/// Header metrics shown alongside the sample roadmap
pub fn sample_metrics() -> RoadmapMetrics {
    RoadmapMetrics {
        completion_percent: 42.0,
        points: 1245,
        streak_days: 12,
    }
}

/// The sample as a provider payload; `--offline` ingests it like any fetched roadmap
pub fn sample_payload() -> RoadmapPayload {
    RoadmapPayload::from_nodes("Career Roadmap", &sample_nodes(), sample_metrics())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{PathLayout, RoadmapCanvas};
    use crate::provider::ingest;

    #[test]
    fn test_sample_payload_ingests_to_sample_nodes() {
        let payload = sample_payload();
        assert_eq!(payload.metrics, sample_metrics());

        let ingested = ingest(&payload, &PathLayout::default());
        let expected = sample_nodes();
        assert_eq!(ingested.len(), expected.len());
        for (got, want) in ingested.iter().zip(&expected) {
            assert_eq!(got.id, want.id);
            assert_eq!(got.title, want.title);
            assert_eq!(got.status, want.status);
            assert_eq!(got.icon, want.icon);
            assert_eq!(got.description, want.description);
            assert_eq!(got.is_final, want.is_final);
        }

        let canvas = RoadmapCanvas::with_nodes(1000.0, ingested);
        assert_eq!(canvas.selected_node().map(|n| n.title.as_str()), Some("Skill Building"));
    }
}
