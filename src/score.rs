//! Score / progress summary shown above the roadmap

use crate::provider::model::RoadmapMetrics;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreSummary {
    /// Completion score, 0..=100
    pub score: u32,
    pub points: u32,
    pub streak_days: u32,
}

impl ScoreSummary {
    pub fn from_metrics(metrics: &RoadmapMetrics) -> Self {
        let percent = metrics.completion_percent;
        let score = if percent.is_finite() {
            percent.clamp(0.0, 100.0).round() as u32
        } else {
            0
        };
        Self {
            score,
            points: metrics.points,
            streak_days: metrics.streak_days,
        }
    }

    /// Fill fraction for the progress bar
    pub fn progress_fraction(&self) -> f32 {
        self.score as f32 / 100.0
    }

    pub fn label(&self) -> String {
        format!("{}%", self.score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_metrics() {
        let summary = ScoreSummary::from_metrics(&RoadmapMetrics {
            completion_percent: 41.6,
            points: 1245,
            streak_days: 12,
        });
        assert_eq!(summary.score, 42);
        assert_eq!(summary.label(), "42%");
        assert!((summary.progress_fraction() - 0.42).abs() < 1e-6);
        assert_eq!(summary.points, 1245);
    }

    #[test]
    fn test_out_of_range() {
        let over = ScoreSummary::from_metrics(&RoadmapMetrics {
            completion_percent: 140.0,
            ..Default::default()
        });
        assert_eq!(over.score, 100);

        let nan = ScoreSummary::from_metrics(&RoadmapMetrics {
            completion_percent: f32::NAN,
            ..Default::default()
        });
        assert_eq!(nan.score, 0);
    }
}
