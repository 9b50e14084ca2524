//! Raw roadmap text parser
//!
//! The backend stores generated roadmaps as free text with tagged items:
//!
//! ```text
//! 제목: <TITLE-Data Analyst-6>
//! <1.SQL fundamentals-4-0.9>
//! <2.Dashboard project-6-0.7>
//! <final.Data Analyst-6>
//! ```
//!
//! Each item tag is `<priority.title-weeks-importance>`; the `final` tag
//! carries the plan title and total months.

use super::model::{RoadmapItem, RoadmapPayload};
use crate::error::Result;
use regex::Regex;

pub struct RoadmapTextParser {
    item: Regex,
    final_tag: Regex,
    title_tag: Regex,
}

impl RoadmapTextParser {
    pub fn new() -> Result<Self> {
        Ok(Self {
            item: Regex::new(
                r"<\s*(?P<priority>\d+)\.(?P<title>[^-]+)-(?P<weeks>[\d.]+)-(?P<importance>[\d.]+)\s*>",
            )?,
            final_tag: Regex::new(r"(?i)<\s*final\.([^>-]+)-([\d.]+)\s*>")?,
            title_tag: Regex::new(r"(?i)제목:\s*<TITLE-([^>-]+)-([^>]+)>")?,
        })
    }

    /// Extract items and plan metadata. Text without tags yields an empty payload.
    pub fn parse(&self, raw: &str) -> RoadmapPayload {
        let items: Vec<RoadmapItem> = self
            .item
            .captures_iter(raw)
            .enumerate()
            .map(|(index, caps)| RoadmapItem {
                id: index as u64 + 1,
                title: caps["title"].trim().to_string(),
                priority: caps["priority"].parse().ok(),
                duration_weeks: caps["weeks"].parse().ok(),
                importance: caps["importance"].parse().ok(),
                ..Default::default()
            })
            .collect();

        let mut title = String::new();
        let mut total_months = None;
        if let Some(caps) = self.final_tag.captures(raw) {
            title = caps[1].trim().to_string();
            total_months = caps[2].parse().ok();
        }
        if title.is_empty() {
            if let Some(caps) = self.title_tag.captures(raw) {
                title = caps[1].trim().to_string();
            }
        }

        RoadmapPayload {
            title,
            total_months,
            items,
            ..Default::default()
        }
    }
}

/// One-shot helper around [`RoadmapTextParser`]
pub fn parse_roadmap_text(raw: &str) -> Result<RoadmapPayload> {
    Ok(RoadmapTextParser::new()?.parse(raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_items_and_final() {
        let raw = "Here is your plan\n<1.SQL fundamentals-4-0.9>\n< 2.Dashboard project-6.5-0.7 >\n<final.Data Analyst-6>";
        let payload = parse_roadmap_text(raw).unwrap();

        assert_eq!(payload.title, "Data Analyst");
        assert_eq!(payload.total_months, Some(6.0));
        assert_eq!(payload.items.len(), 2);
        assert_eq!(payload.items[0].title, "SQL fundamentals");
        assert_eq!(payload.items[0].priority, Some(1));
        assert_eq!(payload.items[1].duration_weeks, Some(6.5));
        assert_eq!(payload.items[1].importance, Some(0.7));
    }

    #[test]
    fn test_title_tag_fallback() {
        let raw = "제목: <TITLE-Backend Engineer-12>\n<1.Python-3-1>";
        let payload = parse_roadmap_text(raw).unwrap();
        assert_eq!(payload.title, "Backend Engineer");
        assert_eq!(payload.total_months, None);
        assert_eq!(payload.items.len(), 1);
    }

    #[test]
    fn test_malformed_numbers() {
        let raw = "<3.Portfolio-1..2-0.5>";
        let payload = parse_roadmap_text(raw).unwrap();
        assert_eq!(payload.items[0].priority, Some(3));
        assert_eq!(payload.items[0].duration_weeks, None);
    }

    #[test]
    fn test_no_tags() {
        let payload = parse_roadmap_text("nothing to see").unwrap();
        assert!(payload.items.is_empty());
        assert!(payload.title.is_empty());
    }
}
