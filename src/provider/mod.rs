//! Roadmap data provider
//!
//! Payload records, ingestion into canvas nodes, the backend's raw text
//! format, and the REST client.

pub mod client;
pub mod ingest;
pub mod model;
pub mod text;

pub use client::{error_message, ApiClient, TokenStore, Tokens};
pub use ingest::{ingest, DEFAULT_ICON, FINAL_ICON};
pub use model::{RoadmapItem, RoadmapMetrics, RoadmapPayload};
pub use text::{parse_roadmap_text, RoadmapTextParser};
