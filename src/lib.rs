//! Roadmap Studio library
//!
//! Pannable, zoomable career roadmap canvas with node selection, plus the
//! data provider that feeds it and an egui viewer that draws it.

pub mod canvas;
pub mod config;
pub mod editor;
pub mod error;
pub mod fixtures;
pub mod provider;
pub mod score;
pub mod theme;
pub mod viewer;

pub use canvas::{Node, NodeId, NodeStatus, RoadmapCanvas};
pub use config::StudioConfig;
pub use error::{Result, StudioError};
pub use viewer::RoadmapViewer;
