//! Roadmap Editor
//!
//! Editing state for a user's roadmap steps: add/delete steps, edit title and
//! description, manage each step's task list. Every edit applies to the
//! selected step and is a no-op without one.

use crate::provider::model::{RoadmapItem, RoadmapMetrics, RoadmapPayload};
use eframe::egui::Pos2;

pub type StepId = u64;

/// Card color family
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepTheme {
    Blue,
    Green,
    Yellow,
    Purple,
}

impl StepTheme {
    pub const ALL: [StepTheme; 4] = [
        StepTheme::Blue,
        StepTheme::Green,
        StepTheme::Yellow,
        StepTheme::Purple,
    ];

    /// Theme for the n-th step, cycling
    pub fn for_index(index: usize) -> Self {
        Self::ALL[index % Self::ALL.len()]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EditorStep {
    pub id: StepId,
    pub title: String,
    pub description: String,
    pub tasks: Vec<String>,
    pub theme: StepTheme,
    /// Card position on the editor canvas
    pub position: Pos2,
}

#[derive(Debug, Clone, Default)]
pub struct RoadmapEditor {
    steps: Vec<EditorStep>,
    selected: Option<StepId>,
}

impl RoadmapEditor {
    pub fn new(steps: Vec<EditorStep>) -> Self {
        let selected = steps.first().map(|s| s.id);
        Self { steps, selected }
    }

    pub fn steps(&self) -> &[EditorStep] {
        &self.steps
    }

    pub fn selected(&self) -> Option<&EditorStep> {
        let id = self.selected?;
        self.steps.iter().find(|s| s.id == id)
    }

    fn selected_mut(&mut self) -> Option<&mut EditorStep> {
        let id = self.selected?;
        self.steps.iter_mut().find(|s| s.id == id)
    }

    /// Select a step; unknown ids are ignored
    pub fn select(&mut self, id: StepId) {
        if self.steps.iter().any(|s| s.id == id) {
            self.selected = Some(id);
        }
    }

    /// Append a blank step and select it
    pub fn add_step(&mut self) -> StepId {
        let n = self.steps.len();
        let id = self.steps.iter().map(|s| s.id).max().unwrap_or(0) + 1;
        self.steps.push(EditorStep {
            id,
            title: "New Step".to_string(),
            description: "Add description...".to_string(),
            tasks: Vec::new(),
            theme: StepTheme::for_index(n),
            position: Pos2::new(100.0 + n as f32 * 50.0, 100.0 + n as f32 * 30.0),
        });
        self.selected = Some(id);
        log::debug!("Added step {}", id);
        id
    }

    /// Remove the selected step; selection falls to the first remaining one
    pub fn delete_selected(&mut self) {
        let Some(id) = self.selected else {
            return;
        };
        self.steps.retain(|s| s.id != id);
        self.selected = self.steps.first().map(|s| s.id);
        log::debug!("Deleted step {}", id);
    }

    pub fn add_task(&mut self) {
        if let Some(step) = self.selected_mut() {
            step.tasks.push("New task".to_string());
        }
    }

    /// Remove a task of the selected step; out-of-range indices are ignored
    pub fn remove_task(&mut self, index: usize) {
        if let Some(step) = self.selected_mut() {
            if index < step.tasks.len() {
                step.tasks.remove(index);
            }
        }
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        if let Some(step) = self.selected_mut() {
            step.title = title.into();
        }
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        if let Some(step) = self.selected_mut() {
            step.description = description.into();
        }
    }

    /// Export the steps as a provider payload, priority = step order
    pub fn to_payload(&self, title: impl Into<String>) -> RoadmapPayload {
        let items = self
            .steps
            .iter()
            .enumerate()
            .map(|(i, step)| RoadmapItem {
                id: step.id,
                title: step.title.clone(),
                description: Some(step.description.clone()),
                priority: Some(i as u32 + 1),
                ..Default::default()
            })
            .collect();

        RoadmapPayload {
            title: title.into(),
            items,
            metrics: RoadmapMetrics::default(),
            ..Default::default()
        }
    }
}

/// The editor's starter steps
pub fn starter_steps() -> Vec<EditorStep> {
    let step = |id: StepId, title: &str, description: &str, tasks: &[&str], x: f32, y: f32| EditorStep {
        id,
        title: title.to_string(),
        description: description.to_string(),
        tasks: tasks.iter().map(|t| t.to_string()).collect(),
        theme: StepTheme::for_index(id as usize - 1),
        position: Pos2::new(x, y),
    };

    vec![
        step(1, "Foundation Skills", "Learn basics of programming and tools",
            &["Learn Python syntax", "Version control with Git", "Basic data structures"], 20.0, 20.0),
        step(2, "Portfolio Projects", "Build real-world applications",
            &["Personal website", "API integration project", "Database design"], 20.0, 280.0),
        step(3, "Job Search Prep", "Resume, interviews, networking",
            &["Polish LinkedIn profile", "Practice behavioral questions"], 300.0, 280.0),
        step(4, "First Role & Growth", "Onboarding and skill advancement",
            &["Master team codebase", "Learn advanced system design"], 300.0, 20.0),
    ]
}
