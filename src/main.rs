//! Roadmap Studio - career roadmap viewer and editor
//! Built with egui for native Wayland support

use anyhow::Context as _;
use clap::Parser;
use eframe::egui::{self, RichText};
use roadmap_studio::canvas::{Node, RoadmapCanvas};
use roadmap_studio::config::StudioConfig;
use roadmap_studio::editor::{starter_steps, RoadmapEditor};
use roadmap_studio::fixtures;
use roadmap_studio::provider::{self, ApiClient, RoadmapMetrics, RoadmapPayload};
use roadmap_studio::score::ScoreSummary;
use roadmap_studio::theme::RoadmapTheme;
use roadmap_studio::viewer::RoadmapViewer;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "roadmap-studio", version, about = "Career roadmap viewer")]
struct Args {
    /// Config file (default: ~/.config/roadmap-studio/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Load the roadmap from a JSON payload or raw roadmap text file
    #[arg(long)]
    fixture: Option<PathBuf>,

    /// Load the built-in sample payload instead of calling the API
    #[arg(long)]
    offline: bool,

    /// Override the API base URL
    #[arg(long)]
    base_url: Option<String>,

    /// Dark canvas
    #[arg(long)]
    dark: bool,
}

/// Where the roadmap comes from
enum Source {
    Api,
    File(PathBuf),
    Sample,
}

/// Result of one load attempt
struct Loaded {
    title: String,
    nodes: Vec<Node>,
    metrics: RoadmapMetrics,
    error: Option<String>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => StudioConfig::load_from(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => StudioConfig::load(),
    };
    if let Some(base_url) = &args.base_url {
        config.api.base_url = base_url.clone();
    }

    let source = match (&args.fixture, args.offline) {
        (Some(path), _) => Source::File(path.clone()),
        (None, true) => Source::Sample,
        (None, false) => Source::Api,
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window.width, config.window.height])
            .with_min_inner_size([640.0, 480.0])
            .with_title("Roadmap Studio"),
        ..Default::default()
    };

    let theme = if args.dark {
        RoadmapTheme::dark()
    } else {
        RoadmapTheme::light()
    };

    eframe::run_native(
        "Roadmap Studio",
        options,
        Box::new(move |_cc| Ok(Box::new(StudioApp::new(config, source, theme)))),
    )
    .map_err(|e| anyhow::anyhow!("eframe: {}", e))
}

struct StudioApp {
    config: StudioConfig,
    source: Source,
    viewer: RoadmapViewer,
    title: String,
    score: ScoreSummary,
    editor: RoadmapEditor,
    show_editor: bool,
}

impl StudioApp {
    fn new(config: StudioConfig, source: Source, theme: RoadmapTheme) -> Self {
        let mut viewer = RoadmapViewer::new(RoadmapCanvas::new(config.canvas.container_width));
        viewer.theme = theme;
        viewer.show_path = config.canvas.show_path;

        let mut app = Self {
            config,
            source,
            viewer,
            title: String::new(),
            score: ScoreSummary::from_metrics(&RoadmapMetrics::default()),
            editor: RoadmapEditor::new(starter_steps()),
            show_editor: false,
        };
        app.reload();
        app
    }

    fn reload(&mut self) {
        let loaded = match &self.source {
            Source::Sample => self.loaded_from(fixtures::sample_payload()),
            Source::File(path) => match load_file(path) {
                Ok(payload) => self.loaded_from(payload),
                Err(e) => failed(format!("{:#}", e)),
            },
            Source::Api => match ApiClient::new(&self.config.api).fetch_roadmap() {
                Ok(payload) => self.loaded_from(payload),
                Err(e) => failed(e.to_string()),
            },
        };

        self.title = loaded.title;
        self.score = ScoreSummary::from_metrics(&loaded.metrics);
        self.viewer.set_error(loaded.error);
        self.viewer.canvas.set_nodes(loaded.nodes);
    }

    fn loaded_from(&self, payload: RoadmapPayload) -> Loaded {
        Loaded {
            nodes: provider::ingest(&payload, &self.config.canvas.path),
            title: payload.title,
            metrics: payload.metrics,
            error: None,
        }
    }

    fn header(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.heading(if self.title.is_empty() { "Roadmap" } else { self.title.as_str() });
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("⟳ Refresh").clicked() {
                    self.reload();
                }
                ui.toggle_value(&mut self.show_editor, "✏ Editor");
                ui.label(format!("🔥 {} days", self.score.streak_days));
                ui.label(format!("⭐ {}", self.score.points));
            });
        });
        ui.horizontal(|ui| {
            ui.label(RichText::new("Progress").strong());
            ui.add(
                egui::ProgressBar::new(self.score.progress_fraction())
                    .text(self.score.label())
                    .fill(self.viewer.theme.progress_fill),
            );
        });
    }

    fn controls(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if ui.button("− Zoom out").clicked() {
                self.viewer.canvas.zoom_out();
            }
            if ui.button("↻ Reset").clicked() {
                self.viewer.canvas.reset();
            }
            if ui.button("+ Zoom in").clicked() {
                self.viewer.canvas.zoom_in();
            }
            ui.label(format!("{:.0}%", self.viewer.canvas.zoom() * 100.0));
        });
    }

    fn editor_panel(&mut self, ui: &mut egui::Ui) {
        ui.heading("Steps");
        ui.horizontal(|ui| {
            if ui.button("+ Add Step").clicked() {
                self.editor.add_step();
            }
            if ui.button("🗑 Delete Selected").clicked() {
                self.editor.delete_selected();
            }
        });
        ui.separator();

        let mut clicked = None;
        for step in self.editor.steps() {
            let is_selected = self.editor.selected().map(|s| s.id) == Some(step.id);
            let label = format!("{} ({} tasks)", step.title, step.tasks.len());
            if ui.selectable_label(is_selected, label).clicked() {
                clicked = Some(step.id);
            }
        }
        if let Some(id) = clicked {
            self.editor.select(id);
        }
        ui.separator();

        if let Some(step) = self.editor.selected() {
            let mut title = step.title.clone();
            let mut description = step.description.clone();
            let tasks = step.tasks.clone();

            ui.label("Title");
            if ui.text_edit_singleline(&mut title).changed() {
                self.editor.set_title(title);
            }
            ui.label("Description");
            if ui.text_edit_multiline(&mut description).changed() {
                self.editor.set_description(description);
            }

            ui.horizontal(|ui| {
                ui.label("Tasks");
                if ui.small_button("+ Add Task").clicked() {
                    self.editor.add_task();
                }
            });
            let mut remove = None;
            for (index, task) in tasks.iter().enumerate() {
                ui.horizontal(|ui| {
                    ui.label(task);
                    if ui.small_button("✕").clicked() {
                        remove = Some(index);
                    }
                });
            }
            if let Some(index) = remove {
                self.editor.remove_task(index);
            }
        }

        ui.separator();
        if ui.button("Show on canvas").clicked() {
            let payload = self.editor.to_payload(self.title.clone());
            let nodes = provider::ingest(&payload, &self.config.canvas.path);
            self.viewer.set_error(None);
            self.viewer.canvas.set_nodes(nodes);
        }
    }
}

impl eframe::App for StudioApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("header").show(ctx, |ui| self.header(ui));
        egui::TopBottomPanel::bottom("controls").show(ctx, |ui| self.controls(ui));
        if self.show_editor {
            egui::SidePanel::right("editor")
                .default_width(280.0)
                .show(ctx, |ui| self.editor_panel(ui));
        }
        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| self.viewer.ui(ui));
    }
}

fn failed(message: String) -> Loaded {
    log::warn!("Failed to load roadmap: {}", message);
    Loaded {
        title: String::new(),
        nodes: Vec::new(),
        metrics: RoadmapMetrics::default(),
        error: Some(message),
    }
}

/// JSON payload if the file parses as one, raw roadmap text otherwise
fn load_file(path: &Path) -> anyhow::Result<RoadmapPayload> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    if path.extension().is_some_and(|ext| ext == "json") {
        return serde_json::from_str(&content).with_context(|| format!("parsing {}", path.display()));
    }
    Ok(provider::parse_roadmap_text(&content)?)
}
