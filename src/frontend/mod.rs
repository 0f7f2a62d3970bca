//! Frontend module for egui UI
//!
//! This module provides the window contents using eframe/egui. Each frame it
//! reads the session state, rebuilds the waveform for the canvas size, and
//! draws it.
//!
//! # Main Types
//!
//! - [`LineCodeApp`] - Main application state implementing [`eframe::App`]
//! - [`SessionState`] - Current bits and line code
//! - [`WaveformView`] - Draws a waveform into a [`DrawingSink`]
//!
//! # Submodules
//!
//! - `state` - Session view-model and UI actions
//! - `view` - Drawing sink trait and egui painter implementation
//! - `widgets` - Line code picker and bit sequence input

pub mod state;
pub mod view;
pub mod widgets;

pub use state::{AppAction, SessionState};
pub use view::{DrawingSink, PainterSink, WaveformView};
pub use widgets::{BitSequenceEdit, CodePicker};

use crate::config::{AppConfig, APP_TITLE};
use crate::error::ResultExt;
use crate::waveform::Bounds;
use egui::Color32;

/// Main application state for the line code visualizer
pub struct LineCodeApp {
    config: AppConfig,
    session: SessionState,
    /// Contents of the bit input field
    input: String,
    view: WaveformView,
}

impl LineCodeApp {
    /// Create the app from configuration
    pub fn new(cc: &eframe::CreationContext<'_>, config: AppConfig) -> Self {
        if config.ui.dark_mode {
            cc.egui_ctx.set_visuals(egui::Visuals::dark());
        } else {
            cc.egui_ctx.set_visuals(egui::Visuals::light());
        }

        Self::with_config(config)
    }

    /// Create the app state without a window, e.g. for tests
    pub fn with_config(config: AppConfig) -> Self {
        let session = SessionState::from_defaults(&config.session);
        let view = WaveformView::from_config(&config.ui);
        Self {
            input: session.bits().to_string(),
            config,
            session,
            view,
        }
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    /// Contents of the bit input field
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Apply a UI action to the session
    ///
    /// A rejected bit edit puts the input field back to the bits on screen.
    pub fn handle_action(&mut self, action: AppAction) {
        let is_edit = matches!(action, AppAction::EditBits(_));
        if self.session.apply(action) {
            tracing::trace!(
                code = %self.session.code(),
                bits = self.session.bits().len(),
                "Session updated"
            );
        } else if is_edit && self.session.last_error().is_some() {
            self.input = self.session.bits().to_string();
        }
    }

    fn render_waveform(&self, ui: &mut egui::Ui) {
        let size = egui::vec2(ui.available_width(), self.config.ui.view_height);
        let (rect, _) = ui.allocate_exact_size(size, egui::Sense::hover());
        if !ui.is_rect_visible(rect) {
            return;
        }

        let bounds = Bounds::from_origin_size(rect.left(), rect.top(), rect.width(), rect.height());
        match self.session.build(bounds).context("Failed to build waveform") {
            Ok(waveform) => {
                let painter = ui.painter();
                let mut sink = PainterSink::new(painter, self.config.ui.line_width);
                self.view.render(&mut sink, &waveform);
            }
            Err(e) => {
                tracing::warn!("{}", e);
                ui.colored_label(Color32::RED, e.to_string());
            }
        }
    }
}

impl eframe::App for LineCodeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut actions = Vec::new();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading(APP_TITLE);
            ui.add_space(4.0);

            let mut code = self.session.code();
            if ui.add(CodePicker::new(&mut code)).changed() {
                actions.push(AppAction::SelectCode(code));
            }

            ui.add_space(8.0);
            ui.label("Bit sequence:");
            let edit = BitSequenceEdit::new(&mut self.input).with_hint("e.g. 01001100011");
            if ui.add(edit).changed() {
                actions.push(AppAction::EditBits(self.input.clone()));
            }

            if let Some(err) = self.session.last_error() {
                ui.colored_label(Color32::RED, err);
            }

            ui.add_space(8.0);
            self.render_waveform(ui);

            ui.add_space(4.0);
            ui.weak(format!(
                "{} bits, {}",
                self.session.bits().len(),
                self.session.code()
            ));
        });

        for action in actions {
            self.handle_action(action);
        }
    }
}
