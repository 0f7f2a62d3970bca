//! Custom widgets for the line code visualizer
//!
//! # Widgets
//!
//! - [`CodePicker`] - Radio list of every supported line code
//! - [`BitSequenceEdit`] - Single-line input that only accepts binary digits

use crate::sequence::is_binary_digit;
use crate::types::LineCode;
use egui::{Response, Ui, Widget};

/// A vertical list of radio buttons, one per [`LineCode`]
///
/// The returned response reports `changed()` when a different code was picked.
pub struct CodePicker<'a> {
    current: &'a mut LineCode,
}

impl<'a> CodePicker<'a> {
    pub fn new(current: &'a mut LineCode) -> Self {
        Self { current }
    }
}

impl Widget for CodePicker<'_> {
    fn ui(self, ui: &mut Ui) -> Response {
        let mut changed = false;

        let mut response = ui
            .vertical(|ui| {
                for code in LineCode::ALL {
                    changed |= ui.radio_value(self.current, code, code.label()).changed();
                }
            })
            .response;

        if changed {
            response.mark_changed();
        }
        response
    }
}

/// A text field for `'0'`/`'1'` sequences
///
/// Anything that is not a binary digit is stripped as soon as it is typed or
/// pasted. Length is not capped here: an over-long sequence must reach
/// [`SessionState::apply`](crate::frontend::SessionState::apply) whole so it
/// can be rejected there.
pub struct BitSequenceEdit<'a> {
    text: &'a mut String,
    hint: &'a str,
}

impl<'a> BitSequenceEdit<'a> {
    pub fn new(text: &'a mut String) -> Self {
        Self { text, hint: "" }
    }

    /// Placeholder shown while the field is empty
    pub fn with_hint(mut self, hint: &'a str) -> Self {
        self.hint = hint;
        self
    }
}

impl Widget for BitSequenceEdit<'_> {
    fn ui(self, ui: &mut Ui) -> Response {
        let response = ui.add(
            egui::TextEdit::singleline(self.text)
                .hint_text(self.hint)
                .desired_width(f32::INFINITY),
        );

        if response.changed() {
            self.text.retain(is_binary_digit);
        }
        response
    }
}
