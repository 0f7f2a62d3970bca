//! Session state for the frontend
//!
//! The current bit sequence and line code live in [`SessionState`], owned by
//! the app and handed to the waveform builder on every frame. Widgets never
//! mutate it directly; they return [`AppAction`]s that are applied after the
//! frame is laid out.

use crate::config::SessionDefaults;
use crate::error::Result;
use crate::sequence::BitSequence;
use crate::types::LineCode;
use crate::waveform::{self, Bounds, Waveform};

/// Actions the UI can emit
#[derive(Debug, Clone, PartialEq)]
pub enum AppAction {
    /// Switch to another line code
    SelectCode(LineCode),
    /// Replace the bit sequence with the edited text
    EditBits(String),
}

/// Bits and line code currently on screen
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    bits: BitSequence,
    code: LineCode,
    last_error: Option<String>,
}

impl SessionState {
    pub fn new(bits: BitSequence, code: LineCode) -> Self {
        Self {
            bits,
            code,
            last_error: None,
        }
    }

    /// Initial session from configuration
    pub fn from_defaults(defaults: &SessionDefaults) -> Self {
        Self::new(defaults.initial_bits(), defaults.code)
    }

    pub fn bits(&self) -> &BitSequence {
        &self.bits
    }

    pub fn code(&self) -> LineCode {
        self.code
    }

    /// Message from the most recent rejected edit, if any
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Apply an action. Returns true if the session changed.
    ///
    /// Edited text is filtered to binary digits. An edit that is still too
    /// long after filtering is rejected and the previous sequence is kept.
    pub fn apply(&mut self, action: AppAction) -> bool {
        match action {
            AppAction::SelectCode(code) => {
                if code == self.code {
                    return false;
                }
                tracing::debug!("Line code changed: {} -> {}", self.code, code);
                self.code = code;
                true
            }
            AppAction::EditBits(text) => match BitSequence::from_input(&text) {
                Ok(bits) => {
                    self.last_error = None;
                    if bits == self.bits {
                        return false;
                    }
                    tracing::debug!(len = bits.len(), "Bit sequence changed");
                    self.bits = bits;
                    true
                }
                Err(e) => {
                    tracing::warn!("Rejected bit sequence edit: {}", e);
                    self.last_error = Some(e.to_string());
                    false
                }
            },
        }
    }

    /// Build the waveform for the current session inside `bounds`
    pub fn build(&self, bounds: Bounds) -> Result<Waveform> {
        waveform::build(&self.bits, self.code, bounds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence::MAX_DIGITS;
    use crate::types::SignalLevel;

    #[test]
    fn test_from_defaults() {
        let session = SessionState::from_defaults(&SessionDefaults::default());
        assert_eq!(session.bits().as_str(), "01001100011");
        assert_eq!(session.code(), LineCode::NrzL);
        assert!(session.last_error().is_none());
    }

    #[test]
    fn test_select_code() {
        let mut session = SessionState::default();
        assert!(session.apply(AppAction::SelectCode(LineCode::Manchester)));
        assert_eq!(session.code(), LineCode::Manchester);
        assert!(!session.apply(AppAction::SelectCode(LineCode::Manchester)));
    }

    #[test]
    fn test_edit_bits_filters_input() {
        let mut session = SessionState::default();
        assert!(session.apply(AppAction::EditBits("1 0-1".to_string())));
        assert_eq!(session.bits().as_str(), "101");
    }

    #[test]
    fn test_oversize_edit_keeps_previous_bits() {
        let mut session = SessionState::default();
        let before = session.bits().clone();

        assert!(!session.apply(AppAction::EditBits("1".repeat(MAX_DIGITS + 1))));
        assert_eq!(session.bits(), &before);
        assert!(session.last_error().is_some());

        assert!(session.apply(AppAction::EditBits("0".to_string())));
        assert!(session.last_error().is_none());
    }

    #[test]
    fn test_empty_edit_builds_empty_waveform() {
        let mut session = SessionState::default();
        assert!(session.apply(AppAction::EditBits(String::new())));

        let wave = session
            .build(Bounds::new(0.0, 100.0, 0.0, 50.0))
            .unwrap();
        assert!(wave.is_empty());
    }

    #[test]
    fn test_build_uses_session_code() {
        let mut session = SessionState::new(BitSequence::parse("011").unwrap(), LineCode::NrzL);
        session.apply(AppAction::SelectCode(LineCode::Ami));

        let wave = session
            .build(Bounds::new(0.0, 30.0, 0.0, 10.0))
            .unwrap();
        assert_eq!(
            wave.levels,
            vec![SignalLevel::Zero, SignalLevel::High, SignalLevel::Low]
        );
    }
}
