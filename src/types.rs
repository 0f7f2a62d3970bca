//! Core data types for the line code visualizer
//!
//! This module contains the signal levels a line code can emit, the set of
//! supported line codes with their display metadata, and the carried encoder
//! state threaded from one bit to the next.
//!
//! # Main Types
//!
//! - [`SignalLevel`] - One of the five levels a bit cell can be drawn as
//! - [`LineCode`] - The six supported line-coding schemes
//! - [`EncoderState`] - The `(last_signal, last_bipolar)` pair carried between bits
//!
//! # Initial State
//!
//! Several codes depend on the previously emitted level. Each [`LineCode`]
//! supplies a fixed seed for both pieces of state so that the first bit of a
//! sequence always encodes the same way.

use crate::error::{LineCodeError, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A signal level emitted for a single bit cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignalLevel {
    /// Negative level for the whole cell
    Low,
    /// Positive level for the whole cell
    High,
    /// Zero level for the whole cell
    Zero,
    /// Rising transition at the middle of the cell
    LowToHigh,
    /// Falling transition at the middle of the cell
    HighToLow,
}

impl SignalLevel {
    /// All signal levels
    pub const ALL: [SignalLevel; 5] = [
        SignalLevel::Low,
        SignalLevel::High,
        SignalLevel::Zero,
        SignalLevel::LowToHigh,
        SignalLevel::HighToLow,
    ];

    /// Returns the opposite level. `Zero` is its own opposite.
    pub fn opposite(self) -> Self {
        match self {
            SignalLevel::Low => SignalLevel::High,
            SignalLevel::High => SignalLevel::Low,
            SignalLevel::Zero => SignalLevel::Zero,
            SignalLevel::LowToHigh => SignalLevel::HighToLow,
            SignalLevel::HighToLow => SignalLevel::LowToHigh,
        }
    }

    /// Returns true for the zero level
    pub fn is_zero(self) -> bool {
        self == SignalLevel::Zero
    }

    /// Returns true if the level changes in the middle of the cell
    pub fn is_transition(self) -> bool {
        matches!(self, SignalLevel::LowToHigh | SignalLevel::HighToLow)
    }
}

impl std::fmt::Display for SignalLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SignalLevel::Low => write!(f, "low"),
            SignalLevel::High => write!(f, "high"),
            SignalLevel::Zero => write!(f, "zero"),
            SignalLevel::LowToHigh => write!(f, "low-to-high"),
            SignalLevel::HighToLow => write!(f, "high-to-low"),
        }
    }
}

/// A line-coding scheme
///
/// Serialized by its kebab-case name (`nrz-l`, `differential-manchester`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum LineCode {
    /// Non-return-to-zero, level
    #[default]
    NrzL,
    /// Non-return-to-zero, inverted on ones
    NrzI,
    /// Alternate mark inversion
    Ami,
    /// Pseudoternary
    Pseudoternary,
    /// Manchester (IEEE 802.3 convention)
    Manchester,
    /// Differential Manchester
    DifferentialManchester,
}

impl LineCode {
    /// All line codes, in picker order
    pub const ALL: [LineCode; 6] = [
        LineCode::NrzL,
        LineCode::NrzI,
        LineCode::Ami,
        LineCode::Pseudoternary,
        LineCode::Manchester,
        LineCode::DifferentialManchester,
    ];

    /// Look up a line code by its position in [`LineCode::ALL`]
    pub fn from_index(index: usize) -> Result<Self> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or_else(|| LineCodeError::UnknownScheme(format!("index {}", index)))
    }

    /// Position of this code in [`LineCode::ALL`]
    pub fn index(self) -> usize {
        match self {
            LineCode::NrzL => 0,
            LineCode::NrzI => 1,
            LineCode::Ami => 2,
            LineCode::Pseudoternary => 3,
            LineCode::Manchester => 4,
            LineCode::DifferentialManchester => 5,
        }
    }

    /// Display label, including where the code is used in practice
    pub fn label(self) -> &'static str {
        match self {
            LineCode::NrzL => "NRZ-L: RS-232",
            LineCode::NrzI => "NRZ-I: USB",
            LineCode::Ami => "AMI: T1 digital trunk (primary ISDN, 1.544 Mbps)",
            LineCode::Pseudoternary => "Pseudoternary: basic ISDN interface (192 kbps)",
            LineCode::Manchester => "Manchester: IEEE 802.3",
            LineCode::DifferentialManchester => "Differential Manchester: IEEE 802.5",
        }
    }

    /// Bare scheme name
    pub fn short_name(self) -> &'static str {
        match self {
            LineCode::NrzL => "NRZ-L",
            LineCode::NrzI => "NRZ-I",
            LineCode::Ami => "AMI",
            LineCode::Pseudoternary => "Pseudoternary",
            LineCode::Manchester => "Manchester",
            LineCode::DifferentialManchester => "Differential Manchester",
        }
    }

    /// Machine name used in configuration files
    pub fn key(self) -> &'static str {
        match self {
            LineCode::NrzL => "nrz-l",
            LineCode::NrzI => "nrz-i",
            LineCode::Ami => "ami",
            LineCode::Pseudoternary => "pseudoternary",
            LineCode::Manchester => "manchester",
            LineCode::DifferentialManchester => "differential-manchester",
        }
    }

    /// Seed for `last_signal` before the first bit
    pub fn initial_last_signal(self) -> SignalLevel {
        match self {
            LineCode::NrzL => SignalLevel::Zero,
            LineCode::NrzI => SignalLevel::Low,
            LineCode::Ami => SignalLevel::Zero,
            LineCode::Pseudoternary => SignalLevel::Zero,
            LineCode::Manchester => SignalLevel::Zero,
            LineCode::DifferentialManchester => SignalLevel::LowToHigh,
        }
    }

    /// Seed for `last_bipolar` before the first bit
    pub fn initial_last_bipolar(self) -> SignalLevel {
        match self {
            LineCode::Ami | LineCode::Pseudoternary => SignalLevel::Low,
            _ => SignalLevel::Zero,
        }
    }

    /// Returns true if the code emits a mid-cell transition for every bit
    pub fn is_biphase(self) -> bool {
        matches!(self, LineCode::Manchester | LineCode::DifferentialManchester)
    }
}

impl std::fmt::Display for LineCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.short_name())
    }
}

impl FromStr for LineCode {
    type Err = LineCodeError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|code| {
                code.key().eq_ignore_ascii_case(wanted)
                    || code.short_name().eq_ignore_ascii_case(wanted)
            })
            .ok_or_else(|| LineCodeError::UnknownScheme(wanted.to_string()))
    }
}

impl TryFrom<String> for LineCode {
    type Error = LineCodeError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<LineCode> for &'static str {
    fn from(code: LineCode) -> Self {
        code.key()
    }
}

/// State carried from one bit to the next while encoding a sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncoderState {
    /// The most recently emitted level
    pub last_signal: SignalLevel,
    /// The most recently emitted non-zero level
    pub last_bipolar: SignalLevel,
}

impl EncoderState {
    /// Seed state for the given line code
    pub fn initial(code: LineCode) -> Self {
        Self {
            last_signal: code.initial_last_signal(),
            last_bipolar: code.initial_last_bipolar(),
        }
    }

    /// Record an emitted level.
    ///
    /// `last_bipolar` only follows non-zero levels, so zero bits never consume
    /// a polarity flip.
    pub fn advance(&mut self, emitted: SignalLevel) {
        self.last_signal = emitted;
        if !emitted.is_zero() {
            self.last_bipolar = emitted;
        }
    }
}
