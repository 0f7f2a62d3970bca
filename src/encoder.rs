//! Line-code encoder
//!
//! Maps one bit at a time to a [`SignalLevel`], given the state carried over
//! from the previous bit. The encoder itself is pure; [`Encoder`] wraps it
//! with an owned [`EncoderState`] for callers that walk a whole sequence.
//!
//! | Code | `'0'` | `'1'` |
//! |---|---|---|
//! | NRZ-L | high | low |
//! | NRZ-I | last signal | opposite of last signal |
//! | AMI | zero | opposite of last bipolar |
//! | Pseudoternary | opposite of last bipolar | zero |
//! | Manchester | high-to-low | low-to-high |
//! | Differential Manchester | last signal | opposite of last signal |

use crate::error::{LineCodeError, Result};
use crate::types::{EncoderState, LineCode, SignalLevel};

/// Encode a single bit.
///
/// `bit` must be `'0'` or `'1'`. Anything else is reported as
/// [`LineCodeError::InvalidBit`] at position 0; callers walking a sequence
/// shift the position with [`LineCodeError::offset_index`].
pub fn encode(
    code: LineCode,
    bit: char,
    last_signal: SignalLevel,
    last_bipolar: SignalLevel,
) -> Result<SignalLevel> {
    let one = match bit {
        '0' => false,
        '1' => true,
        _ => return Err(LineCodeError::InvalidBit { index: 0, bit }),
    };

    let level = match (code, one) {
        (LineCode::NrzL, false) => SignalLevel::High,
        (LineCode::NrzL, true) => SignalLevel::Low,
        (LineCode::NrzI, false) => last_signal,
        (LineCode::NrzI, true) => last_signal.opposite(),
        (LineCode::Ami, false) => SignalLevel::Zero,
        (LineCode::Ami, true) => last_bipolar.opposite(),
        (LineCode::Pseudoternary, false) => last_bipolar.opposite(),
        (LineCode::Pseudoternary, true) => SignalLevel::Zero,
        (LineCode::Manchester, false) => SignalLevel::HighToLow,
        (LineCode::Manchester, true) => SignalLevel::LowToHigh,
        (LineCode::DifferentialManchester, false) => last_signal,
        (LineCode::DifferentialManchester, true) => last_signal.opposite(),
    };

    Ok(level)
}

/// Stateful driver that threads [`EncoderState`] through successive bits
///
/// Each encoder owns its state outright, so several sequences can be encoded
/// side by side without interfering.
#[derive(Debug, Clone)]
pub struct Encoder {
    code: LineCode,
    state: EncoderState,
    position: usize,
}

impl Encoder {
    /// Create an encoder seeded with the code's initial state
    pub fn new(code: LineCode) -> Self {
        Self {
            code,
            state: EncoderState::initial(code),
            position: 0,
        }
    }

    /// Current carried state
    pub fn state(&self) -> EncoderState {
        self.state
    }

    /// Number of bits encoded so far
    pub fn position(&self) -> usize {
        self.position
    }

    /// Encode the next bit and advance the carried state.
    ///
    /// On error the state is left untouched.
    pub fn push(&mut self, bit: char) -> Result<SignalLevel> {
        let level = encode(
            self.code,
            bit,
            self.state.last_signal,
            self.state.last_bipolar,
        )
        .map_err(|e| e.offset_index(self.position))?;

        self.state.advance(level);
        self.position += 1;
        Ok(level)
    }
}

/// Encode a full sequence of `'0'`/`'1'` characters.
///
/// Fails on the first invalid character without returning partial output.
pub fn encode_sequence(code: LineCode, bits: &str) -> Result<Vec<SignalLevel>> {
    let mut encoder = Encoder::new(code);
    bits.chars().map(|bit| encoder.push(bit)).collect()
}
