//! # linecode-vis: Line Code Visualizer
//!
//! A teaching tool that draws the physical-layer waveform of a bit sequence
//! under one of six line codes: NRZ-L, NRZ-I, AMI, Pseudoternary, Manchester
//! and Differential Manchester.
//!
//! ## Architecture
//!
//! - **Encoder**: Pure per-bit mapping from (code, bit, carried state) to a signal level
//! - **Waveform**: Runs the encoder over a sequence and reduces the levels to a polyline
//! - **Frontend**: Renders the UI using eframe/egui and draws the polyline with a painter
//!
//! Data flows one way: bits and code go into [`waveform::build`], which calls
//! [`encoder::encode`] once per bit and returns geometry for the view.
//!
//! ## Example
//!
//! ```
//! use linecode_vis::{build, Bounds, LineCode, SignalLevel};
//!
//! let wave = build("011", LineCode::Ami, Bounds::new(0.0, 300.0, 0.0, 50.0)).unwrap();
//! assert_eq!(
//!     wave.levels,
//!     vec![SignalLevel::Zero, SignalLevel::High, SignalLevel::Low]
//! );
//! assert_eq!(wave.gridlines.len(), 4);
//! ```

pub mod app;
pub mod config;
pub mod encoder;
pub mod error;
pub mod frontend;
pub mod sequence;
pub mod types;
pub mod waveform;

// Re-export commonly used types
pub use app::LineCodeApp;
pub use config::AppConfig;
pub use encoder::{encode, encode_sequence, Encoder};
pub use error::{LineCodeError, Result};
pub use sequence::{BitSequence, MAX_DIGITS};
pub use types::{EncoderState, LineCode, SignalLevel};
pub use waveform::{build, Bounds, Point, Segment, Waveform};
