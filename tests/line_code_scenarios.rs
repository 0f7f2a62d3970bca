//! Integration tests for encoding and waveform building
//!
//! These tests walk complete bit sequences through the public API:
//! - Emitted levels for each line code
//! - Polyline geometry for flat runs and mid-cell steps
//! - Empty, oversize and invalid input handling

mod common;

use common::{assert_float_eq, assert_no_consecutive_duplicates, test_bounds, y_levels};
use linecode_vis::{
    build, encode_sequence, BitSequence, Bounds, LineCode, LineCodeError, Point, SignalLevel,
    MAX_DIGITS,
};

use linecode_vis::SignalLevel::{High, HighToLow, Low, LowToHigh, Zero};

#[test]
fn test_nrz_l_scenario() {
    let wave = build("01", LineCode::NrzL, test_bounds()).unwrap();
    assert_eq!(wave.levels, vec![High, Low]);
}

#[test]
fn test_nrz_i_scenario() {
    let wave = build("00", LineCode::NrzI, test_bounds()).unwrap();
    assert_eq!(wave.levels, vec![Low, Low]);
    // A single flat run along the bottom edge
    assert_eq!(y_levels(&wave), vec![40.0]);
}

#[test]
fn test_ami_scenario() {
    let wave = build("011", LineCode::Ami, test_bounds()).unwrap();
    assert_eq!(wave.levels, vec![Zero, High, Low]);
    assert_eq!(y_levels(&wave), vec![20.0, 0.0, 40.0]);
}

#[test]
fn test_manchester_scenario() {
    let wave = build("1", LineCode::Manchester, test_bounds()).unwrap();
    assert_eq!(wave.levels, vec![LowToHigh]);
    assert_eq!(
        wave.polyline,
        vec![
            Point::new(0.0, 40.0),
            Point::new(60.0, 40.0),
            Point::new(60.0, 0.0),
            Point::new(120.0, 0.0),
        ]
    );
}

#[test]
fn test_empty_scenario() {
    let wave = build("", LineCode::Manchester, test_bounds()).unwrap();
    assert!(wave.polyline.is_empty());
    assert!(wave.gridlines.is_empty());
    assert!(wave.midline.is_none());
}

#[test]
fn test_default_sequence_all_codes() {
    let bits = BitSequence::default();
    for code in LineCode::ALL {
        let wave = build(&bits, code, test_bounds()).unwrap();
        assert_eq!(wave.bit_count(), bits.len(), "{}", code);
        assert_eq!(wave.gridlines.len(), bits.len() + 1, "{}", code);
        assert!(wave.polyline.len() <= 4 * bits.len(), "{}", code);
        assert_no_consecutive_duplicates(&wave.polyline);
    }
}

#[test]
fn test_default_sequence_levels() {
    let bits = "01001100011";
    assert_eq!(
        encode_sequence(LineCode::NrzI, bits).unwrap(),
        vec![Low, High, High, High, Low, High, High, High, High, Low, High]
    );
    assert_eq!(
        encode_sequence(LineCode::Pseudoternary, bits).unwrap(),
        vec![High, Zero, Low, High, Zero, Zero, Low, High, Low, Zero, Zero]
    );
    assert_eq!(
        encode_sequence(LineCode::DifferentialManchester, bits).unwrap(),
        vec![
            LowToHigh, HighToLow, HighToLow, HighToLow, LowToHigh, HighToLow, HighToLow,
            HighToLow, HighToLow, LowToHigh, HighToLow,
        ]
    );
}

#[test]
fn test_biphase_codes_step_in_every_cell() {
    let bits = "0011010";
    let bounds = test_bounds();
    for code in LineCode::ALL.into_iter().filter(|c| c.is_biphase()) {
        let wave = build(bits, code, bounds).unwrap();
        let cell_width = bounds.width() / bits.len() as f32;
        for i in 0..bits.len() {
            let mid = bounds.x_min + cell_width * i as f32 + cell_width / 2.0;
            let verticals = wave
                .polyline
                .windows(2)
                .filter(|pair| pair[0].x == pair[1].x && (pair[0].x - mid).abs() < 1e-3)
                .count();
            assert_eq!(verticals, 1, "{} cell {}", code, i);
        }
    }
}

#[test]
fn test_waveform_spans_bounds() {
    let bounds = Bounds::from_origin_size(12.5, 30.0, 333.0, 50.0);
    let wave = build("1011001", LineCode::NrzI, bounds).unwrap();

    let first = wave.polyline.first().copied().unwrap();
    let last = wave.polyline.last().copied().unwrap();
    assert_float_eq(first.x, 12.5, 1e-4);
    assert_float_eq(last.x, 345.5, 1e-4);
    assert!(wave
        .polyline
        .iter()
        .all(|p| p.y >= bounds.y_min && p.y <= bounds.y_max));
}

#[test]
fn test_oversize_sequence_rejected() {
    let bits = "1".repeat(MAX_DIGITS + 1);
    assert!(matches!(
        build(&bits, LineCode::NrzL, test_bounds()),
        Err(LineCodeError::OversizeSequence { .. })
    ));
    assert!(matches!(
        BitSequence::parse(&bits),
        Err(LineCodeError::OversizeSequence { .. })
    ));
}

#[test]
fn test_max_length_sequence_accepted() {
    let bits = "10".repeat(MAX_DIGITS / 2);
    for code in LineCode::ALL {
        let wave = build(&bits, code, test_bounds()).unwrap();
        assert_eq!(wave.levels.len(), MAX_DIGITS, "{}", code);
        assert!(wave.polyline.len() <= 4 * MAX_DIGITS, "{}", code);
        assert_no_consecutive_duplicates(&wave.polyline);
    }
}

#[test]
fn test_invalid_bit_rejected() {
    assert!(matches!(
        build("0120", LineCode::Ami, test_bounds()),
        Err(LineCodeError::InvalidBit { index: 2, bit: '2' })
    ));
}

#[test]
fn test_build_is_deterministic() {
    let bits = BitSequence::parse("1101000111010").unwrap();
    for code in LineCode::ALL {
        let a = build(&bits, code, test_bounds()).unwrap();
        let b = build(&bits, code, test_bounds()).unwrap();
        assert_eq!(a, b);
    }
}
