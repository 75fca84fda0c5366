//! Text serialization of grid snapshots.
//!
//! The format is a nested row-major array of decimal cell states:
//!
//! ```text
//! [[0,1,0],[1,1,1],[0,1,0]]
//! ```
//!
//! `height` outer elements, each holding `width` inner elements. The
//! encoder emits no whitespace; the decoder accepts ASCII whitespace
//! between tokens. The format is intentionally simple (no compression,
//! no versioning, no self-describing schema) and round-trips every
//! valid grid exactly.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;

pub use error::CodecError;

use std::fmt::Write;

use tessera_core::CellState;
use tessera_grid::Grid;

/// Encode a grid into its canonical text form.
pub fn encode_grid(grid: &Grid) -> String {
    // Two bytes per cell ("0,") plus row brackets is a close lower bound.
    let mut out = String::with_capacity(grid.cell_count() * 2 + grid.height() as usize * 2 + 2);
    out.push('[');
    for (y, row) in grid.rows().enumerate() {
        if y > 0 {
            out.push(',');
        }
        out.push('[');
        for (x, state) in row.iter().enumerate() {
            if x > 0 {
                out.push(',');
            }
            write!(out, "{state}").expect("writing to a String cannot fail");
        }
        out.push(']');
    }
    out.push(']');
    out
}

/// Decode a grid from its text form, validating dimensions.
///
/// Succeeds only if `text` parses to a rectangular grid of exactly
/// `expected_width * expected_height` cells. On any failure the input is
/// rejected without producing a grid, so callers can guarantee their
/// live state is untouched.
pub fn decode_grid(
    text: &str,
    expected_width: u32,
    expected_height: u32,
) -> Result<Grid, CodecError> {
    let mut cursor = Cursor::new(text);
    let rows = cursor.read_rows()?;
    cursor.expect_end()?;

    let height = rows.len();
    let width = rows.first().map_or(0, Vec::len);
    for (row, data) in rows.iter().enumerate() {
        if data.len() != width {
            return Err(CodecError::MalformedState {
                detail: format!(
                    "row {row} has {} cells, expected {width} to match row 0",
                    data.len()
                ),
            });
        }
    }

    let clamp_u32 = |v: usize| u32::try_from(v).unwrap_or(u32::MAX);
    if clamp_u32(width) != expected_width || clamp_u32(height) != expected_height {
        return Err(CodecError::DimensionMismatch {
            expected_width,
            expected_height,
            width: clamp_u32(width),
            height: clamp_u32(height),
        });
    }

    Grid::from_rows(&rows).map_err(|e| CodecError::MalformedState {
        detail: e.to_string(),
    })
}

// ── Cursor ──────────────────────────────────────────────────────

/// Byte cursor over the serialized text.
struct Cursor<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            bytes: text.as_bytes(),
            pos: 0,
        }
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.bytes.get(self.pos), Some(b) if b.is_ascii_whitespace()) {
            self.pos += 1;
        }
    }

    fn peek(&mut self) -> Option<u8> {
        self.skip_whitespace();
        self.bytes.get(self.pos).copied()
    }

    fn expect(&mut self, byte: u8) -> Result<(), CodecError> {
        match self.peek() {
            Some(found) if found == byte => {
                self.pos += 1;
                Ok(())
            }
            Some(found) => Err(CodecError::MalformedState {
                detail: format!(
                    "expected '{}' at byte {}, found '{}'",
                    byte as char, self.pos, found as char
                ),
            }),
            None => Err(CodecError::MalformedState {
                detail: format!("expected '{}' at byte {}, found end of input", byte as char, self.pos),
            }),
        }
    }

    /// Read one decimal cell state.
    fn read_state(&mut self) -> Result<CellState, CodecError> {
        let start = self.pos;
        let mut value: u32 = 0;
        let mut digits = 0;
        while let Some(b @ b'0'..=b'9') = self.bytes.get(self.pos).copied() {
            value = value * 10 + u32::from(b - b'0');
            digits += 1;
            if value > u32::from(CellState::MAX) {
                return Err(CodecError::MalformedState {
                    detail: format!(
                        "cell state at byte {start} exceeds the maximum of {}",
                        CellState::MAX
                    ),
                });
            }
            self.pos += 1;
        }
        if digits == 0 {
            return Err(CodecError::MalformedState {
                detail: format!("expected a decimal cell state at byte {}", self.pos),
            });
        }
        Ok(value as CellState)
    }

    /// Read one `[1,0,...]` row.
    fn read_row(&mut self) -> Result<Vec<CellState>, CodecError> {
        self.expect(b'[')?;
        let mut row = Vec::new();
        if self.peek() == Some(b']') {
            self.pos += 1;
            return Ok(row);
        }
        loop {
            self.skip_whitespace();
            row.push(self.read_state()?);
            match self.peek() {
                Some(b',') => self.pos += 1,
                _ => break,
            }
        }
        self.expect(b']')?;
        Ok(row)
    }

    /// Read the outer `[[...],[...]]` sequence of rows.
    fn read_rows(&mut self) -> Result<Vec<Vec<CellState>>, CodecError> {
        self.expect(b'[')?;
        let mut rows = Vec::new();
        if self.peek() == Some(b']') {
            self.pos += 1;
            return Ok(rows);
        }
        loop {
            rows.push(self.read_row()?);
            match self.peek() {
                Some(b',') => self.pos += 1,
                _ => break,
            }
        }
        self.expect(b']')?;
        Ok(rows)
    }

    /// Require that only whitespace remains.
    fn expect_end(&mut self) -> Result<(), CodecError> {
        match self.peek() {
            None => Ok(()),
            Some(found) => Err(CodecError::MalformedState {
                detail: format!(
                    "trailing character '{}' at byte {}",
                    found as char, self.pos
                ),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn grid_from_rows(rows: &[Vec<CellState>]) -> Grid {
        Grid::from_rows(rows).unwrap()
    }

    // ── Encoding ────────────────────────────────────────────────

    #[test]
    fn encode_small_grid() {
        let grid = grid_from_rows(&[vec![0, 1, 0], vec![2, 0, 3]]);
        assert_eq!(encode_grid(&grid), "[[0,1,0],[2,0,3]]");
    }

    #[test]
    fn encode_single_cell() {
        let grid = grid_from_rows(&[vec![9]]);
        assert_eq!(encode_grid(&grid), "[[9]]");
    }

    // ── Decoding ────────────────────────────────────────────────

    #[test]
    fn decode_small_grid() {
        let grid = decode_grid("[[0,1,0],[2,0,3]]", 3, 2).unwrap();
        assert_eq!(grid, grid_from_rows(&[vec![0, 1, 0], vec![2, 0, 3]]));
    }

    #[test]
    fn decode_accepts_whitespace() {
        let grid = decode_grid(" [ [ 0 , 1 ] ,\n [ 1 , 0 ] ] ", 2, 2).unwrap();
        assert_eq!(grid, grid_from_rows(&[vec![0, 1], vec![1, 0]]));
    }

    #[test]
    fn decode_dimension_mismatch() {
        let err = decode_grid("[[0,1],[1,0]]", 3, 2).unwrap_err();
        assert_eq!(
            err,
            CodecError::DimensionMismatch {
                expected_width: 3,
                expected_height: 2,
                width: 2,
                height: 2,
            }
        );
    }

    #[test]
    fn decode_empty_outer_array_is_zero_by_zero() {
        let err = decode_grid("[]", 3, 3).unwrap_err();
        assert!(matches!(
            err,
            CodecError::DimensionMismatch {
                width: 0,
                height: 0,
                ..
            }
        ));
    }

    #[test]
    fn decode_ragged_rows_rejected() {
        let err = decode_grid("[[0,1],[0]]", 2, 2).unwrap_err();
        match err {
            CodecError::MalformedState { detail } => {
                assert!(detail.contains("row 1"), "wrong detail: {detail}");
            }
            other => panic!("expected MalformedState, got {other:?}"),
        }
    }

    #[test]
    fn decode_missing_bracket_rejected() {
        assert!(matches!(
            decode_grid("[[0,1],[1,0]", 2, 2),
            Err(CodecError::MalformedState { .. })
        ));
        assert!(matches!(
            decode_grid("[0,1],[1,0]]", 2, 2),
            Err(CodecError::MalformedState { .. })
        ));
    }

    #[test]
    fn decode_trailing_garbage_rejected() {
        let err = decode_grid("[[0]]x", 1, 1).unwrap_err();
        match err {
            CodecError::MalformedState { detail } => {
                assert!(detail.contains("trailing"), "wrong detail: {detail}");
            }
            other => panic!("expected MalformedState, got {other:?}"),
        }
    }

    #[test]
    fn decode_non_decimal_rejected() {
        assert!(matches!(
            decode_grid("[[0,x]]", 2, 1),
            Err(CodecError::MalformedState { .. })
        ));
        assert!(matches!(
            decode_grid("[[-1]]", 1, 1),
            Err(CodecError::MalformedState { .. })
        ));
    }

    #[test]
    fn decode_state_overflow_rejected() {
        let err = decode_grid("[[65536]]", 1, 1).unwrap_err();
        match err {
            CodecError::MalformedState { detail } => {
                assert!(detail.contains("exceeds"), "wrong detail: {detail}");
            }
            other => panic!("expected MalformedState, got {other:?}"),
        }
    }

    #[test]
    fn decode_max_state_accepted() {
        let grid = decode_grid("[[65535]]", 1, 1).unwrap();
        assert_eq!(grid.get(0, 0), Some(CellState::MAX));
    }

    #[test]
    fn decode_empty_input_rejected() {
        assert!(matches!(
            decode_grid("", 1, 1),
            Err(CodecError::MalformedState { .. })
        ));
        assert!(matches!(
            decode_grid("   ", 1, 1),
            Err(CodecError::MalformedState { .. })
        ));
    }

    // ── Round-trip ──────────────────────────────────────────────

    #[test]
    fn roundtrip_exact() {
        let grid = grid_from_rows(&[vec![0, 65535, 7], vec![1, 0, 300]]);
        let decoded = decode_grid(&encode_grid(&grid), 3, 2).unwrap();
        assert_eq!(grid, decoded);
    }

    proptest! {
        #[test]
        fn roundtrip_arbitrary_grids(
            rows in prop::collection::vec(
                prop::collection::vec(any::<u16>(), 4),
                1..6,
            ),
        ) {
            let grid = grid_from_rows(&rows);
            let text = encode_grid(&grid);
            let decoded = decode_grid(&text, grid.width(), grid.height()).unwrap();
            prop_assert_eq!(grid, decoded);
        }
    }
}
