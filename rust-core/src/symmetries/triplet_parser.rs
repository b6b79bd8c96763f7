// Triplet parser: coordinate triplet text ("-x+1/2,y,z+1/3") -> SymOp

use log::trace;

use crate::config::{ALLOWED_DENOMINATORS, TRANSLATION_DENOMINATOR};
use crate::errors::{ParseErrorKind, SymmetryError};
use crate::symmetries::symmetry_operations::{RotOp, SymOp, TrOp};
use crate::Result;

/// Coordinate axis named by a letter in triplet text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// Classify a character. Direct-space (`x y z`), reciprocal-space
    /// (`h k l`) and cell-edge (`a b c`) letters are accepted in either case.
    pub fn classify(c: char) -> Option<Axis> {
        match c {
            'x' | 'X' | 'h' | 'H' | 'a' | 'A' => Some(Axis::X),
            'y' | 'Y' | 'k' | 'K' | 'b' | 'B' => Some(Axis::Y),
            'z' | 'Z' | 'l' | 'L' | 'c' | 'C' => Some(Axis::Z),
            _ => None,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }

    /// Letter used in canonical output.
    pub fn letter(self) -> char {
        match self {
            Axis::X => 'x',
            Axis::Y => 'y',
            Axis::Z => 'z',
        }
    }

    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];
}

/// Scan the run of ASCII digits starting at `start`. Returns the end of the
/// run and its value (`None` if the run is empty or does not fit an i64).
fn scan_digits(s: &str, start: usize) -> (usize, Option<i64>) {
    let end = start
        + s.as_bytes()[start..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count();
    (end, s[start..end].parse::<i64>().ok())
}

fn fits_i8(value: i64) -> bool {
    i8::try_from(value).is_ok()
}

/// Parse one coordinate expression, e.g. `-x+y+1/2`.
///
/// Returns `[x, y, z, w]`: the three axis coefficients and the translation
/// numerator over 12.
pub fn parse_triplet_part(s: &str) -> Result<[i8; 4]> {
    let fail = |kind: ParseErrorKind, offset: usize| SymmetryError::parse(kind, s, offset);
    let bytes = s.as_bytes();

    let mut acc = [0i64; 4];
    // pending sign; 0 once a term has consumed it
    let mut sign: i64 = 1;
    // position of a written-out sign not yet consumed
    let mut explicit_sign: Option<usize> = None;
    let mut has_term = false;

    let mut pos = 0;
    while pos < bytes.len() {
        let c = bytes[pos];
        if c == b'+' || c == b'-' {
            if explicit_sign.is_some() {
                return Err(fail(ParseErrorKind::DuplicateSign, pos));
            }
            sign = if c == b'+' { 1 } else { -1 };
            explicit_sign = Some(pos);
            pos += 1;
            continue;
        }
        if c.is_ascii_whitespace() {
            pos += 1;
            continue;
        }
        if sign == 0 {
            return Err(fail(ParseErrorKind::MissingSign, pos));
        }

        if c.is_ascii_digit() {
            let term_start = pos;
            let (end, value) = scan_digits(s, pos);
            let value = value.ok_or_else(|| fail(ParseErrorKind::OutOfRange, term_start))?;
            pos = end;

            let mut denominator = 1;
            if bytes.get(pos) == Some(&b'/') {
                let (end, den) = scan_digits(s, pos + 1);
                if end == pos + 1 {
                    return Err(fail(ParseErrorKind::MissingDenominator, pos + 1));
                }
                denominator = match den {
                    Some(d) if ALLOWED_DENOMINATORS.contains(&d) => d,
                    Some(d) => return Err(fail(ParseErrorKind::InvalidDenominator(d), pos + 1)),
                    None => return Err(fail(ParseErrorKind::OutOfRange, pos + 1)),
                };
                pos = end;
            }

            let twelfths = value
                .checked_mul(i64::from(TRANSLATION_DENOMINATOR))
                .map(|v| v / denominator)
                .filter(|&v| fits_i8(v))
                .ok_or_else(|| fail(ParseErrorKind::OutOfRange, term_start))?;
            acc[3] += sign * twelfths;
            if !fits_i8(acc[3]) {
                return Err(fail(ParseErrorKind::OutOfRange, term_start));
            }
        } else {
            // only ASCII bytes are consumed one at a time, so pos is on a
            // char boundary here
            let ch = s[pos..].chars().next().unwrap_or(char::REPLACEMENT_CHARACTER);
            let axis = Axis::classify(ch)
                .ok_or_else(|| fail(ParseErrorKind::UnexpectedCharacter(ch), pos))?;
            acc[axis.index()] += sign;
            if !fits_i8(acc[axis.index()]) {
                return Err(fail(ParseErrorKind::OutOfRange, pos));
            }
            pos += 1;
        }

        sign = 0;
        explicit_sign = None;
        has_term = true;
    }

    if let Some(sign_pos) = explicit_sign {
        return Err(fail(ParseErrorKind::TrailingSign, sign_pos));
    }
    if !has_term {
        return Err(fail(ParseErrorKind::EmptyExpression, 0));
    }

    // every slot was range-checked when it was last updated
    Ok(acc.map(|v| v as i8))
}

/// Parse a full triplet such as `-x+1/2,y,z+1/3`.
pub fn parse_triplet(s: &str) -> Result<SymOp> {
    let commas = s.matches(',').count();
    if commas != 2 {
        let offset = s
            .match_indices(',')
            .nth(2)
            .map_or(s.len(), |(i, _)| i);
        return Err(SymmetryError::parse(
            ParseErrorKind::WrongCommaCount(commas),
            s,
            offset,
        ));
    }

    let mut rows = [[0i8; 4]; 3];
    let mut base = 0;
    for (row, part) in rows.iter_mut().zip(s.split(',')) {
        *row = parse_triplet_part(part).map_err(|e| e.shifted(base))?;
        base += part.len() + 1;
    }
    trace!("parsed triplet {:?} -> {:?}", s, rows);

    let [a, b, c] = rows;
    Ok(SymOp::new(
        RotOp::from_rows([[a[0], a[1], a[2]], [b[0], b[1], b[2]], [c[0], c[1], c[2]]]),
        TrOp::new(a[3], b[3], c[3]),
    ))
}
