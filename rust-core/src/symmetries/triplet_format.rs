// Triplet formatter: SymOp -> canonical coordinate triplet text

use crate::config::{REDUCTION_FACTORS, TRANSLATION_DENOMINATOR};
use crate::symmetries::symmetry_operations::SymOp;
use crate::symmetries::triplet_parser::Axis;

/// Reduce `numerator/12` to lowest terms, returning `(numerator, denominator)`.
///
/// The factors of 12 (2, 2, 3) are tried in turn: a factor dividing the
/// numerator is removed from it, otherwise it stays in the denominator.
pub fn reduce_twelfths(numerator: i32) -> (i32, i32) {
    let mut num = numerator;
    let mut den = 1;
    for factor in REDUCTION_FACTORS {
        if num % factor == 0 {
            num /= factor;
        } else {
            den *= factor;
        }
    }
    (num, den)
}

/// Append `w/12` in lowest terms with an explicit sign.
fn push_fraction(s: &mut String, w: i32) {
    let (num, den) = reduce_twelfths(w);
    s.push(if num > 0 { '+' } else { '-' });
    s.push_str(&num.abs().to_string());
    if den != 1 {
        s.push('/');
        s.push_str(&den.to_string());
    }
}

/// Format one row: axis coefficients `x`, `y`, `z` and translation `w`/12.
///
/// A coefficient with magnitude above 1 repeats its letter (`2` -> `x+x`), so
/// the text parses back to the same coefficient. Translations that only reduce
/// to twelfths are split into two terms (`7` -> `+1/3+1/4`). A row with no
/// term at all is written as `0`.
pub fn make_triplet_part(x: i32, y: i32, z: i32, w: i32) -> String {
    let mut s = String::new();
    for (axis, coeff) in Axis::ALL.into_iter().zip([x, y, z]) {
        for _ in 0..coeff.unsigned_abs() {
            if coeff < 0 {
                s.push('-');
            } else if !s.is_empty() {
                s.push('+');
            }
            s.push(axis.letter());
        }
    }
    if w != 0 {
        let (_, den) = reduce_twelfths(w);
        if den == TRANSLATION_DENOMINATOR {
            // twelfths coprime to 12 go out as (w-3)/12 + 1/4
            push_fraction(&mut s, w - 3);
            push_fraction(&mut s, 3);
        } else {
            push_fraction(&mut s, w);
        }
    }
    if s.is_empty() {
        s.push('0');
    }
    s
}

/// Canonical triplet for `op`, rows joined by commas.
pub fn make_triplet(op: &SymOp) -> String {
    (0..3)
        .map(|i| {
            let [x, y, z] = op.rot.row(i);
            make_triplet_part(x.into(), y.into(), z.into(), op.tr.0[i].into())
        })
        .collect::<Vec<_>>()
        .join(",")
}
