use nalgebra::{Matrix3, Vector3};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::config::{MAX_OPERATION_ORDER, TRANSLATION_DENOMINATOR};
use crate::errors::SymmetryError;
use crate::symmetries::triplet_format::make_triplet;
use crate::symmetries::triplet_parser::parse_triplet;
use crate::Result;

fn narrow(value: i32, operation: &'static str) -> Result<i8> {
    i8::try_from(value).map_err(|_| SymmetryError::Overflow { operation })
}

/// Reduce a numerator over 12 into [0, 12).
fn reduce_twelfths(value: i32) -> i8 {
    // rem_euclid keeps the result in 0..12, which always fits in i8
    value.rem_euclid(TRANSLATION_DENOMINATOR) as i8
}

/// Rotation part of a symmetry operation: an integer matrix acting on
/// fractional coordinates, one row per output coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RotOp(pub Matrix3<i8>);

impl RotOp {
    pub fn identity() -> Self {
        RotOp(Matrix3::identity())
    }

    /// Build from rows; `rows[i][j]` is the contribution of axis `j` to
    /// output coordinate `i`.
    pub fn from_rows(rows: [[i8; 3]; 3]) -> Self {
        RotOp(Matrix3::new(
            rows[0][0], rows[0][1], rows[0][2],
            rows[1][0], rows[1][1], rows[1][2],
            rows[2][0], rows[2][1], rows[2][2],
        ))
    }

    pub fn row(&self, i: usize) -> [i8; 3] {
        [self.0[(i, 0)], self.0[(i, 1)], self.0[(i, 2)]]
    }

    pub fn is_identity(&self) -> bool {
        self.0 == Matrix3::identity()
    }

    pub(crate) fn widened(&self) -> Matrix3<i32> {
        self.0.map(i32::from)
    }

    /// Exact matrix product `self · other`. Fails when an entry leaves the
    /// i8 range.
    pub fn compose(&self, other: &RotOp) -> Result<RotOp> {
        let product = self.widened() * other.widened();
        let mut m = Matrix3::zeros();
        for i in 0..3 {
            for j in 0..3 {
                m[(i, j)] = narrow(product[(i, j)], "rotation composition")?;
            }
        }
        Ok(RotOp(m))
    }

    pub fn determinant(&self) -> i32 {
        let m = self.widened();
        m[(0, 0)] * (m[(1, 1)] * m[(2, 2)] - m[(1, 2)] * m[(2, 1)])
            - m[(0, 1)] * (m[(1, 0)] * m[(2, 2)] - m[(1, 2)] * m[(2, 0)])
            + m[(0, 2)] * (m[(1, 0)] * m[(2, 1)] - m[(1, 1)] * m[(2, 0)])
    }

    /// Integer inverse. Only unimodular matrices (determinant ±1) have one.
    pub fn inverse(&self) -> Result<RotOp> {
        let det = self.determinant();
        if det != 1 && det != -1 {
            return Err(SymmetryError::NotInvertible { determinant: det });
        }
        let m = self.widened();
        // adjugate: transpose of the cofactor matrix
        let cofactor = |r: usize, c: usize| -> i32 {
            let rows: Vec<usize> = (0..3).filter(|&i| i != r).collect();
            let cols: Vec<usize> = (0..3).filter(|&j| j != c).collect();
            let minor = m[(rows[0], cols[0])] * m[(rows[1], cols[1])]
                - m[(rows[0], cols[1])] * m[(rows[1], cols[0])];
            if (r + c) % 2 == 0 {
                minor
            } else {
                -minor
            }
        };
        let mut inv = Matrix3::zeros();
        for i in 0..3 {
            for j in 0..3 {
                // inverse = adj / det, and 1/det == det for det = ±1
                inv[(i, j)] = narrow(cofactor(j, i) * det, "rotation inverse")?;
            }
        }
        Ok(RotOp(inv))
    }
}

impl Default for RotOp {
    fn default() -> Self {
        Self::identity()
    }
}

/// Translation part of a symmetry operation, in twelfths of a cell edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TrOp(pub Vector3<i8>);

impl TrOp {
    pub fn new(x: i8, y: i8, z: i8) -> Self {
        TrOp(Vector3::new(x, y, z))
    }

    pub fn zero() -> Self {
        TrOp(Vector3::zeros())
    }

    pub fn is_zero(&self) -> bool {
        self.0 == Vector3::zeros()
    }

    pub(crate) fn widened(&self) -> Vector3<i32> {
        self.0.map(i32::from)
    }

    fn from_twelfths(v: Vector3<i32>) -> Self {
        TrOp(v.map(reduce_twelfths))
    }

    /// Component-wise sum, reduced into [0, 12).
    pub fn compose(&self, other: &TrOp) -> TrOp {
        TrOp::from_twelfths(self.widened() + other.widened())
    }

    /// Same shift with every component reduced into [0, 12).
    pub fn wrapped(&self) -> TrOp {
        TrOp::from_twelfths(self.widened())
    }
}

impl Default for TrOp {
    fn default() -> Self {
        Self::zero()
    }
}

/// A crystallographic symmetry operation `x' = R·x + t/12`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SymOp {
    pub rot: RotOp,
    pub tr: TrOp,
}

impl SymOp {
    pub fn new(rot: RotOp, tr: TrOp) -> Self {
        Self { rot, tr }
    }

    pub fn identity() -> Self {
        Self {
            rot: RotOp::identity(),
            tr: TrOp::zero(),
        }
    }

    pub fn is_identity(&self) -> bool {
        self.rot.is_identity() && self.tr.is_zero()
    }

    /// `self ∘ other`: rotations multiply (`other` applied first) and
    /// translations add component-wise, reduced into [0, 12).
    pub fn compose(&self, other: &SymOp) -> Result<SymOp> {
        Ok(SymOp {
            rot: self.rot.compose(&other.rot)?,
            tr: self.tr.compose(&other.tr),
        })
    }

    /// Composition of the affine maps, `x -> R1·(R2·x + t2) + t1`, with the
    /// translation reduced into [0, 12).
    pub fn compose_affine(&self, other: &SymOp) -> Result<SymOp> {
        let rot = self.rot.compose(&other.rot)?;
        let shift = self.rot.widened() * other.tr.widened() + self.tr.widened();
        Ok(SymOp {
            rot,
            tr: TrOp::from_twelfths(shift),
        })
    }

    /// Inverse under [`SymOp::compose`]: inverse rotation, negated
    /// translation in [0, 12).
    pub fn inverse(&self) -> Result<SymOp> {
        Ok(SymOp {
            rot: self.rot.inverse()?,
            tr: TrOp::from_twelfths(-self.tr.widened()),
        })
    }

    /// Inverse under [`SymOp::compose_affine`]: translation `-R⁻¹·t`.
    pub fn inverse_affine(&self) -> Result<SymOp> {
        let rot = self.rot.inverse()?;
        let shift = -(rot.widened() * self.tr.widened());
        Ok(SymOp {
            rot,
            tr: TrOp::from_twelfths(shift),
        })
    }

    pub fn wrapped(&self) -> SymOp {
        SymOp {
            rot: self.rot,
            tr: self.tr.wrapped(),
        }
    }

    /// Number of applications needed to get back to the identity, with
    /// whole-cell translations ignored. `None` if it does not happen within
    /// `MAX_OPERATION_ORDER` steps.
    pub fn order(&self) -> Option<usize> {
        let mut power = self.wrapped();
        for n in 1..=MAX_OPERATION_ORDER {
            if power.is_identity() {
                return Some(n);
            }
            power = self.compose(&power).ok()?;
        }
        None
    }

    /// Canonical coordinate triplet, e.g. `-x+1/2,y,z+1/3`.
    pub fn triplet(&self) -> String {
        make_triplet(self)
    }
}

impl Default for SymOp {
    fn default() -> Self {
        Self::identity()
    }
}

impl fmt::Display for SymOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&make_triplet(self))
    }
}

impl FromStr for SymOp {
    type Err = SymmetryError;

    fn from_str(s: &str) -> Result<Self> {
        parse_triplet(s)
    }
}
