// Symmetries module: Contains symmetry operations and the coordinate triplet codec
// This module provides exact operator algebra over twelfths and its text encoding

// ======================== MODULE DECLARATIONS ========================
pub mod symmetry_operations;
pub mod triplet_format;
pub mod triplet_parser;

// Test modules
mod _tests_symmetry_operations;
mod _tests_triplet_format;
mod _tests_triplet_parser;

// ======================== SYMMETRY OPERATIONS ========================
pub use symmetry_operations::{
    RotOp, // struct - 3x3 integer rotation matrix (Matrix3<i8>)
    SymOp, // struct - crystallographic symmetry operation (rotation + translation)
    TrOp,  // struct - translation in twelfths of a cell edge (Vector3<i8>)
};
// RotOp impl methods:
//   identity() -> Self                                   - identity matrix
//   from_rows(rows: [[i8; 3]; 3]) -> Self                - builds matrix from rows
//   row(&self, i: usize) -> [i8; 3]                      - one row of coefficients
//   compose(&self, other: &RotOp) -> Result<RotOp>       - exact product, fails on i8 overflow
//   determinant(&self) -> i32                            - integer determinant
//   inverse(&self) -> Result<RotOp>                      - integer inverse (determinant ±1 only)

// TrOp impl methods:
//   new(x: i8, y: i8, z: i8) -> Self                     - translation from numerators over 12
//   zero() -> Self                                       - no shift
//   compose(&self, other: &TrOp) -> TrOp                 - sum reduced into [0, 12)
//   wrapped(&self) -> TrOp                               - components reduced into [0, 12)

// SymOp impl methods:
//   new(rot: RotOp, tr: TrOp) -> Self                    - creates symmetry operation
//   identity() -> Self                                   - creates identity operation
//   compose(&self, other: &SymOp) -> Result<SymOp>       - R1·R2, t1 + t2 mod 12
//   compose_affine(&self, other: &SymOp) -> Result<SymOp> - R1·R2, R1·t2 + t1 mod 12
//   inverse(&self) -> Result<SymOp>                      - inverse under compose
//   inverse_affine(&self) -> Result<SymOp>               - inverse under compose_affine
//   wrapped(&self) -> SymOp                              - translation reduced into [0, 12)
//   order(&self) -> Option<usize>                        - smallest n with op^n = identity
//   triplet(&self) -> String                             - canonical triplet text
//   + Display / FromStr through the triplet codec

// ======================== TRIPLET CODEC ========================
pub use triplet_parser::{
    Axis,               // enum - axis named by a triplet letter (x/h/a, y/k/b, z/l/c)
    parse_triplet,      // fn(s: &str) -> Result<SymOp> - parses "x,y,z"-style triplet
    parse_triplet_part, // fn(s: &str) -> Result<[i8; 4]> - parses one coordinate expression
};

pub use triplet_format::{
    make_triplet,      // fn(op: &SymOp) -> String - canonical triplet
    make_triplet_part, // fn(x: i32, y: i32, z: i32, w: i32) -> String - one canonical expression
    reduce_twelfths,   // fn(numerator: i32) -> (i32, i32) - n/12 in lowest terms
};
