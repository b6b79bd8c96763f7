#[cfg(test)]
mod _tests_symmetry_operations {
    use super::super::symmetry_operations::{RotOp, SymOp, TrOp};
    use super::super::triplet_parser::parse_triplet;
    use crate::errors::SymmetryError;
    use nalgebra::Vector3;

    fn op(text: &str) -> SymOp {
        parse_triplet(text).unwrap()
    }

    // A handful of operators from real space groups (P 4/m, P 6, P 21 21 21, ...)
    fn sample_ops() -> Vec<SymOp> {
        [
            "x,y,z",
            "-x,-y,-z",
            "-y,x,z+1/4",
            "-x+1/2,-y,z+1/2",
            "y,-x+y,-z+1/3",
            "x-y,x,z+1/6",
            "-x,y+1/2,-z+1/2",
            "z,x,y",
            "y+3/4,x+1/4,-z+1/4",
        ]
        .iter()
        .map(|t| op(t))
        .collect()
    }

    // ==================== Composition ====================

    #[test]
    fn test_identity_is_two_sided_unit() {
        let identity = SymOp::identity();
        for a in sample_ops() {
            assert_eq!(identity.compose(&a).unwrap(), a);
            assert_eq!(a.compose(&identity).unwrap(), a);
        }
    }

    #[test]
    fn test_composition_is_associative() {
        let ops = sample_ops();
        for a in &ops {
            for b in &ops {
                for c in &ops {
                    let left = a.compose(b).unwrap().compose(c).unwrap();
                    let right = a.compose(&b.compose(c).unwrap()).unwrap();
                    assert_eq!(left, right, "{} {} {}", a, b, c);
                }
            }
        }
    }

    #[test]
    fn test_fourfold_rotation_squared() {
        let four = op("-y,x,z");
        assert_eq!(four.compose(&four).unwrap(), op("-x,-y,z"));
    }

    #[test]
    fn test_screw_axis_accumulates_translation() {
        let screw = op("-y,x,z+1/4");
        let twice = screw.compose(&screw).unwrap();
        assert_eq!(twice.triplet(), "-x,-y,z+1/2");
        let four_times = twice.compose(&twice).unwrap();
        assert!(four_times.is_identity());
    }

    #[test]
    fn test_translations_add_componentwise() {
        let mirror = op("-x,y,z");
        let shift = op("x+1/3,y,z");
        let c = mirror.compose(&shift).unwrap();
        assert_eq!(c.rot, mirror.rot);
        assert_eq!(c.tr, TrOp::new(4, 0, 0));
        assert_eq!(shift.compose(&mirror).unwrap(), c);
    }

    #[test]
    fn test_affine_composition_applies_right_operand_first() {
        // x -> x+1/4, then x -> -x gives -x-1/4 == -x+3/4
        let inversion = op("-x,-y,z");
        let shift = op("x+1/4,y,z");
        assert_eq!(
            inversion.compose_affine(&shift).unwrap().triplet(),
            "-x+3/4,-y,z"
        );
        assert_eq!(
            shift.compose_affine(&inversion).unwrap().triplet(),
            "-x+1/4,-y,z"
        );
        // no rotation on the left: both compositions agree
        assert_eq!(
            shift.compose_affine(&inversion).unwrap(),
            shift.compose(&inversion).unwrap()
        );
    }

    #[test]
    fn test_affine_composition_is_associative() {
        let ops = sample_ops();
        for a in &ops {
            for b in &ops {
                for c in &ops {
                    let left = a.compose_affine(b).unwrap().compose_affine(c).unwrap();
                    let right = a.compose_affine(&b.compose_affine(c).unwrap()).unwrap();
                    assert_eq!(left, right, "{} {} {}", a, b, c);
                }
            }
        }
    }

    #[test]
    fn test_translation_reduced_into_unit_cell() {
        let a = op("x+1/2,y+3/4,z");
        let b = op("x+3/4,y+3/4,z+1/2");
        let c = a.compose(&b).unwrap();
        assert_eq!(c.tr, TrOp::new(3, 6, 6));

        // negative and multi-cell translations
        let back = op("x-1/2,y-2,z+3");
        let reduced = SymOp::identity().compose(&back).unwrap();
        assert_eq!(reduced.tr, TrOp::new(6, 0, 0));
    }

    #[test]
    fn test_translation_compose_and_wrap() {
        let a = TrOp::new(11, 6, 0);
        let b = TrOp::new(11, 6, -1);
        assert_eq!(a.compose(&b), TrOp::new(10, 0, 11));
        assert_eq!(TrOp::new(-6, 25, 12).wrapped(), TrOp::new(6, 1, 0));
        assert!(TrOp::default().is_zero());
    }

    #[test]
    fn test_composition_overflow_is_reported() {
        let big = SymOp::new(
            RotOp::from_rows([[100, 0, 0], [0, 1, 0], [0, 0, 1]]),
            TrOp::zero(),
        );
        let double = op("x+x,y,z");
        assert_eq!(
            big.compose(&double),
            Err(SymmetryError::Overflow {
                operation: "rotation composition"
            })
        );
        // within range still composes
        assert_eq!(double.compose(&double).unwrap().rot.row(0), [4, 0, 0]);
    }

    // ==================== Inverse ====================

    #[test]
    fn test_inverse_of_screw() {
        let screw = op("-y,x,z+1/4");
        assert_eq!(screw.inverse().unwrap().triplet(), "y,-x,z+3/4");
    }

    #[test]
    fn test_inverse_composes_to_identity() {
        for a in sample_ops() {
            let inv = a.inverse().unwrap();
            assert!(a.compose(&inv).unwrap().is_identity(), "{}", a);
            assert!(inv.compose(&a).unwrap().is_identity(), "{}", a);
        }
    }

    #[test]
    fn test_affine_inverse() {
        let glide = op("-x+1/4,-y,z+1/2");
        assert_eq!(glide.inverse().unwrap().triplet(), "-x+3/4,-y,z+1/2");
        assert_eq!(glide.inverse_affine().unwrap().triplet(), "-x+1/4,-y,z+1/2");
        for a in sample_ops() {
            let inv = a.inverse_affine().unwrap();
            assert!(a.compose_affine(&inv).unwrap().is_identity(), "{}", a);
            assert!(inv.compose_affine(&a).unwrap().is_identity(), "{}", a);
        }
    }

    #[test]
    fn test_singular_rotation_has_no_inverse() {
        assert_eq!(
            op("x+x,y,z").inverse(),
            Err(SymmetryError::NotInvertible { determinant: 2 })
        );
        assert_eq!(
            op("0,y,z").inverse(),
            Err(SymmetryError::NotInvertible { determinant: 0 })
        );
        assert_eq!(
            op("0,y,z").inverse_affine(),
            Err(SymmetryError::NotInvertible { determinant: 0 })
        );
    }

    #[test]
    fn test_determinant() {
        assert_eq!(RotOp::identity().determinant(), 1);
        assert_eq!(op("-x,-y,-z").rot.determinant(), -1);
        assert_eq!(op("x-y,x,z").rot.determinant(), 1);
        assert_eq!(op("-x,y,z").rot.determinant(), -1);
    }

    // ==================== Order ====================

    #[test]
    fn test_order_of_point_operations() {
        assert_eq!(SymOp::identity().order(), Some(1));
        assert_eq!(op("-x,-y,-z").order(), Some(2));
        assert_eq!(op("-y,x-y,z").order(), Some(3));
        assert_eq!(op("-y,x,z").order(), Some(4));
        assert_eq!(op("x-y,x,z").order(), Some(6));
        assert_eq!(op("-y,x,-z").order(), Some(4));
    }

    #[test]
    fn test_order_of_screws_and_translations() {
        assert_eq!(op("x+1/2,y,z").order(), Some(2));
        assert_eq!(op("-y,x-y,z+1/3").order(), Some(3));
        assert_eq!(op("x-y,x,z+1/6").order(), Some(6));
        assert_eq!(op("x,y,z+1").order(), Some(1));
    }

    #[test]
    fn test_shear_has_no_finite_order() {
        assert_eq!(op("x+y,y,z").order(), None);
    }

    // ==================== Misc ====================

    #[test]
    fn test_from_str_and_display() {
        let parsed: SymOp = "-x+1/2,y,z+1/3".parse().unwrap();
        assert_eq!(parsed.tr.0, Vector3::new(6, 0, 4));
        assert_eq!(format!("{}", parsed), "-x+1/2,y,z+1/3");
        assert!("x,y".parse::<SymOp>().is_err());
    }

    #[test]
    fn test_wrapped_keeps_rotation() {
        let a = op("-x-1/2,y,z+1");
        let w = a.wrapped();
        assert_eq!(w.rot, a.rot);
        assert_eq!(w.tr, TrOp::new(6, 0, 0));
    }
}
