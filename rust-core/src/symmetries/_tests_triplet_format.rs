#[cfg(test)]
mod _tests_triplet_format {
    use super::super::symmetry_operations::{RotOp, SymOp, TrOp};
    use super::super::triplet_format::*;
    use super::super::triplet_parser::parse_triplet;

    #[test]
    fn test_identity_formats_as_xyz() {
        assert_eq!(make_triplet(&SymOp::identity()), "x,y,z");
        assert_eq!(SymOp::identity().to_string(), "x,y,z");
    }

    #[test]
    fn test_fraction_reduction() {
        assert_eq!(reduce_twelfths(8), (2, 3));
        assert_eq!(reduce_twelfths(6), (1, 2));
        assert_eq!(reduce_twelfths(4), (1, 3));
        assert_eq!(reduce_twelfths(9), (3, 4));
        assert_eq!(reduce_twelfths(3), (1, 4));
        assert_eq!(reduce_twelfths(2), (1, 6));
        assert_eq!(reduce_twelfths(1), (1, 12));
        assert_eq!(reduce_twelfths(10), (5, 6));
        assert_eq!(reduce_twelfths(12), (1, 1));
        assert_eq!(reduce_twelfths(-6), (-1, 2));
        assert_eq!(reduce_twelfths(18), (3, 2));
    }

    #[test]
    fn test_translation_terms() {
        assert_eq!(make_triplet_part(1, 0, 0, 8), "x+2/3");
        assert_eq!(make_triplet_part(1, 0, 0, 6), "x+1/2");
        assert_eq!(make_triplet_part(0, 1, 0, 4), "y+1/3");
        assert_eq!(make_triplet_part(0, 0, 1, 9), "z+3/4");
        assert_eq!(make_triplet_part(0, 0, -1, 12), "-z+1");
        assert_eq!(make_triplet_part(1, 0, 0, -6), "x-1/2");
    }

    #[test]
    fn test_axis_term_signs() {
        assert_eq!(make_triplet_part(-1, 0, 0, 0), "-x");
        assert_eq!(make_triplet_part(1, -1, 0, 0), "x-y");
        assert_eq!(make_triplet_part(-1, 1, 0, 0), "-x+y");
        assert_eq!(make_triplet_part(0, 1, 1, 0), "y+z");
        assert_eq!(make_triplet_part(1, 1, 1, 3), "x+y+z+1/4");
    }

    #[test]
    fn test_twelfths_written_as_two_terms() {
        assert_eq!(make_triplet_part(1, 0, 0, 1), "x-1/6+1/4");
        assert_eq!(make_triplet_part(1, 0, 0, 5), "x+1/6+1/4");
        assert_eq!(make_triplet_part(0, 0, 1, 7), "z+1/3+1/4");
        assert_eq!(make_triplet_part(0, 0, 0, 11), "+2/3+1/4");
        assert_eq!(make_triplet_part(-1, 0, 0, -1), "-x-1/3+1/4");
    }

    #[test]
    fn test_every_reduced_translation_round_trips() {
        for t in 0..12i8 {
            let op = SymOp::new(RotOp::identity(), TrOp::new(t, 0, 11 - t));
            let text = make_triplet(&op);
            assert_eq!(parse_triplet(&text).unwrap(), op, "{}", text);
        }
    }

    #[test]
    fn test_composed_quarter_and_third_round_trip() {
        let quarter = parse_triplet("x+1/4,y,z").unwrap();
        let third = parse_triplet("x+1/3,y,-z+1/4").unwrap();
        let sum = quarter.compose(&third).unwrap();
        assert_eq!(sum.tr, TrOp::new(7, 0, 3));
        let text = make_triplet(&sum);
        assert_eq!(text, "x+1/3+1/4,y,-z+1/4");
        assert_eq!(parse_triplet(&text).unwrap(), sum);
    }

    #[test]
    fn test_translation_only_row() {
        // a translation written first still carries its sign
        assert_eq!(make_triplet_part(0, 0, 0, 6), "+1/2");
        assert_eq!(make_triplet_part(0, 0, 0, 0), "0");
    }

    #[test]
    fn test_large_coefficients_repeat_letters() {
        assert_eq!(make_triplet_part(2, 0, 0, 0), "x+x");
        assert_eq!(make_triplet_part(0, -2, 1, 0), "-y-y+z");
        let op = SymOp::new(
            RotOp::from_rows([[2, 0, 0], [0, -3, 0], [0, 0, 1]]),
            TrOp::zero(),
        );
        let text = make_triplet(&op);
        assert_eq!(text, "x+x,-y-y-y,z");
        assert_eq!(parse_triplet(&text).unwrap(), op);
    }

    #[test]
    fn test_canonical_examples_round_trip() {
        for text in [
            "x,y,z",
            "-x,-y,-z",
            "-x+1/2,y,z+1/3",
            "-y,x-y,z+2/3",
            "y+1/4,x+3/4,-z+1/4",
            "x-y,-y,-z+5/6",
            "-x+y+1/2,y+1/2,z",
        ] {
            let op = parse_triplet(text).unwrap();
            assert_eq!(make_triplet(&op), text);
        }
    }

    #[test]
    fn test_non_canonical_input_is_normalized() {
        let op = parse_triplet("1/2 - X, Y, 1/3+z").unwrap();
        assert_eq!(op.triplet(), "-x+1/2,y,z+1/3");
        let op = parse_triplet("h,k,l+1/2").unwrap();
        assert_eq!(op.triplet(), "x,y,z+1/2");
    }
}
