#[cfg(test)]
mod _tests_triplet_parser {
    use super::super::symmetry_operations::{RotOp, SymOp, TrOp};
    use super::super::triplet_parser::*;
    use crate::errors::{ParseErrorKind, SymmetryError};

    fn kind_of(result: crate::Result<SymOp>) -> ParseErrorKind {
        match result {
            Err(SymmetryError::Parse { kind, .. }) => kind,
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    // ==================== Well-formed triplets ====================

    #[test]
    fn test_identity_triplet() {
        let op = parse_triplet("x,y,z").unwrap();
        assert_eq!(op, SymOp::identity());
        assert!(op.is_identity());
    }

    #[test]
    fn test_rows_and_translation() {
        let op = parse_triplet("-x+1/2,y,z+1/3").unwrap();
        assert_eq!(op.rot.row(0), [-1, 0, 0]);
        assert_eq!(op.rot.row(1), [0, 1, 0]);
        assert_eq!(op.rot.row(2), [0, 0, 1]);
        assert_eq!(op.tr, TrOp::new(6, 0, 4));
    }

    #[test]
    fn test_mixed_axes_in_one_part() {
        let op = parse_triplet("x-y,x,z+5/6").unwrap();
        assert_eq!(
            op.rot,
            RotOp::from_rows([[1, -1, 0], [1, 0, 0], [0, 0, 1]])
        );
        assert_eq!(op.tr, TrOp::new(0, 0, 10));
    }

    #[test]
    fn test_translation_before_axis() {
        let op = parse_triplet("1/2+x,1/4-y,-z").unwrap();
        assert_eq!(op.rot.row(0), [1, 0, 0]);
        assert_eq!(op.rot.row(1), [0, -1, 0]);
        assert_eq!(op.rot.row(2), [0, 0, -1]);
        assert_eq!(op.tr, TrOp::new(6, 3, 0));
    }

    #[test]
    fn test_letter_families_are_interchangeable() {
        let expected = parse_triplet("-x,y,z").unwrap();
        assert_eq!(parse_triplet("-X,Y,Z").unwrap(), expected);
        assert_eq!(parse_triplet("-h,k,l").unwrap(), expected);
        assert_eq!(parse_triplet("-H,K,L").unwrap(), expected);
        assert_eq!(parse_triplet("-a,b,c").unwrap(), expected);
        assert_eq!(parse_triplet("-A,B,C").unwrap(), expected);
    }

    #[test]
    fn test_whitespace_is_ignored() {
        let op = parse_triplet(" - x + 1/2 ,\ty , z\t+ 1/3 ").unwrap();
        assert_eq!(op, parse_triplet("-x+1/2,y,z+1/3").unwrap());
    }

    #[test]
    fn test_duplicate_axis_across_parts_is_allowed() {
        let op = parse_triplet("x,y,y").unwrap();
        assert_eq!(op.rot.row(2), [0, 1, 0]);
    }

    #[test]
    fn test_repeated_axis_accumulates() {
        assert_eq!(parse_triplet_part("x+x").unwrap(), [2, 0, 0, 0]);
        assert_eq!(parse_triplet_part("-y-y-y").unwrap(), [0, -3, 0, 0]);
        assert_eq!(parse_triplet_part("z-z").unwrap(), [0, 0, 0, 0]);
    }

    #[test]
    fn test_translations_accumulate() {
        assert_eq!(parse_triplet_part("x+1/2+1/4").unwrap(), [1, 0, 0, 9]);
        assert_eq!(parse_triplet_part("x-1/2").unwrap(), [1, 0, 0, -6]);
        assert_eq!(parse_triplet_part("z+1").unwrap(), [0, 0, 1, 12]);
        assert_eq!(parse_triplet_part("0").unwrap(), [0, 0, 0, 0]);
    }

    #[test]
    fn test_every_allowed_denominator() {
        assert_eq!(parse_triplet_part("1/1").unwrap()[3], 12);
        assert_eq!(parse_triplet_part("1/2").unwrap()[3], 6);
        assert_eq!(parse_triplet_part("2/3").unwrap()[3], 8);
        assert_eq!(parse_triplet_part("3/4").unwrap()[3], 9);
        assert_eq!(parse_triplet_part("5/6").unwrap()[3], 10);
    }

    // ==================== Malformed triplets ====================

    #[test]
    fn test_wrong_comma_count() {
        assert_eq!(kind_of(parse_triplet("x,y")), ParseErrorKind::WrongCommaCount(1));
        assert_eq!(
            kind_of(parse_triplet("x,y,z,w")),
            ParseErrorKind::WrongCommaCount(3)
        );
        assert_eq!(kind_of(parse_triplet("xyz")), ParseErrorKind::WrongCommaCount(0));
    }

    #[test]
    fn test_invalid_denominator() {
        assert_eq!(
            kind_of(parse_triplet("x+1/5,y,z")),
            ParseErrorKind::InvalidDenominator(5)
        );
        assert_eq!(
            kind_of(parse_triplet("x+1/0,y,z")),
            ParseErrorKind::InvalidDenominator(0)
        );
        assert_eq!(
            kind_of(parse_triplet("x+1/,y,z")),
            ParseErrorKind::MissingDenominator
        );
    }

    #[test]
    fn test_sign_errors() {
        assert_eq!(kind_of(parse_triplet("++x,y,z")), ParseErrorKind::DuplicateSign);
        assert_eq!(kind_of(parse_triplet("+-x,y,z")), ParseErrorKind::DuplicateSign);
        assert_eq!(kind_of(parse_triplet("x-,y,z")), ParseErrorKind::TrailingSign);
        assert_eq!(kind_of(parse_triplet("x,y,z+")), ParseErrorKind::TrailingSign);
        assert_eq!(kind_of(parse_triplet("xy,y,z")), ParseErrorKind::MissingSign);
        assert_eq!(kind_of(parse_triplet("x 1/2,y,z")), ParseErrorKind::MissingSign);
    }

    #[test]
    fn test_unexpected_characters() {
        assert_eq!(
            kind_of(parse_triplet("x,y,w")),
            ParseErrorKind::UnexpectedCharacter('w')
        );
        assert_eq!(
            kind_of(parse_triplet("x*2,y,z")),
            ParseErrorKind::UnexpectedCharacter('*')
        );
        assert_eq!(
            kind_of(parse_triplet("x,ÿ,z")),
            ParseErrorKind::UnexpectedCharacter('ÿ')
        );
    }

    #[test]
    fn test_empty_part() {
        assert_eq!(kind_of(parse_triplet("x,,z")), ParseErrorKind::EmptyExpression);
        assert_eq!(kind_of(parse_triplet("x, ,z")), ParseErrorKind::EmptyExpression);
    }

    #[test]
    fn test_out_of_range_values() {
        assert_eq!(
            kind_of(parse_triplet("x+100,y,z")),
            ParseErrorKind::OutOfRange
        );
        assert_eq!(
            kind_of(parse_triplet("x+99999999999999999999,y,z")),
            ParseErrorKind::OutOfRange
        );
    }

    #[test]
    fn test_error_reports_fragment_and_offset() {
        match parse_triplet("x,y+1/5,z") {
            Err(SymmetryError::Parse {
                kind,
                fragment,
                offset,
            }) => {
                assert_eq!(kind, ParseErrorKind::InvalidDenominator(5));
                assert_eq!(fragment, "y+1/5");
                // the denominator digit in the full text
                assert_eq!(offset, 6);
            }
            other => panic!("expected parse error, got {:?}", other),
        }
        let message = parse_triplet("x,y,q").unwrap_err().to_string();
        assert!(message.contains("unexpected character 'q'"));
    }

    #[test]
    fn test_axis_classification() {
        assert_eq!(Axis::classify('h'), Some(Axis::X));
        assert_eq!(Axis::classify('K'), Some(Axis::Y));
        assert_eq!(Axis::classify('c'), Some(Axis::Z));
        assert_eq!(Axis::classify('w'), None);
        assert_eq!(Axis::classify('1'), None);
        for axis in Axis::ALL {
            assert_eq!(Axis::classify(axis.letter()), Some(axis));
        }
    }
}
