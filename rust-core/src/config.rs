// Constants

// Translations are stored as numerators over this denominator
pub const TRANSLATION_DENOMINATOR: i32 = 12;
// Denominators accepted in triplet text (all divide TRANSLATION_DENOMINATOR)
pub const ALLOWED_DENOMINATORS: [i64; 5] = [1, 2, 3, 4, 6];
// Factors tried, in order, when reducing n/12 to lowest terms
pub const REDUCTION_FACTORS: [i32; 3] = [2, 2, 3];

// Upper bound when searching for the order of an operation
pub const MAX_OPERATION_ORDER: usize = 24;

// Number of space-group settings in the compiled-in table
pub const SPACE_GROUP_COUNT: usize = 530;
