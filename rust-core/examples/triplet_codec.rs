/// Example walking through the triplet codec, operator algebra and space-group table
///
/// Parses a few hand-written triplets, composes a screw axis with itself until it
/// closes, and looks up the settings of a monoclinic group.
use crystal_symmetry::{
    find_spacegroup_by_name, parse_triplet, spacegroups_with_number, SymOp, SymmetryError,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Coordinate triplets ===\n");

    // Example 1: non-canonical input is normalized on output
    println!("1. Parsing and re-formatting:");
    for text in ["1/2 - X, Y, 1/3+z", "-h+k,k,l+5/6", "x-1/2,y+1,z"] {
        let op = parse_triplet(text)?;
        println!("   {:<20} -> {}", text, op);
    }

    // Example 2: malformed input reports where it went wrong
    println!("\n2. Rejecting malformed triplets:");
    for text in ["x,y", "x+1/5,y,z", "++x,y,z"] {
        match parse_triplet(text) {
            Ok(op) => println!("   {:<20} -> unexpectedly parsed as {}", text, op),
            Err(err) => println!("   {:<20} -> {}", text, err),
        }
    }

    // Example 3: powers of a 6_1 screw axis
    println!("\n3. Powers of the 6_1 screw axis:");
    let screw: SymOp = "x-y,x,z+1/6".parse()?;
    let mut power = screw;
    for n in 1..=6 {
        println!("   ({})^{} = {}", screw, n, power);
        power = screw.compose(&power)?;
    }
    println!("   order = {:?}", screw.order());

    // Example 4: inverse and a non-invertible rotation
    println!("\n4. Inverses:");
    let four = parse_triplet("-y,x,z+1/4")?;
    println!("   inverse of {} is {}", four, four.inverse()?);
    println!("   affine inverse of {} is {}", four, four.inverse_affine()?);
    let glide = parse_triplet("-x+1/4,y,z")?;
    println!(
        "   {} then {}: {} (affine {})",
        glide,
        four,
        four.compose(&glide)?,
        four.compose_affine(&glide)?
    );
    match parse_triplet("x+y,y,0")?.inverse() {
        Err(SymmetryError::NotInvertible { determinant }) => {
            println!("   x+y,y,0 has determinant {} and no inverse", determinant)
        }
        other => println!("   unexpected: {:?}", other),
    }

    // Example 5: space-group settings
    println!("\n5. Settings of space group 14:");
    for sg in spacegroups_with_number(14) {
        println!("   {:>5}  {:<14} {}", sg.ccp4, sg.hm, sg.hall);
    }
    let sg = find_spacegroup_by_name("P 21 21 21")?;
    println!("\n   lookup \"P 21 21 21\" -> {} hall={}", sg, sg.hall);

    println!("\n=== Done ===");
    Ok(())
}
