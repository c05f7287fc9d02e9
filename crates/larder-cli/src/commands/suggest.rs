//! `larder suggest` -- common ingredients and nutrition tips.

use larder_core::{ingredient_suggestions, nutritional_tips};

/// Run the suggest command.
pub fn run() {
    println!("Common ingredients:");
    for row in ingredient_suggestions().chunks(4) {
        println!("  {}", row.join(", "));
    }

    println!();
    println!("Nutrition tips:");
    for tip in nutritional_tips() {
        println!("  - {tip}");
    }
}
