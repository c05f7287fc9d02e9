//! `larder normalize` -- clean ingredient names offline.
//!
//! ```text
//! larder normalize "  Chicken! " rice, a the
//! larder normalize --strict --batch --batch-size 5 $(cat shopping.txt)
//! ```

use clap::Args;

use larder_core::normalize::split_typed_input;
use larder_core::pantry::{DEFAULT_CHUNK_SIZE, join_names};
use larder_core::{IngredientName, chunk_ingredients, is_valid_ingredient, normalize};

/// Arguments for the `larder normalize` subcommand.
#[derive(Args)]
pub struct NormalizeArgs {
    /// Raw ingredient names. Entries may also be comma-separated.
    #[arg(required = true)]
    pub items: Vec<String>,

    /// Also drop names that are not mostly letters.
    #[arg(long)]
    pub strict: bool,

    /// Print names in numbered batches.
    #[arg(long)]
    pub batch: bool,

    /// Names per batch with `--batch`.
    #[arg(long, default_value_t = DEFAULT_CHUNK_SIZE, requires = "batch")]
    pub batch_size: usize,
}

/// Run the normalize command.
pub fn run(args: NormalizeArgs) {
    let names = normalize_items(&args.items, args.strict);

    if args.batch {
        for (idx, batch) in chunk_ingredients(&names, args.batch_size).enumerate() {
            println!("Batch {}: {}", idx + 1, join_names(batch));
        }
    } else {
        for name in &names {
            println!("{name}");
        }
    }
}

fn normalize_items(items: &[String], strict: bool) -> Vec<IngredientName> {
    let raw = items.iter().map(String::as_str).flat_map(split_typed_input);
    normalize(raw)
        .into_iter()
        .filter(|name| !strict || is_valid_ingredient(name.as_str()))
        .collect()
}
