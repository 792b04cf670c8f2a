use std::path::PathBuf;

use clap::Parser;
use l2_fixture_gen::{generate, ArrayLength, DEFAULT_OUTPUT};

/// Generate a C header file with a specified array length.
#[derive(Parser)]
struct Args {
    /// Length of the array to be generated.
    #[arg(value_parser = clap::value_parser!(u32).range(1..))]
    length: u32,

    #[arg(long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let len = ArrayLength::new(args.length)?;
    let path = generate(&args.output, len)?;
    println!("Generated file {} with array length {}", path.display(), len);

    Ok(())
}
