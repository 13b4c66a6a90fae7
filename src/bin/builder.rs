//! Builder demonstration.
//!
//! Run with: cargo run --bin builder

use design_patterns::creational::builder;
use design_patterns::{logging, Transcript};

fn main() -> anyhow::Result<()> {
    logging::init(0);

    let out = Transcript::new();
    builder::demo(&out)?;
    print!("{out}");
    Ok(())
}
