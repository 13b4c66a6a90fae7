//! Flyweight demonstration.
//!
//! Run with: cargo run --bin flyweight

use design_patterns::structural::flyweight;
use design_patterns::{logging, Transcript};

fn main() -> anyhow::Result<()> {
    logging::init(0);

    let out = Transcript::new();
    flyweight::demo(&out)?;
    print!("{out}");
    Ok(())
}
