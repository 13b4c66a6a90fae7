//! Decorator demonstration.
//!
//! Run with: cargo run --bin decorator

use design_patterns::structural::decorator;
use design_patterns::{logging, Transcript};

fn main() -> anyhow::Result<()> {
    logging::init(0);

    let out = Transcript::new();
    decorator::demo(&out)?;
    print!("{out}");
    Ok(())
}
