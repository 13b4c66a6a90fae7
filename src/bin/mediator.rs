//! Mediator demonstration.
//!
//! Run with: cargo run --bin mediator

use design_patterns::behavioral::mediator;
use design_patterns::{logging, Transcript};

fn main() -> anyhow::Result<()> {
    logging::init(0);

    let out = Transcript::new();
    mediator::demo(&out)?;
    print!("{out}");
    Ok(())
}
