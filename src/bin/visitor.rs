//! Visitor demonstration.
//!
//! Run with: cargo run --bin visitor

use design_patterns::behavioral::visitor;
use design_patterns::{logging, Transcript};

fn main() -> anyhow::Result<()> {
    logging::init(0);

    let out = Transcript::new();
    visitor::demo(&out)?;
    print!("{out}");
    Ok(())
}
