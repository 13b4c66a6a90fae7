//! Adapter demonstration.
//!
//! Run with: cargo run --bin adapter

use design_patterns::structural::adapter;
use design_patterns::{logging, Transcript};

fn main() -> anyhow::Result<()> {
    logging::init(0);

    let out = Transcript::new();
    adapter::demo(&out)?;
    print!("{out}");
    Ok(())
}
