//! Bridge demonstration.
//!
//! Run with: cargo run --bin bridge

use design_patterns::structural::bridge;
use design_patterns::{logging, Transcript};

fn main() -> anyhow::Result<()> {
    logging::init(0);

    let out = Transcript::new();
    bridge::demo(&out)?;
    print!("{out}");
    Ok(())
}
