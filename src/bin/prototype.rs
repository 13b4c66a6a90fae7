//! Prototype demonstration.
//!
//! Run with: cargo run --bin prototype

use design_patterns::creational::prototype;
use design_patterns::{logging, Transcript};

fn main() -> anyhow::Result<()> {
    logging::init(0);

    let out = Transcript::new();
    prototype::demo(&out)?;
    print!("{out}");
    Ok(())
}
