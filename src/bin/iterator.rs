//! Iterator demonstration.
//!
//! Run with: cargo run --bin iterator

use design_patterns::behavioral::iterator;
use design_patterns::{logging, Transcript};

fn main() -> anyhow::Result<()> {
    logging::init(0);

    let out = Transcript::new();
    iterator::demo(&out)?;
    print!("{out}");
    Ok(())
}
