//! Interpreter demonstration.
//!
//! Run with: cargo run --bin interpreter

use design_patterns::behavioral::interpreter;
use design_patterns::{logging, Transcript};

fn main() -> anyhow::Result<()> {
    logging::init(0);

    let out = Transcript::new();
    interpreter::demo(&out)?;
    print!("{out}");
    Ok(())
}
