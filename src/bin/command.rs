//! Command demonstration.
//!
//! Run with: cargo run --bin command

use design_patterns::behavioral::command;
use design_patterns::{logging, Transcript};

fn main() -> anyhow::Result<()> {
    logging::init(0);

    let out = Transcript::new();
    command::demo(&out)?;
    print!("{out}");
    Ok(())
}
