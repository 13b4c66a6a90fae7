//! Abstract Factory demonstration.
//!
//! Run with: cargo run --bin abstract_factory

use design_patterns::creational::abstract_factory;
use design_patterns::{logging, Transcript};

fn main() -> anyhow::Result<()> {
    logging::init(0);

    let out = Transcript::new();
    abstract_factory::demo(&out)?;
    print!("{out}");
    Ok(())
}
