//! Factory Method demonstration.
//!
//! Run with: cargo run --bin factory_method

use design_patterns::creational::factory_method;
use design_patterns::{logging, Transcript};

fn main() -> anyhow::Result<()> {
    logging::init(0);

    let out = Transcript::new();
    factory_method::demo(&out)?;
    print!("{out}");
    Ok(())
}
