//! Template Method demonstration.
//!
//! Run with: cargo run --bin template_method

use design_patterns::behavioral::template_method;
use design_patterns::{logging, Transcript};

fn main() -> anyhow::Result<()> {
    logging::init(0);

    let out = Transcript::new();
    template_method::demo(&out)?;
    print!("{out}");
    Ok(())
}
