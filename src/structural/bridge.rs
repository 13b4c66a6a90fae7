//! Structural Pattern: Bridge
//! Example: computers (abstraction) and printers (implementation) vary independently
//!
//! Run with: cargo run --bin bridge

use std::rc::Rc;

use tracing::warn;

use crate::error::CatalogError;
use crate::transcript::Transcript;

// =============================================================================
// Implementation side
// =============================================================================

pub trait Printer {
    fn print_file(&self, out: &Transcript);
}

pub struct Epson;
pub struct Hp;

impl Printer for Epson {
    fn print_file(&self, out: &Transcript) {
        out.line("Printing by a EPSON Printer");
    }
}

impl Printer for Hp {
    fn print_file(&self, out: &Transcript) {
        out.line("Printing by a HP Printer");
    }
}

// =============================================================================
// Abstraction side
// =============================================================================

pub trait Computer {
    fn print(&self, out: &Transcript);
    fn set_printer(&mut self, printer: Rc<dyn Printer>);
}

#[derive(Default)]
pub struct Mac {
    printer: Option<Rc<dyn Printer>>,
}

#[derive(Default)]
pub struct Windows {
    printer: Option<Rc<dyn Printer>>,
}

fn forward(printer: Option<&Rc<dyn Printer>>, machine: &str, out: &Transcript) {
    match printer {
        Some(printer) => printer.print_file(out),
        None => {
            warn!(machine, "print requested with no printer attached");
            out.line(format!("No printer attached to the {machine}"));
        }
    }
}

impl Computer for Mac {
    fn print(&self, out: &Transcript) {
        out.line("Print request for mac");
        forward(self.printer.as_ref(), "mac", out);
    }

    fn set_printer(&mut self, printer: Rc<dyn Printer>) {
        self.printer = Some(printer);
    }
}

impl Computer for Windows {
    fn print(&self, out: &Transcript) {
        out.line("Print request for windows");
        forward(self.printer.as_ref(), "windows", out);
    }

    fn set_printer(&mut self, printer: Rc<dyn Printer>) {
        self.printer = Some(printer);
    }
}

pub fn demo(out: &Transcript) -> Result<(), CatalogError> {
    let hp: Rc<dyn Printer> = Rc::new(Hp);
    let epson: Rc<dyn Printer> = Rc::new(Epson);

    let mut computers: Vec<Box<dyn Computer>> =
        vec![Box::new(Mac::default()), Box::new(Windows::default())];

    for computer in computers.iter_mut() {
        for printer in [&hp, &epson] {
            computer.set_printer(Rc::clone(printer));
            computer.print(out);
            out.blank();
        }
    }
    Ok(())
}
