//! Behavioral Pattern: Command
//! Example: on/off buttons bound to a TV through command objects
//!
//! Run with: cargo run --bin command

use std::cell::RefCell;
use std::rc::Rc;

use tracing::debug;

use crate::error::CatalogError;
use crate::transcript::Transcript;

/// Receiver.
pub trait Device {
    fn on(&mut self, out: &Transcript);
    fn off(&mut self, out: &Transcript);
    fn is_running(&self) -> bool;
}

#[derive(Debug, Default)]
pub struct Tv {
    running: bool,
}

impl Device for Tv {
    fn on(&mut self, out: &Transcript) {
        self.running = true;
        out.line("Turning tv on");
    }

    fn off(&mut self, out: &Transcript) {
        self.running = false;
        out.line("Turning tv off");
    }

    fn is_running(&self) -> bool {
        self.running
    }
}

pub type SharedDevice = Rc<RefCell<dyn Device>>;

pub trait Command {
    fn execute(&self, out: &Transcript);
}

pub struct OnCommand {
    device: SharedDevice,
}

impl OnCommand {
    pub fn new(device: SharedDevice) -> Self {
        OnCommand { device }
    }
}

impl Command for OnCommand {
    fn execute(&self, out: &Transcript) {
        self.device.borrow_mut().on(out);
    }
}

pub struct OffCommand {
    device: SharedDevice,
}

impl OffCommand {
    pub fn new(device: SharedDevice) -> Self {
        OffCommand { device }
    }
}

impl Command for OffCommand {
    fn execute(&self, out: &Transcript) {
        self.device.borrow_mut().off(out);
    }
}

/// Invoker: knows nothing about the device behind its command.
pub struct Button {
    label: String,
    command: Box<dyn Command>,
}

impl Button {
    pub fn new(label: impl Into<String>, command: Box<dyn Command>) -> Self {
        Button {
            label: label.into(),
            command,
        }
    }

    pub fn press(&self, out: &Transcript) {
        debug!(button = %self.label, "button pressed");
        self.command.execute(out);
    }
}

pub fn demo(out: &Transcript) -> Result<(), CatalogError> {
    let tv: SharedDevice = Rc::new(RefCell::new(Tv::default()));

    let on_button = Button::new("on", Box::new(OnCommand::new(Rc::clone(&tv))));
    on_button.press(out);

    let off_button = Button::new("off", Box::new(OffCommand::new(Rc::clone(&tv))));
    off_button.press(out);
    Ok(())
}
