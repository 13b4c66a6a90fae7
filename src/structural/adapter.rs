//! Structural Pattern: Adapter
//! Example: plugging a Lightning connector into a USB-only machine
//!
//! Run with: cargo run --bin adapter

use crate::error::CatalogError;
use crate::transcript::Transcript;

/// What the client knows how to talk to.
pub trait Computer {
    fn insert_into_lightning_port(&self, out: &Transcript);
}

pub struct Mac;

impl Computer for Mac {
    fn insert_into_lightning_port(&self, out: &Transcript) {
        out.line("Lightning connector is plugged into mac machine.");
    }
}

/// Only speaks USB; does not implement [`Computer`].
pub struct Windows;

impl Windows {
    pub fn insert_into_usb_port(&self, out: &Transcript) {
        out.line("USB connector is plugged into windows machine.");
    }
}

pub struct WindowsAdapter {
    machine: Windows,
}

impl WindowsAdapter {
    pub fn new(machine: Windows) -> Self {
        WindowsAdapter { machine }
    }
}

impl Computer for WindowsAdapter {
    fn insert_into_lightning_port(&self, out: &Transcript) {
        out.line("Adapter converts Lightning signal to USB.");
        self.machine.insert_into_usb_port(out);
    }
}

pub struct Client;

impl Client {
    pub fn insert_lightning_connector_into_computer(&self, computer: &dyn Computer, out: &Transcript) {
        out.line("Client inserts Lightning connector into computer.");
        computer.insert_into_lightning_port(out);
    }
}

pub fn demo(out: &Transcript) -> Result<(), CatalogError> {
    let client = Client;

    client.insert_lightning_connector_into_computer(&Mac, out);

    let adapter = WindowsAdapter::new(Windows);
    client.insert_lightning_connector_into_computer(&adapter, out);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mac_needs_no_adapter() {
        let out = Transcript::new();
        Client.insert_lightning_connector_into_computer(&Mac, &out);
        assert_eq!(
            out.lines(),
            vec![
                "Client inserts Lightning connector into computer.",
                "Lightning connector is plugged into mac machine.",
            ]
        );
    }

    #[test]
    fn test_adapter_translates_to_usb() {
        let out = Transcript::new();
        let adapter = WindowsAdapter::new(Windows);
        Client.insert_lightning_connector_into_computer(&adapter, &out);

        let converts = out.position("Adapter converts Lightning signal to USB.").unwrap();
        let plugged = out.position("USB connector is plugged into windows machine.").unwrap();
        assert!(converts < plugged);
    }

    #[test]
    fn test_demo_line_count() {
        let out = Transcript::new();
        demo(&out).unwrap();
        assert_eq!(out.len(), 5);
    }
}
