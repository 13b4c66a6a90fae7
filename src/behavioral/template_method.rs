//! Behavioral Pattern: Template Method
//! Example: one-time-password delivery over SMS and email
//!
//! [`Otp::generate_and_send`] fixes the order of the steps; each
//! [`OtpChannel`] fills them in.
//!
//! Run with: cargo run --bin template_method

use tracing::debug;

use crate::error::CatalogError;
use crate::transcript::Transcript;

const OTP_DIGITS: &str = "1234567890";

/// Deterministic stand-in for a random code: the digit cycle cut to `len`.
pub fn otp_of_length(len: usize) -> String {
    OTP_DIGITS.chars().cycle().take(len).collect()
}

pub trait OtpChannel {
    fn name(&self) -> &str;
    fn generate_otp(&self, len: usize, out: &Transcript) -> String;
    fn save_to_cache(&self, otp: &str, out: &Transcript);
    fn message(&self, otp: &str) -> String;
    fn send(&self, message: &str, out: &Transcript) -> Result<(), CatalogError>;
}

pub struct Otp<C: OtpChannel> {
    channel: C,
}

impl<C: OtpChannel> Otp<C> {
    pub fn new(channel: C) -> Self {
        Otp { channel }
    }

    pub fn channel(&self) -> &C {
        &self.channel
    }

    /// The template method.
    pub fn generate_and_send(&self, len: usize, out: &Transcript) -> Result<(), CatalogError> {
        debug!(channel = self.channel.name(), len, "sending otp");
        let otp = self.channel.generate_otp(len, out);
        self.channel.save_to_cache(&otp, out);
        let message = self.channel.message(&otp);
        self.channel.send(&message, out)
    }
}

#[derive(Debug, Default)]
pub struct Sms;

impl OtpChannel for Sms {
    fn name(&self) -> &str {
        "SMS"
    }

    fn generate_otp(&self, len: usize, out: &Transcript) -> String {
        let otp = otp_of_length(len);
        out.line(format!("SMS: generating random otp {otp}"));
        otp
    }

    fn save_to_cache(&self, otp: &str, out: &Transcript) {
        out.line(format!("SMS: saving otp: {otp} to cache"));
    }

    fn message(&self, otp: &str) -> String {
        format!("SMS OTP for login is {otp}")
    }

    fn send(&self, message: &str, out: &Transcript) -> Result<(), CatalogError> {
        out.line(format!("SMS: sending sms: {message}"));
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct Email;

impl OtpChannel for Email {
    fn name(&self) -> &str {
        "EMAIL"
    }

    fn generate_otp(&self, len: usize, out: &Transcript) -> String {
        let otp = otp_of_length(len);
        out.line(format!("EMAIL: generating random otp {otp}"));
        otp
    }

    fn save_to_cache(&self, otp: &str, out: &Transcript) {
        out.line(format!("EMAIL: saving otp: {otp} to cache"));
    }

    fn message(&self, otp: &str) -> String {
        format!("EMAIL OTP for login is {otp}")
    }

    fn send(&self, message: &str, out: &Transcript) -> Result<(), CatalogError> {
        out.line(format!("EMAIL: sending email: {message}"));
        Ok(())
    }
}

pub fn demo(out: &Transcript) -> Result<(), CatalogError> {
    Otp::new(Sms).generate_and_send(4, out)?;
    out.blank();
    Otp::new(Email).generate_and_send(4, out)?;
    Ok(())
}
