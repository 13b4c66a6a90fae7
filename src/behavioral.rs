//! Behavioral patterns: how objects communicate.

pub mod command;
pub mod interpreter;
pub mod iterator;
pub mod mediator;
pub mod template_method;
pub mod visitor;
