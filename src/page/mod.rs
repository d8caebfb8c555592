//! Page adapter: measured sections in, logo positions out.

pub mod config;
pub mod layout;
pub mod session;
