//! notify-server
//!
//! Stateless HTTP gateway that turns the site's form submissions
//! (enrollment, contact, newsletter) into emails for staff.

pub mod config;
pub mod error;
pub mod types;
pub mod email;
pub mod transport;
pub mod handlers;
pub mod server;
