//! Send capabilities that deliver a validated contact request.
//!
//! The controller only sees the [`ContactSender`] trait. The page composing
//! the form injects an implementation; [`SimulatedSender`] stands in when none
//! is supplied.

mod simulated;
mod traits;
mod webhook;

pub use simulated::SimulatedSender;
pub use traits::ContactSender;
pub use webhook::{WebhookClient, WebhookSender};
