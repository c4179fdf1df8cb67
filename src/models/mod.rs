//! Data models for the contact form.
//!
//! Raw form input, the validated request built from it, and the static
//! contact details shown next to the form.

pub mod contact_form;
pub mod contact_info;
pub mod contact_request;

pub use contact_form::{ContactFormFields, FormField};
pub use contact_info::{contact_methods, ContactAction, ContactMethod};
pub use contact_request::ContactRequest;
