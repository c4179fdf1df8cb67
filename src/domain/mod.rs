//! Domain value objects and types.
//!
//! Type-safe wrappers for the contact form's typed fields. Each value object
//! validates at construction time so an invalid value cannot be represented.

pub mod email;
pub mod errors;
pub mod inquiry_type;

pub use email::EmailAddress;
pub use errors::ValidationError;
pub use inquiry_type::InquiryType;
