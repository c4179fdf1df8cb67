//! Declarative validation of the contact form.
//!
//! Every field is checked by its own rule, without short-circuiting, so all
//! errors can be shown next to their inputs at once.

mod field_errors;
mod rules;

pub use field_errors::FieldErrors;
pub use rules::{rule_for, FieldRule};

use crate::domain::{EmailAddress, InquiryType};
use crate::models::contact_request::ContactRequestParts;
use crate::models::{ContactFormFields, ContactRequest, FormField};

/// Validate raw form input.
///
/// Returns the validated [`ContactRequest`] when every rule passes, otherwise
/// one human-readable message per failing field. Pure: the same input always
/// yields the same result.
pub fn validate(fields: &ContactFormFields) -> Result<ContactRequest, FieldErrors> {
    let mut errors = FieldErrors::new();
    for field in FormField::ALL {
        if let Err(message) = rule_for(field).check(fields.get(field)) {
            errors.insert(field, message);
        }
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    build_request(fields).map_err(|field| {
        // Rules and value objects disagree; report against the offending field.
        let mut errors = FieldErrors::new();
        errors.insert(field, rule_for(field).message());
        errors
    })
}

fn build_request(fields: &ContactFormFields) -> Result<ContactRequest, FormField> {
    let inquiry_type = fields
        .inquiry_type
        .parse::<InquiryType>()
        .map_err(|_| FormField::InquiryType)?;
    let email = EmailAddress::new(fields.email.as_str()).map_err(|_| FormField::Email)?;

    Ok(ContactRequest::from_parts(ContactRequestParts {
        inquiry_type,
        first_name: fields.first_name.clone(),
        last_name: fields.last_name.clone(),
        email,
        phone: optional(&fields.phone).map(str::to_string),
        company: optional(&fields.company).map(str::to_string),
        subject: fields.subject.clone(),
        message: fields.message.clone(),
    }))
}

/// Blank optional inputs count as absent, so they never reach the request or
/// its `has_*` analytics flags.
pub(crate) fn optional(value: &str) -> Option<&str> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}
