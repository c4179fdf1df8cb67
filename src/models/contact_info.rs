//! Static "Other Ways to Reach Us" panel shown next to the form.

use serde::Serialize;

pub const CONTACT_INFO_HEADING: &str = "Other Ways to Reach Us";
pub const CONTACT_INFO_SUBHEADING: &str = "Choose the method that works best for you";

/// Link offered by a contact method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactAction {
    pub label: &'static str,
    pub href: &'static str,
}

/// One card of the contact info panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactMethod {
    pub title: &'static str,
    pub details: Vec<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<ContactAction>,
}

/// The contact methods in display order.
pub fn contact_methods() -> Vec<ContactMethod> {
    vec![
        ContactMethod {
            title: "Email Us",
            details: vec!["hello@formlink.com", "support@formlink.com"],
            action: Some(ContactAction {
                label: "Send Email",
                href: "mailto:hello@formlink.com",
            }),
        },
        ContactMethod {
            title: "Call Us",
            details: vec!["+1 (555) 123-4567", "Mon-Fri, 9am-6pm EST"],
            action: Some(ContactAction {
                label: "Call Now",
                href: "tel:+15551234567",
            }),
        },
        ContactMethod {
            title: "Visit Us",
            details: vec!["123 Business Ave", "Suite 100", "New York, NY 10001"],
            action: None,
        },
        ContactMethod {
            title: "Business Hours",
            details: vec![
                "Monday - Friday: 9:00 AM - 6:00 PM",
                "Saturday: 10:00 AM - 4:00 PM",
                "Sunday: Closed",
            ],
            action: None,
        },
    ]
}
