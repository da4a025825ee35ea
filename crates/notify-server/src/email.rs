//! Turning a validated submission into the staff email.
//!
//! | Route      | Subject                   | Body fields                    |
//! |------------|---------------------------|--------------------------------|
//! | enroll     | `New Enrollment: {course}`| course, name, phone, language  |
//! | contact    | `Contact Form: {subject}` | name, email, subject, message  |
//! | newsletter | `Newsletter Subscription` | email                          |
//!
//! Bodies are plain text, one `Label: value` line per field. Values
//! placed in the subject have line breaks flattened to spaces.

use crate::types::{EmailMessage, NotificationRequest};

/// Build the email for `req`, addressed to `staff_address`.
pub fn build_email(req: &NotificationRequest, staff_address: &str) -> EmailMessage {
    let (subject, lines): (String, Vec<(&str, &str)>) = match req {
        NotificationRequest::Enroll(r) => (
            format!("New Enrollment: {}", single_line(&r.course)),
            vec![
                ("Course", r.course.as_str()),
                ("Name", r.name.as_str()),
                ("Phone", r.phone.as_str()),
                ("Language", r.language.as_str()),
            ],
        ),
        NotificationRequest::Contact(r) => (
            format!("Contact Form: {}", single_line(&r.subject)),
            vec![
                ("Name", r.name.as_str()),
                ("Email", r.email.as_str()),
                ("Subject", r.subject.as_str()),
                ("Message", r.message.as_str()),
            ],
        ),
        NotificationRequest::Newsletter(r) => (
            "Newsletter Subscription".to_string(),
            vec![("Email", r.email.as_str())],
        ),
    };

    let text = lines
        .iter()
        .map(|(label, value)| format!("{}: {}", label, value))
        .collect::<Vec<_>>()
        .join("\n");

    EmailMessage {
        to: staff_address.to_string(),
        subject,
        text,
    }
}

fn single_line(s: &str) -> String {
    s.trim().replace(['\r', '\n'], " ")
}
