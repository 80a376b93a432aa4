//! Contact form submissions.
//!
//! Validates the payload and formats the plain-text notification that gets
//! forwarded to the messaging webhook. Validation failures are user-visible;
//! delivery failures are not (the endpoint logs and reports success anyway).

use regex::Regex;
use serde::Deserialize;
use std::sync::OnceLock;

/// Case-insensitive email shape check; completeness is not the goal, catching
/// obvious garbage before it reaches the webhook is.
const EMAIL_PATTERN: &str = r"(?i)^[A-Z0-9._%+-]+@[A-Z0-9.-]+\.[A-Z]{2,}$";

static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_REGEX.get_or_init(|| Regex::new(EMAIL_PATTERN).unwrap())
}

/// A contact form payload as submitted by the client.
#[derive(Debug, Clone, Deserialize)]
pub struct ContactSubmission {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

impl ContactSubmission {
    /// Validate required fields.
    ///
    /// Mirrors the public form's rules: name at least 2 characters, a
    /// well-formed email, and at least one of message/phone; a message, when
    /// given, carries at least 10 characters.
    pub fn validate(&self) -> Result<(), &'static str> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err("Name is required");
        }
        if name.chars().count() < 2 {
            return Err("Name must be at least 2 characters");
        }

        let email = self.email.trim();
        if email.is_empty() {
            return Err("Email is required");
        }
        if !email_regex().is_match(email) {
            return Err("Invalid email address");
        }

        let message = self.message.as_deref().map(str::trim).unwrap_or_default();
        let phone = self.phone.as_deref().map(str::trim).unwrap_or_default();

        if message.is_empty() && phone.is_empty() {
            return Err("Either a message or a phone number is required");
        }
        if !message.is_empty() && message.chars().count() < 10 {
            return Err("Message must be at least 10 characters");
        }

        Ok(())
    }

    /// Plain-text notification body for the messaging webhook.
    pub fn notification_text(&self) -> String {
        let mut lines = vec![
            "New contact form submission".to_string(),
            format!("Name: {}", self.name.trim()),
            format!("Email: {}", self.email.trim()),
        ];

        if let Some(message) = self.message.as_deref().map(str::trim) {
            if !message.is_empty() {
                lines.push(format!("Message: {}", message));
            }
        }
        if let Some(phone) = self.phone.as_deref().map(str::trim) {
            if !phone.is_empty() {
                lines.push(format!("Phone: {}", phone));
            }
        }

        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission(name: &str, email: &str, message: Option<&str>, phone: Option<&str>) -> ContactSubmission {
        ContactSubmission {
            name: name.to_string(),
            email: email.to_string(),
            message: message.map(String::from),
            phone: phone.map(String::from),
        }
    }

    // ==================== Validation Tests ====================

    #[test]
    fn test_valid_submission_with_message() {
        let s = submission("Jane Doe", "jane@example.com", Some("Hello there"), None);
        assert!(s.validate().is_ok());
    }

    #[test]
    fn test_valid_submission_with_phone_only() {
        let s = submission("Jane Doe", "jane@example.com", None, Some("+998 90 123 45 67"));
        assert!(s.validate().is_ok());
    }

    #[test]
    fn test_missing_name() {
        let s = submission("", "jane@example.com", Some("Hello there"), None);
        assert_eq!(s.validate().unwrap_err(), "Name is required");

        let s = submission("   ", "jane@example.com", Some("Hello there"), None);
        assert_eq!(s.validate().unwrap_err(), "Name is required");
    }

    #[test]
    fn test_short_name() {
        let s = submission("J", "jane@example.com", Some("Hello there"), None);
        assert_eq!(s.validate().unwrap_err(), "Name must be at least 2 characters");
    }

    #[test]
    fn test_missing_email() {
        let s = submission("Jane Doe", "", Some("Hello there"), None);
        assert_eq!(s.validate().unwrap_err(), "Email is required");
    }

    #[test]
    fn test_invalid_email() {
        for email in ["not-an-email", "a@b", "jane@", "@example.com", "jane example@x.com"] {
            let s = submission("Jane Doe", email, Some("Hello there"), None);
            assert_eq!(
                s.validate().unwrap_err(),
                "Invalid email address",
                "email {:?} should be rejected",
                email
            );
        }
    }

    #[test]
    fn test_email_is_case_insensitive() {
        let s = submission("Jane Doe", "Jane.Doe@Example.COM", Some("Hello there"), None);
        assert!(s.validate().is_ok());
    }

    #[test]
    fn test_requires_message_or_phone() {
        let s = submission("Jane Doe", "jane@example.com", None, None);
        assert_eq!(
            s.validate().unwrap_err(),
            "Either a message or a phone number is required"
        );

        let s = submission("Jane Doe", "jane@example.com", Some("  "), Some(""));
        assert_eq!(
            s.validate().unwrap_err(),
            "Either a message or a phone number is required"
        );
    }

    #[test]
    fn test_short_message() {
        let s = submission("Jane Doe", "jane@example.com", Some("Hi"), None);
        assert_eq!(
            s.validate().unwrap_err(),
            "Message must be at least 10 characters"
        );
    }

    #[test]
    fn test_deserialization_with_missing_fields() {
        let s: ContactSubmission =
            serde_json::from_str(r#"{"email": "jane@example.com"}"#).expect("Should deserialize");
        assert!(s.name.is_empty());
        assert!(s.message.is_none());
        // Missing fields become validation errors, not deserialization errors
        assert!(s.validate().is_err());
    }

    // ==================== Notification Text Tests ====================

    #[test]
    fn test_notification_text_with_message() {
        let s = submission("Jane Doe", "jane@example.com", Some("Hello there"), None);
        let text = s.notification_text();

        assert!(text.starts_with("New contact form submission"));
        assert!(text.contains("Name: Jane Doe"));
        assert!(text.contains("Email: jane@example.com"));
        assert!(text.contains("Message: Hello there"));
        assert!(!text.contains("Phone:"));
    }

    #[test]
    fn test_notification_text_with_phone() {
        let s = submission("Jane Doe", "jane@example.com", None, Some("+998 90 123 45 67"));
        let text = s.notification_text();

        assert!(text.contains("Phone: +998 90 123 45 67"));
        assert!(!text.contains("Message:"));
    }

    #[test]
    fn test_notification_text_trims_fields() {
        let s = submission("  Jane Doe  ", " jane@example.com ", Some("  Hello there  "), None);
        let text = s.notification_text();

        assert!(text.contains("Name: Jane Doe\n"));
        assert!(text.contains("Email: jane@example.com\n"));
        assert!(text.ends_with("Message: Hello there"));
    }
}
