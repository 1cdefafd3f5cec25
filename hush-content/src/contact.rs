use serde::{Deserialize, Serialize};
use thiserror::Error;

const MAX_NAME: usize = 120;
const MAX_EMAIL: usize = 254;
const MAX_SHORT_FIELD: usize = 200;
const MAX_REQUIREMENTS: usize = 4000;

/// Custom-requirements request posted by the BOM page contact form.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub organization: String,
    /// Bed count or rollout scope, free text.
    #[serde(default)]
    pub scope: String,
    #[serde(default)]
    pub requirements: String,
}

impl ContactRequest {
    /// Copy with surrounding whitespace stripped from every field.
    pub fn trimmed(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            organization: self.organization.trim().to_string(),
            scope: self.scope.trim().to_string(),
            requirements: self.requirements.trim().to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactReceipt {
    pub id: i64,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("{0} is required")]
    Missing(&'static str),
    #[error("{field} must be at most {max} characters")]
    TooLong { field: &'static str, max: usize },
    #[error("email address '{0}' is not valid")]
    InvalidEmail(String),
}

pub fn validate_contact(request: &ContactRequest) -> Result<(), ContactError> {
    let name = request.name.trim();
    if name.is_empty() {
        return Err(ContactError::Missing("name"));
    }
    check_len("name", name, MAX_NAME)?;

    let email = request.email.trim();
    if email.is_empty() {
        return Err(ContactError::Missing("email"));
    }
    check_len("email", email, MAX_EMAIL)?;
    if !is_plausible_email(email) {
        return Err(ContactError::InvalidEmail(email.to_string()));
    }

    check_len("organization", request.organization.trim(), MAX_SHORT_FIELD)?;
    check_len("scope", request.scope.trim(), MAX_SHORT_FIELD)?;
    check_len("requirements", request.requirements.trim(), MAX_REQUIREMENTS)?;
    Ok(())
}

fn check_len(field: &'static str, value: &str, max: usize) -> Result<(), ContactError> {
    if value.chars().count() > max {
        return Err(ContactError::TooLong { field, max });
    }
    Ok(())
}

fn is_plausible_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && !email.chars().any(char::is_whitespace)
        && domain
            .split_once('.')
            .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty() && !tld.ends_with('.'))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> ContactRequest {
        ContactRequest {
            name: "Jane Doe".into(),
            email: "jane@hospital.org".into(),
            organization: "City NICU Hospital".into(),
            scope: "6 beds pilot".into(),
            requirements: "IEC 60601 pre-compliance".into(),
        }
    }

    #[test]
    fn accepts_complete_request() {
        assert!(validate_contact(&request()).is_ok());
    }

    #[test]
    fn optional_fields_may_be_empty() {
        let req = ContactRequest {
            organization: String::new(),
            scope: String::new(),
            requirements: String::new(),
            ..request()
        };
        assert!(validate_contact(&req).is_ok());
    }

    #[test]
    fn rejects_blank_name() {
        let req = ContactRequest { name: "   ".into(), ..request() };
        assert_eq!(validate_contact(&req), Err(ContactError::Missing("name")));
    }

    #[test]
    fn rejects_missing_email() {
        let req = ContactRequest { email: String::new(), ..request() };
        assert_eq!(validate_contact(&req), Err(ContactError::Missing("email")));
    }

    #[test]
    fn rejects_malformed_email() {
        for bad in ["jane", "jane@", "@hospital.org", "jane@hospital", "a@b@c.org", "ja ne@x.org", "jane@.org"] {
            let req = ContactRequest { email: bad.into(), ..request() };
            assert!(
                matches!(validate_contact(&req), Err(ContactError::InvalidEmail(_))),
                "{bad}"
            );
        }
    }

    #[test]
    fn rejects_oversized_requirements() {
        let req = ContactRequest {
            requirements: "x".repeat(MAX_REQUIREMENTS + 1),
            ..request()
        };
        assert_eq!(
            validate_contact(&req),
            Err(ContactError::TooLong { field: "requirements", max: MAX_REQUIREMENTS })
        );
    }

    #[test]
    fn missing_optional_fields_deserialize_empty() {
        let req: ContactRequest =
            serde_json::from_str(r#"{"name":"Ari","email":"ari@hush.care"}"#).expect("json");
        assert_eq!(req.scope, "");
        assert!(validate_contact(&req).is_ok());
    }

    #[test]
    fn absent_name_fails_validation_not_deserialization() {
        let req: ContactRequest = serde_json::from_str(r#"{"email":"jane@hospital.org"}"#).expect("json");
        assert_eq!(req.name, "");
        assert_eq!(validate_contact(&req), Err(ContactError::Missing("name")));
    }

    #[test]
    fn trimmed_strips_whitespace() {
        let req = ContactRequest { name: "  Jane  ".into(), ..request() }.trimmed();
        assert_eq!(req.name, "Jane");
    }
}
