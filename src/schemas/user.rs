use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::user::FieldVisibility;

/// E.164: a leading `+`, a non-zero country code, at most 15 digits.
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+[1-9]\d{1,14}$").unwrap());

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

const NAME_MAX: usize = 50;
const PASSWORD_MIN: usize = 8;
const PASSWORD_MAX: usize = 100;

/// A single broken validation rule, keyed by the payload field it belongs
/// to so the client can render it inline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

impl FieldError {
    fn new(field: &'static str, message: &'static str) -> Self {
        Self { field, message }
    }
}

fn require(
    errors: &mut Vec<FieldError>,
    field: &'static str,
    value: &str,
    message: &'static str,
) {
    if value.is_empty() {
        errors.push(FieldError::new(field, message));
    }
}

fn check_name(
    errors: &mut Vec<FieldError>,
    field: &'static str,
    value: &str,
    required_message: &'static str,
    limit_message: &'static str,
) {
    if value.is_empty() {
        errors.push(FieldError::new(field, required_message));
    } else if value.chars().count() > NAME_MAX {
        errors.push(FieldError::new(field, limit_message));
    }
}

fn check_email(errors: &mut Vec<FieldError>, value: &str) {
    if value.is_empty() {
        errors.push(FieldError::new("email", "Email is required"));
    } else if !EMAIL_RE.is_match(value) {
        errors.push(FieldError::new("email", "Invalid Email format"));
    }
}

fn check_password(errors: &mut Vec<FieldError>, field: &'static str, value: &str) {
    if value.chars().count() < PASSWORD_MIN {
        errors.push(FieldError::new(
            field,
            "Password require at least 8 characters",
        ));
    } else if value.chars().count() > PASSWORD_MAX {
        errors.push(FieldError::new(
            field,
            "Password max length limited to 100 characters",
        ));
    }
}

fn ok_or(errors: Vec<FieldError>) -> Result<(), Vec<FieldError>> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SigninPayload {
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub captcha: String,
}

impl SigninPayload {
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();
        check_email(&mut errors, &self.email);
        check_password(&mut errors, "password", &self.password);
        ok_or(errors)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupPayload {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub captcha: String,
}

impl SignupPayload {
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();
        check_name(
            &mut errors,
            "firstName",
            &self.first_name,
            "First name is required",
            "First name limited to 50 characters",
        );
        check_name(
            &mut errors,
            "lastName",
            &self.last_name,
            "Last name is required",
            "Last name limited to 50 characters",
        );
        check_email(&mut errors, &self.email);
        check_password(&mut errors, "password", &self.password);
        ok_or(errors)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForgotPasswordPayload {
    pub email: String,
    #[serde(default)]
    pub captcha: String,
}

impl ForgotPasswordPayload {
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();
        check_email(&mut errors, &self.email);
        ok_or(errors)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetPasswordPayload {
    pub password: String,
    pub confirm_password: String,
}

impl ResetPasswordPayload {
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();
        check_password(&mut errors, "password", &self.password);
        check_password(&mut errors, "confirmPassword", &self.confirm_password);
        if errors.is_empty() && self.password != self.confirm_password {
            errors.push(FieldError::new(
                "confirmPassword",
                "The password did not match",
            ));
        }
        ok_or(errors)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Compliance {
    pub code_of_conduct: bool,
}

/// The full account-form payload. Mirrors what the form submits: required
/// profile fields, free-text extras, socials, and the visibility toggles.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfilePayload {
    pub id: Uuid,
    pub avatar: Option<String>,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub display_name: String,
    pub email: Option<String>,
    pub organisation: String,
    pub industry_category_id: Option<Uuid>,
    pub job_category_id: Option<Uuid>,
    pub job_title: String,
    pub t_shirt_size: String,
    pub gender: String,
    pub date_of_birth: String,
    pub phone: String,
    #[serde(default)]
    pub bio: String,
    pub interest: Option<String>,
    pub looking_for: Option<String>,
    pub offering_searching: Option<String>,
    pub country: String,
    pub state: String,
    pub city: String,
    pub address: Option<String>,
    pub website: Option<String>,
    pub github: Option<String>,
    pub facebook: Option<String>,
    pub linkedin: Option<String>,
    pub twitter: Option<String>,
    pub instagram: Option<String>,
    pub participant_type_id: Option<Uuid>,
    #[serde(default)]
    pub compliance: Compliance,
    #[serde(default)]
    pub public_fields: FieldVisibility,
}

impl UpdateProfilePayload {
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();

        check_name(
            &mut errors,
            "firstName",
            &self.first_name,
            "First name is required",
            "First name limited to 50 characters",
        );
        check_name(
            &mut errors,
            "lastName",
            &self.last_name,
            "Last name is required",
            "Last name limited to 50 characters",
        );

        // Email is optional on update, but must be well formed when sent.
        if let Some(email) = self.email.as_deref() {
            check_email(&mut errors, email);
        }

        require(
            &mut errors,
            "organisation",
            &self.organisation,
            "Company is required",
        );
        require(&mut errors, "jobTitle", &self.job_title, "Job title is required");
        if self.industry_category_id.is_none() {
            errors.push(FieldError::new(
                "industryCategoryId",
                "Industry categories is required",
            ));
        }
        if self.job_category_id.is_none() {
            errors.push(FieldError::new("jobCategoryId", "Job category is required"));
        }
        require(
            &mut errors,
            "tShirtSize",
            &self.t_shirt_size,
            "TShirt Size is required",
        );
        require(&mut errors, "gender", &self.gender, "Genders is required");
        require(
            &mut errors,
            "dateOfBirth",
            &self.date_of_birth,
            "Date of birth is required",
        );

        if !PHONE_RE.is_match(&self.phone) {
            errors.push(FieldError::new(
                "phone",
                "Phone number must include country code (e.g +62)",
            ));
        }

        require(&mut errors, "country", &self.country, "Country is required");
        require(&mut errors, "state", &self.state, "State is required");
        require(&mut errors, "city", &self.city, "City is required");

        if !self.compliance.code_of_conduct {
            errors.push(FieldError::new(
                "compliance",
                "You must comply to the Code of Conduct",
            ));
        }

        ok_or(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_update() -> UpdateProfilePayload {
        UpdateProfilePayload {
            id: Uuid::new_v4(),
            avatar: None,
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            display_name: "Ada".to_string(),
            email: Some("ada@example.com".to_string()),
            organisation: "Analytical Engines".to_string(),
            industry_category_id: Some(Uuid::new_v4()),
            job_category_id: Some(Uuid::new_v4()),
            job_title: "Engineer".to_string(),
            t_shirt_size: "M".to_string(),
            gender: "female".to_string(),
            date_of_birth: "1990-12-10".to_string(),
            phone: "+6281234567890".to_string(),
            bio: String::new(),
            interest: None,
            looking_for: None,
            offering_searching: None,
            country: "ID".to_string(),
            state: "JK".to_string(),
            city: "Jakarta".to_string(),
            address: None,
            website: None,
            github: None,
            facebook: None,
            linkedin: None,
            twitter: None,
            instagram: None,
            participant_type_id: None,
            compliance: Compliance {
                code_of_conduct: true,
            },
            public_fields: FieldVisibility::default(),
        }
    }

    #[test]
    fn a_fully_populated_payload_passes() {
        assert!(valid_update().validate().is_ok());
    }

    #[test]
    fn each_broken_rule_is_reported_by_field() {
        let mut payload = valid_update();
        payload.first_name = String::new();
        payload.phone = "081234".to_string();
        payload.job_category_id = None;
        payload.compliance.code_of_conduct = false;

        let errors = payload.validate().unwrap_err();

        let fields: Vec<&str> = errors.iter().map(|e| e.field).collect();
        assert_eq!(
            fields,
            ["firstName", "jobCategoryId", "phone", "compliance"]
        );
    }

    #[test]
    fn names_are_limited_to_fifty_characters() {
        let mut payload = valid_update();
        payload.last_name = "x".repeat(51);

        let errors = payload.validate().unwrap_err();

        assert_eq!(errors[0].field, "lastName");
        assert_eq!(errors[0].message, "Last name limited to 50 characters");
    }

    #[test]
    fn omitted_email_is_fine_but_a_malformed_one_is_not() {
        let mut payload = valid_update();
        payload.email = None;
        assert!(payload.validate().is_ok());

        payload.email = Some("not-an-email".to_string());
        let errors = payload.validate().unwrap_err();
        assert_eq!(errors[0].message, "Invalid Email format");
    }

    #[test]
    fn phone_must_carry_a_country_code() {
        for bad in ["081234567890", "+0812345", "62812345", "+62 812"] {
            let mut payload = valid_update();
            payload.phone = bad.to_string();
            let errors = payload.validate().unwrap_err();
            assert_eq!(errors[0].field, "phone", "expected {bad:?} to be rejected");
        }
    }

    #[test]
    fn signin_rejects_a_short_password() {
        let payload = SigninPayload {
            email: "ada@example.com".to_string(),
            password: "short".to_string(),
            captcha: String::new(),
        };

        let errors = payload.validate().unwrap_err();

        assert_eq!(errors[0].field, "password");
        assert_eq!(errors[0].message, "Password require at least 8 characters");
    }

    #[test]
    fn signup_checks_both_names_and_the_email() {
        let payload = SignupPayload {
            first_name: String::new(),
            last_name: String::new(),
            email: "nope".to_string(),
            password: "long enough password".to_string(),
            captcha: String::new(),
        };

        let errors = payload.validate().unwrap_err();

        let fields: Vec<&str> = errors.iter().map(|e| e.field).collect();
        assert_eq!(fields, ["firstName", "lastName", "email"]);
    }

    #[test]
    fn reset_password_requires_matching_fields() {
        let payload = ResetPasswordPayload {
            password: "correct horse battery".to_string(),
            confirm_password: "correct horse staple".to_string(),
        };

        let errors = payload.validate().unwrap_err();

        assert_eq!(errors[0].field, "confirmPassword");
        assert_eq!(errors[0].message, "The password did not match");
    }
}
