//! Request payloads and their field validation rules.
//!
//! Validation is pure: each payload checks its own fields and reports every
//! broken rule at once, keyed by field name, so forms can render errors
//! inline. Anything that passes here is safe to hand to the query layer.

pub mod user;

pub use user::{
    Compliance, FieldError, ForgotPasswordPayload, ResetPasswordPayload, SigninPayload,
    SignupPayload, UpdateProfilePayload,
};
