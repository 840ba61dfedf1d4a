//! Validation for the smaller forms: sign-in/sign-up, password reset,
//! feedback and profile editing.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::User;

pub const MIN_PASSWORD_LEN: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Please enter your {0}")]
    Missing(&'static str),
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Please accept the terms of use & privacy policy")]
    TermsNotAccepted,
    #[error("Passwords do not match")]
    PasswordMismatch,
    #[error("Password must be at least 8 characters long")]
    PasswordTooShort,
    #[error("Rating must be between 1 and 5 stars")]
    InvalidRating,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthMode {
    #[default]
    Login,
    SignUp,
}

impl AuthMode {
    pub fn title(&self) -> &'static str {
        match self {
            AuthMode::Login => "Login",
            AuthMode::SignUp => "Sign Up",
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self {
            AuthMode::Login => "Login",
            AuthMode::SignUp => "Create Account",
        }
    }

    pub fn toggle(&self) -> Self {
        match self {
            AuthMode::Login => AuthMode::SignUp,
            AuthMode::SignUp => AuthMode::Login,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub accepted_terms: bool,
}

impl AuthForm {
    /// The name is only asked for when signing up.
    pub fn validate(&self, mode: AuthMode) -> Result<(), FormError> {
        if mode == AuthMode::SignUp && self.name.trim().is_empty() {
            return Err(FormError::Missing("name"));
        }
        validate_email(&self.email)?;
        if self.password.is_empty() {
            return Err(FormError::Missing("password"));
        }
        if !self.accepted_terms {
            return Err(FormError::TermsNotAccepted);
        }
        Ok(())
    }
}

fn validate_email(email: &str) -> Result<(), FormError> {
    let email = email.trim();
    if email.is_empty() {
        return Err(FormError::Missing("email"));
    }
    match email.split_once('@') {
        Some((user, domain)) if !user.is_empty() && !domain.is_empty() => Ok(()),
        _ => Err(FormError::InvalidEmail),
    }
}

/// Mismatch is reported before length.
pub fn validate_password_reset(new_password: &str, confirm: &str) -> Result<(), FormError> {
    if new_password != confirm {
        return Err(FormError::PasswordMismatch);
    }
    if new_password.chars().count() < MIN_PASSWORD_LEN {
        return Err(FormError::PasswordTooShort);
    }
    Ok(())
}

/// General feedback has no order and no rating; order feedback carries both.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FeedbackForm {
    pub feedback: String,
    /// 0 means "not rated".
    pub rating: u8,
    pub order_id: Option<String>,
}

/// Body of `POST /api/feedback`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackRequest {
    pub feedback: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
}

impl FeedbackForm {
    pub fn for_order(order_id: impl Into<String>) -> Self {
        Self {
            order_id: Some(order_id.into()),
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<(), FormError> {
        if self.feedback.trim().is_empty() {
            return Err(FormError::Missing("feedback"));
        }
        if self.rating > 5 {
            return Err(FormError::InvalidRating);
        }
        Ok(())
    }

    pub fn to_request(&self) -> Result<FeedbackRequest, FormError> {
        self.validate()?;
        Ok(FeedbackRequest {
            feedback: self.feedback.trim().to_string(),
            rating: (self.rating > 0).then_some(self.rating),
            order_id: self.order_id.clone(),
        })
    }
}

/// Body of `PUT /api/user/profile`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    /// Either a hosted URL or a `data:` URL waiting to be uploaded.
    pub profile_pic: String,
}

impl ProfileForm {
    pub fn from_user(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            email: user.email.clone(),
            phone: user.phone.clone().unwrap_or_default(),
            profile_pic: user.profile_pic.clone().unwrap_or_default(),
        }
    }

    pub fn validate(&self) -> Result<(), FormError> {
        if self.name.trim().is_empty() {
            return Err(FormError::Missing("name"));
        }
        validate_email(&self.email)
    }

    /// A freshly picked picture that still has to go through the upload
    /// endpoint before the profile update.
    pub fn has_pending_upload(&self) -> bool {
        self.profile_pic.starts_with("data:")
    }
}

/// Encode a picked file as a `data:` URL for the upload endpoint.
pub fn image_data_url(file_name: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", image_mime(file_name), STANDARD.encode(bytes))
}

fn image_mime(file_name: &str) -> &'static str {
    let ext = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        _ => "image/png",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn login_form() -> AuthForm {
        AuthForm {
            name: String::new(),
            email: "asha@college.edu".to_string(),
            password: "secret".to_string(),
            accepted_terms: true,
        }
    }

    #[test]
    fn auth_mode_labels_and_toggle() {
        assert_eq!(AuthMode::default().title(), "Login");
        assert_eq!(AuthMode::SignUp.submit_label(), "Create Account");
        assert_eq!(AuthMode::Login.toggle(), AuthMode::SignUp);
        assert_eq!(AuthMode::SignUp.toggle().toggle(), AuthMode::SignUp);
    }

    #[test]
    fn name_only_required_for_sign_up() {
        let form = login_form();
        assert!(form.validate(AuthMode::Login).is_ok());
        assert_eq!(form.validate(AuthMode::SignUp), Err(FormError::Missing("name")));
    }

    #[test]
    fn auth_form_checks_email_password_and_terms() {
        let mut form = login_form();
        form.email = "asha.college.edu".to_string();
        assert_eq!(form.validate(AuthMode::Login), Err(FormError::InvalidEmail));

        form = login_form();
        form.password.clear();
        assert_eq!(form.validate(AuthMode::Login), Err(FormError::Missing("password")));

        form = login_form();
        form.accepted_terms = false;
        assert_eq!(form.validate(AuthMode::Login), Err(FormError::TermsNotAccepted));
    }

    #[test]
    fn password_reset_reports_mismatch_first() {
        assert_eq!(
            validate_password_reset("short", "other"),
            Err(FormError::PasswordMismatch)
        );
        assert_eq!(
            validate_password_reset("short", "short").unwrap_err().to_string(),
            "Password must be at least 8 characters long"
        );
        assert!(validate_password_reset("longenough", "longenough").is_ok());
    }

    #[test]
    fn feedback_rating_is_optional_on_the_wire() {
        let general = FeedbackForm {
            feedback: " Great samosas ".to_string(),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(general.to_request().unwrap()).unwrap(),
            json!({ "feedback": "Great samosas" })
        );

        let mut per_order = FeedbackForm::for_order("o-1");
        per_order.feedback = "Cold".to_string();
        per_order.rating = 2;
        assert_eq!(
            serde_json::to_value(per_order.to_request().unwrap()).unwrap(),
            json!({ "feedback": "Cold", "rating": 2, "orderId": "o-1" })
        );
    }

    #[test]
    fn feedback_validation() {
        assert_eq!(
            FeedbackForm::default().validate(),
            Err(FormError::Missing("feedback"))
        );
        let form = FeedbackForm {
            feedback: "ok".to_string(),
            rating: 6,
            order_id: None,
        };
        assert_eq!(form.validate(), Err(FormError::InvalidRating));
    }

    #[test]
    fn profile_form_from_user() {
        let user = User {
            id: "u1".to_string(),
            name: "Asha".to_string(),
            email: "asha@college.edu".to_string(),
            phone: None,
            profile_pic: Some("https://cdn.example/a.png".to_string()),
            created_at: None,
        };
        let mut form = ProfileForm::from_user(&user);
        assert_eq!(form.phone, "");
        assert!(form.validate().is_ok());
        assert!(!form.has_pending_upload());

        form.profile_pic = image_data_url("me.JPG", b"abc");
        assert_eq!(form.profile_pic, "data:image/jpeg;base64,YWJj");
        assert!(form.has_pending_upload());

        form.name = " ".to_string();
        assert_eq!(form.validate(), Err(FormError::Missing("name")));
        assert_eq!(
            serde_json::to_value(ProfileForm::from_user(&user)).unwrap()["profilePic"],
            "https://cdn.example/a.png"
        );
    }

    #[test]
    fn unknown_extensions_default_to_png() {
        assert!(image_data_url("avatar", b"").starts_with("data:image/png;base64,"));
        assert!(image_data_url("a.webp", b"").starts_with("data:image/webp;"));
    }
}
