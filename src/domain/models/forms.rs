use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const VENDOR_NAME_MIN_LEN: usize = 2;
pub const VENDOR_NAME_MAX_LEN: usize = 255;

/// Response body shared by the login and vendor endpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse {
    pub is_success: bool,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ApiResponse {
    /// Message, ignoring blank strings
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref().map(str::trim).filter(|m| !m.is_empty())
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref().map(str::trim).filter(|u| !u.is_empty())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyEncoding {
    /// `application/x-www-form-urlencoded`
    UrlEncoded,
    /// `multipart/form-data`, boundary chosen by the browser
    Multipart,
}

/// Fields of a form POST, in insertion order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormPayload {
    pub encoding: BodyEncoding,
    pub fields: Vec<(String, String)>,
}

impl FormPayload {
    pub fn url_encoded() -> Self {
        Self {
            encoding: BodyEncoding::UrlEncoded,
            fields: Vec::new(),
        }
    }

    pub fn multipart() -> Self {
        Self {
            encoding: BodyEncoding::Multipart,
            fields: Vec::new(),
        }
    }

    pub fn field(mut self, name: &str, value: impl Into<String>) -> Self {
        self.fields.push((name.to_string(), value.into()));
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value.as_str())
    }

    /// `a=1&b=two%20words`
    pub fn to_query_string(&self) -> String {
        self.fields
            .iter()
            .map(|(name, value)| {
                format!(
                    "{}={}",
                    urlencoding::encode(name),
                    urlencoding::encode(value)
                )
            })
            .collect::<Vec<_>>()
            .join("&")
    }
}

/// Inline validation state of a single input
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FieldState {
    #[default]
    Pristine,
    Valid,
    Invalid(String),
}

impl FieldState {
    pub fn from_result<T, E: std::fmt::Display>(result: &Result<T, E>) -> Self {
        match result {
            Ok(_) => FieldState::Valid,
            Err(e) => FieldState::Invalid(e.to_string()),
        }
    }

    /// CSS modifier for the input (`error` / `success`)
    pub fn css_class(&self) -> &'static str {
        match self {
            FieldState::Pristine => "",
            FieldState::Valid => "success",
            FieldState::Invalid(_) => "error",
        }
    }

    pub fn message(&self) -> &str {
        match self {
            FieldState::Invalid(message) => message,
            _ => "",
        }
    }

    pub fn is_invalid(&self) -> bool {
        matches!(self, FieldState::Invalid(_))
    }
}

// ============================================================
// Vendor creation
// ============================================================

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VendorNameError {
    #[error("Vendor name is required")]
    Required,

    #[error("Vendor name must be at least 2 characters long")]
    TooShort,

    #[error("Vendor name must be less than 255 characters")]
    TooLong,
}

/// Trims and checks the length bounds (inclusive, counted in characters)
pub fn validate_vendor_name(raw: &str) -> Result<String, VendorNameError> {
    let name = raw.trim();
    let len = name.chars().count();

    if len == 0 {
        return Err(VendorNameError::Required);
    }
    if len < VENDOR_NAME_MIN_LEN {
        return Err(VendorNameError::TooShort);
    }
    if len > VENDOR_NAME_MAX_LEN {
        return Err(VendorNameError::TooLong);
    }
    Ok(name.to_string())
}

pub fn vendor_payload(raw_name: &str) -> Result<FormPayload, VendorNameError> {
    let name = validate_vendor_name(raw_name)?;
    Ok(FormPayload::multipart().field("vendor_name", name))
}

// ============================================================
// Login
// ============================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LoginFieldError {
    #[error("Username is required")]
    UsernameRequired,

    #[error("Password is required")]
    PasswordRequired,
}

impl LoginFieldError {
    /// Id of the input the message belongs to
    pub fn field_id(&self) -> &'static str {
        match self {
            LoginFieldError::UsernameRequired => "username",
            LoginFieldError::PasswordRequired => "password",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginCredentials {
    pub username: String,
    pub password: String,
    pub remember_me: bool,
}

impl LoginCredentials {
    pub fn validate_username(&self) -> Result<(), LoginFieldError> {
        if self.username.trim().is_empty() {
            return Err(LoginFieldError::UsernameRequired);
        }
        Ok(())
    }

    /// Passwords are not trimmed, but an empty one is rejected
    pub fn validate_password(&self) -> Result<(), LoginFieldError> {
        if self.password.is_empty() {
            return Err(LoginFieldError::PasswordRequired);
        }
        Ok(())
    }

    /// Every failing field, in form order
    pub fn validate(&self) -> Vec<LoginFieldError> {
        [self.validate_username(), self.validate_password()]
            .into_iter()
            .filter_map(Result::err)
            .collect()
    }

    pub fn to_payload(&self) -> Result<FormPayload, Vec<LoginFieldError>> {
        let errors = self.validate();
        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(FormPayload::url_encoded()
            .field("username", self.username.trim())
            .field("password", self.password.as_str())
            .field("rememberMe", self.remember_me.to_string()))
    }
}
