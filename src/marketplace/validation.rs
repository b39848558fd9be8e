//! Form rules. Each check returns the first rule the input breaks.

use crate::domain::{Credentials, NewProduct, NewUser, ValidationError};

const MIN_PHONE_LEN: usize = 10;
const MIN_PASSWORD_LEN: usize = 6;

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

pub fn validate_registration(form: &NewUser) -> Result<(), ValidationError> {
    // ---
    if is_blank(&form.name) {
        return Err(ValidationError::MissingName);
    }
    if is_blank(&form.email) || !form.email.contains('@') {
        return Err(ValidationError::InvalidEmail);
    }
    if is_blank(&form.phone) || form.phone.chars().count() < MIN_PHONE_LEN {
        return Err(ValidationError::InvalidPhone);
    }
    if is_blank(&form.password) || form.password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ValidationError::PasswordTooShort);
    }
    if form.password != form.confirm_password {
        return Err(ValidationError::PasswordMismatch);
    }
    Ok(())
}

pub fn validate_credentials(credentials: &Credentials) -> Result<(), ValidationError> {
    // ---
    if is_blank(&credentials.email) || is_blank(&credentials.password) {
        return Err(ValidationError::MissingCredentials);
    }
    Ok(())
}

/// Checks the posting form and returns the parsed price.
pub fn validate_product(form: &NewProduct) -> Result<f64, ValidationError> {
    // ---
    if is_blank(&form.title) {
        return Err(ValidationError::MissingTitle);
    }
    if is_blank(&form.price) {
        return Err(ValidationError::MissingPrice);
    }
    let price = parse_price(&form.price)?;
    if is_blank(&form.description) {
        return Err(ValidationError::MissingDescription);
    }
    Ok(price)
}

fn parse_price(text: &str) -> Result<f64, ValidationError> {
    // ---
    match text.trim().parse::<f64>() {
        Ok(price) if price.is_finite() && price > 0.0 => Ok(price),
        _ => Err(ValidationError::InvalidPrice),
    }
}
