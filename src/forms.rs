//! Reusable form-field validators.
//!
//! Each factory returns a closure that yields an error message for an
//! invalid value, or `None` when the value passes. Values are trimmed
//! before checking.
//!
//! ```
//! use site_server::forms;
//!
//! let name = forms::required("Name");
//! assert_eq!(name("  "), Some("Name is required".to_string()));
//! assert_eq!(name("John"), None);
//! ```

/// Field must be non-empty after trimming.
pub fn required(field_name: &str) -> impl Fn(&str) -> Option<String> {
    let field_name = field_name.to_string();
    move |value| {
        if value.trim().is_empty() {
            Some(format!("{field_name} is required"))
        } else {
            None
        }
    }
}

/// Field must have at least `min` characters after trimming.
pub fn min_length(min: usize, field_name: &str) -> impl Fn(&str) -> Option<String> {
    let field_name = field_name.to_string();
    move |value| {
        if value.trim().chars().count() < min {
            Some(format!("{field_name} must be at least {min} characters"))
        } else {
            None
        }
    }
}

/// Field must have at most `max` characters after trimming.
pub fn max_length(max: usize, field_name: &str) -> impl Fn(&str) -> Option<String> {
    let field_name = field_name.to_string();
    move |value| {
        if value.trim().chars().count() > max {
            Some(format!("{field_name} must be at most {max} characters"))
        } else {
            None
        }
    }
}

/// Field must look like an email address: `local@domain.tld`, no whitespace.
pub fn email() -> impl Fn(&str) -> Option<String> {
    |value: &str| {
        if is_email_shaped(value.trim()) {
            None
        } else {
            Some("Please enter a valid email address".to_string())
        }
    }
}

/// A select element must have a non-empty option chosen.
pub fn selected(field_name: &str) -> impl Fn(&str) -> Option<String> {
    let field_name = field_name.to_string();
    move |value| {
        if value.trim().is_empty() {
            Some(format!("Please select a {field_name}"))
        } else {
            None
        }
    }
}

/// Password must have at least `min` characters.
pub fn password(min: usize) -> impl Fn(&str) -> Option<String> {
    move |value| {
        if value.trim().chars().count() < min {
            Some(format!("Password must be at least {min} characters"))
        } else {
            None
        }
    }
}

/// Checkbox (e.g. terms agreement) must be checked.
pub fn checkbox(field_name: &str) -> impl Fn(bool) -> Option<String> {
    let field_name = field_name.to_string();
    move |checked| {
        if checked {
            None
        } else {
            Some(format!("You must agree to the {field_name}"))
        }
    }
}

fn is_email_shaped(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}
