//! Shared field validators
//!
//! Pure checks used by every builder. They never mutate anything, so a
//! builder can run all of them before it touches its document.
//!
//! Copyright (c) 2025 Messenger Templates Team
//! Licensed under the Apache-2.0 license

use crate::error::{Result, TemplateError};
use crate::payload::{ButtonAction, Numeric};
use url::{Host, Url};

/// Require a non-blank string and hand it back
///
/// Blank means empty or whitespace-only; both count as missing.
pub fn require_text<'a>(value: &'a str, field: &str) -> Result<&'a str> {
    if value.trim().is_empty() {
        return Err(TemplateError::missing(field));
    }
    Ok(value)
}

/// Treat `None` and blank strings alike as "not provided"
pub fn optional_text<'a>(value: Option<&'a str>) -> Option<&'a str> {
    value.filter(|v| !v.trim().is_empty())
}

/// Reject strings longer than `max` chars
pub fn ensure_max_chars(value: &str, max: usize, field: &str) -> Result<()> {
    let actual = value.chars().count();
    if actual > max {
        return Err(TemplateError::LengthExceeded {
            field: field.to_string(),
            max,
            actual,
        });
    }
    Ok(())
}

/// Reject a push onto a list that already holds `max` entries
pub fn ensure_capacity(len: usize, max: usize, collection: &str) -> Result<()> {
    if len >= max {
        return Err(TemplateError::CapacityExceeded {
            collection: collection.to_string(),
            max,
        });
    }
    Ok(())
}

/// Whether `value` is an absolute URL with a usable host
///
/// The string has to be accepted as written: no whitespace or control
/// characters anywhere, a scheme, `//`, and a host that is an IP address,
/// `localhost` or a dotted domain with no empty labels.
pub fn is_url(value: &str) -> bool {
    // `Url::parse` strips leading and trailing C0 controls, so check first.
    if value.is_empty()
        || value
            .chars()
            .any(|c| c.is_whitespace() || c.is_control())
    {
        return false;
    }

    let Ok(parsed) = Url::parse(value) else {
        return false;
    };
    if parsed.cannot_be_a_base() {
        return false;
    }

    // `Url` normalises "http:example.com" into a host; insist on the slashes.
    let after_scheme = value.get(parsed.scheme().len()..).unwrap_or_default();
    if !after_scheme.starts_with("://") {
        return false;
    }

    match parsed.host() {
        Some(Host::Domain(domain)) => {
            if domain.eq_ignore_ascii_case("localhost") {
                return true;
            }
            let labels: Vec<&str> = domain.split('.').collect();
            labels.len() >= 2 && labels.iter().all(|label| !label.is_empty())
        }
        Some(Host::Ipv4(_)) | Some(Host::Ipv6(_)) => true,
        None => false,
    }
}

/// Require a non-blank, valid absolute URL
pub fn require_url<'a>(value: &'a str, field: &str) -> Result<&'a str> {
    require_text(value, field)?;
    if !is_url(value) {
        return Err(TemplateError::invalid_format(field, "absolute URL", value));
    }
    Ok(value)
}

/// Require a value that parses as a finite number
pub fn require_numeric(value: Numeric, field: &str) -> Result<Numeric> {
    let finite = match &value {
        Numeric::Text(text) if text.trim().is_empty() => return Err(TemplateError::missing(field)),
        Numeric::Text(text) => text.trim().parse::<f64>().is_ok_and(f64::is_finite),
        Numeric::Float(n) => n.is_finite(),
        Numeric::Int(_) | Numeric::UInt(_) => true,
    };
    if !finite {
        return Err(TemplateError::invalid_format(field, "finite number", value.to_string()));
    }
    Ok(value)
}

/// Decide how a button carries its value
///
/// A value that is a URL opens a web view; anything else is posted back to
/// the application unchanged.
pub fn classify_action(value: &str) -> ButtonAction {
    if is_url(value) {
        ButtonAction::WebUrl { url: value.to_string() }
    } else {
        ButtonAction::Postback { payload: value.to_string() }
    }
}
