//! Carousel ("generic") template
//!
//! Copyright (c) 2025 Messenger Templates Team
//! Licensed under the Apache-2.0 license

use super::sealed::{Assemble, Internal};
use super::{push_button, MessageTemplate, TemplateBase};
use crate::config::TemplateLimits;
use crate::error::{Result, TemplateError};
use crate::payload::{Attachment, AttachmentPayload, Bubble, Message, TemplatePayload};
use crate::validation::{ensure_capacity, ensure_max_chars, optional_text, require_text, require_url};

/// Builder for a horizontally scrolling list of bubbles
///
/// `add_url`, `add_image` and `add_button` act on the bubble added last.
///
/// ```
/// use messenger_templates::{Generic, MessageTemplate};
///
/// # fn main() -> messenger_templates::Result<()> {
/// let message = Generic::new()
///     .add_bubble("Classic T-Shirt", Some("Soft cotton"))?
///     .add_image("https://shop.example.com/shirt.png")?
///     .add_button("Buy", "BUY_SHIRT")?
///     .finalize()?;
/// assert!(message.template().is_some());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Generic {
    base: TemplateBase,
    bubbles: Vec<Bubble>,
    cursor: Option<usize>,
}

impl Generic {
    pub fn new() -> Self {
        Self::with_limits(TemplateLimits::default())
    }

    pub fn with_limits(limits: TemplateLimits) -> Self {
        Self {
            base: TemplateBase::new("Generic", limits),
            bubbles: Vec::new(),
            cursor: None,
        }
    }

    /// Append a bubble and make it the target of later calls
    pub fn add_bubble(&mut self, title: &str, subtitle: Option<&str>) -> Result<&mut Self> {
        self.base.ensure_open()?;
        let limits = *self.base.limits();
        ensure_capacity(self.bubbles.len(), limits.max_bubbles, "bubbles")?;
        require_text(title, "bubble.title")?;
        ensure_max_chars(title, limits.bubble_text_chars, "bubble.title")?;
        let subtitle = optional_text(subtitle);
        if let Some(subtitle) = subtitle {
            ensure_max_chars(subtitle, limits.bubble_text_chars, "bubble.subtitle")?;
        }

        self.bubbles
            .push(Bubble::new(title, subtitle.map(str::to_string)));
        self.cursor = Some(self.bubbles.len() - 1);
        Ok(self)
    }

    /// Link the current bubble to a page
    pub fn add_url(&mut self, url: &str) -> Result<&mut Self> {
        self.base.ensure_open()?;
        let url = require_url(url, "bubble.item_url")?;
        self.current_bubble()?.item_url = Some(url.to_string());
        Ok(self)
    }

    pub fn add_image(&mut self, url: &str) -> Result<&mut Self> {
        self.base.ensure_open()?;
        let url = require_url(url, "bubble.image_url")?;
        self.current_bubble()?.image_url = Some(url.to_string());
        Ok(self)
    }

    /// Add a button to the current bubble
    ///
    /// A URL `value` makes a `web_url` button; anything else a `postback`.
    pub fn add_button(&mut self, title: &str, value: &str) -> Result<&mut Self> {
        self.base.ensure_open()?;
        let max = self.base.limits().max_buttons;
        let bubble = self.current_bubble()?;
        push_button(&mut bubble.buttons, max, title, value)?;
        Ok(self)
    }

    pub fn bubbles(&self) -> &[Bubble] {
        &self.bubbles
    }

    /// Index of the bubble later calls will modify
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    fn current_bubble(&mut self) -> Result<&mut Bubble> {
        self.cursor
            .and_then(|index| self.bubbles.get_mut(index))
            .ok_or_else(|| TemplateError::CursorNotSet {
                cursor: "bubble".to_string(),
            })
    }
}

impl Default for Generic {
    fn default() -> Self {
        Self::new()
    }
}

impl MessageTemplate for Generic {
    fn base(&self) -> &TemplateBase {
        &self.base
    }
}

impl Assemble for Generic {
    fn base_mut(&mut self, _: Internal) -> &mut TemplateBase {
        &mut self.base
    }

    fn check_complete(&self) -> Result<()> {
        if self.bubbles.is_empty() {
            return Err(TemplateError::incomplete("at least one bubble is required"));
        }
        Ok(())
    }

    fn build_message(&self, _: Internal) -> Message {
        Message::attachment(Attachment {
            kind: "template".to_string(),
            payload: AttachmentPayload::Template(TemplatePayload::Generic {
                elements: self.bubbles.clone(),
            }),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::payload::ButtonAction;
    use serde_json::json;

    #[test]
    fn test_finalize_requires_bubble() {
        let err = Generic::new().finalize().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::IncompleteDocument);
    }

    #[test]
    fn test_cursor_follows_last_bubble() {
        let mut generic = Generic::new();
        assert_eq!(generic.cursor(), None);
        generic
            .add_bubble("First", None)
            .unwrap()
            .add_bubble("Second", Some("sub"))
            .unwrap()
            .add_url("https://example.com/second")
            .unwrap();

        assert_eq!(generic.cursor(), Some(1));
        assert_eq!(generic.bubbles()[0].item_url, None);
        assert_eq!(generic.bubbles()[1].item_url.as_deref(), Some("https://example.com/second"));
    }

    #[test]
    fn test_bubble_validation() {
        let mut generic = Generic::new();
        assert_eq!(
            generic.add_bubble("", None).unwrap_err().kind(),
            ErrorKind::MissingRequiredField
        );
        assert_eq!(
            generic.add_bubble(&"t".repeat(81), None).unwrap_err().kind(),
            ErrorKind::LengthExceeded
        );
        assert_eq!(
            generic
                .add_bubble("ok", Some("s".repeat(81).as_str()))
                .unwrap_err()
                .kind(),
            ErrorKind::LengthExceeded
        );
        assert!(generic.bubbles().is_empty());
        assert!(generic.add_bubble(&"t".repeat(80), Some("s".repeat(80).as_str())).is_ok());
    }

    #[test]
    fn test_blank_subtitle_is_omitted() {
        let mut generic = Generic::new();
        generic.add_bubble("Title", Some("")).unwrap();
        assert_eq!(generic.bubbles()[0].subtitle, None);
    }

    #[test]
    fn test_eleventh_bubble_rejected() {
        let mut generic = Generic::new();
        for i in 0..10 {
            generic.add_bubble(&format!("Bubble {}", i), None).unwrap();
        }
        let err = generic.add_bubble("One too many", None).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::CapacityExceeded);
        assert_eq!(generic.bubbles().len(), 10);
    }

    #[test]
    fn test_cursor_mutators_need_bubble() {
        let mut generic = Generic::new();
        assert_eq!(
            generic.add_url("https://x.com").unwrap_err().kind(),
            ErrorKind::CursorNotSet
        );
        assert_eq!(
            generic.add_image("https://x.com/a.png").unwrap_err().kind(),
            ErrorKind::CursorNotSet
        );
        assert_eq!(
            generic.add_button("Go", "GO").unwrap_err().kind(),
            ErrorKind::CursorNotSet
        );
    }

    #[test]
    fn test_url_checked_before_cursor() {
        let mut generic = Generic::new();
        assert_eq!(generic.add_url("nope").unwrap_err().kind(), ErrorKind::InvalidFormat);
        assert_eq!(generic.add_image("").unwrap_err().kind(), ErrorKind::MissingRequiredField);
    }

    #[test]
    fn test_buttons_capped_per_bubble() {
        let mut generic = Generic::new();
        generic.add_bubble("Card", None).unwrap();
        for i in 0..3 {
            generic.add_button(&format!("B{}", i), "PAYLOAD").unwrap();
        }
        assert_eq!(
            generic.add_button("B3", "PAYLOAD").unwrap_err().kind(),
            ErrorKind::CapacityExceeded
        );

        // a new bubble starts with a fresh button list
        generic.add_bubble("Next", None).unwrap();
        assert!(generic.add_button("B0", "PAYLOAD").is_ok());
    }

    #[test]
    fn test_button_requires_title_and_value() {
        let mut generic = Generic::new();
        generic.add_bubble("Card", None).unwrap();
        assert_eq!(
            generic.add_button("", "X").unwrap_err().kind(),
            ErrorKind::MissingRequiredField
        );
        assert_eq!(
            generic.add_button("X", "").unwrap_err().kind(),
            ErrorKind::MissingRequiredField
        );
    }

    #[test]
    fn test_button_type_derived_from_value() {
        let mut generic = Generic::new();
        generic
            .add_bubble("Card", None)
            .unwrap()
            .add_button("Open", "https://example.com/item")
            .unwrap()
            .add_button("Save", "SAVE_ITEM")
            .unwrap();

        let buttons = &generic.bubbles()[0].buttons;
        assert!(matches!(buttons[0].action, ButtonAction::WebUrl { .. }));
        assert!(matches!(buttons[1].action, ButtonAction::Postback { .. }));
    }

    #[test]
    fn test_full_carousel_document() {
        let message = Generic::new()
            .add_bubble("Shirt", Some("Cotton"))
            .unwrap()
            .add_url("https://shop.example.com/shirt")
            .unwrap()
            .add_image("https://shop.example.com/shirt.png")
            .unwrap()
            .add_button("Buy", "BUY_SHIRT")
            .unwrap()
            .add_bubble("Hat", None)
            .unwrap()
            .finalize()
            .unwrap();

        assert_eq!(
            message.to_value().unwrap(),
            json!({
                "attachment": {
                    "type": "template",
                    "payload": {
                        "template_type": "generic",
                        "elements": [
                            {
                                "title": "Shirt",
                                "subtitle": "Cotton",
                                "item_url": "https://shop.example.com/shirt",
                                "image_url": "https://shop.example.com/shirt.png",
                                "buttons": [
                                    { "type": "postback", "title": "Buy", "payload": "BUY_SHIRT" }
                                ]
                            },
                            { "title": "Hat" }
                        ]
                    }
                }
            })
        );
    }

    #[test]
    fn test_custom_limits() {
        let mut generic = Generic::with_limits(TemplateLimits::default().with_max_bubbles(1));
        generic.add_bubble("Only", None).unwrap();
        assert_eq!(
            generic.add_bubble("Second", None).unwrap_err().kind(),
            ErrorKind::CapacityExceeded
        );
    }
}
