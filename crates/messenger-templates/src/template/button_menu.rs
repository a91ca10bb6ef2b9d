//! Button template: a line of text with up to three actions

use super::sealed::{Assemble, Internal};
use super::{push_button, MessageTemplate, TemplateBase};
use crate::config::TemplateLimits;
use crate::error::{Result, TemplateError};
use crate::payload::{Attachment, AttachmentPayload, Button, Message, TemplatePayload};
use crate::validation::{ensure_max_chars, require_text};

#[derive(Debug, Clone)]
pub struct ButtonMenu {
    base: TemplateBase,
    text: String,
    buttons: Vec<Button>,
}

impl ButtonMenu {
    pub fn new(text: &str) -> Result<Self> {
        Self::with_limits(text, TemplateLimits::default())
    }

    pub fn with_limits(text: &str, limits: TemplateLimits) -> Result<Self> {
        let text = require_text(text, "button_menu.text")?;
        ensure_max_chars(text, limits.button_text_chars, "button_menu.text")?;
        Ok(Self {
            base: TemplateBase::new("Button", limits),
            text: text.to_string(),
            buttons: Vec::new(),
        })
    }

    /// Append an action; URL values open a page, others post back
    pub fn add_button(&mut self, title: &str, value: &str) -> Result<&mut Self> {
        self.base.ensure_open()?;
        let max = self.base.limits().max_buttons;
        push_button(&mut self.buttons, max, title, value)?;
        Ok(self)
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn buttons(&self) -> &[Button] {
        &self.buttons
    }
}

impl MessageTemplate for ButtonMenu {
    fn base(&self) -> &TemplateBase {
        &self.base
    }
}

impl Assemble for ButtonMenu {
    fn base_mut(&mut self, _: Internal) -> &mut TemplateBase {
        &mut self.base
    }

    fn check_complete(&self) -> Result<()> {
        if self.buttons.is_empty() {
            return Err(TemplateError::incomplete("at least one button is required"));
        }
        Ok(())
    }

    fn build_message(&self, _: Internal) -> Message {
        Message::attachment(Attachment {
            kind: "template".to_string(),
            payload: AttachmentPayload::Template(TemplatePayload::Button {
                text: self.text.clone(),
                buttons: self.buttons.clone(),
            }),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use serde_json::json;

    #[test]
    fn test_text_validation() {
        assert_eq!(ButtonMenu::new("").unwrap_err().kind(), ErrorKind::MissingRequiredField);
        assert_eq!(
            ButtonMenu::new(&"x".repeat(81)).unwrap_err().kind(),
            ErrorKind::LengthExceeded
        );
        assert!(ButtonMenu::new(&"x".repeat(80)).is_ok());
    }

    #[test]
    fn test_finalize_requires_button() {
        let mut menu = ButtonMenu::new("Choose").unwrap();
        assert_eq!(menu.finalize().unwrap_err().kind(), ErrorKind::IncompleteDocument);

        // a failed finalize does not lock the builder
        menu.add_button("Yes", "YES_PAYLOAD").unwrap();
        let message = menu.finalize().unwrap();
        assert_eq!(
            message.to_value().unwrap(),
            json!({
                "attachment": {
                    "type": "template",
                    "payload": {
                        "template_type": "button",
                        "text": "Choose",
                        "buttons": [
                            { "type": "postback", "title": "Yes", "payload": "YES_PAYLOAD" }
                        ]
                    }
                }
            })
        );
    }

    #[test]
    fn test_fourth_button_rejected() {
        let mut menu = ButtonMenu::new("Pick").unwrap();
        menu.add_button("A", "A")
            .unwrap()
            .add_button("B", "https://b.example.com")
            .unwrap()
            .add_button("C", "C")
            .unwrap();
        assert_eq!(
            menu.add_button("D", "D").unwrap_err().kind(),
            ErrorKind::CapacityExceeded
        );
        assert_eq!(menu.buttons().len(), 3);
    }

    #[test]
    fn test_web_url_button() {
        let mut menu = ButtonMenu::new("Visit").unwrap();
        menu.add_button("Site", "https://example.com").unwrap();
        let value = menu.finalize().unwrap().to_value().unwrap();
        assert_eq!(
            value["attachment"]["payload"]["buttons"][0],
            json!({ "type": "web_url", "title": "Site", "url": "https://example.com" })
        );
    }
}
