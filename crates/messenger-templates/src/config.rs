//! Platform limits shared by every builder
//!
//! Copyright (c) 2025 Messenger Templates Team
//! Licensed under the Apache-2.0 license

use serde::{Deserialize, Serialize};

/// Caps enforced while a template is being built
///
/// The defaults are the send-API limits. A host can load a different set
/// (for example from its own config file) when the platform changes them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateLimits {
    /// Maximum quick replies attached to one message
    pub max_quick_replies: usize,
    /// Quick reply titles longer than this are truncated
    pub quick_reply_title_chars: usize,
    /// Maximum quick reply payload length
    pub quick_reply_payload_chars: usize,
    /// Maximum bubbles in a carousel
    pub max_bubbles: usize,
    /// Maximum bubble title and subtitle length
    pub bubble_text_chars: usize,
    /// Maximum buttons on a bubble or a button menu
    pub max_buttons: usize,
    /// Maximum button menu text length
    pub button_text_chars: usize,
    /// Maximum line items on a receipt
    pub max_receipt_items: usize,
}

impl Default for TemplateLimits {
    fn default() -> Self {
        Self {
            max_quick_replies: 10,
            quick_reply_title_chars: 20,
            quick_reply_payload_chars: 1000,
            max_bubbles: 10,
            bubble_text_chars: 80,
            max_buttons: 3,
            button_text_chars: 80,
            max_receipt_items: 10,
        }
    }
}

impl TemplateLimits {
    /// Limits currently published by the platform
    pub fn platform() -> Self {
        Self::default()
    }

    pub fn with_max_quick_replies(mut self, max: usize) -> Self {
        self.max_quick_replies = max;
        self
    }

    pub fn with_quick_reply_title_chars(mut self, chars: usize) -> Self {
        self.quick_reply_title_chars = chars;
        self
    }

    pub fn with_quick_reply_payload_chars(mut self, chars: usize) -> Self {
        self.quick_reply_payload_chars = chars;
        self
    }

    pub fn with_max_bubbles(mut self, max: usize) -> Self {
        self.max_bubbles = max;
        self
    }

    pub fn with_bubble_text_chars(mut self, chars: usize) -> Self {
        self.bubble_text_chars = chars;
        self
    }

    pub fn with_max_buttons(mut self, max: usize) -> Self {
        self.max_buttons = max;
        self
    }

    pub fn with_button_text_chars(mut self, chars: usize) -> Self {
        self.button_text_chars = chars;
        self
    }

    pub fn with_max_receipt_items(mut self, max: usize) -> Self {
        self.max_receipt_items = max;
        self
    }
}
