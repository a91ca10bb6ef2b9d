//! Fluent template builders
//!
//! Every builder owns a [`TemplateBase`] that carries the quick replies, the
//! active [`TemplateLimits`] and the lifecycle state. The shared operations
//! (`add_quick_reply`, `finalize`) come from the [`MessageTemplate`] trait;
//! variant-specific mutators are inherent methods.
//!
//! Mutators return `Result<&mut Self>` so calls chain with `?`. All checks
//! run before any write, so a failed call leaves the builder unchanged.
//!
//! Copyright (c) 2025 Messenger Templates Team
//! Licensed under the Apache-2.0 license

mod button_menu;
mod generic;
mod receipt;
mod simple;

pub use button_menu::ButtonMenu;
pub use generic::Generic;
pub use receipt::Receipt;
pub use simple::{Attachment, MediaKind, Text};

use crate::config::TemplateLimits;
use crate::error::{Result, TemplateError};
use crate::payload::{Button, Message, QuickReply, QuickReplyContent};
use crate::text::truncate_words;
use crate::validation::{classify_action, ensure_capacity, ensure_max_chars, require_text};
use tracing::{debug, trace};

/// Lifecycle of a builder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuilderState {
    /// Accepting mutations
    Open,
    /// Document handed out; every further call fails
    Finalized,
}

/// State shared by every template variant
#[derive(Debug, Clone)]
pub struct TemplateBase {
    name: &'static str,
    limits: TemplateLimits,
    quick_replies: Vec<QuickReply>,
    state: BuilderState,
}

impl TemplateBase {
    pub(crate) fn new(name: &'static str, limits: TemplateLimits) -> Self {
        Self {
            name,
            limits,
            quick_replies: Vec::new(),
            state: BuilderState::Open,
        }
    }

    /// Variant name used in errors and logs
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn limits(&self) -> &TemplateLimits {
        &self.limits
    }

    pub fn quick_replies(&self) -> &[QuickReply] {
        &self.quick_replies
    }

    pub fn state(&self) -> BuilderState {
        self.state
    }

    pub(crate) fn ensure_open(&self) -> Result<()> {
        match self.state {
            BuilderState::Open => Ok(()),
            BuilderState::Finalized => Err(TemplateError::AlreadyFinalized {
                template: self.name.to_string(),
            }),
        }
    }

    pub(crate) fn push_quick_reply(&mut self, text: &str, payload: &str) -> Result<()> {
        self.ensure_open()?;
        require_text(text, "quick_reply.title")?;
        require_text(payload, "quick_reply.payload")?;
        ensure_max_chars(payload, self.limits.quick_reply_payload_chars, "quick_reply.payload")?;
        ensure_capacity(
            self.quick_replies.len(),
            self.limits.max_quick_replies,
            "quick replies",
        )?;

        let max_title = self.limits.quick_reply_title_chars;
        let title = if text.chars().count() > max_title {
            let truncated = truncate_words(text, max_title);
            if truncated.is_empty() {
                return Err(TemplateError::LengthExceeded {
                    field: "quick_reply.title".to_string(),
                    max: max_title,
                    actual: text.chars().count(),
                });
            }
            trace!(original = text, truncated = %truncated, "quick reply title truncated");
            truncated
        } else {
            text.to_string()
        };

        self.quick_replies.push(QuickReply {
            content_type: QuickReplyContent::Text,
            title,
            payload: payload.to_string(),
        });
        Ok(())
    }

    /// Attach the quick replies and lock the builder
    pub(crate) fn seal(&mut self, mut message: Message) -> Message {
        message.quick_replies = self.quick_replies.clone();
        self.state = BuilderState::Finalized;
        debug!(
            template = self.name,
            quick_replies = message.quick_replies.len(),
            "template finalized"
        );
        message
    }
}

// Assembly hooks used by `finalize`. `Assemble` is unnameable outside the
// crate, and the hooks that hand out a document or mutable state take an
// `Internal` token only this module can construct, so generic code bounded
// on `MessageTemplate` cannot reach them either.
mod sealed {
    use super::TemplateBase;
    use crate::error::Result;
    use crate::payload::Message;

    pub struct Internal(pub(super) ());

    pub trait Assemble {
        fn base_mut(&mut self, token: Internal) -> &mut TemplateBase;

        /// Whole-document checks run by `finalize`
        fn check_complete(&self) -> Result<()> {
            Ok(())
        }

        /// The variant's document body, without quick replies
        fn build_message(&self, token: Internal) -> Message;
    }
}

use sealed::{Assemble, Internal};

/// Operations every template variant supports
///
/// `finalize` is the only way to obtain a [`Message`] from a builder:
///
/// ```compile_fail
/// use messenger_templates::{Generic, MessageTemplate};
///
/// let generic = Generic::new();
/// let _incomplete = generic.build_message();
/// ```
pub trait MessageTemplate: Assemble {
    /// Shared builder state
    fn base(&self) -> &TemplateBase;

    /// Attach a suggested reply chip
    ///
    /// Titles over the limit are cut at a word boundary instead of being
    /// rejected. Payloads over the limit are rejected.
    fn add_quick_reply(&mut self, text: &str, payload: &str) -> Result<&mut Self>
    where
        Self: Sized,
    {
        self.base_mut(Internal(())).push_quick_reply(text, payload)?;
        Ok(self)
    }

    /// Validate the whole document and hand it out
    ///
    /// The builder is locked afterwards: further mutators and a second
    /// `finalize` fail with [`TemplateError::AlreadyFinalized`].
    fn finalize(&mut self) -> Result<Message> {
        self.base().ensure_open()?;
        self.check_complete()?;
        let message = self.build_message(Internal(()));
        Ok(self.base_mut(Internal(())).seal(message))
    }

    fn limits(&self) -> &TemplateLimits {
        self.base().limits()
    }

    fn is_finalized(&self) -> bool {
        self.base().state() == BuilderState::Finalized
    }
}

/// Append a button to `buttons`, deriving its action from `value`
pub(crate) fn push_button(
    buttons: &mut Vec<Button>,
    max: usize,
    title: &str,
    value: &str,
) -> Result<()> {
    ensure_capacity(buttons.len(), max, "buttons")?;
    require_text(title, "button.title")?;
    require_text(value, "button.value")?;

    buttons.push(Button {
        action: classify_action(value),
        title: title.to_string(),
    });
    Ok(())
}
