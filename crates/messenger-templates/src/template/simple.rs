//! Single-shot templates: plain text and media attachments

use super::sealed::{Assemble, Internal};
use super::{MessageTemplate, TemplateBase};
use crate::config::TemplateLimits;
use crate::error::Result;
use crate::payload::{self, AttachmentPayload, Message};
use crate::validation::{optional_text, require_text, require_url};

/// Plain text message
#[derive(Debug, Clone)]
pub struct Text {
    base: TemplateBase,
    text: String,
}

impl Text {
    pub fn new(text: &str) -> Result<Self> {
        Self::with_limits(text, TemplateLimits::default())
    }

    pub fn with_limits(text: &str, limits: TemplateLimits) -> Result<Self> {
        let text = require_text(text, "text")?;
        Ok(Self {
            base: TemplateBase::new("Text", limits),
            text: text.to_string(),
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl MessageTemplate for Text {
    fn base(&self) -> &TemplateBase {
        &self.base
    }
}

impl Assemble for Text {
    fn base_mut(&mut self, _: Internal) -> &mut TemplateBase {
        &mut self.base
    }

    fn build_message(&self, _: Internal) -> Message {
        Message::text(self.text.clone())
    }
}

/// Media types with a dedicated attachment constructor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    File,
    Image,
    Audio,
    Video,
}

impl MediaKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaKind::File => "file",
            MediaKind::Image => "image",
            MediaKind::Audio => "audio",
            MediaKind::Video => "video",
        }
    }
}

/// A file hosted at a URL, sent as an attachment
#[derive(Debug, Clone)]
pub struct Attachment {
    base: TemplateBase,
    kind: String,
    url: String,
}

impl Attachment {
    /// Attachment of an explicit type; `None` or blank means `file`
    pub fn new(url: &str, kind: Option<&str>) -> Result<Self> {
        Self::with_limits(url, kind, TemplateLimits::default())
    }

    pub fn with_limits(url: &str, kind: Option<&str>, limits: TemplateLimits) -> Result<Self> {
        let url = require_url(url, "attachment.url")?;
        let kind = optional_text(kind).unwrap_or(MediaKind::File.as_str());
        Ok(Self {
            base: TemplateBase::new("Attachment", limits),
            kind: kind.to_string(),
            url: url.to_string(),
        })
    }

    pub fn media(url: &str, kind: MediaKind) -> Result<Self> {
        Self::new(url, Some(kind.as_str()))
    }

    pub fn file(url: &str) -> Result<Self> {
        Self::media(url, MediaKind::File)
    }

    pub fn image(url: &str) -> Result<Self> {
        Self::media(url, MediaKind::Image)
    }

    pub fn audio(url: &str) -> Result<Self> {
        Self::media(url, MediaKind::Audio)
    }

    pub fn video(url: &str) -> Result<Self> {
        Self::media(url, MediaKind::Video)
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl MessageTemplate for Attachment {
    fn base(&self) -> &TemplateBase {
        &self.base
    }
}

impl Assemble for Attachment {
    fn base_mut(&mut self, _: Internal) -> &mut TemplateBase {
        &mut self.base
    }

    fn build_message(&self, _: Internal) -> Message {
        Message::attachment(payload::Attachment {
            kind: self.kind.clone(),
            payload: AttachmentPayload::Media {
                url: self.url.clone(),
            },
        })
    }
}
