//! Serializable message documents
//!
//! These are the shapes the send API expects under its `message` field. The
//! builders in [`crate::template`] are the only way to produce them with all
//! invariants checked; the types themselves are plain data.
//!
//! Copyright (c) 2025 Messenger Templates Team
//! Licensed under the Apache-2.0 license

use serde::Serialize;
use serde_json::Value;
use std::fmt;

/// A finished message, ready to be embedded in a send request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Message {
    #[serde(flatten)]
    pub body: MessageBody,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub quick_replies: Vec<QuickReply>,
}

impl Message {
    pub fn text<T: Into<String>>(text: T) -> Self {
        Self {
            body: MessageBody::Text { text: text.into() },
            quick_replies: Vec::new(),
        }
    }

    pub fn attachment(attachment: Attachment) -> Self {
        Self {
            body: MessageBody::Attachment { attachment },
            quick_replies: Vec::new(),
        }
    }

    /// The template payload, if this message carries one
    pub fn template(&self) -> Option<&TemplatePayload> {
        match &self.body {
            MessageBody::Attachment {
                attachment:
                    Attachment {
                        payload: AttachmentPayload::Template(template),
                        ..
                    },
            } => Some(template),
            _ => None,
        }
    }

    pub fn to_value(&self) -> serde_json::Result<Value> {
        serde_json::to_value(self)
    }

    pub fn to_json_string(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Root shape of a message
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MessageBody {
    Text { text: String },
    Attachment { attachment: Attachment },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Attachment {
    /// `file`, `image`, `audio`, `video` or `template`
    #[serde(rename = "type")]
    pub kind: String,
    pub payload: AttachmentPayload,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AttachmentPayload {
    Media { url: String },
    Template(TemplatePayload),
}

/// Structured template payloads, tagged by `template_type`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "template_type", rename_all = "snake_case")]
pub enum TemplatePayload {
    Generic { elements: Vec<Bubble> },
    Button { text: String, buttons: Vec<Button> },
    Receipt(ReceiptPayload),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QuickReplyContent {
    Text,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuickReply {
    pub content_type: QuickReplyContent,
    pub title: String,
    pub payload: String,
}

/// One card of a carousel
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bubble {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub buttons: Vec<Button>,
}

impl Bubble {
    pub fn new(title: impl Into<String>, subtitle: Option<String>) -> Self {
        Self {
            title: title.into(),
            subtitle,
            item_url: None,
            image_url: None,
            buttons: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Button {
    #[serde(flatten)]
    pub action: ButtonAction,
    pub title: String,
}

/// What a button does when tapped
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ButtonAction {
    WebUrl { url: String },
    Postback { payload: String },
}

/// Receipt template body
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReceiptPayload {
    pub recipient_name: String,
    pub order_number: String,
    pub currency: String,
    pub payment_method: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_url: Option<String>,
    /// Epoch milliseconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<i64>,
    pub elements: Vec<ReceiptItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    pub summary: Summary,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub adjustments: Vec<Adjustment>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReceiptItem {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<Numeric>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<Numeric>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl ReceiptItem {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            subtitle: None,
            quantity: None,
            price: None,
            currency: None,
            image_url: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Summary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtotal: Option<Numeric>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_cost: Option<Numeric>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_tax: Option<Numeric>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_cost: Option<Numeric>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Adjustment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub amount: Numeric,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Address {
    pub street_1: String,
    pub street_2: String,
    pub city: String,
    pub postal_code: String,
    pub state: String,
    pub country: String,
}

/// A number as the caller supplied it
///
/// Strings stay strings and numbers stay numbers in the output. Builders
/// only accept values that parse as a finite number.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Numeric {
    Int(i64),
    UInt(u64),
    Float(f64),
    Text(String),
}

impl Numeric {
    /// Numeric value, when it has one
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Numeric::Int(n) => Some(*n as f64),
            Numeric::UInt(n) => Some(*n as f64),
            Numeric::Float(n) => Some(*n),
            Numeric::Text(text) => text.trim().parse().ok(),
        }
    }
}

impl fmt::Display for Numeric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Numeric::Int(n) => write!(f, "{}", n),
            Numeric::UInt(n) => write!(f, "{}", n),
            Numeric::Float(n) => write!(f, "{}", n),
            Numeric::Text(text) => write!(f, "{}", text),
        }
    }
}

impl From<i32> for Numeric {
    fn from(value: i32) -> Self {
        Numeric::Int(value.into())
    }
}

impl From<i64> for Numeric {
    fn from(value: i64) -> Self {
        Numeric::Int(value)
    }
}

impl From<u32> for Numeric {
    fn from(value: u32) -> Self {
        Numeric::UInt(value.into())
    }
}

impl From<u64> for Numeric {
    fn from(value: u64) -> Self {
        Numeric::UInt(value)
    }
}

impl From<usize> for Numeric {
    fn from(value: usize) -> Self {
        Numeric::UInt(value as u64)
    }
}

impl From<f64> for Numeric {
    fn from(value: f64) -> Self {
        Numeric::Float(value)
    }
}

impl From<&str> for Numeric {
    fn from(value: &str) -> Self {
        Numeric::Text(value.to_string())
    }
}

impl From<String> for Numeric {
    fn from(value: String) -> Self {
        Numeric::Text(value)
    }
}
