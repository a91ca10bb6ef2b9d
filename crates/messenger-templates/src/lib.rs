//! Messenger Templates - validating builders for send-API message payloads
//!
//! This crate builds the JSON documents a messaging platform's send API
//! expects under its `message` field: plain text, media attachments,
//! carousels, button menus and order receipts. It does not talk to the
//! network; hand the finished [`Message`] to whatever client you use.
//!
//! # Main Components
//!
//! - **Builders**: [`Text`], [`Attachment`], [`Generic`], [`ButtonMenu`] and
//!   [`Receipt`], all implementing [`MessageTemplate`]
//! - **Documents**: the serializable [`payload`] types
//! - **Validation**: fail-fast checks shared by every builder ([`validation`])
//! - **Limits**: platform caps in [`TemplateLimits`]
//!
//! Every mutator checks its own arguments and returns a typed
//! [`TemplateError`] at the call that went wrong. Completeness (a carousel
//! with no bubbles, a receipt with no total) is checked by `finalize()`.
//!
//! # Example
//!
//! ```
//! use messenger_templates::{MessageTemplate, Receipt, Result};
//! use serde_json::json;
//!
//! fn order_receipt() -> Result<serde_json::Value> {
//!     let message = Receipt::new("Jo", "ORD1", "USD", "Visa")?
//!         .add_item("Widget")?
//!         .add_quantity(1)?
//!         .add_price(9.99)?
//!         .add_total(9.99)?
//!         .add_quick_reply("Track my order", "TRACK_ORD1")?
//!         .finalize()?;
//!     Ok(message.to_value().expect("message serializes"))
//! }
//!
//! let value = order_receipt().unwrap();
//! assert_eq!(value["attachment"]["payload"]["summary"]["total_cost"], json!(9.99));
//! ```
//!
//! Copyright (c) 2025 Messenger Templates Team
//! Licensed under the Apache-2.0 license

pub mod config;
pub mod error;
pub mod payload;
pub mod template;
pub mod text;
pub mod validation;

// Re-export main types for convenience
pub use config::TemplateLimits;
pub use error::{ErrorKind, Result, TemplateError};
pub use payload::Message;
pub use template::{
    Attachment, BuilderState, ButtonMenu, Generic, MediaKind, MessageTemplate, Receipt,
    TemplateBase, Text,
};
pub use text::break_text;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
