//! Order receipt template
//!
//! Line items are added with `add_item`; `add_subtitle`, `add_quantity`,
//! `add_price`, `add_currency` and `add_image` then describe the item added
//! last. Address, adjustments and summary totals live at the top level and
//! are independent of the item cursor.
//!
//! Copyright (c) 2025 Messenger Templates Team
//! Licensed under the Apache-2.0 license

use super::sealed::{Assemble, Internal};
use super::{MessageTemplate, TemplateBase};
use crate::config::TemplateLimits;
use crate::error::{Result, TemplateError};
use crate::payload::{
    Address, Adjustment, Attachment, AttachmentPayload, Message, Numeric, ReceiptItem,
    ReceiptPayload, Summary, TemplatePayload,
};
use crate::validation::{ensure_capacity, optional_text, require_numeric, require_text, require_url};
use chrono::{DateTime, NaiveDate, TimeZone};
use tracing::debug;

#[derive(Debug, Clone)]
pub struct Receipt {
    base: TemplateBase,
    payload: ReceiptPayload,
    cursor: Option<usize>,
}

impl Receipt {
    pub fn new(
        recipient_name: &str,
        order_number: &str,
        currency: &str,
        payment_method: &str,
    ) -> Result<Self> {
        Self::with_limits(
            recipient_name,
            order_number,
            currency,
            payment_method,
            TemplateLimits::default(),
        )
    }

    pub fn with_limits(
        recipient_name: &str,
        order_number: &str,
        currency: &str,
        payment_method: &str,
        limits: TemplateLimits,
    ) -> Result<Self> {
        let recipient_name = require_text(recipient_name, "receipt.recipient_name")?;
        let order_number = require_text(order_number, "receipt.order_number")?;
        let currency = require_text(currency, "receipt.currency")?;
        let payment_method = require_text(payment_method, "receipt.payment_method")?;

        Ok(Self {
            base: TemplateBase::new("Receipt", limits),
            payload: ReceiptPayload {
                recipient_name: recipient_name.to_string(),
                order_number: order_number.to_string(),
                currency: currency.to_string(),
                payment_method: payment_method.to_string(),
                order_url: None,
                timestamp: None,
                elements: Vec::new(),
                address: None,
                summary: Summary::default(),
                adjustments: Vec::new(),
            },
            cursor: None,
        })
    }

    /// Order time, stored as epoch milliseconds
    pub fn add_timestamp<Tz: TimeZone>(&mut self, date: &DateTime<Tz>) -> Result<&mut Self> {
        self.base.ensure_open()?;
        self.payload.timestamp = Some(date.timestamp_millis());
        Ok(self)
    }

    /// Order time from an RFC 3339 string or a `YYYY-MM-DD` date (midnight UTC)
    pub fn add_timestamp_str(&mut self, date: &str) -> Result<&mut Self> {
        self.base.ensure_open()?;
        let date = require_text(date, "receipt.timestamp")?;
        self.payload.timestamp = Some(parse_timestamp(date)?);
        Ok(self)
    }

    pub fn add_order_url(&mut self, url: &str) -> Result<&mut Self> {
        self.base.ensure_open()?;
        let url = require_url(url, "receipt.order_url")?;
        self.payload.order_url = Some(url.to_string());
        Ok(self)
    }

    /// Append a line item and make it the target of the item mutators
    pub fn add_item(&mut self, title: &str) -> Result<&mut Self> {
        self.base.ensure_open()?;
        let title = require_text(title, "item.title")?;
        ensure_capacity(
            self.payload.elements.len(),
            self.base.limits().max_receipt_items,
            "receipt items",
        )?;

        self.payload.elements.push(ReceiptItem::new(title));
        self.cursor = Some(self.payload.elements.len() - 1);
        Ok(self)
    }

    pub fn add_subtitle(&mut self, subtitle: &str) -> Result<&mut Self> {
        self.base.ensure_open()?;
        let subtitle = require_text(subtitle, "item.subtitle")?;
        self.current_item()?.subtitle = Some(subtitle.to_string());
        Ok(self)
    }

    pub fn add_quantity(&mut self, quantity: impl Into<Numeric>) -> Result<&mut Self> {
        self.base.ensure_open()?;
        let quantity = require_numeric(quantity.into(), "item.quantity")?;
        self.current_item()?.quantity = Some(quantity);
        Ok(self)
    }

    pub fn add_price(&mut self, price: impl Into<Numeric>) -> Result<&mut Self> {
        self.base.ensure_open()?;
        let price = require_numeric(price.into(), "item.price")?;
        self.current_item()?.price = Some(price);
        Ok(self)
    }

    pub fn add_currency(&mut self, currency: &str) -> Result<&mut Self> {
        self.base.ensure_open()?;
        let currency = require_text(currency, "item.currency")?;
        self.current_item()?.currency = Some(currency.to_string());
        Ok(self)
    }

    pub fn add_image(&mut self, url: &str) -> Result<&mut Self> {
        self.base.ensure_open()?;
        let url = require_url(url, "item.image_url")?;
        self.current_item()?.image_url = Some(url.to_string());
        Ok(self)
    }

    /// Set the shipping address, replacing any earlier one
    pub fn add_shipping_address(
        &mut self,
        street_1: &str,
        street_2: Option<&str>,
        city: &str,
        postal_code: &str,
        state: &str,
        country: &str,
    ) -> Result<&mut Self> {
        self.base.ensure_open()?;
        let address = Address {
            street_1: require_text(street_1, "address.street_1")?.to_string(),
            street_2: street_2.unwrap_or_default().to_string(),
            city: require_text(city, "address.city")?.to_string(),
            postal_code: require_text(postal_code, "address.postal_code")?.to_string(),
            state: require_text(state, "address.state")?.to_string(),
            country: require_text(country, "address.country")?.to_string(),
        };

        if self.payload.address.is_some() {
            debug!(order_number = %self.payload.order_number, "replacing shipping address");
        }
        self.payload.address = Some(address);
        Ok(self)
    }

    /// Append a discount or surcharge line
    pub fn add_adjustment(
        &mut self,
        name: Option<&str>,
        amount: impl Into<Numeric>,
    ) -> Result<&mut Self> {
        self.base.ensure_open()?;
        let amount = require_numeric(amount.into(), "adjustment.amount")?;
        self.payload.adjustments.push(Adjustment {
            name: optional_text(name).map(str::to_string),
            amount,
        });
        Ok(self)
    }

    pub fn add_subtotal(&mut self, subtotal: impl Into<Numeric>) -> Result<&mut Self> {
        self.base.ensure_open()?;
        self.payload.summary.subtotal = Some(require_numeric(subtotal.into(), "summary.subtotal")?);
        Ok(self)
    }

    pub fn add_shipping_cost(&mut self, shipping_cost: impl Into<Numeric>) -> Result<&mut Self> {
        self.base.ensure_open()?;
        self.payload.summary.shipping_cost =
            Some(require_numeric(shipping_cost.into(), "summary.shipping_cost")?);
        Ok(self)
    }

    pub fn add_tax(&mut self, tax: impl Into<Numeric>) -> Result<&mut Self> {
        self.base.ensure_open()?;
        self.payload.summary.total_tax = Some(require_numeric(tax.into(), "summary.total_tax")?);
        Ok(self)
    }

    pub fn add_total(&mut self, total: impl Into<Numeric>) -> Result<&mut Self> {
        self.base.ensure_open()?;
        self.payload.summary.total_cost = Some(require_numeric(total.into(), "summary.total_cost")?);
        Ok(self)
    }

    pub fn items(&self) -> &[ReceiptItem] {
        &self.payload.elements
    }

    pub fn summary(&self) -> &Summary {
        &self.payload.summary
    }

    /// Index of the item the item mutators will modify
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    fn current_item(&mut self) -> Result<&mut ReceiptItem> {
        self.cursor
            .and_then(|index| self.payload.elements.get_mut(index))
            .ok_or_else(|| TemplateError::CursorNotSet {
                cursor: "receipt item".to_string(),
            })
    }
}

impl MessageTemplate for Receipt {
    fn base(&self) -> &TemplateBase {
        &self.base
    }
}

impl Assemble for Receipt {
    fn base_mut(&mut self, _: Internal) -> &mut TemplateBase {
        &mut self.base
    }

    fn check_complete(&self) -> Result<()> {
        if self.payload.elements.is_empty() {
            return Err(TemplateError::incomplete("at least one receipt item is required"));
        }
        if self.payload.summary.total_cost.is_none() {
            return Err(TemplateError::incomplete("summary total_cost is required"));
        }
        Ok(())
    }

    fn build_message(&self, _: Internal) -> Message {
        Message::attachment(Attachment {
            kind: "template".to_string(),
            payload: AttachmentPayload::Template(TemplatePayload::Receipt(self.payload.clone())),
        })
    }
}

fn parse_timestamp(value: &str) -> Result<i64> {
    let value = value.trim();
    if let Ok(date_time) = DateTime::parse_from_rfc3339(value) {
        return Ok(date_time.timestamp_millis());
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|midnight| midnight.and_utc().timestamp_millis())
        .ok_or_else(|| {
            TemplateError::invalid_format("receipt.timestamp", "RFC 3339 date-time or YYYY-MM-DD", value)
        })
}
