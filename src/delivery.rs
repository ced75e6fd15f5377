//! Delivery sinks for observer notifications.
//!
//! Observers format a message and hand it to a [`MessageSender`]. The
//! console sender reproduces the classic demo output; the recording sender
//! keeps deliveries in memory so callers can inspect them.

use std::collections::HashSet;
use std::fmt;
use std::sync::Mutex;

use serde::Deserialize;

use crate::error::DeliveryError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    Email,
    Mobile,
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Channel::Email => write!(f, "email"),
            Channel::Mobile => write!(f, "mobile"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delivery {
    pub channel: Channel,
    pub recipient: String,
    pub message: String,
}

impl Delivery {
    pub fn new(channel: Channel, recipient: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            channel,
            recipient: recipient.into(),
            message: message.into(),
        }
    }

    /// Text as printed by the console sender.
    pub fn render(&self) -> String {
        match self.channel {
            Channel::Email => format!("Mail sent to: {}\nMessage: {}\n", self.recipient, self.message),
            Channel::Mobile => format!("Msg sent to: {}\nMessage: {}", self.recipient, self.message),
        }
    }
}

pub trait MessageSender: Send + Sync {
    fn send(&self, delivery: &Delivery) -> Result<(), DeliveryError>;
}

/// Prints each delivery to stdout.
pub struct ConsoleSender;

impl MessageSender for ConsoleSender {
    fn send(&self, delivery: &Delivery) -> Result<(), DeliveryError> {
        println!("{}", delivery.render());
        Ok(())
    }
}

/// In-memory sender. Recipients added with [`RecordingSender::reject`] fail
/// delivery instead of being recorded.
#[derive(Default)]
pub struct RecordingSender {
    sent: Mutex<Vec<Delivery>>,
    rejected: Mutex<HashSet<String>>,
}

impl RecordingSender {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reject(&self, recipient: impl Into<String>) {
        self.rejected
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .insert(recipient.into());
    }

    pub fn deliveries(&self) -> Vec<Delivery> {
        self.sent
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn recipients(&self) -> Vec<String> {
        self.deliveries()
            .into_iter()
            .map(|delivery| delivery.recipient)
            .collect()
    }
}

impl MessageSender for RecordingSender {
    fn send(&self, delivery: &Delivery) -> Result<(), DeliveryError> {
        let rejected = self
            .rejected
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .contains(&delivery.recipient);
        if rejected {
            return Err(DeliveryError::rejected(&delivery.recipient, "recipient blocked"));
        }

        self.sent
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(delivery.clone());
        Ok(())
    }
}
