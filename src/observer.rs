//! Observer pattern: a stock subject notifying alert subscribers.
//!
//! The subject owns its observer list. Setting the stock count while the
//! stored count is zero fans out a "back in stock" alert to every registered
//! observer, in registration order, before the new count is stored.
//!
//! A zero to zero update also fans out. The check looks at the previous
//! count rather than the incoming one; existing callers rely on it, so it is
//! kept as is.
//!
//! Mutation takes `&mut self`. To share a subject across threads wrap the
//! whole thing in `Arc<Mutex<StockObservable>>`; the lock then covers the
//! full notify loop, so registration never interleaves with a fan-out.

use std::fmt;
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::delivery::{Channel, Delivery, MessageSender};
use crate::error::DeliveryError;

pub const BACK_IN_STOCK: &str = "Product is back in stock!";

pub trait StockObserver: Send + Sync {
    /// Called once per fan-out.
    fn update(&self) -> Result<(), DeliveryError>;

    /// Email address or username the alert goes to.
    fn identity(&self) -> &str;
}

pub struct EmailAlertObserver {
    email: String,
    sender: Arc<dyn MessageSender>,
}

impl EmailAlertObserver {
    pub fn new(email: impl Into<String>, sender: Arc<dyn MessageSender>) -> Self {
        Self {
            email: email.into(),
            sender,
        }
    }
}

impl StockObserver for EmailAlertObserver {
    fn update(&self) -> Result<(), DeliveryError> {
        self.sender
            .send(&Delivery::new(Channel::Email, &self.email, BACK_IN_STOCK))
    }

    fn identity(&self) -> &str {
        &self.email
    }
}

pub struct MobileAlertObserver {
    username: String,
    sender: Arc<dyn MessageSender>,
}

impl MobileAlertObserver {
    pub fn new(username: impl Into<String>, sender: Arc<dyn MessageSender>) -> Self {
        Self {
            username: username.into(),
            sender,
        }
    }
}

impl StockObserver for MobileAlertObserver {
    fn update(&self) -> Result<(), DeliveryError> {
        self.sender
            .send(&Delivery::new(Channel::Mobile, &self.username, BACK_IN_STOCK))
    }

    fn identity(&self) -> &str {
        &self.username
    }
}

/// Builds the observer variant for `channel`.
pub fn alert_observer(
    channel: Channel,
    identity: impl Into<String>,
    sender: Arc<dyn MessageSender>,
) -> Arc<dyn StockObserver> {
    match channel {
        Channel::Email => Arc::new(EmailAlertObserver::new(identity, sender)),
        Channel::Mobile => Arc::new(MobileAlertObserver::new(identity, sender)),
    }
}

/// Outcome of one fan-out.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FanOutReport {
    pub delivered: Vec<String>,
    pub failures: Vec<(String, DeliveryError)>,
}

impl FanOutReport {
    pub fn attempted(&self) -> usize {
        self.delivered.len() + self.failures.len()
    }

    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

pub struct StockObservable {
    product: String,
    stock_count: u32,
    observers: Vec<Arc<dyn StockObserver>>,
}

impl StockObservable {
    pub fn new(product: impl Into<String>) -> Self {
        Self {
            product: product.into(),
            stock_count: 0,
            observers: Vec::new(),
        }
    }

    pub fn product(&self) -> &str {
        &self.product
    }

    /// Duplicates are allowed; the same observer registered twice is
    /// notified twice.
    pub fn add_observer(&mut self, observer: Arc<dyn StockObserver>) {
        debug!(product = %self.product, observer = observer.identity(), "observer registered");
        self.observers.push(observer);
    }

    /// Removes the first registration of `observer`, compared by identity of
    /// the shared pointer. Returns `false` if it was not registered.
    pub fn remove_observer(&mut self, observer: &Arc<dyn StockObserver>) -> bool {
        match self
            .observers
            .iter()
            .position(|registered| Arc::ptr_eq(registered, observer))
        {
            Some(index) => {
                self.observers.remove(index);
                debug!(product = %self.product, observer = observer.identity(), "observer removed");
                true
            }
            None => false,
        }
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Best-effort: a failed delivery is recorded and the loop continues.
    pub fn notify_subscribers(&self) -> FanOutReport {
        let mut report = FanOutReport::default();

        for observer in &self.observers {
            let identity = observer.identity().to_string();
            match observer.update() {
                Ok(()) => report.delivered.push(identity),
                Err(err) => {
                    warn!(product = %self.product, observer = %identity, error = %err, "delivery failed");
                    report.failures.push((identity, err));
                }
            }
        }

        info!(
            product = %self.product,
            delivered = report.delivered.len(),
            failed = report.failures.len(),
            "subscribers notified"
        );
        report
    }

    /// Fans out if the stored count is zero, then stores `new_count`.
    /// Returns the fan-out report when one happened.
    pub fn set_stock_count(&mut self, new_count: u32) -> Option<FanOutReport> {
        let previous = self.stock_count;
        debug!(product = %self.product, previous, new_count, "stock count update");

        let report = if previous == 0 {
            Some(self.notify_subscribers())
        } else {
            None
        };

        self.stock_count = new_count;
        report
    }

    pub fn stock_count(&self) -> u32 {
        self.stock_count
    }
}

impl fmt::Debug for StockObservable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let identities: Vec<&str> = self.observers.iter().map(|o| o.identity()).collect();
        f.debug_struct("StockObservable")
            .field("product", &self.product)
            .field("stock_count", &self.stock_count)
            .field("observers", &identities)
            .finish()
    }
}
