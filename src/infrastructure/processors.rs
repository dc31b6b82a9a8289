//! Payment method adapters.
//!
//! None of these talk to a real gateway: every charge and refund is reported through
//! `tracing` and succeeds.

use crate::domain::payment::PaymentMethod;
use crate::domain::ports::{PaymentProcessor, PaymentValidator, ProcessorRef, ValidatorRef};
use rust_decimal::Decimal;
use std::sync::Arc;
use tracing::{debug, info};

/// Processor and optional validator for `method`.
///
/// Card payments validate through the card processor itself; the other methods
/// skip validation.
pub fn adapters_for(method: PaymentMethod) -> (ProcessorRef, Option<ValidatorRef>) {
    match method {
        PaymentMethod::PayPal => (Arc::new(PayPalProcessor::new()) as ProcessorRef, None),
        PaymentMethod::CreditCard => {
            let card = Arc::new(CreditCardProcessor::new());
            (card.clone() as ProcessorRef, Some(card as ValidatorRef))
        }
        PaymentMethod::Crypto => (Arc::new(CryptoProcessor::new()) as ProcessorRef, None),
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct PayPalProcessor;

impl PayPalProcessor {
    pub fn new() -> Self {
        Self
    }
}

impl PaymentProcessor for PayPalProcessor {
    fn process(&self, amount: Decimal) -> bool {
        info!(method = %PaymentMethod::PayPal, %amount, "processing PayPal payment");
        true
    }

    fn refund(&self, amount: Decimal, transaction_id: &str) -> bool {
        info!(
            method = %PaymentMethod::PayPal,
            %amount,
            transaction_id,
            "refunding PayPal payment"
        );
        true
    }
}

/// Card payments. The only method that can also validate its own payment details.
#[derive(Debug, Default, Clone, Copy)]
pub struct CreditCardProcessor;

impl CreditCardProcessor {
    pub fn new() -> Self {
        Self
    }
}

impl PaymentProcessor for CreditCardProcessor {
    fn process(&self, amount: Decimal) -> bool {
        info!(method = %PaymentMethod::CreditCard, %amount, "charging credit card");
        true
    }

    fn refund(&self, amount: Decimal, transaction_id: &str) -> bool {
        info!(
            method = %PaymentMethod::CreditCard,
            %amount,
            transaction_id,
            "refunding credit card charge"
        );
        true
    }
}

impl PaymentValidator for CreditCardProcessor {
    /// Accepts a positive amount with non-empty card details.
    fn validate(&self, amount: Decimal, details: &str) -> bool {
        let valid = !details.is_empty() && amount > Decimal::ZERO;
        debug!(%amount, valid, "validating credit card details");
        valid
    }
}

/// Crypto payments. Amounts are denominated in BTC.
#[derive(Debug, Default, Clone, Copy)]
pub struct CryptoProcessor;

impl CryptoProcessor {
    pub fn new() -> Self {
        Self
    }
}

impl PaymentProcessor for CryptoProcessor {
    fn process(&self, amount: Decimal) -> bool {
        info!(
            method = %PaymentMethod::Crypto,
            %amount,
            currency = "BTC",
            "processing crypto payment"
        );
        true
    }

    fn refund(&self, amount: Decimal, transaction_id: &str) -> bool {
        info!(
            method = %PaymentMethod::Crypto,
            %amount,
            currency = "BTC",
            transaction_id,
            "refunding crypto payment"
        );
        true
    }
}
