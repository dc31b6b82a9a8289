use rust_decimal::Decimal;
use std::sync::Arc;

/// Charges and refunds through a single payment method.
///
/// Both operations report business failure as `false`; they never return an error.
pub trait PaymentProcessor: Send + Sync {
    fn process(&self, amount: Decimal) -> bool;
    fn refund(&self, amount: Decimal, transaction_id: &str) -> bool;
}

/// Pre-charge check of an amount and the payment details supplied with it.
pub trait PaymentValidator: Send + Sync {
    fn validate(&self, amount: Decimal, details: &str) -> bool;
}

pub type ProcessorRef = Arc<dyn PaymentProcessor>;
pub type ValidatorRef = Arc<dyn PaymentValidator>;
