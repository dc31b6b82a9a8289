use crate::domain::ports::{ProcessorRef, ValidatorRef};
use rust_decimal::Decimal;
use tracing::warn;

/// Runs payments through one processor, optionally gated by a validator.
///
/// The validator is independent of the processor: any validator may be paired with any
/// processor. Without one, every payment goes straight to the processor.
pub struct PaymentService {
    processor: ProcessorRef,
    validator: Option<ValidatorRef>,
}

impl PaymentService {
    /// Creates a new `PaymentService`.
    ///
    /// # Arguments
    ///
    /// * `processor` - Executes charges and refunds.
    /// * `validator` - Checked before every charge, if present.
    pub fn new(processor: ProcessorRef, validator: Option<ValidatorRef>) -> Self {
        Self {
            processor,
            validator,
        }
    }

    pub fn has_validator(&self) -> bool {
        self.validator.is_some()
    }

    /// Charges `amount`.
    ///
    /// Returns `false` without touching the processor when validation rejects the payment.
    /// Repeated calls charge again; there is no deduplication.
    pub fn make_payment(&self, amount: Decimal, details: &str) -> bool {
        if let Some(validator) = &self.validator
            && !validator.validate(amount, details)
        {
            warn!(%amount, "payment failed validation");
            return false;
        }

        self.processor.process(amount)
    }

    /// Refunds `amount` against `transaction_id`. No validation step applies.
    pub fn refund_payment(&self, amount: Decimal, transaction_id: &str) -> bool {
        self.processor.refund(amount, transaction_id)
    }
}
