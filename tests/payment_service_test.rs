use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use trippay::application::payment_service::PaymentService;
use trippay::domain::payment::PaymentMethod;
use trippay::domain::ports::{PaymentProcessor, PaymentValidator, ValidatorRef};
use trippay::infrastructure::processors::{CreditCardProcessor, PayPalProcessor, adapters_for};

#[derive(Default)]
struct CountingProcessor {
    charges: AtomicUsize,
    refunds: AtomicUsize,
}

impl PaymentProcessor for CountingProcessor {
    fn process(&self, _amount: Decimal) -> bool {
        self.charges.fetch_add(1, Ordering::SeqCst);
        true
    }

    fn refund(&self, _amount: Decimal, _transaction_id: &str) -> bool {
        self.refunds.fetch_add(1, Ordering::SeqCst);
        true
    }
}

struct FixedValidator(bool);

impl PaymentValidator for FixedValidator {
    fn validate(&self, _amount: Decimal, _details: &str) -> bool {
        self.0
    }
}

#[test]
fn test_rejected_validation_never_reaches_processor() {
    let processor = Arc::new(CountingProcessor::default());
    let service = PaymentService::new(processor.clone(), Some(Arc::new(FixedValidator(false))));

    assert!(!service.make_payment(dec!(100), "4111111111111111"));
    assert_eq!(processor.charges.load(Ordering::SeqCst), 0);
}

#[test]
fn test_accepted_validation_charges_once() {
    let processor = Arc::new(CountingProcessor::default());
    let service = PaymentService::new(processor.clone(), Some(Arc::new(FixedValidator(true))));

    assert!(service.make_payment(dec!(100), "4111111111111111"));
    assert_eq!(processor.charges.load(Ordering::SeqCst), 1);
}

#[test]
fn test_repeated_payment_is_charged_again() {
    let processor = Arc::new(CountingProcessor::default());
    let service = PaymentService::new(processor.clone(), None);

    assert!(service.make_payment(dec!(10), "x"));
    assert!(service.make_payment(dec!(10), "x"));
    assert_eq!(processor.charges.load(Ordering::SeqCst), 2);
}

#[test]
fn test_refund_bypasses_rejecting_validator() {
    let processor = Arc::new(CountingProcessor::default());
    let service = PaymentService::new(processor.clone(), Some(Arc::new(FixedValidator(false))));

    assert!(service.refund_payment(dec!(10), "TX-7"));
    assert_eq!(processor.refunds.load(Ordering::SeqCst), 1);
    assert_eq!(processor.charges.load(Ordering::SeqCst), 0);
}

#[test]
fn test_card_validator_paired_with_other_processor() {
    let paypal = Arc::new(PayPalProcessor::new());
    let card_check: ValidatorRef = Arc::new(CreditCardProcessor::new());
    let service = PaymentService::new(paypal, Some(card_check));

    assert!(service.make_payment(dec!(5), "user@example.com"));
    assert!(!service.make_payment(dec!(5), ""));
}

#[test]
fn test_stock_pairings() {
    for (method, validated) in [
        (PaymentMethod::PayPal, false),
        (PaymentMethod::CreditCard, true),
        (PaymentMethod::Crypto, false),
    ] {
        let (processor, validator) = adapters_for(method);
        let service = PaymentService::new(processor, validator);
        assert_eq!(service.has_validator(), validated, "{method}");
        assert_eq!(service.make_payment(dec!(10), ""), !validated, "{method}");
    }
}

#[test]
fn test_caller_supplied_processor_needs_only_two_operations() {
    struct Declining;

    impl PaymentProcessor for Declining {
        fn process(&self, _amount: Decimal) -> bool {
            false
        }

        fn refund(&self, _amount: Decimal, _transaction_id: &str) -> bool {
            false
        }
    }

    let service = PaymentService::new(Arc::new(Declining), None);
    assert!(!service.make_payment(dec!(10), "x"));
    assert!(!service.refund_payment(dec!(10), "TX-1"));
}
