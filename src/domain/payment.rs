use crate::error::TripError;
use std::fmt;
use std::str::FromStr;

/// The payment methods a `PaymentService` can be built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaymentMethod {
    PayPal,
    CreditCard,
    Crypto,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 3] = [Self::PayPal, Self::CreditCard, Self::Crypto];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PayPal => "paypal",
            Self::CreditCard => "credit-card",
            Self::Crypto => "crypto",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentMethod {
    type Err = TripError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "paypal" => Ok(Self::PayPal),
            "credit-card" | "creditcard" | "card" => Ok(Self::CreditCard),
            "crypto" | "btc" => Ok(Self::Crypto),
            other => Err(TripError::invalid(format!("unknown payment method '{other}'"))),
        }
    }
}
