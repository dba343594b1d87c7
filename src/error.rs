use thiserror::Error;

use crate::validation::ValidationError;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CheckoutError {
    #[error("invalid configuration: at least one counter is required (got {counters})")]
    InvalidConfiguration { counters: usize },

    #[error("invalid arrival: {message}")]
    InvalidArrival { message: String },

    #[error("counter heap is empty: a load record was lost")]
    EmptyStructureAccess,

    #[error("unknown counter {index} (system has {counters} counters)")]
    UnknownCounter { index: usize, counters: usize },

    #[error("invalid simulation config: {0}")]
    Config(String),
}

impl From<ValidationError> for CheckoutError {
    fn from(err: ValidationError) -> Self {
        use crate::validation::ValidationErrorKind as Kind;

        match err.kind {
            Kind::NoCounters => CheckoutError::InvalidConfiguration { counters: 0 },
            Kind::NotANumber | Kind::NonPositive | Kind::OutOfRange => {
                CheckoutError::InvalidArrival {
                    message: err.message,
                }
            }
            Kind::InvalidItemRange => CheckoutError::Config(err.message),
        }
    }
}
