// ## 📂 File: `src/validation/validator.rs`

//! validation/validator.rs
//! `PinValidator`: runs the weak-PIN rule chain against a candidate PIN.

use chrono::Datelike;
use tracing::debug;

use crate::validation::rules::{first_weak_rule, RuleContext};
use crate::validation::types::{Pin, ValidationOutcome, WeakPinRule};

/// Where the birth-year rule takes "this year" from.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum ReferenceYear {
    /// Local calendar year at the time of each call.
    #[default]
    Local,
    /// A fixed year (reproducible results).
    Fixed(i32),
}

impl ReferenceYear {
    pub fn resolve(self) -> i32 {
        match self {
            ReferenceYear::Local => chrono::Local::now().year(),
            ReferenceYear::Fixed(year) => year,
        }
    }
}

/// Stateless weak-PIN classifier. Cheap to copy and safe to share.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct PinValidator {
    reference_year: ReferenceYear,
}

impl PinValidator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_reference_year(reference_year: ReferenceYear) -> Self {
        Self { reference_year }
    }

    pub fn reference_year(&self) -> ReferenceYear {
        self.reference_year
    }

    /// First rule the PIN trips, if any.
    pub fn first_match(&self, pin: &str) -> Option<WeakPinRule> {
        let ctx = RuleContext {
            reference_year: self.reference_year.resolve(),
        };
        first_weak_rule(&Pin::new(pin), &ctx)
    }

    pub fn classify(&self, pin: &str) -> ValidationOutcome {
        match self.first_match(pin) {
            Some(rule) => {
                debug!(?rule, code = rule.error_code().code(), "pin rejected");
                ValidationOutcome::Rejected(rule.error_code())
            }
            None => ValidationOutcome::Accepted,
        }
    }
}
