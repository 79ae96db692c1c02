//! Mamdani fuzzy inference for credit applications.
//!
//! Five crisp inputs (house market value, location score, applicant assets,
//! salary and interest rate) are fuzzified into linguistic categories, run
//! through three min/max rule sets and turned back into three crisp scores by
//! centroid defuzzification:
//!
//! ```
//! use fuzzy_credit::{CreditEvaluator, Inputs};
//!
//! let evaluator = CreditEvaluator::default();
//! let evaluation = evaluator.evaluate(&Inputs::new(87_000., 4.5, 150_000., 45_000., 3.5))?;
//!
//! assert!((0. ..=10.).contains(&evaluation.scores.house));
//! assert!((0. ..=10.).contains(&evaluation.scores.application));
//! assert!((0. ..=1000.).contains(&evaluation.scores.credit));
//! # Ok::<(), fuzzy_credit::Error>(())
//! ```
//!
//! The credit rules consume the *outputs* of the house and application rules,
//! not fuzzified crisp scores. Every stage is a pure function of its inputs.

mod config;
pub mod curves;
mod defuzzify;
mod error;
pub mod fuzzify;
mod inference;
mod inputs;
mod linspace;
pub mod membership;
pub mod ops;
mod outputs;
pub mod rules;
mod terms;
pub mod variables;

pub use config::{InferenceConfig, DEFAULT_RESOLUTION};
pub use defuzzify::{Aggregation, ClippedTerm, Consequent, Defuzzifier, OutputDomain};
pub use error::{Error, Result};
pub use inference::{
    evaluate_application_rule, evaluate_house_rule, evaluate_loan_rule, fuzzify_inputs, CreditEvaluator,
};
pub use inputs::Inputs;
pub use linspace::Linspace;
pub use outputs::{Evaluation, Fuzzified, Scores};
pub use terms::{Memberships, Term};
