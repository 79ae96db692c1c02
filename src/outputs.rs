use crate::terms::Memberships;
use crate::variables::{Application, Assets, Credit, House, InterestRate, Location, MarketValue, Salary};

/// Crisp results of an evaluation
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Scores {
    /// 0 to 10
    pub house: f64,
    /// 0 to 10
    pub application: f64,
    /// 0 to 1000
    pub credit: f64,
}

/// The five inputs after fuzzification
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Fuzzified {
    pub market_value: Memberships<MarketValue>,
    pub location: Memberships<Location>,
    pub assets: Memberships<Assets>,
    pub salary: Memberships<Salary>,
    pub interest_rate: Memberships<InterestRate>,
}

/// Every intermediate stage of one evaluation, read-only.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Evaluation {
    pub fuzzified: Fuzzified,
    pub house: Memberships<House>,
    pub application: Memberships<Application>,
    pub credit: Memberships<Credit>,
    pub scores: Scores,
}
