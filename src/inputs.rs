/// The five crisp values an application is scored from.
///
/// Parsing and range checks belong to whoever collects the values; any real
/// number is accepted here.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Inputs {
    /// House market value, designed for 0 to 1,000,000
    pub market_value: f64,
    /// House location score, 0 to 10
    pub location: f64,
    /// Applicant assets, designed for 0 to 1,000,000
    pub assets: f64,
    /// Applicant salary, 0 to 100,000
    pub salary: f64,
    /// Interest rate in percent, 0 to 10
    pub interest_rate: f64,
}

impl Inputs {
    pub fn new(market_value: f64, location: f64, assets: f64, salary: f64, interest_rate: f64) -> Self {
        Inputs {
            market_value,
            location,
            assets,
            salary,
            interest_rate,
        }
    }
}
