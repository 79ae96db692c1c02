use crate::error::{Error, Result};

/// Number of output grid samples used unless configured otherwise.
pub const DEFAULT_RESOLUTION: usize = 1000;

/// Configuration of an evaluation.
///
/// # Examples
///
/// ```
/// use fuzzy_credit::InferenceConfig;
///
/// let config = InferenceConfig::default().with_resolution(2000);
///
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct InferenceConfig {
    /// Evenly spaced samples per output range, endpoints included.
    ///
    /// Scores are a discrete centroid, so changing this changes them slightly.
    pub resolution: usize,
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            resolution: DEFAULT_RESOLUTION,
        }
    }
}

impl InferenceConfig {
    pub fn with_resolution(mut self, resolution: usize) -> Self {
        self.resolution = resolution;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.resolution < 2 {
            return Err(Error::InvalidResolution(self.resolution));
        }

        Ok(())
    }
}

#[test]
fn test_default_config() {
    let config = InferenceConfig::default();

    assert_eq!(config.resolution, 1000);
    assert!(config.validate().is_ok());
}

#[test]
fn test_validate_resolution() {
    assert_eq!(
        InferenceConfig::default().with_resolution(1).validate(),
        Err(Error::InvalidResolution(1))
    );
    assert!(InferenceConfig::default().with_resolution(0).validate().is_err());
    assert!(InferenceConfig::default().with_resolution(2).validate().is_ok());
}
