//! Explorer configuration.
//!
//! Everything except the family name is optional:
//!
//! ```json
//! {
//!   "family": "Gamma",
//!   "n_points": 200,
//!   "max_lattice_points": 2000,
//!   "x_range": [0.0, 20.0],
//!   "sliders": [
//!     { "start": 0.5, "end": 20.0, "value": 3.0 },
//!     { "start": 0.1, "end": 5.0, "value": 1.0, "step": 0.05 }
//!   ],
//!   "padding": { "fraction": 0.05, "max": 0.95 }
//! }
//! ```

use dx_core::errors::{Error, Result};
use dx_core::Real;
use dx_distributions::{Family, StaircasePadding};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Points on a continuous grid unless configured otherwise.
pub const DEFAULT_POINTS: usize = 400;

/// Most points on a discrete lattice unless configured otherwise.
pub const DEFAULT_MAX_LATTICE_POINTS: usize = 5_000;

/// Replacement slider range and starting value for one parameter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SliderOverride {
    /// Slider start.
    pub start: Real,
    /// Slider end.
    pub end: Real,
    /// Starting value.
    pub value: Real,
    /// Slider step; the table default when absent.
    #[serde(default)]
    pub step: Option<Real>,
}

/// Padding of the cumulative staircase beyond the outer lattice points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaddingConfig {
    /// Fraction of the lattice width.
    pub fraction: Real,
    /// Upper limit on the padding.
    pub max: Real,
}

impl Default for PaddingConfig {
    fn default() -> Self {
        let d = StaircasePadding::default();
        Self {
            fraction: d.fraction,
            max: d.max,
        }
    }
}

impl From<PaddingConfig> for StaircasePadding {
    fn from(p: PaddingConfig) -> Self {
        Self {
            fraction: p.fraction,
            max: p.max,
        }
    }
}

/// How to build an explorer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExplorerConfig {
    /// Family name, matched case-insensitively.
    pub family: String,
    /// Points on a continuous grid.
    pub n_points: usize,
    /// Most points on a discrete lattice. A wider visible range keeps the
    /// integers from its left edge and drops the rest.
    pub max_lattice_points: usize,
    /// Initial x range; the family's default range when absent.
    pub x_range: Option<[Real; 2]>,
    /// One override per parameter, replacing the table defaults.
    pub sliders: Option<Vec<SliderOverride>>,
    /// Staircase padding.
    pub padding: PaddingConfig,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            family: String::new(),
            n_points: DEFAULT_POINTS,
            max_lattice_points: DEFAULT_MAX_LATTICE_POINTS,
            x_range: None,
            sliders: None,
            padding: PaddingConfig::default(),
        }
    }
}

impl ExplorerConfig {
    /// Default configuration for `family`.
    pub fn new(family: impl Into<String>) -> Self {
        Self {
            family: family.into(),
            ..Self::default()
        }
    }

    /// Parse a JSON configuration.
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| Error::Config(e.to_string()))
    }

    /// Resolve the family and check every setting against it.
    pub fn validate(&self) -> Result<Family> {
        self.check().map_err(|e| {
            warn!(family = %self.family, error = %e, "configuration rejected");
            e
        })
    }

    fn check(&self) -> Result<Family> {
        if self.family.trim().is_empty() {
            return Err(Error::MissingConfiguration("family".into()));
        }
        let family: Family = self.family.parse()?;

        if self.n_points < 2 {
            return Err(Error::InvalidArgument(format!(
                "n_points must be at least 2, got {}",
                self.n_points
            )));
        }
        if self.max_lattice_points < 2 {
            return Err(Error::InvalidArgument(format!(
                "max_lattice_points must be at least 2, got {}",
                self.max_lattice_points
            )));
        }

        if let Some(overrides) = &self.sliders {
            let spec = family.spec();
            if overrides.len() != spec.n_params() {
                return Err(Error::InvalidArgument(format!(
                    "{family} takes {} parameters, got {} slider overrides",
                    spec.n_params(),
                    overrides.len()
                )));
            }
            for (o, p) in overrides.iter().zip(spec.params) {
                let ordered = o.start <= o.value && o.value <= o.end && o.start < o.end;
                if !ordered || !o.start.is_finite() || !o.end.is_finite() {
                    return Err(Error::InvalidArgument(format!(
                        "slider {} needs start ≤ value ≤ end, got {} ≤ {} ≤ {}",
                        p.symbol, o.start, o.value, o.end
                    )));
                }
                if !p.admits(o.start) || !p.admits(o.end) {
                    return Err(Error::InvalidArgument(format!(
                        "slider {} range [{}, {}] leaves [{}, {}]",
                        p.symbol, o.start, o.end, p.min_value, p.max_value
                    )));
                }
                if matches!(o.step, Some(s) if !(s > 0.0 && s.is_finite())) {
                    return Err(Error::InvalidArgument(format!(
                        "slider {} step must be positive",
                        p.symbol
                    )));
                }
            }
        }

        if let Some([start, end]) = self.x_range {
            if !(start.is_finite() && end.is_finite() && start < end) {
                return Err(Error::InvalidArgument(format!(
                    "x_range must be finite and increasing, got [{start}, {end}]"
                )));
            }
        }

        let PaddingConfig { fraction, max } = self.padding;
        if !(fraction >= 0.0 && fraction.is_finite() && max >= 0.0 && max.is_finite()) {
            return Err(Error::InvalidArgument(format!(
                "padding must be non-negative, got fraction {fraction}, max {max}"
            )));
        }

        Ok(family)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_json_takes_defaults() {
        let config = ExplorerConfig::from_json(r#"{ "family": "gamma" }"#).unwrap();
        assert_eq!(config.n_points, DEFAULT_POINTS);
        assert_eq!(config.max_lattice_points, DEFAULT_MAX_LATTICE_POINTS);
        assert_eq!(config.x_range, None);
        assert_eq!(config.padding, PaddingConfig::default());
        assert_eq!(config.validate().unwrap(), Family::Gamma);
    }

    #[test]
    fn full_json() {
        let text = r#"{
            "family": "Normal",
            "n_points": 50,
            "x_range": [-2.0, 2.0],
            "sliders": [
                { "start": -1.0, "end": 1.0, "value": 0.5 },
                { "start": 0.5, "end": 3.0, "value": 2.0, "step": 0.1 }
            ],
            "padding": { "fraction": 0.1 }
        }"#;
        let config = ExplorerConfig::from_json(text).unwrap();
        assert_eq!(config.x_range, Some([-2.0, 2.0]));
        assert_eq!(config.sliders.as_ref().unwrap()[1].step, Some(0.1));
        assert_eq!(config.padding.max, 0.95);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn malformed_json_is_a_config_error() {
        let err = ExplorerConfig::from_json("{ family: Normal").unwrap_err();
        assert!(matches!(err, Error::Config(_)), "got {err:?}");
    }

    #[test]
    fn missing_family() {
        let err = ExplorerConfig::from_json("{}").unwrap().validate().unwrap_err();
        assert_eq!(err, Error::MissingConfiguration("family".into()));
    }

    #[test]
    fn unknown_family() {
        let err = ExplorerConfig::new("Zipf").validate().unwrap_err();
        assert_eq!(err, Error::UnknownDistribution("Zipf".into()));
    }

    #[test]
    fn too_few_points() {
        let mut config = ExplorerConfig::new("Normal");
        config.n_points = 1;
        assert!(matches!(config.validate(), Err(Error::InvalidArgument(_))));

        let config =
            ExplorerConfig::from_json(r#"{ "family": "Poisson", "max_lattice_points": 0 }"#)
                .unwrap();
        assert!(matches!(config.validate(), Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn override_count_and_order() {
        let mut config = ExplorerConfig::new("Normal");
        config.sliders = Some(vec![SliderOverride {
            start: 0.0,
            end: 1.0,
            value: 0.5,
            step: None,
        }]);
        assert!(matches!(config.validate(), Err(Error::InvalidArgument(_))));

        let bad = SliderOverride {
            start: 0.0,
            end: 1.0,
            value: 2.0,
            step: None,
        };
        config.sliders = Some(vec![bad, bad]);
        assert!(matches!(config.validate(), Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn override_outside_legal_range() {
        let mut config = ExplorerConfig::new("Normal");
        config.sliders = Some(vec![
            SliderOverride {
                start: -1.0,
                end: 1.0,
                value: 0.0,
                step: None,
            },
            SliderOverride {
                start: -1.0,
                end: 1.0,
                value: 0.5,
                step: None,
            },
        ]);
        assert!(matches!(config.validate(), Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn bad_range_and_padding() {
        let mut config = ExplorerConfig::new("Normal");
        config.x_range = Some([1.0, 1.0]);
        assert!(config.validate().is_err());
        config.x_range = None;
        config.padding.fraction = -0.1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn serializes_back_to_json() {
        let config = ExplorerConfig::new("Poisson");
        let text = serde_json::to_string(&config).unwrap();
        assert_eq!(ExplorerConfig::from_json(&text).unwrap(), config);
    }
}
