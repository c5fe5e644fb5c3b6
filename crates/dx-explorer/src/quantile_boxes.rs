//! Text state of the quantile setter: the x and p boxes and the message
//! shown under them.

use dx_core::Real;
use dx_distributions::quantile::parse_number;
use dx_distributions::{quantile_count, Family};

use crate::format::to_precision;

/// Message shown when the solver cannot match the targets.
pub const FAILURE_MESSAGE: &str = "Failed to find parameters to match quantiles.";

/// Probabilities the p boxes start with.
pub fn default_probabilities(n: usize) -> Vec<Real> {
    match n {
        1 => vec![0.95],
        2 => vec![0.05, 0.95],
        _ => Vec::new(),
    }
}

/// `"α = 2.886, β = 1.033"` over the parameters the setter solved for.
pub fn solved_message(family: Family, params: &[Real]) -> String {
    let spec = family.spec();
    spec.active_params()
        .into_iter()
        .map(|i| format!("{} = {}", spec.params[i].symbol, to_precision(params[i], 4)))
        .collect::<Vec<_>>()
        .join(", ")
}

/// The quantile boxes.
///
/// While the setter is inactive the x boxes follow the current parameters,
/// showing `ppf(pᵢ)` to four significant figures. Once the user types a
/// target the setter becomes active and the boxes keep what was typed.
#[derive(Debug, Clone, PartialEq)]
pub struct QuantileBoxes {
    active: bool,
    x: Vec<String>,
    p: Vec<String>,
    message: String,
}

impl QuantileBoxes {
    /// Boxes for `family`, tracking `params`.
    pub fn new(family: Family, params: &[Real]) -> Self {
        let p = default_probabilities(quantile_count(family))
            .into_iter()
            .map(|p| p.to_string())
            .collect::<Vec<_>>();
        let mut boxes = Self {
            active: false,
            x: vec![String::new(); p.len()],
            p,
            message: String::new(),
        };
        boxes.track(family, params);
        boxes
    }

    /// Whether the setter is active.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Text of the x boxes.
    pub fn x(&self) -> &[String] {
        &self.x
    }

    /// Text of the p boxes.
    pub fn p(&self) -> &[String] {
        &self.p
    }

    /// Message under the boxes; empty when there is nothing to report.
    pub fn message(&self) -> &str {
        &self.message
    }

    pub(crate) fn set_active(&mut self, active: bool, family: Family, params: &[Real]) {
        self.active = active;
        if !active {
            self.message.clear();
            self.track(family, params);
        }
    }

    /// Refresh the x boxes from `params` unless the setter is active.
    ///
    /// A box whose p text does not parse keeps its x text.
    pub(crate) fn track(&mut self, family: Family, params: &[Real]) {
        if self.active {
            return;
        }
        for (x, p) in self.x.iter_mut().zip(&self.p) {
            if let Ok(p) = parse_number(p) {
                *x = to_precision(family.ppf(p, params), 4);
            }
        }
    }

    pub(crate) fn enter(&mut self, x: Vec<String>, p: Vec<String>) {
        self.active = true;
        self.x = x;
        self.p = p;
    }

    pub(crate) fn set_message(&mut self, message: impl Into<String>) {
        self.message = message.into();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boxes_track_normal_quantiles() {
        let boxes = QuantileBoxes::new(Family::Normal, &[0.0, 1.0]);
        assert!(!boxes.is_active());
        assert_eq!(boxes.p(), &["0.05", "0.95"]);
        assert_eq!(boxes.x(), &["-1.645", "1.645"]);
    }

    #[test]
    fn one_box_for_one_free_parameter() {
        let boxes = QuantileBoxes::new(Family::Exponential, &[1.0]);
        assert_eq!(boxes.p(), &["0.95"]);
        assert_eq!(boxes.x(), &["2.996"]);
    }

    #[test]
    fn discrete_families_have_no_boxes() {
        let boxes = QuantileBoxes::new(Family::Poisson, &[5.0]);
        assert!(boxes.x().is_empty() && boxes.p().is_empty());
    }

    #[test]
    fn active_boxes_keep_their_text() {
        let mut boxes = QuantileBoxes::new(Family::Normal, &[0.0, 1.0]);
        boxes.enter(vec!["1".into(), "2".into()], vec!["0.1".into(), "0.9".into()]);
        boxes.track(Family::Normal, &[5.0, 1.0]);
        assert_eq!(boxes.x(), &["1", "2"]);

        boxes.set_message("something");
        boxes.set_active(false, Family::Normal, &[0.0, 1.0]);
        assert_eq!(boxes.message(), "");
        assert_eq!(boxes.x(), &["-1.282", "1.282"]);
    }

    #[test]
    fn message_lists_free_parameters() {
        let msg = solved_message(Family::Gamma, &[2.886_175, 1.032_756]);
        assert_eq!(msg, "α = 2.886, β = 1.033");
        // ν is held fixed for the Student-t.
        let msg = solved_message(Family::StudentT, &[3.0, 0.5, 2.0]);
        assert_eq!(msg, "μ = 0.5000, σ = 2.000");
    }
}
