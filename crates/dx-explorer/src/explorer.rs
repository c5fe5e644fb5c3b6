//! The explorer: slider state, visible ranges and the two curve sources,
//! driven by UI events.
//!
//! Every event is applied to the state first. If it leaves the explorer in
//! [`ExplorerState::Recompute`], one recompute runs before the event returns:
//! the grid is rebuilt if the range moved, both curves are evaluated, and
//! each source is replaced and notifies its observers.

use std::rc::Rc;

use dx_core::errors::{Error, Result};
use dx_core::{Real, Stopwatch};
use dx_distributions::{
    default_range, set_quantiles, staircase, Family, Kind, ParameterVector, QuantileTarget,
    StaircasePadding, SummationSettings,
};
use tracing::{debug, instrument};

use crate::config::ExplorerConfig;
use crate::curve::{CurveData, CurveSource};
use crate::grid::EvaluationGrid;
use crate::quantile_boxes::{solved_message, QuantileBoxes, FAILURE_MESSAGE};
use crate::sliders::{Bound, BoundEdit, Slider};

/// Where the explorer is in its update cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExplorerState {
    /// Curves match the current state.
    Idle,
    /// State changed; curves are stale until the next recompute.
    Recompute,
}

/// An input from the UI host.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// A slider moved.
    SliderMoved {
        /// Parameter index.
        index: usize,
        /// New value.
        value: Real,
    },
    /// The visible x range changed (pan or zoom).
    RangeChanged {
        /// Left edge.
        start: Real,
        /// Right edge.
        end: Real,
    },
    /// Text in the quantile boxes was edited.
    QuantileEdited {
        /// Text of the x boxes.
        x: Vec<String>,
        /// Text of the p boxes.
        p: Vec<String>,
    },
    /// Text in a slider's start or end box was edited.
    SliderBoundEdited {
        /// Parameter index.
        index: usize,
        /// Which end.
        bound: Bound,
        /// Text typed.
        text: String,
    },
    /// The reset button.
    Reset,
}

/// Visible y ranges of the two plots.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YRanges {
    /// Probability (mass or density) plot.
    pub probability: (Real, Real),
    /// Cumulative plot.
    pub cumulative: (Real, Real),
}

impl Default for YRanges {
    fn default() -> Self {
        Self {
            probability: UNIT_Y_RANGE,
            cumulative: UNIT_Y_RANGE,
        }
    }
}

const UNIT_Y_RANGE: (Real, Real) = (-0.04, 1.04);

impl YRanges {
    /// Ranges fitted to a probability curve.
    ///
    /// The cumulative plot always shows `[-0.04, 1.04]`. The probability
    /// plot shows the same margins around the curve's largest finite value.
    pub fn fitted(probability: &CurveData) -> Self {
        let probability = match probability.max_finite() {
            Some(m) if m > 0.0 => (-0.04 * m, 1.04 * m),
            _ => UNIT_Y_RANGE,
        };
        Self {
            probability,
            cumulative: UNIT_Y_RANGE,
        }
    }
}

/// Interactive explorer for one distribution family.
#[derive(Debug)]
pub struct Explorer {
    family: Family,
    sliders: Vec<Slider>,
    n_points: usize,
    max_lattice_points: usize,
    padding: StaircasePadding,
    summation: SummationSettings,
    x_range: (Real, Real),
    y_ranges: YRanges,
    grid: Option<EvaluationGrid>,
    probability: Rc<CurveSource>,
    cumulative: Rc<CurveSource>,
    quantiles: QuantileBoxes,
    state: ExplorerState,
}

impl Explorer {
    /// Build an explorer and compute its first curves.
    ///
    /// Fails if the configuration does not validate, or if no x range was
    /// given and the starting parameters have no default range.
    pub fn new(config: &ExplorerConfig) -> Result<Self> {
        let family = config.validate()?;
        let spec = family.spec();
        let mut sliders: Vec<Slider> = spec.params.iter().map(Slider::from_spec).collect();
        if let Some(overrides) = &config.sliders {
            for (slider, o) in sliders.iter_mut().zip(overrides) {
                slider.apply_override(o);
            }
        }
        let params: Vec<Real> = sliders.iter().map(Slider::value).collect();

        let x_range = match config.x_range {
            Some([start, end]) => (start, end),
            None => default_range(family, &params).ok_or_else(|| {
                Error::InvalidArgument(format!(
                    "{family} has no default range at {params:?}"
                ))
            })?,
        };

        let mut explorer = Self {
            family,
            quantiles: QuantileBoxes::new(family, &params),
            sliders,
            n_points: config.n_points,
            max_lattice_points: config.max_lattice_points,
            padding: config.padding.into(),
            summation: SummationSettings::default(),
            x_range,
            y_ranges: YRanges::default(),
            grid: None,
            probability: Rc::new(CurveSource::new()),
            cumulative: Rc::new(CurveSource::new()),
            state: ExplorerState::Recompute,
        };
        explorer.settle();
        explorer.fit_y_ranges();
        Ok(explorer)
    }

    /// An explorer for `family` at the table defaults.
    pub fn for_family(family: Family) -> Result<Self> {
        Self::new(&ExplorerConfig::new(family.name()))
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// The family being explored.
    pub fn family(&self) -> Family {
        self.family
    }

    /// Current update state; `Idle` between events.
    pub fn state(&self) -> ExplorerState {
        self.state
    }

    /// Slider state, one per parameter.
    pub fn sliders(&self) -> &[Slider] {
        &self.sliders
    }

    /// Current parameter values read off the sliders.
    pub fn params(&self) -> ParameterVector {
        ParameterVector::new(self.sliders.iter().map(Slider::value).collect())
    }

    /// Visible x range.
    pub fn x_range(&self) -> (Real, Real) {
        self.x_range
    }

    /// Visible y ranges.
    pub fn y_ranges(&self) -> YRanges {
        self.y_ranges
    }

    /// The probability mass or density curve.
    pub fn probability(&self) -> &Rc<CurveSource> {
        &self.probability
    }

    /// The cumulative curve; a staircase for discrete families.
    pub fn cumulative(&self) -> &Rc<CurveSource> {
        &self.cumulative
    }

    /// Quantile boxes and setter message.
    pub fn quantiles(&self) -> &QuantileBoxes {
        &self.quantiles
    }

    /// Switch the quantile setter on or off.
    ///
    /// Switching off clears the message and puts the x boxes back on
    /// `ppf(pᵢ)` of the current parameters.
    pub fn set_quantile_setter_active(&mut self, active: bool) {
        let params = self.params();
        self.quantiles.set_active(active, self.family, &params);
    }

    // ── Events ────────────────────────────────────────────────────────────────

    /// Apply `event`, recomputing once if it changed what is drawn.
    ///
    /// Errors are reserved for events the host should never send, such as
    /// a slider index out of range. Rejected user input is reported through
    /// the quantile message or by leaving a bound unchanged.
    pub fn handle(&mut self, event: Event) -> Result<()> {
        match event {
            Event::SliderMoved { index, value } => self.move_slider(index, value)?,
            Event::RangeChanged { start, end } => self.change_range(start, end)?,
            Event::SliderBoundEdited { index, bound, text } => {
                let slider = self.slider_mut(index)?;
                if slider.edit_bound(bound, &text) == BoundEdit::ValueClamped {
                    self.state = ExplorerState::Recompute;
                }
            }
            Event::QuantileEdited { x, p } => {
                if self.match_quantiles(x, p) {
                    self.settle();
                    self.fit_y_ranges();
                }
            }
            Event::Reset => {
                let params = self.params();
                if let Some(range) = default_range(self.family, &params) {
                    self.x_range = range;
                }
                self.state = ExplorerState::Recompute;
                self.settle();
                self.fit_y_ranges();
            }
        }
        self.settle();
        Ok(())
    }

    /// Apply several edits with a single recompute at the end.
    ///
    /// The recompute runs whether or not the closure succeeds, so the
    /// curves always reflect whatever edits were applied.
    pub fn batch<R>(&mut self, edits: impl FnOnce(&mut Batch<'_>) -> Result<R>) -> Result<R> {
        let result = edits(&mut Batch { explorer: self });
        self.state = ExplorerState::Recompute;
        self.settle();
        result
    }

    fn slider_mut(&mut self, index: usize) -> Result<&mut Slider> {
        let n = self.sliders.len();
        self.sliders.get_mut(index).ok_or_else(|| {
            Error::InvalidArgument(format!("slider index {index} out of range for {n} sliders"))
        })
    }

    fn move_slider(&mut self, index: usize, value: Real) -> Result<()> {
        self.slider_mut(index)?.set_value(value);
        self.state = ExplorerState::Recompute;
        Ok(())
    }

    fn change_range(&mut self, start: Real, end: Real) -> Result<()> {
        if !(start.is_finite() && end.is_finite() && start < end) {
            return Err(Error::InvalidArgument(format!(
                "x range must be finite and increasing, got [{start}, {end}]"
            )));
        }
        self.x_range = (start, end);
        self.state = ExplorerState::Recompute;
        Ok(())
    }

    /// Run the quantile setter on the typed targets. Returns whether the
    /// parameters changed.
    fn match_quantiles(&mut self, x: Vec<String>, p: Vec<String>) -> bool {
        let target = QuantileTarget::parse(self.family, &x, &p);
        self.quantiles.enter(x, p);
        let target = match target {
            Ok(t) => t,
            Err(e) => {
                self.quantiles.set_message(e.to_string());
                return false;
            }
        };

        let params = match set_quantiles(self.family, &target, &self.params()) {
            Ok(params) => params,
            Err(_) => {
                self.quantiles.set_message(FAILURE_MESSAGE);
                return false;
            }
        };

        let spec = self.family.spec();
        let half_width =
            (self.family.ppf(0.975, &params) - self.family.ppf(0.025, &params)) / 2.0;
        for i in spec.active_params() {
            self.sliders[i].recentre(params[i], half_width);
        }
        self.quantiles
            .set_message(solved_message(self.family, &params));
        if let Some(range) = default_range(self.family, &params) {
            self.x_range = range;
        }
        self.state = ExplorerState::Recompute;
        true
    }

    fn fit_y_ranges(&mut self) {
        self.y_ranges = YRanges::fitted(&self.probability.data());
    }

    fn settle(&mut self) {
        if self.state == ExplorerState::Recompute {
            self.recompute();
            self.state = ExplorerState::Idle;
        }
    }

    // ── Recompute ─────────────────────────────────────────────────────────────

    #[instrument(skip(self), fields(family = %self.family))]
    fn recompute(&mut self) {
        let started = Stopwatch::start();
        let params = self.params();
        let family = self.family;

        let stale = self
            .grid
            .as_ref()
            .map_or(true, |g| !g.matches(self.x_range, self.n_points));
        if stale {
            self.grid = Some(EvaluationGrid::build(
                family,
                self.x_range,
                self.n_points,
                self.max_lattice_points,
            ));
        }
        let x: Vec<Real> = self
            .grid
            .as_ref()
            .map(|g| g.x().to_vec())
            .unwrap_or_default();

        let (probability, cumulative) = match family.kind() {
            Kind::Discrete => {
                let y = x.iter().map(|&n| family.prob(n, &params)).collect();
                let acc = family.cdf_on_lattice(&x, &params, &self.summation);
                let (cx, cy) = staircase(&x, &acc, &self.padding);
                (CurveData { x, y }, CurveData { x: cx, y: cy })
            }
            Kind::Continuous => {
                let y = x
                    .iter()
                    .map(|&v| family.prob(v, &params))
                    .map(|d| if d.is_finite() { d } else { Real::NAN })
                    .collect();
                let cy = x.iter().map(|&v| family.cdf(v, &params)).collect();
                (
                    CurveData { x: x.clone(), y },
                    CurveData { x, y: cy },
                )
            }
        };
        let points = probability.x.len();

        self.probability.replace(probability);
        self.cumulative.replace(cumulative);
        self.quantiles.track(family, &params);

        debug!(
            points,
            rebuilt_grid = stale,
            elapsed_us = started.elapsed_us(),
            "recomputed curves"
        );
    }
}

/// Edits applied inside [`Explorer::batch`].
#[derive(Debug)]
pub struct Batch<'a> {
    explorer: &'a mut Explorer,
}

impl Batch<'_> {
    /// Move a slider.
    pub fn set_slider(&mut self, index: usize, value: Real) -> Result<()> {
        self.explorer.move_slider(index, value)
    }

    /// Change the visible x range.
    pub fn set_range(&mut self, start: Real, end: Real) -> Result<()> {
        self.explorer.change_range(start, end)
    }

    /// Set the y ranges.
    pub fn set_y_ranges(&mut self, y_ranges: YRanges) {
        self.explorer.y_ranges = y_ranges;
    }

    /// Current parameter values, including edits made so far.
    pub fn params(&self) -> ParameterVector {
        self.explorer.params()
    }
}
