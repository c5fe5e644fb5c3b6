//! Parameter sliders.
//!
//! A slider carries its visible range and current value together with the
//! legal range of the parameter behind it. Range edits arrive as text from
//! the start and end boxes next to each slider.

use dx_core::Real;
use dx_distributions::{ParamSpec, Role};

use crate::config::SliderOverride;
use crate::format::round_to_precision;

/// Which end of a slider's range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    /// Lower end.
    Start,
    /// Upper end.
    End,
}

/// Outcome of editing a slider bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundEdit {
    /// The text was rejected; the bound keeps its previous value.
    Reverted,
    /// The bound moved and the value still lies inside the range.
    Moved,
    /// The bound moved past the value, which was clamped to it.
    ValueClamped,
}

/// One parameter slider.
#[derive(Debug, Clone, PartialEq)]
pub struct Slider {
    symbol: &'static str,
    role: Role,
    start: Real,
    end: Real,
    value: Real,
    step: Real,
    min_value: Real,
    max_value: Real,
    integer: bool,
}

impl Slider {
    /// A slider at the table defaults for `spec`.
    pub fn from_spec(spec: &ParamSpec) -> Self {
        Self {
            symbol: spec.symbol,
            role: spec.role,
            start: spec.start,
            end: spec.end,
            value: spec.value,
            step: spec.step,
            min_value: spec.min_value,
            max_value: spec.max_value,
            integer: spec.integer,
        }
    }

    pub(crate) fn apply_override(&mut self, o: &SliderOverride) {
        self.start = o.start;
        self.end = o.end;
        self.value = o.value;
        if let Some(step) = o.step {
            self.step = step;
        }
    }

    /// Parameter symbol.
    pub fn symbol(&self) -> &'static str {
        self.symbol
    }

    /// Parameter role.
    pub fn role(&self) -> Role {
        self.role
    }

    /// Lower end of the slider.
    pub fn start(&self) -> Real {
        self.start
    }

    /// Upper end of the slider.
    pub fn end(&self) -> Real {
        self.end
    }

    /// Current value.
    pub fn value(&self) -> Real {
        self.value
    }

    /// Slider step.
    pub fn step(&self) -> Real {
        self.step
    }

    /// Whether the parameter takes integer values only.
    pub fn is_integer(&self) -> bool {
        self.integer
    }

    /// Whether `v` lies within the slider's range.
    pub fn contains(&self, v: Real) -> bool {
        v >= self.start && v <= self.end
    }

    /// Move the slider, clamping into its range. Returns the stored value.
    pub fn set_value(&mut self, v: Real) -> Real {
        self.value = v.clamp(self.start, self.end);
        self.value
    }

    /// Apply text typed into a bound box.
    ///
    /// Unparseable text, or a bound that would cross the other end, is
    /// rejected. Otherwise the bound is limited to the parameter's legal
    /// range, integer parameters get a floored start or ceiled end, and a
    /// value left outside the new range is clamped into it.
    pub fn edit_bound(&mut self, bound: Bound, text: &str) -> BoundEdit {
        let parsed = match text.trim().parse::<Real>() {
            Ok(v) if v.is_finite() => v,
            _ => return BoundEdit::Reverted,
        };
        let (start, end) = match bound {
            Bound::Start => {
                let s = parsed.max(self.min_value);
                (if self.integer { s.floor() } else { s }, self.end)
            }
            Bound::End => {
                let e = parsed.min(self.max_value);
                (self.start, if self.integer { e.ceil() } else { e })
            }
        };
        if start >= end {
            return BoundEdit::Reverted;
        }
        self.start = start;
        self.end = end;

        let clamped = self.value.clamp(start, end);
        if clamped == self.value {
            BoundEdit::Moved
        } else {
            self.value = clamped;
            BoundEdit::ValueClamped
        }
    }

    /// Put a solved value on the slider, widening the range around it if
    /// it falls outside.
    ///
    /// Signed parameters get `value ± half_width`; positive ones get
    /// `[4v/1001, 4v]`. New bounds are rounded to four significant figures.
    pub(crate) fn recentre(&mut self, value: Real, half_width: Real) {
        if !self.contains(value) {
            let (start, end) = if self.role.is_signed() || self.min_value < 0.0 {
                (value - half_width, value + half_width)
            } else {
                (4.0 * value / 1001.0, 4.0 * value)
            };
            let (start, end) = (round_to_precision(start, 4), round_to_precision(end, 4));
            if start.is_finite() && end.is_finite() && start < end {
                self.start = start.min(value);
                self.end = end.max(value);
            }
        }
        self.value = value;
    }
}
