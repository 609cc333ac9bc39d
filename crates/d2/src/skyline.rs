//! Piecewise-constant skyline functions.
//!
//! A skyline is a piecewise constant function defined on an interval of
//! non-negative numbers starting at zero. It is encoded as an ordered list
//! of breakpoints, where each breakpoint's key marks the end of an interval
//! of constancy and its value is the constant function value on that
//! interval. Read left to right, a skyline is the silhouette of all placed
//! boxes as seen from one axis.

/// An ordered-breakpoint step function over `[0, axis_length]`.
///
/// By construction the largest key always reaches the axis length of the
/// plate, so any look-ahead query past a valid position finds a defined
/// value.
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct Skyline {
    /// Breakpoints as (interval end, value), strictly increasing by key.
    steps: Vec<(f64, f64)>,
}

impl Skyline {
    /// Creates an empty skyline.
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Initializes the skyline for a single box resting at the origin.
    ///
    /// `extent` is the box projection along this skyline's axis, `value`
    /// the box extent along the perpendicular axis and `axis_length` the
    /// plate extent along this skyline's axis. When the box spans the whole
    /// axis the boundary breakpoint coincides with the box breakpoint and
    /// is not duplicated.
    pub(crate) fn seed(&mut self, extent: f64, value: f64, axis_length: f64) {
        self.steps.clear();
        self.steps.push((extent, value));
        if axis_length != extent {
            self.steps.push((axis_length, 0.0));
        }
    }

    /// Index of the first breakpoint with key strictly greater than `key`.
    fn upper_bound(&self, key: f64) -> usize {
        self.steps.partition_point(|&(end, _)| end <= key)
    }

    /// Index of the first breakpoint with key not less than `key`.
    fn lower_bound(&self, key: f64) -> usize {
        self.steps.partition_point(|&(end, _)| end < key)
    }

    /// Largest value among breakpoints with keys strictly beyond `key`.
    ///
    /// Returns `None` only when no breakpoint lies beyond `key`; for any
    /// query at most the axis length minus a positive box extent, the
    /// boundary breakpoint keeps the range non-empty.
    pub(crate) fn max_value_beyond(&self, key: f64) -> Option<f64> {
        let start = self.upper_bound(key);
        self.steps[start..].iter().map(|&(_, v)| v).reduce(f64::max)
    }

    /// Largest value among breakpoints whose keys fall in `(lo, hi]`,
    /// widened by one breakpoint past `hi`.
    ///
    /// The widening guarantees a non-empty query range even when no
    /// breakpoint falls strictly inside the span, picking up the value of
    /// the interval of constancy that covers `hi`.
    pub(crate) fn max_value_in_span(&self, lo: f64, hi: f64) -> Option<f64> {
        let start = self.upper_bound(lo);
        let stop = (self.lower_bound(hi) + 1).min(self.steps.len());
        if start >= stop {
            return None;
        }
        self.steps[start..stop]
            .iter()
            .map(|&(_, v)| v)
            .reduce(f64::max)
    }

    /// Incorporates a box silhouette covering `(lo, hi]` with the given
    /// perpendicular extent.
    ///
    /// All breakpoints inside the covered span are removed and replaced by
    /// two new ones: `(hi, value)` for the box itself and `(lo, carried)`
    /// preserving the previously obscured value to the left of the span.
    /// The second insert is skipped when `lo` already is a breakpoint.
    pub(crate) fn cover(&mut self, lo: f64, hi: f64, value: f64) {
        let start = self.upper_bound(lo);
        debug_assert!(start < self.steps.len(), "cover past skyline end");
        let carried = self.steps[start].1;

        let stop = self.upper_bound(hi);
        self.steps.drain(start..stop);

        self.steps.insert(start, (hi, value));
        if start == 0 || self.steps[start - 1].0 != lo {
            self.steps.insert(start, (lo, carried));
        }
    }

    /// The raw breakpoints, for consistency checks in tests.
    #[cfg(test)]
    pub(crate) fn breakpoints(&self) -> &[(f64, f64)] {
        &self.steps
    }
}
