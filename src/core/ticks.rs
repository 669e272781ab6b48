use crate::core::range::Range;

/// Hard cap on enumerated ticks, protecting against pathological step/range
/// combinations fed in from outside the engine.
const MAX_TICKS: usize = 4096;

/// Tick step, label precision, and aligned start position for one axis.
///
/// The step targets `divisions` intervals across the range and is floored to
/// a "round" value: for steps below 1 the raw step is scaled into `[1, 10)`
/// by a power of ten, floored, and scaled back, and that power of ten also
/// becomes the decimal-place count for label formatting. The first tick is
/// pulled back to a multiple of the step (true modulo, so negative minima
/// align correctly too).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickPlan {
    step: f64,
    decimals: u32,
    first: f64,
    limit: f64,
}

impl TickPlan {
    /// Plans ticks for `range`. The range width must be positive; the
    /// engine's degenerate-range policy guarantees that.
    #[must_use]
    pub fn for_range(range: Range, divisions: usize) -> Self {
        let width = range.width();
        debug_assert!(width.is_finite() && width > 0.0);

        let raw = width / divisions.max(1) as f64;
        let (step, decimals) = if raw < 1.0 {
            let digits = (-raw.log10()).ceil() as i32;
            let scale = 10f64.powi(digits);
            let step = (raw * scale).floor().max(1.0);
            (step / scale, digits as u32)
        } else {
            (raw.floor(), 0)
        };
        Self::aligned(range, step, decimals)
    }

    fn aligned(range: Range, step: f64, decimals: u32) -> Self {
        let first = range.min() - range.min().rem_euclid(step);
        Self {
            step,
            decimals,
            first,
            // half a step of slack so a tick sitting on the upper bound
            // survives floating-point noise
            limit: range.max() + step * 0.5,
        }
    }

    /// Returns a plan whose step is an integer multiple of the current one,
    /// at least `min_step` wide. Used to thin horizontal ticks whose labels
    /// would otherwise overlap.
    #[must_use]
    pub fn widened_to(self, range: Range, min_step: f64) -> Self {
        if !min_step.is_finite() || min_step <= self.step {
            return self;
        }
        let factor = (min_step / self.step).ceil();
        Self::aligned(range, self.step * factor, self.decimals)
    }

    #[must_use]
    pub fn step(self) -> f64 {
        self.step
    }

    #[must_use]
    pub fn decimals(self) -> u32 {
        self.decimals
    }

    #[must_use]
    pub fn first(self) -> f64 {
        self.first
    }

    /// Enumerates tick values from the aligned start past the range maximum.
    /// Callers drop ticks that project outside the plot area.
    pub fn ticks(self) -> impl Iterator<Item = f64> {
        let count = if self.step.is_finite() && self.step > 0.0 && self.limit >= self.first {
            (((self.limit - self.first) / self.step).floor() as usize).saturating_add(1)
        } else {
            0
        };
        let count = count.min(MAX_TICKS);
        (0..count).map(move |i| self.first + self.step * i as f64)
    }

    /// Formats a tick value with the plan's decimal-place count.
    #[must_use]
    pub fn format_label(self, value: f64) -> String {
        // avoid a "-0" label when a tick lands on a tiny negative residue
        let value = if value.abs() < self.step * 1e-9 {
            0.0
        } else {
            value
        };
        format!("{value:.prec$}", prec = self.decimals as usize)
    }
}
