//! Numeric counter tween with ease-out cubic timing.

use web_time::Duration;

use super::traits::{progress, AnimationRoutine, Prepared, Sample};
use crate::animation::driver::MotionDriver;
use crate::error::RoutineError;
use crate::node::{CounterFormat, Node, NodeVisual};
use crate::util::easing::EasingFunction;

/// Counts from 0 to the node's target value.
///
/// Intermediate frames show `floor(target * eased)`; the final frame shows
/// the exact target so float rounding never leaks into the last value.
#[derive(Debug, Clone)]
pub struct Counter {
    /// Default tween length.
    pub duration: Duration,
    /// Currency prefix for [`CounterFormat::Currency`].
    pub currency_symbol: String,
}

impl Counter {
    /// Counter with the given default length and currency prefix.
    #[must_use]
    pub fn new(duration: Duration, currency_symbol: impl Into<String>) -> Self {
        Self {
            duration,
            currency_symbol: currency_symbol.into(),
        }
    }

    /// Render `value` in `format`.
    #[must_use]
    pub fn format_value(&self, value: f64, format: CounterFormat) -> String {
        match format {
            CounterFormat::Plain => format_number(value, false),
            CounterFormat::Percentage => {
                format!("{}%", format_number(value, false))
            }
            CounterFormat::Currency => {
                let digits = format_number(value.abs(), true);
                if value < 0.0 {
                    format!("-{}{digits}", self.currency_symbol)
                } else {
                    format!("{}{digits}", self.currency_symbol)
                }
            }
        }
    }

    fn target(node: &Node) -> Result<f64, RoutineError> {
        let target = node
            .params()
            .target
            .ok_or(RoutineError::MissingParameter("target"))?;
        if target.is_finite() {
            Ok(target)
        } else {
            Err(RoutineError::InvalidParameter {
                name: "target",
                reason: format!("{target} is not finite"),
            })
        }
    }

    fn with_text(node: &Node, text: String) -> NodeVisual {
        NodeVisual {
            text: Some(text),
            ..node.visual().clone()
        }
    }
}

impl Default for Counter {
    fn default() -> Self {
        Self::new(Duration::from_millis(2000), "$")
    }
}

/// Integers print without a fractional part; other values print as-is.
fn format_number(value: f64, grouped: bool) -> String {
    if value.fract() != 0.0 {
        return value.to_string();
    }
    let raw = format!("{value:.0}");
    if !grouped {
        return raw;
    }
    let (sign, digits) = raw
        .strip_prefix('-')
        .map_or(("", raw.as_str()), |d| ("-", d));
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    format!("{sign}{out}")
}

impl AnimationRoutine for Counter {
    fn name(&self) -> &'static str {
        "counter"
    }

    fn initial(&self, node: &Node) -> NodeVisual {
        if node.params().target.is_none() {
            return node.visual().clone();
        }
        Self::with_text(node, self.format_value(0.0, node.params().format))
    }

    fn prepare(&self, node: &mut Node) -> Result<Prepared, RoutineError> {
        Self::target(node).map(|_| Prepared::Ready)
    }

    fn sample(
        &self,
        node: &Node,
        elapsed: Duration,
        driver: &dyn MotionDriver,
    ) -> Result<Sample, RoutineError> {
        let target = Self::target(node)?;
        let format = node.params().format;
        let p = progress(elapsed, self.duration(node));
        if p >= 1.0 {
            return Ok(Sample {
                visual: Self::with_text(node, self.format_value(target, format)),
                complete: true,
            });
        }
        let eased = f64::from(driver.ease(EasingFunction::CubicOut, p));
        let value = (target * eased).floor();
        Ok(Sample {
            visual: Self::with_text(node, self.format_value(value, format)),
            complete: false,
        })
    }

    fn finish(&self, node: &mut Node) {
        let text = Self::target(node)
            .ok()
            .map(|t| self.format_value(t, node.params().format));
        // Without a usable target the host's own text stays in place
        let visual = node.visual_mut();
        visual.text = text;
        visual.opacity = 1.0;
    }

    fn duration(&self, node: &Node) -> Duration {
        node.params().duration.unwrap_or(self.duration)
    }
}
