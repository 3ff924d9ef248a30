use crate::format::{precision_of, round_to};

/// Computes the next value of the progression from the current one.
pub trait StepFunction {
    fn apply(&self, value: f64) -> f64;
}

impl<F> StepFunction for F
where
    F: Fn(f64) -> f64,
{
    fn apply(&self, value: f64) -> f64 {
        self(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Increment,
    Decrement,
}

impl Direction {
    fn signum(self) -> f64 {
        match self {
            Direction::Increment => 1.0,
            Direction::Decrement => -1.0,
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum StepError {
    #[error("no step value given")]
    Empty,
    #[error("'{0}' is not a number")]
    Invalid(String),
    #[error("step value must not be zero")]
    Zero,
    #[error("step value must be finite")]
    NotFinite,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Step {
    /// Add a constant delta.
    Fixed(f64),
    /// Add a user supplied delta, rounding every result to `precision`
    /// decimals when the input had a fractional part.
    Custom { delta: f64, precision: Option<u32> },
}

impl Step {
    pub fn increment(by: f64) -> Self {
        Step::Fixed(by)
    }

    pub fn decrement(by: f64) -> Self {
        Step::Fixed(-by)
    }

    /// Build a step from free-form input such as `10`, `-3` or `0.25`.
    ///
    /// The input is signed: a negative value given to an increment walks
    /// downwards. Empty, zero and non-numeric input are rejected.
    pub fn parse(input: &str, direction: Direction) -> Result<Self, StepError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(StepError::Empty);
        }
        let value: f64 = trimmed
            .parse()
            .map_err(|_| StepError::Invalid(trimmed.to_string()))?;
        if !value.is_finite() {
            return Err(StepError::NotFinite);
        }
        if value == 0.0 {
            return Err(StepError::Zero);
        }
        Ok(Step::Custom {
            delta: value * direction.signum(),
            precision: precision_of(trimmed),
        })
    }

    pub fn delta(&self) -> f64 {
        match *self {
            Step::Fixed(delta) | Step::Custom { delta, .. } => delta,
        }
    }
}

impl StepFunction for Step {
    fn apply(&self, value: f64) -> f64 {
        match *self {
            Step::Fixed(delta) => value + delta,
            Step::Custom {
                delta,
                precision: Some(precision),
            } => round_to(value + delta, precision),
            Step::Custom {
                delta,
                precision: None,
            } => value + delta,
        }
    }
}
