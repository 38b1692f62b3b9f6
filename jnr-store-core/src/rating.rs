use std::fmt;

use crate::util::leading_number;

/// Largest rating scale a star bar is drawn for.
pub const MAX_STARS: u32 = 10;

/// A "value/max" rating such as `"4.5/5"`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rating {
    pub value: f64,
    pub max: u32,
}

/// One icon of a star bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Star {
    Full,
    Half,
    Empty,
}

impl Rating {
    /// Parse a rating string. Requires exactly one `/`, a numeric value, and
    /// a whole maximum from 1 to [`MAX_STARS`].
    pub fn parse(text: &str) -> Option<Self> {
        let (value, max) = text.split_once('/')?;
        if max.contains('/') {
            return None;
        }
        let value = leading_number(value)?;
        let max = leading_number(max)?.trunc();
        if !(1.0..=f64::from(MAX_STARS)).contains(&max) {
            return None;
        }
        Some(Self {
            value,
            max: max as u32,
        })
    }

    /// Star bar from 1 to `max`: full while `i <= value`, half while
    /// `i - 0.5 <= value`, empty after that.
    pub fn stars(&self) -> Vec<Star> {
        (1..=self.max)
            .map(|i| {
                let i = f64::from(i);
                if i <= self.value {
                    Star::Full
                } else if i - 0.5 <= self.value {
                    Star::Half
                } else {
                    Star::Empty
                }
            })
            .collect()
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}", self.value)
    }
}
