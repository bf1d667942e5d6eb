use crate::dice::Expression;
use crate::dice::Modifier;
use crate::error::Error;
use crate::error::Result;
use crate::roll;
use crate::roll::Outcome;
use crate::roll::Total;
use itertools::Itertools;
use tracing::debug;

pub(crate) mod limits {
    /// Dice thrown when no count is given
    pub(crate) const DEFAULT_THROWS: u64 = 1;
    /// Faces of a die when no sides are given
    pub(crate) const DEFAULT_SIDES: u64 = 100;
    pub(crate) const MAX_THROWS: u64 = 100;
    pub(crate) const MAX_SIDES: u64 = 1_000_000;
}

/// Dice count and sides once defaults are applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Shape {
    count: u64,
    sides: u64,
}

impl Shape {
    fn resolve(expr: &Expression) -> Result<Self> {
        let count = match expr.get_count() {
            Some(count) if count > 0 => count,
            _ => limits::DEFAULT_THROWS,
        };
        if count > limits::MAX_THROWS {
            return Err(Error::TooManyThrows(count));
        }
        let sides = match expr.get_sides() {
            Some(sides) if sides > 0 => sides,
            _ => limits::DEFAULT_SIDES,
        };
        if sides > limits::MAX_SIDES {
            return Err(Error::TooManySides(sides));
        }
        Ok(Shape { count, sides })
    }
}

/// Represent an evaluator
pub(crate) struct Evaluator;

impl Evaluator {
    pub(crate) fn eval<S: roll::Source>(expr: &Expression, source: &mut S) -> Result<Outcome> {
        let shape = Shape::resolve(expr)?;
        let modifier = expr.get_modifier();
        debug!("rolling {} of d{} {}", shape.count, shape.sides, modifier);
        let rolls = Self::roll(shape.count, shape.sides, source);
        let (display, total) = match (modifier, rolls.as_slice()) {
            (Modifier::Percent, &[tens, ones]) if shape.sides == 10 => {
                let total = tens * 10 + ones;
                (format!("{tens}+{ones}= {total}%"), Total::Percent(total))
            }
            // a lone percentile die reads as "42%", not "= 42%"
            (Modifier::Percent, &[value]) if shape.sides == 100 => {
                (format!("{value}%"), Total::Percent(value))
            }
            _ => Self::eval_sum(&rolls, modifier)?,
        };
        Ok(Outcome::new(rolls, total, display))
    }

    fn eval_sum(rolls: &[u64], modifier: Modifier) -> Result<(String, Total)> {
        let sum = rolls.iter().map(|&r| r as i64).sum::<i64>();
        let steps = rolls.iter().join("+");
        let (steps, total) = match modifier {
            Modifier::Add(n) => {
                (format!("({steps})+{n}"), Self::apply(sum, n, i64::checked_add)?)
            }
            Modifier::Subtract(n) => {
                (format!("({steps})-{n}"), Self::apply(sum, n, i64::checked_sub)?)
            }
            Modifier::None | Modifier::Percent => (steps, sum),
        };
        Ok((format!("{steps}= {total}"), Total::Sum(total)))
    }

    fn apply(sum: i64, magnitude: u64, op: fn(i64, i64) -> Option<i64>) -> Result<i64> {
        i64::try_from(magnitude)
            .ok()
            .and_then(|n| op(sum, n))
            .ok_or(Error::Overflow(magnitude))
    }

    pub(crate) fn roll<S: roll::Source>(amount: u64, sides: u64, source: &mut S) -> Vec<u64> {
        (0..amount).map(|_| source.throw(sides)).collect()
    }
}

/// Resolve defaults, check limits and throw the dice of `expr`
pub fn evaluate<S: roll::Source>(expr: &Expression, source: &mut S) -> Result<Outcome> {
    Evaluator::eval(expr, source)
}
