use crate::common::{Int, NonZeroUInt, UInt};
use rand::{
    distributions::{DistIter, Distribution, Uniform},
    Rng,
};

/// A source of uniformly distributed die rolls.
pub trait Roller {
    type RollIter<'a>: Iterator<Item = UInt> + 'a
    where
        Self: 'a;

    /// Rolls a single die, returning a value in `1..=sides`.
    fn roll(&mut self, sides: NonZeroUInt) -> UInt;

    fn roll_iter(&mut self, num: usize, sides: NonZeroUInt) -> Self::RollIter<'_>;

    /// Returns a value between `min` and `max` inclusive. The bounds may be
    /// given in either order.
    fn roll_range(&mut self, min: Int, max: Int) -> Int;
}

impl<R: Rng> Roller for R {
    type RollIter<'a> = std::iter::Take<DistIter<Uniform<UInt>, &'a mut Self, UInt>>
    where
        Self: 'a;

    fn roll(&mut self, sides: NonZeroUInt) -> UInt {
        self.gen_range(1..=sides.get())
    }

    fn roll_iter(&mut self, num: usize, sides: NonZeroUInt) -> Self::RollIter<'_> {
        Uniform::new_inclusive(1, sides.get())
            .sample_iter(self)
            .take(num)
    }

    fn roll_range(&mut self, min: Int, max: Int) -> Int {
        self.gen_range(min.min(max)..=min.max(max))
    }
}

#[cfg(test)]
pub(crate) use step::StepRoller;
