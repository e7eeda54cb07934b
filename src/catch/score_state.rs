use std::ops::Index;

use crate::any::HitResult;

/// Amount of each [`HitResult`] of an osu!catch play.
///
/// Counts are signed and wide enough to hold any combination of `u32`
/// inputs: a generator that is handed more misses than there are scorable
/// units back-fills a negative [`perfect`] count instead of wrapping around. Use [`is_valid`] or [`SimulatedPlay::validate`] before
/// passing such hitresults on.
///
/// [`perfect`]: CatchHitResults::perfect
/// [`is_valid`]: CatchHitResults::is_valid
/// [`SimulatedPlay::validate`]: crate::catch::SimulatedPlay::validate
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct CatchHitResults {
    /// Caught fruits, including the fruits of juice streams.
    pub perfect: i64,
    /// Caught droplets.
    pub good: i64,
    /// Caught tiny droplets.
    pub meh: i64,
    /// Always `0` in osu!catch.
    pub ok: i64,
    /// Missed scorable units.
    pub miss: i64,
}

impl CatchHitResults {
    /// Create new empty hitresults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the total amount of hits by adding everything up.
    pub const fn total_hits(&self) -> i64 {
        self.perfect + self.good + self.meh + self.ok + self.miss
    }

    fn caught(&self) -> i64 {
        self.iter()
            .filter(|(result, _)| result.is_hit())
            .map(|(_, count)| count)
            .sum()
    }

    /// Calculate the accuracy between `0.0` and `1.0` for these hitresults.
    ///
    /// Hitresults without any scorable unit have an accuracy of `1.0`.
    pub fn accuracy(&self) -> f64 {
        let total_hits = self.total_hits();

        if total_hits == 0 {
            return 1.0;
        }

        self.caught() as f64 / total_hits as f64
    }

    /// Whether all counts are non-negative.
    pub const fn is_valid(&self) -> bool {
        self.perfect >= 0 && self.good >= 0 && self.meh >= 0 && self.ok >= 0 && self.miss >= 0
    }

    /// Iterate over all hitresults and their counts in reporting order.
    pub fn iter(&self) -> impl Iterator<Item = (HitResult, i64)> + '_ {
        HitResult::ALL.into_iter().map(move |result| (result, self[result]))
    }
}

impl Index<HitResult> for CatchHitResults {
    type Output = i64;

    fn index(&self, result: HitResult) -> &Self::Output {
        match result {
            HitResult::Perfect => &self.perfect,
            HitResult::Good => &self.good,
            HitResult::Meh => &self.meh,
            HitResult::Ok => &self.ok,
            HitResult::Miss => &self.miss,
        }
    }
}
