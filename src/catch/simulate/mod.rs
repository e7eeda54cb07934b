use std::{
    error::Error as StdError,
    fmt::{Debug, Display, Formatter, Result as FmtResult},
};

use rosu_map::section::general::GameMode;

use crate::{
    any::{hitresult_generator::Fast, HitResult, HitResultGenerator},
    catch::{CatchHitResults, CatchObjectCounts, Chart, PlayReport},
    model::mods::GameMods,
};

pub use self::hitresult_generator::CatchHitResultParams;

mod hitresult_generator;

/// Simulates a play on an osu!catch [`Chart`].
///
/// Unspecified values default to a full combo without misses. The
/// simulation does not validate its inputs; see [`SimulatedPlay::validate`].
#[derive(Clone)]
#[must_use]
pub struct CatchSimulation {
    pub(crate) mods: GameMods,
    pub(crate) acc: Option<f64>,
    pub(crate) combo: Option<u32>,
    pub(crate) percent_combo: f64,
    pub(crate) n_good: Option<u32>,
    pub(crate) n_meh: Option<u32>,
    pub(crate) misses: u32,
    pub(crate) hitresult_generator: Option<fn(&CatchHitResultParams) -> CatchHitResults>,
}

// Manual implementation because of the `hitresult_generator` function pointer
impl Debug for CatchSimulation {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("CatchSimulation")
            .field("mods", &self.mods)
            .field("acc", &self.acc)
            .field("combo", &self.combo)
            .field("percent_combo", &self.percent_combo)
            .field("n_good", &self.n_good)
            .field("n_meh", &self.n_meh)
            .field("misses", &self.misses)
            .field("custom_generator", &self.hitresult_generator.is_some())
            .finish()
    }
}

impl PartialEq for CatchSimulation {
    fn eq(&self, other: &Self) -> bool {
        let Self {
            mods,
            acc,
            combo,
            percent_combo,
            n_good,
            n_meh,
            misses,
            hitresult_generator: _,
        } = self;

        mods == &other.mods
            && acc == &other.acc
            && combo == &other.combo
            && percent_combo == &other.percent_combo
            && n_good == &other.n_good
            && n_meh == &other.n_meh
            && misses == &other.misses
    }
}

impl CatchSimulation {
    /// Create a new simulation of a full combo without misses.
    pub fn new() -> Self {
        Self {
            mods: GameMods::new(),
            acc: None,
            combo: None,
            percent_combo: 100.0,
            n_good: None,
            n_meh: None,
            misses: 0,
            hitresult_generator: None,
        }
    }

    /// Specify mods.
    ///
    /// Accepted types are
    /// - `u32`
    /// - `&str` of concatenated acronyms
    /// - [`rosu_mods::GameModsLegacy`]
    /// - [`rosu_mods::GameModsIntermode`]
    /// - [`&rosu_mods::GameModsIntermode`](rosu_mods::GameModsIntermode)
    /// - [`GameMods`]
    ///
    /// See <https://github.com/ppy/osu-api/wiki#mods>
    pub fn mods(mut self, mods: impl Into<GameMods>) -> Self {
        self.mods = mods.into();

        self
    }

    /// Specify the max combo of the play.
    ///
    /// Takes precedence over [`percent_combo`](Self::percent_combo).
    pub const fn combo(mut self, combo: u32) -> Self {
        self.combo = Some(combo);

        self
    }

    /// Specify the max combo as percentage of the chart's max combo.
    ///
    /// The value is clamped between 0.0 and 100.0. Defaults to 100.0.
    pub fn percent_combo(mut self, percent: f64) -> Self {
        self.percent_combo = percent.clamp(0.0, 100.0);

        self
    }

    /// Specify the accuracy of a play between `0.0` and `100.0`.
    ///
    /// The accuracy is handed to the hitresult generator. Note that the
    /// default generator [`Fast`] does not take it into account and only
    /// distributes misses and perfects.
    pub fn accuracy(mut self, acc: f64) -> Self {
        self.acc = Some(acc.clamp(0.0, 100.0) / 100.0);

        self
    }

    /// Specify the amount of caught droplets of a play.
    pub const fn n_good(mut self, n_good: u32) -> Self {
        self.n_good = Some(n_good);

        self
    }

    /// Specify the amount of caught tiny droplets of a play.
    pub const fn n_meh(mut self, n_meh: u32) -> Self {
        self.n_meh = Some(n_meh);

        self
    }

    /// Specify the amount of missed scorable units of a play.
    pub const fn misses(mut self, n_misses: u32) -> Self {
        self.misses = n_misses;

        self
    }

    /// Use a custom [`HitResultGenerator`] instead of [`Fast`].
    pub fn hitresult_generator<H: HitResultGenerator<CatchHitResultParams>>(mut self) -> Self {
        self.hitresult_generator = Some(H::generate_hitresults);

        self
    }

    /// Create the [`CatchHitResultParams`] for the given counts.
    pub fn hitresult_params(&self, counts: &CatchObjectCounts) -> CatchHitResultParams {
        CatchHitResultParams {
            total_hits: counts.total_scorable_units(),
            acc: self.acc.unwrap_or(1.0),
            n_good: self.n_good,
            n_meh: self.n_meh,
            misses: self.misses,
        }
    }

    /// The combo of the play on a chart with the given max combo.
    pub fn resolve_combo(&self, max_combo: u32) -> u32 {
        self.combo.unwrap_or_else(|| {
            (self.percent_combo / 100.0 * f64::from(max_combo)).round_ties_even() as u32
        })
    }

    /// Simulate the play on the given chart.
    pub fn simulate(&self, chart: &Chart) -> SimulatedPlay {
        let counts = chart.counts();
        let params = self.hitresult_params(&counts);

        #[cfg(feature = "tracing")]
        {
            tracing::debug!(
                total_hits = params.total_hits,
                max_combo = counts.max_combo(),
                misses = params.misses,
                "Simulating catch play"
            );

            if params.misses > params.total_hits {
                tracing::warn!(
                    misses = params.misses,
                    total_hits = params.total_hits,
                    "More misses than scorable units"
                );
            }
        }

        let hitresults = match self.hitresult_generator {
            Some(generator) => generator(&params),
            None => Fast::generate_hitresults(&params),
        };

        SimulatedPlay {
            accuracy: hitresults.accuracy(),
            hitresults,
            combo: self.resolve_combo(counts.max_combo()),
            counts,
            mods: self.mods.clone(),
        }
    }
}

impl Default for CatchSimulation {
    fn default() -> Self {
        Self::new()
    }
}

/// The result of a [`CatchSimulation`].
#[derive(Clone, Debug, PartialEq)]
pub struct SimulatedPlay {
    pub hitresults: CatchHitResults,
    /// The max combo of the play.
    pub combo: u32,
    /// Accuracy between `0.0` and `1.0`, derived from the hitresults.
    pub accuracy: f64,
    pub mods: GameMods,
    /// Scorable units of the chart the play was simulated on.
    pub counts: CatchObjectCounts,
}

impl SimulatedPlay {
    /// The mode of the play.
    pub const fn mode(&self) -> GameMode {
        GameMode::Catch
    }

    /// The max combo of the chart the play was simulated on.
    pub const fn max_combo(&self) -> u32 {
        self.counts.max_combo()
    }

    /// Check that the play can be handed to performance calculation.
    ///
    /// The simulation takes its inputs verbatim so e.g. an excessive miss
    /// count only shows up here.
    pub fn validate(&self) -> Result<(), SimulationError> {
        if let Some((result, count)) = self.hitresults.iter().find(|(_, count)| *count < 0) {
            return Err(SimulationError::NegativeCount { result, count });
        }

        let expected = self.counts.total_scorable_units();
        let actual = self.hitresults.total_hits();

        if actual != i64::from(expected) {
            return Err(SimulationError::TotalMismatch { expected, actual });
        }

        let max_combo = self.max_combo();

        if self.combo > max_combo {
            return Err(SimulationError::ComboExceedsMax {
                combo: self.combo,
                max_combo,
            });
        }

        Ok(())
    }

    /// Assemble the attributes to report for this play.
    pub fn report(&self, chart: &Chart) -> PlayReport {
        PlayReport::new(chart, &self.hitresults, self.combo)
    }
}

/// Reasons why a [`SimulatedPlay`] is unusable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SimulationError {
    NegativeCount { result: HitResult, count: i64 },
    TotalMismatch { expected: u32, actual: i64 },
    ComboExceedsMax { combo: u32, max_combo: u32 },
}

impl StdError for SimulationError {}

impl Display for SimulationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::NegativeCount { result, count } => {
                write!(f, "negative amount of {result}: {count}")
            }
            Self::TotalMismatch { expected, actual } => write!(
                f,
                "hitresults add up to {actual} but the chart has {expected} scorable units"
            ),
            Self::ComboExceedsMax { combo, max_combo } => {
                write!(f, "combo {combo} exceeds the chart's max combo {max_combo}")
            }
        }
    }
}
