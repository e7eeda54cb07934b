use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::catch::{CatchHitResults, Chart};

/// Named attributes of a simulated play, ready to be written out.
///
/// The attribute names are stable: `ApproachRate`, `MaxCombo`, and one per
/// [`HitResult`] named by its identifier.
///
/// [`HitResult`]: crate::any::HitResult
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayReport {
    attributes: Vec<(&'static str, String)>,
}

impl PlayReport {
    pub const APPROACH_RATE: &'static str = "ApproachRate";
    pub const MAX_COMBO: &'static str = "MaxCombo";

    /// Assemble the report of a play with the given hitresults and combo.
    pub fn new(chart: &Chart, hitresults: &CatchHitResults, combo: u32) -> Self {
        let mut attributes = Vec::with_capacity(7);

        attributes.push((Self::APPROACH_RATE, chart.approach_rate.to_string()));
        attributes.push((Self::MAX_COMBO, combo.to_string()));

        attributes.extend(
            hitresults
                .iter()
                .map(|(result, count)| (result.name(), count.to_string())),
        );

        Self { attributes }
    }

    /// All attributes in reporting order.
    pub fn attributes(&self) -> impl ExactSizeIterator<Item = (&'static str, &str)> + '_ {
        self.attributes
            .iter()
            .map(|(name, value)| (*name, value.as_str()))
    }

    /// The value of the attribute with the given name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }
}

impl Display for PlayReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        for (name, value) in self.attributes() {
            writeln!(f, "{name}: {value}")?;
        }

        Ok(())
    }
}
