use super::object::CatchObject;

/// The fully materialized objects of an osu!catch beatmap.
///
/// Parsing and converting beatmaps is up to the caller; a [`Chart`] only
/// holds what's required to simulate plays on it.
#[derive(Clone, Debug, PartialEq)]
pub struct Chart {
    pub approach_rate: f32,
    pub objects: Vec<CatchObject>,
}

impl Chart {
    /// Approach rate of beatmaps that don't specify one.
    pub const DEFAULT_APPROACH_RATE: f32 = 5.0;

    /// Create a new [`Chart`].
    pub const fn new(approach_rate: f32, objects: Vec<CatchObject>) -> Self {
        Self {
            approach_rate,
            objects,
        }
    }

    /// Specify the approach rate.
    #[must_use]
    pub const fn approach_rate(mut self, approach_rate: f32) -> Self {
        self.approach_rate = approach_rate;

        self
    }

    /// Append an object.
    pub fn push(&mut self, object: impl Into<CatchObject>) {
        self.objects.push(object.into());
    }

    /// Count the chart's scorable units in a single pass.
    pub fn counts(&self) -> CatchObjectCounts {
        CatchObjectCounts::new(&self.objects)
    }

    /// The maximum combo achievable on this chart.
    pub fn max_combo(&self) -> u32 {
        self.counts().max_combo()
    }

    /// The amount of scorable units, including tiny droplets.
    pub fn total_scorable_units(&self) -> u32 {
        self.counts().total_scorable_units()
    }
}

impl Default for Chart {
    fn default() -> Self {
        Self::new(Self::DEFAULT_APPROACH_RATE, Vec::new())
    }
}

impl FromIterator<CatchObject> for Chart {
    fn from_iter<T: IntoIterator<Item = CatchObject>>(iter: T) -> Self {
        Self::new(Self::DEFAULT_APPROACH_RATE, iter.into_iter().collect())
    }
}

/// Scorable units of a [`Chart`], grouped by kind.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct CatchObjectCounts {
    /// Standalone fruits.
    pub fruits: u32,
    /// Fruits of juice streams, i.e. heads, tails, and repeats.
    pub stream_fruits: u32,
    /// Droplets that are not tiny.
    pub droplets: u32,
    /// Tiny droplets.
    pub tiny_droplets: u32,
}

impl CatchObjectCounts {
    pub fn new(objects: &[CatchObject]) -> Self {
        let mut counts = Self::default();

        for object in objects {
            match object {
                CatchObject::Fruit => counts.fruits = counts.fruits.saturating_add(1),
                CatchObject::JuiceStream(stream) => {
                    let (droplets, tiny_droplets) = stream.droplet_counts();

                    counts.stream_fruits =
                        counts.stream_fruits.saturating_add(stream.fruit_count());
                    counts.droplets = counts.droplets.saturating_add(droplets);
                    counts.tiny_droplets = counts.tiny_droplets.saturating_add(tiny_droplets);
                }
                CatchObject::BananaShower => {}
            }
        }

        counts
    }

    /// Units that are judged as [`HitResult::Perfect`] when caught.
    ///
    /// [`HitResult::Perfect`]: crate::any::HitResult::Perfect
    pub const fn all_fruits(&self) -> u32 {
        self.fruits.saturating_add(self.stream_fruits)
    }

    /// Tiny droplets neither break nor extend combo.
    pub const fn max_combo(&self) -> u32 {
        self.all_fruits().saturating_add(self.droplets)
    }

    pub const fn total_scorable_units(&self) -> u32 {
        self.max_combo().saturating_add(self.tiny_droplets)
    }
}

#[cfg(test)]
mod tests {
    use crate::catch::{Droplet, JuiceStream};

    use super::*;

    #[test]
    fn empty_chart() {
        let chart = Chart::default();

        assert_eq!(chart.max_combo(), 0);
        assert_eq!(chart.total_scorable_units(), 0);
    }

    #[test]
    fn only_fruits() {
        let chart: Chart = std::iter::repeat(CatchObject::Fruit).take(3).collect();

        assert_eq!(chart.max_combo(), 3);
        assert_eq!(chart.total_scorable_units(), 3);
    }

    #[test]
    fn single_juice_stream() {
        let stream = JuiceStream::new(2, vec![Droplet::DROPLET, Droplet::TINY, Droplet::DROPLET]);
        let chart = Chart::new(9.0, vec![stream.into()]);

        let counts = chart.counts();

        assert_eq!(counts.stream_fruits, 4);
        assert_eq!(counts.droplets, 2);
        assert_eq!(counts.tiny_droplets, 1);
        assert_eq!(chart.max_combo(), 6);
        assert_eq!(chart.total_scorable_units(), 7);
    }

    #[test]
    fn huge_repeat_count_saturates() {
        let stream = JuiceStream::new(u32::MAX, vec![Droplet::DROPLET]);
        let chart = Chart::new(5.0, vec![stream.into()]);

        assert_eq!(chart.counts().stream_fruits, u32::MAX);
        assert_eq!(chart.max_combo(), u32::MAX);
        assert_eq!(chart.total_scorable_units(), u32::MAX);
    }

    #[test]
    fn banana_showers_are_ignored() {
        let mut chart = Chart::default();
        chart.push(CatchObject::Fruit);
        chart.push(CatchObject::BananaShower);
        chart.push(JuiceStream::new(0, vec![Droplet::TINY]));

        let counts = chart.counts();

        assert_eq!(
            counts,
            CatchObjectCounts {
                fruits: 1,
                stream_fruits: 2,
                droplets: 0,
                tiny_droplets: 1,
            }
        );
        assert_eq!(counts.max_combo(), 3);
        assert_eq!(counts.total_scorable_units(), 4);
    }
}
