/// A scorable object of an osu!catch [`Chart`].
///
/// [`Chart`]: crate::catch::Chart
#[derive(Clone, Debug, PartialEq)]
pub enum CatchObject {
    /// A single fruit.
    Fruit,
    /// A slider converted into a stream of fruits and droplets.
    JuiceStream(JuiceStream),
    /// Bonus bananas; neither scorable nor relevant for combo.
    BananaShower,
}

impl From<JuiceStream> for CatchObject {
    fn from(stream: JuiceStream) -> Self {
        Self::JuiceStream(stream)
    }
}

/// A juice stream with its nested droplets.
///
/// The head, the tail, and every repeat are fruits; the nested droplets lie
/// in between.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct JuiceStream {
    pub repeats: u32,
    pub nested: Vec<Droplet>,
}

impl JuiceStream {
    /// Create a new [`JuiceStream`].
    pub const fn new(repeats: u32, nested: Vec<Droplet>) -> Self {
        Self { repeats, nested }
    }

    /// Amount of fruits of the stream i.e. head, tail, and one per repeat.
    pub const fn fruit_count(&self) -> u32 {
        self.repeats.saturating_add(2)
    }

    /// Amount of nested droplets that are not tiny and amount of nested
    /// tiny droplets.
    pub fn droplet_counts(&self) -> (u32, u32) {
        self.nested
            .iter()
            .fold((0_u32, 0_u32), |(droplets, tiny), droplet| {
                if droplet.tiny {
                    (droplets, tiny.saturating_add(1))
                } else {
                    (droplets.saturating_add(1), tiny)
                }
            })
    }
}

/// A droplet nested inside a [`JuiceStream`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Droplet {
    pub tiny: bool,
}

impl Droplet {
    /// A regular droplet.
    pub const DROPLET: Self = Self { tiny: false };
    /// A tiny droplet.
    pub const TINY: Self = Self { tiny: true };
}
