#![allow(unused)]

use proptest::prelude::*;
use rosu_catch_sim::{
    catch::{CatchObject, Droplet, JuiceStream},
    Chart,
};

/// Three fruits, nothing else.
pub fn fruits_only() -> Chart {
    std::iter::repeat(CatchObject::Fruit).take(3).collect()
}

/// A single juice stream with two repeats, two droplets, and a tiny droplet.
pub fn single_stream() -> Chart {
    let stream = JuiceStream::new(2, vec![Droplet::DROPLET, Droplet::DROPLET, Droplet::TINY]);

    Chart::new(9.0, vec![stream.into()])
}

pub fn droplet() -> impl Strategy<Value = Droplet> {
    any::<bool>().prop_map(|tiny| Droplet { tiny })
}

pub fn catch_object() -> impl Strategy<Value = CatchObject> {
    prop_oneof![
        4 => Just(CatchObject::Fruit),
        1 => Just(CatchObject::BananaShower),
        3 => (0_u32..8, prop::collection::vec(droplet(), 0..32))
            .prop_map(|(repeats, nested)| CatchObject::JuiceStream(JuiceStream::new(repeats, nested))),
    ]
}

pub fn chart() -> impl Strategy<Value = Chart> {
    (0.0_f32..=11.0, prop::collection::vec(catch_object(), 0..64))
        .prop_map(|(approach_rate, objects)| Chart::new(approach_rate, objects))
}
