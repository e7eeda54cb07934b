pub use self::{
    chart::{CatchObjectCounts, Chart},
    object::{CatchObject, Droplet, JuiceStream},
    report::PlayReport,
    score_state::CatchHitResults,
    simulate::{CatchHitResultParams, CatchSimulation, SimulatedPlay, SimulationError},
};

mod chart;
mod object;
mod report;
mod score_state;
mod simulate;
