pub use self::{
    hit_result::{HitResult, ParseHitResultError},
    hitresult_generator::HitResultGenerator,
};

/// Hitresult generators that implement [`HitResultGenerator`].
///
/// [`HitResultGenerator`]: hitresult_generator::HitResultGenerator
pub mod hitresult_generator;

mod hit_result;
