/// Generates a full set of hitresults from partially specified parameters.
///
/// Implementors only need to honor the sum invariant of the params, i.e. the
/// resulting hitresults must add up to the amount of scorable units. How the
/// remaining units are split up is up to the generator.
pub trait HitResultGenerator<P: HitResultParams> {
    fn generate_hitresults(params: &P) -> P::HitResults;
}

/// Parameters that a [`HitResultGenerator`] operates on.
pub trait HitResultParams {
    type HitResults;
}

/// [`HitResultGenerator`] whose result is generated as fast as possible.
///
/// This generator prioritizes performance over accuracy.
#[derive(Copy, Clone, Debug, Default)]
pub struct Fast;
