use crate::{
    any::{
        hitresult_generator::{Fast, HitResultParams},
        HitResultGenerator,
    },
    catch::CatchHitResults,
};

/// Parameters to generate [`CatchHitResults`] from.
#[derive(Clone, Debug, PartialEq)]
pub struct CatchHitResultParams {
    // Derived from the chart
    pub total_hits: u32,

    // Provided by user; may be infeasable
    pub acc: f64,
    pub n_good: Option<u32>,
    pub n_meh: Option<u32>,
    pub misses: u32,
}

impl HitResultParams for CatchHitResultParams {
    type HitResults = CatchHitResults;
}

/// Splits the scorable units into misses and perfects only.
///
/// The target accuracy is not inverted into droplet and tiny droplet hits.
/// Explicitly given droplet counts are kept, everything else is treated as
/// a caught fruit. Misses are not clamped so excessive misses result in a
/// negative perfect count.
impl HitResultGenerator<CatchHitResultParams> for Fast {
    fn generate_hitresults(params: &CatchHitResultParams) -> CatchHitResults {
        let good = i64::from(params.n_good.unwrap_or(0));
        let meh = i64::from(params.n_meh.unwrap_or(0));
        let miss = i64::from(params.misses);

        CatchHitResults {
            perfect: i64::from(params.total_hits) - miss - good - meh,
            good,
            meh,
            ok: 0,
            miss,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(total_hits: u32, misses: u32) -> CatchHitResultParams {
        CatchHitResultParams {
            total_hits,
            acc: 1.0,
            n_good: None,
            n_meh: None,
            misses,
        }
    }

    #[test]
    fn misses_and_perfects_only() {
        let result = Fast::generate_hitresults(&params(7, 2));

        assert_eq!(
            result,
            CatchHitResults {
                perfect: 5,
                good: 0,
                meh: 0,
                ok: 0,
                miss: 2,
            }
        );
        assert!((result.accuracy() - 5.0 / 7.0).abs() < f64::EPSILON);
    }

    #[test]
    fn accuracy_is_not_inverted() {
        let mut low_acc = params(100, 3);
        low_acc.acc = 0.5;

        assert_eq!(
            Fast::generate_hitresults(&low_acc),
            Fast::generate_hitresults(&params(100, 3))
        );
    }

    #[test]
    fn explicit_droplets_are_kept() {
        let params = CatchHitResultParams {
            n_good: Some(1),
            n_meh: Some(1),
            ..params(7, 1)
        };

        let result = Fast::generate_hitresults(&params);

        assert_eq!(result.perfect, 4);
        assert_eq!(result.good, 1);
        assert_eq!(result.meh, 1);
        assert_eq!(result.miss, 1);
        assert_eq!(result.total_hits(), 7);
    }

    #[test]
    fn only_good_given() {
        let params = CatchHitResultParams {
            n_good: Some(3),
            ..params(10, 0)
        };

        let result = Fast::generate_hitresults(&params);

        assert_eq!(result.perfect, 7);
        assert_eq!(result.meh, 0);
    }

    #[test]
    fn empty_chart() {
        let result = Fast::generate_hitresults(&params(0, 0));

        assert_eq!(result, CatchHitResults::default());
        assert!((result.accuracy() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn edge_case_more_misses_than_hits() {
        let result = Fast::generate_hitresults(&params(5, 8));

        assert_eq!(result.perfect, -3);
        assert_eq!(result.miss, 8);
        assert_eq!(result.total_hits(), 5);
        assert!(!result.is_valid());
    }

    #[test]
    fn huge_inputs_keep_perfect_negative() {
        let params = CatchHitResultParams {
            n_good: Some(i32::MAX as u32),
            n_meh: Some(2),
            ..params(7, i32::MAX as u32)
        };

        let result = Fast::generate_hitresults(&params);

        assert_eq!(result.perfect, 7 - 2 * i64::from(i32::MAX) - 2);
        assert_eq!(result.total_hits(), 7);
        assert!(!result.is_valid());
    }

    #[test]
    fn max_inputs_do_not_wrap() {
        let params = CatchHitResultParams {
            n_good: Some(u32::MAX),
            n_meh: Some(u32::MAX),
            ..params(u32::MAX, u32::MAX)
        };

        let result = Fast::generate_hitresults(&params);

        assert_eq!(result.total_hits(), i64::from(u32::MAX));
        assert!(result.perfect < 0);
    }
}
