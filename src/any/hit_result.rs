use std::{
    error::Error as StdError,
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

/// Judgement tier of a scorable unit.
///
/// The set is shared across modes so [`HitResult::Ok`] is kept even though
/// osu!catch never awards it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum HitResult {
    Perfect,
    Good,
    Meh,
    Ok,
    Miss,
}

impl HitResult {
    /// All hitresults in the order they are reported.
    pub const ALL: [Self; 5] = [Self::Perfect, Self::Good, Self::Meh, Self::Miss, Self::Ok];

    /// The stable identifier of the hitresult.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Perfect => "Perfect",
            Self::Good => "Good",
            Self::Meh => "Meh",
            Self::Ok => "Ok",
            Self::Miss => "Miss",
        }
    }

    /// Whether the hitresult counts as a successful catch.
    pub const fn is_hit(self) -> bool {
        matches!(self, Self::Perfect | Self::Good | Self::Meh)
    }
}

impl Display for HitResult {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.name())
    }
}

impl FromStr for HitResult {
    type Err = ParseHitResultError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|result| result.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseHitResultError {
                name: s.to_owned(),
            })
    }
}

/// Error when parsing a [`HitResult`] from an unknown identifier.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseHitResultError {
    name: String,
}

impl StdError for ParseHitResultError {}

impl Display for ParseHitResultError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "unknown hitresult `{}`", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for result in HitResult::ALL {
            assert_eq!(result.name().parse::<HitResult>(), Ok(result));
        }
    }

    #[test]
    fn parse_ignores_case() {
        assert_eq!("perfect".parse::<HitResult>(), Ok(HitResult::Perfect));
        assert_eq!("MISS".parse::<HitResult>(), Ok(HitResult::Miss));
    }

    #[test]
    fn parse_unknown() {
        let err = "Great".parse::<HitResult>().unwrap_err();

        assert_eq!(err.to_string(), "unknown hitresult `Great`");
    }

    #[test]
    fn ok_is_not_a_hit() {
        assert!(HitResult::Perfect.is_hit());
        assert!(HitResult::Meh.is_hit());
        assert!(!HitResult::Ok.is_hit());
        assert!(!HitResult::Miss.is_hit());
    }
}
