use crate::team::{Choice, Team};
use rand::prelude::SliceRandom;
use rand::Rng;
use serde::Serialize;
use std::ffi::OsStr;
use std::fmt::{Display, Formatter};
use thiserror::Error;
use tracing::debug;

/// Weather used when none is given.
pub const DEFAULT_WEATHER: &str = "clear";

/// Time of day used when none is given.
pub const DEFAULT_TIME_OF_DAY: &str = "day";

/// The conditions the match is played in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Conditions {
    weather: String,
    time_of_day: String,
}

impl Conditions {
    /// Creates the conditions, lower-casing both values. They are not checked against any vocabulary.
    pub fn new(weather: impl AsRef<str>, time_of_day: impl AsRef<str>) -> Conditions {
        Conditions {
            weather: weather.as_ref().to_lowercase(),
            time_of_day: time_of_day.as_ref().to_lowercase(),
        }
    }

    /// Reads weather then time of day from `args`, falling back to [`DEFAULT_WEATHER`] and
    /// [`DEFAULT_TIME_OF_DAY`]. Anything after the first two values is ignored.
    ///
    /// Values are taken literally: hyphenated words such as `--` or `-h` are conditions too, and
    /// invalid UTF-8 is replaced rather than rejected.
    pub fn from_args<I, S>(args: I) -> Conditions
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        let mut args = args.into_iter();
        match (args.next(), args.next()) {
            (Some(weather), Some(time_of_day)) => Conditions::new(
                weather.as_ref().to_string_lossy(),
                time_of_day.as_ref().to_string_lossy(),
            ),
            (Some(weather), None) => {
                Conditions::new(weather.as_ref().to_string_lossy(), DEFAULT_TIME_OF_DAY)
            }
            _ => Conditions::default(),
        }
    }

    #[inline]
    pub fn weather(&self) -> &str {
        &self.weather
    }

    #[inline]
    pub fn time_of_day(&self) -> &str {
        &self.time_of_day
    }
}

impl Default for Conditions {
    #[inline]
    fn default() -> Self {
        Conditions::new(DEFAULT_WEATHER, DEFAULT_TIME_OF_DAY)
    }
}

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum TossError {
    /// No team was provided to the toss.
    #[error("no team to toss between")]
    NoTeams,
}

/// Result of a toss.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct TossOutcome<'a> {
    /// Name of the team which won the toss.
    pub winner: &'a str,
    /// What the winner elected to do. [`None`] if neither condition is known to the winner.
    pub choice: Option<Choice>,
}

impl Display for TossOutcome<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.choice {
            Some(choice) => write!(f, "{} wins toss and {}", self.winner, choice),
            None => write!(f, "{} wins toss and null", self.winner),
        }
    }
}

/// The two teams of the match: Lengaburu, then Enchai.
pub fn default_teams() -> [Team; 2] {
    [Team::lengaburu(), Team::enchai()]
}

/// Picks the toss winner, every team having the same probability.
pub fn toss<'a, R: Rng + ?Sized>(teams: &'a [Team], rng: &mut R) -> Result<&'a Team, TossError> {
    let winner = teams.choose(rng).ok_or(TossError::NoTeams)?;
    debug!(winner = winner.name(), "toss won");
    Ok(winner)
}

/// Tosses between `teams` and lets the winner choose for the given conditions.
pub fn decide<'a, R: Rng + ?Sized>(
    teams: &'a [Team],
    conditions: &Conditions,
    rng: &mut R,
) -> Result<TossOutcome<'a>, TossError> {
    let winner = toss(teams, rng)?;
    let choice = winner.get_preference(conditions);
    debug!(
        weather = conditions.weather(),
        time_of_day = conditions.time_of_day(),
        ?choice,
        "choice made"
    );
    Ok(TossOutcome {
        winner: winner.name(),
        choice,
    })
}
