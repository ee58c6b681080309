use crate::toss::Conditions;
use indexmap::IndexMap;
use serde::Serialize;
use std::fmt::{Display, Formatter};

/// Name of the home team.
pub const LENGABURU: &str = "Lengaburu";

/// Name of the visiting team.
pub const ENCHAI: &str = "Enchai";

const LENGABURU_PREFERENCES: [(&str, Choice); 4] = [
    ("clear", Choice::Bats),
    ("cloudy", Choice::Bowls),
    ("day", Choice::Bats),
    ("night", Choice::Bowls),
];

const ENCHAI_PREFERENCES: [(&str, Choice); 4] = [
    ("clear", Choice::Bowls),
    ("cloudy", Choice::Bats),
    ("day", Choice::Bowls),
    ("night", Choice::Bats),
];

/// What the toss winner elects to do.
#[derive(Serialize, Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[serde(rename_all = "lowercase")]
pub enum Choice {
    Bats,
    Bowls,
}

impl Choice {
    /// Choice made when the conditions disagree.
    pub const DEFAULT: Choice = Choice::Bats;

    #[inline]
    pub fn as_str(self) -> &'static str {
        match self {
            Choice::Bats => "bats",
            Choice::Bowls => "bowls",
        }
    }
}

impl Display for Choice {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A team taking part in the toss, with its preferred choice for each condition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Team {
    name: String,
    preferences: IndexMap<String, Choice>,
}

impl Team {
    /// Creates a team without any preference.
    pub fn new(name: impl Into<String>) -> Team {
        Team {
            name: name.into(),
            preferences: IndexMap::with_capacity(4),
        }
    }

    /// Creates a team from a list of `(condition, choice)` pairs.
    pub fn with_preferences<'c, I>(name: impl Into<String>, preferences: I) -> Team
    where
        I: IntoIterator<Item = (&'c str, Choice)>,
    {
        let mut team = Team::new(name);
        for (condition, choice) in preferences {
            team = team.set_preference(condition, choice);
        }
        team
    }

    /// Sets the choice for a condition, replacing any previous one.
    #[must_use]
    pub fn set_preference(mut self, condition: impl Into<String>, choice: Choice) -> Team {
        self.preferences.insert(condition.into(), choice);
        self
    }

    /// The Lengaburu team and its fixed preferences.
    pub fn lengaburu() -> Team {
        Team::with_preferences(LENGABURU, LENGABURU_PREFERENCES)
    }

    /// The Enchai team and its fixed preferences.
    pub fn enchai() -> Team {
        Team::with_preferences(ENCHAI, ENCHAI_PREFERENCES)
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The choice stored for a single condition, [`None`] if the condition is unknown to the team.
    #[inline]
    pub fn preference(&self, condition: &str) -> Option<Choice> {
        self.preferences.get(condition).copied()
    }

    /// Decides what to do after winning the toss.
    ///
    /// When weather and time of day lead to the same lookup result, that result is returned.
    /// Otherwise the team goes with [`Choice::DEFAULT`].
    ///
    /// Two unknown conditions compare equal, so the result is [`None`] in that case rather than
    /// the default. Callers print it as `null`.
    pub fn get_preference(&self, conditions: &Conditions) -> Option<Choice> {
        let weather = self.preference(conditions.weather());
        let time_of_day = self.preference(conditions.time_of_day());
        if weather == time_of_day {
            weather
        } else {
            Some(Choice::DEFAULT)
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn conditions(weather: &str, time_of_day: &str) -> Conditions {
        Conditions::new(weather, time_of_day)
    }

    #[test]
    fn test_fixed_tables() {
        let lengaburu = Team::lengaburu();
        assert_eq!(lengaburu.name(), "Lengaburu");
        assert_eq!(lengaburu.preference("clear"), Some(Choice::Bats));
        assert_eq!(lengaburu.preference("cloudy"), Some(Choice::Bowls));
        assert_eq!(lengaburu.preference("day"), Some(Choice::Bats));
        assert_eq!(lengaburu.preference("night"), Some(Choice::Bowls));

        let enchai = Team::enchai();
        assert_eq!(enchai.name(), "Enchai");
        assert_eq!(enchai.preference("clear"), Some(Choice::Bowls));
        assert_eq!(enchai.preference("cloudy"), Some(Choice::Bats));
        assert_eq!(enchai.preference("day"), Some(Choice::Bowls));
        assert_eq!(enchai.preference("night"), Some(Choice::Bats));
        assert_eq!(enchai.preference("windy"), None);
    }

    #[test]
    fn test_matching_conditions() {
        let lengaburu = Team::lengaburu();
        let enchai = Team::enchai();

        assert_eq!(lengaburu.get_preference(&conditions("clear", "day")), Some(Choice::Bats));
        assert_eq!(enchai.get_preference(&conditions("clear", "day")), Some(Choice::Bowls));
        assert_eq!(lengaburu.get_preference(&conditions("cloudy", "night")), Some(Choice::Bowls));
        assert_eq!(enchai.get_preference(&conditions("cloudy", "night")), Some(Choice::Bats));
    }

    #[test]
    fn test_conflicting_conditions() {
        let lengaburu = Team::lengaburu();
        let enchai = Team::enchai();

        assert_eq!(lengaburu.get_preference(&conditions("clear", "night")), Some(Choice::Bats));
        assert_eq!(enchai.get_preference(&conditions("clear", "night")), Some(Choice::Bats));
        assert_eq!(enchai.get_preference(&conditions("cloudy", "day")), Some(Choice::Bats));
        assert_eq!(lengaburu.get_preference(&conditions("cloudy", "day")), Some(Choice::Bats));
    }

    #[test]
    fn test_one_unknown_condition() {
        // Unknown against known never matches
        assert_eq!(
            Team::lengaburu().get_preference(&conditions("windy", "day")),
            Some(Choice::Bats)
        );
        assert_eq!(
            Team::enchai().get_preference(&conditions("windy", "day")),
            Some(Choice::Bats)
        );
        assert_eq!(
            Team::lengaburu().get_preference(&conditions("cloudy", "dusk")),
            Some(Choice::Bats)
        );
    }

    #[test]
    fn test_both_unknown_conditions() {
        assert_eq!(Team::lengaburu().get_preference(&conditions("windy", "foggy")), None);
        assert_eq!(Team::enchai().get_preference(&conditions("windy", "foggy")), None);
    }

    #[test]
    fn test_set_preference_overrides() {
        let team = Team::new("Custom")
            .set_preference("clear", Choice::Bats)
            .set_preference("clear", Choice::Bowls)
            .set_preference("day", Choice::Bowls);

        assert_eq!(team.preference("clear"), Some(Choice::Bowls));
        assert_eq!(team.get_preference(&conditions("clear", "day")), Some(Choice::Bowls));
    }

    #[test]
    fn test_choice_display() {
        assert_eq!(Choice::Bats.to_string(), "bats");
        assert_eq!(Choice::Bowls.to_string(), "bowls");
    }
}
