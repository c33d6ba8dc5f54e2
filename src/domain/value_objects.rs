use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::errors::DomainError;

/// Team name value object
///
/// # Invariants
/// - Non-empty after trimming
/// - Uniqueness among teams is compared case-insensitively, but the
///   original casing is preserved for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamName(String);

impl TeamName {
    /// Creates a new TeamName value object
    ///
    /// # Returns
    /// * `Ok(TeamName)` - If the trimmed name is non-empty
    /// * `Err(DomainError::EmptyTeamName)` - Otherwise
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(DomainError::EmptyTeamName);
        }
        Ok(TeamName(trimmed.to_string()))
    }

    /// Returns the name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive comparison against another name
    pub fn eq_ignore_case(&self, other: &str) -> bool {
        self.0.to_lowercase() == other.to_lowercase()
    }
}

impl fmt::Display for TeamName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Closed list of regions a team can belong to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Region {
    #[serde(rename = "North America")]
    NorthAmerica,
    Europe,
    Asia,
    #[serde(rename = "South America")]
    SouthAmerica,
    Africa,
    Oceania,
}

impl Region {
    /// All selectable regions, in display order
    pub const ALL: [Region; 6] = [
        Region::NorthAmerica,
        Region::Europe,
        Region::Asia,
        Region::SouthAmerica,
        Region::Africa,
        Region::Oceania,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Region::NorthAmerica => "North America",
            Region::Europe => "Europe",
            Region::Asia => "Asia",
            Region::SouthAmerica => "South America",
            Region::Africa => "Africa",
            Region::Oceania => "Oceania",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Region {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Region::ALL
            .iter()
            .copied()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| DomainError::UnknownRegion(s.to_string()))
    }
}

/// Closed list of countries a team can be registered in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Country {
    #[serde(rename = "United States")]
    UnitedStates,
    Canada,
    #[serde(rename = "United Kingdom")]
    UnitedKingdom,
    Germany,
    France,
    Japan,
    #[serde(rename = "South Korea")]
    SouthKorea,
    Brazil,
    Australia,
    Mexico,
}

impl Country {
    /// All selectable countries, in display order
    pub const ALL: [Country; 10] = [
        Country::UnitedStates,
        Country::Canada,
        Country::UnitedKingdom,
        Country::Germany,
        Country::France,
        Country::Japan,
        Country::SouthKorea,
        Country::Brazil,
        Country::Australia,
        Country::Mexico,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Country::UnitedStates => "United States",
            Country::Canada => "Canada",
            Country::UnitedKingdom => "United Kingdom",
            Country::Germany => "Germany",
            Country::France => "France",
            Country::Japan => "Japan",
            Country::SouthKorea => "South Korea",
            Country::Brazil => "Brazil",
            Country::Australia => "Australia",
            Country::Mexico => "Mexico",
        }
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Country {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Country::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| DomainError::UnknownCountry(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn team_name_trims_whitespace() {
        let name = TeamName::new("  Alpha  ").unwrap();
        assert_eq!(name.as_str(), "Alpha");
    }

    #[test]
    fn team_name_rejects_empty() {
        assert!(TeamName::new("").is_err());
        assert!(TeamName::new("   ").is_err());
    }

    #[test]
    fn team_name_case_insensitive_comparison() {
        let name = TeamName::new("Alpha").unwrap();
        assert!(name.eq_ignore_case("ALPHA"));
        assert!(name.eq_ignore_case("alpha"));
        assert!(!name.eq_ignore_case("Beta"));
    }

    #[test]
    fn region_round_trips_through_display() {
        for region in Region::ALL {
            let parsed: Region = region.as_str().parse().unwrap();
            assert_eq!(parsed, region);
        }
    }

    #[test]
    fn region_rejects_unknown() {
        assert!("Atlantis".parse::<Region>().is_err());
    }

    #[test]
    fn country_round_trips_through_display() {
        for country in Country::ALL {
            let parsed: Country = country.as_str().parse().unwrap();
            assert_eq!(parsed, country);
        }
    }

    #[test]
    fn country_rejects_unknown() {
        assert!("Narnia".parse::<Country>().is_err());
    }

    #[test]
    fn region_serializes_with_display_names() {
        let json = serde_json::to_string(&Region::NorthAmerica).unwrap();
        assert_eq!(json, "\"North America\"");
    }

    #[test]
    fn country_serializes_with_display_names() {
        let json = serde_json::to_string(&Country::SouthKorea).unwrap();
        assert_eq!(json, "\"South Korea\"");
    }
}
