use std::fmt;

/// Service level of an application.
///
/// The tier string is sent to the API verbatim; only the three known tiers
/// carry pricing information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tier {
    Dev,
    Basic,
    Production,
    Other(String),
}

impl Tier {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "dev" => Tier::Dev,
            "basic" => Tier::Basic,
            "production" => Tier::Production,
            other => Tier::Other(other.to_string()),
        }
    }

    /// Dollars per dyno hour. `None` for free or unknown tiers.
    pub fn hourly_rate(&self) -> Option<f64> {
        match self {
            Tier::Basic => Some(0.025),
            Tier::Production => Some(0.05),
            Tier::Dev | Tier::Other(_) => None,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Tier::Dev => "dev",
            Tier::Basic => "basic",
            Tier::Production => "production",
            Tier::Other(raw) => raw,
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tier::Dev => write!(f, "Dev"),
            Tier::Basic => write!(f, "Basic"),
            Tier::Production => write!(f, "Production"),
            Tier::Other(raw) => write!(f, "{raw}"),
        }
    }
}

/// Which command requested the tier change. Only the wording differs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TierChange {
    Upgrade,
    Downgrade,
}

impl TierChange {
    pub fn verb(self) -> &'static str {
        match self {
            TierChange::Upgrade => "upgraded",
            TierChange::Downgrade => "downgraded",
        }
    }

    pub fn command_name(self) -> &'static str {
        match self {
            TierChange::Upgrade => "apps:upgrade",
            TierChange::Downgrade => "apps:downgrade",
        }
    }

    pub fn usage(self) -> String {
        format!("Usage: heroku {} [tier]", self.command_name())
    }
}

#[cfg(test)]
#[path = "../../../tests/models/heroku/tier.rs"]
mod tests;
