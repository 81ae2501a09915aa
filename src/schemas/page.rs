//! Page destinations the site can navigate between

use serde::{Deserialize, Serialize};

/// A top-level page of the site
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Destination {
    /// Marketing landing page
    #[default]
    Home,
    /// Two-step sign-in form
    SignIn,
    /// Sign-up form
    SignUp,
    /// Project dashboard
    Dashboard,
}

impl Destination {
    /// Every page, in navigation order
    pub const ALL: [Destination; 4] = [
        Destination::Home,
        Destination::SignIn,
        Destination::SignUp,
        Destination::Dashboard,
    ];

    /// Human-readable page title
    pub fn title(self) -> &'static str {
        match self {
            Destination::Home => "Home",
            Destination::SignIn => "Sign in",
            Destination::SignUp => "Sign up",
            Destination::Dashboard => "Dashboard",
        }
    }
}

impl std::fmt::Display for Destination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Destination::Home => write!(f, "home"),
            Destination::SignIn => write!(f, "signin"),
            Destination::SignUp => write!(f, "signup"),
            Destination::Dashboard => write!(f, "dashboard"),
        }
    }
}

impl std::str::FromStr for Destination {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "home" => Ok(Destination::Home),
            "signin" => Ok(Destination::SignIn),
            "signup" => Ok(Destination::SignUp),
            "dashboard" => Ok(Destination::Dashboard),
            _ => Err(format!("Unknown page: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_destination_display_matches_serde() {
        for page in Destination::ALL {
            let json = serde_json::to_string(&page).unwrap();
            assert_eq!(json, format!("\"{}\"", page));
        }
    }

    #[test]
    fn test_destination_from_str() {
        assert_eq!("dashboard".parse::<Destination>(), Ok(Destination::Dashboard));
        assert_eq!("signin".parse::<Destination>(), Ok(Destination::SignIn));
        assert!("settings".parse::<Destination>().is_err());
    }
}
