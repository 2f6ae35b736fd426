//! Launch route decision.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::session::identity::Role;

/// The single named destination chosen at launch.
///
/// Derived fresh on every launch and never persisted. The variant names are
/// the screen-layer route names, so they serialize verbatim for the screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RouteDecision {
    Login,
    Onboarding,
    AdminHome,
    StudentHome,
    LandlordHome,
    FoodProviderHome,
}

impl RouteDecision {
    /// Route name as the screen layer knows it.
    pub fn as_str(&self) -> &'static str {
        match self {
            RouteDecision::Login => "Login",
            RouteDecision::Onboarding => "Onboarding",
            RouteDecision::AdminHome => "AdminHome",
            RouteDecision::StudentHome => "StudentHome",
            RouteDecision::LandlordHome => "LandlordHome",
            RouteDecision::FoodProviderHome => "FoodProviderHome",
        }
    }
}

impl fmt::Display for RouteDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Role {
    /// Fixed role → home destination table.
    ///
    /// Unrecognized roles land on the student home — an explicit fallback
    /// policy, not an error.
    pub fn home_route(self) -> RouteDecision {
        match self {
            Role::Admin => RouteDecision::AdminHome,
            Role::Student => RouteDecision::StudentHome,
            Role::Landlord => RouteDecision::LandlordHome,
            Role::FoodProvider => RouteDecision::FoodProviderHome,
            Role::Unknown => RouteDecision::StudentHome,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_home_route_table() {
        assert_eq!(Role::Admin.home_route(), RouteDecision::AdminHome);
        assert_eq!(Role::Student.home_route(), RouteDecision::StudentHome);
        assert_eq!(Role::Landlord.home_route(), RouteDecision::LandlordHome);
        assert_eq!(Role::FoodProvider.home_route(), RouteDecision::FoodProviderHome);
    }

    #[test]
    fn test_unknown_role_gets_student_home() {
        assert_eq!(Role::Unknown.home_route(), RouteDecision::StudentHome);
    }

    #[test]
    fn test_route_names_match_screen_layer() {
        assert_eq!(RouteDecision::LandlordHome.as_str(), "LandlordHome");
        assert_eq!(
            serde_json::to_string(&RouteDecision::FoodProviderHome).unwrap(),
            r#""FoodProviderHome""#
        );
    }
}
