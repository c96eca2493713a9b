/// Account roles recognized by the platform. The backend transports these as
/// the strings `"user"`, `"doctor"` and `"police"`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Role {
    Citizen,
    Doctor,
    Police,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Citizen, Role::Police, Role::Doctor];

    pub fn parse(tag: &str) -> Option<Role> {
        match tag {
            "user" => Some(Role::Citizen),
            "doctor" => Some(Role::Doctor),
            "police" => Some(Role::Police),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Citizen => "user",
            Role::Doctor => "doctor",
            Role::Police => "police",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Role::Citizen => "General User",
            Role::Doctor => "Doctor",
            Role::Police => "Police Officer",
        }
    }
}

/// Which dashboard/profile variant a role maps to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScreenVariant {
    Citizen,
    Doctor,
    Police,
    NotFound,
}

/// Total mapping from a role tag to its screen variant. Anything outside the
/// closed role set lands on `NotFound`.
pub fn resolve(role: &str) -> ScreenVariant {
    match Role::parse(role) {
        Some(Role::Citizen) => ScreenVariant::Citizen,
        Some(Role::Doctor) => ScreenVariant::Doctor,
        Some(Role::Police) => ScreenVariant::Police,
        None => ScreenVariant::NotFound,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_maps_every_known_role() {
        assert_eq!(resolve("user"), ScreenVariant::Citizen);
        assert_eq!(resolve("doctor"), ScreenVariant::Doctor);
        assert_eq!(resolve("police"), ScreenVariant::Police);
    }

    #[test]
    fn resolve_is_total_over_unknown_tags() {
        for tag in ["", "admin", "USER", "doctor ", "nurse"] {
            assert_eq!(resolve(tag), ScreenVariant::NotFound);
        }
    }

    #[test]
    fn parse_round_trips_wire_tags() {
        for role in Role::ALL {
            assert_eq!(Role::parse(role.as_str()), Some(role));
        }
    }
}
