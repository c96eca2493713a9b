use crate::role::{resolve, ScreenVariant};
use crate::session::Session;

/// Screens the app can show. Login and signup are the public pair; everything
/// else requires a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    Login,
    Signup,
    Dashboard,
    Profile,
    ReportMissing,
    ReportSighting,
    History,
}

impl Screen {
    pub fn is_public(self) -> bool {
        matches!(self, Screen::Login | Screen::Signup)
    }
}

/// Authentication state derived from the session store. `Loading` holds until
/// the first store read resolves so no screen flashes before gating.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthState {
    Loading,
    Unauthenticated,
    Authenticated(ScreenVariant),
}

impl AuthState {
    pub fn from_session(session: Option<&Session>) -> AuthState {
        match session {
            None => AuthState::Unauthenticated,
            Some(s) => AuthState::Authenticated(resolve(&s.user.role)),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, AuthState::Authenticated(_))
    }
}

/// Gate decision for a requested screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Gate {
    /// Session read still pending; render nothing yet.
    Wait,
    Render,
    ToLogin,
    ToDashboard,
}

/// The single place redirect rules live. Public screens bounce authenticated
/// users to their dashboard; protected screens bounce anonymous users to
/// login; everything else renders.
pub fn gate(screen: Screen, state: &AuthState) -> Gate {
    match state {
        AuthState::Loading => Gate::Wait,
        AuthState::Unauthenticated => {
            if screen.is_public() {
                Gate::Render
            } else {
                Gate::ToLogin
            }
        }
        AuthState::Authenticated(_) => {
            if screen.is_public() {
                Gate::ToDashboard
            } else {
                Gate::Render
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::UserRecord;

    const ALL_SCREENS: [Screen; 7] = [
        Screen::Login,
        Screen::Signup,
        Screen::Dashboard,
        Screen::Profile,
        Screen::ReportMissing,
        Screen::ReportSighting,
        Screen::History,
    ];

    fn session_with_role(role: &str) -> Session {
        Session {
            token: "t1".into(),
            user: UserRecord {
                role: role.into(),
                ..Default::default()
            },
        }
    }

    #[test]
    fn no_protected_screen_renders_while_unauthenticated() {
        for screen in ALL_SCREENS {
            if !screen.is_public() {
                assert_eq!(
                    gate(screen, &AuthState::Unauthenticated),
                    Gate::ToLogin,
                    "{screen:?} leaked past the gate"
                );
            }
        }
    }

    #[test]
    fn public_screens_render_while_unauthenticated() {
        assert_eq!(gate(Screen::Login, &AuthState::Unauthenticated), Gate::Render);
        assert_eq!(gate(Screen::Signup, &AuthState::Unauthenticated), Gate::Render);
    }

    #[test]
    fn login_and_signup_never_render_with_a_session() {
        let state = AuthState::from_session(Some(&session_with_role("doctor")));
        assert_eq!(gate(Screen::Login, &state), Gate::ToDashboard);
        assert_eq!(gate(Screen::Signup, &state), Gate::ToDashboard);
    }

    #[test]
    fn authenticated_requests_render_protected_screens() {
        let state = AuthState::from_session(Some(&session_with_role("police")));
        for screen in ALL_SCREENS {
            if !screen.is_public() {
                assert_eq!(gate(screen, &state), Gate::Render);
            }
        }
    }

    #[test]
    fn loading_renders_nothing() {
        for screen in ALL_SCREENS {
            assert_eq!(gate(screen, &AuthState::Loading), Gate::Wait);
        }
    }

    #[test]
    fn doctor_session_resolves_doctor_variant() {
        let state = AuthState::from_session(Some(&session_with_role("doctor")));
        assert_eq!(state, AuthState::Authenticated(ScreenVariant::Doctor));
    }

    #[test]
    fn unknown_role_is_authenticated_but_routes_to_not_found() {
        let state = AuthState::from_session(Some(&session_with_role("admin")));
        assert!(state.is_authenticated());
        assert_eq!(state, AuthState::Authenticated(ScreenVariant::NotFound));
        // still gated as a logged-in user
        assert_eq!(gate(Screen::Login, &state), Gate::ToDashboard);
    }

    #[test]
    fn absent_session_is_unauthenticated() {
        assert_eq!(AuthState::from_session(None), AuthState::Unauthenticated);
    }
}
