use crate::auth::{gate, AuthState, Gate, Screen};
use crate::dto::UserRecord;
use crate::screens::{
    DashboardScreen, HistoryScreen, LoginScreen, Navbar, ProfileScreen, ReportMissingScreen,
    ReportSightingScreen, SignupScreen,
};
use crate::session::{self, Session};
use leptos::*;

/// The session snapshot shared with every screen. `None` means logged out.
#[derive(Clone, Copy)]
pub struct SessionContext(pub RwSignal<Option<Session>>);

#[component]
pub fn App() -> impl IntoView {
    let store = session::browser();
    let session = create_rw_signal(None::<Session>);
    let auth = create_rw_signal(AuthState::Loading);
    let screen = create_rw_signal(Screen::Login);
    provide_context(SessionContext(session));

    // Every navigation goes through the gate; redirect rules live in one place.
    let navigate = move |target: Screen| match gate(target, &auth.get_untracked()) {
        Gate::Wait => {}
        Gate::Render => screen.set(target),
        Gate::ToLogin => screen.set(Screen::Login),
        Gate::ToDashboard => screen.set(Screen::Dashboard),
    };
    let navigate_cb = Callback::new(navigate);

    // Read the persisted session once, then gate the landing screen.
    let loaded = store.load();
    auth.set(AuthState::from_session(loaded.as_ref()));
    session.set(loaded);
    navigate(Screen::Dashboard);

    let on_login = {
        let store = store.clone();
        Callback::new(move |sess: Session| {
            if let Err(err) = store.save(&sess) {
                logging::error!("failed to persist session: {err}");
            }
            auth.set(AuthState::from_session(Some(&sess)));
            session.set(Some(sess));
            screen.set(Screen::Dashboard);
        })
    };

    let on_logout = {
        let store = store.clone();
        Callback::new(move |_: ()| {
            store.clear();
            session.set(None);
            auth.set(AuthState::Unauthenticated);
            screen.set(Screen::Login);
        })
    };

    // A successful profile fetch overwrites the cached user snapshot.
    let on_profile = {
        let store = store.clone();
        Callback::new(move |user: UserRecord| {
            session.update(|slot| {
                if let Some(sess) = slot.as_mut() {
                    sess.user = user;
                }
            });
            if let Some(sess) = session.get_untracked() {
                if let Err(err) = store.save(&sess) {
                    logging::error!("failed to refresh session snapshot: {err}");
                }
            }
        })
    };

    view! {
      <div class="app">
        <Show when=move || !screen.get().is_public() fallback=|| ()>
          <Navbar navigate=navigate_cb on_logout=on_logout/>
        </Show>
        {move || match screen.get() {
            Screen::Login => {
                view! { <LoginScreen on_success=on_login navigate=navigate_cb/> }.into_view()
            }
            Screen::Signup => view! { <SignupScreen navigate=navigate_cb/> }.into_view(),
            Screen::Dashboard => view! { <DashboardScreen navigate=navigate_cb/> }.into_view(),
            Screen::Profile => view! { <ProfileScreen on_refresh=on_profile/> }.into_view(),
            Screen::ReportMissing => view! { <ReportMissingScreen/> }.into_view(),
            Screen::ReportSighting => view! { <ReportSightingScreen/> }.into_view(),
            Screen::History => view! { <HistoryScreen/> }.into_view(),
        }}
      </div>
    }
}
