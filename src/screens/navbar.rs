use crate::app::SessionContext;
use crate::auth::Screen;
use crate::role::{resolve, Role, ScreenVariant};
use leptos::*;

#[component]
pub fn Navbar(navigate: Callback<Screen>, on_logout: Callback<()>) -> impl IntoView {
    let session = use_context::<SessionContext>();
    let user = move || session.and_then(|ctx| ctx.0.get()).map(|sess| sess.user);
    let is_citizen = move || {
        user()
            .map(|u| resolve(&u.role) == ScreenVariant::Citizen)
            .unwrap_or(false)
    };

    view! {
      <header class="topnav">
        <div class="topnav-left">
          <span class="logo">"CivicIQ"</span>
          <nav>
            <button on:click=move |_| navigate.call(Screen::Dashboard)>"Dashboard"</button>
            <button on:click=move |_| navigate.call(Screen::Profile)>"Profile"</button>
            <Show when=is_citizen fallback=|| ()>
              <button on:click=move |_| navigate.call(Screen::History)>"Reports"</button>
              <button on:click=move |_| navigate.call(Screen::ReportMissing)>
                "Report Missing"
              </button>
              <button on:click=move |_| navigate.call(Screen::ReportSighting)>
                "Report Sighting"
              </button>
            </Show>
          </nav>
        </div>
        <div class="topnav-right">
          {move || user().map(|u| {
              let role_name = Role::parse(&u.role)
                  .map(Role::display_name)
                  .unwrap_or("Unknown");
              let name = u.name.clone();
              let verified = u.verified;
              view! {
                <div class="identity">
                  <span class="name">
                    {name}
                    <Show when=move || verified fallback=|| ()>
                      <span class="verified" title="Verified user">"✓"</span>
                    </Show>
                  </span>
                  <span class="role">{role_name}</span>
                </div>
              }
          })}
          <button class="logout" title="Logout" on:click=move |_| on_logout.call(())>
            "Logout"
          </button>
        </div>
      </header>
    }
}
