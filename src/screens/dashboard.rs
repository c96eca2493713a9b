use crate::app::SessionContext;
use crate::auth::Screen;
use crate::role::{resolve, ScreenVariant};
use leptos::*;

#[component]
pub fn DashboardScreen(navigate: Callback<Screen>) -> impl IntoView {
    let session = use_context::<SessionContext>();
    let variant = move || {
        session
            .and_then(|ctx| ctx.0.get())
            .map(|sess| resolve(&sess.user.role))
            .unwrap_or(ScreenVariant::NotFound)
    };

    move || match variant() {
        ScreenVariant::Citizen => view! {
          <div class="panel dashboard">
            <h2>"User Dashboard"</h2>
            <p>"Welcome! Report a missing person, submit a sighting, or review your reports."</p>
            <div class="row">
              <button on:click=move |_| navigate.call(Screen::ReportMissing)>
                "Report Missing Person"
              </button>
              <button on:click=move |_| navigate.call(Screen::ReportSighting)>
                "Report a Sighting"
              </button>
              <button on:click=move |_| navigate.call(Screen::History)>
                "My Reports"
              </button>
              <button on:click=move |_| navigate.call(Screen::Profile)>
                "View Profile"
              </button>
            </div>
          </div>
        }
        .into_view(),
        ScreenVariant::Doctor => view! {
          <div class="panel dashboard">
            <h2>"Doctor Dashboard"</h2>
            <p>"Welcome, doctor! Here you can manage newborn details, view history, and more."</p>
            <button on:click=move |_| navigate.call(Screen::Profile)>"View Profile"</button>
          </div>
        }
        .into_view(),
        ScreenVariant::Police => view! {
          <div class="panel dashboard">
            <h2>"Police Dashboard"</h2>
            <p>"Welcome, officer! Here you can search cases, view station details, and more."</p>
            <button on:click=move |_| navigate.call(Screen::Profile)>"View Profile"</button>
          </div>
        }
        .into_view(),
        ScreenVariant::NotFound => view! {
          <div class="panel dashboard">
            <h2>"Not Found"</h2>
            <p>"No dashboard is available for this account."</p>
          </div>
        }
        .into_view(),
    }
}
