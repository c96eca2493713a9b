use crate::app::SessionContext;
use crate::bridge;
use crate::validate;
use leptos::*;
use wasm_bindgen_futures::spawn_local;

/// Current wall-clock time in the `datetime-local` input format
/// (`YYYY-MM-DDTHH:MM`).
fn now_datetime_local() -> String {
    let iso: String = js_sys::Date::new_0().to_iso_string().into();
    iso.get(..16).map(str::to_string).unwrap_or(iso)
}

#[component]
pub fn ReportSightingScreen() -> impl IntoView {
    let session = use_context::<SessionContext>();
    let photo_url = create_rw_signal(String::new());
    let location = create_rw_signal(String::new());
    let date_time = create_rw_signal(now_datetime_local());
    let description = create_rw_signal(String::new());
    let submitting = create_rw_signal(false);
    let success = create_rw_signal(None::<String>);
    let error = create_rw_signal(None::<String>);

    let reset = move || {
        photo_url.set(String::new());
        location.set(String::new());
        description.set(String::new());
        date_time.set(now_datetime_local());
    };

    let submit = move || {
        success.set(None);
        error.set(None);
        if let Some(msg) =
            validate::sighting_report(&photo_url.get_untracked(), &location.get_untracked())
        {
            error.set(Some(msg.to_string()));
            return;
        }
        let Some(token) = session
            .and_then(|ctx| ctx.0.get_untracked())
            .map(|sess| sess.token)
        else {
            error.set(Some("Not logged in.".to_string()));
            return;
        };
        submitting.set(true);
        let photo = photo_url.get_untracked();
        let place = location.get_untracked();
        let when = date_time.get_untracked();
        let notes = description.get_untracked();
        spawn_local(async move {
            match bridge::submit_sighting(&token, &photo, &place, &when, &notes).await {
                Ok(_) => {
                    success.set(Some("Sighting reported successfully!".to_string()));
                    reset();
                }
                Err(err) => error.set(Some(err)),
            }
            submitting.set(false);
        });
    };

    view! {
      <div class="panel report-sighting">
        <h2>"Report Unknown Person Sighting"</h2>
        <form on:submit=move |ev| { ev.prevent_default(); submit(); }>
          <label>"Photo URL *"</label>
          <input
            prop:value=move || photo_url.get()
            on:input=move |ev| photo_url.set(event_target_value(&ev))
            placeholder="Link to the captured photo"
          />

          <label>"Location *"</label>
          <input
            prop:value=move || location.get()
            on:input=move |ev| location.set(event_target_value(&ev))
            placeholder="Where the person was seen"
          />

          <label>"Date & Time *"</label>
          <input
            type="datetime-local"
            prop:value=move || date_time.get()
            on:input=move |ev| date_time.set(event_target_value(&ev))
          />

          <label>"Description / Notes"</label>
          <textarea
            prop:value=move || description.get()
            on:input=move |ev| description.set(event_target_value(&ev))
            placeholder="Describe the person and any other relevant details"
          ></textarea>

          <div class="row">
            <button type="button" on:click=move |_| reset() disabled=move || submitting.get()>
              "Reset"
            </button>
            <button type="submit" disabled=move || submitting.get()>
              {move || if submitting.get() { "Submitting..." } else { "Submit Report" }}
            </button>
          </div>
        </form>

        <Show when=move || success.get().is_some() fallback=|| ()>
          <p class="notice">{move || success.get().unwrap_or_default()}</p>
        </Show>
        <Show when=move || error.get().is_some() fallback=|| ()>
          <p class="error">{move || error.get().unwrap_or_default()}</p>
        </Show>
      </div>
    }
}
