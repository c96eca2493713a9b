use crate::app::SessionContext;
use crate::bridge;
use crate::validate::{self, MissingReportForm};
use leptos::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{FormData, HtmlInputElement};

fn form_data(
    form: &MissingReportForm,
    image: &web_sys::File,
    user_id: &str,
) -> Result<FormData, String> {
    let data = FormData::new().map_err(|e| format!("form data unavailable: {e:?}"))?;
    for (key, value) in form.text_fields() {
        data.append_with_str(key, value)
            .map_err(|e| format!("form field rejected: {e:?}"))?;
    }
    data.append_with_blob("image", image)
        .map_err(|e| format!("image rejected: {e:?}"))?;
    data.append_with_str("user_id", user_id)
        .map_err(|e| format!("form field rejected: {e:?}"))?;
    Ok(data)
}

#[component]
pub fn ReportMissingScreen() -> impl IntoView {
    let session = use_context::<SessionContext>();
    let form = create_rw_signal(MissingReportForm::default());
    let image = create_rw_signal(None::<web_sys::File>);
    let submitting = create_rw_signal(false);
    let success = create_rw_signal(None::<String>);
    let error = create_rw_signal(None::<String>);

    let bind = move |pick: fn(&mut MissingReportForm) -> &mut String| {
        move |ev: web_sys::Event| {
            form.update(|f| *pick(f) = event_target_value(&ev));
        }
    };
    let field = move |pick: fn(&MissingReportForm) -> &String| {
        move || form.with(|f| pick(f).clone())
    };

    let submit = move || {
        success.set(None);
        error.set(None);
        let snapshot = form.get_untracked();
        let file = image.get_untracked();
        if let Some(msg) = validate::missing_report(&snapshot, file.is_some()) {
            error.set(Some(msg.to_string()));
            return;
        }
        let Some(file) = file else { return };
        let Some(user_id) = session
            .and_then(|ctx| ctx.0.get_untracked())
            .and_then(|sess| sess.user.report_id())
        else {
            error.set(Some("User ID not found.".to_string()));
            return;
        };
        let data = match form_data(&snapshot, &file, &user_id) {
            Ok(data) => data,
            Err(err) => {
                error.set(Some(err));
                return;
            }
        };
        submitting.set(true);
        spawn_local(async move {
            match bridge::submit_missing_report(&data).await {
                Ok(_) => {
                    success.set(Some("Report submitted successfully!".to_string()));
                    form.set(MissingReportForm::default());
                    image.set(None);
                }
                Err(err) => error.set(Some(err)),
            }
            submitting.set(false);
        });
    };

    view! {
      <div class="panel report-missing">
        <h2>"Report Missing Person"</h2>
        <form on:submit=move |ev| { ev.prevent_default(); submit(); }>
          <label>"Full Name *"</label>
          <input prop:value=field(|f| &f.full_name) on:input=bind(|f| &mut f.full_name)/>

          <label>"Age When Missing *"</label>
          <input type="number" min="0"
                 prop:value=field(|f| &f.age_when_missing)
                 on:input=bind(|f| &mut f.age_when_missing)/>

          <label>"Gender *"</label>
          <select on:change=bind(|f| &mut f.gender)>
            <option value="">"Select"</option>
            <option value="Male">"Male"</option>
            <option value="Female">"Female"</option>
            <option value="Other">"Other"</option>
          </select>

          <label>"Last Seen Location *"</label>
          <input prop:value=field(|f| &f.last_seen_location)
                 on:input=bind(|f| &mut f.last_seen_location)/>

          <label>"Last Seen Date *"</label>
          <input type="date" prop:value=field(|f| &f.last_seen_date)
                 on:input=bind(|f| &mut f.last_seen_date)/>

          <label>"Photo (Image) *"</label>
          <input type="file" accept="image/*"
                 on:change=move |ev| {
                     let input: HtmlInputElement = event_target(&ev);
                     image.set(input.files().and_then(|files| files.get(0)));
                 }/>

          <label>"Guardian Name *"</label>
          <input prop:value=field(|f| &f.guardian_name)
                 on:input=bind(|f| &mut f.guardian_name)/>

          <label>"Relationship *"</label>
          <input prop:value=field(|f| &f.relationship)
                 on:input=bind(|f| &mut f.relationship)/>

          <label>"Phone Number *"</label>
          <input prop:value=field(|f| &f.phone_number)
                 on:input=bind(|f| &mut f.phone_number)/>

          <label>"Email *"</label>
          <input type="email" prop:value=field(|f| &f.email)
                 on:input=bind(|f| &mut f.email)/>

          <button type="submit" disabled=move || submitting.get()>
            {move || if submitting.get() { "Submitting..." } else { "Submit Report" }}
          </button>
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
