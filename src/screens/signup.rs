use crate::auth::Screen;
use crate::bridge;
use crate::role::Role;
use crate::validate::{self, FieldErrors, SignupForm};
use leptos::*;
use wasm_bindgen_futures::spawn_local;

#[component]
fn Field(
    label: &'static str,
    name: &'static str,
    value: RwSignal<String>,
    errors: RwSignal<FieldErrors>,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(default = "")] placeholder: &'static str,
) -> impl IntoView {
    view! {
      <div class="form-group">
        <label>{label}</label>
        <input
          type=input_type
          prop:value=move || value.get()
          on:input=move |ev| {
              value.set(event_target_value(&ev));
              // clear the field's error as soon as the user edits it
              errors.update(|e| { e.remove(name); });
          }
          placeholder=placeholder
        />
        <Show when=move || errors.get().contains_key(name) fallback=|| ()>
          <span class="error">
            {move || errors.get().get(name).cloned().unwrap_or_default()}
          </span>
        </Show>
      </div>
    }
}

#[component]
pub fn SignupScreen(navigate: Callback<Screen>) -> impl IntoView {
    let role = create_rw_signal(Role::Citizen);
    let name = create_rw_signal(String::new());
    let email = create_rw_signal(String::new());
    let phone = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());
    let confirm_password = create_rw_signal(String::new());
    let aadhar_number = create_rw_signal(String::new());
    let address = create_rw_signal(String::new());
    let date_of_birth = create_rw_signal(String::new());
    let gender = create_rw_signal(String::new());
    let badge_number = create_rw_signal(String::new());
    let station_name = create_rw_signal(String::new());
    let jurisdiction_area = create_rw_signal(String::new());
    let rank = create_rw_signal(String::new());
    let specialization = create_rw_signal(String::new());
    let license_number = create_rw_signal(String::new());
    let hospital_name = create_rw_signal(String::new());
    let location = create_rw_signal(String::new());

    let errors = create_rw_signal(FieldErrors::new());
    let notice = create_rw_signal(None::<String>);
    let failure = create_rw_signal(None::<String>);
    let submitting = create_rw_signal(false);

    let collect = move || SignupForm {
        name: name.get_untracked(),
        email: email.get_untracked(),
        phone: phone.get_untracked(),
        password: password.get_untracked(),
        confirm_password: confirm_password.get_untracked(),
        aadhar_number: aadhar_number.get_untracked(),
        address: address.get_untracked(),
        date_of_birth: date_of_birth.get_untracked(),
        gender: gender.get_untracked(),
        badge_number: badge_number.get_untracked(),
        station_name: station_name.get_untracked(),
        jurisdiction_area: jurisdiction_area.get_untracked(),
        rank: rank.get_untracked(),
        specialization: specialization.get_untracked(),
        license_number: license_number.get_untracked(),
        hospital_name: hospital_name.get_untracked(),
        location: location.get_untracked(),
    };

    let submit = move || {
        let form = collect();
        let selected = role.get_untracked();
        let found = validate::signup_form(&form, selected);
        if !found.is_empty() {
            errors.set(found);
            return;
        }
        errors.set(FieldErrors::new());
        notice.set(None);
        failure.set(None);
        submitting.set(true);
        let payload = form.payload(selected);
        spawn_local(async move {
            match bridge::signup(selected, &payload).await {
                Ok(message) => {
                    if message.is_empty() {
                        notice.set(Some(
                            "Signup successful! Please check your email for verification."
                                .to_string(),
                        ));
                    } else {
                        notice.set(Some(message));
                    }
                }
                Err(err) => failure.set(Some(err)),
            }
            submitting.set(false);
        });
    };

    view! {
      <div class="card signup">
        <h1>"Create Account"</h1>
        <p class="subtitle">"Join our community and start your journey"</p>

        <form on:submit=move |ev| { ev.prevent_default(); submit(); }>
          <div class="form-group">
            <label>"Account Type"</label>
            <select on:change=move |ev| {
                role.set(Role::parse(&event_target_value(&ev)).unwrap_or(Role::Citizen));
                errors.set(FieldErrors::new());
            }>
              <For
                each=|| Role::ALL
                key=|r| r.as_str()
                children=move |r| view! {
                  <option value=r.as_str() selected=move || role.get() == r>
                    {r.display_name()}
                  </option>
                }
              />
            </select>
          </div>

          <Field label="Full Name" name="name" value=name errors=errors
                 placeholder="Enter your full name"/>
          <Field label="Email Address" name="email" value=email errors=errors
                 input_type="email" placeholder="Enter your email address"/>
          <Field label="Phone Number" name="phone" value=phone errors=errors
                 input_type="tel" placeholder="Enter 10-digit phone number"/>
          <Field label="Password" name="password" value=password errors=errors
                 input_type="password" placeholder="Enter password"/>
          <Field label="Confirm Password" name="confirm_password" value=confirm_password
                 errors=errors input_type="password" placeholder="Confirm password"/>

          <Show when=move || role.get() == Role::Citizen fallback=|| ()>
            <Field label="Aadhar Number" name="aadhar_number" value=aadhar_number
                   errors=errors placeholder="Enter 12-digit Aadhar number"/>
            <Field label="Address" name="address" value=address errors=errors
                   placeholder="Enter your complete address"/>
            <Field label="Date of Birth" name="date_of_birth" value=date_of_birth
                   errors=errors input_type="date"/>
            <div class="form-group">
              <label>"Gender"</label>
              <select on:change=move |ev| {
                  gender.set(event_target_value(&ev));
                  errors.update(|e| { e.remove("gender"); });
              }>
                <option value="">"Select Gender"</option>
                <option value="male">"Male"</option>
                <option value="female">"Female"</option>
                <option value="other">"Other"</option>
              </select>
              <Show when=move || errors.get().contains_key("gender") fallback=|| ()>
                <span class="error">
                  {move || errors.get().get("gender").cloned().unwrap_or_default()}
                </span>
              </Show>
            </div>
          </Show>

          <Show when=move || role.get() == Role::Police fallback=|| ()>
            <Field label="Badge Number" name="badge_number" value=badge_number
                   errors=errors placeholder="Enter badge number"/>
            <Field label="Station Name" name="station_name" value=station_name
                   errors=errors placeholder="Enter police station name"/>
            <Field label="Jurisdiction Area" name="jurisdiction_area" value=jurisdiction_area
                   errors=errors placeholder="Enter jurisdiction area"/>
            <div class="form-group">
              <label>"Rank"</label>
              <select on:change=move |ev| {
                  rank.set(event_target_value(&ev));
                  errors.update(|e| { e.remove("rank"); });
              }>
                <option value="">"Select Rank"</option>
                <option value="Constable">"Constable"</option>
                <option value="Sub Inspector">"Sub Inspector"</option>
                <option value="Inspector">"Inspector"</option>
                <option value="DSP">"DSP"</option>
                <option value="SP">"SP"</option>
              </select>
              <Show when=move || errors.get().contains_key("rank") fallback=|| ()>
                <span class="error">
                  {move || errors.get().get("rank").cloned().unwrap_or_default()}
                </span>
              </Show>
            </div>
          </Show>

          <Show when=move || role.get() == Role::Doctor fallback=|| ()>
            <Field label="Specialization" name="specialization" value=specialization
                   errors=errors placeholder="Enter medical specialization"/>
            <Field label="License Number" name="license_number" value=license_number
                   errors=errors placeholder="Enter medical license number"/>
            <Field label="Hospital Name" name="hospital_name" value=hospital_name
                   errors=errors placeholder="Enter hospital name"/>
            <Field label="Location" name="location" value=location errors=errors
                   placeholder="Enter hospital location"/>
          </Show>

          <button type="submit" disabled=move || submitting.get()>
            {move || if submitting.get() { "Creating Account..." } else { "Create Account" }}
          </button>
        </form>

        <Show when=move || notice.get().is_some() fallback=|| ()>
          <p class="notice">{move || notice.get().unwrap_or_default()}</p>
        </Show>
        <Show when=move || failure.get().is_some() fallback=|| ()>
          <p class="error">{move || failure.get().unwrap_or_default()}</p>
        </Show>

        <p class="footer">
          "Already have an account? "
          <button class="link" on:click=move |_| navigate.call(Screen::Login)>
            "Sign In"
          </button>
        </p>
      </div>
    }
}
