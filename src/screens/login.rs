use crate::auth::Screen;
use crate::bridge;
use crate::role::Role;
use crate::session::Session;
use crate::validate::{self, FieldErrors};
use leptos::*;
use wasm_bindgen_futures::spawn_local;

fn role_icon(role: Role) -> &'static str {
    match role {
        Role::Citizen => "👤",
        Role::Police => "👮",
        Role::Doctor => "👨‍⚕️",
    }
}

#[component]
pub fn LoginScreen(
    on_success: Callback<Session>,
    navigate: Callback<Screen>,
) -> impl IntoView {
    let email = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());
    let role = create_rw_signal(Role::Citizen);
    let errors = create_rw_signal(FieldErrors::new());
    let message = create_rw_signal(None::<String>);
    let submitting = create_rw_signal(false);

    let submit = move || {
        let found =
            validate::login_form(&email.get_untracked(), &password.get_untracked());
        if !found.is_empty() {
            errors.set(found);
            return;
        }
        errors.set(FieldErrors::new());
        message.set(None);
        submitting.set(true);
        let em = email.get_untracked();
        let pw = password.get_untracked();
        let selected = role.get_untracked();
        spawn_local(async move {
            match bridge::login(em.trim(), &pw, selected).await {
                Ok(data) => {
                    // The gate flips to Authenticated only now, on a
                    // role-bearing record from the backend.
                    on_success.call(Session {
                        token: data.token,
                        user: data.user,
                    });
                }
                Err(err) => message.set(Some(err)),
            }
            submitting.set(false);
        });
    };

    let field_error = move |name: &'static str| errors.get().get(name).cloned();

    view! {
      <div class="card login">
        <h1>"Welcome Back"</h1>
        <p class="subtitle">"Sign in to your account to continue"</p>

        <form on:submit=move |ev| { ev.prevent_default(); submit(); }>
          <label>"Account Type"</label>
          <div class="role-selector">
            <For
              each=|| Role::ALL
              key=|r| r.as_str()
              children=move |r| view! {
                <button
                  type="button"
                  class="role-option"
                  class:active=move || role.get() == r
                  on:click=move |_| role.set(r)
                >
                  <span>{role_icon(r)}</span>
                  <span>{r.display_name()}</span>
                </button>
              }
            />
          </div>

          <label>"Email Address"</label>
          <input
            type="email"
            prop:value=move || email.get()
            on:input=move |ev| email.set(event_target_value(&ev))
            placeholder="Enter your email address"
          />
          <Show when=move || field_error("email").is_some() fallback=|| ()>
            <span class="error">{move || field_error("email").unwrap_or_default()}</span>
          </Show>

          <label>"Password"</label>
          <input
            type="password"
            prop:value=move || password.get()
            on:input=move |ev| password.set(event_target_value(&ev))
            placeholder="Enter your password"
          />
          <Show when=move || field_error("password").is_some() fallback=|| ()>
            <span class="error">{move || field_error("password").unwrap_or_default()}</span>
          </Show>

          <button type="submit" disabled=move || submitting.get()>
            {move || if submitting.get() { "Signing In..." } else { "Sign In" }}
          </button>
        </form>

        <Show when=move || message.get().is_some() fallback=|| ()>
          <p class="error">{move || message.get().unwrap_or_default()}</p>
        </Show>

        <p class="footer">
          "Don't have an account? "
          <button class="link" on:click=move |_| navigate.call(Screen::Signup)>
            "Sign Up"
          </button>
        </p>
      </div>
    }
}
