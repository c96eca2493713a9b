use crate::app::SessionContext;
use crate::bridge;
use crate::dto::UserRecord;
use crate::role::{resolve, Role, ScreenVariant};
use leptos::*;
use wasm_bindgen_futures::spawn_local;

fn yes_no(value: bool) -> &'static str {
    if value {
        "Yes"
    } else {
        "No"
    }
}

fn opt(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

/// Label/value rows for the profile card: the common fields plus the block
/// matching the user's role.
fn detail_rows(user: &UserRecord) -> Vec<(&'static str, String)> {
    let role_name = Role::parse(&user.role)
        .map(Role::display_name)
        .unwrap_or("Unknown")
        .to_string();
    let mut rows = vec![
        ("Name", user.name.clone()),
        ("Email", user.email.clone()),
        ("Phone", user.phone.clone()),
        ("Role", role_name),
    ];
    match resolve(&user.role) {
        ScreenVariant::Citizen => {
            rows.push(("Aadhar Number", opt(&user.aadhar_number)));
            rows.push(("Address", opt(&user.address)));
            rows.push(("Date of Birth", opt(&user.date_of_birth)));
            rows.push(("Gender", opt(&user.gender)));
        }
        ScreenVariant::Police => {
            rows.push(("Badge Number", opt(&user.badge_number)));
            rows.push(("Station Name", opt(&user.station_name)));
            rows.push(("Jurisdiction Area", opt(&user.jurisdiction_area)));
            rows.push(("Rank", opt(&user.rank)));
            rows.push(("Verified", yes_no(user.verified).to_string()));
        }
        ScreenVariant::Doctor => {
            rows.push(("Specialization", opt(&user.specialization)));
            rows.push(("License Number", opt(&user.license_number)));
            rows.push(("Hospital Name", opt(&user.hospital_name)));
            rows.push(("Location", opt(&user.location)));
            rows.push(("Verified", yes_no(user.verified).to_string()));
        }
        ScreenVariant::NotFound => {}
    }
    rows
}

#[component]
pub fn ProfileScreen(on_refresh: Callback<UserRecord>) -> impl IntoView {
    let session = use_context::<SessionContext>();
    let profile = create_rw_signal(None::<UserRecord>);
    let loading = create_rw_signal(true);
    let error = create_rw_signal(None::<String>);

    match session.and_then(|ctx| ctx.0.get_untracked()) {
        None => {
            loading.set(false);
            error.set(Some("Not logged in.".to_string()));
        }
        Some(sess) => {
            let token = sess.token;
            spawn_local(async move {
                match bridge::fetch_profile(&token).await {
                    Ok(user) => {
                        profile.set(Some(user.clone()));
                        on_refresh.call(user);
                    }
                    Err(err) => error.set(Some(err)),
                }
                loading.set(false);
            });
        }
    }

    view! {
      <div class="panel profile">
        <h2>"Profile"</h2>
        <Show when=move || loading.get() fallback=|| ()>
          <p>"Loading profile..."</p>
        </Show>
        <Show when=move || error.get().is_some() fallback=|| ()>
          <p class="error">{move || error.get().unwrap_or_default()}</p>
        </Show>
        <ul class="detail-list">
          <For
            each=move || profile.get().map(|u| detail_rows(&u)).unwrap_or_default()
            key=|(label, _)| *label
            children=|(label, value)| view! {
              <li><b>{label}</b>": " {value}</li>
            }
          />
        </ul>
      </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn citizen_rows_carry_citizen_fields_only() {
        let user = UserRecord {
            name: "Asha".into(),
            role: "user".into(),
            aadhar_number: Some("123412341234".into()),
            badge_number: Some("should not appear".into()),
            ..Default::default()
        };
        let rows = detail_rows(&user);
        assert!(rows.iter().any(|(label, _)| *label == "Aadhar Number"));
        assert!(!rows.iter().any(|(label, _)| *label == "Badge Number"));
        assert!(!rows.iter().any(|(label, _)| *label == "Verified"));
    }

    #[test]
    fn police_rows_include_verified_flag() {
        let user = UserRecord {
            role: "police".into(),
            verified: true,
            ..Default::default()
        };
        let rows = detail_rows(&user);
        assert!(rows.contains(&("Verified", "Yes".to_string())));
        assert_eq!(rows[3], ("Role", "Police Officer".to_string()));
    }

    #[test]
    fn unknown_role_shows_common_fields_only() {
        let user = UserRecord {
            name: "X".into(),
            role: "admin".into(),
            ..Default::default()
        };
        let rows = detail_rows(&user);
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[3], ("Role", "Unknown".to_string()));
    }
}
