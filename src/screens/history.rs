use crate::app::SessionContext;
use crate::bridge;
use crate::dto::{MissingReportDto, SightingReportDto};
use leptos::*;
use wasm_bindgen_futures::spawn_local;

#[derive(Clone, Copy, PartialEq)]
enum Tab {
    Missing,
    Spotted,
}

/// "found" (any casing) counts as found; everything else is an active case.
fn status_label(status: Option<&str>) -> &'static str {
    match status {
        Some(s) if s.eq_ignore_ascii_case("found") => "Found",
        _ => "Active",
    }
}

/// Age values arrive as either a JSON number or a string; render both plainly.
fn age_text(age: Option<&serde_json::Value>) -> String {
    match age {
        Some(serde_json::Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => "?".to_string(),
    }
}

fn stats<'a>(statuses: impl Iterator<Item = Option<&'a str>>) -> (usize, usize, usize) {
    let mut total = 0;
    let mut found = 0;
    for status in statuses {
        total += 1;
        if status_label(status) == "Found" {
            found += 1;
        }
    }
    (total, total - found, found)
}

#[component]
pub fn HistoryScreen() -> impl IntoView {
    let session = use_context::<SessionContext>();
    let tab = create_rw_signal(Tab::Missing);
    let missing = create_rw_signal(Vec::<MissingReportDto>::new());
    let spotted = create_rw_signal(Vec::<SightingReportDto>::new());
    let loading = create_rw_signal(true);
    let error = create_rw_signal(None::<String>);

    match session.and_then(|ctx| ctx.0.get_untracked()) {
        None => {
            loading.set(false);
            error.set(Some("User not logged in.".to_string()));
        }
        Some(sess) => match sess.user.report_id() {
            None => {
                loading.set(false);
                error.set(Some("User ID not found.".to_string()));
            }
            Some(user_id) => {
                let token = sess.token;
                spawn_local(async move {
                    // Either list failing degrades to an empty tab, not an
                    // error for the whole screen.
                    match bridge::missing_reports(&token, &user_id).await {
                        Ok(list) => missing.set(list),
                        Err(err) => logging::log!("missing reports unavailable: {err}"),
                    }
                    match bridge::spotted_reports(&token, &user_id).await {
                        Ok(list) => spotted.set(list),
                        Err(err) => logging::log!("spotted reports unavailable: {err}"),
                    }
                    loading.set(false);
                });
            }
        },
    }

    let current_stats = move || match tab.get() {
        Tab::Missing => missing.with(|list| {
            stats(list.iter().map(|r| r.status.as_deref()))
        }),
        Tab::Spotted => spotted.with(|list| {
            stats(list.iter().map(|r| r.status.as_deref()))
        }),
    };

    view! {
      <div class="panel history">
        <h2>"My Reports"</h2>

        <div class="tabs">
          <button class:active=move || tab.get() == Tab::Missing
                  on:click=move |_| tab.set(Tab::Missing)>
            "Missing Person Reports"
          </button>
          <button class:active=move || tab.get() == Tab::Spotted
                  on:click=move |_| tab.set(Tab::Spotted)>
            "Spotted Reports"
          </button>
        </div>

        {move || {
            let (total, active, found) = current_stats();
            view! {
              <div class="stats">
                <span>{format!("Total: {total}")}</span>
                <span>{format!("Active: {active}")}</span>
                <span>{format!("Found: {found}")}</span>
              </div>
            }
        }}

        <Show when=move || loading.get() fallback=|| ()>
          <p>"Loading reports..."</p>
        </Show>
        <Show when=move || error.get().is_some() fallback=|| ()>
          <p class="error">{move || error.get().unwrap_or_default()}</p>
        </Show>

        <Show when=move || tab.get() == Tab::Missing fallback=|| ()>
          <ul class="report-list">
            <For
              each=move || missing.get()
              key=|r| {
                  r.id.clone()
                      .unwrap_or_else(|| format!("{}-{}", r.full_name, r.last_seen_date))
              }
              children=|r| {
                let status = status_label(r.status.as_deref());
                let age = age_text(r.age_when_missing.as_ref());
                view! {
                  <li class="report-card">
                    <div><b>{r.full_name}</b> <span class="badge">{status}</span></div>
                    <div class="meta">{format!("{}, {} when missing", r.gender, age)}</div>
                    <div class="meta">
                      {format!("Last seen: {} on {}", r.last_seen_location, r.last_seen_date)}
                    </div>
                    <div class="meta">{format!("Guardian: {}", r.guardian_name)}</div>
                  </li>
                }
              }
            />
          </ul>
        </Show>

        <Show when=move || tab.get() == Tab::Spotted fallback=|| ()>
          <ul class="report-list">
            <For
              each=move || spotted.get()
              key=|r| {
                  r.id.clone()
                      .unwrap_or_else(|| format!("{}-{}", r.photo_url, r.date_time))
              }
              children=|r| {
                let status = status_label(r.status.as_deref());
                view! {
                  <li class="report-card">
                    <div><b>{r.location}</b> <span class="badge">{status}</span></div>
                    <div class="meta">{format!("Seen at: {}", r.date_time)}</div>
                    <div class="meta">{r.description}</div>
                    <a class="meta" href=r.photo_url target="_blank">"Photo"</a>
                  </li>
                }
              }
            />
          </ul>
        </Show>
      </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_defaults_to_active() {
        assert_eq!(status_label(None), "Active");
        assert_eq!(status_label(Some("open")), "Active");
        assert_eq!(status_label(Some("FOUND")), "Found");
        assert_eq!(status_label(Some("found")), "Found");
    }

    #[test]
    fn stats_count_active_and_found() {
        let statuses = [Some("found"), None, Some("active"), Some("Found")];
        let (total, active, found) = stats(statuses.into_iter());
        assert_eq!((total, active, found), (4, 2, 2));
    }

    #[test]
    fn stats_of_empty_list_are_zero() {
        assert_eq!(stats(std::iter::empty()), (0, 0, 0));
    }

    #[test]
    fn age_renders_numbers_and_strings_alike() {
        assert_eq!(age_text(Some(&serde_json::json!(12))), "12");
        assert_eq!(age_text(Some(&serde_json::json!("12"))), "12");
        assert_eq!(age_text(None), "?");
    }
}
