mod app;
mod auth;
mod bridge;
mod dto;
mod role;
mod screens;
mod session;
mod validate;

use app::App;

fn main() {
    leptos::mount_to_body(App)
}
