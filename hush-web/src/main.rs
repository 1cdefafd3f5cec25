mod app;
mod bridge;
mod hooks;
mod pages;

pub mod components {
    pub mod architecture;
    pub mod bom;
    pub mod contact_form;
    pub mod footer;
    pub mod github;
    pub mod goals;
    pub mod hero;
    pub mod icon;
    pub mod nav_bar;
    pub mod preloader;
    pub mod problem;
    pub mod section;
    pub mod solution;
    pub mod team;
}

fn main() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();
    leptos::mount_to_body(app::App);
}
