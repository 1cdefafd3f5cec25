mod bom;
mod home;
mod not_found;
mod team;

pub use bom::BomPage;
pub use home::HomePage;
pub use not_found::NotFound;
pub use team::TeamPage;

use crate::components::preloader::Preloader;
use crate::hooks::use_hash_scroll;
use leptos::*;

/// Preloader followed by the page body, which stays hidden until the
/// preloader completes. `ready` flips once and enables hash scrolling.
#[component]
fn PageShell(ready: RwSignal<bool>, children: Children) -> impl IntoView {
    use_hash_scroll(Signal::derive(move || ready.get()));

    view! {
      <Show when=move || !ready.get()>
        <Preloader on_complete=move |_| ready.set(true)/>
      </Show>
      <div class=move || {
        if ready.get() {
          "relative flex min-h-screen flex-col bg-ember-900 text-white"
        } else {
          "relative flex min-h-screen flex-col bg-ember-900 text-white hidden"
        }
      }>
        {children()}
      </div>
    }
}

#[component]
fn StatTileCard(
    label: &'static str,
    #[prop(into)] value: String,
    caption: &'static str,
    #[prop(optional)] emphasis: bool,
) -> impl IntoView {
    let value_class = if emphasis {
        "text-3xl font-bold text-gild-200"
    } else {
        "text-3xl font-bold text-white"
    };
    view! {
      <div class="rounded-2xl border border-white/15 bg-white/5 p-4">
        <p class="text-xs uppercase tracking-[0.25em] text-white/60">{label}</p>
        <p class=value_class>{value}</p>
        <p class="text-xs text-white/60">{caption}</p>
      </div>
    }
}
