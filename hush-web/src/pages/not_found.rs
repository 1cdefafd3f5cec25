use crate::components::{footer::SiteFooter, nav_bar::NavBar, section::DISPLAY_FONT};
use hush_content::NAVIGATION;
use leptos::*;
use leptos_router::A;

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
      <div class="relative flex min-h-screen flex-col bg-ember-900 text-white">
        <NavBar items=NAVIGATION/>
        <main class="relative z-20 mx-auto flex w-full max-w-3xl flex-1 flex-col items-center justify-center gap-6 px-6 pb-32 pt-40 text-center">
          <p class="text-xs uppercase tracking-[0.35em] text-gild-200">"404"</p>
          <h1 class="text-4xl font-bold text-white" style=DISPLAY_FONT>"This bay is empty."</h1>
          <p class="text-white/70">"The page you were looking for does not exist."</p>
          <A
            href="/"
            class="cta-smooth inline-flex items-center justify-center rounded-full bg-white px-6 py-3 text-xs font-semibold uppercase tracking-[0.3em] text-[#0b1626] transition-colors hover:bg-gild-200"
          >
            "Back to home"
          </A>
        </main>
        <SiteFooter/>
      </div>
    }
}
