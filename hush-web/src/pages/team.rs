use super::{PageShell, StatTileCard};
use crate::components::{
    footer::SiteFooter, nav_bar::NavBar, section::DISPLAY_FONT, team::TeamSection,
};
use hush_content::{
    CONTACT_EMAIL, NAVIGATION, TEAM_HIGHLIGHTS, TEAM_MEMBERS, TEAM_PRINCIPLES, TEAM_SECTION_TITLE,
};
use hush_core::Variant;
use leptos::*;

#[component]
pub fn TeamPage() -> impl IntoView {
    let ready = create_rw_signal(false);

    view! {
      <PageShell ready=ready>
        <NavBar items=NAVIGATION/>
        <main class="relative z-20 mx-auto flex w-full max-w-7xl flex-col gap-14 px-6 pb-28 pt-32">
          <section class="relative overflow-hidden rounded-3xl border border-white/10 bg-gradient-to-br from-[#0b1728] via-[#040b15] to-[#0b1728] p-10 shadow-2xl backdrop-blur-2xl">
            <div class="absolute -left-10 top-8 h-56 w-56 rounded-full bg-gild-400/20 blur-3xl"></div>
            <div class="absolute bottom-[-40px] right-[-40px] h-72 w-72 rounded-full bg-sky-400/10 blur-3xl"></div>
            <div class="relative flex flex-col gap-8 lg:flex-row lg:items-center lg:justify-between">
              <div class="max-w-2xl space-y-4">
                <p class="text-xs uppercase tracking-[0.35em] text-gild-200">"Hush Collective"</p>
                <h1 class="text-4xl font-bold text-white sm:text-5xl" style=DISPLAY_FONT>
                  "A multidisciplinary team turning neonatal sensing into calm decisions."
                </h1>
                <p class="text-base leading-relaxed text-white/70">
                  "Firmware tacticians, cry linguists, and cloud engineers work in the same sprint room so NICU teams get a unified signal instead of noise."
                </p>
              </div>
              <div class="grid w-full max-w-md grid-cols-2 gap-4 text-center text-sm">
                {TEAM_HIGHLIGHTS.iter().enumerate().map(|(i, tile)| view! {
                  <StatTileCard label=tile.label value=tile.value caption=tile.caption emphasis={i == 1}/>
                }).collect_view()}
              </div>
            </div>
          </section>

          <section class="grid gap-4 md:grid-cols-3">
            {TEAM_PRINCIPLES.iter().map(|principle| view! {
              <div class="rounded-3xl border border-white/10 bg-white/8 p-6 shadow-md shadow-black/20 backdrop-blur-lg">
                <p class="text-xs uppercase tracking-[0.35em] text-gild-200">"Principle"</p>
                <h3 class="mt-3 text-xl font-semibold text-white">{principle.title}</h3>
                <p class="mt-2 text-sm leading-relaxed text-white/70">{principle.body}</p>
              </div>
            }).collect_view()}
          </section>

          <TeamSection title=TEAM_SECTION_TITLE members=TEAM_MEMBERS variant=Variant::Bento/>

          <section class="rounded-3xl border border-white/10 bg-white/5 p-8 shadow-lg shadow-black/30 backdrop-blur-lg">
            <div class="flex flex-col gap-6 lg:flex-row lg:items-center lg:justify-between">
              <div class="max-w-2xl">
                <p class="text-xs uppercase tracking-[0.35em] text-white/60">"Join the mission"</p>
                <h2 class="mt-3 text-3xl font-bold text-white" style=DISPLAY_FONT>
                  "We partner with clinicians, founders, and makers obsessed with neonatal calm."
                </h2>
                <p class="mt-3 text-sm text-white/70">
                  "Tell us how you want to plug in: pilots, research, firmware, or manufacturing. We assemble bespoke squads for every hospital network."
                </p>
              </div>
              <a
                href=format!("mailto:{CONTACT_EMAIL}")
                class="cta-smooth inline-flex items-center justify-center rounded-full bg-white px-8 py-3 text-xs font-semibold uppercase tracking-[0.3em] text-[#0b1626] transition-colors hover:bg-gild-200"
              >
                "Email the team"
              </a>
            </div>
          </section>
        </main>
        <SiteFooter/>
      </PageShell>
    }
}
