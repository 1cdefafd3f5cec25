use super::icon::{Icon, IconKind};
use super::section::{CoverImage, DISPLAY_FONT};
use hush_content::{HeroContent, HeroStat, HERO_MASCOT_SRC, RELEASE_BADGE};
use leptos::*;

/// Landing hero, anchored as `#overview`.
#[component]
pub fn Hero(content: HeroContent, stats: &'static [HeroStat]) -> impl IntoView {
    view! {
      <section id="overview" class="relative flex min-h-screen w-full flex-col items-center overflow-hidden bg-[#030d1c] pt-20 md:pt-24">
        <div class="pointer-events-none absolute left-1/2 top-0 h-[500px] w-[80vw] -translate-x-1/2 rounded-full bg-blue-600/10 blur-[150px]"></div>

        <div class="relative z-10 mx-auto flex w-full max-w-6xl flex-1 flex-col items-center justify-center px-6 pb-24 pt-12 text-center">
          <div class="mb-8 inline-flex items-center gap-2 rounded-full border border-white/10 bg-white/5 px-4 py-1.5">
            <span class="flex h-2 w-2 animate-pulse rounded-full bg-green-500"></span>
            <span class="text-[0.65rem] uppercase tracking-[0.2em] text-white/70">{RELEASE_BADGE}</span>
          </div>

          <h1 class="mx-auto mb-10 mt-4 max-w-4xl text-4xl font-bold leading-[1.05] tracking-tight text-white sm:text-5xl md:text-6xl lg:text-7xl" style=DISPLAY_FONT>
            {content.headline}
          </h1>
          <p class="mx-auto mb-14 max-w-2xl text-lg leading-relaxed text-white/60 sm:text-xl">
            {content.subheadline}
          </p>

          <div class="mb-24 flex flex-col items-center gap-4 sm:flex-row">
            <a href="#solution" rel="external" class="cta-smooth flex h-12 min-w-[180px] items-center justify-center gap-2 rounded-full bg-white px-8 text-sm font-bold uppercase tracking-widest text-[#030d1c] transition-colors hover:bg-gray-200">
              {content.cta_text}
              <Icon kind=IconKind::ArrowRight size=16/>
            </a>
            <a href="#problem" rel="external" class="cta-smooth flex h-12 min-w-[180px] items-center justify-center rounded-full border border-white/20 px-8 text-sm font-medium uppercase tracking-widest text-white transition-colors hover:bg-white/5">
              "Learn More"
            </a>
          </div>

          <div class="relative z-10 mx-auto w-full max-w-7xl px-6">
            <div class="mb-6 hidden flex-row gap-4 md:flex">
              {stats.iter().map(|stat| view! {
                <div class="group flex flex-1 flex-col justify-center rounded-3xl border border-white/10 bg-white/5 p-6 backdrop-blur-md transition-colors hover:border-blue-400/30">
                  <div class="mb-2 flex items-center justify-between">
                    <span class="text-xs uppercase tracking-widest text-white/40">{stat.label}</span>
                    <div class="rounded-lg bg-white/5 p-2 text-blue-300 transition-colors group-hover:text-white">
                      <Icon kind=IconKind::for_stat(stat.label) class="h-5 w-5"/>
                    </div>
                  </div>
                  <div class="mb-1 text-left text-3xl font-bold text-white" style=DISPLAY_FONT>{stat.value}</div>
                  <div class="text-xs text-white/50">{stat.caption}</div>
                </div>
              }).collect_view()}
            </div>

            <div class="group relative h-[400px] overflow-hidden rounded-3xl border border-white/10 bg-[#020617]/80 backdrop-blur-lg lg:h-[500px]">
              <CoverImage src=HERO_MASCOT_SRC alt="Dashboard Preview" class="opacity-60 transition-opacity duration-700 group-hover:opacity-80"/>
              <div class="absolute inset-0 bg-gradient-to-t from-[#030d1c] via-transparent to-transparent"></div>
              <div class="absolute bottom-8 left-8 right-8 flex items-end justify-between text-left">
                <div>
                  <h3 class="mb-2 text-xl font-bold text-white">"Live Monitoring Dashboard"</h3>
                  <p class="max-w-md text-sm text-white/60">
                    "Real-time visualization of infant vitals, environmental metrics, and cry analysis."
                  </p>
                </div>
                <div class="hidden items-center gap-2 rounded-full border border-white/10 bg-black/50 px-4 py-2 text-xs text-white/70 backdrop-blur-md sm:flex">
                  <div class="h-2 w-2 rounded-full bg-green-500"></div>
                  "Live Demo Available"
                </div>
              </div>
            </div>
          </div>
        </div>
      </section>
    }
}
