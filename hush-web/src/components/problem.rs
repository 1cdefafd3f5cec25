use super::section::{two_digit, CoverImage, SectionIntro, DISPLAY_FONT};
use hush_content::{ProblemCard, PROBLEM_IMAGE_SRC};
use hush_core::Variant;
use leptos::*;

const HEADLINE: &str = "4 Pain Points in Neonatal Care";

#[component]
pub fn ProblemSection(
    title: &'static str,
    cards: &'static [ProblemCard],
    #[prop(optional)] variant: Variant,
) -> impl IntoView {
    match variant {
        Variant::Bento => view! {
          <div>
            <SectionIntro eyebrow="Main Challenges" title=title/>
            <section id="problem" class="grid grid-cols-1 gap-6 md:grid-cols-3">
              <div class="group relative flex flex-col justify-between overflow-hidden rounded-3xl border border-white/10 bg-white/10 p-8 shadow-lg shadow-black/30 backdrop-blur-xl md:col-span-1">
                <div class="absolute inset-0 bg-gradient-to-br from-blue-500/10 to-transparent opacity-0 transition-opacity group-hover:opacity-100"></div>
                <div>
                  <div class="mb-4 text-xs uppercase tracking-widest text-blue-300">"Pain Points"</div>
                  <h2 class="mb-4 text-3xl font-bold text-white" style=DISPLAY_FONT>{HEADLINE}</h2>
                </div>
                <div class="relative mt-8 aspect-video overflow-hidden rounded-xl border border-white/10">
                  <CoverImage src=PROBLEM_IMAGE_SRC alt="NICU Environment" class="opacity-60"/>
                </div>
              </div>
              <div class="grid grid-cols-1 gap-4 sm:grid-cols-2 md:col-span-2">
                {cards.iter().enumerate().map(|(i, card)| view! {
                  <div class="rounded-3xl border border-white/10 bg-white/8 p-6 shadow-md shadow-black/20 backdrop-blur-lg transition-colors hover:border-blue-500/30">
                    <div class="mb-2 text-xs font-bold text-blue-400">{two_digit(i)}</div>
                    <h3 class="mb-2 text-lg font-bold text-white">{card.title}</h3>
                    <p class="text-xs leading-relaxed text-white/50">{card.description}</p>
                  </div>
                }).collect_view()}
              </div>
            </section>
          </div>
        }
        .into_view(),

        Variant::Centered => view! {
          <section id="problem" class="px-6 py-20">
            <SectionIntro
              eyebrow="Challenges"
              title=HEADLINE
              lead="Addressing the critical barriers so neonatal teams can focus on lifesaving care."
            />
            <div class="mx-auto grid max-w-7xl grid-cols-1 gap-6 md:grid-cols-2 lg:grid-cols-4">
              {cards.iter().enumerate().map(|(i, card)| view! {
                <div class="group rounded-2xl border border-white/10 bg-white/5 p-8 text-center transition-colors hover:bg-white/10">
                  <div class="mx-auto mb-6 flex h-12 w-12 items-center justify-center rounded-full bg-blue-500/20 font-bold text-blue-300 transition-transform group-hover:scale-110">
                    {i + 1}
                  </div>
                  <h3 class="mb-3 text-xl font-bold text-white">{card.title}</h3>
                  <p class="text-sm text-white/50">{card.description}</p>
                </div>
              }).collect_view()}
            </div>
          </section>
        }
        .into_view(),

        _ => view! {
          <section id="problem" class="section-frame rounded-[26px] px-10 py-12">
            <div class="flex flex-col gap-12 text-white lg:flex-row">
              <div class="space-y-6 lg:w-1/3">
                <div class="ornament-divider">"NICU pain points"</div>
                <h2 class="text-3xl text-gild-300" style=DISPLAY_FONT>{title}</h2>
                <p class="text-sm leading-relaxed text-white/70">
                  "These are the critical barriers we are addressing so neonatal teams can stay focused on lifesaving care instead of chasing data."
                </p>
                <div class="group relative aspect-[4/3] w-full overflow-hidden rounded-2xl border border-white/10 bg-white/5">
                  <CoverImage
                    src=PROBLEM_IMAGE_SRC
                    alt="Busy Hospital Environment"
                    class="opacity-60 grayscale transition-opacity duration-500 group-hover:opacity-80 hover:grayscale-0"
                  />
                  <div class="absolute inset-0 bg-gradient-to-b from-transparent to-[#071a2d]/90"></div>
                </div>
              </div>

              <div class="grid content-start gap-4 md:grid-cols-2 lg:w-2/3">
                {cards.iter().enumerate().map(|(i, card)| view! {
                  <div class="rounded-[22px] border border-[#15324f]/60 bg-[#071a2d] p-6 text-white/80">
                    <div class="flex items-center gap-3 text-white/60">
                      <span class="flex h-8 w-8 items-center justify-center rounded-full border border-white/15 bg-white/5 text-sm font-semibold">
                        {two_digit(i)}
                      </span>
                      <p class="text-xs uppercase tracking-[0.4em]">{card.id}</p>
                    </div>
                    <h3 class="mt-3 text-xl text-gild-300" style=DISPLAY_FONT>{card.title}</h3>
                    <p class="mt-2 text-sm text-white/70">{card.description}</p>
                  </div>
                }).collect_view()}
              </div>
            </div>
          </section>
        }
        .into_view(),
    }
}
