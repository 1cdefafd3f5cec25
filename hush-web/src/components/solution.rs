use super::icon::{Icon, IconKind};
use super::section::{CoverImage, DISPLAY_FONT};
use hush_content::{SolutionFeature, SOLUTION_CARD_IMAGES, SOLUTION_IMAGE_SRC, SOLUTION_OVERVIEW_IMAGE_SRC};
use hush_core::Variant;
use leptos::*;

/// Bento cards: the first two are wide and show more tags.
fn bento_layout(index: usize) -> (&'static str, usize) {
    if index < 2 {
        ("md:col-span-3", 3)
    } else {
        ("md:col-span-2", 2)
    }
}

#[component]
fn FeatureTags(tags: &'static [&'static str], limit: usize) -> impl IntoView {
    (!tags.is_empty()).then(|| {
        view! {
          <div class="mt-auto flex flex-wrap gap-2">
            {tags.iter().take(limit).map(|tag| view! {
              <span class="rounded-md border border-white/5 bg-white/5 px-2.5 py-1 text-[10px] uppercase tracking-wide text-white/50 transition-colors group-hover:border-white/10 group-hover:bg-white/10">
                {*tag}
              </span>
            }).collect_view()}
            {(tags.len() > limit).then(|| view! { <span class="px-2 py-1 text-[10px] text-white/30">"+ more"</span> })}
          </div>
        }
    })
}

#[component]
pub fn SolutionSection(
    title: &'static str,
    features: &'static [SolutionFeature],
    #[prop(optional)] variant: Variant,
) -> impl IntoView {
    match variant {
        Variant::Bento => view! {
          <div class="py-12">
            <div class="mx-auto mb-16 max-w-4xl text-center">
              <span class="mb-6 inline-block rounded-full border border-white/10 bg-white/5 px-3 py-1 text-[0.65rem] uppercase tracking-widest text-white/60">
                "Our Answer"
              </span>
              <h2 class="text-4xl font-bold text-white md:text-5xl" style=DISPLAY_FONT>"Proposed Solution"</h2>
            </div>
            <section id="solution" class="w-full">
              <div class="grid auto-rows-[minmax(180px,auto)] grid-cols-1 gap-5 md:grid-cols-6">
                <div class="group relative h-64 overflow-hidden rounded-3xl border border-white/10 shadow-2xl shadow-black/30 md:col-span-4 md:h-auto">
                  <CoverImage
                    src=SOLUTION_IMAGE_SRC
                    alt="Hush Ecosystem Overview"
                    class="transition-transform duration-1000 group-hover:scale-105"
                  />
                  <div class="absolute inset-0 bg-gradient-to-r from-[#071a2d]/90 via-[#071a2d]/20 to-transparent"></div>
                  <div class="absolute bottom-6 left-6 max-w-sm">
                    <span class="mb-2 inline-block rounded-full border border-white/10 bg-white/10 px-3 py-1 text-xs font-medium text-white backdrop-blur-md">
                      "Live Environment"
                    </span>
                    <p class="mt-2 text-sm text-white/80">"Real-time synchronization across all hardware nodes."</p>
                  </div>
                </div>

                <div class="flex flex-col justify-center rounded-3xl border border-white/10 bg-gradient-to-br from-white/10 to-white/5 p-8 backdrop-blur-xl md:col-span-2">
                  <div class="mb-4 flex items-center gap-2">
                    <span class="h-2 w-2 animate-pulse rounded-full bg-blue-500"></span>
                    <span class="text-xs font-bold uppercase tracking-widest text-blue-300">"System Architecture"</span>
                  </div>
                  <h2 class="mb-4 text-3xl font-bold leading-tight text-white md:text-4xl" style=DISPLAY_FONT>{title}</h2>
                  <p class="text-sm leading-relaxed text-white/60">
                    "A modular ecosystem designed for redundancy, speed, and clinical precision."
                  </p>
                </div>

                {features.iter().enumerate().map(|(i, feature)| {
                  let (span, tag_limit) = bento_layout(i);
                  view! {
                    <div class=format!("{span} group relative flex flex-col justify-between rounded-3xl border border-white/5 bg-[#0b172a]/80 p-6 shadow-lg transition-all duration-300 hover:border-blue-500/30 hover:bg-[#0f2038]")>
                      <div class="mb-4 flex items-start justify-between">
                        <div class="flex items-center gap-3">
                          <div class="flex h-10 w-10 items-center justify-center rounded-full bg-blue-500/10 text-blue-400 transition-colors duration-300 group-hover:bg-blue-500 group-hover:text-white">
                            <Icon kind=IconKind::for_feature(feature.kind) size=16/>
                          </div>
                          <span class="text-[10px] font-semibold uppercase tracking-widest text-white/40 transition-colors group-hover:text-blue-300">
                            {feature.kind}
                          </span>
                        </div>
                        <Icon kind=IconKind::ArrowUpRight class="text-white/20 transition-all duration-300 group-hover:-translate-y-1 group-hover:translate-x-1 group-hover:text-white"/>
                      </div>
                      <div class="mb-6">
                        <h3 class="mb-2 text-xl font-bold text-white transition-colors group-hover:text-blue-100">{feature.component}</h3>
                        <p class="line-clamp-3 text-sm text-white/60 transition-colors group-hover:text-white/80">{feature.description}</p>
                      </div>
                      <FeatureTags tags=feature.key_features limit=tag_limit/>
                    </div>
                  }
                }).collect_view()}
              </div>
            </section>
          </div>
        }
        .into_view(),

        Variant::CardGrid => view! {
          <section id="solution" class="section-frame rounded-[26px] px-6 py-12 md:px-10">
            <div class="mx-auto max-w-7xl">
              <div class="mb-12 text-center">
                <div class="ornament-divider mx-auto">"Hush Ecosystem"</div>
                <h2 class="mt-4 text-3xl text-gild-300 md:text-4xl" style=DISPLAY_FONT>{title}</h2>
              </div>
              <div class="grid grid-cols-1 gap-6 md:grid-cols-2 lg:grid-cols-3">
                {features.iter().enumerate().map(|(i, feature)| view! {
                  <div class="group flex flex-col overflow-hidden rounded-[22px] border border-[#15324f]/60 bg-[#071a2d] transition-all hover:-translate-y-1 hover:border-blue-500/30">
                    <div class="relative h-48 w-full overflow-hidden">
                      <CoverImage
                        src=SOLUTION_CARD_IMAGES[i % SOLUTION_CARD_IMAGES.len()]
                        alt=feature.component
                        class="opacity-80 transition-all duration-500 group-hover:scale-105"
                      />
                      <div class="absolute inset-0 bg-gradient-to-t from-[#071a2d] to-transparent opacity-60"></div>
                      <div class="absolute left-4 top-4 flex items-center gap-2">
                        <span class="rounded-full border border-white/10 bg-black/40 p-1.5 text-blue-400 backdrop-blur-md">
                          <Icon kind=IconKind::for_feature(feature.kind) size=16/>
                        </span>
                      </div>
                    </div>
                    <div class="flex flex-grow flex-col p-6">
                      <h3 class="mb-3 text-xl text-gild-300" style=DISPLAY_FONT>{feature.component}</h3>
                      <p class="mb-6 flex-grow text-sm text-white/70">{feature.description}</p>
                    </div>
                  </div>
                }).collect_view()}
              </div>
            </div>
          </section>
        }
        .into_view(),

        Variant::Centered => view! {
          <section id="solution" class="bg-white/5 px-6 py-20">
            <div class="mx-auto mb-16 max-w-4xl text-center">
              <h2 class="mb-6 text-4xl font-bold text-white md:text-5xl" style=DISPLAY_FONT>{title}</h2>
              <p class="mx-auto max-w-2xl text-lg text-white/60">"A complete ecosystem for neonatal care."</p>
            </div>
            <div class="mx-auto grid max-w-5xl grid-cols-1 gap-8 md:grid-cols-2">
              {features.iter().map(|feature| view! {
                <div class="group flex gap-6 rounded-2xl p-6 transition-colors hover:bg-white/5">
                  <div class="flex h-12 w-12 shrink-0 items-center justify-center rounded-xl border border-blue-500/30 bg-blue-600/20 text-blue-400 transition-all group-hover:bg-blue-600 group-hover:text-white">
                    <Icon kind=IconKind::for_feature(feature.kind) size=16/>
                  </div>
                  <div class="text-left">
                    <h3 class="mb-2 text-xl font-bold text-white">{feature.component}</h3>
                    <p class="mb-3 text-sm text-white/60">{feature.description}</p>
                    <div class="text-xs uppercase tracking-wider text-blue-300">{feature.kind}</div>
                  </div>
                </div>
              }).collect_view()}
            </div>
          </section>
        }
        .into_view(),

        _ => view! {
          <section id="solution" class="section-frame rounded-[26px] px-10 py-12">
            <div class="flex flex-col gap-12 text-white lg:flex-row-reverse">
              <div class="space-y-6 lg:w-1/3">
                <div class="ornament-divider">"Hush ecosystem"</div>
                <h2 class="text-3xl text-gild-300" style=DISPLAY_FONT>{title}</h2>
                <p class="text-sm leading-relaxed text-white/70">
                  "Hardware, software, and AI services work together so every cry, breath, and micro-climate shift is contextualized before it becomes an emergency."
                </p>
                <div class="group relative aspect-[3/4] w-full overflow-hidden rounded-2xl border border-white/10 bg-white/5">
                  <CoverImage
                    src=SOLUTION_OVERVIEW_IMAGE_SRC
                    alt="Hush Ecosystem"
                    class="opacity-70 transition-opacity duration-500 group-hover:opacity-90"
                  />
                  <div class="absolute inset-0 bg-gradient-to-b from-transparent to-[#071a2d]/90"></div>
                </div>
              </div>
              <div class="grid content-start gap-4 md:grid-cols-2 lg:w-2/3">
                {features.iter().map(|feature| view! {
                  <div class="rounded-[22px] border border-[#15324f]/60 bg-[#071a2d] p-6 text-white/80 transition-colors hover:border-blue-500/30">
                    <div class="mb-3 flex items-center justify-between">
                      <p class="text-xs uppercase tracking-[0.45em] text-white/50">{feature.kind}</p>
                      <div class="text-blue-400 opacity-50"><Icon kind=IconKind::for_feature(feature.kind) size=16/></div>
                    </div>
                    <h3 class="mt-3 text-xl text-gild-300" style=DISPLAY_FONT>{feature.component}</h3>
                    <p class="mt-2 text-sm text-white/70">{feature.description}</p>
                  </div>
                }).collect_view()}
              </div>
            </div>
          </section>
        }
        .into_view(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leading_bento_cards_are_wide() {
        assert_eq!(bento_layout(0), ("md:col-span-3", 3));
        assert_eq!(bento_layout(1), ("md:col-span-3", 3));
        assert_eq!(bento_layout(2), ("md:col-span-2", 2));
    }
}
