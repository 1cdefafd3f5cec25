use super::section::DISPLAY_FONT;
use hush_content::TeamMember;
use hush_core::Variant;
use leptos::*;

#[component]
pub fn TeamSection(
    title: &'static str,
    members: &'static [TeamMember],
    #[prop(optional)] variant: Variant,
) -> impl IntoView {
    match variant {
        Variant::Bento => view! {
          <section id="team" class="grid grid-cols-1 gap-4 md:grid-cols-2 lg:grid-cols-4">
            <div class="flex items-center justify-between rounded-3xl border border-white/10 bg-white/10 p-8 text-white shadow-lg shadow-black/25 backdrop-blur-xl md:col-span-2 lg:col-span-4">
              <h2 class="text-3xl font-bold" style=DISPLAY_FONT>{title}</h2>
              <p class="text-sm uppercase tracking-widest text-white/50">"The Minds Behind Hush"</p>
            </div>
            {members.iter().map(|member| view! {
              <div class="group relative overflow-hidden rounded-3xl border border-white/10 bg-white/8 p-6 shadow-md shadow-black/20 backdrop-blur-lg transition-colors hover:border-gild-300/50">
                <div class="relative mx-auto mb-4 h-20 w-20 overflow-hidden rounded-full border border-white/10 bg-white/5">
                  <img
                    src=member.local_portrait()
                    alt=member.name
                    loading="lazy"
                    class="absolute inset-0 h-full w-full object-cover grayscale transition-all group-hover:grayscale-0"
                  />
                </div>
                <div class="text-center">
                  <h3 class="text-lg font-bold text-white">{member.name}</h3>
                  <p class="mt-1 text-xs uppercase tracking-wider text-blue-400">{member.role}</p>
                </div>
              </div>
            }).collect_view()}
          </section>
        }
        .into_view(),

        Variant::Centered => view! {
          <section id="team" class="px-6 py-20 text-center">
            <h2 class="mb-16 text-4xl font-bold text-white" style=DISPLAY_FONT>{title}</h2>
            <div class="flex flex-wrap justify-center gap-12">
              {members.iter().map(|member| view! {
                <div class="group flex flex-col items-center gap-4">
                  <div class="relative h-32 w-32 rounded-full border-2 border-white/10 p-1">
                    <img src=member.remote_portrait() alt=member.name loading="lazy" class="h-full w-full rounded-full object-cover"/>
                  </div>
                  <div>
                    <h3 class="text-xl font-bold text-white">{member.name}</h3>
                    <p class="text-sm text-white/50">{member.role}</p>
                  </div>
                </div>
              }).collect_view()}
            </div>
          </section>
        }
        .into_view(),

        _ => view! {
          <section id="team" class="section-frame rounded-[26px] px-10 py-12">
            <div class="space-y-6 text-white">
              <div class="ornament-divider">"People"</div>
              <h2 class="text-3xl text-gild-300" style=DISPLAY_FONT>{title}</h2>
              <div class="grid gap-4 md:grid-cols-2 lg:grid-cols-3">
                {members.iter().map(|member| view! {
                  <div class="flex items-center gap-4 rounded-[18px] border border-[#15324f]/60 bg-[#071a2d] px-6 py-5">
                    <img
                      src=member.remote_portrait()
                      alt=member.name
                      loading="lazy"
                      class="h-12 w-12 rounded-full border border-white/10 bg-white/5 object-cover"
                    />
                    <div>
                      <p class="text-lg text-white" style=DISPLAY_FONT>{member.name}</p>
                      <p class="mt-1 inline-flex rounded-full border border-white/15 bg-white/5 px-3 py-1 text-[0.65rem] uppercase tracking-[0.2em] text-gild-300">
                        {member.role}
                      </p>
                    </div>
                  </div>
                }).collect_view()}
              </div>
            </div>
          </section>
        }
        .into_view(),
    }
}
