use super::icon::{Icon, IconKind};
use super::section::DISPLAY_FONT;
use hush_content::{QR_CODE_SRC, REPOSITORY_URL, STARGAZERS_URL};
use hush_core::Variant;
use leptos::*;

/// Open-source call to action with the repository QR code.
#[component]
pub fn GitHubSection(#[prop(default = Variant::Bento)] variant: Variant) -> impl IntoView {
    match variant {
        Variant::Bento => view! {
          <section id="github" class="relative overflow-hidden rounded-3xl border border-white/10 bg-gradient-to-br from-[#0b1728]/80 via-[#040b15]/80 to-[#0b1728]/80 p-10 shadow-2xl backdrop-blur-xl">
            <div class="absolute -right-20 -top-20 h-64 w-64 rounded-full bg-blue-500/10 blur-3xl"></div>
            <div class="absolute -bottom-20 -left-20 h-64 w-64 rounded-full bg-purple-500/10 blur-3xl"></div>

            <div class="relative z-10 flex flex-col items-center gap-10 lg:flex-row">
              <div class="flex-1 space-y-6">
                <div class="inline-flex items-center gap-2 rounded-full border border-white/10 bg-white/5 px-4 py-1.5">
                  <Icon kind=IconKind::Github size=16 class="text-white"/>
                  <span class="text-xs uppercase tracking-[0.2em] text-white/70">"Open Source"</span>
                </div>
                <h2 class="text-3xl font-bold text-white md:text-4xl" style=DISPLAY_FONT>"Join Our GitHub Community"</h2>
                <p class="max-w-xl text-lg leading-relaxed text-white/60">
                  "Scan the QR code to explore our open-source repository, contribute to the project, or follow our development journey. We welcome collaboration and feedback from the community."
                </p>
                <div class="flex flex-col gap-4 pt-4 sm:flex-row">
                  <a
                    href=REPOSITORY_URL
                    target="_blank"
                    rel="noopener noreferrer"
                    class="inline-flex h-12 items-center justify-center gap-2 rounded-full bg-white px-6 text-sm font-bold uppercase tracking-widest text-[#030d1c] transition-colors hover:bg-gray-200"
                  >
                    <Icon kind=IconKind::Github size=16/>
                    "View Repository"
                  </a>
                  <a
                    href=STARGAZERS_URL
                    target="_blank"
                    rel="noopener noreferrer"
                    class="inline-flex h-12 items-center justify-center gap-2 rounded-full border border-white/20 px-6 text-sm font-medium uppercase tracking-widest text-white transition-colors hover:bg-white/5"
                  >
                    <Icon kind=IconKind::Star size=16/>
                    "Star on GitHub"
                  </a>
                </div>
              </div>

              <div class="flex-shrink-0">
                <div class="group relative">
                  <div class="absolute inset-0 rounded-3xl bg-gradient-to-br from-blue-500/20 to-purple-500/20 blur-xl transition-all group-hover:blur-2xl"></div>
                  <div class="relative rounded-3xl border border-white/10 bg-white/5 p-8 backdrop-blur-md transition-colors hover:border-blue-400/30">
                    <img src=QR_CODE_SRC alt="GitHub Repository QR Code" class="h-48 w-48 object-contain sm:h-56 sm:w-56 md:h-64 md:w-64"/>
                    <p class="mt-4 text-center text-xs uppercase tracking-widest text-white/50">"Scan to Visit"</p>
                  </div>
                </div>
              </div>
            </div>
          </section>
        }
        .into_view(),

        _ => view! {
          <section id="github" class="section-frame rounded-[26px] px-10 py-12">
            <div class="space-y-6 text-center text-white">
              <div class="ornament-divider">"Open Source"</div>
              <h2 class="text-3xl text-gild-300" style=DISPLAY_FONT>"GitHub Repository"</h2>
              <div class="flex justify-center pt-6">
                <a href=REPOSITORY_URL target="_blank" rel="noopener noreferrer">
                  <img src=QR_CODE_SRC alt="GitHub Repository QR Code" class="h-64 w-64 object-contain"/>
                </a>
              </div>
            </div>
          </section>
        }
        .into_view(),
    }
}
