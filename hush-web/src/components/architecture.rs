use super::section::{two_digit, CoverImage, DISPLAY_FONT};
use hush_content::{ArchitectureLayer, ARCHITECTURE_IMAGE_SRC};
use hush_core::Variant;
use leptos::*;

fn pills(items: &'static [&'static str], limit: usize, class: &'static str) -> impl IntoView {
    items
        .iter()
        .take(limit)
        .map(|item| view! { <span class=class>{*item}</span> })
        .collect_view()
}

#[component]
fn LayerDetails(layer: &'static ArchitectureLayer) -> impl IntoView {
    view! {
      {(!layer.hardware_specs.is_empty()).then(|| view! {
        <div class="mt-4 grid gap-4 md:grid-cols-2">
          {layer.hardware_specs.iter().map(|spec| view! {
            <div class="rounded-xl border border-white/10 p-4">
              <p class="text-xs uppercase tracking-[0.45em] text-white/50">{spec.device}</p>
              <p class="mt-2 text-sm text-white/70">{spec.microcontroller}</p>
              <ul class="mt-3 list-disc space-y-1 pl-5 text-sm text-white/70">
                {spec.sensors.iter().map(|sensor| view! { <li>{*sensor}</li> }).collect_view()}
              </ul>
            </div>
          }).collect_view()}
        </div>
      })}
      {(!layer.protocols.is_empty()).then(|| view! {
        <div class="mt-4 grid gap-4 md:grid-cols-2">
          {layer.protocols.iter().map(|protocol| view! {
            <div class="rounded-xl border border-white/10 p-4">
              <p class="text-xs uppercase tracking-[0.45em] text-white/50">{protocol.protocol}</p>
              <p class="mt-2 text-sm text-white/70">{protocol.function}</p>
            </div>
          }).collect_view()}
        </div>
      })}
      {(!layer.tech_stack.is_empty()).then(|| view! {
        <div class="mt-4 flex flex-wrap gap-2 text-sm text-white/80">
          {pills(layer.tech_stack, usize::MAX, "rounded-full border border-white/10 bg-white/5 px-3 py-1")}
        </div>
      })}
    }
}

#[component]
pub fn ArchitectureSection(
    title: &'static str,
    layers: &'static [ArchitectureLayer],
    #[prop(optional)] variant: Variant,
) -> impl IntoView {
    match variant {
        Variant::Bento => view! {
          <section id="architecture" class="grid grid-cols-1 gap-6 md:grid-cols-2">
            <div class="flex items-center justify-between rounded-3xl border border-white/10 bg-white/10 p-8 shadow-lg shadow-black/25 backdrop-blur-xl md:col-span-2">
              <div>
                <div class="mb-2 text-xs uppercase tracking-widest text-blue-300">"Tech Stack"</div>
                <h2 class="text-2xl font-bold text-white" style=DISPLAY_FONT>{title}</h2>
              </div>
              <div class="hidden max-w-xs text-right text-xs text-white/40 md:block">
                "From perception all the way through cloud applications."
              </div>
            </div>
            {layers.iter().enumerate().map(|(i, layer)| view! {
              <div class="rounded-3xl border border-white/10 bg-white/8 p-6 shadow-md shadow-black/20 backdrop-blur-lg transition-colors hover:border-blue-500/30">
                <div class="mb-4 flex items-center gap-3">
                  <div class="flex h-8 w-8 items-center justify-center rounded-full bg-blue-500/20 text-xs font-bold text-blue-300">
                    {i + 1}
                  </div>
                  <h3 class="text-lg font-bold text-white">{layer.layer_name}</h3>
                </div>
                <p class="mb-4 min-h-[3em] text-xs text-white/50">{layer.role}</p>
                <div class="flex flex-wrap gap-2">
                  {pills(layer.tech_stack, 3, "rounded border border-white/5 bg-white/5 px-2 py-1 text-[0.6rem] text-white/40")}
                  {(!layer.hardware_specs.is_empty()).then(|| view! {
                    <span class="rounded border border-white/5 bg-white/5 px-2 py-1 text-[0.6rem] text-white/40">"Hardware Specs"</span>
                  })}
                </div>
              </div>
            }).collect_view()}
          </section>
        }
        .into_view(),

        Variant::Centered => view! {
          <section id="architecture" class="px-6 py-20">
            <div class="mx-auto mb-16 max-w-4xl text-center">
              <h2 class="mb-6 text-4xl font-bold text-white md:text-5xl" style=DISPLAY_FONT>{title}</h2>
              <p class="mx-auto max-w-2xl text-lg text-white/60">"Built on a robust, multi-layer architecture."</p>
            </div>
            <div class="mx-auto max-w-3xl space-y-4">
              {layers.iter().enumerate().map(|(i, layer)| view! {
                <div class="group relative rounded-2xl border border-white/10 bg-white/5 p-6 transition-all hover:bg-white/10">
                  <div class="flex items-center justify-between">
                    <div class="flex items-center gap-4">
                      <span class="text-4xl font-bold text-white/10 transition-colors group-hover:text-blue-500/20">{two_digit(i)}</span>
                      <div>
                        <h3 class="text-xl font-bold text-white">{layer.layer_name}</h3>
                        <p class="text-sm text-white/50">{layer.role}</p>
                      </div>
                    </div>
                    <div class="hidden gap-2 sm:flex">
                      {pills(layer.tech_stack, 2, "rounded-full bg-black/20 px-3 py-1 text-xs text-white/40")}
                    </div>
                  </div>
                </div>
              }).collect_view()}
            </div>
          </section>
        }
        .into_view(),

        _ => view! {
          <section id="architecture" class="section-frame rounded-[26px] px-10 py-12">
            <div class="flex flex-col gap-12 text-white lg:flex-row">
              <div class="space-y-6 lg:w-1/3">
                <div class="ornament-divider">"System blueprint"</div>
                <h2 class="text-3xl text-gild-300" style=DISPLAY_FONT>{title}</h2>
                <p class="text-sm leading-relaxed text-white/70">
                  "From perception all the way through cloud applications, each layer handles a critical responsibility for reliable neonatal insight."
                </p>
                <div class="group relative aspect-[3/5] w-full overflow-hidden rounded-2xl border border-white/10 bg-white/5">
                  <CoverImage
                    src=ARCHITECTURE_IMAGE_SRC
                    alt="System Architecture"
                    class="opacity-60 transition-opacity duration-500 group-hover:opacity-80"
                  />
                  <div class="absolute inset-0 bg-gradient-to-b from-transparent to-[#071a2d]/90"></div>
                </div>
              </div>

              <div class="space-y-4 lg:w-2/3">
                {layers.iter().enumerate().map(|(i, layer)| view! {
                  <div class="rounded-[22px] border border-[#15324f]/60 bg-[#071a2d] p-6">
                    <div class="flex flex-col gap-4 lg:flex-row lg:items-center lg:justify-between">
                      <div class="flex items-center gap-3 text-white/60">
                        <span class="flex h-10 w-10 items-center justify-center rounded-full border border-white/15 bg-white/5 text-base font-semibold">
                          {two_digit(i)}
                        </span>
                        <p class="text-xs uppercase tracking-[0.35em]">"Layer"</p>
                      </div>
                      <h3 class="text-2xl text-gild-300" style=DISPLAY_FONT>{layer.layer_name}</h3>
                      <p class="text-sm text-white/70">{layer.role}</p>
                    </div>
                    <LayerDetails layer=layer/>
                  </div>
                }).collect_view()}
              </div>
            </div>
          </section>
        }
        .into_view(),
    }
}
