use super::section::{CoverImage, DISPLAY_FONT};
use hush_content::{BillOfMaterials, BOM_IMAGE_SRC};
use hush_core::Variant;
use leptos::*;

/// Blank specs read as a dash in tables.
fn spec_or<'a>(spec: &'a str, fallback: &'a str) -> &'a str {
    if spec.trim().is_empty() {
        fallback
    } else {
        spec
    }
}

/// Bill of materials. The section id is configurable because the BOM page
/// anchors its table as `#bom-table`.
#[component]
pub fn BomSection(
    data: BillOfMaterials,
    #[prop(optional)] variant: Variant,
    #[prop(default = "bom")] id: &'static str,
) -> impl IntoView {
    let budget = data.total_estimated_budget();
    match variant {
        Variant::Bento => view! {
          <section id=id class="grid grid-cols-1 gap-4 md:grid-cols-3">
            <div class="flex flex-col items-center justify-between rounded-3xl border border-white/10 bg-blue-900 p-8 text-white md:col-span-3 md:flex-row">
              <div>
                <h2 class="mb-2 text-3xl font-bold" style=DISPLAY_FONT>{data.title}</h2>
                <p class="text-blue-200">"Transparent hardware costs."</p>
              </div>
              <div class="mt-4 text-right md:mt-0">
                <p class="text-xs uppercase tracking-widest text-blue-300">"Total Budget"</p>
                <p class="text-4xl font-bold text-white">{budget}</p>
              </div>
            </div>
            {data.items.iter().map(|item| view! {
              <div class="flex flex-col justify-between rounded-3xl border border-white/10 bg-white/5 p-6 transition-colors hover:border-blue-500/50">
                <div>
                  <h3 class="mb-1 text-lg font-bold text-white">{item.part}</h3>
                  <p class="mb-4 text-xs text-white/50">{spec_or(item.spec, "Standard Spec")}</p>
                </div>
                <div class="flex items-end justify-between border-t border-white/10 pt-4">
                  <div class="text-xs text-white/40">"Qty: " <span class="text-white">{item.qty.to_string()}</span></div>
                  <div class="text-lg font-bold text-blue-300">
                    {item.total_cost} " " <span class="text-xs font-normal text-white/40">{data.currency}</span>
                  </div>
                </div>
              </div>
            }).collect_view()}
          </section>
        }
        .into_view(),

        Variant::Centered => view! {
          <section id=id class="px-6 py-20">
            <div class="mx-auto mb-12 max-w-4xl text-center">
              <h2 class="mb-4 text-4xl font-bold text-white" style=DISPLAY_FONT>{data.title}</h2>
              <div class="inline-block rounded-full border border-blue-500/50 bg-blue-500/20 px-6 py-2 font-bold text-blue-300">
                {format!("Total: {budget}")}
              </div>
            </div>
            <div class="mx-auto max-w-4xl overflow-hidden rounded-3xl border border-white/10 bg-white/5">
              <table class="w-full text-left text-sm text-white/80">
                <thead class="bg-white/5">
                  <tr class="text-xs uppercase tracking-wider text-white/50">
                    <th class="px-6 py-4">"Component"</th>
                    <th class="hidden px-6 py-4 sm:table-cell">"Specification"</th>
                    <th class="px-6 py-4 text-center">"Qty"</th>
                    <th class="px-6 py-4 text-right">"Cost"</th>
                  </tr>
                </thead>
                <tbody class="divide-y divide-white/5">
                  {data.items.iter().map(|item| view! {
                    <tr class="transition-colors hover:bg-white/5">
                      <td class="px-6 py-4 font-medium text-white">{item.part}</td>
                      <td class="hidden px-6 py-4 text-white/50 sm:table-cell">{spec_or(item.spec, "-")}</td>
                      <td class="px-6 py-4 text-center">{item.qty.to_string()}</td>
                      <td class="px-6 py-4 text-right font-bold text-blue-300">{item.total_cost}</td>
                    </tr>
                  }).collect_view()}
                </tbody>
              </table>
            </div>
          </section>
        }
        .into_view(),

        _ => view! {
          <section id=id class="section-frame rounded-[26px] px-10 py-12">
            <div class="flex flex-col gap-12 text-white lg:flex-row">
              <div class="space-y-6 lg:w-1/3">
                <div class="ornament-divider">"Hardware plan"</div>
                <h2 class="text-3xl text-gild-300" style=DISPLAY_FONT>{data.title}</h2>
                <p class="text-sm text-white/70">"Transparent budgeting keeps pilots predictable and accelerates procurement."</p>
                <div class="group relative aspect-[4/3] w-full overflow-hidden rounded-2xl border border-white/10 bg-white/5">
                  <CoverImage
                    src=BOM_IMAGE_SRC
                    alt="Hardware Components"
                    class="opacity-70 transition-opacity duration-500 group-hover:opacity-90"
                  />
                  <div class="absolute inset-0 bg-gradient-to-b from-transparent to-[#071a2d]/90"></div>
                </div>
                <div class="rounded-[18px] border border-[#15324f]/60 bg-[#071a2d] px-6 py-4 text-center lg:text-left">
                  <p class="mb-1 text-xs uppercase tracking-widest text-white/50">"Total Estimated Budget"</p>
                  <p class="text-2xl font-bold text-gild-300">{budget}</p>
                </div>
              </div>

              <div class="overflow-x-auto lg:w-2/3">
                <table class="min-w-full divide-y divide-white/10 text-left text-sm text-white/80">
                  <caption class="sr-only">"Detailed list of hardware components required for the Hush ecosystem"</caption>
                  <thead>
                    <tr class="text-xs uppercase tracking-[0.3em] text-white/50">
                      <th class="py-3 pr-4">"Part"</th>
                      <th class="py-3 pr-4">"Spec"</th>
                      <th class="py-3 pr-4">"Qty"</th>
                      <th class="py-3 pr-4">{format!("Price ({})", data.currency)}</th>
                      <th class="py-3">"Total"</th>
                    </tr>
                  </thead>
                  <tbody class="divide-y divide-white/5">
                    {data.items.iter().map(|item| view! {
                      <tr>
                        <td class="py-3 pr-4 font-medium text-white">{item.part}</td>
                        <td class="py-3 pr-4">{spec_or(item.spec, "-")}</td>
                        <td class="py-3 pr-4">{item.qty.to_string()}</td>
                        <td class="py-3 pr-4">{item.price}</td>
                        <td class="py-3">{item.total_cost}</td>
                      </tr>
                    }).collect_view()}
                  </tbody>
                </table>
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
    fn blank_specs_fall_back() {
        assert_eq!(spec_or("", "-"), "-");
        assert_eq!(spec_or("  ", "Standard Spec"), "Standard Spec");
        assert_eq!(spec_or("3.7 V 200mAh", "-"), "3.7 V 200mAh");
    }
}
