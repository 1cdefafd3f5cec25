use super::{PageShell, StatTileCard};
use crate::components::{
    bom::BomSection, contact_form::ContactForm, footer::SiteFooter, nav_bar::NavBar,
    section::DISPLAY_FONT,
};
use hush_content::{
    BILL_OF_MATERIALS, BOM_HIGHLIGHTS, BOM_MATERIAL_GROUPS, BOM_VALUE_POINTS,
    CONTACT_EMAIL, DEPLOYMENT_PHASES, NAVIGATION, PROCUREMENT_CHECKLIST,
};
use hush_core::Variant;
use leptos::*;

const CHECK_TINTS: [&str; 3] = [
    "bg-emerald-500/10 text-emerald-300",
    "bg-sky-500/10 text-sky-300",
    "bg-amber-500/10 text-amber-300",
];

const PRIMARY_CTA: &str = "cta-smooth inline-flex items-center justify-center rounded-full bg-white px-5 py-3 text-xs font-semibold uppercase tracking-[0.3em] text-[#0b1626] transition-colors hover:bg-gild-200";
const SECONDARY_CTA: &str = "cta-smooth inline-flex items-center justify-center rounded-full border border-white/30 px-5 py-3 text-xs font-semibold uppercase tracking-[0.3em] text-white transition-colors hover:bg-white/10";

#[component]
pub fn BomPage() -> impl IntoView {
    let ready = create_rw_signal(false);
    let data = BILL_OF_MATERIALS;
    let budget = data.total_estimated_budget();

    view! {
      <PageShell ready=ready>
        <NavBar items=NAVIGATION/>
        <main class="relative z-20 mx-auto flex w-full max-w-7xl flex-col gap-14 px-6 pb-32 pt-32">
          <section class="relative overflow-hidden rounded-3xl border border-white/10 bg-[#0b1626] px-8 py-12 shadow-2xl backdrop-blur-lg">
            <div class="absolute inset-0 bg-gradient-to-br from-ember-800/70 via-[#0f1e33]/80 to-ember-900/85"></div>
            <div class="absolute -left-10 top-0 h-64 w-64 rounded-full bg-gild-300/15 blur-3xl"></div>
            <div class="absolute bottom-0 right-0 h-72 w-72 rounded-full bg-sky-400/10 blur-3xl"></div>
            <div class="relative flex flex-col gap-8 lg:flex-row lg:items-center lg:justify-between">
              <div class="max-w-2xl space-y-4">
                <p class="text-xs uppercase tracking-[0.35em] text-gild-200">"NICU IoT Platform"</p>
                <h1 class="text-3xl font-bold text-white sm:text-4xl lg:text-5xl" style=DISPLAY_FONT>
                  "Deploy a hospital-ready NICU bay with proven hardware, fast."
                </h1>
                <p class="text-base leading-relaxed text-white/70">
                  "We ship a vetted bill of materials for continuous newborn monitoring: wearables, edge compute, connectivity, and safety. Start with our baseline, then tailor it to your clinical workflow."
                </p>
                <div class="flex flex-wrap gap-3">
                  <a href="#bom-table" rel="external" class=PRIMARY_CTA>"See components"</a>
                  <a href="#contact" rel="external" class=SECONDARY_CTA>"Custom requirements?"</a>
                </div>
              </div>
              <div class="grid w-full max-w-lg grid-cols-2 gap-4 text-sm">
                <StatTileCard
                  label="Line items"
                  value=data.items.len().to_string()
                  caption="Wearables, edge, enclosure, connectivity"
                />
                <StatTileCard
                  label="Total est. budget"
                  value=budget
                  caption="Single-bed deployment baseline"
                  emphasis=true
                />
                {BOM_HIGHLIGHTS.iter().map(|tile| view! { <StatTileCard label=tile.label value=tile.value caption=tile.caption/> }).collect_view()}
              </div>
            </div>
          </section>

          <section class="grid gap-6 rounded-3xl border border-white/10 bg-white/5 p-6 text-sm backdrop-blur-md lg:grid-cols-[1.2fr,1.8fr]">
            <div class="space-y-3">
              <h2 class="text-lg font-semibold text-gild-300">"What you get"</h2>
              <p class="text-white/70">
                "A proven hardware stack for NICU-grade continuous monitoring. Use it as-is for prototypes, or tweak quantities and vendors for production."
              </p>
              <ul class="grid gap-2 text-white/70">
                {BOM_VALUE_POINTS.iter().zip(CHECK_TINTS.iter().cycle()).map(|(point, tint)| view! {
                  <li class="flex items-start gap-2">
                    <span class=format!("mt-1 h-5 w-5 shrink-0 rounded-full text-center text-xs {tint}")>"✓"</span>
                    <div>
                      <p class="font-medium text-white">{point.title}</p>
                      <p>{point.body}</p>
                    </div>
                  </li>
                }).collect_view()}
              </ul>
            </div>
            <div class="grid gap-4 md:grid-cols-2">
              {BOM_MATERIAL_GROUPS.iter().map(|group| view! {
                <div class="space-y-2 rounded-3xl border border-white/10 bg-white/5 p-5">
                  <h3 class="text-xs font-semibold uppercase tracking-[0.25em] text-gild-300">{group.title}</h3>
                  <p class="text-sm text-white/70">{group.body}</p>
                </div>
              }).collect_view()}
            </div>
          </section>

          <section class="grid gap-6 lg:grid-cols-2">
            <div class="space-y-3 rounded-3xl border border-white/10 bg-white/5 p-6 backdrop-blur-md">
              <h3 class="text-lg font-semibold text-gild-300">"Procurement checklist"</h3>
              <ul class="list-disc space-y-2 pl-5 text-sm text-white/70">
                {PROCUREMENT_CHECKLIST.iter().map(|step| view! { <li>{*step}</li> }).collect_view()}
              </ul>
            </div>
            <div class="space-y-3 rounded-3xl border border-white/10 bg-white/5 p-6 backdrop-blur-md">
              <h3 class="text-lg font-semibold text-gild-300">"Deployment phasing"</h3>
              <div class="space-y-3 text-sm text-white/70">
                {DEPLOYMENT_PHASES.iter().map(|phase| view! {
                  <div>
                    <p class="font-semibold text-white">{phase.title}</p>
                    <p>{phase.body}</p>
                  </div>
                }).collect_view()}
              </div>
            </div>
          </section>

          <section id="bom-table" class="rounded-3xl border border-white/10 bg-white/5 p-4 backdrop-blur-md">
            <BomSection data=data variant=Variant::Centered/>
          </section>

          <section id="contact" class="rounded-3xl border border-white/10 bg-gradient-to-r from-[#0f1f35] via-[#0a1728] to-[#0f1f35] p-8 shadow-xl backdrop-blur-lg">
            <div class="mb-8 text-center">
              <h3 class="mb-3 text-2xl font-bold text-white" style=DISPLAY_FONT>
                "Have custom requirements for your hospital?"
              </h3>
              <p class="mx-auto mb-4 max-w-3xl text-sm text-white/70">
                "Tell us your bed count, certification needs, or integration constraints. We'll tailor the BOM, sourcing, and rollout plan for your NICU."
              </p>
              <div class="flex flex-wrap items-center justify-center gap-3">
                <a href=format!("mailto:{CONTACT_EMAIL}") class=PRIMARY_CTA>"Email us"</a>
                <a href="#bom-table" rel="external" class=SECONDARY_CTA>"Review BOM"</a>
              </div>
            </div>
            <ContactForm/>
          </section>
        </main>
        <SiteFooter/>
      </PageShell>
    }
}
