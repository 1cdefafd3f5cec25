use super::PageShell;
use crate::components::{
    architecture::ArchitectureSection, footer::SiteFooter, github::GitHubSection,
    goals::GoalsSection, hero::Hero, nav_bar::NavBar, problem::ProblemSection,
    solution::SolutionSection,
};
use crate::hooks::use_active_section;
use hush_content::{
    ARCHITECTURE_LAYERS, ARCHITECTURE_TITLE, BUSINESS_GOALS, HERO_CONTENT, HERO_STATS,
    HOME_SECTION_IDS, NAVIGATION, PROBLEM_CARDS, PROBLEM_SECTION_TITLE, ROADMAP,
    SOLUTION_FEATURES, SOLUTION_SECTION_TITLE,
};
use hush_core::{ActiveSectionOptions, Variant};
use leptos::*;

#[component]
pub fn HomePage() -> impl IntoView {
    let ready = create_rw_signal(false);
    // Sections are only tracked once the page is visible.
    let section_ids = Signal::derive(move || {
        if ready.get() {
            HOME_SECTION_IDS.iter().map(ToString::to_string).collect()
        } else {
            Vec::new()
        }
    });
    let active_section = use_active_section(section_ids, ActiveSectionOptions::default());

    view! {
      <PageShell ready=ready>
        <NavBar items=NAVIGATION active_section=active_section/>
        <Hero content=HERO_CONTENT stats=HERO_STATS/>
        <main class="relative z-20 mx-auto flex w-full max-w-7xl flex-col gap-20 px-6 pb-24 pt-14">
          <ProblemSection title=PROBLEM_SECTION_TITLE cards=PROBLEM_CARDS variant=Variant::Bento/>
          <SolutionSection title=SOLUTION_SECTION_TITLE features=SOLUTION_FEATURES variant=Variant::Bento/>
          <ArchitectureSection title=ARCHITECTURE_TITLE layers=ARCHITECTURE_LAYERS variant=Variant::Bento/>
          <GoalsSection goals=BUSINESS_GOALS milestones=ROADMAP variant=Variant::Bento/>
          <GitHubSection variant=Variant::Bento/>
        </main>
        <SiteFooter/>
      </PageShell>
    }
}
