use super::section::DISPLAY_FONT;
use hush_content::{NavItem, NavKind, CONTACT_EMAIL, SITE_METADATA};
use hush_core::nav::{is_home, link_href};
use leptos::*;
use leptos_router::use_location;

const FOOTER_COLUMNS: [&[NavItem]; 2] = [
    &[
        NavItem { label: "Problem", href: "problem", kind: NavKind::Section },
        NavItem { label: "Solution", href: "solution", kind: NavKind::Section },
        NavItem { label: "Architecture", href: "architecture", kind: NavKind::Section },
    ],
    &[
        NavItem { label: "Goals", href: "goals", kind: NavKind::Section },
        NavItem { label: "Team", href: "/team", kind: NavKind::Page },
        NavItem { label: "BOM", href: "/bom", kind: NavKind::Page },
        NavItem { label: "Overview", href: "overview", kind: NavKind::Section },
    ],
];

/// `(label, href, rel)` for one footer column.
fn column_links(items: &[NavItem], on_home: bool) -> Vec<(&'static str, String, Option<&'static str>)> {
    items
        .iter()
        .map(|item| {
            let rel = (on_home && item.kind == NavKind::Section).then_some("external");
            (item.label, link_href(item, on_home), rel)
        })
        .collect()
}

#[component]
pub fn SiteFooter() -> impl IntoView {
    let location = use_location();
    let year = js_sys::Date::new_0().get_full_year();
    let on_home = move || is_home(&location.pathname.get());

    view! {
      <footer id="about" class="pinstripe-footer border-t border-[#1e3b5d] bg-[#030d1c] py-12 text-white/60">
        <div class="mx-auto flex w-full max-w-6xl flex-col gap-8 px-6 lg:flex-row lg:items-start lg:justify-between">
          <div class="space-y-2 text-sm">
            <span class="text-lg text-gild-300" style=DISPLAY_FONT>{SITE_METADATA.title}</span>
            <p>{format!("©{year} Hush Collective. All rights reserved.")}</p>
            <a href=format!("mailto:{CONTACT_EMAIL}") class="hover:text-gild-300">{CONTACT_EMAIL}</a>
          </div>
          <div class="hidden gap-6 text-xs uppercase tracking-[0.45em] lg:grid lg:grid-cols-2">
            {FOOTER_COLUMNS.into_iter().map(|items| view! {
              <div class="flex flex-col gap-2">
                {move || column_links(items, on_home()).into_iter().map(|(label, href, rel)| view! {
                  <a href=href rel=rel class="hover:text-gild-300">{label}</a>
                }).collect_view()}
              </div>
            }).collect_view()}
          </div>
        </div>
      </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_links_route_home_from_other_pages() {
        let links = column_links(FOOTER_COLUMNS[0], false);
        assert_eq!(links[0], ("Problem", "/#problem".to_string(), None));
    }

    #[test]
    fn page_links_never_bypass_the_router() {
        let links = column_links(FOOTER_COLUMNS[1], true);
        assert_eq!(links[0], ("Goals", "#goals".to_string(), Some("external")));
        assert_eq!(links[2], ("BOM", "/bom".to_string(), None));
    }
}
