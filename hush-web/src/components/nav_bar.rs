use super::icon::{Icon, IconKind};
use hush_content::{NavItem, NavKind, LOGO_SRC};
use hush_core::{resolve_links, NavLink};
use leptos::*;
use leptos_router::use_location;

/// Same-document fragment links bypass the router so the browser fires
/// `hashchange` for the scroll helper.
fn link_rel(link: &NavLink) -> Option<&'static str> {
    (link.kind == NavKind::Section && link.href.starts_with('#')).then_some("external")
}

#[component]
pub fn NavBar(
    items: &'static [NavItem],
    #[prop(into, optional)] active_section: MaybeSignal<String>,
) -> impl IntoView {
    let location = use_location();
    let menu_open = create_rw_signal(false);

    let links = create_memo(move |_| {
        let path = location.pathname.get();
        active_section.with(|section| resolve_links(items, &path, section))
    });

    view! {
      <nav class="fixed left-0 right-0 top-0 z-50 flex justify-center lg:top-8 lg:px-4">
        <div class="relative flex w-full items-center justify-between gap-2 rounded-none border-b border-white/20 bg-[#0b1626]/80 px-6 py-4 shadow-lg backdrop-blur-md lg:w-auto lg:justify-center lg:rounded-full lg:border lg:bg-white/10 lg:py-3">
          <span class="mr-2 flex items-center gap-2 text-sm font-bold tracking-wide text-gild-300 lg:mr-6">
            <img src=LOGO_SRC alt="Hush Logo" width="20" height="20"/>
            "Hush"
          </span>

          <ul class="hidden gap-3 text-xs uppercase tracking-[0.2em] text-white/80 lg:flex">
            <For
              each=move || links.get()
              key=|link| (link.label, link.active)
              children=move |link| {
                let class = if link.active {
                  "inline-flex items-center rounded-full border border-white/30 bg-white/15 px-4 py-2 text-white transition-all duration-200"
                } else {
                  "inline-flex items-center rounded-full border border-transparent px-4 py-2 text-white/70 transition-all duration-200 hover:text-gild-300"
                };
                view! {
                  <li>
                    <a
                      href=link.href.clone()
                      rel=link_rel(&link)
                      class=class
                      aria-current=link.active.then_some("page")
                    >
                      {link.label}
                    </a>
                  </li>
                }
              }
            />
          </ul>

          <button
            class="p-1 text-white/80 hover:text-white lg:hidden"
            aria-label="Toggle menu"
            aria-expanded=move || menu_open.get().to_string()
            on:click=move |_| menu_open.update(|open| *open = !*open)
          >
            {move || if menu_open.get() {
              view! { <Icon kind=IconKind::X/> }
            } else {
              view! { <Icon kind=IconKind::Menu/> }
            }}
          </button>
        </div>

        <Show when=move || menu_open.get()>
          <div class="absolute left-4 right-4 top-full mt-4 rounded-3xl border border-white/20 bg-[#0b1626]/95 p-6 shadow-2xl backdrop-blur-xl lg:hidden">
            <ul class="flex flex-col gap-2 text-sm uppercase tracking-[0.15em] text-white/80">
              <For
                each=move || links.get()
                key=|link| (link.label, link.active)
                children=move |link| {
                  let class = if link.active {
                    "block rounded-xl border border-white/20 bg-white/10 px-4 py-3 text-white transition-all duration-200"
                  } else {
                    "block rounded-xl border border-transparent px-4 py-3 text-white/60 transition-all duration-200 hover:bg-white/5 hover:text-white"
                  };
                  view! {
                    <li>
                      <a
                        href=link.href.clone()
                        rel=link_rel(&link)
                        class=class
                        aria-current=link.active.then_some("page")
                        on:click=move |_| menu_open.set(false)
                      >
                        {link.label}
                      </a>
                    </li>
                  }
                }
              />
            </ul>
          </div>
        </Show>
      </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hush_content::NAVIGATION;

    #[test]
    fn only_same_page_fragments_skip_the_router() {
        let home = resolve_links(NAVIGATION, "/", "problem");
        let rels: Vec<_> = home.iter().map(link_rel).collect();
        assert_eq!(rels[..5], [Some("external"); 5]);
        assert_eq!(rels[5..], [None, None]);

        let team = resolve_links(NAVIGATION, "/team", "");
        assert!(team.iter().all(|link| link_rel(link).is_none()));
    }
}
