//! Navigation link targets and highlight rules.

use hush_content::{NavItem, NavKind};

pub const HOME_PATH: &str = "/";
/// Section assumed on the home page before any section is detected.
pub const DEFAULT_HOME_SECTION: &str = "overview";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: String,
    pub kind: NavKind,
    pub active: bool,
}

/// `/team/` and `/team` are the same page; an empty path is the home page.
pub fn normalize_path(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        HOME_PATH
    } else {
        trimmed
    }
}

pub fn is_home(path: &str) -> bool {
    normalize_path(path) == HOME_PATH
}

/// Section links stay in-page on the home page and route back home with a
/// fragment everywhere else.
pub fn link_href(item: &NavItem, on_home: bool) -> String {
    match item.kind {
        NavKind::Section if on_home => format!("#{}", item.href),
        NavKind::Section => format!("/#{}", item.href),
        NavKind::Page => item.href.to_string(),
    }
}

/// Section whose link should be highlighted. Off the home page no section
/// is highlighted.
pub fn highlighted_section(active_section: &str, on_home: bool) -> Option<&str> {
    if !on_home {
        return None;
    }
    let id = active_section.trim_start_matches('#');
    Some(if id.is_empty() { DEFAULT_HOME_SECTION } else { id })
}

pub fn is_active(item: &NavItem, current_path: &str, active_section: &str) -> bool {
    let on_home = is_home(current_path);
    match item.kind {
        NavKind::Section => highlighted_section(active_section, on_home) == Some(item.href),
        NavKind::Page => normalize_path(item.href) == normalize_path(current_path),
    }
}

pub fn resolve_links(items: &[NavItem], current_path: &str, active_section: &str) -> Vec<NavLink> {
    let on_home = is_home(current_path);
    items
        .iter()
        .map(|item| NavLink {
            label: item.label,
            href: link_href(item, on_home),
            kind: item.kind,
            active: is_active(item, current_path, active_section),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use hush_content::NAVIGATION;

    fn active_labels(links: &[NavLink]) -> Vec<&'static str> {
        links.iter().filter(|l| l.active).map(|l| l.label).collect()
    }

    #[test]
    fn section_links_are_fragments_on_home() {
        let links = resolve_links(NAVIGATION, "/", "problem");
        assert_eq!(links[1].href, "#problem");
        assert_eq!(links[5].href, "/team");
        assert_eq!(active_labels(&links), vec!["Problem"]);
    }

    #[test]
    fn section_links_route_home_from_other_pages() {
        let links = resolve_links(NAVIGATION, "/bom", "goals");
        assert_eq!(links[4].href, "/#goals");
        assert_eq!(active_labels(&links), vec!["BOM"]);
    }

    #[test]
    fn empty_section_on_home_highlights_overview() {
        let links = resolve_links(NAVIGATION, "/", "");
        assert_eq!(active_labels(&links), vec!["Overview"]);
    }

    #[test]
    fn hash_prefixed_section_is_normalized() {
        let links = resolve_links(NAVIGATION, "", "#architecture");
        assert_eq!(active_labels(&links), vec!["Architecture"]);
    }

    #[test]
    fn unknown_section_highlights_nothing() {
        let links = resolve_links(NAVIGATION, "/", "github");
        assert!(active_labels(&links).is_empty());
    }

    #[test]
    fn trailing_slash_matches_page() {
        let links = resolve_links(NAVIGATION, "/team/", "");
        assert_eq!(active_labels(&links), vec!["Team"]);
        assert!(!is_home("/team/"));
        assert!(is_home("//"));
    }

    #[test]
    fn unknown_page_highlights_nothing() {
        assert!(active_labels(&resolve_links(NAVIGATION, "/missing", "overview")).is_empty());
    }
}
