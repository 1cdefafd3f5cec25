//! Content model for the Hush marketing site.
//!
//! Everything here is authored once as `'static` data and read by the web
//! crate. Nothing is mutated at runtime; the only owned type is the contact
//! request that travels between the form and the server.

use serde::Serialize;
use std::fmt;

mod contact;
mod site;

pub use contact::{validate_contact, ContactError, ContactReceipt, ContactRequest};
pub use site::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NavKind {
    /// `href` is the id of a section on the home page.
    Section,
    /// `href` is a route path.
    Page,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub label: &'static str,
    pub href: &'static str,
    pub kind: NavKind,
}

#[derive(Clone, Copy, Debug, Serialize)]
pub struct SiteMetadata {
    pub title: &'static str,
    pub description: &'static str,
    pub language: &'static str,
    pub canonical_url: &'static str,
    pub site_name: &'static str,
}

#[derive(Clone, Copy, Debug, Serialize)]
pub struct HeroContent {
    pub headline: &'static str,
    pub subheadline: &'static str,
    pub cta_text: &'static str,
    pub background_context: &'static str,
}

#[derive(Clone, Copy, Debug, Serialize)]
pub struct HeroStat {
    pub label: &'static str,
    pub value: &'static str,
    pub caption: &'static str,
}

#[derive(Clone, Copy, Debug, Serialize)]
pub struct ProblemCard {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug, Serialize)]
pub struct SolutionFeature {
    pub component: &'static str,
    pub kind: &'static str,
    pub description: &'static str,
    pub key_features: &'static [&'static str],
    pub capabilities: &'static [&'static str],
}

#[derive(Clone, Copy, Debug, Serialize)]
pub struct HardwareSpec {
    pub device: &'static str,
    pub microcontroller: &'static str,
    pub sensors: &'static [&'static str],
}

#[derive(Clone, Copy, Debug, Serialize)]
pub struct ProtocolSpec {
    pub protocol: &'static str,
    pub function: &'static str,
}

/// One layer of the four-layer IoT stack. A layer lists hardware, protocols
/// or a tech stack; the empty slices are simply not rendered.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct ArchitectureLayer {
    pub layer_name: &'static str,
    pub role: &'static str,
    pub hardware_specs: &'static [HardwareSpec],
    pub protocols: &'static [ProtocolSpec],
    pub tech_stack: &'static [&'static str],
}

#[derive(Clone, Copy, Debug, Serialize)]
pub struct BusinessGoals {
    pub title: &'static str,
    pub objectives: &'static [&'static str],
}

/// A point on the adoption roadmap shown in the goals section.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct Milestone {
    pub year: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub hospitals: u32,
    pub active_users: u32,
    pub parents_helped: u32,
    pub parent_support: &'static str,
}

#[derive(Clone, Copy, Debug, Serialize)]
pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
    /// Unsplash photo id used by the remote portrait variants.
    pub portrait_id: &'static str,
}

impl TeamMember {
    pub fn local_portrait(&self) -> String {
        format!("/images/{}.jpg", self.name.to_lowercase())
    }

    pub fn remote_portrait(&self) -> String {
        format!(
            "https://images.unsplash.com/photo-{}?q=80&w=200&auto=format&fit=crop",
            self.portrait_id
        )
    }
}

/// Short titled paragraph used by the team principles and BOM narrative.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct Blurb {
    pub title: &'static str,
    pub body: &'static str,
}

/// Headline figure tile used by the team and BOM page heroes.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct StatTile {
    pub label: &'static str,
    pub value: &'static str,
    pub caption: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Quantity {
    Count(u32),
    Text(&'static str),
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Quantity::Count(n) => write!(f, "{n}"),
            Quantity::Text(s) => f.write_str(s),
        }
    }
}

#[derive(Clone, Copy, Debug, Serialize)]
pub struct BomItem {
    pub part: &'static str,
    pub spec: &'static str,
    pub qty: Quantity,
    /// Unit price as quoted by the vendor; may cover several parts ("40 / 10").
    pub price: &'static str,
    pub total_cost: u32,
}

#[derive(Clone, Copy, Debug, Serialize)]
pub struct BillOfMaterials {
    pub title: &'static str,
    pub currency: &'static str,
    pub items: &'static [BomItem],
}

impl BillOfMaterials {
    pub fn total_cost(&self) -> u32 {
        self.items.iter().map(|item| item.total_cost).sum()
    }

    /// Budget line as displayed, e.g. `NT$2355`.
    pub fn total_estimated_budget(&self) -> String {
        format!("{}{}", self.currency, self.total_cost())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bom_budget_is_sum_of_line_totals() {
        assert_eq!(BILL_OF_MATERIALS.total_cost(), 2355);
        assert_eq!(BILL_OF_MATERIALS.total_estimated_budget(), "NT$2355");
    }

    #[test]
    fn quantity_displays_count_or_text() {
        assert_eq!(Quantity::Count(1).to_string(), "1");
        assert_eq!(Quantity::Text("Various").to_string(), "Various");
    }

    #[test]
    fn section_nav_items_point_at_home_sections() {
        for item in NAVIGATION.iter().filter(|i| i.kind == NavKind::Section) {
            assert!(
                HOME_SECTION_IDS.contains(&item.href),
                "nav item {} has no home section",
                item.label
            );
        }
    }

    #[test]
    fn page_nav_items_are_absolute_paths() {
        for item in NAVIGATION.iter().filter(|i| i.kind == NavKind::Page) {
            assert!(item.href.starts_with('/'), "{}", item.href);
        }
    }

    #[test]
    fn portraits_resolve_local_and_remote() {
        let gerald = TEAM_MEMBERS[0];
        assert_eq!(gerald.local_portrait(), "/images/gerald.jpg");
        assert!(is_allowed_image_url(&gerald.remote_portrait()));
    }

    #[test]
    fn remote_images_use_allowed_hosts() {
        for url in REMOTE_IMAGES {
            assert!(is_allowed_image_url(url), "{url}");
        }
        for member in TEAM_MEMBERS {
            assert!(is_allowed_image_url(&member.remote_portrait()));
        }
        assert!(!is_allowed_image_url("https://example.com/a.png"));
        assert!(!is_allowed_image_url("http://images.unsplash.com/a.png"));
        assert!(!is_allowed_image_url("not a url"));
    }

    #[test]
    fn content_serializes_for_inspection() {
        let json = serde_json::to_value(NAVIGATION[5]).expect("nav json");
        assert_eq!(json["kind"], "page");
        let qty = serde_json::to_value(BILL_OF_MATERIALS.items[9].qty).expect("qty json");
        assert_eq!(qty, "Various");
    }
}
