use leptos::*;

/// Stroke icons drawn from the lucide set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IconKind {
    Activity,
    ArrowRight,
    ArrowUpRight,
    Brain,
    Check,
    Cpu,
    Database,
    Github,
    Heart,
    Hospital,
    Layers,
    MapPin,
    Menu,
    Microscope,
    Network,
    Rocket,
    ShieldCheck,
    Star,
    Target,
    TrendingUp,
    Users,
    X,
    Zap,
}

impl IconKind {
    fn body(self) -> &'static str {
        match self {
            IconKind::Activity => r#"<path d="M22 12h-4l-3 9L9 3l-3 9H2"/>"#,
            IconKind::ArrowRight => r#"<path d="M5 12h14"/><path d="m12 5 7 7-7 7"/>"#,
            IconKind::ArrowUpRight => r#"<path d="M7 7h10v10"/><path d="M7 17 17 7"/>"#,
            IconKind::Brain => {
                r#"<path d="M12 5a3 3 0 1 0-5.997.125 4 4 0 0 0-2.526 5.77 4 4 0 0 0 .556 6.588A4 4 0 1 0 12 18Z"/><path d="M12 5a3 3 0 1 1 5.997.125 4 4 0 0 1 2.526 5.77 4 4 0 0 1-.556 6.588A4 4 0 1 1 12 18Z"/>"#
            }
            IconKind::Check => r#"<path d="M20 6 9 17l-5-5"/>"#,
            IconKind::Cpu => {
                r#"<rect width="16" height="16" x="4" y="4" rx="2"/><rect width="6" height="6" x="9" y="9" rx="1"/><path d="M15 2v2"/><path d="M15 20v2"/><path d="M2 15h2"/><path d="M2 9h2"/><path d="M20 15h2"/><path d="M20 9h2"/><path d="M9 2v2"/><path d="M9 20v2"/>"#
            }
            IconKind::Database => {
                r#"<ellipse cx="12" cy="5" rx="9" ry="3"/><path d="M3 5V19A9 3 0 0 0 21 19V5"/><path d="M3 12A9 3 0 0 0 21 12"/>"#
            }
            IconKind::Github => {
                r#"<path d="M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.403 5.403 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4"/><path d="M9 18c-4.51 2-5-2-7-2"/>"#
            }
            IconKind::Heart => {
                r#"<path d="M19 14c1.49-1.46 3-3.21 3-5.5A5.5 5.5 0 0 0 16.5 3c-1.76 0-3 .5-4.5 2-1.5-1.5-2.74-2-4.5-2A5.5 5.5 0 0 0 2 8.5c0 2.3 1.5 4.05 3 5.5l7 7Z"/>"#
            }
            IconKind::Hospital => {
                r#"<path d="M12 6v4"/><path d="M14 14h-4"/><path d="M14 18h-4"/><path d="M14 8h-4"/><path d="M18 12h2a2 2 0 0 1 2 2v6a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2v-9a2 2 0 0 1 2-2h2"/><path d="M18 22V4a2 2 0 0 0-2-2H8a2 2 0 0 0-2 2v18"/>"#
            }
            IconKind::Layers => {
                r#"<path d="m12.83 2.18a2 2 0 0 0-1.66 0L2.6 6.08a1 1 0 0 0 0 1.83l8.58 3.91a2 2 0 0 0 1.66 0l8.58-3.9a1 1 0 0 0 0-1.83Z"/><path d="m22 17.65-9.17 4.16a2 2 0 0 1-1.66 0L2 17.65"/><path d="m22 12.65-9.17 4.16a2 2 0 0 1-1.66 0L2 12.65"/>"#
            }
            IconKind::MapPin => {
                r#"<path d="M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0Z"/><circle cx="12" cy="10" r="3"/>"#
            }
            IconKind::Menu => {
                r#"<line x1="4" x2="20" y1="12" y2="12"/><line x1="4" x2="20" y1="6" y2="6"/><line x1="4" x2="20" y1="18" y2="18"/>"#
            }
            IconKind::Microscope => {
                r#"<path d="M6 18h8"/><path d="M3 22h18"/><path d="M14 22a7 7 0 1 0 0-14h-1"/><path d="M9 14h2"/><path d="M9 12a2 2 0 0 1-2-2V6h6v4a2 2 0 0 1-2 2Z"/><path d="M12 6V3a1 1 0 0 0-1-1H9a1 1 0 0 0-1 1v3"/>"#
            }
            IconKind::Network => {
                r#"<rect x="16" y="16" width="6" height="6" rx="1"/><rect x="2" y="16" width="6" height="6" rx="1"/><rect x="9" y="2" width="6" height="6" rx="1"/><path d="M5 16v-3a1 1 0 0 1 1-1h12a1 1 0 0 1 1 1v3"/><path d="M12 12V8"/>"#
            }
            IconKind::Rocket => {
                r#"<path d="M4.5 16.5c-1.5 1.26-2 5-2 5s3.74-.5 5-2c.71-.84.7-2.13-.09-2.91a2.18 2.18 0 0 0-2.91-.09z"/><path d="m12 15-3-3a22 22 0 0 1 2-3.95A12.88 12.88 0 0 1 22 2c0 2.72-.78 7.5-6 11a22.35 22.35 0 0 1-4 2z"/><path d="M9 12H4s.55-3.03 2-4c1.62-1.08 5 0 5 0"/><path d="M12 15v5s3.03-.55 4-2c1.08-1.62 0-5 0-5"/>"#
            }
            IconKind::ShieldCheck => {
                r#"<path d="M20 13c0 5-3.5 7.5-7.66 8.95a1 1 0 0 1-.67-.01C7.5 20.5 4 18 4 13V6a1 1 0 0 1 1-1c2 0 4.5-1.2 6.24-2.72a1.17 1.17 0 0 1 1.52 0C14.51 3.81 17 5 19 5a1 1 0 0 1 1 1z"/><path d="m9 12 2 2 4-4"/>"#
            }
            IconKind::Star => {
                r#"<polygon points="12 2 15.09 8.26 22 9.27 17 14.14 18.18 21.02 12 17.77 5.82 21.02 7 14.14 2 9.27 8.91 8.26 12 2"/>"#
            }
            IconKind::Target => {
                r#"<circle cx="12" cy="12" r="10"/><circle cx="12" cy="12" r="6"/><circle cx="12" cy="12" r="2"/>"#
            }
            IconKind::TrendingUp => {
                r#"<polyline points="22 7 13.5 15.5 8.5 10.5 2 17"/><polyline points="16 7 22 7 22 13"/>"#
            }
            IconKind::Users => {
                r#"<path d="M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2"/><circle cx="9" cy="7" r="4"/><path d="M22 21v-2a4 4 0 0 0-3-3.87"/><path d="M16 3.13a4 4 0 0 1 0 7.75"/>"#
            }
            IconKind::X => r#"<path d="M18 6 6 18"/><path d="m6 6 12 12"/>"#,
            IconKind::Zap => {
                r#"<path d="M4 14a1 1 0 0 1-.78-1.63l9.9-10.2a.5.5 0 0 1 .86.46l-1.92 6.02A1 1 0 0 0 13 10h7a1 1 0 0 1 .78 1.63l-9.9 10.2a.5.5 0 0 1-.86-.46l1.92-6.02A1 1 0 0 0 11 14z"/>"#
            }
        }
    }

    /// Icon for a hero stat, picked from words in its label.
    pub fn for_stat(label: &str) -> Self {
        let label = label.to_ascii_lowercase();
        if label.contains("continuous") {
            IconKind::Activity
        } else if label.contains("high-risk") {
            IconKind::ShieldCheck
        } else if label.contains("layer") {
            IconKind::Layers
        } else {
            IconKind::Zap
        }
    }

    /// Icon marking a roadmap stage, by position.
    pub fn for_milestone(index: usize) -> Self {
        const STAGES: [IconKind; 5] = [
            IconKind::ShieldCheck,
            IconKind::Rocket,
            IconKind::TrendingUp,
            IconKind::MapPin,
            IconKind::Target,
        ];
        STAGES[index % STAGES.len()]
    }

    /// Icon for a solution feature, picked from its kind.
    pub fn for_feature(kind: &str) -> Self {
        let kind = kind.to_ascii_lowercase();
        let has = |words: &[&str]| words.iter().any(|w| kind.contains(w));
        if has(&["hardware", "sensor"]) {
            IconKind::Cpu
        } else if has(&["software", "app"]) {
            IconKind::Layers
        } else if has(&["ai", "intelligence"]) {
            IconKind::Brain
        } else if has(&["data"]) {
            IconKind::Database
        } else if has(&["research", "bio"]) {
            IconKind::Microscope
        } else if has(&["network"]) {
            IconKind::Network
        } else {
            IconKind::Activity
        }
    }
}

#[component]
pub fn Icon(kind: IconKind, #[prop(default = 20)] size: u32, #[prop(optional)] class: &'static str) -> impl IntoView {
    view! {
      <svg
        xmlns="http://www.w3.org/2000/svg"
        width=size
        height=size
        viewBox="0 0 24 24"
        fill="none"
        stroke="currentColor"
        stroke-width="2"
        stroke-linecap="round"
        stroke-linejoin="round"
        class=class
        aria-hidden="true"
        inner_html=kind.body()
      ></svg>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stat_labels_pick_matching_icons() {
        assert_eq!(IconKind::for_stat("Continuous Monitoring"), IconKind::Activity);
        assert_eq!(IconKind::for_stat("High-Risk Infants"), IconKind::ShieldCheck);
        assert_eq!(IconKind::for_stat("System Layers"), IconKind::Layers);
        assert_eq!(IconKind::for_stat("Response time"), IconKind::Zap);
    }

    #[test]
    fn feature_kinds_pick_matching_icons() {
        assert_eq!(IconKind::for_feature("Sensor Hub"), IconKind::Cpu);
        assert_eq!(IconKind::for_feature("Mobile App"), IconKind::Layers);
        assert_eq!(IconKind::for_feature("AI Service"), IconKind::Brain);
        assert_eq!(IconKind::for_feature("Data Lake"), IconKind::Database);
        assert_eq!(IconKind::for_feature("Wearable"), IconKind::Activity);
        assert_eq!(IconKind::for_feature("Edge Device"), IconKind::Activity);
    }
}
