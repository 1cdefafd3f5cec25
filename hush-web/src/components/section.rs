use hush_content::is_allowed_image_url;
use leptos::*;

/// Inline style selecting the display typeface.
pub const DISPLAY_FONT: &str = "font-family: var(--font-space-grotesk)";

/// `01`, `02`, ... for a zero-based position.
pub fn two_digit(index: usize) -> String {
    format!("{:02}", index + 1)
}

/// Local assets and allow-listed remote hosts render; anything else is
/// dropped so a typo in content cannot pull from an arbitrary origin.
pub fn image_source(src: &'static str) -> Option<&'static str> {
    if src.starts_with('/') || is_allowed_image_url(src) {
        Some(src)
    } else {
        tracing::warn!(%src, "image host not allowed");
        None
    }
}

/// Pill label, heading and optional lead paragraph above a section body.
#[component]
pub fn SectionIntro(
    eyebrow: &'static str,
    title: &'static str,
    #[prop(optional)] lead: Option<&'static str>,
) -> impl IntoView {
    view! {
      <div class="mx-auto mb-16 max-w-4xl text-center">
        <span class="mb-6 inline-block rounded-full border border-white/10 bg-white/5 px-3 py-1 text-[0.65rem] uppercase tracking-widest text-white/60">
          {eyebrow}
        </span>
        <h2 class="mb-6 text-4xl font-bold text-white md:text-5xl" style=DISPLAY_FONT>{title}</h2>
        {lead.map(|lead| view! { <p class="mx-auto max-w-2xl text-lg text-white/60">{lead}</p> })}
      </div>
    }
}

/// Decorative cover image filling its positioned parent.
#[component]
pub fn CoverImage(
    src: &'static str,
    alt: &'static str,
    #[prop(optional)] class: &'static str,
) -> impl IntoView {
    image_source(src).map(|src| {
        view! {
          <img
            src=src
            alt=alt
            loading="lazy"
            class=format!("absolute inset-0 h-full w-full object-cover {class}")
          />
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use hush_content::{HERO_MASCOT_SRC, REMOTE_IMAGES};

    #[test]
    fn positions_are_padded() {
        assert_eq!(two_digit(0), "01");
        assert_eq!(two_digit(9), "10");
    }

    #[test]
    fn site_images_are_renderable() {
        assert_eq!(image_source(HERO_MASCOT_SRC), Some(HERO_MASCOT_SRC));
        assert!(REMOTE_IMAGES.iter().all(|src| image_source(src).is_some()));
    }

    #[test]
    fn foreign_hosts_are_dropped() {
        assert_eq!(image_source("https://example.com/a.png"), None);
        assert_eq!(image_source("http://images.unsplash.com/a.png"), None);
    }
}
