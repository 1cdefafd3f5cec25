//! Browser-independent behavior of the Hush site.
//!
//! The web crate owns every DOM handle, timer and listener; the types here
//! only decide what should happen. Each machine consumes plain events and
//! answers with the commands or outcomes the host must carry out, so the
//! logic can be exercised without a browser.

pub mod active_section;
pub mod hash_scroll;
pub mod nav;
pub mod preloader;
pub mod roadmap;
pub mod variant;

pub use active_section::{
    ActiveSectionOptions, DetectionBand, MarginLength, Observation, RootMargin, ScrollMetrics,
    SectionTracker,
};
pub use hash_scroll::{HashScroll, ScrollHost, ScrollOutcome, Transition};
pub use nav::{resolve_links, NavLink};
pub use preloader::{PreloaderCommand, PreloaderConfig, PreloaderEvent, PreloaderMachine, PreloaderPhase};
pub use roadmap::{format_axis_label, RoadmapChart};
pub use variant::Variant;
