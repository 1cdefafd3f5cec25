mod active_section;
mod hash_scroll;
mod observer;

pub use active_section::use_active_section;
pub use hash_scroll::use_hash_scroll;
pub use observer::ViewportObserver;

use std::time::Duration;

/// Timer delay in the form browser timers take.
pub fn millis(delay: Duration) -> u32 {
    u32::try_from(delay.as_millis()).unwrap_or(u32::MAX)
}
