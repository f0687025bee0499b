// Visibility evaluation and bootstrap tuning constants shared by the web front end.

// Fraction of the viewport height trimmed from each edge for inner-band modes
pub const DEFAULT_THRESHOLD: f64 = 0.25;
pub const DEFAULT_OFFSET_PX: f64 = 0.0;

// Effect preset defaults
pub const DEFAULT_INTENSITY: f64 = 5.0;
pub const DEFAULT_SPEED_MS: u32 = 1000;
pub const BLUR_REM_PER_INTENSITY: f64 = 0.25;
pub const SCALE_PER_INTENSITY: f64 = 0.05;

// Timers (milliseconds)
pub const RESIZE_DEBOUNCE_MS: u32 = 250;
pub const READY_DELAY_MS: u32 = 1000;

// Marker attributes read (and cleared) from the host document
pub const ATTR_DEFERRED_SRC: &str = "data-src";
pub const ATTR_INITIAL_SRC: &str = "data-initial-src";
pub const ATTR_AUTOFOCUS: &str = "data-autofocus";
pub const ATTR_UNLOADED: &str = "data-unloaded";
pub const ATTR_TRIGGER: &str = "data-onvisible-trigger";

// Body classes toggled once the page settles
pub const CLASS_LOADING: &str = "is-loading";
pub const CLASS_READY: &str = "is-ready";

pub const EVENT_LOAD_ELEMENTS: &str = "loadelements";
pub const CONFIG_ELEMENT_ID: &str = "onvisible-config";

#[inline]
pub fn trigger_selector() -> String {
    format!("[{}]", ATTR_TRIGGER)
}
