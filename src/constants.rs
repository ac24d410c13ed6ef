// Page wiring for the web front-end.
//
// Element ids and selectors match `index.html`; scene tuning lives in
// `elements_core::constants`.

// Containers
pub const CANVAS_CONTAINER_ID: &str = "canvas-container";
pub const STARS_SELECTOR: &str = "#stars";
pub const SCROLL_CONTAINER_SELECTOR: &str = ".container";
pub const BACK_BUTTON_SELECTOR: &str = ".back";

// Canvas clear, premultiplied RGBA; the page background shows through
pub const CANVAS_CLEAR_RGBA: [f64; 4] = [0.0, 0.0, 0.0, 0.0];

// One pinned slide per element, in scroll order
pub const SLIDE_SELECTORS: [&str; 5] = [".one", ".two", ".three", ".four", ".five"];
pub const SLIDE_SIDE_SELECTOR: &str = ".side";

pub const STAR_CLASS: &str = "star";

// Element images are served next to index.html
pub const IMAGE_BASE_PATH: &str = "./";

// Quiet period after the last scroll event before settling on a snap stop
pub const SNAP_IDLE_MS: i32 = 150;

// Snap is skipped when already this close to the stop (pixels)
pub const SNAP_TOLERANCE_PX: f64 = 1.0;
