// Fixed scene tuning shared by the core state machine and the web host.

// Scroll mapping
pub const SNAP_INC: f32 = 23.0; // progress units per snap stop
pub const WINDOW_LEN: f32 = 4.0; // x units per segment window
pub const SEGMENT_COUNT: usize = 5;
pub const ALL_VISIBLE_INDEX: i32 = SEGMENT_COUNT as i32; // one past the last real segment
pub const AFTER_LAST_INDEX: i32 = ALL_VISIBLE_INDEX + 1;

// Camera
pub const CAMERA_PAN_SPAN: f32 = 10.0; // y sweeps [-5, 5] across one window
pub const CAMERA_Z: f32 = 2.5;
pub const CAMERA_NEAR: f32 = 0.0;
pub const CAMERA_FAR: f32 = 20.0;
pub const FRUSTUM_SIZE: f32 = 9.0; // vertical extent of the orthographic frustum

// Transition
pub const DEPTH_TRAVEL: f32 = 25.0;

// Fog and clear color
pub const FOG_NEAR: f32 = 10.0;
pub const FOG_FAR: f32 = 15.0;
pub const BACKGROUND_HEX: u32 = 0x111111;

// Solids
pub const SOLID_RADIUS: f32 = 1.75;
pub const GHOST_SHELLS: usize = 1;
pub const SHELL_SCALE_STEP: f32 = 0.1;
pub const SHELL_COLOR_OFFSET_SPAN: f32 = 0.25;
pub const GHOST_OPACITY: f32 = 0.95;
pub const CORE_OPACITY: f32 = 1.0;
pub const ALPHA_PATTERN_DARKEN: f32 = 0.8; // black overlay alpha of the default pattern

// Render clock
pub const ROTATION_PER_SEC: f32 = 0.5;
pub const TEXTURE_SCROLL_PER_SEC: f32 = 0.1;

// Particle field
pub const PARTICLE_COUNT: usize = 100;
pub const PARTICLE_MAX_SIZE: f32 = 5.0;
pub const PARTICLE_WRAP_AT: f32 = 100.0; // percent
pub const PARTICLE_RESPAWN_AT: f32 = -5.0; // percent
pub const PARTICLE_DRIFT_MIN: f32 = 0.05;
pub const PARTICLE_DRIFT_RANDOM_SPAN: f32 = 0.02;
pub const VELOCITY_SIZE_DIVISOR: f32 = 5.0;
pub const HEIGHT_CLAMP_BOUND: f32 = 1500.0;
pub const OFFSET_CLAMP_BOUND: f32 = 3000.0;
pub const HEIGHT_GAIN: f32 = 0.02;
pub const OFFSET_GAIN_FORWARD: f32 = 0.08;
pub const OFFSET_GAIN_BACKWARD: f32 = 0.06;

// Velocity decay
pub const DECAY_DURATION_SEC: f32 = 0.5;

// Deterministic particle layout unless the host asks otherwise
pub const DEFAULT_SEED: u64 = 0x5EED_E1E5;
