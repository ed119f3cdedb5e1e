// Shared tuning constants for the background scene and page controllers.
//
// Kept free of platform APIs so host-side tests can include this file.

// Camera lens
pub const CAMERA_FOV_DEG: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;
pub const CAMERA_BASE_DISTANCE: f32 = 30.0; // eye distance on +Z at scroll 0

// Camera follow
pub const POINTER_ORIENTATION_SCALE: f32 = 2.0; // pointer [-0.5, 0.5] -> radians
pub const CAMERA_EASE: f32 = 0.05; // fraction of remaining delta per frame
pub const SCROLL_DEPTH_RANGE: f32 = 10.0; // extra distance at scroll fraction 1

// Per-frame rotation increments (radians)
pub const PARTICLE_SPIN: [f32; 2] = [0.0005, 0.001]; // x, y
pub const TORUS_SPIN: [f32; 3] = [0.001, 0.005, 0.001]; // x, y, z

// Particle field
pub const PARTICLE_RADIUS_MIN: f32 = 20.0;
pub const PARTICLE_RADIUS_MAX: f32 = 60.0;
pub const PARTICLE_COLOR_A: [f32; 3] = [0.388, 0.400, 0.945]; // indigo
pub const PARTICLE_COLOR_B: [f32; 3] = [0.925, 0.282, 0.600]; // pink
pub const PARTICLE_ALPHA: f32 = 0.8;

// Quality profiles
pub const PARTICLE_COUNT_FULL: usize = 800;
pub const PARTICLE_COUNT_REDUCED: usize = 300;
pub const PIXEL_RATIO_CAP_FULL: f64 = 2.0;
pub const PIXEL_RATIO_CAP_REDUCED: f64 = 1.0;
pub const CONSTRAINED_CONCURRENCY: u32 = 4; // fewer cores than this is constrained

// Torus geometry
pub const TORUS_RADIUS: f32 = 10.0;
pub const TORUS_TUBE: f32 = 3.0;
pub const TORUS_RADIAL_SEGMENTS: u32 = 16;
pub const TORUS_TUBULAR_SEGMENTS: u32 = 100;

// Torus effect
pub const TORUS_COLOR_A: [f32; 3] = [0.388, 0.400, 0.945];
pub const TORUS_COLOR_B: [f32; 3] = [0.545, 0.361, 0.965];
pub const DISPLACE_AMPLITUDE: f32 = 0.2;
pub const DISPLACE_FREQUENCY: f32 = 0.5;
pub const PULSE_BASE: f32 = 0.8;
pub const PULSE_DEPTH: f32 = 0.2;
pub const PULSE_RATE: f32 = 0.5;
pub const RIM_POWER: i32 = 3;
pub const RIM_STRENGTH: f32 = 0.5;
pub const TORUS_ALPHA: f32 = 0.8;

// Clear color behind the scene (premultiplied-free, linear)
pub const CLEAR_COLOR: [f64; 3] = [0.02, 0.02, 0.05];

// Typing effect timing (milliseconds)
pub const TYPE_DELAY_MS: u32 = 100;
pub const DELETE_DELAY_MS: u32 = 50;
pub const HOLD_FULL_MS: u32 = 2000;
pub const HOLD_EMPTY_MS: u32 = 500;

pub const DEFAULT_ROLES: [&str; 4] = [
    "Full-Stack Developer",
    "Creative Technologist",
    "UI/UX Enthusiast",
    "Problem Solver",
];

// Scroll reveal
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

// Navigation
pub const NAV_ACTIVE_OFFSET_PX: f64 = 200.0;
pub const NAVBAR_SCROLLED_PX: f64 = 50.0;
pub const BACK_TO_TOP_PX: f64 = 300.0;

// Loader overlay
pub const LOADER_FADE_MS: u32 = 1500;
pub const LOADER_HIDE_MS: u32 = 2000;

// Contact form
pub const DEFAULT_FORM_ENDPOINT: &str = "https://formspree.io/f/contact";
pub const BUSY_LABEL: &str = "Sending...";
pub const NOTICE_SUCCESS: &str = "Thanks! Your message has been sent.";
pub const NOTICE_FAILURE: &str = "Sorry, something went wrong. Please try again later.";
