pub mod camera;
pub mod config;
pub mod constants;
pub mod effect;
pub mod form;
pub mod loader;
pub mod nav;
pub mod particles;
pub mod quality;
pub mod reveal;
pub mod scene;
pub mod scheduler;
pub mod torus;
pub mod typing;
pub mod viewport;

pub use camera::Camera;
pub use config::SiteConfig;
pub use effect::{EffectParams, SurfaceEffect, WaveGlow};
pub use quality::QualityProfile;
pub use scene::{FrameInput, FrameOutput, SceneState};
pub use scheduler::{FrameScheduler, LoopState, RenderLoop};
pub use viewport::ViewportState;

// Shaders bundled as string constants
pub static PARTICLES_WGSL: &str = include_str!("../../shaders/particles.wgsl");
