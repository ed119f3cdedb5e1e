use super::camera::Camera;
use super::constants::{PARTICLE_SPIN, TORUS_SPIN};
use glam::{EulerRot, Mat4, Quat, Vec2, Vec3};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LightKind {
    Ambient,
    Point,
    Spot,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Light {
    pub kind: LightKind,
    pub color: Vec3,
    pub intensity: f32,
    pub position: Vec3,
}

/// Static lights placed at boot: one ambient, two point lights, one spot.
pub fn default_lights() -> [Light; 4] {
    [
        Light {
            kind: LightKind::Ambient,
            color: Vec3::new(0.25, 0.25, 0.25),
            intensity: 1.0,
            position: Vec3::ZERO,
        },
        Light {
            kind: LightKind::Point,
            color: Vec3::new(0.388, 0.400, 0.945),
            intensity: 1.0,
            position: Vec3::new(20.0, 20.0, 20.0),
        },
        Light {
            kind: LightKind::Point,
            color: Vec3::new(0.925, 0.282, 0.600),
            intensity: 1.0,
            position: Vec3::new(-20.0, -20.0, 20.0),
        },
        Light {
            kind: LightKind::Spot,
            color: Vec3::ONE,
            intensity: 0.5,
            position: Vec3::new(0.0, 50.0, 0.0),
        },
    ]
}

/// Inputs sampled once per frame.
#[derive(Clone, Copy, Debug)]
pub struct FrameInput {
    pub elapsed_sec: f32,
    pub pointer: Vec2,
    pub scroll_fraction: f32,
    pub aspect: f32,
}

/// Everything the renderer needs for one draw.
#[derive(Clone, Copy, Debug)]
pub struct FrameOutput {
    pub time: f32,
    pub view: Mat4,
    pub view_proj: Mat4,
    pub particle_model: Mat4,
    pub torus_model: Mat4,
}

/// Mutable per-frame scene state owned by the frame context.
#[derive(Clone, Debug)]
pub struct SceneState {
    pub camera: Camera,
    pub lights: [Light; 4],
    pub particle_rotation: Vec3,
    pub torus_rotation: Vec3,
    pub time: f32,
}

impl SceneState {
    pub fn new(aspect: f32) -> Self {
        Self {
            camera: Camera::new(aspect),
            lights: default_lights(),
            particle_rotation: Vec3::ZERO,
            torus_rotation: Vec3::ZERO,
            time: 0.0,
        }
    }

    /// One tick of scene animation, everything except the draw itself.
    pub fn advance(&mut self, input: &FrameInput) -> FrameOutput {
        self.time = input.elapsed_sec.max(self.time);

        let target = Camera::target_orientation(input.pointer);
        self.camera.ease_toward(target);
        self.camera.depth = Camera::depth_for_scroll(input.scroll_fraction);
        self.camera.set_aspect(input.aspect);

        self.particle_rotation.x += PARTICLE_SPIN[0];
        self.particle_rotation.y += PARTICLE_SPIN[1];
        self.torus_rotation += Vec3::from_array(TORUS_SPIN);

        let view = self.camera.view_matrix();
        FrameOutput {
            time: self.time,
            view,
            view_proj: self.camera.projection_matrix() * view,
            particle_model: rotation_matrix(self.particle_rotation),
            torus_model: rotation_matrix(self.torus_rotation),
        }
    }
}

#[inline]
fn rotation_matrix(euler: Vec3) -> Mat4 {
    Mat4::from_quat(Quat::from_euler(EulerRot::XYZ, euler.x, euler.y, euler.z))
}
