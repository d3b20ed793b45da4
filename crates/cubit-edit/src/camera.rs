use cubit_geom::{Ray, Vec3};
use glam::{Mat4, Quat, Vec4};

use crate::EditorContext;
use crate::config::CameraConfig;
use crate::input::{InputEvent, InputHandler, Key, PointerButton};

/// Perspective camera as seen by picking: position, orientation and viewport.
#[derive(Debug, Clone, PartialEq)]
pub struct EditorCamera {
    pub position: Vec3,
    /// Unit view direction.
    pub direction: Vec3,
    pub up: Vec3,
    pub fov_y: f32,
    pub near: f32,
    pub far: f32,
    pub viewport_width: f32,
    pub viewport_height: f32,
}

impl EditorCamera {
    pub fn from_config(cfg: &CameraConfig) -> Self {
        let [px, py, pz] = cfg.position;
        let [tx, ty, tz] = cfg.target;
        let mut cam = Self {
            position: Vec3::new(px, py, pz),
            direction: Vec3::new(0.0, 0.0, -1.0),
            up: Vec3::UP,
            fov_y: cfg.fov,
            near: cfg.near,
            far: cfg.far,
            viewport_width: cfg.viewport[0],
            viewport_height: cfg.viewport[1],
        };
        cam.look_at(Vec3::new(tx, ty, tz));
        cam
    }

    /// Points the camera at `target`, keeping `up` orthogonal to the new direction.
    pub fn look_at(&mut self, target: Vec3) {
        let dir = (target - self.position).normalized();
        if dir.length() == 0.0 {
            return;
        }
        self.direction = dir;
        self.normalize_up();
    }

    fn normalize_up(&mut self) {
        let right = self.direction.cross(self.up);
        if right.length() > 1e-6 {
            self.up = right.cross(self.direction).normalized();
        }
    }

    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.viewport_width = width;
        self.viewport_height = height;
    }

    #[inline]
    pub fn right(&self) -> Vec3 {
        self.direction.cross(self.up).normalized()
    }

    pub fn view(&self) -> Mat4 {
        Mat4::look_at_rh(
            self.position.into(),
            (self.position + self.direction).into(),
            self.up.into(),
        )
    }

    /// GL-style projection: normalized depth runs from `-1` (near) to `1` (far).
    pub fn projection(&self) -> Mat4 {
        let aspect = if self.viewport_height > 0.0 {
            self.viewport_width / self.viewport_height
        } else {
            1.0
        };
        Mat4::perspective_rh_gl(self.fov_y.to_radians(), aspect, self.near, self.far)
    }

    #[inline]
    pub fn view_projection(&self) -> Mat4 {
        self.projection() * self.view()
    }

    /// `None` when the camera state is degenerate (zero viewport, coincident planes).
    pub fn inverse_view_projection(&self) -> Option<Mat4> {
        let vp = self.view_projection();
        let det = vp.determinant();
        (det.is_finite() && det.abs() > f32::EPSILON).then(|| vp.inverse())
    }

    /// World point under screen pixel `(sx, sy)` (origin top-left) at normalized depth
    /// `ndc_z` (`-1` near plane, `1` far plane).
    pub fn unproject(&self, sx: f32, sy: f32, ndc_z: f32) -> Option<Vec3> {
        let inv = self.inverse_view_projection()?;
        let x = sx / self.viewport_width * 2.0 - 1.0;
        let y = 1.0 - sy / self.viewport_height * 2.0;
        Some(inv.project_point3(glam::Vec3::new(x, y, ndc_z)).into())
    }

    /// Screen pixel of world point `p`, `None` when it lies behind the camera.
    pub fn world_to_screen(&self, p: Vec3) -> Option<(f32, f32)> {
        let clip = self.view_projection() * Vec4::from((glam::Vec3::from(p), 1.0));
        if clip.w <= 0.0 {
            return None;
        }
        let ndc = clip.truncate() / clip.w;
        Some((
            (ndc.x + 1.0) / 2.0 * self.viewport_width,
            (1.0 - ndc.y) / 2.0 * self.viewport_height,
        ))
    }

    /// Ray from the near plane through the given screen pixel.
    pub fn screen_ray(&self, sx: f32, sy: f32) -> Option<Ray> {
        let near = self.unproject(sx, sy, -1.0)?;
        let mut dir = near - self.position;
        if dir.length() < 1e-6 {
            dir = self.unproject(sx, sy, 1.0)? - near;
        }
        Some(Ray::new(near, dir))
    }

    pub fn translate(&mut self, delta: Vec3) {
        self.position += delta;
    }

    /// Turns direction and up about `axis` through the camera position.
    pub fn rotate(&mut self, axis: Vec3, degrees: f32) {
        let Some(r) = turn(axis, degrees) else {
            return;
        };
        self.direction = Vec3::from(r * glam::Vec3::from(self.direction)).normalized();
        self.up = Vec3::from(r * glam::Vec3::from(self.up)).normalized();
    }

    /// Orbits the camera about `axis` through `point`, turning its view with it.
    pub fn rotate_around(&mut self, point: Vec3, axis: Vec3, degrees: f32) {
        let Some(r) = turn(axis, degrees) else {
            return;
        };
        self.position = point + Vec3::from(r * glam::Vec3::from(self.position - point));
        self.rotate(axis, degrees);
    }
}

/// Right-handed rotation of `degrees` about `axis`; `None` for a zero axis.
fn turn(axis: Vec3, degrees: f32) -> Option<Quat> {
    let axis = glam::Vec3::from(axis).try_normalize()?;
    Some(Quat::from_axis_angle(axis, degrees.to_radians()))
}

#[derive(Debug, Clone, Copy, Default)]
struct HeldKeys {
    forward: bool,
    backward: bool,
    left: bool,
    right: bool,
}

/// Lowest-priority handler: fly/orbit controls for the editor camera.
#[derive(Debug, Clone)]
pub struct CameraController {
    pub translate_units: f32,
    pub rotate_angle: f32,
    pub scroll_factor: f32,
    /// Orbit pivot for rotate drags.
    pub target: Vec3,
    held: HeldKeys,
    pressed: Option<PointerButton>,
    last: Option<(f32, f32)>,
}

impl CameraController {
    pub fn from_config(cfg: &CameraConfig) -> Self {
        let [tx, ty, tz] = cfg.target;
        Self {
            translate_units: cfg.translate_units,
            rotate_angle: cfg.rotate_angle,
            scroll_factor: cfg.scroll_factor,
            target: Vec3::new(tx, ty, tz),
            held: HeldKeys::default(),
            pressed: None,
            last: None,
        }
    }

    /// Applies held movement keys for `dt` seconds.
    pub fn update(&mut self, camera: &mut EditorCamera, dt: f32) {
        let step = dt * self.translate_units;
        let mut delta = Vec3::ZERO;
        if self.held.forward {
            delta += camera.direction * step;
        }
        if self.held.backward {
            delta -= camera.direction * step;
        }
        if self.held.left {
            delta -= camera.right() * step;
        }
        if self.held.right {
            delta += camera.right() * step;
        }
        if delta != Vec3::ZERO {
            camera.translate(delta);
            self.target += delta;
        }
    }

    fn drag(&mut self, camera: &mut EditorCamera, button: PointerButton, dx: f32, dy: f32) {
        match button {
            PointerButton::Right => {
                let mut side = camera.direction.cross(camera.up);
                side.y = 0.0;
                if side.length() > 1e-6 {
                    camera.rotate_around(self.target, side.normalized(), dy * self.rotate_angle);
                }
                camera.rotate_around(self.target, Vec3::UP, dx * self.rotate_angle);
            }
            PointerButton::Left => {
                let side = camera.right() * (-dx * self.translate_units);
                let up = camera.up * (-dy * self.translate_units);
                camera.translate(side + up);
                self.target += side + up;
            }
            PointerButton::Middle => {
                let fwd = camera.direction * (dy * self.translate_units);
                camera.translate(fwd);
                self.target += fwd;
            }
        }
    }

    fn set_held(&mut self, key: Key, down: bool) -> bool {
        match key {
            Key::W => self.held.forward = down,
            Key::S => self.held.backward = down,
            Key::A => self.held.left = down,
            Key::D => self.held.right = down,
            _ => return false,
        }
        true
    }
}

impl InputHandler for CameraController {
    fn handle(
        &mut self,
        event: &InputEvent,
        ctx: &mut EditorContext<'_>,
    ) -> Result<bool, cubit_world::GridError> {
        let claimed = match *event {
            InputEvent::KeyDown(key) => self.set_held(key, true),
            InputEvent::KeyUp(key) => self.set_held(key, false),
            InputEvent::PointerDown { x, y, button } => {
                self.pressed = Some(button);
                self.last = Some((x, y));
                true
            }
            InputEvent::PointerUp { button, .. } => {
                if self.pressed == Some(button) {
                    self.pressed = None;
                    self.last = None;
                }
                false
            }
            InputEvent::PointerDrag { x, y, button } => {
                if self.pressed != Some(button) {
                    return Ok(false);
                }
                let (lx, ly) = self.last.unwrap_or((x, y));
                let cam = &mut *ctx.camera;
                let dx = -(x - lx) / cam.viewport_width.max(1.0);
                let dy = (ly - y) / cam.viewport_height.max(1.0);
                self.last = Some((x, y));
                self.drag(cam, button, dx, dy);
                true
            }
            InputEvent::Scroll { amount } => {
                let step = amount * self.scroll_factor * self.translate_units;
                ctx.camera.translate(ctx.camera.direction * step);
                true
            }
        };
        Ok(claimed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn top_down() -> EditorCamera {
        let mut cam = EditorCamera::from_config(&CameraConfig::default());
        cam.position = Vec3::new(25.0, 100.0, 35.0);
        cam.up = Vec3::new(0.0, 0.0, -1.0);
        cam.look_at(Vec3::new(25.0, 0.0, 35.0));
        cam
    }

    #[test]
    fn center_ray_follows_view_direction() {
        let cam = top_down();
        let ray = cam
            .screen_ray(cam.viewport_width / 2.0, cam.viewport_height / 2.0)
            .expect("ray");
        assert!((ray.direction - Vec3::new(0.0, -1.0, 0.0)).length() < 1e-4);
        assert!((ray.origin - Vec3::new(25.0, 99.0, 35.0)).length() < 1e-3);
    }

    #[test]
    fn right_half_of_screen_points_right() {
        let cam = top_down();
        let ray = cam
            .screen_ray(cam.viewport_width * 0.75, cam.viewport_height / 2.0)
            .expect("ray");
        assert!(ray.direction.dot(cam.right()) > 0.0);
    }

    #[test]
    fn default_camera_looks_at_target() {
        let cfg = CameraConfig::default();
        let cam = EditorCamera::from_config(&cfg);
        let to_target = (Vec3::new(20.0, 25.0, 20.0) - cam.position).normalized();
        assert!((cam.direction - to_target).length() < 1e-5);
        assert!(cam.up.dot(cam.direction).abs() < 1e-5);
    }

    #[test]
    fn screen_point_casts_back_through_world_point() {
        let mut cam = EditorCamera::from_config(&CameraConfig::default());
        let p = Vec3::new(40.0, 0.0, 20.0);
        let (sx, sy) = cam.world_to_screen(p).expect("in front");
        let ray = cam.screen_ray(sx, sy).expect("ray");
        let off = (p - ray.origin).cross(ray.direction).length() / ray.direction.length();
        assert!(off < 1e-2, "ray misses point by {off}");

        cam.position = Vec3::new(40.0, 0.0, 60.0);
        cam.up = Vec3::UP;
        cam.look_at(Vec3::new(40.0, 0.0, 100.0));
        assert_eq!(cam.world_to_screen(p), None);
    }

    #[test]
    fn rotation_is_right_handed() {
        let mut cam = top_down();
        cam.direction = Vec3::new(0.0, 0.0, 1.0);
        cam.up = Vec3::UP;
        cam.rotate(Vec3::UP, -90.0);
        assert!((cam.direction - Vec3::new(-1.0, 0.0, 0.0)).length() < 1e-5);
        assert!((cam.up - Vec3::UP).length() < 1e-5);

        let before = cam.clone();
        cam.rotate(Vec3::ZERO, 45.0);
        assert_eq!(cam, before);
    }

    #[test]
    fn degenerate_camera_has_no_rays() {
        let mut cam = top_down();
        cam.near = 1.0;
        cam.far = 1.0;
        assert!(cam.inverse_view_projection().is_none());
        assert!(cam.screen_ray(10.0, 10.0).is_none());

        let mut flat = top_down();
        flat.set_viewport(0.0, 480.0);
        assert!(flat.inverse_view_projection().is_none());
    }

    #[test]
    fn held_keys_translate_on_update() {
        let mut cam = top_down();
        let mut ctl = CameraController::from_config(&CameraConfig::default());
        assert!(ctl.set_held(Key::W, true));
        ctl.update(&mut cam, 0.5);
        assert!((cam.position.y - 80.0).abs() < 1e-3);
        ctl.set_held(Key::W, false);
        ctl.update(&mut cam, 0.5);
        assert!((cam.position.y - 80.0).abs() < 1e-3);
    }
}
