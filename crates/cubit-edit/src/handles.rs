use cubit_blocks::BLOCK_SIZE;
use cubit_geom::{Aabb, Axis, Plane, Ray, Vec3, Vec3i};
use cubit_world::{GridDims, GridError};

use crate::EditorContext;
use crate::input::{InputEvent, InputHandler, PointerButton};
use crate::raycast::PickOrder;

/// Face of the selection box grabbed by a resize drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandleSide {
    Top,
    Bottom,
    Left,
    Right,
    Front,
    Back,
}

impl HandleSide {
    pub const ALL: [HandleSide; 6] = [
        HandleSide::Top,
        HandleSide::Bottom,
        HandleSide::Left,
        HandleSide::Right,
        HandleSide::Front,
        HandleSide::Back,
    ];

    /// Axis the handle moves along.
    pub fn axis(self) -> Axis {
        match self {
            HandleSide::Top | HandleSide::Bottom => Axis::Y,
            HandleSide::Left | HandleSide::Right => Axis::X,
            HandleSide::Front | HandleSide::Back => Axis::Z,
        }
    }

    /// `true` when the face points toward `+axis`.
    pub fn is_positive(self) -> bool {
        matches!(self, HandleSide::Top | HandleSide::Right | HandleSide::Front)
    }

    /// Slab of depth `thickness` lying just inside this face of `bounds`.
    pub fn slab(self, bounds: &Aabb, thickness: f32) -> Aabb {
        let axis = self.axis();
        let mut min = bounds.min;
        let mut max = bounds.max;
        if self.is_positive() {
            min.set(axis, bounds.max.get(axis) - thickness);
        } else {
            max.set(axis, bounds.min.get(axis) + thickness);
        }
        Aabb::new(min, max)
    }

    /// Whether the primary endpoint is the one this handle moves: the endpoint further
    /// in the handle's direction moves, the secondary on a tie.
    pub fn moves_primary(self, primary: Vec3i, secondary: Vec3i) -> bool {
        let axis = self.axis();
        let (p, s) = (primary.get(axis), secondary.get(axis));
        if self.is_positive() { p > s } else { p < s }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandleHit {
    pub side: HandleSide,
    pub point: Vec3,
    pub distance_sq: f32,
}

/// Intersects `ray` with the six handle slabs of `bounds` and keeps the hit point nearest
/// to (or farthest from) `eye`.
pub fn pick_handle(
    ray: &Ray,
    eye: Vec3,
    bounds: &Aabb,
    thickness: f32,
    epsilon: f32,
    order: PickOrder,
) -> Option<HandleHit> {
    let mut best: Option<HandleHit> = None;
    for side in HandleSide::ALL {
        let slab = side.slab(bounds, thickness);
        let Some(t) = ray.intersect_aabb(&slab, epsilon) else {
            continue;
        };
        let point = ray.at(t);
        let distance_sq = point.distance_squared(eye);
        if best.is_none_or(|b| order.prefers(distance_sq, b.distance_sq)) {
            best = Some(HandleHit {
                side,
                point,
                distance_sq,
            });
        }
    }
    best
}

/// Plane a grabbed handle slides along. Vertical handles use a vertical plane facing the
/// camera; lateral handles use the horizontal plane through the grab point.
pub fn drag_plane(side: HandleSide, ray_direction: Vec3, point: Vec3, epsilon: f32) -> Plane {
    match side.axis() {
        Axis::Y => {
            let mut n = ray_direction;
            n.y = 0.0;
            if n.length() < epsilon.max(1e-6) {
                n = Vec3::new(0.0, 0.0, 1.0);
            }
            Plane::from_point_normal(point, n)
        }
        _ => Plane::from_point_normal(point, Vec3::UP),
    }
}

/// New `(primary, secondary)` after dragging `side` to world point `hit`, clamped to `dims`.
pub fn resize_endpoints(
    side: HandleSide,
    primary: Vec3i,
    secondary: Vec3i,
    hit: Vec3,
    dims: GridDims,
) -> (Vec3i, Vec3i) {
    let axis = side.axis();
    let cell = (hit.get(axis) / BLOCK_SIZE).floor() as i32;
    let cell = dims.clamp(Vec3i::ZERO.with(axis, cell)).get(axis);
    if side.moves_primary(primary, secondary) {
        (primary.with(axis, cell), secondary)
    } else {
        (primary, secondary.with(axis, cell))
    }
}

#[derive(Debug, Clone, Copy)]
struct Drag {
    side: HandleSide,
    plane: Plane,
}

/// Grabs a face of the current selection box and drags it to resize the box.
#[derive(Debug, Clone)]
pub struct SelectionModifyHandler {
    pub thickness: f32,
    pub epsilon: f32,
    drag: Option<Drag>,
}

impl SelectionModifyHandler {
    pub fn new(thickness: f32, epsilon: f32) -> Self {
        Self {
            thickness,
            epsilon,
            drag: None,
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn active_side(&self) -> Option<HandleSide> {
        self.drag.map(|d| d.side)
    }

    /// Starts a resize if `ray` grabs a handle of the current selection.
    pub fn press(&mut self, ray: &Ray, ctx: &mut EditorContext<'_>) -> bool {
        let Some(sel) = ctx.selection.bounds() else {
            return false;
        };
        let order = PickOrder::from_shift(ctx.modifiers.shift);
        let eye = ctx.camera.position;
        let bounds = sel.world_bounds();
        let Some(hit) = pick_handle(ray, eye, &bounds, self.thickness, self.epsilon, order)
        else {
            return false;
        };
        let plane = drag_plane(hit.side, ray.direction, hit.point, self.epsilon);
        log::debug!(target: "selection", "grabbed {:?} handle at {:?}", hit.side, hit.point);
        self.drag = Some(Drag {
            side: hit.side,
            plane,
        });
        true
    }

    pub fn drag_to(&mut self, ray: &Ray, ctx: &mut EditorContext<'_>) {
        let Some(drag) = self.drag else {
            return;
        };
        let Some(hit) = ray.intersect_plane(&drag.plane, self.epsilon) else {
            return;
        };
        let Some(primary) = ctx.selection.primary() else {
            return;
        };
        let secondary = ctx.selection.secondary().unwrap_or(primary);
        let (p, s) = resize_endpoints(drag.side, primary, secondary, hit, ctx.grid.dims());
        ctx.selection.set(Some(p), Some(s));
    }
}

impl InputHandler for SelectionModifyHandler {
    fn handle(
        &mut self,
        event: &InputEvent,
        ctx: &mut EditorContext<'_>,
    ) -> Result<bool, GridError> {
        let claimed = match *event {
            InputEvent::PointerDown {
                x,
                y,
                button: PointerButton::Left,
            } => match ctx.camera.screen_ray(x, y) {
                Some(ray) => self.press(&ray, ctx),
                None => false,
            },
            InputEvent::PointerDrag { x, y, .. } if self.drag.is_some() => {
                if let Some(ray) = ctx.camera.screen_ray(x, y) {
                    self.drag_to(&ray, ctx);
                }
                true
            }
            InputEvent::PointerUp {
                button: PointerButton::Left,
                ..
            } => self.drag.take().is_some(),
            _ => false,
        };
        Ok(claimed)
    }
}
