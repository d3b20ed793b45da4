use cubit_geom::Ray;
use cubit_world::GridError;

use crate::EditorContext;
use crate::input::{InputEvent, InputHandler, PointerButton};
use crate::raycast::{BlockCaster, PickOrder};

/// Open/pick gesture: a press picks a cell, a drag sweeps the primary to form a box.
#[derive(Debug, Clone)]
pub struct SelectionOpenHandler {
    caster: BlockCaster,
    active: bool,
}

impl SelectionOpenHandler {
    pub fn new(epsilon: f32) -> Self {
        Self {
            caster: BlockCaster::new(epsilon),
            active: false,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    fn cast(&self, ray: &Ray, ctx: &EditorContext<'_>) -> Option<cubit_geom::Vec3i> {
        let order = PickOrder::from_shift(ctx.modifiers.shift);
        self.caster.cast(ray, &*ctx.grid, ctx.camera.position, order)
    }

    /// Press transitions. A press on empty space clears the selection but stays
    /// unclaimed, so the camera can take the drag that follows.
    pub fn press(&mut self, ray: &Ray, ctx: &mut EditorContext<'_>) -> bool {
        let Some(hit) = self.cast(ray, ctx) else {
            self.active = false;
            ctx.selection.clear();
            return false;
        };
        let sel = &mut *ctx.selection;
        // Pressing the current primary keeps both endpoints.
        if sel.primary() != Some(hit) {
            if sel.secondary() == Some(hit) {
                let old = sel.primary();
                sel.set(Some(hit), old);
            } else {
                sel.set(Some(hit), Some(hit));
            }
        }
        self.active = true;
        true
    }

    /// Moves the primary to the cell under the pointer; a miss keeps the last hit.
    pub fn drag(&mut self, ray: &Ray, ctx: &mut EditorContext<'_>) {
        if !self.active {
            return;
        }
        if let Some(hit) = self.cast(ray, ctx) {
            ctx.selection.set_primary(Some(hit));
        }
    }

    /// Ends the gesture. Claims the release only if a press started one.
    pub fn release(&mut self) -> bool {
        std::mem::replace(&mut self.active, false)
    }
}

impl InputHandler for SelectionOpenHandler {
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
            InputEvent::PointerDrag { x, y, .. } => {
                if self.active {
                    if let Some(ray) = ctx.camera.screen_ray(x, y) {
                        self.drag(&ray, ctx);
                    }
                }
                false
            }
            InputEvent::PointerUp {
                button: PointerButton::Left,
                ..
            } => self.release(),
            _ => false,
        };
        Ok(claimed)
    }
}
