//! Editing layer: selection, picking, resize handles, edit operations and input routing.
#![forbid(unsafe_code)]

pub mod camera;
pub mod config;
pub mod handles;
pub mod input;
pub mod modifier;
pub mod pick;
pub mod raycast;
pub mod selection;

pub use camera::{CameraController, EditorCamera};
pub use config::{CameraConfig, EditorConfig, WorldConfig};
pub use handles::{HandleHit, HandleSide, SelectionModifyHandler};
pub use input::{InputEvent, InputHandler, Key, Modifiers, PointerButton};
pub use modifier::WorldModifier;
pub use pick::SelectionOpenHandler;
pub use raycast::{BlockCaster, PickOrder};
pub use selection::{Selection, SelectionBox, SelectionChanged};

use cubit_world::{Grid, GridError};

/// Mutable state a handler may touch while processing one event.
pub struct EditorContext<'a> {
    pub grid: &'a mut Grid,
    pub selection: &'a mut Selection,
    pub camera: &'a mut EditorCamera,
    pub modifiers: Modifiers,
}

/// World, selection and camera plus the prioritized input chain:
/// UI handlers, world modifier, resize handles, open/pick, camera controller.
pub struct Editor {
    pub grid: Grid,
    pub selection: Selection,
    pub camera: EditorCamera,
    pub modifier: WorldModifier,
    pub resize: SelectionModifyHandler,
    pub open: SelectionOpenHandler,
    pub camera_controller: CameraController,
    ui: Vec<Box<dyn InputHandler>>,
    modifiers: Modifiers,
}

impl Editor {
    /// Editor over the configured default world.
    pub fn new(config: &EditorConfig) -> Result<Self, GridError> {
        let w = &config.world;
        let grid = Grid::default_world(w.width, w.height, w.depth)?;
        Ok(Self::with_grid(config, grid))
    }

    pub fn with_grid(config: &EditorConfig, grid: Grid) -> Self {
        log::info!(
            target: "edit",
            "editor ready: {} grid, {} blocks",
            grid.dims(),
            grid.occupied_count()
        );
        Self {
            grid,
            selection: Selection::new(),
            camera: EditorCamera::from_config(&config.camera),
            modifier: WorldModifier::new(),
            resize: SelectionModifyHandler::new(config.handle_thickness, config.pick_epsilon),
            open: SelectionOpenHandler::new(config.pick_epsilon),
            camera_controller: CameraController::from_config(&config.camera),
            ui: Vec::new(),
            modifiers: Modifiers::default(),
        }
    }

    /// Adds a handler ahead of every built-in one (UI panels).
    pub fn push_ui_handler(&mut self, handler: Box<dyn InputHandler>) {
        self.ui.push(handler);
    }

    pub fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    /// Routes `event` down the chain until a handler claims it.
    pub fn handle(&mut self, event: &InputEvent) -> Result<bool, GridError> {
        self.modifiers.apply(event);
        let mut ctx = EditorContext {
            grid: &mut self.grid,
            selection: &mut self.selection,
            camera: &mut self.camera,
            modifiers: self.modifiers,
        };
        for handler in self.ui.iter_mut() {
            if handler.handle(event, &mut ctx)? {
                return Ok(true);
            }
        }
        let builtin: [&mut dyn InputHandler; 4] = [
            &mut self.modifier,
            &mut self.resize,
            &mut self.open,
            &mut self.camera_controller,
        ];
        for handler in builtin {
            if handler.handle(event, &mut ctx)? {
                log::trace!(target: "edit", "{:?} claimed", event);
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Per-frame update for continuous controls.
    pub fn update(&mut self, dt: f32) {
        self.camera_controller.update(&mut self.camera, dt);
    }
}
