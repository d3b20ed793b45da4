use cubit_blocks::{BlockProperties, Side, Turn};
use cubit_world::{Block, Grid, GridError};

use crate::EditorContext;
use crate::input::{InputEvent, InputHandler, Key};
use crate::selection::Selection;

/// Edit operations on the selected cells, plus their keyboard bindings.
#[derive(Debug, Clone, Default)]
pub struct WorldModifier {
    clipboard: Option<BlockProperties>,
}

impl WorldModifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clipboard(&self) -> Option<BlockProperties> {
        self.clipboard
    }

    /// Block under the primary coordinate.
    pub fn selected_block<'g>(grid: &'g Grid, selection: &Selection) -> Option<&'g Block> {
        let p = selection.primary()?;
        grid.get(p).ok().flatten()
    }

    /// Turns the block under the primary. Returns whether a block was turned.
    pub fn rotate_selected(
        &self,
        grid: &mut Grid,
        selection: &Selection,
        turn: Turn,
    ) -> Result<bool, GridError> {
        let Some(p) = selection.primary() else {
            log::debug!(target: "edit", "rotate ignored: nothing selected");
            return Ok(false);
        };
        let turned = grid.update(p, |props| props.turned(turn))?;
        if turned {
            log::info!(target: "edit", "rotated block at {} {:?}", p, turn);
        }
        Ok(turned)
    }

    /// Clears every cell of the selection box. Returns how many blocks were removed.
    pub fn delete_selected(
        &self,
        grid: &mut Grid,
        selection: &Selection,
    ) -> Result<usize, GridError> {
        let Some(bounds) = selection.bounds() else {
            log::debug!(target: "edit", "delete ignored: nothing selected");
            return Ok(0);
        };
        let mut removed = 0;
        for c in bounds.cells() {
            if grid.clear(c)?.is_some() {
                removed += 1;
            }
        }
        log::info!(target: "edit", "deleted {} blocks in {:?}", removed, bounds);
        Ok(removed)
    }

    /// Remembers the properties of the block under the primary.
    pub fn copy_selected(&mut self, grid: &Grid, selection: &Selection) -> bool {
        match Self::selected_block(grid, selection) {
            Some(block) => {
                self.clipboard = Some(block.properties());
                log::info!(target: "edit", "copied block at {}", block.coord());
                true
            }
            None => {
                log::debug!(target: "edit", "copy ignored: no block under primary");
                false
            }
        }
    }

    /// Stamps the copied properties into every cell of the selection box.
    pub fn paste_selected(
        &self,
        grid: &mut Grid,
        selection: &Selection,
    ) -> Result<usize, GridError> {
        let Some(props) = self.clipboard else {
            log::debug!(target: "edit", "paste ignored: clipboard empty");
            return Ok(0);
        };
        self.paint_selected(grid, selection, props)
    }

    /// Places fresh blocks with `props` in every cell of the selection box.
    pub fn paint_selected(
        &self,
        grid: &mut Grid,
        selection: &Selection,
        props: BlockProperties,
    ) -> Result<usize, GridError> {
        let Some(bounds) = selection.bounds() else {
            log::debug!(target: "edit", "paint ignored: nothing selected");
            return Ok(0);
        };
        let mut placed = 0;
        for c in bounds.cells() {
            grid.place(c, props)?;
            placed += 1;
        }
        log::info!(target: "edit", "placed {} {:?} blocks", placed, props.shape());
        Ok(placed)
    }

    /// Flips the visibility of one side of the block under the primary.
    pub fn toggle_side_selected(
        &self,
        grid: &mut Grid,
        selection: &Selection,
        side: Side,
    ) -> Result<bool, GridError> {
        let Some(p) = selection.primary() else {
            return Ok(false);
        };
        let toggled = grid.update(p, |props| props.with_sides(props.sides().toggled(side)))?;
        if toggled {
            log::info!(target: "edit", "toggled {:?} side of block at {}", side, p);
        }
        Ok(toggled)
    }
}

impl InputHandler for WorldModifier {
    fn handle(
        &mut self,
        event: &InputEvent,
        ctx: &mut EditorContext<'_>,
    ) -> Result<bool, GridError> {
        let InputEvent::KeyDown(key) = *event else {
            return Ok(false);
        };
        let claimed = match key {
            Key::R => {
                let turn = if ctx.modifiers.shift {
                    Turn::CounterClockwise
                } else {
                    Turn::Clockwise
                };
                self.rotate_selected(ctx.grid, ctx.selection, turn)?;
                true
            }
            Key::Delete => {
                self.delete_selected(ctx.grid, ctx.selection)?;
                true
            }
            Key::C => {
                if ctx.modifiers.ctrl {
                    self.copy_selected(ctx.grid, ctx.selection);
                }
                true
            }
            Key::V => {
                if ctx.modifiers.ctrl {
                    self.paste_selected(ctx.grid, ctx.selection)?;
                }
                true
            }
            _ => false,
        };
        Ok(claimed)
    }
}
