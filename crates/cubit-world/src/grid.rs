use std::fmt;

use cubit_blocks::{BlockProperties, Orientation, ShapeType, Side, Sides};
use cubit_geom::Vec3i;

use crate::block::Block;
use crate::error::{BoundsError, GridError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridDims {
    pub width: usize,
    pub height: usize,
    pub depth: usize,
}

impl GridDims {
    #[inline]
    pub const fn new(width: usize, height: usize, depth: usize) -> Self {
        Self {
            width,
            height,
            depth,
        }
    }

    #[inline]
    pub fn volume(&self) -> usize {
        self.width * self.height * self.depth
    }

    #[inline]
    pub fn contains(&self, c: Vec3i) -> bool {
        c.x >= 0
            && c.y >= 0
            && c.z >= 0
            && (c.x as usize) < self.width
            && (c.y as usize) < self.height
            && (c.z as usize) < self.depth
    }

    /// Nearest in-bounds coordinate. Callers that want clamping (drag resize) use this
    /// before touching the grid; the grid itself never clamps.
    pub fn clamp(&self, c: Vec3i) -> Vec3i {
        let hi = |n: usize| (n as i32 - 1).max(0);
        Vec3i::new(
            c.x.clamp(0, hi(self.width)),
            c.y.clamp(0, hi(self.height)),
            c.z.clamp(0, hi(self.depth)),
        )
    }

    /// Inverse of the slot index, `None` past the end.
    pub fn coord_of(&self, index: usize) -> Option<Vec3i> {
        if index >= self.volume() {
            return None;
        }
        let layer = self.width * self.height;
        let z = index / layer;
        let rem = index % layer;
        Some(Vec3i::new(
            (rem % self.width) as i32,
            (rem / self.width) as i32,
            z as i32,
        ))
    }
}

impl fmt::Display for GridDims {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}x{}", self.width, self.height, self.depth)
    }
}

/// Fixed-size dense block storage, slot `z * w * h + y * w + x`.
#[derive(Debug)]
pub struct Grid {
    dims: GridDims,
    slots: Vec<Option<Block>>,
}

impl Grid {
    pub fn new(width: usize, height: usize, depth: usize) -> Self {
        let dims = GridDims::new(width, height, depth);
        let mut slots = Vec::with_capacity(dims.volume());
        slots.resize_with(dims.volume(), || None);
        Self { dims, slots }
    }

    /// The editor's start scene: a cube floor on `y = 0` plus three ramps on `y = 1`.
    /// Seed positions outside the requested size are skipped.
    pub fn default_world(width: usize, height: usize, depth: usize) -> Result<Self, GridError> {
        let mut grid = Grid::new(width, height, depth);
        let floor = BlockProperties::new(
            ShapeType::Cube,
            Orientation::North,
            Sides::all(),
            0.0,
            1.0,
        );
        for z in 0..depth as i32 {
            for x in 0..width as i32 {
                let c = Vec3i::new(x, 0, z);
                if grid.is_in_bounds(c) {
                    grid.place(c, floor)?;
                }
            }
        }
        let ramp = |o: Orientation, lo: f32, hi: f32| {
            BlockProperties::new(
                ShapeType::SlopeHalf,
                o,
                Sides::all().with_side(Side::Left, false),
                lo,
                hi,
            )
        };
        let ramps = [
            (Vec3i::new(0, 1, 0), ramp(Orientation::East, 0.0, 0.5)),
            (Vec3i::new(1, 1, 0), ramp(Orientation::East, 0.5, 1.0)),
            (Vec3i::new(2, 1, 0), ramp(Orientation::North, 0.5, 1.0)),
        ];
        for (c, props) in ramps {
            if grid.is_in_bounds(c) {
                grid.place(c, props)?;
            }
        }
        log::debug!(
            target: "edit",
            "default world {} seeded with {} blocks",
            grid.dims,
            grid.occupied_count()
        );
        Ok(grid)
    }

    #[inline]
    pub fn dims(&self) -> GridDims {
        self.dims
    }

    #[inline]
    pub fn is_in_bounds(&self, c: Vec3i) -> bool {
        self.dims.contains(c)
    }

    /// Slot index of `c`, or a [`BoundsError`] naming the offending coordinate.
    #[inline]
    pub fn index(&self, c: Vec3i) -> Result<usize, BoundsError> {
        if !self.is_in_bounds(c) {
            return Err(BoundsError {
                coord: c,
                dims: self.dims,
            });
        }
        let (w, h) = (self.dims.width, self.dims.height);
        Ok(c.z as usize * w * h + c.y as usize * w + c.x as usize)
    }

    pub fn get(&self, c: Vec3i) -> Result<Option<&Block>, BoundsError> {
        let i = self.index(c)?;
        Ok(self.slots[i].as_ref())
    }

    pub fn get_mut(&mut self, c: Vec3i) -> Result<Option<&mut Block>, BoundsError> {
        let i = self.index(c)?;
        Ok(self.slots[i].as_mut())
    }

    /// Stores `block` (or empties the slot) and hands back the previous occupant.
    pub fn set(&mut self, c: Vec3i, block: Option<Block>) -> Result<Option<Block>, GridError> {
        let i = self.index(c)?;
        if let Some(b) = &block {
            if b.coord() != c {
                return Err(GridError::CoordinateMismatch {
                    slot: c,
                    block: b.coord(),
                });
            }
        }
        Ok(std::mem::replace(&mut self.slots[i], block))
    }

    /// Builds a fresh block from `props` at `c`, replacing any previous one.
    pub fn place(&mut self, c: Vec3i, props: BlockProperties) -> Result<&Block, GridError> {
        let i = self.index(c)?;
        let block =
            Block::new(c, props).map_err(|source| GridError::Mesh { coord: c, source })?;
        Ok(self.slots[i].insert(block))
    }

    pub fn clear(&mut self, c: Vec3i) -> Result<Option<Block>, BoundsError> {
        let i = self.index(c)?;
        Ok(self.slots[i].take())
    }

    /// Applies `f` to the properties of the block at `c`, rebuilding its mesh.
    /// Returns `Ok(false)` when the cell is empty.
    pub fn update<F>(&mut self, c: Vec3i, f: F) -> Result<bool, GridError>
    where
        F: FnOnce(BlockProperties) -> BlockProperties,
    {
        let Some(block) = self.get_mut(c)? else {
            return Ok(false);
        };
        let props = f(block.properties());
        block
            .set_properties(props)
            .map_err(|source| GridError::Mesh { coord: c, source })?;
        Ok(true)
    }

    /// Occupied blocks in slot order, each visited once.
    pub fn iter(&self) -> impl Iterator<Item = &Block> {
        self.slots.iter().flatten()
    }

    /// Coordinates of the empty cells, in slot order.
    pub fn vacant(&self) -> impl Iterator<Item = Vec3i> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.is_none())
            .filter_map(|(i, _)| self.dims.coord_of(i))
    }

    pub fn occupied_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    /// Empties every slot, dropping blocks and their meshes.
    pub fn clear_all(&mut self) {
        for slot in &mut self.slots {
            *slot = None;
        }
    }
}
