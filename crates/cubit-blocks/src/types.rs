use bitflags::bitflags;
use serde::{Deserialize, Serialize};

/// Edge length of one block in world units. Grid cell `c` spans `[c * S, (c + 1) * S)`.
pub const BLOCK_SIZE: f32 = 10.0;

/// A face of the unit block cube, in the block's canonical (north facing) frame.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Right,
    Front,
    Back,
    Top,
    Bottom,
}

impl Side {
    pub const ALL: [Side; 6] = [
        Side::Left,
        Side::Right,
        Side::Front,
        Side::Back,
        Side::Top,
        Side::Bottom,
    ];

    /// Horizontal sides in yaw order: one clockwise quarter turn moves each entry to the next.
    pub const HORIZONTAL: [Side; 4] = [Side::Back, Side::Right, Side::Front, Side::Left];

    #[inline]
    pub fn flag(self) -> Sides {
        match self {
            Side::Left => Sides::LEFT,
            Side::Right => Sides::RIGHT,
            Side::Front => Sides::FRONT,
            Side::Back => Sides::BACK,
            Side::Top => Sides::TOP,
            Side::Bottom => Sides::BOTTOM,
        }
    }

    /// Position in [`Side::HORIZONTAL`], `None` for top and bottom.
    #[inline]
    pub fn horizontal_index(self) -> Option<usize> {
        match self {
            Side::Back => Some(0),
            Side::Right => Some(1),
            Side::Front => Some(2),
            Side::Left => Some(3),
            Side::Top | Side::Bottom => None,
        }
    }

    #[inline]
    pub fn is_horizontal(self) -> bool {
        self.horizontal_index().is_some()
    }
}

bitflags! {
    /// Set of sides a block should render.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct Sides: u8 {
        const LEFT = 1 << 0;
        const RIGHT = 1 << 1;
        const FRONT = 1 << 2;
        const BACK = 1 << 3;
        const TOP = 1 << 4;
        const BOTTOM = 1 << 5;
        const HORIZONTAL = Self::LEFT.bits() | Self::RIGHT.bits() | Self::FRONT.bits() | Self::BACK.bits();
    }
}

impl Default for Sides {
    fn default() -> Self {
        Sides::all()
    }
}

impl Sides {
    #[inline]
    pub fn has(self, side: Side) -> bool {
        self.contains(side.flag())
    }

    pub fn with_side(self, side: Side, visible: bool) -> Self {
        if visible {
            self | side.flag()
        } else {
            self & !side.flag()
        }
    }

    pub fn toggled(self, side: Side) -> Self {
        self ^ side.flag()
    }

    /// Member sides in [`Side::ALL`] order.
    pub fn sides(self) -> impl Iterator<Item = Side> {
        Side::ALL.into_iter().filter(move |s| self.has(*s))
    }
}

impl FromIterator<Side> for Sides {
    fn from_iter<I: IntoIterator<Item = Side>>(iter: I) -> Self {
        iter.into_iter().fold(Sides::empty(), |acc, s| acc | s.flag())
    }
}

/// Yaw of a block in quarter turns.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[default]
    North,
    East,
    South,
    West,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Turn {
    Clockwise,
    CounterClockwise,
}

impl Orientation {
    pub const ALL: [Orientation; 4] = [
        Orientation::North,
        Orientation::East,
        Orientation::South,
        Orientation::West,
    ];

    #[inline]
    pub fn rotation_step(self) -> u8 {
        match self {
            Orientation::North => 0,
            Orientation::East => 1,
            Orientation::South => 2,
            Orientation::West => 3,
        }
    }

    /// Inverse of [`Orientation::rotation_step`]; steps are taken modulo 4.
    #[inline]
    pub fn from_rotation(step: u8) -> Orientation {
        Self::ALL[(step % 4) as usize]
    }

    #[inline]
    pub fn turn_clockwise(self) -> Orientation {
        Self::from_rotation(self.rotation_step() + 1)
    }

    #[inline]
    pub fn turn_counter_clockwise(self) -> Orientation {
        Self::from_rotation(self.rotation_step() + 3)
    }

    pub fn turned(self, turn: Turn) -> Orientation {
        match turn {
            Turn::Clockwise => self.turn_clockwise(),
            Turn::CounterClockwise => self.turn_counter_clockwise(),
        }
    }

    #[inline]
    pub fn opposite(self) -> Orientation {
        Self::from_rotation(self.rotation_step() + 2)
    }

    /// Orientation whose step undoes this one (`(4 - step) mod 4`).
    #[inline]
    pub fn inverse(self) -> Orientation {
        Self::from_rotation(4 - self.rotation_step())
    }
}

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeType {
    #[default]
    Cube,
    PillarCenter,
    PillarCorner,
    SlopeHalf,
    /// Reserved; no geometry algorithm exists for it.
    SlopeQuarter,
}

impl ShapeType {
    pub const ALL: [ShapeType; 5] = [
        ShapeType::Cube,
        ShapeType::PillarCenter,
        ShapeType::PillarCorner,
        ShapeType::SlopeHalf,
        ShapeType::SlopeQuarter,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ShapeType::Cube => "cube",
            ShapeType::PillarCenter => "pillar_center",
            ShapeType::PillarCorner => "pillar_corner",
            ShapeType::SlopeHalf => "slope_half",
            ShapeType::SlopeQuarter => "slope_quarter",
        }
    }
}

/// Visual configuration of one block. Value type; edits go through the `with_*` copies.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BlockProperties {
    shape: ShapeType,
    orientation: Orientation,
    sides: Sides,
    height_low: f32,
    height_high: f32,
}

impl Default for BlockProperties {
    fn default() -> Self {
        Self::cube()
    }
}

impl BlockProperties {
    pub fn new(
        shape: ShapeType,
        orientation: Orientation,
        sides: Sides,
        height_low: f32,
        height_high: f32,
    ) -> Self {
        Self {
            shape,
            orientation,
            sides,
            height_low: clamp_unit(height_low),
            height_high: clamp_unit(height_high),
        }
    }

    /// Full cube, facing north, every side visible.
    pub fn cube() -> Self {
        Self::new(ShapeType::Cube, Orientation::North, Sides::all(), 0.0, 1.0)
    }

    #[inline]
    pub fn shape(&self) -> ShapeType {
        self.shape
    }
    #[inline]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }
    #[inline]
    pub fn sides(&self) -> Sides {
        self.sides
    }
    /// Front edge height as a fraction of the block edge.
    #[inline]
    pub fn height_low(&self) -> f32 {
        self.height_low
    }
    /// Back edge height as a fraction of the block edge.
    #[inline]
    pub fn height_high(&self) -> f32 {
        self.height_high
    }

    pub fn with_shape(self, shape: ShapeType) -> Self {
        Self { shape, ..self }
    }

    pub fn with_orientation(self, orientation: Orientation) -> Self {
        Self {
            orientation,
            ..self
        }
    }

    pub fn with_sides(self, sides: Sides) -> Self {
        Self { sides, ..self }
    }

    pub fn with_heights(self, height_low: f32, height_high: f32) -> Self {
        Self::new(
            self.shape,
            self.orientation,
            self.sides,
            height_low,
            height_high,
        )
    }

    pub fn turned(self, turn: Turn) -> Self {
        self.with_orientation(self.orientation.turned(turn))
    }
}

#[inline]
fn clamp_unit(v: f32) -> f32 {
    if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_rotation_is_total() {
        for step in 0u8..8 {
            assert_eq!(Orientation::from_rotation(step).rotation_step(), step % 4);
        }
    }

    #[test]
    fn turns_cycle() {
        assert_eq!(Orientation::North.turn_clockwise(), Orientation::East);
        assert_eq!(Orientation::West.turn_clockwise(), Orientation::North);
        assert_eq!(Orientation::North.turn_counter_clockwise(), Orientation::West);
        assert_eq!(Orientation::East.opposite(), Orientation::West);
        assert_eq!(Orientation::East.inverse(), Orientation::West);
        assert_eq!(Orientation::South.inverse(), Orientation::South);
    }

    #[test]
    fn with_copies_leave_original_untouched() {
        let a = BlockProperties::cube();
        let b = a.with_orientation(Orientation::South).with_sides(Sides::TOP);
        assert_eq!(a.orientation(), Orientation::North);
        assert_eq!(a.sides(), Sides::all());
        assert_eq!(b.orientation(), Orientation::South);
        assert_eq!(b.sides(), Sides::TOP);
    }

    #[test]
    fn heights_are_clamped() {
        let p = BlockProperties::cube().with_heights(-0.5, 3.0);
        assert_eq!(p.height_low(), 0.0);
        assert_eq!(p.height_high(), 1.0);
    }

    #[test]
    fn side_set_helpers() {
        let s = Sides::all().with_side(Side::Left, false);
        assert!(!s.has(Side::Left));
        assert!(s.has(Side::Top));
        assert_eq!(s.toggled(Side::Left), Sides::all());
        let collected: Sides = [Side::Top, Side::Front].into_iter().collect();
        assert_eq!(collected, Sides::TOP | Sides::FRONT);
        assert_eq!(collected.sides().collect::<Vec<_>>(), vec![Side::Front, Side::Top]);
        assert_eq!(Sides::HORIZONTAL.sides().count(), 4);
    }
}
