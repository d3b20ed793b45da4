use crossbeam_channel::{Receiver, Sender, unbounded};
use cubit_blocks::BLOCK_SIZE;
use cubit_geom::{Aabb, Axis, Vec3, Vec3i};

/// Sent to subscribers after every effective change, carrying the new pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionChanged {
    pub primary: Option<Vec3i>,
    pub secondary: Option<Vec3i>,
}

/// Inclusive box of grid cells: `min ..= min + extent` on every axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionBox {
    pub min: Vec3i,
    pub extent: Vec3i,
}

impl SelectionBox {
    pub fn from_pair(primary: Vec3i, secondary: Vec3i) -> Self {
        Self {
            min: primary.min(secondary),
            extent: primary.abs_diff(secondary),
        }
    }

    #[inline]
    pub fn max(&self) -> Vec3i {
        self.min + self.extent
    }

    pub fn contains(&self, c: Vec3i) -> bool {
        let max = self.max();
        Axis::ALL
            .into_iter()
            .all(|a| c.get(a) >= self.min.get(a) && c.get(a) <= max.get(a))
    }

    pub fn cell_count(&self) -> usize {
        let e = self.extent;
        (e.x as usize + 1) * (e.y as usize + 1) * (e.z as usize + 1)
    }

    /// Every covered cell, x fastest then y then z.
    pub fn cells(&self) -> impl Iterator<Item = Vec3i> + use<> {
        let (min, max) = (self.min, self.max());
        (min.z..=max.z).flat_map(move |z| {
            (min.y..=max.y).flat_map(move |y| (min.x..=max.x).map(move |x| Vec3i::new(x, y, z)))
        })
    }

    /// World-space box from the outer faces of the corner cells.
    pub fn world_bounds(&self) -> Aabb {
        let one = Vec3i::new(1, 1, 1);
        Aabb::new(
            self.min.as_vec3() * BLOCK_SIZE,
            (self.max() + one).as_vec3() * BLOCK_SIZE,
        )
    }
}

/// Current primary/secondary pick. Owns only coordinates, never blocks.
#[derive(Debug, Default)]
pub struct Selection {
    primary: Option<Vec3i>,
    secondary: Option<Vec3i>,
    subscribers: Vec<Sender<SelectionChanged>>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn primary(&self) -> Option<Vec3i> {
        self.primary
    }

    #[inline]
    pub fn secondary(&self) -> Option<Vec3i> {
        self.secondary
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.primary.is_none()
    }

    pub fn subscribe(&mut self) -> Receiver<SelectionChanged> {
        let (tx, rx) = unbounded();
        self.subscribers.push(tx);
        rx
    }

    pub fn set_primary(&mut self, primary: Option<Vec3i>) {
        self.set(primary, self.secondary);
    }

    pub fn set_secondary(&mut self, secondary: Option<Vec3i>) {
        self.set(self.primary, secondary);
    }

    /// Replaces both endpoints; at most one notification is sent.
    pub fn set(&mut self, primary: Option<Vec3i>, secondary: Option<Vec3i>) {
        if self.primary == primary && self.secondary == secondary {
            return;
        }
        self.primary = primary;
        self.secondary = secondary;
        self.notify();
    }

    pub fn clear(&mut self) {
        self.set(None, None);
    }

    /// Selected region. A missing secondary selects the primary cell alone.
    pub fn bounds(&self) -> Option<SelectionBox> {
        let p = self.primary?;
        Some(SelectionBox::from_pair(p, self.secondary.unwrap_or(p)))
    }

    /// Twelve thin boxes along the edges of the selected region, for gizmo drawing.
    pub fn outline(&self, thickness: f32) -> Vec<Aabb> {
        let Some(b) = self.bounds() else {
            return Vec::new();
        };
        edge_boxes(&b.world_bounds(), thickness)
    }

    /// World-space cube of a single selected cell.
    pub fn marker_box(coord: Vec3i) -> Aabb {
        let min = coord.as_vec3() * BLOCK_SIZE;
        Aabb::new(min, min + Vec3::splat(BLOCK_SIZE))
    }

    fn notify(&mut self) {
        let msg = SelectionChanged {
            primary: self.primary,
            secondary: self.secondary,
        };
        log::debug!(
            target: "selection",
            "selection changed primary={:?} secondary={:?}",
            msg.primary,
            msg.secondary
        );
        self.subscribers.retain(|tx| tx.send(msg).is_ok());
    }
}

fn edge_boxes(b: &Aabb, thickness: f32) -> Vec<Aabb> {
    let h = thickness / 2.0;
    let mut out = Vec::with_capacity(12);
    for axis in Axis::ALL {
        let others: Vec<Axis> = Axis::ALL.into_iter().filter(|a| *a != axis).collect();
        for &u in &[b.min.get(others[0]), b.max.get(others[0])] {
            for &v in &[b.min.get(others[1]), b.max.get(others[1])] {
                let mut lo = Vec3::ZERO;
                let mut hi = Vec3::ZERO;
                lo.set(axis, b.min.get(axis));
                hi.set(axis, b.max.get(axis));
                lo.set(others[0], u - h);
                hi.set(others[0], u + h);
                lo.set(others[1], v - h);
                hi.set(others[1], v + h);
                out.push(Aabb::new(lo, hi));
            }
        }
    }
    out
}
