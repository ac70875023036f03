use glam::Vec2;
use splat_cmn::Rect;

/// How the rectangle grows while the pointer moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragMode {
    /// `start` stays at the press point, `end` follows the pointer.
    FromCorner,
    /// The rectangle expands outward from the viewport center:
    /// `start = 2 * center - pointer`, `end = pointer`.
    CenterSymmetric,
}

/// Min-corner + size form of the in-progress rectangle, for overlay drawing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayRect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl From<Rect> for OverlayRect {
    fn from(rect: Rect) -> Self {
        Self {
            origin: rect.min(),
            size: rect.size(),
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Drag {
    pointer: u64,
    start: Vec2,
    end: Vec2,
}

/// Pointer-gesture state machine producing a screen-space rectangle.
///
/// At most one drag is live at a time, keyed by the pointer id that
/// started it; presses from other pointers are ignored until it ends.
#[derive(Debug)]
pub struct DragController {
    mode: DragMode,
    viewport: Vec2,
    active: Option<Drag>,
}

impl DragController {
    pub fn new(mode: DragMode, viewport: Vec2) -> Self {
        Self {
            mode,
            viewport,
            active: None,
        }
    }

    pub fn set_viewport(&mut self, viewport: Vec2) {
        self.viewport = viewport;
    }

    pub fn is_dragging(&self) -> bool {
        self.active.is_some()
    }

    /// Starts a drag. Returns the initial overlay rectangle, or `None`
    /// when the press is non-primary or another drag is already live.
    pub fn press(&mut self, pointer: u64, primary: bool, pos: Vec2) -> Option<OverlayRect> {
        if !primary || self.active.is_some() {
            return None;
        }
        let (start, end) = self.place(pos);
        self.active = Some(Drag {
            pointer,
            start,
            end,
        });
        Some(OverlayRect::from(Rect::new(start, end)))
    }

    /// Updates the live drag. Moves from other pointers are ignored.
    pub fn moved(&mut self, pointer: u64, pos: Vec2) -> Option<OverlayRect> {
        let (start, end) = self.place(pos);
        let drag = self.active.as_mut().filter(|d| d.pointer == pointer)?;
        drag.start = start;
        drag.end = end;
        Some(OverlayRect::from(Rect::new(start, end)))
    }

    /// Ends the drag and emits the finished rectangle in min/max corner
    /// order. Releases from other pointers are ignored.
    pub fn release(&mut self, pointer: u64) -> Option<Rect> {
        if self.active.as_ref()?.pointer != pointer {
            return None;
        }
        let drag = self.active.take()?;
        Some(Rect::new(drag.start, drag.end).normalized())
    }

    /// Drops any live drag without emitting a rectangle. Returns whether
    /// a drag was discarded.
    pub fn cancel(&mut self) -> bool {
        self.active.take().is_some()
    }

    fn place(&self, pos: Vec2) -> (Vec2, Vec2) {
        match self.mode {
            DragMode::FromCorner => {
                let start = self.active.map(|d| d.start).unwrap_or(pos);
                (start, pos)
            }
            DragMode::CenterSymmetric => (self.viewport - pos, pos),
        }
    }
}
