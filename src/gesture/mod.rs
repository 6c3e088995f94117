//! Turns a down/move/up pointer stream into one committed paint object per gesture.
use crate::{
    paint::{PaintMode, PaintObject, RectBounds, path::Path, store::DrawingStore},
    session::SessionState,
    utils::vector::Vec2,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum GesturePhase {
    Idle,
    Active,
}

/// What a pointer event did to the tracker.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrackerOutcome {
    /// The sample was dropped: jitter below tolerance, or no gesture in progress.
    Ignored,
    /// A gesture began. Nothing visible changed yet.
    Started,
    /// The in-progress object grew; the frame needs redrawing.
    Updated,
    /// The gesture ended and its object was appended to the store.
    Committed,
}

impl TrackerOutcome {
    pub fn needs_redraw(self) -> bool {
        matches!(self, TrackerOutcome::Updated | TrackerOutcome::Committed)
    }
}

/// Borrowed view of the not-yet-committed object for the current mode.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InProgress<'a> {
    Path(&'a Path),
    Rectangle(&'a RectBounds),
}

/// Builds the in-progress path or rectangle between pointer down and up.
///
/// Both builders live side by side and the session mode picks which one an event touches.
/// Switching mode mid-gesture therefore leaves the other builder as it was.
#[derive(Debug)]
pub struct GestureTracker {
    phase: GesturePhase,
    path: Path,
    rect: RectBounds,
    anchor: Vec2,
    tolerance: f32,
}

impl GestureTracker {
    /// `tolerance` is the touch slop in render units.
    pub fn new(tolerance: f32) -> Self {
        Self {
            phase: GesturePhase::Idle,
            path: Path::new(),
            rect: RectBounds::default(),
            anchor: Vec2::default(),
            tolerance,
        }
    }

    pub fn is_active(&self) -> bool {
        self.phase == GesturePhase::Active
    }

    pub fn tolerance(&self) -> f32 {
        self.tolerance
    }

    /// Last accepted sample (line mode) or the gesture start (rectangle mode).
    pub fn anchor(&self) -> Vec2 {
        self.anchor
    }

    pub fn in_progress(&self, mode: PaintMode) -> InProgress<'_> {
        match mode {
            PaintMode::Line => InProgress::Path(&self.path),
            PaintMode::Rectangle => InProgress::Rectangle(&self.rect),
        }
    }

    pub fn pointer_down(&mut self, pos: Vec2, session: &SessionState) -> TrackerOutcome {
        if self.is_active() {
            log::warn!("pointer down while a gesture is active, continuing the same gesture");
        }
        match session.mode {
            PaintMode::Line => self.path.move_to(pos),
            PaintMode::Rectangle => {
                self.rect = RectBounds::new(pos.x, pos.y, pos.x, pos.y);
            }
        }
        self.anchor = pos;
        self.phase = GesturePhase::Active;
        TrackerOutcome::Started
    }

    pub fn pointer_move(&mut self, pos: Vec2, session: &SessionState) -> TrackerOutcome {
        if !self.is_active() {
            return TrackerOutcome::Ignored;
        }
        let delta = pos.abs_delta(self.anchor);
        if delta.x < self.tolerance && delta.y < self.tolerance {
            log::trace!("sample {pos:?} within touch slop of {:?}", self.anchor);
            return TrackerOutcome::Ignored;
        }

        match session.mode {
            PaintMode::Line => {
                // Ending on the midpoint keeps the curve trailing the pointer, which smooths it.
                self.path.quad_to(self.anchor, self.anchor.midpoint(pos));
                self.anchor = pos;
            }
            PaintMode::Rectangle => {
                self.rect.right = pos.x;
                self.rect.bottom = pos.y;
            }
        }
        TrackerOutcome::Updated
    }

    /// Finish the gesture with the session's color and width as they are right now.
    pub fn pointer_up(
        &mut self,
        session: &SessionState,
        store: &mut DrawingStore,
    ) -> TrackerOutcome {
        if !self.is_active() {
            log::warn!("pointer up without a matching down, ignoring");
            return TrackerOutcome::Ignored;
        }

        let object = match session.mode {
            PaintMode::Line => PaintObject::Stroke {
                color: session.color,
                stroke_width: session.stroke_width,
                path: std::mem::take(&mut self.path),
            },
            PaintMode::Rectangle => PaintObject::Rectangle {
                color: session.color,
                stroke_width: session.stroke_width,
                bounds: self.rect,
            },
        };
        log::debug!(
            "committed {} #{} ({:#010x}, width {})",
            session.mode.label(),
            store.len(),
            session.color.argb(),
            session.stroke_width
        );
        store.append(object);

        self.path = Path::new();
        self.rect = RectBounds::default();
        self.phase = GesturePhase::Idle;
        TrackerOutcome::Committed
    }
}
