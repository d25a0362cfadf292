//! Data structures for `inkly-debug`

use crate::utils::geometry::Point;

/// Client-side drawing state of the game page, as `game.js` keeps it
///
/// Merges the persistent `gameState` object with the transient `isDrawingNow`
/// flag and the `lastX`/`lastY` pair that the mouse handlers share.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawingState {
    /// `gameState.isDrawing`, set once the player clicks "Começar"
    pub is_drawing_enabled: bool,
    /// `gameState.hasDrawn`
    pub has_drawn_anything: bool,
    /// `gameState.currentBrush`
    pub brush_kind: String,
    /// `gameState.currentColor`
    pub color_hex: String,
    /// `gameState.brushSize`
    pub brush_size_px: u32,
    /// `isDrawingNow`, true between mousedown and mouseup
    pub is_pointer_down: bool,
    /// `lastX`, `lastY`
    pub last: Point,
}

/// A hypothetical user action delivered to the canvas handlers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CanvasEvent {
    /// Click on the "Começar" button, handled by `startDrawing()`
    StartClicked,
    /// `mousedown`, handled by `startDrawingMouse()`
    PointerDown(Point),
    /// `mousemove`, handled by `drawMouse()`
    PointerMove(Point),
    /// `mouseup`, handled by `stopDrawing()`
    PointerUp,
}

/// A flag that was false when a handler checked it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardFailure {
    PointerUp,
    DrawingDisabled,
}

/// What a handler did with an event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Handled {
    Applied,
    Ignored(Vec<GuardFailure>),
}

/// Outcome of the narrated logic walk-through
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogicVerdict {
    Passed,
    Failed,
}
