//! Implementations for structs within `models.rs`

use crate::models::{CanvasEvent, DrawingState, GuardFailure, Handled};
use crate::utils::geometry::Point;
use log::debug;
use std::fmt;

impl DrawingState {
    /// The state `game.js` starts with right after `DOMContentLoaded`
    pub fn new() -> Self {
        Self {
            is_drawing_enabled: false,
            has_drawn_anything: false,
            brush_kind: "normal".to_owned(),
            color_hex: "#000000".to_owned(),
            brush_size_px: 8,
            is_pointer_down: false,
            last: Point::new(0, 0),
        }
    }

    /// Flags that would make `startDrawingMouse()` return early
    pub fn pointer_down_guard(&self) -> Vec<GuardFailure> {
        if self.is_drawing_enabled {
            Vec::new()
        } else {
            vec![GuardFailure::DrawingDisabled]
        }
    }

    /// Flags that would make `drawMouse()` return early, pointer flag first
    pub fn pointer_move_guard(&self) -> Vec<GuardFailure> {
        let mut failures = Vec::new();
        if !self.is_pointer_down {
            failures.push(GuardFailure::PointerUp);
        }
        if !self.is_drawing_enabled {
            failures.push(GuardFailure::DrawingDisabled);
        }
        failures
    }

    /// Applies one event the way the browser handlers would
    pub fn handle(&mut self, event: &CanvasEvent) -> Handled {
        let handled = match *event {
            CanvasEvent::StartClicked => {
                self.is_drawing_enabled = true;
                Handled::Applied
            }
            CanvasEvent::PointerDown(at) => {
                let failures = self.pointer_down_guard();
                if failures.is_empty() {
                    self.is_pointer_down = true;
                    self.has_drawn_anything = true;
                    self.last = at;
                    Handled::Applied
                } else {
                    Handled::Ignored(failures)
                }
            }
            CanvasEvent::PointerMove(to) => {
                let failures = self.pointer_move_guard();
                if failures.is_empty() {
                    self.last = to;
                    Handled::Applied
                } else {
                    Handled::Ignored(failures)
                }
            }
            CanvasEvent::PointerUp => {
                self.is_pointer_down = false;
                Handled::Applied
            }
        };

        debug!("{event:?} -> {handled:?}");
        handled
    }
}

impl Default for DrawingState {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders the flag exactly as the browser console would show it
impl fmt::Display for GuardFailure {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GuardFailure::PointerUp => write!(f, "isDrawingNow = False"),
            GuardFailure::DrawingDisabled => write!(f, "gameState.isDrawing = False"),
        }
    }
}

impl Handled {
    pub fn is_applied(&self) -> bool {
        matches!(self, Handled::Applied)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_disabled_with_default_brush() {
        let state = DrawingState::new();
        assert!(!state.is_drawing_enabled);
        assert!(!state.has_drawn_anything);
        assert!(!state.is_pointer_down);
        assert_eq!(state.brush_kind, "normal");
        assert_eq!(state.color_hex, "#000000");
        assert_eq!(state.brush_size_px, 8);
        assert_eq!(state.last, Point::new(0, 0));
    }

    #[test]
    fn full_stroke_after_start() {
        let mut state = DrawingState::new();
        assert!(state.handle(&CanvasEvent::StartClicked).is_applied());
        assert!(state
            .handle(&CanvasEvent::PointerDown(Point::new(100, 100)))
            .is_applied());
        assert!(state.is_pointer_down);
        assert!(state.has_drawn_anything);
        assert_eq!(state.last, Point::new(100, 100));

        assert!(state
            .handle(&CanvasEvent::PointerMove(Point::new(150, 150)))
            .is_applied());
        assert_eq!(state.last, Point::new(150, 150));

        assert!(state.handle(&CanvasEvent::PointerUp).is_applied());
        assert!(!state.is_pointer_down);
        assert!(state.is_drawing_enabled);
    }

    #[test]
    fn pointer_down_ignored_until_start() {
        let mut state = DrawingState::new();
        let handled = state.handle(&CanvasEvent::PointerDown(Point::new(100, 100)));
        assert_eq!(handled, Handled::Ignored(vec![GuardFailure::DrawingDisabled]));
        assert!(!state.is_pointer_down);
        assert!(!state.has_drawn_anything);
        assert_eq!(state.last, Point::new(0, 0));
    }

    #[test]
    fn pointer_move_reports_every_false_flag() {
        let mut state = DrawingState::new();
        let handled = state.handle(&CanvasEvent::PointerMove(Point::new(150, 150)));
        assert_eq!(
            handled,
            Handled::Ignored(vec![GuardFailure::PointerUp, GuardFailure::DrawingDisabled])
        );
        assert_eq!(state.last, Point::new(0, 0));

        state.handle(&CanvasEvent::StartClicked);
        let handled = state.handle(&CanvasEvent::PointerMove(Point::new(150, 150)));
        assert_eq!(handled, Handled::Ignored(vec![GuardFailure::PointerUp]));
    }

    #[test]
    fn guard_failures_render_as_console_flags() {
        assert_eq!(GuardFailure::PointerUp.to_string(), "isDrawingNow = False");
        assert_eq!(
            GuardFailure::DrawingDisabled.to_string(),
            "gameState.isDrawing = False"
        );
    }

    #[test]
    fn pointer_up_always_releases() {
        let mut state = DrawingState::new();
        assert!(state.handle(&CanvasEvent::PointerUp).is_applied());
        assert!(!state.is_pointer_down);
    }
}
