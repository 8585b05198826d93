//! Resize controller.
//!
//! Turns a pointer drag on a column's resize handle into a clamped width in
//! the [`WidthMap`]. Width recomputation runs at most once per display
//! frame: moves are recorded as they arrive and applied when the host
//! reports the frame via [`ResizeController::on_frame`].
//!
//! Only one session can be active. The host must deliver pointer-up before
//! pointer-down on another handle; a second `begin` while a session is live
//! is ignored.

mod frame;
mod width;

pub use frame::{FrameGate, FrameRequest};
pub use width::{WidthBounds, WidthMap};

use crate::config::GridConfig;
use crate::model::Column;

/// An in-progress column-width drag.
#[derive(Debug, Clone, PartialEq)]
pub struct ResizeSession {
    pub column_id: String,
    /// Pointer x at drag start.
    pub origin_x: f64,
    /// Column width at drag start.
    pub start_width: f64,
    pub bounds: WidthBounds,
}

impl ResizeSession {
    /// Width for a pointer position, clamped to the column bounds.
    pub fn width_at(&self, pointer_x: f64) -> f64 {
        self.bounds
            .clamp(self.start_width + (pointer_x - self.origin_x))
    }
}

/// Resize interaction state.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ResizeState {
    #[default]
    Idle,
    Resizing(ResizeSession),
}

/// Owns the resize session and the latest unprocessed pointer position.
#[derive(Debug, Clone, Default)]
pub struct ResizeController {
    state: ResizeState,
    pending_x: Option<f64>,
    frame: FrameGate,
}

impl ResizeController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ResizeState {
        &self.state
    }

    pub fn session(&self) -> Option<&ResizeSession> {
        match &self.state {
            ResizeState::Idle => None,
            ResizeState::Resizing(session) => Some(session),
        }
    }

    pub fn is_active(&self) -> bool {
        self.session().is_some()
    }

    /// Whether a session is live on this column.
    pub fn is_resizing(&self, column_id: &str) -> bool {
        self.session().is_some_and(|s| s.column_id == column_id)
    }

    /// Whether a frame callback is outstanding.
    pub fn frame_pending(&self) -> bool {
        self.frame.is_scheduled()
    }

    /// Start a session on `column` at pointer position `pointer_x`.
    ///
    /// Ignored if the column is not resizable or a session is already live.
    /// The start width comes from the width map, then the column minimum,
    /// then `config.fallback_width`.
    pub fn begin(
        &mut self,
        column: &Column,
        pointer_x: f64,
        widths: &WidthMap,
        config: &GridConfig,
    ) -> bool {
        if !column.flags.resizable {
            log::debug!("[resize] {} is not resizable", column.id);
            return false;
        }
        if let Some(active) = self.session() {
            log::debug!(
                "[resize] ignoring begin on {}: {} already resizing",
                column.id,
                active.column_id
            );
            return false;
        }
        if !pointer_x.is_finite() {
            return false;
        }

        let session = ResizeSession {
            column_id: column.id.clone(),
            origin_x: pointer_x,
            start_width: widths.resolve(column, config.fallback_width),
            bounds: WidthBounds::for_column(column, config.min_width_floor),
        };
        log::debug!(
            "[resize] begin {} at x={} width={}",
            session.column_id,
            session.origin_x,
            session.start_width
        );
        self.state = ResizeState::Resizing(session);
        self.pending_x = None;
        self.frame.cancel();
        true
    }

    /// Record a pointer move. The width is applied on the next frame.
    pub fn pointer_moved(&mut self, pointer_x: f64) -> FrameRequest {
        if !self.is_active() || !pointer_x.is_finite() {
            return FrameRequest::Ignored;
        }
        self.pending_x = Some(pointer_x);
        self.frame.request()
    }

    /// Apply the latest recorded move. Returns the new width, if any.
    pub fn on_frame(&mut self, widths: &mut WidthMap) -> Option<f64> {
        if !self.frame.fire() {
            return None;
        }
        self.apply_pending(widths)
    }

    /// End the session, flushing a move still waiting for its frame.
    ///
    /// No-op when idle.
    pub fn end(&mut self, widths: &mut WidthMap) -> Option<ResizeSession> {
        if !self.is_active() {
            return None;
        }
        self.frame.cancel();
        self.apply_pending(widths);

        match std::mem::take(&mut self.state) {
            ResizeState::Resizing(session) => {
                log::debug!(
                    "[resize] end {} at width {:?}",
                    session.column_id,
                    widths.get(&session.column_id)
                );
                Some(session)
            }
            ResizeState::Idle => None,
        }
    }

    fn apply_pending(&mut self, widths: &mut WidthMap) -> Option<f64> {
        let x = self.pending_x.take()?;
        let session = self.session()?;
        let width = session.width_at(x);
        log::trace!("[resize] {} -> {}", session.column_id, width);
        widths.set(&session.column_id, width);
        Some(width)
    }
}
