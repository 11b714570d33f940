//! Repaint gating for the calculator apps.
//!
//! egui redraws everything every frame. A calculator only changes when the
//! user presses something, so idle repaints are pure waste. The controller
//! tracks why a frame is running and only schedules a follow-up repaint
//! when app state changed outside an input event (for example a settings
//! save toggling the theme).
//!
//! Call [`begin_frame`](RepaintController::begin_frame) at the top of
//! `update()` and [`end_frame`](RepaintController::end_frame) at the bottom.

/// Why the current frame is being painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepaintReason {
    /// First frame — always paint.
    Init,
    /// User input (pointer or key event).
    Input,
    /// App-requested repaint (state changed internally).
    StateChange,
}

pub struct RepaintController {
    needs_repaint: bool,
    frame: u64,
    reason: RepaintReason,
}

impl Default for RepaintController {
    fn default() -> Self {
        Self::new()
    }
}

impl RepaintController {
    pub fn new() -> Self {
        Self {
            needs_repaint: false,
            frame: 0,
            reason: RepaintReason::Init,
        }
    }

    /// Request one repaint on the next opportunity.
    pub fn mark_needs_repaint(&mut self) {
        self.needs_repaint = true;
    }

    pub fn reason(&self) -> RepaintReason {
        self.reason
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn begin_frame(&mut self, ctx: &egui::Context) {
        let had_input = ctx.input(|i| {
            !i.events.is_empty()
                || i.pointer.any_pressed()
                || i.pointer.any_released()
                || i.pointer.is_moving()
        });

        self.reason = if self.frame == 0 {
            RepaintReason::Init
        } else if had_input {
            RepaintReason::Input
        } else if self.needs_repaint {
            RepaintReason::StateChange
        } else {
            // The frame was triggered by something; treat it as input.
            RepaintReason::Input
        };

        // Clear the one-shot flag now that it has been consumed.
        self.needs_repaint = false;
    }

    pub fn end_frame(&mut self, ctx: &egui::Context) {
        self.frame += 1;

        if self.needs_repaint {
            ctx.request_repaint();
        }
        // else: egui sleeps until the next input event.
    }
}
