//! Per-frame display pass
//!
//! One call per display refresh. The pass is render-then-advance per
//! entity, matching what the eye should see: an entity is drawn with the
//! state it ended the previous frame in, then stepped.

use super::canvas::Canvas;
use super::shell::Flight;
use super::spark::Fade;
use super::state::SimState;
use crate::consts::HUE_STEP;

/// Advance the display by one frame, stroking every live entity.
///
/// Both collections are visited from the highest index downward so that
/// removal at the visited index leaves not-yet-visited lower entries
/// untouched and survivors in their original relative order. Sparks burst
/// by a shell this frame are rendered and advanced in the same pass.
pub fn frame(state: &mut SimState, canvas: &mut impl Canvas) {
    state.hue = (state.hue + HUE_STEP) % 360.0;

    let mut i = state.shells.len();
    while i > 0 {
        i -= 1;
        state.shells[i].render(state.hue, canvas);
        if state.shells[i].advance() == Flight::Arrived {
            // Sparks spawn at the target, not at the (possibly overshot)
            // shell position.
            let target = state.shells[i].target;
            state.shells.remove(i);
            state.burst(target);
        }
    }

    let mut i = state.sparks.len();
    while i > 0 {
        i -= 1;
        state.sparks[i].render(canvas);
        if state.sparks[i].advance() == Fade::Expired {
            state.sparks.remove(i);
        }
    }
}
