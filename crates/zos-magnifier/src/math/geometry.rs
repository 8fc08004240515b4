//! Clamping and centering rules for a single axis
//!
//! Every rule works on one axis at a time; callers apply it to the
//! horizontal and vertical axes independently.

/// Frame side length for a client side at the given scale
///
/// Rounds half away from zero.
#[inline]
pub fn scaled_side(client_side: i32, scale: f64) -> i32 {
    (f64::from(client_side) / scale).round() as i32
}

/// Clamp a frame coordinate so the frame stays on screen
///
/// A frame larger than the screen is centered, overflowing both edges
/// by the same amount (the odd pixel goes to the far edge). Otherwise the
/// coordinate is clamped to `[0, screen_side - frame_side]`.
#[inline]
pub fn normalize_coord(coord: i32, frame_side: i32, screen_side: i32) -> i32 {
    let margin = frame_side - screen_side;
    if margin > 0 {
        -(margin / 2)
    } else {
        coord.max(0).min(screen_side - frame_side)
    }
}

/// Frame coordinate that centers the frame on a window
///
/// A window at least as large as the frame keeps its own position.
#[inline]
pub fn reset_coord(frame_side: i32, window_pos: i32, window_side: i32) -> i32 {
    if window_side >= frame_side {
        window_pos
    } else {
        window_pos - (frame_side - window_side) / 2
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// A frame no larger than the screen always lies fully on screen
        #[test]
        fn normalized_frame_fits(
            coord in -5000i32..5000,
            screen in 1i32..4000,
            frame_frac in 0.0f64..=1.0,
        ) {
            let frame = ((f64::from(screen) * frame_frac) as i32).max(1);
            let c = normalize_coord(coord, frame, screen);
            prop_assert!(c >= 0, "coord {} < 0", c);
            prop_assert!(c + frame <= screen, "span [{}, {}) exceeds {}", c, c + frame, screen);
        }

        /// An oversized frame overflows both edges by amounts differing by at most one
        #[test]
        fn oversized_frame_centered(
            coord in -5000i32..5000,
            screen in 1i32..4000,
            extra in 1i32..4000,
        ) {
            let frame = screen + extra;
            let c = normalize_coord(coord, frame, screen);
            let overflow_start = -c;
            let overflow_end = c + frame - screen;
            prop_assert!(overflow_start >= 0);
            prop_assert!(overflow_end >= overflow_start);
            prop_assert!(overflow_end - overflow_start <= 1);
        }

        /// Normalization is idempotent
        #[test]
        fn normalize_idempotent(
            coord in -5000i32..5000,
            frame in 1i32..8000,
            screen in 1i32..4000,
        ) {
            let once = normalize_coord(coord, frame, screen);
            prop_assert_eq!(normalize_coord(once, frame, screen), once);
        }
    }
}
