//! Spinner glyph constants.

/// Braille spinner frames, drawn cyclically while an animation runs
pub const FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Number of spinner frames (used by the clock to wrap the frame index)
pub const FRAME_COUNT: usize = FRAMES.len();

/// Glyph drawn once by the final (stop) frame
pub const TERMINAL_GLYPH: &str = "•";

/// Glyph for a given frame, or the terminal glyph on the final draw.
pub fn glyph(frame_index: usize, is_final: bool) -> &'static str {
    if is_final {
        TERMINAL_GLYPH
    } else {
        FRAMES[frame_index % FRAME_COUNT]
    }
}

/// Index that follows `frame_index`, wrapping to 0 after the last frame.
pub fn next_index(frame_index: usize) -> usize {
    (frame_index + 1) % FRAME_COUNT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_index_wraps() {
        let mut index = 0;
        let mut seen = Vec::new();
        for _ in 0..12 {
            seen.push(index);
            index = next_index(index);
        }
        assert_eq!(seen, vec![0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 0, 1]);
    }

    #[test]
    fn test_final_glyph_ignores_index() {
        assert_eq!(glyph(3, true), TERMINAL_GLYPH);
        assert_eq!(glyph(9, true), TERMINAL_GLYPH);
        assert_eq!(glyph(3, false), "⠸");
    }
}
