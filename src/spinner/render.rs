//! Line formatting for spinner frames.
//!
//! Widths are measured in terminal columns with `console::measure_text_width`,
//! so wide glyphs and escape sequences are accounted for correctly.

use console::measure_text_width;
use std::borrow::Cow;

use super::ColorToken;

/// Marker appended in place of truncated text
pub const ELLIPSIS: &str = " ...";

const ELLIPSIS_WIDTH: usize = 4;

/// One rendered draw, ready to be written to the console.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedLine {
    /// Bytes to write, starting with `\r`
    pub line: String,
    /// Columns occupied by the visible content, padding included
    pub visible_width: usize,
}

/// Inputs for a single draw.
#[derive(Debug, Clone, Copy)]
pub struct FrameSpec<'a> {
    pub glyph: &'a str,
    pub color: ColorToken,
    pub text: &'a str,
    /// Console width in columns
    pub width: usize,
    /// Visible width of the previous draw on this line
    pub previous_width: usize,
    pub force_styling: bool,
}

fn char_width(c: char) -> usize {
    let mut buf = [0u8; 4];
    measure_text_width(c.encode_utf8(&mut buf))
}

/// Longest prefix of `text` that fits in `max_cols` columns.
fn take_prefix(text: &str, max_cols: usize) -> &str {
    let mut used = 0;
    for (idx, c) in text.char_indices() {
        let w = char_width(c);
        if used + w > max_cols {
            return &text[..idx];
        }
        used += w;
    }
    text
}

/// Make `text` safe to print on a single in-place line.
///
/// Escape sequences are removed and every control character (`\n`, `\r`,
/// `\t`, ...) becomes one space, so the measured width matches what the
/// terminal shows and only the renderer decides where lines end.
pub fn sanitize(text: &str) -> Cow<'_, str> {
    let stripped = console::strip_ansi_codes(text);
    if !stripped.contains(char::is_control) {
        return stripped;
    }
    Cow::Owned(
        stripped
            .chars()
            .map(|c| if c.is_control() { ' ' } else { c })
            .collect(),
    )
}

/// Fit `text` next to a glyph of `glyph_width` columns on a `width`-column line.
///
/// The text is sanitized first. Overflowing text loses `overflow + 4`
/// columns from its tail and gains [`ELLIPSIS`]. When not even the marker
/// fits, the marker is clipped.
pub fn fit_text(text: &str, glyph_width: usize, width: usize) -> Cow<'_, str> {
    match sanitize(text) {
        Cow::Borrowed(clean) => fit_clean(clean, glyph_width, width),
        Cow::Owned(clean) => Cow::Owned(fit_clean(&clean, glyph_width, width).into_owned()),
    }
}

fn fit_clean(text: &str, glyph_width: usize, width: usize) -> Cow<'_, str> {
    let spinner_width = glyph_width + 2;
    let available = width.saturating_sub(spinner_width);
    let text_width = measure_text_width(text);

    if text_width <= available {
        return Cow::Borrowed(text);
    }
    if available < ELLIPSIS_WIDTH {
        return Cow::Borrowed(take_prefix(ELLIPSIS, available));
    }

    let overflow = text_width - available;
    let keep = text_width - (overflow + ELLIPSIS_WIDTH);
    Cow::Owned(format!("{}{}", take_prefix(text, keep), ELLIPSIS))
}

/// Compose the in-place line for one frame.
///
/// Layout is `\r`, space, colored glyph, space, sanitized text. The
/// trailing space and text are dropped, then the glyph, when the console is
/// narrower than the spinner itself. Spaces are appended to cover whatever the previous,
/// wider draw left on the line.
pub fn render_line(spec: &FrameSpec<'_>) -> RenderedLine {
    let glyph_width = measure_text_width(spec.glyph);
    let spinner_width = glyph_width + 2;
    let width = spec.width;

    let mut line = String::from("\r");
    let mut visible = 0;

    if width >= 1 {
        line.push(' ');
        visible += 1;
    }
    if width >= 1 + glyph_width {
        line.push_str(&spec.color.paint(spec.glyph, spec.force_styling));
        visible += glyph_width;
    }
    if width >= spinner_width {
        let text = fit_text(spec.text, glyph_width, width);
        line.push(' ');
        line.push_str(&text);
        visible += 1 + measure_text_width(&text);
    }

    let padding = spec
        .previous_width
        .saturating_sub(visible)
        .min(width.saturating_sub(visible));
    line.extend(std::iter::repeat_n(' ', padding));
    visible += padding;

    RenderedLine {
        line,
        visible_width: visible,
    }
}
