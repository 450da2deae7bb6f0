//! # Text Wrapping
//!
//! Components predict their rendered height before the scroll canvas is
//! built, so they all wrap with the same options. Heights are clamped to
//! `u16::MAX`: a value wrapping to more lines than a terminal can address is
//! still accepted, it just stops growing the canvas.

/// Wrap options shared by every height prediction.
pub fn options(width: u16) -> textwrap::Options<'static> {
    textwrap::Options::new(width as usize)
        .break_words(true)
        .word_separator(textwrap::WordSeparator::AsciiSpace)
}

/// Wrap `text` to `width` columns. Always at least one line.
pub fn wrap(text: &str, width: u16) -> Vec<String> {
    if width == 0 || text.is_empty() {
        return vec![text.to_string()];
    }
    let lines: Vec<String> = textwrap::wrap(text, options(width))
        .into_iter()
        .map(|l| l.into_owned())
        .collect();
    if lines.is_empty() {
        vec![String::new()]
    } else {
        lines
    }
}

/// Narrow a line count to a row height, at least 1.
pub fn clamp_height(lines: usize) -> u16 {
    u16::try_from(lines).unwrap_or(u16::MAX).max(1)
}

/// Rows `text` takes when wrapped to `width`.
pub fn line_count(text: &str, width: u16) -> u16 {
    clamp_height(wrap(text, width).len())
}
