use ropey::{Rope, RopeSlice};

/// Line (1-based) and column (0-based, in code points) at the end of `prefix`.
///
/// Lines are separated by `\r\n`, `\r` or `\n`.
pub fn line_and_column(prefix: &str) -> (usize, usize) {
    let rope = Rope::from_str(prefix);
    let last = rope.len_lines() - 1;
    (last + 1, content_len(rope.line(last)))
}

/// Text of the 1-based `line`, without its terminator.
///
/// Returns an empty string when the line does not exist.
pub fn line_text(text: &str, line: i64) -> String {
    let rope = Rope::from_str(text);
    let Some(idx) = usize::try_from(line).ok().and_then(|l| l.checked_sub(1)) else {
        return String::new();
    };
    if idx >= rope.len_lines() {
        return String::new();
    }

    let slice = rope.line(idx);
    slice.slice(..content_len(slice)).to_string()
}

/// Length of a rope line excluding its line break
fn content_len(line: RopeSlice) -> usize {
    let len = line.len_chars();
    if len >= 2 && line.char(len - 2) == '\r' && line.char(len - 1) == '\n' {
        len - 2
    } else if len >= 1 && matches!(line.char(len - 1), '\n' | '\r') {
        len - 1
    } else {
        len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_prefix_is_first_line() {
        assert_eq!(line_and_column(""), (1, 0));
    }

    #[test]
    fn column_counts_code_points() {
        assert_eq!(line_and_column("héllo"), (1, 5));
        assert_eq!(line_and_column("ab\ncdé"), (2, 3));
    }

    #[test]
    fn every_break_style_counts() {
        assert_eq!(line_and_column("a\r\nb\rc\nd"), (4, 1));
        // Trailing break starts a new, empty line
        assert_eq!(line_and_column("a\r\n"), (2, 0));
        assert_eq!(line_and_column("a\r"), (2, 0));
    }

    #[test]
    fn line_text_strips_terminator() {
        let text = "first\r\nsecond\rthird\nlast";
        assert_eq!(line_text(text, 1), "first");
        assert_eq!(line_text(text, 2), "second");
        assert_eq!(line_text(text, 3), "third");
        assert_eq!(line_text(text, 4), "last");
    }

    #[test]
    fn line_text_out_of_range_is_empty() {
        let text = "one\ntwo\n";
        assert_eq!(line_text(text, 0), "");
        assert_eq!(line_text(text, -3), "");
        assert_eq!(line_text(text, 3), "");
        assert_eq!(line_text(text, 4), "");
    }
}
