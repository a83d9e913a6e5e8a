/// Width that wrapped comment lines are kept within, including the `// ` prefix.
pub const COMMENT_WIDTH: usize = 80;

/// Render text as `//` line comments, wrapping long lines at word boundaries.
///
/// Blank lines become a bare `//`. Runs of whitespace inside a line collapse
/// to one space. A word longer than the width gets a line of its own.
pub fn line_comment(text: &str, width: usize) -> String {
    let mut out = String::with_capacity(text.len() + text.len() / 8);

    for line in text.lines() {
        let mut current = String::new();
        for word in line.split_whitespace() {
            if !current.is_empty() && 3 + current.len() + 1 + word.len() > width {
                push_line(&mut out, &current);
                current.clear();
            }
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
        }
        push_line(&mut out, &current);
    }

    out
}

fn push_line(out: &mut String, content: &str) {
    if content.is_empty() {
        out.push_str("//\n");
    } else {
        out.push_str("// ");
        out.push_str(content);
        out.push('\n');
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comments_each_line() {
        let out = line_comment("first\n\nsecond\n", COMMENT_WIDTH);
        assert_eq!(out, "// first\n//\n// second\n");
    }

    #[test]
    fn wraps_long_lines() {
        let text = "aaaa bbbb cccc dddd";
        let out = line_comment(text, 13);
        assert_eq!(out, "// aaaa bbbb\n// cccc dddd\n");
        assert!(out.lines().all(|l| l.len() <= 13));
    }

    #[test]
    fn collapses_inner_whitespace() {
        let out = line_comment("Copyright (C) 1999  Trillian", COMMENT_WIDTH);
        assert_eq!(out, "// Copyright (C) 1999 Trillian\n");
    }

    #[test]
    fn overlong_word_stands_alone() {
        let out = line_comment("see https://example.com/a/very/long/path", 20);
        assert_eq!(out, "// see\n// https://example.com/a/very/long/path\n");
    }

    #[test]
    fn empty_text_is_empty() {
        assert_eq!(line_comment("", COMMENT_WIDTH), "");
    }
}
