/// Breaks `text` into lines no wider than `max_width`.
///
/// Words are packed greedily. A word that is too wide on its own is split
/// between characters. If the whole text already fits it is returned as a
/// single line.
pub fn wrap_label<F>(text: &str, max_width: f32, measure: F) -> Vec<String>
where
    F: Fn(&str) -> f32,
{
    if measure(text) < max_width {
        return vec![text.to_string()];
    }

    let mut pieces: Vec<String> = vec![];
    for word in text.split_whitespace() {
        if measure(word) < max_width {
            pieces.push(word.to_string());
            continue;
        }

        let mut chunk = String::new();
        for c in word.chars() {
            chunk.push(c);
            if chunk.chars().count() > 1 && measure(&chunk) >= max_width {
                chunk.pop();
                pieces.push(std::mem::take(&mut chunk));
                chunk.push(c);
            }
        }
        if !chunk.is_empty() {
            pieces.push(chunk);
        }
    }

    let mut lines = vec![];
    let mut line = String::new();
    for piece in pieces {
        if line.is_empty() {
            line = piece;
            continue;
        }

        let candidate = format!("{} {}", line, piece);
        if measure(&candidate) < max_width {
            line = candidate;
        } else {
            lines.push(std::mem::replace(&mut line, piece));
        }
    }
    if !line.is_empty() {
        lines.push(line);
    }

    lines
}

#[cfg(test)]
mod test {
    use super::*;

    fn monospace(s: &str) -> f32 {
        s.chars().count() as f32 * 10.0
    }

    #[test]
    fn test_short_label_is_single_line() {
        assert_eq!(wrap_label("Chess", 100.0, monospace), vec!["Chess"]);
    }

    #[test]
    fn test_words_are_packed_greedily() {
        let lines = wrap_label("Rock climbing and hiking", 110.0, monospace);
        assert_eq!(lines, vec!["Rock", "climbing", "and hiking"]);
        assert!(lines.iter().all(|l| monospace(l) < 110.0));
    }

    #[test]
    fn test_long_word_is_split() {
        let lines = wrap_label("Calligraphy", 50.0, monospace);
        assert_eq!(lines, vec!["Call", "igra", "phy"]);
    }

    #[test]
    fn test_empty_label() {
        assert_eq!(wrap_label("", 50.0, monospace), vec![""]);
    }
}
