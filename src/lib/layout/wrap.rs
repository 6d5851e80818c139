//! Greedy line wrapping.


/// Separator appended after every word placed on a line.
const SEPARATOR: char = ' ';


/// Break the text into lines that fit within `max_width` pixels.
///
/// Words are packed greedily: the next word goes onto the current line
/// as long as the line measured together with that word is not wider
/// than `max_width`. Every word is followed by a single space.
///
/// A word too wide to fit even on an empty line is put on a line of its own,
/// so lines made of one such word are the only ones that may overflow.
pub fn wrap<F>(text: &str, max_width: f32, measure: F) -> Vec<String>
    where F: Fn(&str) -> f32
{
    let mut words = text.split_whitespace().peekable();
    trace!("Wrapping text of length {} to the width of {}px", text.len(), max_width);

    let mut lines = vec![];
    while words.peek().is_some() {
        let mut line = String::new();
        while let Some(&word) = words.peek() {
            // The accumulated line is measured afresh each time
            // because kerning makes text widths non-additive.
            let width = measure(&format!("{}{}", line, word));
            if width > max_width && !line.is_empty() {
                break;
            }
            if width > max_width {
                debug!("Word {:?} is {}px wide, overflowing the {}px line",
                    word, width, max_width);
            }
            line.push_str(word);
            line.push(SEPARATOR);
            words.next();

            if width > max_width {
                break;  // overflowing word gets the line all to itself
            }
        }
        lines.push(line);
    }

    trace!("Text wrapped into {} line(s)", lines.len());
    lines
}


#[cfg(test)]
mod tests {
    use spectral::prelude::*;
    use super::wrap;

    /// Every character is 10px wide, including spaces.
    fn monospace(s: &str) -> f32 {
        s.chars().count() as f32 * 10.0
    }

    fn words_of(lines: &[String]) -> Vec<String> {
        lines.iter().flat_map(|l| l.split_whitespace()).map(str::to_owned).collect()
    }

    #[test]
    fn empty() {
        assert_that!(wrap("", 100.0, monospace)).is_empty();
        assert_that!(wrap("   \t  \n", 100.0, monospace)).is_empty();
    }

    #[test]
    fn single_word() {
        assert_eq!(vec!["HELLO "], wrap("HELLO", 100.0, monospace));
    }

    #[test]
    fn everything_fits_on_one_line() {
        assert_eq!(vec!["one does not "], wrap("one does not", 1000.0, monospace));
    }

    #[test]
    fn whitespace_is_collapsed() {
        assert_eq!(vec!["a b c "], wrap("  a \t b\n\nc  ", 1000.0, monospace));
    }

    #[test]
    fn two_words_of_150px_in_200px() {
        let measure = |s: &str| s.split_whitespace().count() as f32 * 150.0;
        assert_eq!(vec!["HELLO ", "WORLD "], wrap("HELLO WORLD", 200.0, measure));
    }

    #[test]
    fn trailing_space_is_not_measured() {
        // "ab cd" is exactly 50px, while "ab cd " would be 60px.
        assert_eq!(vec!["ab cd "], wrap("ab cd", 50.0, monospace));
        assert_eq!(vec!["ab ", "cd "], wrap("ab cd", 49.0, monospace));
    }

    #[test]
    fn overlong_word_gets_own_line() {
        let lines = wrap("a incomprehensibilities b", 50.0, monospace);
        assert_eq!(vec!["a ", "incomprehensibilities ", "b "], lines);
    }

    #[test]
    fn overlong_first_word() {
        let lines = wrap("incomprehensibilities is long", 80.0, monospace);
        assert_eq!(vec!["incomprehensibilities ", "is long "], lines);
    }

    #[test]
    fn every_word_overlong() {
        let lines = wrap("aaaa bbbb cccc", 10.0, monospace);
        assert_eq!(vec!["aaaa ", "bbbb ", "cccc "], lines);
    }

    #[test]
    fn lines_fit_within_budget() {
        let text = "when you finally understand the borrow checker \
                    but then it is time to write a doubly linked list";
        for &max_width in &[30.0, 60.0, 95.0, 140.0, 333.0] {
            for line in wrap(text, max_width, monospace) {
                let content = line.trim_end();
                if content.contains(' ') {
                    assert_that!(monospace(content)).is_less_than_or_equal_to(max_width);
                }
            }
        }
    }

    #[test]
    fn word_order_is_preserved() {
        let text = "the quick brown fox jumps over the lazy dog again and again";
        let expected: Vec<_> = text.split_whitespace().map(str::to_owned).collect();
        for &max_width in &[10.0, 50.0, 120.0, 10000.0] {
            assert_eq!(expected, words_of(&wrap(text, max_width, monospace)));
        }
    }

    #[test]
    fn rewrapping_is_idempotent() {
        let text = "brace yourselves the compile errors are coming";
        for &max_width in &[40.0, 90.0, 150.0] {
            let lines = wrap(text, max_width, monospace);
            let rewrapped = wrap(&lines.concat(), max_width, monospace);
            assert_eq!(lines, rewrapped);
        }
    }
}
