//! Splits a session line into arguments, honouring quotes.

/// Error for an unterminated quote
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unterminated {0} quote")]
pub struct UnclosedQuote(pub char);

/// Split on whitespace. Single and double quotes group words; a backslash
/// escapes the next character outside single quotes. `#` at the start of a
/// word begins a comment.
pub fn split_words(line: &str) -> Result<Vec<String>, UnclosedQuote> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut chars = line.chars();

    while let Some(c) = chars.next() {
        match c {
            c if c.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            '#' if !in_word => break,
            '\'' => {
                in_word = true;
                loop {
                    match chars.next() {
                        Some('\'') => break,
                        Some(ch) => current.push(ch),
                        None => return Err(UnclosedQuote('\'')),
                    }
                }
            }
            '"' => {
                in_word = true;
                loop {
                    match chars.next() {
                        Some('"') => break,
                        Some('\\') => match chars.next() {
                            Some(ch) => current.push(ch),
                            None => return Err(UnclosedQuote('"')),
                        },
                        Some(ch) => current.push(ch),
                        None => return Err(UnclosedQuote('"')),
                    }
                }
            }
            '\\' => {
                in_word = true;
                if let Some(ch) = chars.next() {
                    current.push(ch);
                }
            }
            c => {
                in_word = true;
                current.push(c);
            }
        }
    }
    if in_word {
        words.push(current);
    }
    Ok(words)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn split(line: &str) -> Vec<String> {
        split_words(line).unwrap()
    }

    #[test]
    fn plain_words() {
        assert_eq!(split("task status t1  done"), vec!["task", "status", "t1", "done"]);
        assert!(split("   ").is_empty());
    }

    #[test]
    fn quotes_group_words() {
        assert_eq!(
            split(r#"task add --title "Ship v2 mold" --desc 'it''s fine'"#),
            vec!["task", "add", "--title", "Ship v2 mold", "--desc", "its fine"]
        );
        assert_eq!(split(r#"--title="A B""#), vec!["--title=A B"]);
        assert_eq!(split(r#"x "" y"#), vec!["x", "", "y"]);
    }

    #[test]
    fn escapes() {
        assert_eq!(split(r#""say \"hi\"""#), vec![r#"say "hi""#]);
        assert_eq!(split(r"a\ b"), vec!["a b"]);
    }

    #[test]
    fn comments_end_the_line() {
        assert_eq!(split("board # columns"), vec!["board"]);
        assert_eq!(split("# only a comment"), Vec::<String>::new());
        assert_eq!(split("tag#1"), vec!["tag#1"]);
    }

    #[test]
    fn unterminated_quote() {
        assert_eq!(split_words("idea add \"Half"), Err(UnclosedQuote('"')));
        assert_eq!(split_words("'x"), Err(UnclosedQuote('\'')));
    }
}
