use std::io::{
    self,
    BufReader,
    Read,
};

use crate::errs::Error;

/// Split `text` into maximal runs of ASCII letters, skipping everything
/// else.
pub fn tokenize(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| !c.is_ascii_alphabetic())
        .filter(|token| !token.is_empty())
}

/// Streams the words of a reader: maximal runs of ASCII letters, with digits,
/// punctuation, whitespace and non-ASCII bytes acting as separators.
pub struct Tokens<R: Read> {
    bytes: io::Bytes<BufReader<R>>,
}

impl<R: Read> Tokens<R> {
    pub fn new(reader: R) -> Self {
        Tokens {
            bytes: BufReader::new(reader).bytes(),
        }
    }
}

impl<R: Read> Iterator for Tokens<R> {
    type Item = Result<String, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut token = String::new();
        for byte in self.bytes.by_ref() {
            match byte {
                | Ok(b) if b.is_ascii_alphabetic() => token.push(b as char),
                | Ok(_) if token.is_empty() => continue,
                | Ok(_) => return Some(Ok(token)),
                | Err(e) => return Some(Err(e.into())),
            }
        }
        (!token.is_empty()).then_some(Ok(token))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn collect(text: &str) -> Vec<String> {
        Tokens::new(Cursor::new(text.to_owned()))
            .collect::<Result<Vec<_>, _>>()
            .unwrap()
    }

    #[test]
    fn test_tokens_skip_non_alpha() {
        assert_eq!(
            collect("Hello, wrold!  today...42times"),
            vec!["Hello", "wrold", "today", "times"]
        );
    }

    #[test]
    fn test_tokens_edges() {
        assert!(collect("").is_empty());
        assert!(collect("  123 -- !!").is_empty());
        assert_eq!(collect("word"), vec!["word"]);
        assert_eq!(collect("\nend\n"), vec!["end"]);
    }

    #[test]
    fn test_tokens_split_on_non_ascii() {
        assert_eq!(collect("naïve"), vec!["na", "ve"]);
    }

    #[test]
    fn test_tokenize_matches_reader() {
        let text = "It's a dog-eat-dog world, 2 times over.";
        let streamed = collect(text);
        let sliced: Vec<_> = tokenize(text).collect();
        assert_eq!(streamed, sliced);
        assert_eq!(sliced, vec!["It", "s", "a", "dog", "eat", "dog", "world", "times", "over"]);
    }
}
