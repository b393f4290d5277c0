use std::ops::RangeInclusive;

use crate::Sampler;
use crate::UniformSource;

const SENTENCE_WORDS: RangeInclusive<usize> = 4..=12;
const PARAGRAPH_SENTENCES: RangeInclusive<usize> = 3..=6;

/// Upper-cases the first character and leaves the rest as is.
///
/// ```
/// assert_eq!(randkit::compose::capitalize_word("tesT"), "TesT");
/// ```
pub fn capitalize_word(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

impl<S: UniformSource> Sampler<S> {
    /// A random English noun or adjective.
    pub fn word(&self) -> &'static str {
        let list = if self.boolean() {
            names::NOUNS
        } else {
            names::ADJECTIVES
        };
        list[self.index(list.len())]
    }

    /// `n` random words separated by a space.
    pub fn words(&self, n: usize) -> String {
        (0..n).map(|_| self.word()).collect::<Vec<_>>().join(" ")
    }

    /// A capitalized sentence ending with a full stop.
    ///
    /// Without a word count, between 4 and 12 words are used. Zero words
    /// give an empty string.
    pub fn sentence(&self, word_count: Option<usize>) -> String {
        let n = word_count.unwrap_or_else(|| self.count_in(&SENTENCE_WORDS));
        if n == 0 {
            return String::new();
        }
        format!("{}.", capitalize_word(&self.words(n)))
    }

    /// Sentences separated by a space; 3 to 6 of them by default.
    pub fn paragraph(&self, sentence_count: Option<usize>) -> String {
        let n = sentence_count.unwrap_or_else(|| self.count_in(&PARAGRAPH_SENTENCES));
        (0..n)
            .map(|_| self.sentence(None))
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn count_in(&self, range: &RangeInclusive<usize>) -> usize {
        range.start() + self.index(range.end() - range.start() + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::seeded;

    #[test]
    fn capitalizes_only_the_first_character() {
        assert_eq!(capitalize_word("test"), "Test");
        assert_eq!(capitalize_word("Test"), "Test");
        assert_eq!(capitalize_word("tesT"), "TesT");
        assert_eq!(
            capitalize_word("fldkjsfjdsl dskljjdkasja"),
            "Fldkjsfjdsl dskljjdkasja"
        );
        assert_eq!(capitalize_word(""), "");
    }

    #[test]
    fn words_come_from_the_word_lists() {
        let sampler = seeded(40);
        for _ in 0..100 {
            let word = sampler.word();
            assert!(names::NOUNS.contains(&word) || names::ADJECTIVES.contains(&word));
        }
        assert_eq!(sampler.words(5).split(' ').count(), 5);
        assert_eq!(sampler.words(0), "");
    }

    #[test]
    fn sentences_are_capitalized_and_terminated() {
        let sampler = seeded(41);
        for _ in 0..100 {
            let sentence = sampler.sentence(None);
            assert!(sentence.ends_with('.'));
            assert!(sentence.starts_with(|c: char| c.is_uppercase()));
            let words = sentence.split(' ').count();
            assert!(SENTENCE_WORDS.contains(&words), "{words} words");
        }
        assert_eq!(sampler.sentence(Some(3)).split(' ').count(), 3);
        assert_eq!(sampler.sentence(Some(0)), "");
    }

    #[test]
    fn paragraphs_hold_the_requested_sentences() {
        let sampler = seeded(42);
        let paragraph = sampler.paragraph(Some(4));
        assert_eq!(paragraph.matches('.').count(), 4);
        for _ in 0..50 {
            let sentences = sampler.paragraph(None).matches('.').count();
            assert!(PARAGRAPH_SENTENCES.contains(&sentences));
        }
    }
}
