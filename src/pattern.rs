//! Random strings bounded position by position by two pattern strings.
//!
//! `arbitrary_string("a2", "b1")` treats each position as its own range:
//! the first char is drawn from `a..=b` and the second from `1..=2`, giving
//! one of `a1`, `a2`, `b1` or `b2`. Positions are independent, so the
//! result is not a lexicographic interpolation between the two strings.
//!
//! Per position:
//!
//! - two digits draw a digit between them;
//! - two uppercase or two lowercase letters draw a letter between them, in
//!   that case;
//! - letters of different case draw any letter of either case, ignoring
//!   the bounds;
//! - a digit and a letter draw from the digits `d..=9` plus the letters of
//!   the letter's case that come before it.

use tracing::debug;

use crate::letter::alphabet_index;
use crate::letter::LOWERCASE;
use crate::letter::UPPERCASE;
use crate::Casing;
use crate::Error;
use crate::Result;
use crate::Sampler;
use crate::UniformSource;

const DIGITS: [char; 10] = ['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];

impl<S: UniformSource> Sampler<S> {
    /// Builds a string the length of `min` and `max`, drawing every position
    /// within the range the two bounds give it.
    ///
    /// Both bounds must be non-empty, of equal length and made only of
    /// `[0-9A-Za-z]`. Validation happens before anything is drawn.
    pub fn arbitrary_string(&self, min: &str, max: &str) -> Result<String> {
        let pairs = validate(min, max)?;
        Ok(pairs
            .into_iter()
            .map(|(low, high)| self.position(low, high))
            .collect())
    }

    /// Alias of [`Sampler::arbitrary_string`].
    pub fn string_pattern(&self, min: &str, max: &str) -> Result<String> {
        self.arbitrary_string(min, max)
    }

    fn position(&self, a: char, b: char) -> char {
        match (a.to_digit(10), b.to_digit(10)) {
            (Some(a), Some(b)) => {
                let digit = self.int_between(i64::from(a), i64::from(b));
                DIGITS[usize::try_from(digit).unwrap_or(0)]
            }
            (None, None) => match (a.is_ascii_uppercase(), b.is_ascii_uppercase()) {
                (true, true) => self.letter(Some(Casing::Upper), Some(a), Some(b)),
                (false, false) => self.letter(Some(Casing::Lower), Some(a), Some(b)),
                _ => self.letter(Some(Casing::Mixed), None, None),
            },
            (Some(digit), None) => self.digit_or_letter(digit, b),
            (None, Some(digit)) => self.digit_or_letter(digit, a),
        }
    }

    fn digit_or_letter(&self, digit: u32, letter: char) -> char {
        let digit = usize::try_from(digit).unwrap_or(0);
        let letters = if letter.is_ascii_uppercase() {
            &UPPERCASE
        } else {
            &LOWERCASE
        };
        let before = alphabet_index(letter).unwrap_or(0);
        let pool: Vec<char> = DIGITS[digit..]
            .iter()
            .chain(&letters[..before])
            .copied()
            .collect();
        pool[self.index(pool.len())]
    }
}

fn validate(min: &str, max: &str) -> Result<Vec<(char, char)>> {
    let (min_len, max_len) = (min.chars().count(), max.chars().count());
    if min_len != max_len {
        debug!(min, max, "bound length mismatch");
        return Err(Error::LengthMismatch { min_len, max_len });
    }
    if min_len == 0 {
        return Err(Error::EmptyPattern);
    }
    for bound in [min, max] {
        if let Some((position, character)) = bound
            .chars()
            .enumerate()
            .find(|(_, c)| !c.is_ascii_alphanumeric())
        {
            debug!(bound, position, "unsupported character");
            return Err(Error::InvalidCharacter {
                character,
                position,
            });
        }
    }
    Ok(min.chars().zip(max.chars()).collect())
}
