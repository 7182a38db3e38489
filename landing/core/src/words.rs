//! Rotating word sets and the per-step mechanics shared by the splash and the hero title.
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Extra room added to every measured word so glyph overhang is not clipped.
pub const WIDTH_PADDING: f64 = 8.0;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum WordSetError {
    #[error("a rotating word set needs at least one word")]
    Empty,
    #[error("word {index} has an invalid width {width}")]
    InvalidWidth { index: usize, width: f64 },
}

/// A display string with its measured container width in pixels.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Word {
    pub text: String,
    pub width: f64,
}

impl Word {
    pub fn new(text: impl Into<String>, width: f64) -> Self {
        Word {
            text: text.into(),
            width,
        }
    }

    /// Builds a word from the element's natural width, adding [`WIDTH_PADDING`].
    pub fn measured(text: impl Into<String>, natural_width: f64) -> Self {
        Self::new(text, natural_width + WIDTH_PADDING)
    }
}

/// An ordered, non-empty, immutable list of words.
#[derive(Debug, Clone, PartialEq)]
pub struct WordSet {
    words: Vec<Word>,
}

impl WordSet {
    pub fn new(words: Vec<Word>) -> Result<Self, WordSetError> {
        if words.is_empty() {
            return Err(WordSetError::Empty);
        }

        if let Some((index, word)) = words
            .iter()
            .enumerate()
            .find(|(_, word)| !word.width.is_finite() || word.width < 0.0)
        {
            return Err(WordSetError::InvalidWidth {
                index,
                width: word.width,
            });
        }

        Ok(WordSet { words })
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// A word set is never empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Word> {
        self.words.get(index)
    }

    pub fn last_index(&self) -> usize {
        self.words.len() - 1
    }

    pub fn iter(&self) -> impl Iterator<Item = &Word> {
        self.words.iter()
    }
}

/// Presentation state of a single rotating word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum WordPhase {
    #[default]
    Idle,
    Active,
    Exiting,
}

/// A mutation for the rendering layer to apply to a rotating word display.
#[derive(Debug, Clone, PartialEq)]
pub enum WordEffect {
    /// Resize the container to fit the incoming word.
    Resize { width: f64 },
    /// Move one word into a new phase.
    Phase { index: usize, phase: WordPhase },
}

/// A word set plus its cursor and every word's phase.
#[derive(Debug, Clone)]
pub struct WordCarousel {
    words: WordSet,
    cursor: usize,
    phases: Vec<WordPhase>,
}

impl WordCarousel {
    pub fn new(words: WordSet) -> Self {
        let phases = vec![WordPhase::Idle; words.len()];
        WordCarousel {
            words,
            cursor: 0,
            phases,
        }
    }

    /// Sizes the container to the first word and makes it active.
    pub fn initial_layout(&mut self) -> Vec<WordEffect> {
        self.cursor = 0;
        self.phases[0] = WordPhase::Active;
        vec![
            WordEffect::Resize {
                width: self.width_of(0),
            },
            WordEffect::Phase {
                index: 0,
                phase: WordPhase::Active,
            },
        ]
    }

    /// Moves the cursor to `next`: the container is resized, the current word
    /// exits and `next` becomes active. Returns nothing if `next` is out of range.
    pub fn step_to(&mut self, next: usize) -> Vec<WordEffect> {
        if next >= self.words.len() {
            return Vec::new();
        }

        let current = self.cursor;
        self.phases[current] = WordPhase::Exiting;
        self.phases[next] = WordPhase::Active;
        self.cursor = next;

        vec![
            WordEffect::Resize {
                width: self.width_of(next),
            },
            WordEffect::Phase {
                index: current,
                phase: WordPhase::Exiting,
            },
            WordEffect::Phase {
                index: next,
                phase: WordPhase::Active,
            },
        ]
    }

    /// Returns an exited word to idle. A word that became active again in the
    /// meantime is left alone.
    pub fn clear_exit(&mut self, index: usize) -> Option<WordEffect> {
        match self.phases.get_mut(index) {
            Some(phase) if *phase == WordPhase::Exiting => {
                *phase = WordPhase::Idle;
                Some(WordEffect::Phase {
                    index,
                    phase: WordPhase::Idle,
                })
            }
            _ => None,
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn is_on_last(&self) -> bool {
        self.cursor >= self.words.last_index()
    }

    pub fn phase(&self, index: usize) -> Option<WordPhase> {
        self.phases.get(index).copied()
    }

    fn width_of(&self, index: usize) -> f64 {
        self.words.get(index).map_or(0.0, |word| word.width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn carousel(texts: &[&str]) -> WordCarousel {
        let words = texts
            .iter()
            .enumerate()
            .map(|(i, text)| Word::new(*text, 100.0 + i as f64 * 10.0))
            .collect();
        WordCarousel::new(WordSet::new(words).unwrap())
    }

    #[test]
    fn cannot_create_empty_word_set() {
        assert_eq!(WordSet::new(Vec::new()), Err(WordSetError::Empty));
    }

    #[test]
    fn cannot_create_word_set_with_negative_width() {
        let result = WordSet::new(vec![Word::new("love", 40.0), Word::new("legacy", -1.0)]);

        assert_eq!(
            result,
            Err(WordSetError::InvalidWidth {
                index: 1,
                width: -1.0
            })
        );
    }

    #[test]
    fn measured_words_include_padding() {
        let word = Word::measured("memories", 92.0);

        assert_eq!(word.width, 100.0);
    }

    #[test]
    fn initial_layout_activates_first_word() {
        let mut carousel = carousel(&["love", "memories"]);

        let effects = carousel.initial_layout();

        assert_eq!(
            effects,
            vec![
                WordEffect::Resize { width: 100.0 },
                WordEffect::Phase {
                    index: 0,
                    phase: WordPhase::Active
                },
            ]
        );
        assert_eq!(carousel.phase(1), Some(WordPhase::Idle));
    }

    #[test]
    fn step_resizes_then_swaps_active_word() {
        let mut carousel = carousel(&["love", "memories", "moments"]);
        carousel.initial_layout();

        let effects = carousel.step_to(1);

        assert_eq!(
            effects,
            vec![
                WordEffect::Resize { width: 110.0 },
                WordEffect::Phase {
                    index: 0,
                    phase: WordPhase::Exiting
                },
                WordEffect::Phase {
                    index: 1,
                    phase: WordPhase::Active
                },
            ]
        );
        assert_eq!(carousel.cursor(), 1);
    }

    #[test]
    fn stepping_out_of_range_is_a_no_op() {
        let mut carousel = carousel(&["love"]);
        carousel.initial_layout();

        assert!(carousel.step_to(1).is_empty());
        assert_eq!(carousel.cursor(), 0);
        assert_eq!(carousel.phase(0), Some(WordPhase::Active));
    }

    #[test]
    fn clear_exit_only_touches_exiting_words() {
        let mut carousel = carousel(&["love", "memories"]);
        carousel.initial_layout();
        carousel.step_to(1);

        assert_eq!(
            carousel.clear_exit(0),
            Some(WordEffect::Phase {
                index: 0,
                phase: WordPhase::Idle
            })
        );
        assert_eq!(carousel.clear_exit(0), None);
        assert_eq!(carousel.clear_exit(1), None);
    }

    #[test]
    fn single_word_step_keeps_word_active() {
        let mut carousel = carousel(&["love"]);
        carousel.initial_layout();

        carousel.step_to(0);

        assert_eq!(carousel.phase(0), Some(WordPhase::Active));
        assert_eq!(carousel.clear_exit(0), None);
    }
}
