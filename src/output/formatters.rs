//! Formatting utilities for terminal output

use crate::core::{LevelState, MIN_LENGTH};

/// Placeholder shown for a slot that has not been revealed
pub const HIDDEN_SLOT: char = '_';

/// Label in front of letters that are in the word at another position
pub const PRESENT_LABEL: &str = "In word: ";

/// Label in front of letters that are not in the word
pub const ABSENT_LABEL: &str = "Not in word: ";

const GAP: &str = "  ";

/// Render the board as two lines
///
/// The first line shows each slot followed by the misplaced letters, the second
/// pads past the slots and lists the absent letters. Letters are uppercase and
/// sorted.
///
/// ```text
/// _ a k e   In word: 
///           Not in word: C
/// ```
#[must_use]
pub fn board_lines(level: &LevelState) -> [String; 2] {
    let slots: String = level
        .slots()
        .iter()
        .map(|slot| format!("{} ", slot.map_or(HIDDEN_SLOT, char::from)))
        .collect();
    let padding = " ".repeat(slots.len());

    [
        format!(
            "{slots}{GAP}{PRESENT_LABEL}{}",
            letter_list(level.present_letters())
        ),
        format!(
            "{padding}{GAP}{ABSENT_LABEL}{}",
            letter_list(level.absent_letters())
        ),
    ]
}

/// Uppercase letters joined without separators, in iteration order
#[must_use]
pub fn letter_list(letters: impl Iterator<Item = u8>) -> String {
    letters.map(|b| char::from(b.to_ascii_uppercase())).collect()
}

/// Level number shown to the player for a word length, starting at 1
#[must_use]
pub const fn level_number(length: usize) -> usize {
    length - MIN_LENGTH + 1
}

/// "1 guess remaining" / "N guesses remaining"
#[must_use]
pub fn remaining_text(remaining: u8) -> String {
    if remaining == 1 {
        "1 guess remaining".to_string()
    } else {
        format!("{remaining} guesses remaining")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn blank_board() {
        let level = LevelState::new(4);
        let [first, second] = board_lines(&level);
        assert_eq!(first, "_ _ _ _   In word: ");
        assert_eq!(second, "          Not in word: ");
    }

    #[test]
    fn board_after_guess() {
        let mut level = LevelState::new(4);
        level.apply_guess(&word("bake"), &word("cake"));

        let [first, second] = board_lines(&level);
        assert_eq!(first, "_ a k e   In word: ");
        assert_eq!(second, "          Not in word: C");
    }

    #[test]
    fn feedback_letters_sorted_uppercase() {
        let mut level = LevelState::new(5);
        let target = word("stone");
        level.apply_guess(&target, &word("notes"));
        level.apply_guess(&target, &word("zebra"));

        let [first, second] = board_lines(&level);
        assert!(first.ends_with("In word: ENOST"), "{first}");
        assert!(second.ends_with("Not in word: ABRZ"), "{second}");
    }

    #[test]
    fn repeated_misplaced_letter_listed_once() {
        let mut level = LevelState::new(4);
        let target = word("abcd");
        level.apply_guess(&target, &word("bxxx"));
        level.apply_guess(&target, &word("xxbx"));

        let [first, second] = board_lines(&level);
        assert!(first.ends_with("In word: B"), "{first}");
        assert!(second.ends_with("Not in word: X"), "{second}");
    }

    #[test]
    fn lines_align() {
        let level = LevelState::new(9);
        let [first, second] = board_lines(&level);
        assert_eq!(
            first.find(PRESENT_LABEL),
            second.find(ABSENT_LABEL),
            "labels should start in the same column"
        );
    }

    #[test]
    fn level_numbers() {
        assert_eq!(level_number(4), 1);
        assert_eq!(level_number(13), 10);
    }

    #[test]
    fn remaining_text_pluralizes() {
        assert_eq!(remaining_text(6), "6 guesses remaining");
        assert_eq!(remaining_text(1), "1 guess remaining");
        assert_eq!(remaining_text(0), "0 guesses remaining");
    }
}
