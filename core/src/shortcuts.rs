//! Quick-access keys for board buttons.
//!
//! Digits cover the first ten positions (`1`..`9` then `0`), letters `a`..`t`
//! the next twenty. Buttons past position 30 have no shortcut.

/// Number of buttons reachable by a shortcut key
pub const MAX_SHORTCUTS: usize = 30;

const DIGIT_SLOTS: usize = 10;

/// Map a pressed key to a button position
pub fn shortcut_index(key: char) -> Option<usize> {
    match key.to_ascii_lowercase() {
        '1'..='9' => Some(key as usize - '1' as usize),
        '0' => Some(9),
        c @ 'a'..='t' => Some(DIGIT_SLOTS + (c as usize - 'a' as usize)),
        _ => None,
    }
}

/// Key that selects the button at `index`, if any
pub fn shortcut_key(index: usize) -> Option<char> {
    match index {
        0..=8 => char::from_digit(index as u32 + 1, 10),
        9 => Some('0'),
        i if i < MAX_SHORTCUTS => Some((b'a' + (i - DIGIT_SLOTS) as u8) as char),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_mapping() {
        assert_eq!(shortcut_index('1'), Some(0));
        assert_eq!(shortcut_index('5'), Some(4));
        assert_eq!(shortcut_index('9'), Some(8));
        assert_eq!(shortcut_index('0'), Some(9));
    }

    #[test]
    fn test_letter_mapping() {
        assert_eq!(shortcut_index('a'), Some(10));
        assert_eq!(shortcut_index('j'), Some(19));
        assert_eq!(shortcut_index('t'), Some(29));
        // Shifted letters behave like their lower-case key
        assert_eq!(shortcut_index('A'), Some(10));
        assert_eq!(shortcut_index('T'), Some(29));
    }

    #[test]
    fn test_unmapped_keys() {
        for key in ['u', 'z', 'U', ' ', ':', '?', '-', 'é'] {
            assert_eq!(shortcut_index(key), None, "key {:?}", key);
        }
    }

    #[test]
    fn test_shortcut_key_is_inverse() {
        for index in 0..MAX_SHORTCUTS {
            let key = shortcut_key(index).expect("every slot below the cap has a key");
            assert_eq!(shortcut_index(key), Some(index));
        }
        assert_eq!(shortcut_key(MAX_SHORTCUTS), None);
        assert_eq!(shortcut_key(100), None);
    }
}
