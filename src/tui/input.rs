//! Text input handling for the terminal user interface.

/// A single-line text input with a character-indexed cursor.
#[derive(Clone)]
pub struct TextInput {
    pub value: String,
    pub cursor: usize,
    pub focused: bool,
}

impl TextInput {
    /// Create a new empty input.
    pub fn new() -> Self {
        Self {
            value: String::new(),
            cursor: 0,
            focused: false,
        }
    }

    /// Create an input holding initial text, cursor at the end.
    pub fn with_value(value: &str) -> Self {
        Self {
            value: value.to_string(),
            cursor: value.chars().count(),
            focused: false,
        }
    }

    // The cursor counts characters, not bytes, so edits stay on
    // char boundaries for non-ASCII text.
    fn byte_offset(&self) -> usize {
        self.value
            .char_indices()
            .nth(self.cursor)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }

    /// Insert a character at the cursor.
    pub fn insert(&mut self, c: char) {
        let at = self.byte_offset();
        self.value.insert(at, c);
        self.cursor += 1;
    }

    /// Delete the character before the cursor.
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let at = self.byte_offset();
            self.value.remove(at);
        }
    }

    /// Move the cursor one character left.
    pub fn left(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    /// Move the cursor one character right.
    pub fn right(&mut self) {
        if self.cursor < self.value.chars().count() {
            self.cursor += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_backspace_track_cursor() {
        let mut input = TextInput::new();
        for c in "abc".chars() {
            input.insert(c);
        }
        assert_eq!(input.value, "abc");
        input.left();
        input.backspace();
        assert_eq!(input.value, "ac");
        assert_eq!(input.cursor, 1);
    }

    #[test]
    fn edits_respect_char_boundaries() {
        let mut input = TextInput::with_value("héllo");
        input.left();
        input.left();
        input.left();
        input.left();
        input.insert('x');
        assert_eq!(input.value, "hxéllo");
        input.backspace();
        assert_eq!(input.value, "héllo");
    }
}
