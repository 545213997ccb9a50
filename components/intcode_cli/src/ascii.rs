//! ASCII input and output helpers
//!
//! Text-protocol programs read one character code per INPUT and emit
//! character codes, with large values carrying numeric answers.

use core_types::Word;
use num_traits::ToPrimitive;

/// Encode a text line as input words, terminated by a newline (10)
pub fn encode_line(line: &str) -> Vec<Word> {
    line.bytes()
        .chain(std::iter::once(b'\n'))
        .map(Word::from)
        .collect()
}

/// Render output words as text
///
/// Values in `0..=127` become characters; anything else is written in
/// decimal on its own line.
pub fn render_outputs(outputs: &[Word]) -> String {
    let mut text = String::new();
    for value in outputs {
        match value.to_u8().filter(u8::is_ascii) {
            Some(byte) => text.push(char::from(byte)),
            None => {
                if !text.is_empty() && !text.ends_with('\n') {
                    text.push('\n');
                }
                text.push_str(&value.to_string());
                text.push('\n');
            }
        }
    }
    text
}
