// ============================================================
// Layer 4 — Argument Text Preprocessor
// ============================================================
// Cleans one argument field before it reaches the tokenizer.
//
// Annotated files are exported from spreadsheets and crowd-
// sourcing tools, so argument text often carries:
//   - A trailing "\n" or "\r\n" (the last column of each line)
//   - Non-breaking spaces (U+00A0) and zero-width spaces (U+200B)
//   - Byte order marks (U+FEFF) pasted mid-text
//   - Stray control characters
//
// None of these may reach the tokenizer: each would be looked
// up as OOV and add noise to the encoded sequence.
//
// Cleaning steps (applied in order):
//   1. Map Unicode whitespace variants and control chars to ' '
//   2. Collapse runs of whitespace into a single space
//   3. Trim both ends
//
// Reference: Rust Book §8 (Strings in Rust)

pub struct Preprocessor;

impl Preprocessor {
    pub fn new() -> Self {
        Self
    }

    /// Clean a single argument field
    pub fn clean(&self, text: &str) -> String {
        let mut out        = String::with_capacity(text.len());
        let mut last_space = true;

        for c in text.chars() {
            let c = match c {
                '\u{00A0}' | '\u{200B}' | '\u{FEFF}' => ' ',
                c if c.is_control() => ' ',
                c if c.is_whitespace() => ' ',
                c => c,
            };

            if c == ' ' {
                if !last_space {
                    out.push(' ');
                }
                last_space = true;
            } else {
                out.push(c);
                last_space = false;
            }
        }

        // At most one trailing space can remain after the loop
        if out.ends_with(' ') {
            out.pop();
        }
        out
    }
}

impl Default for Preprocessor {
    fn default() -> Self {
        Self::new()
    }
}
