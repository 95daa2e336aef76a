//! # mbox-lexer-engine
//!
//! Assigns a highlight style to every byte of an mbox archive.
//!
//! A lex pass runs three phases, each a plain function over data owned by
//! the pass:
//!
//! ```text
//! text → classify → raw LineTable → resolve → resolved LineTable → tokenize → styles
//! ```
//!
//! 1. [`classify`] matches each line on its own against the `From`,
//!    `Date:` and `Subject:` header grammars.
//! 2. [`resolve`] keeps header lines only where a run of them opens with
//!    `From`, `Date`, `Subject`, and demotes every other run to default.
//! 3. [`tokenize`] walks the bytes, starting each line in its resolved
//!    style and switching to the value style after the header keyword.
//!
//! [`MboxLexer`] ties the phases together for a byte range of a document
//! read through [`CharSource`].
//!
//! ```
//! use mbox_lexer_engine::{MboxLexer, Style};
//!
//! let doc = "From bob Mon Jan 01 12:00:00 2024\nDate: 01/02/03 10:00 am\nSubject: hi\n";
//! let pass = MboxLexer::new().lex_all(doc);
//!
//! assert_eq!(pass.styles.style_at(0), Some(Style::From));
//! assert_eq!(pass.styles.style_at(5), Some(Style::FromValue));
//! ```

pub mod classify;
pub mod lexer;
pub mod resolve;
pub mod snapshot;
pub mod source;
pub mod style;
pub mod table;
pub mod tokenize;

#[cfg(test)]
mod tests;

pub use lexer::{LexPass, LexerError, MboxLexer};
pub use source::CharSource;
pub use style::{LineCategory, Style};
pub use table::{LineTable, Run};
pub use tokenize::{StyleSink, StyledRange};
