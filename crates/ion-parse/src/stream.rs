//! Buffered token stream with a cursor.

use tracing::trace;

use crate::Token;

/// Tokens plus a cursor.
///
/// The stream starts before its first token: [`current`](TokenStream::current)
/// is `None` until the first [`advance`](TokenStream::advance). Position `n`
/// means the current token is the `n`th one (1-based).
#[derive(Debug, Clone, Default)]
pub struct TokenStream {
    tokens: Vec<Token>,
    pos: usize,
}

impl TokenStream {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, pos: 0 }
    }

    /// Cursor position: 0 before the first token, `n` on the `n`th token,
    /// and one past the last token once the stream is exhausted.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// The token under the cursor.
    pub fn current(&self) -> Option<&Token> {
        self.pos.checked_sub(1).and_then(|i| self.tokens.get(i))
    }

    /// Move to the next token. Returns `None` once the stream is exhausted.
    pub fn advance(&mut self) -> Option<&Token> {
        if self.pos <= self.tokens.len() {
            self.pos += 1;
        }
        let pos = self.pos;
        let token = self.current();
        trace!(pos, kind = ?token.map(|t| t.kind), "advance");
        token
    }
}

impl FromIterator<Token> for TokenStream {
    fn from_iter<I: IntoIterator<Item = Token>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
