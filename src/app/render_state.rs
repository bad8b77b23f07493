use crate::app::app::ClassifiedSource;
use crate::app::mode::AppMode;
use crate::engine::report::summarize;
use crate::lexer::{Token, TokenCategory};

/// Render state for UI components
pub struct RenderState {
    pub mode: AppMode,
    pub origin: Option<String>,
    pub input_text: Option<String>,
    pub tokens: Vec<Token>,
    pub dropped: Vec<String>,
    pub summary: Vec<(TokenCategory, usize)>,
    pub scroll: usize,
    pub warning: Option<String>,
    pub value_width: usize,
}

impl RenderState {
    /// Create an empty render state for when nothing has been classified yet
    pub fn empty(mode: AppMode, warning: Option<String>) -> Self {
        Self {
            mode,
            origin: None,
            input_text: None,
            tokens: vec![],
            dropped: vec![],
            summary: vec![],
            scroll: 0,
            warning,
            value_width: 0,
        }
    }

    /// Create render state from the last classified source
    pub fn from_source(
        mode: AppMode,
        source: &ClassifiedSource,
        scroll: usize,
        warning: Option<String>,
        value_width: usize,
    ) -> Self {
        let tokens = source.report.tokens.clone();

        Self {
            mode,
            origin: Some(source.origin.clone()),
            input_text: Some(source.text.clone()),
            summary: summarize(&tokens),
            scroll: scroll.min(tokens.len().saturating_sub(1)),
            tokens,
            dropped: source.report.dropped.clone(),
            warning,
            value_width,
        }
    }

    /// Tokens visible in a window of `height` rows starting at the scroll offset
    pub fn visible_tokens(&self, height: usize) -> &[Token] {
        let start = self.scroll.min(self.tokens.len());
        let end = std::cmp::min(start + height, self.tokens.len());
        &self.tokens[start..end]
    }
}
