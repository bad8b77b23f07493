use std::collections::VecDeque;

use super::event::AppEvent;
use super::mode::AppMode;
use super::render_state::RenderState;
use crate::engine::config::Config;
use crate::input::{self, LoadError, LoadedSource};
use crate::lexer::{lex_report, LexReport, Lexicon};

/// The most recently classified text and its result
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifiedSource {
    pub text: String,
    pub origin: String,
    pub report: LexReport,
}

pub struct App {
    mode: AppMode,
    config: Config,
    lexicon: Lexicon,
    source: Option<ClassifiedSource>,
    history: VecDeque<String>,
    // Index into `history` while recalling entries; None when editing a new line
    recall: Option<usize>,
    warning: Option<String>,
    scroll: usize,
}

impl App {
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    pub fn with_config(config: Config) -> Self {
        let lexicon = Lexicon::new(&config.lexicon);
        Self {
            mode: AppMode::Command,
            config,
            lexicon,
            source: None,
            history: VecDeque::new(),
            recall: None,
            warning: None,
            scroll: 0,
        }
    }

    pub fn mode(&self) -> AppMode {
        self.mode
    }

    pub fn source(&self) -> Option<&ClassifiedSource> {
        self.source.as_ref()
    }

    pub fn history(&self) -> impl Iterator<Item = &String> {
        self.history.iter()
    }

    /// Steps back through earlier inputs, stopping at the oldest.
    pub fn recall_previous(&mut self) -> Option<String> {
        if self.history.is_empty() {
            return None;
        }
        let index = match self.recall {
            Some(index) => index.saturating_sub(1),
            None => self.history.len() - 1,
        };
        self.recall = Some(index);
        self.history.get(index).cloned()
    }

    /// Steps forward through earlier inputs. Returns None past the newest entry.
    pub fn recall_next(&mut self) -> Option<String> {
        let index = self.recall? + 1;
        if index >= self.history.len() {
            self.recall = None;
            return None;
        }
        self.recall = Some(index);
        self.history.get(index).cloned()
    }

    pub fn warning(&self) -> Option<&str> {
        self.warning.as_deref()
    }

    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Classify(text) => {
                self.remember(&text);
                self.classify_source(LoadedSource {
                    text,
                    origin: "input".to_string(),
                });
            }
            AppEvent::LoadFile(path) => {
                self.remember(&format!("@{}", path));
                self.load_with(|| input::file::load(&path));
            }
            AppEvent::LoadClipboard => {
                self.remember("@@");
                self.load_with(input::clipboard::load);
            }
            AppEvent::Help => {
                self.mode = AppMode::Help;
            }
            AppEvent::Quit => {
                self.mode = AppMode::Quit;
            }
            AppEvent::Warning(message) => {
                self.warning = Some(message);
            }
            AppEvent::InvalidCommand(input) => {
                self.warning = Some(if input.is_empty() {
                    "Nothing to classify".to_string()
                } else {
                    format!("Unknown command: {}", input)
                });
            }
            AppEvent::None => {}
        }
    }

    /// Leaves the help panel, returning to command input
    pub fn close_help(&mut self) {
        if self.mode == AppMode::Help {
            self.mode = AppMode::Command;
        }
    }

    pub fn scroll_down(&mut self) {
        let rows = self
            .source
            .as_ref()
            .map_or(0, |source| source.report.tokens.len());
        if self.scroll + 1 < rows {
            self.scroll += 1;
        }
    }

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    pub fn get_render_state(&self) -> RenderState {
        match &self.source {
            Some(source) => RenderState::from_source(
                self.mode,
                source,
                self.scroll,
                self.warning.clone(),
                self.config.ui.value_column_width,
            ),
            None => RenderState::empty(self.mode, self.warning.clone()),
        }
    }

    fn load_with<F>(&mut self, load: F)
    where
        F: FnOnce() -> Result<LoadedSource, LoadError>,
    {
        match load() {
            Ok(loaded) => self.classify_source(loaded),
            Err(e) => {
                tracing::warn!(error = %e, "failed to load source");
                self.warning = Some(e.to_string());
            }
        }
    }

    fn classify_source(&mut self, loaded: LoadedSource) {
        let report = lex_report(&loaded.text, &self.lexicon);
        tracing::debug!(
            origin = %loaded.origin,
            tokens = report.tokens.len(),
            dropped = report.dropped.len(),
            "classified source"
        );

        self.source = Some(ClassifiedSource {
            text: loaded.text,
            origin: loaded.origin,
            report,
        });
        self.scroll = 0;
        self.warning = None;
        self.mode = AppMode::Command;
    }

    fn remember(&mut self, entry: &str) {
        self.recall = None;
        if self.config.ui.history_limit == 0 {
            return;
        }
        if self.history.len() == self.config.ui.history_limit {
            self.history.pop_front();
        }
        self.history.push_back(entry.to_string());
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
