#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    /// Typing source text or commands
    Command,
    /// Help panel shown over the token table
    Help,
    Quit,
}
