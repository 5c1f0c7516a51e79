//! Recognized text commands and the prefix table used to classify messages.

/// Text command understood by the dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// `!join` - bind a voice session to the sender's channel
    Join,
    /// `!leave` - drop the active voice session
    Leave,
    /// `!random` - assign a random weapon to every tracked user
    Random,
    /// `!guild` - log guild and voice state metadata
    Guild,
    /// `!users` - list users sharing the sender's voice channel
    Users,
}

/// Ordered prefix table. The first entry whose token starts the message wins.
pub const COMMANDS: &[(&str, Command)] = &[
    ("!join", Command::Join),
    ("!leave", Command::Leave),
    ("!random", Command::Random),
    ("!guild", Command::Guild),
    ("!users", Command::Users),
];

impl Command {
    /// Classifies message content by case-sensitive prefix match.
    ///
    /// Anything after the token is ignored, so `!joinnow` is still `Join`.
    ///
    /// # Returns
    /// - `Some(Command)` - First command whose token starts `content`
    /// - `None` - No token matched; the message is not a command
    pub fn parse(content: &str) -> Option<Self> {
        COMMANDS
            .iter()
            .find(|(prefix, _)| content.starts_with(prefix))
            .map(|(_, command)| *command)
    }

    pub fn token(self) -> &'static str {
        COMMANDS
            .iter()
            .find(|(_, command)| *command == self)
            .map(|(prefix, _)| *prefix)
            .unwrap_or_default()
    }
}
