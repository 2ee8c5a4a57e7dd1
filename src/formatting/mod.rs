use std::env;
use std::io::IsTerminal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Auto,   // Detect based on terminal
    Always, // Force colors on
    Never,  // Force colors off
}

impl ColorMode {
    pub fn should_use_color(&self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => detect_color_support(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmojiMode {
    Auto,   // Use emoji if terminal supports Unicode
    Always, // Always use emoji
    Never,  // Never use emoji
}

impl EmojiMode {
    pub fn should_use_emoji(&self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => detect_emoji_support(),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FormattingConfig {
    pub color: ColorMode,
    pub emoji: EmojiMode,
}

impl Default for FormattingConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::Auto,
            emoji: EmojiMode::Auto,
        }
    }
}

impl FormattingConfig {
    pub fn from_env() -> Self {
        let mut config = Self::default();

        // Check NO_COLOR environment variable (per no-color.org standard)
        if env::var("NO_COLOR").is_ok() {
            config.color = ColorMode::Never;
        }

        // Check CLICOLOR environment variable
        if let Ok(val) = env::var("CLICOLOR") {
            if val == "0" {
                config.color = ColorMode::Never;
            }
        }

        // Check CLICOLOR_FORCE environment variable
        if let Ok(val) = env::var("CLICOLOR_FORCE") {
            if val == "1" {
                config.color = ColorMode::Always;
            }
        }

        config
    }

    /// Create a plain output configuration (ASCII-only, no colors, no emoji)
    pub fn plain() -> Self {
        Self {
            color: ColorMode::Never,
            emoji: EmojiMode::Never,
        }
    }

    /// Apply the color mode to the global `colored` override.
    pub fn apply(&self) {
        colored::control::set_override(self.color.should_use_color());
    }

    /// Pick the emoji or its ASCII fallback based on the emoji mode.
    pub fn emoji<'a>(&self, emoji: &'a str, fallback: &'a str) -> &'a str {
        if self.emoji.should_use_emoji() {
            emoji
        } else {
            fallback
        }
    }
}

fn detect_color_support() -> bool {
    // Check if we're in a dumb terminal
    if let Ok(term) = env::var("TERM") {
        if term == "dumb" {
            return false;
        }
    }

    // Check if stdout is a TTY
    std::io::stdout().is_terminal()
}

fn detect_emoji_support() -> bool {
    // Same detection as color support; locale-aware detection could refine this
    detect_color_support()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_config_disables_everything() {
        let config = FormattingConfig::plain();
        assert!(!config.color.should_use_color());
        assert!(!config.emoji.should_use_emoji());
    }

    #[test]
    fn test_emoji_fallback_selection() {
        let plain = FormattingConfig::plain();
        assert_eq!(plain.emoji("📊", "[STATS]"), "[STATS]");

        let always = FormattingConfig {
            color: ColorMode::Never,
            emoji: EmojiMode::Always,
        };
        assert_eq!(always.emoji("📊", "[STATS]"), "📊");
    }

    #[test]
    fn test_forced_color_modes() {
        assert!(ColorMode::Always.should_use_color());
        assert!(!ColorMode::Never.should_use_color());
    }
}
