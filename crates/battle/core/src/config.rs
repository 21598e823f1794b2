/// Tunable parameters for battle replay.
///
/// Only the display filter is configurable; HP rules are fixed.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ReplayConfig {
    /// Exact system messages announcing the start of battle.
    pub start_banners: Vec<String>,
    /// Suffixes of system messages announcing an enemy's appearance.
    pub appearance_suffixes: Vec<String>,
    /// Characters a separator rule is drawn with.
    pub separator_chars: Vec<char>,
    /// Shortest run of separator characters treated as a rule.
    pub min_separator_len: usize,
}

impl ReplayConfig {
    // ===== defaults =====
    pub const DEFAULT_START_BANNERS: &'static [&'static str] =
        &["Battle start!", "Battle Start", "戦闘開始！", "戦闘開始"];
    pub const DEFAULT_APPEARANCE_SUFFIXES: &'static [&'static str] =
        &[" appeared!", " appeared.", "が現れた！", "が現れた"];
    pub const DEFAULT_SEPARATOR_CHARS: &'static [char] = &['-', '=', '─', '━', '―'];
    pub const DEFAULT_MIN_SEPARATOR_LEN: usize = 3;

    pub fn new() -> Self {
        Self {
            start_banners: Self::DEFAULT_START_BANNERS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            appearance_suffixes: Self::DEFAULT_APPEARANCE_SUFFIXES
                .iter()
                .map(|s| s.to_string())
                .collect(),
            separator_chars: Self::DEFAULT_SEPARATOR_CHARS.to_vec(),
            min_separator_len: Self::DEFAULT_MIN_SEPARATOR_LEN,
        }
    }

    #[must_use]
    pub fn with_start_banner(mut self, banner: impl Into<String>) -> Self {
        self.start_banners.push(banner.into());
        self
    }

    #[must_use]
    pub fn with_appearance_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.appearance_suffixes.push(suffix.into());
        self
    }

    #[must_use]
    pub fn with_min_separator_len(mut self, min_separator_len: usize) -> Self {
        self.min_separator_len = min_separator_len.max(1);
        self
    }
}

impl Default for ReplayConfig {
    fn default() -> Self {
        Self::new()
    }
}
