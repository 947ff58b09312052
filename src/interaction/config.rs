use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Couldn't parse interaction config: {0}")]
    Parse(String),
    #[error("Threshold {0} is outside 0..=1")]
    Threshold(f64),
    #[error("Cursor trail needs at least one segment")]
    EmptyTrail,
    #[error("{0} must not be negative")]
    Negative(&'static str),
}

/// Tag and class lists used to decide how the lead cursor reacts to a hover target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PointerTargets {
    pub interactive_tags: Vec<String>,
    pub interactive_classes: Vec<String>,
    /// Computed `cursor` values that carry no hint; any other value marks the
    /// element as interactive. `none` is what everything inherits from `body`
    /// while the system cursor is hidden.
    pub passive_cursors: Vec<String>,
    pub text_tags: Vec<String>,
}

impl Default for PointerTargets {
    fn default() -> Self {
        let owned = |items: &[&str]| items.iter().map(|s| s.to_string()).collect();
        Self {
            interactive_tags: owned(&["button", "a", "input", "textarea", "select"]),
            interactive_classes: owned(&[
                "button",
                "nav-link",
                "project-card",
                "contact-card",
                "tech-tag",
                "theme-toggle",
                "scroll-top",
            ]),
            passive_cursors: owned(&["auto", "default", "none", "inherit", "initial", "unset"]),
            text_tags: owned(&["h1", "h2", "h3", "h4", "h5", "h6", "p", "span", "label", "div", "li"]),
        }
    }
}

/// Every tunable number the viewport controller uses.
///
/// `Default` reproduces the behaviour the site ships with; a JSON document
/// only needs to name the fields it overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InteractionConfig {
    /// Pixels added to `scrollY` before testing which section contains it.
    pub section_probe_offset: f64,
    pub scroll_top_threshold: f64,
    pub nav_scrolled_threshold: f64,
    pub parallax_base: f64,
    pub parallax_hero: f64,
    pub parallax_section: f64,
    pub parallax_card: f64,
    pub trail_len: usize,
    pub trail_step_ms: f64,
    pub trail_base_opacity: f64,
    pub trail_opacity_step: f64,
    pub emphasized_scale: f64,
    pub section_reveal_threshold: f64,
    pub group_reveal_threshold: f64,
    pub reveal_root_margin: String,
    pub submit_delay_ms: f64,
    pub pointer_targets: PointerTargets,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            section_probe_offset: 100.0,
            scroll_top_threshold: 300.0,
            nav_scrolled_threshold: 50.0,
            parallax_base: 0.15,
            parallax_hero: 0.5,
            parallax_section: 0.3,
            parallax_card: 0.05,
            trail_len: 5,
            trail_step_ms: 40.0,
            trail_base_opacity: 0.6,
            trail_opacity_step: 0.1,
            emphasized_scale: 1.5,
            section_reveal_threshold: 0.1,
            group_reveal_threshold: 0.2,
            reveal_root_margin: "0px 0px -50px 0px".to_string(),
            submit_delay_ms: 1000.0,
            pointer_targets: PointerTargets::default(),
        }
    }
}

impl InteractionConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(raw).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for threshold in [self.section_reveal_threshold, self.group_reveal_threshold] {
            if !(0.0..=1.0).contains(&threshold) {
                return Err(ConfigError::Threshold(threshold));
            }
        }
        if self.trail_len == 0 {
            return Err(ConfigError::EmptyTrail);
        }
        let non_negative = [
            ("trail_step_ms", self.trail_step_ms),
            ("submit_delay_ms", self.submit_delay_ms),
            ("scroll_top_threshold", self.scroll_top_threshold),
            ("nav_scrolled_threshold", self.nav_scrolled_threshold),
        ];
        for (name, value) in non_negative {
            if value < 0.0 {
                return Err(ConfigError::Negative(name));
            }
        }
        Ok(())
    }
}
