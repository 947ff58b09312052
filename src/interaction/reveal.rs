use super::config::InteractionConfig;

pub const SKILL_LEVEL_PROPERTY: &str = "--skill-level";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealKind {
    /// Whole page sections.
    #[default]
    Section,
    /// Staggered groups such as card grids and skill lists.
    Group,
}

impl RevealKind {
    pub fn threshold(self, config: &InteractionConfig) -> f64 {
        match self {
            Self::Section => config.section_reveal_threshold,
            Self::Group => config.group_reveal_threshold,
        }
    }
}

/// One-way visibility flag for an observed element.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RevealLatch {
    threshold: f64,
    visible: bool,
}

impl RevealLatch {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            visible: false,
        }
    }

    pub fn for_kind(kind: RevealKind, config: &InteractionConfig) -> Self {
        Self::new(kind.threshold(config))
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Feeds one intersection update. Returns `true` only on the update that
    /// flips the latch.
    pub fn observe(&mut self, is_intersecting: bool, ratio: f64) -> bool {
        if self.visible {
            return false;
        }
        if is_intersecting && ratio >= self.threshold {
            self.visible = true;
            return true;
        }
        false
    }
}

/// Value written into `--skill-level` once a bar is revealed.
pub fn skill_fill(level: u8) -> String {
    format!("{}%", level.min(100))
}
