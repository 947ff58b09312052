use std::collections::VecDeque;

use super::config::{InteractionConfig, PointerTargets};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CursorPoint {
    pub x: f64,
    pub y: f64,
}

impl CursorPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorMode {
    #[default]
    Normal,
    Emphasized,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetKind {
    Interactive,
    Text,
    Other,
}

impl TargetKind {
    pub fn cursor_mode(self) -> CursorMode {
        match self {
            Self::Interactive | Self::Text => CursorMode::Emphasized,
            Self::Other => CursorMode::Normal,
        }
    }
}

/// The bits of a hovered element needed for classification.
#[derive(Debug, Clone, Default)]
pub struct TargetInfo {
    pub tag: String,
    pub classes: Vec<String>,
    /// Computed `cursor` style, if any.
    pub cursor: Option<String>,
}

impl PointerTargets {
    pub fn classify(&self, target: &TargetInfo) -> TargetKind {
        let tag = target.tag.to_ascii_lowercase();
        let custom_cursor = target
            .cursor
            .as_deref()
            .map(str::trim)
            .is_some_and(|c| !c.is_empty() && !self.passive_cursors.iter().any(|p| p == c));
        if self.interactive_tags.iter().any(|t| *t == tag)
            || target
                .classes
                .iter()
                .any(|c| self.interactive_classes.contains(c))
            || custom_cursor
        {
            TargetKind::Interactive
        } else if self.text_tags.iter().any(|t| *t == tag) {
            TargetKind::Text
        } else {
            TargetKind::Other
        }
    }
}

/// Lead cursor state: position plus the two-state emphasis machine.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CursorState {
    pub position: CursorPoint,
    pub mode: CursorMode,
}

impl CursorState {
    pub fn move_to(&mut self, point: CursorPoint) {
        self.position = point;
    }

    /// Mode follows the latest hover target only; there is no hysteresis.
    pub fn hover(&mut self, kind: TargetKind) -> CursorMode {
        self.mode = kind.cursor_mode();
        self.mode
    }

    pub fn scale(&self, config: &InteractionConfig) -> f64 {
        match self.mode {
            CursorMode::Normal => 1.0,
            CursorMode::Emphasized => config.emphasized_scale,
        }
    }
}

pub fn trail_opacity(config: &InteractionConfig, index: usize) -> f64 {
    (config.trail_base_opacity - index as f64 * config.trail_opacity_step).max(0.0)
}

pub fn trail_opacities(config: &InteractionConfig) -> Vec<f64> {
    (0..config.trail_len)
        .map(|i| trail_opacity(config, i))
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct PendingMove {
    due: f64,
    index: usize,
    point: CursorPoint,
}

/// Delayed trail updates, applied from a single frame loop.
///
/// Each pointer move schedules segment `i` to receive the coordinates
/// `(i + 1) * trail_step_ms` later. Entries are applied in due order, so a
/// later move always overwrites an earlier one for the same segment.
#[derive(Debug, Clone)]
pub struct TrailScheduler {
    step_ms: f64,
    positions: Vec<CursorPoint>,
    pending: VecDeque<PendingMove>,
}

impl TrailScheduler {
    pub fn new(config: &InteractionConfig) -> Self {
        Self {
            step_ms: config.trail_step_ms,
            positions: vec![CursorPoint::default(); config.trail_len],
            pending: VecDeque::new(),
        }
    }

    pub fn positions(&self) -> &[CursorPoint] {
        &self.positions
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    pub fn push_move(&mut self, now: f64, point: CursorPoint) {
        for index in 0..self.positions.len() {
            let pending = PendingMove {
                due: now + (index + 1) as f64 * self.step_ms,
                index,
                point,
            };
            // moves arrive in time order, so only the tail can be out of place
            let at = self
                .pending
                .iter()
                .rposition(|p| p.due <= pending.due)
                .map(|i| i + 1)
                .unwrap_or(0);
            self.pending.insert(at, pending);
        }
    }

    /// Applies every update due at `now`; returns whether anything moved.
    pub fn advance(&mut self, now: f64) -> bool {
        let mut changed = false;
        while let Some(next) = self.pending.front() {
            if next.due > now {
                break;
            }
            let next = *next;
            self.pending.pop_front();
            if let Some(slot) = self.positions.get_mut(next.index) {
                *slot = next.point;
                changed = true;
            }
        }
        changed
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info(tag: &str, classes: &[&str], cursor: Option<&str>) -> TargetInfo {
        TargetInfo {
            tag: tag.to_string(),
            classes: classes.iter().map(|c| c.to_string()).collect(),
            cursor: cursor.map(str::to_string),
        }
    }

    #[test]
    fn test_trail_opacities() {
        let config = InteractionConfig::default();
        let expected = [0.6, 0.5, 0.4, 0.3, 0.2];
        let actual = trail_opacities(&config);
        assert_eq!(actual.len(), expected.len());
        for (a, e) in actual.iter().zip(expected) {
            assert!((a - e).abs() < 1e-9, "{a} != {e}");
        }
    }

    #[test]
    fn test_classification() {
        let targets = PointerTargets::default();
        assert_eq!(targets.classify(&info("BUTTON", &[], None)), TargetKind::Interactive);
        assert_eq!(targets.classify(&info("a", &[], Some("pointer"))), TargetKind::Interactive);
        assert_eq!(
            targets.classify(&info("section", &["project-card"], None)),
            TargetKind::Interactive
        );
        assert_eq!(
            targets.classify(&info("img", &[], Some("pointer"))),
            TargetKind::Interactive
        );
        assert_eq!(targets.classify(&info("p", &[], Some("auto"))), TargetKind::Text);
        assert_eq!(targets.classify(&info("li", &[], None)), TargetKind::Text);
        assert_eq!(targets.classify(&info("img", &[], Some("default"))), TargetKind::Other);
        // a hidden system cursor is inherited, not a hint
        assert_eq!(targets.classify(&info("img", &[], Some("none"))), TargetKind::Other);
        assert_eq!(targets.classify(&info("img", &[], Some(""))), TargetKind::Other);
        assert_eq!(targets.classify(&info("section", &["hero"], None)), TargetKind::Other);
    }

    #[test]
    fn test_any_declared_cursor_is_interactive() {
        let targets = PointerTargets::default();
        for cursor in ["move", "text", "crosshair", "not-allowed", "help"] {
            for tag in ["img", "div"] {
                assert_eq!(
                    targets.classify(&info(tag, &[], Some(cursor))),
                    TargetKind::Interactive,
                    "{tag} with cursor: {cursor}"
                );
            }
        }
    }

    #[test]
    fn test_classification_lists_are_data() {
        let mut targets = PointerTargets::default();
        assert_eq!(targets.classify(&info("summary", &[], None)), TargetKind::Other);
        targets.interactive_tags.push("summary".to_string());
        assert_eq!(targets.classify(&info("summary", &[], None)), TargetKind::Interactive);
    }

    #[test]
    fn test_cursor_mode_has_no_hysteresis() {
        let config = InteractionConfig::default();
        let mut cursor = CursorState::default();
        assert_eq!(cursor.hover(TargetKind::Interactive), CursorMode::Emphasized);
        assert_eq!(cursor.scale(&config), 1.5);
        assert_eq!(cursor.hover(TargetKind::Other), CursorMode::Normal);
        assert_eq!(cursor.scale(&config), 1.0);
        assert_eq!(cursor.hover(TargetKind::Text), CursorMode::Emphasized);
    }

    #[test]
    fn test_trail_lag_ordering() {
        let config = InteractionConfig::default();
        let mut trail = TrailScheduler::new(&config);
        let target = CursorPoint::new(10.0, 20.0);
        trail.push_move(1000.0, target);

        assert!(!trail.advance(1039.0));
        assert!(trail.advance(1040.0));
        assert_eq!(trail.positions()[0], target);
        assert_eq!(trail.positions()[1], CursorPoint::default());

        trail.advance(1120.0);
        assert_eq!(trail.positions()[2], target);
        assert_eq!(trail.positions()[3], CursorPoint::default());

        trail.advance(1200.0);
        assert!(trail.positions().iter().all(|p| *p == target));
        assert_eq!(trail.pending(), 0);
    }

    #[test]
    fn test_trail_later_move_wins() {
        let config = InteractionConfig::default();
        let mut trail = TrailScheduler::new(&config);
        let first = CursorPoint::new(1.0, 1.0);
        let second = CursorPoint::new(2.0, 2.0);
        trail.push_move(0.0, first);
        trail.push_move(10.0, second);
        assert_eq!(trail.pending(), 10);

        trail.advance(45.0);
        assert_eq!(trail.positions()[0], first);
        trail.advance(50.0);
        assert_eq!(trail.positions()[0], second);

        trail.advance(1000.0);
        assert!(trail.positions().iter().all(|p| *p == second));
    }

    #[test]
    fn test_trail_clear_drops_pending() {
        let config = InteractionConfig::default();
        let mut trail = TrailScheduler::new(&config);
        trail.push_move(0.0, CursorPoint::new(5.0, 5.0));
        trail.clear();
        assert!(!trail.advance(1000.0));
        assert!(trail.positions().iter().all(|p| *p == CursorPoint::default()));
    }
}
