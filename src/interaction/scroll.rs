use super::config::InteractionConfig;

/// Layout of one navigable section as measured from the DOM.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionGeometry<'a> {
    pub id: &'a str,
    pub top: f64,
    pub height: f64,
}

/// What the layout needs to know after every scroll tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollSnapshot<'a> {
    pub active: &'a str,
    pub show_scroll_top: bool,
    pub nav_scrolled: bool,
}

pub struct ScrollTracker<'c> {
    config: &'c InteractionConfig,
}

impl<'c> ScrollTracker<'c> {
    pub fn new(config: &'c InteractionConfig) -> Self {
        Self { config }
    }

    /// Picks the last section whose box contains the probe line, or keeps
    /// `current` when the probe falls outside every section.
    pub fn active_section<'a>(
        &self,
        scroll_y: f64,
        sections: &[SectionGeometry<'a>],
        current: &'a str,
    ) -> &'a str {
        let probe = scroll_y + self.config.section_probe_offset;
        sections
            .iter()
            .rev()
            .find(|s| s.top <= probe && probe < s.top + s.height)
            .map(|s| s.id)
            .unwrap_or(current)
    }

    pub fn show_scroll_top(&self, scroll_y: f64) -> bool {
        scroll_y > self.config.scroll_top_threshold
    }

    pub fn nav_scrolled(&self, scroll_y: f64) -> bool {
        scroll_y > self.config.nav_scrolled_threshold
    }

    pub fn snapshot<'a>(
        &self,
        scroll_y: f64,
        sections: &[SectionGeometry<'a>],
        current: &'a str,
    ) -> ScrollSnapshot<'a> {
        ScrollSnapshot {
            active: self.active_section(scroll_y, sections, current),
            show_scroll_top: self.show_scroll_top(scroll_y),
            nav_scrolled: self.nav_scrolled(scroll_y),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> Vec<SectionGeometry<'static>> {
        vec![
            SectionGeometry { id: "home", top: 0.0, height: 800.0 },
            SectionGeometry { id: "about", top: 800.0, height: 1200.0 },
            SectionGeometry { id: "projects", top: 2000.0, height: 900.0 },
            SectionGeometry { id: "contact", top: 2900.0, height: 700.0 },
        ]
    }

    #[test]
    fn test_active_section_uses_probe_offset() {
        let config = InteractionConfig::default();
        let tracker = ScrollTracker::new(&config);
        let sections = layout();

        assert_eq!(tracker.active_section(0.0, &sections, "home"), "home");
        // 699 + 100 is still inside home
        assert_eq!(tracker.active_section(699.0, &sections, "home"), "home");
        assert_eq!(tracker.active_section(700.0, &sections, "home"), "about");
        assert_eq!(tracker.active_section(2850.0, &sections, "about"), "contact");
    }

    #[test]
    fn test_active_section_unchanged_outside_sections() {
        let config = InteractionConfig::default();
        let tracker = ScrollTracker::new(&config);
        let sections = layout();

        assert_eq!(tracker.active_section(5000.0, &sections, "projects"), "projects");
        assert_eq!(tracker.active_section(100.0, &[], "about"), "about");
    }

    #[test]
    fn test_active_section_prefers_last_overlap() {
        let config = InteractionConfig::default();
        let tracker = ScrollTracker::new(&config);
        let sections = vec![
            SectionGeometry { id: "outer", top: 0.0, height: 1000.0 },
            SectionGeometry { id: "inner", top: 200.0, height: 200.0 },
        ];
        assert_eq!(tracker.active_section(150.0, &sections, "outer"), "inner");
    }

    #[test]
    fn test_active_section_always_declared_or_previous() {
        let config = InteractionConfig::default();
        let tracker = ScrollTracker::new(&config);
        let sections = layout();
        let ids: Vec<&str> = sections.iter().map(|s| s.id).collect();

        let mut current = "home";
        for y in (0..4000).step_by(37) {
            let next = tracker.active_section(y as f64, &sections, current);
            assert!(ids.contains(&next) || next == current);
            current = next;
        }
    }

    #[test]
    fn test_scroll_top_boundary() {
        let config = InteractionConfig::default();
        let tracker = ScrollTracker::new(&config);
        assert!(!tracker.show_scroll_top(0.0));
        assert!(!tracker.show_scroll_top(300.0));
        assert!(tracker.show_scroll_top(301.0));
    }

    #[test]
    fn test_snapshot() {
        let config = InteractionConfig::default();
        let tracker = ScrollTracker::new(&config);
        let snap = tracker.snapshot(60.0, &layout(), "home");
        assert_eq!(snap.active, "home");
        assert!(!snap.show_scroll_top);
        assert!(snap.nav_scrolled);
    }
}
