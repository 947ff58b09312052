use std::str::FromStr;

use super::config::InteractionConfig;

/// Attribute that opts an element into parallax, e.g. `data-parallax="hero"`.
pub const PARALLAX_ATTR: &str = "data-parallax";
pub const PARALLAX_PROPERTY: &str = "--parallax-offset";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParallaxLayer {
    Hero,
    Section,
    Card,
}

impl FromStr for ParallaxLayer {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hero" => Ok(Self::Hero),
            "section" => Ok(Self::Section),
            "card" => Ok(Self::Card),
            _ => Err(()),
        }
    }
}

pub struct ParallaxEngine<'c> {
    config: &'c InteractionConfig,
}

impl<'c> ParallaxEngine<'c> {
    pub fn new(config: &'c InteractionConfig) -> Self {
        Self { config }
    }

    pub fn factor(&self, layer: ParallaxLayer) -> f64 {
        let c = self.config;
        match layer {
            ParallaxLayer::Hero => c.parallax_hero * c.parallax_base,
            ParallaxLayer::Section => c.parallax_section * c.parallax_base,
            ParallaxLayer::Card => c.parallax_card,
        }
    }

    /// Offset for an element whose bounding box starts `rect_top` pixels below
    /// the viewport top. Stateless, so repeated ticks never accumulate.
    pub fn offset(&self, layer: ParallaxLayer, rect_top: f64) -> f64 {
        rect_top * self.factor(layer)
    }

    /// Same as [`offset`](Self::offset) but from the raw attribute value.
    /// Unknown layers yield `None` and are left untouched.
    pub fn offset_for_tag(&self, tag: &str, rect_top: f64) -> Option<f64> {
        tag.parse().ok().map(|layer| self.offset(layer, rect_top))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_offsets_scrolled_past_top() {
        let config = InteractionConfig::default();
        let engine = ParallaxEngine::new(&config);
        assert!(close(engine.offset(ParallaxLayer::Hero, -200.0), -15.0));
        assert!(close(engine.offset(ParallaxLayer::Section, -200.0), -9.0));
        assert!(close(engine.offset(ParallaxLayer::Card, -200.0), -10.0));
    }

    #[test]
    fn test_offset_is_proportional_and_stateless() {
        let config = InteractionConfig::default();
        let engine = ParallaxEngine::new(&config);
        assert_eq!(engine.offset(ParallaxLayer::Hero, 0.0), 0.0);
        let once = engine.offset(ParallaxLayer::Section, 400.0);
        for _ in 0..10 {
            assert_eq!(engine.offset(ParallaxLayer::Section, 400.0), once);
        }
        assert!(close(engine.offset(ParallaxLayer::Section, 800.0), once * 2.0));
    }

    #[test]
    fn test_unknown_tag_ignored() {
        let config = InteractionConfig::default();
        let engine = ParallaxEngine::new(&config);
        assert_eq!(engine.offset_for_tag("banner", 100.0), None);
        assert!(engine.offset_for_tag("card", 100.0).is_some());
    }
}
