use crate::config;

/// A visual pose an element can rest in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub opacity: f64,
    pub x: f64,
    pub y: f64,
    pub scale: f64,
    pub rotate: f64,
}

impl Pose {
    pub const REST: Pose = Pose {
        opacity: 1.0,
        x: 0.0,
        y: 0.0,
        scale: 1.0,
        rotate: 0.0,
    };

    pub fn to_css(&self) -> String {
        format!(
            "opacity: {}; transform: translate({}px, {}px) scale({}) rotate({}deg);",
            self.opacity, self.x, self.y, self.scale, self.rotate
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    EaseOut,
    /// Default curve used when a variant does not name one.
    Smooth,
}

impl Easing {
    pub fn as_css(&self) -> &'static str {
        match self {
            Easing::EaseOut => "ease-out",
            Easing::Smooth => "cubic-bezier(0.25, 0.1, 0.25, 1)",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub duration: f64,
    pub delay: f64,
    pub easing: Easing,
}

impl Transition {
    pub const fn new(duration: f64, easing: Easing) -> Self {
        Self { duration, delay: 0.0, easing }
    }

    pub fn delayed(self, delay: f64) -> Self {
        Self { delay, ..self }
    }

    pub fn to_css(&self) -> String {
        format!(
            "transition: opacity {d}s {e} {w}s, transform {d}s {e} {w}s;",
            d = self.duration,
            e = self.easing.as_css(),
            // stagger sums like 0.1 + 0.2 drift; keep the CSS at millisecond precision
            w = (self.delay * 1000.0).round() / 1000.0,
        )
    }
}

/// Hidden and visible poses plus the transition between them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Variant {
    pub hidden: Pose,
    pub visible: Pose,
    pub transition: Transition,
}

impl Variant {
    /// Inline style for the element; the transition only matters once
    /// `visible` flips, so it is emitted in both states.
    pub fn style(&self, visible: bool, delay: f64) -> String {
        let pose = if visible { self.visible } else { self.hidden };
        format!("{} {}", pose.to_css(), self.transition.delayed(delay).to_css())
    }
}

pub const FADE_IN_UP: Variant = Variant {
    hidden: Pose { opacity: 0.0, y: 60.0, ..Pose::REST },
    visible: Pose::REST,
    transition: Transition::new(config::FADE_IN_UP_SECS, Easing::EaseOut),
};

pub const SCALE_IN: Variant = Variant {
    hidden: Pose { opacity: 0.0, scale: 0.8, ..Pose::REST },
    visible: Pose::REST,
    transition: Transition::new(config::SCALE_IN_SECS, Easing::Smooth),
};

pub const SLIDE_IN_LEFT: Variant = Variant {
    hidden: Pose { opacity: 0.0, x: -100.0, ..Pose::REST },
    visible: Pose::REST,
    transition: Transition::new(config::SLIDE_IN_SECS, Easing::Smooth),
};

pub const SLIDE_IN_RIGHT: Variant = Variant {
    hidden: Pose { opacity: 0.0, x: 100.0, ..Pose::REST },
    visible: Pose::REST,
    transition: Transition::new(config::SLIDE_IN_SECS, Easing::Smooth),
};

/// Section headings.
pub const RISE_IN: Variant = Variant {
    hidden: Pose { opacity: 0.0, y: 50.0, ..Pose::REST },
    visible: Pose::REST,
    transition: Transition::new(config::RISE_IN_SECS, Easing::Smooth),
};

/// Sequential delays for the children of a group.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stagger {
    pub delay_children: f64,
    pub stagger_children: f64,
}

impl Stagger {
    pub const DEFAULT: Stagger = Stagger {
        delay_children: config::DELAY_CHILDREN_SECS,
        stagger_children: config::STAGGER_CHILDREN_SECS,
    };

    pub fn delay_for(&self, index: usize) -> f64 {
        self.delay_children + self.stagger_children * index as f64
    }
}

impl Default for Stagger {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stagger_delays_increase_per_child() {
        let stagger = Stagger::default();
        let delays: Vec<f64> = (0..4).map(|i| stagger.delay_for(i)).collect();
        let expected = [0.1, 0.3, 0.5, 0.7];
        for (got, want) in delays.iter().zip(expected.iter()) {
            assert!((got - want).abs() < 1e-9, "{} != {}", got, want);
        }
    }

    #[test]
    fn test_hidden_and_visible_poses() {
        assert_eq!(FADE_IN_UP.hidden.y, 60.0);
        assert_eq!(FADE_IN_UP.hidden.opacity, 0.0);
        assert_eq!(SCALE_IN.hidden.scale, 0.8);
        assert_eq!(SLIDE_IN_LEFT.hidden.x, -100.0);
        assert_eq!(SLIDE_IN_RIGHT.hidden.x, 100.0);
        for variant in [FADE_IN_UP, SCALE_IN, SLIDE_IN_LEFT, SLIDE_IN_RIGHT, RISE_IN] {
            assert_eq!(variant.visible, Pose::REST);
        }
    }

    #[test]
    fn test_style_switches_pose_and_keeps_timing() {
        let hidden = FADE_IN_UP.style(false, 0.3);
        let shown = FADE_IN_UP.style(true, 0.3);
        assert!(hidden.starts_with("opacity: 0;"));
        assert!(hidden.contains("translate(0px, 60px)"));
        assert!(shown.starts_with("opacity: 1;"));
        assert!(shown.contains("translate(0px, 0px) scale(1)"));
        assert!(shown.contains("opacity 0.8s ease-out 0.3s"));
    }
}
