//! Pure mappings from scroll position to visual parameters.

/// Linearly maps `value` from `domain` onto `range`, clamping to the range
/// ends outside the domain.
pub fn interpolate(value: f64, domain: (f64, f64), range: (f64, f64)) -> f64 {
    let (d0, d1) = domain;
    let (r0, r1) = range;
    if value.is_nan() || d1 == d0 {
        return r0;
    }
    let t = ((value - d0) / (d1 - d0)).clamp(0.0, 1.0);
    r0 + (r1 - r0) * t
}

/// Snapshot of the document's vertical scroll state, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollMetrics {
    pub offset: f64,
    pub max: f64,
}

impl ScrollMetrics {
    pub fn new(offset: f64, scroll_height: f64, viewport_height: f64) -> Self {
        Self {
            offset,
            max: (scroll_height - viewport_height).max(0.0),
        }
    }

    /// Normalized progress in `[0, 1]`. A page that cannot scroll sits at 0.
    pub fn progress(&self) -> f64 {
        if self.max <= 0.0 || !self.offset.is_finite() {
            return 0.0;
        }
        (self.offset / self.max).clamp(0.0, 1.0)
    }
}

/// Width of the top progress bar, in percent.
pub fn progress_bar_width(p: f64) -> f64 {
    interpolate(p, (0.0, 1.0), (0.0, 100.0))
}

/// Parallax lift of the hero content, in pixels.
pub fn hero_offset_y(p: f64) -> f64 {
    interpolate(p, (0.0, 1.0), (0.0, -200.0))
}

/// Hero fades out over the first 30% of the page.
pub fn hero_opacity(p: f64) -> f64 {
    interpolate(p, (0.0, 0.3), (1.0, 0.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_interpolate_inside_domain() {
        assert!(close(interpolate(0.5, (0.0, 1.0), (0.0, 100.0)), 50.0));
        assert!(close(interpolate(0.15, (0.0, 0.3), (1.0, 0.0)), 0.5));
    }

    #[test]
    fn test_interpolate_clamps_outside_domain() {
        assert!(close(interpolate(-1.0, (0.0, 1.0), (0.0, -200.0)), 0.0));
        assert!(close(interpolate(2.0, (0.0, 1.0), (0.0, -200.0)), -200.0));
        assert!(close(interpolate(f64::NAN, (0.0, 1.0), (3.0, 4.0)), 3.0));
    }

    #[test]
    fn test_progress_stays_in_unit_range() {
        let max_scroll = 4000.0;
        for offset in [-120.0, 0.0, 1.0, 1999.5, 4000.0, 4300.0] {
            let p = ScrollMetrics::new(offset, max_scroll + 800.0, 800.0).progress();
            assert!((0.0..=1.0).contains(&p), "offset {} gave {}", offset, p);
        }
        assert!(close(ScrollMetrics::new(1000.0, 4800.0, 800.0).progress(), 0.25));
    }

    #[test]
    fn test_unscrollable_page_reports_zero() {
        let metrics = ScrollMetrics::new(0.0, 600.0, 800.0);
        assert_eq!(metrics.max, 0.0);
        assert_eq!(metrics.progress(), 0.0);
    }

    #[test]
    fn test_endpoints() {
        assert_eq!(progress_bar_width(0.0), 0.0);
        assert_eq!(hero_opacity(0.0), 1.0);
        assert_eq!(hero_offset_y(0.0), 0.0);

        assert_eq!(progress_bar_width(1.0), 100.0);
        assert_eq!(hero_opacity(1.0), 0.0);
        assert_eq!(hero_offset_y(1.0), -200.0);
    }

    #[test]
    fn test_hero_fully_faded_past_threshold() {
        assert_eq!(hero_opacity(0.3), 0.0);
        assert_eq!(hero_opacity(0.65), 0.0);
        assert!(hero_opacity(0.1) > 0.6);
    }
}
