use yew::prelude::*;
use yew_hooks::use_interval;

use crate::config;
use crate::motion::transform::interpolate;
use crate::motion::variants::Pose;

/// An endless linear loop through evenly spaced scale/rotate keyframes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Orbit {
    pub period: f64,
    pub scale: [f64; 3],
    pub rotate: [f64; 3],
}

impl Orbit {
    pub const PRIMARY: Orbit = Orbit {
        period: config::ORBIT_PRIMARY_PERIOD_SECS,
        scale: [1.0, 1.2, 1.0],
        rotate: [0.0, 180.0, 360.0],
    };

    pub const SECONDARY: Orbit = Orbit {
        period: config::ORBIT_SECONDARY_PERIOD_SECS,
        scale: [1.2, 1.0, 1.2],
        rotate: [360.0, 180.0, 0.0],
    };

    pub fn pose_at(&self, elapsed: f64) -> Pose {
        let phase = if self.period > 0.0 {
            elapsed.rem_euclid(self.period) / self.period
        } else {
            0.0
        };
        Pose {
            scale: keyframe(&self.scale, phase),
            rotate: keyframe(&self.rotate, phase),
            ..Pose::REST
        }
    }
}

fn keyframe(frames: &[f64], phase: f64) -> f64 {
    match frames.len() {
        0 => 0.0,
        1 => frames[0],
        n => {
            let segments = (n - 1) as f64;
            let pos = phase.clamp(0.0, 1.0) * segments;
            let i = (pos.floor() as usize).min(n - 2);
            interpolate(pos - i as f64, (0.0, 1.0), (frames[i], frames[i + 1]))
        }
    }
}

/// Seconds since mount, advanced every `tick_ms`. The interval is cleared
/// when the component unmounts.
#[hook]
pub fn use_loop_clock(tick_ms: u32) -> f64 {
    let ticks = use_mut_ref(|| 0u64);
    let elapsed = use_state_eq(|| 0.0);

    {
        let elapsed = elapsed.setter();
        use_interval(
            move || {
                let mut ticks = ticks.borrow_mut();
                *ticks += 1;
                elapsed.set(*ticks as f64 * tick_ms as f64 / 1000.0);
            },
            tick_ms,
        );
    }

    *elapsed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_orbit_keyframes() {
        let orbit = Orbit::PRIMARY;
        let start = orbit.pose_at(0.0);
        assert_eq!(start.scale, 1.0);
        assert_eq!(start.rotate, 0.0);

        let middle = orbit.pose_at(10.0);
        assert!((middle.scale - 1.2).abs() < 1e-9);
        assert!((middle.rotate - 180.0).abs() < 1e-9);

        let quarter = orbit.pose_at(5.0);
        assert!((quarter.scale - 1.1).abs() < 1e-9);
        assert!((quarter.rotate - 90.0).abs() < 1e-9);
    }

    #[test]
    fn test_orbit_repeats_every_period() {
        let orbit = Orbit::SECONDARY;
        for t in [0.0, 3.5, 12.5, 20.0] {
            let a = orbit.pose_at(t);
            let b = orbit.pose_at(t + orbit.period * 3.0);
            assert!((a.scale - b.scale).abs() < 1e-9);
            assert!((a.rotate - b.rotate).abs() < 1e-6);
        }
        assert!((orbit.pose_at(12.5).rotate - 180.0).abs() < 1e-9);
    }

    #[test]
    fn test_orbit_leaves_opacity_and_position_alone() {
        let pose = Orbit::PRIMARY.pose_at(7.3);
        assert_eq!(pose.opacity, 1.0);
        assert_eq!(pose.x, 0.0);
        assert_eq!(pose.y, 0.0);
    }
}
