// Analog stick tracking: one claimed touch per stick, displacement clamped
// to the travel radius, per-axis thresholds diffed into press/release edges.

use crate::model::StickDir;

/// Widget geometry. The knob travels inside a circle of `max_radius` around
/// `(center_x, center_y)`; `threshold` must stay below `max_radius` so there
/// is a dead zone near center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StickGeometry {
    pub center_x: f64,
    pub center_y: f64,
    pub max_radius: f64,
    pub threshold: f64,
}

impl Default for StickGeometry {
    fn default() -> Self {
        Self {
            center_x: 60.0,
            center_y: 60.0,
            max_radius: 35.0,
            threshold: 15.0,
        }
    }
}

/// One recomputation of the stick: where to draw the knob and which derived
/// direction buttons changed since the previous frame.
#[derive(Debug, Clone, PartialEq)]
pub struct StickFrame {
    pub knob_x: f64,
    pub knob_y: f64,
    pub pressed: Vec<StickDir>,
    pub released: Vec<StickDir>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct StickState {
    claimed: Option<i32>,
    active: [bool; 4],
}

impl StickState {
    /// Claims `touch_id` if no touch is currently tracked. Further touches
    /// on the widget are ignored until the claimed one ends.
    pub fn try_claim(&mut self, touch_id: i32) -> bool {
        if self.claimed.is_some() {
            return false;
        }
        self.claimed = Some(touch_id);
        true
    }

    pub fn is_claimed(&self, touch_id: i32) -> bool {
        self.claimed == Some(touch_id)
    }

    pub fn has_claim(&self) -> bool {
        self.claimed.is_some()
    }

    /// Recomputes displacement from widget-local touch coordinates. The
    /// center-relative vector is clamped to `max_radius` preserving its
    /// direction; each axis compares independently against the threshold,
    /// so diagonals fall out naturally.
    pub fn update(&mut self, geom: &StickGeometry, local_x: f64, local_y: f64) -> StickFrame {
        let mut x = local_x - geom.center_x;
        let mut y = local_y - geom.center_y;

        let distance = (x * x + y * y).sqrt();
        if distance > geom.max_radius {
            x = x / distance * geom.max_radius;
            y = y / distance * geom.max_radius;
        }

        let flags = [
            x < -geom.threshold,
            x > geom.threshold,
            y < -geom.threshold,
            y > geom.threshold,
        ];

        let mut pressed = Vec::new();
        let mut released = Vec::new();
        for dir in StickDir::ALL {
            let i = dir.index();
            if flags[i] && !self.active[i] {
                self.active[i] = true;
                pressed.push(dir);
            } else if !flags[i] && self.active[i] {
                self.active[i] = false;
                released.push(dir);
            }
        }

        StickFrame {
            knob_x: x,
            knob_y: y,
            pressed,
            released,
        }
    }

    /// Drops the claim and returns every direction still active, for both
    /// touchend and touchcancel. Failing to release on cancel would leave a
    /// direction stuck pressed indefinitely.
    pub fn release(&mut self) -> Vec<StickDir> {
        self.claimed = None;
        let mut released = Vec::new();
        for dir in StickDir::ALL {
            let i = dir.index();
            if self.active[i] {
                self.active[i] = false;
                released.push(dir);
            }
        }
        released
    }

    pub fn active_dirs(&self) -> Vec<StickDir> {
        StickDir::ALL
            .into_iter()
            .filter(|d| self.active[d.index()])
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geom() -> StickGeometry {
        StickGeometry::default()
    }

    // update() takes widget-local coordinates; offsetting by the center
    // yields the displacement used below.
    fn displace(state: &mut StickState, dx: f64, dy: f64) -> StickFrame {
        let g = geom();
        state.update(&g, g.center_x + dx, g.center_y + dy)
    }

    #[test]
    fn overshoot_clamps_to_max_radius() {
        let mut state = StickState::default();
        let frame = displace(&mut state, 50.0, 0.0);
        assert!((frame.knob_x - 35.0).abs() < 1e-9);
        assert!(frame.knob_y.abs() < 1e-9);
        assert_eq!(frame.pressed, vec![StickDir::XPlus]);
        assert!(frame.released.is_empty());
    }

    #[test]
    fn clamp_preserves_direction() {
        let mut state = StickState::default();
        let frame = displace(&mut state, 60.0, 80.0);
        let mag = (frame.knob_x * frame.knob_x + frame.knob_y * frame.knob_y).sqrt();
        assert!((mag - 35.0).abs() < 1e-9);
        assert!((frame.knob_y / frame.knob_x - 80.0 / 60.0).abs() < 1e-9);
    }

    #[test]
    fn dead_zone_activates_nothing() {
        let mut state = StickState::default();
        let frame = displace(&mut state, 10.0, 10.0);
        assert!(frame.pressed.is_empty());
        assert!(frame.released.is_empty());
        assert!(state.active_dirs().is_empty());
    }

    #[test]
    fn diagonal_activates_both_axes() {
        let mut state = StickState::default();
        let frame = displace(&mut state, 20.0, 20.0);
        assert_eq!(frame.pressed, vec![StickDir::XPlus, StickDir::YPlus]);
    }

    #[test]
    fn crossing_back_releases_only_the_dropped_axis() {
        let mut state = StickState::default();
        displace(&mut state, 20.0, 20.0);
        let frame = displace(&mut state, 20.0, 5.0);
        assert!(frame.pressed.is_empty());
        assert_eq!(frame.released, vec![StickDir::YPlus]);
        assert_eq!(state.active_dirs(), vec![StickDir::XPlus]);
    }

    #[test]
    fn holding_past_threshold_emits_no_repeat_edges() {
        let mut state = StickState::default();
        displace(&mut state, 25.0, 0.0);
        let frame = displace(&mut state, 30.0, 0.0);
        assert!(frame.pressed.is_empty());
        assert!(frame.released.is_empty());
    }

    #[test]
    fn negative_axes() {
        let mut state = StickState::default();
        let frame = displace(&mut state, -20.0, -20.0);
        assert_eq!(frame.pressed, vec![StickDir::XMinus, StickDir::YMinus]);
    }

    #[test]
    fn release_clears_claim_and_active_set() {
        let mut state = StickState::default();
        assert!(state.try_claim(7));
        displace(&mut state, 20.0, 20.0);
        let released = state.release();
        assert_eq!(released, vec![StickDir::XPlus, StickDir::YPlus]);
        assert!(!state.has_claim());
        assert!(state.active_dirs().is_empty());
        // second release (e.g. cancel after end) is a no-op
        assert!(state.release().is_empty());
    }

    #[test]
    fn only_first_touch_is_claimed() {
        let mut state = StickState::default();
        assert!(state.try_claim(1));
        assert!(!state.try_claim(2));
        assert!(state.is_claimed(1));
        assert!(!state.is_claimed(2));
        state.release();
        assert!(state.try_claim(2));
    }
}
