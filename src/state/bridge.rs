// Active-key bookkeeping for the overlay, kept free of DOM types so the
// transition logic is unit-testable. Components dispatch the returned key
// edges via util::simulate_key.

use crate::model::key_for;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputBridge {
    active: BTreeMap<&'static str, bool>,
    enabled: bool,
}

impl InputBridge {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks `button_id` pressed and returns the key needing a key-down.
    /// No-op when already pressed: touch APIs can deliver duplicate start
    /// notifications, and exactly one logical edge per physical edge must
    /// reach the keyboard handler. Unmapped buttons track state but return
    /// `None`.
    pub fn press(&mut self, button_id: &'static str) -> Option<&'static str> {
        if self.active.get(button_id).copied().unwrap_or(false) {
            return None;
        }
        self.active.insert(button_id, true);
        key_for(button_id)
    }

    /// Marks `button_id` released and returns the key needing a key-up.
    /// No-op when not currently pressed.
    pub fn release(&mut self, button_id: &'static str) -> Option<&'static str> {
        if !self.active.get(button_id).copied().unwrap_or(false) {
            return None;
        }
        self.active.insert(button_id, false);
        key_for(button_id)
    }

    pub fn is_pressed(&self, button_id: &str) -> bool {
        self.active.get(button_id).copied().unwrap_or(false)
    }

    pub fn pressed_count(&self) -> usize {
        self.active.values().filter(|v| **v).count()
    }

    pub fn enable(&mut self) {
        self.enabled = true;
    }

    /// Hides the overlay and force-releases every pressed button, so the
    /// player never switches back to physical input with a key stuck down.
    /// Returns the keys needing a key-up.
    pub fn disable(&mut self) -> Vec<&'static str> {
        self.enabled = false;
        let pressed: Vec<&'static str> = self
            .active
            .iter()
            .filter(|(_, down)| **down)
            .map(|(id, _)| *id)
            .collect();
        pressed.into_iter().filter_map(|id| self.release(id)).collect()
    }

    /// Flips enabled state; returns forced key-ups when turning off.
    pub fn toggle(&mut self) -> Vec<&'static str> {
        if self.enabled {
            self.disable()
        } else {
            self.enable();
            Vec::new()
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_is_idempotent() {
        let mut bridge = InputBridge::new();
        assert_eq!(bridge.press("a"), Some("h"));
        assert_eq!(bridge.press("a"), None);
        assert!(bridge.is_pressed("a"));
    }

    #[test]
    fn release_without_press_emits_nothing() {
        let mut bridge = InputBridge::new();
        assert_eq!(bridge.release("b"), None);
        assert!(!bridge.is_pressed("b"));
    }

    #[test]
    fn press_release_press_emits_three_edges() {
        let mut bridge = InputBridge::new();
        assert_eq!(bridge.press("l2"), Some("r"));
        assert_eq!(bridge.release("l2"), Some("r"));
        assert_eq!(bridge.press("l2"), Some("r"));
    }

    #[test]
    fn unmapped_button_tracks_state_silently() {
        let mut bridge = InputBridge::new();
        assert_eq!(bridge.press("mystery"), None);
        assert!(bridge.is_pressed("mystery"));
        assert_eq!(bridge.release("mystery"), None);
        assert!(!bridge.is_pressed("mystery"));
    }

    #[test]
    fn disable_force_releases_everything() {
        let mut bridge = InputBridge::new();
        bridge.enable();
        bridge.press("a");
        bridge.press("up");
        bridge.press("l_x_plus");
        let ups = bridge.disable();
        assert_eq!(ups.len(), 3);
        assert!(ups.contains(&"h"));
        assert!(ups.contains(&"ArrowUp"));
        assert!(ups.contains(&"d"));
        assert_eq!(bridge.pressed_count(), 0);
        assert!(!bridge.is_enabled());
    }

    #[test]
    fn disable_skips_unmapped_but_still_clears_them() {
        let mut bridge = InputBridge::new();
        bridge.enable();
        bridge.press("a");
        bridge.press("mystery");
        let ups = bridge.disable();
        assert_eq!(ups, vec!["h"]);
        assert_eq!(bridge.pressed_count(), 0);
    }

    #[test]
    fn toggle_twice_restores_state() {
        let mut bridge = InputBridge::new();
        bridge.enable();
        bridge.toggle();
        assert!(!bridge.is_enabled());
        bridge.toggle();
        assert!(bridge.is_enabled());
    }

    #[test]
    fn toggle_off_returns_forced_releases() {
        let mut bridge = InputBridge::new();
        bridge.enable();
        bridge.press("start");
        let ups = bridge.toggle();
        assert_eq!(ups, vec!["Enter"]);
        assert!(bridge.toggle().is_empty());
    }
}
