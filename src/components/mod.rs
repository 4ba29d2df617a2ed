pub mod analog_stick;
pub mod app;
pub mod dpad;
pub mod menu_buttons;
pub mod overlay;
pub mod shoulder_buttons;
pub mod touch_button;
