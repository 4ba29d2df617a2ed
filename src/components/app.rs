use super::overlay::TouchOverlay;
use crate::state::InputBridge;
use crate::util::{clog, is_touch_device, simulate_key};
use yew::prelude::*;

/// Root component: owns the shared active-key table and the enabled flag.
/// The overlay is built once at mount and auto-enabled on touch-capable
/// devices; the toggle button flips it manually.
#[function_component(App)]
pub fn app() -> Html {
    let bridge = use_mut_ref(InputBridge::new);
    let enabled = use_state(|| false);

    {
        let bridge = bridge.clone();
        let enabled = enabled.clone();
        use_effect_with((), move |_| {
            if is_touch_device() {
                bridge.borrow_mut().enable();
                enabled.set(true);
                clog("touch controls: touch device detected, overlay enabled");
            }
            || ()
        });
    }

    let on_toggle = {
        let bridge = bridge.clone();
        let enabled = enabled.clone();
        Callback::from(move |_: yew::events::MouseEvent| {
            // Turning off force-releases every pressed button so no key is
            // left logically down when switching back to physical input.
            let key_ups = bridge.borrow_mut().toggle();
            for key in key_ups {
                simulate_key(key, false);
            }
            let now_enabled = bridge.borrow().is_enabled();
            clog(if now_enabled {
                "touch controls: enabled"
            } else {
                "touch controls: disabled"
            });
            enabled.set(now_enabled);
        })
    };

    html! {
        <div id="root">
            <button id="toggletouchcontrols" onclick={on_toggle}>
                { if *enabled { "✓ Touch Controls" } else { "Touch Controls" } }
            </button>
            <TouchOverlay bridge={bridge.clone()} enabled={*enabled} />
        </div>
    }
}
