use crate::state::InputBridge;
use crate::util::simulate_key;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{HtmlElement, TouchEvent};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct TouchButtonProps {
    pub id: &'static str,
    pub label: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub style: AttrValue,
    pub bridge: Rc<RefCell<InputBridge>>,
}

/// One tappable region bound to one button identifier. Touchstart presses,
/// touchend and touchcancel both release; the bridge debounces duplicate
/// notifications so only real edges reach the keyboard handler.
#[function_component(TouchButton)]
pub fn touch_button(props: &TouchButtonProps) -> Html {
    let node_ref = use_node_ref();
    let pressed = use_state(|| false);

    {
        let node_ref = node_ref.clone();
        let bridge = props.bridge.clone();
        let pressed = pressed.clone();
        let id = props.id;
        use_effect_with((), move |_| {
            let el: HtmlElement = node_ref
                .cast::<HtmlElement>()
                .expect("touch button not attached to an element");

            let start_cb = {
                let bridge = bridge.clone();
                let pressed = pressed.clone();
                Closure::wrap(Box::new(move |e: TouchEvent| {
                    e.prevent_default();
                    pressed.set(true);
                    if let Some(key) = bridge.borrow_mut().press(id) {
                        simulate_key(key, true);
                    }
                }) as Box<dyn FnMut(_)>)
            };
            let end_cb = {
                let bridge = bridge.clone();
                let pressed = pressed.clone();
                Closure::wrap(Box::new(move |e: TouchEvent| {
                    e.prevent_default();
                    pressed.set(false);
                    if let Some(key) = bridge.borrow_mut().release(id) {
                        simulate_key(key, false);
                    }
                }) as Box<dyn FnMut(_)>)
            };

            el.add_event_listener_with_callback("touchstart", start_cb.as_ref().unchecked_ref())
                .ok();
            el.add_event_listener_with_callback("touchend", end_cb.as_ref().unchecked_ref())
                .ok();
            // cancel must release, or the button stays stuck pressed
            el.add_event_listener_with_callback("touchcancel", end_cb.as_ref().unchecked_ref())
                .ok();

            move || {
                let _ = el.remove_event_listener_with_callback(
                    "touchstart",
                    start_cb.as_ref().unchecked_ref(),
                );
                let _ = el.remove_event_listener_with_callback(
                    "touchend",
                    end_cb.as_ref().unchecked_ref(),
                );
                let _ = el.remove_event_listener_with_callback(
                    "touchcancel",
                    end_cb.as_ref().unchecked_ref(),
                );
            }
        });
    }

    let class = classes!(props.class.clone(), (*pressed).then_some("pressed"));
    html! {
        <div ref={node_ref} class={class} style={props.style.clone()} data-button-id={props.id}>
            { props.label.clone() }
        </div>
    }
}
