use crate::model::{StickSide, stick_button_id};
use crate::state::{InputBridge, StickGeometry, StickState};
use crate::util::simulate_key;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{HtmlElement, Touch, TouchEvent};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct AnalogStickProps {
    pub side: StickSide,
    pub left: AttrValue,
    pub bottom: AttrValue,
    pub bridge: Rc<RefCell<InputBridge>>,
}

/// Virtual joystick. Tracks at most one touch at a time: the first touch is
/// claimed, later ones are ignored until it ends. Moves reposition the knob
/// (clamped to the travel radius) and diff the per-axis threshold flags into
/// presses/releases of the compound stick buttons.
#[function_component(AnalogStick)]
pub fn analog_stick(props: &AnalogStickProps) -> Html {
    let widget_ref = use_node_ref();
    let knob_ref = use_node_ref();
    let stick = use_mut_ref(StickState::default);

    {
        let widget_ref = widget_ref.clone();
        let knob_ref = knob_ref.clone();
        let stick = stick.clone();
        let bridge = props.bridge.clone();
        let side = props.side;
        use_effect_with((), move |_| {
            let widget: HtmlElement = widget_ref
                .cast::<HtmlElement>()
                .expect("stick widget not attached to an element");
            let knob: HtmlElement = knob_ref
                .cast::<HtmlElement>()
                .expect("stick knob not attached to an element");
            let geom = StickGeometry::default();

            // Recompute displacement for the claimed touch.
            let apply: Rc<dyn Fn(&Touch)> = {
                let widget = widget.clone();
                let knob = knob.clone();
                let stick = stick.clone();
                let bridge = bridge.clone();
                Rc::new(move |touch| {
                    let rect = widget.get_bounding_client_rect();
                    let local_x = touch.client_x() as f64 - rect.left();
                    let local_y = touch.client_y() as f64 - rect.top();
                    let frame = stick.borrow_mut().update(&geom, local_x, local_y);
                    let _ = knob.style().set_property(
                        "transform",
                        &format!(
                            "translate(calc(-50% + {}px), calc(-50% + {}px))",
                            frame.knob_x, frame.knob_y
                        ),
                    );
                    let mut b = bridge.borrow_mut();
                    for dir in frame.pressed {
                        if let Some(key) = b.press(stick_button_id(side, dir)) {
                            simulate_key(key, true);
                        }
                    }
                    for dir in frame.released {
                        if let Some(key) = b.release(stick_button_id(side, dir)) {
                            simulate_key(key, false);
                        }
                    }
                })
            };

            // Recenter the knob, drop the claim, release active directions.
            let reset: Rc<dyn Fn()> = {
                let knob = knob.clone();
                let stick = stick.clone();
                let bridge = bridge.clone();
                Rc::new(move || {
                    let _ = knob
                        .style()
                        .set_property("transform", "translate(-50%, -50%)");
                    let released = stick.borrow_mut().release();
                    let mut b = bridge.borrow_mut();
                    for dir in released {
                        if let Some(key) = b.release(stick_button_id(side, dir)) {
                            simulate_key(key, false);
                        }
                    }
                })
            };

            let start_cb = {
                let stick = stick.clone();
                let apply = apply.clone();
                Closure::wrap(Box::new(move |e: TouchEvent| {
                    e.prevent_default();
                    if let Some(touch) = e.changed_touches().item(0) {
                        let claimed = stick.borrow_mut().try_claim(touch.identifier());
                        if claimed {
                            apply(&touch);
                        }
                    }
                }) as Box<dyn FnMut(_)>)
            };
            let move_cb = {
                let stick = stick.clone();
                let apply = apply.clone();
                Closure::wrap(Box::new(move |e: TouchEvent| {
                    e.prevent_default();
                    let touches = e.changed_touches();
                    for i in 0..touches.length() {
                        if let Some(touch) = touches.item(i) {
                            let claimed = stick.borrow().is_claimed(touch.identifier());
                            if claimed {
                                apply(&touch);
                                break;
                            }
                        }
                    }
                }) as Box<dyn FnMut(_)>)
            };
            let end_cb = {
                let stick = stick.clone();
                let reset = reset.clone();
                Closure::wrap(Box::new(move |e: TouchEvent| {
                    e.prevent_default();
                    let touches = e.changed_touches();
                    for i in 0..touches.length() {
                        if let Some(touch) = touches.item(i) {
                            let claimed = stick.borrow().is_claimed(touch.identifier());
                            if claimed {
                                reset();
                                break;
                            }
                        }
                    }
                }) as Box<dyn FnMut(_)>)
            };
            // Cancel resets unconditionally; a lost touch must never leave a
            // direction stuck pressed.
            let cancel_cb = {
                let reset = reset.clone();
                Closure::wrap(Box::new(move |e: TouchEvent| {
                    e.prevent_default();
                    reset();
                }) as Box<dyn FnMut(_)>)
            };

            widget
                .add_event_listener_with_callback("touchstart", start_cb.as_ref().unchecked_ref())
                .ok();
            widget
                .add_event_listener_with_callback("touchmove", move_cb.as_ref().unchecked_ref())
                .ok();
            widget
                .add_event_listener_with_callback("touchend", end_cb.as_ref().unchecked_ref())
                .ok();
            widget
                .add_event_listener_with_callback("touchcancel", cancel_cb.as_ref().unchecked_ref())
                .ok();

            move || {
                let _ = widget.remove_event_listener_with_callback(
                    "touchstart",
                    start_cb.as_ref().unchecked_ref(),
                );
                let _ = widget.remove_event_listener_with_callback(
                    "touchmove",
                    move_cb.as_ref().unchecked_ref(),
                );
                let _ = widget.remove_event_listener_with_callback(
                    "touchend",
                    end_cb.as_ref().unchecked_ref(),
                );
                let _ = widget.remove_event_listener_with_callback(
                    "touchcancel",
                    cancel_cb.as_ref().unchecked_ref(),
                );
            }
        });
    }

    let style = format!(
        "position:absolute; left:{}; bottom:{}; width:120px; height:120px; border-radius:50%; pointer-events:auto;",
        props.left, props.bottom
    );
    html! {
        <div ref={widget_ref} class="touch-analog" style={style} data-analog-id={props.side.id()}>
            <div
                ref={knob_ref}
                class="touch-analog-stick"
                style="position:absolute; left:50%; top:50%; transform:translate(-50%, -50%);"
            ></div>
        </div>
    }
}
