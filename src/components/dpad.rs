use super::touch_button::TouchButton;
use crate::state::InputBridge;
use std::cell::RefCell;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct DPadProps {
    pub left: AttrValue,
    pub bottom: AttrValue,
    pub bridge: Rc<RefCell<InputBridge>>,
}

/// Four independent directional zones plus a decorative center. No diagonal
/// compound logic; each zone is its own button.
#[function_component(DPad)]
pub fn dpad(props: &DPadProps) -> Html {
    let directions: [(&'static str, &'static str, &'static str); 4] = [
        ("up", "touch-dpad-up", "▲"),
        ("down", "touch-dpad-down", "▼"),
        ("left", "touch-dpad-left", "◄"),
        ("right", "touch-dpad-right", "►"),
    ];

    let style = format!(
        "position:absolute; left:{}; bottom:{}; pointer-events:auto;",
        props.left, props.bottom
    );
    html! {
        <div class="touch-dpad" style={style}>
            {
                directions.iter().map(|(id, class, label)| html! {
                    <TouchButton
                        key={*id}
                        id={*id}
                        label={*label}
                        class={classes!("touch-dpad-btn", *class)}
                        bridge={props.bridge.clone()}
                    />
                }).collect::<Html>()
            }
            <div class="touch-dpad-center"></div>
        </div>
    }
}
