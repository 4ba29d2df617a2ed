use super::touch_button::TouchButton;
use crate::state::InputBridge;
use std::cell::RefCell;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ShoulderButtonsProps {
    /// "left" or "right"; picked up by the stylesheet as
    /// `touch-shoulder-left` / `touch-shoulder-right`.
    pub side: AttrValue,
    pub buttons: Vec<(&'static str, &'static str)>,
    pub bridge: Rc<RefCell<InputBridge>>,
}

#[function_component(ShoulderButtons)]
pub fn shoulder_buttons(props: &ShoulderButtonsProps) -> Html {
    let style = format!(
        "position:absolute; top:8px; {}:8px; display:flex; gap:8px; pointer-events:auto;",
        props.side
    );
    html! {
        <div class={classes!("touch-shoulder-buttons", format!("touch-shoulder-{}", props.side))} style={style}>
            {
                props.buttons.iter().map(|(id, label)| html! {
                    <TouchButton
                        key={*id}
                        id={*id}
                        label={*label}
                        class={classes!("touch-shoulder-btn")}
                        bridge={props.bridge.clone()}
                    />
                }).collect::<Html>()
            }
        </div>
    }
}
