use super::touch_button::TouchButton;
use crate::state::InputBridge;
use std::cell::RefCell;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct MenuButtonsProps {
    pub bridge: Rc<RefCell<InputBridge>>,
}

/// Emulator shortcuts row. The `screenshot` shortcut is mapped but has no
/// widget in the default layout, matching the shipped control set.
#[function_component(MenuButtons)]
pub fn menu_buttons(props: &MenuButtonsProps) -> Html {
    let buttons: [(&'static str, &'static str); 3] = [
        ("menu", "MENU"),
        ("save_state", "SAVE"),
        ("load_state", "LOAD"),
    ];

    html! {
        <div
            class="touch-menu-buttons"
            style="position:absolute; top:8px; left:50%; transform:translateX(-50%); display:flex; gap:8px; pointer-events:auto;"
        >
            {
                buttons.iter().map(|(id, label)| html! {
                    <TouchButton
                        key={*id}
                        id={*id}
                        label={*label}
                        class={classes!("touch-menu-btn")}
                        bridge={props.bridge.clone()}
                    />
                }).collect::<Html>()
            }
        </div>
    }
}
