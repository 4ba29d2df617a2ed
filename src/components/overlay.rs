use super::analog_stick::AnalogStick;
use super::dpad::DPad;
use super::menu_buttons::MenuButtons;
use super::shoulder_buttons::ShoulderButtons;
use super::touch_button::TouchButton;
use crate::model::StickSide;
use crate::state::InputBridge;
use std::cell::RefCell;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct TouchOverlayProps {
    pub bridge: Rc<RefCell<InputBridge>>,
    pub enabled: bool,
}

fn face_style(left: &str, bottom: &str) -> String {
    format!("position:absolute; left:{left}; bottom:{bottom}; pointer-events:auto;")
}

/// Default control layout: shortcut row, shoulder groups, d-pad and left
/// stick on the left, face diamond and right stick on the right, start and
/// select at the bottom center. Built once; enabled/disabled only toggles
/// visibility (forced key releases happen in the bridge, not here).
#[function_component(TouchOverlay)]
pub fn touch_overlay(props: &TouchOverlayProps) -> Html {
    let class = classes!("touch-controls-container", props.enabled.then_some("active"));
    let style = if props.enabled {
        "position:fixed; inset:0; pointer-events:none; z-index:40;"
    } else {
        "display:none;"
    };

    html! {
        <div id="touch-controls-container" class={class} style={style}>
            <MenuButtons bridge={props.bridge.clone()} />

            <ShoulderButtons
                side="left"
                buttons={vec![("l", "L"), ("l2", "L2")]}
                bridge={props.bridge.clone()}
            />
            <ShoulderButtons
                side="right"
                buttons={vec![("r2", "R2"), ("r", "R")]}
                bridge={props.bridge.clone()}
            />

            <DPad left="20px" bottom="120px" bridge={props.bridge.clone()} />
            <AnalogStick side={StickSide::Left} left="20px" bottom="300px" bridge={props.bridge.clone()} />

            <TouchButton id="y" label="Y" class={classes!("touch-button")}
                style={face_style("calc(100% - 180px)", "200px")} bridge={props.bridge.clone()} />
            <TouchButton id="x" label="X" class={classes!("touch-button")}
                style={face_style("calc(100% - 140px)", "240px")} bridge={props.bridge.clone()} />
            <TouchButton id="b" label="B" class={classes!("touch-button")}
                style={face_style("calc(100% - 220px)", "240px")} bridge={props.bridge.clone()} />
            <TouchButton id="a" label="A" class={classes!("touch-button")}
                style={face_style("calc(100% - 180px)", "280px")} bridge={props.bridge.clone()} />

            <AnalogStick side={StickSide::Right} left="calc(100% - 140px)" bottom="80px" bridge={props.bridge.clone()} />

            <TouchButton id="start" label="START" class={classes!("touch-button")}
                style={format!("{} width:80px; border-radius:8px;", face_style("calc(50% + 40px)", "20px"))}
                bridge={props.bridge.clone()} />
            <TouchButton id="select" label="SELECT" class={classes!("touch-button")}
                style={format!("{} width:80px; border-radius:8px;", face_style("calc(50% - 120px)", "20px"))}
                bridge={props.bridge.clone()} />
        </div>
    }
}
