use gloo_timers::callback::Timeout;
use web_sys::MouseEvent;
use yew::prelude::*;

use super::transition::Transition;
use crate::animation::StyleProps;

/// Which visual state a `Motion` element is in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Gesture {
    pub entered: bool,
    pub present: bool,
    pub hovered: bool,
    pub pressed: bool,
}

/// The target style for a gesture state: `initial` before the first frame,
/// `exit` (or `initial`) once no longer present, otherwise `animate` with
/// hover and tap overlays.
pub fn target_style(
    gesture: Gesture,
    initial: &StyleProps,
    animate: &StyleProps,
    exit: Option<&StyleProps>,
    while_hover: Option<&StyleProps>,
    while_tap: Option<&StyleProps>,
) -> StyleProps {
    if !gesture.present {
        return exit.unwrap_or(initial).clone();
    }
    if !gesture.entered {
        return initial.clone();
    }
    let mut style = animate.clone();
    if gesture.hovered {
        if let Some(hover) = while_hover {
            style.overlay(hover);
        }
    }
    if gesture.pressed {
        if let Some(tap) = while_tap {
            style.overlay(tap);
        }
    }
    style
}

#[derive(Properties, PartialEq)]
pub struct MotionProps {
    #[prop_or(AttrValue::Static("div"))]
    pub tag: AttrValue,
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
    /// Static inline style placed before the animated declarations.
    #[prop_or_default]
    pub style: AttrValue,
    #[prop_or_default]
    pub initial: StyleProps,
    #[prop_or_default]
    pub animate: StyleProps,
    #[prop_or_default]
    pub exit: Option<StyleProps>,
    #[prop_or(true)]
    pub present: bool,
    #[prop_or_default]
    pub while_hover: Option<StyleProps>,
    #[prop_or_default]
    pub while_tap: Option<StyleProps>,
    #[prop_or_default]
    pub transition: Transition,
    #[prop_or_default]
    pub onclick: Callback<MouseEvent>,
    #[prop_or_default]
    pub href: Option<AttrValue>,
    #[prop_or_default]
    pub target: Option<AttrValue>,
    #[prop_or_default]
    pub rel: Option<AttrValue>,
    #[prop_or_default]
    pub kind: Option<AttrValue>,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub node: NodeRef,
    #[prop_or_default]
    pub children: Children,
}

/// An element that transitions between declarative visual states with CSS
/// transitions.
#[function_component(Motion)]
pub fn motion(props: &MotionProps) -> Html {
    let entered = use_state(|| false);
    let hovered = use_state(|| false);
    let pressed = use_state(|| false);

    {
        // One frame at `initial` so the browser has something to transition from.
        let entered = entered.clone();
        use_effect_with_deps(
            move |_| {
                let timeout = Timeout::new(16, move || entered.set(true));
                move || drop(timeout)
            },
            (),
        );
    }

    let gesture = Gesture {
        entered: *entered,
        present: props.present,
        hovered: *hovered && !props.disabled,
        pressed: *pressed && !props.disabled,
    };
    let style = target_style(
        gesture,
        &props.initial,
        &props.animate,
        props.exit.as_ref(),
        props.while_hover.as_ref(),
        props.while_tap.as_ref(),
    );
    let transition = if !*entered {
        "none".to_string()
    } else if gesture.hovered || gesture.pressed {
        props.transition.immediate().css()
    } else {
        props.transition.css()
    };
    let inline = format!("{} {} transition: {};", props.style, style.inline(), transition);

    let onmouseenter = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(true))
    };
    let onmouseleave = {
        let pressed = pressed.clone();
        Callback::from(move |_: MouseEvent| {
            hovered.set(false);
            pressed.set(false);
        })
    };
    let onmousedown = {
        let pressed = pressed.clone();
        Callback::from(move |_: MouseEvent| pressed.set(true))
    };
    let onmouseup = Callback::from(move |_: MouseEvent| pressed.set(false));

    html! {
        <@{props.tag.to_string()}
            ref={props.node.clone()}
            id={props.id.clone()}
            class={props.class.clone()}
            style={inline}
            href={props.href.clone()}
            target={props.target.clone()}
            rel={props.rel.clone()}
            type={props.kind.clone()}
            disabled={props.disabled}
            onclick={props.onclick.clone()}
            {onmouseenter}
            {onmouseleave}
            {onmousedown}
            {onmouseup}
        >
            { for props.children.iter() }
        </@>
    }
}
