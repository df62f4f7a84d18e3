use web_sys::MouseEvent;
use yew::prelude::*;
use yew_hooks::use_event_with_window;

pub const CURSOR_SIZE: f64 = 20.0;

/// Inline style centring the follower dot on the pointer.
pub fn cursor_style(x: f64, y: f64, visible: bool) -> String {
    format!(
        "transform: translate3d({}px, {}px, 0); opacity: {};",
        x - CURSOR_SIZE / 2.0,
        y - CURSOR_SIZE / 2.0,
        if visible { 1 } else { 0 }
    )
}

#[function_component(CustomCursor)]
pub fn custom_cursor() -> Html {
    let position = use_state(|| None::<(f64, f64)>);

    {
        let position = position.clone();
        use_event_with_window("mousemove", move |e: MouseEvent| {
            position.set(Some((e.client_x() as f64, e.client_y() as f64)));
        });
    }

    let style = match *position {
        Some((x, y)) => cursor_style(x, y, true),
        None => cursor_style(0.0, 0.0, false),
    };

    html! {
        <>
            <style>
                {r#"
.custom-cursor {
    position: fixed;
    top: 0;
    left: 0;
    width: 20px;
    height: 20px;
    border-radius: 9999px;
    background: rgba(167, 139, 250, 0.6);
    mix-blend-mode: difference;
    pointer-events: none;
    z-index: 80;
    transition: transform 0.1s ease-out, opacity 0.3s;
}

@media (hover: none) {
    .custom-cursor { display: none; }
}
                "#}
            </style>
            <div class="custom-cursor" {style} />
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dot_is_centred_on_pointer() {
        assert_eq!(cursor_style(100.0, 50.0, true), "transform: translate3d(90px, 40px, 0); opacity: 1;");
        assert_eq!(cursor_style(0.0, 0.0, false), "transform: translate3d(-10px, -10px, 0); opacity: 0;");
    }
}
