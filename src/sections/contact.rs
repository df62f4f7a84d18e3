use web_sys::MouseEvent;
use yew::prelude::*;

use crate::animation::{Easing, Rgba, Shadow, StyleProps, Timeline, Tween};
use crate::contact::use_contact_launcher;
use crate::element::ElementId;
use crate::scroll::{use_element, use_scroll_triggers, Registrar, ScrollTrigger};

const VIOLET: Rgba = Rgba::rgba(147.0, 51.0, 234.0, 1.0);
const LAVENDER: Rgba = Rgba::rgba(233.0, 213.0, 255.0, 1.0);
const GLOW: Shadow = Shadow {
    blur: 50.0,
    spread: 20.0,
    color: Rgba::rgba(233.0, 213.0, 255.0, 0.3),
};

const PITCH: &str = "フルスタック開発者であり、React、Tailwind CSS、および高度なUIアニメーション技術を使用して、モダンでレスポンシブなウェブインターフェースを構築することに特化しています。クリーンなコードと、際立つピクセルパーフェクトなデザインに焦点を当てています。Node.js、Express、PostgreSQLなどのバックエンド技術の実践経験があります。RESTful APIの構築、サーバーサイドロジックの処理、データベース管理に精通しています。";

pub struct ContactTargets {
    pub section: ElementId,
    pub circle: ElementId,
    pub initial_text: ElementId,
    pub final_text: ElementId,
}

/// The circle grows and recolours in two stages while the prompt text swaps
/// for the call to action.
pub fn zoom_timeline(t: &ContactTargets) -> Timeline {
    Timeline::new()
        .set(t.circle, StyleProps::new().scale(1.0).background_color(Rgba::WHITE))
        .set(t.initial_text, StyleProps::new().opacity(1.0))
        .set(t.final_text, StyleProps::new().opacity(0.0))
        .at(
            0.0,
            Tween::to(t.circle, StyleProps::new().scale(5.0).background_color(VIOLET))
                .ease(Easing::Power1InOut)
                .duration(0.5),
        )
        .at(
            0.1,
            Tween::to(t.initial_text, StyleProps::new().opacity(0.0))
                .ease(Easing::Power1InOut)
                .duration(0.2),
        )
        .at(
            0.5,
            Tween::to(
                t.circle,
                StyleProps::new().scale(17.0).background_color(LAVENDER).box_shadow(GLOW),
            )
            .ease(Easing::Power2InOut)
            .duration(0.5),
        )
        .at(
            0.7,
            Tween::to(t.final_text, StyleProps::new().opacity(1.0))
                .ease(Easing::Power2InOut)
                .duration(0.2),
        )
}

pub fn register(r: &mut Registrar<'_>, t: &ContactTargets) {
    r.add(
        ScrollTrigger::builder(t.section)
            .start("top top")
            .end("+=200%")
            .pin()
            .scrub_lag(0.5)
            .animate(zoom_timeline(t))
            .build(),
    );
}

#[function_component(Contact)]
pub fn contact() -> Html {
    let section = use_element();
    let circle = use_element();
    let initial_text = use_element();
    let final_text = use_element();
    let launch = use_contact_launcher();

    {
        let targets = ContactTargets {
            section: section.id,
            circle: circle.id,
            initial_text: initial_text.id,
            final_text: final_text.id,
        };
        use_scroll_triggers(section.id, (), move |r, _| register(r, &targets));
    }

    let onclick = Callback::from(move |_: MouseEvent| launch.emit(()));

    html! {
        <section id="contact" ref={section.node.clone()} class="contact-section">
            <style>
                {r#"
.contact-section {
    min-height: 100vh;
    display: flex;
    align-items: center;
    justify-content: center;
    background: black;
    position: relative;
    overscroll-behavior: none;
}

.contact-circle {
    width: 8rem;
    height: 8rem;
    border-radius: 9999px;
    display: flex;
    align-items: center;
    justify-content: center;
    position: relative;
    box-shadow: 0 10px 15px rgba(196, 181, 253, 0.5);
}

.contact-prompt {
    position: absolute;
    inset: 0;
    display: flex;
    align-items: center;
    justify-content: center;
    text-align: center;
    color: black;
    font-weight: bold;
    font-size: 1.25rem;
}

.contact-final {
    position: relative;
    display: flex;
    flex-direction: column;
    align-items: center;
    justify-content: center;
    text-align: center;
    opacity: 0;
}

.contact-final h1 {
    color: black;
    width: 10rem;
    transform: scale(0.4);
    font-size: 1rem;
    line-height: 1;
    margin-bottom: 1.25rem;
}

.contact-final p {
    color: black;
    width: 40rem;
    position: absolute;
    margin-top: 0.75rem;
    transform: scale(0.1);
}

.contact-cta {
    position: absolute;
    margin-top: 2.25rem;
    padding: 0.5rem 2.5rem;
    border-radius: 0.75rem;
    border: none;
    background: black;
    color: white;
    white-space: nowrap;
    transform: scale(0.1);
    transition: all 0.5s;
    cursor: pointer;
}

.contact-cta:hover {
    background: white;
    color: black;
}
                "#}
            </style>
            <div ref={circle.node.clone()} class="contact-circle">
                <p ref={initial_text.node.clone()} class="contact-prompt">{"下スクロール"}</p>
                <div ref={final_text.node.clone()} class="contact-final">
                    <h1>{"未来へ踏み出そう"}</h1>
                    <p>{PITCH}</p>
                    <button class="contact-cta" {onclick}>{"お問い合わせ"}</button>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::{Prop, Value};
    use crate::scroll::{remount, teardown, ScrollEngine, ScrollObserver};

    fn targets() -> ContactTargets {
        ContactTargets {
            section: ElementId::fresh(),
            circle: ElementId::fresh(),
            initial_text: ElementId::fresh(),
            final_text: ElementId::fresh(),
        }
    }

    #[test]
    fn circle_zooms_in_two_stages() {
        let t = targets();
        let tl = zoom_timeline(&t);
        assert!((tl.duration() - 1.0).abs() < 1e-9);

        let start = tl.sample(0.0);
        assert_eq!(start[&t.circle].get(Prop::Scale), Some(Value::Number(1.0)));
        assert_eq!(start[&t.circle].get(Prop::BackgroundColor), Some(Value::Color(Rgba::WHITE)));
        assert_eq!(start[&t.initial_text].get(Prop::Opacity), Some(Value::Number(1.0)));
        assert_eq!(start[&t.final_text].get(Prop::Opacity), Some(Value::Number(0.0)));

        let middle = tl.sample(0.5);
        assert_eq!(middle[&t.circle].get(Prop::Scale), Some(Value::Number(5.0)));
        assert_eq!(middle[&t.initial_text].get(Prop::Opacity), Some(Value::Number(0.0)));

        let end = tl.sample(1.0);
        assert_eq!(end[&t.circle].get(Prop::Scale), Some(Value::Number(17.0)));
        assert_eq!(end[&t.circle].get(Prop::BackgroundColor), Some(Value::Color(LAVENDER)));
        assert_eq!(end[&t.circle].get(Prop::BoxShadow), Some(Value::Shadow(GLOW)));
        assert_eq!(end[&t.final_text].get(Prop::Opacity), Some(Value::Number(1.0)));
    }

    #[test]
    fn unmount_leaves_no_triggers() {
        let mut engine = ScrollEngine::new();
        let t = targets();
        assert_eq!(remount(&mut engine, t.section, |r| register(r, &t)), 1);
        assert_eq!(teardown(&mut engine, t.section), 1);
        assert_eq!(engine.observed_by(t.section), 0);
    }
}
