use yew::prelude::*;

use crate::animation::{Easing, StyleProps, Timeline, Tween};
use crate::element::ElementId;
use crate::scroll::{use_element, use_element_group, use_scroll_triggers, Registrar, ScrollTrigger};

pub const STAR_COUNT: usize = 10;

const INTRO: &str = "私は情熱的なウェブ開発者であり、高速で信頼性が高く、本番環境に対応したウェブサイトとウェブアプリケーションの開発に注力しています。私の得意分野は、クリーンなコード、明確なコミュニケーション、そして納期厳守です。クライアントのニーズを満たすだけでなく、期待を超える堅牢なソリューションを構築することにやりがいを感じています。";

/// Placement and scrub lag of one decorative star.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Star {
    pub size: f64,
    pub opacity: f64,
    pub top: f64,
    pub left: f64,
    pub lag: f64,
}

impl Star {
    /// `count` stars drawing placement, opacity and lag from `random`
    /// (uniform in `[0, 1)`).
    pub fn scatter(count: usize, mut random: impl FnMut() -> f64) -> Vec<Star> {
        (0..count)
            .map(|i| Star {
                size: 10.0 + i as f64 * 3.0,
                opacity: 0.2 + random() * 0.4,
                top: random() * 100.0,
                left: random() * 100.0,
                lag: 0.5 + random() * 0.5,
            })
            .collect()
    }

    fn inline(&self) -> String {
        format!(
            "width: {size}px; height: {size}px; opacity: {}; top: {}%; left: {}%;",
            self.opacity,
            self.top,
            self.left,
            size = self.size
        )
    }
}

/// Drift of star `index` across the section: alternating direction, further
/// and lower for later stars.
pub fn star_drift(index: usize) -> StyleProps {
    let direction = if index % 2 == 0 { 1.0 } else { -1.0 };
    let i = index as f64;
    StyleProps::new()
        .x(direction * (100.0 + i * 20.0))
        .y(direction * -50.0 + i * 10.0)
        .rotation(direction * 360.0)
}

pub struct AboutTargets {
    pub section: ElementId,
    pub title: ElementId,
    pub intro: ElementId,
    pub stars: Vec<ElementId>,
}

pub fn register(r: &mut Registrar<'_>, t: &AboutTargets, stars: &[Star]) {
    r.add(
        ScrollTrigger::builder(t.section)
            .start("top 40%")
            .toggle_actions("play none none reverse")
            .animate(Timeline::single(
                Tween::from_to(
                    t.title,
                    StyleProps::new().y(100.0).opacity(0.0),
                    StyleProps::new().y(-300.0).opacity(1.0),
                )
                .duration(0.8),
                0.0,
            ))
            .build(),
    );
    r.add(
        ScrollTrigger::builder(t.section)
            .start("top 40%")
            .toggle_actions("play none none reverse")
            .animate(Timeline::single(
                Tween::from_to(
                    t.intro,
                    StyleProps::new().y(100.0).opacity(0.0).blur(10.0),
                    StyleProps::new().y(-400.0).opacity(1.0).blur(0.0),
                )
                .duration(1.5),
                0.0,
            ))
            .build(),
    );
    for (index, (element, star)) in t.stars.iter().zip(stars).enumerate() {
        r.add(
            ScrollTrigger::builder(t.section)
                .start("top bottom")
                .end("bottom top")
                .scrub_lag(star.lag)
                .animate(Timeline::single(
                    Tween::to(*element, star_drift(index)).duration(1.0).ease(Easing::Linear),
                    0.0,
                ))
                .build(),
        );
    }
}

#[function_component(About)]
pub fn about() -> Html {
    let section = use_element();
    let title = use_element();
    let intro = use_element();
    let star_nodes = use_element_group(STAR_COUNT);
    let stars = use_memo(|_| Star::scatter(STAR_COUNT, js_sys::Math::random), ());

    {
        let targets = AboutTargets {
            section: section.id,
            title: title.id,
            intro: intro.id,
            stars: star_nodes.iter().map(|h| h.id).collect(),
        };
        let stars = stars.clone();
        use_scroll_triggers(section.id, (), move |r, _| register(r, &targets, &stars));
    }

    html! {
        <section id="about" ref={section.node.clone()} class="about-section">
            <style>
                {r#"
.about-section {
    height: 100vh;
    position: relative;
    overflow: hidden;
    background: linear-gradient(to bottom, #000, #9a74cf50);
}

.about-stars {
    position: absolute;
    inset: 0;
    overflow: hidden;
}

.about-star {
    position: absolute;
    border-radius: 9999px;
    background-color: white;
}

.about-title-wrap {
    height: 100%;
    display: flex;
    flex-direction: column;
    align-items: center;
    justify-content: center;
}

.about-title {
    font-size: 3.75rem;
    font-weight: bold;
    color: white;
    text-align: center;
    opacity: 0;
}

.about-intro {
    position: absolute;
    bottom: -20rem;
    left: 0;
    width: 100%;
    display: flex;
    justify-content: space-between;
    align-items: center;
    padding: 0 6rem;
    box-sizing: border-box;
    opacity: 0;
}

.about-intro h3 {
    font-size: 1.5rem;
    color: #e9d5ff;
    max-width: 45rem;
    letter-spacing: 0.05em;
}

.about-intro img {
    height: 40rem;
    mix-blend-mode: lighten;
}

@media (max-width: 768px) {
    .about-intro {
        flex-direction: column;
        padding: 0 1.25rem;
    }
    .about-intro h3 { font-size: 0.875rem; }
    .about-intro img { height: 20rem; }
}
                "#}
            </style>
            <div class="about-stars">
                { for star_nodes.iter().zip(stars.iter()).map(|(node, star)| html! {
                    <div ref={node.node.clone()} class="about-star" style={star.inline()} />
                }) }
            </div>
            <div class="about-title-wrap">
                <h1 ref={title.node.clone()} class="about-title">{"私について"}</h1>
            </div>
            <div ref={intro.node.clone()} class="about-intro">
                <h3>{INTRO}</h3>
                <img src="images/person.png" alt="profile-img" />
            </div>
        </section>
    }
}
