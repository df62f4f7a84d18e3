use yew::prelude::*;

use crate::animation::{Easing, StyleProps, Timeline, Tween};
use crate::element::{ElementHandle, ElementId};
use crate::scroll::{
    use_element, use_element_group, use_scroll_triggers, HorizontalStrip, Registrar, ScrollTrigger,
    TriggerError,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub image: &'static str,
    pub url: &'static str,
}

pub const PROJECTS: [Project; 5] = [
    Project {
        title: "Meta Game Website",
        image: "/images/project-1.png",
        url: "https://gaming-50q0.onrender.com/",
    },
    Project {
        title: "3D Gaming Website",
        image: "/images/project-2.png",
        url: "https://gaming-website-cqgx.onrender.com/",
    },
    Project {
        title: "English Portfolio",
        image: "/images/project-3.png",
        url: "https://morandini.online/",
    },
    Project {
        title: "Japan Events",
        image: "/images/project-4.png",
        url: "https://eventsjp.com/",
    },
    Project {
        title: "Game-Finder",
        image: "/images/project-5.png",
        url: "https://game-finder.online/",
    },
];

pub struct ProjectsTargets {
    pub section: ElementId,
    pub title: ElementId,
    pub title_line: ElementId,
    /// Pinned viewport the strip slides through.
    pub viewport: ElementId,
    /// The full-width row of panels.
    pub strip: ElementId,
    pub panels: Vec<ElementId>,
    pub images: Vec<ElementId>,
    pub captions: Vec<ElementId>,
}

fn reveal(section: ElementId, start: &str, tween: Tween, delay: f64) -> Result<ScrollTrigger, TriggerError> {
    ScrollTrigger::builder(section)
        .start(start)
        .toggle_actions("play none none reverse")
        .animate(Timeline::single(tween, delay))
        .build()
}

/// Scale-and-rotate reveal of a panel's image with its caption rising past.
pub fn panel_timeline(image: ElementId, caption: ElementId) -> Timeline {
    Timeline::new()
        .at(
            0.0,
            Tween::from_to(
                image,
                StyleProps::new().scale(0.0).rotation(-20.0),
                StyleProps::new().scale(1.0).rotation(1.0),
            )
            .duration(0.5),
        )
        .at(
            0.2,
            Tween::from_to(caption, StyleProps::new().y(30.0), StyleProps::new().y(-100.0)).duration(0.3),
        )
}

pub fn register(r: &mut Registrar<'_>, t: &ProjectsTargets) {
    r.add(reveal(
        t.section,
        "top 80%",
        Tween::from_to(
            t.title,
            StyleProps::new().y(100.0).opacity(0.0),
            StyleProps::new().y(0.0).opacity(1.0),
        )
        .duration(1.2)
        .ease(Easing::Power3Out),
        0.0,
    ));
    r.add(reveal(
        t.section,
        "top 80%",
        Tween::from_to(
            t.title_line,
            StyleProps::new().width_percent(0.0).opacity(0.0),
            StyleProps::new().width_percent(100.0).opacity(1.0),
        )
        .duration(1.5)
        .ease(Easing::Power3InOut),
        0.3,
    ));
    r.add(reveal(
        t.section,
        "top 70%",
        Tween::from_to(
            t.viewport,
            StyleProps::new().y(100.0).rotation_x(20.0).opacity(0.0),
            StyleProps::new().y(0.0).rotation_x(0.0).opacity(1.0),
        )
        .duration(1.0)
        .ease(Easing::Power2Out),
        0.2,
    ));
    r.add(
        ScrollTrigger::builder(t.section)
            .start("top bottom")
            .end("bottom top")
            .scrub()
            .animate(Timeline::single(
                Tween::from_to(
                    t.section,
                    StyleProps::new().background_position_y(0.0),
                    StyleProps::new().background_position_y(100.0),
                )
                .duration(1.0)
                .ease(Easing::Linear),
                0.0,
            ))
            .build(),
    );

    let strip = HorizontalStrip::new(t.panels.len());
    let mut scroller = ScrollTrigger::builder(t.viewport)
        .start("top top")
        .end_at(strip.end(t.strip))
        .pin()
        .scrub_lag(2.0)
        .animate(strip.timeline(&t.panels));
    if let Some(snap) = strip.snap() {
        scroller = scroller.snap(snap);
    }
    let Some(container) = r.add(scroller.build()) else {
        return;
    };

    for ((panel, image), caption) in t.panels.iter().zip(&t.images).zip(&t.captions) {
        r.add(
            ScrollTrigger::builder(*panel)
                .within(container)
                .start("left right")
                .end("right left")
                .scrub()
                .animate(panel_timeline(*image, *caption))
                .build(),
        );
    }
}

#[function_component(Projects)]
pub fn projects() -> Html {
    let section = use_element();
    let title = use_element();
    let title_line = use_element();
    let viewport = use_element();
    let strip = use_element();
    let panels = use_element_group(PROJECTS.len());
    let images = use_element_group(PROJECTS.len());
    let captions = use_element_group(PROJECTS.len());

    {
        let ids = |group: &[ElementHandle]| group.iter().map(|h| h.id).collect::<Vec<_>>();
        let targets = ProjectsTargets {
            section: section.id,
            title: title.id,
            title_line: title_line.id,
            viewport: viewport.id,
            strip: strip.id,
            panels: ids(panels.as_slice()),
            images: ids(images.as_slice()),
            captions: ids(captions.as_slice()),
        };
        use_scroll_triggers(section.id, PROJECTS.len(), move |r, _| register(r, &targets));
    }

    html! {
        <section id="projects" ref={section.node.clone()} class="projects-section">
            <style>
                {r#"
.projects-section {
    position: relative;
    padding: 5rem 0;
    background: #f6f6f6;
    background-size: 100% 200%;
    overflow: hidden;
}

.projects-heading {
    margin: 0 auto 4rem;
    padding: 0 1rem;
    position: relative;
    z-index: 10;
}

.projects-heading h2 {
    font-size: 3.75rem;
    font-weight: bold;
    color: black;
    text-align: center;
    margin-bottom: 1rem;
    opacity: 0;
}

.projects-line {
    width: 0;
    height: 4px;
    margin: 0 auto;
    background: linear-gradient(to right, #a855f7, #ec4899);
    opacity: 0;
}

.projects-viewport {
    overflow: hidden;
    opacity: 0;
}

.projects-strip {
    display: flex;
    width: 500%;
}

.projects-panel {
    position: relative;
    width: 100%;
    display: flex;
    align-items: center;
    justify-content: center;
}

.projects-panel-inner {
    width: 100%;
    height: 100%;
    display: flex;
    flex-direction: column;
    align-items: center;
    justify-content: center;
    padding: 3rem;
    box-sizing: border-box;
}

.projects-panel img {
    max-width: 100%;
    max-height: 100%;
    border-radius: 1rem;
    object-fit: cover;
    transition: opacity 0.3s;
}

.projects-panel img:hover { opacity: 0.8; }

.projects-panel h2 {
    display: flex;
    align-items: center;
    gap: 0.75rem;
    font-size: 1.875rem;
    font-weight: bold;
    color: black;
    margin-top: 1.5rem;
    white-space: nowrap;
    transition: color 0.3s;
}

.projects-panel h2:hover { color: #9ca3af; }

@media (max-width: 768px) {
    .projects-heading h2 { font-size: 2.25rem; }
    .projects-panel h2 { font-size: 0.875rem; }
}
                "#}
            </style>
            <div class="projects-heading">
                <h2 ref={title.node.clone()}>{"プロジェクト"}</h2>
                <div ref={title_line.node.clone()} class="projects-line" />
            </div>
            <div ref={viewport.node.clone()} class="projects-viewport">
                <div ref={strip.node.clone()} class="projects-strip">
                    { for PROJECTS.iter().enumerate().map(|(i, project)| html! {
                        <div key={project.title} ref={panels[i].node.clone()} class="projects-panel">
                            <div class="projects-panel-inner">
                                <a href={project.url} target="_blank" rel="noopener noreferrer">
                                    <img ref={images[i].node.clone()} src={project.image} alt="Project-img" />
                                </a>
                                <h2 ref={captions[i].node.clone()}>{project.title}{" ↗"}</h2>
                            </div>
                        </div>
                    }) }
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

    fn targets() -> ProjectsTargets {
        let many = || (0..PROJECTS.len()).map(|_| ElementId::fresh()).collect::<Vec<_>>();
        ProjectsTargets {
            section: ElementId::fresh(),
            title: ElementId::fresh(),
            title_line: ElementId::fresh(),
            viewport: ElementId::fresh(),
            strip: ElementId::fresh(),
            panels: many(),
            images: many(),
            captions: many(),
        }
    }

    #[test]
    fn registers_reveals_strip_and_one_trigger_per_panel() {
        let mut engine = ScrollEngine::new();
        let t = targets();
        let live = remount(&mut engine, t.section, |r| register(r, &t));
        assert_eq!(live, 4 + 1 + PROJECTS.len());
    }

    #[test]
    fn unmount_leaves_no_triggers() {
        let mut engine = ScrollEngine::new();
        let t = targets();
        remount(&mut engine, t.section, |r| register(r, &t));
        remount(&mut engine, t.section, |r| register(r, &t));
        assert_eq!(engine.len(), 4 + 1 + PROJECTS.len());
        teardown(&mut engine, t.section);
        assert_eq!(engine.observed_by(t.section), 0);
        assert_eq!(engine.len(), 0);
    }

    #[test]
    fn panel_timeline_reveals_image_then_lifts_caption() {
        let image = ElementId::fresh();
        let caption = ElementId::fresh();
        let tl = panel_timeline(image, caption);
        assert!((tl.duration() - 0.5).abs() < 1e-9);
        let start = tl.sample(0.0);
        assert_eq!(start[&image].get(Prop::Scale), Some(Value::Number(0.0)));
        assert_eq!(start[&caption].get(Prop::Y), Some(Value::Number(30.0)));
        let end = tl.sample(0.5);
        let number = |el: &ElementId, prop| end[el].get(prop).and_then(Value::number).unwrap_or(f64::NAN);
        assert!((number(&image, Prop::Rotation) - 1.0).abs() < 1e-6);
        assert!((number(&caption, Prop::Y) + 100.0).abs() < 1e-6);
    }
}
