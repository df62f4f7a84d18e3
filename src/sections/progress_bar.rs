use yew::prelude::*;

use crate::animation::{Easing, StyleProps, Timeline, Tween};
use crate::element::ElementId;
use crate::scroll::{use_element, use_scroll_triggers, Registrar, ScrollTrigger};

/// Bar fills left to right as the whole page scrolls past.
pub fn register(r: &mut Registrar<'_>, page: ElementId, bar: ElementId) {
    r.add(
        ScrollTrigger::builder(page)
            .start("top top")
            .end("bottom bottom")
            .scrub()
            .animate(Timeline::single(
                Tween::from_to(bar, StyleProps::new().scale_x(0.0), StyleProps::new().scale_x(1.0))
                    .duration(1.0)
                    .ease(Easing::Linear),
                0.0,
            ))
            .build(),
    );
}

#[derive(Properties, PartialEq)]
pub struct ProgressBarProps {
    /// Root element of the scrolling page.
    pub page: ElementId,
}

#[function_component(ProgressBar)]
pub fn progress_bar(props: &ProgressBarProps) -> Html {
    let bar = use_element();
    {
        let bar_id = bar.id;
        use_scroll_triggers(bar.id, props.page, move |r, page| register(r, *page, bar_id));
    }

    html! {
        <>
            <style>
                {r#"
.scroll-progress {
    position: fixed;
    top: 0;
    left: 0;
    width: 100%;
    height: 4px;
    z-index: 70;
    transform-origin: left center;
    transform: scaleX(0);
    background: linear-gradient(to right, #7c3aed, #ec4899);
}
                "#}
            </style>
            <div ref={bar.node.clone()} class="scroll-progress" />
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scroll::testing::FakeSurface;
    use crate::scroll::{remount, ScrollEngine};

    #[test]
    fn bar_tracks_whole_page_scroll() {
        let mut surface = FakeSurface::new(1200.0, 1000.0);
        let page = ElementId::fresh();
        let bar = ElementId::fresh();
        surface.block(page, 0.0, 3000.0);
        let mut engine = ScrollEngine::new();
        assert_eq!(remount(&mut engine, bar, |r| register(r, page, bar)), 1);

        surface.offset = 1000.0;
        engine.update(&mut surface, 0.0);
        assert_eq!(surface.style(bar, "transform"), Some("translate3d(0px, 0px, 0) scaleX(0.5)"));

        surface.offset = 2000.0;
        engine.update(&mut surface, 16.0);
        assert_eq!(surface.style(bar, "transform"), Some("translate3d(0px, 0px, 0) scaleX(1)"));
    }
}
