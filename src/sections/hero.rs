use log::{debug, warn};
use yew::prelude::*;

use crate::animation::StyleProps;
use crate::config::{SCENE_URL, SPLINE_VIEWER_SCRIPT};
use crate::motion::{Motion, Transition};

const TAGLINE: &str = "堅牢で本番環境に対応したWebサイト・Webアプリケーションをスピードと精度をもって開発します。すべてのプロジェクトで、クリーンなコード、明確なコミュニケーション、そして納期厳守をお約束します。";

fn rise(delay: f64) -> Transition {
    Transition::spring(40.0, 25.0).delay(delay)
}

const VIEWER_SCRIPT_ID: &str = "spline-viewer-script";

/// Adds the scene viewer's module script to the document once.
fn load_scene_viewer() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if document.get_element_by_id(VIEWER_SCRIPT_ID).is_some() {
        return;
    }
    let script = match document.create_element("script") {
        Ok(script) => script,
        Err(e) => {
            warn!("Could not create scene viewer script: {:?}", e);
            return;
        }
    };
    let _ = script.set_attribute("id", VIEWER_SCRIPT_ID);
    let _ = script.set_attribute("type", "module");
    let _ = script.set_attribute("src", SPLINE_VIEWER_SCRIPT);
    if let Some(head) = document.head() {
        let _ = head.append_child(&script);
        debug!("Loading scene viewer from {}", SPLINE_VIEWER_SCRIPT);
    }
}

#[function_component(Hero)]
pub fn hero() -> Html {
    use_effect_with_deps(
        |_| {
            load_scene_viewer();
            || ()
        },
        (),
    );

    html! {
        <section id="home" class="hero-section">
            <style>
                {r#"
.hero-section {
    height: 100vh;
    background: linear-gradient(to bottom, #4c1d95, black);
    display: flex;
    align-items: center;
    justify-content: space-between;
    padding: 0 10%;
    position: relative;
    overflow: hidden;
    box-sizing: border-box;
}

.hero-copy {
    z-index: 10;
    max-width: 40rem;
}

.hero-copy h1 {
    font-size: 3.75rem;
    font-weight: bold;
    color: white;
    line-height: 1.2;
    margin-bottom: 1.5rem;
}

.hero-copy p {
    font-size: 1.25rem;
    color: #d8b4fe;
    max-width: 36rem;
}

.hero-scene {
    position: absolute;
    right: -10%;
    width: 60%;
    height: 100%;
}

.hero-scene spline-viewer {
    width: 100%;
    height: 100%;
}

@media (max-width: 768px) {
    .hero-section { flex-direction: column-reverse; justify-content: center; }
    .hero-copy h1 { font-size: 2.25rem; }
    .hero-copy p { font-size: 1rem; }
    .hero-scene { position: relative; right: 0; width: 100%; height: 50%; }
}
                "#}
            </style>
            <div class="hero-copy">
                <Motion
                    tag="h1"
                    initial={StyleProps::new().opacity(0.0).y(80.0)}
                    animate={StyleProps::new().opacity(1.0).y(0.0)}
                    transition={rise(1.3)}
                >
                    {"迅速な構築"}<br />{"信頼性の高い結果"}
                </Motion>
                <Motion
                    tag="p"
                    initial={StyleProps::new().opacity(0.0).y(80.0)}
                    animate={StyleProps::new().opacity(1.0).y(0.0)}
                    transition={rise(1.8)}
                >
                    { TAGLINE }
                </Motion>
            </div>
            <div class="hero-scene">
                <spline-viewer url={SCENE_URL}></spline-viewer>
            </div>
        </section>
    }
}
