use gloo_timers::callback::Timeout;
use log::debug;
use web_sys::{MouseEvent, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};
use yew::prelude::*;

use crate::animation::StyleProps;
use crate::config::{CV_URL, GITHUB_URL, LINKEDIN_URL};
use crate::contact::use_contact_launcher;
use crate::motion::{Motion, Transition};

/// Delay before scrolling so a closing mobile menu doesn't fight the scroll.
pub const SCROLL_DELAY_MS: u32 = 100;

const MOBILE_MENU_HEIGHT: f64 = 320.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub section: &'static str,
}

pub const NAV_ITEMS: [NavItem; 4] = [
    NavItem { label: "ホーム", section: "home" },
    NavItem { label: "アバウト", section: "about" },
    NavItem { label: "プロジェクト", section: "projects" },
    NavItem { label: "お問い合わせ", section: "contact" },
];

const SOCIAL_LINKS: [(&str, &str); 3] = [("LinkedIn", LINKEDIN_URL), ("GitHub", GITHUB_URL), ("CV", CV_URL)];

/// Staggered drop-in of desktop nav item `index`.
pub fn nav_transition(index: usize) -> Transition {
    Transition::spring(100.0, 20.0).delay(0.7 + index as f64 * 0.2)
}

/// Smoothly scrolls to the section with `id` after a short delay, falling back
/// to the location hash when the element can't be found.
pub fn scroll_to_section(id: &'static str) {
    Timeout::new(SCROLL_DELAY_MS, move || {
        let Some(window) = web_sys::window() else {
            return;
        };
        match window.document().and_then(|doc| doc.get_element_by_id(id)) {
            Some(element) => {
                let mut options = ScrollIntoViewOptions::new();
                options.behavior(ScrollBehavior::Smooth);
                options.block(ScrollLogicalPosition::Start);
                element.scroll_into_view_with_scroll_into_view_options(&options);
            }
            None => {
                debug!("Section {} not found, falling back to hash", id);
                let _ = window.location().set_hash(id);
            }
        }
    })
    .forget();
}

#[function_component(Header)]
pub fn header() -> Html {
    let menu_open = use_state(|| false);
    let open_contact = use_contact_launcher();

    let go_to = {
        let menu_open = menu_open.clone();
        move |section: &'static str| {
            let menu_open = menu_open.clone();
            Callback::from(move |e: MouseEvent| {
                e.prevent_default();
                menu_open.set(false);
                scroll_to_section(section);
            })
        }
    };

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };

    let contact_click = {
        let menu_open = menu_open.clone();
        let open_contact = open_contact.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
            open_contact.emit(());
        })
    };

    let menu_style = if *menu_open {
        StyleProps::new().max_height(MOBILE_MENU_HEIGHT).opacity(1.0)
    } else {
        StyleProps::new().max_height(0.0).opacity(0.0)
    };

    html! {
        <header class="site-header">
            <style>
                {r#"
.site-header {
    position: fixed;
    top: 0;
    left: 0;
    width: 100%;
    background: rgba(0, 0, 0, 0.8);
    backdrop-filter: blur(4px);
    z-index: 50;
    transition: all 0.3s;
}

.site-header-inner {
    max-width: 80rem;
    margin: 0 auto;
    padding: 0 1rem;
    display: flex;
    align-items: center;
    justify-content: space-between;
    height: 4rem;
}

.site-logo {
    display: flex;
    align-items: center;
    gap: 0.75rem;
    cursor: pointer;
    text-decoration: none;
}

.site-logo-mark {
    height: 2.5rem;
    width: 2.5rem;
    border-radius: 0.75rem;
    background: linear-gradient(to right, #6b7280, #6b7280);
    display: flex;
    align-items: center;
    justify-content: center;
    color: #7e22ce;
    font-weight: bold;
    font-size: 1.25rem;
}

.site-logo-name {
    font-size: 1.25rem;
    font-weight: bold;
    background: linear-gradient(to right, #d1d5db, #9ca3af);
    -webkit-background-clip: text;
    background-clip: text;
    color: transparent;
}

.site-nav {
    display: flex;
    gap: 2rem;
}

.site-nav a {
    position: relative;
    color: #d1d5db;
    font-weight: 500;
    text-decoration: none;
    transition: color 0.3s;
}

.site-nav a:hover { color: #a78bfa; }

.site-nav a::after {
    content: "";
    position: absolute;
    left: 0;
    bottom: -0.25rem;
    width: 0;
    height: 2px;
    background: #8b5cf6;
    transition: width 0.3s;
}

.site-nav a:hover::after { width: 100%; }

.site-socials {
    display: flex;
    align-items: center;
    gap: 1rem;
}

.site-socials a {
    color: #d1d5db;
    text-decoration: none;
    transition: color 0.3s;
}

.site-socials a:hover { color: #a78bfa; }

.site-contact-button {
    margin-left: 1rem;
    padding: 0.5rem 1rem;
    border: none;
    border-radius: 0.75rem;
    background: linear-gradient(to right, #9ca3af, #4b5563);
    color: #7e22ce;
    font-weight: bold;
    cursor: pointer;
    transition: all 0.5s;
}

.site-contact-button:hover {
    background: linear-gradient(to right, #7e22ce, #a855f7);
    color: white;
}

.site-menu-toggle {
    display: none;
    background: none;
    border: none;
    color: #d1d5db;
    font-size: 1.5rem;
    cursor: pointer;
}

.site-mobile-menu {
    display: none;
    overflow: hidden;
    background: #111827;
    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.3);
    padding: 0 1rem;
}

.site-mobile-menu a {
    display: block;
    padding: 0.75rem 0;
    color: #d1d5db;
    font-weight: 500;
    text-decoration: none;
}

.site-mobile-menu .site-contact-button {
    display: block;
    width: 100%;
    margin: 1rem 0;
}

@media (max-width: 768px) {
    .site-nav, .site-socials { display: none; }
    .site-menu-toggle { display: block; }
    .site-mobile-menu { display: block; }
}
                "#}
            </style>
            <div class="site-header-inner">
                <Motion
                    tag="a"
                    href="#home"
                    class="site-logo"
                    initial={StyleProps::new().opacity(0.0).x(-100.0)}
                    animate={StyleProps::new().opacity(1.0).x(0.0)}
                    transition={Transition::spring(100.0, 25.0).delay(0.3)}
                    onclick={go_to("home")}
                >
                    <div class="site-logo-mark">{"ML"}</div>
                    <span class="site-logo-name">{"モランディニ・ルイ－ジ"}</span>
                </Motion>

                <nav class="site-nav">
                    { for NAV_ITEMS.iter().enumerate().map(|(index, item)| html! {
                        <Motion
                            key={item.section}
                            tag="a"
                            href={format!("#{}", item.section)}
                            initial={StyleProps::new().opacity(0.0).y(-20.0)}
                            animate={StyleProps::new().opacity(1.0).y(0.0)}
                            transition={nav_transition(index)}
                            onclick={go_to(item.section)}
                        >
                            { item.label }
                        </Motion>
                    }) }
                </nav>

                <div class="site-socials">
                    { for SOCIAL_LINKS.iter().map(|(label, url)| html! {
                        <Motion
                            key={*label}
                            tag="a"
                            href={*url}
                            target="_blank"
                            rel="noopener noreferrer"
                            initial={StyleProps::new().opacity(0.0).scale(0.5)}
                            animate={StyleProps::new().opacity(1.0).scale(1.0)}
                            transition={Transition::tween(0.8).delay(1.3)}
                        >
                            { *label }
                        </Motion>
                    }) }
                    <Motion
                        tag="button"
                        class="site-contact-button"
                        initial={StyleProps::new().opacity(0.0).scale(0.8)}
                        animate={StyleProps::new().opacity(1.0).scale(1.0)}
                        transition={Transition::spring(100.0, 15.0).delay(1.6)}
                        onclick={contact_click.clone()}
                    >
                        {"お問い合わせ"}
                    </Motion>
                </div>

                <Motion
                    tag="button"
                    class="site-menu-toggle"
                    while_tap={StyleProps::new().scale(0.7)}
                    onclick={toggle_menu}
                >
                    { if *menu_open { "✕" } else { "☰" } }
                </Motion>
            </div>

            <Motion
                class="site-mobile-menu"
                initial={StyleProps::new().max_height(0.0).opacity(0.0)}
                animate={menu_style}
                transition={Transition::tween(0.5)}
            >
                { for NAV_ITEMS.iter().map(|item| html! {
                    <a key={item.section} href={format!("#{}", item.section)} onclick={go_to(item.section)}>
                        { item.label }
                    </a>
                }) }
                { for SOCIAL_LINKS.iter().map(|(label, url)| html! {
                    <a key={*label} href={*url} target="_blank" rel="noopener noreferrer">{ *label }</a>
                }) }
                <button class="site-contact-button" onclick={contact_click}>{"お問い合わせ"}</button>
            </Motion>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_covers_every_section_once() {
        let sections: Vec<_> = NAV_ITEMS.iter().map(|item| item.section).collect();
        assert_eq!(sections, ["home", "about", "projects", "contact"]);
    }

    #[test]
    fn nav_items_drop_in_one_after_another() {
        let delays: Vec<f64> = (0..NAV_ITEMS.len()).map(|i| nav_transition(i).delay).collect();
        for pair in delays.windows(2) {
            assert!((pair[1] - pair[0] - 0.2).abs() < 1e-9);
        }
        assert!((delays[0] - 0.7).abs() < 1e-9);
    }
}
