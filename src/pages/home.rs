use log::info;
use yew::prelude::*;

use crate::contact::{ContactLauncher, ContactModal};
use crate::scroll::{use_element, use_scroll_driver, ScrollContext};
use crate::sections::{
    about::About, contact::Contact, cursor::CustomCursor, footer::Footer, header::Header, hero::Hero,
    progress_bar::ProgressBar, projects::Projects,
};

/// The single page: owns the scroll engine, drives it every frame and hosts
/// the one contact modal every call site opens.
#[function_component(Home)]
pub fn home() -> Html {
    let scroll = use_memo(|_| ScrollContext::new(), ());
    use_scroll_driver((*scroll).clone());

    let modal_open = use_state(|| false);
    let launcher = {
        let modal_open = modal_open.clone();
        use_memo(
            move |_| ContactLauncher {
                open: Callback::from(move |_: ()| {
                    info!("Opening contact modal");
                    modal_open.set(true);
                }),
            },
            (),
        )
    };
    let on_close = {
        let modal_open = modal_open.clone();
        Callback::from(move |_: ()| modal_open.set(false))
    };

    html! {
        <ContextProvider<ScrollContext> context={(*scroll).clone()}>
            <ContextProvider<ContactLauncher> context={(*launcher).clone()}>
                <PageBody />
                <ContactModal open={*modal_open} {on_close} />
            </ContextProvider<ContactLauncher>>
        </ContextProvider<ScrollContext>>
    }
}

#[function_component(PageBody)]
fn page_body() -> Html {
    let page = use_element();

    html! {
        <main ref={page.node.clone()} class="page">
            <style>
                {r#"
html, body {
    margin: 0;
    padding: 0;
    background: black;
    font-family: "Noto Sans JP", sans-serif;
}

.page {
    position: relative;
    overflow-x: hidden;
}
                "#}
            </style>
            <Header />
            <Hero />
            <CustomCursor />
            <About />
            <Projects />
            <Contact />
            <Footer />
            <ProgressBar page={page.id} />
        </main>
    }
}
