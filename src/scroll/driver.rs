use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::{debug, info};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Event;
use yew::prelude::*;
use yew_hooks::use_event_with_window;

use super::engine::ScrollObserver;
use super::hooks::ScrollContext;

/// Quiet period after the last resize before ranges are re-measured.
pub const RESIZE_DEBOUNCE_MS: u32 = 200;

type FrameCallback = Closure<dyn FnMut(f64)>;

/// Runs the engine once per animation frame for as long as the calling
/// component is mounted. Resizes re-measure every range once they settle;
/// unmount kills every trigger.
#[hook]
pub fn use_scroll_driver(ctx: ScrollContext) {
    {
        let ctx = ctx.clone();
        use_effect_with_deps(
            move |ctx: &ScrollContext| {
                let frame: Rc<RefCell<Option<FrameCallback>>> = Rc::new(RefCell::new(None));
                let handle: Rc<RefCell<Option<i32>>> = Rc::new(RefCell::new(None));

                let tick = {
                    let ctx = ctx.clone();
                    let frame = frame.clone();
                    let handle = handle.clone();
                    Closure::wrap(Box::new(move |now: f64| {
                        if let (Ok(mut engine), Ok(mut surface)) =
                            (ctx.engine.try_borrow_mut(), ctx.surface.try_borrow_mut())
                        {
                            engine.update(&mut *surface, now);
                        }
                        *handle.borrow_mut() = frame.borrow().as_ref().and_then(request_frame);
                    }) as Box<dyn FnMut(f64)>)
                };
                *handle.borrow_mut() = request_frame(&tick);
                *frame.borrow_mut() = Some(tick);
                info!("scroll driver started");

                let ctx = ctx.clone();
                move || {
                    if let (Some(window), Some(id)) = (web_sys::window(), handle.borrow_mut().take()) {
                        let _ = window.cancel_animation_frame(id);
                    }
                    frame.borrow_mut().take();
                    let killed = ctx.engine.borrow_mut().unobserve_all();
                    info!("scroll driver stopped, killed {} triggers", killed);
                }
            },
            ctx,
        );
    }

    let pending = use_mut_ref(|| None::<Timeout>);
    {
        let ctx = ctx.clone();
        use_event_with_window("resize", move |_: Event| {
            let engine = ctx.engine.clone();
            let timeout = Timeout::new(RESIZE_DEBOUNCE_MS, move || {
                debug!("viewport settled, refreshing scroll ranges");
                engine.borrow_mut().request_refresh();
            });
            // Replacing the pending timeout cancels it.
            *pending.borrow_mut() = Some(timeout);
        });
    }
    use_event_with_window("load", move |_: Event| {
        ctx.engine.borrow_mut().request_refresh();
    });
}

fn request_frame(callback: &FrameCallback) -> Option<i32> {
    web_sys::window()?
        .request_animation_frame(callback.as_ref().unchecked_ref())
        .ok()
}
