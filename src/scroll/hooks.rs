use std::cell::RefCell;
use std::rc::Rc;

use yew::prelude::*;

use super::dom::DomSurface;
use super::engine::ScrollEngine;
use super::lifecycle::{remount, teardown, Registrar};
use crate::element::{ElementHandle, ElementId};

/// Shared engine and page surface, provided once at the top of the page.
#[derive(Clone, Default)]
pub struct ScrollContext {
    pub engine: Rc<RefCell<ScrollEngine>>,
    pub surface: Rc<RefCell<DomSurface>>,
}

impl ScrollContext {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PartialEq for ScrollContext {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.engine, &other.engine) && Rc::ptr_eq(&self.surface, &other.surface)
    }
}

/// A stable handle for one rendered element, visible to the scroll engine
/// while the calling component is mounted.
#[hook]
pub fn use_element() -> ElementHandle {
    let group = use_element_group(1);
    group.first().cloned().unwrap_or_default()
}

/// `count` stable handles, e.g. one per panel or star.
#[hook]
pub fn use_element_group(count: usize) -> Rc<Vec<ElementHandle>> {
    let ctx = use_context::<ScrollContext>();
    let handles = use_memo(|count| (0..*count).map(|_| ElementHandle::new()).collect::<Vec<_>>(), count);
    {
        let handles = handles.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(ctx) = ctx.as_ref() {
                    let mut surface = ctx.surface.borrow_mut();
                    handles.iter().for_each(|h| surface.attach(h));
                }
                move || {
                    if let Some(ctx) = ctx {
                        let mut surface = ctx.surface.borrow_mut();
                        handles.iter().for_each(|h| surface.detach(h.id));
                    }
                }
            },
            count,
        );
    }
    handles
}

/// Registers the owner's scroll triggers after render, re-registers them
/// whenever `deps` change, and removes them all on unmount.
#[hook]
pub fn use_scroll_triggers<D, F>(owner: ElementId, deps: D, register: F)
where
    D: PartialEq + 'static,
    F: Fn(&mut Registrar<'_>, &D) + 'static,
{
    let ctx = use_context::<ScrollContext>();
    use_effect_with_deps(
        move |deps| {
            if let Some(ctx) = ctx.as_ref() {
                let mut engine = ctx.engine.borrow_mut();
                remount(&mut *engine, owner, |r| register(r, deps));
            }
            move || {
                if let Some(ctx) = ctx {
                    teardown(&mut *ctx.engine.borrow_mut(), owner);
                }
            }
        },
        deps,
    );
}
