use gloo_timers::callback::Timeout;
use yew::prelude::*;

/// Mount state of content that animates out before it unmounts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Presence {
    Absent,
    Present,
    Exiting,
}

impl Presence {
    pub fn toggled(self, open: bool) -> Self {
        match (self, open) {
            (_, true) => Presence::Present,
            (Presence::Present, false) => Presence::Exiting,
            (state, false) => state,
        }
    }

    /// The exit transition finished.
    pub fn settled(self) -> Self {
        match self {
            Presence::Exiting => Presence::Absent,
            state => state,
        }
    }

    pub fn is_mounted(self) -> bool {
        self != Presence::Absent
    }

    pub fn is_present(self) -> bool {
        self == Presence::Present
    }
}

/// Keeps content mounted for `exit_ms` after `open` turns false so its exit
/// transition can play.
#[hook]
pub fn use_presence(open: bool, exit_ms: u32) -> Presence {
    let state = use_state_eq(|| Presence::Absent.toggled(open));
    let timer = use_mut_ref(|| None::<Timeout>);
    {
        let state = state.clone();
        use_effect_with_deps(
            move |open| {
                let next = (*state).toggled(*open);
                state.set(next);
                if next == Presence::Exiting {
                    let state = state.clone();
                    *timer.borrow_mut() = Some(Timeout::new(exit_ms, move || {
                        state.set(next.settled());
                    }));
                } else {
                    timer.borrow_mut().take();
                }
                || ()
            },
            open,
        );
    }
    *state
}
