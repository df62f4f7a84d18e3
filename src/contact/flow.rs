use std::cell::RefCell;
use std::rc::{Rc, Weak};

use async_trait::async_trait;
use gloo_timers::future::TimeoutFuture;
use log::{debug, warn};

use super::form::{ContactForm, Phase};
use super::mailer::Mailer;

/// How long the success message stays up before the modal closes.
pub const SUCCESS_DISPLAY_MS: u32 = 2000;

#[async_trait(?Send)]
pub trait Delay {
    async fn wait(&self, ms: u32);
}

pub struct TimerDelay;

#[async_trait(?Send)]
impl Delay for TimerDelay {
    async fn wait(&self, ms: u32) {
        TimeoutFuture::new(ms).await;
    }
}

/// One user-initiated submission against a form owned elsewhere.
///
/// Only a weak reference to the form is kept: if the dialog unmounts while a
/// request is in flight, the late outcome is dropped.
#[derive(Clone)]
pub struct SubmissionFlow {
    form: Weak<RefCell<ContactForm>>,
    mailer: Rc<dyn Mailer>,
    delay: Rc<dyn Delay>,
    on_change: Rc<dyn Fn(&ContactForm)>,
    on_close: Rc<dyn Fn()>,
}

impl SubmissionFlow {
    pub fn new(
        form: &Rc<RefCell<ContactForm>>,
        mailer: Rc<dyn Mailer>,
        delay: Rc<dyn Delay>,
        on_change: Rc<dyn Fn(&ContactForm)>,
        on_close: Rc<dyn Fn()>,
    ) -> Self {
        Self {
            form: Rc::downgrade(form),
            mailer,
            delay,
            on_change,
            on_close,
        }
    }

    /// Applies `change` if the form is still alive and publishes the result.
    fn update<T>(&self, change: impl FnOnce(&mut ContactForm) -> T) -> Option<T> {
        let form = self.form.upgrade()?;
        let out = change(&mut form.borrow_mut());
        (self.on_change)(&form.borrow());
        Some(out)
    }

    /// Runs begin → send → finish, and on success waits, settles and closes.
    /// Returns the phase the form ended in, or `None` when nothing happened.
    pub async fn submit(&self) -> Option<Phase> {
        let form = self.form.upgrade()?;
        if form.borrow_mut().reset_failure() {
            (self.on_change)(&form.borrow());
        }
        let begun = form.borrow_mut().begin_submit();
        let fields = match begun {
            Ok(fields) => fields,
            Err(refused) => {
                debug!("submit ignored: {:?}", refused);
                return None;
            }
        };
        (self.on_change)(&form.borrow());
        drop(form);

        let outcome = self.mailer.send(&fields).await;
        if let Err(e) = &outcome {
            warn!("contact message not delivered: {}", e);
        }
        let phase = self.update(|f| f.finish(&outcome))?;
        if phase != Phase::Succeeded {
            return Some(phase);
        }

        self.delay.wait(SUCCESS_DISPLAY_MS).await;
        self.update(ContactForm::settle)?;
        (self.on_close)();
        Some(Phase::Idle)
    }
}
