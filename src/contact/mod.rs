//! The contact modal: form state machine, EmailJS delivery, submission flow
//! and the page scroll lock held while the modal is open.

pub mod flow;
pub mod form;
pub mod mailer;
pub mod modal;
pub mod scroll_lock;

pub use form::{ContactFields, ContactForm, Phase};
pub use mailer::{DeliveryError, EmailJsMailer, Mailer};
pub use modal::{use_contact_launcher, ContactLauncher, ContactModal};
pub use scroll_lock::ScrollLock;
