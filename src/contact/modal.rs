use std::rc::Rc;

use web_sys::{HtmlInputElement, HtmlTextAreaElement, InputEvent, KeyboardEvent, MouseEvent, SubmitEvent};
use yew::prelude::*;
use yew_hooks::use_event_with_window;
use wasm_bindgen_futures::spawn_local;

use super::flow::{SubmissionFlow, TimerDelay};
use super::form::{ContactForm, Field, Phase};
use super::mailer::EmailJsMailer;
use super::scroll_lock::ScrollLock;
use crate::animation::StyleProps;
use crate::motion::{use_presence, Motion, Transition};

/// Opens the page's one contact modal from anywhere below it.
#[derive(Clone, PartialEq)]
pub struct ContactLauncher {
    pub open: Callback<()>,
}

#[hook]
pub fn use_contact_launcher() -> Callback<()> {
    use_context::<ContactLauncher>()
        .map(|launcher| launcher.open)
        .unwrap_or_default()
}

fn backdrop_transition() -> Transition {
    Transition::tween(0.5)
}

fn dialog_transition() -> Transition {
    Transition::spring(200.0, 30.0)
}

#[derive(Properties, PartialEq)]
pub struct ContactModalProps {
    pub open: bool,
    pub on_close: Callback<()>,
}

#[function_component(ContactModal)]
pub fn contact_modal(props: &ContactModalProps) -> Html {
    let exit_ms = (backdrop_transition().total().max(dialog_transition().total()) * 1000.0) as u32;
    let presence = use_presence(props.open, exit_ms);

    use_effect_with_deps(
        |open| {
            let guard = open.then(|| ScrollLock::page().acquire());
            move || drop(guard)
        },
        props.open,
    );

    {
        let on_close = props.on_close.clone();
        let open = props.open;
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if open && e.key() == "Escape" {
                on_close.emit(());
            }
        });
    }

    if !presence.is_mounted() {
        return html! {};
    }
    let present = presence.is_present();

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let keep_open = Callback::from(|e: MouseEvent| e.stop_propagation());
    let hidden_dialog = StyleProps::new().scale(0.8).opacity(0.0).y(30.0);

    html! {
        <>
            <style>
                {r#"
.contact-backdrop {
    position: fixed;
    inset: 0;
    min-height: 100vh;
    background: rgba(0, 0, 0, 0.5);
    backdrop-filter: blur(4px);
    z-index: 60;
    display: flex;
    justify-content: center;
    align-items: center;
}

.contact-dialog {
    background: #1f2937;
    border-radius: 12px;
    box-shadow: 0 20px 25px rgba(0, 0, 0, 0.4);
    width: 100%;
    max-width: 28rem;
    padding: 1.5rem;
}

.contact-dialog-header {
    display: flex;
    justify-content: space-between;
    align-items: center;
    margin-bottom: 1rem;
}

.contact-dialog-header h1 {
    font-size: 1.5rem;
    font-weight: bold;
    color: #d1d5db;
}

.contact-close {
    background: none;
    border: none;
    color: #d1d5db;
    font-size: 1.25rem;
    cursor: pointer;
}

.contact-form label {
    display: block;
    font-size: 0.875rem;
    color: #d1d5db;
    margin: 0.75rem 0 0.25rem;
}

.contact-form input,
.contact-form textarea {
    width: 100%;
    box-sizing: border-box;
    padding: 0.5rem 1rem;
    border: 1px solid #4b5563;
    border-radius: 8px;
    background: #374151;
    color: white;
}

.contact-status {
    margin: 1rem 0;
    padding: 0.5rem;
    border-radius: 4px;
    font-size: 0.875rem;
}

.contact-status.success {
    background: rgba(34, 197, 94, 0.2);
    border: 1px solid #22c55e;
    color: #86efac;
}

.contact-status.error {
    background: rgba(239, 68, 68, 0.2);
    border: 1px solid #ef4444;
    color: #fca5a5;
}

.contact-submit {
    width: 100%;
    margin-top: 1rem;
    padding: 0.5rem 1rem;
    border: none;
    border-radius: 8px;
    color: white;
    background: linear-gradient(to right, #7c3aed, #a78bfa);
    cursor: pointer;
}

.contact-submit:disabled {
    opacity: 0.5;
    cursor: not-allowed;
}
                "#}
            </style>
            <Motion
                class="contact-backdrop"
                initial={StyleProps::new().opacity(0.0)}
                animate={StyleProps::new().opacity(1.0)}
                exit={StyleProps::new().opacity(0.0)}
                {present}
                transition={backdrop_transition()}
                onclick={close.clone()}
            >
                <Motion
                    class="contact-dialog"
                    initial={hidden_dialog.clone()}
                    animate={StyleProps::new().scale(1.0).opacity(1.0).y(0.0)}
                    exit={hidden_dialog}
                    {present}
                    transition={dialog_transition()}
                    onclick={keep_open}
                >
                    <div class="contact-dialog-header">
                        <h1>{"お問い合わせ"}</h1>
                        <button class="contact-close" aria-label="close" onclick={close}>{"✕"}</button>
                    </div>
                    <ContactDialog on_close={props.on_close.clone()} />
                </Motion>
            </Motion>
        </>
    }
}

#[derive(Properties, PartialEq)]
pub struct ContactDialogProps {
    pub on_close: Callback<()>,
}

/// The form itself. Its state lives exactly as long as the dialog is shown.
#[function_component(ContactDialog)]
pub fn contact_dialog(props: &ContactDialogProps) -> Html {
    let form = use_mut_ref(ContactForm::new);
    let redraw = use_force_update();

    let flow = {
        let form = form.clone();
        let redraw = redraw.clone();
        let on_close = props.on_close.clone();
        use_memo(
            move |_| {
                SubmissionFlow::new(
                    &form,
                    Rc::new(EmailJsMailer::from_config()),
                    Rc::new(TimerDelay),
                    Rc::new(move |_: &ContactForm| redraw.force_update()),
                    Rc::new(move || on_close.emit(())),
                )
            },
            (),
        )
    };

    let edit = |field: Field| {
        let form = form.clone();
        let redraw = redraw.clone();
        Callback::from(move |e: InputEvent| {
            let value = e
                .target_dyn_into::<HtmlInputElement>()
                .map(|input| input.value())
                .or_else(|| e.target_dyn_into::<HtmlTextAreaElement>().map(|area| area.value()));
            if let Some(value) = value {
                form.borrow_mut().edit(field, value);
                redraw.force_update();
            }
        })
    };

    let onsubmit = Callback::from(move |e: SubmitEvent| {
        e.prevent_default();
        let flow = (*flow).clone();
        spawn_local(async move {
            flow.submit().await;
        });
    });

    let snapshot = form.borrow().clone();
    let fields = snapshot.fields();
    let locked = snapshot.is_locked();
    let status = snapshot.status_message().map(|message| {
        let kind = if snapshot.phase() == Phase::Succeeded { "success" } else { "error" };
        html! { <div class={classes!("contact-status", kind)}>{message}</div> }
    });
    let press = |scale: f64| (!locked).then(|| StyleProps::new().scale(scale));

    html! {
        <form class="contact-form" {onsubmit}>
            <label for="name">{"名前"}</label>
            <input
                type="text"
                id="name"
                name="name"
                value={fields.name.clone()}
                oninput={edit(Field::Name)}
                placeholder="あなたの名前"
                required=true
            />
            <label for="email">{"Email"}</label>
            <input
                type="email"
                id="email"
                name="email"
                value={fields.email.clone()}
                oninput={edit(Field::Email)}
                placeholder="あなたのメール"
                required=true
            />
            <label for="message">{"メッセージ"}</label>
            <textarea
                rows="4"
                id="message"
                name="message"
                value={fields.message.clone()}
                oninput={edit(Field::Message)}
                placeholder="あなたのメッセージ"
                required=true
            />
            { for status }
            <Motion
                tag="button"
                kind="submit"
                class="contact-submit"
                disabled={locked}
                while_hover={press(1.03)}
                while_tap={press(0.97)}
            >
                { snapshot.submit_label() }
            </Motion>
        </form>
    }
}
