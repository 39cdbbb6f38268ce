use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use log::{error, info};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::config;
use crate::contact::{submit_with, ContactField, ContactFormState, SubmissionHandler};

struct ContactInfo {
    icon: &'static str,
    title: &'static str,
    value: &'static str,
    link: Option<&'static str>,
}

const CONTACT_INFO: [ContactInfo; 3] = [
    ContactInfo {
        icon: "✉",
        title: "Email",
        value: "support@digitalguardian.gov.in",
        link: Some("mailto:support@digitalguardian.gov.in"),
    },
    ContactInfo {
        icon: "☎",
        title: "Phone",
        value: "1800-XXX-XXXX (Toll Free)",
        link: Some("tel:1800XXXXXXX"),
    },
    ContactInfo {
        icon: "⌖",
        title: "Address",
        value: "Digital Guardian Initiative, New Delhi, India",
        link: None,
    },
];

/// Reads `name` and value off whichever form control fired.
fn field_update(e: &InputEvent) -> Option<(ContactField, String)> {
    if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
        return ContactField::from_name(&input.name()).map(|f| (f, input.value()));
    }
    let area = e.target_dyn_into::<HtmlTextAreaElement>()?;
    ContactField::from_name(&area.name()).map(|f| (f, area.value()))
}

#[derive(Properties, PartialEq)]
pub struct ContactProps<H: SubmissionHandler + Clone + Default + PartialEq + 'static> {
    /// Where sent messages go. The app shell picks the implementation.
    #[prop_or_default]
    pub handler: H,
}

#[function_component(Contact)]
pub fn contact<H>(props: &ContactProps<H>) -> Html
where
    H: SubmissionHandler + Clone + Default + PartialEq + 'static,
{
    let state = use_state(ContactFormState::default);
    let alive = use_memo(|_| Rc::new(Cell::new(true)), ());

    {
        let alive = alive.clone();
        use_effect_with_deps(move |_| move || alive.set(false), ());
    }

    let on_input = {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            if let Some((field, value)) = field_update(&e) {
                let mut next = (*state).clone();
                next.form.set(field, value);
                state.set(next);
            }
        })
    };

    let on_submit = {
        let state = state.clone();
        let alive = alive.clone();
        let handler = props.handler.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let mut next = (*state).clone();
            if !next.begin_submit() {
                return;
            }
            state.set(next.clone());

            let state = state.clone();
            let alive = alive.clone();
            let handler = handler.clone();
            spawn_local(async move {
                match submit_with(&handler, &mut next).await {
                    Ok(()) => info!("Contact message accepted"),
                    Err(e) => error!("Contact message failed: {}", e),
                }
                if !alive.get() {
                    return;
                }
                state.set(next.clone());

                if next.is_submitted() {
                    TimeoutFuture::new(config::CONFIRMATION_WINDOW_MS).await;
                    if alive.get() {
                        next.reset();
                        state.set(next);
                    }
                }
            });
        })
    };

    let submitting = state.is_submitting();
    let form = &state.form;

    let form_panel = if state.is_submitted() {
        html! {
            <div class="sent-confirmation">
                <div class="sent-icon">{"✔"}</div>
                <h3>{"Message Sent Successfully!"}</h3>
                <p>{"Thank you for contacting us. We'll get back to you soon."}</p>
            </div>
        }
    } else {
        html! {
            <form class="contact-form" onsubmit={on_submit}>
                <div class="form-field">
                    <label for="name">{"Full Name *"}</label>
                    <input
                        id="name"
                        name="name"
                        type="text"
                        required=true
                        disabled={submitting}
                        value={form.name.clone()}
                        oninput={on_input.clone()}
                        placeholder="Enter your full name"
                    />
                </div>
                <div class="form-field">
                    <label for="email">{"Email Address *"}</label>
                    <input
                        id="email"
                        name="email"
                        type="email"
                        required=true
                        disabled={submitting}
                        value={form.email.clone()}
                        oninput={on_input.clone()}
                        placeholder="your.email@example.com"
                    />
                </div>
                <div class="form-field">
                    <label for="phone">{"Phone Number"}</label>
                    <input
                        id="phone"
                        name="phone"
                        type="tel"
                        disabled={submitting}
                        value={form.phone.clone()}
                        oninput={on_input.clone()}
                        placeholder="+91 XXXXX XXXXX"
                    />
                </div>
                <div class="form-field">
                    <label for="subject">{"Subject *"}</label>
                    <input
                        id="subject"
                        name="subject"
                        type="text"
                        required=true
                        disabled={submitting}
                        value={form.subject.clone()}
                        oninput={on_input.clone()}
                        placeholder="What is this regarding?"
                    />
                </div>
                <div class="form-field">
                    <label for="message">{"Message *"}</label>
                    <textarea
                        id="message"
                        name="message"
                        required=true
                        disabled={submitting}
                        value={form.message.clone()}
                        oninput={on_input}
                        placeholder="Please describe your inquiry or concern in detail..."
                    />
                </div>
                <button type="submit" class="btn btn-primary btn-submit" disabled={submitting}>
                    if submitting {
                        <span class="button-spinner"></span>
                        {"Sending..."}
                    } else {
                        {"Send Message ➤"}
                    }
                </button>
            </form>
        }
    };

    html! {
        <div class="page contact-page">
            <section class="page-hero">
                <Reveal>
                    <div class="hero-badge">{"✉ Get in Touch"}</div>
                    <h1>{"Contact Us"}</h1>
                    <p>{"Have questions or need assistance? We're here to help protect your digital identity."}</p>
                </Reveal>
            </section>

            <section class="section section-white contact-cards-section">
                <div class="card-grid container">
                    {
                        for CONTACT_INFO.iter().enumerate().map(|(index, info)| {
                            let body = html! {
                                <>
                                    <div class="contact-icon">{info.icon}</div>
                                    <h3>{info.title}</h3>
                                    <p>{info.value}</p>
                                </>
                            };
                            html! {
                                <Reveal delay_ms={index as u32 * config::REVEAL_STAGGER_MS}>
                                    {
                                        match info.link {
                                            Some(link) => html! { <a href={link} class="glass-card contact-card linked">{body}</a> },
                                            None => html! { <div class="glass-card contact-card">{body}</div> },
                                        }
                                    }
                                </Reveal>
                            }
                        })
                    }
                </div>
            </section>

            <section class="section section-soft">
                <div class="contact-layout container">
                    <Reveal>
                        <h2>{"Send Us a Message"}</h2>
                        <p class="contact-lead">
                            {"Whether you have a question about cyber threats, need help with a security issue, or want to report suspicious activity, our team is ready to assist you."}
                        </p>
                        <div class="glass-card contact-note">
                            <h3>{"Response Time"}</h3>
                            <p>{"We typically respond to all inquiries within 24-48 hours during business days."}</p>
                        </div>
                        <div class="glass-card contact-note">
                            <h3>{"Emergency Support"}</h3>
                            <p>{"For urgent cyber security incidents, please call our toll-free helpline immediately."}</p>
                        </div>
                    </Reveal>
                    <Reveal delay_ms={100}>
                        <div class="glass-card form-panel">
                            { form_panel }
                        </div>
                    </Reveal>
                </div>
            </section>

            <section class="section section-white">
                <Reveal class="section-title">
                    <h2>{"We're Here to Help"}</h2>
                    <p>
                        {"The Digital Guardian team is committed to protecting Indian citizens from cyber threats. Whether you need information, assistance, or want to report a security concern, we're available to support you in creating a safer digital India."}
                    </p>
                </Reveal>
            </section>

            <style>
                {r#"
                .contact-card {
                    display: block;
                    height: 100%;
                    color: inherit;
                    text-decoration: none;
                }
                .contact-card.linked {
                    transition: transform 0.3s ease, box-shadow 0.3s ease;
                }
                .contact-card.linked:hover {
                    transform: scale(1.02);
                    box-shadow: 0 20px 25px rgba(0, 0, 0, 0.08);
                }
                .contact-card p, .contact-note p {
                    color: rgba(45, 55, 72, 0.7);
                }
                .contact-icon {
                    width: 3rem;
                    height: 3rem;
                    border-radius: 0.5rem;
                    background: linear-gradient(135deg, var(--primary), var(--teal));
                    color: #ffffff;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 1.5rem;
                    margin-bottom: 1rem;
                }
                .contact-layout {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 4rem;
                    align-items: start;
                }
                .contact-layout h2 {
                    font-size: 2.75rem;
                }
                .contact-lead {
                    font-size: 1.125rem;
                    line-height: 1.7;
                    color: rgba(45, 55, 72, 0.7);
                    margin-bottom: 2rem;
                }
                .contact-note {
                    margin-bottom: 1.5rem;
                }
                .form-panel {
                    padding: 2rem;
                    border-radius: 1rem;
                    box-shadow: 0 20px 25px rgba(0, 0, 0, 0.08);
                }
                .contact-form {
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                }
                .form-field label {
                    display: block;
                    font-size: 0.875rem;
                    font-weight: 500;
                    margin-bottom: 0.5rem;
                }
                .form-field input, .form-field textarea {
                    width: 100%;
                    padding: 0.75rem 1rem;
                    border-radius: 0.5rem;
                    border: 1px solid rgba(45, 55, 72, 0.15);
                    font: inherit;
                    background: #ffffff;
                }
                .form-field textarea {
                    min-height: 150px;
                    resize: vertical;
                }
                .btn-submit {
                    width: 100%;
                    justify-content: center;
                    padding: 1.25rem;
                }
                .button-spinner {
                    width: 1.25rem;
                    height: 1.25rem;
                    border: 2px solid #ffffff;
                    border-top-color: transparent;
                    border-radius: 50%;
                    animation: spin 1s linear infinite;
                }
                .sent-confirmation {
                    text-align: center;
                    padding: 3rem 0;
                }
                .sent-icon {
                    width: 4rem;
                    height: 4rem;
                    margin: 0 auto 1.5rem;
                    border-radius: 50%;
                    background: rgba(134, 239, 172, 0.2);
                    color: var(--subtle-green);
                    font-size: 2rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }
                @media (max-width: 1024px) {
                    .contact-layout {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </div>
    }
}
