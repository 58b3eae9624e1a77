//! Contact section - inputs bound to the shared [`ContactForm`].

use leptos::prelude::*;
use portfolio_core::contact::{ContactField, ContactForm, SubmissionStatus};

use super::{ICON_LOADER, ICON_SEND, Icon};

/// Form fields and submit button.
///
/// The form state lives with the caller; `on_submit` runs the actual request
/// so this component stays free of any transport.
#[component]
pub fn ContactSection(form: RwSignal<ContactForm>, on_submit: Callback<()>) -> impl IntoView {
    let status = move || form.with(ContactForm::status);
    let value = move |field: ContactField| form.with(|f| f.value(field).to_string());

    view! {
        <section id="contact" class="contact-section">
            <div class="contact-card">
                <div class="contact-glow"></div>
                <h2 class="contact-title">"Ready to Collaborate?"</h2>
                <p class="contact-lead">
                    "Send me a message and let's discuss how we can build something extraordinary together."
                </p>

                <form
                    class="contact-form"
                    data-status=move || status().as_label()
                    on:submit=move |ev| {
                        ev.prevent_default();
                        on_submit.run(());
                    }
                >
                    <input
                        type="text"
                        name="name"
                        placeholder="Your Name"
                        required=true
                        prop:value=move || value(ContactField::Name)
                        on:input=move |ev| {
                            form.update(|f| f.edit(ContactField::Name, event_target_value(&ev)))
                        }
                    />
                    <input
                        type="email"
                        name="email"
                        placeholder="Your Email"
                        required=true
                        prop:value=move || value(ContactField::Email)
                        on:input=move |ev| {
                            form.update(|f| f.edit(ContactField::Email, event_target_value(&ev)))
                        }
                    />
                    <input
                        type="text"
                        name="subject"
                        placeholder="Subject"
                        required=true
                        prop:value=move || value(ContactField::Subject)
                        on:input=move |ev| {
                            form.update(|f| f.edit(ContactField::Subject, event_target_value(&ev)))
                        }
                    />
                    <textarea
                        name="message"
                        rows="4"
                        placeholder="Your Message"
                        required=true
                        prop:value=move || value(ContactField::Message)
                        on:input=move |ev| {
                            form.update(|f| f.edit(ContactField::Message, event_target_value(&ev)))
                        }
                    ></textarea>
                    <button
                        type="submit"
                        class="submit-btn"
                        disabled=move || !status().accepts_submit()
                    >
                        {move || submit_label(status())}
                    </button>
                </form>
            </div>
        </section>
    }
}

fn submit_label(status: SubmissionStatus) -> AnyView {
    match status {
        SubmissionStatus::Idle => view! {
            "Send Message"
            <Icon path=ICON_SEND size="18" />
        }
        .into_any(),
        SubmissionStatus::Sending => view! { <Icon path=ICON_LOADER class="spin" /> }.into_any(),
        SubmissionStatus::Success => view! { "Message Sent!" }.into_any(),
        SubmissionStatus::Error => view! { "Failed. Retry?" }.into_any(),
    }
}
