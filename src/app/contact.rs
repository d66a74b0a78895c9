use leptos::{ev::SubmitEvent, prelude::*, task::spawn_local};
use leptos_use::{use_timeout_fn, UseTimeoutFnReturn};

use super::homepage::SectionHeading;
use crate::contact::{
    ContactForm, ContactResponse, FALLBACK_ERROR, REQUEST_TIMEOUT, SENT_BADGE_DURATION,
};
use crate::content::{PROFILE, SOCIAL_LINKS};

#[server(endpoint = "send_contact")]
pub async fn send_contact(
    name: String,
    email: String,
    message: String,
) -> Result<ContactResponse, ServerFnError> {
    use crate::contact::{relay::ContactRelay, ContactRequest};

    let relay = use_context::<ContactRelay>()
        .ok_or_else(|| ServerFnError::new("Contact relay is not configured"))?;
    relay
        .relay(&ContactRequest::new(&name, &email, &message))
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

fn server_error_message(err: ServerFnError) -> String {
    match err {
        ServerFnError::ServerError(msg) => msg,
        _ => FALLBACK_ERROR.to_string(),
    }
}

#[component]
pub fn ContactSection() -> impl IntoView {
    let cards = [
        ("Email", PROFILE.email, Some(PROFILE.mailto())),
        ("Phone", PROFILE.phone, Some(PROFILE.tel())),
        ("Location", PROFILE.location, None),
    ];

    view! {
        <section id="contact" class="py-16 px-6 w-full">
            <div class="max-w-6xl mx-auto">
                <SectionHeading
                    eyebrow="Get In Touch"
                    title="Let's Work Together"
                    subtitle="Have a project in mind or just want to say hello? Drop me a message."
                />
                <div class="grid lg:grid-cols-2 gap-12">
                    <div class="space-y-6">
                        {cards
                            .into_iter()
                            .map(|(label, value, href)| {
                                view! {
                                    <div class="p-6 rounded-2xl border border-muted/30">
                                        <p class="text-muted text-sm">{label}</p>
                                        {match href {
                                            Some(href) => {
                                                view! {
                                                    <a href=href class="text-lg font-medium hover:text-cyan">
                                                        {value}
                                                    </a>
                                                }
                                                    .into_any()
                                            }
                                            None => {
                                                view! { <p class="text-lg font-medium">{value}</p> }
                                                    .into_any()
                                            }
                                        }}
                                    </div>
                                }
                            })
                            .collect_view()}
                        <div class="flex gap-4">
                            {SOCIAL_LINKS
                                .iter()
                                .map(|link| {
                                    view! {
                                        <a
                                            href=link.href
                                            target="_blank"
                                            rel="noopener noreferrer"
                                            class="px-4 py-2 rounded-full border border-muted/30 hover:text-cyan"
                                        >
                                            {link.label}
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>
                        <div class="p-6 rounded-2xl border border-green/30 bg-green/10">
                            <p class="font-semibold text-green">"Available for opportunities"</p>
                            <p class="text-muted text-sm mt-2">
                                "Open to full-time roles, freelance work and interesting collaborations."
                            </p>
                        </div>
                    </div>
                    <ContactFormPanel />
                </div>
            </div>
        </section>
    }
}

#[component]
fn ContactFormPanel() -> impl IntoView {
    let form = RwSignal::new(ContactForm::new());

    let UseTimeoutFnReturn {
        start: start_request_timeout,
        ..
    } = use_timeout_fn(
        move |ticket: u64| {
            if form.try_update(|f| f.time_out(ticket)).unwrap_or(false) {
                log::warn!("contact request {ticket} timed out");
            }
        },
        REQUEST_TIMEOUT.as_millis() as f64,
    );

    let UseTimeoutFnReturn {
        start: start_sent_badge,
        ..
    } = use_timeout_fn(
        move |_: ()| form.update(|f| f.dismiss_sent()),
        SENT_BADGE_DURATION.as_millis() as f64,
    );

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let Some((ticket, request)) = form.try_update(|f| f.submit()).flatten() else {
            return;
        };
        start_request_timeout(ticket);

        let start_sent_badge = start_sent_badge.clone();
        spawn_local(async move {
            let result = send_contact(
                request.name.unwrap_or_default(),
                request.email.unwrap_or_default(),
                request.message.unwrap_or_default(),
            )
            .await
            .map_err(server_error_message);
            if let Err(e) = &result {
                log::error!("contact request {ticket} failed: {e}");
            }
            let applied = form
                .try_update(|f| f.resolve(ticket, result))
                .unwrap_or(false);
            if applied && form.with_untracked(|f| f.is_sent()) {
                start_sent_badge(());
            }
        });
    };

    let busy = move || form.with(|f| f.is_submitting() || f.is_sent());
    let input_class = "w-full px-4 py-3 rounded-lg bg-transparent border border-muted/30 focus:border-cyan focus:outline-none disabled:opacity-50";

    view! {
        <form class="p-8 rounded-2xl border border-muted/30 space-y-6" on:submit=on_submit>
            <div>
                <label for="contact-name" class="block text-sm font-medium mb-2">
                    "Your Name"
                </label>
                <input
                    id="contact-name"
                    type="text"
                    required
                    placeholder="John Doe"
                    class=input_class
                    disabled=move || form.with(|f| f.is_submitting())
                    prop:value=move || form.with(|f| f.fields.name.clone())
                    on:input=move |ev| form.update(|f| f.fields.name = event_target_value(&ev))
                />
            </div>
            <div>
                <label for="contact-email" class="block text-sm font-medium mb-2">
                    "Email Address"
                </label>
                <input
                    id="contact-email"
                    type="email"
                    required
                    placeholder="john@example.com"
                    class=input_class
                    disabled=move || form.with(|f| f.is_submitting())
                    prop:value=move || form.with(|f| f.fields.email.clone())
                    on:input=move |ev| form.update(|f| f.fields.email = event_target_value(&ev))
                />
            </div>
            <div>
                <label for="contact-message" class="block text-sm font-medium mb-2">
                    "Message"
                </label>
                <textarea
                    id="contact-message"
                    rows="5"
                    required
                    placeholder="Tell me about your project..."
                    class=input_class
                    disabled=move || form.with(|f| f.is_submitting())
                    prop:value=move || form.with(|f| f.fields.message.clone())
                    on:input=move |ev| form.update(|f| f.fields.message = event_target_value(&ev))
                ></textarea>
            </div>
            {move || {
                form.with(|f| f.error().map(str::to_string))
                    .map(|e| {
                        view! {
                            <p class="rounded-lg px-4 py-3 text-sm text-red bg-red/10 border border-red/30">
                                {e}
                            </p>
                        }
                    })
            }}
            <button
                type="submit"
                class="w-full py-4 rounded-lg font-medium bg-cyan/20 hover:bg-cyan/30 text-cyan border border-cyan/30 disabled:cursor-not-allowed disabled:opacity-60"
                disabled=busy
            >
                {move || {
                    form.with(|f| {
                        if f.is_submitting() {
                            "Sending..."
                        } else if f.is_sent() {
                            "Message Sent!"
                        } else {
                            "Send Message"
                        }
                    })
                }}
            </button>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_error_message_keeps_server_text() {
        assert_eq!(
            server_error_message(ServerFnError::ServerError(
                "All fields are required".to_string()
            )),
            "All fields are required"
        );
        assert_eq!(
            server_error_message(ServerFnError::Request("connection reset".to_string())),
            FALLBACK_ERROR
        );
    }
}
