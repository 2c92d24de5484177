use leptos::{ev::SubmitEvent, html, prelude::*};
use log::debug;

use super::{
    browser::BrowserScheduler,
    reveal::{motion_style, use_reveal, SectionTitle},
};
use crate::{
    config::SiteSettings,
    contact::{ContactForm, ContactFormController, Field, SimulatedTransport, SubmissionStatus},
    content::{ContactDetails, SocialLink},
    motion::{Entrance, Motion},
};

type PageController = ContactFormController<SimulatedTransport<BrowserScheduler>, BrowserScheduler>;

const SUCCESS_MESSAGE: &str = "Thank you for your message! I'll get back to you soon.";

#[component]
pub fn Contact(details: &'static ContactDetails, socials: &'static [SocialLink]) -> impl IntoView {
    let settings = use_context::<SiteSettings>().unwrap_or_default();
    let section_ref = NodeRef::<html::Section>::new();
    let revealed = use_reveal(section_ref);

    // The controller owns the form; the signal is a snapshot for rendering.
    let form = RwSignal::new(ContactForm::new());
    let controller = StoredValue::new_local(
        PageController::new(
            SimulatedTransport::new(BrowserScheduler, settings.send_delay()),
            BrowserScheduler,
            settings.success_display(),
        )
        .with_listener(move |snapshot| form.set(snapshot.clone())),
    );
    on_cleanup(move || {
        controller.try_with_value(|c| c.teardown());
    });

    let on_input = Callback::new(move |(field, value): (Field, String)| {
        controller.with_value(|c| c.set_field(field, value));
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        match controller.with_value(|c| c.submit()) {
            Ok(submission) => leptos::task::spawn_local(async move {
                let outcome = submission.await;
                debug!("contact submission finished: {outcome:?}");
            }),
            Err(rejected) => debug!("contact submission rejected: {rejected}"),
        }
    };

    view! {
        <section id="contact" node_ref=section_ref class="py-20 relative">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <SectionTitle title="Get In Touch" revealed=revealed subtitle=details.intro.clone() />

                <div class="grid grid-cols-1 lg:grid-cols-2 gap-12">
                    <div style=motion_style(
                        Motion::new(Entrance::SlideFromLeft(30.0)).delay_ms(200),
                        revealed,
                    )>
                        <ContactInfo details=details socials=socials />
                    </div>

                    <div style=motion_style(
                        Motion::new(Entrance::SlideFromRight(30.0)).delay_ms(400),
                        revealed,
                    )>
                        <form on:submit=on_submit class="space-y-6" novalidate=true>
                            {Field::ALL
                                .into_iter()
                                .map(|field| view! { <FormField field=field form=form on_input=on_input /> })
                                .collect_view()}
                            <SubmitButton form=form />
                            <StatusBanner form=form />
                        </form>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ContactInfo(details: &'static ContactDetails, socials: &'static [SocialLink]) -> impl IntoView {
    view! {
        <h3 class="text-2xl text-gray-200 mb-6">"Contact Information"</h3>
        <div class="space-y-4 mb-8">
            {details
                .items
                .iter()
                .map(|item| {
                    let value = match item.href.as_deref() {
                        Some(href) => {
                            view! {
                                <a href=href class="text-gray-200 hover:text-cyan-400 transition-colors">
                                    {item.value.as_str()}
                                </a>
                            }
                                .into_any()
                        }
                        None => view! { <p class="text-gray-200">{item.value.as_str()}</p> }.into_any(),
                    };
                    view! {
                        <div class="flex items-center gap-4 p-4 bg-gray-800/30 rounded-lg border border-gray-700 hover:border-cyan-400 transition-all group">
                            <div class=format!(
                                "w-12 h-12 bg-gradient-to-br {} rounded-lg flex items-center justify-center flex-shrink-0 group-hover:scale-110 transition-transform text-xl",
                                item.accent.gradient(),
                            )>{item.icon.as_str()}</div>
                            <div>
                                <p class="text-gray-400 text-sm">{item.label.as_str()}</p>
                                {value}
                            </div>
                        </div>
                    }
                })
                .collect_view()}
        </div>

        <h4 class="text-lg text-gray-200 mb-4">"Connect with me"</h4>
        <div class="flex gap-4">
            {socials
                .iter()
                .map(|social| {
                    view! {
                        <a
                            href=social.href.as_str()
                            target="_blank"
                            rel="noopener noreferrer"
                            class="group p-4 bg-gradient-to-br from-gray-600 to-gray-800 rounded-lg hover:scale-110 transition-all shadow-lg hover:shadow-xl flex items-center gap-3"
                        >
                            <i class=format!("{} text-2xl text-white", social.icon)></i>
                            <span class="text-white hidden sm:inline">{social.label.as_str()}</span>
                        </a>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn FormField(
    field: Field,
    form: RwSignal<ContactForm>,
    on_input: Callback<(Field, String)>,
) -> impl IntoView {
    let value = move || form.with(|f| f.record().get(field).to_string());
    let error = move || form.with(|f| f.error(field));
    let class = move || {
        let border = if error().is_some() {
            "border-red-400"
        } else {
            "border-gray-700"
        };
        format!(
            "w-full px-4 py-3 bg-gray-800/50 border {border} rounded-lg focus:outline-none focus:border-cyan-400 transition-colors text-gray-200"
        )
    };

    let kind = if field == Field::Email { "email" } else { "text" };
    let input = match field {
        Field::Message => view! {
            <textarea
                id=field.as_str()
                name=field.as_str()
                rows=5
                placeholder=field.placeholder()
                class=move || format!("{} resize-none", class())
                prop:value=value
                on:input=move |ev| on_input.run((field, event_target_value(&ev)))
            ></textarea>
        }
        .into_any(),
        _ => view! {
            <input
                type=kind
                id=field.as_str()
                name=field.as_str()
                placeholder=field.placeholder()
                class=class
                prop:value=value
                on:input=move |ev| on_input.run((field, event_target_value(&ev)))
            />
        }
        .into_any(),
    };

    view! {
        <div>
            <label for=field.as_str() class="block text-gray-300 mb-2">
                {format!("{} *", field.label())}
            </label>
            {input}
            {move || {
                error()
                    .map(|e| {
                        view! {
                            <p class="mt-1 text-sm text-red-400 flex items-center gap-1">
                                "⚠ " {e.to_string()}
                            </p>
                        }
                    })
            }}
        </div>
    }
}

#[component]
fn SubmitButton(form: RwSignal<ContactForm>) -> impl IntoView {
    let status = move || form.with(ContactForm::status);
    let class = move || {
        let look = match status() {
            SubmissionStatus::Submitting => "bg-gray-600 cursor-not-allowed",
            SubmissionStatus::Succeeded => "bg-gradient-to-r from-emerald-500 to-emerald-600",
            SubmissionStatus::Idle | SubmissionStatus::Failed => {
                "bg-gradient-to-r from-cyan-500 to-emerald-500 hover:from-cyan-400 hover:to-emerald-400 shadow-lg shadow-cyan-500/30 hover:shadow-cyan-500/50"
            }
        };
        format!("w-full px-6 py-4 rounded-lg transition-all duration-300 flex items-center justify-center gap-2 {look}")
    };
    let label = move || match status() {
        SubmissionStatus::Submitting => view! {
            <div class="w-5 h-5 border-2 border-white border-t-transparent rounded-full animate-spin"></div>
            "Sending..."
        }
        .into_any(),
        SubmissionStatus::Succeeded => view! { "✓ Message Sent!" }.into_any(),
        SubmissionStatus::Idle | SubmissionStatus::Failed => view! { "➤ Send Message" }.into_any(),
    };

    view! {
        <button
            type="submit"
            disabled=move || status() == SubmissionStatus::Submitting
            class=class
        >
            {label}
        </button>
    }
}

#[component]
fn StatusBanner(form: RwSignal<ContactForm>) -> impl IntoView {
    move || match form.with(ContactForm::status) {
        SubmissionStatus::Succeeded => Some(
            view! {
                <div class="p-4 bg-emerald-400/10 border border-emerald-400 rounded-lg text-emerald-400 text-center">
                    {SUCCESS_MESSAGE}
                </div>
            }
            .into_any(),
        ),
        SubmissionStatus::Failed => {
            let message = form.with(|f| f.failure().unwrap_or_default().to_string());
            Some(
                view! {
                    <div
                        role="alert"
                        class="p-4 bg-red-400/10 border border-red-400 rounded-lg text-red-400 text-center"
                    >
                        {message}
                    </div>
                }
                .into_any(),
            )
        }
        SubmissionStatus::Idle | SubmissionStatus::Submitting => None,
    }
}
