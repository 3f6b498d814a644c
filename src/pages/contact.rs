use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::icons::{Icon, IconKind};
use crate::components::reveal::{reveal_class, use_reveal, Motion};
use crate::components::toast::use_toast;
use crate::contact::{self, ContactDraft, Field, FieldEdit, Handoff};
use crate::content::contact_info;
use crate::sections::Section;

/// Name and value of whichever form control fired the event.
fn edited_control(e: &InputEvent) -> Option<(String, String)> {
    if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
        return Some((input.name(), input.value()));
    }
    e.target_dyn_into::<HtmlTextAreaElement>()
        .map(|area| (area.name(), area.value()))
}

#[function_component(ContactSection)]
pub fn contact_section() -> Html {
    let node = use_node_ref();
    let revealed = use_reveal(&node, Section::Contact.reveal_trigger());
    let cascade = Section::Contact.cascade();
    let info_rows = cascade.from_slot(3, 100);

    let draft = use_reducer(ContactDraft::default);
    let toast = use_toast();

    let oninput = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let Some((name, value)) = edited_control(&e) else {
                return;
            };
            if let Some(field) = Field::from_name(&name) {
                draft.dispatch(FieldEdit { field, value });
            }
        })
    };

    let onsubmit = {
        let draft = draft.clone();
        Callback::from(move |e: SubmitEvent| {
            let toast = toast.clone();
            contact::submit(&e, &draft, Handoff::navigate, move |notice| toast.emit(notice));
        })
    };

    let call = Callback::from(|_: MouseEvent| Handoff::call().open());
    let mail = Callback::from(|_: MouseEvent| Handoff::mail_direct().open());

    html! {
        <section id={Section::Contact.anchor()} ref={node} class="section">
            <style>
                {r#"
                    .contact-columns {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 3rem;
                    }
                    .contact-card h3 { font-size: 1.5rem; margin: 0 0 1.5rem; }
                    .contact-form { display: flex; flex-direction: column; gap: 1.5rem; }
                    .contact-form .row { display: grid; grid-template-columns: 1fr 1fr; gap: 1rem; }
                    .contact-form label { display: block; font-size: 0.875rem; font-weight: 500; }
                    .contact-form input, .contact-form textarea {
                        width: 100%;
                        box-sizing: border-box;
                        margin-top: 0.5rem;
                        padding: 0.75rem 1rem;
                        border-radius: 8px;
                        border: 1px solid var(--glass-border);
                        background: rgba(255, 255, 255, 0.05);
                        color: inherit;
                        font: inherit;
                    }
                    .contact-form textarea { resize: none; }
                    .contact-form .glass-button { width: 100%; padding: 1.25rem; font-size: 1.1rem; }
                    .contact-side { display: flex; flex-direction: column; gap: 1.5rem; }
                    .contact-intro { color: var(--muted); line-height: 1.7; margin-bottom: 2rem; }
                    .contact-rows { display: flex; flex-direction: column; gap: 1.5rem; }
                    .contact-row { display: flex; align-items: center; gap: 1rem; }
                    .contact-row .icon-badge { width: 3rem; height: 3rem; margin: 0; transition: transform 0.3s; }
                    .contact-row:hover .icon-badge { transform: scale(1.1); }
                    .contact-label { font-size: 0.875rem; color: var(--muted); margin: 0; }
                    .contact-value { font-weight: 500; margin: 0; }
                    .contact-value:hover { text-decoration: underline; }
                    .quick-actions { display: grid; grid-template-columns: 1fr 1fr; gap: 1rem; }
                    .quick-actions .glass-button { flex-direction: column; padding: 1.5rem; gap: 0.5rem; }
                    @media (max-width: 1024px) {
                        .contact-columns { grid-template-columns: 1fr; }
                    }
                    @media (max-width: 768px) {
                        .contact-form .row { grid-template-columns: 1fr; }
                    }
                "#}
            </style>
            <div class="blob top-center primary" />
            <div class="blob bottom-right accent" />

            <div class="container">
                <div
                    class={classes!("section-heading", reveal_class(Motion::Rise, revealed))}
                    style={cascade.style(0)}
                >
                    <h2>{"Let's "}<span class="hero-text">{"Connect"}</span></h2>
                    <div class="heading-rule" />
                    <p>
                        {"Ready to bring your ideas to life? I'm here to help you create exceptional \
                          digital experiences. Let's discuss your project and turn your vision into reality."}
                    </p>
                </div>

                <div class="contact-columns">
                    <div
                        class={classes!("contact-card", "glass-card", "card-pad", reveal_class(Motion::FromLeft, revealed))}
                        style={cascade.style(1)}
                    >
                        <h3>{"Send a Message"}</h3>
                        <form class="contact-form" {onsubmit}>
                            <div class="row">
                                <div>
                                    <label for="name">{"Name *"}</label>
                                    <input
                                        id="name"
                                        name={Field::Name.name()}
                                        value={draft.get(Field::Name).to_string()}
                                        oninput={oninput.clone()}
                                        required=true
                                        placeholder="Your full name"
                                    />
                                </div>
                                <div>
                                    <label for="email">{"Email *"}</label>
                                    <input
                                        id="email"
                                        name={Field::Email.name()}
                                        type="email"
                                        value={draft.get(Field::Email).to_string()}
                                        oninput={oninput.clone()}
                                        required=true
                                        placeholder="your.email@example.com"
                                    />
                                </div>
                            </div>

                            <div>
                                <label for="subject">{"Subject"}</label>
                                <input
                                    id="subject"
                                    name={Field::Subject.name()}
                                    value={draft.get(Field::Subject).to_string()}
                                    oninput={oninput.clone()}
                                    placeholder="Project inquiry, collaboration, etc."
                                />
                            </div>

                            <div>
                                <label for="message">{"Message *"}</label>
                                <textarea
                                    id="message"
                                    name={Field::Message.name()}
                                    value={draft.get(Field::Message).to_string()}
                                    oninput={oninput}
                                    required=true
                                    rows="6"
                                    placeholder="Tell me about your project, timeline, and requirements..."
                                />
                            </div>

                            <button type="submit" class="glass-button">
                                <Icon kind={IconKind::Send} />
                                {"Send Message"}
                            </button>
                        </form>
                    </div>

                    <div
                        class={classes!("contact-side", reveal_class(Motion::FromRight, revealed))}
                        style={cascade.style(2)}
                    >
                        <div class="contact-card glass-card card-pad">
                            <h3>{"Get in Touch"}</h3>
                            <p class="contact-intro">
                                {"I'm always excited to discuss new projects and opportunities. \
                                  Whether you're a startup looking to build your first app or an \
                                  established business seeking to enhance your digital presence, \
                                  I'm here to help."}
                            </p>
                            <div class="contact-rows">
                                { for contact_info().into_iter().enumerate().map(|(index, info)| html! {
                                    <div
                                        key={info.label}
                                        class={classes!("contact-row", reveal_class(Motion::Rise, revealed))}
                                        style={info_rows.style(index)}
                                    >
                                        <div class="icon-badge">
                                            <Icon kind={info.icon} />
                                        </div>
                                        <div>
                                            <p class="contact-label">{ info.label }</p>
                                            {
                                                match &info.link {
                                                    Some(link) => html! {
                                                        <a class={classes!("contact-value", info.accent)} href={link.href()}>
                                                            { info.value }
                                                        </a>
                                                    },
                                                    None => html! {
                                                        <p class={classes!("contact-value", info.accent)}>{ info.value }</p>
                                                    },
                                                }
                                            }
                                        </div>
                                    </div>
                                }) }
                            </div>
                        </div>

                        <div class="quick-actions">
                            <button class="glass-button outline" onclick={call}>
                                <Icon kind={IconKind::Phone} class={classes!("text-accent")} />
                                <span>{"Call Now"}</span>
                            </button>
                            <button class="glass-button outline" onclick={mail}>
                                <Icon kind={IconKind::Mail} class={classes!("text-primary")} />
                                <span>{"Email Direct"}</span>
                            </button>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
