//! "Add server" form. Every edit is saved as a draft in durable storage and
//! restored on the next visit; a successful submit clears it.

use api::forms::submit_create_server;
use api::{CreateServerForm, Field, FormErrors, Message, Mutation, SubmitError};
use dioxus::prelude::*;

use crate::hooks::{use_chronicles, use_projects, use_server_types};
use crate::portal::use_portal;

const TEXT_FIELDS: [(Field, bool); 7] = [
    (Field::SiteUrl, false),
    (Field::OpeningDate, false),
    (Field::AnnouncementName, false),
    (Field::RatingName, false),
    (Field::Rates, false),
    (Field::ShortDescription, true),
    (Field::FullDescription, true),
];

fn text_value(form: &CreateServerForm, field: Field) -> String {
    match field {
        Field::SiteUrl => form.site_url.clone(),
        Field::OpeningDate => form.opening_date.clone(),
        Field::AnnouncementName => form.announcement_name.clone(),
        Field::RatingName => form.rating_name.clone(),
        Field::Rates => form.rates.clone(),
        Field::ShortDescription => form.short_description.clone(),
        Field::FullDescription => form.full_description.clone(),
        _ => String::new(),
    }
}

fn parse_id(raw: &str) -> Option<u64> {
    raw.parse().ok()
}

#[component]
pub fn CreateServerView() -> Element {
    let portal = use_portal();
    let credentials = portal.client.credentials().clone();
    let mut form = use_signal(move || {
        CreateServerForm::load_draft(credentials.durable()).unwrap_or_default()
    });
    let mut errors = use_signal(FormErrors::new);
    let mut submitting = use_signal(|| false);
    let mut notice = use_signal(|| None::<(bool, Message)>);

    let projects = use_projects().state().data.unwrap_or_default();
    let chronicles = use_chronicles().state().data.unwrap_or_default();
    let server_types = use_server_types().state().data.unwrap_or_default();

    let drafts = portal.client.credentials().clone();
    use_effect(move || {
        let current = form.read();
        if *current == CreateServerForm::default() {
            CreateServerForm::clear_draft(drafts.durable());
        } else {
            current.save_draft(drafts.durable());
        }
    });

    let submitter = portal.clone();
    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        if submitting() {
            return;
        }
        let mut portal = submitter.clone();
        spawn(async move {
            submitting.set(true);
            notice.set(None);
            let snapshot = form();
            match submit_create_server(&portal.client, &snapshot).await {
                Ok(server) => {
                    tracing::info!(id = server.id, slug = %server.url_slug, "server created");
                    CreateServerForm::clear_draft(portal.client.credentials().durable());
                    form.set(CreateServerForm::default());
                    errors.set(FormErrors::new());
                    portal.after_mutation(Mutation::CreateServer);
                    notice.set(Some((true, Message::ServerCreated)));
                }
                Err(SubmitError::Invalid(found)) => errors.set(found),
                Err(SubmitError::Api(e)) => {
                    tracing::error!("server creation failed: {e}");
                    notice.set(Some((false, Message::ServerCreateFailed)));
                }
            }
            submitting.set(false);
        });
    };

    let current = form();
    let found = errors();
    let error_text = |field: Field| found.get(field).map(|m| portal.text(m));
    let type_options = server_types.clone();

    rsx! {
        form {
            class: "create-server grid gap-4 md:grid-cols-2",
            onsubmit,
            for (field, multiline) in TEXT_FIELDS {
                div {
                    key: "{field:?}",
                    class: if multiline { "md:col-span-2" } else { "" },
                    label { class: "text-sm", {portal.text(field.label())} }
                    if multiline {
                        textarea {
                            class: "w-full mt-1 px-3 py-2 rounded bg-neutral-800",
                            rows: "4",
                            value: text_value(&current, field),
                            oninput: move |evt: FormEvent| {
                                form.write().set(field, evt.value());
                                errors.write().clear(field);
                            },
                        }
                    } else {
                        input {
                            class: "w-full mt-1 px-3 py-2 rounded bg-neutral-800",
                            r#type: "text",
                            value: text_value(&current, field),
                            oninput: move |evt: FormEvent| {
                                form.write().set(field, evt.value());
                                errors.write().clear(field);
                            },
                        }
                    }
                    if let Some(text) = error_text(field) {
                        p { class: "text-xs text-red-400 mt-1", "{text}" }
                    }
                }
            }
            div {
                label { class: "text-sm", {portal.text(Field::Project.label())} }
                select {
                    class: "w-full mt-1 px-3 py-2 rounded bg-neutral-800",
                    value: current.project_id.map(|id| id.to_string()).unwrap_or_default(),
                    onchange: move |evt: FormEvent| {
                        form.write().project_id = parse_id(&evt.value());
                        errors.write().clear(Field::Project);
                    },
                    option { value: "", "-" }
                    for project in projects {
                        option { key: "{project.id}", value: "{project.id}", "{project.name}" }
                    }
                }
                if let Some(text) = error_text(Field::Project) {
                    p { class: "text-xs text-red-400 mt-1", "{text}" }
                }
            }
            div {
                label { class: "text-sm", {portal.text(Field::Chronicle.label())} }
                select {
                    class: "w-full mt-1 px-3 py-2 rounded bg-neutral-800",
                    value: current.chronicle_id.map(|id| id.to_string()).unwrap_or_default(),
                    onchange: move |evt: FormEvent| {
                        form.write().chronicle_id = parse_id(&evt.value());
                        errors.write().clear(Field::Chronicle);
                    },
                    option { value: "", "-" }
                    for chronicle in chronicles {
                        option { key: "{chronicle.id}", value: "{chronicle.id}", "{chronicle.name}" }
                    }
                }
                if let Some(text) = error_text(Field::Chronicle) {
                    p { class: "text-xs text-red-400 mt-1", "{text}" }
                }
            }
            div {
                label { class: "text-sm", {portal.text(Field::ServerType.label())} }
                select {
                    class: "w-full mt-1 px-3 py-2 rounded bg-neutral-800",
                    value: current.server_type_id.map(|id| id.to_string()).unwrap_or_default(),
                    onchange: move |evt: FormEvent| {
                        let id = parse_id(&evt.value());
                        let picked = server_types.iter().find(|t| Some(t.id) == id).cloned();
                        form.write().select_server_type(picked.as_ref());
                        errors.write().clear(Field::ServerType);
                    },
                    option { value: "", "-" }
                    for server_type in type_options {
                        option { key: "{server_type.id}", value: "{server_type.id}", "{server_type.name}" }
                    }
                }
                if let Some(text) = error_text(Field::ServerType) {
                    p { class: "text-xs text-red-400 mt-1", "{text}" }
                }
            }
            div {
                class: "md:col-span-2",
                button {
                    class: "w-full py-2 rounded bg-brand-green text-white font-semibold",
                    r#type: "submit",
                    disabled: submitting(),
                    {portal.text(if submitting() { Message::CreatingServer } else { Message::CreateServer })}
                }
                if let Some((ok, message)) = notice() {
                    p {
                        class: if ok { "text-sm text-brand-green mt-2" } else { "text-sm text-red-400 mt-2" },
                        {portal.text(message)}
                    }
                }
            }
        }
    }
}
