//! Profile page pieces: account card with avatar upload, password change and
//! the user's vote history.

use api::forms::{submit_avatar, submit_change_password};
use api::{AvatarUpload, ChangePasswordForm, Field, FormErrors, Message, Mutation, SubmitError};
use dioxus::prelude::*;

use crate::auth::use_auth;
use crate::hooks::{use_current_user, use_user_votes};
use crate::portal::use_portal;

/// MIME type for a picked file, from its extension.
pub fn mime_for(file_name: &str) -> &'static str {
    let ext = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        _ => "application/octet-stream",
    }
}

#[component]
fn FieldError(errors: FormErrors, field: Field) -> Element {
    let portal = use_portal();
    match errors.get(field) {
        Some(message) => rsx! {
            p { class: "field-error text-xs text-red-400 mt-1", {portal.text(message)} }
        },
        None => rsx! {},
    }
}

#[component]
pub fn AvatarUploader() -> Element {
    let portal = use_portal();
    let mut auth = use_auth();
    let mut notice = use_signal(|| None::<(bool, Message)>);

    let uploader = portal.clone();
    let onchange = move |evt: FormEvent| {
        let mut portal = uploader.clone();
        async move {
            let Some(engine) = evt.files() else {
                return;
            };
            let Some(name) = engine.files().into_iter().next() else {
                return;
            };
            let Some(bytes) = engine.read_file(&name).await else {
                tracing::warn!(file = %name, "could not read picked file");
                return;
            };
            let upload = AvatarUpload::new(name.clone(), mime_for(&name), bytes);
            match submit_avatar(&portal.client, &upload).await {
                Ok(user) => {
                    auth.write().set_user(user);
                    portal.after_mutation(Mutation::UploadAvatar);
                    notice.set(Some((true, Message::AvatarUploaded)));
                }
                Err(SubmitError::Invalid(errors)) => {
                    let message = errors.get(Field::Avatar).unwrap_or(Message::AvatarUploadFailed);
                    notice.set(Some((false, message)));
                }
                Err(SubmitError::Api(e)) => {
                    tracing::error!("avatar upload failed: {e}");
                    notice.set(Some((false, Message::AvatarUploadFailed)));
                }
            }
        }
    };

    rsx! {
        label {
            class: "avatar-upload cursor-pointer text-sm text-brand-green",
            {portal.text(Message::UploadAvatar)}
            input {
                class: "hidden",
                r#type: "file",
                accept: ".jpg,.jpeg,.png",
                onchange,
            }
        }
        if let Some((ok, message)) = notice() {
            p {
                class: if ok { "text-xs text-brand-green" } else { "text-xs text-red-400" },
                {portal.text(message)}
            }
        }
    }
}

#[component]
pub fn ChangePasswordPanel() -> Element {
    let portal = use_portal();
    let mut form = use_signal(ChangePasswordForm::default);
    let mut errors = use_signal(FormErrors::new);
    let mut submitting = use_signal(|| false);
    let mut notice = use_signal(|| None::<(bool, Message)>);

    let client = portal.client.clone();
    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        async move {
            if submitting() {
                return;
            }
            submitting.set(true);
            notice.set(None);
            let snapshot = form();
            match submit_change_password(&client, &snapshot).await {
                Ok(()) => {
                    form.set(ChangePasswordForm::default());
                    errors.set(FormErrors::new());
                    notice.set(Some((true, Message::PasswordChanged)));
                }
                Err(SubmitError::Invalid(found)) => errors.set(found),
                Err(SubmitError::Api(e)) => {
                    tracing::error!("password change failed: {e}");
                    notice.set(Some((false, Message::PasswordChangeFailed)));
                }
            }
            submitting.set(false);
        }
    };

    let fields = [
        (Field::OldPassword, form.read().old_password.clone()),
        (Field::NewPassword, form.read().new_password.clone()),
        (
            Field::NewPasswordConfirmation,
            form.read().new_password_confirmation.clone(),
        ),
    ];
    let button = if submitting() {
        Message::Changing
    } else {
        Message::ChangePassword
    };

    rsx! {
        form {
            class: "change-password flex flex-col gap-3",
            onsubmit,
            for (field, value) in fields {
                div {
                    key: "{field:?}",
                    label { class: "text-sm", {portal.text(field.label())} }
                    input {
                        class: "w-full mt-1 px-3 py-2 rounded bg-neutral-800",
                        r#type: "password",
                        value: "{value}",
                        oninput: move |evt: FormEvent| {
                            form.write().set(field, evt.value());
                            errors.write().clear(field);
                        },
                    }
                    FieldError { errors: errors(), field }
                }
            }
            button {
                class: "py-2 rounded bg-brand-green text-white font-semibold",
                r#type: "submit",
                disabled: submitting(),
                {portal.text(button)}
            }
            if let Some((ok, message)) = notice() {
                p {
                    class: if ok { "text-sm text-brand-green" } else { "text-sm text-red-400" },
                    {portal.text(message)}
                }
            }
        }
    }
}

#[component]
pub fn VotesTable() -> Element {
    let portal = use_portal();
    let state = use_user_votes().state();

    if let Some(error) = state.error {
        return rsx! { p { class: "text-red-400", {portal.text(error.message())} } };
    }
    let Some(votes) = state.data else {
        return rsx! { p { {portal.text(Message::Loading)} } };
    };
    if votes.is_empty() {
        return rsx! { p { class: "text-neutral-400", {portal.text(Message::NoVotesYet)} } };
    }

    rsx! {
        table {
            class: "votes-table w-full text-sm",
            thead {
                tr {
                    th { class: "text-left", {portal.text(Message::ServerLabel)} }
                    th { class: "text-left", {portal.text(Message::RatesLabel)} }
                    th { class: "text-left", {portal.text(Message::IpAddressLabel)} }
                    th { class: "text-left", {portal.text(Message::VotedAtLabel)} }
                }
            }
            tbody {
                for vote in votes {
                    tr {
                        key: "{vote.id}",
                        td { "{vote.server.announce_name}" }
                        td { "x{vote.server.rate}" }
                        td { class: "font-mono", "{vote.ip_label()}" }
                        td { "{vote.voted_on()}" }
                    }
                }
            }
        }
    }
}

/// Account card, password form and votes, for the signed-in user.
#[component]
pub fn ProfileView() -> Element {
    let portal = use_portal();
    let auth = use_auth();
    let state = use_current_user().state();

    if !auth.read().is_authenticated() {
        return rsx! { p { class: "text-neutral-400", {portal.text(Message::AuthorizationError)} } };
    }
    if state.error.is_some() {
        return rsx! { p { class: "text-red-400", {portal.text(Message::ProfileLoadError)} } };
    }
    let Some(user) = state.data.or_else(|| auth.read().user().cloned()) else {
        return rsx! { p { {portal.text(Message::Loading)} } };
    };

    rsx! {
        div {
            class: "profile grid gap-6 md:grid-cols-2",
            section {
                class: "flex flex-col items-center gap-2",
                img {
                    class: "w-24 h-24 rounded-full object-cover",
                    src: "{user.avatar_or_default()}",
                    alt: "{user.name}",
                }
                h2 { class: "text-lg font-semibold", "{user.name}" }
                if let Some(email) = user.email.clone() {
                    span { class: "text-sm text-neutral-400", "{email}" }
                }
                AvatarUploader {}
            }
            section {
                h2 { class: "text-lg font-semibold mb-3", {portal.text(Message::ChangePassword)} }
                ChangePasswordPanel {}
            }
            section {
                class: "md:col-span-2",
                h2 { class: "text-lg font-semibold mb-3", {portal.text(Message::MyVotes)} }
                VotesTable {}
            }
        }
    }
}
