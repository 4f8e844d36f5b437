//! # Form validation
//!
//! Each form validates synchronously into either the request body it feeds or
//! a [`FormErrors`] map. The `submit_*` helpers validate first and only touch
//! the network for a valid form.
//!
//! | Form | Produces | Endpoint |
//! |------|----------|----------|
//! | [`ChangePasswordForm`] | [`ChangeUserPassword`] | `POST /user/password` |
//! | [`CreateServerForm`] | [`CreateServerRequest`] | `POST /servers` |
//! | [`AvatarUpload`] | [`FilePart`] | `POST /user/avatar` |

use std::collections::BTreeMap;

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use store::StorageSlot;
use thiserror::Error;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::i18n::Message;
use crate::models::{
    rate_key, ChangeUserPassword, CreateServerRequest, Server, ServerType, User,
};
use crate::transport::{FilePart, Transport};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    OldPassword,
    NewPassword,
    NewPasswordConfirmation,
    SiteUrl,
    OpeningDate,
    AnnouncementName,
    RatingName,
    ServerType,
    Rates,
    ShortDescription,
    FullDescription,
    Project,
    Chronicle,
    Avatar,
}

impl Field {
    /// Caption shown next to the input.
    pub fn label(self) -> Message {
        match self {
            Field::OldPassword => Message::OldPasswordLabel,
            Field::NewPassword => Message::NewPasswordLabel,
            Field::NewPasswordConfirmation => Message::RepeatPasswordLabel,
            Field::SiteUrl => Message::SiteUrlLabel,
            Field::OpeningDate => Message::OpeningDateLabel,
            Field::AnnouncementName => Message::AnnouncementLabel,
            Field::RatingName => Message::RatingNameLabel,
            Field::ServerType => Message::ServerTypeLabel,
            Field::Rates => Message::RatesLabel,
            Field::ShortDescription => Message::ShortDescriptionLabel,
            Field::FullDescription => Message::FullDescriptionLabel,
            Field::Project => Message::ProjectLabel,
            Field::Chronicle => Message::ChronicleLabel,
            Field::Avatar => Message::UploadAvatar,
        }
    }
}

/// Field → message. Later inserts for the same field replace earlier ones.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormErrors(BTreeMap<Field, Message>);

impl FormErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: Field, message: Message) {
        self.0.insert(field, message);
    }

    pub fn get(&self, field: Field) -> Option<Message> {
        self.0.get(&field).copied()
    }

    /// Forget the error of a field the user is editing.
    pub fn clear(&mut self, field: Field) {
        self.0.remove(&field);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, Message)> + '_ {
        self.0.iter().map(|(field, message)| (*field, *message))
    }

    fn into_result<T>(self, value: impl FnOnce() -> T) -> Result<T, FormErrors> {
        if self.is_empty() {
            Ok(value())
        } else {
            Err(self)
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SubmitError {
    #[error("form has {} invalid field(s)", .0.len())]
    Invalid(FormErrors),
    #[error(transparent)]
    Api(#[from] ApiError),
}

impl From<FormErrors> for SubmitError {
    fn from(errors: FormErrors) -> Self {
        SubmitError::Invalid(errors)
    }
}

pub const MIN_PASSWORD_LEN: usize = 6;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChangePasswordForm {
    pub old_password: String,
    pub new_password: String,
    pub new_password_confirmation: String,
}

impl ChangePasswordForm {
    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::OldPassword => self.old_password = value,
            Field::NewPassword => self.new_password = value,
            Field::NewPasswordConfirmation => self.new_password_confirmation = value,
            _ => {}
        }
    }

    pub fn validate(&self) -> Result<ChangeUserPassword, FormErrors> {
        let mut errors = FormErrors::new();

        if self.old_password.trim().is_empty() {
            errors.insert(Field::OldPassword, Message::EnterOldPassword);
        }

        if self.new_password.trim().is_empty() {
            errors.insert(Field::NewPassword, Message::EnterNewPassword);
        } else if self.new_password.chars().count() < MIN_PASSWORD_LEN {
            errors.insert(Field::NewPassword, Message::PasswordTooShort);
        }

        if self.new_password_confirmation.trim().is_empty() {
            errors.insert(Field::NewPasswordConfirmation, Message::RepeatNewPassword);
        } else if self.new_password != self.new_password_confirmation {
            errors.insert(Field::NewPasswordConfirmation, Message::PasswordsDoNotMatch);
        }

        if self.old_password == self.new_password {
            errors.insert(Field::NewPassword, Message::PasswordMustDiffer);
        }

        errors.into_result(|| ChangeUserPassword {
            old_password: self.old_password.clone(),
            new_password: self.new_password.clone(),
            new_password_confirmation: self.new_password_confirmation.clone(),
        })
    }
}

/// Storage key of the unfinished server form.
pub const DRAFT_KEY: &str = "createServerForm";

/// The "add server" form. Serializable so an unfinished form survives a reload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CreateServerForm {
    pub site_url: String,
    /// `D.M.YYYY`, as typed or picked.
    pub opening_date: String,
    pub announcement_name: String,
    pub rating_name: String,
    pub server_type: String,
    pub server_type_id: Option<u64>,
    pub rates: String,
    pub project_id: Option<u64>,
    pub chronicle_id: Option<u64>,
    pub short_description: String,
    pub full_description: String,
    pub has_logo: bool,
}

impl Default for CreateServerForm {
    fn default() -> Self {
        Self::new(Utc::now().date_naive())
    }
}

impl CreateServerForm {
    /// Empty form opening on `today`.
    pub fn new(today: NaiveDate) -> Self {
        Self {
            site_url: String::new(),
            opening_date: format_form_date(today),
            announcement_name: String::new(),
            rating_name: String::new(),
            server_type: "PVE".to_string(),
            server_type_id: None,
            rates: String::new(),
            project_id: None,
            chronicle_id: None,
            short_description: String::new(),
            full_description: String::new(),
            has_logo: false,
        }
    }

    /// Update a text field. Selections go through their own setters.
    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::SiteUrl => self.site_url = value,
            Field::OpeningDate => self.opening_date = value,
            Field::AnnouncementName => self.announcement_name = value,
            Field::RatingName => self.rating_name = value,
            Field::Rates => self.rates = value,
            Field::ShortDescription => self.short_description = value,
            Field::FullDescription => self.full_description = value,
            _ => {}
        }
    }

    pub fn select_server_type(&mut self, server_type: Option<&ServerType>) {
        self.server_type = server_type.map(|t| t.name.clone()).unwrap_or_default();
        self.server_type_id = server_type.map(|t| t.id);
    }

    pub fn validate(&self) -> Result<CreateServerRequest, FormErrors> {
        let mut errors = FormErrors::new();

        for (field, value) in [
            (Field::SiteUrl, &self.site_url),
            (Field::OpeningDate, &self.opening_date),
            (Field::AnnouncementName, &self.announcement_name),
            (Field::RatingName, &self.rating_name),
            (Field::ServerType, &self.server_type),
            (Field::Rates, &self.rates),
            (Field::ShortDescription, &self.short_description),
            (Field::FullDescription, &self.full_description),
        ] {
            if value.trim().is_empty() {
                errors.insert(field, Message::FieldRequired);
            }
        }

        if self.project_id.is_none() {
            errors.insert(Field::Project, Message::SelectProject);
        }
        if self.chronicle_id.is_none() {
            errors.insert(Field::Chronicle, Message::SelectChronicle);
        }
        if self.server_type_id.is_none() {
            errors.insert(Field::ServerType, Message::SelectServerType);
        }

        let launch_date = parse_form_date(&self.opening_date);
        if launch_date.is_none() && errors.get(Field::OpeningDate).is_none() {
            errors.insert(Field::OpeningDate, Message::InvalidDate);
        }
        let rate = rate_key(&self.rates).parse::<u32>().ok();
        if rate.is_none() && errors.get(Field::Rates).is_none() {
            errors.insert(Field::Rates, Message::InvalidRate);
        }

        if !errors.is_empty() {
            return Err(errors);
        }
        match (launch_date, rate, self.project_id, self.chronicle_id, self.server_type_id) {
            (Some(date), Some(rate), Some(project_id), Some(chronicle_id), Some(server_type_id)) => {
                Ok(CreateServerRequest {
                    announce_name: self.announcement_name.trim().to_string(),
                    rating_name: self.rating_name.trim().to_string(),
                    website_url: self.site_url.trim().to_string(),
                    rate,
                    server_type_id,
                    launch_date: date.format("%Y-%m-%d").to_string(),
                    short_description: self.short_description.clone(),
                    full_description: self.full_description.clone(),
                    project_id,
                    chronicle_id,
                    logo: if self.has_logo { "uploaded" } else { "" }.to_string(),
                })
            }
            _ => Err(errors),
        }
    }

    /// Restore a saved draft, if any. Unreadable drafts are discarded.
    pub fn load_draft(slot: &dyn StorageSlot) -> Option<Self> {
        let raw = slot.get(DRAFT_KEY)?;
        match serde_json::from_str(&raw) {
            Ok(form) => Some(form),
            Err(e) => {
                tracing::warn!("discarding unreadable server form draft: {e}");
                slot.remove(DRAFT_KEY);
                None
            }
        }
    }

    pub fn save_draft(&self, slot: &dyn StorageSlot) {
        match serde_json::to_string(self) {
            Ok(json) => slot.set(DRAFT_KEY, &json),
            Err(e) => tracing::error!("failed to serialize server form draft: {e}"),
        }
    }

    pub fn clear_draft(slot: &dyn StorageSlot) {
        slot.remove(DRAFT_KEY);
    }
}

/// `D.M.YYYY` without zero padding.
pub fn format_form_date(date: NaiveDate) -> String {
    date.format("%-d.%-m.%Y").to_string()
}

/// Parse `D.M.YYYY` (padded or not).
pub fn parse_form_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%d.%m.%Y").ok()
}

pub const AVATAR_MAX_BYTES: usize = 2 * 1024 * 1024;
pub const AVATAR_TYPES: [&str; 3] = ["image/jpeg", "image/jpg", "image/png"];

/// A picked avatar file before upload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AvatarUpload {
    pub file_name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl AvatarUpload {
    pub fn new(file_name: impl Into<String>, mime: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            mime: mime.into(),
            bytes,
        }
    }

    pub fn validate(&self) -> Result<FilePart, FormErrors> {
        let mut errors = FormErrors::new();
        if !AVATAR_TYPES.contains(&self.mime.as_str()) {
            errors.insert(Field::Avatar, Message::AvatarInvalidType);
        } else if self.bytes.len() > AVATAR_MAX_BYTES {
            errors.insert(Field::Avatar, Message::AvatarTooLarge);
        }
        errors.into_result(|| FilePart {
            field: "avatar".to_string(),
            file_name: self.file_name.clone(),
            mime: self.mime.clone(),
            bytes: self.bytes.clone(),
        })
    }
}

pub async fn submit_change_password<N: Transport>(
    client: &ApiClient<N>,
    form: &ChangePasswordForm,
) -> Result<(), SubmitError> {
    let body = form.validate()?;
    client.change_password(&body).await?;
    Ok(())
}

pub async fn submit_create_server<N: Transport>(
    client: &ApiClient<N>,
    form: &CreateServerForm,
) -> Result<Server, SubmitError> {
    let request = form.validate()?;
    Ok(client.create_server(&request).await?)
}

pub async fn submit_avatar<N: Transport>(
    client: &ApiClient<N>,
    upload: &AvatarUpload,
) -> Result<User, SubmitError> {
    let file = upload.validate()?;
    Ok(client.upload_avatar(file).await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingTransport;
    use store::{CredentialStore, MemorySlot};

    fn password_form(old: &str, new: &str, confirm: &str) -> ChangePasswordForm {
        ChangePasswordForm {
            old_password: old.to_string(),
            new_password: new.to_string(),
            new_password_confirmation: confirm.to_string(),
        }
    }

    #[test]
    fn test_password_valid() {
        let body = password_form("secret1", "secret2", "secret2").validate().unwrap();
        assert_eq!(body.new_password, "secret2");
    }

    #[test]
    fn test_password_required_fields() {
        let errors = password_form("", "", "").validate().unwrap_err();
        assert_eq!(errors.get(Field::OldPassword), Some(Message::EnterOldPassword));
        // old == new (both empty) overrides the new-password message
        assert_eq!(errors.get(Field::NewPassword), Some(Message::PasswordMustDiffer));
        assert_eq!(
            errors.get(Field::NewPasswordConfirmation),
            Some(Message::RepeatNewPassword)
        );
    }

    #[test]
    fn test_password_too_short_and_mismatch() {
        let errors = password_form("secret1", "abc", "abd").validate().unwrap_err();
        assert_eq!(errors.get(Field::NewPassword), Some(Message::PasswordTooShort));
        assert_eq!(
            errors.get(Field::NewPasswordConfirmation),
            Some(Message::PasswordsDoNotMatch)
        );
    }

    #[test]
    fn test_password_must_differ() {
        let errors = password_form("secret1", "secret1", "secret1").validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(Field::NewPassword), Some(Message::PasswordMustDiffer));
    }

    #[tokio::test]
    async fn test_invalid_password_makes_no_request() {
        let transport = RecordingTransport::new();
        let client = ApiClient::new(transport.clone(), CredentialStore::in_memory());

        let same = submit_change_password(&client, &password_form("secret1", "secret1", "secret1")).await;
        let mismatch = submit_change_password(&client, &password_form("secret1", "secret2", "secret3")).await;

        assert!(matches!(same, Err(SubmitError::Invalid(_))));
        assert!(matches!(mismatch, Err(SubmitError::Invalid(_))));
        assert!(transport.requests().is_empty());

        submit_change_password(&client, &password_form("secret1", "secret2", "secret2"))
            .await
            .unwrap();
        assert_eq!(transport.requests().len(), 1);
    }

    fn filled_server_form() -> CreateServerForm {
        CreateServerForm {
            site_url: "https://gods.example".to_string(),
            opening_date: "5.7.2025".to_string(),
            announcement_name: "Gods".to_string(),
            rating_name: "Gods x5".to_string(),
            server_type: "PVP".to_string(),
            server_type_id: Some(2),
            rates: "x5".to_string(),
            project_id: Some(10),
            chronicle_id: Some(3),
            short_description: "short".to_string(),
            full_description: "full".to_string(),
            has_logo: true,
        }
    }

    #[test]
    fn test_server_form_builds_request() {
        let request = filled_server_form().validate().unwrap();
        assert_eq!(request.launch_date, "2025-07-05");
        assert_eq!(request.rate, 5);
        assert_eq!(request.project_id, 10);
        assert_eq!(request.logo, "uploaded");
    }

    #[test]
    fn test_server_form_defaults() {
        let form = CreateServerForm::new(NaiveDate::from_ymd_opt(2025, 7, 1).unwrap());
        assert_eq!(form.opening_date, "1.7.2025");
        assert_eq!(form.server_type, "PVE");

        let errors = form.validate().unwrap_err();
        assert_eq!(errors.get(Field::SiteUrl), Some(Message::FieldRequired));
        assert_eq!(errors.get(Field::Project), Some(Message::SelectProject));
        assert_eq!(errors.get(Field::Chronicle), Some(Message::SelectChronicle));
        assert_eq!(errors.get(Field::ServerType), Some(Message::SelectServerType));
        assert_eq!(errors.get(Field::Rates), Some(Message::FieldRequired));
        assert_eq!(errors.get(Field::OpeningDate), None);
    }

    #[test]
    fn test_server_form_bad_date_and_rate() {
        let mut form = filled_server_form();
        form.opening_date = "2025-07-05".to_string();
        form.rates = "fast".to_string();

        let errors = form.validate().unwrap_err();
        assert_eq!(errors.get(Field::OpeningDate), Some(Message::InvalidDate));
        assert_eq!(errors.get(Field::Rates), Some(Message::InvalidRate));
    }

    #[test]
    fn test_server_form_setters() {
        let mut form = CreateServerForm::new(NaiveDate::from_ymd_opt(2025, 7, 1).unwrap());
        form.set(Field::Rates, "x100".to_string());
        form.set(Field::Project, "ignored".to_string());
        assert_eq!(form.rates, "x100");
        assert_eq!(form.project_id, None);

        let pvp = ServerType {
            id: 2,
            name: "PVP".to_string(),
            slug: "pvp".to_string(),
            h1_tag: None,
            h2_tag: None,
            footer_description: None,
            meta_title: None,
            meta_description: None,
            servers_count: 0,
        };
        form.select_server_type(Some(&pvp));
        assert_eq!((form.server_type.as_str(), form.server_type_id), ("PVP", Some(2)));

        form.select_server_type(None);
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.get(Field::ServerType), Some(Message::SelectServerType));
    }

    #[test]
    fn test_server_form_draft() {
        let slot = MemorySlot::new();
        assert!(CreateServerForm::load_draft(&slot).is_none());

        let form = filled_server_form();
        form.save_draft(&slot);
        assert_eq!(CreateServerForm::load_draft(&slot), Some(form));

        slot.set(DRAFT_KEY, r#"{"siteUrl":"https://partial.example"}"#);
        let partial = CreateServerForm::load_draft(&slot).unwrap();
        assert_eq!(partial.site_url, "https://partial.example");
        assert_eq!(partial.server_type, "PVE");

        slot.set(DRAFT_KEY, "not json");
        assert!(CreateServerForm::load_draft(&slot).is_none());
        assert!(slot.get(DRAFT_KEY).is_none());
    }

    #[tokio::test]
    async fn test_create_server_posts_valid_form() {
        let transport = RecordingTransport::new();
        transport.respond(201, r#"{"data":{"id":99,"announce_name":"Gods"}}"#);
        let client = ApiClient::new(transport.clone(), CredentialStore::in_memory());

        let server = submit_create_server(&client, &filled_server_form()).await.unwrap();
        assert_eq!(server.id, 99);

        let invalid = submit_create_server(&client, &CreateServerForm::default()).await;
        assert!(matches!(invalid, Err(SubmitError::Invalid(_))));
        assert_eq!(transport.requests().len(), 1);
    }

    #[test]
    fn test_avatar_validation() {
        let ok = AvatarUpload::new("me.png", "image/png", vec![0; 1024]);
        assert_eq!(ok.validate().unwrap().field, "avatar");

        let gif = AvatarUpload::new("me.gif", "image/gif", vec![0; 10]);
        assert_eq!(
            gif.validate().unwrap_err().get(Field::Avatar),
            Some(Message::AvatarInvalidType)
        );

        let big = AvatarUpload::new("me.jpg", "image/jpeg", vec![0; AVATAR_MAX_BYTES + 1]);
        assert_eq!(
            big.validate().unwrap_err().get(Field::Avatar),
            Some(Message::AvatarTooLarge)
        );

        let edge = AvatarUpload::new("me.jpg", "image/jpg", vec![0; AVATAR_MAX_BYTES]);
        assert!(edge.validate().is_ok());
    }

    #[tokio::test]
    async fn test_invalid_avatar_makes_no_request() {
        let transport = RecordingTransport::new();
        let client = ApiClient::new(transport.clone(), CredentialStore::in_memory());

        let result = submit_avatar(&client, &AvatarUpload::new("a.bmp", "image/bmp", vec![1])).await;

        assert!(matches!(result, Err(SubmitError::Invalid(_))));
        assert!(transport.requests().is_empty());
    }
}
