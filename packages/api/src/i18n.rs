//! # User-facing text
//!
//! The portal ships in Russian; English is the fallback locale for
//! development and tests. Every string the client itself produces (validation
//! errors, status labels, toasts) is a [`Message`] so components and tests
//! compare variants instead of literals.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Ru,
    En,
}

impl FromStr for Locale {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ru" => Ok(Locale::Ru),
            "en" => Ok(Locale::En),
            other => Err(ApiError::Config(format!("unknown locale: {other}"))),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Locale::Ru => "ru",
            Locale::En => "en",
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Message {
    // password form
    EnterOldPassword,
    EnterNewPassword,
    PasswordTooShort,
    RepeatNewPassword,
    PasswordsDoNotMatch,
    PasswordMustDiffer,
    PasswordChanged,
    PasswordChangeFailed,
    ChangePassword,
    Changing,

    // server form
    FieldRequired,
    SelectProject,
    SelectChronicle,
    SelectServerType,
    InvalidDate,
    InvalidRate,
    ServerCreated,
    ServerCreateFailed,
    CreateServer,
    CreatingServer,

    // avatar
    AvatarInvalidType,
    AvatarTooLarge,
    AvatarUploaded,
    AvatarUploadFailed,
    UploadAvatar,

    // loading and auth
    Loading,
    LoadingError,
    AuthorizationError,
    AuthorizationRetry,
    ProfileLoadError,
    ProjectNotFound,
    ServersNotFound,
    NoServersYet,
    NoVotesYet,
    NoDescription,

    // moderation badge
    ModerationApproved,
    ModerationPending,
    ModerationRejected,

    // launch status
    StatusOpened,
    StatusSoon,
    GroupComingSoon,
    GroupTomorrow,
    GroupToday,
    GroupYesterday,
    GroupOpened,

    // banners
    NoBanners,
    BannersError,

    // voting
    Vote,
    VoteCounted,
    VoteAuthRequired,
    VoteConfirm,
    NextVoteIn,

    // filters
    AllRates,
    AllChronicles,
    FindServer,

    // navigation
    Home,
    TopServers,
    MyServers,
    MyVotes,
    Profile,
    Banners,
    Logout,
    SignIn,

    // dialogs
    Confirm,
    Cancel,

    // field labels
    OldPasswordLabel,
    NewPasswordLabel,
    RepeatPasswordLabel,
    SiteUrlLabel,
    OpeningDateLabel,
    AnnouncementLabel,
    RatingNameLabel,
    ServerTypeLabel,
    RatesLabel,
    ProjectLabel,
    ChronicleLabel,
    ShortDescriptionLabel,
    FullDescriptionLabel,
    VotedAtLabel,
    IpAddressLabel,
    ServerLabel,
}

impl Message {
    pub fn text(self, locale: Locale) -> &'static str {
        match locale {
            Locale::Ru => self.ru(),
            Locale::En => self.en(),
        }
    }

    fn ru(self) -> &'static str {
        use Message::*;
        match self {
            EnterOldPassword => "Введите старый пароль",
            EnterNewPassword => "Введите новый пароль",
            PasswordTooShort => "Пароль должен содержать минимум 6 символов",
            RepeatNewPassword => "Повторите новый пароль",
            PasswordsDoNotMatch => "Пароли не совпадают",
            PasswordMustDiffer => "Новый пароль должен отличаться от старого",
            PasswordChanged => "Пароль успешно изменен!",
            PasswordChangeFailed => "Ошибка при изменении пароля",
            ChangePassword => "ИЗМЕНИТЬ ПАРОЛЬ",
            Changing => "ИЗМЕНЕНИЕ...",
            FieldRequired => "Заполните это поле",
            SelectProject => "Пожалуйста, выберите проект",
            SelectChronicle => "Пожалуйста, выберите хронику",
            SelectServerType => "Пожалуйста, выберите тип сервера",
            InvalidDate => "Укажите дату в формате ДД.ММ.ГГГГ",
            InvalidRate => "Укажите рейт числом, например x5",
            ServerCreated => "Сервер успешно создан!",
            ServerCreateFailed => "Произошла ошибка при создании сервера. Попробуйте снова.",
            CreateServer => "Создать сервер",
            CreatingServer => "Создание сервера...",
            AvatarInvalidType => "Разрешены только файлы JPG, JPEG и PNG",
            AvatarTooLarge => "Размер файла не должен превышать 2MB",
            AvatarUploaded => "Аватар успешно загружен!",
            AvatarUploadFailed => "Ошибка при загрузке аватара",
            UploadAvatar => "Загрузить аватар",
            Loading => "Загрузка...",
            LoadingError => "Ошибка загрузки",
            AuthorizationError => "Ошибка авторизации",
            AuthorizationRetry => "Ошибка авторизации. Попробуйте еще раз.",
            ProfileLoadError => "Ошибка загрузки профиля",
            ProjectNotFound => "Проект не найден",
            ServersNotFound => "Серверы не найдены",
            NoServersYet => "У вас пока нет серверов. Создайте новый сервер!",
            NoVotesYet => "Вы пока не голосовали",
            NoDescription => "Описание отсутствует",
            ModerationApproved => "Промодерирован и активен",
            ModerationPending => "На модерации",
            ModerationRejected => "Отклонён",
            StatusOpened => "Открыт",
            StatusSoon => "Скоро",
            NoBanners => "Нет баннеров для этой позиции",
            BannersError => "Ошибка загрузки баннеров. Попробуйте позже.",
            Vote => "ПРОГОЛОСОВАТЬ",
            VoteCounted => "ГОЛОС УЧТЁН",
            VoteAuthRequired => "Войдите, чтобы проголосовать",
            VoteConfirm => "Подтвердите голос",
            NextVoteIn => "Следующий голос через",
            AllRates => "Все рейты",
            AllChronicles => "Все хроники",
            FindServer => "ПОДОБРАТЬ СЕРВЕР",
            Home => "Главная",
            TopServers => "Топ серверов",
            MyServers => "Мои сервера",
            MyVotes => "Мои голоса за серверы",
            Profile => "Профиль",
            Banners => "Баннеры",
            Logout => "Выйти",
            SignIn => "Войти",
            GroupComingSoon => "Скоро открытие",
            GroupTomorrow => "Откроются завтра",
            GroupToday => "Открываются сегодня",
            GroupYesterday => "Открылись вчера",
            GroupOpened => "Уже открыты",
            Confirm => "Да",
            Cancel => "Отмена",
            OldPasswordLabel => "Старый пароль",
            NewPasswordLabel => "Новый пароль",
            RepeatPasswordLabel => "Повторите пароль",
            SiteUrlLabel => "Сайт сервера",
            OpeningDateLabel => "Дата открытия",
            AnnouncementLabel => "Название в анонсе",
            RatingNameLabel => "Название в рейтинге",
            ServerTypeLabel => "Тип сервера",
            RatesLabel => "Рейты",
            ProjectLabel => "Проект",
            ChronicleLabel => "Хроники",
            ShortDescriptionLabel => "Краткое описание",
            FullDescriptionLabel => "Полное описание",
            VotedAtLabel => "Дата голоса",
            IpAddressLabel => "IP адрес",
            ServerLabel => "Сервер",
        }
    }

    fn en(self) -> &'static str {
        use Message::*;
        match self {
            EnterOldPassword => "Enter your old password",
            EnterNewPassword => "Enter a new password",
            PasswordTooShort => "Password must be at least 6 characters",
            RepeatNewPassword => "Repeat the new password",
            PasswordsDoNotMatch => "Passwords do not match",
            PasswordMustDiffer => "New password must differ from the old one",
            PasswordChanged => "Password changed",
            PasswordChangeFailed => "Could not change password",
            ChangePassword => "CHANGE PASSWORD",
            Changing => "CHANGING...",
            FieldRequired => "This field is required",
            SelectProject => "Please select a project",
            SelectChronicle => "Please select a chronicle",
            SelectServerType => "Please select a server type",
            InvalidDate => "Use the DD.MM.YYYY date format",
            InvalidRate => "Rate must be a number, e.g. x5",
            ServerCreated => "Server created",
            ServerCreateFailed => "Could not create the server. Please try again.",
            CreateServer => "Create server",
            CreatingServer => "Creating server...",
            AvatarInvalidType => "Only JPG, JPEG and PNG files are allowed",
            AvatarTooLarge => "File must not exceed 2MB",
            AvatarUploaded => "Avatar uploaded",
            AvatarUploadFailed => "Could not upload avatar",
            UploadAvatar => "Upload avatar",
            Loading => "Loading...",
            LoadingError => "Loading error",
            AuthorizationError => "Authorization error",
            AuthorizationRetry => "Authorization failed. Please try again.",
            ProfileLoadError => "Could not load profile",
            ProjectNotFound => "Project not found",
            ServersNotFound => "No servers found",
            NoServersYet => "You have no servers yet. Create one!",
            NoVotesYet => "You have not voted yet",
            NoDescription => "No description",
            ModerationApproved => "Approved and active",
            ModerationPending => "Under moderation",
            ModerationRejected => "Rejected",
            StatusOpened => "Open",
            StatusSoon => "Soon",
            NoBanners => "No banners available for this position.",
            BannersError => "Error loading banners. Please try again later.",
            Vote => "VOTE",
            VoteCounted => "VOTE COUNTED",
            VoteAuthRequired => "Sign in to vote",
            VoteConfirm => "Confirm your vote",
            NextVoteIn => "Next vote in",
            AllRates => "All rates",
            AllChronicles => "All chronicles",
            FindServer => "FIND SERVER",
            Home => "Home",
            TopServers => "Top servers",
            MyServers => "My servers",
            MyVotes => "My votes",
            Profile => "Profile",
            Banners => "Banners",
            Logout => "Log out",
            SignIn => "Sign in",
            GroupComingSoon => "Coming soon",
            GroupTomorrow => "Opening tomorrow",
            GroupToday => "Opening today",
            GroupYesterday => "Opened yesterday",
            GroupOpened => "Already open",
            Confirm => "Yes",
            Cancel => "Cancel",
            OldPasswordLabel => "Old password",
            NewPasswordLabel => "New password",
            RepeatPasswordLabel => "Repeat password",
            SiteUrlLabel => "Server website",
            OpeningDateLabel => "Opening date",
            AnnouncementLabel => "Announcement name",
            RatingNameLabel => "Rating name",
            ServerTypeLabel => "Server type",
            RatesLabel => "Rates",
            ProjectLabel => "Project",
            ChronicleLabel => "Chronicle",
            ShortDescriptionLabel => "Short description",
            FullDescriptionLabel => "Full description",
            VotedAtLabel => "Voted at",
            IpAddressLabel => "IP address",
            ServerLabel => "Server",
        }
    }
}

/// Render an API date (`YYYY-MM-DD` or RFC 3339) as `DD.MM.YYYY`.
/// Unparseable input is returned unchanged.
pub fn format_date(raw: &str) -> String {
    let raw = raw.trim();
    if let Ok(at) = DateTime::parse_from_rfc3339(raw) {
        return at.format("%d.%m.%Y").to_string();
    }
    let day = raw.get(..10).unwrap_or(raw);
    match NaiveDate::parse_from_str(day, "%Y-%m-%d") {
        Ok(date) => date.format("%d.%m.%Y").to_string(),
        Err(_) => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locale_parse() {
        assert_eq!("RU".parse::<Locale>().unwrap(), Locale::Ru);
        assert_eq!(" en ".parse::<Locale>().unwrap(), Locale::En);
        assert!("de".parse::<Locale>().is_err());
        assert_eq!(Locale::default(), Locale::Ru);
    }

    #[test]
    fn test_message_text() {
        assert_eq!(Message::PasswordsDoNotMatch.text(Locale::Ru), "Пароли не совпадают");
        assert_eq!(Message::ModerationPending.text(Locale::En), "Under moderation");
        assert_eq!(Message::IpAddressLabel.text(Locale::Ru), "IP адрес");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2025-07-01"), "01.07.2025");
        assert_eq!(format_date("2025-07-01T12:30:00Z"), "01.07.2025");
        assert_eq!(format_date("2025-07-01 12:30:00"), "01.07.2025");
        assert_eq!(format_date("скоро"), "скоро");
    }
}
