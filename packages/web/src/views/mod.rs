mod shell;
pub use shell::Shell;

mod home;
pub use home::Home;

mod top_servers;
pub use top_servers::TopServers;

mod profile;
pub use profile::Profile;

mod my_servers;
pub use my_servers::MyServers;

mod banners;
pub use banners::Banners;

mod project;
pub use project::ProjectPage;

mod auth_callback;
pub use auth_callback::AuthCallback;
