mod pulp_client;
mod redmine_client;

pub use pulp_client::PulpClient;
pub use redmine_client::RedmineClient;
