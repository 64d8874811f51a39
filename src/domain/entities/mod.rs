//! Domain entities - Objects with identity and lifecycle

mod agency_client;
mod analytics;
mod connected_account;
mod hook;
mod thread;
mod user;
mod voice_pack;

pub use agency_client::AgencyClient;
pub use analytics::ThreadAnalytics;
pub use connected_account::ConnectedAccount;
pub use hook::Hook;
pub use thread::Thread;
pub use user::User;
pub use voice_pack::VoicePack;
