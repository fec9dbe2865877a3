mod profile;

pub use profile::ConnectionProfile;
pub use profile::ProfileManager;
