use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Deserializer, Serialize};

use crate::{
    crypto,
    error::{Error, Result},
    types::Credentials,
};

/// Connection settings as stored in the config file.
///
/// Only one of `password` and `password_hash` is ever written, matching
/// `use_encryption`; see [`ProfileManager::persisted_form`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionProfile {
    #[serde(default, deserialize_with = "lenient_string")]
    pub username: String,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "non_empty"
    )]
    pub password: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "non_empty"
    )]
    pub password_hash: Option<String>,
    #[serde(rename = "URL", default, deserialize_with = "lenient_string")]
    pub url: String,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub use_encryption: bool,
}

fn lenient_string<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn non_empty<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.filter(|s| !s.is_empty()))
}

/// Owns the loaded profile together with the recovered plaintext password.
///
/// The plaintext is derived once, when the profile is loaded or created, and
/// is never written back to disk.
pub struct ProfileManager {
    path: PathBuf,
    profile: ConnectionProfile,
    password: Option<String>,
}

impl ProfileManager {
    /// Builds a fresh profile from the answers given during setup.
    ///
    /// With `encrypt` set the password is sealed with
    /// [`crypto::encrypt_password`] and only the sealed form is kept in the
    /// profile.
    pub fn from_setup(
        path: impl Into<PathBuf>,
        url: &str,
        username: &str,
        password: &str,
        encrypt: bool,
    ) -> Result<Self> {
        Self::check_field("URL", url)?;
        Self::check_field("username", username)?;
        Self::check_field("password", password)?;

        let mut profile = ConnectionProfile {
            username: username.to_string(),
            url: url.to_string(),
            use_encryption: encrypt,
            ..Default::default()
        };

        if encrypt {
            profile.password_hash = Some(crypto::encrypt_password(password, username)?);
        } else {
            profile.password = Some(password.to_string());
        }

        Ok(Self {
            path: path.into(),
            profile,
            password: Some(password.to_string()),
        })
    }

    /// Rejects an empty answer to a required setup question.
    pub fn check_field(name: &str, value: &str) -> Result<()> {
        if value.trim().is_empty() {
            return Err(Error::Setup(format!("{name} cannot be empty")));
        }
        Ok(())
    }

    /// Reads and decodes the config file at `path`.
    ///
    /// # Errors
    ///
    /// - [`Error::ConfigNotFound`] if there is no file at `path`
    /// - [`Error::ConfigCorrupt`] if the file is not a valid profile
    /// - [`Error::Decryption`] if the stored password cannot be recovered
    pub async fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let content = match async_fs::read_to_string(&path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Err(Error::ConfigNotFound(path)),
            Err(e) => return Err(Error::Io(e)),
        };

        let profile: ConnectionProfile =
            serde_yaml::from_str(&content).map_err(|e| Error::ConfigCorrupt(e.to_string()))?;

        let password = match (&profile.password_hash, &profile.password) {
            (Some(hash), _) if profile.use_encryption => {
                Some(crypto::decrypt_password(hash, &profile.username)?)
            }
            (_, Some(plain)) => Some(plain.clone()),
            _ => None,
        };

        Ok(Self {
            path,
            profile,
            password,
        })
    }

    /// Writes the profile to disk, readable by the owner only.
    pub async fn persist(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                async_fs::create_dir_all(parent).await?;
            }
        }

        let yaml = serde_yaml::to_string(&self.persisted_form())
            .map_err(|e| Error::ConfigCorrupt(e.to_string()))?;

        // restrict the file before any content reaches it
        #[cfg(unix)]
        {
            use async_fs::unix::OpenOptionsExt;
            use std::os::unix::fs::PermissionsExt;

            async_fs::OpenOptions::new()
                .write(true)
                .create(true)
                .mode(0o600)
                .open(&self.path)
                .await?;
            // an existing file keeps its old mode on open
            async_fs::set_permissions(&self.path, std::fs::Permissions::from_mode(0o600)).await?;
        }

        async_fs::write(&self.path, yaml).await?;
        Ok(())
    }

    /// The profile exactly as it is written by [`persist`](Self::persist).
    pub fn persisted_form(&self) -> ConnectionProfile {
        let mut profile = self.profile.clone();
        if profile.use_encryption {
            profile.password = None;
        } else {
            profile.password_hash = None;
        }
        profile
    }

    /// Returns the settings needed to talk to the server.
    ///
    /// Fails with [`Error::MissingCredentials`] naming the first blank field.
    pub fn credentials(&self) -> Result<Credentials> {
        if self.profile.username.trim().is_empty() {
            return Err(Error::MissingCredentials("username"));
        }
        if self.profile.url.trim().is_empty() {
            return Err(Error::MissingCredentials("URL"));
        }
        let password = match self.password.as_deref() {
            Some(p) if !p.is_empty() => p,
            _ => return Err(Error::MissingCredentials("password")),
        };

        Ok(Credentials {
            url: self.profile.url.trim().to_string(),
            username: self.profile.username.clone(),
            password: password.to_string(),
        })
    }

    pub fn profile(&self) -> &ConnectionProfile {
        &self.profile
    }

    pub fn password(&self) -> Option<&str> {
        self.password.as_deref()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
