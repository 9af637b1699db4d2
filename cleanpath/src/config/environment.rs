//! Access to process and operating system state.
//!
//! The configuration layer never reads global state directly. It goes
//! through a [`SystemContext`], which production code satisfies with
//! [`OsContext`] and tests satisfy with a fixed snapshot.

use std::env;
use std::io;

/// A user account as seen by tilde handling.
///
/// Either field may be empty when the information is not available.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserInfo {
    /// The login name.
    pub name: String,
    /// The home directory.
    pub home: String,
}

impl UserInfo {
    /// Creates a user record.
    #[must_use]
    pub fn new(name: impl Into<String>, home: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            home: home.into(),
        }
    }
}

/// Read-only view of users, environment variables and the working directory.
pub trait SystemContext {
    /// The user running the process.
    fn current_user(&self) -> UserInfo;

    /// Look up a user by login name.
    fn lookup_user(&self, name: &str) -> Option<UserInfo>;

    /// The current value of an environment variable.
    fn var(&self, name: &str) -> Option<String>;

    /// Every environment variable, in process order.
    fn vars(&self) -> Vec<(String, String)>;

    /// The current working directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the working directory cannot be determined or is
    /// not valid UTF-8.
    fn current_dir(&self) -> io::Result<String>;
}

/// [`SystemContext`] backed by the running process and the passwd database.
///
/// # Examples
///
/// ```no_run
/// use cleanpath::config::{OsContext, SystemContext};
///
/// let context = OsContext;
/// let me = context.current_user();
/// println!("{} lives in {}", me.name, me.home);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct OsContext;

impl SystemContext for OsContext {
    fn current_user(&self) -> UserInfo {
        if let Some(user) = passwd::current() {
            return user;
        }

        // Fall back to the environment when there is no passwd entry.
        let name = env::var("USER").unwrap_or_default();
        let home = home::home_dir()
            .and_then(|path| path.to_str().map(str::to_string))
            .unwrap_or_default();
        UserInfo { name, home }
    }

    fn lookup_user(&self, name: &str) -> Option<UserInfo> {
        passwd::by_name(name)
    }

    fn var(&self, name: &str) -> Option<String> {
        env::var_os(name).map(|value| value.to_string_lossy().into_owned())
    }

    fn vars(&self) -> Vec<(String, String)> {
        env::vars_os()
            .map(|(name, value)| {
                (
                    name.to_string_lossy().into_owned(),
                    value.to_string_lossy().into_owned(),
                )
            })
            .collect()
    }

    fn current_dir(&self) -> io::Result<String> {
        let cwd = env::current_dir()?;
        cwd.into_os_string().into_string().map_err(|raw| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!("working directory is not valid UTF-8: {raw:?}"),
            )
        })
    }
}

/// [`SystemContext`] over a fixed, in-memory snapshot.
///
/// Useful wherever results must not depend on the machine they run on.
///
/// # Examples
///
/// ```
/// use cleanpath::config::{SnapshotContext, SystemContext, UserInfo};
///
/// let context = SnapshotContext::new(UserInfo::new("me", "/home/me"), "/work")
///     .with_user(UserInfo::new("bob", "/home/bob"))
///     .with_var("FOO", "bar");
///
/// assert_eq!(context.lookup_user("bob").unwrap().home, "/home/bob");
/// assert_eq!(context.var("FOO"), Some("bar".to_string()));
/// assert_eq!(context.current_dir().unwrap(), "/work");
/// ```
#[derive(Debug, Clone, Default)]
pub struct SnapshotContext {
    current: UserInfo,
    users: Vec<UserInfo>,
    vars: Vec<(String, String)>,
    cwd: Option<String>,
}

impl SnapshotContext {
    /// Creates a snapshot with the given current user and working directory.
    #[must_use]
    pub fn new(current: UserInfo, cwd: impl Into<String>) -> Self {
        Self {
            current,
            cwd: Some(cwd.into()),
            ..Self::default()
        }
    }

    /// Adds a user that [`SystemContext::lookup_user`] can find.
    #[must_use]
    pub fn with_user(mut self, user: UserInfo) -> Self {
        self.users.push(user);
        self
    }

    /// Sets an environment variable, replacing an earlier value in place.
    #[must_use]
    pub fn with_var(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        let value = value.into();
        match self.vars.iter_mut().find(|(existing, _)| *existing == name) {
            Some(slot) => slot.1 = value,
            None => self.vars.push((name, value)),
        }
        self
    }

    /// Removes the working directory, so resolving it fails.
    #[must_use]
    pub fn without_cwd(mut self) -> Self {
        self.cwd = None;
        self
    }
}

impl SystemContext for SnapshotContext {
    fn current_user(&self) -> UserInfo {
        self.current.clone()
    }

    fn lookup_user(&self, name: &str) -> Option<UserInfo> {
        self.users.iter().find(|user| user.name == name).cloned()
    }

    fn var(&self, name: &str) -> Option<String> {
        self.vars
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value.clone())
    }

    fn vars(&self) -> Vec<(String, String)> {
        self.vars.clone()
    }

    fn current_dir(&self) -> io::Result<String> {
        self.cwd
            .clone()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no working directory"))
    }
}

#[cfg(unix)]
mod passwd {
    use nix::unistd::{getuid, User};

    use super::UserInfo;

    fn to_info(user: User) -> Option<UserInfo> {
        let home = user.dir.into_os_string().into_string().ok()?;
        Some(UserInfo {
            name: user.name,
            home,
        })
    }

    pub(super) fn current() -> Option<UserInfo> {
        match User::from_uid(getuid()) {
            Ok(Some(user)) => to_info(user),
            Ok(None) => None,
            Err(err) => {
                log::debug!("passwd lookup for current user failed: {err}");
                None
            }
        }
    }

    pub(super) fn by_name(name: &str) -> Option<UserInfo> {
        match User::from_name(name) {
            Ok(Some(user)) => to_info(user),
            Ok(None) => None,
            Err(err) => {
                log::debug!("passwd lookup for {name:?} failed: {err}");
                None
            }
        }
    }
}

#[cfg(not(unix))]
mod passwd {
    use super::UserInfo;

    pub(super) fn current() -> Option<UserInfo> {
        None
    }

    pub(super) fn by_name(_name: &str) -> Option<UserInfo> {
        None
    }
}
