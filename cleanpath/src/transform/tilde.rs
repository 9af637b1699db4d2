//! Tilde expansion and unexpansion.
//!
//! Only a leading `~` is significant. `~` and `~/rest` refer to the resolved
//! home directory, `~name` and `~name/rest` to the home directory of user
//! `name`. A `~` anywhere else in a path is an ordinary character.

use crate::path::clean::SEPARATOR;

const TILDE: char = '~';

/// Split a tilde path into the user name and the remainder.
///
/// The remainder keeps its leading separator. Returns `None` if the path
/// does not start with `~`.
fn split_tilde(path: &str) -> Option<(&str, &str)> {
    let rest = path.strip_prefix(TILDE)?;
    Some(match rest.find(SEPARATOR) {
        Some(idx) => rest.split_at(idx),
        None => (rest, ""),
    })
}

/// Expand a leading `~` or `~user` prefix.
///
/// A bare `~` becomes `home`; without a known home the path is returned
/// unchanged. A `~user` prefix is resolved with `lookup_home`, which is only
/// called for non-empty user names. A failed lookup (or an empty home
/// directory) leaves the path unchanged.
///
/// # Examples
///
/// ```
/// use cleanpath::transform::tilde::expand_tilde;
///
/// let lookup = |name: &str| (name == "bob").then(|| "/home/bob".to_string());
///
/// assert_eq!(expand_tilde("~/docs", Some("/home/me"), lookup), "/home/me/docs");
/// assert_eq!(expand_tilde("~bob/x", Some("/home/me"), lookup), "/home/bob/x");
/// assert_eq!(expand_tilde("~nobody/x", Some("/home/me"), lookup), "~nobody/x");
/// assert_eq!(expand_tilde("/a/~/b", Some("/home/me"), lookup), "/a/~/b");
/// ```
pub fn expand_tilde<F>(path: &str, home: Option<&str>, lookup_home: F) -> String
where
    F: FnOnce(&str) -> Option<String>,
{
    let Some((user, rest)) = split_tilde(path) else {
        return path.to_string();
    };

    if user.is_empty() {
        return match home {
            Some(home) if !home.is_empty() => format!("{home}{rest}"),
            _ => path.to_string(),
        };
    }

    match lookup_home(user) {
        Some(home) if !home.is_empty() => format!("{home}{rest}"),
        _ => {
            log::debug!("no home directory for user {user:?}, leaving {path:?} unchanged");
            path.to_string()
        }
    }
}

/// Replace a leading home directory with `~` or `~user`.
///
/// The path must equal `home` or continue it with a separator; a path that
/// merely shares a textual prefix (`/home/meow` for `/home/me`) is left
/// alone. `prefix_user`, when given, is written after the tilde.
///
/// # Examples
///
/// ```
/// use cleanpath::transform::tilde::unexpand_tilde;
///
/// assert_eq!(unexpand_tilde("/home/me/docs", Some("/home/me"), None), "~/docs");
/// assert_eq!(unexpand_tilde("/home/me", Some("/home/me"), Some("me2")), "~me2");
/// assert_eq!(unexpand_tilde("/home/meow", Some("/home/me"), None), "/home/meow");
/// ```
#[must_use]
pub fn unexpand_tilde(path: &str, home: Option<&str>, prefix_user: Option<&str>) -> String {
    let Some(home) = home.filter(|home| !home.is_empty()) else {
        return path.to_string();
    };

    let Some(rest) = path.strip_prefix(home) else {
        return path.to_string();
    };
    if !rest.is_empty() && !rest.starts_with(SEPARATOR) {
        return path.to_string();
    }

    format!("{TILDE}{}{rest}", prefix_user.unwrap_or_default())
}
