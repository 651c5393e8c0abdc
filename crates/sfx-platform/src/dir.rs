use std::path::PathBuf;

pub fn user_home() -> Option<PathBuf> {
    home::home_dir()
}

/// `<home>/Desktop`, the location shortcuts are placed in on every platform.
pub fn user_desktop() -> Option<PathBuf> {
    user_home().map(|p| p.join("Desktop"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_desktop_is_below_home() {
        if let (Some(home), Some(desktop)) = (user_home(), user_desktop()) {
            assert_eq!(desktop.parent(), Some(home.as_path()));
            assert!(desktop.ends_with("Desktop"));
        }
    }

    #[test]
    fn test_user_home_matches_environment() {
        if let Some(home) = user_home() {
            let env_home = std::env::var_os("HOME").or_else(|| std::env::var_os("USERPROFILE"));
            if let Some(env_home) = env_home {
                assert_eq!(home, PathBuf::from(env_home));
            }
        }
    }
}
