use std::io;
use std::path::{absolute, Path, PathBuf};

pub fn expand_tilde<P: AsRef<Path>>(path: P) -> PathBuf {
    let p = path.as_ref();
    if let Ok(stripped) = p.strip_prefix("~") {
        if let Some(home_dir) = dirs::home_dir() {
            return home_dir.join(stripped);
        }
    }
    p.to_path_buf()
}

/// tilde-expanded and made absolute against the cwd, the path doesn't have to exist
pub fn get_absolute_path<P: AsRef<Path>>(path: P) -> io::Result<PathBuf> {
    absolute(expand_tilde(path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tilde_goes_to_home() {
        let Some(home) = dirs::home_dir() else {
            return;
        };

        assert_eq!(expand_tilde("~/.webipmon/config.toml"), home.join(".webipmon/config.toml"));
        assert_eq!(expand_tilde("/etc/webipmon.toml"), PathBuf::from("/etc/webipmon.toml"));
    }

    #[test]
    fn relative_paths_become_absolute() {
        let path = get_absolute_path("logs").unwrap();

        assert!(path.is_absolute());
        assert!(path.ends_with("logs"));
    }
}
