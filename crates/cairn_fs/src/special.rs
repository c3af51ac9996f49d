use std::path::PathBuf;

use cairn_path::Location;
use strum_macros::{Display, EnumIter};
use uuid::Uuid;

/// A platform-recognized directory with a well-known role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum SpecialDirectory {
    Home,
    Temporary,
    Caches,
    Config,
    Data,
    State,
    Runtime,
    Documents,
    Desktop,
    Downloads,
    Music,
    Pictures,
    Videos,
    Public,
    Templates,
    Executables,
    Fonts,
    Applications,
    Library,
    Trash,
}

/// Scope searched when resolving a special directory.
///
/// `User` locations belong to the current account, `System` locations are
/// machine-wide, and `All` searches user locations before system ones.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Domain {
    #[default]
    User,
    System,
    All,
}

impl crate::CairnFS {
    /// First match for `kind` in `domain`, or `None` when the platform has
    /// no such directory.
    ///
    /// With `expand_tilde` unset, locations under the user home are
    /// rendered with a leading `~` instead of the spelled-out home path.
    pub fn special_directory(
        kind: SpecialDirectory,
        domain: Domain,
        expand_tilde: bool,
    ) -> Option<Location> {
        Self::special_directories(kind, domain, expand_tilde)
            .into_iter()
            .next()
    }

    /// Every match for `kind` in `domain`, user locations first.
    pub fn special_directories(
        kind: SpecialDirectory,
        domain: Domain,
        expand_tilde: bool,
    ) -> Vec<Location> {
        let mut found: Vec<PathBuf> = Vec::new();
        if matches!(domain, Domain::User | Domain::All) {
            found.extend(user_dir(kind));
        }
        if matches!(domain, Domain::System | Domain::All) {
            found.extend(system_dirs(kind));
        }
        found
            .into_iter()
            .map(|path| render(path, expand_tilde))
            .collect()
    }

    /// The user temporary directory. Always resolvable.
    pub fn temporary_directory() -> Location {
        Location::from(std::env::temp_dir())
    }

    /// A location for a brand-new temporary item: the temporary directory
    /// joined with a process-unique token and a random token. Nothing is
    /// created on disk.
    pub fn unique_temporary_directory() -> Location {
        Self::temporary_directory()
            .join(format!("cairn-{}", std::process::id()))
            .join(Uuid::new_v4().to_string())
    }
}

fn user_dir(kind: SpecialDirectory) -> Option<PathBuf> {
    match kind {
        SpecialDirectory::Home => dirs::home_dir(),
        SpecialDirectory::Temporary => Some(std::env::temp_dir()),
        SpecialDirectory::Caches => dirs::cache_dir(),
        SpecialDirectory::Config => dirs::config_dir(),
        SpecialDirectory::Data => dirs::data_dir(),
        SpecialDirectory::State => dirs::state_dir(),
        SpecialDirectory::Runtime => dirs::runtime_dir(),
        SpecialDirectory::Documents => dirs::document_dir(),
        SpecialDirectory::Desktop => dirs::desktop_dir(),
        SpecialDirectory::Downloads => dirs::download_dir(),
        SpecialDirectory::Music => dirs::audio_dir(),
        SpecialDirectory::Pictures => dirs::picture_dir(),
        SpecialDirectory::Videos => dirs::video_dir(),
        SpecialDirectory::Public => dirs::public_dir(),
        SpecialDirectory::Templates => dirs::template_dir(),
        SpecialDirectory::Executables => dirs::executable_dir(),
        SpecialDirectory::Fonts => dirs::font_dir(),
        SpecialDirectory::Applications => dirs::data_dir().map(|dir| dir.join("applications")),
        SpecialDirectory::Library => dirs::data_dir(),
        SpecialDirectory::Trash => dirs::data_local_dir().map(|dir| dir.join("Trash/files")),
    }
}

// System scope follows the conventional POSIX layout; most user-facing
// kinds have no machine-wide counterpart.
fn system_dirs(kind: SpecialDirectory) -> Vec<PathBuf> {
    let paths: &[&str] = match kind {
        SpecialDirectory::Home => &["/home"],
        SpecialDirectory::Temporary => &["/tmp", "/var/tmp"],
        SpecialDirectory::Caches => &["/var/cache"],
        SpecialDirectory::Config => &["/etc"],
        SpecialDirectory::Data | SpecialDirectory::Library => {
            &["/usr/local/share", "/usr/share"]
        }
        SpecialDirectory::State => &["/var/lib"],
        SpecialDirectory::Runtime => &["/run"],
        SpecialDirectory::Executables => &["/usr/local/bin", "/usr/bin"],
        SpecialDirectory::Fonts => &["/usr/local/share/fonts", "/usr/share/fonts"],
        SpecialDirectory::Applications => {
            &["/usr/local/share/applications", "/usr/share/applications"]
        }
        _ => &[],
    };
    paths.iter().map(PathBuf::from).collect()
}

fn render(path: PathBuf, expand_tilde: bool) -> Location {
    let text = path.to_string_lossy().to_string();
    if !expand_tilde {
        if let Some(home) = dirs::home_dir() {
            let home = home.to_string_lossy();
            if let Some(rest) = text.strip_prefix(home.as_ref()) {
                // Only swap whole components, never a shared name prefix
                if rest.is_empty() || rest.starts_with('/') {
                    return Location::new(format!("~{rest}"));
                }
            }
        }
    }
    Location::new(text)
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;
    use strum::IntoEnumIterator;

    use super::{Domain, SpecialDirectory};
    use crate::CairnFS;

    #[test]
    fn test_home_resolves_for_the_user_domain() {
        let home = CairnFS::special_directory(SpecialDirectory::Home, Domain::User, true)
            .expect("a home directory");
        assert!(home.is_absolute());
    }

    #[test]
    fn test_tilde_rendering_of_the_home_itself() {
        let home = CairnFS::special_directory(SpecialDirectory::Home, Domain::User, false)
            .expect("a home directory");
        assert_eq!(home.as_str(), "~");
    }

    #[test]
    fn test_expand_tilde_spells_out_the_home() {
        let caches = CairnFS::special_directory(SpecialDirectory::Caches, Domain::User, true)
            .expect("a caches directory");
        assert!(!caches.as_str().starts_with('~'));
    }

    #[test]
    fn test_all_domain_lists_user_locations_first() {
        let all = CairnFS::special_directories(SpecialDirectory::Temporary, Domain::All, true);
        let user = CairnFS::special_directories(SpecialDirectory::Temporary, Domain::User, true);
        let system =
            CairnFS::special_directories(SpecialDirectory::Temporary, Domain::System, true);

        assert_eq!(all.first(), user.first());
        assert!(system.iter().all(|dir| all.contains(dir)));
    }

    #[cfg(unix)]
    #[test]
    fn test_system_domain_uses_the_shared_layout() {
        let config = CairnFS::special_directories(SpecialDirectory::Config, Domain::System, true);
        assert_eq!(config.first().map(|dir| dir.as_str()), Some("/etc"));
    }

    #[test]
    fn test_catalog_resolution_never_panics() {
        for kind in SpecialDirectory::iter() {
            for domain in [Domain::User, Domain::System, Domain::All] {
                CairnFS::special_directories(kind, domain, false);
            }
        }
    }

    #[test]
    fn test_unique_temporary_directories_differ() {
        let first = CairnFS::unique_temporary_directory();
        let second = CairnFS::unique_temporary_directory();

        assert_ne!(first, second);

        let temp = CairnFS::temporary_directory();
        let marker = format!("cairn-{}", std::process::id());
        for candidate in [&first, &second] {
            assert_eq!(candidate.parent().parent(), temp);
            assert_eq!(candidate.parent().name(), marker);
        }
    }
}
