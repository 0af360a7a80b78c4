//! Project flavor detection and entry-file discovery

use std::path::{Path, PathBuf};

/// Framework flavor of the target project
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectType {
    /// Bare React / CRA-style project (default when no stronger signal exists)
    React,
    /// Next.js app-router project
    NextJs,
    /// Bare React Native project
    ReactNative,
    /// Expo router project
    Expo,
}

impl ProjectType {
    /// Short tag used in console output
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::React => "react",
            Self::NextJs => "nextjs",
            Self::ReactNative => "react-native",
            Self::Expo => "expo",
        }
    }

    /// Conventional root-render file locations, highest priority first.
    ///
    /// These paths are a compatibility contract with each framework's
    /// conventional layout and must not change silently.
    #[must_use]
    pub const fn entry_candidates(self) -> &'static [&'static str] {
        match self {
            Self::React => &["src/main.js", "src/main.tsx", "src/main.jsx"],
            Self::NextJs => &["app/layout.js", "app/layout.tsx", "app/layout.jsx"],
            Self::ReactNative => &["App.js", "App.tsx", "App.jsx"],
            Self::Expo => &["app/_layout.js", "app/_layout.tsx", "app/_layout.jsx"],
        }
    }

    /// Relative import path from the entry file to the generated store.
    ///
    /// Next.js and Expo entry files live one directory below the project
    /// root (`app/`), so they import the store parent-relative; React and
    /// React Native entries sit next to `redux/`.
    #[must_use]
    pub const fn store_import_path(self) -> &'static str {
        match self {
            Self::NextJs | Self::Expo => "../redux/store",
            Self::React | Self::ReactNative => "./redux/store",
        }
    }
}

/// Classify the project rooted at `root` from file-system markers.
///
/// First match wins: a Next.js config file, then an Expo root layout, then
/// native platform directories. Falls back to [`ProjectType::React`] when no
/// marker is present; never fails.
#[must_use]
pub fn classify(root: &Path) -> ProjectType {
    if root.join("next.config.js").exists() {
        return ProjectType::NextJs;
    }
    if root.join("app/_layout.js").exists() {
        return ProjectType::Expo;
    }
    if root.join("android").exists() || root.join("ios").exists() {
        return ProjectType::ReactNative;
    }
    ProjectType::React
}

/// Find the project's entry file for the given flavor.
///
/// Returns the first candidate (in declared order) that exists under
/// `root`, as a path relative to `root`. Probe only; never creates or
/// modifies anything.
#[must_use]
pub fn locate_entry_file(root: &Path, project_type: ProjectType) -> Option<PathBuf> {
    project_type
        .entry_candidates()
        .iter()
        .map(PathBuf::from)
        .find(|candidate| root.join(candidate).exists())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_classify_defaults_to_react() {
        let temp_dir = TempDir::new().unwrap();
        assert_eq!(classify(temp_dir.path()), ProjectType::React);
    }

    #[test]
    fn test_classify_nextjs_marker() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("next.config.js"), "module.exports = {};").unwrap();
        assert_eq!(classify(temp_dir.path()), ProjectType::NextJs);
    }

    #[test]
    fn test_classify_expo_marker() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir_all(temp_dir.path().join("app")).unwrap();
        fs::write(temp_dir.path().join("app/_layout.js"), "export default {}").unwrap();
        assert_eq!(classify(temp_dir.path()), ProjectType::Expo);
    }

    #[test]
    fn test_classify_react_native_android() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir_all(temp_dir.path().join("android")).unwrap();
        assert_eq!(classify(temp_dir.path()), ProjectType::ReactNative);
    }

    #[test]
    fn test_classify_react_native_ios() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir_all(temp_dir.path().join("ios")).unwrap();
        assert_eq!(classify(temp_dir.path()), ProjectType::ReactNative);
    }

    #[test]
    fn test_classify_nextjs_wins_over_expo_and_native() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("next.config.js"), "module.exports = {};").unwrap();
        fs::create_dir_all(temp_dir.path().join("app")).unwrap();
        fs::write(temp_dir.path().join("app/_layout.js"), "export default {}").unwrap();
        fs::create_dir_all(temp_dir.path().join("android")).unwrap();
        assert_eq!(classify(temp_dir.path()), ProjectType::NextJs);
    }

    #[test]
    fn test_classify_expo_wins_over_native() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir_all(temp_dir.path().join("app")).unwrap();
        fs::write(temp_dir.path().join("app/_layout.js"), "export default {}").unwrap();
        fs::create_dir_all(temp_dir.path().join("ios")).unwrap();
        assert_eq!(classify(temp_dir.path()), ProjectType::Expo);
    }

    #[test]
    fn test_locate_returns_first_existing_candidate() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir_all(temp_dir.path().join("src")).unwrap();
        fs::write(temp_dir.path().join("src/main.tsx"), "// tsx").unwrap();
        fs::write(temp_dir.path().join("src/main.jsx"), "// jsx").unwrap();

        let found = locate_entry_file(temp_dir.path(), ProjectType::React);
        assert_eq!(found, Some(PathBuf::from("src/main.tsx")));
    }

    #[test]
    fn test_locate_honors_declared_order() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir_all(temp_dir.path().join("src")).unwrap();
        fs::write(temp_dir.path().join("src/main.js"), "// js").unwrap();
        fs::write(temp_dir.path().join("src/main.tsx"), "// tsx").unwrap();

        let found = locate_entry_file(temp_dir.path(), ProjectType::React);
        assert_eq!(found, Some(PathBuf::from("src/main.js")));
    }

    #[test]
    fn test_locate_returns_none_when_absent() {
        let temp_dir = TempDir::new().unwrap();
        assert_eq!(locate_entry_file(temp_dir.path(), ProjectType::Expo), None);
    }

    #[test]
    fn test_locate_never_creates_files() {
        let temp_dir = TempDir::new().unwrap();
        let _ = locate_entry_file(temp_dir.path(), ProjectType::ReactNative);
        assert_eq!(fs::read_dir(temp_dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_store_import_path_per_type() {
        assert_eq!(ProjectType::NextJs.store_import_path(), "../redux/store");
        assert_eq!(ProjectType::Expo.store_import_path(), "../redux/store");
        assert_eq!(ProjectType::React.store_import_path(), "./redux/store");
        assert_eq!(ProjectType::ReactNative.store_import_path(), "./redux/store");
    }
}
