//! Project layout: where each artifact kind lives and which PHP namespace it
//! gets, for both the standalone `app/` tree and `Modules/<Name>/`.
//!
//! Every destination path the generators write to is derived from a
//! [`ProjectLayout`] value, so the whole core can run against an in-memory
//! filesystem rooted anywhere.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;
use crate::domain::identifier::Identifier;
use crate::domain::naming::ucfirst;

/// Category of generated file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    Class,
    Trait,
    Interface,
    Model,
    Repository,
    Service,
    Controller,
    Resource,
    View,
    File,
    LangFile,
}

impl ArtifactKind {
    pub const CLASS_LIKE: &'static str = "class, trait, interface";

    /// Human-readable name used in report lines.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Class => "Class",
            Self::Trait => "Trait",
            Self::Interface => "Interface",
            Self::Model => "Model",
            Self::Repository => "Repository",
            Self::Service => "Service",
            Self::Controller => "Controller",
            Self::Resource => "Resource",
            Self::View => "View",
            Self::File => "File",
            Self::LangFile => "Lang file",
        }
    }

    /// Marker inserted after each nested namespace segment inside a module.
    pub fn module_marker(&self) -> Option<&'static str> {
        match self {
            Self::Model => Some("Entities"),
            Self::Repository => Some("Repositories"),
            _ => None,
        }
    }

    pub fn is_class_like(&self) -> bool {
        matches!(self, Self::Class | Self::Trait | Self::Interface)
    }

    /// Stub name and placeholder suffix for `class-make` kinds.
    pub fn class_like_keyword(&self) -> Option<&'static str> {
        match self {
            Self::Class => Some("class"),
            Self::Trait => Some("trait"),
            Self::Interface => Some("interface"),
            _ => None,
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ArtifactKind {
    type Err = DomainError;

    /// Parses the `--kind` option of `class-make`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "class" => Ok(Self::Class),
            "trait" => Ok(Self::Trait),
            "interface" => Ok(Self::Interface),
            _ => Err(DomainError::InvalidKind {
                kind: s.to_string(),
                expected: Self::CLASS_LIKE,
            }),
        }
    }
}

/// Per-kind sub-directories, `/`-separated and relative to the app or
/// module directory. The PHP namespace suffix is the same path with `\`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KindDirs {
    pub model: String,
    pub module_model: String,
    pub repository: String,
    pub service: String,
    pub controller: String,
    pub resource: String,
}

impl Default for KindDirs {
    fn default() -> Self {
        Self {
            model: "Models".into(),
            module_model: "Entities".into(),
            repository: "Repositories".into(),
            service: "Services".into(),
            controller: "Http/Controllers".into(),
            resource: "Http/Resources".into(),
        }
    }
}

impl KindDirs {
    fn subpath(&self, kind: ArtifactKind, in_module: bool) -> Option<&str> {
        let dir = match kind {
            ArtifactKind::Model if in_module => &self.module_model,
            ArtifactKind::Model => &self.model,
            ArtifactKind::Repository => &self.repository,
            ArtifactKind::Service => &self.service,
            ArtifactKind::Controller => &self.controller,
            ArtifactKind::Resource => &self.resource,
            _ => return None,
        };
        Some(dir.as_str())
    }
}

/// Directory conventions of a Laravel-style project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectLayout {
    /// Project root; every other path is relative to it.
    pub root: PathBuf,
    pub app_dir: PathBuf,
    pub app_namespace: String,
    pub modules_dir: PathBuf,
    pub modules_namespace: String,
    pub lang_dir: PathBuf,
    pub views_dir: PathBuf,
    pub routes_file: PathBuf,
    pub kinds: KindDirs,
}

impl Default for ProjectLayout {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            app_dir: PathBuf::from("app"),
            app_namespace: "App".into(),
            modules_dir: PathBuf::from("Modules"),
            modules_namespace: "Modules".into(),
            lang_dir: PathBuf::from("resources/lang"),
            views_dir: PathBuf::from("resources/views"),
            routes_file: PathBuf::from("routes/web.php"),
            kinds: KindDirs::default(),
        }
    }
}

impl ProjectLayout {
    /// Default conventions under `root`.
    pub fn at(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }

    /// Join a root-relative path.
    pub fn path(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.root.join(relative)
    }

    pub fn module_dir(&self, module: &str) -> PathBuf {
        self.root.join(&self.modules_dir).join(ucfirst(module))
    }

    pub fn lang_dir(&self) -> PathBuf {
        self.root.join(&self.lang_dir)
    }

    pub fn views_dir(&self) -> PathBuf {
        self.root.join(&self.views_dir)
    }

    pub fn routes_file(&self) -> PathBuf {
        self.root.join(&self.routes_file)
    }

    /// Base directory for `kind`, without any namespace sub-directories.
    pub fn kind_dir(&self, kind: ArtifactKind, module: Option<&str>) -> PathBuf {
        match (kind, self.kinds.subpath(kind, module.is_some())) {
            (ArtifactKind::LangFile, _) => self.lang_dir(),
            (ArtifactKind::View, _) => self.views_dir(),
            (_, None) => self.root.clone(),
            (_, Some(sub)) => {
                let base = match module {
                    Some(m) => self.module_dir(m),
                    None => self.root.join(&self.app_dir),
                };
                sub.split('/').fold(base, |p, s| p.join(s))
            }
        }
    }

    /// PHP namespace of the base directory for `kind`; empty for kinds that
    /// live at the project root.
    pub fn namespace(&self, kind: ArtifactKind, module: Option<&str>) -> String {
        let Some(sub) = self.kinds.subpath(kind, module.is_some()) else {
            return String::new();
        };
        let sub = sub.replace('/', "\\");
        match module {
            Some(m) => format!("{}\\{}\\{}", self.modules_namespace, ucfirst(m), sub),
            None => format!("{}\\{}", self.app_namespace, sub),
        }
    }

    /// Destination of `<Leaf>.php` for `identifier`.
    ///
    /// Namespace segments become sub-directories of the per-kind base and
    /// are appended to its namespace.
    pub fn target(
        &self,
        kind: ArtifactKind,
        identifier: &Identifier,
        module: Option<&str>,
    ) -> GenerationTarget {
        self.target_as(kind, identifier, module, identifier.class_name())
    }

    /// Like [`target`](Self::target) with an explicit class name, for kinds
    /// whose class name is derived from the leaf (`Post` -> `PostRepository`).
    pub fn target_as(
        &self,
        kind: ArtifactKind,
        identifier: &Identifier,
        module: Option<&str>,
        class_name: String,
    ) -> GenerationTarget {
        let destination = self
            .kind_dir(kind, module)
            .join(identifier.directory())
            .join(format!("{class_name}.php"));

        let nested = identifier.class_segments();

        let mut namespace = self.namespace(kind, module);
        if !nested.is_empty() {
            if !namespace.is_empty() {
                namespace.push('\\');
            }
            namespace.push_str(&nested.join("\\"));
        }

        GenerationTarget {
            kind,
            destination,
            module: module.map(ucfirst),
            namespace,
            class_name,
        }
    }
}

/// Where one artifact is written and under which namespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationTarget {
    pub kind: ArtifactKind,
    pub destination: PathBuf,
    pub module: Option<String>,
    pub namespace: String,
    pub class_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> ProjectLayout {
        ProjectLayout::at("/project")
    }

    #[test]
    fn standalone_destinations() {
        let layout = layout();
        let post = Identifier::resolve("Post");

        let cases = [
            (ArtifactKind::Model, "/project/app/Models/Post.php"),
            (ArtifactKind::Repository, "/project/app/Repositories/Post.php"),
            (ArtifactKind::Service, "/project/app/Services/Post.php"),
            (ArtifactKind::Controller, "/project/app/Http/Controllers/Post.php"),
            (ArtifactKind::Resource, "/project/app/Http/Resources/Post.php"),
            (ArtifactKind::Class, "/project/Post.php"),
        ];
        for (kind, expected) in cases {
            assert_eq!(
                layout.target(kind, &post, None).destination,
                PathBuf::from(expected),
                "{kind}"
            );
        }
    }

    #[test]
    fn module_destinations_and_namespaces() {
        let layout = layout();
        let post = Identifier::resolve("Post");

        let model = layout.target(ArtifactKind::Model, &post, Some("blog"));
        assert_eq!(
            model.destination,
            PathBuf::from("/project/Modules/Blog/Entities/Post.php")
        );
        assert_eq!(model.namespace, "Modules\\Blog\\Entities");
        assert_eq!(model.module.as_deref(), Some("Blog"));

        let controller = layout.target(ArtifactKind::Controller, &post, Some("Blog"));
        assert_eq!(controller.namespace, "Modules\\Blog\\Http\\Controllers");
    }

    #[test]
    fn namespace_segments_become_directories() {
        let target = layout().target(
            ArtifactKind::Service,
            &Identifier::resolve("Admin/UserService"),
            None,
        );
        assert_eq!(
            target.destination,
            PathBuf::from("/project/app/Services/Admin/UserService.php")
        );
        assert_eq!(target.namespace, "App\\Services\\Admin");
        assert_eq!(target.class_name, "UserService");
    }

    #[test]
    fn class_like_kinds_have_no_base_namespace() {
        let target = layout().target(ArtifactKind::Interface, &Identifier::resolve("Foo/Bar"), None);
        assert_eq!(target.destination, PathBuf::from("/project/Foo/Bar.php"));
        assert_eq!(target.namespace, "Foo");
    }

    #[test]
    fn lowercase_segments_match_namespace_case() {
        let target = layout().target(ArtifactKind::Class, &Identifier::resolve("foo/bar"), None);
        assert_eq!(target.destination, PathBuf::from("/project/Foo/Bar.php"));
        assert_eq!(target.namespace, "Foo");
        assert_eq!(target.class_name, "Bar");
    }

    #[test]
    fn explicit_class_name() {
        let target = layout().target_as(
            ArtifactKind::Repository,
            &Identifier::resolve("Admin/Post"),
            None,
            "PostRepository".into(),
        );
        assert_eq!(
            target.destination,
            PathBuf::from("/project/app/Repositories/Admin/PostRepository.php")
        );
    }

    #[test]
    fn kind_from_str() {
        assert_eq!("Trait".parse::<ArtifactKind>(), Ok(ArtifactKind::Trait));
        assert!(matches!(
            "enum".parse::<ArtifactKind>(),
            Err(DomainError::InvalidKind { .. })
        ));
    }

    #[test]
    fn custom_kind_dirs() {
        let mut layout = layout();
        layout.kinds.repository = "Data/Repositories".into();
        assert_eq!(
            layout.namespace(ArtifactKind::Repository, None),
            "App\\Data\\Repositories"
        );
        assert_eq!(
            layout.kind_dir(ArtifactKind::Repository, None),
            PathBuf::from("/project/app/Data/Repositories")
        );
    }
}
