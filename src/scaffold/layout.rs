use camino::{Utf8Path, Utf8PathBuf};

use super::error::Step;

const MANIFEST: &str = "go.mod";

/// Directories of the skeleton, relative to the project root. Each entry is
/// a direct child of an earlier one, so they can be created in order with
/// single-level creates.
const DIRECTORIES: [&str; 4] = [
    "cmd",
    "internal",
    "internal/handler",
    "internal/handler/routes",
];

/// A generated source file with fixed contents.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SourceFile {
    Main,
    Routes,
}

impl SourceFile {
    pub const ALL: [SourceFile; 2] = [SourceFile::Main, SourceFile::Routes];

    /// Path relative to the project root. Also the embedded template key.
    pub fn relative(&self) -> &'static str {
        match self {
            SourceFile::Main => "cmd/main.go",
            SourceFile::Routes => "internal/handler/routes/routes.go",
        }
    }

    pub fn write_step(&self) -> Step {
        match self {
            SourceFile::Main => Step::WriteMain,
            SourceFile::Routes => Step::WriteRoutes,
        }
    }
}

/// Absolute locations of everything a scaffolded project contains.
#[derive(Clone, Debug)]
pub struct ProjectLayout {
    root: Utf8PathBuf,
}

impl ProjectLayout {
    pub fn new(parent: &Utf8Path, name: &str) -> Self {
        Self {
            root: parent.join(name),
        }
    }

    pub fn root(&self) -> &Utf8Path {
        &self.root
    }

    pub fn manifest(&self) -> Utf8PathBuf {
        self.root.join(MANIFEST)
    }

    pub fn directories(&self) -> impl Iterator<Item = Utf8PathBuf> + '_ {
        DIRECTORIES.iter().map(|dir| self.root.join(dir))
    }

    pub fn file(&self, file: SourceFile) -> Utf8PathBuf {
        self.root.join(file.relative())
    }
}
