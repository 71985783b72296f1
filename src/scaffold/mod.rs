mod error;
mod layout;
mod module;

pub use error::{ScaffoldError, Step};
pub use layout::{ProjectLayout, SourceFile};
pub use module::{GoModInit, ModuleInit};

use std::fmt;
use std::fs::{self, File};

use camino::{Utf8Path, Utf8PathBuf};
use tracing::{debug, info};

use crate::templates;

/// What a successful `create` produced.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CreatedProject {
    pub name: String,
    pub parent: Utf8PathBuf,
    pub root: Utf8PathBuf,
}

/// One side effect `create` would perform, as reported by `plan`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PlannedStep {
    pub step: Step,
    pub action: String,
}

impl PlannedStep {
    fn new(step: Step, action: String) -> Self {
        Self { step, action }
    }
}

impl fmt::Display for PlannedStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.action)
    }
}

/// Materializes the fixed Go project skeleton.
///
/// The sequence is not transactional: a failure part-way leaves whatever was
/// already created on disk, and the caller is expected to remove it before
/// trying again.
pub struct Scaffolder<M> {
    module_init: M,
}

impl<M: ModuleInit> Scaffolder<M> {
    pub fn new(module_init: M) -> Self {
        Self { module_init }
    }

    /// Validate inputs and list the side effects of `create` without performing any.
    pub fn plan(&self, name: &str, path: &str) -> Result<Vec<PlannedStep>, ScaffoldError> {
        let layout = prepare(name, path)?;
        let root = layout.root();

        let mut steps = vec![
            PlannedStep::new(Step::CreateProjectDir, format!("create directory {}", root)),
            PlannedStep::new(Step::InitModule, self.module_init.describe(name, root)),
        ];
        steps.extend(
            layout
                .directories()
                .map(|dir| PlannedStep::new(Step::CreateDirs, format!("create directory {}", dir))),
        );
        steps.extend(SourceFile::ALL.iter().map(|file| {
            PlannedStep::new(
                Step::CreateFiles,
                format!("create empty file {}", layout.file(*file)),
            )
        }));
        steps.extend(SourceFile::ALL.iter().map(|file| {
            PlannedStep::new(file.write_step(), format!("write {}", layout.file(*file)))
        }));
        Ok(steps)
    }

    pub fn create(&self, name: &str, path: &str) -> Result<CreatedProject, ScaffoldError> {
        let layout = prepare(name, path)?;
        let root = layout.root();

        debug!(path = %root, "creating project directory");
        fs::create_dir(root).map_err(|err| ScaffoldError::io(Step::CreateProjectDir, root, err))?;

        self.module_init.init_module(name, root)?;
        debug!(manifest = %layout.manifest(), "module initialized");

        create_dirs(&layout)?;
        create_files(&layout)?;
        for file in SourceFile::ALL {
            write_source(&layout, file)?;
        }

        info!(project = name, path, "project scaffolded");
        Ok(CreatedProject {
            name: name.to_owned(),
            parent: Utf8PathBuf::from(path),
            root: root.to_owned(),
        })
    }
}

pub fn validate(name: &str, path: &str) -> Result<(), ScaffoldError> {
    if path.is_empty() {
        return Err(ScaffoldError::Validation(
            "you must supply a project path".to_owned(),
        ));
    }
    if name.is_empty() {
        return Err(ScaffoldError::Validation(
            "you must supply a project name".to_owned(),
        ));
    }
    // `join` would discard the parent for these.
    let name_path = Utf8Path::new(name);
    if name_path.is_absolute() || name_path.has_root() {
        return Err(ScaffoldError::Validation(format!(
            "project name `{}` must not be an absolute path",
            name
        )));
    }
    Ok(())
}

fn prepare(name: &str, path: &str) -> Result<ProjectLayout, ScaffoldError> {
    validate(name, path)?;

    let layout = ProjectLayout::new(Utf8Path::new(path), name);
    // Checked once; a concurrent creator can still win the race to `create_dir`.
    if layout.root().exists() {
        return Err(ScaffoldError::AlreadyExists {
            path: layout.root().to_owned(),
        });
    }
    Ok(layout)
}

fn create_dirs(layout: &ProjectLayout) -> Result<(), ScaffoldError> {
    for dir in layout.directories() {
        debug!(path = %dir, "creating directory");
        fs::create_dir(&dir).map_err(|err| ScaffoldError::io(Step::CreateDirs, &dir, err))?;
    }
    Ok(())
}

/// Touch every source file before any content is written, so an unwritable
/// location fails before either file gets a body.
fn create_files(layout: &ProjectLayout) -> Result<(), ScaffoldError> {
    for file in SourceFile::ALL {
        let path = layout.file(file);
        debug!(path = %path, "creating empty file");
        File::create(&path).map_err(|err| ScaffoldError::io(Step::CreateFiles, &path, err))?;
    }
    Ok(())
}

fn write_source(layout: &ProjectLayout, file: SourceFile) -> Result<(), ScaffoldError> {
    let path = layout.file(file);
    let contents = templates::get_bytes(file.relative())?;
    debug!(path = %path, bytes = contents.len(), "writing boilerplate");
    fs::write(&path, contents).map_err(|err| ScaffoldError::io(file.write_step(), &path, err))
}
