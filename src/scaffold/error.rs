use std::fmt;
use std::io;

use camino::Utf8PathBuf;
use thiserror::Error;

/// Stage of the scaffolding sequence, used to tag failures.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Step {
    CreateProjectDir,
    InitModule,
    CreateDirs,
    CreateFiles,
    WriteMain,
    WriteRoutes,
}

impl Step {
    pub fn as_str(&self) -> &'static str {
        match self {
            Step::CreateProjectDir => "create dir",
            Step::InitModule => "init go module",
            Step::CreateDirs => "create dirs",
            Step::CreateFiles => "create files",
            Step::WriteMain => "write main.go",
            Step::WriteRoutes => "write routes.go",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// A required input was empty. Nothing was touched.
    #[error("{0}")]
    Validation(String),

    /// The target directory was already there. Nothing was touched.
    #[error("project already exists at {path}")]
    AlreadyExists { path: Utf8PathBuf },

    /// Directory or file creation failed. Anything created before `step` stays on disk.
    #[error("failed to {step}: {path}")]
    Io {
        step: Step,
        path: Utf8PathBuf,
        #[source]
        source: io::Error,
    },

    /// The module-init tool could not be started or exited unsuccessfully.
    #[error("failed to {}: `{command}` {}", Step::InitModule, exit_detail(.code, .source))]
    Subprocess {
        command: String,
        code: Option<i32>,
        #[source]
        source: Option<io::Error>,
    },

    #[error("{0}")]
    Template(String),
}

impl ScaffoldError {
    pub(crate) fn io(step: Step, path: impl Into<Utf8PathBuf>, source: io::Error) -> Self {
        Self::Io {
            step,
            path: path.into(),
            source,
        }
    }

    /// The stage that failed, for errors raised after side effects began.
    pub fn step(&self) -> Option<Step> {
        match self {
            Self::Io { step, .. } => Some(*step),
            Self::Subprocess { .. } => Some(Step::InitModule),
            _ => None,
        }
    }
}

fn exit_detail(code: &Option<i32>, source: &Option<io::Error>) -> String {
    match (code, source) {
        (Some(code), _) => format!("exited with status {}", code),
        (None, Some(_)) => "could not be started".to_owned(),
        (None, None) => "was terminated by a signal".to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_names_step_and_path() {
        let err = ScaffoldError::io(
            Step::CreateDirs,
            "/tmp/demo/cmd",
            io::Error::from(io::ErrorKind::PermissionDenied),
        );
        assert_eq!(err.to_string(), "failed to create dirs: /tmp/demo/cmd");
        assert_eq!(err.step(), Some(Step::CreateDirs));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn subprocess_error_renders_exit_code() {
        let err = ScaffoldError::Subprocess {
            command: "go mod init demo".to_owned(),
            code: Some(1),
            source: None,
        };
        assert_eq!(
            err.to_string(),
            "failed to init go module: `go mod init demo` exited with status 1"
        );
    }

    #[test]
    fn subprocess_spawn_failure_keeps_source() {
        let err = ScaffoldError::Subprocess {
            command: "go mod init demo".to_owned(),
            code: None,
            source: Some(io::Error::from(io::ErrorKind::NotFound)),
        };
        assert!(err.to_string().ends_with("could not be started"));
        assert!(std::error::Error::source(&err).is_some());
        assert_eq!(err.step(), Some(Step::InitModule));
    }
}
