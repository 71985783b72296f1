use std::process::Command;

use camino::Utf8Path;
use tracing::info;

use super::error::ScaffoldError;

const DEFAULT_GO: &str = "go";

/// Produces the dependency manifest for a freshly created project directory.
pub trait ModuleInit {
    fn init_module(&self, name: &str, dir: &Utf8Path) -> Result<(), ScaffoldError>;

    /// Human-readable form of what `init_module` would do, for dry runs.
    fn describe(&self, name: &str, dir: &Utf8Path) -> String {
        format!("initialize module `{}` in {}", name, dir)
    }
}

impl<T: ModuleInit + ?Sized> ModuleInit for &T {
    fn init_module(&self, name: &str, dir: &Utf8Path) -> Result<(), ScaffoldError> {
        (**self).init_module(name, dir)
    }

    fn describe(&self, name: &str, dir: &Utf8Path) -> String {
        (**self).describe(name, dir)
    }
}

/// Runs `go mod init <name>` with inherited stdout/stderr.
#[derive(Clone, Debug)]
pub struct GoModInit {
    program: String,
}

impl GoModInit {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn argv(&self, name: &str) -> Vec<String> {
        vec![
            self.program.clone(),
            "mod".to_owned(),
            "init".to_owned(),
            name.to_owned(),
        ]
    }
}

impl Default for GoModInit {
    fn default() -> Self {
        Self::new(DEFAULT_GO)
    }
}

impl ModuleInit for GoModInit {
    fn init_module(&self, name: &str, dir: &Utf8Path) -> Result<(), ScaffoldError> {
        let argv = self.argv(name);
        let command = format_command(&argv);
        info!(%command, %dir, "initializing go module");

        // Blocks until the tool exits; no timeout.
        let status = Command::new(&argv[0])
            .args(&argv[1..])
            .current_dir(dir)
            .status()
            .map_err(|source| ScaffoldError::Subprocess {
                command: command.clone(),
                code: None,
                source: Some(source),
            })?;

        if !status.success() {
            return Err(ScaffoldError::Subprocess {
                command,
                code: status.code(),
                source: None,
            });
        }

        Ok(())
    }

    fn describe(&self, name: &str, dir: &Utf8Path) -> String {
        format!("run `{}` in {}", format_command(&self.argv(name)), dir)
    }
}

fn format_command(argv: &[String]) -> String {
    argv.iter()
        .map(|arg| {
            if arg.is_empty() || arg.chars().any(|c| c.is_whitespace()) {
                format!("\"{}\"", arg.replace('"', "\\\""))
            } else {
                arg.clone()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn utf8(tmp: &TempDir) -> &Utf8Path {
        Utf8Path::from_path(tmp.path()).unwrap()
    }

    #[test]
    fn argv_passes_name_as_sole_positional() {
        let init = GoModInit::default();
        assert_eq!(init.argv("demo"), ["go", "mod", "init", "demo"]);
    }

    #[test]
    fn describe_quotes_names_with_spaces() {
        let init = GoModInit::new("/usr/local/go/bin/go");
        let rendered = init.describe("my app", Utf8Path::new("/tmp/my app"));
        assert_eq!(
            rendered,
            "run `/usr/local/go/bin/go mod init \"my app\"` in /tmp/my app"
        );
    }

    #[test]
    fn missing_program_is_a_subprocess_error() {
        let tmp = TempDir::new().unwrap();
        let init = GoModInit::new("goscaffold-no-such-tool");
        let err = init.init_module("demo", utf8(&tmp)).unwrap_err();
        match err {
            ScaffoldError::Subprocess { code, source, .. } => {
                assert_eq!(code, None);
                assert!(source.is_some());
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn non_zero_exit_is_a_subprocess_error() {
        let tmp = TempDir::new().unwrap();
        let init = GoModInit::new("false");
        let err = init.init_module("demo", utf8(&tmp)).unwrap_err();
        match err {
            ScaffoldError::Subprocess {
                command, code, ..
            } => {
                assert_eq!(command, "false mod init demo");
                assert_eq!(code, Some(1));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn successful_exit_is_ok() {
        let tmp = TempDir::new().unwrap();
        let init = GoModInit::new("true");
        init.init_module("demo", utf8(&tmp)).unwrap();
    }
}
