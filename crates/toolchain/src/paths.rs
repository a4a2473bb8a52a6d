//! Search Path Registration
//!
//! Exposes the tool directories to subsequent pipeline steps and, when the
//! invoking automation platform provides a path file, to later workflow
//! steps as well.

use std::env;
use std::ffi::{OsStr, OsString};
use std::io;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::debug;

/// The three directories every run registers: the base tool directory, its
/// `bin` subdirectory, and platform-tools.
pub fn tool_dirs(sdk_home: &Path) -> [PathBuf; 3] {
    let tools = sdk_home.join("cmdline-tools").join("tools");
    let bin = tools.join("bin");
    let platform_tools = sdk_home.join("platform-tools");
    [tools, bin, platform_tools]
}

/// Prepend `dirs` to an existing `PATH` value.
pub fn prepend_to_path(
    current: Option<&OsStr>,
    dirs: &[PathBuf],
) -> Result<OsString, env::JoinPathsError> {
    let existing = current
        .map(|value| env::split_paths(value).collect::<Vec<_>>())
        .unwrap_or_default();
    env::join_paths(dirs.iter().cloned().chain(existing))
}

/// Register the tool directories for this process and, when the invoking
/// automation platform provides a path file, for later workflow steps too.
pub fn register(sdk_home: &Path, path_file: Option<&Path>) -> io::Result<()> {
    let dirs = tool_dirs(sdk_home);

    let merged = prepend_to_path(env::var_os("PATH").as_deref(), &dirs)
        .map_err(|err| io::Error::new(io::ErrorKind::InvalidInput, err))?;
    env::set_var("PATH", &merged);

    if let Some(path_file) = path_file {
        append_path_file(path_file, &dirs)?;
    }

    debug!("registered tool directories on PATH");
    Ok(())
}

/// Append each directory as one line to the platform's path file.
pub fn append_path_file(file: &Path, dirs: &[PathBuf]) -> io::Result<()> {
    let mut handle = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(file)?;
    for dir in dirs {
        writeln!(handle, "{}", dir.display())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tool_dirs_cover_tools_bin_and_platform_tools() {
        let dirs = tool_dirs(Path::new("/sdk"));
        assert_eq!(dirs[0], Path::new("/sdk/cmdline-tools/tools"));
        assert_eq!(dirs[1], Path::new("/sdk/cmdline-tools/tools/bin"));
        assert_eq!(dirs[2], Path::new("/sdk/platform-tools"));
    }

    #[test]
    fn prepend_puts_the_new_dirs_first() {
        let dirs = [PathBuf::from("/sdk/bin")];
        let merged = prepend_to_path(Some(OsStr::new("/usr/bin")), &dirs).unwrap();
        let entries: Vec<_> = env::split_paths(&merged).collect();
        assert_eq!(
            entries,
            vec![PathBuf::from("/sdk/bin"), PathBuf::from("/usr/bin")]
        );
    }

    #[test]
    fn prepend_tolerates_a_missing_path() {
        let dirs = [PathBuf::from("/sdk/bin")];
        let merged = prepend_to_path(None, &dirs).unwrap();
        let entries: Vec<_> = env::split_paths(&merged).collect();
        assert_eq!(entries, vec![PathBuf::from("/sdk/bin")]);
    }

    #[test]
    fn append_path_file_writes_one_line_per_dir() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("runner_path");
        let dirs = [PathBuf::from("/sdk/a"), PathBuf::from("/sdk/b")];

        append_path_file(&file, &dirs).unwrap();
        append_path_file(&file, &dirs[..1].to_vec()).unwrap();

        let contents = std::fs::read_to_string(&file).unwrap();
        assert_eq!(contents, "/sdk/a\n/sdk/b\n/sdk/a\n");
    }
}
