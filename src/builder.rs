//! Build invocation for staged directories.
//!
//! Each staged directory gets at most one build: the first file whose name
//! ends with the configured source extension, in directory enumeration
//! order. The build command runs with the staged directory as the child
//! process working directory; the process-wide working directory is never
//! touched.

use crate::config::BuildConfig;
use crate::output;
use anyhow::{Context, Result, bail};
use std::fs;
use std::path::Path;
use std::process::Command;
use tracing::debug;
use which::which;

/// Build the first matching source file directly inside `dir`.
///
/// Prints a diagnostic and takes no build action when no source file is
/// present. A non-zero exit from the build command is reported but not
/// treated as an error; the run continues.
///
/// # Errors
///
/// Returns an error if the directory cannot be listed, the build command
/// cannot be parsed or found in PATH, or the process cannot be spawned.
pub fn compile_game(dir: &Path, build: &BuildConfig) -> Result<()> {
    let Some(source) = find_source_file(dir, &build.source_extension)? else {
        output::print_warning(&format!(
            "No {} file found in {}",
            build.source_extension,
            dir.display()
        ));
        return Ok(());
    };

    run_build_command(dir, build, &source)
}

/// Find the first file in `dir` (non-recursive, enumeration order) whose
/// name ends with `extension`. Remaining matches, if any, are ignored.
fn find_source_file(dir: &Path, extension: &str) -> Result<Option<String>> {
    let entries =
        fs::read_dir(dir).with_context(|| format!("Failed to list {}", dir.display()))?;

    for entry in entries {
        let entry =
            entry.with_context(|| format!("Failed to read entry in {}", dir.display()))?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        if name.ends_with(extension) {
            return Ok(Some(name));
        }
    }

    Ok(None)
}

/// Parse a build command string into program and arguments.
///
/// Handles shell-like quoting, so commands such as
/// `go build -gcflags='-N -l'` split correctly. The program must exist in
/// PATH.
fn parse_build_command(cmd: &str) -> Result<(String, Vec<String>)> {
    let parts = shell_words::split(cmd)
        .with_context(|| format!("Invalid build command syntax: '{cmd}'"))?;

    if parts.is_empty() {
        bail!("Empty build command");
    }

    let program = parts[0].clone();
    let args = parts[1..].to_vec();

    which(&program).with_context(|| format!("Build program '{program}' not found in PATH"))?;

    Ok((program, args))
}

fn run_build_command(dir: &Path, build: &BuildConfig, source: &str) -> Result<()> {
    let (program, args) = parse_build_command(&build.command)?;
    debug!(
        program = %program,
        args = ?args,
        source,
        dir = %dir.display(),
        "invoking build command"
    );

    let result = Command::new(&program)
        .args(&args)
        .arg(source)
        .current_dir(dir)
        .output()
        .with_context(|| format!("Failed to run '{program}' in {}", dir.display()))?;

    output::print_info(&format!("{source}: build finished with {}", result.status));
    if !result.stdout.is_empty() {
        print!("{}", String::from_utf8_lossy(&result.stdout));
    }
    if !result.stderr.is_empty() {
        eprint!("{}", String::from_utf8_lossy(&result.stderr));
    }
    if !result.status.success() {
        output::print_warning(&format!("Build failed in {}", dir.display()));
    }

    Ok(())
}
