//! Optional local preview through a PlantUML executable
//!
//! Locates `plantuml.jar` on the process search path, runs it over the
//! rendered diagram files, and hands the resulting images to the OS default
//! opener. Both subprocess exit statuses are fire-and-forget; a missing jar
//! is a diagnostic, never an error.

use std::env;
use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::{debug, warn};

const PLANTUML_JAR: &str = "plantuml.jar";

/// Full path to `plantuml.jar` if an exact filename match exists in any
/// `PATH` directory.
pub fn find_plantuml_jar() -> Option<PathBuf> {
    let path = env::var_os("PATH")?;
    for dir in env::split_paths(&path) {
        let candidate = dir.join(PLANTUML_JAR);
        if candidate.is_file() {
            debug!(jar = %candidate.display(), "found plantuml jar");
            return Some(candidate);
        }
    }
    None
}

/// Render each diagram file to a PNG sibling and open it with the OS
/// default viewer. Returns the expected image paths, or an empty list with
/// a diagnostic when no jar is available.
pub fn render_locally(umls: &[PathBuf]) -> Vec<PathBuf> {
    let Some(jar) = find_plantuml_jar() else {
        warn!("could not find a {} on PATH", PLANTUML_JAR);
        return Vec::new();
    };

    umls.iter().map(|uml| display_image(uml, &jar)).collect()
}

fn display_image(uml: &Path, jar: &Path) -> PathBuf {
    let png = uml.with_extension("png");
    let out_dir = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    // Exit statuses deliberately unchecked.
    let _ = Command::new("java")
        .arg("-jar")
        .arg(jar)
        .arg(uml)
        .arg("-o")
        .arg(&out_dir)
        .status();
    let _ = open_with_default(&png);

    png
}

/// Hand a file to the platform's default open mechanism.
fn open_with_default(path: &Path) -> std::io::Result<std::process::ExitStatus> {
    if cfg!(target_os = "windows") {
        Command::new("cmd").args(["/C", "start", ""]).arg(path).status()
    } else if cfg!(target_os = "macos") {
        Command::new("open").arg(path).status()
    } else {
        Command::new("xdg-open").arg(path).status()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_jar_missing_from_empty_path() {
        // Narrow the search path to a directory guaranteed not to hold the
        // jar. Restoring PATH keeps the rest of the test process sane.
        let original = env::var_os("PATH");
        let dir = tempfile::tempdir().unwrap();
        env::set_var("PATH", dir.path());

        assert!(find_plantuml_jar().is_none());
        assert!(render_locally(&[PathBuf::from("proj_classes.txt")]).is_empty());

        match original {
            Some(p) => env::set_var("PATH", p),
            None => env::remove_var("PATH"),
        }
    }

    #[test]
    fn test_png_sibling_naming() {
        let uml = PathBuf::from("/tmp/proj_classes.txt");
        assert_eq!(uml.with_extension("png"), PathBuf::from("/tmp/proj_classes.png"));
    }
}
