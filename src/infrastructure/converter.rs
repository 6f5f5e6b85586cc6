//! External document format conversion

use crate::infrastructure::DocumentFormat;
use log::{info, warn};
use std::fs;
use std::path::PathBuf;
use std::process::Command;

/// Best-effort conversion between document formats.
///
/// `None` means the conversion was not possible; callers fall back to the
/// source document.
pub trait FormatConverter {
    fn try_convert(
        &self,
        document: &[u8],
        source: DocumentFormat,
        target: DocumentFormat,
    ) -> Option<Vec<u8>>;
}

const DEFAULT_PROGRAMS: [&str; 2] = ["soffice", "libreoffice"];

/// Converts through a headless office suite.
///
/// Each call works in its own temporary directory, removed when the call
/// returns. The external process runs without a timeout.
#[derive(Debug, Clone, Default)]
pub struct OfficeConverter {
    program: Option<String>,
}

impl OfficeConverter {
    /// `program` overrides the PATH search for soffice/libreoffice
    pub fn new(program: Option<String>) -> Self {
        OfficeConverter { program }
    }

    /// Resolve the converter binary, if installed
    pub fn locate(&self) -> Option<PathBuf> {
        match &self.program {
            Some(program) => which::which(program).ok(),
            None => DEFAULT_PROGRAMS
                .iter()
                .find_map(|program| which::which(program).ok()),
        }
    }
}

impl FormatConverter for OfficeConverter {
    fn try_convert(
        &self,
        document: &[u8],
        source: DocumentFormat,
        target: DocumentFormat,
    ) -> Option<Vec<u8>> {
        let Some(program) = self.locate() else {
            info!("no document converter found, skipping {} conversion", target);
            return None;
        };

        let workdir = match tempfile::tempdir() {
            Ok(dir) => dir,
            Err(e) => {
                warn!("cannot create conversion directory: {}", e);
                return None;
            }
        };

        let source_path = workdir
            .path()
            .join(format!("ausbildungsnachweis.{}", source.extension()));
        if let Err(e) = fs::write(&source_path, document) {
            warn!("cannot stage {} for conversion: {}", source_path.display(), e);
            return None;
        }

        info!("converting {} to {} with {}", source, target, program.display());
        let output = Command::new(&program)
            .arg("--headless")
            .arg("--convert-to")
            .arg(target.extension())
            .arg("--outdir")
            .arg(workdir.path())
            .arg(&source_path)
            .output();

        match output {
            Err(e) => {
                warn!("failed to run {}: {}", program.display(), e);
                return None;
            }
            Ok(output) if !output.status.success() => {
                warn!(
                    "{} exited with {}: {}",
                    program.display(),
                    output.status,
                    String::from_utf8_lossy(&output.stderr).trim()
                );
                return None;
            }
            Ok(_) => {}
        }

        let converted_path = source_path.with_extension(target.extension());
        match fs::read(&converted_path) {
            Ok(bytes) => Some(bytes),
            Err(e) => {
                warn!(
                    "converter produced no {}: {}",
                    converted_path.display(),
                    e
                );
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;
    use std::path::Path;
    use std::sync::{Mutex, OnceLock};
    use tempfile::TempDir;

    /// Serializes tests that spawn scripts or rewrite PATH
    fn env_test_lock() -> &'static Mutex<()> {
        static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        LOCK.get_or_init(|| Mutex::new(()))
    }

    struct EnvVarRestore {
        key: &'static str,
        previous: Option<OsString>,
    }

    impl EnvVarRestore {
        fn capture(key: &'static str) -> Self {
            Self {
                key,
                previous: std::env::var_os(key),
            }
        }
    }

    impl Drop for EnvVarRestore {
        fn drop(&mut self) {
            if let Some(value) = &self.previous {
                std::env::set_var(self.key, value);
            } else {
                std::env::remove_var(self.key);
            }
        }
    }

    #[cfg(unix)]
    fn write_script(dir: &Path, name: &str, body: &str) -> String {
        use std::os::unix::fs::PermissionsExt;

        let path = dir.join(name);
        fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        path.to_string_lossy().to_string()
    }

    /// Script body that records its `--outdir` argument in `record`
    #[cfg(unix)]
    fn recording(record: &Path, body: &str) -> String {
        format!("printf '%s' \"$5\" > '{}'\n{}", record.display(), body)
    }

    #[cfg(unix)]
    fn recorded_workdir(record: &Path) -> PathBuf {
        PathBuf::from(fs::read_to_string(record).unwrap())
    }

    #[cfg(unix)]
    const CONVERTING_BODY: &str = r#"fmt="$3"; outdir="$5"; src="$6"
name=$(basename "$src"); name="${name%.*}"
{ printf 'converted:'; cat "$src"; } > "$outdir/$name.$fmt""#;

    #[test]
    fn test_missing_program_is_unavailable() {
        let converter = OfficeConverter::new(Some("berichtsheft-no-such-converter".to_string()));
        assert!(converter.locate().is_none());
        assert!(converter
            .try_convert(b"doc", DocumentFormat::Docx, DocumentFormat::Pdf)
            .is_none());
    }

    #[cfg(unix)]
    #[test]
    fn test_successful_conversion() {
        let _env_lock = env_test_lock().lock().unwrap();
        let temp = TempDir::new().unwrap();
        let record = temp.path().join("outdir.txt");
        let program = write_script(
            temp.path(),
            "fake-soffice",
            &recording(&record, CONVERTING_BODY),
        );

        let converter = OfficeConverter::new(Some(program));
        let converted = converter
            .try_convert(b"doc", DocumentFormat::Docx, DocumentFormat::Pdf)
            .unwrap();
        assert_eq!(converted, b"converted:doc");

        let workdir = recorded_workdir(&record);
        assert!(workdir.is_absolute());
        assert!(!workdir.exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_non_zero_exit_is_unavailable() {
        let _env_lock = env_test_lock().lock().unwrap();
        let temp = TempDir::new().unwrap();
        let record = temp.path().join("outdir.txt");
        let program = write_script(
            temp.path(),
            "failing-soffice",
            &recording(&record, "echo broken >&2; exit 3"),
        );

        let converter = OfficeConverter::new(Some(program));
        assert!(converter
            .try_convert(b"doc", DocumentFormat::Docx, DocumentFormat::Pdf)
            .is_none());
        assert!(!recorded_workdir(&record).exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_missing_output_is_unavailable() {
        let _env_lock = env_test_lock().lock().unwrap();
        let temp = TempDir::new().unwrap();
        let record = temp.path().join("outdir.txt");
        let program = write_script(temp.path(), "lazy-soffice", &recording(&record, "exit 0"));

        let converter = OfficeConverter::new(Some(program));
        assert!(converter
            .try_convert(b"doc", DocumentFormat::Docx, DocumentFormat::Odt)
            .is_none());
        assert!(!recorded_workdir(&record).exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_locate_falls_back_to_libreoffice() {
        let _env_lock = env_test_lock().lock().unwrap();
        let _restore = EnvVarRestore::capture("PATH");

        let temp = TempDir::new().unwrap();
        let program = write_script(temp.path(), "libreoffice", "exit 0");
        std::env::set_var("PATH", temp.path());

        let converter = OfficeConverter::default();
        assert_eq!(converter.locate(), Some(PathBuf::from(program)));
    }

    #[cfg(unix)]
    #[test]
    fn test_locate_prefers_soffice() {
        let _env_lock = env_test_lock().lock().unwrap();
        let _restore = EnvVarRestore::capture("PATH");

        let temp = TempDir::new().unwrap();
        write_script(temp.path(), "libreoffice", "exit 0");
        let soffice = write_script(temp.path(), "soffice", "exit 0");
        std::env::set_var("PATH", temp.path());

        let converter = OfficeConverter::default();
        assert_eq!(converter.locate(), Some(PathBuf::from(soffice)));
    }

    #[test]
    fn test_locate_without_any_converter() {
        let _env_lock = env_test_lock().lock().unwrap();
        let _restore = EnvVarRestore::capture("PATH");

        let temp = TempDir::new().unwrap();
        std::env::set_var("PATH", temp.path());

        assert!(OfficeConverter::default().locate().is_none());
    }
}
