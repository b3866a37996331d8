use std::{fs, path::Path};
use tracing::info;
use crate::error::{KernelError, Result};
use crate::header::{RunHeader, MANIFEST_VERSION};

impl RunHeader {
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)?;
        }
        fs::write(path, serde_json::to_vec_pretty(self)?)?;
        info!(path = %path.display(), "wrote run manifest");
        Ok(())
    }

    pub fn load(path: &Path) -> Result<RunHeader> {
        let bytes = fs::read(path)?;
        let header: RunHeader = serde_json::from_slice(&bytes)?;
        if header.version > MANIFEST_VERSION {
            return Err(KernelError::ManifestVersion { found: header.version, supported: MANIFEST_VERSION });
        }
        Ok(header)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::KernelConfig;
    use crate::engine::Engine;
    use crate::header::Roi;
    use crate::types::Sinks;
    use tempfile::TempDir;

    #[test]
    fn save_then_load_matches_the_run() {
        let cfg = KernelConfig::new(6, 4096);
        let sinks = Engine::new(cfg).unwrap().run_unmarked();
        let h = RunHeader::new(cfg, Roi { id: 0, flag: 0 }, "recording", &sinks);
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("nested").join("run.json");
        h.save(&path).unwrap();
        let back = RunHeader::load(&path).unwrap();
        assert!(back.matches(&h));
        assert_eq!(back.checksum, "a93e35a13e777fd1");
        assert_eq!(back.fsum, "36.720508");
    }

    #[test]
    fn nan_sums_survive_the_manifest() {
        let cfg = KernelConfig::default();
        let sinks = Sinks { checksum: 1, fsum: f64::NAN };
        let h = RunHeader::new(cfg, Roi { id: 0, flag: 0 }, "trace", &sinks);
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("nan.json");
        h.save(&path).unwrap();
        let back = RunHeader::load(&path).unwrap();
        assert_eq!(back.fsum, "NaN");
        assert!(back.matches(&h));
    }

    #[test]
    fn mismatched_run_is_detected() {
        let cfg = KernelConfig::new(4, 64);
        let a = RunHeader::new(cfg, Roi { id: 0, flag: 0 }, "trace", &Sinks { checksum: 1, fsum: 1.0 });
        let b = RunHeader::new(cfg, Roi { id: 0, flag: 0 }, "trace", &Sinks { checksum: 2, fsum: 1.0 });
        let c = RunHeader::new(KernelConfig::new(5, 64), Roi { id: 0, flag: 0 }, "trace", &Sinks { checksum: 1, fsum: 1.0 });
        assert!(!a.matches(&b));
        assert!(!a.matches(&c));
    }

    #[test]
    fn garbage_is_a_manifest_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("garbage.json");
        fs::write(&path, b"{ not json").unwrap();
        assert!(matches!(RunHeader::load(&path), Err(KernelError::Manifest(_))));
        assert!(matches!(RunHeader::load(&tmp.path().join("missing.json")), Err(KernelError::Io(_))));
    }

    #[test]
    fn newer_manifest_version_is_rejected() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("future.json");
        let mut h = RunHeader::new(KernelConfig::new(4, 64), Roi { id: 0, flag: 0 }, "trace",
                                   &Sinks { checksum: 1, fsum: 1.0 });
        h.version = MANIFEST_VERSION + 98;
        h.save(&path).unwrap();
        match RunHeader::load(&path) {
            Err(KernelError::ManifestVersion { found, supported }) => {
                assert_eq!(found, 99);
                assert_eq!(supported, MANIFEST_VERSION);
            }
            other => panic!("expected ManifestVersion, got {:?}", other),
        }
    }
}
