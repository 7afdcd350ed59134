//! Flat text exporters for the point store.
//!
//! Coordinates are written with Rust's shortest round-trip float formatting
//! (`{:?}`), so every value keeps a fractional part (`1.0`, `-0.25`) and parses
//! back to the exact same `f32`.

pub mod csv;
pub mod ply;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use bevy::prelude::*;

use crate::config::ExportSettings;
use crate::engine::data_source::DatasetKind;
use crate::engine::point_store::PointStore;
use crate::error::ExportError;

pub use self::csv::export_csv;
pub use self::ply::{export_coloured_ply, export_ply};

/// Create (or truncate) `path` and stream into it through a buffered writer.
fn write_file<F>(path: &Path, write: F) -> Result<(), ExportError>
where
    F: FnOnce(&mut BufWriter<File>) -> std::io::Result<()>,
{
    let to_error = |source: std::io::Error| ExportError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(to_error)?;
    let mut writer = BufWriter::new(file);
    write(&mut writer)
        .and_then(|_| writer.flush())
        .map_err(to_error)
}

/// Run every configured export. Unset paths fall back to the file names of
/// `kind`. Each export is attempted even if an earlier one fails; the first
/// failure is returned.
pub fn export_point_store(
    settings: &ExportSettings,
    kind: DatasetKind,
    store: &PointStore,
) -> Result<(), ExportError> {
    let mut first_error = None;

    if let Some(path) = settings.ply_path(kind) {
        let result = if settings.include_colour {
            export_coloured_ply(&path, store)
        } else {
            export_ply(&path, store)
        };
        record(result, &path, &mut first_error);
    }

    if let Some(path) = settings.csv_path(kind) {
        record(export_csv(&path, store), &path, &mut first_error);
    }

    first_error.map_or(Ok(()), Err)
}

fn record(result: Result<(), ExportError>, path: &Path, first_error: &mut Option<ExportError>) {
    match result {
        Ok(()) => info!("Point cloud saved to {}", path.display()),
        Err(err) => {
            error!("{err}");
            first_error.get_or_insert(err);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ExportPath;
    use std::fs;

    fn store() -> PointStore {
        PointStore::with_colours(vec![Vec3::new(1.0, 2.0, 3.0)], vec![[1.0, 1.0, 1.0]]).unwrap()
    }

    #[test]
    fn writes_both_configured_files() {
        let dir = tempfile::tempdir().unwrap();
        let settings = ExportSettings {
            ply: ExportPath::Path(dir.path().join("cloud.ply")),
            csv: ExportPath::Path(dir.path().join("cloud.csv")),
            include_colour: false,
        };

        export_point_store(&settings, DatasetKind::UniformCube, &store()).unwrap();

        let ply = fs::read_to_string(dir.path().join("cloud.ply")).unwrap();
        assert!(ply.ends_with("end_header\n1.0 2.0 3.0\n"));
        let csv = fs::read_to_string(dir.path().join("cloud.csv")).unwrap();
        assert_eq!(csv, "x,y,z\n1.0,2.0,3.0\n");
    }

    #[test]
    fn include_colour_selects_coloured_ply() {
        let dir = tempfile::tempdir().unwrap();
        let settings = ExportSettings {
            ply: ExportPath::Path(dir.path().join("stars.ply")),
            csv: ExportPath::Disabled,
            include_colour: true,
        };

        export_point_store(&settings, DatasetKind::StarMap, &store()).unwrap();

        let ply = fs::read_to_string(dir.path().join("stars.ply")).unwrap();
        assert!(ply.ends_with("1.0 2.0 3.0 255 255 255\n"));
    }

    #[test]
    fn failed_export_does_not_stop_the_other() {
        let dir = tempfile::tempdir().unwrap();
        let bad_ply = dir.path().join("missing").join("cloud.ply");
        let settings = ExportSettings {
            ply: ExportPath::Path(bad_ply.clone()),
            csv: ExportPath::Path(dir.path().join("cloud.csv")),
            include_colour: false,
        };

        let err = export_point_store(&settings, DatasetKind::UniformCube, &store()).unwrap_err();

        let ExportError::Io { path, .. } = err;
        assert_eq!(path, bad_ply);
        assert!(dir.path().join("cloud.csv").exists());
    }

    #[test]
    fn nothing_configured_writes_nothing() {
        let settings = ExportSettings {
            ply: ExportPath::Disabled,
            csv: ExportPath::Disabled,
            include_colour: false,
        };
        assert!(export_point_store(&settings, DatasetKind::StarMap, &store()).is_ok());
    }
}
