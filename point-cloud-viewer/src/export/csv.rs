use std::io::Write;
use std::path::Path;

use super::write_file;
use crate::engine::point_store::PointStore;
use crate::error::ExportError;

/// Write an `x,y,z` CSV file, one row per point in store order.
pub fn export_csv(path: impl AsRef<Path>, points: &PointStore) -> Result<(), ExportError> {
    write_file(path.as_ref(), |writer| {
        writeln!(writer, "x,y,z")?;
        for p in points.positions() {
            writeln!(writer, "{:?},{:?},{:?}", p.x, p.y, p.z)?;
        }
        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::math::Vec3;
    use std::fs;

    #[test]
    fn single_point_layout() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("p.csv");

        export_csv(&path, &PointStore::new(vec![Vec3::new(1.0, 2.0, 3.0)])).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "x,y,z\n1.0,2.0,3.0\n");
    }

    #[test]
    fn rows_follow_store_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ordered.csv");
        let positions: Vec<Vec3> = (0..10)
            .rev()
            .map(|i| Vec3::new(i as f32, -(i as f32), 0.5))
            .collect();

        export_csv(&path, &PointStore::new(positions.clone())).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), positions.len() + 1);
        assert_eq!(lines[0], "x,y,z");
        assert_eq!(lines[1], "9.0,-9.0,0.5");
        assert_eq!(lines[10], "0.0,-0.0,0.5");
    }

    #[test]
    fn colour_channels_are_not_written() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stars.csv");
        let store = PointStore::with_colours(vec![Vec3::ONE], vec![[0.5, 0.5, 0.5]]).unwrap();

        export_csv(&path, &store).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "x,y,z\n1.0,1.0,1.0\n");
    }

    #[test]
    fn unwritable_path_reports_io_error() {
        let dir = tempfile::tempdir().unwrap();

        // A directory cannot be opened as a file
        let err = export_csv(dir.path(), &PointStore::new(Vec::new()));

        assert!(matches!(err, Err(ExportError::Io { .. })));
    }
}
