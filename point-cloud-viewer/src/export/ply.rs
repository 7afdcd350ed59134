use std::io::Write;
use std::path::Path;

use super::write_file;
use crate::engine::point_store::PointStore;
use crate::error::ExportError;

/// Write an ASCII PLY file with x/y/z vertex properties only. Colour channels,
/// when present, are dropped.
pub fn export_ply(path: impl AsRef<Path>, points: &PointStore) -> Result<(), ExportError> {
    write_file(path.as_ref(), |writer| {
        write_header(writer, points.len(), false)?;
        for p in points.positions() {
            writeln!(writer, "{:?} {:?} {:?}", p.x, p.y, p.z)?;
        }
        Ok(())
    })
}

/// Write an ASCII PLY file that also carries `red`/`green`/`blue` uchar properties.
/// Falls back to the plain layout for stores without colour.
pub fn export_coloured_ply(path: impl AsRef<Path>, points: &PointStore) -> Result<(), ExportError> {
    let Some(colours) = points.colours() else {
        return export_ply(path, points);
    };

    write_file(path.as_ref(), |writer| {
        write_header(writer, points.len(), true)?;
        for (p, c) in points.positions().iter().zip(colours) {
            writeln!(
                writer,
                "{:?} {:?} {:?} {} {} {}",
                p.x,
                p.y,
                p.z,
                channel_to_byte(c[0]),
                channel_to_byte(c[1]),
                channel_to_byte(c[2]),
            )?;
        }
        Ok(())
    })
}

fn write_header(writer: &mut impl Write, vertex_count: usize, coloured: bool) -> std::io::Result<()> {
    writeln!(writer, "ply")?;
    writeln!(writer, "format ascii 1.0")?;
    writeln!(writer, "element vertex {vertex_count}")?;
    writeln!(writer, "property float x")?;
    writeln!(writer, "property float y")?;
    writeln!(writer, "property float z")?;
    if coloured {
        writeln!(writer, "property uchar red")?;
        writeln!(writer, "property uchar green")?;
        writeln!(writer, "property uchar blue")?;
    }
    writeln!(writer, "end_header")
}

fn channel_to_byte(channel: f32) -> u8 {
    (channel.clamp(0.0, 1.0) * 255.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::math::Vec3;
    use std::fs;

    #[test]
    fn single_point_layout() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("p.ply");
        let store = PointStore::new(vec![Vec3::new(1.0, 2.0, 3.0)]);

        export_ply(&path, &store).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert_eq!(
            text,
            "ply\nformat ascii 1.0\nelement vertex 1\nproperty float x\nproperty float y\n\
             property float z\nend_header\n1.0 2.0 3.0\n"
        );
    }

    #[test]
    fn colour_is_truncated_by_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stars.ply");
        let store =
            PointStore::with_colours(vec![Vec3::new(-1.5, 0.25, 8.0)], vec![[1.0, 0.5, 0.0]])
                .unwrap();

        export_ply(&path, &store).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert!(!text.contains("red"));
        assert_eq!(text.lines().last(), Some("-1.5 0.25 8.0"));
    }

    #[test]
    fn coloured_export_writes_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stars.ply");
        let store =
            PointStore::with_colours(vec![Vec3::new(-1.5, 0.25, 8.0)], vec![[1.0, 0.5, 0.0]])
                .unwrap();

        export_coloured_ply(&path, &store).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 11);
        assert_eq!(lines[6], "property uchar red");
        assert_eq!(lines[9], "end_header");
        assert_eq!(lines[10], "-1.5 0.25 8.0 255 128 0");
    }

    #[test]
    fn coloured_export_without_colour_matches_plain() {
        let dir = tempfile::tempdir().unwrap();
        let plain = dir.path().join("plain.ply");
        let coloured = dir.path().join("coloured.ply");
        let store = PointStore::new(vec![Vec3::new(0.5, 0.5, 0.5), Vec3::ZERO]);

        export_ply(&plain, &store).unwrap();
        export_coloured_ply(&coloured, &store).unwrap();

        assert_eq!(
            fs::read_to_string(plain).unwrap(),
            fs::read_to_string(coloured).unwrap()
        );
    }

    #[test]
    fn existing_file_is_overwritten() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("p.ply");
        fs::write(&path, "stale contents that are much longer than the export\n".repeat(50))
            .unwrap();

        export_ply(&path, &PointStore::new(Vec::new())).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.contains("element vertex 0"));
        assert!(text.ends_with("end_header\n"));
    }

    #[test]
    fn unwritable_path_reports_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("p.ply");

        let err = export_ply(&path, &PointStore::new(vec![Vec3::ONE])).unwrap_err();

        let ExportError::Io { path: failed, .. } = err;
        assert_eq!(failed, path);
    }
}
