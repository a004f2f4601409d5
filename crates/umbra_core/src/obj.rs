//! OBJ (Wavefront, text) mesh loader.
//!
//! Only the records the renderer needs are understood:
//!
//! - `v x y z` - a vertex position, exactly three coordinates
//! - `f a b c` - a triangle, exactly three 1-based vertex references
//!   (`a`, `a/t`, `a//n` and `a/t/n` are accepted; only `a` is used)
//!
//! Blank lines and `#` comments are skipped. Any other record kind is
//! ignored. A malformed record fails the whole load.

use std::path::Path;

use umbra_math::Vector;

use crate::mesh::{Mesh, MeshError, MeshResult};

/// Read and parse an OBJ file.
pub fn load_obj(path: impl AsRef<Path>) -> MeshResult<Mesh> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)?;
    let mesh = parse_obj(&content)?;
    log::info!(
        "Loaded {}: {} vertices, {} triangles",
        path.display(),
        mesh.vertex_count(),
        mesh.triangle_count()
    );
    Ok(mesh)
}

/// Parse OBJ text into a mesh.
pub fn parse_obj(content: &str) -> MeshResult<Mesh> {
    let mut parser = ObjParser::default();
    for (i, line) in content.lines().enumerate() {
        parser.parse_line(i + 1, line)?;
    }
    parser.finish()
}

#[derive(Default)]
struct ObjParser {
    positions: Vec<Vector>,
    faces: Vec<[usize; 3]>,
}

impl ObjParser {
    fn parse_line(&mut self, line_num: usize, line: &str) -> MeshResult<()> {
        let line = match line.find('#') {
            Some(start) => &line[..start],
            None => line,
        };
        let mut tokens = line.split_whitespace();
        let Some(keyword) = tokens.next() else {
            return Ok(());
        };
        let fields: Vec<&str> = tokens.collect();

        match keyword {
            "v" => {
                let [x, y, z] = exactly_three(line_num, "v", &fields)?;
                self.positions.push(Vector::new(
                    parse_coordinate(line_num, x)?,
                    parse_coordinate(line_num, y)?,
                    parse_coordinate(line_num, z)?,
                ));
            }
            "f" => {
                let [a, b, c] = exactly_three(line_num, "f", &fields)?;
                self.faces.push([
                    self.parse_reference(line_num, a)?,
                    self.parse_reference(line_num, b)?,
                    self.parse_reference(line_num, c)?,
                ]);
            }
            other => {
                log::debug!("line {}: ignoring `{}` record", line_num, other);
            }
        }
        Ok(())
    }

    /// Convert a 1-based vertex reference to a 0-based index.
    fn parse_reference(&self, line_num: usize, token: &str) -> MeshResult<usize> {
        let invalid = || MeshError::InvalidIndex {
            line: line_num,
            token: token.to_string(),
        };
        let vertex = token.split('/').next().unwrap_or(token);
        let index: usize = vertex.parse().map_err(|_| invalid())?;
        if index == 0 || index > self.positions.len() {
            return Err(invalid());
        }
        Ok(index - 1)
    }

    fn finish(self) -> MeshResult<Mesh> {
        if self.faces.is_empty() {
            log::warn!("OBJ data contains no faces");
        }
        Mesh::new(self.positions, self.faces)
    }
}

fn exactly_three<'a>(
    line_num: usize,
    record: &'static str,
    fields: &[&'a str],
) -> MeshResult<[&'a str; 3]> {
    match fields {
        &[a, b, c] => Ok([a, b, c]),
        _ => Err(MeshError::FieldCount {
            line: line_num,
            record,
            found: fields.len(),
        }),
    }
}

fn parse_coordinate(line_num: usize, token: &str) -> MeshResult<f64> {
    match token.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(MeshError::InvalidNumber {
            line: line_num,
            token: token.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn init_logging() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    const QUAD: &str = "\
# two triangles
o quad
v 0 0 0
v 1.0 0.0 0.0
v 0 1 0   # trailing comment
v 1 1 0

vn 0 0 1
f 1 2 3
f 2/1 4//1 3/1/1
";

    #[test]
    fn test_parse_quad() {
        init_logging();
        let mesh = parse_obj(QUAD).unwrap();
        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.faces(), &[[0, 1, 2], [1, 3, 2]]);
        assert_eq!(mesh.positions()[1], Vector::new(1.0, 0.0, 0.0));
        assert_eq!(mesh.triangles().len(), 2);
    }

    #[test]
    fn test_vertex_field_count() {
        let err = parse_obj("v 0 0 0\nv 1 2\n").unwrap_err();
        assert!(matches!(
            err,
            MeshError::FieldCount {
                line: 2,
                record: "v",
                found: 2
            }
        ));

        let err = parse_obj("v 0 0 0 1\n").unwrap_err();
        assert!(matches!(err, MeshError::FieldCount { found: 4, .. }));
    }

    #[test]
    fn test_face_field_count() {
        let err = parse_obj("v 0 0 0\nv 1 0 0\nv 0 1 0\nv 1 1 0\nf 1 2 3 4\n").unwrap_err();
        assert!(matches!(
            err,
            MeshError::FieldCount {
                line: 5,
                record: "f",
                found: 4
            }
        ));
    }

    #[test]
    fn test_invalid_number() {
        let err = parse_obj("v 0 zero 0\n").unwrap_err();
        match err {
            MeshError::InvalidNumber { line, token } => {
                assert_eq!(line, 1);
                assert_eq!(token, "zero");
            }
            other => panic!("unexpected error: {other}"),
        }

        assert!(matches!(
            parse_obj("v 0 inf 0\n").unwrap_err(),
            MeshError::InvalidNumber { .. }
        ));
    }

    #[test]
    fn test_invalid_reference() {
        let vertices = "v 0 0 0\nv 1 0 0\nv 0 1 0\n";

        // OBJ indices are 1-based
        let err = parse_obj(&format!("{vertices}f 0 1 2\n")).unwrap_err();
        assert!(matches!(err, MeshError::InvalidIndex { line: 4, .. }));

        let err = parse_obj(&format!("{vertices}f 1 2 4\n")).unwrap_err();
        assert!(matches!(err, MeshError::InvalidIndex { line: 4, .. }));

        let err = parse_obj(&format!("{vertices}f 1 -2 3\n")).unwrap_err();
        assert!(matches!(err, MeshError::InvalidIndex { line: 4, .. }));
    }

    #[test]
    fn test_empty_input() {
        init_logging();
        let mesh = parse_obj("").unwrap();
        assert_eq!(mesh.vertex_count(), 0);
        assert_eq!(mesh.triangle_count(), 0);
    }

    #[test]
    fn test_sample_pyramid() {
        let mesh = parse_obj(include_str!("../../../assets/pyramid.obj")).unwrap();
        assert_eq!(mesh.vertex_count(), 9);
        assert_eq!(mesh.triangle_count(), 6);

        // Every face has a well-defined plane
        for triangle in mesh.triangles() {
            assert!(triangle.plane().is_ok());
        }
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_obj("/nonexistent/umbra/mesh.obj").unwrap_err();
        assert!(matches!(err, MeshError::Io(_)));
    }
}
