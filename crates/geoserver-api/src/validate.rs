// Local input validation
//
// Pure checks run before a request is built. A failure is always an
// `Error::Input` and never reaches the network. Names accept ASCII letters,
// digits, underscores and hyphens.

use std::path::Path;

use crate::error::Error;

const NAME_MESSAGE: &str = "name can only contain alphanumerical characters";

/// Validate a workspace / store / layer / group name.
///
/// Rejects empty (after trimming) names and any character outside
/// `[A-Za-z0-9_-]`.
pub fn validate_name(name: &str) -> Result<(), Error> {
    if name.trim().is_empty() {
        return Err(Error::input("name cannot be empty"));
    }
    if name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    {
        Ok(())
    } else {
        Err(Error::input(NAME_MESSAGE))
    }
}

/// Check one URL path segment built from a caller-supplied name.
///
/// Blank, `.` and `..` segments are dropped or collapsed by URL
/// normalization, which would retarget the request at the parent
/// collection.
pub(crate) fn validate_segment(segment: &str) -> Result<(), Error> {
    if segment.trim().is_empty() {
        return Err(Error::input("name cannot be empty"));
    }
    if matches!(segment, "." | "..") {
        return Err(Error::input(format!("{segment} is not a valid name")));
    }
    Ok(())
}

/// Only rejects the empty string; the path lives on the server, so it is
/// not checked against the local filesystem.
pub fn validate_directory(path: &str) -> Result<(), Error> {
    if path.trim().is_empty() {
        return Err(Error::input("directory path cannot be empty"));
    }
    Ok(())
}

pub fn validate_shapefile(path: &str) -> Result<(), Error> {
    validate_extension(path, "shapefile", &["shp"])
}

pub fn validate_geotiff(path: &str) -> Result<(), Error> {
    validate_extension(path, "GeoTIFF", &["tif", "tiff"])
}

pub fn validate_geopackage(path: &str) -> Result<(), Error> {
    validate_extension(path, "GeoPackage", &["gpkg"])
}

pub fn validate_csv(path: &str) -> Result<(), Error> {
    validate_extension(path, "CSV", &["csv"])
}

pub fn validate_arcgrid(path: &str) -> Result<(), Error> {
    validate_extension(path, "ArcGrid", &["asc", "arc"])
}

pub fn validate_world_image(path: &str) -> Result<(), Error> {
    validate_extension(
        path,
        "WorldImage",
        &["png", "jpg", "jpeg", "gif", "bmp", "tif", "tiff"],
    )
}

/// Case-insensitive extension check against an allow-list.
fn validate_extension(path: &str, format: &str, allowed: &[&str]) -> Result<(), Error> {
    let ext = Path::new(path.trim())
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    match ext {
        Some(ext) if allowed.contains(&ext.as_str()) => Ok(()),
        _ => Err(Error::input(format!(
            "{path} is not a valid {format} file (expected extension: {})",
            allowed.join(", ")
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn accepts_alphanumeric_underscore_and_hyphen() {
        for name in ["PLAYGROUND", "ws_1", "roads-2024", "a", "A-b_C-9"] {
            assert!(validate_name(name).is_ok(), "{name} should be valid");
        }
    }

    #[test]
    fn rejects_disallowed_characters() {
        for name in ["my ws", "ws:layer", "a/b", "ümlaut", "dot.name", "semi;colon"] {
            let err = validate_name(name).err();
            match err {
                Some(Error::Input { ref message, .. }) => assert_eq!(message, NAME_MESSAGE),
                other => panic!("expected Input error for {name:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn rejects_blank_names() {
        for name in ["", "   ", "\t"] {
            let err = validate_name(name).err();
            assert_eq!(err.map(|e| e.kind()), Some(ErrorKind::Input));
        }
    }

    #[test]
    fn extension_checks_are_case_insensitive() {
        assert!(validate_shapefile("file:data/roads.SHP").is_ok());
        assert!(validate_geotiff("/data/dem.tif").is_ok());
        assert!(validate_geotiff("/data/dem.TIFF").is_ok());
        assert!(validate_geopackage("vectors.gpkg").is_ok());
        assert!(validate_csv("points.csv").is_ok());
        assert!(validate_arcgrid("dem.asc").is_ok());
        assert!(validate_world_image("ortho.jpg").is_ok());
    }

    #[test]
    fn extension_checks_reject_other_formats() {
        assert!(validate_shapefile("roads.dbf").is_err());
        assert!(validate_geotiff("dem.png").is_err());
        assert!(validate_geopackage("vectors").is_err());
        assert!(validate_csv("").is_err());
        assert!(validate_arcgrid("dem.tif").is_err());
        assert!(validate_world_image("ortho.ecw").is_err());
    }

    #[test]
    fn path_segments_reject_relative_names() {
        for segment in ["", "  ", ".", ".."] {
            let err = validate_segment(segment).err();
            assert_eq!(err.map(|e| e.kind()), Some(ErrorKind::Input), "{segment:?}");
        }
        for segment in ["roads", "line.sld", "topp:states.json", "...", "my ws"] {
            assert!(validate_segment(segment).is_ok(), "{segment:?}");
        }
    }

    #[test]
    fn directories_only_reject_empty() {
        assert!(validate_directory("/data/mosaic").is_ok());
        assert!(validate_directory("does/not/exist").is_ok());
        assert!(validate_directory("").is_err());
    }
}
