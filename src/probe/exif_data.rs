use super::{ExifProbe, ExifSummary, GpsCoordinates, Resolution};
use ::exif::{Exif, In, Reader, Tag, Value};
use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;
use tracing::debug;

/// EXIF reader backed by `kamadak-exif`.
#[derive(Debug, Clone, Copy, Default)]
pub struct KamadakExifProbe;

impl ExifProbe for KamadakExifProbe {
    fn exif(&self, path: &Path) -> io::Result<ExifSummary> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);

        let exif = match Reader::new().read_from_container(&mut reader) {
            Ok(exif) => exif,
            Err(e) => {
                debug!(path = %path.display(), error = %e, "no EXIF data");
                return Ok(ExifSummary::default());
            }
        };

        Ok(ExifSummary {
            dpi: resolution(&exif),
            gps: coordinates(&exif),
        })
    }
}

fn first_rational(exif: &Exif, tag: Tag) -> Option<f64> {
    match &exif.get_field(tag, In::PRIMARY)?.value {
        Value::Rational(values) => values.first().map(|r| r.to_f64()),
        _ => None,
    }
}

fn resolution(exif: &Exif) -> Option<Resolution> {
    Some(Resolution {
        x: first_rational(exif, Tag::XResolution)?,
        y: first_rational(exif, Tag::YResolution)?,
    })
}

/// Degrees, minutes and seconds to signed decimal degrees.
fn dms_to_degrees(dms: &[f64], negative: bool) -> Option<f64> {
    let [deg, min, sec] = dms else {
        return None;
    };
    let value = deg + min / 60.0 + sec / 3600.0;
    Some(if negative { -value } else { value })
}

fn axis(exif: &Exif, value_tag: Tag, ref_tag: Tag, negative_ref: u8) -> Option<f64> {
    let dms: Vec<f64> = match &exif.get_field(value_tag, In::PRIMARY)?.value {
        Value::Rational(values) => values.iter().map(|r| r.to_f64()).collect(),
        _ => return None,
    };

    let negative = exif
        .get_field(ref_tag, In::PRIMARY)
        .and_then(|field| match &field.value {
            Value::Ascii(parts) => parts.first().and_then(|p| p.first().copied()),
            _ => None,
        })
        .is_some_and(|r| r.eq_ignore_ascii_case(&negative_ref));

    dms_to_degrees(&dms, negative)
}

fn coordinates(exif: &Exif) -> Option<GpsCoordinates> {
    Some(GpsCoordinates {
        latitude: axis(exif, Tag::GPSLatitude, Tag::GPSLatitudeRef, b'S')?,
        longitude: axis(exif, Tag::GPSLongitude, Tag::GPSLongitudeRef, b'W')?,
    })
}
