//! Binary plane-set files.
//!
//! Layout, little endian: the shared normal as three `f32`, an `i32` axis
//! count, then `count` axes of three `f32` each.

use std::fs;
use std::path::Path;

use crate::core::{DVec3, SchedulerError, SwingPlanes};

const VEC_BYTES: usize = 12;
const HEADER_BYTES: usize = VEC_BYTES + 4;

/// Serialize a plane set.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
pub fn encode(planes: &SwingPlanes) -> Vec<u8> {
    let mut out = Vec::with_capacity(HEADER_BYTES + planes.len() * VEC_BYTES);
    put_vec(&mut out, planes.normal());
    out.extend_from_slice(&(planes.len() as i32).to_le_bytes());
    for axis in planes.axes() {
        put_vec(&mut out, *axis);
    }
    out
}

/// Parse a plane set, rejecting negative counts and truncated input.
pub fn decode(bytes: &[u8]) -> Result<SwingPlanes, SchedulerError> {
    if bytes.len() < HEADER_BYTES {
        return Err(SchedulerError::PlaneStore(format!(
            "header needs {HEADER_BYTES} bytes, got {}",
            bytes.len()
        )));
    }
    let normal = get_vec(&bytes[..VEC_BYTES]);
    let count = i32::from_le_bytes(read4(&bytes[VEC_BYTES..HEADER_BYTES]));
    let count = usize::try_from(count)
        .map_err(|_| SchedulerError::PlaneStore(format!("negative axis count {count}")))?;

    let needed = count
        .checked_mul(VEC_BYTES)
        .ok_or_else(|| SchedulerError::PlaneStore(format!("axis count {count} too large")))?;
    let body = &bytes[HEADER_BYTES..];
    if body.len() < needed {
        return Err(SchedulerError::PlaneStore(format!(
            "expected {count} axes, found {}",
            body.len() / VEC_BYTES
        )));
    }
    let axes = body.chunks_exact(VEC_BYTES).take(count).map(get_vec);
    Ok(SwingPlanes::new(normal, axes))
}

/// Read a plane set from `path`.
pub fn load(path: impl AsRef<Path>) -> Result<SwingPlanes, SchedulerError> {
    let bytes = fs::read(path)?;
    decode(&bytes)
}

/// Write a plane set to `path`, replacing any existing file.
pub fn save(path: impl AsRef<Path>, planes: &SwingPlanes) -> Result<(), SchedulerError> {
    fs::write(path, encode(planes))?;
    Ok(())
}

/// Load from `path`, falling back to a generated table when the file is
/// missing, unreadable, or empty.
pub fn load_or_generate(
    path: impl AsRef<Path>,
    normal: DVec3,
    aim: DVec3,
    step_degrees: f64,
) -> SwingPlanes {
    let path = path.as_ref();
    match load(path) {
        Ok(planes) if !planes.is_empty() => {
            tracing::info!(path = %path.display(), axes = planes.len(), "loaded swing planes");
            planes
        }
        Ok(_) => {
            tracing::warn!(path = %path.display(), "plane file has no axes, generating");
            SwingPlanes::generate(normal, aim, step_degrees)
        }
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "plane file unavailable, generating");
            SwingPlanes::generate(normal, aim, step_degrees)
        }
    }
}

#[allow(clippy::cast_possible_truncation)]
fn put_vec(out: &mut Vec<u8>, v: DVec3) {
    for c in v.to_array() {
        out.extend_from_slice(&(c as f32).to_le_bytes());
    }
}

fn get_vec(chunk: &[u8]) -> DVec3 {
    let c = |i: usize| f64::from(f32::from_le_bytes(read4(&chunk[i * 4..i * 4 + 4])));
    DVec3::new(c(0), c(1), c(2))
}

fn read4(slice: &[u8]) -> [u8; 4] {
    let mut buf = [0u8; 4];
    buf.copy_from_slice(slice);
    buf
}
