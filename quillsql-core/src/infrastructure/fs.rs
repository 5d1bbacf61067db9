use crate::domain::query::SchemaSource;
use crate::infrastructure::error::InfrastructureError;
use std::io::{ErrorKind, Write};
use std::path::Path;
use tracing::debug;

/// Resolve the schema argument to its text. Inline schemas pass through
/// untouched.
pub fn resolve_schema(source: &SchemaSource) -> Result<String, InfrastructureError> {
    match source {
        SchemaSource::Inline(ddl) => Ok(ddl.clone()),
        SchemaSource::File(path) => read_text_file(path),
    }
}

/// Read a UTF-8 file, keeping "not found" distinct from other read failures.
pub fn read_text_file(path: &Path) -> Result<String, InfrastructureError> {
    match std::fs::read_to_string(path) {
        Ok(content) => {
            debug!(path = %path.display(), bytes = content.len(), "read file");
            Ok(content)
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {
            Err(InfrastructureError::FileNotFound(path.to_path_buf()))
        }
        Err(e) => Err(InfrastructureError::FileRead {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}

/// Write content to a file atomically using a temporary file.
///
/// The temporary file is created next to the target and renamed over it, so
/// the target is either fully written or left untouched.
pub fn atomic_write<P: AsRef<Path>, C: AsRef<[u8]>>(
    path: P,
    content: C,
) -> Result<(), InfrastructureError> {
    let path = path.as_ref();
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let mut temp_file = tempfile::NamedTempFile::new_in(parent).map_err(InfrastructureError::Io)?;

    temp_file
        .write_all(content.as_ref())
        .map_err(InfrastructureError::Io)?;

    temp_file
        .persist(path)
        .map_err(|e| InfrastructureError::Io(e.error))?;

    Ok(())
}
