//! Directory descriptor expansion.

use std::path::Path;

use super::{FetchUnit, LOG_FILE_NAME, LoadError, SourceFailure};

/// Expand a directory root into one fetch unit per matched
/// `root/<category>/logs.txt`, with the category taken from the parent
/// directory name. A pattern matching nothing is a per-source failure, so
/// a missing or empty log tree is reported rather than silently ignored.
pub(crate) fn expand(root: &Path) -> Result<Vec<FetchUnit>, SourceFailure> {
    let pattern = root
        .join("*")
        .join(LOG_FILE_NAME)
        .to_string_lossy()
        .into_owned();

    let matches = glob::glob(&pattern).map_err(|source| SourceFailure {
        source: pattern.clone(),
        error: LoadError::Pattern {
            pattern: pattern.clone(),
            source,
        },
    })?;

    let mut units = Vec::new();
    for path in matches.flatten() {
        let Some(category) = category_for(&path) else {
            continue;
        };
        units.push(FetchUnit::File { path, category });
    }

    if units.is_empty() {
        return Err(SourceFailure {
            source: pattern.clone(),
            error: LoadError::NoMatches { pattern },
        });
    }
    Ok(units)
}

fn category_for(path: &Path) -> Option<String> {
    Some(
        path.parent()?
            .file_name()?
            .to_string_lossy()
            .into_owned(),
    )
}
