use schemematch_core::{Catalog, Error, Result, SchemeRecord};
use std::collections::HashSet;
use std::path::Path;
use tracing::{info, warn};

/// Read and validate the scheme catalog, failing on any problem.
///
/// The file must hold a JSON array of scheme records with unique ids.
pub fn try_load_catalog<P: AsRef<Path>>(path: P) -> Result<Vec<SchemeRecord>> {
    let path = path.as_ref();
    let data = std::fs::read_to_string(path).map_err(|e| {
        Error::CatalogUnavailable(format!("cannot read {}: {}", path.display(), e))
    })?;

    let schemes: Vec<SchemeRecord> = serde_json::from_str(&data).map_err(|e| {
        Error::CatalogUnavailable(format!("malformed catalog {}: {}", path.display(), e))
    })?;

    let mut seen = HashSet::with_capacity(schemes.len());
    for scheme in &schemes {
        if !seen.insert(&scheme.id) {
            return Err(Error::CatalogUnavailable(format!(
                "duplicate scheme id {} in {}",
                scheme.id,
                path.display()
            )));
        }
    }

    Ok(schemes)
}

/// Load the scheme catalog for engine startup.
///
/// Never fails: a missing or malformed source is logged once and yields
/// an empty catalog marked unavailable, so the server can still start.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Catalog {
    let path = path.as_ref();
    match try_load_catalog(path) {
        Ok(schemes) => {
            info!("Loaded {} schemes from {:?}", schemes.len(), path);
            Catalog::loaded(schemes)
        }
        Err(e) => {
            warn!("{}; serving an empty catalog", e);
            Catalog::unavailable(e.to_string())
        }
    }
}
