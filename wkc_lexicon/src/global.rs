//! The process-wide lexicon handle.
//!
//! First use loads the artifacts; concurrent first users serialize on the
//! lock and then share one `Arc`. `unload` drops the mapping, but is not
//! safe against calls still holding an `Arc` clone in flight — quiesce
//! callers first; that contract is the caller's to keep.

use std::{
    path::PathBuf,
    sync::{Arc, RwLock},
};

use once_cell::sync::Lazy;
use tracing::info;

use crate::{Lexicon, Result};

/// Environment override for the artifact directory.
pub const LEXICON_DIR_ENV: &str = "WAKACHI_LEXICON_DIR";

const DEFAULT_DIR: &str = "data/lexicon";

static GLOBAL: Lazy<RwLock<Option<Arc<Lexicon>>>> = Lazy::new(|| RwLock::new(None));

/// The directory the global handle loads from.
pub fn default_dir() -> PathBuf {
    std::env::var_os(LEXICON_DIR_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DIR))
}

/// Shared lexicon, loading it on first use.
pub fn acquire() -> Result<Arc<Lexicon>> {
    if let Some(lexicon) = try_acquire() {
        return Ok(lexicon);
    }
    let mut slot = GLOBAL.write().unwrap_or_else(|e| e.into_inner());
    // Somebody else may have loaded while we waited for the write lock.
    if let Some(lexicon) = slot.as_ref() {
        return Ok(Arc::clone(lexicon));
    }
    let lexicon = Arc::new(Lexicon::load_from_dir(default_dir())?);
    *slot = Some(Arc::clone(&lexicon));
    Ok(lexicon)
}

/// Shared lexicon if one is already loaded.
pub fn try_acquire() -> Option<Arc<Lexicon>> {
    GLOBAL
        .read()
        .unwrap_or_else(|e| e.into_inner())
        .as_ref()
        .map(Arc::clone)
}

pub fn is_loaded() -> bool {
    try_acquire().is_some()
}

/// Install a lexicon built elsewhere (custom artifacts, tests). Replaces
/// any currently-loaded instance.
pub fn install(lexicon: Lexicon) -> Arc<Lexicon> {
    let lexicon = Arc::new(lexicon);
    let mut slot = GLOBAL.write().unwrap_or_else(|e| e.into_inner());
    *slot = Some(Arc::clone(&lexicon));
    lexicon
}

/// Drop the global instance. The mapping is released once the last
/// in-flight `Arc` clone goes away.
pub fn unload() {
    let mut slot = GLOBAL.write().unwrap_or_else(|e| e.into_inner());
    if slot.take().is_some() {
        info!("unloaded lexicon");
    }
}
