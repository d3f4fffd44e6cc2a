//! Language discovery in an Android `res` folder.

use std::{
    collections::{BTreeMap, BTreeSet, btree_map::Entry},
    path::Path,
};

use stringcheese_core::{
    LanguageId, ListDir,
    paths::android::{QUALIFIER_SEPARATOR, VALUES_DIR},
};
use tracing::debug;

use crate::{Error, Result};

/// Language qualifier encoded in a resource folder name.
///
/// `values-fr` yields `fr` and `values-zh-rTW` yields `zh`: only the first
/// qualifier segment after the folder token is used. The bare `values`
/// folder and folders that are not string resources yield `None`.
pub fn folder_language(name: &str) -> Option<LanguageId> {
    if !name.contains(VALUES_DIR) {
        return None;
    }
    let qualifier = name.split(QUALIFIER_SEPARATOR).nth(1)?;
    if qualifier.is_empty() {
        return None;
    }
    Some(LanguageId::tag(qualifier))
}

/// Discover the languages present under `res_root`.
///
/// The base language is never part of the result; it is known without
/// looking at the tree. A listing failure is returned as
/// [`Error::DirectoryAccess`] and no partial result is produced.
pub fn scan_language_ids(dir: &dyn ListDir, res_root: &Path) -> Result<BTreeSet<LanguageId>> {
    Ok(scan_language_folders(dir, res_root)?.into_keys().collect())
}

/// Discover the languages present under `res_root` along with the folder
/// each one was found in.
///
/// `res_root` is listed once. When several folders share a language
/// (`values-zh-rTW` and `values-zh-rCN`) the first by name is kept.
pub fn scan_language_folders(
    dir: &dyn ListDir,
    res_root: &Path,
) -> Result<BTreeMap<LanguageId, String>> {
    let names = dir
        .list_child_names(res_root)
        .map_err(|e| Error::directory_access(res_root, e))?;

    let mut languages = BTreeMap::new();
    for name in names {
        let Some(language) = folder_language(&name) else {
            debug!(folder = %name, "skipping resource entry");
            continue;
        };
        debug!(folder = %name, %language, "discovered language");
        match languages.entry(language) {
            Entry::Vacant(entry) => {
                entry.insert(name);
            }
            Entry::Occupied(mut entry) => {
                if name < *entry.get() {
                    entry.insert(name);
                }
            }
        }
    }

    Ok(languages)
}
