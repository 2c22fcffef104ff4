//! Public share links for saved outfits

use uuid::Uuid;

use crate::io::configuration::SHARE_PATH;
use crate::outfit::record::OutfitRecord;

/// Make an outfit public, assigning a share id on first use
///
/// An existing share id is kept so links handed out earlier stay valid.
pub fn share(record: &mut OutfitRecord) -> &str {
    record.is_public = true;
    record
        .share_id
        .get_or_insert_with(|| Uuid::new_v4().to_string())
}

/// Stop sharing an outfit; the id is kept for a later re-share
pub const fn unshare(record: &mut OutfitRecord) {
    record.is_public = false;
}

/// Absolute link to a shared outfit
pub fn share_url(base_url: &str, share_id: &str) -> String {
    format!("{}/{SHARE_PATH}/{share_id}", base_url.trim_end_matches('/'))
}

/// Link to an outfit if it is currently shared
pub fn public_url(record: &OutfitRecord, base_url: &str) -> Option<String> {
    record
        .share_id
        .as_deref()
        .filter(|_| record.is_public)
        .map(|share_id| share_url(base_url, share_id))
}
