use rayon::prelude::*;
use tracing::warn;

use crate::assets::decode::{PreparedImage, decode_image};
use crate::assets::fetch::RemoteFetcher;
use crate::recap::model::{MAX_RECAP_PHOTOS, RecapInput};
use crate::staticmap::client::StaticMapClient;

/// Remote resources resolved for one recap render.
///
/// Preparation front-loads all network IO and decoding so the compositor
/// itself is synchronous and deterministic. Every slot degrades independently:
/// a failed fetch or decode leaves `None` and is logged, never propagated.
#[derive(Clone, Debug, Default)]
pub struct RecapAssets {
    /// Decoded route-map tile, when the fetch succeeded.
    pub map: Option<PreparedImage>,
    /// Decoded photos, index-aligned with the recap input's photo URLs
    /// (capped at [`MAX_RECAP_PHOTOS`]).
    pub photos: Vec<Option<PreparedImage>>,
}

impl RecapAssets {
    /// Fetch and decode the map tile and photos for `input`.
    ///
    /// `map_px` is the pixel size requested from the static-map service,
    /// normally the map slot size from the layout solver.
    pub async fn prepare(
        fetcher: &RemoteFetcher,
        maps: &StaticMapClient,
        input: &RecapInput,
        map_px: (u32, u32),
    ) -> Self {
        let map_bytes = if input.route.is_empty() {
            None
        } else {
            match maps.fetch_map(&input.route, map_px.0, map_px.1).await {
                Ok(bytes) => Some(bytes),
                Err(e) => {
                    warn!(error = %e, "map tile fetch failed; rendering placeholder");
                    None
                }
            }
        };

        let mut photo_bytes = Vec::with_capacity(input.photo_urls.len().min(MAX_RECAP_PHOTOS));
        for url in input.photo_urls.iter().take(MAX_RECAP_PHOTOS) {
            match fetcher.get(url).await {
                Ok(res) => photo_bytes.push(Some(res.bytes.to_vec())),
                Err(e) => {
                    warn!(url, error = %e, "photo fetch failed; rendering placeholder");
                    photo_bytes.push(None);
                }
            }
        }

        Self::from_bytes(map_bytes, photo_bytes)
    }

    /// Decode already-fetched bytes into prepared images, in parallel.
    ///
    /// Split out from [`RecapAssets::prepare`] so offline callers (the CLI)
    /// can supply bytes from disk.
    pub fn from_bytes(map: Option<Vec<u8>>, photos: Vec<Option<Vec<u8>>>) -> Self {
        let map = map.and_then(|bytes| match decode_image(&bytes) {
            Ok(img) => Some(img),
            Err(e) => {
                warn!(error = %e, "map tile decode failed; rendering placeholder");
                None
            }
        });

        let photos = photos
            .into_par_iter()
            .map(|slot| {
                slot.and_then(|bytes| match decode_image(&bytes) {
                    Ok(img) => Some(img),
                    Err(e) => {
                        warn!(error = %e, "photo decode failed; rendering placeholder");
                        None
                    }
                })
            })
            .collect();

        Self { map, photos }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/recap/assets.rs"]
mod tests;
