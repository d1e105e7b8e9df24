//! Pawtrail is the backend of a dog-walk tracking product.
//!
//! An operator records a walk (route, duration, dogs, rate, notes); the crate
//! computes distance and pay, fetches a weather snapshot, stores uploaded
//! media, and renders a shareable **recap image** compositing a header, a
//! route-map tile, a stats panel, notes, and a photo grid into one bitmap.
//!
//! # Pipeline overview
//!
//! 1. **Record**: `Walk` records are created over the HTTP surface and kept in
//!    a [`store::walks::WalkStore`]
//! 2. **Prepare**: [`recap::assets::RecapAssets`] front-loads all remote IO
//!    (map tile, photos) with per-slot degradation
//! 3. **Compose**: [`recap::compose::render_recap`] turns the prepared input
//!    into a [`FrameRgba`], deterministically and IO-free
//! 4. **Encode**: [`recap::encode::encode_png`] produces the response bytes
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **No IO in the compositor**: remote fetching happens in the prepare step.
//! - **Degrade, never abort**: a failed map tile or photo renders as a neutral
//!   placeholder; only PNG encoding failure fails a render.
//! - **Premultiplied RGBA8** end-to-end in the raster pipeline.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

/// Asset preparation: image decoding, remote fetching, font loading.
pub mod assets;
/// Environment-driven runtime configuration.
pub mod config;
/// Error taxonomy and core raster types.
pub mod foundation;
/// Route geometry and polyline encoding.
pub mod geo;
/// The recap image compositor.
pub mod recap;
/// HTTP surface (axum router, handlers, error mapping).
pub mod server;
/// Static-map image API client.
pub mod staticmap;
/// Persistence collaborators: walk documents and media objects.
pub mod store;
/// Walk domain model and pay computation.
pub mod walk;
/// Weather API client and condition-code mapping.
pub mod weather;

pub use assets::decode::{PreparedImage, decode_image};
pub use assets::fetch::{FetchedResource, HostAllowList, RemoteFetcher};
pub use config::AppConfig;
pub use foundation::core::{Canvas, FrameRgba, Rgba8};
pub use foundation::error::{PawtrailError, PawtrailResult};
pub use geo::point::{
    LatLng, MIN_ROUTE_SPACING_METERS, haversine_meters, meters_to_miles, route_distance_meters,
    thin_route,
};
pub use geo::polyline::encode_polyline;
pub use recap::assets::RecapAssets;
pub use recap::compose::render_recap;
pub use recap::encode::encode_png;
pub use recap::layout::{RecapLayout, cover_crop, grid_dims, photo_cells};
pub use recap::model::{RecapInput, RecapStat, RecapTheme, RecapVariant};
pub use staticmap::client::StaticMapClient;
pub use store::objects::{FsObjectStore, MemoryObjectStore, ObjectMeta, ObjectStore};
pub use store::walks::{FsWalkStore, MemoryWalkStore, WalkStore};
pub use walk::model::{MediaKind, MediaReference, Walk, WalkId, WeatherSnapshot};
pub use walk::pay::{Money, amount_due};
pub use weather::client::WeatherClient;
