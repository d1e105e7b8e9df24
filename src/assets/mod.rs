//! Asset preparation: image decoding, remote fetching, and font loading.

/// Image decoding into raster frames.
pub mod decode;
/// Remote resource fetching.
pub mod fetch;
/// Font loading.
pub mod font;
