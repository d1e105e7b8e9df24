//! The recap image compositor: layout solving, text shaping, drawing, and
//! encoding.
//!
//! The pipeline is split so that all IO happens up front:
//!
//! 1. **Describe**: build a [`model::RecapInput`] from a walk record
//! 2. **Prepare**: resolve remote map/photo resources into
//!    [`assets::RecapAssets`], degrading failures per slot
//! 3. **Compose**: [`compose::render_recap`] draws the frame, IO-free
//! 4. **Encode**: [`encode::encode_png`] produces the final bytes

/// Prepared recap assets resolved from remote resources.
pub mod assets;
/// Frame composition and drawing.
pub mod compose;
/// PNG encoding of composed frames.
pub mod encode;
/// Layout solving for the recap image regions.
pub mod layout;
/// Recap input model types.
pub mod model;
/// Text shaping and rendering.
pub mod text;
