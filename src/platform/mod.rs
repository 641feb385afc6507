//! Browser glue.
//!
//! Everything that touches web APIs lives behind the library's seams and
//! in here: the canvas implementation of [`crate::view::Renderer`], the
//! image bank behind [`crate::assets::AssetSource`], localStorage JSON
//! helpers and the fetch client for the stats mirror. All of it is
//! wasm-only; native builds drive the same library API with stubs and no
//! persistence.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
#[cfg(target_arch = "wasm32")]
pub mod images;
#[cfg(target_arch = "wasm32")]
pub mod net;
#[cfg(target_arch = "wasm32")]
pub mod storage;
