//! Image asset bank.
//!
//! One `HtmlImageElement` per [`AssetId`], created eagerly at startup. The
//! browser decodes them in the background; readiness is a per-query
//! question answered through [`AssetSource`], and consumers skip whatever
//! is not decoded yet.

use std::collections::HashMap;

use glam::Vec2;
use wasm_bindgen::JsValue;
use web_sys::HtmlImageElement;

use crate::assets::{AssetId, AssetSource};
use crate::sim::{Facing, FruitKind};

pub struct ImageBank {
    images: HashMap<AssetId, HtmlImageElement>,
}

impl ImageBank {
    pub fn new() -> Result<Self, JsValue> {
        let mut images = HashMap::new();
        for id in AssetId::all() {
            let element = HtmlImageElement::new()?;
            element.set_src(&src_for(id));
            images.insert(id, element);
        }
        log::info!("requested {} images", images.len());
        Ok(Self { images })
    }

    /// The element behind an id, only once it is decoded and usable.
    pub fn ready(&self, id: AssetId) -> Option<&HtmlImageElement> {
        self.images
            .get(&id)
            .filter(|img| img.complete() && img.natural_width() > 0)
    }
}

impl AssetSource for ImageBank {
    fn dimensions(&self, id: AssetId) -> Option<Vec2> {
        self.ready(id)
            .map(|img| Vec2::new(img.natural_width() as f32, img.natural_height() as f32))
    }
}

fn src_for(id: AssetId) -> String {
    match id {
        AssetId::Walk { facing, frame } => {
            let side = match facing {
                Facing::Left => "left",
                Facing::Right => "right",
            };
            format!("assets/sprite_{side}{}.png", frame + 1)
        }
        AssetId::Fruit(FruitKind::Orange) => "assets/mand1.png".into(),
        AssetId::Fruit(FruitKind::Blue) => "assets/mand2.png".into(),
        AssetId::Fruit(FruitKind::Rotten) => "assets/mand3.png".into(),
        AssetId::MenuFruit => "assets/mandarin.png".into(),
        AssetId::Mascot => "assets/mascot.png".into(),
        AssetId::Banner => "assets/banner.png".into(),
    }
}
