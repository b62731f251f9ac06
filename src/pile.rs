use crate::dom;
use crate::style;
use anyhow::anyhow;
use pile_core::{animation_delay_ms, PileSession, Theme};
use wasm_bindgen::JsCast;
use web_sys as web;

/// The rendered pile: the `#pile` box, its photo wrappers and the width stylesheet.
pub struct PileView {
    root: web::HtmlElement,
    photos: Vec<web::HtmlElement>,
    widths: Option<web::Element>,
    empty: Option<web::Element>,
}

impl PileView {
    pub fn find(document: &web::Document) -> anyhow::Result<Self> {
        let root = document
            .get_element_by_id("pile")
            .ok_or_else(|| anyhow!("missing #pile"))?
            .dyn_into::<web::HtmlElement>()
            .map_err(|e| anyhow!("#pile is not an HtmlElement: {:?}", e))?;
        let photos = dom::query_all::<web::HtmlElement>(&root, "[data-pile-index]");
        Ok(Self {
            root,
            photos,
            widths: document.get_element_by_id("pile-widths"),
            empty: document.get_element_by_id("pile-empty"),
        })
    }

    /// `data-theme` on `#pile`; anything unrecognised falls back to light.
    pub fn theme(&self) -> Theme {
        self.root
            .get_attribute("data-theme")
            .and_then(|t| t.parse().ok())
            .unwrap_or_default()
    }

    pub fn photo_count(&self) -> usize {
        self.photos.len()
    }

    pub fn photo(&self, index: usize) -> Option<&web::HtmlElement> {
        self.photos.get(index)
    }

    /// Recompute and apply every slot at once.
    pub fn render(&self, session: &PileSession) {
        let has_photos = !self.photos.is_empty();
        if let Some(empty) = &self.empty {
            dom::set_visible(empty, !has_photos);
        }
        if !has_photos {
            dom::set_visible(&self.root, false);
            return;
        }

        let _ = self
            .root
            .set_attribute("style", &style::pile_height_style(session.pile_height_vh()));
        if let Some(el) = &self.widths {
            el.set_text_content(Some(&style::width_stylesheet(&session.widths())));
        }

        let stagger = session.params.stagger;
        for (i, (el, slot)) in self.photos.iter().zip(session.layout()).enumerate() {
            let z = session.stack_index(i, &slot);
            let css = style::photo_style(&slot, z, animation_delay_ms(i, stagger));
            let _ = el.set_attribute("style", &css);
            let _ = el.class_list().add_1(style::PHOTO_CLASS);
        }
    }
}
