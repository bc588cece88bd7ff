//! Per-pid cache of application icon textures.

use std::collections::{HashMap, HashSet};

use eframe::egui;

use crate::osx::app_icon_png;

/// Icons are downscaled to this edge length before upload.
const ICON_PIXELS: u32 = 64;

#[derive(Default)]
pub struct IconCache {
    // None records a failed lookup so it is not retried every frame
    textures: HashMap<i32, Option<egui::TextureHandle>>,
}

impl IconCache {
    pub fn get(&mut self, ctx: &egui::Context, pid: i32) -> Option<egui::TextureHandle> {
        self.textures
            .entry(pid)
            .or_insert_with(|| {
                let image = app_icon_png(pid).and_then(|png| decode_icon(&png))?;
                Some(ctx.load_texture(format!("app-icon-{}", pid), image, egui::TextureOptions::LINEAR))
            })
            .clone()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.textures.len()
    }

    #[cfg(test)]
    pub fn contains(&self, pid: i32) -> bool {
        self.textures.contains_key(&pid)
    }

    /// Forget icons of processes that are no longer listed.
    pub fn retain(&mut self, pids: &HashSet<i32>) {
        self.textures.retain(|pid, _| pids.contains(pid));
    }
}

/// Decode PNG bytes into an RGBA image no larger than ICON_PIXELS square.
pub fn decode_icon(png: &[u8]) -> Option<egui::ColorImage> {
    let img = match image::load_from_memory_with_format(png, image::ImageFormat::Png) {
        Ok(img) => img,
        Err(e) => {
            tracing::debug!("Undecodable app icon: {:?}", e);
            return None;
        }
    };
    let img = if img.width() > ICON_PIXELS || img.height() > ICON_PIXELS {
        img.thumbnail(ICON_PIXELS, ICON_PIXELS)
    } else {
        img
    };
    let rgba = img.to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    Some(egui::ColorImage::from_rgba_unmultiplied(size, rgba.as_raw()))
}
