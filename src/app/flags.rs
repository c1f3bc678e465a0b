//! Flag icon loading

use super::App;
use crate::catalog;
use eframe::egui;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::debug;

/// Decoded flags waiting to be uploaded as textures, keyed by country code.
/// `None` marks a flag that could not be fetched or decoded.
type Arrivals = Arc<Mutex<HashMap<String, Option<egui::ColorImage>>>>;

/// Lock the arrivals map. A download task that panicked while holding the
/// lock leaves the map itself intact, so the poison flag is ignored.
fn lock_arrivals(
    arrivals: &Arrivals,
) -> MutexGuard<'_, HashMap<String, Option<egui::ColorImage>>> {
    arrivals.lock().unwrap_or_else(PoisonError::into_inner)
}

pub struct FlagCache {
    client: reqwest::Client,
    base_url: String,
    textures: HashMap<String, Option<egui::TextureHandle>>,
    requested: HashSet<String>,
    arrivals: Arrivals,
}

impl FlagCache {
    pub fn new(client: reqwest::Client, base_url: String) -> Self {
        Self {
            client,
            base_url,
            textures: HashMap::new(),
            requested: HashSet::new(),
            arrivals: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Move finished downloads into textures
    fn upload_arrivals(&mut self, ctx: &egui::Context) {
        let mut arrivals = lock_arrivals(&self.arrivals);
        for (country, image) in arrivals.drain() {
            let texture = image.map(|img| {
                ctx.load_texture(format!("flag_{}", country), img, egui::TextureOptions::LINEAR)
            });
            self.textures.insert(country, texture);
        }
    }
}

/// Decode PNG bytes into an egui image
pub(crate) fn decode_flag(bytes: &[u8]) -> Option<egui::ColorImage> {
    let rgba = image::load_from_memory(bytes).ok()?.to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    Some(egui::ColorImage::from_rgba_unmultiplied(size, rgba.as_raw()))
}

impl App {
    /// Texture for a currency's flag. Starts the download on first use and
    /// returns `None` until it arrives, or for good if it failed.
    pub fn flag_texture(&mut self, ctx: &egui::Context, code: &str) -> Option<egui::TextureHandle> {
        let country = catalog::find(code)?.country;

        self.flags.upload_arrivals(ctx);
        if let Some(cached) = self.flags.textures.get(country) {
            return cached.clone();
        }
        if !self.flags.requested.insert(country.to_string()) {
            return None;
        }

        let url = catalog::flag_url(&self.flags.base_url, code)?;
        let client = self.flags.client.clone();
        let arrivals = self.flags.arrivals.clone();
        let ctx = ctx.clone();
        let country = country.to_string();

        debug!(url = %url, "Loading flag");
        self.runtime.spawn(async move {
            let image = match client.get(&url).send().await {
                Ok(response) if response.status().is_success() => match response.bytes().await {
                    Ok(bytes) => decode_flag(&bytes),
                    Err(e) => {
                        debug!(url = %url, error = %e, "Flag body read failed");
                        None
                    }
                },
                Ok(response) => {
                    debug!(url = %url, status = %response.status(), "Flag request rejected");
                    None
                }
                Err(e) => {
                    debug!(url = %url, error = %e, "Flag request failed");
                    None
                }
            };
            lock_arrivals(&arrivals).insert(country, image);
            ctx.request_repaint();
        });

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_png() {
        let img = image::RgbaImage::from_pixel(4, 3, image::Rgba([200, 10, 10, 255]));
        let mut bytes = Vec::new();
        img.write_to(&mut std::io::Cursor::new(&mut bytes), image::ImageFormat::Png)
            .unwrap();

        let decoded = decode_flag(&bytes).unwrap();
        assert_eq!(decoded.size, [4, 3]);
        assert_eq!(decoded.pixels[0], egui::Color32::from_rgb(200, 10, 10));
    }

    #[test]
    fn garbage_is_not_a_flag() {
        assert!(decode_flag(b"<html>not found</html>").is_none());
        assert!(decode_flag(&[]).is_none());
    }

    fn poison(arrivals: &Arrivals) {
        let arrivals = arrivals.clone();
        std::thread::spawn(move || {
            let _guard = arrivals.lock().unwrap();
            panic!("download task died holding the lock");
        })
        .join()
        .unwrap_err();
    }

    #[test]
    fn poisoned_arrivals_still_upload() {
        let mut cache = FlagCache::new(reqwest::Client::new(), "https://flags.example".into());
        poison(&cache.arrivals);
        assert!(cache.arrivals.is_poisoned());

        lock_arrivals(&cache.arrivals).insert("IN".into(), None);
        cache.upload_arrivals(&egui::Context::default());

        assert!(matches!(cache.textures.get("IN"), Some(None)));
        assert!(lock_arrivals(&cache.arrivals).is_empty());
    }
}
