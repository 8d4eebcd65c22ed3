//! Off-thread decoding for image silhouette patterns.
//!
//! Each request decodes on its own worker thread and reports back over a
//! channel that the frame loop drains between ticks. The field's ticket
//! decides whether a finished result still applies.

use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

use field_core::pattern;
use field_core::{FieldParams, ImageTicket};
use rand::prelude::*;

pub struct ImageLoaded {
    pub ticket: ImageTicket,
    pub source: String,
    pub points: field_core::Result<Vec<f32>>,
}

pub struct ImageLoader {
    tx: Sender<ImageLoaded>,
    rx: Receiver<ImageLoaded>,
}

impl ImageLoader {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        Self { tx, rx }
    }

    pub fn request(
        &self,
        path: PathBuf,
        ticket: ImageTicket,
        params: FieldParams,
    ) -> anyhow::Result<()> {
        let tx = self.tx.clone();
        let source = path.display().to_string();
        log::info!("[image] decoding {} (generation {})", source, ticket.generation);
        thread::Builder::new()
            .name("image-decode".into())
            .spawn(move || {
                let mut rng = StdRng::seed_from_u64(ticket.seed);
                let points = pattern::silhouette_from_path(&path, params.count, &params, &mut rng);
                // Receiver only goes away on shutdown.
                let _ = tx.send(ImageLoaded {
                    ticket,
                    source,
                    points,
                });
            })?;
        Ok(())
    }

    /// Results that finished since the last call.
    pub fn drain(&self) -> impl Iterator<Item = ImageLoaded> + '_ {
        self.rx.try_iter()
    }
}

impl Default for ImageLoader {
    fn default() -> Self {
        Self::new()
    }
}
