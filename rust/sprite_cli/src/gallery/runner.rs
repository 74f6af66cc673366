// rust/sprite_cli/src/gallery/runner.rs
#![forbid(unsafe_code)]

use tracing::{debug, info};

use block_sprites::sprites::PieceBitmap;
use block_sprites::{SpriteResult, VisualStyle, rasterize};

use super::bag::BagStream;

/// Gap between pieces in a row, in pixels.
const GUTTER: &str = "  ";

/// Pieces per printed row.
const PER_ROW: usize = 4;

#[derive(Clone, Debug)]
pub struct GalleryConfig {
    pub style: VisualStyle,
    /// Number of pieces to draw.
    pub count: usize,
    /// Seed for the bag stream and orientations.
    pub seed: u64,
}

pub struct GalleryRunner {
    cfg: GalleryConfig,
    stream: BagStream,
}

impl GalleryRunner {
    pub fn new(cfg: GalleryConfig) -> Self {
        let stream = BagStream::new(cfg.seed);
        Self { cfg, stream }
    }

    /// Draw `count` pieces and lay them out `PER_ROW` to a line.
    pub fn run(&mut self) -> SpriteResult<String> {
        let table = self.cfg.style.table()?;
        info!(
            style = self.cfg.style.name(),
            count = self.cfg.count,
            seed = self.cfg.seed,
            "gallery"
        );

        let mut captions = Vec::with_capacity(self.cfg.count);
        let mut frames = Vec::with_capacity(self.cfg.count);
        for _ in 0..self.cfg.count {
            let kind = self.stream.draw();
            let o = self.stream.draw_orientation();
            debug!(?kind, ?o, "draw");
            captions.push(format!("{kind} {}", o.index()));
            frames.push(rasterize(&table, kind, o)?);
        }

        let mut out = String::new();
        for (caps, row) in captions.chunks(PER_ROW).zip(frames.chunks(PER_ROW)) {
            let widths: Vec<usize> = row.iter().map(frame_width).collect();
            let header: Vec<String> = caps
                .iter()
                .zip(&widths)
                .map(|(c, &w)| format!("{c:<w$}"))
                .collect();
            out.push_str(header.join(GUTTER).trim_end());
            out.push('\n');
            out.push_str(&side_by_side(row));
            out.push('\n');
        }
        Ok(out)
    }
}

fn frame_width(frame: &PieceBitmap) -> usize {
    frame.rows().next().map_or(0, <[bool]>::len)
}

/// Lay frames out left to right, bottom-padded to the tallest one.
pub fn side_by_side(frames: &[PieceBitmap]) -> String {
    let rendered: Vec<Vec<String>> = frames
        .iter()
        .map(|f| {
            f.rows()
                .map(|row| row.iter().map(|&p| if p { '#' } else { '.' }).collect())
                .collect()
        })
        .collect();
    let height = rendered.iter().map(Vec::len).max().unwrap_or(0);

    let mut out = String::new();
    for y in 0..height {
        let line: Vec<String> = rendered
            .iter()
            .zip(frames)
            .map(|(rows, f)| {
                let w = frame_width(f);
                match rows.get(y) {
                    Some(r) => format!("{r:<w$}"),
                    None => " ".repeat(w),
                }
            })
            .collect();
        out.push_str(line.join(GUTTER).trim_end());
        out.push('\n');
    }
    out
}
