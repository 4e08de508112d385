// src/main.rs

//! Demo: scrolls a test pattern at 256x240, doubled, until Escape or the
//! window is closed. Pressed keys are logged and tint the pattern.

use anyhow::Context;
use frameview::{Capability, Dimensions, Key, RenderStatus, BYTES_PER_PIXEL};
use log::info;

const WIDTH: u32 = 256;
const HEIGHT: u32 = 240;
const SCALE: f64 = 2.0;

struct TestPattern {
    dimensions: Dimensions,
    frame: Vec<u8>,
    tick: u32,
    held: Vec<Key>,
}

impl TestPattern {
    fn new() -> Self {
        let dimensions = Dimensions::new(WIDTH, HEIGHT, SCALE);
        Self {
            frame: vec![0; dimensions.frame_len()],
            dimensions,
            tick: 0,
            held: Vec::new(),
        }
    }

    fn advance(&mut self) {
        self.tick = self.tick.wrapping_add(1);
        let tint = if self.held.is_empty() { 0 } else { 0x60 };
        for (i, pixel) in self.frame.chunks_exact_mut(BYTES_PER_PIXEL).enumerate() {
            let x = (i as u32 % WIDTH).wrapping_add(self.tick);
            let y = i as u32 / WIDTH;
            pixel[0] = (x ^ y) as u8;
            pixel[1] = y as u8;
            pixel[2] = (x as u8).wrapping_add(tint);
            pixel[3] = 0xff;
        }
    }
}

impl Capability for TestPattern {
    fn frame(&self) -> &[u8] {
        &self.frame
    }

    fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    fn title(&self) -> &str {
        "frameview demo"
    }

    fn key_down(&mut self, key: Key) {
        info!("key down: {:?}", key);
        self.held.push(key);
    }

    fn key_up(&mut self, key: Key) {
        info!("key up: {:?}", key);
        self.held.retain(|&k| k != key);
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_micros()
        .init();

    info!("Starting frameview demo...");
    let mut session =
        frameview::setup(TestPattern::new()).context("Failed to open the demo window")?;

    let mut frames: u64 = 0;
    loop {
        session.capability_mut().advance();
        match session.render().context("Failed to render a frame")? {
            RenderStatus::Continue => frames += 1,
            RenderStatus::Close => break,
        }
    }

    session.cleanup().context("Failed to close the demo window")?;
    info!("Presented {} frames. Exiting.", frames);
    Ok(())
}
