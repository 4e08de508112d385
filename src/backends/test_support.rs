// src/backends/test_support.rs

//! Capability double shared by backend and facade tests.

use crate::capability::{Capability, Dimensions};
use crate::keys::{Key, KeyTransition};

pub struct TestCapability {
    pub dimensions: Dimensions,
    pub frame: Vec<u8>,
    pub title: String,
    pub keys: Vec<(Key, KeyTransition)>,
}

impl TestCapability {
    pub fn new(width: u32, height: u32, scale_factor: f64) -> Self {
        let dimensions = Dimensions::new(width, height, scale_factor);
        Self {
            frame: vec![0x7f; dimensions.frame_len()],
            dimensions,
            title: "frameview test".to_string(),
            keys: Vec::new(),
        }
    }
}

impl Capability for TestCapability {
    fn frame(&self) -> &[u8] {
        &self.frame
    }

    fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn key_down(&mut self, key: Key) {
        self.keys.push((key, KeyTransition::Down));
    }

    fn key_up(&mut self, key: Key) {
        self.keys.push((key, KeyTransition::Up));
    }
}
