use crate::compile::plan::FramePlan;
use crate::foundation::core::Rgba8;
use crate::foundation::error::InkscribeResult;

/// Rendered frame pixels.
#[derive(Clone, Debug)]
pub struct FrameRGBA {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Row-major RGBA8 bytes, `width * height * 4` long.
    pub data: Vec<u8>,
    /// Whether `data` is premultiplied by alpha.
    pub premultiplied: bool,
}

impl FrameRGBA {
    /// RGBA bytes of the pixel at (`x`, `y`), or `None` outside the frame.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        let px = self.data.get(i..i + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }

    /// Straight-alpha copy of the pixel data.
    pub fn to_straight_rgba8(&self) -> Vec<u8> {
        if !self.premultiplied {
            return self.data.clone();
        }
        let mut out = self.data.clone();
        for px in out.chunks_exact_mut(4) {
            let a = u16::from(px[3]);
            if a == 0 || a == 255 {
                continue;
            }
            for c in &mut px[..3] {
                *c = ((u16::from(*c) * 255 + a / 2) / a).min(255) as u8;
            }
        }
        out
    }
}

/// Turns a [`FramePlan`] into pixels.
pub trait RenderBackend {
    /// Rasterize `plan`.
    fn render_plan(&mut self, plan: &FramePlan) -> InkscribeResult<FrameRGBA>;
}

/// CPU backend settings.
#[derive(Clone, Debug, Default)]
pub struct CpuBackendOpts {
    /// Clear color used instead of the plan's background.
    pub clear_override: Option<Rgba8>,
}

impl CpuBackendOpts {
    /// Builder-style clear override.
    pub fn with_clear_override(mut self, color: Option<Rgba8>) -> Self {
        self.clear_override = color;
        self
    }
}

/// Compile-free convenience: rasterize `plan` with `backend`.
pub fn render_frame(plan: &FramePlan, backend: &mut dyn RenderBackend) -> InkscribeResult<FrameRGBA> {
    backend.render_plan(plan)
}

#[cfg(test)]
#[path = "../../tests/unit/render/backend.rs"]
mod tests;
