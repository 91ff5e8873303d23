use super::helpers;
use crate::constants::MSAA_SAMPLE_COUNT;

pub(crate) const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth24Plus;

/// Multisampled colour and depth buffers matching the swapchain size.
/// The colour buffer resolves into the swapchain view each frame.
pub(crate) struct FrameTargets {
    #[allow(dead_code)]
    color_tex: wgpu::Texture,
    pub(crate) color_view: wgpu::TextureView,
    #[allow(dead_code)]
    depth_tex: wgpu::Texture,
    pub(crate) depth_view: wgpu::TextureView,
    color_format: wgpu::TextureFormat,
}

impl FrameTargets {
    pub(crate) fn new(
        device: &wgpu::Device,
        color_format: wgpu::TextureFormat,
        width: u32,
        height: u32,
    ) -> Self {
        let (color_tex, color_view) = helpers::create_texture(
            device,
            "msaa_color_tex",
            width,
            height,
            MSAA_SAMPLE_COUNT,
            color_format,
            wgpu::TextureUsages::RENDER_ATTACHMENT,
        );
        let (depth_tex, depth_view) = helpers::create_texture(
            device,
            "depth_tex",
            width,
            height,
            MSAA_SAMPLE_COUNT,
            DEPTH_FORMAT,
            wgpu::TextureUsages::RENDER_ATTACHMENT,
        );
        Self {
            color_tex,
            color_view,
            depth_tex,
            depth_view,
            color_format,
        }
    }

    pub(crate) fn recreate(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        *self = Self::new(device, self.color_format, width, height);
    }
}
