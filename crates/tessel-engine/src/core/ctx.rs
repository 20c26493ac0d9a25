use anyhow::{bail, Result};
use winit::window::{Window, WindowId};

use crate::device::{Gpu, SurfaceErrorAction};
use crate::paint::Color;
use crate::render::{RenderCtx, RenderTarget};

use super::app::AppControl;

/// Per-frame context passed to `core::App::on_frame`.
///
/// Lifetimes:
/// - `'a` is the duration of the callback invocation
/// - `'w` is the window-borrow lifetime carried by `Gpu<'w>`
pub struct FrameCtx<'a, 'w> {
    pub window_id: WindowId,
    pub window: &'a Window,
    pub gpu: &'a mut Gpu<'w>,
}

impl<'a, 'w> FrameCtx<'a, 'w> {
    /// Clears the surface with `clear`, calls `draw` with a ready [`RenderCtx`] and
    /// [`RenderTarget`], then presents the frame.
    ///
    /// Transient surface errors skip the frame; an out-of-memory surface is an error.
    pub fn render<F>(&mut self, clear: Color, draw: F) -> Result<AppControl>
    where
        F: FnOnce(&RenderCtx<'_>, &mut RenderTarget<'_>) -> Result<()>,
    {
        let size = self.gpu.size();
        if size.width == 0 || size.height == 0 {
            // Minimized; nothing to present until the next resize.
            return Ok(AppControl::Continue);
        }

        let mut frame = match self.gpu.begin_frame() {
            Ok(f) => f,
            Err(err) => {
                if self.gpu.handle_surface_error(err) == SurfaceErrorAction::Fatal {
                    bail!("surface is out of memory");
                }
                self.window.request_redraw();
                return Ok(AppControl::Continue);
            }
        };

        // Clear pass; dropped before the encoder is handed to the draw callback.
        {
            let _rpass = frame.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("tessel clear"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view:           &frame.view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load:  wgpu::LoadOp::Clear(clear.to_wgpu()),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                timestamp_writes:         None,
                occlusion_query_set:      None,
                multiview_mask:           None,
            });
        }

        let rctx = RenderCtx::new(self.gpu.device(), self.gpu.queue(), self.gpu.surface_format());

        {
            let mut target = RenderTarget::new(&mut frame.encoder, &frame.view);
            draw(&rctx, &mut target)?;
        }

        self.window.pre_present_notify();
        self.gpu.submit(frame);

        Ok(AppControl::Continue)
    }
}
