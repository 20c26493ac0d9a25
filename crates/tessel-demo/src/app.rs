use anyhow::Result;
use tessel_engine::core::{App, AppControl, FrameCtx};
use tessel_engine::paint::Color;
use tessel_engine::render::ShapeRenderer;

/// Redraws one shape over a solid background whenever the window asks.
pub struct DemoApp {
    renderer: ShapeRenderer,
    clear: Color,
}

impl DemoApp {
    pub fn new(renderer: ShapeRenderer, clear: Color) -> Self {
        Self { renderer, clear }
    }
}

impl App for DemoApp {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> Result<AppControl> {
        let renderer = &mut self.renderer;
        ctx.render(self.clear, |rctx, target| renderer.render(rctx, target))
    }
}
