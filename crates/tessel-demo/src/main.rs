mod app;
mod cli;

use std::io;

use anyhow::Context;
use clap::Parser;
use tessel_engine::device::GpuInit;
use tessel_engine::logging::init_logging;
use tessel_engine::render::ShapeRenderer;
use tessel_engine::window::Runtime;
use tessel_geom::Mesh;

use crate::app::DemoApp;
use crate::cli::Args;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.logging_config());

    let shape = args.shape().context("invalid shape parameters")?;
    let mesh = Mesh::build(&shape).context("failed to build shape geometry")?;

    log::info!(
        "{}: {} vertices, {:?} ({} indices)",
        mesh.kind,
        mesh.vertices.len(),
        mesh.draw_mode,
        mesh.indices.len()
    );

    if args.dump {
        cli::dump(&mesh, &mut io::stdout().lock()).context("failed to write vertices")?;
        return Ok(());
    }

    let app = DemoApp::new(ShapeRenderer::new(mesh, args.color), args.clear);
    Runtime::run(args.runtime_config(), GpuInit::default(), app)
}
