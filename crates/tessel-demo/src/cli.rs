use std::io::{self, Write};

use clap::Parser;
use tessel_engine::logging::LoggingConfig;
use tessel_engine::paint::Color;
use tessel_engine::window::RuntimeConfig;
use tessel_geom::{GenerationParams, GeometryError, Mesh, Point2, Shape, ShapeKind};
use winit::dpi::LogicalSize;

#[derive(Parser, Debug)]
#[command(
    name = "tessel-demo",
    about = "Draw one built-in shape (triangle, rectangle, circle, line, polygon) with wgpu."
)]
pub struct Args {
    /// Shape to draw: triangle, rectangle, circle, line or polygon
    #[arg(default_value = "triangle")]
    pub shape: ShapeKind,

    /// Center of a circle/polygon in clip space
    #[arg(long, value_name = "X,Y", default_value = "0,0", value_parser = parse_point)]
    pub center: Point2,

    /// Radius of a circle/polygon in clip space
    #[arg(long, default_value_t = 0.5)]
    pub radius: f32,

    /// Segment count (circle) or side count (polygon), at least 3
    #[arg(long, default_value_t = 32)]
    pub segments: u32,

    /// Fill color (#rrggbb or #rrggbbaa)
    #[arg(long, value_name = "HEX", default_value = "#ff8c1a")]
    pub color: Color,

    /// Background color (#rrggbb or #rrggbbaa)
    #[arg(long, value_name = "HEX", default_value = "#16161d")]
    pub clear: Color,

    /// Print the generated vertices and exit without opening a window
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub dump: bool,

    /// Log filter in env_logger syntax (overrides RUST_LOG)
    #[arg(long, value_name = "FILTER")]
    pub log: Option<String>,

    /// Initial window width in logical pixels
    #[arg(long, default_value_t = 800.0, value_parser = parse_extent)]
    pub width: f64,

    /// Initial window height in logical pixels
    #[arg(long, default_value_t = 600.0, value_parser = parse_extent)]
    pub height: f64,
}

impl Args {
    /// Resolves the selected shape. Generation flags are validated only for
    /// the shapes that use them.
    pub fn shape(&self) -> Result<Shape, GeometryError> {
        let params = if self.shape.is_parametric() {
            GenerationParams::new(self.center, self.radius, self.segments)?
        } else {
            GenerationParams::default()
        };
        Ok(Shape::from_kind(self.shape, params))
    }

    pub fn logging_config(&self) -> LoggingConfig {
        LoggingConfig {
            env_filter: self.log.clone(),
            ..Default::default()
        }
    }

    pub fn runtime_config(&self) -> RuntimeConfig {
        RuntimeConfig {
            title: format!("tessel: {}", self.shape),
            initial_size: LogicalSize::new(self.width, self.height),
        }
    }
}

fn parse_point(s: &str) -> Result<Point2, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y, got `{s}`"))?;
    let coord = |v: &str| {
        v.trim()
            .parse::<f32>()
            .map_err(|e| format!("bad coordinate `{v}`: {e}"))
    };
    Ok(Point2::new(coord(x)?, coord(y)?))
}

fn parse_extent(s: &str) -> Result<f64, String> {
    let v: f64 = s.trim().parse().map_err(|e| format!("bad size `{s}`: {e}"))?;
    if v.is_finite() && v > 0.0 {
        Ok(v)
    } else {
        Err(format!("size must be positive and finite, got `{s}`"))
    }
}

/// Writes `mesh` as text: a header line, then one `x y` pair per vertex.
pub fn dump(mesh: &Mesh, out: &mut impl Write) -> io::Result<()> {
    writeln!(
        out,
        "# {} {:?} vertices={} indices={}",
        mesh.kind,
        mesh.draw_mode,
        mesh.vertices.len(),
        mesh.indices.len()
    )?;
    for p in &mesh.vertices {
        writeln!(out, "{} {}", p.x, p.y)?;
    }
    Ok(())
}
