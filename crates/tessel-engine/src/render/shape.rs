use anyhow::{Context, Result};
use bytemuck::{Pod, Zeroable};
use tessel_geom::{Mesh, Point2, Topology};
use wgpu::util::DeviceExt;

use crate::paint::Color;
use crate::render::{RenderCtx, RenderTarget};

/// Shader input location of the vertex position.
///
/// The only source of truth: it is used for the vertex buffer layout and
/// substituted into the WGSL source.
pub const POSITION_LOCATION: u32 = 0;

const SHADER_TEMPLATE: &str = include_str!("shaders/shape.wgsl");
const LOCATION_PLACEHOLDER: &str = "{{position_location}}";

const POSITION_ATTRS: [wgpu::VertexAttribute; 1] = [wgpu::VertexAttribute {
    format: wgpu::VertexFormat::Float32x2,
    offset: 0,
    shader_location: POSITION_LOCATION,
}];

/// Draws one immutable [`Mesh`] with a constant fill color.
///
/// GPU resources are created on first use: the vertex, index and color
/// buffers are written exactly once and afterwards only bound. The pipeline is
/// rebuilt only if the surface format changes.
pub struct ShapeRenderer {
    mesh: Mesh,
    color: Color,

    pipeline_format: Option<wgpu::TextureFormat>,
    pipeline: Option<wgpu::RenderPipeline>,
    bind_group_layout: Option<wgpu::BindGroupLayout>,

    buffers: Option<MeshBuffers>,
}

struct MeshBuffers {
    vertex: wgpu::Buffer,
    index: wgpu::Buffer,
    /// Referenced only through `bind_group`.
    _fill_ubo: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

impl ShapeRenderer {
    pub fn new(mesh: Mesh, color: Color) -> Self {
        Self {
            mesh,
            color,
            pipeline_format: None,
            pipeline: None,
            bind_group_layout: None,
            buffers: None,
        }
    }

    /// Records one indexed draw of the mesh into `target`.
    pub fn render(&mut self, ctx: &RenderCtx<'_>, target: &mut RenderTarget<'_>) -> Result<()> {
        self.ensure_pipeline(ctx);
        self.ensure_buffers(ctx)?;

        let pipeline = self.pipeline.as_ref().context("shape pipeline missing")?;
        let buffers = self.buffers.as_ref().context("shape buffers missing")?;

        let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("tessel shape pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target.color_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Load,
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        rpass.set_pipeline(pipeline);
        rpass.set_bind_group(0, &buffers.bind_group, &[]);
        rpass.set_vertex_buffer(0, buffers.vertex.slice(..));
        rpass.set_index_buffer(buffers.index.slice(..), wgpu::IndexFormat::Uint16);
        rpass.draw_indexed(0..self.mesh.index_count(), 0, 0..1);

        Ok(())
    }

    // ── private helpers ────────────────────────────────────────────────────

    fn ensure_pipeline(&mut self, ctx: &RenderCtx<'_>) {
        if self.pipeline_format == Some(ctx.surface_format) && self.pipeline.is_some() {
            return;
        }

        let shader = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("tessel shape shader"),
            source: wgpu::ShaderSource::Wgsl(shader_source().into()),
        });

        let bind_group_layout = match self.bind_group_layout.take() {
            Some(bgl) => bgl,
            None => ctx.device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("tessel shape bgl"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: wgpu::BufferSize::new(
                            std::mem::size_of::<FillUniform>() as u64,
                        ),
                    },
                    count: None,
                }],
            }),
        };

        let pipeline_layout =
            ctx.device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some("tessel shape pipeline layout"),
                bind_group_layouts: &[&bind_group_layout],
                immediate_size: 0,
            });

        let topology = topology_for(self.mesh.draw_mode.topology());

        let pipeline = ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("tessel shape pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers: &[position_layout()],
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: ctx.surface_format,
                    blend: Some(wgpu::BlendState::PREMULTIPLIED_ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),
            primitive: wgpu::PrimitiveState {
                topology,
                strip_index_format: topology
                    .is_strip()
                    .then_some(wgpu::IndexFormat::Uint16),
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        });

        log::debug!(
            "built {} pipeline ({:?}, {:?})",
            self.mesh.kind,
            topology,
            ctx.surface_format
        );

        self.pipeline_format = Some(ctx.surface_format);
        self.pipeline = Some(pipeline);
        self.bind_group_layout = Some(bind_group_layout);
    }

    fn ensure_buffers(&mut self, ctx: &RenderCtx<'_>) -> Result<()> {
        if self.buffers.is_some() {
            return Ok(());
        }
        let bgl = self
            .bind_group_layout
            .as_ref()
            .context("bind group layout must exist before buffers")?;

        let vertex = ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("tessel shape vbo"),
            contents: self.mesh.as_bytes(),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let index = ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("tessel shape ibo"),
            contents: self.mesh.index_bytes(),
            usage: wgpu::BufferUsages::INDEX,
        });
        let fill_ubo = ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("tessel shape fill ubo"),
            size: std::mem::size_of::<FillUniform>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        ctx.queue.write_buffer(&fill_ubo, 0, bytemuck::bytes_of(&FillUniform::new(self.color)));

        let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("tessel shape bind group"),
            layout: bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: fill_ubo.as_entire_binding(),
            }],
        });

        log::debug!(
            "uploaded {} vertices ({} bytes), {} indices",
            self.mesh.vertices.len(),
            self.mesh.as_bytes().len(),
            self.mesh.indices.len()
        );

        self.buffers = Some(MeshBuffers {
            vertex,
            index,
            _fill_ubo: fill_ubo,
            bind_group,
        });
        Ok(())
    }
}

/// Maps a geometry topology onto the wgpu primitive topology.
pub fn topology_for(topology: Topology) -> wgpu::PrimitiveTopology {
    match topology {
        Topology::TriangleList => wgpu::PrimitiveTopology::TriangleList,
        Topology::LineList => wgpu::PrimitiveTopology::LineList,
        Topology::LineStrip => wgpu::PrimitiveTopology::LineStrip,
    }
}

fn shader_source() -> String {
    SHADER_TEMPLATE.replace(LOCATION_PLACEHOLDER, &POSITION_LOCATION.to_string())
}

fn position_layout() -> wgpu::VertexBufferLayout<'static> {
    wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<Point2>() as u64,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &POSITION_ATTRS,
    }
}

// ── GPU types ─────────────────────────────────────────────────────────────

#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct FillUniform {
    color: [f32; 4],
}

impl FillUniform {
    fn new(color: Color) -> Self {
        Self { color: color.to_array() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shader_uses_the_position_location() {
        let src = shader_source();
        assert!(!src.contains(LOCATION_PLACEHOLDER));
        assert!(src.contains(&format!("@location({POSITION_LOCATION}) position")));
    }

    #[test]
    fn layout_matches_packed_points() {
        let layout = position_layout();
        assert_eq!(layout.array_stride, 8);
        assert_eq!(layout.attributes.len(), 1);
        assert_eq!(layout.attributes[0].shader_location, POSITION_LOCATION);
        assert_eq!(layout.attributes[0].format, wgpu::VertexFormat::Float32x2);
    }

    #[test]
    fn topologies_map_one_to_one() {
        assert_eq!(topology_for(Topology::TriangleList), wgpu::PrimitiveTopology::TriangleList);
        assert_eq!(topology_for(Topology::LineList), wgpu::PrimitiveTopology::LineList);
        assert_eq!(topology_for(Topology::LineStrip), wgpu::PrimitiveTopology::LineStrip);
    }

    #[test]
    fn fill_uniform_is_sixteen_bytes() {
        assert_eq!(std::mem::size_of::<FillUniform>(), 16);
    }

    #[test]
    fn fill_uniform_bytes_are_premultiplied_rgba() {
        let fill = FillUniform::new(Color::from_straight(1.0, 0.5, 0.0, 0.5));
        let floats: &[f32] = bytemuck::cast_slice(bytemuck::bytes_of(&fill));
        assert_eq!(floats, &[0.5, 0.25, 0.0, 0.5]);
    }
}
