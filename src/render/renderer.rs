use super::batch::LineBatch;
use super::context::GpuContext;
use super::mesh::LineVertex;
use super::pipeline::{LinePipeline, Uniforms};
use crate::math::Viewport;

const INITIAL_VERTEX_CAPACITY: usize = 2048;

/// Uploads a [`LineBatch`] every frame and draws it as a line list.
pub struct LineRenderer {
    pipeline: LinePipeline,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    vertex_buffer: wgpu::Buffer,
    vertex_capacity: usize,
}

impl LineRenderer {
    pub fn new(context: &GpuContext) -> Self {
        let pipeline = LinePipeline::new(context);

        let uniform_buffer = context.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Line Uniform Buffer"),
            size: std::mem::size_of::<Uniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group = pipeline.create_bind_group(&context.device, &uniform_buffer);
        let vertex_buffer = Self::create_vertex_buffer(&context.device, INITIAL_VERTEX_CAPACITY);

        Self {
            pipeline,
            uniform_buffer,
            bind_group,
            vertex_buffer,
            vertex_capacity: INITIAL_VERTEX_CAPACITY,
        }
    }

    fn create_vertex_buffer(device: &wgpu::Device, capacity: usize) -> wgpu::Buffer {
        device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Line Vertex Buffer"),
            size: (capacity * std::mem::size_of::<LineVertex>()) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        })
    }

    fn ensure_capacity(&mut self, device: &wgpu::Device, needed: usize) {
        if needed <= self.vertex_capacity {
            return;
        }
        let capacity = needed.next_power_of_two();
        log::debug!("growing line vertex buffer to {} vertices", capacity);
        self.vertex_buffer = Self::create_vertex_buffer(device, capacity);
        self.vertex_capacity = capacity;
    }

    pub fn render(
        &mut self,
        context: &GpuContext,
        view: &wgpu::TextureView,
        batch: &LineBatch,
        viewport: &Viewport,
    ) {
        let size = viewport.logical_size();
        let uniforms = Uniforms::new(size.x, size.y);
        context
            .queue
            .write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(&uniforms));

        let vertices = batch.vertices();
        self.ensure_capacity(&context.device, vertices.len());
        if !vertices.is_empty() {
            context
                .queue
                .write_buffer(&self.vertex_buffer, 0, bytemuck::cast_slice(vertices));
        }

        let mut encoder = context.device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("Line Encoder"),
        });

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Line Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(batch.clear_color().into()),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            if !vertices.is_empty() {
                render_pass.set_pipeline(&self.pipeline.pipeline);
                render_pass.set_bind_group(0, &self.bind_group, &[]);
                render_pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
                render_pass.draw(0..vertices.len() as u32, 0..1);
            }
        }

        context.queue.submit(std::iter::once(encoder.finish()));
    }
}
