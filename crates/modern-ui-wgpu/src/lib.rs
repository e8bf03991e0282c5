//! # modern-ui-wgpu
//!
//! WGPU rendering backend for modern-ui.
//!
//! Uploads the font atlas once, then each frame copies a [`Context`]'s two vertex streams
//! into growable vertex buffers and draws them as triangle lists: solid geometry first,
//! glyph quads on top. There is no depth test, so paint order is stream order.

mod vertex;

pub use vertex::GpuVertex;

use modern_ui::text::BakedFont;
use modern_ui::{Color, ColorVertex, Context, TextureVertex};

const INITIAL_COLOR_VERTEX_CAPACITY: usize = 1024;
const INITIAL_TEXTURE_VERTEX_CAPACITY: usize = 4096;

/// Uniforms shared by both pipelines.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
struct Globals {
    projection: [[f32; 4]; 4],
    text_color: [f32; 4],
}

impl Globals {
    /// Pixel coordinates with the origin at the top-left corner, y down.
    fn new(screen_width: f32, screen_height: f32, text_color: Color) -> Self {
        let projection =
            glam::Mat4::orthographic_rh(0.0, screen_width, screen_height, 0.0, -1.0, 1.0);
        Self {
            projection: projection.to_cols_array_2d(),
            text_color: [text_color.r, text_color.g, text_color.b, 1.0],
        }
    }
}

/// A vertex buffer that is recreated at a larger size when a frame outgrows it.
struct StreamBuffer {
    label: &'static str,
    buffer: wgpu::Buffer,
    capacity: usize,
    len: u32,
}

impl StreamBuffer {
    fn new<V>(device: &wgpu::Device, label: &'static str, capacity: usize) -> Self {
        Self {
            label,
            buffer: Self::create::<V>(device, label, capacity),
            capacity,
            len: 0,
        }
    }

    fn create<V>(device: &wgpu::Device, label: &'static str, capacity: usize) -> wgpu::Buffer {
        device.create_buffer(&wgpu::BufferDescriptor {
            label: Some(label),
            size: (capacity * std::mem::size_of::<V>()) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        })
    }

    fn upload<V: GpuVertex>(&mut self, device: &wgpu::Device, queue: &wgpu::Queue, data: &[V]) {
        self.len = data.len() as u32;
        if data.is_empty() {
            return;
        }

        if data.len() > self.capacity {
            self.capacity = (data.len() * 2).next_power_of_two();
            log::debug!("Growing {} to {} vertices", self.label, self.capacity);
            self.buffer = Self::create::<V>(device, self.label, self.capacity);
        }

        queue.write_buffer(&self.buffer, 0, bytemuck::cast_slice(data));
    }
}

/// WGPU renderer for a modern-ui [`Context`]
pub struct Renderer {
    color_pipeline: wgpu::RenderPipeline,
    text_pipeline: wgpu::RenderPipeline,

    uniform_buffer: wgpu::Buffer,
    uniform_bind_group: wgpu::BindGroup,

    color_vertices: StreamBuffer,
    texture_vertices: StreamBuffer,

    // Glyph atlas (R8 alpha mask), baked once
    atlas_bind_group: wgpu::BindGroup,
}

impl Renderer {
    /// Create the pipelines and upload `font`'s atlas.
    pub fn new(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        surface_format: wgpu::TextureFormat,
        font: &BakedFont,
    ) -> Self {
        let color_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Modern UI Color Shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/color.wgsl").into()),
        });
        let text_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Modern UI Text Shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/text.wgsl").into()),
        });

        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Modern UI Uniform Buffer"),
            size: std::mem::size_of::<Globals>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let globals_bind_group_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("Modern UI Globals Bind Group Layout"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                }],
            });

        let uniform_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Modern UI Globals Bind Group"),
            layout: &globals_bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        let atlas_texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("Modern UI Font Atlas"),
            size: wgpu::Extent3d {
                width: font.width().max(1),
                height: font.height().max(1),
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::R8Unorm,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });
        upload_atlas(queue, &atlas_texture, font);

        let atlas_view = atlas_texture.create_view(&wgpu::TextureViewDescriptor::default());
        let atlas_sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("Modern UI Font Atlas Sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            // Quads are snapped to whole pixels and sized 1:1 with their atlas box.
            mag_filter: wgpu::FilterMode::Nearest,
            min_filter: wgpu::FilterMode::Nearest,
            mipmap_filter: wgpu::FilterMode::Nearest,
            ..Default::default()
        });

        let atlas_bind_group_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("Modern UI Atlas Bind Group Layout"),
                entries: &[
                    wgpu::BindGroupLayoutEntry {
                        binding: 0,
                        visibility: wgpu::ShaderStages::FRAGMENT,
                        ty: wgpu::BindingType::Texture {
                            sample_type: wgpu::TextureSampleType::Float { filterable: true },
                            view_dimension: wgpu::TextureViewDimension::D2,
                            multisampled: false,
                        },
                        count: None,
                    },
                    wgpu::BindGroupLayoutEntry {
                        binding: 1,
                        visibility: wgpu::ShaderStages::FRAGMENT,
                        ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                        count: None,
                    },
                ],
            });

        let atlas_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Modern UI Atlas Bind Group"),
            layout: &atlas_bind_group_layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(&atlas_view),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(&atlas_sampler),
                },
            ],
        });

        let color_pipeline_layout =
            device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some("Modern UI Color Pipeline Layout"),
                bind_group_layouts: &[&globals_bind_group_layout],
                push_constant_ranges: &[],
            });

        let text_pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Modern UI Text Pipeline Layout"),
            bind_group_layouts: &[&globals_bind_group_layout, &atlas_bind_group_layout],
            push_constant_ranges: &[],
        });

        let color_pipeline = create_pipeline(
            device,
            "Modern UI Color Pipeline",
            &color_pipeline_layout,
            &color_shader,
            ColorVertex::desc(),
            surface_format,
        );

        let text_pipeline = create_pipeline(
            device,
            "Modern UI Text Pipeline",
            &text_pipeline_layout,
            &text_shader,
            TextureVertex::desc(),
            surface_format,
        );

        Self {
            color_pipeline,
            text_pipeline,
            uniform_buffer,
            uniform_bind_group,
            color_vertices: StreamBuffer::new::<ColorVertex>(
                device,
                "Modern UI Color Vertex Buffer",
                INITIAL_COLOR_VERTEX_CAPACITY,
            ),
            texture_vertices: StreamBuffer::new::<TextureVertex>(
                device,
                "Modern UI Texture Vertex Buffer",
                INITIAL_TEXTURE_VERTEX_CAPACITY,
            ),
            atlas_bind_group,
        }
    }

    /// Draw the vertex streams from `context`'s last processed frame onto `target`.
    ///
    /// The existing content of `target` is preserved.
    #[allow(clippy::too_many_arguments)]
    pub fn render(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        encoder: &mut wgpu::CommandEncoder,
        target: &wgpu::TextureView,
        screen_width: f32,
        screen_height: f32,
        context: &Context,
    ) {
        let globals = Globals::new(screen_width, screen_height, context.text_color());
        queue.write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(&globals));

        self.color_vertices.upload(device, queue, context.color_vertices());
        self.texture_vertices.upload(device, queue, context.texture_vertices());

        let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("Modern UI Render Pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Load, // Preserve existing content
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });

        render_pass.set_bind_group(0, &self.uniform_bind_group, &[]);

        if self.color_vertices.len > 0 {
            render_pass.set_pipeline(&self.color_pipeline);
            render_pass.set_vertex_buffer(0, self.color_vertices.buffer.slice(..));
            render_pass.draw(0..self.color_vertices.len, 0..1);
        }

        if self.texture_vertices.len > 0 {
            render_pass.set_pipeline(&self.text_pipeline);
            render_pass.set_bind_group(1, &self.atlas_bind_group, &[]);
            render_pass.set_vertex_buffer(0, self.texture_vertices.buffer.slice(..));
            render_pass.draw(0..self.texture_vertices.len, 0..1);
        }
    }
}

fn upload_atlas(queue: &wgpu::Queue, texture: &wgpu::Texture, font: &BakedFont) {
    if font.width() == 0 || font.height() == 0 {
        return;
    }

    queue.write_texture(
        wgpu::TexelCopyTextureInfo {
            texture,
            mip_level: 0,
            origin: wgpu::Origin3d::ZERO,
            aspect: wgpu::TextureAspect::All,
        },
        font.bitmap(),
        wgpu::TexelCopyBufferLayout {
            offset: 0,
            bytes_per_row: Some(font.width()),
            rows_per_image: Some(font.height()),
        },
        wgpu::Extent3d {
            width: font.width(),
            height: font.height(),
            depth_or_array_layers: 1,
        },
    );
}

fn create_pipeline(
    device: &wgpu::Device,
    label: &str,
    layout: &wgpu::PipelineLayout,
    shader: &wgpu::ShaderModule,
    vertex_layout: wgpu::VertexBufferLayout<'static>,
    surface_format: wgpu::TextureFormat,
) -> wgpu::RenderPipeline {
    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some(label),
        layout: Some(layout),
        vertex: wgpu::VertexState {
            module: shader,
            entry_point: Some("vs_main"),
            buffers: &[vertex_layout],
            compilation_options: Default::default(),
        },
        fragment: Some(wgpu::FragmentState {
            module: shader,
            entry_point: Some("fs_main"),
            targets: &[Some(wgpu::ColorTargetState {
                format: surface_format,
                blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: Default::default(),
        }),
        primitive: wgpu::PrimitiveState {
            // Vertices are duplicated per triangle; a strip would stitch shapes together.
            topology: wgpu::PrimitiveTopology::TriangleList,
            strip_index_format: None,
            front_face: wgpu::FrontFace::Ccw,
            cull_mode: None,
            polygon_mode: wgpu::PolygonMode::Fill,
            unclipped_depth: false,
            conservative: false,
        },
        depth_stencil: None,
        multisample: wgpu::MultisampleState::default(),
        multiview: None,
        cache: None,
    })
}
