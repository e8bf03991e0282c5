use modern_ui::{ColorVertex, TextureVertex};

/// Vertex types that know their WGPU buffer layout
pub trait GpuVertex: bytemuck::Pod {
    fn desc() -> wgpu::VertexBufferLayout<'static>;
}

impl GpuVertex for ColorVertex {
    fn desc() -> wgpu::VertexBufferLayout<'static> {
        const ATTRIBUTES: &[wgpu::VertexAttribute] = &[
            // pos
            wgpu::VertexAttribute {
                offset: 0,
                shader_location: 0,
                format: wgpu::VertexFormat::Float32x2,
            },
            // color
            wgpu::VertexAttribute {
                offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                shader_location: 1,
                format: wgpu::VertexFormat::Float32x3,
            },
        ];

        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<ColorVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: ATTRIBUTES,
        }
    }
}

impl GpuVertex for TextureVertex {
    fn desc() -> wgpu::VertexBufferLayout<'static> {
        const ATTRIBUTES: &[wgpu::VertexAttribute] = &[
            // pos
            wgpu::VertexAttribute {
                offset: 0,
                shader_location: 0,
                format: wgpu::VertexFormat::Float32x2,
            },
            // uv
            wgpu::VertexAttribute {
                offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                shader_location: 1,
                format: wgpu::VertexFormat::Float32x2,
            },
        ];

        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<TextureVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: ATTRIBUTES,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strides_match_vertex_sizes() {
        assert_eq!(ColorVertex::desc().array_stride, 20);
        assert_eq!(TextureVertex::desc().array_stride, 16);
    }

    #[test]
    fn test_attributes_cover_whole_vertex() {
        for desc in [ColorVertex::desc(), TextureVertex::desc()] {
            let last = desc.attributes.last().unwrap();
            assert_eq!(last.offset + last.format.size(), desc.array_stride);
        }
    }
}
