use super::helpers;
use galaxy_core::{Mesh, Scene};
use wgpu;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct BackgroundUniforms {
    clip_from_local: [[f32; 4]; 4],
    color_top: [f32; 4],
    color_bottom: [f32; 4],
}

impl BackgroundUniforms {
    pub(crate) fn from_scene(scene: &Scene) -> Self {
        let u = &scene.background.uniforms;
        Self {
            clip_from_local: helpers::mat4_cols(scene.background_clip_matrix()),
            color_top: helpers::vec4_of(u.color_top, 1.0),
            color_bottom: helpers::vec4_of(u.color_bottom, 1.0),
        }
    }
}

/// The gradient plane, drawn by itself into the first pass.
pub(crate) struct BackgroundPass {
    pipeline: wgpu::RenderPipeline,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

impl BackgroundPass {
    pub(crate) fn new(device: &wgpu::Device, color_format: wgpu::TextureFormat) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("background_shader"),
            source: wgpu::ShaderSource::Wgsl(galaxy_core::BACKGROUND_WGSL.into()),
        });
        let bgl = helpers::uniform_layout(device, "background_bgl");
        let pipeline = helpers::make_pipeline(
            device,
            "background_pipeline",
            &bgl,
            &shader,
            &[helpers::mesh_vertex_layout()],
            color_format,
            None,
            None,
        );
        let uniform_buffer = helpers::uniform_buffer(
            device,
            "background_uniforms",
            std::mem::size_of::<BackgroundUniforms>() as u64,
        );
        let bind_group = helpers::uniform_bind_group(device, "background_bg", &bgl, &uniform_buffer);
        Self {
            pipeline,
            uniform_buffer,
            bind_group,
        }
    }

    pub(crate) fn update(&self, queue: &wgpu::Queue, scene: &Scene) {
        let u = BackgroundUniforms::from_scene(scene);
        queue.write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(&u));
    }

    pub(crate) fn draw(&self, rpass: &mut wgpu::RenderPass<'_>, mesh: &MeshBuffers) {
        rpass.set_pipeline(&self.pipeline);
        rpass.set_bind_group(0, &self.bind_group, &[]);
        rpass.set_vertex_buffer(0, mesh.vertices.slice(..));
        rpass.set_index_buffer(mesh.indices.slice(..), wgpu::IndexFormat::Uint32);
        rpass.draw_indexed(0..mesh.index_count, 0, 0..1);
    }

    pub(crate) fn destroy(&self) {
        self.uniform_buffer.destroy();
    }
}

/// Uploaded vertex and index data for one mesh.
pub(crate) struct MeshBuffers {
    pub(crate) vertices: wgpu::Buffer,
    pub(crate) indices: wgpu::Buffer,
    pub(crate) index_count: u32,
}

impl MeshBuffers {
    pub(crate) fn upload(device: &wgpu::Device, label: &str, mesh: &Mesh) -> Self {
        Self {
            vertices: helpers::vertex_buffer(device, label, bytemuck::cast_slice(&mesh.vertices)),
            indices: helpers::index_buffer(device, label, &mesh.indices),
            index_count: mesh.indices.len() as u32,
        }
    }

    pub(crate) fn destroy(&self) {
        self.vertices.destroy();
        self.indices.destroy();
    }
}
