use super::background::MeshBuffers;
use super::helpers;
use galaxy_core::{LabelInstance, Scene};
use wgpu;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct SphereUniforms {
    view_proj: [[f32; 4]; 4],
    camera_pos: [f32; 4],
    light_pos: [f32; 4],
    light_color: [f32; 4],
    ambient: [f32; 4],
    base_color: [f32; 4],
    emissive: [f32; 4],
    material: [f32; 4],
}

impl SphereUniforms {
    pub(crate) fn from_scene(scene: &Scene) -> Self {
        let cfg = scene.config();
        let light = &cfg.light;
        let labels = &cfg.labels;
        // the specular colour is grey, so its red channel is its strength
        let specular = labels.specular.x;
        Self {
            view_proj: helpers::mat4_cols(scene.view_proj()),
            camera_pos: helpers::vec4_of(scene.eye(), 1.0),
            light_pos: helpers::vec4_of(light.point_position, 1.0),
            light_color: helpers::vec4_of(light.point_color * light.point_intensity, 1.0),
            ambient: helpers::vec4_of(light.ambient, 1.0),
            base_color: helpers::vec4_of(labels.color, 1.0),
            emissive: helpers::vec4_of(labels.emissive, 1.0),
            material: [labels.shininess, specular, 0.0, 0.0],
        }
    }
}

const INSTANCE_ATTRS: [wgpu::VertexAttribute; 2] =
    wgpu::vertex_attr_array![2 => Float32x3, 3 => Float32];

/// Label spheres: one shared mesh drawn once per word.
pub(crate) struct SpheresPass {
    pipeline: wgpu::RenderPipeline,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

impl SpheresPass {
    pub(crate) fn new(device: &wgpu::Device, color_format: wgpu::TextureFormat) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("spheres_shader"),
            source: wgpu::ShaderSource::Wgsl(galaxy_core::SPHERES_WGSL.into()),
        });
        let bgl = helpers::uniform_layout(device, "spheres_bgl");
        let instance_layout = wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<LabelInstance>() as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &INSTANCE_ATTRS,
        };
        let pipeline = helpers::make_pipeline(
            device,
            "spheres_pipeline",
            &bgl,
            &shader,
            &[helpers::mesh_vertex_layout(), instance_layout],
            color_format,
            None,
            Some(helpers::depth_state(true)),
        );
        let uniform_buffer = helpers::uniform_buffer(
            device,
            "spheres_uniforms",
            std::mem::size_of::<SphereUniforms>() as u64,
        );
        let bind_group = helpers::uniform_bind_group(device, "spheres_bg", &bgl, &uniform_buffer);
        Self {
            pipeline,
            uniform_buffer,
            bind_group,
        }
    }

    pub(crate) fn update(&self, queue: &wgpu::Queue, scene: &Scene, instances: &SphereInstances) {
        let u = SphereUniforms::from_scene(scene);
        queue.write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(&u));
        let data = scene.label_instances();
        if !data.is_empty() {
            queue.write_buffer(&instances.buffer, 0, bytemuck::cast_slice(&data));
        }
    }

    pub(crate) fn draw(
        &self,
        rpass: &mut wgpu::RenderPass<'_>,
        mesh: &MeshBuffers,
        instances: &SphereInstances,
    ) {
        if instances.count == 0 {
            return;
        }
        rpass.set_pipeline(&self.pipeline);
        rpass.set_bind_group(0, &self.bind_group, &[]);
        rpass.set_vertex_buffer(0, mesh.vertices.slice(..));
        rpass.set_vertex_buffer(1, instances.buffer.slice(..));
        rpass.set_index_buffer(mesh.indices.slice(..), wgpu::IndexFormat::Uint32);
        rpass.draw_indexed(0..mesh.index_count, 0, 0..instances.count);
    }

    pub(crate) fn destroy(&self) {
        self.uniform_buffer.destroy();
    }
}

/// Per-word offsets and spins, rewritten every frame.
pub(crate) struct SphereInstances {
    buffer: wgpu::Buffer,
    count: u32,
}

impl SphereInstances {
    pub(crate) fn new(device: &wgpu::Device, count: usize) -> Self {
        let size = (count.max(1) * std::mem::size_of::<LabelInstance>()) as u64;
        let buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("sphere_instances"),
            size,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        Self {
            buffer,
            count: count as u32,
        }
    }

    pub(crate) fn destroy(&self) {
        self.buffer.destroy();
    }
}
