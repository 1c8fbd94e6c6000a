use super::helpers;
use galaxy_core::ParticleBuffers;
use glam::{Mat4, Vec3};
use wgpu;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct PointsUniforms {
    view: [[f32; 4]; 4],
    proj: [[f32; 4]; 4],
    model: [[f32; 4]; 4],
    tint: [f32; 4],
    params: [f32; 4],
}

/// How one point cloud is shaded.
#[derive(Clone, Copy, Debug)]
pub(crate) struct PointMaterial {
    pub(crate) tint: Vec3,
    pub(crate) opacity: f32,
    pub(crate) point_size: f32,
    pub(crate) vertex_colors: bool,
    /// Additive blend without depth writes.
    pub(crate) transparent: bool,
}

impl PointsUniforms {
    pub(crate) fn new(
        view: Mat4,
        proj: Mat4,
        model: Mat4,
        m: &PointMaterial,
        viewport_height: u32,
    ) -> Self {
        Self {
            view: helpers::mat4_cols(view),
            proj: helpers::mat4_cols(proj),
            model: helpers::mat4_cols(model),
            tint: helpers::vec4_of(m.tint, m.opacity),
            params: [
                m.point_size,
                if m.vertex_colors { 1.0 } else { 0.0 },
                viewport_height as f32,
                0.0,
            ],
        }
    }
}

// Two triangles spanning [-0.5, 0.5]^2, expanded per instance in view space.
const QUAD_CORNERS: [[f32; 2]; 6] = [
    [-0.5, -0.5],
    [0.5, -0.5],
    [0.5, 0.5],
    [-0.5, -0.5],
    [0.5, 0.5],
    [-0.5, 0.5],
];

const CORNER_ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x2];
const CENTER_ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![1 => Float32x3];
const COLOR_ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![2 => Float32x3];
const SIZE_ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![3 => Float32];

fn instance_layout(
    stride: u64,
    attributes: &'static [wgpu::VertexAttribute],
) -> wgpu::VertexBufferLayout<'static> {
    wgpu::VertexBufferLayout {
        array_stride: stride,
        step_mode: wgpu::VertexStepMode::Instance,
        attributes,
    }
}

fn buffer_layouts() -> [wgpu::VertexBufferLayout<'static>; 4] {
    let f = std::mem::size_of::<f32>() as u64;
    [
        wgpu::VertexBufferLayout {
            array_stride: 2 * f,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &CORNER_ATTRS,
        },
        instance_layout(3 * f, &CENTER_ATTRS),
        instance_layout(3 * f, &COLOR_ATTRS),
        instance_layout(f, &SIZE_ATTRS),
    ]
}

/// Pipelines shared by the starfield and the dust ring.
pub(crate) struct PointsPass {
    opaque: wgpu::RenderPipeline,
    additive: wgpu::RenderPipeline,
    layout: wgpu::BindGroupLayout,
    quad: wgpu::Buffer,
}

impl PointsPass {
    pub(crate) fn new(device: &wgpu::Device, color_format: wgpu::TextureFormat) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("points_shader"),
            source: wgpu::ShaderSource::Wgsl(galaxy_core::POINTS_WGSL.into()),
        });
        let layout = helpers::uniform_layout(device, "points_bgl");
        let buffers = buffer_layouts();
        let opaque = helpers::make_pipeline(
            device,
            "points_opaque",
            &layout,
            &shader,
            &buffers,
            color_format,
            None,
            Some(helpers::depth_state(true)),
        );
        let additive_blend = wgpu::BlendState {
            color: wgpu::BlendComponent {
                src_factor: wgpu::BlendFactor::SrcAlpha,
                dst_factor: wgpu::BlendFactor::One,
                operation: wgpu::BlendOperation::Add,
            },
            alpha: wgpu::BlendComponent {
                src_factor: wgpu::BlendFactor::Zero,
                dst_factor: wgpu::BlendFactor::One,
                operation: wgpu::BlendOperation::Add,
            },
        };
        // transparent points test against depth but never write it
        let additive = helpers::make_pipeline(
            device,
            "points_additive",
            &layout,
            &shader,
            &buffers,
            color_format,
            Some(additive_blend),
            Some(helpers::depth_state(false)),
        );
        let quad = helpers::vertex_buffer(device, "points_quad", bytemuck::cast_slice(&QUAD_CORNERS));
        Self {
            opaque,
            additive,
            layout,
            quad,
        }
    }

    pub(crate) fn upload(
        &self,
        device: &wgpu::Device,
        label: &str,
        particles: &ParticleBuffers,
        material: PointMaterial,
    ) -> PointCloud {
        // zero-sized buffers are not allowed; an empty cloud keeps one dummy float
        let bytes = |v: &[f32]| -> Vec<u8> {
            if v.is_empty() {
                vec![0; 16]
            } else {
                bytemuck::cast_slice(v).to_vec()
            }
        };
        let uniform_buffer = helpers::uniform_buffer(
            device,
            label,
            std::mem::size_of::<PointsUniforms>() as u64,
        );
        let bind_group = helpers::uniform_bind_group(device, label, &self.layout, &uniform_buffer);
        PointCloud {
            positions: helpers::vertex_buffer(device, label, &bytes(&particles.positions[..])),
            colors: helpers::vertex_buffer(device, label, &bytes(&particles.colors[..])),
            sizes: helpers::vertex_buffer(device, label, &bytes(&particles.sizes[..])),
            count: particles.len() as u32,
            material,
            uniform_buffer,
            bind_group,
        }
    }

    pub(crate) fn draw(&self, rpass: &mut wgpu::RenderPass<'_>, cloud: &PointCloud) {
        if cloud.count == 0 {
            return;
        }
        let pipeline = if cloud.material.transparent {
            &self.additive
        } else {
            &self.opaque
        };
        rpass.set_pipeline(pipeline);
        rpass.set_bind_group(0, &cloud.bind_group, &[]);
        rpass.set_vertex_buffer(0, self.quad.slice(..));
        rpass.set_vertex_buffer(1, cloud.positions.slice(..));
        rpass.set_vertex_buffer(2, cloud.colors.slice(..));
        rpass.set_vertex_buffer(3, cloud.sizes.slice(..));
        rpass.draw(0..QUAD_CORNERS.len() as u32, 0..cloud.count);
    }

    pub(crate) fn destroy(&self) {
        self.quad.destroy();
    }
}

/// A point cloud resident on the GPU.
pub(crate) struct PointCloud {
    positions: wgpu::Buffer,
    colors: wgpu::Buffer,
    sizes: wgpu::Buffer,
    count: u32,
    material: PointMaterial,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

impl PointCloud {
    pub(crate) fn update(
        &self,
        queue: &wgpu::Queue,
        view: Mat4,
        proj: Mat4,
        model: Mat4,
        viewport_height: u32,
    ) {
        let u = PointsUniforms::new(view, proj, model, &self.material, viewport_height);
        queue.write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(&u));
    }

    pub(crate) fn destroy(&self) {
        self.positions.destroy();
        self.colors.destroy();
        self.sizes.destroy();
        self.uniform_buffer.destroy();
    }
}
