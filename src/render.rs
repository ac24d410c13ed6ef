use crate::constants::CANVAS_CLEAR_RGBA;
use elements_core::constants::{BACKGROUND_HEX, FOG_FAR, FOG_NEAR, SOLID_RADIUS};
use elements_core::{pattern_alpha, AlphaSource, Rgb, SceneState, Segment, Shell, SolidKind};
use glam::{Mat4, Vec3};
use web_sys as web;
use wgpu::util::DeviceExt;

mod helpers;
pub mod solids;

use solids::{build_solid, Shape, SolidMesh};

// ===================== WebGPU state for the element solids =====================

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct ShellUniforms {
    view: [[f32; 4]; 4],
    proj: [[f32; 4]; 4],
    model: [[f32; 4]; 4],
    color: [f32; 4],
    tex: [f32; 4],
    fog: [f32; 4],
    fog_color: [f32; 4],
}

/// Vertex data shared by every shell of one segment.
struct SolidBuffers {
    triangles: wgpu::Buffer,
    triangle_count: u32,
    edges: wgpu::Buffer,
    edge_count: u32,
}

/// One uniform buffer + bind group per drawable.
struct DrawSlot {
    uniforms: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

struct ShellDraw {
    mesh: DrawSlot,
    edge: Option<DrawSlot>,
}

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    bgl: wgpu::BindGroupLayout,
    mesh_pipeline: wgpu::RenderPipeline,
    edge_pipeline: wgpu::RenderPipeline,
    sampler: wgpu::Sampler,
    pattern_view: wgpu::TextureView,
    // Per segment
    solids: Vec<SolidBuffers>,
    shells: Vec<Vec<ShellDraw>>,
    images: Vec<Option<wgpu::TextureView>>,

    width: u32,
    height: u32,
    clear_color: wgpu::Color,
    srgb_target: bool,
}

impl<'a> GpuState<'a> {
    pub async fn new(
        canvas: &'a web::HtmlCanvasElement,
        segments: &[Segment],
    ) -> anyhow::Result<Self> {
        let width = canvas.width();
        let height = canvas.height();

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Use default limits on web to avoid passing unknown fields to older WebGPU impls
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .unwrap_or(caps.formats[0]);
        // transparent canvas: the star layer sits behind it
        let alpha_mode = caps
            .alpha_modes
            .iter()
            .copied()
            .find(|m| *m == wgpu::CompositeAlphaMode::PreMultiplied)
            .unwrap_or(caps.alpha_modes[0]);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: width.max(1),
            height: height.max(1),
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("scene_shader"),
            source: wgpu::ShaderSource::Wgsl(elements_core::SCENE_WGSL.into()),
        });
        let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("shell_bgl"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
                        view_dimension: wgpu::TextureViewDimension::D2,
                        multisampled: false,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 2,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                    count: None,
                },
            ],
        });
        let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("shell_pl"),
            bind_group_layouts: &[&bgl],
            push_constant_ranges: &[],
        });
        let mesh_pipeline = helpers::make_shell_pipeline(
            &device,
            &pl,
            &shader,
            "mesh_pipeline",
            "fs_mesh",
            wgpu::PrimitiveTopology::TriangleList,
            format,
        );
        let edge_pipeline = helpers::make_shell_pipeline(
            &device,
            &pl,
            &shader,
            "edge_pipeline",
            "fs_edge",
            wgpu::PrimitiveTopology::LineList,
            format,
        );
        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("repeat_sampler"),
            address_mode_u: wgpu::AddressMode::Repeat,
            address_mode_v: wgpu::AddressMode::Repeat,
            address_mode_w: wgpu::AddressMode::Repeat,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::FilterMode::Nearest,
            ..Default::default()
        });
        let (_pattern_tex, pattern_view) =
            helpers::create_flat_alpha_texture(&device, &queue, "alpha_pattern", pattern_alpha());

        let solids = segments
            .iter()
            .map(|s| upload_solid(&device, &build_solid(shape_for(s.solid), SOLID_RADIUS)))
            .collect::<Vec<_>>();

        let mut state = Self {
            surface,
            device,
            queue,
            config,
            bgl,
            mesh_pipeline,
            edge_pipeline,
            sampler,
            pattern_view,
            solids,
            shells: Vec::new(),
            images: segments.iter().map(|_| None).collect(),
            width,
            height,
            clear_color: {
                let [r, g, b, a] = CANVAS_CLEAR_RGBA;
                wgpu::Color { r, g, b, a }
            },
            srgb_target: format.is_srgb(),
        };
        let shells = segments
            .iter()
            .enumerate()
            .map(|(i, seg)| state.create_shell_draws(i, seg))
            .collect();
        state.shells = shells;
        log::info!(
            "[gpu] {}x{} format={:?} segments={}",
            width,
            height,
            format,
            state.solids.len()
        );
        Ok(state)
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
        }
    }

    /// Copy a decoded element image into a texture and rebind the segment's
    /// core shell to it.
    pub fn upload_image(&mut self, segment: usize, image: &web::HtmlImageElement, scene: &SceneState) {
        let (Some(seg), Some(slot)) = (scene.segments.get(segment), self.images.get_mut(segment))
        else {
            return;
        };
        let (w, h) = (image.natural_width(), image.natural_height());
        let (texture, view) =
            helpers::create_image_texture(&self.device, seg.element.image(), w, h);
        self.queue.copy_external_image_to_texture(
            &wgpu::CopyExternalImageSourceInfo {
                source: wgpu::ExternalImageSource::HTMLImageElement(image.clone()),
                origin: wgpu::Origin2d::ZERO,
                flip_y: false,
            },
            wgpu::CopyExternalImageDestInfo {
                texture: &texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
                color_space: wgpu::PredefinedColorSpace::Srgb,
                premultiplied_alpha: false,
            },
            wgpu::Extent3d {
                width: w.max(1),
                height: h.max(1),
                depth_or_array_layers: 1,
            },
        );
        *slot = Some(view);
        let draws = self.create_shell_draws(segment, seg);
        self.shells[segment] = draws;
    }

    pub fn render(&mut self, scene: &SceneState) -> Result<(), wgpu::SurfaceError> {
        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let view_m = scene.camera.view_matrix().to_cols_array_2d();
        let proj_m = scene.projection.matrix().to_cols_array_2d();
        let fog = [FOG_NEAR, FOG_FAR, 0.0, 0.0];
        // an *Srgb target re-encodes on store, so shader inputs must be linear
        let srgb_target = self.srgb_target;
        let shader_color = |c: Rgb| if srgb_target { c.to_linear() } else { c };
        let bg = shader_color(Rgb::from_hex(BACKGROUND_HEX));
        let fog_color = [bg.r, bg.g, bg.b, 1.0];
        let uniforms = |model: Mat4, color: Rgb, opacity: f32, tex: [f32; 4]| ShellUniforms {
            view: view_m,
            proj: proj_m,
            model: model.to_cols_array_2d(),
            color: {
                let c = shader_color(color);
                [c.r, c.g, c.b, opacity]
            },
            tex,
            fog,
            fog_color,
        };

        for (seg, draws) in scene.segments.iter().zip(&self.shells) {
            if !seg.visible {
                continue;
            }
            for (shell, draw) in seg.shells.iter().zip(draws) {
                let model = shell_model(seg, shell);
                let m = &shell.material;
                let tex = [
                    m.texture_offset[0],
                    m.texture_offset[1],
                    m.texture_repeat,
                    0.0,
                ];
                self.queue.write_buffer(
                    &draw.mesh.uniforms,
                    0,
                    bytemuck::bytes_of(&uniforms(model, m.color, m.opacity, tex)),
                );
                if let (Some(edge), Some(slot)) = (&shell.edge, &draw.edge) {
                    self.queue.write_buffer(
                        &slot.uniforms,
                        0,
                        bytemuck::bytes_of(&uniforms(model, edge.color, edge.opacity, [0.0; 4])),
                    );
                }
            }
        }

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            for ((seg, draws), solid) in scene.segments.iter().zip(&self.shells).zip(&self.solids) {
                if !seg.visible {
                    continue;
                }
                for draw in draws {
                    // outline first, then its shell
                    if let Some(edge) = &draw.edge {
                        rpass.set_pipeline(&self.edge_pipeline);
                        rpass.set_bind_group(0, &edge.bind_group, &[]);
                        rpass.set_vertex_buffer(0, solid.edges.slice(..));
                        rpass.draw(0..solid.edge_count, 0..1);
                    }
                    rpass.set_pipeline(&self.mesh_pipeline);
                    rpass.set_bind_group(0, &draw.mesh.bind_group, &[]);
                    rpass.set_vertex_buffer(0, solid.triangles.slice(..));
                    rpass.draw(0..solid.triangle_count, 0..1);
                }
            }
        }
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}

impl<'a> GpuState<'a> {
    fn create_shell_draws(&self, segment: usize, seg: &Segment) -> Vec<ShellDraw> {
        seg.shells
            .iter()
            .map(|shell| {
                let alpha_view = match (shell.material.alpha, &self.images[segment]) {
                    (AlphaSource::Image, Some(v)) => v,
                    _ => &self.pattern_view,
                };
                ShellDraw {
                    mesh: self.create_slot("shell_uniforms", alpha_view),
                    edge: shell
                        .edge
                        .as_ref()
                        .map(|_| self.create_slot("edge_uniforms", &self.pattern_view)),
                }
            })
            .collect()
    }

    fn create_slot(&self, label: &str, alpha_view: &wgpu::TextureView) -> DrawSlot {
        let uniforms = self.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some(label),
            size: std::mem::size_of::<ShellUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let bind_group = self.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some(label),
            layout: &self.bgl,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: uniforms.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::TextureView(alpha_view),
                },
                wgpu::BindGroupEntry {
                    binding: 2,
                    resource: wgpu::BindingResource::Sampler(&self.sampler),
                },
            ],
        });
        DrawSlot {
            uniforms,
            bind_group,
        }
    }
}

fn upload_solid(device: &wgpu::Device, mesh: &SolidMesh) -> SolidBuffers {
    let triangles = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("solid_triangles"),
        contents: bytemuck::cast_slice(&mesh.triangles),
        usage: wgpu::BufferUsages::VERTEX,
    });
    let edges = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("solid_edges"),
        contents: bytemuck::cast_slice(&mesh.edges),
        usage: wgpu::BufferUsages::VERTEX,
    });
    SolidBuffers {
        triangles,
        triangle_count: mesh.triangles.len() as u32,
        edges,
        edge_count: mesh.edges.len() as u32,
    }
}

fn shape_for(kind: SolidKind) -> Shape {
    match kind {
        SolidKind::Tetrahedron => Shape::Tetrahedron,
        SolidKind::Cube => Shape::Cube,
        SolidKind::Octahedron => Shape::Octahedron,
        SolidKind::Icosahedron => Shape::Icosahedron,
        SolidKind::Dodecahedron => Shape::Dodecahedron,
    }
}

/// Group transform (depth slide, idle spin) times the shell's own scale.
fn shell_model(seg: &Segment, shell: &Shell) -> Mat4 {
    Mat4::from_translation(Vec3::new(0.0, 0.0, seg.depth_offset))
        * Mat4::from_rotation_y(seg.rotation)
        * Mat4::from_scale(Vec3::splat(shell.scale))
}
