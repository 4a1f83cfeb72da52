use glam::{Mat4, Vec3};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

use crate::constants::*;

use super::mesh;

const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth24Plus;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct GlobeUniforms {
    view_proj: [[f32; 4]; 4],
    model: [[f32; 4]; 4],
    view: [[f32; 4]; 4],
    sun_dir: [f32; 4],
    camera_pos: [f32; 4],
    atmos: [f32; 4],
    tint: [f32; 4],
}

/// Which shells get drawn; all on by default.
#[derive(Clone, Copy, Debug)]
pub struct LayerVisibility {
    pub earth: bool,
    pub clouds: bool,
    pub atmosphere: bool,
}

impl Default for LayerVisibility {
    fn default() -> Self {
        Self {
            earth: true,
            clouds: true,
            atmosphere: true,
        }
    }
}

// layer order: earth, clouds, atmosphere
const LAYER_COUNT: usize = 3;

/// WebGPU state for the Earth viewer: one shared unit sphere drawn three
/// times with per-layer uniforms (scaled model matrices) into a transparent
/// surface with a depth buffer.
pub struct GlobeGpu<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    depth_view: wgpu::TextureView,

    earth_pipeline: wgpu::RenderPipeline,
    clouds_pipeline: wgpu::RenderPipeline,
    atmosphere_pipeline: wgpu::RenderPipeline,

    uniform_buffers: [wgpu::Buffer; LAYER_COUNT],
    bind_groups: [wgpu::BindGroup; LAYER_COUNT],

    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    index_count: u32,

    width: u32,
    height: u32,
}

impl<'a> GlobeGpu<'a> {
    pub async fn new(
        canvas: &'a web::HtmlCanvasElement,
        texture_urls: &[String; 4],
    ) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

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
        let alpha_mode = if caps
            .alpha_modes
            .contains(&wgpu::CompositeAlphaMode::PreMultiplied)
        {
            wgpu::CompositeAlphaMode::PreMultiplied
        } else {
            caps.alpha_modes[0]
        };
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);
        let depth_view = create_depth_view(&device, width, height);

        // textures: albedo + night lights in sRGB, ocean/cloud masks linear
        let [albedo_url, lights_url, ocean_url, clouds_url] = texture_urls;
        let albedo = load_texture(&device, &queue, albedo_url, true, "earth_albedo").await?;
        let lights = load_texture(&device, &queue, lights_url, true, "earth_lights").await?;
        let ocean = load_texture(&device, &queue, ocean_url, false, "earth_ocean").await?;
        let clouds = load_texture(&device, &queue, clouds_url, false, "earth_clouds").await?;

        let sphere = mesh::uv_sphere(SPHERE_SEGMENTS, SPHERE_SEGMENTS);
        let vertex_bytes = bytemuck::cast_slice::<_, u8>(&sphere.vertices);
        let vertex_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("globe_vertices"),
            size: vertex_bytes.len() as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        queue.write_buffer(&vertex_buffer, 0, vertex_bytes);
        let index_bytes = bytemuck::cast_slice::<_, u8>(&sphere.indices);
        let index_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("globe_indices"),
            size: index_bytes.len() as u64,
            usage: wgpu::BufferUsages::INDEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        queue.write_buffer(&index_buffer, 0, index_bytes);

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("globe_shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("../../shaders/globe.wgsl").into()),
        });

        let mut bgl_entries = vec![wgpu::BindGroupLayoutEntry {
            binding: 0,
            visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: None,
            },
            count: None,
        }];
        for binding in 1..=4 {
            bgl_entries.push(wgpu::BindGroupLayoutEntry {
                binding,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Texture {
                    multisampled: false,
                    view_dimension: wgpu::TextureViewDimension::D2,
                    sample_type: wgpu::TextureSampleType::Float { filterable: true },
                },
                count: None,
            });
        }
        bgl_entries.push(wgpu::BindGroupLayoutEntry {
            binding: 5,
            visibility: wgpu::ShaderStages::FRAGMENT,
            ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
            count: None,
        });
        let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("globe_bgl"),
            entries: &bgl_entries,
        });
        let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("globe_pl"),
            bind_group_layouts: &[&bgl],
            push_constant_ranges: &[],
        });

        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("globe_sampler"),
            address_mode_u: wgpu::AddressMode::Repeat,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::FilterMode::Nearest,
            ..Default::default()
        });

        let uniform_buffers = std::array::from_fn::<_, LAYER_COUNT, _>(|i| {
            device.create_buffer(&wgpu::BufferDescriptor {
                label: Some(&format!("globe_uniforms_{i}")),
                size: std::mem::size_of::<GlobeUniforms>() as u64,
                usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            })
        });
        let bind_groups = std::array::from_fn::<_, LAYER_COUNT, _>(|i| {
            device.create_bind_group(&wgpu::BindGroupDescriptor {
                label: Some("globe_bg"),
                layout: &bgl,
                entries: &[
                    wgpu::BindGroupEntry {
                        binding: 0,
                        resource: uniform_buffers[i].as_entire_binding(),
                    },
                    wgpu::BindGroupEntry {
                        binding: 1,
                        resource: wgpu::BindingResource::TextureView(&albedo),
                    },
                    wgpu::BindGroupEntry {
                        binding: 2,
                        resource: wgpu::BindingResource::TextureView(&lights),
                    },
                    wgpu::BindGroupEntry {
                        binding: 3,
                        resource: wgpu::BindingResource::TextureView(&ocean),
                    },
                    wgpu::BindGroupEntry {
                        binding: 4,
                        resource: wgpu::BindingResource::TextureView(&clouds),
                    },
                    wgpu::BindGroupEntry {
                        binding: 5,
                        resource: wgpu::BindingResource::Sampler(&sampler),
                    },
                ],
            })
        });

        let vertex_attrs =
            wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3, 2 => Float32x2];
        let vertex_layout = wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<mesh::SphereVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &vertex_attrs,
        };

        let earth_pipeline = make_layer_pipeline(
            &device,
            &pl,
            &shader,
            "vs_sphere",
            "fs_earth",
            format,
            vertex_layout.clone(),
            None,
            wgpu::Face::Back,
            true,
        );
        let clouds_pipeline = make_layer_pipeline(
            &device,
            &pl,
            &shader,
            "vs_sphere",
            "fs_clouds",
            format,
            vertex_layout.clone(),
            Some(wgpu::BlendState::PREMULTIPLIED_ALPHA_BLENDING),
            wgpu::Face::Back,
            false,
        );
        let atmosphere_pipeline = make_layer_pipeline(
            &device,
            &pl,
            &shader,
            "vs_atmosphere",
            "fs_atmosphere",
            format,
            vertex_layout,
            Some(wgpu::BlendState {
                color: wgpu::BlendComponent {
                    src_factor: wgpu::BlendFactor::One,
                    dst_factor: wgpu::BlendFactor::One,
                    operation: wgpu::BlendOperation::Add,
                },
                alpha: wgpu::BlendComponent {
                    src_factor: wgpu::BlendFactor::One,
                    dst_factor: wgpu::BlendFactor::One,
                    operation: wgpu::BlendOperation::Add,
                },
            }),
            wgpu::Face::Front,
            false,
        );

        Ok(Self {
            surface,
            device,
            queue,
            config,
            depth_view,
            earth_pipeline,
            clouds_pipeline,
            atmosphere_pipeline,
            uniform_buffers,
            bind_groups,
            vertex_buffer,
            index_buffer,
            index_count: sphere.indices.len() as u32,
            width,
            height,
        })
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
            self.depth_view = create_depth_view(&self.device, width, height);
        }
    }

    pub fn render(
        &mut self,
        camera: Vec3,
        rotation_y: f32,
        layers: LayerVisibility,
    ) -> Result<(), wgpu::SurfaceError> {
        let aspect = self.width as f32 / self.height.max(1) as f32;
        let view = Mat4::look_at_rh(camera, Vec3::ZERO, Vec3::Y);
        let proj = Mat4::perspective_rh(FOV_Y_DEG.to_radians(), aspect, Z_NEAR, Z_FAR);
        let view_proj = proj * view;
        let rotation = Mat4::from_rotation_y(rotation_y);
        let sun = Vec3::from(SUN_POSITION).normalize();

        let radii = [
            EARTH_RADIUS,
            EARTH_RADIUS * CLOUD_RADIUS_RATIO,
            EARTH_RADIUS * ATMOSPHERE_RADIUS_RATIO,
        ];
        for (buffer, radius) in self.uniform_buffers.iter().zip(radii) {
            let model = rotation * Mat4::from_scale(Vec3::splat(radius));
            let uniforms = GlobeUniforms {
                view_proj: view_proj.to_cols_array_2d(),
                model: model.to_cols_array_2d(),
                view: view.to_cols_array_2d(),
                sun_dir: [sun.x, sun.y, sun.z, SUN_INTENSITY],
                camera_pos: [camera.x, camera.y, camera.z, 0.0],
                atmos: [
                    ATMOSPHERE_OPACITY,
                    ATMOSPHERE_POW_FACTOR,
                    ATMOSPHERE_MULTIPLIER,
                    0.0,
                ],
                tint: [
                    NIGHT_LIGHTS_TINT[0],
                    NIGHT_LIGHTS_TINT[1],
                    NIGHT_LIGHTS_TINT[2],
                    0.0,
                ],
            };
            self.queue
                .write_buffer(buffer, 0, bytemuck::bytes_of(&uniforms));
        }

        let frame = self.surface.get_current_texture()?;
        let frame_view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("globe_encoder"),
            });
        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("globe_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &frame_view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::TRANSPARENT),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Discard,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
            pass.set_index_buffer(self.index_buffer.slice(..), wgpu::IndexFormat::Uint32);

            let draws = [
                (layers.earth, &self.earth_pipeline, 0),
                (layers.clouds, &self.clouds_pipeline, 1),
                (layers.atmosphere, &self.atmosphere_pipeline, 2),
            ];
            for (visible, pipeline, bg) in draws {
                if !visible {
                    continue;
                }
                pass.set_pipeline(pipeline);
                pass.set_bind_group(0, &self.bind_groups[bg], &[]);
                pass.draw_indexed(0..self.index_count, 0, 0..1);
            }
        }

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}

fn create_depth_view(device: &wgpu::Device, width: u32, height: u32) -> wgpu::TextureView {
    let tex = device.create_texture(&wgpu::TextureDescriptor {
        label: Some("globe_depth"),
        size: wgpu::Extent3d {
            width: width.max(1),
            height: height.max(1),
            depth_or_array_layers: 1,
        },
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: DEPTH_FORMAT,
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
        view_formats: &[],
    });
    tex.create_view(&wgpu::TextureViewDescriptor::default())
}

#[allow(clippy::too_many_arguments)]
fn make_layer_pipeline(
    device: &wgpu::Device,
    layout: &wgpu::PipelineLayout,
    shader: &wgpu::ShaderModule,
    vs_entry: &str,
    fs_entry: &str,
    color_format: wgpu::TextureFormat,
    vertex_layout: wgpu::VertexBufferLayout<'_>,
    blend: Option<wgpu::BlendState>,
    cull: wgpu::Face,
    depth_write: bool,
) -> wgpu::RenderPipeline {
    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("globe_layer_pipeline"),
        layout: Some(layout),
        vertex: wgpu::VertexState {
            module: shader,
            entry_point: Some(vs_entry),
            buffers: &[vertex_layout],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        },
        primitive: wgpu::PrimitiveState {
            cull_mode: Some(cull),
            ..wgpu::PrimitiveState::default()
        },
        depth_stencil: Some(wgpu::DepthStencilState {
            format: DEPTH_FORMAT,
            depth_write_enabled: depth_write,
            depth_compare: wgpu::CompareFunction::Less,
            stencil: wgpu::StencilState::default(),
            bias: wgpu::DepthBiasState::default(),
        }),
        multisample: wgpu::MultisampleState::default(),
        fragment: Some(wgpu::FragmentState {
            module: shader,
            entry_point: Some(fs_entry),
            targets: &[Some(wgpu::ColorTargetState {
                format: color_format,
                blend,
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        }),
        cache: None,
        multiview: None,
    })
}

async fn load_image_bitmap(url: &str) -> anyhow::Result<web::ImageBitmap> {
    let img = web::HtmlImageElement::new().map_err(|e| anyhow::anyhow!("{:?}", e))?;
    img.set_cross_origin(Some("anonymous"));
    img.set_src(url);
    JsFuture::from(img.decode())
        .await
        .map_err(|e| anyhow::anyhow!("decode {url}: {:?}", e))?;
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let promise = window
        .create_image_bitmap_with_html_image_element(&img)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let bitmap = JsFuture::from(promise)
        .await
        .map_err(|e| anyhow::anyhow!("createImageBitmap {url}: {:?}", e))?;
    bitmap
        .dyn_into::<web::ImageBitmap>()
        .map_err(|_| anyhow::anyhow!("ImageBitmap cast failed"))
}

async fn load_texture(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    url: &str,
    srgb: bool,
    label: &str,
) -> anyhow::Result<wgpu::TextureView> {
    let bitmap = load_image_bitmap(url).await?;
    let size = wgpu::Extent3d {
        width: bitmap.width().max(1),
        height: bitmap.height().max(1),
        depth_or_array_layers: 1,
    };
    let format = if srgb {
        wgpu::TextureFormat::Rgba8UnormSrgb
    } else {
        wgpu::TextureFormat::Rgba8Unorm
    };
    let texture = device.create_texture(&wgpu::TextureDescriptor {
        label: Some(label),
        size,
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format,
        // copyExternalImageToTexture requires COPY_DST | RENDER_ATTACHMENT
        usage: wgpu::TextureUsages::TEXTURE_BINDING
            | wgpu::TextureUsages::COPY_DST
            | wgpu::TextureUsages::RENDER_ATTACHMENT,
        view_formats: &[],
    });
    queue.copy_external_image_to_texture(
        &wgpu::CopyExternalImageSourceInfo {
            source: wgpu::ExternalImageSource::ImageBitmap(bitmap),
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
        size,
    );
    Ok(texture.create_view(&wgpu::TextureViewDescriptor::default()))
}
