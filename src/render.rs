use crate::constants::UV_OFFSET_SCALE;
use crate::core::{DisplacementField, Projection};
use web_sys as web;

mod field;
mod helpers;
use field::FieldTexture;

// ===================== WebGPU state for the distortion hero =====================

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct DistortUniforms {
    clip_from_plane: [[f32; 4]; 4],
    grid: f32,
    offset_scale: f32,
    // WGSL rounds the struct up to a 16-byte multiple
    _pad: [f32; 2],
}

/// The loaded image and the bind group that samples it.
struct ImageBinding {
    texture: wgpu::Texture,
    bind_group: wgpu::BindGroup,
}

pub struct GpuState {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,

    pipeline: wgpu::RenderPipeline,
    uniform_buffer: wgpu::Buffer,
    field: FieldTexture,
    bg_field: wgpu::BindGroup,
    image_bgl: wgpu::BindGroupLayout,
    linear_sampler: wgpu::Sampler,
    image: Option<ImageBinding>,

    uniforms: DistortUniforms,
    width: u32,
    height: u32,
}

impl GpuState {
    pub async fn new(canvas: &web::HtmlCanvasElement, grid: u32) -> anyhow::Result<Self> {
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
                    // Default limits on web to avoid passing unknown fields to older WebGPU impls
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
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        // Transparent until the image arrives, so the page shows through.
        let alpha_mode = if caps
            .alpha_modes
            .contains(&wgpu::CompositeAlphaMode::PreMultiplied)
        {
            wgpu::CompositeAlphaMode::PreMultiplied
        } else {
            caps.alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto)
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

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("distort_shader"),
            source: wgpu::ShaderSource::Wgsl(crate::core::DISTORT_WGSL.into()),
        });
        let bgl0 = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("distort_bgl0"), // uniforms + field texel data
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                },
                helpers::texture_entry(1, false),
            ],
        });
        let image_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("distort_bgl1"), // image + sampler
            entries: &[
                helpers::texture_entry(0, true),
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                    count: None,
                },
            ],
        });
        let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("distort_pl"),
            bind_group_layouts: &[&bgl0, &image_bgl],
            push_constant_ranges: &[],
        });
        let pipeline = helpers::make_plane_pipeline(&device, &pl, &shader, format);

        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("distort_uniforms"),
            size: std::mem::size_of::<DistortUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let field = FieldTexture::new(&device, grid);
        let bg_field = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("bg_field"),
            layout: &bgl0,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: uniform_buffer.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::TextureView(&field.view),
                },
            ],
        });
        let linear_sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("linear_sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            ..Default::default()
        });

        let projection = Projection::for_size(width as f32, height as f32)
            .ok_or_else(|| anyhow::anyhow!("zero-sized canvas"))?;
        let mut state = Self {
            surface,
            device,
            queue,
            config,
            pipeline,
            uniform_buffer,
            field,
            bg_field,
            image_bgl,
            linear_sampler,
            image: None,
            uniforms: DistortUniforms {
                clip_from_plane: [[0.0; 4]; 4],
                grid: grid.max(1) as f32,
                offset_scale: UV_OFFSET_SCALE,
                _pad: [0.0; 2],
            },
            width,
            height,
        };
        state.set_projection(&projection);
        Ok(state)
    }

    #[inline]
    pub fn has_image(&self) -> bool {
        self.image.is_some()
    }

    /// Copy a decoded image into a texture and bind it. Called once, after
    /// the element has finished loading.
    pub fn upload_image(&mut self, img: &web::HtmlImageElement) {
        let size = wgpu::Extent3d {
            width: img.natural_width().max(1),
            height: img.natural_height().max(1),
            depth_or_array_layers: 1,
        };
        let (texture, view) = helpers::create_texture(
            &self.device,
            "image_tex",
            size.width,
            size.height,
            wgpu::TextureFormat::Rgba8UnormSrgb,
            wgpu::TextureUsages::TEXTURE_BINDING
                | wgpu::TextureUsages::COPY_DST
                | wgpu::TextureUsages::RENDER_ATTACHMENT,
        );
        self.queue.copy_external_image_to_texture(
            &wgpu::CopyExternalImageSourceInfo {
                source: wgpu::ExternalImageSource::HTMLImageElement(img.clone()),
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
        let bind_group = self.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("bg_image"),
            layout: &self.image_bgl,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(&view),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(&self.linear_sampler),
                },
            ],
        });
        log::info!("[distortion] image uploaded {}x{}", size.width, size.height);
        self.image = Some(ImageBinding {
            texture,
            bind_group,
        });
    }

    pub fn set_projection(&mut self, projection: &Projection) {
        self.uniforms.clip_from_plane = projection.clip_from_plane().to_cols_array_2d();
        self.queue.write_buffer(
            &self.uniform_buffer,
            0,
            bytemuck::bytes_of(&self.uniforms),
        );
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

    pub fn write_field(&self, field: &DisplacementField) -> bool {
        self.field.write(&self.queue, field)
    }

    /// Draw the plane, or just clear to transparent while there is no image.
    pub fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("distort_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::TRANSPARENT),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            if let Some(image) = &self.image {
                rpass.set_pipeline(&self.pipeline);
                rpass.set_bind_group(0, &self.bg_field, &[]);
                rpass.set_bind_group(1, &image.bind_group, &[]);
                rpass.draw(0..6, 0..1);
            }
        }
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }

    /// Free GPU memory now instead of waiting for the JS garbage collector.
    /// Textures first, then buffers; the device and surface go with `self`.
    pub fn release(self) {
        if let Some(image) = &self.image {
            image.texture.destroy();
        }
        self.field.destroy();
        self.uniform_buffer.destroy();
        self.device.destroy();
    }
}
