use std::time::Instant;
use winit::{
    dpi::{LogicalSize, PhysicalPosition, PhysicalSize},
    event::*,
    event_loop::EventLoop,
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowBuilder},
};

use dotfield_core::{FieldEngine, FieldUniforms, PointerKind, Theme, Viewport, FIELD_WGSL};
use glam::Vec2;

struct GpuState<'w> {
    window: &'w Window,
    surface: wgpu::Surface<'w>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    pipeline: wgpu::RenderPipeline,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

impl<'w> GpuState<'w> {
    async fn new(window: &'w Window) -> anyhow::Result<Self> {
        let size = window.inner_size();
        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(window)?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No GPU adapter"))?;
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
            .await?;

        let surface_caps = surface.get_capabilities(&adapter);
        let format = surface_caps
            .formats
            .iter()
            .copied()
            .find(|f| !f.is_srgb())
            .or_else(|| surface_caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: surface_caps.alpha_modes[0],
            desired_maximum_frame_latency: 2,
            view_formats: vec![],
        };
        surface.configure(&device, &config);

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("field_shader"),
            source: wgpu::ShaderSource::Wgsl(FIELD_WGSL.into()),
        });
        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("field_uniforms"),
            size: std::mem::size_of::<FieldUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("bg"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });
        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("pl"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });
        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_fullscreen"),
                buffers: &[],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            primitive: wgpu::PrimitiveState::default(),
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_field"),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: None,
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            cache: None,
            multiview: None,
        });

        log::info!(
            "gpu ready: {} ({:?}), format {:?}",
            adapter.get_info().name,
            adapter.get_info().backend,
            format
        );
        Ok(Self {
            window,
            surface,
            device,
            queue,
            config,
            pipeline,
            uniform_buffer,
            bind_group,
        })
    }

    fn resize(&mut self, new_size: PhysicalSize<u32>) {
        if new_size.width == 0 || new_size.height == 0 {
            return;
        }
        self.config.width = new_size.width;
        self.config.height = new_size.height;
        self.surface.configure(&self.device, &self.config);
    }

    fn render(&mut self, uniforms: &FieldUniforms) -> Result<(), wgpu::SurfaceError> {
        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        self.queue
            .write_buffer(&self.uniform_buffer, 0, uniforms.as_bytes());

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("rpass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_pipeline(&self.pipeline);
            rpass.set_bind_group(0, &self.bind_group, &[]);
            rpass.draw(0..3, 0..1);
        }
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}

/// Window geometry in the two spaces the engine needs.
fn window_spaces(window: &Window) -> (Viewport, Vec2) {
    let physical = window.inner_size();
    let logical: LogicalSize<f32> = physical.to_logical(window.scale_factor());
    (
        Viewport::new(logical.width, logical.height),
        Vec2::new(physical.width as f32, physical.height as f32),
    )
}

fn to_logical(window: &Window, p: PhysicalPosition<f64>) -> (f32, f32) {
    let l = p.to_logical::<f32>(window.scale_factor());
    (l.x, l.y)
}

fn initial_theme() -> Theme {
    match std::env::var("DOTFIELD_THEME") {
        Ok(raw) => raw.parse().unwrap_or_else(|e| {
            log::warn!("DOTFIELD_THEME: {}; using dark", e);
            Theme::Dark
        }),
        Err(_) => Theme::Dark,
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .init();

    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("dotfield (native)")
        .with_inner_size(LogicalSize::new(1280.0, 800.0))
        .build(&event_loop)?;

    let mut state = pollster::block_on(GpuState::new(&window))?;

    let (viewport, resolution) = window_spaces(&window);
    let mut engine = FieldEngine::new(viewport);
    engine.resize(viewport, resolution);
    engine.set_theme(initial_theme());
    let mut focus_hovered = false;
    let mut last_cursor = (viewport.width * 0.5, viewport.height * 0.5);
    let start = Instant::now();
    log::info!("keys: T theme, F focus blur, Esc quit");

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent { event, .. } => match event {
            WindowEvent::CloseRequested => elwt.exit(),
            WindowEvent::Resized(size) => {
                state.resize(size);
                let (viewport, resolution) = window_spaces(state.window);
                engine.resize(viewport, resolution);
            }
            WindowEvent::CursorMoved { position, .. } => {
                let (x, y) = to_logical(state.window, position);
                last_cursor = (x, y);
                engine.on_pointer_move(x, y, PointerKind::Mouse);
            }
            WindowEvent::MouseInput {
                state: ElementState::Released,
                button: MouseButton::Left,
                ..
            } => {
                engine.on_click(last_cursor.0, last_cursor.1, false);
            }
            WindowEvent::Touch(touch) => {
                let (x, y) = to_logical(state.window, touch.location);
                engine.on_pointer_move(x, y, PointerKind::Touch);
                match touch.phase {
                    TouchPhase::Started => engine.on_pointer_down(PointerKind::Touch),
                    TouchPhase::Ended => {
                        engine.on_pointer_up(PointerKind::Touch);
                        engine.on_click(x, y, false);
                    }
                    TouchPhase::Cancelled => engine.on_pointer_up(PointerKind::Touch),
                    TouchPhase::Moved => {}
                }
            }
            WindowEvent::KeyboardInput { event, .. }
                if event.state == ElementState::Pressed && !event.repeat =>
            {
                match event.physical_key {
                    PhysicalKey::Code(KeyCode::KeyT) => {
                        let theme = engine.theme().toggled();
                        engine.set_theme(theme);
                        log::info!("theme -> {}", theme);
                    }
                    PhysicalKey::Code(KeyCode::KeyF) => {
                        focus_hovered = !focus_hovered;
                        engine.set_focus_hovered(focus_hovered);
                        log::info!("focus hovered -> {}", focus_hovered);
                    }
                    PhysicalKey::Code(KeyCode::Escape) => elwt.exit(),
                    _ => {}
                }
            }
            _ => {}
        },
        Event::AboutToWait => {
            let snap = engine.tick(start.elapsed().as_secs_f32());
            match state.render(&FieldUniforms::from_snapshot(&snap)) {
                Ok(_) => state.window.request_redraw(),
                Err(wgpu::SurfaceError::Lost) => state.resize(state.window.inner_size()),
                Err(wgpu::SurfaceError::OutOfMemory) => elwt.exit(),
                Err(e) => log::warn!("surface error: {:?}", e),
            }
        }
        _ => {}
    })?;
    Ok(())
}
