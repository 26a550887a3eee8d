use std::sync::Arc;
use std::time::Duration;

use egui::{Context as EguiContext, viewport::ViewportId};
use egui_wgpu::{
    Renderer as EguiWgpuRenderer, ScreenDescriptor,
    wgpu::{
        Color, CommandEncoderDescriptor, CreateSurfaceError, Device, DeviceDescriptor, Features,
        Instance, InstanceDescriptor, Limits, LoadOp, MemoryHints, Operations, PowerPreference,
        PresentMode, Queue, RenderPassColorAttachment, RenderPassDescriptor,
        RequestAdapterError, RequestAdapterOptions, RequestDeviceError, StoreOp, Surface,
        SurfaceConfiguration, SurfaceError, TextureUsages, TextureViewDescriptor, Trace,
    },
};
use egui_winit::State as EguiWinitState;
use thiserror::Error;
use winit::{dpi::PhysicalSize, event::WindowEvent, window::Window};

pub mod events;
pub mod host;
pub mod styles;
pub mod text_measurer;
pub mod ui;

pub use events::{FrameInput, FrameObserver, FrameSample};
pub use host::{EguiTextHost, text_edit_style};
pub use styles::{StyleSheet, TOOLBAR_STYLE, register_style_sheets};
pub use text_measurer::EguiTextMeasurer;

#[derive(Debug, Error)]
pub enum RendererError {
    #[error("failed to create surface: {0}")]
    Surface(#[from] CreateSurfaceError),

    #[error("no suitable adapter: {0}")]
    Adapter(#[from] RequestAdapterError),

    #[error("failed to create device: {0}")]
    Device(#[from] RequestDeviceError),

    #[error("surface supports no texture format")]
    NoSurfaceFormat,
}

pub struct Renderer {
    egui_context: EguiContext,
    egui_state: EguiWinitState,
    egui_renderer: EguiWgpuRenderer,
    surface: Surface<'static>,
    device: Device,
    queue: Queue,
    surface_config: SurfaceConfiguration,
}

impl Renderer {
    pub fn new(window: Arc<Window>) -> Result<Self, RendererError> {
        let egui_context = EguiContext::default();

        let egui_state = EguiWinitState::new(
            egui_context.clone(),
            ViewportId::ROOT,
            &window,
            Some(window.scale_factor() as f32),
            None,
            None,
        );

        let instance = Instance::new(&InstanceDescriptor::default());
        let surface = instance.create_surface(Arc::clone(&window))?;

        let adapter = pollster::block_on(instance.request_adapter(&RequestAdapterOptions {
            power_preference: PowerPreference::HighPerformance,
            force_fallback_adapter: false,
            compatible_surface: Some(&surface),
        }))?;

        let (device, queue) = pollster::block_on(adapter.request_device(&DeviceDescriptor {
            label: Some("scrivener device"),
            required_features: Features::empty(),
            required_limits: Limits::default(),
            memory_hints: MemoryHints::Performance,
            trace: Trace::default(),
        }))?;

        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| f.is_srgb())
            .or_else(|| caps.formats.first().copied())
            .ok_or(RendererError::NoSurfaceFormat)?;
        let alpha_mode = caps.alpha_modes.first().copied().unwrap_or_default();

        let size = window.inner_size();
        let config = SurfaceConfiguration {
            usage: TextureUsages::RENDER_ATTACHMENT,
            format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: PresentMode::AutoVsync,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let egui_renderer = EguiWgpuRenderer::new(&device, format, None, 1, true);
        log::debug!(target: "gfx", "renderer ready: {format:?} {}x{}", config.width, config.height);

        Ok(Self {
            egui_context,
            egui_state,
            egui_renderer,
            surface,
            device,
            queue,
            surface_config: config,
        })
    }

    pub fn context(&self) -> &EguiContext {
        &self.egui_context
    }

    /// Feed a window event to egui. Returns `true` when egui wants a repaint.
    pub fn on_window_event(&mut self, window: &Window, event: &WindowEvent) -> bool {
        self.egui_state.on_window_event(window, event).repaint
    }

    pub fn resize(&mut self, new_size: PhysicalSize<u32>) {
        self.surface_config.width = new_size.width.max(1);
        self.surface_config.height = new_size.height.max(1);
        self.surface.configure(&self.device, &self.surface_config);
    }

    /// Run one egui pass and present it. Returns how long egui is willing
    /// to wait before the next frame, `None` if the frame was skipped.
    pub fn render<F: FnOnce(&EguiContext)>(
        &mut self,
        window: &Window,
        build_ui: F,
    ) -> Option<Duration> {
        let surface_texture = match self.surface.get_current_texture() {
            Ok(x) => x,
            Err(SurfaceError::Lost) => {
                self.surface.configure(&self.device, &self.surface_config);
                return None;
            }
            Err(SurfaceError::Outdated) => return None,
            Err(e) => {
                log::warn!(target: "gfx", "surface error: {e:?}");
                return None;
            }
        };
        let surface_view = surface_texture
            .texture
            .create_view(&TextureViewDescriptor::default());

        let raw_input = self.egui_state.take_egui_input(window);
        self.egui_context.begin_pass(raw_input);

        build_ui(&self.egui_context);

        let full_output = self.egui_context.end_pass();
        self.egui_state
            .handle_platform_output(window, full_output.platform_output);

        let clipped = self
            .egui_context
            .tessellate(full_output.shapes, full_output.pixels_per_point);

        for (id, delta) in &full_output.textures_delta.set {
            self.egui_renderer
                .update_texture(&self.device, &self.queue, *id, delta);
        }

        let mut encoder = self
            .device
            .create_command_encoder(&CommandEncoderDescriptor {
                label: Some("gfx encoder"),
            });

        let screen = ScreenDescriptor {
            size_in_pixels: [self.surface_config.width, self.surface_config.height],
            pixels_per_point: full_output.pixels_per_point,
        };

        self.egui_renderer.update_buffers(
            &self.device,
            &self.queue,
            &mut encoder,
            &clipped,
            &screen,
        );

        {
            let render_pass = encoder.begin_render_pass(&RenderPassDescriptor {
                label: Some("egui render_pass"),
                color_attachments: &[Some(RenderPassColorAttachment {
                    view: &surface_view,
                    resolve_target: None,
                    ops: Operations {
                        load: LoadOp::Clear(Color::BLACK),
                        store: StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            self.egui_renderer
                .render(&mut render_pass.forget_lifetime(), &clipped, &screen);
        }

        for id in full_output.textures_delta.free {
            self.egui_renderer.free_texture(&id);
        }

        self.queue.submit(Some(encoder.finish()));
        surface_texture.present();

        full_output
            .viewport_output
            .get(&ViewportId::ROOT)
            .map(|v| v.repaint_delay)
    }
}
