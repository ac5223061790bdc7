use log::{debug, info, trace, warn};

use crate::controllers::spiral::errors::SpiralPanError;
use crate::controllers::spiral::ports::presenter::FramePresenterPort;
use crate::core::actions::render_line::render_line::LineRenderer;
use crate::core::actions::scroll_and_redraw::scroll_and_redraw::scroll_and_redraw;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::fractals::mandelbrot::algorithm::FixedPointMandelbrot;
use crate::core::fractals::mandelbrot::colour_map::GreyscaleColourMap;
use crate::core::fractals::mandelbrot::mandelbrot_config::MandelbrotConfig;
use crate::core::spiral::direction::{Direction, select_direction};
use crate::core::spiral::pan_state::PanState;

const PROGRESS_LOG_INTERVAL_FRAMES: u64 = 1000;

pub struct SpiralPanController<P: FramePresenterPort> {
    config: MandelbrotConfig,
    renderer: LineRenderer<FixedPointMandelbrot, GreyscaleColourMap>,
    buffer: PixelBuffer,
    state: PanState,
    presenter: P,
    frames: u64,
}

impl<P: FramePresenterPort> SpiralPanController<P> {
    pub fn new(config: MandelbrotConfig, presenter: P) -> Result<Self, SpiralPanError> {
        config.validate()?;

        Ok(Self {
            config,
            renderer: LineRenderer::new(FixedPointMandelbrot, GreyscaleColourMap, config.pixel_size),
            buffer: PixelBuffer::new(config.width, config.height)?,
            state: PanState::new(config.upper_left, config.radius),
            presenter,
            frames: 0,
        })
    }

    /// Renders the whole first frame and presents it.
    pub fn start(&mut self) -> Result<(), SpiralPanError> {
        info!(
            "rendering {}x{} view at {} (step {}, radius {})",
            self.config.width,
            self.config.height,
            self.state.upper_left,
            self.config.pixel_size,
            self.config.radius
        );

        self.renderer
            .render_frame(&mut self.buffer, self.state.upper_left)?;

        self.present()
    }

    /// Advances the spiral by one frame and presents it.
    pub fn step(&mut self) -> Result<Direction, SpiralPanError> {
        let direction = select_direction(self.state.offset, self.state.previous, self.config.radius);

        scroll_and_redraw(&mut self.buffer, &mut self.state, direction, &self.renderer)?;
        self.frames += 1;

        trace!(
            "frame {}: {} to offset ({}, {})",
            self.frames, direction, self.state.offset.cx, self.state.offset.cy
        );

        if self.frames % PROGRESS_LOG_INTERVAL_FRAMES == 0 {
            debug!(
                "frame {}: upper-left {}, radius² drift {}",
                self.frames,
                self.state.upper_left,
                self.radius_drift()
            );
        }

        self.present()?;

        Ok(direction)
    }

    /// Compares the incrementally maintained buffer with a from-scratch render.
    pub fn verify(&self) -> Result<(), SpiralPanError> {
        let mut reference = PixelBuffer::new(self.config.width, self.config.height)?;
        self.renderer
            .render_frame(&mut reference, self.state.upper_left)?;

        match self.buffer.first_mismatch(&reference) {
            None => Ok(()),
            Some(pixel) => {
                warn!(
                    "frame {} diverged from the full render at x:{}, y:{}",
                    self.frames, pixel.x, pixel.y
                );
                Err(SpiralPanError::IncrementalMismatch {
                    frame: self.frames,
                    pixel,
                })
            }
        }
    }

    /// Squared distance from the point of interest minus the target radius².
    #[must_use]
    pub fn radius_drift(&self) -> i64 {
        let radius = i64::from(self.config.radius);
        self.state.offset.distance_sqr() - radius * radius
    }

    fn present(&mut self) -> Result<(), SpiralPanError> {
        self.presenter
            .present(&self.buffer)
            .map_err(|err| SpiralPanError::Present(Box::new(err)))
    }

    #[must_use]
    pub fn buffer(&self) -> &PixelBuffer {
        &self.buffer
    }

    #[must_use]
    pub fn state(&self) -> &PanState {
        &self.state
    }

    #[must_use]
    pub fn config(&self) -> &MandelbrotConfig {
        &self.config
    }

    #[must_use]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    #[must_use]
    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }
}
