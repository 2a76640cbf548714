use tracing::{debug, error, trace, warn};

use crate::animation::{AnimationPhase, AnimationState, FrameRequestId, FrameScheduler};
use crate::core::AXIS_COUNT;
use crate::error::{ChartError, ChartResult};
use crate::render::Renderer;

use super::{
    ChartSnapshot, RadarChartOptions, RadarEngineSnapshot, RadarGeometry, RadarStyle,
    build_radar_render_frame,
};

/// Per-chart animation and geometry engine.
///
/// Owns the animation state exclusively and drives it through the host's
/// `FrameScheduler`. Every chart gets its own engine; nothing is shared
/// between instances.
///
/// Lifecycle:
/// - `configure` with changed data cancels the in-flight frame and requests a new one
/// - the host delivers due frames to `on_animation_frame`, which re-requests
///   while the transition is still running
/// - `dispose` (also run on drop) cancels whatever frame is still pending
pub struct RadarChartEngine<S: FrameScheduler> {
    scheduler: S,
    options: RadarChartOptions,
    style: RadarStyle,
    snapshot: Option<ChartSnapshot>,
    animation: AnimationState,
    pending_frame: Option<FrameRequestId>,
    configuration_error: Option<ChartError>,
}

impl<S: FrameScheduler> RadarChartEngine<S> {
    #[must_use]
    pub fn new(scheduler: S) -> Self {
        let options = RadarChartOptions::default();
        Self {
            scheduler,
            options,
            style: RadarStyle::default(),
            snapshot: None,
            animation: AnimationState::settled([0.0; AXIS_COUNT], options.animation_duration_ms),
            pending_frame: None,
            configuration_error: None,
        }
    }

    pub fn with_style(mut self, style: RadarStyle) -> ChartResult<Self> {
        self.set_style(style)?;
        Ok(self)
    }

    /// Accepts a new `(data, labels)` pair together with the chart options.
    ///
    /// Fails with `ChartError::Configuration` when either slice does not hold
    /// exactly six entries; the engine then refuses to produce geometry until
    /// the next successful call.
    pub fn configure<L: AsRef<str>>(
        &mut self,
        data: &[f64],
        labels: &[L],
        options: RadarChartOptions,
        now_ms: f64,
    ) -> ChartResult<()> {
        match ChartSnapshot::from_slices(data, labels) {
            Ok(snapshot) => self.apply_snapshot(snapshot, options, now_ms),
            Err(err) => {
                error!(error = %err, "rejecting radar configuration");
                self.cancel_pending_frame();
                self.configuration_error = Some(err.clone());
                Err(err)
            }
        }
    }

    /// Same as `configure` for an already validated snapshot.
    pub fn apply_snapshot(
        &mut self,
        snapshot: ChartSnapshot,
        options: RadarChartOptions,
        now_ms: f64,
    ) -> ChartResult<()> {
        if let Err(err) = options.validate() {
            warn!(error = %err, "ignoring radar configuration with invalid options");
            return Err(err);
        }
        self.options = options;
        self.configuration_error = None;

        let target = *snapshot.data();
        let previous = self.snapshot.replace(snapshot);
        let changed = previous
            .as_ref()
            .is_none_or(|previous| !previous.has_same_data(&target));

        if !changed {
            trace!("radar data unchanged; animation left as is");
            // A rejected configuration may have cancelled a running transition.
            if self.animation.is_running() && self.pending_frame.is_none() {
                self.pending_frame = Some(self.scheduler.request_frame());
            }
            return Ok(());
        }

        self.cancel_pending_frame();
        let duration_ms = options.animation_duration_ms;

        if previous.is_none() {
            // First snapshot: grow from the center. An all-zero first snapshot
            // starts on its own targets and is complete immediately.
            if target.iter().all(|value| *value == 0.0) {
                debug!("first radar snapshot is all zero; settling without animation");
                self.animation = AnimationState::settled(target, duration_ms);
                return Ok(());
            }
            self.animation = AnimationState::begin([0.0; AXIS_COUNT], target, now_ms, duration_ms);
        } else {
            let start = self.animation.current_values();
            self.animation = AnimationState::begin(start, target, now_ms, duration_ms);
        }

        let frame = self.scheduler.request_frame();
        self.pending_frame = Some(frame);
        debug!(
            frame = frame.get(),
            start_time_ms = now_ms,
            duration_ms,
            "radar animation started"
        );
        Ok(())
    }

    /// Evaluates the animation at `now_ms` and returns the resulting geometry.
    ///
    /// Completing the transition cancels any frame still pending; later ticks
    /// return the same geometry until the data changes again.
    pub fn tick(&mut self, now_ms: f64) -> ChartResult<RadarGeometry> {
        self.ensure_configured()?;
        let phase = self.animation.advance(now_ms);
        trace!(now_ms, ?phase, "radar tick");
        if phase == AnimationPhase::Complete {
            self.cancel_pending_frame();
        }
        self.geometry()
    }

    /// Frame callback delivered by the host clock.
    ///
    /// Returns `Ok(None)` for frames the engine is no longer waiting for, so a
    /// superseded or cancelled callback never touches state. A rejected
    /// configuration is reported before the frame id is looked at.
    pub fn on_animation_frame(
        &mut self,
        frame: FrameRequestId,
        now_ms: f64,
    ) -> ChartResult<Option<RadarGeometry>> {
        self.ensure_configured()?;
        if self.pending_frame != Some(frame) {
            trace!(frame = frame.get(), "ignoring stale radar frame");
            return Ok(None);
        }
        self.pending_frame = None;

        let geometry = self.tick(now_ms)?;
        if self.animation.is_running() {
            self.pending_frame = Some(self.scheduler.request_frame());
        }
        Ok(Some(geometry))
    }

    /// Geometry of the currently displayed values, without advancing time.
    pub fn geometry(&self) -> ChartResult<RadarGeometry> {
        self.ensure_configured()?;
        let snapshot = self.snapshot.as_ref().ok_or(ChartError::Configuration {
            data_len: 0,
            labels_len: 0,
        })?;
        Ok(RadarGeometry::build(
            &self.animation.current_values(),
            snapshot.labels(),
            self.options.size,
            self.options.max_value,
        ))
    }

    /// Ticks and hands the resulting frame to `renderer`.
    pub fn render<R: Renderer>(&mut self, renderer: &mut R, now_ms: f64) -> ChartResult<()> {
        let geometry = self.tick(now_ms)?;
        let frame = build_radar_render_frame(&geometry, self.options.color, &self.style);
        renderer.render(&frame)
    }

    /// Cancels the pending frame. Further frames are only requested by a
    /// later `configure` with changed data.
    pub fn dispose(&mut self) {
        if let Some(frame) = self.pending_frame {
            debug!(frame = frame.get(), "disposing radar engine with pending frame");
        }
        self.cancel_pending_frame();
    }

    #[must_use]
    pub fn options(&self) -> RadarChartOptions {
        self.options
    }

    #[must_use]
    pub fn style(&self) -> RadarStyle {
        self.style
    }

    pub fn set_style(&mut self, style: RadarStyle) -> ChartResult<()> {
        style.validate()?;
        self.style = style;
        Ok(())
    }

    #[must_use]
    pub fn chart_snapshot(&self) -> Option<&ChartSnapshot> {
        self.snapshot.as_ref()
    }

    #[must_use]
    pub fn animation(&self) -> &AnimationState {
        &self.animation
    }

    #[must_use]
    pub fn current_values(&self) -> [f64; AXIS_COUNT] {
        self.animation.current_values()
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.animation.is_running()
    }

    #[must_use]
    pub fn pending_frame(&self) -> Option<FrameRequestId> {
        self.pending_frame
    }

    #[must_use]
    pub fn configuration_error(&self) -> Option<&ChartError> {
        self.configuration_error.as_ref()
    }

    #[must_use]
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    /// Serializable state dump for diagnostics and regression fixtures.
    #[must_use]
    pub fn snapshot(&self) -> RadarEngineSnapshot {
        RadarEngineSnapshot {
            options: self.options,
            labels: self
                .snapshot
                .as_ref()
                .map(|snapshot| snapshot.labels().to_vec())
                .unwrap_or_default(),
            animation: self.animation,
            pending_frame: self.pending_frame,
            configuration_error: self.configuration_error.as_ref().map(ToString::to_string),
        }
    }

    fn ensure_configured(&self) -> ChartResult<()> {
        if let Some(err) = &self.configuration_error {
            return Err(err.clone());
        }
        if self.snapshot.is_none() {
            return Err(ChartError::Configuration {
                data_len: 0,
                labels_len: 0,
            });
        }
        Ok(())
    }

    fn cancel_pending_frame(&mut self) {
        if let Some(frame) = self.pending_frame.take() {
            self.scheduler.cancel_frame(frame);
        }
    }
}

impl<S: FrameScheduler> Drop for RadarChartEngine<S> {
    fn drop(&mut self) {
        self.dispose();
    }
}
