use tracing::trace;

use crate::core::RowModel;
use crate::error::{ChartError, ChartResult};
use crate::interaction::{
    FilterDelta, PointerEvent, PointerTarget, SelectionGeometry, axis_strip_origin,
};
use crate::render::Renderer;

use super::{ChartEngine, InvalidationLevel, PluginEvent};

impl<R: Renderer, M: RowModel> ChartEngine<R, M> {
    /// Pointer pressed. Starts an axis brush drag or a rectangle selection
    /// depending on the hit target. Only one gesture runs at a time.
    pub fn pointer_down(&mut self, event: &PointerEvent) -> ChartResult<()> {
        if self.selection.is_selecting() || self.axes.values().any(|axis| axis.is_dragging()) {
            trace!("pointer down ignored: gesture already in progress");
            return Ok(());
        }

        match &event.target {
            PointerTarget::AxisStrip(column) => {
                let Some(axis_x) = self.layout.position(column) else {
                    return self.require_known_column(column);
                };
                let origin = axis_strip_origin(self.container_origin, axis_x, self.gutter.y);
                if let Some(axis) = self.axes.get_mut(column) {
                    axis.activate(event, origin);
                }
            }
            PointerTarget::SelectionSurface => {
                if self
                    .selection
                    .activate(event, self.container_origin, &mut self.axes)
                {
                    self.emit_plugin_event(PluginEvent::SelectionStarted);
                    self.flush_redraw(InvalidationLevel::Overlay);
                }
            }
            PointerTarget::Other => {}
        }
        Ok(())
    }

    /// Pointer moved. Extends whichever gesture is active and redraws once.
    pub fn pointer_move(&mut self, event: &PointerEvent) -> ChartResult<()> {
        let mut deltas: Vec<FilterDelta> = Vec::new();
        let mut level = InvalidationLevel::None;

        let pixel_span = self.pixel_span();
        if let Some((column, axis)) = self.axes.iter_mut().find(|(_, axis)| axis.is_dragging()) {
            match self.layout.position(column) {
                Some(axis_x) => {
                    let origin = axis_strip_origin(self.container_origin, axis_x, self.gutter.y);
                    deltas.extend(axis.on_pointer_move(event, origin, pixel_span)?);
                }
                // Hidden mid-drag by a rearrange.
                None => axis.deactivate(),
            }
        }

        if self.selection.is_selecting() {
            let geometry = SelectionGeometry {
                gutter_y: self.gutter.y,
                pixel_span,
            };
            deltas.extend(self.selection.on_pointer_move(
                event,
                self.container_origin,
                &mut self.axes,
                &self.layout,
                geometry,
            )?);
            level = InvalidationLevel::Overlay;
        }

        level = level.max(self.apply_filter_deltas(deltas));
        self.flush_redraw(level);
        Ok(())
    }

    /// Pointer released anywhere. Ends axis drags and commits a rectangle
    /// selection. A release without a matching press does nothing.
    pub fn pointer_up(&mut self, event: &PointerEvent) -> ChartResult<()> {
        for axis in self.axes.values_mut().filter(|axis| axis.is_dragging()) {
            axis.deactivate();
        }

        if !self.selection.is_selecting() {
            return Ok(());
        }
        let geometry = SelectionGeometry {
            gutter_y: self.gutter.y,
            pixel_span: self.pixel_span(),
        };
        let deltas = self.selection.on_pointer_up(
            event,
            self.container_origin,
            &mut self.axes,
            &self.layout,
            geometry,
        )?;
        let spanned = deltas
            .iter()
            .filter(|delta| matches!(delta, FilterDelta::Add(_)))
            .count();
        let level = self.apply_filter_deltas(deltas);
        self.emit_plugin_event(PluginEvent::SelectionEnded { spanned });
        // The overlay must be cleared even when no filter changed.
        self.flush_redraw(level.max(InvalidationLevel::Overlay));
        Ok(())
    }

    /// Pointer left the strip of `column`; its drag ends, its brush stays.
    pub fn pointer_leave_axis(&mut self, column: &str) -> ChartResult<()> {
        let axis = self
            .axes
            .get_mut(column)
            .ok_or_else(|| ChartError::UnknownColumn(column.to_owned()))?;
        axis.deactivate();
        Ok(())
    }

    /// Pointer left the chart; every axis drag ends. A rectangle selection
    /// keeps running until the pointer is released.
    pub fn pointer_leave(&mut self) {
        for axis in self.axes.values_mut() {
            axis.deactivate();
        }
    }

    /// Abandons a running rectangle selection, e.g. on Escape. Preview
    /// brushes are removed and committed brushes stay.
    pub fn cancel_selection(&mut self) {
        if !self.selection.is_selecting() {
            return;
        }
        let deltas = self.selection.cancel(&mut self.axes);
        let level = self.apply_filter_deltas(deltas);
        self.emit_plugin_event(PluginEvent::SelectionEnded { spanned: 0 });
        self.flush_redraw(level.max(InvalidationLevel::Overlay));
    }

    /// Double click on an axis strip clears that axis's brush.
    pub fn double_click(&mut self, event: &PointerEvent) -> ChartResult<()> {
        match &event.target {
            PointerTarget::AxisStrip(column) => {
                let column = column.clone();
                self.clear_axis_filter(&column)
            }
            PointerTarget::SelectionSurface | PointerTarget::Other => Ok(()),
        }
    }

    fn require_known_column(&self, column: &str) -> ChartResult<()> {
        if self.axes.contains_key(column) {
            trace!(column, "pointer down on hidden axis ignored");
            Ok(())
        } else {
            Err(ChartError::UnknownColumn(column.to_owned()))
        }
    }
}
