// Copyright 2026 the Ripple Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable trace output.
//!
//! [`PrettyPrintSink`] implements [`TraceSink`] and writes one line per event
//! to a [`Write`](std::io::Write) destination (default: stderr). Lines are
//! numbered in arrival order.

use std::io::Write;

use ripple_core::layer::ViewId;
use ripple_core::trace::{
    AnimationEvent, AnimationEventKind, AppearEvent, DisappearEvent, IgnoredEvent, IgnoredReason,
    InteractionEvent, TapDeliveryEvent, TraceSink,
};

/// Writes human-readable trace lines to a [`Write`](std::io::Write) destination.
pub struct PrettyPrintSink<W: Write = Box<dyn Write>> {
    writer: W,
    seq: u64,
}

impl<W: Write> std::fmt::Debug for PrettyPrintSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrettyPrintSink")
            .field("seq", &self.seq)
            .finish_non_exhaustive()
    }
}

impl PrettyPrintSink {
    /// Creates a sink that writes to stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self::new(Box::new(std::io::stderr()))
    }

    /// Creates a sink that writes to a boxed writer.
    #[must_use]
    pub fn new(writer: Box<dyn Write>) -> Self {
        Self { writer, seq: 0 }
    }
}

impl<W: Write> PrettyPrintSink<W> {
    /// Creates a sink that writes to the given destination.
    #[must_use]
    pub fn with_writer(writer: W) -> Self {
        Self { writer, seq: 0 }
    }

    /// Consumes the sink and returns its writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn next_seq(&mut self) -> u64 {
        self.seq += 1;
        self.seq
    }
}

pub(crate) fn animation_name(kind: AnimationEventKind) -> &'static str {
    match kind {
        AnimationEventKind::Started => "started",
        AnimationEventKind::Restarted => "restarted",
        AnimationEventKind::Stopped => "stopped",
        AnimationEventKind::Discarded => "discarded",
    }
}

pub(crate) fn reason_name(reason: IgnoredReason) -> String {
    match reason {
        IgnoredReason::ContainerRejected => "container-rejected".into(),
        IgnoredReason::AnchorDetached => "anchor-detached".into(),
        IgnoredReason::BarItemUnresolved => "bar-item-unresolved".into(),
        IgnoredReason::RecognizerUnavailable => "recognizer-unavailable".into(),
        IgnoredReason::TapNotArmed => "tap-not-armed".into(),
        IgnoredReason::InvalidConfig(field) => format!("invalid-config:{field:?}"),
    }
}

fn opt_view(v: Option<ViewId>) -> String {
    v.map_or_else(|| "-".into(), |v| format!("{v:?}"))
}

impl<W: Write> TraceSink for PrettyPrintSink<W> {
    fn on_appear(&mut self, e: &AppearEvent) {
        let seq = self.next_seq();
        let _ = writeln!(
            self.writer,
            "#{seq} [appear] view={:?} container={:?} center=({:.1}, {:.1}) from={}",
            e.view,
            e.container,
            e.center.x,
            e.center.y,
            opt_view(e.previous),
        );
    }

    fn on_disappear(&mut self, e: &DisappearEvent) {
        let seq = self.next_seq();
        let _ = writeln!(
            self.writer,
            "#{seq} [disappear] view={:?} container={:?}",
            e.view, e.container,
        );
    }

    fn on_animation(&mut self, e: &AnimationEvent) {
        let seq = self.next_seq();
        let _ = writeln!(
            self.writer,
            "#{seq} [animation] view={:?} {} serial={}",
            e.view,
            animation_name(e.kind),
            e.serial,
        );
    }

    fn on_interaction(&mut self, e: &InteractionEvent) {
        let seq = self.next_seq();
        let state = if e.enabled { "on" } else { "off" };
        let recognizer = e
            .recognizer
            .map_or_else(|| "-".into(), |r| format!("{r:?}"));
        let _ = writeln!(
            self.writer,
            "#{seq} [interaction] view={:?} {state} recognizer={recognizer}",
            e.view,
        );
    }

    fn on_tap(&mut self, e: &TapDeliveryEvent) {
        let seq = self.next_seq();
        let outcome = if e.delivered { "delivered" } else { "dropped" };
        let _ = writeln!(self.writer, "#{seq} [tap] view={:?} {outcome}", e.view);
    }

    fn on_ignored(&mut self, e: &IgnoredEvent) {
        let seq = self.next_seq();
        let _ = writeln!(
            self.writer,
            "#{seq} [ignored] view={:?} {}",
            e.view,
            reason_name(e.reason),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Point;
    use ripple_core::trace::ConfigField;

    #[test]
    fn pretty_print_appear() {
        let mut sink = PrettyPrintSink::with_writer(Vec::<u8>::new());
        sink.on_appear(&AppearEvent {
            view: ViewId::from_raw(2, 0),
            container: ViewId::from_raw(0, 0),
            center: Point::new(12.0, 34.5),
            previous: None,
        });
        let output = String::from_utf8(sink.into_inner()).unwrap();
        assert!(output.starts_with("#1 [appear]"), "got: {output}");
        assert!(output.contains("center=(12.0, 34.5)"), "got: {output}");
        assert!(output.contains("from=-"), "got: {output}");
    }

    #[test]
    fn lines_are_numbered() {
        let mut sink = PrettyPrintSink::with_writer(Vec::<u8>::new());
        let view = ViewId::from_raw(1, 0);
        sink.on_animation(&AnimationEvent {
            view,
            kind: AnimationEventKind::Restarted,
            serial: 4,
        });
        sink.on_ignored(&IgnoredEvent {
            view,
            reason: IgnoredReason::InvalidConfig(ConfigField::RingScale),
        });
        let output = String::from_utf8(sink.into_inner()).unwrap();
        let lines: Vec<_> = output.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("restarted serial=4"), "got: {}", lines[0]);
        assert!(lines[1].starts_with("#2 [ignored]"), "got: {}", lines[1]);
        assert!(lines[1].contains("invalid-config:RingScale"), "got: {}", lines[1]);
    }
}
