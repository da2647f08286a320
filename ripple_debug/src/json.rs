// Copyright 2026 the Ripple Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! JSON exporter.
//!
//! [`export`] writes events captured by a
//! [`RecorderSink`](super::recorder::RecorderSink) as a JSON array, one object
//! per event, in arrival order. Each object has a `"seq"` index, an
//! `"event"` name, the `"view"` it concerns, and event-specific `"args"`.

use std::io::{self, Write};

use serde_json::{Value, json};

use ripple_core::layer::ViewId;

use crate::pretty::{animation_name, reason_name};
use crate::recorder::RecordedEvent;

/// Exports recorded events as a JSON array.
pub fn export(events: &[RecordedEvent], writer: &mut dyn Write) -> io::Result<()> {
    let out: Vec<Value> = events
        .iter()
        .enumerate()
        .map(|(seq, event)| to_value(seq, event))
        .collect();
    serde_json::to_writer_pretty(&mut *writer, &out)?;
    writeln!(writer)?;
    Ok(())
}

fn view(id: ViewId) -> Value {
    json!({ "index": id.index(), "generation": id.generation() })
}

fn to_value(seq: usize, event: &RecordedEvent) -> Value {
    match event {
        RecordedEvent::Appear(e) => json!({
            "seq": seq,
            "event": "appear",
            "view": view(e.view),
            "args": {
                "container": view(e.container),
                "center": [e.center.x, e.center.y],
                "previous": e.previous.map(view),
            }
        }),
        RecordedEvent::Disappear(e) => json!({
            "seq": seq,
            "event": "disappear",
            "view": view(e.view),
            "args": {
                "container": view(e.container),
            }
        }),
        RecordedEvent::Animation(e) => json!({
            "seq": seq,
            "event": "animation",
            "view": view(e.view),
            "args": {
                "kind": animation_name(e.kind),
                "serial": e.serial,
            }
        }),
        RecordedEvent::Interaction(e) => json!({
            "seq": seq,
            "event": "interaction",
            "view": view(e.view),
            "args": {
                "enabled": e.enabled,
                "recognizer": e.recognizer.map(|r| r.0),
            }
        }),
        RecordedEvent::Tap(e) => json!({
            "seq": seq,
            "event": "tap",
            "view": view(e.view),
            "args": {
                "delivered": e.delivered,
            }
        }),
        RecordedEvent::Ignored(e) => json!({
            "seq": seq,
            "event": "ignored",
            "view": view(e.view),
            "args": {
                "reason": reason_name(e.reason),
            }
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Point;
    use ripple_core::trace::{
        AnimationEvent, AnimationEventKind, AppearEvent, IgnoredEvent, IgnoredReason, TraceSink,
    };

    use crate::recorder::RecorderSink;

    #[test]
    fn export_produces_valid_json() {
        let mut rec = RecorderSink::new();
        let ripple = ViewId::from_raw(1, 0);
        rec.on_appear(&AppearEvent {
            view: ripple,
            container: ViewId::from_raw(0, 0),
            center: Point::new(10.0, 20.0),
            previous: None,
        });
        rec.on_animation(&AnimationEvent {
            view: ripple,
            kind: AnimationEventKind::Started,
            serial: 1,
        });
        rec.on_ignored(&IgnoredEvent {
            view: ripple,
            reason: IgnoredReason::AnchorDetached,
        });

        let mut out = Vec::new();
        export(&rec.events(), &mut out).unwrap();
        let json_str = String::from_utf8(out).unwrap();

        let parsed: Vec<Value> = serde_json::from_str(&json_str).unwrap();
        assert_eq!(parsed.len(), 3);
        assert_eq!(parsed[0]["event"], "appear");
        assert_eq!(parsed[0]["args"]["center"], json!([10.0, 20.0]));
        assert!(parsed[0]["args"]["previous"].is_null());
        assert_eq!(parsed[1]["args"]["kind"], "started");
        assert_eq!(parsed[2]["seq"], 2);
        assert_eq!(parsed[2]["args"]["reason"], "anchor-detached");
        assert_eq!(parsed[2]["view"]["index"], 1);
    }

    #[test]
    fn export_empty_recording() {
        let mut out = Vec::new();
        export(&[], &mut out).unwrap();
        let json_str = String::from_utf8(out).unwrap();
        let parsed: Vec<Value> = serde_json::from_str(&json_str).unwrap();
        assert!(parsed.is_empty());
    }
}
