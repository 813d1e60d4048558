//! Webview bridge.
//!
//! A long-lived script forwards window-level events (scroll, pointer
//! movement, keys, resize, unload) and measured element geometry to the
//! runtime, and plays back host effects and animation-frame requests.
//!
//! Messages to Rust are either `"frame"` (an animation frame fired) or
//! `{ "event": <PageEvent> }`. Messages to the script carry an `op`.

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use folio_core::{Effect, Job, PageEvent, Wakeup};
use futures::channel::mpsc::UnboundedReceiver;
use futures::StreamExt;
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;

use crate::context::Folio;

const BRIDGE_JS: &str = r#"
const byId = (id) => document.querySelector(`[data-folio-id="${id}"]`);
const emit = (event) => dioxus.send({ event });

const measure = () => {
  const rects = [];
  document.querySelectorAll("[data-folio-id]").forEach((el) => {
    const box = el.getBoundingClientRect();
    rects.push({ id: Number(el.dataset.folioId), top: box.top + window.scrollY, height: box.height });
  });
  emit({ kind: "resize", width: window.innerWidth, height: window.innerHeight });
  emit({ kind: "layout", rects });
};

const play = (effect) => {
  switch (effect.kind) {
    case "notice":
      window.alert(effect.message);
      break;
    case "animate": {
      const el = byId(effect.target);
      if (el) el.animate([effect.keyframe], { duration: effect.duration_ms, fill: effect.fill });
      break;
    }
    case "scroll_into_view": {
      const el = byId(effect.target);
      if (el) el.scrollIntoView({ behavior: effect.smooth ? "smooth" : "auto", block: effect.block });
      break;
    }
    case "init_scroll_reveal":
      if (window.AOS) window.AOS.init(effect);
      break;
  }
};

window.addEventListener("scroll", () => emit({ kind: "scroll", y: window.scrollY }), { passive: true });
window.addEventListener("mousemove", (e) => emit({ kind: "mouse_move", x: e.clientX, y: e.clientY }));
window.addEventListener("keydown", (e) => emit({ kind: "key_down", code: e.code }));
window.addEventListener("resize", measure);
window.addEventListener("beforeunload", () => emit({ kind: "before_unload" }));

// Let the first render land before measuring
await new Promise((resolve) => requestAnimationFrame(() => requestAnimationFrame(resolve)));
measure();
emit({ kind: "dom_content_loaded" });
emit({ kind: "load" });
emit({ kind: "scroll", y: window.scrollY });

while (true) {
  const command = await dioxus.recv();
  switch (command.op) {
    case "frame":
      requestAnimationFrame(() => dioxus.send("frame"));
      break;
    case "effect":
      play(command.effect);
      break;
  }
}
"#;

/// From the script
#[derive(Debug, PartialEq, Deserialize)]
#[serde(rename_all = "snake_case")]
enum HostMessage {
    Frame,
    Event(PageEvent),
}

/// To the script
#[derive(Debug, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
enum JsCommand {
    /// Request one animation frame
    Frame,
    Effect { effect: Effect },
}

/// Commands from UI event handlers
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BridgeCommand {
    /// Play back effects queued by a dispatch
    Flush,
}

/// Starts the bridge. `wakeups` is taken on first start; the scheduler's
/// receiver cannot be shared.
pub fn use_bridge(
    portfolio: Signal<Folio>,
    wakeups: Rc<RefCell<Option<mpsc::UnboundedReceiver<Wakeup>>>>,
) -> Coroutine<BridgeCommand> {
    use_coroutine(move |commands: UnboundedReceiver<BridgeCommand>| {
        let taken = wakeups.borrow_mut().take();
        async move {
            let Some(wakeups) = taken else {
                tracing::warn!("Bridge restarted without a wakeup channel");
                return;
            };
            run(portfolio, commands, wakeups).await;
        }
    })
}

async fn run(
    mut portfolio: Signal<Folio>,
    mut commands: UnboundedReceiver<BridgeCommand>,
    mut wakeups: mpsc::UnboundedReceiver<Wakeup>,
) {
    let mut eval = document::eval(BRIDGE_JS);
    let mut frame_jobs: Vec<Job> = Vec::new();
    tracing::info!("Bridge started");

    loop {
        tokio::select! {
            command = commands.next() => match command {
                Some(BridgeCommand::Flush) => {}
                None => break,
            },
            wakeup = wakeups.recv() => match wakeup {
                Some(Wakeup::Timer(job)) => portfolio.write().run_job(job),
                Some(Wakeup::Frame(job)) => {
                    if frame_jobs.is_empty() {
                        send(&eval, &JsCommand::Frame);
                    }
                    frame_jobs.push(job);
                }
                None => break,
            },
            message = eval.recv::<HostMessage>() => match message {
                Ok(HostMessage::Frame) => {
                    let mut folio = portfolio.write();
                    for job in frame_jobs.drain(..) {
                        folio.run_job(job);
                    }
                }
                Ok(HostMessage::Event(event)) => {
                    portfolio.write().dispatch(event);
                }
                Err(e) => {
                    tracing::error!("Bridge script stopped: {:?}", e);
                    break;
                }
            },
        }

        if portfolio.peek().page().effects().is_empty() {
            continue;
        }
        let effects = portfolio.write().drain_effects();
        for effect in effects {
            send(&eval, &JsCommand::Effect { effect });
        }
    }
    tracing::info!("Bridge stopped");
}

fn send(eval: &document::Eval, command: &JsCommand) {
    let value = match serde_json::to_value(command) {
        Ok(value) => value,
        Err(e) => {
            tracing::error!("Failed to encode {:?}: {}", command, e);
            return;
        }
    };
    if let Err(e) = eval.send(value) {
        tracing::warn!("Failed to reach bridge script: {:?}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::ElementId;

    #[test]
    fn test_host_messages_decode() {
        let frame: HostMessage = serde_json::from_str(r#""frame""#).unwrap();
        assert_eq!(frame, HostMessage::Frame);

        let scroll: HostMessage =
            serde_json::from_str(r#"{"event":{"kind":"scroll","y":120.5}}"#).unwrap();
        assert_eq!(scroll, HostMessage::Event(PageEvent::Scroll { y: 120.5 }));

        let key: HostMessage =
            serde_json::from_str(r#"{"event":{"kind":"key_down","code":"KeyB"}}"#).unwrap();
        assert_eq!(
            key,
            HostMessage::Event(PageEvent::KeyDown {
                code: "KeyB".to_string()
            })
        );
    }

    #[test]
    fn test_layout_message_carries_rects() {
        let json = r#"{"event":{"kind":"layout","rects":[{"id":4,"top":900.0,"height":50.0}]}}"#;
        let HostMessage::Event(PageEvent::Layout { rects }) = serde_json::from_str(json).unwrap()
        else {
            panic!("expected a layout event");
        };
        assert_eq!(rects.len(), 1);
        assert_eq!(rects[0].id, ElementId(4));
        assert_eq!(rects[0].rect().bottom(), 950.0);
    }

    #[test]
    fn test_commands_encode_with_op() {
        let frame = serde_json::to_value(JsCommand::Frame).unwrap();
        assert_eq!(frame, serde_json::json!({ "op": "frame" }));

        let notice = serde_json::to_value(JsCommand::Effect {
            effect: Effect::notice("Thanks"),
        })
        .unwrap();
        assert_eq!(
            notice,
            serde_json::json!({
                "op": "effect",
                "effect": { "kind": "notice", "message": "Thanks" }
            })
        );
    }
}
