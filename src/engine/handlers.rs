//! Handler registry - optional per-node callbacks for pointer events.
//!
//! Notification handlers (`on_inside`, `on_enter`, `on_leave`) return
//! nothing. Bubbling handlers return `true` to let the event continue to the
//! parent and `false` to stop it. A missing bubbling handler never stops
//! propagation.
//!
//! ```ignore
//! tree.set_handlers(button, MouseHandlers {
//!     on_click_in: Some(Rc::new(|tree, event| {
//!         tree.style_mut(event.node).map(|s| s.set_color(Rgba::RED));
//!         false
//!     })),
//!     ..Default::default()
//! });
//! ```

use std::rc::Rc;

use super::node::NodeId;
use super::tree::Tree;
use crate::types::MouseButton;

/// Event passed to every handler.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    /// Node whose handler is being invoked.
    pub node: NodeId,
    pub x: f32,
    pub y: f32,
    /// Button for down/up/click events.
    pub button: Option<MouseButton>,
}

pub type NotifyHandler = Rc<dyn Fn(&mut Tree, &PointerEvent)>;
pub type BubbleHandler = Rc<dyn Fn(&mut Tree, &PointerEvent) -> bool>;

#[derive(Default, Clone)]
pub struct MouseHandlers {
    /// Every move that lands inside the node.
    pub on_inside: Option<NotifyHandler>,
    /// Pointer crossed into the node.
    pub on_enter: Option<NotifyHandler>,
    /// Pointer crossed out of the node.
    pub on_leave: Option<NotifyHandler>,
    /// Node joined the hovered chain.
    pub on_over: Option<BubbleHandler>,
    /// Node left the hovered chain.
    pub on_out: Option<BubbleHandler>,
    pub on_down: Option<BubbleHandler>,
    pub on_up: Option<BubbleHandler>,
    /// Press and release both happened over the node.
    pub on_click_in: Option<BubbleHandler>,
    /// Press happened on the node, release happened elsewhere.
    pub on_click_out: Option<BubbleHandler>,
}

/// Notification slot selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Notify {
    Inside,
    Enter,
    Leave,
}

/// Bubbling slot selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Bubble {
    Over,
    Out,
    Down,
    Up,
    ClickIn,
    ClickOut,
}

impl MouseHandlers {
    pub(crate) fn notify(&self, slot: Notify) -> Option<NotifyHandler> {
        match slot {
            Notify::Inside => self.on_inside.clone(),
            Notify::Enter => self.on_enter.clone(),
            Notify::Leave => self.on_leave.clone(),
        }
    }

    pub(crate) fn bubble(&self, slot: Bubble) -> Option<BubbleHandler> {
        match slot {
            Bubble::Over => self.on_over.clone(),
            Bubble::Out => self.on_out.clone(),
            Bubble::Down => self.on_down.clone(),
            Bubble::Up => self.on_up.clone(),
            Bubble::ClickIn => self.on_click_in.clone(),
            Bubble::ClickOut => self.on_click_out.clone(),
        }
    }
}

impl std::fmt::Debug for MouseHandlers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MouseHandlers")
            .field("on_inside", &self.on_inside.is_some())
            .field("on_enter", &self.on_enter.is_some())
            .field("on_leave", &self.on_leave.is_some())
            .field("on_over", &self.on_over.is_some())
            .field("on_out", &self.on_out.is_some())
            .field("on_down", &self.on_down.is_some())
            .field("on_up", &self.on_up.is_some())
            .field("on_click_in", &self.on_click_in.is_some())
            .field("on_click_out", &self.on_click_out.is_some())
            .finish()
    }
}
