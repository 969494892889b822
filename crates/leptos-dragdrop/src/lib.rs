//! Leptos DragDrop Utilities
//! 
//! Drag items between containers (e.g. cards between list columns) using
//! mouse events. A movement threshold distinguishes click from drag.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// What is being dragged: an item and the container it started in
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DragPayload {
    pub container_id: String,
    pub item_id: String,
}

impl DragPayload {
    pub fn new(container_id: impl Into<String>, item_id: impl Into<String>) -> Self {
        Self {
            container_id: container_id.into(),
            item_id: item_id.into(),
        }
    }
}

/// Drop target types
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DropTarget {
    /// Drop into a container (appended at its end)
    Container(String),
}

impl DropTarget {
    pub fn container_id(&self) -> &str {
        match self {
            DropTarget::Container(id) => id,
        }
    }
}

/// DnD state signals
#[derive(Clone, Copy)]
pub struct DndSignals {
    pub dragging_read: ReadSignal<Option<DragPayload>>,
    pub dragging_write: WriteSignal<Option<DragPayload>>,
    pub drop_target_read: ReadSignal<Option<DropTarget>>,
    pub drop_target_write: WriteSignal<Option<DropTarget>>,
    pub drag_just_ended_read: ReadSignal<bool>,
    pub drag_just_ended_write: WriteSignal<bool>,
    /// Pending payload (mousedown but not yet dragging)
    pub pending_read: ReadSignal<Option<DragPayload>>,
    pub pending_write: WriteSignal<Option<DragPayload>>,
    /// Start position for movement detection
    pub start_x_read: ReadSignal<i32>,
    pub start_x_write: WriteSignal<i32>,
    pub start_y_read: ReadSignal<i32>,
    pub start_y_write: WriteSignal<i32>,
}

/// Movement threshold in pixels to start dragging
const DRAG_THRESHOLD_PX: i32 = 5;

pub fn create_dnd_signals() -> DndSignals {
    let (dragging_read, dragging_write) = signal(None::<DragPayload>);
    let (drop_target_read, drop_target_write) = signal(None::<DropTarget>);
    let (drag_just_ended_read, drag_just_ended_write) = signal(false);
    let (pending_read, pending_write) = signal(None::<DragPayload>);
    let (start_x_read, start_x_write) = signal(0i32);
    let (start_y_read, start_y_write) = signal(0i32);
    DndSignals {
        dragging_read,
        dragging_write,
        drop_target_read,
        drop_target_write,
        drag_just_ended_read,
        drag_just_ended_write,
        pending_read,
        pending_write,
        start_x_read,
        start_x_write,
        start_y_read,
        start_y_write,
    }
}

impl DndSignals {
    /// Is `item_id` the item currently being dragged
    pub fn is_dragging_item(&self, item_id: &str) -> bool {
        self.dragging_read
            .get()
            .is_some_and(|p| p.item_id == item_id)
    }

    /// Is `container_id` the container currently hovered during a drag
    pub fn is_target_container(&self, container_id: &str) -> bool {
        self.drop_target_read
            .get()
            .is_some_and(|t| t.container_id() == container_id)
    }
}

/// End drag operation
pub fn end_drag(dnd: &DndSignals) {
    dnd.dragging_write.set(None);
    dnd.drop_target_write.set(None);
    dnd.pending_write.set(None);
    dnd.drag_just_ended_write.set(true);
    
    if let Some(win) = web_sys::window() {
        let clear = dnd.drag_just_ended_write;
        let cb = wasm_bindgen::closure::Closure::<dyn FnMut()>::new(move || {
            clear.set(false);
        });
        let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(cb.as_ref().unchecked_ref(), 100);
        cb.forget();
    }
}

fn is_form_control(ev: &web_sys::MouseEvent) -> bool {
    ev.target().is_some_and(|target| {
        target.dyn_ref::<web_sys::HtmlInputElement>().is_some()
            || target.dyn_ref::<web_sys::HtmlTextAreaElement>().is_some()
            || target.dyn_ref::<web_sys::HtmlButtonElement>().is_some()
    })
}

/// Create mousedown handler for draggable items
/// Records pending drag with start position
pub fn make_on_mousedown(dnd: DndSignals, payload: DragPayload) -> impl Fn(web_sys::MouseEvent) + Clone + 'static {
    move |ev: web_sys::MouseEvent| {
        if ev.button() == 0 && !is_form_control(&ev) {
            dnd.pending_write.set(Some(payload.clone()));
            dnd.start_x_write.set(ev.client_x());
            dnd.start_y_write.set(ev.client_y());
        }
    }
}

/// Create mousemove handler for document - starts drag if moved enough
pub fn bind_global_mousemove(dnd: DndSignals) {
    use wasm_bindgen::closure::Closure;
    
    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        let pending = dnd.pending_read.get_untracked();
        
        // Pending drag that hasn't started yet
        if pending.is_some() && dnd.dragging_read.get_untracked().is_none() {
            let dx = (ev.client_x() - dnd.start_x_read.get_untracked()).abs();
            let dy = (ev.client_y() - dnd.start_y_read.get_untracked()).abs();
            
            if dx > DRAG_THRESHOLD_PX || dy > DRAG_THRESHOLD_PX {
                dnd.dragging_write.set(pending);
            }
        }
    });
    
    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("mousemove", on_mousemove.as_ref().unchecked_ref());
        }
    }
    on_mousemove.forget();
}

/// Create mouseenter handler for containers (become drop target)
pub fn make_on_container_mouseenter(dnd: DndSignals, container_id: String) -> impl Fn(web_sys::MouseEvent) + Clone + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_read.get_untracked().is_some() {
            dnd.drop_target_write.set(Some(DropTarget::Container(container_id.clone())));
        }
    }
}

/// Create mouseleave handler
pub fn make_on_mouseleave(dnd: DndSignals) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_read.get_untracked().is_some() {
            dnd.drop_target_write.set(None);
        }
    }
}

/// Bind global mouseup handler for drop detection.
///
/// `on_drop` runs when a drag ends over a target; `on_cancel` when it ends anywhere else.
pub fn bind_global_mouseup<F, C>(dnd: DndSignals, on_drop: F, on_cancel: C)
where
    F: Fn(DragPayload, DropTarget) + Clone + 'static,
    C: Fn() + Clone + 'static,
{
    use wasm_bindgen::closure::Closure;
    
    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        let dragging = dnd.dragging_read.get_untracked();
        let drop_target = dnd.drop_target_read.get_untracked();
        
        dnd.pending_write.set(None);
        
        match (dragging, drop_target) {
            (Some(payload), Some(target)) => {
                end_drag(&dnd);
                on_drop(payload, target);
            }
            (Some(_), None) => {
                end_drag(&dnd);
                on_cancel();
            }
            // Not dragging - click event will fire naturally on the element
            _ => end_drag(&dnd),
        }
    });
    
    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("mouseup", on_mouseup.as_ref().unchecked_ref());
        }
    }
    on_mouseup.forget();
    
    bind_global_mousemove(dnd);
}
