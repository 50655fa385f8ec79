use bevy::diagnostic::{DiagnosticsStore, FrameTimeDiagnosticsPlugin};
use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::engine::camera::responsive_camera::{CameraRetargeted, ResponsiveCamera};
use crate::engine::core::app_state::AppState;
use crate::engine::core::config::ShowcaseConfig;
use crate::engine::systems::debug_params::{DebugParamEvent, DebugParamKey, DebugParams};
use crate::engine::systems::heading_visibility::{HeadingState, HeadingVisibility};

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsValue;

#[cfg(target_arch = "wasm32")]
use web_sys::{MessageEvent, window};

/// JSON-RPC 2.0 request structure.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RpcRequest {
    pub jsonrpc: String,
    pub method: String,
    #[serde(default)]
    pub params: serde_json::Value,
    pub id: Option<serde_json::Value>,
}

/// JSON-RPC 2.0 response structure.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RpcResponse {
    pub jsonrpc: String,
    pub result: Option<serde_json::Value>,
    pub error: Option<RpcError>,
    pub id: Option<serde_json::Value>,
}

/// JSON-RPC 2.0 notification structure for one-way communication.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RpcNotification {
    pub jsonrpc: String,
    pub method: String,
    pub params: serde_json::Value,
}

/// JSON-RPC 2.0 error object.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RpcError {
    pub code: i32,
    pub message: String,
    pub data: Option<serde_json::Value>,
}

/// Resource managing bidirectional RPC communication between the host page
/// and the showcase.
#[derive(Resource, Default)]
pub struct WebRpcInterface {
    outgoing_notifications: Vec<RpcNotification>,
    outgoing_responses: Vec<RpcResponse>,
}

impl WebRpcInterface {
    /// Send notification to the host page without expecting a response.
    pub fn send_notification(&mut self, method: &str, params: serde_json::Value) {
        self.outgoing_notifications.push(RpcNotification {
            jsonrpc: "2.0".to_string(),
            method: method.to_string(),
            params,
        });
    }

    fn queue_response(&mut self, response: RpcResponse) {
        self.outgoing_responses.push(response);
    }
}

/// Plugin establishing the postMessage bridge for iframe-based deployment.
pub struct WebRpcPlugin;

impl Plugin for WebRpcPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<WebRpcInterface>()
            .add_event::<IncomingRpcMessage>()
            .add_systems(
                Update,
                (
                    process_incoming_messages,
                    handle_rpc_messages,
                    notify_debug_mode.run_if(resource_added::<ShowcaseConfig>),
                    notify_camera_retargeted,
                    notify_heading_visibility,
                    send_outgoing_messages,
                )
                    .chain(),
            )
            .add_systems(OnEnter(AppState::Running), notify_scene_ready);

        #[cfg(target_arch = "wasm32")]
        app.add_systems(Startup, setup_message_listener);
    }
}

#[cfg(target_arch = "wasm32")]
fn setup_message_listener(mut commands: Commands) {
    use std::sync::Arc;
    use std::sync::Mutex;

    // Browser callbacks push here; the ECS drains it once per frame.
    let message_queue: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
    let queue_clone = message_queue.clone();

    let closure = Closure::wrap(Box::new(move |event: MessageEvent| {
        if let Ok(data) = event.data().dyn_into::<js_sys::JsString>() {
            let message_str: String = data.into();

            if message_str.contains("jsonrpc") {
                if let Ok(mut queue) = queue_clone.lock() {
                    queue.push(message_str);
                }
            }
        }
    }) as Box<dyn FnMut(MessageEvent)>);

    if let Some(window) = window() {
        if let Err(e) =
            window.add_event_listener_with_callback("message", closure.as_ref().unchecked_ref())
        {
            error!("Failed to register message listener: {:?}", e);
            return;
        }
    }

    // Ownership moves to JS; the listener lives as long as the page.
    closure.forget();
    commands.insert_resource(MessageQueue(message_queue));
}

#[derive(Resource)]
struct MessageQueue(std::sync::Arc<std::sync::Mutex<Vec<String>>>);

/// Raw message received from the host page.
#[derive(Event)]
struct IncomingRpcMessage {
    content: String,
}

fn process_incoming_messages(
    message_queue: Option<Res<MessageQueue>>,
    mut message_events: EventWriter<IncomingRpcMessage>,
) {
    let Some(queue_res) = message_queue else {
        return;
    };

    let messages = if let Ok(mut queue) = queue_res.0.lock() {
        std::mem::take(&mut *queue)
    } else {
        Vec::new()
    };

    for message_str in messages {
        message_events.write(IncomingRpcMessage {
            content: message_str,
        });
    }
}

/// Read-only engine state that request handlers answer from.
pub struct RpcContext<'a> {
    pub debug_enabled: bool,
    pub debug_params: &'a DebugParams,
    pub camera: Option<&'a ResponsiveCamera>,
    pub heading: Option<&'a HeadingVisibility>,
    pub fps: f32,
}

fn handle_rpc_messages(
    mut events: EventReader<IncomingRpcMessage>,
    diagnostics: Res<DiagnosticsStore>,
    config: Option<Res<ShowcaseConfig>>,
    debug_params: Res<DebugParams>,
    camera: Option<Res<ResponsiveCamera>>,
    heading: Option<Res<HeadingVisibility>>,
    mut rpc_interface: ResMut<WebRpcInterface>,
    mut param_events: EventWriter<DebugParamEvent>,
) {
    if events.is_empty() {
        return;
    }

    let context = RpcContext {
        debug_enabled: config.is_some_and(|config| config.debug_enabled),
        debug_params: &debug_params,
        camera: camera.as_deref(),
        heading: heading.as_deref(),
        fps: smoothed_fps(&diagnostics),
    };
    let mut pending = Vec::new();

    for event in events.read() {
        match serde_json::from_str::<RpcRequest>(&event.content) {
            Ok(request) => {
                debug!("Processing RPC method: {}", request.method);
                if let Some(response) = handle_rpc_request(&request, &context, &mut pending) {
                    rpc_interface.queue_response(response);
                }
            }
            Err(parse_error) => {
                warn!("RPC parse error: {}", parse_error);
                rpc_interface.queue_response(RpcResponse {
                    jsonrpc: "2.0".to_string(),
                    result: None,
                    error: Some(RpcError {
                        code: -32700,
                        message: "Parse error".to_string(),
                        data: Some(serde_json::json!({ "detail": parse_error.to_string() })),
                    }),
                    id: None,
                });
            }
        }
    }

    param_events.write_batch(pending);
}

/// Handle individual RPC request and generate response based on method.
///
/// Accepted parameter changes are pushed to `pending` and applied by the
/// debug parameter system later in the frame. Requests without an id are
/// notifications: they are executed but produce no response.
pub fn handle_rpc_request(
    request: &RpcRequest,
    context: &RpcContext,
    pending: &mut Vec<DebugParamEvent>,
) -> Option<RpcResponse> {
    let result = match request.method.as_str() {
        "get_debug_params" => handle_get_debug_params(context),
        "set_debug_param" => handle_set_debug_param(&request.params, context, pending),
        "get_viewport" => handle_get_viewport(context),
        "get_heading_state" => handle_get_heading_state(context),
        "get_fps" => Ok(serde_json::json!({ "fps": context.fps })),
        _ => {
            warn!("Unknown RPC method: {}", request.method);
            let id = request.id.clone()?;
            return Some(create_error_response(
                id,
                -32601,
                "Method not found",
                Some(serde_json::json!({"method": request.method})),
            ));
        }
    };

    let id = request.id.clone()?;
    match result {
        Ok(result_value) => Some(RpcResponse {
            jsonrpc: "2.0".to_string(),
            result: Some(result_value),
            error: None,
            id: Some(id),
        }),
        Err(error) => Some(RpcResponse {
            jsonrpc: "2.0".to_string(),
            result: None,
            error: Some(error),
            id: Some(id),
        }),
    }
}

fn handle_get_debug_params(context: &RpcContext) -> Result<serde_json::Value, RpcError> {
    Ok(serde_json::json!({
        "debug_enabled": context.debug_enabled,
        "params": context.debug_params.to_json(),
    }))
}

/// Validate a parameter change and queue it for the scene.
fn handle_set_debug_param(
    params: &serde_json::Value,
    context: &RpcContext,
    pending: &mut Vec<DebugParamEvent>,
) -> Result<serde_json::Value, RpcError> {
    #[derive(serde::Deserialize)]
    struct SetDebugParamParams {
        key: String,
        value: f32,
    }

    if !context.debug_enabled {
        return Err(RpcError::internal_error("Debug mode is disabled"));
    }

    let parsed = serde_json::from_value::<SetDebugParamParams>(params.clone())
        .map_err(|_| RpcError::invalid_params("Expected 'key' and numeric 'value' parameters"))?;

    let key = DebugParamKey::from_name(&parsed.key)
        .ok_or_else(|| RpcError::invalid_params(&format!("Unknown parameter: {}", parsed.key)))?;

    if !key.accepts(parsed.value) {
        let range = key.range();
        return Err(RpcError::invalid_params(&format!(
            "{} must be within [{}, {}]",
            key.name(),
            range.min,
            range.max
        )));
    }

    pending.push(DebugParamEvent {
        key,
        value: parsed.value,
    });

    Ok(serde_json::json!({
        "success": true,
        "key": key.name(),
        "value": parsed.value,
    }))
}

fn handle_get_viewport(context: &RpcContext) -> Result<serde_json::Value, RpcError> {
    let camera = context
        .camera
        .ok_or_else(|| RpcError::internal_error("Responsive camera not initialised"))?;
    let viewport = camera
        .viewport()
        .ok_or_else(|| RpcError::internal_error("Viewport not known yet"))?;
    let target = camera.target();

    Ok(serde_json::json!({
        "width": viewport.width,
        "height": viewport.height,
        "aspect_ratio": viewport.aspect_ratio(),
        "breakpoint": viewport.breakpoint().as_str(),
        "camera_target": [target.x, target.y, target.z],
    }))
}

fn handle_get_heading_state(context: &RpcContext) -> Result<serde_json::Value, RpcError> {
    let (found, visible) = context.heading.map_or((false, true), |heading| {
        (heading.heading_found(), heading.state() == HeadingState::Visible)
    });
    Ok(serde_json::json!({
        "found": found,
        "visible": visible,
    }))
}

fn smoothed_fps(diagnostics: &DiagnosticsStore) -> f32 {
    diagnostics
        .get(&FrameTimeDiagnosticsPlugin::FPS)
        .and_then(|fps_diagnostic| fps_diagnostic.smoothed())
        .unwrap_or(0.0) as f32
}

/// Create standardized error response with optional data payload.
fn create_error_response(
    id: serde_json::Value,
    code: i32,
    message: &str,
    data: Option<serde_json::Value>,
) -> RpcResponse {
    RpcResponse {
        jsonrpc: "2.0".to_string(),
        result: None,
        error: Some(RpcError {
            code,
            message: message.to_string(),
            data,
        }),
        id: Some(id),
    }
}

/// Tell the host whether to show its debug panel.
fn notify_debug_mode(config: Res<ShowcaseConfig>, mut rpc_interface: ResMut<WebRpcInterface>) {
    rpc_interface.send_notification(
        "debug_mode",
        serde_json::json!({ "enabled": config.debug_enabled }),
    );
}

/// Tell the host the environment and watch are on screen.
fn notify_scene_ready(
    responsive: Option<Res<ResponsiveCamera>>,
    mut rpc_interface: ResMut<WebRpcInterface>,
) {
    let breakpoint = responsive
        .and_then(|responsive| responsive.viewport())
        .map(|viewport| viewport.breakpoint().as_str());
    rpc_interface.send_notification(
        "scene_ready",
        serde_json::json!({ "breakpoint": breakpoint }),
    );
}

fn notify_camera_retargeted(
    mut retargeted: EventReader<CameraRetargeted>,
    mut rpc_interface: ResMut<WebRpcInterface>,
) {
    for event in retargeted.read() {
        rpc_interface.send_notification(
            "camera_retargeted",
            serde_json::json!({
                "breakpoint": event.breakpoint.as_str(),
                "target": [event.target.x, event.target.y, event.target.z],
            }),
        );
    }
}

fn notify_heading_visibility(
    heading: Option<Res<HeadingVisibility>>,
    mut last_state: Local<Option<HeadingState>>,
    mut rpc_interface: ResMut<WebRpcInterface>,
) {
    let Some(heading) = heading else {
        return;
    };
    if !heading.heading_found() || *last_state == Some(heading.state()) {
        return;
    }
    let first_report = last_state.is_none();
    *last_state = Some(heading.state());
    if first_report && heading.state() == HeadingState::Visible {
        return;
    }

    rpc_interface.send_notification(
        "heading_visibility",
        serde_json::json!({ "visible": heading.state() == HeadingState::Visible }),
    );
}

/// Send queued notifications and responses to the host page.
fn send_outgoing_messages(mut rpc_interface: ResMut<WebRpcInterface>) {
    for notification in rpc_interface.outgoing_notifications.drain(..) {
        send_message_to_parent(&notification);
    }

    for response in rpc_interface.outgoing_responses.drain(..) {
        send_message_to_parent(&response);
    }
}

/// Send serialized message to the parent window.
fn send_message_to_parent<T: Serialize>(message: &T) {
    #[cfg(target_arch = "wasm32")]
    {
        match serde_json::to_string(message) {
            Ok(json) => {
                if let Some(window) = window() {
                    if let Some(parent) = window.parent().ok().flatten() {
                        if let Err(e) = parent.post_message(&JsValue::from_str(&json), "*") {
                            error!("Failed to send message to parent: {:?}", e);
                        }
                    } else {
                        warn!("No parent window available for message transmission");
                    }
                } else {
                    error!("Window object not available");
                }
            }
            Err(e) => {
                error!("Failed to serialize message: {}", e);
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = message;
    }
}

/// Standard RPC error codes and constructors.
impl RpcError {
    pub fn invalid_params(message: &str) -> Self {
        Self {
            code: -32602,
            message: message.to_string(),
            data: None,
        }
    }

    pub fn internal_error(message: &str) -> Self {
        Self {
            code: -32603,
            message: message.to_string(),
            data: None,
        }
    }
}
