//! JSON-RPC 2.0 bridge between the showcase and its host page.
//!
//! The host page embeds the showcase canvas in an iframe and drives its debug
//! panel through `postMessage`, using both request-response and notification
//! patterns.
//!
//! ## Message Flow
//!
//! ```text
//! Host page (parent)     <──postMessage──>  Bevy (iframe)
//!        │                                        │
//!        ├─ Request (with ID) ──────────────────> │
//!        │                                        ├─ Answer from RpcContext
//!        │                                        ├─ Queue DebugParamEvents
//!        │ <───────────────── Response (with ID) ─┤
//!        │                                        │
//!        │ <────────── Notification (no ID) ─────┤
//! ```
//!
//! Requests are answered from a read-only `RpcContext` snapshot taken once
//! per frame. Requests that change the scene never touch entities directly:
//! they push validated `DebugParamEvent`s, which `apply_debug_param_events`
//! applies later in the same frame.
//!
//! ## Adding New RPC Methods
//!
//! Add a match arm in `handle_rpc_request()` and a handler returning
//! `Result<Value, RpcError>`:
//!
//! ```rust,ignore
//! fn handle_your_method(params: &Value, context: &RpcContext) -> Result<Value, RpcError> {
//!     #[derive(Deserialize)]
//!     struct YourParams {
//!         field: String,
//!     }
//!
//!     let parsed = serde_json::from_value::<YourParams>(params.clone())
//!         .map_err(|_| RpcError::invalid_params("Expected 'field' parameter"))?;
//!
//!     Ok(json!({ "success": true, "result": parsed.field }))
//! }
//! ```
//!
//! From the host page:
//!
//! ```typescript
//! iframe.contentWindow.postMessage(JSON.stringify({
//!   jsonrpc: "2.0",
//!   method: "set_debug_param",
//!   params: { key: "key_light.intensity", value: 4.0 },
//!   id: 1
//! }), "*");
//! ```
//!
//! ## Error Handling
//!
//! - `-32700`: Parse error (message was not valid JSON-RPC)
//! - `-32601`: Method not found
//! - `-32602`: Invalid params, unknown debug parameter or value out of range
//! - `-32603`: Internal error, debug mode disabled or state not initialised
//!
//! ## Existing Methods
//!
//! ### Debug Parameters
//! - `get_debug_params`: Current values and ranges, plus whether debug mode is on
//! - `set_debug_param`: Validate `{ key, value }` and apply it to the scene
//!
//! ### View State
//! - `get_viewport`: Logical size, aspect, breakpoint and camera rest position
//! - `get_heading_state`: Whether the heading exists and is visible
//!
//! ### Diagnostics
//! - `get_fps`: Retrieve current frame rate
//!
//! ## Notifications
//!
//! - `debug_mode`: Sent once at startup; the host hides its panel when disabled
//! - `camera_retargeted`: Breakpoint crossed, camera gliding to a new rest position
//! - `heading_visibility`: Heading hidden or restored
//! - `scene_ready`: Sent once when the environment and watch finish loading
//! - `fps_update`: Smoothed frame rate every 0.5 s, once running

/// JSON-RPC 2.0 bidirectional communication with the host page.
///
/// Handles request-response patterns, notifications, and WASM message listeners.
pub mod web_rpc;
