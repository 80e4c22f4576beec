//! # Walink Architecture
//!
//! Walink turns a phone number and an optional message into a WhatsApp
//! click-to-chat link (`https://wa.me/...`) that can be opened, copied or
//! shared without saving a contact first.
//!
//! It is a **UI-agnostic form core**. The terminal client in `main.rs` is one
//! way to drive it; a browser front end would drive the same API with its own
//! clipboard, share sheet, opener and local storage.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs, args.rs, print.rs)                     │
//! │  - Parses arguments, prints results, sets up logging        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Holds the form state restored at startup                 │
//! │  - Routes each UI event to a command                        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Edits with write-through, gated actions                  │
//! │  - Returns `CmdResult`, never prints                        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core (phone.rs, link.rs, model.rs, sync.rs)                │
//! │  - Pure sanitize / validate / build link                    │
//! │  - KeyValueStore and Platform traits at the edges           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Core in One Pass
//!
//! ```text
//! raw input ──sanitize──► digits ──is_valid──► actions enabled?
//!                            │
//!           dial code ──────►├──build_link──► https://wa.me/62812...?text=...
//!           message ────────►┘
//! ```
//!
//! Only three strings are state (phone input, message, dial code); everything
//! else is recomputed from them whenever it is needed.
//!
//! ## Module Overview
//!
//! - [`phone`]: Sanitizer and digit-count validator
//! - [`link`]: `wa.me` URL construction
//! - [`countries`]: Static dial code reference list
//! - [`model`]: Form state and derived values
//! - [`sync`]: Restore-on-start and write-through persistence
//! - [`store`]: Key-value storage abstraction and implementations
//! - [`platform`]: Clipboard, share sheet and opener capabilities
//! - [`commands`]: Edits and actions
//! - [`api`]: The facade UI clients talk to
//! - [`config`]: Settings
//! - [`clipboard`], [`opener`]: OS-backed capability implementations
//! - [`init`]: Wiring for the terminal client
//! - [`error`]: Error types

pub mod api;
pub mod clipboard;
pub mod commands;
pub mod config;
pub mod countries;
pub mod error;
pub mod init;
pub mod link;
pub mod model;
pub mod opener;
pub mod phone;
pub mod platform;
pub mod store;
pub mod sync;
