//! linequill: an embeddable modal line-editing engine with a terminal shell.
//!
//! The heart of the crate is [`editor::session::EditorSession`], a vim-style
//! modal editor over a plain line buffer. A host application embeds it by
//! dispatching logical key events ([`input::keys::InputEvent`]) and drawing
//! the [`editor::session::RenderedFrame`] projection; the bundled shell in
//! `main.rs` is one such host, and the [`ui`] widgets can be reused by
//! others.
//!
//! # Quick start
//!
//! ```
//! use linequill::editor::session::EditorSession;
//! use linequill::input::keys::InputEvent;
//!
//! let mut session = EditorSession::new();
//! session.handle_key(InputEvent::EnterInsert);
//! session.handle_key(InputEvent::InsertCharacter('a'));
//! session.handle_key(InputEvent::ExitMode);
//!
//! assert!(session.is_modified());
//! assert_eq!(session.buffer().line(0), "a");
//! ```

pub mod config;
pub mod editor;
pub mod file;
pub mod input;
pub mod theme;
pub mod ui;
