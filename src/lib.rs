//! # xl8 - Minimal AI Translation CLI
//!
//! `xl8` is a command-line tool for translating text through Groq's
//! OpenAI-compatible chat-completion API (or any endpoint speaking the
//! same protocol). One invocation performs exactly one request: a system
//! message naming the target language and a user message carrying the
//! source text, with the model's reply printed to stdout.
//!
//! ## Quick Start
//!
//! ```bash
//! # Translate an argument
//! xl8 --to German "hello"
//!
//! # Translate from stdin
//! cat notes.txt | xl8 --to ja
//!
//! # List supported languages
//! xl8 languages
//! ```
//!
//! ## Configuration
//!
//! The API key is read from the `GROQ_API_KEY` environment variable
//! (a `.env` file in the working directory is honored). Defaults can be
//! stored in `~/.config/xl8/config.toml`:
//!
//! ```toml
//! [xl8]
//! to = "de"
//! model = "gemma2-9b-it"
//! ```

/// Command-line interface definitions and handlers.
pub mod cli;

/// Configuration file management and resolution.
pub mod config;

/// Input reading from arguments and stdin.
pub mod input;

/// Global output configuration (quiet mode, colors, stderr/stdout routing).
pub mod output;

/// XDG-style path utilities for configuration.
pub mod paths;

/// Translation client for OpenAI-compatible chat-completion APIs.
pub mod translation;

/// Terminal UI components (spinner, colors).
pub mod ui;
