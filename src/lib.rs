//! SkyScale On-Call Copilot
//!
//! Client library and CLI for the PlanRAG question-answering and document
//! ingestion backend used by the SkyScale on-call copilot.
//!
//! # Features
//!
//! - Tolerant normalization of loosely-shaped `/ask` responses into answer,
//!   evidence and source citations
//! - Ask lifecycle that turns backend and transport failures into
//!   displayable replies
//! - Document drafts with file loading and tag parsing for `/ingest`
//! - Environment-based configuration with a redacted API key
//!
//! # Quick Start
//!
//! ```bash
//! PLANRAG_API_KEY=prg_live_xxx ./skyscale-copilot ask --service checkout "Checkout 5xx in us-east-1?"
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌────────────┐  ask/ingest  ┌─────────────────┐  POST /ask    ┌─────────┐
//! │  Operator  │─────────────▶│ Copilot/Ingestor│──────────────▶│ PlanRAG │
//! │   (CLI)    │◀─────────────│  + normalize    │◀──────────────│ backend │
//! └────────────┘    reply     └─────────────────┘  loose JSON   └─────────┘
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod copilot;
pub mod error;
pub mod ingest;
pub mod normalize;
pub mod planrag;
pub mod traits;
