//! # Presentation Layer
//!
//! Output logic for the CLI, kept apart from the deal list engine
//! (`rattle_engine`) with an adaptation of the **MVVM** pattern.
//!
//! ## Data Flow
//!
//! ```text
//! [ Handler ] --> [ Presenter ] --> [ ViewModel ] --> [ Renderer ] --> [ Output ]
//!    (Controller)      (Converter)       (Contract)       (View)        (Console/JSON)
//! ```
//!
//! ## Where does code go?
//!
//! ### `view_models/` (The Data Contract)
//! * Structs that define *what* the user sees. Pure data, `Serialize`, no calculation.
//! * Raw values only: whole dollars, stage tokens, probabilities as integers.
//! * The JSON test: "If I output this struct as JSON, is it clean and machine-readable?"
//!
//! ### `presenters/` (The Transformation Logic)
//! * Pure functions from engine results to ViewModels.
//! * Badges, suggestions and per-row derivations (deal count per owner, value per stage).
//!
//! ### `views/` (The Text Layout)
//! * `fmt::Display` wrappers over ViewModels: columns, headings, empty states.
//!
//! ### `renderers/` (The Output Strategy)
//! * `console.rs` prints a `CommandResultViewModel` as JSON or as badge + view + tips.
//!
//! ### `formatters/` (The Utilities)
//! * `format_currency`, `format_percent`, `stage_label`, `truncate`, colour helpers.
//!
//! ## Decision Matrix
//!
//! | If you need to... | Go to... |
//! |-------------------|----------|
//! | Add a field to the JSON output | **`view_models/`** |
//! | Count, sum or rank something for display | **`presenters/`** |
//! | Change column widths or headings | **`views/`** |
//! | Render `125000` as `$125,000` | **`formatters/`** |

pub mod formatters;
pub mod presenters;
pub mod renderers;
pub mod view_models;
pub mod views;

pub use renderers::{ConsoleRenderer, Renderer};
pub use view_models::{CommandResultViewModel, Guidance, StatusBadge, StatusLevel};
