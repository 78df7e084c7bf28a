//! Target discovery and `CMakeLists.txt` rendering for cmakegen.
//!
//! # Module Organization
//!
//! - [`enumerate`] - Which descriptor paths or module directories to consider
//! - [`classify`] - Descriptor kind, names and discovered sources per target
//! - [`render`] - Templates and the binding renderer
//! - [`plan`] - Enumerate and classify for each run mode
//! - [`builder`] - Indented CMake code building
//! - [`template`] - `@NAME@` placeholder templates

pub mod builder;
pub mod classify;
pub mod enumerate;
pub mod plan;
pub mod render;
pub mod target;
pub mod template;

pub use classify::{Classification, SkipReason, classify_module, classify_path};
pub use enumerate::{ModuleDir, fixed_list, resolve, scan_modules};
pub use plan::{ScanPlan, plan_missing, plan_scan};
pub use render::{RenderSettings, render};
pub use target::{SourceSelection, SourceSet, TargetDescriptor, TargetKind};
