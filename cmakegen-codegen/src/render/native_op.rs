//! Static library descriptor for an op whose sources CMake globs itself.

use eyre::Result;

use super::RenderSettings;
use crate::{
    target::TargetDescriptor,
    template::{Template, TemplateVars},
};

pub const TEMPLATE: Template =
    Template::new("native-op", include_str!("../../templates/native_op.cmake.in"));

pub fn render(target: &TargetDescriptor, settings: &RenderSettings) -> Result<String> {
    let vars = TemplateVars::new()
        .set("CMAKE_MINIMUM", settings.cmake_minimum.to_string())
        .set("MODULE", target.upper_name.as_str())
        .set("module", target.module_name.as_str());
    TEMPLATE.render(&vars)
}
