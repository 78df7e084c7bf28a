//! Static library descriptor for a vendored thirdparty project.

use eyre::Result;

use super::RenderSettings;
use crate::{
    target::TargetDescriptor,
    template::{Template, TemplateVars},
};

pub const TEMPLATE: Template =
    Template::new("thirdparty", include_str!("../../templates/thirdparty.cmake.in"));

pub fn render(target: &TargetDescriptor, settings: &RenderSettings) -> Result<String> {
    let vars = TemplateVars::new()
        .set("CMAKE_MINIMUM", settings.cmake_minimum.to_string())
        .set("PROJECT", target.module_name.as_str());
    TEMPLATE.render(&vars)
}
