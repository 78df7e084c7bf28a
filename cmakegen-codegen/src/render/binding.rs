//! pybind11 extension descriptor for a scanned op.
//!
//! Every op gets a `<op>_cpp` module built from its CPU sources (plus CUDA
//! sources when CUDA is found). Ops with standalone CUDA files also get a
//! `<op>_cuda` module. Both install into `<install_prefix>/<op>`.

use std::path::{Path, PathBuf};

use super::{RenderSettings, cmake_path};
use crate::{
    builder::CodeBuilder,
    target::{SourceSet, TargetDescriptor},
};

pub fn render(target: &TargetDescriptor, sources: &SourceSet, settings: &RenderSettings) -> String {
    let op = target.module_name.as_str();
    let var = format!("{}_SOURCES", target.upper_name);
    let cpp_target = format!("{}_cpp", op);
    let cuda_target = format!("{}_cuda", op);
    let destination = install_destination(&settings.install_prefix, package_dir(target));

    let cpu_files: Vec<String> = sources.cpu.iter().map(|p| cmake_path(p)).collect();
    let cuda_files: Vec<String> = sources.cuda.iter().map(|p| cmake_path(p)).collect();
    let standalone_cuda = standalone_cuda(&sources.cuda, &settings.kernel_suffix);
    let has_cuda_module = !standalone_cuda.is_empty();
    // Without CPU sources the binding only has something to compile when CUDA is found
    let cuda_only = cpu_files.is_empty();

    CodeBuilder::cmake()
        .line(&format!(
            "cmake_minimum_required(VERSION {})",
            settings.cmake_minimum
        ))
        .blank()
        .comment(&format!("Collect {} op sources", op))
        .when(cuda_only, |b| b.line(&format!("set({})", var)))
        .when(!cuda_only, |b| b.call(&format!("set({}", var), &cpu_files))
        .blank()
        .when(!cuda_files.is_empty(), |b| {
            b.block("if(CUDA_FOUND)", "endif()", |b| {
                b.call(&format!("list(APPEND {}", var), &cuda_files)
            })
            .blank()
        })
        .when(cuda_only, |b| {
            b.block("if(CUDA_FOUND)", "endif()", |b| {
                cpp_module(b, &cpp_target, &var, settings, true)
            })
        })
        .when(!cuda_only, |b| {
            cpp_module(b, &cpp_target, &var, settings, false)
        })
        .when(has_cuda_module, |b| {
            b.blank()
                .comment("Standalone CUDA binding")
                .block("if(CUDA_FOUND)", "endif()", |b| {
                    b.call(
                        &format!("pybind11_add_module({} SHARED", cuda_target),
                        &standalone_cuda,
                    )
                    .line(&format!(
                        "target_link_libraries({} PRIVATE torch ${{Boost_LIBRARIES}})",
                        cuda_target
                    ))
                    .line(&format!(
                        "set_target_properties({} PROPERTIES CXX_STANDARD {} CUDA_SEPARABLE_COMPILATION ON)",
                        cuda_target, settings.cxx_standard
                    ))
                    .line(&format!(
                        "target_include_directories({} PRIVATE ${{CUDA_INCLUDE_DIRS}} ${{TORCH_INCLUDE_DIRS}})",
                        cuda_target
                    ))
                })
        })
        .blank()
        .comment("Install module")
        .when(!cuda_only, |b| {
            b.line(&format!(
                "install(TARGETS {} DESTINATION {})",
                cpp_target, destination
            ))
        })
        .when(cuda_only || has_cuda_module, |b| {
            b.block("if(CUDA_FOUND)", "endif()", |b| {
                b.when(cuda_only, |b| {
                    b.line(&format!(
                        "install(TARGETS {} DESTINATION {})",
                        cpp_target, destination
                    ))
                })
                .when(has_cuda_module, |b| {
                    b.line(&format!(
                        "install(TARGETS {} DESTINATION {})",
                        cuda_target, destination
                    ))
                })
            })
        })
        .build()
}

/// The `<op>_cpp` module with its link, compile and include settings.
///
/// `in_cuda_block` means the caller already wrapped it in `if(CUDA_FOUND)`.
fn cpp_module(
    b: CodeBuilder,
    cpp_target: &str,
    var: &str,
    settings: &RenderSettings,
    in_cuda_block: bool,
) -> CodeBuilder {
    let cuda_properties = |b: CodeBuilder| {
        b.call(
            &format!("set_target_properties({} PROPERTIES", cpp_target),
            ["CUDA_SEPARABLE_COMPILATION ON"],
        )
        .line(&format!(
            "target_include_directories({} PRIVATE ${{CUDA_INCLUDE_DIRS}})",
            cpp_target
        ))
    };

    b.comment("Python binding")
        .line(&format!(
            "pybind11_add_module({} SHARED ${{{}}})",
            cpp_target, var
        ))
        .blank()
        .comment("Link libraries")
        .call(
            &format!("target_link_libraries({} PRIVATE", cpp_target),
            ["torch", "${Boost_LIBRARIES}"],
        )
        .blank()
        .comment("Compile properties")
        .call(
            &format!("set_target_properties({} PROPERTIES", cpp_target),
            [
                format!("CXX_STANDARD {}", settings.cxx_standard),
                "POSITION_INDEPENDENT_CODE ON".to_string(),
            ],
        )
        .blank()
        .comment("CUDA properties")
        .when(in_cuda_block, cuda_properties)
        .when(!in_cuda_block, |b| {
            b.block("if(CUDA_FOUND)", "endif()", cuda_properties)
        })
        .blank()
        .comment("Include directories")
        .call(
            &format!("target_include_directories({} PRIVATE", cpp_target),
            [
                "${CMAKE_CURRENT_SOURCE_DIR}",
                "${CMAKE_CURRENT_SOURCE_DIR}/../utility/src",
                "${TORCH_INCLUDE_DIRS}",
            ],
        )
}

/// The op's directory name as found on disk, which is where its Python
/// package lives. Falls back to the sanitized module name.
fn package_dir(target: &TargetDescriptor) -> &str {
    target
        .path
        .parent()
        .and_then(Path::file_name)
        .and_then(|name| name.to_str())
        .unwrap_or(&target.module_name)
}

/// CUDA files compiled on their own; `*_kernel.cu` files are included by
/// other sources instead.
fn standalone_cuda(cuda: &[PathBuf], kernel_suffix: &str) -> Vec<String> {
    cuda.iter()
        .map(|p| cmake_path(p))
        .filter(|p| !p.ends_with(kernel_suffix))
        .collect()
}

fn install_destination(prefix: &str, op: &str) -> String {
    let prefix = prefix.trim_end_matches('/');
    if prefix.is_empty() {
        op.to_string()
    } else {
        format!("{}/{}", prefix, op)
    }
}
