//! Generates the builtin kernel rows from the promotion table.
//!
//! One row per available (operation, left, right) entry, each naming the
//! monomorphised loop templates for that kind triple.

use elemwise_core::promotion;
use elemwise_core::{Operation, TypeKind};
use std::env;
use std::fs;
use std::io;
use std::path::PathBuf;

fn main() -> io::Result<()> {
    println!("cargo:rerun-if-changed=build.rs");

    let out_dir = env::var_os("OUT_DIR")
        .map(PathBuf::from)
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "OUT_DIR not set"))?;

    let mut rows = String::new();
    let mut count = 0usize;
    for op in Operation::ALL {
        for entry in promotion::available(op.family()) {
            let row = builtin_row(op, entry.left, entry.right, entry.common, entry.result)
                .ok_or_else(|| {
                    io::Error::new(
                        io::ErrorKind::InvalidData,
                        format!(
                            "{op}: available entry ({}, {}) has no storage type",
                            entry.left, entry.right
                        ),
                    )
                })?;
            rows.push_str(&row);
            count += 1;
        }
    }

    let mut source = String::from("// Generated by build.rs, do not edit.\n");
    source.push_str(&format!(
        "pub(crate) static BUILTIN_LOOPS: [BuiltinLoop; {count}] = [\n"
    ));
    source.push_str(&rows);
    source.push_str("];\n");

    fs::write(out_dir.join("builtin_kernels.rs"), source)
}

fn builtin_row(
    op: Operation,
    left: TypeKind,
    right: TypeKind,
    common: TypeKind,
    result: TypeKind,
) -> Option<String> {
    let l = left.rust_type()?;
    let r = right.rust_type()?;
    let c = common.rust_type()?;
    result.rust_type()?;

    let marker = format!("::elemwise_core::ops::{}", op.marker());
    let function = if op.nout() == 2 {
        format!(
            "KernelFn::Dual {{ contiguous: contiguous_dual::<{l}, {r}, {c}, {marker}>, \
             rank0: rank0_dual::<{l}, {r}, {c}, {marker}> }}"
        )
    } else {
        format!(
            "KernelFn::Binary {{ contiguous: contiguous::<{l}, {r}, {c}, {marker}>, \
             rank0: rank0::<{l}, {r}, {c}, {marker}> }}"
        )
    };

    Some(format!(
        "    BuiltinLoop {{ op: Operation::{:?}, left: TypeKind::{:?}, right: TypeKind::{:?}, \
         common: TypeKind::{:?}, result: TypeKind::{:?}, function: {function} }},\n",
        op, left, right, common, result
    ))
}
