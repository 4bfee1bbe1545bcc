//! Primitive sizes/alignments and natural struct padding.

use std::mem::{align_of, size_of};

use crate::outcome::{ProbeFailure, ProbeOutcome, check};

/// A byte followed by an `i32`: three bytes of padding under C layout.
#[repr(C)]
pub struct AlignedStruct {
    pub tag: u8,
    pub value: i32,
}

pub fn check_memory() -> ProbeOutcome {
    check(size_of::<i32>() == 4, ProbeFailure::SizeOfI32)?;
    check(size_of::<f64>() == 8, ProbeFailure::SizeOfF64)?;
    check(align_of::<i32>() == 4, ProbeFailure::AlignOfI32)?;
    check(align_of::<f64>() == 8, ProbeFailure::AlignOfF64)?;
    check(
        size_of::<AlignedStruct>() == 8,
        ProbeFailure::SizeOfAlignedStruct,
    )?;
    Ok(())
}
