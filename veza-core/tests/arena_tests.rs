//! Arena allocator tests: alignment, exhaustion, reuse, and sizing.

mod common;

use veza_core::testing_codes::toric_3x3;
use veza_core::{required_buffer_size, Arena, DecoderBuilder};

#[test]
fn allocations_are_naturally_aligned() {
    let mut buffer = [0u8; 256];
    let mut arena = Arena::new(&mut buffer);

    let bytes = arena.alloc_slice::<u8>(3).unwrap();
    assert_eq!(bytes.len(), 3);

    let words = arena.alloc_slice::<u32>(4).unwrap();
    assert_eq!(words.as_ptr() as usize % core::mem::align_of::<u32>(), 0);

    let wide = arena.alloc_slice::<u64>(2).unwrap();
    assert_eq!(wide.as_ptr() as usize % core::mem::align_of::<u64>(), 0);
}

#[test]
fn custom_alignment_is_honored() {
    let mut buffer = [0u8; 256];
    let mut arena = Arena::new(&mut buffer);

    arena.alloc_slice::<u8>(1).unwrap();
    let aligned = arena.alloc_slice_aligned::<u8>(8, 64).unwrap();
    assert_eq!(aligned.as_ptr() as usize % 64, 0);
}

#[test]
fn exhaustion_is_reported_not_panicked() {
    let mut buffer = [0u8; 16];
    let mut arena = Arena::new(&mut buffer);

    assert!(arena.alloc_slice::<u32>(2).is_ok());
    assert!(arena.alloc_slice::<u32>(64).is_err());
    // A failed allocation leaves the arena usable.
    assert!(arena.alloc_slice::<u32>(1).is_ok());
}

#[test]
fn alloc_value_round_trips() {
    let mut buffer = [0u8; 64];
    let mut arena = Arena::new(&mut buffer);

    let value = arena.alloc_value::<u32>(0xDEAD_BEEF).unwrap();
    assert_eq!(*value, 0xDEAD_BEEF);
    *value = 7;
    assert_eq!(*value, 7);
}

#[test]
fn reset_reclaims_all_memory() {
    let mut buffer = [0u8; 128];
    let mut arena = Arena::new(&mut buffer);

    arena.alloc_slice::<u64>(8).unwrap();
    assert!(arena.alloc_slice::<u64>(8).is_err());
    assert!(arena.used() > 0);

    arena.reset();
    assert_eq!(arena.used(), 0);
    assert!(arena.alloc_slice::<u64>(8).is_ok());
}

#[test]
fn required_size_grows_with_repetitions() {
    let single = required_buffer_size(9, 18, 1);
    let layered = required_buffer_size(9, 18, 5);
    assert!(single > 0);
    assert!(layered > single);
    // Zero repetitions sizes like single-layer rather than underflowing.
    assert_eq!(required_buffer_size(9, 18, 0), single);
}

#[test]
fn arena_supports_repeated_builds_after_reset() {
    let matrix = toric_3x3();
    let mut buffer = common::buffer_for(&matrix, 1);
    let mut arena = Arena::new(&mut buffer);

    {
        let used_before = arena.used();
        assert_eq!(used_before, 0);
        DecoderBuilder::new().build(&mut arena, &matrix).unwrap();
    }
    arena.reset();
    DecoderBuilder::new().build(&mut arena, &matrix).unwrap();
}
