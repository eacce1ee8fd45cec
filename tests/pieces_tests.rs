//! Piece catalog and rotation tests

use std::collections::HashSet;

use tui_blockfall::core::catalog::{offset_to_cell, rotations};
use tui_blockfall::core::{bounding_box, ActivePiece, Error, PieceCatalog, SimpleRng};
use tui_blockfall::types::PieceKind;

#[test]
fn test_every_rotation_state_is_well_formed() {
    for kind in PieceKind::ALL {
        for state in rotations(kind) {
            let distinct: HashSet<u8> = state.iter().copied().collect();
            assert_eq!(distinct.len(), 4, "{:?} {:?}", kind, state);
            assert!(state.iter().all(|&o| o < 16), "{:?} {:?}", kind, state);
        }
    }
}

#[test]
fn test_stored_rotation_counts() {
    let counts: Vec<usize> = PieceKind::ALL.iter().map(|&k| rotations(k).len()).collect();
    // I, O, T, L, J, Z, S
    assert_eq!(counts, vec![2, 1, 4, 4, 4, 2, 2]);
}

#[test]
fn test_rotation_states_are_distinct() {
    for kind in PieceKind::ALL {
        let shapes: HashSet<Vec<u8>> = rotations(kind)
            .iter()
            .map(|s| {
                let mut v = s.to_vec();
                v.sort_unstable();
                v
            })
            .collect();
        assert_eq!(shapes.len(), rotations(kind).len(), "{:?}", kind);
    }
}

#[test]
fn test_offset_to_cell() {
    assert_eq!(offset_to_cell(0), (0, 0));
    assert_eq!(offset_to_cell(7), (3, 1));
    assert_eq!(offset_to_cell(14), (2, 3));
}

#[test]
fn test_lookup_is_case_insensitive() {
    let catalog = PieceCatalog::new(&mut SimpleRng::new(5));
    for kind in PieceKind::ALL {
        let upper = catalog.by_name(kind.as_str()).unwrap();
        let lower = catalog.by_name(&kind.as_str().to_lowercase()).unwrap();
        assert_eq!(upper.kind, kind);
        assert_eq!(upper, lower);
    }
    assert_eq!(
        catalog.by_name("X"),
        Err(Error::PieceNotFound {
            name: "X".to_string()
        })
    );
}

#[test]
fn test_colors_reproducible_by_seed() {
    let a = PieceCatalog::new(&mut SimpleRng::new(99));
    let b = PieceCatalog::new(&mut SimpleRng::new(99));
    assert_eq!(a, b);
    assert!(a.definitions().iter().all(|d| d.color.0 < 0xff_ff_ff));
}

#[test]
fn test_rotation_cycle_returns_to_start() {
    let catalog = PieceCatalog::new(&mut SimpleRng::new(1));
    for def in catalog.definitions() {
        let start = ActivePiece::spawn(1, def);
        let mut piece = start;
        for _ in 0..start.rotation_count() {
            piece = piece.rotated();
        }
        assert_eq!(piece, start);
    }
}

#[test]
fn test_spawn_bounding_boxes() {
    let catalog = PieceCatalog::new(&mut SimpleRng::new(1));
    let o = ActivePiece::spawn(1, catalog.get(PieceKind::O));
    let bb = bounding_box(&o);
    assert_eq!((bb.left, bb.right, bb.top, bb.bottom), (4, 5, -1, 0));

    let i = ActivePiece::spawn(2, catalog.get(PieceKind::I));
    let bb = bounding_box(&i);
    assert_eq!((bb.left, bb.right, bb.top, bb.bottom), (3, 6, 0, 0));
}
