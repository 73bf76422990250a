//! Behavioural contracts of orientation strategies and block types.

use std::sync::Arc;
use std::thread;

use approx::assert_abs_diff_eq;
use glam::DVec3;
use tessera_block::{
    BlockDef, BlockRegistry, BlockType, CompactId, Fixed, Horizontal4, ModelSpec, Omni6, Pillar,
    PlacementContext, Property, PropertyValue,
};
use tessera_core::{BlockPos, CodecConfig, Face};

fn assert_close(a: DVec3, b: DVec3) {
    assert_abs_diff_eq!(a.x, b.x, epsilon = 1e-6);
    assert_abs_diff_eq!(a.y, b.y, epsilon = 1e-6);
    assert_abs_diff_eq!(a.z, b.z, epsilon = 1e-6);
}

fn stock() -> Vec<BlockType> {
    let config = CodecConfig::default();
    [
        BlockDef::new("stone"),
        BlockDef::new("lamp")
            .with_orientation(Horizontal4::new())
            .with_property(Property::boolean("lit")),
        BlockDef::new("piston")
            .with_orientation(Omni6::new())
            .with_property(Property::boolean("extended")),
        BlockDef::new("log").with_orientation(Pillar::new()),
    ]
    .iter()
    .map(|def| BlockType::from_def(def, &config).unwrap())
    .collect()
}

#[test]
fn transforms_are_referentially_transparent() {
    let origin = DVec3::new(12.5, 70.5, -4.5);
    for block in stock() {
        for raw in 0..16 {
            let id = CompactId::new(raw);
            assert_eq!(block.transform_for(id, origin), block.transform_for(id, origin));
        }
    }
}

#[test]
fn block_transforms_obey_inverse_law() {
    let points = [DVec3::ZERO, DVec3::new(0.5, -0.25, 0.125), DVec3::new(-3.0, 8.0, 1.5)];
    for block in stock() {
        for raw in 0..16 {
            let t = block.local_to_global_transform(CompactId::new(raw), BlockPos::new(-20, 5, 33));
            for p in points {
                assert_close(t.inverse().apply_point(t.apply_point(p)), p);
            }
        }
    }
}

#[test]
fn rotation_and_full_transform_agree() {
    let pos = BlockPos::new(3, 64, -9);
    for block in stock() {
        for raw in 0..16 {
            let id = CompactId::new(raw);
            let rotation = block.local_to_global_rotation(id);
            let full = block.local_to_global_transform(id, pos);
            assert_eq!(rotation.rotation, full.rotation);
            assert_eq!(rotation.origin, DVec3::ZERO);
            assert_eq!(full.origin, pos.center());
        }
    }
}

#[test]
fn fixed_block_is_identity() {
    let stone = BlockType::from_def(&BlockDef::new("stone"), &CodecConfig::default()).unwrap();
    let ctx = PlacementContext::new(BlockPos::new(1, 1, 1), Face::East).with_view(90.0, 10.0);
    assert_eq!(stone.on_placement(&ctx), CompactId::new(0));
    let t = stone.local_to_global_transform(CompactId::new(0), BlockPos::new(1, 1, 1));
    assert_close(t.apply_point(DVec3::ZERO), DVec3::splat(1.5));
    assert_eq!(t.apply_face(Face::North), Face::North);
}

#[test]
fn placement_keeps_item_properties() {
    let config = CodecConfig::default();
    let lamp = BlockType::from_def(
        &BlockDef::new("lamp")
            .with_orientation(Horizontal4::new())
            .with_property(Property::boolean("lit")),
        &config,
    )
    .unwrap();
    let layout = lamp.layout();
    let lit_item = lamp.encode(&layout.with_value(&layout.default_state(), "lit", true).unwrap());

    // Placer looks east, so the lamp's front turns west.
    let ctx = PlacementContext::new(BlockPos::new(0, 64, 0), Face::Up)
        .with_view(270.0, 30.0)
        .with_base(lit_item);
    let id = lamp.on_placement(&ctx);
    let state = lamp.decode(id);

    assert_eq!(layout.value(&state, "facing"), Some(&PropertyValue::Face(Face::West)));
    assert_eq!(layout.value(&state, "lit"), Some(&PropertyValue::Bool(true)));
    assert_eq!(lamp.transform_for(id, DVec3::ZERO).apply_face(Face::North), Face::West);
}

#[test]
fn placement_is_total_over_faces_and_views() {
    for block in stock() {
        for face in Face::ALL {
            for yaw in [0.0, 45.0, 90.0, 135.0, 180.0, 225.0, 270.0, 315.0] {
                let ctx = PlacementContext::new(BlockPos::ZERO, face).with_view(yaw, 0.0);
                let state = block.placement_state(&ctx);
                let id = block.on_placement(&ctx);
                assert!((id.get() as usize) < block.layout().combinations().max(1));
                assert_eq!(block.decode(id), state);
            }
        }
    }
}

#[test]
fn render_transform_applies_model_origin() {
    let config = CodecConfig::default();
    let sign = BlockType::from_def(
        &BlockDef::new("sign")
            .with_orientation(Horizontal4::new())
            .with_model(
                ModelSpec::new("sign", &["oak_planks"]).with_origin(DVec3::new(0.0, 0.0, 0.25)),
            ),
        &config,
    )
    .unwrap();
    let layout = sign.layout();
    let east = sign.encode(&layout.with_value(&layout.default_state(), "facing", Face::East).unwrap());
    let pos = BlockPos::new(10, 0, 10);

    let t = sign.render_transform(east, pos);
    // Model origin sits on the block centre; the board is turned to face east.
    assert_close(t.apply_point(DVec3::new(0.0, 0.0, 0.25)), pos.center());
    assert_eq!(t.apply_face(Face::North), Face::East);
    assert_eq!(sign.model().map(|m| m.textures.len()), Some(1));
}

#[test]
fn concurrent_first_use_builds_one_layout() {
    let registry = Arc::new(BlockRegistry::default());
    let def = BlockDef::new("furnace")
        .with_orientation(Horizontal4::new())
        .with_property(Property::boolean("lit"));

    let resolved: Vec<_> = thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let registry = Arc::clone(&registry);
                let def = def.clone();
                scope.spawn(move || registry.resolve(&def).unwrap())
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(registry.len(), 1);
    for block in &resolved[1..] {
        assert!(Arc::ptr_eq(&resolved[0], block));
    }
    assert_eq!(resolved[0].layout().len(), 2);
    assert_eq!(resolved[0].layout().combinations(), 8);
}

#[test]
fn fixed_strategy_is_default() {
    let def = BlockDef::new("glass");
    let block = BlockType::from_def(&def, &CodecConfig::default()).unwrap();
    assert!(block.layout().is_empty());
    assert_eq!(format!("{:?}", block.orientation()), format!("{Fixed:?}"));
}
