//! Behavioural contracts of the property state codec.

use std::collections::HashSet;

use tessera_block::{
    BlockDef, BlockRegistry, CompactId, Horizontal4, Property, PropertyLayout, PropertyValue,
};
use tessera_core::{CodecConfig, Error, Face};

fn facing() -> Property {
    Property::faces("facing", &[Face::North, Face::South, Face::East, Face::West]).unwrap()
}

fn layout_of(properties: &[Property]) -> Result<PropertyLayout, Error> {
    let mut builder = PropertyLayout::builder("test", CodecConfig::default());
    for property in properties {
        builder.register(property)?;
    }
    builder.build()
}

fn flags(counts: &[usize]) -> Vec<Property> {
    counts
        .iter()
        .enumerate()
        .map(|(i, &n)| Property::int_range(format!("p{i}"), 0..=(n as i32 - 1)).unwrap())
        .collect()
}

#[test]
fn facing_and_lit_form_a_bijection_onto_0_to_7() {
    let layout = layout_of(&[facing(), Property::boolean("lit")]).unwrap();
    assert_eq!(layout.combinations(), 8);

    let mut ids = HashSet::new();
    for facing in [Face::North, Face::South, Face::East, Face::West] {
        for lit in [false, true] {
            let state = layout.with_value(&layout.default_state(), "facing", facing).unwrap();
            let state = layout.with_value(&state, "lit", lit).unwrap();
            let id = layout.encode(&state);
            assert!(id.get() < 8);
            assert_eq!(layout.decode(id), state);
            assert!(ids.insert(id), "{id} produced twice");
        }
    }
    assert_eq!(ids.len(), 8);

    let east_lit = layout.with_value(&layout.default_state(), "facing", Face::East).unwrap();
    let east_lit = layout.with_value(&east_lit, "lit", true).unwrap();
    let decoded = layout.decode(layout.encode(&east_lit));
    assert_eq!(layout.value(&decoded, "facing"), Some(&PropertyValue::Face(Face::East)));
    assert_eq!(layout.value(&decoded, "lit"), Some(&PropertyValue::Bool(true)));
}

#[test]
fn round_trip_over_every_valid_state() {
    let cases: [&[usize]; 5] = [&[2, 2, 2, 2], &[3, 5], &[16], &[2, 3, 2], &[]];
    for counts in cases {
        let layout = layout_of(&flags(counts)).unwrap();
        let states: Vec<_> = layout.states().collect();
        assert_eq!(states.len(), layout.combinations());
        for (i, state) in states.iter().enumerate() {
            assert_eq!(layout.encode(state), CompactId::new(i as u16));
            assert_eq!(&layout.decode(layout.encode(state)), state);
        }
    }
}

#[test]
fn decode_is_total_over_four_bits() {
    let layout = layout_of(&[facing(), Property::int_range("level", 0..=2).unwrap()]).unwrap();
    assert_eq!(layout.combinations(), 12);
    for raw in 0..16 {
        let state = layout.decode(CompactId::new(raw));
        assert_eq!(state.len(), 2);
        for (property, value) in layout.properties().iter().zip(state.values()) {
            assert!(property.allows(value));
        }
    }
}

#[test]
fn decode_masks_wide_input() {
    let layout = layout_of(&[facing(), Property::boolean("lit")]).unwrap();
    for raw in 0..16u16 {
        assert_eq!(
            layout.decode(CompactId::new(raw | 0xFFF0)),
            layout.decode(CompactId::new(raw))
        );
    }
}

#[test]
fn fifth_property_exceeds_capacity() {
    let err = layout_of(&flags(&[1, 1, 1, 1, 1])).unwrap_err();
    assert!(matches!(err, Error::CapacityExceeded { max: 4, .. }));
}

#[test]
fn sixteen_combinations_fit() {
    let layout = layout_of(&flags(&[2, 2, 2, 2])).unwrap();
    assert_eq!(layout.combinations(), 16);
}

#[test]
fn twenty_four_combinations_overflow() {
    let err = layout_of(&flags(&[2, 2, 2, 3])).unwrap_err();
    assert_eq!(
        err,
        Error::CombinatorialOverflow {
            block: "test".to_string(),
            combinations: 24,
            capacity: 16,
        }
    );
}

#[test]
fn encode_stays_in_range_for_foreign_states() {
    let layout = layout_of(&flags(&[2, 2, 2, 2])).unwrap();
    let other = layout_of(&flags(&[16])).unwrap();
    for state in other.states() {
        assert!(layout.encode(&state).get() < 16);
    }
}

#[test]
fn unknown_value_encodes_as_index_zero() {
    let lamp = layout_of(&[facing(), Property::boolean("lit")]).unwrap();
    let omni = layout_of(&[
        Property::faces("facing", &Face::ALL).unwrap(),
        Property::boolean("lit"),
    ])
    .unwrap();

    let up_lit = omni.with_value(&omni.default_state(), "facing", Face::Up).unwrap();
    let up_lit = omni.with_value(&up_lit, "lit", true).unwrap();

    // facing=up is not a lamp value and falls back to north; lit survives.
    let id = lamp.encode(&up_lit);
    let decoded = lamp.decode(id);
    assert_eq!(lamp.value(&decoded, "facing"), Some(&PropertyValue::Face(Face::North)));
    assert_eq!(lamp.value(&decoded, "lit"), Some(&PropertyValue::Bool(true)));
}

#[test]
fn registration_snapshots_values() {
    let mut level = Property::int_range("level", 0..=1).unwrap();
    let mut builder = PropertyLayout::builder("tank", CodecConfig::default());
    builder.register(&level).unwrap();
    level.allow(PropertyValue::Int(2)).unwrap();
    let layout = builder.build().unwrap();

    assert_eq!(level.len(), 3);
    assert_eq!(layout.properties()[0].len(), 2);
    assert_eq!(layout.combinations(), 2);
}

#[test]
fn wider_id_field_raises_the_ceiling() {
    let config = CodecConfig::default().with_id_bits(8).with_max_properties(6);
    let mut builder = PropertyLayout::builder("panel", config);
    for property in flags(&[2, 2, 2, 2, 3, 5]) {
        builder.register(&property).unwrap();
    }
    let layout = builder.build().unwrap();
    assert_eq!(layout.combinations(), 240);
    for state in layout.states() {
        assert_eq!(layout.decode(layout.encode(&state)), state);
    }
}

#[test]
fn registry_surfaces_configuration_errors() {
    let registry = BlockRegistry::default();
    let def = BlockDef::new("console")
        .with_orientation(Horizontal4::new())
        .with_property(Property::boolean("a"))
        .with_property(Property::boolean("b"))
        .with_property(Property::boolean("c"));
    assert!(matches!(
        registry.resolve(&def),
        Err(Error::CombinatorialOverflow { combinations: 32, .. })
    ));

    let def = BlockDef::new("console")
        .with_orientation(Horizontal4::new())
        .with_property(Property::boolean("a"))
        .with_property(Property::boolean("b"))
        .with_property(Property::boolean("c"))
        .with_property(Property::boolean("d"));
    assert!(matches!(
        registry.resolve(&def),
        Err(Error::CapacityExceeded { .. })
    ));
}
