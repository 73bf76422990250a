//! Stock block definitions.

use glam::DVec3;
use tessera_block::{BlockDef, Fixed, Half, Horizontal4, ModelSpec, Omni6, Pillar, Property};

pub fn stock() -> Vec<BlockDef> {
    vec![
        BlockDef::new("stone")
            .with_orientation(Fixed)
            .with_model(ModelSpec::new("cube", &["stone"])),
        BlockDef::new("lamp")
            .with_orientation(Horizontal4::new())
            .with_property(Property::boolean("lit"))
            .with_model(ModelSpec::new("lamp", &["lamp_base", "lamp_shade"])),
        BlockDef::new("piston")
            .with_orientation(Omni6::new())
            .with_property(Property::boolean("extended"))
            .with_model(ModelSpec::new("piston", &["piston_side", "piston_top"])),
        BlockDef::new("observer")
            .with_orientation(Omni6::toward_placer())
            .with_property(Property::boolean("powered"))
            .with_model(ModelSpec::new("observer", &["observer_front", "observer_back"])),
        BlockDef::new("log")
            .with_orientation(Pillar::new())
            .with_model(ModelSpec::new("column", &["log_side", "log_end"])),
        BlockDef::new("slab")
            .with_orientation(Half::new())
            .with_model(ModelSpec::new("slab", &["stone"])),
        BlockDef::new("sign")
            .with_orientation(Horizontal4::new())
            .with_model(
                ModelSpec::new("sign", &["planks"]).with_origin(DVec3::new(0.0, 0.0, 0.4375)),
            ),
    ]
}
