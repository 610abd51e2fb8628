//! Record behavior across the public facade: accessor identity, layout
//! interchangeability, and schema descriptors.

use std::mem::size_of;

use tessera::{
    field_keys, keyed_record, Aligned, FieldDef, LayoutKind, LayoutPolicy, Native, Record, Schema,
    SchemaError, SLOT_ALIGN,
};

field_keys! {
    /// Mass density at the cell center.
    pub Density,
    pub Momentum,
    pub Weighting,
}

keyed_record! {
    /// Macroparticle attributes for the push kernel.
    pub struct Particle {
        density: Density => f32,
        momentum: Momentum => [f32; 3],
        weighting: Weighting => f64,
    }
}

#[test]
fn accessors_alias_identical_storage() {
    let mut particle = Particle::<Native>::default();

    *particle.get_mut::<Momentum>() = [0.1, 0.2, 0.3];
    assert_eq!(*particle.at::<1>(), [0.1, 0.2, 0.3]);

    *particle.at_mut::<2>() = 1e6;
    assert_eq!(*particle.get::<Weighting>(), 1e6);

    assert!(std::ptr::eq(particle.at::<0>(), particle.get::<Density>()));
    assert!(std::ptr::eq(particle.at::<1>(), particle.get::<Momentum>()));
    assert!(std::ptr::eq(particle.at::<2>(), particle.get::<Weighting>()));
}

#[test]
fn identity_holds_under_aligned_layout() {
    let mut particle = Particle::<Aligned>::default();

    *particle.get_mut::<Density>() = 2.5;
    assert_eq!(*particle.at::<0>(), 2.5);
    assert!(std::ptr::eq(particle.at::<2>(), particle.get::<Weighting>()));
}

fn advance<L: LayoutPolicy>(particle: &mut Particle<L>, dt: f32) {
    let momentum = particle.get_mut::<Momentum>();
    for component in momentum.iter_mut() {
        *component += dt;
    }
}

#[test]
fn layouts_are_logically_interchangeable() {
    let mut native = Particle::<Native>::default();
    let mut aligned = Particle::<Aligned>::default();

    advance(&mut native, 0.5);
    advance(&mut aligned, 0.5);

    assert_eq!(*native.get::<Momentum>(), *aligned.get::<Momentum>());
    assert_eq!(*native.at::<1>(), *aligned.at::<1>());
}

#[test]
fn aligned_footprint_is_padded_per_slot() {
    let native = size_of::<Particle<Native>>();
    let aligned = size_of::<Particle<Aligned>>();

    assert!(aligned >= native);
    assert_eq!(aligned % SLOT_ALIGN, 0);

    let schema = Particle::<Native>::schema();
    assert_eq!(native, schema.footprint(LayoutKind::Native));
    assert_eq!(aligned, schema.footprint(LayoutKind::Aligned));
}

#[test]
fn schema_reflects_elaborated_shape() {
    let schema = Particle::<Native>::schema();

    assert_eq!(Particle::<Native>::DIM, 3);
    assert_eq!(schema.dim(), 3);
    assert_eq!(schema.position_of("Momentum"), Ok(1));
    assert_eq!(schema.at(0).unwrap().name(), "Density");
    assert!(matches!(
        schema.position_of("Charge"),
        Err(SchemaError::UnknownKey { .. })
    ));
    assert!(matches!(
        schema.at(3),
        Err(SchemaError::PositionOutOfRange { position: 3, dim: 3 })
    ));
}

#[test]
fn hand_assembled_schema_rejects_duplicates() {
    let result = Schema::new([
        FieldDef::of::<f32>("Density"),
        FieldDef::of::<[f32; 3]>("Momentum"),
        FieldDef::of::<f64>("Density"),
    ]);

    assert_eq!(
        result.unwrap_err(),
        SchemaError::DuplicateKey {
            name: "Density".to_string()
        }
    );
}

#[test]
fn schema_descriptor_dumps_to_json() {
    let schema = Particle::<Native>::schema();
    let json = serde_json::to_value(&schema).unwrap();

    assert_eq!(json["fields"][1]["name"], "Momentum");
    assert_eq!(json["fields"][1]["size"], 12);
}
