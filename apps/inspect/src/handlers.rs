use anyhow::Result;
use fcase::prelude::*;
use strum::IntoEnumIterator;

pub(crate) fn show(archetype: Archetype, abl_uref: Option<f64>, json: bool) -> Result<()> {
    let abl = abl_uref.map_or_else(AblConditions::default, |u_ref| {
        AblConditions::default().with_reference_velocity(u_ref)
    });
    let record = BoundaryCondition::archetype(archetype, &abl).build()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&record)?);
    } else {
        print_record(&record);
    }
    Ok(())
}

pub(crate) fn list() {
    for archetype in Archetype::iter() {
        let name: &'static str = archetype.into();
        println!("{name:<28}{}", archetype.title());
    }
}

pub(crate) fn case(case: &CaseFile, json: bool) -> Result<()> {
    let registry = case.registry()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&registry)?);
        return Ok(());
    }

    for (name, record) in &registry {
        println!("[{name}]");
        print_record(record);
        println!();
    }
    Ok(())
}

fn print_record(record: &BoundaryCondition) {
    println!("{record}");
    for (slot, field) in record.fields() {
        println!("  {:<8}{field}", slot.name());
    }
}
